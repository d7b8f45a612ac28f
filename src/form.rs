// Booking form state and validation
use std::ops::RangeInclusive;

use thiserror::Error;

use crate::booking::BookingRequest;

// Validation failures in rule order; the display strings are the exact
// user-facing messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please choose both date and time.")]
    MissingDateTime,

    #[error("Each player must have a shoe size filled in.")]
    IncompleteShoeSizes,

    #[error("Max 4 players per lane. Increase lanes or reduce players.")]
    TooManyPlayersPerLane,
}

pub const MAX_PLAYERS_PER_LANE: u32 = 4;

// The widget's fixed select ranges
pub const PEOPLE_CHOICES: RangeInclusive<u32> = 1..=8;
pub const LANE_CHOICES: RangeInclusive<u32> = 1..=2;

// Raw field values as the widget collects them. Shoe sizes stay strings
// until validation so partially typed input survives re-renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingForm {
    pub date: String,
    pub time: String,
    pub people: u32,
    pub lanes: u32,
    pub shoe_sizes: Vec<String>,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingForm {
    // One person on one lane with a single blank shoe entry.
    pub fn new() -> Self {
        Self {
            date: String::new(),
            time: String::new(),
            people: 1,
            lanes: 1,
            shoe_sizes: vec![String::new()],
        }
    }

    // Changing the player count resizes the shoe list to match, truncating
    // or padding with blanks; entries for players that remain are kept.
    pub fn set_people(&mut self, people: u32) {
        let people = people.max(1);
        self.people = people;
        self.shoe_sizes.resize(people as usize, String::new());
    }

    pub fn set_shoe_size(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.shoe_sizes.get_mut(index) {
            *slot = value.into();
        }
    }

    // Pure check of the current field values; rules apply in order and the
    // first failure wins.
    pub fn validate(&self) -> Result<BookingRequest, ValidationError> {
        if self.date.is_empty() || self.time.is_empty() {
            return Err(ValidationError::MissingDateTime);
        }

        if self.shoe_sizes.len() != self.people as usize
            || self.shoe_sizes.iter().any(|size| size.trim().is_empty())
        {
            return Err(ValidationError::IncompleteShoeSizes);
        }

        if self.people > self.lanes * MAX_PLAYERS_PER_LANE {
            return Err(ValidationError::TooManyPlayersPerLane);
        }

        // Sizes are only checked for non-blankness; anything non-numeric
        // coerces to the NaN sentinel.
        let shoes = self
            .shoe_sizes
            .iter()
            .map(|size| size.trim().parse::<f64>().unwrap_or(f64::NAN))
            .collect();

        Ok(BookingRequest {
            when: format!("{}T{}", self.date, self.time),
            lanes: self.lanes,
            people: self.people,
            shoes,
        })
    }
}
