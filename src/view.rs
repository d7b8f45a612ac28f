// Two-view navigation and the confirmation presentation model
use crate::booking::BookingResponse;

// The widget's two screens. The session starts on the booking screen and
// only switches to confirmation automatically after a stored response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Booking,
    Confirmation,
}

pub const EMPTY_FIELD: &str = "-";

// Pre-formatted row values for the confirmation screen. The menu can reach
// this screen without a booking, so every row degrades to a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationSummary {
    pub date: String,
    pub time: String,
    pub players: String,
    pub lanes: String,
    pub booking_no: String,
    pub total: String,
}

impl ConfirmationSummary {
    pub fn from_booking(booking: Option<&BookingResponse>) -> Self {
        let Some(booking) = booking else {
            return Self::placeholder();
        };

        // `when` is date + "T" + time; anything else renders as unknown.
        let (date, time) = match booking.when.split_once('T') {
            Some((date, time)) => (date.to_string(), time.to_string()),
            None => (EMPTY_FIELD.to_string(), EMPTY_FIELD.to_string()),
        };

        Self {
            date,
            time,
            players: booking.people.to_string(),
            lanes: booking.lanes.to_string(),
            booking_no: booking.id.clone(),
            total: format!("{} kr", booking.price),
        }
    }

    fn placeholder() -> Self {
        Self {
            date: EMPTY_FIELD.to_string(),
            time: EMPTY_FIELD.to_string(),
            players: EMPTY_FIELD.to_string(),
            lanes: EMPTY_FIELD.to_string(),
            booking_no: EMPTY_FIELD.to_string(),
            total: EMPTY_FIELD.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn confirmed_booking() -> BookingResponse {
        BookingResponse {
            when: "2024-05-01T18:00".to_string(),
            lanes: 1,
            people: 2,
            shoes: vec![42.0, 39.0],
            price: 340.0,
            id: "B123".to_string(),
            active: true,
        }
    }

    #[test]
    fn test_summary_splits_when_into_date_and_time() {
        let booking = confirmed_booking();
        let summary = ConfirmationSummary::from_booking(Some(&booking));

        assert_eq!(summary.date, "2024-05-01");
        assert_eq!(summary.time, "18:00");
        assert_eq!(summary.players, "2");
        assert_eq!(summary.lanes, "1");
        assert_eq!(summary.booking_no, "B123");
        assert_eq!(summary.total, "340 kr");
    }

    #[test]
    fn test_summary_without_booking_is_all_placeholders() {
        let summary = ConfirmationSummary::from_booking(None);

        assert_eq!(summary.date, EMPTY_FIELD);
        assert_eq!(summary.time, EMPTY_FIELD);
        assert_eq!(summary.players, EMPTY_FIELD);
        assert_eq!(summary.lanes, EMPTY_FIELD);
        assert_eq!(summary.booking_no, EMPTY_FIELD);
        assert_eq!(summary.total, EMPTY_FIELD);
    }

    #[test]
    fn test_when_without_separator_blanks_date_and_time_only() {
        let mut booking = confirmed_booking();
        booking.when = "sometime soon".to_string();

        let summary = ConfirmationSummary::from_booking(Some(&booking));
        assert_eq!(summary.date, EMPTY_FIELD);
        assert_eq!(summary.time, EMPTY_FIELD);
        assert_eq!(summary.booking_no, "B123");
        assert_eq!(summary.total, "340 kr");
    }
}
