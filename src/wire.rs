// Raw response shapes for the booking service, as the wire delivers them
use serde::Deserialize;

use crate::api::BookingSubmitError;
use crate::booking::BookingResponse;

// Body of the key-issuing call. The service also advertises an `apiKey`
// field in its response type; only `key` is ever consulted.
#[derive(Debug, Deserialize)]
pub struct RawKeyResponse {
    pub key: Option<String>,
    #[serde(rename = "apiKey")]
    pub api_key: Option<String>,
}

// Body of the booking-creation call.
#[derive(Debug, Deserialize)]
pub struct RawBookingResponse {
    pub success: bool,
    #[serde(rename = "bookingDetails")]
    pub booking_details: Option<RawBookingDetails>,
}

#[derive(Debug, Deserialize)]
pub struct RawBookingDetails {
    pub when: String,
    pub lanes: u32,
    pub people: u32,
    pub shoes: Vec<f64>,
    pub price: f64,
    #[serde(rename = "bookingId")]
    pub booking_id: String,
    pub active: bool,
}

impl RawBookingResponse {
    // A booking either fully exists (success flag plus details) or was not
    // created at all; there is no partial state.
    pub fn into_booking(self) -> Result<BookingResponse, BookingSubmitError> {
        if !self.success {
            return Err(BookingSubmitError::Rejected);
        }

        match self.booking_details {
            Some(details) => Ok(details.into()),
            None => Err(BookingSubmitError::MissingDetails),
        }
    }
}

impl From<RawBookingDetails> for BookingResponse {
    fn from(details: RawBookingDetails) -> Self {
        BookingResponse {
            when: details.when,
            lanes: details.lanes,
            people: details.people,
            shoes: details.shoes,
            price: details.price,
            id: details.booking_id,
            active: details.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    const CONFIRMED_BODY: &str = r#"{
        "success": true,
        "bookingDetails": {
            "when": "2024-05-01T18:00",
            "lanes": 1,
            "people": 2,
            "shoes": [42, 39],
            "price": 340,
            "bookingId": "B123",
            "active": true
        }
    }"#;

    #[test]
    fn test_normalizes_booking_id_to_id() {
        let raw: RawBookingResponse = serde_json::from_str(CONFIRMED_BODY).unwrap();
        let booking = assert_ok!(raw.into_booking());

        assert_eq!(booking.id, "B123");
        assert_eq!(booking.when, "2024-05-01T18:00");
        assert_eq!(booking.lanes, 1);
        assert_eq!(booking.people, 2);
        assert_eq!(booking.shoes, vec![42.0, 39.0]);
        assert_eq!(booking.price, 340.0);
        assert!(booking.active);
    }

    #[test]
    fn test_unsuccessful_response_is_rejected() {
        let raw: RawBookingResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();

        let err = assert_err!(raw.into_booking());
        assert!(matches!(err, BookingSubmitError::Rejected));
    }

    #[test]
    fn test_missing_details_is_an_error() {
        let raw: RawBookingResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();

        let err = assert_err!(raw.into_booking());
        assert!(matches!(err, BookingSubmitError::MissingDetails));
    }

    #[test]
    fn test_key_response_with_only_secondary_field() {
        // The secondary `apiKey` field parses but is not a usable key.
        let raw: RawKeyResponse =
            serde_json::from_str(r#"{"apiKey": "secondary-key"}"#).unwrap();

        assert!(raw.key.is_none());
        assert_eq!(raw.api_key.as_deref(), Some("secondary-key"));
    }
}
