// Domain model for the booking workflow
use serde::Serialize;

// A booking as the user requests it, pre-persistence. This is the exact
// JSON body of the creation call; field order matches the wire contract.
// Shoe sizes are whatever the form coerced them to, including a NaN
// sentinel for non-numeric input (serialized as null).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingRequest {
    pub when: String,
    pub lanes: u32,
    pub people: u32,
    pub shoes: Vec<f64>,
}

// A booking the service has confirmed and persisted. Produced only by
// normalizing the raw wire response; never constructed from user input.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingResponse {
    pub when: String,
    pub lanes: u32,
    pub people: u32,
    pub shoes: Vec<f64>,
    pub price: f64,
    pub id: String,
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_to_wire_body() {
        let request = BookingRequest {
            when: "2024-05-01T18:00".to_string(),
            lanes: 1,
            people: 2,
            shoes: vec![42.0, 39.0],
        };

        let body = serde_json::to_string(&request).unwrap();
        assert_eq!(
            body,
            r#"{"when":"2024-05-01T18:00","lanes":1,"people":2,"shoes":[42.0,39.0]}"#
        );
    }

    #[test]
    fn test_nan_shoe_size_serializes_as_null() {
        let request = BookingRequest {
            when: "2024-05-01T18:00".to_string(),
            lanes: 1,
            people: 2,
            shoes: vec![42.0, f64::NAN],
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["shoes"][0], 42.0);
        assert!(body["shoes"][1].is_null());
    }
}
