//! The canonical validated flight entity.
//!
//! A `FlightRecord` exists only if every field constraint held when the row
//! was validated. Records are immutable once constructed; the database file
//! stores them with keys in declaration order.

use serde::{Deserialize, Serialize};

/// One validated scheduled flight.
///
/// The timestamp fields keep the trimmed input text verbatim; they are not
/// re-formatted on construction or on save/load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    /// Alphanumeric identifier, 2-8 characters
    pub flight_id: String,
    /// Origin airport code, exactly 3 uppercase letters
    pub origin: String,
    /// Destination airport code, exactly 3 uppercase letters
    pub destination: String,
    /// Departure in `YYYY-MM-DD HH:MM` form
    pub departure_datetime: String,
    /// Arrival in `YYYY-MM-DD HH:MM` form, strictly after departure
    pub arrival_datetime: String,
    /// Ticket price, strictly positive
    pub price: f64,
}

impl FlightRecord {
    /// Returns the six fields in input-column order.
    ///
    /// This is the inverse of row validation: feeding these back through the
    /// validator yields the same record.
    pub fn to_fields(&self) -> [String; 6] {
        [
            self.flight_id.clone(),
            self.origin.clone(),
            self.destination.clone(),
            self.departure_datetime.clone(),
            self.arrival_datetime.clone(),
            self.price.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_key_order_matches_data_model() {
        let record = FlightRecord {
            flight_id: "XY12".into(),
            origin: "JFK".into(),
            destination: "LAX".into(),
            departure_datetime: "2024-05-01 10:00".into(),
            arrival_datetime: "2024-05-01 13:30".into(),
            price: 199.99,
        };

        let json = serde_json::to_string(&record).unwrap();
        let keys = ["flight_id", "origin", "destination", "departure_datetime", "arrival_datetime", "price"];

        let mut last = 0;
        for key in keys {
            let pos = json.find(&format!("\"{}\"", key)).unwrap();
            assert!(pos >= last, "key {} out of order", key);
            last = pos;
        }
    }

    #[test]
    fn test_round_trip_preserves_timestamp_text() {
        let record = FlightRecord {
            flight_id: "AB99".into(),
            origin: "RIX".into(),
            destination: "HEL".into(),
            departure_datetime: "2024-01-02 03:04".into(),
            arrival_datetime: "2024-01-02 05:06".into(),
            price: 42.0,
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: FlightRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
