use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One symbol's OHLC prices for one trading day.
///
/// Stored in the flat file as `Date,Symbol,Close,Open,High,Low` with
/// `YYYY-MM-DD` dates. The (date, symbol) pair is the natural key: the
/// append path rejects any batch that collides with an existing pair. No
/// ordering among the four prices is enforced (high need not exceed low).
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRecord {
    pub date: NaiveDate,
    pub symbol: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// One element of an inbound POST batch.
///
/// Field names and the `DD/MM/YYYY` date format follow the external
/// contract. Unknown fields fail deserialization, so a misspelled key
/// rejects the whole batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputRecord {
    #[serde(rename = "Date")]
    pub date: String,

    #[serde(rename = "OPEN")]
    pub open: f64,

    #[serde(rename = "CLOSE")]
    pub close: f64,

    #[serde(rename = "HIGH")]
    pub high: f64,

    #[serde(rename = "LOW")]
    pub low: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_record_accepts_external_field_names() {
        let record: InputRecord = serde_json::from_str(
            r#"{"Date":"05/04/2023","OPEN":98,"CLOSE":100,"HIGH":101,"LOW":97}"#,
        )
        .unwrap();
        assert_eq!(record.date, "05/04/2023");
        assert_eq!(record.open, 98.0);
        assert_eq!(record.close, 100.0);
    }

    #[test]
    fn input_record_rejects_unknown_fields() {
        let result: Result<InputRecord, _> = serde_json::from_str(
            r#"{"Date":"05/04/2023","OPEN":98,"CLOSE":100,"HIGH":101,"LOW":97,"VOLUME":5}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn input_record_rejects_missing_fields() {
        let result: Result<InputRecord, _> =
            serde_json::from_str(r#"{"Date":"05/04/2023","OPEN":98}"#);
        assert!(result.is_err());
    }

    #[test]
    fn input_record_rejects_string_prices() {
        let result: Result<InputRecord, _> = serde_json::from_str(
            r#"{"Date":"05/04/2023","OPEN":"98","CLOSE":100,"HIGH":101,"LOW":97}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn input_record_echoes_external_field_names() {
        let record = InputRecord {
            date: "05/04/2023".to_string(),
            open: 98.0,
            close: 100.0,
            high: 101.0,
            low: 97.0,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["Date"], "05/04/2023");
        assert_eq!(json["OPEN"], 98.0);
        assert_eq!(json["LOW"], 97.0);
    }
}
