use crate::constants::DISPLAY_DATE_FORMAT;
use crate::error::{AppError, Result};
use crate::models::{InputRecord, PriceRecord};
use chrono::NaiveDate;
use std::collections::HashSet;

/// Validate an inbound batch against the existing dataset and convert it to
/// storage records.
///
/// All records in one batch share the single `symbol` from the request path.
/// The duplicate check is all-or-nothing: if any incoming (date, symbol) key
/// already exists in the dataset the whole batch is rejected and nothing is
/// appended.
pub fn check_batch(
    dataset: &[PriceRecord],
    symbol: &str,
    incoming: &[InputRecord],
) -> Result<Vec<PriceRecord>> {
    let mut converted = Vec::with_capacity(incoming.len());
    for record in incoming {
        // Pattern-valid but non-existent calendar dates (e.g. 31/02) fail here
        let date = NaiveDate::parse_from_str(&record.date, DISPLAY_DATE_FORMAT).map_err(|_| {
            AppError::InputShape(format!("{:?} is not a valid calendar date", record.date))
        })?;
        converted.push(PriceRecord {
            date,
            symbol: symbol.to_string(),
            open: record.open,
            high: record.high,
            low: record.low,
            close: record.close,
        });
    }

    let existing: HashSet<NaiveDate> = dataset
        .iter()
        .filter(|record| record.symbol == symbol)
        .map(|record| record.date)
        .collect();

    if converted.iter().any(|record| existing.contains(&record.date)) {
        return Err(AppError::Duplicate);
    }

    Ok(converted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(date: &str) -> InputRecord {
        InputRecord {
            date: date.to_string(),
            open: 99.0,
            close: 102.0,
            high: 103.0,
            low: 98.0,
        }
    }

    fn existing_record(date: &str, symbol: &str) -> PriceRecord {
        PriceRecord {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            symbol: symbol.to_string(),
            open: 98.0,
            high: 101.0,
            low: 97.0,
            close: 100.0,
        }
    }

    #[test]
    fn accepts_new_records() {
        let dataset = vec![existing_record("2023-04-05", "TCS")];
        let records = check_batch(&dataset, "TCS", &[input("06/04/2023")]).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2023, 4, 6).unwrap());
        assert_eq!(records[0].symbol, "TCS");
        assert_eq!(records[0].close, 102.0);
    }

    #[test]
    fn rejects_colliding_record() {
        let dataset = vec![existing_record("2023-04-05", "TCS")];
        let result = check_batch(&dataset, "TCS", &[input("05/04/2023")]);
        assert!(matches!(result, Err(AppError::Duplicate)));
    }

    #[test]
    fn one_collision_rejects_whole_batch() {
        let dataset = vec![existing_record("2023-04-05", "TCS")];
        let batch = [input("06/04/2023"), input("05/04/2023"), input("07/04/2023")];
        let result = check_batch(&dataset, "TCS", &batch);
        assert!(matches!(result, Err(AppError::Duplicate)));
    }

    #[test]
    fn same_date_other_symbol_is_not_a_collision() {
        let dataset = vec![existing_record("2023-04-05", "INFY")];
        let records = check_batch(&dataset, "TCS", &[input("05/04/2023")]).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn rejects_impossible_calendar_date() {
        let result = check_batch(&[], "TCS", &[input("31/02/2023")]);
        assert!(matches!(result, Err(AppError::InputShape(_))));
    }

    #[test]
    fn empty_batch_is_accepted() {
        let dataset = vec![existing_record("2023-04-05", "TCS")];
        let records = check_batch(&dataset, "TCS", &[]).unwrap();
        assert!(records.is_empty());
    }
}
