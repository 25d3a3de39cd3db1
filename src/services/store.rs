use crate::constants::{STORAGE_DATE_FORMAT, STORE_HEADER};
use crate::error::{AppError, Result};
use crate::models::PriceRecord;
use chrono::NaiveDate;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Flat-file price store.
///
/// The file is the sole persistent state: a header row followed by one row
/// per record in storage order `Date,Symbol,Close,Open,High,Low`. Every
/// operation reads or appends the file directly; nothing is cached between
/// requests. The file itself does not enforce key uniqueness; the append
/// engine checks for duplicates before anything is written.
pub struct PriceStore {
    path: PathBuf,
}

impl PriceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full dataset.
    ///
    /// Any malformed row (bad date, non-numeric or non-finite price, wrong
    /// column count, wrong header) fails the whole load; a partial dataset
    /// is never returned.
    pub fn load(&self) -> Result<Vec<PriceRecord>> {
        let mut reader = csv::Reader::from_path(&self.path).map_err(|e| {
            AppError::StoreCorrupt(format!("cannot open {}: {}", self.path.display(), e))
        })?;

        let headers = reader
            .headers()
            .map_err(|e| AppError::StoreCorrupt(format!("cannot read header: {}", e)))?;
        if !headers.iter().eq(STORE_HEADER) {
            return Err(AppError::StoreCorrupt(format!(
                "unexpected header: {:?}",
                headers
            )));
        }

        let mut records = Vec::new();
        for (idx, row) in reader.records().enumerate() {
            let line = idx + 2; // header is line 1
            let row =
                row.map_err(|e| AppError::StoreCorrupt(format!("line {}: {}", line, e)))?;
            if row.len() != STORE_HEADER.len() {
                return Err(AppError::StoreCorrupt(format!(
                    "line {}: expected {} columns, found {}",
                    line,
                    STORE_HEADER.len(),
                    row.len()
                )));
            }

            let date = NaiveDate::parse_from_str(&row[0], STORAGE_DATE_FORMAT).map_err(|e| {
                AppError::StoreCorrupt(format!("line {}: bad date {:?}: {}", line, &row[0], e))
            })?;
            let symbol = row[1].to_string();
            let close = parse_price(&row[2], line, "Close")?;
            let open = parse_price(&row[3], line, "Open")?;
            let high = parse_price(&row[4], line, "High")?;
            let low = parse_price(&row[5], line, "Low")?;

            records.push(PriceRecord {
                date,
                symbol,
                open,
                high,
                low,
                close,
            });
        }

        Ok(records)
    }

    /// Append records to the flat file as one buffered write.
    ///
    /// Rows are written in storage order with `YYYY-MM-DD` dates. Duplicate
    /// checking happens in the append engine before this is called.
    pub fn append(&self, records: &[PriceRecord]) -> Result<()> {
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        for record in records {
            writer.write_record(&[
                record.date.format(STORAGE_DATE_FORMAT).to_string(),
                record.symbol.clone(),
                record.close.to_string(),
                record.open.to_string(),
                record.high.to_string(),
                record.low.to_string(),
            ])?;
        }

        writer.flush()?;
        Ok(())
    }
}

fn parse_price(raw: &str, line: usize, column: &str) -> Result<f64> {
    let value: f64 = raw.trim().parse().map_err(|_| {
        AppError::StoreCorrupt(format!(
            "line {}: {} is not a number: {:?}",
            line, column, raw
        ))
    })?;
    if !value.is_finite() {
        return Err(AppError::StoreCorrupt(format!(
            "line {}: {} is not finite: {:?}",
            line, column, raw
        )));
    }
    Ok(value)
}
