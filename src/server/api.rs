use crate::error::{AppError, Result};
use crate::models::{InputRecord, PriceRecord};
use crate::server::AppState;
use crate::services::{append, query};
use crate::utils::{format_display_date, is_valid_year};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// One price record in the GET response, external `DD/MM/YYYY` date format.
/// The closing price is exposed under the legacy field name `closed`.
#[derive(Debug, Serialize)]
pub struct PriceResponse {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub closed: f64,
}

impl From<&PriceRecord> for PriceResponse {
    fn from(record: &PriceRecord) -> Self {
        Self {
            date: format_display_date(record.date),
            open: record.open,
            high: record.high,
            low: record.low,
            closed: record.close,
        }
    }
}

/// Query parameters for GET /nifty/stocks/{symbol}
#[derive(Debug, Deserialize)]
pub struct PriceQuery {
    /// Optional 4-digit year filter (1000-3999)
    pub year: Option<String>,
}

/// Response body for a successful append, echoing the accepted batch.
#[derive(Debug, Serialize)]
pub struct AppendResponse {
    pub message: String,
    pub payload: Vec<InputRecord>,
}

/// GET /nifty/stocks/{symbol} - daily OHLC records, most recent first
///
/// Examples:
/// - /nifty/stocks/TCS
/// - /nifty/stocks/TCS?year=2023
#[instrument(skip(state))]
pub async fn get_prices_handler(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    Query(params): Query<PriceQuery>,
) -> Result<Json<Vec<PriceResponse>>> {
    debug!(%symbol, year = ?params.year, "Received price query");

    if let Some(year) = &params.year {
        if !is_valid_year(year) {
            warn!(%year, "Rejected year parameter");
            return Err(AppError::BadYear);
        }
    }

    let dataset = state.store.load()?;
    let matches = query::filter_prices(&dataset, &symbol, params.year.as_deref());

    // Baseline policy: an empty result is a client error, not an empty body
    if matches.is_empty() {
        return Err(AppError::EmptyResult);
    }

    info!(%symbol, count = matches.len(), "Returning price records");
    Ok(Json(matches.iter().map(PriceResponse::from).collect()))
}

/// POST /nifty/stocks/{symbol} - append a batch of daily records
///
/// The batch is shape-checked first, then validated against the current
/// dataset for (date, symbol) collisions. A single collision rejects the
/// entire batch with 409 and nothing is written.
#[instrument(skip(state, payload))]
pub async fn post_prices_handler(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<AppendResponse>> {
    let batch = validate_batch(payload)?;
    debug!(%symbol, count = batch.len(), "Received append batch");

    // Hold the lock across load + check + append so concurrent posts cannot
    // both pass the duplicate check against a stale read.
    let _guard = state.append_lock.lock().await;

    let dataset = state.store.load()?;
    let records = append::check_batch(&dataset, &symbol, &batch)?;
    state.store.append(&records)?;

    info!(%symbol, count = records.len(), "Appended price records");
    Ok(Json(AppendResponse {
        message: "updated data".to_string(),
        payload: batch,
    }))
}

/// GET /health - liveness check
pub async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Structural schema check for the inbound batch.
///
/// Rejects wrong types, missing fields, unknown fields, and dates that do
/// not match the DD/MM/YYYY pattern (day 01-31, month 01-12, 4-digit year).
/// Runs before the append engine sees the batch.
fn validate_batch(payload: serde_json::Value) -> Result<Vec<InputRecord>> {
    let batch: Vec<InputRecord> =
        serde_json::from_value(payload).map_err(|e| AppError::InputShape(e.to_string()))?;

    for record in &batch {
        if !date_pattern_ok(&record.date) {
            return Err(AppError::InputShape(format!(
                "{:?} does not match DD/MM/YYYY",
                record.date
            )));
        }
    }

    Ok(batch)
}

fn date_pattern_ok(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    if bytes.len() != 10 || bytes[2] != b'/' || bytes[5] != b'/' {
        return false;
    }
    if !bytes
        .iter()
        .enumerate()
        .all(|(i, c)| i == 2 || i == 5 || c.is_ascii_digit())
    {
        return false;
    }
    let day: u8 = raw[0..2].parse().unwrap_or(0);
    let month: u8 = raw[3..5].parse().unwrap_or(0);
    (1..=31).contains(&day) && (1..=12).contains(&month)
}
