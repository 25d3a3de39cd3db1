use crate::models::PriceRecord;

/// Filter the dataset by symbol and optional year, most recent first.
///
/// The symbol match is exact and case-sensitive. When a year is supplied the
/// filters combine: a record survives only if its symbol matches AND its
/// 4-digit year string equals the supplied value. Records are sorted by date
/// descending; the relative order of equal dates is unspecified.
pub fn filter_prices(
    dataset: &[PriceRecord],
    symbol: &str,
    year: Option<&str>,
) -> Vec<PriceRecord> {
    let mut matches: Vec<PriceRecord> = dataset
        .iter()
        .filter(|record| record.symbol == symbol)
        .filter(|record| match year {
            Some(year) => record.date.format("%Y").to_string() == year,
            None => true,
        })
        .cloned()
        .collect();

    matches.sort_by(|a, b| b.date.cmp(&a.date));
    matches
}
