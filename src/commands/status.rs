use crate::services::PriceStore;
use crate::utils::get_data_file;
use std::collections::BTreeMap;
use std::path::PathBuf;

pub fn run(data: Option<PathBuf>) {
    let data_file = data.unwrap_or_else(get_data_file);
    println!("📁 Price data file: {}", data_file.display());

    let store = PriceStore::new(data_file);
    let dataset = match store.load() {
        Ok(dataset) => dataset,
        Err(e) => {
            eprintln!("❌ Failed to load store: {}", e);
            std::process::exit(1);
        }
    };

    if dataset.is_empty() {
        println!("⚠️  Store is empty");
        return;
    }

    let mut per_symbol: BTreeMap<&str, usize> = BTreeMap::new();
    for record in &dataset {
        *per_symbol.entry(record.symbol.as_str()).or_insert(0) += 1;
    }

    let first = dataset.iter().map(|r| r.date).min();
    let last = dataset.iter().map(|r| r.date).max();
    if let (Some(first), Some(last)) = (first, last) {
        println!("📅 Date range: {} to {}", first, last);
    }

    println!("📊 {} records across {} symbols", dataset.len(), per_symbol.len());
    for (symbol, count) in &per_symbol {
        println!("   📈 {}: {} records", symbol, count);
    }
}
