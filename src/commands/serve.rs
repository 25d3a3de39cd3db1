use crate::server;
use crate::services::PriceStore;
use crate::utils::get_data_file;
use std::path::PathBuf;

pub async fn run(port: u16, data: Option<PathBuf>) {
    let data_file = data.unwrap_or_else(get_data_file);
    println!("🚀 Starting priceboard server on port {}", port);
    println!("📁 Price data file: {}", data_file.display());

    let store = PriceStore::new(data_file);
    if let Err(e) = server::serve(store, port).await {
        eprintln!("❌ Server error: {}", e);
        std::process::exit(1);
    }
}
