/// Column order of the flat storage file. Note: storage order puts Close
/// before Open, unlike the external OHLC order.
pub const STORE_HEADER: [&str; 6] = ["Date", "Symbol", "Close", "Open", "High", "Low"];

/// Date format used inside the storage file.
pub const STORAGE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Date format used on the wire (requests and responses).
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Default port for the HTTP server.
pub const DEFAULT_PORT: u16 = 8888;

/// Default location of the price data file.
pub const DEFAULT_DATA_FILE: &str = "data/nifty50_all.csv";
