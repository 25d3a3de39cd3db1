pub mod append;
pub mod query;
pub mod store;

pub use store::PriceStore;
