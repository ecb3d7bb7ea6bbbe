pub mod csv_export;
pub mod report;
pub mod yahoo;

pub use yahoo::YahooClient;
