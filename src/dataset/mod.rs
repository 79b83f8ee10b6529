pub mod table;
pub mod market_data;

pub use table::{Dataset, DatasetPreview, DatasetSpec};
pub use market_data::MarketData;
