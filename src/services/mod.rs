pub mod spending_api;

pub use spending_api::SpendingDataSource;
