//! Production data source for the USAspending v2 API.

mod client;

pub use client::UsaSpendingClient;
