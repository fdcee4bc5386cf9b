pub mod config;
pub mod error;
pub mod fetch;
pub mod infra;
pub mod metrics;
pub mod model;
pub mod output;
pub mod services;
pub mod states;
