pub mod usaspending;
