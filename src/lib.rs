// src/lib.rs
pub mod app;
pub mod cli;
pub mod config;
pub mod csv_source;
pub mod error;
pub mod filter;
pub mod merge;
pub mod model;
pub mod output;
pub mod sort;
pub mod xml_source;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
