// src/config.rs
use std::path::PathBuf;

use crate::cli::{Args, OutputFormat, SortKey};
use crate::filter::FilterCriteria;

/// Resolved runtime configuration. Built once from the parsed arguments;
/// the pipeline stages consume it read-only.
#[derive(Debug, Clone)]
pub struct Config {
    pub csv_path: PathBuf,
    pub xml_path: PathBuf,
    pub sort: Option<SortKey>,
    pub filters: FilterCriteria,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

impl Config {
    pub fn from_args(args: Args) -> Self {
        Self {
            csv_path: args.csv,
            xml_path: args.xml,
            sort: args.sort.as_deref().and_then(SortKey::from_token),
            filters: FilterCriteria {
                brand: args.filter_brand,
                price_usd: args.filter_price,
                date: args.filter_date,
            },
            format: args.format,
            output: args.output,
        }
    }
}
