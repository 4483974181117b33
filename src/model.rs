// src/model.rs
use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

/// Currency code → amount. BTreeMap keeps key order stable across renders.
pub type PriceMap = BTreeMap<String, f64>;

/// Decoder outcome: the usable records plus one entry per skipped record.
#[derive(Debug)]
pub struct Decoded<T> {
    pub records: Vec<T>,
    pub skipped: Vec<crate::error::DecodeError>,
}

/// Fields obtainable from the CSV source alone.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvRecord {
    pub brand: String,
    pub release_date: NaiveDate,
}

/// Fields obtainable from the XML source alone.
///
/// `prices` holds the primary price under its own currency code plus any
/// additional `<prices>` entries; `price_usd` is the primary price value.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlRecord {
    pub vehicle_type: String,
    pub price_usd: f64,
    pub prices: PriceMap,
}

/// 結合後の車両レコード。CSV 側と XML 側のフィールドは独立に欠損し得る。
///
/// Serialized field names follow the entity attributes (`releaseDate`,
/// `type`, ...); absent fields are omitted in both JSON and XML output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Car {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    #[serde(rename = "releaseDate", skip_serializing_if = "Option::is_none")]
    pub release_date: Option<NaiveDate>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,

    /// Present in the schema but never populated by any decoder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Single-entry `{"USD" → value}` view of the primary price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceMap>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prices: Option<PriceMap>,
}

impl Car {
    /// USD price used by the price filter and the price sort.
    pub fn usd_price(&self) -> Option<f64> {
        self.prices.as_ref().and_then(|p| p.get("USD")).copied()
    }

    /// Short label for diagnostics (brand if known, else the type).
    pub fn label(&self) -> &str {
        self.brand
            .as_deref()
            .or(self.vehicle_type.as_deref())
            .unwrap_or("<unknown>")
    }
}
