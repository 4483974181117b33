// src/merge.rs
use crate::model::{Car, CsvRecord, PriceMap, XmlRecord};

/// Zip the two per-source sequences into unified records.
///
/// The join key is the position: record *i* of the CSV pairs with record *i*
/// of the XML. Surplus records in the longer input are dropped silently —
/// this mirrors the source data contract and is deliberate, not an error.
pub fn merge(csv: Vec<CsvRecord>, xml: Vec<XmlRecord>) -> Vec<Car> {
    csv.into_iter()
        .zip(xml)
        .map(|(c, x)| Car {
            brand: Some(c.brand),
            release_date: Some(c.release_date),
            vehicle_type: Some(x.vehicle_type),
            model: None,
            price: Some(PriceMap::from([(String::from("USD"), x.price_usd)])),
            prices: Some(x.prices),
        })
        .collect()
}
