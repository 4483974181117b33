// src/xml_source.rs
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::error::DecodeError;
use crate::model::{Decoded, PriceMap, XmlRecord};

// Wire shape of the source document. Fields are optional and price values
// stay textual so one malformed <car> can be skipped without failing the
// whole document; only invalid XML syntax aborts the decode.
#[derive(Debug, Deserialize)]
struct CarsDoc {
    #[serde(default, rename = "car")]
    cars: Vec<CarElem>,
}

#[derive(Debug, Deserialize)]
struct CarElem {
    #[serde(rename = "type")]
    vehicle_type: Option<String>,
    price: Option<PriceElem>,
    prices: Option<PricesElem>,
}

#[derive(Debug, Deserialize)]
struct PriceElem {
    #[serde(rename = "@currency")]
    currency: String,
    #[serde(rename = "$text")]
    value: String,
}

#[derive(Debug, Deserialize)]
struct PricesElem {
    #[serde(default, rename = "price")]
    entries: Vec<PriceElem>,
}

/// Read and decode an XML source file.
pub fn decode_file(path: &Path) -> anyhow::Result<Decoded<XmlRecord>> {
    let content = fs::read_to_string(path)?;
    decode_str(&content).with_context(|| format!("malformed XML in {}", path.display()))
}

/// Decode XML text. Split out from file reading for testability.
pub fn decode_str(content: &str) -> Result<Decoded<XmlRecord>, quick_xml::DeError> {
    let doc: CarsDoc = quick_xml::de::from_str(content)?;

    let mut records = Vec::new();
    let mut skipped = Vec::new();

    for (i, car) in doc.cars.into_iter().enumerate() {
        match build_record(i, car) {
            Ok(record) => records.push(record),
            Err(e) => skipped.push(e),
        }
    }

    Ok(Decoded { records, skipped })
}

fn build_record(index: usize, car: CarElem) -> Result<XmlRecord, DecodeError> {
    let vehicle_type = car
        .vehicle_type
        .ok_or(DecodeError::XmlShape { index, missing: "type" })?;
    let primary = car
        .price
        .ok_or(DecodeError::XmlShape { index, missing: "price" })?;

    let price_usd = parse_amount(index, &primary)?;

    // The primary price enters the map under its own currency code;
    // duplicates keep the last value seen.
    let mut prices = PriceMap::new();
    prices.insert(primary.currency.trim().to_string(), price_usd);
    for entry in car.prices.into_iter().flat_map(|p| p.entries) {
        let amount = parse_amount(index, &entry)?;
        prices.insert(entry.currency.trim().to_string(), amount);
    }

    Ok(XmlRecord { vehicle_type: vehicle_type.trim().to_string(), price_usd, prices })
}

fn parse_amount(index: usize, elem: &PriceElem) -> Result<f64, DecodeError> {
    elem.value.trim().parse().map_err(|_| DecodeError::XmlPrice {
        index,
        value: elem.value.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_CARS: &str = r#"
        <cars>
            <car>
                <type>Sedan</type>
                <price currency="USD">25000</price>
            </car>
            <car>
                <type>SUV</type>
                <price currency="USD">30000</price>
                <prices>
                    <price currency="EUR">27000</price>
                </prices>
            </car>
        </cars>
    "#;

    #[test]
    fn decodes_cars_with_primary_and_extra_prices() {
        let decoded = decode_str(TWO_CARS).expect("valid document");
        assert!(decoded.skipped.is_empty());
        assert_eq!(decoded.records.len(), 2);

        let sedan = &decoded.records[0];
        assert_eq!(sedan.vehicle_type, "Sedan");
        assert_eq!(sedan.price_usd, 25000.0);
        assert_eq!(sedan.prices.get("USD"), Some(&25000.0));

        let suv = &decoded.records[1];
        assert_eq!(suv.prices.get("USD"), Some(&30000.0));
        assert_eq!(suv.prices.get("EUR"), Some(&27000.0));
    }

    #[test]
    fn bad_price_value_skips_only_that_car() {
        let decoded = decode_str(
            r#"<cars>
                <car><type>Sedan</type><price currency="USD">lots</price></car>
                <car><type>SUV</type><price currency="USD">30000</price></car>
            </cars>"#,
        )
        .expect("valid document");
        assert_eq!(decoded.records.len(), 1);
        assert_eq!(decoded.records[0].vehicle_type, "SUV");
        assert_eq!(decoded.skipped.len(), 1);
        assert!(decoded.skipped[0].to_string().contains("car #0"));
    }

    #[test]
    fn missing_type_is_reported_per_car() {
        let decoded = decode_str(
            r#"<cars><car><price currency="USD">30000</price></car></cars>"#,
        )
        .expect("valid document");
        assert!(decoded.records.is_empty());
        assert!(decoded.skipped[0].to_string().contains("<type>"));
    }

    #[test]
    fn empty_document_decodes_to_nothing() {
        let decoded = decode_str("<cars></cars>").expect("valid document");
        assert!(decoded.records.is_empty());
        assert!(decoded.skipped.is_empty());
    }

    #[test]
    fn invalid_syntax_is_a_document_error() {
        assert!(decode_str("<cars><car>").is_err());
    }

    #[test]
    fn primary_currency_other_than_usd_keeps_value_under_its_code() {
        let decoded = decode_str(
            r#"<cars><car><type>Coupe</type><price currency="EUR">40000</price></car></cars>"#,
        )
        .expect("valid document");
        let coupe = &decoded.records[0];
        assert_eq!(coupe.price_usd, 40000.0);
        assert_eq!(coupe.prices.get("EUR"), Some(&40000.0));
        assert_eq!(coupe.prices.get("USD"), None);
    }
}
