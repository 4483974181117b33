// src/output.rs
use std::io::Write;

use anyhow::Context;
use chrono::NaiveDate;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::model::{Car, PriceMap};

/// Emit the record sequence in the configured output format.
pub fn emit(cars: &[Car], config: &Config) -> anyhow::Result<()> {
    let mut writer = OutputWriter::create(config)?;
    match config.format {
        OutputFormat::Table => output_table(cars, &mut writer)?,
        OutputFormat::Json => output_json(cars, &mut writer)?,
        OutputFormat::Xml => output_xml(cars, &mut writer)?,
    }
    writer.flush()?;
    Ok(())
}

struct OutputWriter(Box<dyn Write>);
impl OutputWriter {
    fn create(config: &Config) -> anyhow::Result<Self> {
        let writer: Box<dyn Write> = if let Some(path) = &config.output {
            Box::new(std::io::BufWriter::new(std::fs::File::create(path)?))
        } else {
            Box::new(std::io::BufWriter::new(std::io::stdout()))
        };
        Ok(Self(writer))
    }
}
impl Write for OutputWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.write(buf)
    }
    fn flush(&mut self) -> std::io::Result<()> {
        self.0.flush()
    }
}

// ==========================
// Table
// ==========================

const COLUMNS: [(&str, usize); 6] = [
    ("Brand", 15),
    ("Release Date", 12),
    ("Type", 10),
    ("Model", 10),
    ("Price", 20),
    ("Prices", 40),
];

fn output_table(cars: &[Car], out: &mut impl Write) -> anyhow::Result<()> {
    write_separator(out)?;
    write_row(out, COLUMNS.map(|(name, _)| name.to_string()))?;
    write_separator(out)?;
    for car in cars {
        write_row(
            out,
            [
                opt_str(car.brand.as_deref()),
                car.release_date.map(|d| d.to_string()).unwrap_or_default(),
                opt_str(car.vehicle_type.as_deref()),
                opt_str(car.model.as_deref()),
                format_price_map(car.price.as_ref()),
                format_price_map(car.prices.as_ref()),
            ],
        )?;
    }
    write_separator(out)?;
    Ok(())
}

fn opt_str(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

fn write_separator(out: &mut impl Write) -> anyhow::Result<()> {
    for (_, width) in COLUMNS {
        write!(out, "+{}", "-".repeat(width + 2))?;
    }
    writeln!(out, "+")?;
    Ok(())
}

fn write_row(out: &mut impl Write, cells: [String; 6]) -> anyhow::Result<()> {
    for (cell, (_, width)) in cells.iter().zip(COLUMNS) {
        write!(out, "| {:<width$} ", truncate(cell, width))?;
    }
    writeln!(out, "|")?;
    Ok(())
}

// Column widths count chars, not display cells: double-width glyphs (CJK
// brand or type names) render wider than one column unit and will widen
// their row. Known limitation of the fixed-width layout.
fn truncate(s: &str, width: usize) -> String {
    s.chars().take(width).collect()
}

/// Stable textual form of a currency map, e.g. `{EUR=27000.0, USD=30000.0}`.
/// Keys come out in map order (sorted); values in f64 debug form.
fn format_price_map(map: Option<&PriceMap>) -> String {
    let Some(map) = map else {
        return String::new();
    };
    let entries: Vec<String> = map.iter().map(|(code, value)| format!("{code}={value:?}")).collect();
    format!("{{{}}}", entries.join(", "))
}

// ==========================
// JSON
// ==========================

fn output_json(cars: &[Car], out: &mut impl Write) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, cars).context("JSON encoding failed")?;
    writeln!(out)?;
    Ok(())
}

// ==========================
// XML
// ==========================

// Output projection mirroring the input wire shape: currency as an
// attribute, amount as element text.
#[derive(Serialize)]
#[serde(rename = "cars")]
struct XmlDoc<'a> {
    car: Vec<XmlCar<'a>>,
}

#[derive(Serialize)]
struct XmlCar<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    brand: Option<&'a str>,
    #[serde(rename = "releaseDate", skip_serializing_if = "Option::is_none")]
    release_date: Option<NaiveDate>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    vehicle_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    /// Primary price as a single element, like the input shape.
    #[serde(skip_serializing_if = "Option::is_none")]
    price: Option<PriceEntry<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prices: Option<PriceList<'a>>,
}

#[derive(Serialize)]
struct PriceList<'a> {
    price: Vec<PriceEntry<'a>>,
}

#[derive(Serialize)]
struct PriceEntry<'a> {
    #[serde(rename = "@currency")]
    currency: &'a str,
    #[serde(rename = "$text")]
    value: f64,
}

fn price_list(map: Option<&PriceMap>) -> Option<PriceList<'_>> {
    map.map(|m| PriceList {
        price: m
            .iter()
            .map(|(code, value)| PriceEntry { currency: code, value: *value })
            .collect(),
    })
}

fn primary_price(map: Option<&PriceMap>) -> Option<PriceEntry<'_>> {
    map.and_then(|m| m.iter().next())
        .map(|(code, value)| PriceEntry { currency: code, value: *value })
}

fn output_xml(cars: &[Car], out: &mut impl Write) -> anyhow::Result<()> {
    let doc = XmlDoc {
        car: cars
            .iter()
            .map(|c| XmlCar {
                brand: c.brand.as_deref(),
                release_date: c.release_date,
                vehicle_type: c.vehicle_type.as_deref(),
                model: c.model.as_deref(),
                price: primary_price(c.price.as_ref()),
                prices: price_list(c.prices.as_ref()),
            })
            .collect(),
    };

    let mut buf = String::new();
    let mut ser = quick_xml::se::Serializer::new(&mut buf);
    ser.indent(' ', 2);
    doc.serialize(ser).context("XML encoding failed")?;
    writeln!(out, "{buf}")?;
    Ok(())
}
