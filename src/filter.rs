// src/filter.rs
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::FilterError;
use crate::model::Car;

/// Optional predicates narrowing the record sequence. Criteria are
/// independent and conjunctive; filters commute, so the fixed application
/// order (brand, price, date) is observable only in diagnostics.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub brand: Option<String>,
    pub price_usd: Option<f64>,
    /// Raw date criterion; parsed lazily so a bad value degrades to a
    /// warning instead of failing argument parsing.
    pub date: Option<String>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.brand.is_none() && self.price_usd.is_none() && self.date.is_none()
    }
}

/// 日付フィルタの受理形式。ISO 形式とカンマ区切り形式の二択。
///
/// The comma form is positional `YEAR,DAY,MONTH` — day before month, exactly
/// as the source data contract defines it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpec(pub NaiveDate);

impl FromStr for DateSpec {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let invalid = |reason: &str| FilterError::InvalidDate {
            value: raw.to_string(),
            reason: reason.to_string(),
        };

        if raw.contains('-') {
            return raw
                .parse::<NaiveDate>()
                .map(DateSpec)
                .map_err(|e| invalid(&e.to_string()));
        }

        if raw.contains(',') {
            let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
            if parts.len() != 3 {
                return Err(invalid("expected YEAR,DAY,MONTH"));
            }
            let year: i32 = parts[0].parse().map_err(|_| invalid("invalid year"))?;
            let day: u32 = parts[1].parse().map_err(|_| invalid("invalid day"))?;
            let month: u32 = parts[2].parse().map_err(|_| invalid("invalid month"))?;
            return NaiveDate::from_ymd_opt(year, month, day)
                .map(DateSpec)
                .ok_or_else(|| invalid("no such calendar date"));
        }

        Err(invalid("expected YYYY-MM-DD or YEAR,DAY,MONTH"))
    }
}

/// Apply the present criteria in order: brand, price, date.
///
/// An unparsable date criterion is returned as a `FilterError` next to the
/// (date-unfiltered) records; the caller reports it and the pipeline
/// continues as if no date criterion had been supplied.
pub fn apply_filters(records: Vec<Car>, criteria: &FilterCriteria) -> (Vec<Car>, Option<FilterError>) {
    let mut cars = records;

    if let Some(brand) = &criteria.brand {
        let wanted = normalize_brand(brand);
        cars.retain(|car| {
            car.brand
                .as_deref()
                .is_some_and(|b| normalize_brand(b).eq_ignore_ascii_case(&wanted))
        });
    }

    if let Some(price) = criteria.price_usd {
        // Exact equality by contract; no tolerance.
        cars.retain(|car| car.usd_price() == Some(price));
    }

    let mut warning = None;
    if let Some(raw) = &criteria.date {
        match raw.parse::<DateSpec>() {
            Ok(DateSpec(date)) => cars.retain(|car| car.release_date == Some(date)),
            Err(e) => warning = Some(e),
        }
    }

    (cars, warning)
}

// Whitespace first: the quotes are only "surrounding" once the padding is
// gone, e.g. ` "toyota" ` must come out as `toyota`.
fn normalize_brand(s: &str) -> String {
    s.trim().trim_matches('"').trim().to_string()
}
