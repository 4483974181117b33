// src/sort.rs
use chrono::Datelike;

use crate::cli::SortKey;
use crate::error::SortError;
use crate::model::Car;

/// Apply at most one ordering key, after filtering. Both keys sort
/// descending and the sort is stable: records comparing equal keep their
/// relative input order.
pub fn apply_sort(cars: &mut [Car], key: Option<SortKey>) -> Result<(), SortError> {
    match key {
        None => Ok(()),
        Some(SortKey::ReleaseYear) => sort_by_release_year(cars),
        Some(SortKey::Price) => {
            // Absent price data sorts as 0.0, i.e. last in descending order.
            cars.sort_by(|a, b| {
                let a_usd = a.usd_price().unwrap_or(0.0);
                let b_usd = b.usd_price().unwrap_or(0.0);
                b_usd.total_cmp(&a_usd)
            });
            Ok(())
        }
    }
}

/// A record without a release date cannot be ordered by year; fail fast
/// with a descriptive error rather than inventing a position for it.
///
/// The years are extracted in the same pass that verifies their presence,
/// so the comparator only ever sees verified values. Ties carry the input
/// index, which keeps the order stable.
fn sort_by_release_year(cars: &mut [Car]) -> Result<(), SortError> {
    let mut keyed = Vec::with_capacity(cars.len());
    for (index, car) in cars.iter().enumerate() {
        let Some(date) = car.release_date else {
            return Err(SortError::MissingReleaseDate {
                index,
                label: car.label().to_string(),
            });
        };
        keyed.push((std::cmp::Reverse(date.year()), index));
    }
    keyed.sort();

    let sorted: Vec<Car> = keyed.iter().map(|&(_, index)| cars[index].clone()).collect();
    for (slot, car) in cars.iter_mut().zip(sorted) {
        *slot = car;
    }
    Ok(())
}
