//! Sect: whether a chart is diurnal or nocturnal.
//!
//! A chart is diurnal when the Sun's longitude lies less than 180° past the
//! ascendant, measured in the direction of increasing longitude.

use crate::zodiac::normalize_degrees;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sect {
    Day,
    Night,
}

impl Sect {
    pub fn from_angles(sun: f64, ascendant: f64) -> Self {
        if is_day_chart_by_angles(sun, ascendant) {
            Sect::Day
        } else {
            Sect::Night
        }
    }

    pub fn is_day(self) -> bool {
        self == Sect::Day
    }
}

/// Day chart iff the Sun is within [0, 180) degrees of arc past the ascendant.
pub fn is_day_chart_by_angles(sun: f64, ascendant: f64) -> bool {
    let sun = normalize_degrees(sun);
    let asc = normalize_degrees(ascendant);
    let relative = (sun - asc + 360.0) % 360.0;
    (0.0..180.0).contains(&relative)
}
