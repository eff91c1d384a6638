//! Lots of Fortune and Spirit.
//!
//! Fortune is the Moon's distance from the Sun projected from the ascendant
//! (reversed by night); Spirit is the same arc taken the other way.

use crate::hellenistic::sect::Sect;
use crate::zodiac::{decimal_to_coordinate, get_zodiac_sign, normalize_degrees, Sign};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LotName {
    Fortune,
    Spirit,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lot {
    pub name: LotName,
    pub sign: Sign,
    /// Whole degrees within the sign
    pub degree: u8,
    pub total_degrees: f64,
    pub house: u8,
}

impl Lot {
    pub fn new(name: LotName, total_degrees: f64, house: u8) -> Self {
        let position = get_zodiac_sign(total_degrees);
        Self {
            name,
            sign: position.sign,
            degree: decimal_to_coordinate(position.absolute).degrees,
            total_degrees: position.absolute,
            house,
        }
    }
}

/// Day: Asc + Moon - Sun. Night: Asc + Sun - Moon.
pub fn calculate_lot_of_fortune(asc: f64, sun: f64, moon: f64, is_day_chart: bool) -> f64 {
    let lot = if is_day_chart {
        asc + moon - sun
    } else {
        asc + sun - moon
    };
    normalize_degrees(lot)
}

/// Day: Asc + Sun - Moon. Night: Asc + Moon - Sun.
pub fn calculate_lot_of_spirit(asc: f64, sun: f64, moon: f64, is_day_chart: bool) -> f64 {
    let lot = if is_day_chart {
        asc + sun - moon
    } else {
        asc + moon - sun
    };
    normalize_degrees(lot)
}

/// Longitude of `name` for the given sect.
pub fn calculate_lot(name: LotName, asc: f64, sun: f64, moon: f64, sect: Sect) -> f64 {
    match name {
        LotName::Fortune => calculate_lot_of_fortune(asc, sun, moon, sect.is_day()),
        LotName::Spirit => calculate_lot_of_spirit(asc, sun, moon, sect.is_day()),
    }
}
