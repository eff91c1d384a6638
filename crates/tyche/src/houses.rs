//! House assignment for chart bodies.
//!
//! Whole-sign houses are counted in signs from the ascendant's sign. Time-based
//! (Placidus) houses use the provider's cusps: house `i` runs from cusp `i` up
//! to, but not including, cusp `i + 1`, wrapping from house 12 back to cusp 1.

use crate::zodiac::{get_zodiac_sign, normalize_degrees, ParseError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    #[default]
    WholeSign,
    Placidus,
}

impl HouseSystem {
    pub const fn name(self) -> &'static str {
        match self {
            Self::WholeSign => "whole_sign",
            Self::Placidus => "placidus",
        }
    }
}

impl fmt::Display for HouseSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HouseSystem {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "whole_sign" | "wholesign" | "w" => Ok(Self::WholeSign),
            "placidus" | "p" => Ok(Self::Placidus),
            _ => Err(ParseError::UnknownHouseSystem(s.to_string())),
        }
    }
}

/// House cusps that do not partition the circle.
///
/// This is never a user error: it means the provider returned inconsistent
/// cusps.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HouseError {
    #[error("No house interval contains longitude {longitude} (cusps: {cusps:?})")]
    NoMatchingInterval { longitude: f64, cusps: [f64; 12] },
}

/// Whole-sign house (1..=12) of a body relative to the ascendant.
pub fn whole_sign_house(body_longitude: f64, ascendant: f64) -> u8 {
    let body_sign = get_zodiac_sign(body_longitude).sign_index;
    let asc_sign = get_zodiac_sign(ascendant).sign_index;
    (((body_sign + 12 - asc_sign) % 12) + 1) as u8
}

/// Time-based house (1..=12) of a longitude, given cusps of houses 1..12.
pub fn cusp_house(longitude: f64, cusps: &[f64; 12]) -> Result<u8, HouseError> {
    let lon = normalize_degrees(longitude);
    for i in 0..12 {
        let start = cusps[i];
        let end = cusps[(i + 1) % 12];
        let inside = if start < end {
            lon >= start && lon < end
        } else {
            // Interval crosses 0°/360°
            lon >= start || lon < end
        };
        if inside {
            return Ok((i + 1) as u8);
        }
    }
    Err(HouseError::NoMatchingInterval {
        longitude: lon,
        cusps: *cusps,
    })
}

/// House of a longitude under `system`.
pub fn assign_house(
    system: HouseSystem,
    longitude: f64,
    ascendant: f64,
    cusps: &[f64; 12],
) -> Result<u8, HouseError> {
    match system {
        HouseSystem::WholeSign => Ok(whole_sign_house(longitude, ascendant)),
        HouseSystem::Placidus => cusp_house(longitude, cusps),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EQUAL_FROM_ARIES: [f64; 12] = [
        0.0, 30.0, 60.0, 90.0, 120.0, 150.0, 180.0, 210.0, 240.0, 270.0, 300.0, 330.0,
    ];

    #[test]
    fn test_whole_sign_house() {
        // Asc in Capricorn, body in Capricorn
        assert_eq!(whole_sign_house(280.5, 270.0), 1);
        // Body in Sagittarius is the 12th
        assert_eq!(whole_sign_house(250.0, 270.0), 12);
        // Body in Cancer is the 7th
        assert_eq!(whole_sign_house(95.0, 270.0), 7);
    }

    #[test]
    fn test_whole_sign_ignores_full_turns() {
        for &(body, asc) in &[(0.0, 0.0), (123.4, 300.0), (359.9, 15.0), (-45.0, 200.0)] {
            let house = whole_sign_house(body, asc);
            assert!((1..=12).contains(&house));
            assert_eq!(whole_sign_house(body + 360.0, asc), house);
        }
    }

    #[test]
    fn test_cusps_partition_the_circle() {
        let cusps = [
            350.0, 20.0, 45.0, 80.0, 110.0, 140.0, 170.0, 200.0, 225.0, 260.0, 290.0, 320.0,
        ];
        let mut counts = [0usize; 12];
        for tenth in 0..3600 {
            let house = cusp_house(tenth as f64 / 10.0, &cusps).unwrap();
            counts[house as usize - 1] += 1;
        }
        assert!(counts.iter().all(|&c| c > 0));
    }

    #[test]
    fn test_cusp_house_simple() {
        assert_eq!(cusp_house(15.0, &EQUAL_FROM_ARIES), Ok(1));
        assert_eq!(cusp_house(45.0, &EQUAL_FROM_ARIES), Ok(2));
        assert_eq!(cusp_house(350.0, &EQUAL_FROM_ARIES), Ok(12));
        // Cusp degree belongs to the house it opens
        assert_eq!(cusp_house(30.0, &EQUAL_FROM_ARIES), Ok(2));
    }

    #[test]
    fn test_cusp_house_wraparound() {
        let cusps = [
            350.0, 20.0, 45.0, 80.0, 110.0, 140.0, 170.0, 200.0, 225.0, 260.0, 290.0, 320.0,
        ];
        assert_eq!(cusp_house(355.0, &cusps), Ok(1));
        assert_eq!(cusp_house(5.0, &cusps), Ok(1));
        assert_eq!(cusp_house(20.0, &cusps), Ok(2));
        assert_eq!(cusp_house(349.9, &cusps), Ok(12));
    }

    #[test]
    fn test_malformed_cusps_are_invariant_violation() {
        // Consecutive finite cusps always chain around the full circle, so only
        // non-finite provider output can leave a longitude unmatched.
        let cusps = [f64::NAN; 12];
        let err = cusp_house(100.0, &cusps).unwrap_err();
        assert!(matches!(err, HouseError::NoMatchingInterval { .. }));

        assert!(cusp_house(f64::NAN, &EQUAL_FROM_ARIES).is_err());
    }

    #[test]
    fn test_house_system_parse() {
        assert_eq!("placidus".parse::<HouseSystem>(), Ok(HouseSystem::Placidus));
        assert_eq!("Whole Sign".parse::<HouseSystem>(), Ok(HouseSystem::WholeSign));
        assert!("koch".parse::<HouseSystem>().is_err());
    }
}
