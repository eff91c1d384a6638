//! Zodiac signs, chart bodies, and longitude normalization.
//!
//! The tropical zodiac is 12 equal signs of 30 degrees, starting from Aries
//! at the vernal point. Every function here accepts any real longitude.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Width of one zodiac sign in degrees.
pub const SIGN_WIDTH: f64 = 30.0;

/// Unknown sign/body/house-system name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown sign: {0}")]
    UnknownSign(String),
    #[error("Unknown body: {0}")]
    UnknownBody(String),
    #[error("Unknown house system: {0}. Valid systems: whole_sign, placidus")]
    UnknownHouseSystem(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Sign {
    /// All 12 signs in zodiac order (index 0 = Aries).
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries = 0 .. Pisces = 11).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Sign at `index`, wrapping modulo 12.
    pub const fn from_index(index: usize) -> Sign {
        Self::ALL[index % 12]
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sign {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sign::ALL
            .iter()
            .copied()
            .find(|sign| sign.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownSign(s.to_string()))
    }
}

/// A point that can carry a placement in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    #[serde(rename = "North Node")]
    NorthNode,
    #[serde(rename = "South Node")]
    SouthNode,
}

impl Body {
    /// Bodies requested from the ephemeris provider, in chart order.
    pub const TRACKED: [Body; 11] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
        Body::NorthNode,
    ];

    /// The seven visible planets of the traditional scheme.
    pub const TRADITIONAL: [Body; 7] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
            Self::NorthNode => "North Node",
            Self::SouthNode => "South Node",
        }
    }

    pub fn is_traditional(self) -> bool {
        Self::TRADITIONAL.contains(&self)
    }

    /// Whether the provider computes this body directly (the South Node is derived).
    pub fn is_tracked(self) -> bool {
        Self::TRACKED.contains(&self)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(['_', '-'], " ");
        Body::TRACKED
            .iter()
            .copied()
            .chain(std::iter::once(Body::SouthNode))
            .find(|body| body.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| ParseError::UnknownBody(s.to_string()))
    }
}

/// Degrees-minutes-seconds position within a sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinate {
    /// Whole degrees within the sign (0..29).
    pub degrees: u8,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Whole arc-seconds (0..59).
    pub seconds: u8,
    /// Absolute ecliptic longitude [0, 360).
    pub total_degrees: f64,
}

/// Result of resolving a longitude to its sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZodiacPosition {
    pub sign: Sign,
    pub sign_index: usize,
    /// Decimal degrees within the sign [0, 30).
    pub degree_in_sign: f64,
    /// Normalized absolute longitude [0, 360).
    pub absolute: f64,
}

/// Normalize any real angle into [0, 360).
pub fn normalize_degrees(degrees: f64) -> f64 {
    ((degrees % 360.0) + 360.0) % 360.0
}

/// Resolve a longitude to sign, sign index and degree within the sign.
pub fn get_zodiac_sign(longitude: f64) -> ZodiacPosition {
    let absolute = normalize_degrees(longitude);
    let sign_index = ((absolute / SIGN_WIDTH).floor() as usize).min(11);
    ZodiacPosition {
        sign: Sign::from_index(sign_index),
        sign_index,
        degree_in_sign: absolute % SIGN_WIDTH,
        absolute,
    }
}

/// Decompose a longitude into whole degrees in sign, minutes and seconds.
///
/// Minutes and seconds are truncated, never rounded, so a position never
/// carries into the next degree or sign.
pub fn decimal_to_coordinate(longitude: f64) -> Coordinate {
    let absolute = normalize_degrees(longitude);
    let whole = absolute.floor();
    let fraction_minutes = (absolute - whole) * 60.0;
    let minutes = fraction_minutes.floor();
    let seconds = ((fraction_minutes - minutes) * 60.0).floor();

    Coordinate {
        degrees: (whole as u32 % 30) as u8,
        minutes: (minutes as u8).min(59),
        seconds: (seconds as u8).min(59),
        total_degrees: absolute,
    }
}
