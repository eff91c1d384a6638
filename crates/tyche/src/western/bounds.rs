//! Egyptian bounds (terms).
//!
//! Each sign is split into five unequal segments, each ruled by one of the
//! five non-luminary planets. A segment runs from the previous bound up to,
//! but not including, its own `end_degree`.

use crate::zodiac::{Body, Sign};
use serde::Serialize;

use Body::{Jupiter, Mars, Mercury, Saturn, Venus};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bound {
    pub planet: Body,
    pub end_degree: f64,
}

const fn b(planet: Body, end_degree: f64) -> Bound {
    Bound { planet, end_degree }
}

/// Egyptian bounds, indexed by sign (Aries = 0)
pub const EGYPTIAN_BOUNDS: [[Bound; 5]; 12] = [
    // Aries
    [b(Jupiter, 6.0), b(Venus, 12.0), b(Mercury, 20.0), b(Mars, 25.0), b(Saturn, 30.0)],
    // Taurus
    [b(Venus, 8.0), b(Mercury, 14.0), b(Jupiter, 22.0), b(Saturn, 27.0), b(Mars, 30.0)],
    // Gemini
    [b(Mercury, 6.0), b(Jupiter, 12.0), b(Venus, 17.0), b(Mars, 24.0), b(Saturn, 30.0)],
    // Cancer
    [b(Mars, 7.0), b(Venus, 13.0), b(Mercury, 19.0), b(Jupiter, 26.0), b(Saturn, 30.0)],
    // Leo
    [b(Jupiter, 6.0), b(Venus, 11.0), b(Saturn, 18.0), b(Mercury, 24.0), b(Mars, 30.0)],
    // Virgo
    [b(Mercury, 7.0), b(Venus, 17.0), b(Jupiter, 21.0), b(Mars, 28.0), b(Saturn, 30.0)],
    // Libra
    [b(Saturn, 6.0), b(Mercury, 14.0), b(Jupiter, 21.0), b(Venus, 28.0), b(Mars, 30.0)],
    // Scorpio
    [b(Mars, 7.0), b(Venus, 11.0), b(Mercury, 19.0), b(Jupiter, 24.0), b(Saturn, 30.0)],
    // Sagittarius
    [b(Jupiter, 12.0), b(Venus, 17.0), b(Mercury, 21.0), b(Saturn, 26.0), b(Mars, 30.0)],
    // Capricorn
    [b(Mercury, 7.0), b(Jupiter, 14.0), b(Venus, 22.0), b(Saturn, 26.0), b(Mars, 30.0)],
    // Aquarius
    [b(Mercury, 7.0), b(Venus, 13.0), b(Jupiter, 20.0), b(Mars, 25.0), b(Saturn, 30.0)],
    // Pisces
    [b(Venus, 12.0), b(Jupiter, 16.0), b(Mercury, 19.0), b(Mars, 28.0), b(Saturn, 30.0)],
];

/// The five bounds of a sign, in degree order
pub fn bounds_for(sign: Sign) -> &'static [Bound; 5] {
    &EGYPTIAN_BOUNDS[sign.index()]
}

/// Planet ruling the bound that contains `degree` (0 <= degree < 30).
pub fn get_bound_ruler(sign: Sign, degree: f64) -> Body {
    let bounds = bounds_for(sign);
    bounds
        .iter()
        .find(|bound| degree < bound.end_degree)
        // 30.0 itself (or rounding just past it) stays with the last bound
        .unwrap_or(&bounds[4])
        .planet
}
