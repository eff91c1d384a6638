//! Essential dignities for traditional astrology.
//!
//! A planet in a sign is in exactly one of five states, checked in order:
//! domicile, exaltation, detriment, fall, otherwise peregrine. Only the seven
//! traditional planets have exaltations, detriments and falls.

use crate::western::rulers::get_dispositor;
use crate::zodiac::{Body, Sign};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DignityType {
    Domicile,
    Exaltation,
    Detriment,
    Fall,
    Peregrine,
}

impl fmt::Display for DignityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Domicile => "Domicile",
            Self::Exaltation => "Exaltation",
            Self::Detriment => "Detriment",
            Self::Fall => "Fall",
            Self::Peregrine => "Peregrine",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dignity {
    #[serde(rename = "type")]
    pub dignity_type: DignityType,
    /// Domicile ruler of the sign, whatever the dignity
    pub ruler: Body,
}

fn exaltation(body: Body) -> Option<Sign> {
    match body {
        Body::Sun => Some(Sign::Aries),
        Body::Moon => Some(Sign::Taurus),
        Body::Mercury => Some(Sign::Virgo),
        Body::Venus => Some(Sign::Pisces),
        Body::Mars => Some(Sign::Capricorn),
        Body::Jupiter => Some(Sign::Cancer),
        Body::Saturn => Some(Sign::Libra),
        _ => None,
    }
}

fn detriments(body: Body) -> &'static [Sign] {
    match body {
        Body::Sun => &[Sign::Aquarius],
        Body::Moon => &[Sign::Capricorn],
        Body::Mercury => &[Sign::Sagittarius, Sign::Pisces],
        Body::Venus => &[Sign::Aries, Sign::Scorpio],
        Body::Mars => &[Sign::Taurus, Sign::Libra],
        Body::Jupiter => &[Sign::Gemini, Sign::Virgo],
        Body::Saturn => &[Sign::Cancer, Sign::Leo],
        _ => &[],
    }
}

fn fall(body: Body) -> Option<Sign> {
    match body {
        Body::Sun => Some(Sign::Libra),
        Body::Moon => Some(Sign::Scorpio),
        Body::Mercury => Some(Sign::Pisces),
        Body::Venus => Some(Sign::Virgo),
        Body::Mars => Some(Sign::Cancer),
        Body::Jupiter => Some(Sign::Capricorn),
        Body::Saturn => Some(Sign::Aries),
        _ => None,
    }
}

/// Essential dignity of `body` in `sign`.
pub fn get_dignity(body: Body, sign: Sign) -> Dignity {
    let ruler = get_dispositor(sign);

    let dignity_type = if ruler == body {
        DignityType::Domicile
    } else if exaltation(body) == Some(sign) {
        DignityType::Exaltation
    } else if detriments(body).contains(&sign) {
        DignityType::Detriment
    } else if fall(body) == Some(sign) {
        DignityType::Fall
    } else {
        DignityType::Peregrine
    };

    Dignity {
        dignity_type,
        ruler,
    }
}
