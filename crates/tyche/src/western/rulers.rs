//! Sign rulers (dispositors) for traditional astrology.
//!
//! Each sign has exactly one domicile ruler among the seven visible planets.

use crate::zodiac::{Body, Sign};

/// Domicile ruler of a sign (traditional rulership)
pub const fn get_dispositor(sign: Sign) -> Body {
    match sign {
        Sign::Aries => Body::Mars,
        Sign::Taurus => Body::Venus,
        Sign::Gemini => Body::Mercury,
        Sign::Cancer => Body::Moon,
        Sign::Leo => Body::Sun,
        Sign::Virgo => Body::Mercury,
        Sign::Libra => Body::Venus,
        Sign::Scorpio => Body::Mars,
        Sign::Sagittarius => Body::Jupiter,
        Sign::Capricorn => Body::Saturn,
        Sign::Aquarius => Body::Saturn,
        Sign::Pisces => Body::Jupiter,
    }
}
