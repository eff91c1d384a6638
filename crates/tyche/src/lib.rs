//! Natal chart engine.
//!
//! Planet placements, houses, aspects, essential dignities, sect, lots and
//! rulership, computed from a birth instant and location. Raw positions come
//! from an [`ephemeris::EphemerisProvider`]; the Swiss Ephemeris adapter is the
//! default provider.

pub mod aspects;
pub mod chart;
pub mod config;
pub mod ephemeris;
pub mod hellenistic;
pub mod houses;
pub mod western;
pub mod zodiac;

pub use chart::{AssemblerState, Chart, ChartAssembler, ChartError, ChartMetadata};
pub use config::{load_config, TycheConfig};
pub use ephemeris::{EphemerisProvider, SwissEphemerisAdapter};
pub use hellenistic::{calculate_lot_of_fortune, calculate_lot_of_spirit, is_day_chart_by_angles};
pub use houses::HouseSystem;
pub use western::{
    get_bound_ruler, get_chart_ruler_report, get_dignity, get_dispositor,
    get_house_rulers_report,
};
pub use zodiac::{get_zodiac_sign, Body, Sign};
