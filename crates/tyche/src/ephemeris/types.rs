use serde::{Deserialize, Serialize};

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

/// Raw position of one body as returned by the provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPosition {
    /// Ecliptic longitude in degrees
    pub longitude: f64,
    /// Speed in longitude (degrees per day)
    pub longitude_speed: f64,
    /// Ecliptic latitude in degrees
    pub latitude: f64,
    /// Distance (AU)
    pub distance: f64,
}

impl RawPosition {
    pub fn is_retrograde(&self) -> bool {
        self.longitude_speed < 0.0
    }
}

/// Angles and house cusps for one instant/location/system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseData {
    pub ascendant: f64,
    pub midheaven: f64,
    /// Cusps of houses 1..12, index 0 = house 1
    pub cusps: [f64; 12],
}
