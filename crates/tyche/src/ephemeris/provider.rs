use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::ephemeris::types::{HouseData, RawPosition};
use crate::houses::HouseSystem;
use crate::zodiac::Body;

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Ephemeris provider is not initialized")]
    NotInitialized,
    #[error("Ephemeris provider initialization aborted: {message}")]
    InitializationAborted { message: String },
    #[error("Failed to calculate position for {body} at JD {julian_day}: {message}")]
    CalculationFailed {
        body: String,
        julian_day: f64,
        message: String,
    },
    #[error("House calculation failed: {message}")]
    HouseCalculationFailed { message: String },
}

/// Source of raw ecliptic positions and house cusps.
///
/// Implementations are treated as single-threaded resources: callers never
/// issue two requests to the same provider concurrently.
#[async_trait]
pub trait EphemerisProvider: Send + Sync {
    /// Prepare the provider. Called at most once per provider.
    async fn initialize(&self) -> Result<(), EphemerisError>;

    /// Convert a UTC instant to the provider's time scale (Julian day, UT).
    fn instant_to_internal_time(&self, instant: DateTime<Utc>) -> f64;

    async fn compute_houses(
        &self,
        julian_day: f64,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<HouseData, EphemerisError>;

    async fn compute_position(
        &self,
        julian_day: f64,
        body: Body,
    ) -> Result<RawPosition, EphemerisError>;
}
