use crate::ephemeris::provider::{EphemerisError, EphemerisProvider};
use crate::ephemeris::types::{HouseData, RawPosition};
use crate::houses::HouseSystem;
use crate::zodiac::Body;
use async_trait::async_trait;
use chrono::{DateTime, Datelike, Timelike, Utc};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use swisseph::swe::{calc_ut, houses_ex, julday, set_ephe_path};

/// Default location of the Swiss Ephemeris data files
pub const DEFAULT_EPHEMERIS_PATH: &str = "/usr/local/share/swisseph";

// FLG_SWIEPH = 2, FLG_SPEED = 256 (speed is needed for retrograde detection)
const CALC_FLAGS: u32 = 2 | 256;
// GREG_CAL = 1
const GREGORIAN: u32 = 1;

/// Swiss Ephemeris body codes. The lunar node is the mean node.
fn body_code(body: Body) -> Option<u32> {
    match body {
        Body::Sun => Some(0),
        Body::Moon => Some(1),
        Body::Mercury => Some(2),
        Body::Venus => Some(3),
        Body::Mars => Some(4),
        Body::Jupiter => Some(5),
        Body::Saturn => Some(6),
        Body::Uranus => Some(7),
        Body::Neptune => Some(8),
        Body::Pluto => Some(9),
        Body::NorthNode => Some(10),
        Body::SouthNode => None,
    }
}

fn house_system_byte(system: HouseSystem) -> u8 {
    match system {
        HouseSystem::WholeSign => b'W',
        HouseSystem::Placidus => b'P',
    }
}

/// Resolve the data path: explicit, then `SWISS_EPHEMERIS_PATH`, then the default.
pub fn resolve_ephemeris_path(explicit: Option<&Path>) -> PathBuf {
    explicit.map(Path::to_path_buf).unwrap_or_else(|| {
        env::var("SWISS_EPHEMERIS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_EPHEMERIS_PATH))
    })
}

/// Swiss Ephemeris provider
pub struct SwissEphemerisAdapter {
    ephemeris_path: PathBuf,
    initialized: AtomicBool,
}

impl SwissEphemerisAdapter {
    /// Create an adapter. Nothing is checked until [`EphemerisProvider::initialize`].
    pub fn new(ephemeris_path: Option<PathBuf>) -> Self {
        Self {
            ephemeris_path: resolve_ephemeris_path(ephemeris_path.as_deref()),
            initialized: AtomicBool::new(false),
        }
    }

    pub fn ephemeris_path(&self) -> &Path {
        &self.ephemeris_path
    }

    fn ensure_initialized(&self) -> Result<(), EphemerisError> {
        if self.initialized.load(Ordering::Acquire) {
            Ok(())
        } else {
            Err(EphemerisError::NotInitialized)
        }
    }
}

#[async_trait]
impl EphemerisProvider for SwissEphemerisAdapter {
    async fn initialize(&self) -> Result<(), EphemerisError> {
        if !self.ephemeris_path.exists() {
            return Err(EphemerisError::FileNotFound {
                path: self.ephemeris_path.display().to_string(),
                message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
            });
        }
        set_ephe_path(&self.ephemeris_path.to_string_lossy());
        self.initialized.store(true, Ordering::Release);
        log::info!(
            "Swiss Ephemeris initialized from {}",
            self.ephemeris_path.display()
        );
        Ok(())
    }

    fn instant_to_internal_time(&self, instant: DateTime<Utc>) -> f64 {
        datetime_to_julian_day(instant)
    }

    async fn compute_houses(
        &self,
        julian_day: f64,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<HouseData, EphemerisError> {
        self.ensure_initialized()?;
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(EphemerisError::HouseCalculationFailed {
                message: format!("non-finite location ({}, {})", latitude, longitude),
            });
        }

        let (c, a) = houses_ex(
            julian_day,
            CALC_FLAGS as i32,
            latitude,
            longitude,
            house_system_byte(system) as i32,
        );

        use swisseph::{AscMc, Cusp};
        let cusps = Cusp::from_array(c);
        let ascmc = AscMc::from_array(a);
        let cusp_values = [
            cusps.first, cusps.second, cusps.third, cusps.fourth,
            cusps.fifth, cusps.sixth, cusps.seventh, cusps.eighth,
            cusps.ninth, cusps.tenth, cusps.eleventh, cusps.twelfth,
        ];
        if cusp_values.iter().any(|c| !c.is_finite()) {
            return Err(EphemerisError::HouseCalculationFailed {
                message: format!("non-finite cusps at JD {}", julian_day),
            });
        }

        Ok(HouseData {
            ascendant: ascmc.ascendant % 360.0,
            midheaven: ascmc.mc % 360.0,
            cusps: cusp_values.map(|c| c % 360.0),
        })
    }

    async fn compute_position(
        &self,
        julian_day: f64,
        body: Body,
    ) -> Result<RawPosition, EphemerisError> {
        self.ensure_initialized()?;
        let code = body_code(body).ok_or_else(|| EphemerisError::CalculationFailed {
            body: body.to_string(),
            julian_day,
            message: "body is derived, not computed by Swiss Ephemeris".to_string(),
        })?;

        let result = calc_ut(julian_day, code, CALC_FLAGS).map_err(|e| {
            EphemerisError::CalculationFailed {
                body: body.to_string(),
                julian_day,
                message: format!("Swiss Ephemeris error: {}", e),
            }
        })?;

        let out = result.out;
        Ok(RawPosition {
            longitude: out[0] % 360.0,
            latitude: out[1],
            distance: out[2],
            longitude_speed: out[3],
        })
    }
}

/// Convert UTC datetime to Julian Day (UT)
pub fn datetime_to_julian_day(dt: DateTime<Utc>) -> f64 {
    let hour_decimal = dt.hour() as f64
        + dt.minute() as f64 / 60.0
        + (dt.second() as f64 + dt.nanosecond() as f64 / 1e9) / 3600.0;
    julday(dt.year(), dt.month() as i32, dt.day() as i32, hour_decimal, GREGORIAN)
}
