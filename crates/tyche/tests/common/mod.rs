#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tyche::ephemeris::{EphemerisError, EphemerisProvider, HouseData, RawPosition};
use tyche::houses::HouseSystem;
use tyche::zodiac::Body;

/// Provider returning fixed houses and positions.
///
/// Bodies without an explicit position sit at `default_longitude`.
pub struct StubProvider {
    pub houses: HouseData,
    pub positions: HashMap<Body, RawPosition>,
    pub default_longitude: f64,
    pub fail_init: bool,
    pub fail_on: Mutex<Option<Body>>,
    pub init_delay: Duration,
    pub init_calls: AtomicUsize,
    pub position_calls: AtomicUsize,
}

impl StubProvider {
    pub fn new(ascendant: f64, midheaven: f64, cusps: [f64; 12]) -> Self {
        Self {
            houses: HouseData {
                ascendant,
                midheaven,
                cusps,
            },
            positions: HashMap::new(),
            default_longitude: ascendant,
            fail_init: false,
            fail_on: Mutex::new(None),
            init_delay: Duration::ZERO,
            init_calls: AtomicUsize::new(0),
            position_calls: AtomicUsize::new(0),
        }
    }

    /// Whole-sign cusps starting at the ascendant's sign.
    pub fn whole_sign(ascendant: f64, midheaven: f64) -> Self {
        let first = (ascendant / 30.0).floor() * 30.0;
        Self::new(ascendant, midheaven, equal_cusps(first))
    }

    pub fn with_position(mut self, body: Body, longitude: f64, speed: f64) -> Self {
        self.positions.insert(body, raw(longitude, speed));
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail_init = true;
        self
    }

    /// Make position requests for `body` fail until reset.
    pub fn set_fail_on(&self, body: Option<Body>) {
        *self.fail_on.lock().unwrap() = body;
    }

    pub fn with_init_delay(mut self, delay: Duration) -> Self {
        self.init_delay = delay;
        self
    }

    pub fn init_count(&self) -> usize {
        self.init_calls.load(Ordering::SeqCst)
    }
}

pub fn raw(longitude: f64, speed: f64) -> RawPosition {
    RawPosition {
        longitude,
        longitude_speed: speed,
        latitude: 0.0,
        distance: 1.0,
    }
}

/// Twelve 30° houses starting at `first`.
pub fn equal_cusps(first: f64) -> [f64; 12] {
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = (first + 30.0 * i as f64) % 360.0;
    }
    cusps
}

#[async_trait]
impl EphemerisProvider for StubProvider {
    async fn initialize(&self) -> Result<(), EphemerisError> {
        self.init_calls.fetch_add(1, Ordering::SeqCst);
        if !self.init_delay.is_zero() {
            tokio::time::sleep(self.init_delay).await;
        }
        if self.fail_init {
            return Err(EphemerisError::FileNotFound {
                path: "/nonexistent".to_string(),
                message: "stub failure".to_string(),
            });
        }
        Ok(())
    }

    fn instant_to_internal_time(&self, instant: DateTime<Utc>) -> f64 {
        instant.timestamp() as f64 / 86400.0 + 2440587.5
    }

    async fn compute_houses(
        &self,
        _julian_day: f64,
        _latitude: f64,
        _longitude: f64,
        _system: HouseSystem,
    ) -> Result<HouseData, EphemerisError> {
        Ok(self.houses.clone())
    }

    async fn compute_position(
        &self,
        julian_day: f64,
        body: Body,
    ) -> Result<RawPosition, EphemerisError> {
        self.position_calls.fetch_add(1, Ordering::SeqCst);
        if *self.fail_on.lock().unwrap() == Some(body) {
            return Err(EphemerisError::CalculationFailed {
                body: body.to_string(),
                julian_day,
                message: "stub failure".to_string(),
            });
        }
        Ok(self
            .positions
            .get(&body)
            .copied()
            .unwrap_or_else(|| raw(self.default_longitude, 1.0)))
    }
}
