//! Chart assembly.
//!
//! A [`ChartAssembler`] owns the one handle to an [`EphemerisProvider`] and
//! the provider's readiness signal. Construct it once at startup, share the
//! returned `Arc`, and every `calculate_chart` call waits on the same
//! initialization.

use crate::aspects::AspectCalculator;
use crate::chart::data::{Angles, BodyPlacement, Chart, ChartMeta, ChartMetadata, HouseCusp};
use crate::ephemeris::{EphemerisError, EphemerisProvider, GeoLocation, HouseData, RawPosition};
use crate::hellenistic::{calculate_lot, Lot, LotName, Sect};
use crate::houses::{assign_house, HouseError, HouseSystem};
use crate::zodiac::{decimal_to_coordinate, get_zodiac_sign, normalize_degrees, Body};
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, OnceCell};

/// Errors that can occur while assembling a chart
#[derive(Error, Debug)]
pub enum ChartError {
    /// The provider failed to initialize. Shared by every caller of the assembler.
    #[error("Ephemeris provider failed to initialize: {0}")]
    Initialization(#[source] Arc<EphemerisError>),
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    /// Provider cusps do not partition the circle
    #[error("House assignment invariant violated: {0}")]
    HouseInvariant(#[from] HouseError),
    #[error("Provider returned a non-finite {field}: {value}")]
    InvalidProviderData { field: String, value: f64 },
}

/// Lifecycle of the provider handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblerState {
    Uninitialized,
    Initializing,
    Ready,
    /// Initialization failed; the assembler will not retry.
    Failed,
}

pub struct ChartAssembler {
    provider: Arc<dyn EphemerisProvider>,
    aspects: AspectCalculator,
    readiness: Arc<OnceCell<Result<(), Arc<EphemerisError>>>>,
    initializing: Arc<AtomicBool>,
    // The provider is not assumed to be reentrant.
    provider_calls: Mutex<()>,
}

impl ChartAssembler {
    pub fn new(provider: Arc<dyn EphemerisProvider>) -> Arc<Self> {
        Self::with_aspect_calculator(provider, AspectCalculator::new())
    }

    pub fn with_aspect_calculator(
        provider: Arc<dyn EphemerisProvider>,
        aspects: AspectCalculator,
    ) -> Arc<Self> {
        Arc::new(Self {
            provider,
            aspects,
            readiness: Arc::new(OnceCell::new()),
            initializing: Arc::new(AtomicBool::new(false)),
            provider_calls: Mutex::new(()),
        })
    }

    pub fn state(&self) -> AssemblerState {
        match self.readiness.get() {
            Some(Ok(())) => AssemblerState::Ready,
            Some(Err(_)) => AssemblerState::Failed,
            None if self.initializing.load(Ordering::Acquire) => AssemblerState::Initializing,
            None => AssemblerState::Uninitialized,
        }
    }

    /// Wait until the provider is ready, initializing it on first use.
    ///
    /// Concurrent callers share one initialization. It runs on its own task,
    /// so a caller that is dropped while waiting does not abort it. A failure
    /// is kept and returned to every later caller.
    pub async fn ready(&self) -> Result<(), ChartError> {
        if let Some(outcome) = self.readiness.get() {
            return outcome.clone().map_err(ChartError::Initialization);
        }

        let readiness = Arc::clone(&self.readiness);
        let initializing = Arc::clone(&self.initializing);
        let provider = Arc::clone(&self.provider);
        let outcome = tokio::spawn(async move {
            readiness
                .get_or_init(|| async {
                    initializing.store(true, Ordering::Release);
                    log::info!("Initializing ephemeris provider");
                    match provider.initialize().await {
                        Ok(()) => {
                            log::info!("Ephemeris provider ready");
                            Ok(())
                        }
                        Err(e) => {
                            log::error!("Ephemeris provider failed to initialize: {}", e);
                            Err(Arc::new(e))
                        }
                    }
                })
                .await
                .clone()
        })
        .await
        .map_err(|e| {
            log::error!("Ephemeris provider initialization aborted: {}", e);
            ChartError::Initialization(Arc::new(EphemerisError::InitializationAborted {
                message: e.to_string(),
            }))
        })?;
        outcome.map_err(ChartError::Initialization)
    }

    /// Calculate a natal chart.
    ///
    /// Returns a fully populated chart or an error, never a partial chart.
    pub async fn calculate_chart(
        &self,
        instant: DateTime<Utc>,
        latitude: f64,
        longitude: f64,
        house_system: HouseSystem,
    ) -> Result<Chart, ChartError> {
        self.ready().await?;
        log::debug!(
            "Calculating {} chart for {} at ({}, {})",
            house_system,
            instant,
            latitude,
            longitude
        );

        let julian_day = self.provider.instant_to_internal_time(instant);
        let (houses, raw) = self
            .fetch_raw(julian_day, latitude, longitude, house_system)
            .await?;

        let asc = normalize_degrees(houses.ascendant);
        let mc = normalize_degrees(houses.midheaven);
        let cusps = houses.cusps.map(normalize_degrees);

        let mut planets = Vec::with_capacity(raw.len() + 1);
        for &(body, position) in &raw {
            planets.push(place(body, position, house_system, asc, &cusps)?);
            if body == Body::NorthNode {
                let south = RawPosition {
                    longitude: position.longitude + 180.0,
                    ..position
                };
                planets.push(place(Body::SouthNode, south, house_system, asc, &cusps)?);
            }
        }

        // Body::TRACKED starts with the Sun and the Moon
        let sun = normalize_degrees(raw[0].1.longitude);
        let moon = normalize_degrees(raw[1].1.longitude);
        let sect = Sect::from_angles(sun, asc);

        let mut lots = Vec::with_capacity(2);
        for name in [LotName::Fortune, LotName::Spirit] {
            let total = calculate_lot(name, asc, sun, moon, sect);
            let house =
                assign_house(house_system, total, asc, &cusps).map_err(invariant_violation)?;
            lots.push(Lot::new(name, total, house));
        }

        let house_cusps = cusps
            .iter()
            .enumerate()
            .map(|(i, &cusp)| {
                let position = get_zodiac_sign(cusp);
                HouseCusp {
                    number: (i + 1) as u8,
                    sign: position.sign,
                    degree: position.degree_in_sign,
                    total_degree: position.absolute,
                }
            })
            .collect();

        let aspects = self.aspects.compute_aspects(&planets);

        Ok(Chart::new(
            planets,
            house_cusps,
            Angles::from_asc_mc(asc, mc),
            aspects,
            lots,
            ChartMeta {
                is_day_chart: sect.is_day(),
                sect,
                date: instant,
                location: GeoLocation {
                    lat: latitude,
                    lon: longitude,
                },
                house_system,
                details: ChartMetadata::default(),
            },
        ))
    }

    /// One houses request, then one request per tracked body, in order.
    async fn fetch_raw(
        &self,
        julian_day: f64,
        latitude: f64,
        longitude: f64,
        house_system: HouseSystem,
    ) -> Result<(HouseData, Vec<(Body, RawPosition)>), ChartError> {
        let _guard = self.provider_calls.lock().await;

        let houses = self
            .provider
            .compute_houses(julian_day, latitude, longitude, house_system)
            .await?;
        check_finite("ascendant", houses.ascendant)?;
        check_finite("midheaven", houses.midheaven)?;
        for cusp in houses.cusps {
            check_finite("house cusp", cusp)?;
        }

        let mut raw = Vec::with_capacity(Body::TRACKED.len());
        for body in Body::TRACKED {
            let position = self.provider.compute_position(julian_day, body).await?;
            check_finite("longitude", position.longitude)?;
            check_finite("longitude speed", position.longitude_speed)?;
            raw.push((body, position));
        }
        Ok((houses, raw))
    }
}

fn check_finite(field: &str, value: f64) -> Result<(), ChartError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ChartError::InvalidProviderData {
            field: field.to_string(),
            value,
        })
    }
}

fn invariant_violation(e: HouseError) -> ChartError {
    log::error!("{}", e);
    ChartError::HouseInvariant(e)
}

fn place(
    body: Body,
    raw: RawPosition,
    house_system: HouseSystem,
    asc: f64,
    cusps: &[f64; 12],
) -> Result<BodyPlacement, ChartError> {
    let position = get_zodiac_sign(raw.longitude);
    let house =
        assign_house(house_system, position.absolute, asc, cusps).map_err(invariant_violation)?;

    Ok(BodyPlacement {
        body,
        sign: position.sign,
        position: decimal_to_coordinate(position.absolute),
        degree_in_sign: position.degree_in_sign,
        house,
        is_retrograde: raw.is_retrograde(),
        speed: raw.longitude_speed,
    })
}
