use crate::aspects::Aspect;
use crate::ephemeris::GeoLocation;
use crate::hellenistic::{Lot, LotName, Sect};
use crate::houses::HouseSystem;
use crate::zodiac::{Body, Coordinate, Sign};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placement of one body in the chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyPlacement {
    #[serde(rename = "name")]
    pub body: Body,
    pub sign: Sign,
    pub position: Coordinate,
    /// Decimal degrees within the sign [0, 30)
    pub degree_in_sign: f64,
    /// 1..=12
    pub house: u8,
    pub is_retrograde: bool,
    pub speed: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseCusp {
    pub number: u8,
    pub sign: Sign,
    /// Degrees within the cusp sign [0, 30)
    pub degree: f64,
    pub total_degree: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Angles {
    pub asc: f64,
    pub mc: f64,
    pub dsc: f64,
    pub ic: f64,
}

impl Angles {
    /// Angles from the ascendant and midheaven; DSC and IC are their opposites.
    pub fn from_asc_mc(asc: f64, mc: f64) -> Self {
        Self {
            asc,
            mc,
            dsc: (asc + 180.0) % 360.0,
            ic: (mc + 180.0) % 360.0,
        }
    }
}

/// Caller-supplied display details, kept apart from the computed chart
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unknown_time: Option<bool>,
}

impl ChartMetadata {
    /// Fields set in `newer` win; unset ones keep their current value.
    pub fn merged(self, newer: ChartMetadata) -> ChartMetadata {
        ChartMetadata {
            name: newer.name.or(self.name),
            city: newer.city.or(self.city),
            unknown_time: newer.unknown_time.or(self.unknown_time),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    pub is_day_chart: bool,
    pub sect: Sect,
    pub date: DateTime<Utc>,
    pub location: GeoLocation,
    pub house_system: HouseSystem,
    #[serde(flatten)]
    pub details: ChartMetadata,
}

/// A computed natal chart.
///
/// Read-only once built; display details are attached with
/// [`Chart::with_metadata`], which returns a new chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    planets: Vec<BodyPlacement>,
    houses: Vec<HouseCusp>,
    angles: Angles,
    aspects: Vec<Aspect>,
    lots: Vec<Lot>,
    meta: ChartMeta,
}

impl Chart {
    pub fn new(
        planets: Vec<BodyPlacement>,
        houses: Vec<HouseCusp>,
        angles: Angles,
        aspects: Vec<Aspect>,
        lots: Vec<Lot>,
        meta: ChartMeta,
    ) -> Self {
        Self {
            planets,
            houses,
            angles,
            aspects,
            lots,
            meta,
        }
    }

    pub fn planets(&self) -> &[BodyPlacement] {
        &self.planets
    }

    pub fn houses(&self) -> &[HouseCusp] {
        &self.houses
    }

    pub fn angles(&self) -> &Angles {
        &self.angles
    }

    pub fn aspects(&self) -> &[Aspect] {
        &self.aspects
    }

    pub fn lots(&self) -> &[Lot] {
        &self.lots
    }

    pub fn meta(&self) -> &ChartMeta {
        &self.meta
    }

    pub fn sect(&self) -> Sect {
        self.meta.sect
    }

    pub fn placement(&self, body: Body) -> Option<&BodyPlacement> {
        self.planets.iter().find(|p| p.body == body)
    }

    pub fn house(&self, number: u8) -> Option<&HouseCusp> {
        self.houses.iter().find(|h| h.number == number)
    }

    pub fn lot(&self, name: LotName) -> Option<&Lot> {
        self.lots.iter().find(|l| l.name == name)
    }

    /// Attach display details, merging them over any already present.
    pub fn with_metadata(mut self, details: ChartMetadata) -> Self {
        let current = std::mem::take(&mut self.meta.details);
        self.meta.details = current.merged(details);
        self
    }
}
