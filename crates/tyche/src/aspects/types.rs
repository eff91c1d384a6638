use crate::zodiac::Body;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Major (Ptolemaic) aspects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectType {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
}

impl AspectType {
    /// Detection order. The first window that matches wins.
    pub const PRIORITY: [AspectType; 5] = [
        AspectType::Conjunction,
        AspectType::Opposition,
        AspectType::Trine,
        AspectType::Square,
        AspectType::Sextile,
    ];

    /// Exact angle for this aspect (0, 60, 90, 120, 180)
    pub const fn exact_angle(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Opposition => 180.0,
            Self::Trine => 120.0,
            Self::Square => 90.0,
            Self::Sextile => 60.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "Conjunction",
            Self::Opposition => "Opposition",
            Self::Trine => "Trine",
            Self::Square => "Square",
            Self::Sextile => "Sextile",
        }
    }
}

impl fmt::Display for AspectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Orb tolerance per aspect type, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbSettings {
    pub conjunction: f64,
    pub opposition: f64,
    pub trine: f64,
    pub square: f64,
    pub sextile: f64,
}

impl Default for OrbSettings {
    fn default() -> Self {
        Self {
            conjunction: 8.0,
            opposition: 8.0,
            trine: 8.0,
            square: 8.0,
            sextile: 6.0,
        }
    }
}

impl OrbSettings {
    pub fn orb_for(&self, aspect_type: AspectType) -> f64 {
        match aspect_type {
            AspectType::Conjunction => self.conjunction,
            AspectType::Opposition => self.opposition,
            AspectType::Trine => self.trine,
            AspectType::Square => self.square,
            AspectType::Sextile => self.sextile,
        }
    }
}

/// Classification of one angular separation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectCore {
    #[serde(rename = "type")]
    pub aspect_type: AspectType,
    /// Deviation from the exact angle
    pub orb: f64,
    /// Whether the aspect is applying (approaching exact)
    pub is_applying: bool,
    /// Whether the aspect is exact (within 0.1 degrees)
    pub is_exact: bool,
}

/// An aspect between two chart bodies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aspect {
    pub body1: Body,
    pub body2: Body,
    #[serde(flatten)]
    pub aspect: AspectCore,
}

impl Aspect {
    pub fn aspect_type(&self) -> AspectType {
        self.aspect.aspect_type
    }

    pub fn orb(&self) -> f64 {
        self.aspect.orb
    }

    /// Whether this aspect joins `a` and `b`, in either order.
    pub fn involves(&self, a: Body, b: Body) -> bool {
        (self.body1 == a && self.body2 == b) || (self.body1 == b && self.body2 == a)
    }
}
