use crate::aspects::types::{Aspect, AspectCore, AspectType, OrbSettings};
use crate::chart::BodyPlacement;

/// Orb under which an aspect counts as exact
const EXACT_ORB: f64 = 0.1;

/// Aspect calculator
#[derive(Debug, Clone, Default)]
pub struct AspectCalculator {
    orbs: OrbSettings,
}

impl AspectCalculator {
    /// Create a calculator with the default orbs (8° majors, 6° sextile)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orbs(orbs: OrbSettings) -> Self {
        Self { orbs }
    }

    pub fn orbs(&self) -> &OrbSettings {
        &self.orbs
    }

    /// Compute aspects between every unordered pair of placements.
    ///
    /// Derived points (the South Node) are skipped; only bodies the provider
    /// tracks take part.
    pub fn compute_aspects(&self, placements: &[BodyPlacement]) -> Vec<Aspect> {
        let tracked: Vec<&BodyPlacement> =
            placements.iter().filter(|p| p.body.is_tracked()).collect();

        let mut aspects = Vec::new();
        for i in 0..tracked.len() {
            for j in (i + 1)..tracked.len() {
                let p1 = tracked[i];
                let p2 = tracked[j];

                if let Some(aspect) = self.calculate_aspect(
                    p1.position.total_degrees,
                    p2.position.total_degrees,
                    p1.speed,
                    p2.speed,
                ) {
                    aspects.push(Aspect {
                        body1: p1.body,
                        body2: p2.body,
                        aspect,
                    });
                }
            }
        }
        aspects
    }

    /// Classify the separation of two longitudes, if it is an aspect.
    pub fn calculate_aspect(
        &self,
        lon1: f64,
        lon2: f64,
        speed1: f64,
        speed2: f64,
    ) -> Option<AspectCore> {
        let angle_diff = separation(lon1, lon2);
        let (aspect_type, orb) = self.classify(angle_diff)?;

        Some(AspectCore {
            aspect_type,
            orb,
            is_applying: is_aspect_applying(
                lon1,
                lon2,
                speed1,
                speed2,
                aspect_type.exact_angle(),
                angle_diff,
            ),
            is_exact: orb < EXACT_ORB,
        })
    }

    /// Aspect type and orb for a separation in [0, 180].
    pub fn classify(&self, angle_diff: f64) -> Option<(AspectType, f64)> {
        AspectType::PRIORITY.iter().find_map(|&aspect_type| {
            let orb = (angle_diff - aspect_type.exact_angle()).abs();
            (orb <= self.orbs.orb_for(aspect_type)).then_some((aspect_type, orb))
        })
    }
}

/// Shorter-arc separation of two longitudes, in [0, 180]
pub fn separation(lon1: f64, lon2: f64) -> f64 {
    let raw_diff = (lon1 - lon2).abs() % 360.0;
    if raw_diff > 180.0 {
        360.0 - raw_diff
    } else {
        raw_diff
    }
}

/// Determine if an aspect is applying (approaching exact) or separating
fn is_aspect_applying(
    lon1: f64,
    lon2: f64,
    speed1: f64,
    speed2: f64,
    aspect_angle: f64,
    current_angle: f64,
) -> bool {
    // Calculate relative speed (degrees per day)
    let relative_speed = speed1 - speed2;

    // Equal speeds: the separation does not change
    if relative_speed.abs() < 0.01 {
        return false;
    }

    let signed_diff = wrap_signed(lon1 - lon2);
    let current_distance = (current_angle - aspect_angle).abs();

    // Project forward a small step to see if we're getting closer to exact
    let time_step = 0.1; // days
    let future_angle = wrap_signed(signed_diff + relative_speed * time_step).abs();
    let future_distance = (future_angle - aspect_angle).abs();

    future_distance < current_distance
}

fn wrap_signed(diff: f64) -> f64 {
    let mut d = diff % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d < -180.0 {
        d += 360.0;
    }
    d
}
