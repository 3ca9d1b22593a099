// src/math/geometry/polygon/tessellation.rs

use crate::math::error::{MathError, MathResult};
use crate::math::types::Point2D;
use crate::math::utils::{comparison, constants};
use std::f64::consts::TAU;

/// Tastet Grenzlinien mit festem Bogenlängen-Schritt ab.
///
/// Das Ergebnis ist immer ein geschlossener Ring: Unterscheiden sich erste und letzte
/// Abtastung, wird die erste am Ende wiederholt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tessellator {
    step: f64,
}

impl Default for Tessellator {
    fn default() -> Self {
        Self {
            step: constants::TESSELLATION_STEP,
        }
    }
}

impl Tessellator {
    pub fn new(step: f64) -> MathResult<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(MathError::InvalidConfiguration {
                message: format!("Tessellation step must be positive, got {step}"),
            });
        }
        Ok(Self { step })
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Tastet einen Polygonzug ab. Bei `closed` gehört die Kante vom letzten zum ersten
    /// Vertex zur Linie.
    pub fn tessellate_path(&self, vertices: &[Point2D], closed: bool) -> MathResult<Vec<Point2D>> {
        if vertices.len() < 2 {
            return Err(MathError::InsufficientPoints {
                expected: 2,
                actual: vertices.len(),
            });
        }
        if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(MathError::NonFiniteCoordinate { index });
        }

        let mut segments: Vec<(Point2D, Point2D)> =
            vertices.windows(2).map(|w| (w[0], w[1])).collect();
        if closed {
            segments.push((vertices[vertices.len() - 1], vertices[0]));
        }

        let total_length: f64 = segments.iter().map(|(a, b)| a.distance(*b)).sum();
        if comparison::nearly_zero(total_length) {
            return Err(MathError::GeometricFailure {
                operation: "tessellate zero-length path".to_string(),
            });
        }

        let mut samples = Vec::with_capacity((total_length / self.step) as usize + 2);
        let mut segment_index = 0;
        let mut segment_start_distance = 0.0;
        let mut current_distance = 0.0;

        while current_distance < total_length {
            // Zum Segment vorrücken, das `current_distance` enthält
            while segment_index + 1 < segments.len() {
                let (a, b) = segments[segment_index];
                let segment_length = a.distance(b);
                if current_distance <= segment_start_distance + segment_length {
                    break;
                }
                segment_start_distance += segment_length;
                segment_index += 1;
            }

            let (a, b) = segments[segment_index];
            let segment_length = a.distance(b);
            let t = if segment_length > 0.0 {
                ((current_distance - segment_start_distance) / segment_length).clamp(0.0, 1.0)
            } else {
                0.0
            };
            samples.push(a.lerp(b, t));
            current_distance += self.step;
        }

        let (_, end) = segments[segments.len() - 1];
        samples.push(end);
        close_ring(&mut samples);

        Ok(samples)
    }

    /// Tastet einen Kreis gegen den Uhrzeigersinn ab, beginnend bei Winkel 0.
    pub fn tessellate_circle(&self, center: Point2D, radius: f64) -> MathResult<Vec<Point2D>> {
        if !radius.is_finite() || radius <= 0.0 || !center.is_finite() {
            return Err(MathError::InvalidConfiguration {
                message: format!("Invalid circle: center {center:?}, radius {radius}"),
            });
        }

        let circumference = TAU * radius;
        let mut samples = Vec::with_capacity((circumference / self.step) as usize + 2);
        let mut current_distance = 0.0;

        while current_distance < circumference {
            let angle = current_distance / radius;
            samples.push(center + Point2D::new(angle.cos(), angle.sin()) * radius);
            current_distance += self.step;
        }
        // Endpunkt eines Vollkreises ist der Startpunkt
        samples.push(samples[0]);

        Ok(samples)
    }
}

/// Schließt einen Ring, wenn erste und letzte Abtastung verschieden sind.
pub fn close_ring(samples: &mut Vec<Point2D>) {
    if let (Some(&first), Some(&last)) = (samples.first(), samples.last()) {
        if first.distance_squared(last) > constants::EPSILON_SQUARED {
            samples.push(first);
        }
    }
}
