use crate::error::TriangulationError;

/// Tolerance used for the near-horizontal and in-circle tests, `2^-20`.
pub const DEFAULT_EPSILON: f64 = 1.0 / 1_048_576.0;

/// How far the super triangle reaches beyond the bounding box, in multiples of its larger side.
///
/// This is a safety margin, not a derived bound: hull triangles whose circumcircle reaches
/// a super-triangle corner are lost, so very thin hull triangles call for a larger margin.
pub const DEFAULT_SUPER_TRIANGLE_MARGIN: f64 = 20.0;

/// Inputs above this many vertices yield an empty triangulation.
pub const DEFAULT_MAX_VERTICES: usize = 2000;

/// Tunables of a [`Triangulation`](crate::Triangulation).
///
/// ```
/// use tessel::Config;
///
/// let config = Config::default().with_epsilon(1e-9).with_max_vertices(5000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Config {
    pub epsilon: f64,
    pub super_triangle_margin: f64,
    pub max_vertices: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub const fn new() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            super_triangle_margin: DEFAULT_SUPER_TRIANGLE_MARGIN,
            max_vertices: DEFAULT_MAX_VERTICES,
        }
    }

    #[must_use]
    pub const fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    #[must_use]
    pub const fn with_super_triangle_margin(mut self, margin: f64) -> Self {
        self.super_triangle_margin = margin;
        self
    }

    #[must_use]
    pub const fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = max_vertices;
        self
    }

    /// Check that the tolerance is a finite non-negative number and the margin encloses the bounding box.
    pub fn validate(&self) -> Result<(), TriangulationError> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(TriangulationError::InvalidConfig {
                reason: format!("epsilon must be finite and >= 0, got {}", self.epsilon),
            });
        }

        // below ~1.37 the upper box corners fall outside the super triangle
        if !self.super_triangle_margin.is_finite() || self.super_triangle_margin < 2.0 {
            return Err(TriangulationError::InvalidConfig {
                reason: format!(
                    "super triangle margin must be finite and >= 2, got {}",
                    self.super_triangle_margin
                ),
            });
        }

        Ok(())
    }
}
