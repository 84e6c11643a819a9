//! Layout configuration parameters.

use serde::{Deserialize, Serialize};

/// Card geometry and solver parameters, in the card's local unit space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Outer card radius.
    pub card_radius: f64,

    /// Radius symbols must stay within.
    pub usable_radius: f64,

    /// Symbol footprint diameter at scale 1.0, before padding.
    pub base_symbol_size: f64,

    /// Padding added on each side of a symbol's footprint.
    pub symbol_padding: f64,

    /// Per-symbol size multipliers, cycled by symbol index.
    pub size_variations: Vec<f64>,

    /// Fraction of the usable disc area symbols should cover (default: 0.45).
    pub target_coverage: f64,

    /// Extra clearance required between two footprints.
    pub min_distance: f64,

    /// Collision rounds before giving up.
    pub max_iterations: u32,

    /// Fraction of an overlap resolved per push.
    pub push_strength: f64,

    /// Shortfall below the required clearance still counted as touching.
    ///
    /// Partial pushes close a gap geometrically, never exactly, so the solver
    /// needs a finite tolerance to ever finish a round without collisions.
    pub contact_tolerance: f64,

    /// Initial positions fall within this fraction of the usable radius.
    pub initial_radius_factor: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            card_radius: 150.0,
            usable_radius: 140.0,
            base_symbol_size: 48.0,
            symbol_padding: 8.0,
            size_variations: vec![0.75, 1.0, 1.3],
            target_coverage: 0.45,
            min_distance: 18.0,
            max_iterations: 100,
            push_strength: 0.5,
            contact_tolerance: 0.5,
            initial_radius_factor: 0.7,
        }
    }
}

impl LayoutConfig {
    /// Radius of a symbol footprint at scale 1.0, padding included.
    #[must_use]
    pub fn base_footprint_radius(&self) -> f64 {
        (self.base_symbol_size + self.symbol_padding * 2.0) / 2.0
    }

    /// Footprint radius of a symbol drawn at `scale`.
    #[must_use]
    pub fn footprint_radius(&self, scale: f64) -> f64 {
        self.base_footprint_radius() * scale
    }

    /// Size multiplier for the symbol at `index`.
    #[must_use]
    pub fn size_variation(&self, index: usize) -> f64 {
        if self.size_variations.is_empty() {
            1.0
        } else {
            self.size_variations[index % self.size_variations.len()]
        }
    }

    /// Set the iteration cap.
    #[must_use]
    pub fn with_max_iterations(mut self, iterations: u32) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// Set the target coverage fraction.
    #[must_use]
    pub fn with_target_coverage(mut self, coverage: f64) -> Self {
        self.target_coverage = coverage;
        self
    }

    /// Set the minimum clearance between symbols.
    #[must_use]
    pub fn with_min_distance(mut self, distance: f64) -> Self {
        self.min_distance = distance;
        self
    }

    /// Set the contact tolerance.
    #[must_use]
    pub fn with_contact_tolerance(mut self, tolerance: f64) -> Self {
        self.contact_tolerance = tolerance;
        self
    }

    /// Clearance two footprints at `scale_a` and `scale_b` need.
    #[must_use]
    pub fn required_distance(&self, scale_a: f64, scale_b: f64) -> f64 {
        self.footprint_radius(scale_a) + self.footprint_radius(scale_b) + self.min_distance
    }

    /// Whether centres `distance` apart leave the pair colliding.
    #[must_use]
    pub fn is_collision(&self, distance: f64, required: f64) -> bool {
        distance < required - self.contact_tolerance
    }

    /// Set the size multipliers.
    #[must_use]
    pub fn with_size_variations(mut self, variations: Vec<f64>) -> Self {
        self.size_variations = variations;
        self
    }
}
