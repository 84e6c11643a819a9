//! Force-directed circle packing of symbols on a card.
//!
//! ## Algorithm
//!
//! 1. Pick a base scale so the symbols cover `target_coverage` of the usable
//!    disc; each symbol's scale is the base scale times a cycled size variation.
//! 2. Seed rotation, angle and radius from keyed scalars derived from
//!    `(card_id, index)` and place each symbol in polar coordinates.
//! 3. For up to `max_iterations` rounds, push every overlapping pair apart
//!    along the line between their centres, the heavier symbol moving less,
//!    then pull any symbol that left the disc back onto its edge. Stop after
//!    the first round without a collision; pairs short of the clearance by at
//!    most `contact_tolerance` count as touching, not colliding.
//!
//! The result is best-effort: dense cards can hit the cap with some overlap.
//!
//! ## Determinism
//!
//! The path uses only keyed scalars and IEEE operations that are correctly
//! rounded everywhere (`+ - * /`, `sqrt`); no trigonometric functions are
//! called, so a given `(symbol_count, card_id)` produces bit-identical output
//! on every platform.

use serde::{Deserialize, Serialize};

use super::config::LayoutConfig;
use crate::cards::{Card, CardId, CardSet};
use crate::core::{ScalarSource, SeededRandom};

/// Scalar key layout: card id in the high 32 bits, role in bits 30-31,
/// symbol or pair index in the low 30 bits.
const CARD_SHIFT: u32 = 32;
const ROLE_SHIFT: u32 = 30;
const INDEX_MASK: u64 = (1 << ROLE_SHIFT) - 1;

const ROTATION_KEY: u64 = 0;
const ANGLE_KEY: u64 = 1;
const RADIUS_KEY: u64 = 2;
const PAIR_KEY: u64 = 3;

/// Centres closer than this are treated as coincident.
const COINCIDENT: f64 = 0.1;

/// Placement of one symbol relative to the card centre.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SymbolLayout {
    pub x: f64,
    pub y: f64,
    /// Size multiplier applied to the base symbol size.
    pub scale: f64,
    /// Rotation in degrees, `[0, 360)`.
    pub rotation: f64,
}

/// Layout plus solver bookkeeping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub layouts: Vec<SymbolLayout>,
    /// Collision rounds run.
    pub iterations: u32,
    /// Whether a round finished without any collision.
    pub converged: bool,
}

/// Computes symbol layouts for cards.
///
/// ## Example
///
/// ```
/// use dobble_engine::layout::{LayoutConfig, LayoutEngine};
///
/// let engine = LayoutEngine::new(LayoutConfig::default());
/// let first = engine.layout(6, 12);
/// let again = engine.layout(6, 12);
///
/// assert_eq!(first.len(), 6);
/// assert_eq!(first, again);
/// ```
#[derive(Clone, Debug)]
pub struct LayoutEngine<S = SeededRandom> {
    config: LayoutConfig,
    source: S,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl LayoutEngine<SeededRandom> {
    /// Create an engine using the default scalar source.
    #[must_use]
    pub fn new(config: LayoutConfig) -> Self {
        Self::with_source(config, SeededRandom::new())
    }
}

impl<S: ScalarSource> LayoutEngine<S> {
    /// Create an engine with a custom scalar source.
    pub fn with_source(config: LayoutConfig, source: S) -> Self {
        Self { config, source }
    }

    /// The layout configuration.
    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Layout `symbol_count` symbols for card `card_id`.
    #[must_use]
    pub fn layout(&self, symbol_count: usize, card_id: u32) -> Vec<SymbolLayout> {
        self.layout_with_report(symbol_count, card_id).layouts
    }

    /// Layout for a card, in the order of its symbols.
    #[must_use]
    pub fn layout_card(&self, card: &Card) -> Vec<SymbolLayout> {
        self.layout(card.len(), card.id.raw())
    }

    /// Layouts for every card of a set.
    #[must_use]
    pub fn layout_set(&self, set: &CardSet) -> Vec<(CardId, Vec<SymbolLayout>)> {
        set.iter()
            .map(|card| (card.id, self.layout_card(card)))
            .collect()
    }

    /// Layout with iteration count and convergence flag.
    #[must_use]
    pub fn layout_with_report(&self, symbol_count: usize, card_id: u32) -> LayoutResult {
        let mut layouts = self.initial_placement(symbol_count, card_id);
        let mut iterations = 0;
        let mut converged = layouts.len() < 2;

        while !converged && iterations < self.config.max_iterations {
            iterations += 1;
            converged = !self.resolve_round(&mut layouts);
        }

        if !converged {
            tracing::trace!(
                card_id,
                symbol_count,
                iterations,
                "layout hit iteration cap with residual overlap"
            );
        }

        LayoutResult {
            layouts,
            iterations,
            converged,
        }
    }

    fn base_scale(&self, symbol_count: usize) -> f64 {
        let usable = self.config.usable_radius;
        let target_area = usable * usable * self.config.target_coverage / symbol_count as f64;
        let footprint = self.config.base_footprint_radius();
        // Both areas share the factor π, so it cancels.
        (target_area / (footprint * footprint)).sqrt()
    }

    fn initial_placement(&self, symbol_count: usize, card_id: u32) -> Vec<SymbolLayout> {
        if symbol_count == 0 {
            return Vec::new();
        }

        let base_scale = self.base_scale(symbol_count);
        let max_radius = self.config.usable_radius * self.config.initial_radius_factor;

        (0..symbol_count)
            .map(|index| {
                let scalar = |role| self.source.scalar(scalar_key(card_id, role, index));
                let rotation = scalar(ROTATION_KEY) * 360.0;
                let (dx, dy) = unit_direction(scalar(ANGLE_KEY));
                let radius = scalar(RADIUS_KEY) * max_radius;
                let scale = base_scale * self.config.size_variation(index);

                let mut layout = SymbolLayout {
                    x: dx * radius,
                    y: dy * radius,
                    scale,
                    rotation,
                };
                self.keep_inside(&mut layout, self.config.footprint_radius(scale));
                layout
            })
            .collect()
    }

    /// One pass over all pairs. Returns whether any pair collided.
    fn resolve_round(&self, layouts: &mut [SymbolLayout]) -> bool {
        let mut had_collision = false;
        let count = layouts.len();

        for i in 0..count {
            for j in (i + 1)..count {
                let (head, tail) = layouts.split_at_mut(j);
                if self.separate(&mut head[i], &mut tail[0], i * count + j) {
                    had_collision = true;
                }
            }
        }

        had_collision
    }

    /// Push two symbols apart if their footprints are too close.
    fn separate(&self, a: &mut SymbolLayout, b: &mut SymbolLayout, pair_key: usize) -> bool {
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        let distance = (dx * dx + dy * dy).sqrt();
        let required = self.config.required_distance(a.scale, b.scale);

        if !self.config.is_collision(distance, required) {
            return false;
        }

        let (nx, ny) = if distance > COINCIDENT {
            (dx / distance, dy / distance)
        } else {
            unit_direction(self.source.scalar(scalar_key(0, PAIR_KEY, pair_key)))
        };

        let push = (required - distance) * self.config.push_strength;
        let total_mass = a.scale + b.scale;
        let push_a = push * (b.scale / total_mass);
        let push_b = push * (a.scale / total_mass);

        a.x -= nx * push_a;
        a.y -= ny * push_a;
        b.x += nx * push_b;
        b.y += ny * push_b;

        self.keep_inside(a, self.config.footprint_radius(a.scale));
        self.keep_inside(b, self.config.footprint_radius(b.scale));
        true
    }

    fn keep_inside(&self, layout: &mut SymbolLayout, radius: f64) {
        let max_distance = (self.config.usable_radius - radius).max(0.0);
        let distance = (layout.x * layout.x + layout.y * layout.y).sqrt();
        if distance > max_distance {
            let shrink = max_distance / distance;
            layout.x *= shrink;
            layout.y *= shrink;
        }
    }
}

/// Key of the scalar for `role` of symbol (or pair) `index` on card `card_id`.
///
/// Indices wrap past 2^30, far beyond any card this engine lays out.
fn scalar_key(card_id: u32, role: u64, index: usize) -> u64 {
    (u64::from(card_id) << CARD_SHIFT) | (role << ROLE_SHIFT) | (index as u64 & INDEX_MASK)
}

/// Unit vector for a fraction of a full turn, `turns` in `[0, 1)`.
///
/// The quarter turn is picked exactly; within it the rational parametrisation
/// `((1 - t²) / (1 + t²), 2t / (1 + t²))` with `t ∈ [0, 1)` sweeps 0° to 90°
/// without calling any transcendental function.
fn unit_direction(turns: f64) -> (f64, f64) {
    let quarters = turns.rem_euclid(1.0) * 4.0;
    let quadrant = quarters.floor();
    let t = quarters - quadrant;
    let denominator = 1.0 + t * t;
    let (x, y) = ((1.0 - t * t) / denominator, 2.0 * t / denominator);

    match quadrant as u8 {
        0 => (x, y),
        1 => (-y, x),
        2 => (-x, -y),
        _ => (y, -x),
    }
}
