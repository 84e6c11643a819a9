//! Overlap diagnostics for computed layouts.
//!
//! Used to measure how often the solver leaves residual overlap for a given
//! symbol count.

use serde::{Deserialize, Serialize};

use super::config::LayoutConfig;
use super::engine::{LayoutEngine, SymbolLayout};
use crate::core::ScalarSource;

/// Two symbols closer than the required clearance, beyond the contact
/// tolerance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collision {
    pub first: usize,
    pub second: usize,
    pub distance: f64,
    pub min_required: f64,
}

impl Collision {
    /// How far the pair is from the required clearance.
    #[must_use]
    pub fn overlap(&self) -> f64 {
        self.min_required - self.distance
    }
}

/// Every colliding pair in one layout.
#[must_use]
pub fn detect_collisions(layouts: &[SymbolLayout], config: &LayoutConfig) -> Vec<Collision> {
    let mut collisions = Vec::new();

    for (i, a) in layouts.iter().enumerate() {
        for (offset, b) in layouts[i + 1..].iter().enumerate() {
            let dx = b.x - a.x;
            let dy = b.y - a.y;
            let distance = (dx * dx + dy * dy).sqrt();
            let min_required = config.required_distance(a.scale, b.scale);

            if config.is_collision(distance, min_required) {
                collisions.push(Collision {
                    first: i,
                    second: i + 1 + offset,
                    distance,
                    min_required,
                });
            }
        }
    }

    collisions
}

/// Collision statistics over many card ids.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSurvey {
    pub total_cards: usize,
    pub symbols_per_card: usize,
    pub cards_with_collisions: usize,
    pub total_collisions: usize,
}

impl LayoutSurvey {
    /// Percentage of cards with at least one collision.
    #[must_use]
    pub fn collision_rate(&self) -> f64 {
        if self.total_cards == 0 {
            0.0
        } else {
            self.cards_with_collisions as f64 / self.total_cards as f64 * 100.0
        }
    }

    /// Percentage of cards without collisions.
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        100.0 - self.collision_rate()
    }

    /// Average number of colliding pairs per card.
    #[must_use]
    pub fn avg_collisions_per_card(&self) -> f64 {
        if self.total_cards == 0 {
            0.0
        } else {
            self.total_collisions as f64 / self.total_cards as f64
        }
    }
}

/// Layout card ids `0..card_count` with `symbols_per_card` symbols each and
/// count the residual collisions.
pub fn survey<S: ScalarSource>(
    engine: &LayoutEngine<S>,
    card_count: u32,
    symbols_per_card: usize,
) -> LayoutSurvey {
    let mut survey = LayoutSurvey {
        total_cards: card_count as usize,
        symbols_per_card,
        ..LayoutSurvey::default()
    };

    for card_id in 0..card_count {
        let layouts = engine.layout(symbols_per_card, card_id);
        let collisions = detect_collisions(&layouts, engine.config());
        if !collisions.is_empty() {
            survey.cards_with_collisions += 1;
            survey.total_collisions += collisions.len();
            tracing::debug!(
                card_id,
                collisions = collisions.len(),
                worst_overlap = collisions.iter().map(Collision::overlap).fold(0.0, f64::max),
                "residual overlap"
            );
        }
    }

    tracing::debug!(
        symbols_per_card,
        cards = survey.total_cards,
        collision_rate = survey.collision_rate(),
        "layout survey finished"
    );

    survey
}
