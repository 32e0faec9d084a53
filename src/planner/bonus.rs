use crate::models::ItemKind;
use crate::planner::constants::NEUTRAL_MULTIPLIER;

/// Production multipliers, snapshotted for one recompute.
///
/// Amount and room bonuses are keyed by the kind of the item doing the
/// crafting; value bonuses by the kind of the item being valued. Raw
/// materials are never crafted and have no value bonus, so every lookup
/// for `ItemKind::Raw` is neutral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BonusConfig {
    pub final_amount_bonus: f64,
    pub intermediate_amount_bonus: f64,
    pub final_room_bonus: f64,
    pub intermediate_room_bonus: f64,
    pub final_value_bonus: f64,
    pub intermediate_value_bonus: f64,
}

impl Default for BonusConfig {
    fn default() -> Self {
        Self {
            final_amount_bonus: NEUTRAL_MULTIPLIER,
            intermediate_amount_bonus: NEUTRAL_MULTIPLIER,
            final_room_bonus: NEUTRAL_MULTIPLIER,
            intermediate_room_bonus: NEUTRAL_MULTIPLIER,
            final_value_bonus: NEUTRAL_MULTIPLIER,
            intermediate_value_bonus: NEUTRAL_MULTIPLIER,
        }
    }
}

impl BonusConfig {
    pub fn amount_bonus(&self, kind: ItemKind) -> f64 {
        match kind {
            ItemKind::Final => self.final_amount_bonus,
            ItemKind::Intermediate => self.intermediate_amount_bonus,
            ItemKind::Raw => NEUTRAL_MULTIPLIER,
        }
    }

    pub fn room_bonus(&self, kind: ItemKind) -> f64 {
        match kind {
            ItemKind::Final => self.final_room_bonus,
            ItemKind::Intermediate => self.intermediate_room_bonus,
            ItemKind::Raw => NEUTRAL_MULTIPLIER,
        }
    }

    pub fn value_bonus(&self, kind: ItemKind) -> f64 {
        match kind {
            ItemKind::Final => self.final_value_bonus,
            ItemKind::Intermediate => self.intermediate_value_bonus,
            ItemKind::Raw => NEUTRAL_MULTIPLIER,
        }
    }

    /// Ingredient amount consumed per craft by an item of `kind`.
    ///
    /// The room bonus shrinks the base amount, then the amount bonus takes
    /// a discount off that. A discount smaller than one unit is rounded on
    /// its own first so it is not lost to truncation. Rounding is half away
    /// from zero throughout.
    pub fn adjusted_amount(&self, kind: ItemKind, raw_amount: i64) -> i64 {
        let raw = raw_amount as f64;
        let base = raw - raw * (self.room_bonus(kind) - 1.0);

        let mut discount = base * (self.amount_bonus(kind) - 1.0);
        if discount.abs() < 1.0 {
            discount = discount.round();
        }

        (base - discount).round() as i64
    }

    /// Worth of one unit of an item of `kind`.
    pub fn adjusted_value(&self, kind: ItemKind, raw_value: i64) -> i64 {
        (raw_value as f64 * self.value_bonus(kind)).round() as i64
    }
}
