use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::planner::{BonusConfig, MAX_MULTIPLIER, NEUTRAL_MULTIPLIER};

/// User-facing bonus settings, as persisted between sessions.
///
/// The efficiency toggles switch a tier's amount and room bonuses off
/// without losing the configured numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BonusSettings {
    pub final_amount: f64,
    pub intermediate_amount: f64,
    pub final_room: f64,
    pub intermediate_room: f64,
    pub final_value: f64,
    pub intermediate_value: f64,
    pub final_efficiency: bool,
    pub intermediate_efficiency: bool,
}

impl Default for BonusSettings {
    fn default() -> Self {
        Self {
            final_amount: NEUTRAL_MULTIPLIER,
            intermediate_amount: NEUTRAL_MULTIPLIER,
            final_room: NEUTRAL_MULTIPLIER,
            intermediate_room: NEUTRAL_MULTIPLIER,
            final_value: NEUTRAL_MULTIPLIER,
            intermediate_value: NEUTRAL_MULTIPLIER,
            final_efficiency: true,
            intermediate_efficiency: true,
        }
    }
}

impl BonusSettings {
    /// Snapshot the settings into the multipliers the planner reads.
    ///
    /// Out-of-range multipliers resolve to neutral, so hand-edited files
    /// never reach the planner with a zero, negative or runaway bonus.
    pub fn resolve(&self) -> BonusConfig {
        let gate = |enabled: bool, value: f64| {
            if enabled {
                sanitize_multiplier(value)
            } else {
                NEUTRAL_MULTIPLIER
            }
        };

        BonusConfig {
            final_amount_bonus: gate(self.final_efficiency, self.final_amount),
            intermediate_amount_bonus: gate(self.intermediate_efficiency, self.intermediate_amount),
            final_room_bonus: gate(self.final_efficiency, self.final_room),
            intermediate_room_bonus: gate(self.intermediate_efficiency, self.intermediate_room),
            final_value_bonus: sanitize_multiplier(self.final_value),
            intermediate_value_bonus: sanitize_multiplier(self.intermediate_value),
        }
    }

    /// Replace every out-of-range multiplier with neutral.
    pub fn sanitized(mut self) -> Self {
        for slot in [
            &mut self.final_amount,
            &mut self.intermediate_amount,
            &mut self.final_room,
            &mut self.intermediate_room,
            &mut self.final_value,
            &mut self.intermediate_value,
        ] {
            *slot = sanitize_multiplier(*slot);
        }
        self
    }

    /// Compact one-line description.
    pub fn display(&self) -> String {
        let flag = |on: bool| if on { "on" } else { "off" };
        format!(
            "final: amount={:.3} room={:.3} value={:.3} efficiency={} | intermediate: amount={:.3} room={:.3} value={:.3} efficiency={}",
            self.final_amount,
            self.final_room,
            self.final_value,
            flag(self.final_efficiency),
            self.intermediate_amount,
            self.intermediate_room,
            self.intermediate_value,
            flag(self.intermediate_efficiency),
        )
    }
}

fn valid_multiplier(value: f64) -> bool {
    value.is_finite() && value > 0.0 && value <= MAX_MULTIPLIER
}

/// Keep `value` if it is a usable multiplier, otherwise fall back to 1.0.
pub fn sanitize_multiplier(value: f64) -> f64 {
    if valid_multiplier(value) {
        value
    } else {
        warn!("invalid bonus {}, using {}", value, NEUTRAL_MULTIPLIER);
        NEUTRAL_MULTIPLIER
    }
}

/// Parse a multiplier typed by the user.
///
/// Anything that is not a positive finite number up to `MAX_MULTIPLIER`
/// falls back to 1.0.
pub fn parse_multiplier(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if valid_multiplier(value) => value,
        _ => {
            warn!("invalid bonus {:?}, using {}", text, NEUTRAL_MULTIPLIER);
            NEUTRAL_MULTIPLIER
        }
    }
}
