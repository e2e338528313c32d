//! Data form of the built-in decisions.
//!
//! Graph files describe decisions as tagged records:
//!
//! ```json
//! { "kind": "proximity",    "range": 10.0, "invert": false }
//! { "kind": "health_ratio", "threshold_pct": 30.0, "mode": "below" }
//! { "kind": "ally_count",   "radius": 8.0, "threshold": 2, "mode": "above" }
//! { "kind": "state_timer",  "duration": 5.0 }
//! { "kind": "cooldown",     "cooldown": 1.5 }
//! ```
//!
//! (Deserialization requires the `serde` feature.)

use crate::{AllyCount, Cooldown, Decision, HealthRatio, Proximity, StateTimer, ThresholdMode};

/// Configuration for one of the five built-in decision variants.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum DecisionDef {
    Proximity {
        range:  f32,
        #[cfg_attr(feature = "serde", serde(default))]
        invert: bool,
    },
    HealthRatio {
        threshold_pct: f32,
        #[cfg_attr(feature = "serde", serde(default))]
        mode:          ThresholdMode,
    },
    AllyCount {
        radius:    f32,
        threshold: u32,
        #[cfg_attr(feature = "serde", serde(default))]
        mode:      ThresholdMode,
    },
    StateTimer {
        duration: f32,
    },
    Cooldown {
        cooldown: f32,
    },
}

impl DecisionDef {
    /// Instantiate the configured decision.
    pub fn into_decision(self) -> Box<dyn Decision> {
        match self {
            DecisionDef::Proximity { range, invert } => Box::new(Proximity { range, invert }),
            DecisionDef::HealthRatio { threshold_pct, mode } => {
                Box::new(HealthRatio { threshold_pct, mode })
            }
            DecisionDef::AllyCount { radius, threshold, mode } => {
                Box::new(AllyCount { radius, threshold, mode })
            }
            DecisionDef::StateTimer { duration } => Box::new(StateTimer { duration }),
            DecisionDef::Cooldown { cooldown } => Box::new(Cooldown { cooldown }),
        }
    }
}
