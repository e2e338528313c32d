//! Agent vitals read by health-based decisions.

/// Current and maximum health of an agent.
///
/// Both values are non-negative.  An agent without a `Stats` handle is a
/// valid state; decisions that need one evaluate to `false`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    pub current_health: f32,
    pub max_health:     f32,
}

impl Stats {
    #[inline]
    pub fn new(current_health: f32, max_health: f32) -> Self {
        Self { current_health, max_health }
    }

    /// Full health.
    #[inline]
    pub fn full(max_health: f32) -> Self {
        Self::new(max_health, max_health)
    }

    /// `current / max`, or `None` when `max_health` is not positive.
    #[inline]
    pub fn health_ratio(&self) -> Option<f32> {
        if self.max_health > 0.0 {
            Some(self.current_health / self.max_health)
        } else {
            None
        }
    }

    /// Subtract `amount`, clamping at zero.
    pub fn damage(&mut self, amount: f32) {
        self.current_health = (self.current_health - amount).max(0.0);
    }

    /// Add `amount`, clamping at `max_health`.
    pub fn heal(&mut self, amount: f32) {
        self.current_health = (self.current_health + amount).min(self.max_health);
    }
}
