//! Comparison direction shared by threshold decisions.

/// Which side of a threshold makes a decision fire.
///
/// The exact operator differs by decision; see [`HealthRatio`][crate::HealthRatio]
/// and [`AllyCount`][crate::AllyCount].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ThresholdMode {
    #[default]
    Below,
    Above,
}
