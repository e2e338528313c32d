//! The spatial-query capability required by ally-count decisions.

use br_core::{FactionId, Position};

/// Count agents near a point.
///
/// # Contract
///
/// The count **includes** an agent standing at `origin`, i.e. the querying
/// agent itself is part of the result.  Callers that want "others" subtract
/// one.  A point is inside the radius when its squared distance to `origin`
/// is `<= radius²`.
///
/// Implementations must be `Sync`: with the `parallel` driver feature the
/// same query object is read from many worker threads at once.
pub trait SpatialQuery: Sync {
    /// Number of agents within `radius` of `origin`, restricted to `faction`
    /// when one is given.
    fn count_in_radius(&self, origin: Position, radius: f32, faction: Option<FactionId>) -> usize;
}

/// A [`SpatialQuery`] that sees nothing.  Use when no agent tracks allies.
pub struct NoSpatial;

impl SpatialQuery for NoSpatial {
    fn count_in_radius(&self, _origin: Position, _radius: f32, _faction: Option<FactionId>) -> usize {
        0
    }
}
