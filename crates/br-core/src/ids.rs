//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  `NodeId` and `DecisionId` are
//! indices into the arenas of a `BehaviorGraph`; `AgentId` indexes the
//! simulation's agent list.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Index of an agent in the simulation's agent list.
    pub struct AgentId(u32);
}

typed_id! {
    /// Index of a behavior node (a state) in a `BehaviorGraph`.
    pub struct NodeId(u32);
}

typed_id! {
    /// Stable identity of a registered decision in a `BehaviorGraph`.
    ///
    /// Cooldown ledgers are keyed by this id, so a single decision instance
    /// shared by many agents keeps separate per-agent state.
    pub struct DecisionId(u32);
}

typed_id! {
    /// Team / faction tag used by ally-count queries.
    pub struct FactionId(u16);
}
