//! Plain data row types written by output backends.

/// One node switch.  `from_node == to_node` for a self-transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionRow {
    pub tick:      u64,
    pub time_secs: f64,
    pub agent_id:  u32,
    pub from_node: u32,
    pub to_node:   u32,
}

/// Summary statistics for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:        u64,
    pub time_secs:   f64,
    pub transitions: u64,
}

/// The behavior state of one agent at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub tick:        u64,
    pub agent_id:    u32,
    pub node:        u32,
    pub state_timer: f32,
}
