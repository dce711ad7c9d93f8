use crate::domain::entities::Need;
use serde::{Deserialize, Serialize};

/// Aggregated tallies served by the remote store alongside the full need
/// list. Consumed passively for the dashboard view; never computed here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct NeedStats {
    pub total: u32,
    pub unverified: u32,
    pub verified: u32,
    pub fulfilled: u32,
    pub by_type: TypeBreakdown,
    pub by_urgency: UrgencyBreakdown,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TypeBreakdown {
    pub water: u32,
    pub food: u32,
    pub medical: u32,
    pub rescue: u32,
    pub other: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct UrgencyBreakdown {
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

/// Full need list plus statistics, as returned by `GET /needs`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NeedsOverview {
    pub stats: NeedStats,
    pub needs: Vec<Need>,
}
