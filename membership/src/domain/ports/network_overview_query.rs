//! Driving port for the network detail screens.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::error::DomainError;
use crate::domain::member::Member;
use crate::domain::network::NetworkId;

/// Per-group roster summary shown on the network detail screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    /// Group display name, when set upstream.
    pub name: Option<String>,
    /// Number of resolved members in the group.
    pub member_count: usize,
}

/// Read-only aggregation view model for one network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkOverview {
    /// The network this overview describes.
    pub network_id: NetworkId,
    /// Deduplicated headcount across all roles.
    pub total_members: usize,
    /// Number of groups in the network.
    pub group_count: usize,
    /// Number of companions attached outside any group.
    pub companion_count: usize,
    /// Per-group summaries, in upstream order.
    pub groups: Vec<GroupSummary>,
}

/// Driving port the rendering layer consumes for aggregation reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NetworkOverviewQuery: Send + Sync {
    /// Compute the aggregation view model for a network.
    async fn overview(&self, id: &NetworkId) -> Result<NetworkOverview, DomainError>;

    /// Candidates eligible for the "add companion" picker.
    async fn companion_candidates(&self, id: &NetworkId) -> Result<Vec<Member>, DomainError>;

    /// Candidates eligible for the group responsible/member pickers.
    async fn group_candidates(&self, id: &NetworkId) -> Result<Vec<Member>, DomainError>;
}
