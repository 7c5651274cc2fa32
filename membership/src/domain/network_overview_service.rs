//! Network aggregation domain services.
//!
//! Implements the overview driving port: fetches canonical records through
//! the driven ports, runs the roster arithmetic, and maps collaborator
//! failures into transport-agnostic domain errors.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::member::Member;
use crate::domain::network::{Network, NetworkId};
use crate::domain::ports::{
    GroupSummary, MemberDirectory, MemberDirectoryError, NetworkOverview, NetworkOverviewQuery,
    NetworkRepository, NetworkRepositoryError,
};

fn map_repository_error(error: NetworkRepositoryError) -> DomainError {
    match error {
        NetworkRepositoryError::Connection { message } => {
            DomainError::service_unavailable(format!("network directory unavailable: {message}"))
        }
        NetworkRepositoryError::Query { message } => {
            DomainError::internal(format!("network directory error: {message}"))
        }
    }
}

fn map_directory_error(error: MemberDirectoryError) -> DomainError {
    match error {
        MemberDirectoryError::Connection { message } => {
            DomainError::service_unavailable(format!("member directory unavailable: {message}"))
        }
        MemberDirectoryError::Query { message } => {
            DomainError::internal(format!("member directory error: {message}"))
        }
    }
}

/// Network overview service implementing the aggregation driving port.
#[derive(Clone)]
pub struct NetworkOverviewService<R, D> {
    network_repo: Arc<R>,
    member_directory: Arc<D>,
}

impl<R, D> NetworkOverviewService<R, D> {
    /// Create a new service with the given driven ports.
    pub const fn new(network_repo: Arc<R>, member_directory: Arc<D>) -> Self {
        Self {
            network_repo,
            member_directory,
        }
    }
}

impl<R, D> NetworkOverviewService<R, D>
where
    R: NetworkRepository,
    D: MemberDirectory,
{
    async fn fetch_network(&self, id: &NetworkId) -> Result<Network, DomainError> {
        self.network_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| DomainError::not_found(format!("network {id} not found")))
    }

    async fn candidates(&self) -> Result<Vec<Member>, DomainError> {
        self.member_directory
            .list_candidates()
            .await
            .map_err(map_directory_error)
    }
}

#[async_trait]
impl<R, D> NetworkOverviewQuery for NetworkOverviewService<R, D>
where
    R: NetworkRepository,
    D: MemberDirectory,
{
    async fn overview(&self, id: &NetworkId) -> Result<NetworkOverview, DomainError> {
        let network = self.fetch_network(id).await?;
        let groups = network
            .groups
            .iter()
            .map(|group| GroupSummary {
                name: group.name.clone(),
                member_count: group.members.len(),
            })
            .collect();
        Ok(NetworkOverview {
            network_id: id.clone(),
            total_members: network.total_members(),
            group_count: network.groups.len(),
            companion_count: network.companions.len(),
            groups,
        })
    }

    async fn companion_candidates(&self, id: &NetworkId) -> Result<Vec<Member>, DomainError> {
        let network = self.fetch_network(id).await?;
        let candidates = self.candidates().await?;
        Ok(network.eligible_companions(&candidates))
    }

    async fn group_candidates(&self, id: &NetworkId) -> Result<Vec<Member>, DomainError> {
        let network = self.fetch_network(id).await?;
        let candidates = self.candidates().await?;
        Ok(network.eligible_group_candidates(&candidates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::member::MemberId;
    use crate::domain::network::Group;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{
        FixtureMemberDirectory, MockMemberDirectory, MockNetworkRepository,
    };
    use crate::domain::qualification::Qualification;

    fn member(id: &str) -> Member {
        Member::new(MemberId::new(id).expect("valid test id"))
    }

    fn network_id(id: &str) -> NetworkId {
        NetworkId::new(id).expect("valid network id")
    }

    /// Worked roster: U2 in two groups, U3 leads group A and the network,
    /// U6 leads only the network.
    fn sample_network() -> Network {
        Network {
            responsable1: Some(member("u3")),
            responsable2: Some(member("u6")),
            groups: vec![
                Group {
                    name: Some("Groupe A".to_owned()),
                    responsable1: Some(member("u3")),
                    responsable2: None,
                    members: vec![member("u1"), member("u2")],
                },
                Group {
                    name: Some("Groupe B".to_owned()),
                    responsable1: None,
                    responsable2: None,
                    members: vec![member("u2"), member("u4")],
                },
            ],
            companions: vec![
                member("u5").with_qualification(Qualification::CompagnonOeuvre),
            ],
        }
    }

    fn service_with_network(
        network: Network,
    ) -> NetworkOverviewService<MockNetworkRepository, FixtureMemberDirectory> {
        let mut repo = MockNetworkRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .return_once(move |_| Ok(Some(network)));
        NetworkOverviewService::new(Arc::new(repo), Arc::new(FixtureMemberDirectory))
    }

    #[tokio::test]
    async fn overview_reports_the_deduplicated_total() {
        let service = service_with_network(sample_network());
        let overview = service
            .overview(&network_id("r1"))
            .await
            .expect("overview succeeds");

        assert_eq!(overview.total_members, 6);
        assert_eq!(overview.group_count, 2);
        assert_eq!(overview.companion_count, 1);
        assert_eq!(
            overview
                .groups
                .iter()
                .map(|group| group.member_count)
                .collect::<Vec<_>>(),
            vec![2, 2]
        );
    }

    #[tokio::test]
    async fn overview_maps_missing_networks_to_not_found() {
        let mut repo = MockNetworkRepository::new();
        repo.expect_find_by_id().times(1).return_once(|_| Ok(None));
        let service =
            NetworkOverviewService::new(Arc::new(repo), Arc::new(FixtureMemberDirectory));

        let error = service
            .overview(&network_id("r9"))
            .await
            .expect_err("missing network");
        assert_eq!(error.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn overview_maps_connection_failures_to_service_unavailable() {
        let mut repo = MockNetworkRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .return_once(|_| Err(NetworkRepositoryError::connection("socket closed")));
        let service =
            NetworkOverviewService::new(Arc::new(repo), Arc::new(FixtureMemberDirectory));

        let error = service
            .overview(&network_id("r1"))
            .await
            .expect_err("unreachable directory");
        assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
    }

    #[tokio::test]
    async fn companion_candidates_filter_placed_members() {
        let mut repo = MockNetworkRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .return_once(|_| Ok(Some(sample_network())));
        let mut directory = MockMemberDirectory::new();
        directory.expect_list_candidates().times(1).return_once(|| {
            Ok(vec![
                // Already a group member: ineligible even with the tag.
                member("u1").with_qualification(Qualification::CompagnonOeuvre),
                // Already a companion of the network.
                member("u5").with_qualification(Qualification::CompagnonOeuvre),
                // Free companion of work: eligible.
                member("u7").with_qualification(Qualification::CompagnonOeuvre),
                // Wrong qualification.
                member("u8"),
            ])
        });
        let service = NetworkOverviewService::new(Arc::new(repo), Arc::new(directory));

        let eligible = service
            .companion_candidates(&network_id("r1"))
            .await
            .expect("candidates succeed");
        assert_eq!(
            eligible.iter().map(|m| m.id.as_str()).collect::<Vec<_>>(),
            vec!["u7"]
        );
    }

    #[tokio::test]
    async fn group_candidates_exclude_companions_of_work() {
        let mut repo = MockNetworkRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .return_once(|_| Ok(Some(sample_network())));
        let mut directory = MockMemberDirectory::new();
        directory.expect_list_candidates().times(1).return_once(|| {
            Ok(vec![
                member("u7").with_qualification(Qualification::CompagnonOeuvre),
                member("u8"),
                member("u5"), // current companion, tag or not
            ])
        });
        let service = NetworkOverviewService::new(Arc::new(repo), Arc::new(directory));

        let eligible = service
            .group_candidates(&network_id("r1"))
            .await
            .expect("candidates succeed");
        assert_eq!(
            eligible.iter().map(|m| m.id.as_str()).collect::<Vec<_>>(),
            vec!["u8"]
        );
    }
}
