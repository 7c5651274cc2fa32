//! Port for the upstream network directory.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::network::{Network, NetworkId};

/// Errors surfaced by network directory adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkRepositoryError {
    /// The upstream directory could not be reached.
    #[error("network repository connection failed: {message}")]
    Connection {
        /// Adapter-supplied failure description.
        message: String,
    },
    /// The lookup itself failed upstream.
    #[error("network repository query failed: {message}")]
    Query {
        /// Adapter-supplied failure description.
        message: String,
    },
}

impl NetworkRepositoryError {
    /// Helper for connection related adapter errors.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for fetching a network's relational records.
///
/// Adapters own transport and call the raw documents' `normalize` at their
/// edge; the domain only ever sees canonical [`Network`] values.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NetworkRepository: Send + Sync {
    /// Fetch a network by identifier.
    ///
    /// Returns `None` when the upstream directory knows no such network.
    async fn find_by_id(&self, id: &NetworkId)
    -> Result<Option<Network>, NetworkRepositoryError>;
}

/// Fixture implementation for tests that do not exercise network lookups.
///
/// Always returns `None`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureNetworkRepository;

#[async_trait]
impl NetworkRepository for FixtureNetworkRepository {
    async fn find_by_id(
        &self,
        _id: &NetworkId,
    ) -> Result<Option<Network>, NetworkRepositoryError> {
        Ok(None)
    }
}
