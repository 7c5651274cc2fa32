//! Port for listing picker candidates from the upstream directory.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::member::Member;

/// Errors surfaced by member directory adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemberDirectoryError {
    /// The upstream directory could not be reached.
    #[error("member directory connection failed: {message}")]
    Connection {
        /// Adapter-supplied failure description.
        message: String,
    },
    /// The listing itself failed upstream.
    #[error("member directory query failed: {message}")]
    Query {
        /// Adapter-supplied failure description.
        message: String,
    },
}

impl MemberDirectoryError {
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

/// Port for listing the members a picker may choose from.
///
/// The list is already deduplicated upstream; eligibility filtering against
/// a concrete network happens in the domain.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberDirectory: Send + Sync {
    /// List every candidate known to the directory.
    async fn list_candidates(&self) -> Result<Vec<Member>, MemberDirectoryError>;
}

/// Fixture implementation for tests that do not exercise candidate listings.
///
/// Always returns an empty list.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureMemberDirectory;

#[async_trait]
impl MemberDirectory for FixtureMemberDirectory {
    async fn list_candidates(&self) -> Result<Vec<Member>, MemberDirectoryError> {
        Ok(Vec::new())
    }
}
