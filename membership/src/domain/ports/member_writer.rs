//! Port for persisting validated member submissions.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::member::MemberId;
use crate::domain::profile::{DepartmentId, EmploymentStatus, Gender};
use crate::domain::qualification::Qualification;

/// Errors surfaced by member writer adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemberWriterError {
    /// The upstream sink could not be reached.
    #[error("member writer connection failed: {message}")]
    Connection {
        /// Adapter-supplied failure description.
        message: String,
    },
    /// The mutation itself failed upstream.
    #[error("member writer request failed: {message}")]
    Query {
        /// Adapter-supplied failure description.
        message: String,
    },
    /// The sink refused the submission (duplicate username, stale record).
    #[error("member submission rejected: {message}")]
    Rejected {
        /// Adapter-supplied rejection reason.
        message: String,
    },
}

impl MemberWriterError {
    /// Helper for connection related adapter errors.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for request failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Helper for upstream rejections.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }
}

/// Validated member submission, normalized for the wire.
///
/// Text fields use `None` rather than empty strings; the password only
/// travels on creation flows. Wire names follow the upstream French field
/// spellings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberPayload {
    /// Full name.
    #[serde(rename = "nom", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Username.
    #[serde(rename = "pseudo", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number.
    #[serde(rename = "telephone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Street address.
    #[serde(rename = "adresse", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Gender.
    #[serde(rename = "genre", skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Age bracket.
    #[serde(rename = "tranche_age", skip_serializing_if = "Option::is_none")]
    pub age_bracket: Option<String>,
    /// Profession.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    /// Employment situation.
    #[serde(
        rename = "situation_professionnelle",
        skip_serializing_if = "Option::is_none"
    )]
    pub employment_status: Option<EmploymentStatus>,
    /// City of residence.
    #[serde(rename = "ville_residence", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Country of origin.
    #[serde(rename = "origine", skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    /// Marital status.
    #[serde(
        rename = "situation_matrimoniale",
        skip_serializing_if = "Option::is_none"
    )]
    pub marital_status: Option<String>,
    /// Education level.
    #[serde(rename = "niveau_education", skip_serializing_if = "Option::is_none")]
    pub education_level: Option<String>,
    /// Qualification tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualification: Option<Qualification>,
    /// Departments served in.
    #[serde(rename = "departement_ids", default)]
    pub department_ids: Vec<DepartmentId>,
    /// Image preview reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Password, creation flows only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Port for member create/update submissions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberWriter: Send + Sync {
    /// Create a member from a validated payload, returning the new id.
    async fn create(&self, payload: &MemberPayload) -> Result<MemberId, MemberWriterError>;

    /// Update an existing member from a validated payload.
    async fn update(
        &self,
        id: &MemberId,
        payload: &MemberPayload,
    ) -> Result<(), MemberWriterError>;
}

/// Fixture implementation for tests that do not exercise submissions.
///
/// Accepts everything; `create` mints a random identifier.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureMemberWriter;

#[async_trait]
impl MemberWriter for FixtureMemberWriter {
    async fn create(&self, _payload: &MemberPayload) -> Result<MemberId, MemberWriterError> {
        Ok(MemberId::random())
    }

    async fn update(
        &self,
        _id: &MemberId,
        _payload: &MemberPayload,
    ) -> Result<(), MemberWriterError> {
        Ok(())
    }
}
