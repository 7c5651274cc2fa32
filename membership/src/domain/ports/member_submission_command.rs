//! Driving port for member form submissions.

use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::member::MemberId;
use crate::domain::member_form::MemberFormState;

/// Driving port the rendering layer consumes to submit the member form.
///
/// Implementations validate before forwarding; an invalid draft never
/// reaches the writer and surfaces as an invalid-request error carrying the
/// full field-keyed report in its details.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberSubmissionCommand: Send + Sync {
    /// Validate and submit a new member, returning the created identifier.
    async fn create_member(&self, form: &MemberFormState) -> Result<MemberId, DomainError>;

    /// Validate and submit changes to an existing member.
    async fn update_member(
        &self,
        id: &MemberId,
        form: &MemberFormState,
    ) -> Result<(), DomainError>;
}
