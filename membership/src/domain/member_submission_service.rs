//! Member submission domain service.
//!
//! Implements the submission driving port: validates the form draft,
//! normalizes it for the wire (empty strings become absent fields), and
//! forwards to the writer port. An invalid draft never leaves the domain.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::member::MemberId;
use crate::domain::member_form::{MemberFormDraft, MemberFormState};
use crate::domain::member_form_validation::{ValidationOptions, ValidationReport};
use crate::domain::ports::{
    MemberPayload, MemberSubmissionCommand, MemberWriter, MemberWriterError,
};

fn map_writer_error(error: MemberWriterError) -> DomainError {
    match error {
        MemberWriterError::Connection { message } => {
            DomainError::service_unavailable(format!("member writer unavailable: {message}"))
        }
        MemberWriterError::Query { message } => {
            DomainError::internal(format!("member writer error: {message}"))
        }
        MemberWriterError::Rejected { message } => DomainError::conflict(message),
    }
}

fn normalize_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

fn build_payload(draft: &MemberFormDraft, include_password: bool) -> MemberPayload {
    MemberPayload {
        name: normalize_text(&draft.name),
        username: normalize_text(&draft.username),
        email: normalize_text(&draft.email),
        phone: normalize_text(&draft.phone),
        address: normalize_text(&draft.address),
        gender: draft.gender,
        age_bracket: normalize_text(&draft.age_bracket),
        profession: normalize_text(&draft.profession),
        employment_status: draft.employment_status,
        city: normalize_text(&draft.city),
        origin: normalize_text(&draft.origin),
        marital_status: normalize_text(&draft.marital_status),
        education_level: normalize_text(&draft.education_level),
        qualification: draft.qualification,
        department_ids: draft.department_ids.clone(),
        image: draft.image.clone(),
        password: if include_password {
            normalize_text(&draft.password)
        } else {
            None
        },
    }
}

fn gate_on_validation(form: &MemberFormState, options: ValidationOptions) -> Result<(), DomainError> {
    let report: ValidationReport = form.validate(options);
    if report.is_valid() {
        return Ok(());
    }
    tracing::debug!(
        violations = report.errors().len(),
        "member submission rejected by validation"
    );
    Err(DomainError::invalid_request("member form failed validation")
        .with_details(report.to_details()))
}

/// Member submission service implementing the submission driving port.
#[derive(Clone)]
pub struct MemberSubmissionService<W> {
    member_writer: Arc<W>,
}

impl<W> MemberSubmissionService<W> {
    /// Create a new service with the given writer port.
    pub const fn new(member_writer: Arc<W>) -> Self {
        Self { member_writer }
    }
}

#[async_trait]
impl<W> MemberSubmissionCommand for MemberSubmissionService<W>
where
    W: MemberWriter,
{
    async fn create_member(&self, form: &MemberFormState) -> Result<MemberId, DomainError> {
        gate_on_validation(
            form,
            ValidationOptions {
                require_password: true,
            },
        )?;
        let payload = build_payload(form.draft(), true);
        self.member_writer
            .create(&payload)
            .await
            .map_err(map_writer_error)
    }

    async fn update_member(
        &self,
        id: &MemberId,
        form: &MemberFormState,
    ) -> Result<(), DomainError> {
        gate_on_validation(form, ValidationOptions::default())?;
        let payload = build_payload(form.draft(), false);
        self.member_writer
            .update(id, &payload)
            .await
            .map_err(map_writer_error)
    }
}
