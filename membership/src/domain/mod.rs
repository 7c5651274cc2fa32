//! Domain primitives, aggregates, and services.
//!
//! Purpose: define the strongly typed membership entities, the roster
//! arithmetic over them, and the member form state machine, keeping alias
//! resolution and malformed-record tolerance at the ingestion boundary.
//! Document invariants and serialisation contracts (serde) in each type's
//! Rustdoc.
//!
//! Public surface:
//! - `DomainError` / `ErrorCode` — transport-agnostic failure payloads.
//! - `Member`, `Network`, `Group` — canonical records plus their `Raw*`
//!   wire-shaped counterparts.
//! - `MemberFormState` — the form draft and its reconciliation rules.
//! - `ports` — hexagonal boundary: driven collaborator ports and the
//!   driving ports implemented by the services below.

pub mod error;
pub mod member;
pub mod member_form;
pub mod member_form_validation;
mod member_submission_service;
pub mod network;
mod network_overview_service;
pub mod ports;
pub mod profile;
pub mod qualification;
mod roster;

pub use self::error::{DomainError, DomainErrorValidationError, ErrorCode};
pub use self::member::{Member, MemberId, MemberValidationError, RawMemberRecord};
pub use self::member_form::{
    MANUAL_OVERRIDE_WINDOW_MS, MemberFormDraft, MemberFormState, MemberFormUpdate,
};
pub use self::member_form_validation::{
    FormField, ValidationOptions, ValidationReport, validate_draft,
};
pub use self::member_submission_service::MemberSubmissionService;
pub use self::network::{
    Group, Network, NetworkId, NetworkValidationError, RawCompanion, RawGroup, RawMemberLink,
    RawNetwork,
};
pub use self::network_overview_service::NetworkOverviewService;
pub use self::profile::{
    DepartmentId, DepartmentValidationError, EmploymentStatus, Gender, MemberProfile,
};
pub use self::qualification::{ParseQualificationError, Qualification};

/// Convenient domain result alias.
///
/// # Examples
/// ```
/// use membership::domain::{DomainError, DomainResult};
///
/// fn lookup() -> DomainResult<u32> {
///     Err(DomainError::not_found("nothing here"))
/// }
/// ```
pub type DomainResult<T> = Result<T, DomainError>;
