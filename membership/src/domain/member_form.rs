//! Member form draft and its reconciliation state machine.
//!
//! One UI session owns one [`MemberFormState`] exclusively. All transitions
//! run synchronously on discrete events; the only concurrency-adjacent piece
//! is the manual-override window, modelled as a deadline against an injected
//! clock so there is no timer to leak and nothing fires after teardown.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use mockable::Clock;

use super::member::MemberId;
use super::member_form_validation::{ValidationOptions, ValidationReport, validate_draft};
use super::profile::{DepartmentId, EmploymentStatus, Gender, MemberProfile};
use super::qualification::Qualification;

/// How long a manual switch change suppresses the derived reconciliation
/// pass, in milliseconds.
pub const MANUAL_OVERRIDE_WINDOW_MS: i64 = 200;

/// Mutable draft of a member's editable profile fields.
///
/// Free-text fields use the empty string for "not filled in", mirroring the
/// form inputs they back; closed sets are optional enums.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberFormDraft {
    /// Full name.
    pub name: String,
    /// Username shown in listings.
    pub username: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Street address.
    pub address: String,
    /// Gender.
    pub gender: Option<Gender>,
    /// Age bracket from the catalog collaborator.
    pub age_bracket: String,
    /// Profession, meaningful when the employment situation requires one.
    pub profession: String,
    /// Employment situation.
    pub employment_status: Option<EmploymentStatus>,
    /// City of residence.
    pub city: String,
    /// Country of origin.
    pub origin: String,
    /// Marital status from the catalog collaborator.
    pub marital_status: String,
    /// Education level from the catalog collaborator.
    pub education_level: String,
    /// Qualification tag.
    pub qualification: Option<Qualification>,
    /// Departments the member serves in.
    pub department_ids: Vec<DepartmentId>,
    /// Preview URI supplied by the image-upload collaborator.
    pub image: Option<String>,
    /// Password, only relevant for new-account creation flows.
    pub password: String,
}

/// Closed set of field updates accepted by [`MemberFormState::apply`].
///
/// One variant per draft field keeps unknown-field mistakes a compile error
/// instead of a silent runtime no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberFormUpdate {
    /// Set the full name.
    Name(String),
    /// Set the username.
    Username(String),
    /// Set the email address.
    Email(String),
    /// Set the phone number.
    Phone(String),
    /// Set the street address.
    Address(String),
    /// Set or clear the gender.
    Gender(Option<Gender>),
    /// Set the age bracket.
    AgeBracket(String),
    /// Set the profession.
    Profession(String),
    /// Set or clear the employment situation; clears the profession when the
    /// new situation does not require one.
    EmploymentStatus(Option<EmploymentStatus>),
    /// Set the city of residence.
    City(String),
    /// Set the country of origin.
    Origin(String),
    /// Set the marital status.
    MaritalStatus(String),
    /// Set the education level.
    EducationLevel(String),
    /// Set or clear the qualification tag.
    Qualification(Option<Qualification>),
    /// Replace the department list; runs the derived reconciliation pass.
    Departments(Vec<DepartmentId>),
    /// Set or clear the image preview reference.
    Image(Option<String>),
    /// Set the password.
    Password(String),
}

/// Manual-override window state for the serves-in-department switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SwitchOverride {
    Idle,
    ManualPending { expires_at: DateTime<Utc> },
}

/// Reconciliation state machine backing the member form.
///
/// Owns the draft, the derived serves-in-department switch, and the
/// manual-override window that keeps the two from fighting. Pure state: no
/// I/O, safe to interrogate on every render.
#[derive(Clone)]
pub struct MemberFormState {
    draft: MemberFormDraft,
    serves_in_department: bool,
    override_state: SwitchOverride,
    seeded_id: Option<MemberId>,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for MemberFormState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemberFormState")
            .field("draft", &self.draft)
            .field("serves_in_department", &self.serves_in_department)
            .field("override_state", &self.override_state)
            .field("seeded_id", &self.seeded_id)
            .finish_non_exhaustive()
    }
}

impl MemberFormState {
    /// Create an empty form.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            draft: MemberFormDraft::default(),
            serves_in_department: false,
            override_state: SwitchOverride::Idle,
            seeded_id: None,
            clock,
        }
    }

    /// Create a form pre-filled from an existing member's profile.
    #[must_use]
    pub fn from_seed(clock: Arc<dyn Clock>, profile: &MemberProfile) -> Self {
        let mut state = Self::new(clock);
        state.apply_seed(profile);
        state
    }

    /// Seed the form from a profile.
    ///
    /// Re-seeding with the member currently being edited is a no-op so that
    /// repeated renders never wipe in-progress edits; a different member id
    /// fully resets the draft.
    pub fn seed(&mut self, profile: &MemberProfile) {
        if self.seeded_id.as_ref() == Some(&profile.id) {
            return;
        }
        self.apply_seed(profile);
    }

    /// Current draft, read-only.
    #[must_use]
    pub const fn draft(&self) -> &MemberFormDraft {
        &self.draft
    }

    /// Current serves-in-department switch position.
    #[must_use]
    pub const fn serves_in_department(&self) -> bool {
        self.serves_in_department
    }

    /// The member this form was last seeded from, when editing.
    #[must_use]
    pub const fn seeded_member(&self) -> Option<&MemberId> {
        self.seeded_id.as_ref()
    }

    /// Apply a field update.
    pub fn apply(&mut self, update: MemberFormUpdate) {
        match update {
            MemberFormUpdate::Name(value) => self.draft.name = value,
            MemberFormUpdate::Username(value) => self.draft.username = value,
            MemberFormUpdate::Email(value) => self.draft.email = value,
            MemberFormUpdate::Phone(value) => self.draft.phone = value,
            MemberFormUpdate::Address(value) => self.draft.address = value,
            MemberFormUpdate::Gender(value) => self.draft.gender = value,
            MemberFormUpdate::AgeBracket(value) => self.draft.age_bracket = value,
            MemberFormUpdate::Profession(value) => self.draft.profession = value,
            MemberFormUpdate::EmploymentStatus(value) => {
                self.draft.employment_status = value;
                if !value.is_some_and(EmploymentStatus::requires_profession) {
                    self.draft.profession.clear();
                }
            }
            MemberFormUpdate::City(value) => self.draft.city = value,
            MemberFormUpdate::Origin(value) => self.draft.origin = value,
            MemberFormUpdate::MaritalStatus(value) => self.draft.marital_status = value,
            MemberFormUpdate::EducationLevel(value) => self.draft.education_level = value,
            MemberFormUpdate::Qualification(value) => self.draft.qualification = value,
            MemberFormUpdate::Departments(ids) => {
                self.draft.department_ids = ids;
                self.reconcile_departments();
            }
            MemberFormUpdate::Image(value) => self.draft.image = value,
            MemberFormUpdate::Password(value) => self.draft.password = value,
        }
    }

    /// Move the serves-in-department switch by explicit user action.
    ///
    /// Switching off clears the department list; switching on never touches
    /// it. Either direction opens the manual-override window so the derived
    /// pass triggered by that very change cannot immediately re-toggle the
    /// switch from stale list content.
    pub fn set_serves_in_department(&mut self, checked: bool) {
        self.serves_in_department = checked;
        if !checked {
            self.draft.department_ids.clear();
        }
        self.override_state = SwitchOverride::ManualPending {
            expires_at: self.clock.utc() + Duration::milliseconds(MANUAL_OVERRIDE_WINDOW_MS),
        };
    }

    /// Validate the draft against the submission rules.
    #[must_use]
    pub fn validate(&self, options: ValidationOptions) -> ValidationReport {
        validate_draft(&self.draft, self.serves_in_department, options)
    }

    /// Return to the initial state, optionally re-seeded.
    ///
    /// Always closes any pending manual-override window, which is the only
    /// cleanup this state owes its owner on dismissal.
    pub fn reset(&mut self, seed: Option<&MemberProfile>) {
        self.draft = MemberFormDraft::default();
        self.serves_in_department = false;
        self.override_state = SwitchOverride::Idle;
        self.seeded_id = None;
        if let Some(profile) = seed {
            self.apply_seed(profile);
        }
    }

    fn apply_seed(&mut self, profile: &MemberProfile) {
        self.draft = MemberFormDraft {
            name: profile.name.clone().unwrap_or_default(),
            username: profile.username.clone().unwrap_or_default(),
            email: profile.email.clone().unwrap_or_default(),
            phone: profile.phone.clone().unwrap_or_default(),
            address: profile.address.clone().unwrap_or_default(),
            gender: profile.gender,
            age_bracket: profile.age_bracket.clone().unwrap_or_default(),
            profession: profile.profession.clone().unwrap_or_default(),
            employment_status: profile.employment_status,
            city: profile.city.clone().unwrap_or_default(),
            origin: profile.origin.clone().unwrap_or_default(),
            marital_status: profile.marital_status.clone().unwrap_or_default(),
            education_level: profile.education_level.clone().unwrap_or_default(),
            qualification: profile.qualification,
            department_ids: profile.department_ids.clone(),
            image: profile.image.clone(),
            password: String::new(),
        };
        self.serves_in_department = !profile.department_ids.is_empty();
        self.override_state = SwitchOverride::Idle;
        self.seeded_id = Some(profile.id.clone());
    }

    /// Derived pass keeping the switch consistent with the department list.
    ///
    /// Skipped entirely while the manual-override window is open. A
    /// non-empty list forces the switch on; the pass never forces it off.
    /// Only the explicit manual action clears departments.
    fn reconcile_departments(&mut self) {
        if let SwitchOverride::ManualPending { expires_at } = self.override_state {
            if self.clock.utc() < expires_at {
                return;
            }
            self.override_state = SwitchOverride::Idle;
        }
        if !self.draft.department_ids.is_empty() {
            self.serves_in_department = true;
        }
    }
}

#[cfg(test)]
#[path = "member_form_tests.rs"]
mod tests;
