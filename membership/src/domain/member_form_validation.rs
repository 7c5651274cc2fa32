//! Submission rules for the member form.
//!
//! Validation is exhaustive: every violated rule is reported in one pass,
//! keyed by a closed field set, and nothing here ever panics or raises.

use std::collections::BTreeMap;

use serde_json::Value;

use super::member_form::MemberFormDraft;
use super::profile::EmploymentStatus;

/// Closed set of fields a validation message can attach to.
///
/// `as_str` yields the stable wire key the rendering layer uses to anchor
/// messages next to inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    /// Username ("pseudo").
    Username,
    /// Email address.
    Email,
    /// Gender.
    Gender,
    /// Age bracket.
    AgeBracket,
    /// City of residence.
    City,
    /// Country of origin.
    Origin,
    /// Marital status.
    MaritalStatus,
    /// Education level.
    EducationLevel,
    /// Qualification tag.
    Qualification,
    /// Profession.
    Profession,
    /// Password.
    Password,
    /// Department list.
    Departments,
}

impl FormField {
    /// Stable wire key for this field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Username => "pseudo",
            Self::Email => "email",
            Self::Gender => "genre",
            Self::AgeBracket => "tranche_age",
            Self::City => "ville_residence",
            Self::Origin => "origine",
            Self::MaritalStatus => "situation_matrimoniale",
            Self::EducationLevel => "niveau_education",
            Self::Qualification => "qualification",
            Self::Profession => "profession",
            Self::Password => "password",
            Self::Departments => "departement_ids",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied switches for context-dependent rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Require a non-empty password (new-account creation flows).
    pub require_password: bool,
}

/// Field-keyed validation outcome.
///
/// Collected exhaustively: a draft missing several required fields reports
/// every violation at once, never just the first encountered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<FormField, String>,
}

impl ValidationReport {
    /// Whether the draft may be submitted.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// All violations, keyed by field.
    #[must_use]
    pub const fn errors(&self) -> &BTreeMap<FormField, String> {
        &self.errors
    }

    /// Message attached to a field, if that rule was violated.
    #[must_use]
    pub fn message(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Render the report as a wire-keyed JSON object for error details.
    #[must_use]
    pub fn to_details(&self) -> Value {
        Value::Object(
            self.errors
                .iter()
                .map(|(field, message)| (field.as_str().to_owned(), Value::from(message.clone())))
                .collect(),
        )
    }

    fn push(&mut self, field: FormField, message: &str) {
        self.errors.insert(field, message.to_owned());
    }
}

/// Validate a draft against the submission rules.
#[must_use]
pub fn validate_draft(
    draft: &MemberFormDraft,
    serves_in_department: bool,
    options: ValidationOptions,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    if is_blank(&draft.username) {
        report.push(FormField::Username, "Username is required.");
    }
    if is_blank(&draft.email) {
        report.push(FormField::Email, "Email is required.");
    } else if !has_email_shape(&draft.email) {
        report.push(FormField::Email, "Email must look like local@domain.tld.");
    }
    if draft.gender.is_none() {
        report.push(FormField::Gender, "Gender is required.");
    }
    if is_blank(&draft.age_bracket) {
        report.push(FormField::AgeBracket, "Age bracket is required.");
    }
    if is_blank(&draft.city) {
        report.push(FormField::City, "City of residence is required.");
    }
    if is_blank(&draft.origin) {
        report.push(FormField::Origin, "Origin is required.");
    }
    if is_blank(&draft.marital_status) {
        report.push(FormField::MaritalStatus, "Marital status is required.");
    }
    if is_blank(&draft.education_level) {
        report.push(FormField::EducationLevel, "Education level is required.");
    }
    if draft.qualification.is_none() {
        report.push(FormField::Qualification, "Qualification is required.");
    }
    if draft
        .employment_status
        .is_some_and(EmploymentStatus::requires_profession)
        && is_blank(&draft.profession)
    {
        report.push(
            FormField::Profession,
            "Profession is required for this employment situation.",
        );
    }
    if options.require_password && is_blank(&draft.password) {
        report.push(FormField::Password, "Password is required.");
    }
    if serves_in_department && draft.department_ids.is_empty() {
        report.push(FormField::Departments, "Select at least one department.");
    }

    report
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Minimal `local@domain.tld` shape check; real deliverability is the
/// upstream directory's problem.
fn has_email_shape(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::profile::{DepartmentId, Gender};
    use crate::domain::qualification::Qualification;
    use rstest::rstest;

    fn complete_draft() -> MemberFormDraft {
        MemberFormDraft {
            username: "awa".to_owned(),
            email: "awa@example.org".to_owned(),
            gender: Some(Gender::Femme),
            age_bracket: "25-34".to_owned(),
            city: "Abidjan".to_owned(),
            origin: "Côte d'Ivoire".to_owned(),
            marital_status: "CELIBATAIRE".to_owned(),
            education_level: "LICENCE".to_owned(),
            qualification: Some(Qualification::Regulier),
            ..MemberFormDraft::default()
        }
    }

    #[rstest]
    fn complete_draft_is_valid() {
        let report = validate_draft(&complete_draft(), false, ValidationOptions::default());
        assert!(report.is_valid(), "unexpected errors: {:?}", report.errors());
    }

    #[rstest]
    fn missing_username_and_email_are_both_reported() {
        let draft = MemberFormDraft {
            username: String::new(),
            email: String::new(),
            ..complete_draft()
        };
        let report = validate_draft(&draft, false, ValidationOptions::default());
        assert!(report.message(FormField::Username).is_some());
        assert!(report.message(FormField::Email).is_some());
    }

    #[rstest]
    fn empty_draft_reports_every_required_field() {
        let report = validate_draft(
            &MemberFormDraft::default(),
            false,
            ValidationOptions::default(),
        );
        assert_eq!(report.errors().len(), 9);
        assert!(!report.is_valid());
    }

    #[rstest]
    #[case::plain("awa@example.org", true)]
    #[case::subdomain("a.b@mail.example.org", true)]
    #[case::missing_at("awa.example.org", false)]
    #[case::missing_tld("awa@example", false)]
    #[case::empty_local("@example.org", false)]
    #[case::empty_tld("awa@example.", false)]
    #[case::whitespace("awa @example.org", false)]
    #[case::double_at("awa@@example.org", false)]
    fn email_shape_cases(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(has_email_shape(input), expected);
    }

    #[rstest]
    #[case::employe(EmploymentStatus::Employe, true)]
    #[case::etudiant(EmploymentStatus::Etudiant, false)]
    fn profession_requirement_tracks_employment_status(
        #[case] status: EmploymentStatus,
        #[case] reported: bool,
    ) {
        let draft = MemberFormDraft {
            employment_status: Some(status),
            profession: String::new(),
            ..complete_draft()
        };
        let report = validate_draft(&draft, false, ValidationOptions::default());
        assert_eq!(report.message(FormField::Profession).is_some(), reported);
    }

    #[rstest]
    fn password_rule_applies_only_when_requested() {
        let draft = complete_draft();
        let lenient = validate_draft(&draft, false, ValidationOptions::default());
        let strict = validate_draft(
            &draft,
            false,
            ValidationOptions {
                require_password: true,
            },
        );
        assert!(lenient.is_valid());
        assert_eq!(
            strict.message(FormField::Password),
            Some("Password is required.")
        );
    }

    #[rstest]
    fn departments_required_when_switch_is_on() {
        let draft = complete_draft();
        let report = validate_draft(&draft, true, ValidationOptions::default());
        assert!(report.message(FormField::Departments).is_some());

        let with_departments = MemberFormDraft {
            department_ids: vec![DepartmentId::new("accueil").expect("valid id")],
            ..complete_draft()
        };
        let report = validate_draft(&with_departments, true, ValidationOptions::default());
        assert!(report.is_valid());
    }

    #[rstest]
    fn details_use_wire_keys() {
        let draft = MemberFormDraft {
            username: String::new(),
            ..complete_draft()
        };
        let report = validate_draft(&draft, false, ValidationOptions::default());
        let details = report.to_details();
        assert_eq!(
            details.get("pseudo"),
            Some(&serde_json::Value::from("Username is required."))
        );
    }
}
