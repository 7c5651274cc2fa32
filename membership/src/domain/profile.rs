//! Member profile fields served by the upstream API.
//!
//! `Gender` and `EmploymentStatus` are closed enums because the core attaches
//! behaviour to them; catalog-driven fields (age bracket, marital status,
//! education level, origin, city) stay validated strings because their value
//! sets are external configuration supplied by the catalog collaborator.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::member::MemberId;
use super::qualification::Qualification;

/// Member gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    /// Male.
    Homme,
    /// Female.
    Femme,
}

impl Gender {
    /// Returns the wire string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Homme => "HOMME",
            Self::Femme => "FEMME",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Employment situation ("situation professionnelle").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentStatus {
    /// Salaried employee.
    Employe,
    /// Self-employed.
    Independant,
    /// Out of work.
    SansEmploi,
    /// Student.
    Etudiant,
    /// Retired.
    Retraite,
}

impl EmploymentStatus {
    /// Whether this situation requires a profession to be filled in.
    ///
    /// # Examples
    ///
    /// ```
    /// # use membership::domain::EmploymentStatus;
    /// assert!(EmploymentStatus::Employe.requires_profession());
    /// assert!(!EmploymentStatus::Etudiant.requires_profession());
    /// ```
    #[must_use]
    pub const fn requires_profession(self) -> bool {
        matches!(self, Self::Employe | Self::Independant)
    }

    /// Returns the wire string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Employe => "EMPLOYE",
            Self::Independant => "INDEPENDANT",
            Self::SansEmploi => "SANS_EMPLOI",
            Self::Etudiant => "ETUDIANT",
            Self::Retraite => "RETRAITE",
        }
    }
}

impl fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation errors returned by [`DepartmentId::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepartmentValidationError {
    /// Identifier is empty once trimmed.
    EmptyId,
}

impl fmt::Display for DepartmentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "department id must not be empty"),
        }
    }
}

impl std::error::Error for DepartmentValidationError {}

/// Opaque department identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DepartmentId(String);

impl DepartmentId {
    /// Validate and construct a [`DepartmentId`].
    pub fn new(id: impl Into<String>) -> Result<Self, DepartmentValidationError> {
        let raw = id.into();
        if raw.trim().is_empty() {
            return Err(DepartmentValidationError::EmptyId);
        }
        Ok(Self(raw))
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for DepartmentId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for DepartmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<DepartmentId> for String {
    fn from(value: DepartmentId) -> Self {
        value.0
    }
}

impl TryFrom<String> for DepartmentId {
    type Error = DepartmentValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A member's full editable profile as served by the upstream API.
///
/// Seeds the form when editing an existing member. Wire names follow the
/// upstream French field spellings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberProfile {
    /// Stable member identifier.
    pub id: MemberId,
    /// Full name.
    #[serde(rename = "nom", default)]
    pub name: Option<String>,
    /// Username shown in listings.
    #[serde(rename = "pseudo", default)]
    pub username: Option<String>,
    /// Contact email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone number.
    #[serde(rename = "telephone", default)]
    pub phone: Option<String>,
    /// Street address.
    #[serde(rename = "adresse", default)]
    pub address: Option<String>,
    /// Gender.
    #[serde(rename = "genre", default)]
    pub gender: Option<Gender>,
    /// Age bracket from the catalog collaborator.
    #[serde(rename = "tranche_age", default)]
    pub age_bracket: Option<String>,
    /// Profession, meaningful when the employment situation requires one.
    #[serde(default)]
    pub profession: Option<String>,
    /// Employment situation.
    #[serde(rename = "situation_professionnelle", default)]
    pub employment_status: Option<EmploymentStatus>,
    /// City of residence.
    #[serde(rename = "ville_residence", default)]
    pub city: Option<String>,
    /// Country of origin.
    #[serde(rename = "origine", default)]
    pub origin: Option<String>,
    /// Marital status from the catalog collaborator.
    #[serde(rename = "situation_matrimoniale", default)]
    pub marital_status: Option<String>,
    /// Education level from the catalog collaborator.
    #[serde(rename = "niveau_education", default)]
    pub education_level: Option<String>,
    /// Qualification tag.
    #[serde(default)]
    pub qualification: Option<Qualification>,
    /// Departments the member serves in.
    #[serde(rename = "departement_ids", default)]
    pub department_ids: Vec<DepartmentId>,
    /// Preview URI supplied by the image-upload collaborator.
    #[serde(default)]
    pub image: Option<String>,
}

impl MemberProfile {
    /// Build an empty profile for the given member.
    #[must_use]
    pub const fn new(id: MemberId) -> Self {
        Self {
            id,
            name: None,
            username: None,
            email: None,
            phone: None,
            address: None,
            gender: None,
            age_bracket: None,
            profession: None,
            employment_status: None,
            city: None,
            origin: None,
            marital_status: None,
            education_level: None,
            qualification: None,
            department_ids: Vec::new(),
            image: None,
        }
    }
}
