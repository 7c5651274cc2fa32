//! Networks, groups, and the raw relational documents they are built from.
//!
//! Canonical types carry only resolved identities; all alias juggling and
//! malformed-record tolerance happens once, in the `normalize` methods at
//! the ingestion boundary. Downstream roster arithmetic never sees a record
//! without a usable identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::member::{Member, MemberId, RawMemberRecord};
use super::qualification::Qualification;

/// Validation errors returned by [`NetworkId::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkValidationError {
    /// Identifier is empty once trimmed.
    EmptyId,
}

impl fmt::Display for NetworkValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "network id must not be empty"),
        }
    }
}

impl std::error::Error for NetworkValidationError {}

/// Opaque network identifier used to key upstream lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NetworkId(String);

impl NetworkId {
    /// Validate and construct a [`NetworkId`].
    pub fn new(id: impl Into<String>) -> Result<Self, NetworkValidationError> {
        let raw = id.into();
        if raw.trim().is_empty() {
            return Err(NetworkValidationError::EmptyId);
        }
        Ok(Self(raw))
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for NetworkId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<NetworkId> for String {
    fn from(value: NetworkId) -> Self {
        value.0
    }
}

impl TryFrom<String> for NetworkId {
    type Error = NetworkValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Sub-unit of a network with its own members and up to two responsibles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Display name, when set upstream.
    pub name: Option<String>,
    /// First responsible, when assigned.
    pub responsable1: Option<Member>,
    /// Second responsible, when assigned.
    pub responsable2: Option<Member>,
    /// Resolved group members.
    pub members: Vec<Member>,
}

impl Group {
    /// Iterate over the assigned responsibles.
    pub fn responsables(&self) -> impl Iterator<Item = &Member> {
        self.responsable1.iter().chain(self.responsable2.iter())
    }
}

/// Top-level organisational unit: groups, directly attached companions, and
/// up to two responsibles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    /// First responsible, when assigned.
    pub responsable1: Option<Member>,
    /// Second responsible, when assigned.
    pub responsable2: Option<Member>,
    /// Groups belonging to the network.
    pub groups: Vec<Group>,
    /// Companions attached to the network outside any group.
    pub companions: Vec<Member>,
}

impl Network {
    /// Iterate over the assigned network responsibles.
    pub fn responsables(&self) -> impl Iterator<Item = &Member> {
        self.responsable1.iter().chain(self.responsable2.iter())
    }
}

/// Raw member-link document inside a group.
///
/// A link may nest the full person record or only carry its own identifier;
/// normalization prefers the nested record's id and falls back to the
/// link's. A role override on the link wins over the nested record's
/// qualification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMemberLink {
    /// Link identifier, canonical spelling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Link identifier, legacy spelling.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub legacy_id: Option<String>,
    /// Nested person record, when the API expanded it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<RawMemberRecord>,
    /// Role-qualification override for this membership.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualification: Option<String>,
}

impl RawMemberLink {
    /// Normalize into a canonical [`Member`], or `None` when no identifier
    /// resolves through either the nested record or the link itself.
    #[must_use]
    pub fn normalize(&self) -> Option<Member> {
        let nested = self.user.as_ref().and_then(RawMemberRecord::normalize);
        let member = match nested {
            Some(member) => member,
            None => {
                let link_record = RawMemberRecord {
                    id: self.id.clone(),
                    legacy_id: self.legacy_id.clone(),
                    ..RawMemberRecord::default()
                };
                Member::new(link_record.resolve_id()?)
            }
        };
        let override_qualification = self
            .qualification
            .as_deref()
            .and_then(|raw| raw.parse::<Qualification>().ok());
        Some(Member {
            qualification: override_qualification.or(member.qualification),
            ..member
        })
    }
}

/// Raw companion document: a person attached directly to the network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCompanion {
    /// Nested person record, when the API expanded it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<RawMemberRecord>,
    /// Direct reference to the person, older documents only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl RawCompanion {
    /// Normalize into a canonical [`Member`], or `None` when neither the
    /// nested record nor the direct reference resolves.
    #[must_use]
    pub fn normalize(&self) -> Option<Member> {
        self.user
            .as_ref()
            .and_then(RawMemberRecord::normalize)
            .or_else(|| {
                self.user_id
                    .as_deref()
                    .and_then(|value| MemberId::new(value).ok())
                    .map(Member::new)
            })
    }
}

/// Raw group document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawGroup {
    /// Display name.
    #[serde(rename = "nom", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// First responsible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsable1: Option<RawMemberRecord>,
    /// Second responsible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsable2: Option<RawMemberRecord>,
    /// Member links.
    #[serde(rename = "membres", default)]
    pub members: Vec<RawMemberLink>,
}

impl RawGroup {
    /// Normalize into a canonical [`Group`], dropping unresolvable links.
    #[must_use]
    pub fn normalize(&self) -> Group {
        let members = self
            .members
            .iter()
            .filter_map(RawMemberLink::normalize)
            .collect::<Vec<_>>();
        let dropped = self.members.len() - members.len();
        if dropped > 0 {
            tracing::debug!(group = ?self.name, dropped, "unresolvable member links skipped");
        }
        Group {
            name: self
                .name
                .clone()
                .filter(|value| !value.trim().is_empty()),
            responsable1: self.responsable1.as_ref().and_then(RawMemberRecord::normalize),
            responsable2: self.responsable2.as_ref().and_then(RawMemberRecord::normalize),
            members,
        }
    }
}

/// Raw network document as served by the upstream directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawNetwork {
    /// First responsible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsable1: Option<RawMemberRecord>,
    /// Second responsible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsable2: Option<RawMemberRecord>,
    /// Group documents.
    #[serde(rename = "groupes", default)]
    pub groups: Vec<RawGroup>,
    /// Companion documents.
    #[serde(rename = "compagnons", default)]
    pub companions: Vec<RawCompanion>,
}

impl RawNetwork {
    /// Normalize into a canonical [`Network`].
    ///
    /// Infallible: malformed entries are skipped, never raised, because the
    /// surrounding screens must always render something.
    #[must_use]
    pub fn normalize(&self) -> Network {
        Network {
            responsable1: self.responsable1.as_ref().and_then(RawMemberRecord::normalize),
            responsable2: self.responsable2.as_ref().and_then(RawMemberRecord::normalize),
            groups: self.groups.iter().map(RawGroup::normalize).collect(),
            companions: self
                .companions
                .iter()
                .filter_map(RawCompanion::normalize)
                .collect(),
        }
    }
}
