//! Roster arithmetic over a normalized network.
//!
//! Pure, synchronous, and re-entrant: safe to recompute on every render.
//! Each operation degrades to an empty result rather than failing, so the
//! consuming screens always have something to show.

use std::collections::HashSet;

use super::member::{Member, MemberId};
use super::network::{Group, Network};
use super::qualification::Qualification;

impl Network {
    /// Identifiers of everyone who belongs to a group of this network.
    #[must_use]
    pub fn group_member_ids(&self) -> HashSet<&MemberId> {
        self.groups
            .iter()
            .flat_map(|group| group.members.iter())
            .map(|member| &member.id)
            .collect()
    }

    /// Identifiers of everyone responsible for a group of this network.
    #[must_use]
    pub fn group_responsable_ids(&self) -> HashSet<&MemberId> {
        self.groups
            .iter()
            .flat_map(Group::responsables)
            .map(|member| &member.id)
            .collect()
    }

    /// Identifiers of the companions attached to this network.
    #[must_use]
    pub fn companion_ids(&self) -> HashSet<&MemberId> {
        self.companions.iter().map(|member| &member.id).collect()
    }

    /// Deduplicated headcount of the network.
    ///
    /// Every group member, group responsible, and companion counts once,
    /// however many roles the person holds. A network responsible is added
    /// through the network-level path only when not already accounted for as
    /// a group responsible; someone who merely leads at the network level
    /// still belongs to the roster.
    ///
    /// # Examples
    ///
    /// ```
    /// # use membership::domain::Network;
    /// assert_eq!(Network::default().total_members(), 0);
    /// ```
    #[must_use]
    pub fn total_members(&self) -> usize {
        let mut counted = self.group_member_ids();
        counted.extend(self.companion_ids());

        let group_responsables = self.group_responsable_ids();
        counted.extend(group_responsables.iter().copied());
        for responsable in self.responsables() {
            if !group_responsables.contains(&responsable.id) {
                counted.insert(&responsable.id);
            }
        }
        counted.len()
    }

    /// Filter candidates for the "add companion" picker.
    ///
    /// Eligible candidates are companions of work not yet placed anywhere in
    /// the network: neither a member of one of its groups nor already
    /// attached as a companion. Input order is preserved and the input is
    /// assumed deduplicated.
    #[must_use]
    pub fn eligible_companions(&self, candidates: &[Member]) -> Vec<Member> {
        let placed = self.group_member_ids();
        let companions = self.companion_ids();
        candidates
            .iter()
            .filter(|candidate| {
                candidate.qualification == Some(Qualification::CompagnonOeuvre)
                    && !placed.contains(&candidate.id)
                    && !companions.contains(&candidate.id)
            })
            .cloned()
            .collect()
    }

    /// Filter candidates for the group responsible/member pickers.
    ///
    /// Companions of work are reserved for the companion role and excluded
    /// here, as is anyone already attached to the network as a companion.
    #[must_use]
    pub fn eligible_group_candidates(&self, candidates: &[Member]) -> Vec<Member> {
        let companions = self.companion_ids();
        candidates
            .iter()
            .filter(|candidate| {
                candidate.qualification != Some(Qualification::CompagnonOeuvre)
                    && !companions.contains(&candidate.id)
            })
            .cloned()
            .collect()
    }
}
