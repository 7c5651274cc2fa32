//! Raw network document generation.

use fake::Fake;
use fake::faker::name::fr_fr::{FirstName, LastName};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::{Value, json};

use crate::error::GenerationError;
use crate::seed::ExampleNetworkSeed;

/// One fabricated person and the ordinal deciding its wire variety.
#[derive(Clone)]
struct Person {
    ordinal: usize,
    id: String,
    name: String,
    qualification: &'static str,
}

impl Person {
    /// Render the person document, alternating the legacy id spelling so
    /// both resolution paths stay exercised.
    fn document(&self) -> Value {
        let id_key = if self.ordinal % 2 == 0 { "id" } else { "_id" };
        json!({
            id_key: self.id,
            "nom": self.name,
            "qualification": self.qualification,
        })
    }
}

/// Deterministic person source: one RNG stream, one ordinal sequence.
struct PersonFactory {
    rng: ChaCha8Rng,
    ordinal: usize,
}

impl PersonFactory {
    fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            ordinal: 0,
        }
    }

    fn next(&mut self, id: String, qualification: &'static str) -> Person {
        let first: String = FirstName().fake_with_rng(&mut self.rng);
        let last: String = LastName().fake_with_rng(&mut self.rng);
        let person = Person {
            ordinal: self.ordinal,
            id,
            name: format!("{first} {last}"),
            qualification,
        };
        self.ordinal += 1;
        person
    }

    /// Qualification for a plain group member; an occasional value unknown
    /// to any consumer keeps tolerance paths exercised.
    const fn member_qualification(&self) -> &'static str {
        if self.ordinal % 7 == 3 {
            "EN_FORMATION"
        } else if self.ordinal % 3 == 0 {
            "LEADER"
        } else {
            "REGULIER"
        }
    }
}

/// Generate one upstream-shaped network document.
///
/// The document deliberately layers the awkward wire realities: both id
/// spellings, nested and bare member links, nested and direct companion
/// references, the last member of each group re-appearing as the first
/// member of the next, and the first group's responsible doubling as the
/// network's `responsable1`. Equal seeds yield identical documents.
pub fn generate_raw_network(seed: &ExampleNetworkSeed) -> Result<Value, GenerationError> {
    seed.validate()?;
    let mut factory = PersonFactory::new(seed.seed);

    let mut first_group_responsable: Option<Person> = None;
    let mut carried: Option<Person> = None;
    let mut groups = Vec::with_capacity(seed.group_count);
    for group_index in 0..seed.group_count {
        let responsable = factory.next(format!("resp-g{group_index}"), "LEADER");
        if first_group_responsable.is_none() {
            first_group_responsable = Some(responsable.clone());
        }

        let mut members: Vec<Person> = Vec::with_capacity(seed.members_per_group);
        if let Some(shared) = carried.take() {
            members.push(shared);
        }
        while members.len() < seed.members_per_group {
            let qualification = factory.member_qualification();
            let slot = members.len();
            members.push(factory.next(format!("mbr-g{group_index}-{slot}"), qualification));
        }
        carried = members.last().cloned();

        let membres: Vec<Value> = members
            .iter()
            .enumerate()
            .map(|(slot, person)| {
                if slot % 2 == 0 {
                    json!({ "user": person.document() })
                } else {
                    json!({ "id": person.id })
                }
            })
            .collect();
        groups.push(json!({
            "nom": format!("Groupe {}", group_index + 1),
            "responsable1": responsable.document(),
            "membres": membres,
        }));
    }

    let compagnons: Vec<Value> = (0..seed.companion_count)
        .map(|companion_index| {
            let person = factory.next(format!("comp-{companion_index}"), "COMPAGNON_OEUVRE");
            if companion_index % 2 == 0 {
                json!({ "user": person.document() })
            } else {
                json!({ "user_id": person.id })
            }
        })
        .collect();

    let network_responsable2 = factory.next("resp-net".to_owned(), "LEADER");
    let responsable1 = first_group_responsable
        .as_ref()
        .map(Person::document)
        .unwrap_or(Value::Null);

    Ok(json!({
        "responsable1": responsable1,
        "responsable2": network_responsable2.document(),
        "groupes": groups,
        "compagnons": compagnons,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample_seed() -> ExampleNetworkSeed {
        ExampleNetworkSeed {
            seed: 42,
            group_count: 2,
            members_per_group: 3,
            companion_count: 2,
        }
    }

    #[rstest]
    fn equal_seeds_produce_identical_documents() {
        let seed = sample_seed();
        let first = generate_raw_network(&seed).expect("valid seed");
        let second = generate_raw_network(&seed).expect("valid seed");
        assert_eq!(first, second);
    }

    #[rstest]
    fn different_seeds_produce_different_names() {
        let mut other = sample_seed();
        other.seed = 43;
        let first = generate_raw_network(&sample_seed()).expect("valid seed");
        let second = generate_raw_network(&other).expect("valid seed");
        assert_ne!(first, second);
    }

    #[rstest]
    fn document_shape_matches_the_seed() {
        let document = generate_raw_network(&sample_seed()).expect("valid seed");
        assert_eq!(document["groupes"].as_array().map(Vec::len), Some(2));
        assert_eq!(document["compagnons"].as_array().map(Vec::len), Some(2));
        assert!(document["responsable1"].is_object());
        assert!(document["responsable2"].is_object());
    }

    #[rstest]
    fn invalid_seeds_propagate_their_error() {
        let mut invalid = sample_seed();
        invalid.group_count = 0;
        assert_eq!(
            generate_raw_network(&invalid),
            Err(GenerationError::NoGroups)
        );
    }

    #[rstest]
    fn network_responsable1_re_uses_the_first_group_responsable() {
        let document = generate_raw_network(&sample_seed()).expect("valid seed");
        let network_level = document["responsable1"]["id"]
            .as_str()
            .or_else(|| document["responsable1"]["_id"].as_str());
        assert_eq!(network_level, Some("resp-g0"));
    }
}
