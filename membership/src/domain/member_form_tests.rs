//! Behavioural coverage for the member form state machine.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use rstest::{fixture, rstest};
use rstest_bdd_macros::{given, then, when};

use super::*;
use crate::domain::member_form_validation::FormField;

/// Test clock that only moves when told to.
struct MutableClock(Mutex<DateTime<Utc>>);

impl MutableClock {
    fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    fn advance_ms(&self, milliseconds: i64) {
        *self.lock_clock() += TimeDelta::milliseconds(milliseconds);
    }

    fn lock_clock(&self) -> std::sync::MutexGuard<'_, DateTime<Utc>> {
        match self.0.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("clock mutex"),
        }
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock_clock()
    }
}

fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 12, 14, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

#[fixture]
fn clock() -> Arc<MutableClock> {
    Arc::new(MutableClock::new(fixture_timestamp()))
}

fn department(id: &str) -> DepartmentId {
    DepartmentId::new(id).expect("valid department id")
}

fn profile(id: &str) -> MemberProfile {
    let mut profile = MemberProfile::new(MemberId::new(id).expect("valid member id"));
    profile.username = Some("awa".to_owned());
    profile.email = Some("awa@example.org".to_owned());
    profile
}

// ---------------------------------------------------------------------------
// Seeding boundary
// ---------------------------------------------------------------------------

#[given("a form seeded from an existing member")]
fn a_seeded_form(clock: Arc<MutableClock>) -> MemberFormState {
    MemberFormState::from_seed(clock, &profile("u1"))
}

#[when("the user edits a field and the same member is re-seeded")]
fn edit_then_reseed_same_member(mut form: MemberFormState) -> MemberFormState {
    form.apply(MemberFormUpdate::Email("edited@example.org".to_owned()));
    form.seed(&profile("u1"));
    form
}

#[then("the in-progress edit survives")]
fn the_edit_survives(form: &MemberFormState) {
    assert_eq!(form.draft().email, "edited@example.org");
}

#[rstest]
fn reseeding_the_same_member_keeps_edits(clock: Arc<MutableClock>) {
    let form = a_seeded_form(clock);
    let form = edit_then_reseed_same_member(form);
    the_edit_survives(&form);
}

#[rstest]
fn seeding_a_different_member_resets_the_draft(clock: Arc<MutableClock>) {
    let mut form = MemberFormState::from_seed(clock, &profile("u1"));
    form.apply(MemberFormUpdate::Email("edited@example.org".to_owned()));

    let mut other = profile("u2");
    other.email = Some("other@example.org".to_owned());
    form.seed(&other);

    assert_eq!(form.draft().email, "other@example.org");
    assert_eq!(form.seeded_member().map(MemberId::as_str), Some("u2"));
}

#[rstest]
fn seeding_sets_the_switch_from_the_department_list(clock: Arc<MutableClock>) {
    let mut with_departments = profile("u1");
    with_departments.department_ids = vec![department("accueil")];

    let seeded = MemberFormState::from_seed(clock.clone(), &with_departments);
    assert!(seeded.serves_in_department());

    let empty = MemberFormState::from_seed(clock, &profile("u2"));
    assert!(!empty.serves_in_department());
}

// ---------------------------------------------------------------------------
// Switch and reconciliation
// ---------------------------------------------------------------------------

#[rstest]
fn switching_off_clears_the_department_list(clock: Arc<MutableClock>) {
    let mut form = MemberFormState::new(clock);
    form.apply(MemberFormUpdate::Departments(vec![department("accueil")]));
    assert!(form.serves_in_department());

    form.set_serves_in_department(false);
    assert!(!form.serves_in_department());
    assert!(form.draft().department_ids.is_empty());
}

#[rstest]
fn switching_on_never_mutates_the_department_list(clock: Arc<MutableClock>) {
    let mut form = MemberFormState::new(clock);
    form.set_serves_in_department(true);
    assert!(form.serves_in_department());
    assert!(form.draft().department_ids.is_empty());
}

#[rstest]
fn manual_switch_survives_a_same_tick_list_echo(clock: Arc<MutableClock>) {
    let mut form = MemberFormState::new(clock);
    // The toggle itself triggers a list-change event with the stale (empty)
    // list; the manual window must absorb it.
    form.set_serves_in_department(true);
    form.apply(MemberFormUpdate::Departments(Vec::new()));
    assert!(form.serves_in_department());
}

#[rstest]
fn reconciliation_resumes_once_the_window_expires(clock: Arc<MutableClock>) {
    let mut form = MemberFormState::new(clock.clone());
    form.set_serves_in_department(false);

    clock.advance_ms(MANUAL_OVERRIDE_WINDOW_MS + 1);
    form.apply(MemberFormUpdate::Departments(vec![department("accueil")]));
    assert!(form.serves_in_department());
}

#[rstest]
fn reconciliation_never_forces_the_switch_off(clock: Arc<MutableClock>) {
    let mut form = MemberFormState::new(clock.clone());
    form.apply(MemberFormUpdate::Departments(vec![department("accueil")]));
    assert!(form.serves_in_department());

    clock.advance_ms(MANUAL_OVERRIDE_WINDOW_MS + 1);
    form.apply(MemberFormUpdate::Departments(Vec::new()));
    assert!(
        form.serves_in_department(),
        "only the explicit manual action may clear the switch"
    );
}

#[rstest]
fn reset_closes_the_pending_manual_window(clock: Arc<MutableClock>) {
    let mut form = MemberFormState::new(clock);
    form.set_serves_in_department(true);
    form.reset(None);

    assert!(!form.serves_in_department());
    // The window died with the reset: the very next list change reconciles.
    form.apply(MemberFormUpdate::Departments(vec![department("accueil")]));
    assert!(form.serves_in_department());
}

#[rstest]
fn reset_reseeds_even_for_the_same_member(clock: Arc<MutableClock>) {
    let mut form = MemberFormState::from_seed(clock, &profile("u1"));
    form.apply(MemberFormUpdate::Email("edited@example.org".to_owned()));

    form.reset(Some(&profile("u1")));
    assert_eq!(form.draft().email, "awa@example.org");
}

// ---------------------------------------------------------------------------
// Field side effects
// ---------------------------------------------------------------------------

#[rstest]
#[case::sans_emploi(Some(EmploymentStatus::SansEmploi), "")]
#[case::none(None, "")]
#[case::independant(Some(EmploymentStatus::Independant), "menuisier")]
fn employment_status_changes_clear_stale_professions(
    clock: Arc<MutableClock>,
    #[case] next: Option<EmploymentStatus>,
    #[case] expected_profession: &str,
) {
    let mut form = MemberFormState::new(clock);
    form.apply(MemberFormUpdate::EmploymentStatus(Some(
        EmploymentStatus::Employe,
    )));
    form.apply(MemberFormUpdate::Profession("menuisier".to_owned()));

    form.apply(MemberFormUpdate::EmploymentStatus(next));
    assert_eq!(form.draft().profession, expected_profession);
}

#[rstest]
fn validation_reflects_the_switch_position(clock: Arc<MutableClock>) {
    let mut form = MemberFormState::new(clock);
    form.set_serves_in_department(true);
    let report = form.validate(ValidationOptions::default());
    assert!(report.message(FormField::Departments).is_some());
}
