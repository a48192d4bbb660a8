//! Donation Form State
//!
//! The working draft plus the `Editing -> Submitting -> Succeeded` machine
//! that guards submission. Owned by one modal instance; nothing here
//! touches the DOM.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

use crate::catalog::{CategoryId, ItemKey};
use crate::tally::ItemTally;
use crate::validation::{self, Field, FieldError, ValidationErrors};

/// Fulfillment method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Pickup,
    Dropoff,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Pickup => "pickup",
            Method::Dropoff => "dropoff",
        }
    }
}

/// Preferred pickup time slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeSlot {
    #[default]
    Morning,
    Afternoon,
    Evening,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 3] = [TimeSlot::Morning, TimeSlot::Afternoon, TimeSlot::Evening];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "Morning",
            TimeSlot::Afternoon => "Afternoon",
            TimeSlot::Evening => "Evening",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.as_str() == s)
    }
}

/// Everything the requester has entered so far
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DonationDraft {
    pub name: String,
    /// WhatsApp number, international format
    pub phone: String,
    pub method: Method,
    pub address: String,
    pub date: Option<NaiveDate>,
    pub slot: TimeSlot,
    pub notes: String,
    pub tally: ItemTally,
}

/// Expanded accordion categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    open: BTreeSet<CategoryId>,
}

impl Default for Expansion {
    fn default() -> Self {
        Self {
            open: BTreeSet::from([CategoryId::Tops]),
        }
    }
}

impl Expansion {
    pub fn toggle(&mut self, id: CategoryId) {
        if !self.open.remove(&id) {
            self.open.insert(id);
        }
    }

    pub fn is_expanded(&self, id: CategoryId) -> bool {
        self.open.contains(&id)
    }
}

/// Opaque token shown after a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference(String);

impl Reference {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Editing,
    Submitting,
    Succeeded(Reference),
}

/// Proof that a submit was accepted by a specific form generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket {
    generation: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("{} field(s) need attention", .0.len())]
    Invalid(ValidationErrors),
    #[error("form is not accepting edits")]
    NotEditing,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DonationForm {
    draft: DonationDraft,
    expansion: Expansion,
    state: SubmissionState,
    errors: ValidationErrors,
    /// Set after the first submit attempt; edits re-validate from then on
    attempted: bool,
    generation: u32,
}

impl DonationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &DonationDraft {
        &self.draft
    }

    pub fn expansion(&self) -> &Expansion {
        &self.expansion
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_editing(&self) -> bool {
        self.state == SubmissionState::Editing
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn reference(&self) -> Option<&Reference> {
        match &self.state {
            SubmissionState::Succeeded(reference) => Some(reference),
            _ => None,
        }
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error_for(&self, field: Field) -> Option<FieldError> {
        self.errors.get(field)
    }

    // ========================
    // Edits (Editing only)
    // ========================

    fn edit(&mut self, apply: impl FnOnce(&mut DonationDraft)) {
        if !self.is_editing() {
            log::debug!("[FORM] ignoring edit while {:?}", self.state);
            return;
        }
        apply(&mut self.draft);
        if self.attempted {
            self.errors = validation::validate(&self.draft);
        }
    }

    pub fn set_name(&mut self, name: String) {
        self.edit(|d| d.name = name);
    }

    pub fn set_phone(&mut self, phone: String) {
        self.edit(|d| d.phone = phone);
    }

    /// Switch method; address and date are kept as entered
    pub fn set_method(&mut self, method: Method) {
        self.edit(|d| d.method = method);
    }

    pub fn set_address(&mut self, address: String) {
        self.edit(|d| d.address = address);
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.edit(|d| d.date = date);
    }

    /// Set the date from a `YYYY-MM-DD` input value; anything else clears it
    pub fn set_date_input(&mut self, value: &str) {
        let parsed = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok();
        self.set_date(parsed);
    }

    pub fn set_slot(&mut self, slot: TimeSlot) {
        self.edit(|d| d.slot = slot);
    }

    pub fn set_notes(&mut self, notes: String) {
        self.edit(|d| d.notes = notes);
    }

    pub fn mutate_item(&mut self, key: ItemKey, delta: i32) {
        self.edit(|d| d.tally.mutate(key, delta));
    }

    /// Accordion state is independent of the submission state
    pub fn toggle_category(&mut self, id: CategoryId) {
        self.expansion.toggle(id);
    }

    // ========================
    // Transitions
    // ========================

    /// `Editing -> Submitting` when the draft validates
    pub fn submit(&mut self) -> Result<SubmissionTicket, SubmitError> {
        if !self.is_editing() {
            return Err(SubmitError::NotEditing);
        }

        self.attempted = true;
        self.errors = validation::validate(&self.draft);
        if !self.errors.is_empty() {
            log::info!("[FORM] submit blocked: {:?}", self.errors.messages());
            return Err(SubmitError::Invalid(self.errors.clone()));
        }

        self.state = SubmissionState::Submitting;
        log::info!(
            "[FORM] submitting {} item(s) via {}",
            self.draft.tally.total_count(),
            self.draft.method.as_str()
        );
        Ok(SubmissionTicket {
            generation: self.generation,
        })
    }

    /// `Submitting -> Succeeded`; stale or unexpected completions are ignored
    pub fn complete(&mut self, ticket: SubmissionTicket, reference: Reference) -> bool {
        if ticket.generation != self.generation || !self.is_submitting() {
            log::debug!("[FORM] dropping stale completion {}", reference);
            return false;
        }
        log::info!("[FORM] submission succeeded, ref {}", reference);
        self.state = SubmissionState::Succeeded(reference);
        true
    }

    /// Discard everything and start over as a fresh draft
    pub fn reset(&mut self) {
        let generation = self.generation.wrapping_add(1);
        *self = Self {
            generation,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tees() -> ItemKey {
        ItemKey::new(CategoryId::Tops, "T-shirts").unwrap()
    }

    fn filled_dropoff() -> DonationForm {
        let mut form = DonationForm::new();
        form.set_name("Jane Doe".to_string());
        form.set_phone("+14155552671".to_string());
        form.set_method(Method::Dropoff);
        form.mutate_item(tees(), 1);
        form.mutate_item(tees(), 1);
        form
    }

    #[test]
    fn test_fresh_form() {
        let form = DonationForm::new();
        assert_eq!(form.state(), &SubmissionState::Editing);
        assert_eq!(form.draft().method, Method::Pickup);
        assert_eq!(form.draft().slot, TimeSlot::Morning);
        assert!(form.expansion().is_expanded(CategoryId::Tops));
        assert!(!form.expansion().is_expanded(CategoryId::Bottoms));
        assert!(form.errors().is_empty(), "no hints before the first submit");
    }

    #[test]
    fn test_scenario_dropoff_succeeds() {
        let mut form = filled_dropoff();
        assert!(validation::validate(form.draft()).is_empty());

        let ticket = form.submit().expect("valid draft should submit");
        assert!(form.is_submitting());
        assert!(form.reference().is_none());

        assert!(form.complete(ticket, Reference::new("DD-AB12CD")));
        assert_eq!(form.reference().map(Reference::as_str), Some("DD-AB12CD"));
        assert_eq!(
            form.state(),
            &SubmissionState::Succeeded(Reference::new("DD-AB12CD"))
        );
    }

    #[test]
    fn test_scenario_empty_name_blocks() {
        let mut form = filled_dropoff();
        form.set_name(String::new());

        match form.submit() {
            Err(SubmitError::Invalid(errors)) => {
                assert!(errors.contains(Field::Name));
                assert_eq!(errors.len(), 1);
            }
            other => panic!("expected validation failure, got {:?}", other),
        }
        assert!(form.is_editing());
        assert_eq!(form.error_for(Field::Name), Some(FieldError::NameRequired));
    }

    #[test]
    fn test_scenario_pickup_missing_address_and_date() {
        let mut form = filled_dropoff();
        form.set_method(Method::Pickup);
        let err = form.submit().unwrap_err();
        let SubmitError::Invalid(errors) = err else {
            panic!("expected validation failure");
        };
        assert!(errors.contains(Field::Address));
        assert!(errors.contains(Field::Date));
        assert!(form.is_editing());
    }

    #[test]
    fn test_each_blocking_condition() {
        let cases: Vec<(&str, Box<dyn Fn(&mut DonationForm)>)> = vec![
            ("empty name", Box::new(|f: &mut DonationForm| f.set_name("  ".into()))),
            ("bad phone", Box::new(|f: &mut DonationForm| f.set_phone("+1 415 555 2671".into()))),
            ("pickup without details", Box::new(|f: &mut DonationForm| f.set_method(Method::Pickup))),
            ("no items", Box::new(|f: &mut DonationForm| f.mutate_item(tees(), -2))),
        ];
        for (label, breaker) in cases {
            let mut form = filled_dropoff();
            breaker(&mut form);
            assert!(form.submit().is_err(), "{} should block submit", label);
            assert!(form.is_editing(), "{} should stay editing", label);
        }
    }

    #[test]
    fn test_method_toggle_preserves_pickup_fields() {
        let mut form = DonationForm::new();
        form.set_address("21 Minimal Ave".to_string());
        form.set_date_input("2026-11-02");
        form.set_method(Method::Dropoff);
        form.set_method(Method::Pickup);

        assert_eq!(form.draft().address, "21 Minimal Ave");
        assert_eq!(form.draft().date, NaiveDate::from_ymd_opt(2026, 11, 2));
    }

    #[test]
    fn test_date_input_parsing() {
        let mut form = DonationForm::new();
        form.set_date_input("2026-02-30");
        assert_eq!(form.draft().date, None);
        form.set_date_input("2026-02-28");
        assert_eq!(form.draft().date, NaiveDate::from_ymd_opt(2026, 2, 28));
        form.set_date_input("");
        assert_eq!(form.draft().date, None);
    }

    #[test]
    fn test_hints_refresh_after_first_attempt() {
        let mut form = filled_dropoff();
        form.set_phone("123".to_string());
        assert!(form.errors().is_empty());

        assert!(form.submit().is_err());
        assert!(form.error_for(Field::Phone).is_some());

        form.set_phone("+14155552671".to_string());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_double_submit_rejected() {
        let mut form = filled_dropoff();
        let _ticket = form.submit().unwrap();
        assert_eq!(form.submit(), Err(SubmitError::NotEditing));
    }

    #[test]
    fn test_edits_ignored_outside_editing() {
        let mut form = filled_dropoff();
        let ticket = form.submit().unwrap();
        form.set_name("Someone Else".to_string());
        form.mutate_item(tees(), 5);
        assert_eq!(form.draft().name, "Jane Doe");
        assert_eq!(form.draft().tally.total_count(), 2);

        // Accordion stays interactive
        form.toggle_category(CategoryId::Full);
        assert!(form.expansion().is_expanded(CategoryId::Full));

        assert!(form.complete(ticket, Reference::new("DD-000001")));
        form.set_notes("late".to_string());
        assert_eq!(form.draft().notes, "");
    }

    #[test]
    fn test_reset_discards_draft_and_stale_completion() {
        let mut form = filled_dropoff();
        let ticket = form.submit().unwrap();

        form.reset();
        assert!(form.is_editing());
        assert_eq!(form.draft(), &DonationDraft::default());
        assert!(form.errors().is_empty());

        assert!(!form.complete(ticket, Reference::new("DD-STALE1")));
        assert!(form.is_editing());
    }

    #[test]
    fn test_reset_after_success_is_fresh() {
        let mut form = filled_dropoff();
        form.toggle_category(CategoryId::Outer);
        let ticket = form.submit().unwrap();
        assert!(form.complete(ticket, Reference::new("DD-XYZ789")));

        form.reset();
        assert!(form.is_editing());
        assert!(form.draft().name.is_empty());
        assert!(form.draft().phone.is_empty());
        assert!(form.draft().tally.is_empty());
        assert_eq!(form.expansion(), &Expansion::default());
        assert!(form.reference().is_none());
    }

    #[test]
    fn test_complete_without_submit_is_noop() {
        let mut form = filled_dropoff();
        let ticket = form.submit().unwrap();
        assert!(form.complete(ticket, Reference::new("DD-FIRST1")));
        assert!(!form.complete(ticket, Reference::new("DD-AGAIN1")));
        assert_eq!(form.reference().map(Reference::as_str), Some("DD-FIRST1"));
    }

    #[test]
    fn test_time_slot_lookup() {
        assert_eq!(TimeSlot::from_str("Evening"), Some(TimeSlot::Evening));
        assert_eq!(TimeSlot::from_str("Night"), None);
    }
}
