//! Validation Rules
//!
//! Pure predicates over a donation draft. `validate` re-checks every rule
//! and returns one error per failing field; an empty result means the draft
//! can be submitted.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use thiserror::Error;

use crate::form::{DonationDraft, Method};

const PHONE_MIN_DIGITS: usize = 6;
const PHONE_MAX_DIGITS: usize = 15;

/// Form fields that can carry a validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Phone,
    Address,
    Date,
    Items,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Address => "address",
            Field::Date => "date",
            Field::Items => "items",
        }
    }
}

/// A failed rule; `Display` is the message shown next to the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Full name is required")]
    NameRequired,
    #[error("Enter WhatsApp in international format, e.g. +14155552671")]
    InvalidPhone,
    #[error("Address required for pickup")]
    AddressRequired,
    #[error("Select a preferred date")]
    DateRequired,
    #[error("Add at least one item")]
    NoItems,
}

/// Field → error mapping, ordered by form position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.errors.iter().map(|(f, e)| (*f, *e))
    }

    /// Field names to messages, as rendered in the form
    pub fn messages(&self) -> BTreeMap<&'static str, String> {
        self.iter()
            .map(|(field, err)| (field.as_str(), err.to_string()))
            .collect()
    }

    fn check(&mut self, field: Field, result: Result<(), FieldError>) {
        if let Err(err) = result {
            self.errors.insert(field, err);
        }
    }
}

/// `+` followed by 6 to 15 ASCII digits, nothing else (after trimming)
pub fn is_valid_phone(value: &str) -> bool {
    match value.trim().strip_prefix('+') {
        Some(digits) => {
            (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits.len())
                && digits.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

pub fn validate_name(name: &str) -> Result<(), FieldError> {
    if name.trim().is_empty() {
        Err(FieldError::NameRequired)
    } else {
        Ok(())
    }
}

pub fn validate_phone(phone: &str) -> Result<(), FieldError> {
    if is_valid_phone(phone) {
        Ok(())
    } else {
        Err(FieldError::InvalidPhone)
    }
}

pub fn validate_address(method: Method, address: &str) -> Result<(), FieldError> {
    if method == Method::Pickup && address.trim().is_empty() {
        Err(FieldError::AddressRequired)
    } else {
        Ok(())
    }
}

pub fn validate_date(method: Method, date: Option<NaiveDate>) -> Result<(), FieldError> {
    if method == Method::Pickup && date.is_none() {
        Err(FieldError::DateRequired)
    } else {
        Ok(())
    }
}

pub fn validate_items(total: u32) -> Result<(), FieldError> {
    if total == 0 {
        Err(FieldError::NoItems)
    } else {
        Ok(())
    }
}

/// Run every rule against the draft
pub fn validate(draft: &DonationDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    errors.check(Field::Name, validate_name(&draft.name));
    errors.check(Field::Phone, validate_phone(&draft.phone));
    errors.check(Field::Address, validate_address(draft.method, &draft.address));
    errors.check(Field::Date, validate_date(draft.method, draft.date));
    errors.check(Field::Items, validate_items(draft.tally.total_count()));
    errors
}
