use std::collections::{btree_map, BTreeMap};

use thiserror::Error;

use crate::field::Field;

/// A user-facing validation failure of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is a required field")]
    Required(Field),
    #[error("{0} must have at least {1} characters")]
    TooShort(Field, usize),
    #[error("{0} must be a valid email address")]
    InvalidEmail(Field),
}

impl FieldError {
    pub fn field(&self) -> Field {
        match *self {
            FieldError::Required(field)
            | FieldError::TooShort(field, _)
            | FieldError::InvalidEmail(field) => field,
        }
    }
}

/// At most one error per field, iterated in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `error` unless its field already has one. Rules are checked
    /// most severe first, so the first error wins.
    pub fn add(&mut self, error: FieldError) {
        self.0.entry(error.field()).or_insert(error);
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.values()
    }

    /// Drops every error whose field does not satisfy `f`.
    pub fn retain(&mut self, mut f: impl FnMut(Field) -> bool) {
        self.0.retain(|&field, _| f(field));
    }
}

impl FromIterator<FieldError> for ValidationErrors {
    fn from_iter<T: IntoIterator<Item = FieldError>>(iter: T) -> Self {
        let mut errors = Self::new();
        for error in iter {
            errors.add(error);
        }
        errors
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = btree_map::IntoValues<Field, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_values()
    }
}
