use crate::field::Field;

/// The live contents of the form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Optional, an empty string means no message.
    pub message: String,
}

impl FieldValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }
}
