use thiserror::Error;

use crate::{email::is_valid_email, field::Field, macros::nutype_string, values::FieldValues};

nutype_string!(SubmittedName(validate(not_empty)));
nutype_string!(SubmittedEmail(validate(predicate = |email| is_valid_email(email))));
nutype_string!(SubmittedMessage(validate(not_empty)));

/// The field values captured by a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedSnapshot {
    pub first_name: SubmittedName,
    pub last_name: SubmittedName,
    pub email: SubmittedEmail,
    /// `None` if the message input was left empty.
    pub message: Option<SubmittedMessage>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmittedSnapshotError {
    #[error("{0} cannot be captured in its current state")]
    Invalid(Field),
}

impl TryFrom<&FieldValues> for SubmittedSnapshot {
    type Error = SubmittedSnapshotError;

    fn try_from(values: &FieldValues) -> Result<Self, Self::Error> {
        let invalid = SubmittedSnapshotError::Invalid;

        Ok(Self {
            first_name: SubmittedName::try_new(values.first_name.clone())
                .map_err(|_| invalid(Field::FirstName))?,
            last_name: SubmittedName::try_new(values.last_name.clone())
                .map_err(|_| invalid(Field::LastName))?,
            email: SubmittedEmail::try_new(values.email.clone())
                .map_err(|_| invalid(Field::Email))?,
            message: (!values.message.is_empty())
                .then(|| SubmittedMessage::try_new(values.message.clone()))
                .transpose()
                .map_err(|_| invalid(Field::Message))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use contact_form_utils::assert_matches;
    use pretty_assertions::assert_eq;

    use super::*;

    fn values(first_name: &str, last_name: &str, email: &str, message: &str) -> FieldValues {
        FieldValues {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    #[test]
    fn capture_without_message() {
        // Act
        let result = SubmittedSnapshot::try_from(&values("Jooonny", "Ive", "jm12312@aol.com", ""));

        // Assert
        let snapshot = result.unwrap();
        assert_eq!(*snapshot.first_name, "Jooonny");
        assert_eq!(*snapshot.last_name, "Ive");
        assert_eq!(*snapshot.email, "jm12312@aol.com");
        assert_eq!(snapshot.message, None);
    }

    #[test]
    fn capture_with_message() {
        // Act
        let result = SubmittedSnapshot::try_from(&values(
            "Jooonny",
            "Ive",
            "jm12312@aol.com",
            "I made you a contaaaaact",
        ));

        // Assert
        let message = result.unwrap().message.unwrap();
        assert_eq!(*message, "I made you a contaaaaact");
    }

    #[test]
    fn missing_last_name() {
        // Act
        let result = SubmittedSnapshot::try_from(&values("Jooonny", "", "jm12312@aol.com", ""));

        // Assert
        assert_matches!(result, Err(SubmittedSnapshotError::Invalid(Field::LastName)));
    }

    #[test]
    fn malformed_email() {
        // Act
        let result = SubmittedSnapshot::try_from(&values("Jooonny", "Ive", "JonatAOL.dom", ""));

        // Assert
        assert_matches!(result, Err(SubmittedSnapshotError::Invalid(Field::Email)));
    }

    #[test]
    fn non_ascii_email() {
        // Act
        let result =
            SubmittedSnapshot::try_from(&values("Jooonny", "Ive", "jöhn@example.com", ""));

        // Assert
        assert_eq!(*result.unwrap().email, "jöhn@example.com");
    }

    #[test]
    fn email_without_tld() {
        // Act
        let result = SubmittedSnapshot::try_from(&values("Jooonny", "Ive", "jm12312@aol", ""));

        // Assert
        assert_matches!(result, Err(SubmittedSnapshotError::Invalid(Field::Email)));
    }
}
