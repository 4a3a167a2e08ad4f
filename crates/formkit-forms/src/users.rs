//! Stock rule sets for the user-management create dialogs.
//!
//! Field names match the wire names the dialogs submit.

use formkit_core::{predicates, FieldRule, RuleSet};

/// Rules for the "create client" dialog.
///
/// Names and username require at least 3 characters, the phone at least 5
/// digits; the email is optional but must have email shape when given.
pub fn client_rules() -> RuleSet {
    RuleSet::builder()
        .field("firstName", FieldRule::new().required().min_length(3))
        .field("lastName", FieldRule::new().required().min_length(3))
        .field("username", FieldRule::new().required().min_length(3))
        .field(
            "phone",
            FieldRule::new()
                .required()
                .min_length(5)
                .predicate(predicates::digits()),
        )
        .field("email", FieldRule::new().predicate(predicates::email()))
        .build()
}

/// Rules for the "create employee" dialog: the client fields plus a password
/// of at least 6 characters.
pub fn employee_rules() -> RuleSet {
    RuleSet::builder()
        .field("firstName", FieldRule::new().required().min_length(3))
        .field("lastName", FieldRule::new().required().min_length(3))
        .field("username", FieldRule::new().required().min_length(3))
        .field(
            "phone",
            FieldRule::new()
                .required()
                .min_length(5)
                .predicate(predicates::digits()),
        )
        .field("email", FieldRule::new().predicate(predicates::email()))
        .field("password", FieldRule::new().required().min_length(6))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use formkit_core::Record;

    fn valid_client() -> Record {
        [
            ("firstName", "Jane"),
            ("lastName", "Doe"),
            ("username", "jdoe"),
            ("phone", "12345"),
            ("email", "jane@example.com"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn missing_first_name_is_the_only_error() {
        let record: Record = [
            ("firstName", ""),
            ("lastName", "Doe"),
            ("username", "abc"),
            ("phone", "12345"),
            ("email", ""),
        ]
        .into_iter()
        .collect();

        let errors = client_rules().validate(&record);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.message("firstName").as_deref(),
            Some("This field is required")
        );
        assert!(!errors.is_valid());
    }

    #[test]
    fn short_first_name_reports_min_length() {
        let mut record = valid_client();
        record.set("firstName", "Al");

        let errors = client_rules().validate(&record);
        assert_eq!(
            errors.message("firstName").as_deref(),
            Some("Must be at least 3 characters")
        );
    }

    #[test]
    fn malformed_email_reports_configured_message() {
        let mut record = valid_client();
        record.set("email", "not-an-email");

        let errors = client_rules().validate(&record);
        assert_eq!(errors.message("email").as_deref(), Some("Invalid email"));
    }

    #[test]
    fn blank_email_is_fine() {
        let mut record = valid_client();
        record.set("email", "");

        assert!(client_rules().validate(&record).is_valid());
    }

    #[test]
    fn fully_valid_client_passes() {
        let errors = client_rules().validate(&valid_client());
        assert!(errors.is_valid());
        assert!(errors.is_empty());
    }

    #[test]
    fn non_numeric_phone_is_rejected() {
        let mut record = valid_client();
        record.set("phone", "12-345");

        let errors = client_rules().validate(&record);
        assert_eq!(
            errors.message("phone").as_deref(),
            Some("Must contain digits only")
        );
    }

    #[test]
    fn missing_password_beats_its_min_length() {
        let mut record = valid_client();
        record.set("password", "");

        let errors = employee_rules().validate(&record);
        assert_eq!(errors.len(), 1);
        // required short-circuits before the length bound is consulted
        assert_eq!(errors.get("password").unwrap().code, "required");
        assert_eq!(
            errors.message("password").as_deref(),
            Some("This field is required")
        );
    }

    #[test]
    fn short_password_reports_min_length() {
        let mut record = valid_client();
        record.set("password", "12345");

        let errors = employee_rules().validate(&record);
        assert_eq!(
            errors.message("password").as_deref(),
            Some("Must be at least 6 characters")
        );
    }
}
