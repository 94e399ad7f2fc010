use datum_security::{FieldRedactor, filter_datum};
use proptest::prelude::*;

proptest! {
    #[test]
    fn empty_field_list_is_identity(message in ".*") {
        let fields: [&str; 0] = [];
        prop_assert_eq!(filter_datum(&fields, "***", &message, ";"), message);
    }

    #[test]
    fn absent_fields_leave_message_untouched(
        fields in prop::collection::vec("[A-Z]{1,8}", 0..5),
        message in "[a-z0-9=;@. ]{0,64}",
    ) {
        let redactor = FieldRedactor::new(&fields, "***", ";").unwrap();
        prop_assert_eq!(redactor.redact(&message), message);
    }

    #[test]
    fn present_field_is_masked_in_place(
        field in "[a-z]{1,8}",
        value in "[0-9]{1,10}",
        prefix in "([A-Z]{1,5}=[A-Z]{0,5};){0,3}",
        suffix in "([A-Z]{1,5}=[A-Z]{0,5};){0,3}",
    ) {
        let message = format!("{prefix}{field}={value};{suffix}");
        let redacted = filter_datum(&[field.as_str()], "***", &message, ";");

        prop_assert_eq!(&redacted, &format!("{prefix}{field}=***;{suffix}"));
        prop_assert!(!redacted.contains(&value));
    }
}
