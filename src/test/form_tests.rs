#[cfg(test)]
mod form_tests {
    use crate::form::{build_airspace_form, FormField, FormGroup};
    use crate::settings::{option_fields, FIELD_MAX_LEVEL, FIELD_NORTH, FIELD_RADIO_FREQ, OPTIONS_GROUP};

    fn build_test_group() -> FormGroup {
        FormGroup::new("test".to_string(), vec![
            FormField { name: "a".to_string(), value: Some("1".to_string()) },
            FormField { name: "b".to_string(), value: None }
        ])
    }

    #[test]
    fn test_field_names_are_in_declaration_order() {
        // GIVEN a group of 2 fields
        let group = build_test_group();

        // WHEN we enumerate the field names
        let names = group.field_names();

        // THEN we expect them in declaration order
        assert_eq!(vec!["a".to_string(), "b".to_string()], names);
    }

    #[test]
    fn test_get_value() {
        // GIVEN a group of 2 fields
        let group = build_test_group();

        // THEN we expect a set field to return its value
        assert_eq!(Some("1".to_string()), group.get_value("a"));
        // AND an absent field to return the absent value
        assert_eq!(None, group.get_value("b"));
        // AND an undeclared field to return the absent value
        assert_eq!(None, group.get_value("missing"));
    }

    #[test]
    fn test_set_value() {
        // GIVEN a group of 2 fields
        let mut group = build_test_group();

        // WHEN we overwrite a field value
        group.set_value("a", Some("2".to_string()));
        // THEN we expect the new value
        assert_eq!(Some("2".to_string()), group.get_value("a"));

        // WHEN we clear a field
        group.set_value("a", None);
        // THEN we expect the absent value
        assert_eq!(None, group.get_value("a"));
    }

    #[test]
    fn test_set_value_never_declares_fields() {
        // GIVEN a group of 2 fields
        let mut group = build_test_group();

        // WHEN we set a value for an undeclared name
        group.set_value("missing", Some("1".to_string()));

        // THEN we expect the field set to be unchanged
        assert_eq!(2, group.field_names().len());
        assert_eq!(None, group.get_value("missing"));
    }

    #[test]
    fn test_airspace_form_defaults() {
        // GIVEN a freshly built airspace form
        let form = build_airspace_form();
        let group = form.get_group(OPTIONS_GROUP).unwrap();

        // THEN we expect the 5 option fields in order
        let expected: Vec<String> = option_fields().iter().map(|f| f.to_string()).collect();
        assert_eq!(expected, group.field_names());

        // AND each field to default to the unrestricted entry of its list
        assert_eq!(Some("66000".to_string()), group.get_value(FIELD_MAX_LEVEL));
        assert_eq!(Some("no".to_string()), group.get_value(FIELD_RADIO_FREQ));
        assert_eq!(Some("59".to_string()), group.get_value(FIELD_NORTH));
    }

    #[test]
    fn test_get_group_for_unknown_name() {
        // GIVEN a freshly built airspace form
        let form = build_airspace_form();

        // WHEN we look up a group that does not exist
        // THEN we expect no group
        assert!(form.get_group("nonexistent").is_none());
    }
}
