//! Customer construction and cloning scenarios.

use recast_tests::prelude::*;

fn steve_jobs() -> PropertyList<Customer> {
    PropertyList::new()
        .with(Customer::NAME, "Steve Jobs")
        .with(Customer::ZIPCODE, 97202)
        .with(Customer::ADDRESS_LINE1, "Reed College")
}

mod construct {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_all_required_fields_supplied() {
        init_tracing();

        // GIVEN name, zipcode and addressLine1
        // WHEN construct
        let customer = construct(steve_jobs()).unwrap();

        // THEN every supplied field is set and addressLine2 keeps its blank value
        assert_eq!(
            customer,
            Customer {
                name: "Steve Jobs".to_string(),
                zipcode: 97202,
                address_line1: "Reed College".to_string(),
                address_line2: None,
            }
        );
    }

    #[test]
    fn test_missing_address_line1_is_named() {
        init_tracing();

        let props = PropertyList::new()
            .with(Customer::NAME, "Steve Jobs")
            .with(Customer::ZIPCODE, 97202);

        let err = construct(props).unwrap_err();

        assert_eq!(
            err,
            ComposeError::MissingRequiredFields {
                record: "Customer".to_string(),
                fields: vec!["addressLine1".to_string()],
            }
        );
    }

    #[test]
    fn test_empty_list_reports_every_required_field() {
        let err = construct::<Customer>(Vec::new()).unwrap_err();

        assert_eq!(err.missing_fields(), &["name", "zipcode", "addressLine1"]);
    }

    #[test]
    fn test_optional_field_is_never_required() {
        let customer = steve_jobs()
            .with_some(Customer::ADDRESS_LINE2, "Box 1")
            .construct()
            .unwrap();

        assert_eq!(customer.address_line2.as_deref(), Some("Box 1"));
    }

    #[test]
    fn test_explicit_absent_does_not_satisfy_required() {
        // GIVEN a raw null aimed at the required name field
        let props = PropertyList::new()
            .push(PartialProperty::from_parts(CustomerField::Name, Value::Null))
            .with(Customer::ZIPCODE, 97202)
            .with(Customer::ADDRESS_LINE1, "Reed College");

        // THEN name is still missing
        let err = construct(props).unwrap_err();
        assert_eq!(err.missing_fields(), &["name"]);
    }

    #[test]
    fn test_last_write_wins() {
        let customer = steve_jobs()
            .with(Customer::NAME, "a")
            .with(Customer::NAME, "b")
            .construct()
            .unwrap();

        assert_eq!(customer.name, "b");
    }

    #[test]
    fn test_type_mismatch_is_skipped_by_default() {
        // GIVEN a zipcode carried as a string
        let props = steve_jobs().push(PartialProperty::from_parts(
            CustomerField::Zipcode,
            Value::from("97202-1234"),
        ));

        // THEN the earlier valid zipcode stands
        let customer = construct(props).unwrap();
        assert_eq!(customer.zipcode, 97202);
    }

    #[test]
    fn test_strict_composer_reports_type_mismatch() {
        let composer = Composer::<Customer>::with_config(ComposeConfig::strict());
        let props = steve_jobs().push(PartialProperty::from_parts(
            CustomerField::Zipcode,
            Value::from("97202-1234"),
        ));

        let err = composer.construct(props).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid property type for zipcode on Customer: expected Int, got String"
        );
    }
}

mod clone {
    use super::*;
    use pretty_assertions::assert_eq;

    fn base() -> Customer {
        Customer {
            name: "A".to_string(),
            zipcode: 1,
            address_line1: "X".to_string(),
            address_line2: Some(String::new()),
        }
    }

    #[test]
    fn test_override_name() {
        let cloned = clone_with(&base(), PropertyList::new().with(Customer::NAME, "B"));

        assert_eq!(
            cloned,
            Customer {
                name: "B".to_string(),
                zipcode: 1,
                address_line1: "X".to_string(),
                address_line2: Some(String::new()),
            }
        );
    }

    #[test]
    fn test_empty_mutations_equal_base() {
        assert_eq!(clone_with(&base(), Vec::new()), base());
    }

    #[test]
    fn test_explicit_absent_is_applied() {
        let cloned = Composer::new().clone_tracked(
            &base(),
            PropertyList::new().unset(Customer::ADDRESS_LINE2),
        );

        assert_eq!(cloned.record.address_line2, None);
        assert!(cloned.was_touched(CustomerField::AddressLine2));
    }

    #[test]
    fn test_mismatched_mutation_leaves_field() {
        let mutations = vec![
            PartialProperty::from_parts(CustomerField::Zipcode, Value::Float(2.0)),
            Property::new(Customer::ADDRESS_LINE1, "Y".to_string()).erase(),
        ];

        let cloned = Composer::new().clone_tracked(&base(), mutations);

        assert_eq!(cloned.record.zipcode, 1);
        assert_eq!(cloned.record.address_line1, "Y");
        assert_eq!(cloned.skipped, vec![CustomerField::Zipcode]);
        assert_eq!(cloned.touched, vec![CustomerField::AddressLine1]);
    }

    #[test]
    fn test_clone_does_not_revalidate_required_fields() {
        // GIVEN a base that would not pass construct on its own
        let blank = Customer::blank();

        // THEN clone still succeeds
        let cloned = clone_with(&blank, PropertyList::new().with(Customer::ZIPCODE, 5));
        assert_eq!(cloned.zipcode, 5);
        assert_eq!(cloned.name, "");
    }
}

mod apply {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_apply_reports_change_and_keeps_input() {
        let original = Customer::blank();
        let partial: PartialProperty<Customer> =
            Property::new(Customer::NAME, "Ada".to_string()).into();

        let Applied { record, changed } = partial.apply(&original);

        assert!(changed);
        assert_eq!(record.name, "Ada");
        assert_eq!(original, Customer::blank());
    }

    #[test]
    fn test_apply_mismatch_returns_unchanged() {
        let original = Customer::blank();
        let partial = PartialProperty::<Customer>::from_parts(CustomerField::Name, Value::Int(1));

        let applied = partial.apply(&original);

        assert!(!applied.changed);
        assert_eq!(applied.record, original);
    }
}

mod schema {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_required_fields_are_declared_not_inferred() {
        let schema = Customer::schema();

        assert_eq!(
            schema.required_fields(),
            &[
                CustomerField::Name,
                CustomerField::Zipcode,
                CustomerField::AddressLine1
            ]
        );
        assert!(!schema.is_required(CustomerField::AddressLine2));
        assert_eq!(
            schema.get(CustomerField::AddressLine2).unwrap().type_label(),
            "String?"
        );
    }

    #[test]
    fn test_selectors_compare_by_field() {
        use std::collections::HashSet;

        let same: Field<Customer, String> = Field::new(CustomerField::Name);
        let set: HashSet<_> = [Customer::NAME, same, Customer::ADDRESS_LINE1]
            .into_iter()
            .collect();

        assert_eq!(Customer::NAME, same);
        assert_ne!(Customer::NAME, Customer::ADDRESS_LINE1);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_missing_required_dry_run() {
        let props = PropertyList::new().with(Customer::NAME, "Ada");

        let missing = Composer::<Customer>::new().missing_required(props.as_slice());

        assert_eq!(missing, vec!["zipcode", "addressLine1"]);
    }
}
