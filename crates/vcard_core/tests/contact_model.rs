use vcard_core::{Contact, ContactValidationError, NewContact};

#[test]
fn new_contact_defaults_leave_optionals_unset() {
    let input = NewContact::new(
        "Ada Lovelace",
        "1990-04-01",
        "ada@example.org",
        "+1 555 0100",
        "12 Example Street",
    );

    assert!(input.photo.is_none());
    assert!(input.title.is_none());
    assert!(input.organization.is_none());
    assert!(input.gender.is_none());
    input.validate().unwrap();
}

#[test]
fn empty_required_fields_are_rejected() {
    let mut input = valid_input();
    input.name = "   ".to_string();
    assert_eq!(
        input.validate().unwrap_err(),
        ContactValidationError::EmptyField("name")
    );

    let mut input = valid_input();
    input.address = String::new();
    assert_eq!(
        input.validate().unwrap_err(),
        ContactValidationError::EmptyField("address")
    );
}

#[test]
fn malformed_dob_is_rejected() {
    let mut input = valid_input();
    input.dob = "01/04/1990".to_string();
    assert!(matches!(
        input.validate().unwrap_err(),
        ContactValidationError::InvalidDob(_)
    ));
}

#[test]
fn malformed_email_is_rejected() {
    for bad in ["no-at-sign", "two@@example.org ", "spaced @example.org", "no-tld@host"] {
        let mut input = valid_input();
        input.email = bad.to_string();
        assert!(
            matches!(
                input.validate().unwrap_err(),
                ContactValidationError::InvalidEmail(_)
            ),
            "`{bad}` should be rejected"
        );
    }
}

#[test]
fn contact_validation_mirrors_input_rules() {
    let mut contact = Contact {
        id: 1,
        name: "Ada Lovelace".to_string(),
        dob: "1990-04-01".to_string(),
        email: "ada@example.org".to_string(),
        phone: "+1 555 0100".to_string(),
        address: "12 Example Street".to_string(),
        photo: None,
        title: None,
        organization: None,
        gender: None,
        qr_image: Some("qr_1.png".to_string()),
    };
    contact.validate().unwrap();

    contact.dob = "yesterday".to_string();
    assert!(contact.validate().is_err());
}

#[test]
fn new_contact_json_deserializes_with_missing_optionals() {
    let input: NewContact = serde_json::from_str(
        r#"{
            "name": "Ada Lovelace",
            "dob": "1990-04-01",
            "email": "ada@example.org",
            "phone": "+1 555 0100",
            "address": "12 Example Street"
        }"#,
    )
    .unwrap();

    assert!(input.title.is_none());
    assert!(input.gender.is_none());
    input.validate().unwrap();
}

fn valid_input() -> NewContact {
    NewContact::new(
        "Ada Lovelace",
        "1990-04-01",
        "ada@example.org",
        "+1 555 0100",
        "12 Example Street",
    )
}
