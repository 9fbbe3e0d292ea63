use vcard_core::export::contacts_to_csv;
use vcard_core::Contact;

#[test]
fn header_row_is_stable() {
    let csv = String::from_utf8(contacts_to_csv(&[]).unwrap()).unwrap();
    assert_eq!(
        csv.trim_end(),
        "id,name,dob,email,phone,address,title,organization,gender,photo,qr_image"
    );
}

#[test]
fn rows_follow_input_order_with_optionals_blank() {
    let contacts = vec![
        contact(1, "Ada Lovelace", "ada@example.org"),
        contact(2, "Alan Turing", "alan@example.org"),
    ];

    let csv = String::from_utf8(contacts_to_csv(&contacts).unwrap()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("1,Ada Lovelace,"));
    assert!(lines[2].starts_with("2,Alan Turing,"));
    assert!(lines[1].contains(",,,")); // blank optional columns
}

#[test]
fn embedded_separators_are_quoted() {
    let mut record = contact(7, "Quote, Needing", "quote@example.org");
    record.address = "1 Comma Road, Suite \"A\"".to_string();

    let csv = String::from_utf8(contacts_to_csv(&[record]).unwrap()).unwrap();

    assert!(csv.contains("\"Quote, Needing\""));
    assert!(csv.contains("\"1 Comma Road, Suite \"\"A\"\"\""));
}

#[test]
fn export_is_deterministic() {
    let contacts = vec![contact(1, "Ada Lovelace", "ada@example.org")];
    assert_eq!(
        contacts_to_csv(&contacts).unwrap(),
        contacts_to_csv(&contacts).unwrap()
    );
}

fn contact(id: i64, name: &str, email: &str) -> Contact {
    Contact {
        id,
        name: name.to_string(),
        dob: "1990-04-01".to_string(),
        email: email.to_string(),
        phone: "+1 555 0100".to_string(),
        address: "12 Example Street".to_string(),
        photo: None,
        title: None,
        organization: None,
        gender: None,
        qr_image: None,
    }
}
