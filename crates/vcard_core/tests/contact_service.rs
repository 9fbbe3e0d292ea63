use vcard_core::db::open_db_in_memory;
use vcard_core::{
    AppConfig, ContactListQuery, ContactService, NewContact, RepoError, ServiceError,
    SqliteContactRepository,
};

#[test]
fn register_persists_record_and_qr_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactRepository::try_new(&conn).unwrap();
    let service = ContactService::new(repo, &config);

    let contact = service.register(&sample_input("ada@example.org")).unwrap();

    let expected_name = format!("qr_{}.png", contact.id);
    assert_eq!(contact.qr_image.as_deref(), Some(expected_name.as_str()));
    assert!(config.media_dir.join(&expected_name).is_file());
}

#[test]
fn register_duplicate_email_fails_before_artifact_work() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactRepository::try_new(&conn).unwrap();
    let service = ContactService::new(repo, &config);

    service.register(&sample_input("dup@example.org")).unwrap();
    let err = service
        .register(&sample_input("dup@example.org"))
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Repo(RepoError::DuplicateEmail(_))
    ));
}

#[test]
fn remove_deletes_record_and_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactRepository::try_new(&conn).unwrap();
    let service = ContactService::new(repo, &config);

    let contact = service.register(&sample_input("gone@example.org")).unwrap();
    let artifact = config
        .media_dir
        .join(contact.qr_image.as_deref().unwrap());
    assert!(artifact.is_file());

    service.remove(contact.id).unwrap();

    assert!(service.get(contact.id).unwrap().is_none());
    assert!(!artifact.exists());
}

#[test]
fn remove_tolerates_already_missing_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactRepository::try_new(&conn).unwrap();
    let service = ContactService::new(repo, &config);

    let contact = service.register(&sample_input("no-file@example.org")).unwrap();
    std::fs::remove_file(
        config
            .media_dir
            .join(contact.qr_image.as_deref().unwrap()),
    )
    .unwrap();

    service.remove(contact.id).unwrap();
    assert!(service.get(contact.id).unwrap().is_none());
}

#[test]
fn regenerate_qr_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactRepository::try_new(&conn).unwrap();
    let service = ContactService::new(repo, &config);

    let contact = service.register(&sample_input("regen@example.org")).unwrap();
    let path = config
        .media_dir
        .join(contact.qr_image.as_deref().unwrap());
    let first = std::fs::read(&path).unwrap();

    let file_name = service.regenerate_qr(contact.id).unwrap();
    assert_eq!(Some(file_name.as_str()), contact.qr_image.as_deref());
    assert_eq!(std::fs::read(&path).unwrap(), first);
}

#[test]
fn regenerate_qr_for_unknown_contact_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactRepository::try_new(&conn).unwrap();
    let service = ContactService::new(repo, &config);

    let err = service.regenerate_qr(4242).unwrap_err();
    assert!(matches!(err, ServiceError::Repo(RepoError::NotFound(4242))));
}

#[test]
fn vcard_embeds_the_card_url() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactRepository::try_new(&conn).unwrap();
    let service = ContactService::new(repo, &config);

    let contact = service.register(&sample_input("card@example.org")).unwrap();
    let card = service.vcard(contact.id).unwrap();

    assert!(card.contains(&format!("URL:https://example.org/vcard/{}\r\n", contact.id)));
    assert!(card.contains("EMAIL;TYPE=INTERNET:card@example.org\r\n"));
}

#[test]
fn export_csv_covers_registered_contacts() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactRepository::try_new(&conn).unwrap();
    let service = ContactService::new(repo, &config);

    service.register(&sample_input("a@example.org")).unwrap();
    service.register(&sample_input("b@example.org")).unwrap();

    let csv = String::from_utf8(service.export_csv(&ContactListQuery::default()).unwrap()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("id,name,"));
    assert!(lines[1].contains("a@example.org"));
    assert!(lines[2].contains("b@example.org"));
}

#[test]
fn update_details_keeps_qr_reference() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactRepository::try_new(&conn).unwrap();
    let service = ContactService::new(repo, &config);

    let mut contact = service.register(&sample_input("edit@example.org")).unwrap();
    contact.title = Some("Engineer".to_string());
    service.update_details(&contact).unwrap();

    let loaded = service.get(contact.id).unwrap().unwrap();
    assert_eq!(loaded.title.as_deref(), Some("Engineer"));
    assert_eq!(loaded.qr_image, contact.qr_image);
}

fn test_config(dir: &tempfile::TempDir) -> AppConfig {
    AppConfig {
        media_dir: dir.path().join("media"),
        base_url: "https://example.org".to_string(),
        ..AppConfig::default()
    }
}

fn sample_input(email: &str) -> NewContact {
    NewContact::new(
        "Ada Lovelace",
        "1990-04-01",
        email,
        "+1 555 0100",
        "12 Example Street",
    )
}
