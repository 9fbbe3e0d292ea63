//! Contact repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the canonical `contacts` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `validate()` before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.
//! - Email uniqueness violations surface as `RepoError::DuplicateEmail`.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::contact::{Contact, ContactId, ContactValidationError, NewContact};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, ErrorCode, Row};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

const CONTACT_SELECT_SQL: &str = "SELECT
    id,
    name,
    dob,
    email,
    phone,
    address,
    photo,
    title,
    organization,
    gender,
    qrcode
FROM contacts";

const REQUIRED_COLUMNS: &[&str] = &[
    "id",
    "name",
    "dob",
    "email",
    "phone",
    "address",
    "photo",
    "title",
    "organization",
    "gender",
    "qrcode",
];

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for contact persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ContactValidationError),
    Db(DbError),
    NotFound(ContactId),
    /// Another record already owns this email address.
    DuplicateEmail(String),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "contact not found: {id}"),
            Self::DuplicateEmail(email) => {
                write!(f, "a contact with email `{email}` already exists")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted contact data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} is not migrated to {expected_version}"
            ),
            Self::MissingRequiredTable(table) => write!(f, "required table `{table}` is missing"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ContactValidationError> for RepoError {
    fn from(value: ContactValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Query options for listing contacts.
#[derive(Debug, Clone, Default)]
pub struct ContactListQuery {
    /// Case-insensitive substring match against name and email.
    pub search: Option<String>,
    pub limit: Option<u32>,
    pub offset: u32,
}

/// Repository interface for contact CRUD operations.
pub trait ContactRepository {
    fn create_contact(&self, input: &NewContact) -> RepoResult<ContactId>;
    fn update_contact(&self, contact: &Contact) -> RepoResult<()>;
    fn get_contact(&self, id: ContactId) -> RepoResult<Option<Contact>>;
    fn find_by_email(&self, email: &str) -> RepoResult<Option<Contact>>;
    fn list_contacts(&self, query: &ContactListQuery) -> RepoResult<Vec<Contact>>;
    fn set_qr_image(&self, id: ContactId, file_name: &str) -> RepoResult<()>;
    fn delete_contact(&self, id: ContactId) -> RepoResult<()>;
}

/// SQLite-backed contact repository.
pub struct SqliteContactRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteContactRepository<'conn> {
    /// Wraps a connection after verifying it was opened through the
    /// migration bootstrap and carries the schema this code expects.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let actual_version: u32 =
            conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        let expected_version = latest_version();
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let table_exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'contacts'
            );",
            [],
            |row| row.get(0),
        )?;
        if table_exists == 0 {
            return Err(RepoError::MissingRequiredTable("contacts"));
        }

        let mut stmt = conn.prepare("PRAGMA table_info(contacts);")?;
        let mut rows = stmt.query([])?;
        let mut columns = HashSet::new();
        while let Some(row) = rows.next()? {
            columns.insert(row.get::<_, String>("name")?);
        }
        for column in REQUIRED_COLUMNS {
            if !columns.contains(*column) {
                return Err(RepoError::MissingRequiredColumn {
                    table: "contacts",
                    column,
                });
            }
        }

        Ok(Self { conn })
    }
}

impl ContactRepository for SqliteContactRepository<'_> {
    fn create_contact(&self, input: &NewContact) -> RepoResult<ContactId> {
        input.validate()?;

        let result = self.conn.execute(
            "INSERT INTO contacts (
                name,
                dob,
                email,
                phone,
                address,
                photo,
                title,
                organization,
                gender
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9);",
            params![
                input.name.as_str(),
                input.dob.as_str(),
                input.email.as_str(),
                input.phone.as_str(),
                input.address.as_str(),
                input.photo.as_deref(),
                input.title.as_deref(),
                input.organization.as_deref(),
                input.gender.as_deref(),
            ],
        );

        match result {
            Ok(_) => Ok(self.conn.last_insert_rowid()),
            Err(err) => Err(map_constraint_error(err, &input.email)),
        }
    }

    fn update_contact(&self, contact: &Contact) -> RepoResult<()> {
        contact.validate()?;

        let result = self.conn.execute(
            "UPDATE contacts
             SET
                name = ?1,
                dob = ?2,
                email = ?3,
                phone = ?4,
                address = ?5,
                photo = ?6,
                title = ?7,
                organization = ?8,
                gender = ?9,
                qrcode = ?10,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?11;",
            params![
                contact.name.as_str(),
                contact.dob.as_str(),
                contact.email.as_str(),
                contact.phone.as_str(),
                contact.address.as_str(),
                contact.photo.as_deref(),
                contact.title.as_deref(),
                contact.organization.as_deref(),
                contact.gender.as_deref(),
                contact.qr_image.as_deref(),
                contact.id,
            ],
        );

        let changed = match result {
            Ok(changed) => changed,
            Err(err) => return Err(map_constraint_error(err, &contact.email)),
        };
        if changed == 0 {
            return Err(RepoError::NotFound(contact.id));
        }

        Ok(())
    }

    fn get_contact(&self, id: ContactId) -> RepoResult<Option<Contact>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CONTACT_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_contact_row(row)?));
        }

        Ok(None)
    }

    fn find_by_email(&self, email: &str) -> RepoResult<Option<Contact>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CONTACT_SELECT_SQL} WHERE email = ?1;"))?;

        let mut rows = stmt.query(params![email])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_contact_row(row)?));
        }

        Ok(None)
    }

    fn list_contacts(&self, query: &ContactListQuery) -> RepoResult<Vec<Contact>> {
        let mut sql = format!("{CONTACT_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(search) = query.search.as_deref() {
            sql.push_str(" AND (name LIKE ? ESCAPE '\\' OR email LIKE ? ESCAPE '\\')");
            let pattern = format!("%{}%", escape_like(search));
            bind_values.push(Value::Text(pattern.clone()));
            bind_values.push(Value::Text(pattern));
        }

        sql.push_str(" ORDER BY id ASC");

        if let Some(limit) = query.limit {
            sql.push_str(" LIMIT ?");
            bind_values.push(Value::Integer(i64::from(limit)));
            if query.offset > 0 {
                sql.push_str(" OFFSET ?");
                bind_values.push(Value::Integer(i64::from(query.offset)));
            }
        } else if query.offset > 0 {
            sql.push_str(" LIMIT -1 OFFSET ?");
            bind_values.push(Value::Integer(i64::from(query.offset)));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut contacts = Vec::new();

        while let Some(row) = rows.next()? {
            contacts.push(parse_contact_row(row)?);
        }

        Ok(contacts)
    }

    fn set_qr_image(&self, id: ContactId, file_name: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE contacts
             SET
                qrcode = ?1,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?2;",
            params![file_name, id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn delete_contact(&self, id: ContactId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM contacts WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_contact_row(row: &Row<'_>) -> RepoResult<Contact> {
    let contact = Contact {
        id: row.get("id")?,
        name: row.get("name")?,
        dob: row.get("dob")?,
        email: row.get("email")?,
        phone: row.get("phone")?,
        address: row.get("address")?,
        photo: row.get("photo")?,
        title: row.get("title")?,
        organization: row.get("organization")?,
        gender: row.get("gender")?,
        qr_image: row.get("qrcode")?,
    };
    contact.validate().map_err(|err| {
        RepoError::InvalidData(format!("contact id {}: {err}", contact.id))
    })?;
    Ok(contact)
}

fn map_constraint_error(err: rusqlite::Error, email: &str) -> RepoError {
    if let rusqlite::Error::SqliteFailure(failure, Some(message)) = &err {
        if failure.code == ErrorCode::ConstraintViolation && message.contains("contacts.email") {
            return RepoError::DuplicateEmail(email.to_string());
        }
    }
    err.into()
}

// LIKE treats % and _ as wildcards; user search input must match literally.
fn escape_like(value: &str) -> String {
    value
        .replace('\\', r"\\")
        .replace('%', r"\%")
        .replace('_', r"\_")
}
