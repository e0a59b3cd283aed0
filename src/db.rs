//! A minimal document store on top of SQLite.
//!
//! Each [Collection] is a table holding JSON documents keyed by a
//! [DocumentId]. The id lives in the table's primary key column, never in the
//! JSON body.

use rusqlite::Connection;
use serde::{Serialize, de::DeserializeOwned};
use uuid::Uuid;

use crate::Error;

/// The identifier the store assigns to a document on insertion.
///
/// Ids are 24 lowercase hex characters.
pub type DocumentId = String;

/// The length of a [DocumentId] in characters.
const DOCUMENT_ID_LENGTH: usize = 24;

/// The named document collections in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    /// Income and expense transactions.
    Transactions,
}

impl Collection {
    /// All collections, in the order they are created.
    const ALL: [Collection; 1] = [Collection::Transactions];

    fn table_name(self) -> &'static str {
        match self {
            Collection::Transactions => "transactions",
        }
    }
}

/// Create a fresh, random document id.
fn new_document_id() -> DocumentId {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(DOCUMENT_ID_LENGTH);
    id
}

/// Create the tables for all collections if they do not exist yet.
///
/// # Errors
/// Returns an [Error::SqlError] if a table cannot be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    for collection in Collection::ALL {
        create_collection(collection, connection)?;
    }

    Ok(())
}

fn create_collection(collection: Collection, connection: &Connection) -> Result<(), Error> {
    connection.execute(
        &format!(
            "CREATE TABLE IF NOT EXISTS \"{}\" (
                id TEXT PRIMARY KEY NOT NULL,
                document TEXT NOT NULL
            )",
            collection.table_name()
        ),
        (),
    )?;

    Ok(())
}

/// Insert `document` into `collection` and return the id the store assigned to it.
///
/// # Errors
/// This function will return a:
/// - [Error::InvalidDocument] if `document` cannot be serialized as JSON,
/// - or [Error::SqlError] if there is an SQL error.
pub fn insert_document<T: Serialize>(
    collection: Collection,
    document: &T,
    connection: &Connection,
) -> Result<DocumentId, Error> {
    let body = serde_json::to_string(document)?;
    let id = new_document_id();

    connection.execute(
        &format!(
            "INSERT INTO \"{}\" (id, document) VALUES (?1, ?2)",
            collection.table_name()
        ),
        (&id, &body),
    )?;

    Ok(id)
}

/// Read every document in `collection`, in insertion order.
///
/// # Errors
/// This function will return a:
/// - [Error::InvalidDocument] if a stored document does not match `T`,
/// - or [Error::SqlError] if there is an SQL error.
pub fn find_all_documents<T: DeserializeOwned>(
    collection: Collection,
    connection: &Connection,
) -> Result<Vec<(DocumentId, T)>, Error> {
    let mut statement = connection.prepare(&format!(
        "SELECT id, document FROM \"{}\" ORDER BY rowid",
        collection.table_name()
    ))?;

    let rows = statement
        .query_map((), |row| {
            let id: String = row.get(0)?;
            let body: String = row.get(1)?;
            Ok((id, body))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    rows.into_iter()
        .map(|(id, body)| Ok((id, serde_json::from_str(&body)?)))
        .collect()
}
