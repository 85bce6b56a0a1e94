//! Defines the core data model and database queries for financial records.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    Error,
    database_id::{DatabaseId, RecordId},
};

// ============================================================================
// MODELS
// ============================================================================

/// A single financial transaction entry belonging to a user.
///
/// To create a new `FinancialRecord`, use [FinancialRecord::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRecord {
    /// The ID of the record.
    pub id: DatabaseId,
    /// The identifier of the user this record belongs to.
    pub user_id: String,
    /// When the transaction happened.
    pub date: Date,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// The spending category, e.g. "Food", "Rent".
    pub category: String,
    /// How the transaction was paid for, e.g. "Cash".
    pub payment_method: String,
}

impl FinancialRecord {
    /// Create a new financial record.
    ///
    /// Shortcut for [RecordBuilder] for discoverability.
    pub fn build(user_id: &str, amount: f64, date: Date) -> RecordBuilder {
        RecordBuilder {
            user_id: user_id.to_owned(),
            date,
            description: String::new(),
            amount,
            category: "Other".to_owned(),
            payment_method: "Cash".to_owned(),
        }
    }
}

/// A builder for creating [FinancialRecord] instances.
///
/// The required fields are set by [FinancialRecord::build]; description,
/// category and payment method can be filled in step by step before the
/// record is inserted with [create_record].
#[derive(Debug, PartialEq, Clone)]
pub struct RecordBuilder {
    /// The identifier of the user this record belongs to.
    ///
    /// The identifier is opaque to the server: it is whatever the identity
    /// layer in front of the application calls the user.
    pub user_id: String,

    /// The date when the transaction occurred.
    pub date: Date,

    /// A human-readable description of the transaction, e.g.
    /// "Dinner with friends". May be empty.
    pub description: String,

    /// The monetary amount of the transaction.
    ///
    /// Expected to be positive, but the storage layer does not enforce this.
    pub amount: f64,

    /// The spending category, e.g. "Food", "Entertainment".
    ///
    /// The fixed category list only exists in the dashboard form's options;
    /// the storage layer accepts any string.
    pub category: String,

    /// How the transaction was paid for, e.g. "Credit Card", "Cash".
    ///
    /// Like the category, the fixed list is a form-side convenience only.
    pub payment_method: String,
}

impl RecordBuilder {
    /// Set the description for the record.
    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_owned();
        self
    }

    /// Set the category for the record.
    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_owned();
        self
    }

    /// Set the payment method for the record.
    pub fn payment_method(mut self, payment_method: &str) -> Self {
        self.payment_method = payment_method.to_owned();
        self
    }
}

/// A partial set of record fields, used to update an existing record.
///
/// Fields left as `None` keep their current value.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordChanges {
    /// The new owning-user identifier, if it should change.
    pub user_id: Option<String>,
    /// The new transaction date, if it should change.
    pub date: Option<Date>,
    /// The new description, if it should change.
    pub description: Option<String>,
    /// The new amount, if it should change.
    pub amount: Option<f64>,
    /// The new category, if it should change.
    pub category: Option<String>,
    /// The new payment method, if it should change.
    pub payment_method: Option<String>,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new financial record in the database from a builder.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn create_record(
    builder: RecordBuilder,
    connection: &Connection,
) -> Result<FinancialRecord, Error> {
    let record = connection
        .prepare(
            "INSERT INTO financial_record (user_id, date, description, amount, category, payment_method)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             RETURNING id, user_id, date, description, amount, category, payment_method",
        )?
        .query_one(
            (
                builder.user_id,
                builder.date,
                builder.description,
                builder.amount,
                builder.category,
                builder.payment_method,
            ),
            map_record_row,
        )?;

    Ok(record)
}

/// Retrieve a financial record from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid record,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn get_record(id: RecordId, connection: &Connection) -> Result<FinancialRecord, Error> {
    let record = connection
        .prepare(
            "SELECT id, user_id, date, description, amount, category, payment_method
             FROM financial_record WHERE id = :id",
        )?
        .query_one(&[(":id", &id)], map_record_row)?;

    Ok(record)
}

/// Retrieve all financial records belonging to `user_id`, in insertion order.
///
/// A user with no records yields an empty list, not an error.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_records_by_user(
    user_id: &str,
    connection: &Connection,
) -> Result<Vec<FinancialRecord>, Error> {
    connection
        .prepare(
            "SELECT id, user_id, date, description, amount, category, payment_method
             FROM financial_record WHERE user_id = :user_id ORDER BY id",
        )?
        .query_map(&[(":user_id", &user_id)], map_record_row)?
        .map(|maybe_record| maybe_record.map_err(Error::from))
        .collect()
}

/// Update the record `id` with the fields set in `changes`, leaving the
/// other fields untouched, and return the updated record.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid record,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn update_record(
    id: RecordId,
    changes: RecordChanges,
    connection: &Connection,
) -> Result<FinancialRecord, Error> {
    let existing = get_record(id, connection)?;

    let record = FinancialRecord {
        id: existing.id,
        user_id: changes.user_id.unwrap_or(existing.user_id),
        date: changes.date.unwrap_or(existing.date),
        description: changes.description.unwrap_or(existing.description),
        amount: changes.amount.unwrap_or(existing.amount),
        category: changes.category.unwrap_or(existing.category),
        payment_method: changes.payment_method.unwrap_or(existing.payment_method),
    };

    let record = connection
        .prepare(
            "UPDATE financial_record
             SET user_id = ?1, date = ?2, description = ?3, amount = ?4, category = ?5, payment_method = ?6
             WHERE id = ?7
             RETURNING id, user_id, date, description, amount, category, payment_method",
        )?
        .query_one(
            (
                record.user_id,
                record.date,
                record.description,
                record.amount,
                record.category,
                record.payment_method,
                record.id,
            ),
            map_record_row,
        )?;

    Ok(record)
}

/// Delete the record `id` from the database and return the deleted record.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid record,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn delete_record(id: RecordId, connection: &Connection) -> Result<FinancialRecord, Error> {
    let record = connection
        .prepare(
            "DELETE FROM financial_record WHERE id = :id
             RETURNING id, user_id, date, description, amount, category, payment_method",
        )?
        .query_one(&[(":id", &id)], map_record_row)?;

    Ok(record)
}

/// Create the financial record table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_record_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS financial_record (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL,
                date TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                amount REAL NOT NULL,
                category TEXT NOT NULL,
                payment_method TEXT NOT NULL
                )",
        (),
    )?;

    // Ensure the sequence starts at 1
    connection.execute(
        "INSERT OR IGNORE INTO sqlite_sequence (name, seq) VALUES ('financial_record', 0)",
        (),
    )?;

    // Add the index used by the list-by-user query.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_financial_record_user ON financial_record(user_id);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a FinancialRecord.
pub fn map_record_row(row: &Row) -> Result<FinancialRecord, rusqlite::Error> {
    let id = row.get(0)?;
    let user_id = row.get(1)?;
    let date = row.get(2)?;
    let description = row.get(3)?;
    let amount = row.get(4)?;
    let category = row.get(5)?;
    let payment_method = row.get(6)?;

    Ok(FinancialRecord {
        id,
        user_id,
        date,
        description,
        amount,
        category,
        payment_method,
    })
}

// ============================================================================
// TESTS
// ============================================================================
