/*! This module implements initialization of the application's database. */

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::{Error, record::create_record_table};

/// Add the tables for the application's domain models to the database.
///
/// # Errors
/// Returns an error if a table cannot be created or if there is some other
/// SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_record_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
