//! Defines the endpoint for deleting a financial record by its ID.
use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{AppState, Error, database_id::RecordId};

use super::core::delete_record;

/// The state needed to delete a record.
#[derive(Debug, Clone)]
pub struct DeleteRecordState {
    /// The database connection for managing records.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DeleteRecordState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for deleting the record `record_id`.
///
/// Responds with the deleted record, 404 if the record does not exist, or a
/// generic 500 if the store fails.
pub async fn delete_record_endpoint(
    State(state): State<DeleteRecordState>,
    Path(record_id): Path<RecordId>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response();
        }
    };

    match delete_record(record_id, &connection) {
        Ok(record) => Json(record).into_response(),
        Err(Error::NotFound) => (StatusCode::NOT_FOUND, "Record not found.").into_response(),
        Err(error) => {
            tracing::error!("could not delete record {record_id}: {error}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
