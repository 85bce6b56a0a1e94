//! Defines the endpoint for updating a financial record by its ID.
use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{AppState, Error, database_id::RecordId, record::RecordChanges};

use super::core::update_record;

/// The state needed to update a record.
#[derive(Debug, Clone)]
pub struct UpdateRecordState {
    /// The database connection for managing records.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for UpdateRecordState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for updating the record `record_id`.
///
/// The JSON body may contain any subset of the record's fields; only the
/// supplied fields change. Responds with the updated record, 404 if the
/// record does not exist, or a generic 500 if the store fails.
pub async fn update_record_endpoint(
    State(state): State<UpdateRecordState>,
    Path(record_id): Path<RecordId>,
    Json(changes): Json<RecordChanges>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response();
        }
    };

    match update_record(record_id, changes, &connection) {
        Ok(record) => Json(record).into_response(),
        Err(Error::NotFound) => (StatusCode::NOT_FOUND, "Record not found.").into_response(),
        Err(error) => {
            tracing::error!("could not update record {record_id}: {error}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
