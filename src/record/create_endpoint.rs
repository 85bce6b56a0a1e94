//! Defines the endpoint for creating a financial record from a JSON body.
use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::Connection;
use serde::Deserialize;
use time::Date;

use crate::{AppState, record::FinancialRecord};

use super::core::create_record;

/// The state needed to create a record.
#[derive(Debug, Clone)]
pub struct CreateRecordState {
    /// The database connection for managing records.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateRecordState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The JSON body for creating a financial record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecord {
    /// The identifier of the user the record belongs to.
    pub user_id: String,
    /// When the transaction happened, e.g. "2024-01-01".
    pub date: Date,
    /// Text detailing the transaction. May be omitted.
    #[serde(default)]
    pub description: String,
    /// The value of the transaction in dollars.
    pub amount: f64,
    /// The spending category.
    pub category: String,
    /// How the transaction was paid for.
    pub payment_method: String,
}

/// A route handler for creating a new financial record.
///
/// Responds with 201 and the stored record (including its assigned ID), or a
/// generic 500 if the store fails.
pub async fn create_record_endpoint(
    State(state): State<CreateRecordState>,
    Json(new_record): Json<NewRecord>,
) -> Response {
    let builder = FinancialRecord::build(&new_record.user_id, new_record.amount, new_record.date)
        .description(&new_record.description)
        .category(&new_record.category)
        .payment_method(&new_record.payment_method);

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response();
        }
    };

    match create_record(builder, &connection) {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(error) => {
            tracing::error!("could not create financial record: {error}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

#[cfg(test)]
mod create_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{Json, extract::State, http::StatusCode};
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        db::initialize,
        record::{FinancialRecord, get_records_by_user},
        test_utils::parse_json_body,
    };

    use super::{CreateRecordState, NewRecord, create_record_endpoint};

    fn get_test_state() -> CreateRecordState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        CreateRecordState {
            db_connection: Arc::new(Mutex::new(conn)),
        }
    }

    #[tokio::test]
    async fn creates_record_and_returns_it_with_an_id() {
        let state = get_test_state();
        let new_record = NewRecord {
            user_id: "u1".to_owned(),
            date: date!(2024 - 01 - 01),
            description: "Lunch".to_owned(),
            amount: 12.5,
            category: "Food".to_owned(),
            payment_method: "Cash".to_owned(),
        };

        let response = create_record_endpoint(State(state.clone()), Json(new_record)).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let record: FinancialRecord = parse_json_body(response).await;
        assert!(record.id > 0);
        assert_eq!(record.user_id, "u1");
        assert_eq!(record.date, date!(2024 - 01 - 01));
        assert_eq!(record.description, "Lunch");
        assert_eq!(record.amount, 12.5);
        assert_eq!(record.category, "Food");
        assert_eq!(record.payment_method, "Cash");

        let connection = state.db_connection.lock().unwrap();
        assert_eq!(get_records_by_user("u1", &connection).unwrap(), vec![record]);
    }
}
