//! Defines the endpoint for listing the financial records that belong to a user.
use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::AppState;

use super::core::get_records_by_user;

/// The state needed to list a user's records.
#[derive(Debug, Clone)]
pub struct ListRecordsState {
    /// The database connection for reading records.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ListRecordsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for listing all records that belong to `user_id`.
///
/// Responds with a JSON array of the user's records, 404 if the user has
/// none, or a generic 500 if the store fails. The caller-supplied user
/// identifier is trusted as-is.
pub async fn get_records_by_user_endpoint(
    State(state): State<ListRecordsState>,
    Path(user_id): Path<String>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response();
        }
    };

    match get_records_by_user(&user_id, &connection) {
        Ok(records) if records.is_empty() => {
            (StatusCode::NOT_FOUND, "No records found for the user.").into_response()
        }
        Ok(records) => Json(records).into_response(),
        Err(error) => {
            tracing::error!("could not list records for user {user_id}: {error}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

#[cfg(test)]
mod list_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        db::initialize,
        record::{FinancialRecord, create_record},
        test_utils::parse_json_body,
    };

    use super::{ListRecordsState, get_records_by_user_endpoint};

    fn get_test_state() -> ListRecordsState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        ListRecordsState {
            db_connection: Arc::new(Mutex::new(conn)),
        }
    }

    #[tokio::test]
    async fn returns_the_users_records() {
        let state = get_test_state();
        let want = {
            let connection = state.db_connection.lock().unwrap();
            vec![
                create_record(
                    FinancialRecord::build("u1", 12.5, date!(2024 - 01 - 01)).description("Lunch"),
                    &connection,
                )
                .unwrap(),
                create_record(
                    FinancialRecord::build("u1", 850.0, date!(2024 - 01 - 02)).category("Rent"),
                    &connection,
                )
                .unwrap(),
            ]
        };

        let response =
            get_records_by_user_endpoint(State(state), Path("u1".to_owned())).await;

        assert_eq!(response.status(), StatusCode::OK);
        let got: Vec<FinancialRecord> = parse_json_body(response).await;
        assert_eq!(got, want);
    }

    #[tokio::test]
    async fn returns_not_found_for_user_with_no_records() {
        let state = get_test_state();

        let response =
            get_records_by_user_endpoint(State(state), Path("nobody".to_owned())).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
