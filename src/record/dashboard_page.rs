//! Defines the route handler for the dashboard page.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    http::StatusCode,
    response::Response,
};
use rusqlite::Connection;
use serde::Deserialize;

use crate::{AppState, Error, html::render};

use super::{core::get_records_by_user, view::dashboard_view};

/// The query parameters for the dashboard page.
///
/// The user identifier comes from whatever identity layer sits in front of
/// the application; without one the page renders an empty table and the
/// form rejects submissions.
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// The identifier of the signed-in user, if any.
    pub user: Option<String>,
}

/// The state needed for the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardPageState {
    /// The database connection for reading records.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DashboardPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Render the dashboard page with the record form and the user's records.
pub async fn get_dashboard_page(
    State(state): State<DashboardPageState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Response, Error> {
    let records = match &query.user {
        Some(user_id) => {
            let connection = state
                .db_connection
                .lock()
                .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
                .map_err(|_| Error::DatabaseLockError)?;

            get_records_by_user(user_id, &connection)
                .inspect_err(|error| tracing::error!("could not get records: {error}"))?
        }
        None => Vec::new(),
    };

    Ok(render(
        StatusCode::OK,
        dashboard_view(query.user.as_deref(), &records),
    ))
}

#[cfg(test)]
mod dashboard_page_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Query, State},
        http::StatusCode,
    };
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        db::initialize,
        endpoints,
        record::{FinancialRecord, create_record},
        test_utils::{
            assert_content_type, assert_hx_endpoint, assert_valid_html, must_get_form,
            parse_html_document,
        },
    };

    use super::{DashboardPageState, DashboardQuery, get_dashboard_page};

    fn get_test_state() -> DashboardPageState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        DashboardPageState {
            db_connection: Arc::new(Mutex::new(conn)),
        }
    }

    #[tokio::test]
    async fn renders_form_and_empty_table() {
        let state = get_test_state();

        let response = get_dashboard_page(
            State(state),
            Query(DashboardQuery {
                user: Some("u1".to_owned()),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_content_type(&response, "text/html; charset=utf-8");
        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::RECORD_FORM_API, "hx-post");
    }

    #[tokio::test]
    async fn renders_the_users_records() {
        let state = get_test_state();
        {
            let connection = state.db_connection.lock().unwrap();
            create_record(
                FinancialRecord::build("u1", 12.5, date!(2024 - 01 - 01)).description("Lunch"),
                &connection,
            )
            .unwrap();
        }

        let response = get_dashboard_page(
            State(state),
            Query(DashboardQuery {
                user: Some("u1".to_owned()),
            }),
        )
        .await
        .unwrap();

        let html = parse_html_document(response).await;
        let rendered = html.html();

        assert!(rendered.contains("Lunch"));
        assert!(rendered.contains("$12.50"));
    }

    #[tokio::test]
    async fn renders_empty_table_without_user() {
        let state = get_test_state();
        {
            let connection = state.db_connection.lock().unwrap();
            create_record(
                FinancialRecord::build("u1", 12.5, date!(2024 - 01 - 01)).description("Lunch"),
                &connection,
            )
            .unwrap();
        }

        let response = get_dashboard_page(State(state), Query(DashboardQuery { user: None }))
            .await
            .unwrap();

        let html = parse_html_document(response).await;

        assert!(!html.html().contains("Lunch"));
    }
}
