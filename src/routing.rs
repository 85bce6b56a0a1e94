//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{delete, get, post, put},
};

use crate::{
    AppState, endpoints,
    not_found::get_404_not_found,
    record::{
        create_record_endpoint, create_record_form_endpoint, delete_record_endpoint,
        get_dashboard_page, get_records_by_user_endpoint, update_record_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let view_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page));

    let api_routes = Router::new()
        .route(
            endpoints::RECORDS_BY_USER_API,
            get(get_records_by_user_endpoint),
        )
        .route(endpoints::RECORDS_API, post(create_record_endpoint))
        .route(endpoints::RECORD_API, put(update_record_endpoint))
        .route(endpoints::RECORD_API, delete(delete_record_endpoint))
        .route(endpoints::RECORD_FORM_API, post(create_record_form_endpoint));

    view_routes
        .merge(api_routes)
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}


#[cfg(test)]
mod api_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::json;
    use time::macros::date;

    use crate::{
        AppState,
        endpoints::{self, format_endpoint},
        record::FinancialRecord,
        routing::build_router,
    };

    fn new_test_server() -> TestServer {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        let state = AppState::new(connection, "Etc/UTC").expect("Could not create app state");

        TestServer::new(build_router(state))
    }

    fn lunch_body() -> serde_json::Value {
        json!({
            "userId": "u1",
            "date": "2024-01-01",
            "description": "Lunch",
            "amount": 12.5,
            "category": "Food",
            "paymentMethod": "Cash",
        })
    }

    #[tokio::test]
    async fn create_returns_created_record_with_an_id() {
        let server = new_test_server();

        let response = server.post(endpoints::RECORDS_API).json(&lunch_body()).await;

        response.assert_status(StatusCode::CREATED);
        let record: FinancialRecord = response.json();
        assert!(record.id > 0);
        assert_eq!(record.user_id, "u1");
        assert_eq!(record.date, date!(2024 - 01 - 01));
        assert_eq!(record.description, "Lunch");
        assert_eq!(record.amount, 12.5);
        assert_eq!(record.category, "Food");
        assert_eq!(record.payment_method, "Cash");
    }

    #[tokio::test]
    async fn create_then_list_returns_the_record() {
        let server = new_test_server();
        let created: FinancialRecord = server
            .post(endpoints::RECORDS_API)
            .json(&lunch_body())
            .await
            .json();

        let response = server
            .get(&format_endpoint(endpoints::RECORDS_BY_USER_API, "u1"))
            .await;

        response.assert_status_ok();
        let records: Vec<FinancialRecord> = response.json();
        assert_eq!(records, vec![created]);
    }

    #[tokio::test]
    async fn list_returns_not_found_for_user_with_no_records() {
        let server = new_test_server();

        let response = server
            .get(&format_endpoint(endpoints::RECORDS_BY_USER_API, "nobody"))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_text("No records found for the user.");
    }

    #[tokio::test]
    async fn update_changes_only_the_supplied_fields() {
        let server = new_test_server();
        let created: FinancialRecord = server
            .post(endpoints::RECORDS_API)
            .json(&lunch_body())
            .await
            .json();

        let response = server
            .put(&format_endpoint(endpoints::RECORD_API, created.id))
            .json(&json!({ "amount": 20.0, "description": "Team lunch" }))
            .await;

        response.assert_status_ok();
        let updated: FinancialRecord = response.json();
        assert_eq!(
            updated,
            FinancialRecord {
                amount: 20.0,
                description: "Team lunch".to_owned(),
                ..created
            }
        );
    }

    #[tokio::test]
    async fn update_missing_record_returns_not_found() {
        let server = new_test_server();

        let response = server
            .put(&format_endpoint(endpoints::RECORD_API, 1337))
            .json(&json!({ "amount": 20.0 }))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_text("Record not found.");
    }

    #[tokio::test]
    async fn delete_removes_the_record_from_subsequent_listings() {
        let server = new_test_server();
        let created: FinancialRecord = server
            .post(endpoints::RECORDS_API)
            .json(&lunch_body())
            .await
            .json();

        let delete_response = server
            .delete(&format_endpoint(endpoints::RECORD_API, created.id))
            .await;

        delete_response.assert_status_ok();
        let deleted: FinancialRecord = delete_response.json();
        assert_eq!(deleted, created);

        let list_response = server
            .get(&format_endpoint(endpoints::RECORDS_BY_USER_API, "u1"))
            .await;
        list_response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_missing_record_returns_not_found() {
        let server = new_test_server();

        let response = server
            .delete(&format_endpoint(endpoints::RECORD_API, 1337))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_text("Record not found.");
    }

    #[tokio::test]
    async fn unknown_route_returns_not_found_page() {
        let server = new_test_server();

        let response = server.get("/no/such/page").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert!(response.text().contains("404"));
    }
}
