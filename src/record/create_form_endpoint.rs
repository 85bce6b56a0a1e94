//! Defines the endpoint that the dashboard form posts to for creating a
//! financial record.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use maud::html;
use rusqlite::Connection;
use serde::Deserialize;
use time::OffsetDateTime;

use crate::{
    AppState, Error, alert::Alert, record::FinancialRecord, timezone::get_local_offset,
};

use super::{core::create_record, view::record_row_view};

/// The state needed to create a record from the dashboard form.
#[derive(Debug, Clone)]
pub struct CreateRecordFormState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
    /// The database connection for managing records.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateRecordFormState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The form data for creating a financial record.
///
/// The record's date is not part of the form: it is stamped server-side with
/// today's date in the configured timezone.
#[derive(Debug, Deserialize)]
pub struct RecordFormData {
    /// The identifier of the user the record belongs to.
    #[serde(default)]
    pub user_id: String,
    /// Text detailing the transaction.
    pub description: String,
    /// The value of the transaction in dollars.
    pub amount: f64,
    /// The spending category.
    pub category: String,
    /// How the transaction was paid for.
    pub payment_method: String,
}

/// A route handler for creating a new record from the dashboard form.
///
/// On success, responds with the new record rendered as a table row (which
/// htmx appends to the record table) and a success alert swapped in
/// out-of-band. Validation and store failures respond with an error alert
/// and leave the table untouched.
pub async fn create_record_form_endpoint(
    State(state): State<CreateRecordFormState>,
    Form(form): Form<RecordFormData>,
) -> Response {
    if form.user_id.trim().is_empty() {
        return Error::MissingUser.into_alert_response();
    }

    if form.amount <= 0.0 {
        return Error::NonPositiveAmount(form.amount).into_alert_response();
    }

    let Some(local_offset) = get_local_offset(&state.local_timezone) else {
        return Error::InvalidTimezoneError(state.local_timezone).into_alert_response();
    };
    let today = OffsetDateTime::now_utc().to_offset(local_offset).date();

    let builder = FinancialRecord::build(&form.user_id, form.amount, today)
        .description(&form.description)
        .category(&form.category)
        .payment_method(&form.payment_method);

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    match create_record(builder, &connection) {
        Ok(record) => html! {
            (record_row_view(&record))
            (Alert::success("Record added successfully!", "").into_oob_markup())
        }
        .into_response(),
        Err(error) => {
            tracing::error!("could not create financial record: {error}");
            error.into_alert_response()
        }
    }
}
