//! The API endpoint URIs.
//!
//! For endpoints that take a parameter, e.g., '/financial-records/{record_id}',
//! use [format_endpoint].

use std::fmt::Display;

/// The root route which redirects to the dashboard page.
pub const ROOT: &str = "/";
/// The page for recording and viewing a user's financial records.
pub const DASHBOARD_VIEW: &str = "/dashboard";

/// The route to create a financial record from a JSON body.
pub const RECORDS_API: &str = "/financial-records";
/// The route to list all financial records belonging to a user.
pub const RECORDS_BY_USER_API: &str = "/financial-records/getAllByUserID/{user_id}";
/// The route to update or delete a single financial record.
pub const RECORD_API: &str = "/financial-records/{record_id}";
/// The route the dashboard form posts to for creating a record.
pub const RECORD_FORM_API: &str = "/api/records";

/// Replace the parameter in `endpoint_path` with `value`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/financial-records/{record_id}',
/// '{record_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, value: impl Display) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        value,
        &endpoint_path[param_end..]
    )
}
