//! Financial record management.
//!
//! This module contains everything related to financial records:
//! - The `FinancialRecord` model and `RecordBuilder` for creating records
//! - Database functions for storing, querying, updating and deleting records
//! - The JSON API endpoints for records
//! - The dashboard page, record form and record table views

mod core;
mod create_endpoint;
mod create_form_endpoint;
mod dashboard_page;
mod delete_endpoint;
mod form;
mod list_endpoint;
mod update_endpoint;
mod view;

pub use self::core::{
    FinancialRecord, RecordBuilder, RecordChanges, create_record_table, map_record_row,
};
pub use create_endpoint::create_record_endpoint;
pub use create_form_endpoint::create_record_form_endpoint;
pub use dashboard_page::get_dashboard_page;
pub use delete_endpoint::delete_record_endpoint;
pub use list_endpoint::get_records_by_user_endpoint;
pub use update_endpoint::update_record_endpoint;

#[cfg(test)]
pub use self::core::{create_record, get_records_by_user};
