//! HTML rendering for the dashboard page and the record table.

use maud::{Markup, html};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    endpoints,
    html::{
        BUTTON_DELETE_STYLE, FORM_CONTAINER_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, dollar_input_styles, format_currency,
    },
    navigation::NavBar,
    record::FinancialRecord,
};

use super::form::record_form;

/// The max number of graphemes to display in the record table rows before
/// truncating and displaying ellipses.
const MAX_DESCRIPTION_GRAPHEMES: usize = 32;

/// Render the dashboard page: the record entry form followed by the table of
/// the user's records.
pub(crate) fn dashboard_view(user_id: Option<&str>, records: &[FinancialRecord]) -> Markup {
    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW).into_html();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full lg:max-w-5xl lg:mx-auto"
            {
                header
                {
                    h1 class="text-xl font-bold" { "Dashboard" }
                }

                div class=(FORM_CONTAINER_STYLE)
                {
                    (record_form(user_id))
                }

                section class="rounded bg-gray-50 dark:bg-gray-800 overflow-hidden"
                {
                    (record_table(records))
                }
            }
        }
    };

    base("Dashboard", &[dollar_input_styles()], &content)
}

/// Render the table of financial records.
pub(crate) fn record_table(records: &[FinancialRecord]) -> Markup {
    html! {
        table class="w-full my-2 text-sm text-left rtl:text-right
            text-gray-500 dark:text-gray-400"
        {
            thead class=(TABLE_HEADER_STYLE)
            {
                tr
                {
                    th scope="col" class=(TABLE_CELL_STYLE)
                    {
                        "Description"
                    }
                    th scope="col" class="px-6 py-3 text-right"
                    {
                        "Amount"
                    }
                    th scope="col" class=(TABLE_CELL_STYLE)
                    {
                        "Category"
                    }
                    th scope="col" class=(TABLE_CELL_STYLE)
                    {
                        "Payment Method"
                    }
                    th scope="col" class=(TABLE_CELL_STYLE)
                    {
                        "Date"
                    }
                    th scope="col" class=(TABLE_CELL_STYLE)
                    {
                        "Delete"
                    }
                }
            }

            tbody id="record-rows"
            {
                @for record in records {
                    (record_row_view(record))
                }

                @if records.is_empty() {
                    tr
                    {
                        td
                            colspan="6"
                            data-empty-state="true"
                            class="px-6 py-4 text-center"
                        {
                            "No records yet."
                        }
                    }
                }
            }
        }
    }
}

/// Render a single financial record as a table row.
pub(crate) fn record_row_view(record: &FinancialRecord) -> Markup {
    html! {
        tr class=(TABLE_ROW_STYLE)
        {
            td class=(TABLE_CELL_STYLE)
            {
                (truncate_description(&record.description))
            }
            td class="px-6 py-4 text-right" { (format_currency(record.amount)) }
            td class=(TABLE_CELL_STYLE) { (record.category) }
            td class=(TABLE_CELL_STYLE) { (record.payment_method) }
            td class=(TABLE_CELL_STYLE) { (record.date) }
            td class=(TABLE_CELL_STYLE)
            {
                // TODO: wire this button to DELETE /financial-records/{record_id}
                // and remove the row on success.
                button type="button" class=(BUTTON_DELETE_STYLE) { "Delete" }
            }
        }
    }
}

fn truncate_description(description: &str) -> String {
    let graphemes = description.graphemes(true).collect::<Vec<_>>();

    if graphemes.len() <= MAX_DESCRIPTION_GRAPHEMES {
        description.to_owned()
    } else {
        format!(
            "{}...",
            graphemes[..MAX_DESCRIPTION_GRAPHEMES].concat().trim_end()
        )
    }
}
