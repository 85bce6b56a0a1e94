//! HTML rendering for the record entry form.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, loading_spinner,
    },
};

/// The categories offered by the form's category dropdown.
///
/// These only populate the form's options; the server accepts any string.
pub(crate) const CATEGORIES: [&str; 6] = [
    "Food",
    "Rent",
    "Income",
    "Utilities",
    "Entertainment",
    "Other",
];

/// The payment methods offered by the form's payment method dropdown.
///
/// These only populate the form's options; the server accepts any string.
pub(crate) const PAYMENT_METHODS: [&str; 3] = ["Credit Card", "Cash", "Bank Transfer"];

/// Render the form for adding a financial record.
///
/// The form posts over htmx and appends the returned table row to the record
/// table. `user_id` is carried in a hidden input; when no user is identified
/// it is left empty and the form endpoint rejects the submission.
pub(crate) fn record_form(user_id: Option<&str>) -> Markup {
    html! {
        form
            hx-post=(endpoints::RECORD_FORM_API)
            hx-target="#record-rows"
            hx-swap="beforeend"
            hx-target-error="#alert-container"
            "hx-on::after-request"="if (event.detail.successful) this.reset()"
            class="w-full space-y-4 md:space-y-6"
        {
            input
                type="hidden"
                name="user_id"
                value=(user_id.unwrap_or_default());

            div
            {
                label
                    for="description"
                    class=(FORM_LABEL_STYLE)
                {
                    "Description"
                }

                input
                    name="description"
                    id="description"
                    type="text"
                    placeholder="Description"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label
                    for="amount"
                    class=(FORM_LABEL_STYLE)
                {
                    "Amount"
                }

                div class="input-wrapper w-full"
                {
                    input
                        name="amount"
                        id="amount"
                        type="number"
                        step="0.01"
                        placeholder="0.01"
                        min="0.01"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div
            {
                label
                    for="category"
                    class=(FORM_LABEL_STYLE)
                {
                    "Category"
                }

                select
                    name="category"
                    id="category"
                    required
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" { "Select a category" }

                    @for category in CATEGORIES {
                        option value=(category) { (category) }
                    }
                }
            }

            div
            {
                label
                    for="payment_method"
                    class=(FORM_LABEL_STYLE)
                {
                    "Payment Method"
                }

                select
                    name="payment_method"
                    id="payment_method"
                    required
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" { "Select a Payment Method" }

                    @for payment_method in PAYMENT_METHODS {
                        option value=(payment_method) { (payment_method) }
                    }
                }
            }

            button type="submit" id="indicator" class=(BUTTON_PRIMARY_STYLE)
            {
                span class="htmx-indicator" { (loading_spinner()) }
                "Add Record"
            }
        }
    }
}

#[cfg(test)]
mod record_form_tests {
    use scraper::{Html, Selector};

    use crate::{
        endpoints,
        test_utils::{assert_form_input, assert_form_submit_button, assert_hx_endpoint, must_get_form},
    };

    use super::{CATEGORIES, PAYMENT_METHODS, record_form};

    fn render_form(user_id: Option<&str>) -> Html {
        Html::parse_fragment(&record_form(user_id).into_string())
    }

    #[test]
    fn form_posts_to_record_form_endpoint() {
        let html = render_form(Some("u1"));

        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::RECORD_FORM_API, "hx-post");
        assert_form_submit_button(&form);
    }

    #[test]
    fn form_has_required_fields() {
        let html = render_form(Some("u1"));

        let form = must_get_form(&html);
        assert_form_input(&form, "description", "text");
        assert_form_input(&form, "amount", "number");
    }

    #[test]
    fn amount_input_rejects_non_positive_amounts() {
        let html = render_form(Some("u1"));

        let selector = Selector::parse("input[name=amount]").unwrap();
        let amount_input = html
            .select(&selector)
            .next()
            .expect("No amount input found");

        assert_eq!(amount_input.value().attr("min"), Some("0.01"));
        assert!(amount_input.value().attr("required").is_some());
    }

    #[test]
    fn hidden_user_input_carries_user_id() {
        let html = render_form(Some("u1"));

        let selector = Selector::parse("input[name=user_id]").unwrap();
        let user_input = html.select(&selector).next().expect("No user input found");

        assert_eq!(user_input.value().attr("type"), Some("hidden"));
        assert_eq!(user_input.value().attr("value"), Some("u1"));
    }

    #[test]
    fn hidden_user_input_is_empty_without_user() {
        let html = render_form(None);

        let selector = Selector::parse("input[name=user_id]").unwrap();
        let user_input = html.select(&selector).next().expect("No user input found");

        assert_eq!(user_input.value().attr("value"), Some(""));
    }

    #[test]
    fn selects_offer_the_fixed_options() {
        let html = render_form(Some("u1"));

        let option_selector = Selector::parse("option").unwrap();
        let options: Vec<_> = html
            .select(&option_selector)
            .filter_map(|option| option.value().attr("value"))
            .collect();

        for category in CATEGORIES {
            assert!(options.contains(&category), "missing category {category}");
        }
        for payment_method in PAYMENT_METHODS {
            assert!(
                options.contains(&payment_method),
                "missing payment method {payment_method}"
            );
        }
    }
}
