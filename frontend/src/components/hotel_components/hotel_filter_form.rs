//! Filter form for the hotel listing.

use dioxus::{logger::tracing, prelude::*};
use common::{
    filter_set::{FieldErrors, FilterField, FilterForm},
    query_string::QueryString,
    url_codec,
};
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use crate::routes::Route;

/// Submitting never fetches directly: it rewrites the url, and the page fetches
/// whatever the url says.
#[component]
pub fn HotelFilterForm(query: ReadSignal<QueryString>, server_errors: ReadSignal<Option<FieldErrors>>) -> Element {
    let mut form = use_signal(|| FilterForm::from_filters(&url_codec::decode(&query.read())));
    let mut local_errors = use_signal(FieldErrors::new);
    // when url changes (the read signal given to us), we need to update the signals, as they are not reset by navigation.
    use_effect(move || {
        let filters = url_codec::decode(&query.read());
        form.set(FilterForm::from_filters(&filters));
        local_errors.set(FieldErrors::new());
    });

    let onsubmit = move |event: Event<FormData>| {
        event.prevent_default();
        let parsed = form.read().parse();
        match parsed {
            Ok(filters) => {
                local_errors.set(FieldErrors::new());
                let next = url_codec::encode(&query.peek(), &filters);
                navigator().replace(Route::hotels_page(next));
            }
            Err(errors) => {
                tracing::debug!("filter form rejected: {errors:?}");
                local_errors.set(errors);
            }
        }
    };

    let error_for = move |field: FilterField| -> Option<String> {
        if let Some(message) = local_errors.read().get(field) {
            return Some(message.to_string());
        }
        server_errors.read().as_ref().and_then(|errors| errors.get(field)).map(str::to_string)
    };

    rsx! {
        form {
            id: "x-hotel-filter-form",
            style: "
                display: flex;
                flex-direction: row;
                align-items: flex-start;
                gap: 16px;
                padding: 16px;
                background-color: #F8FCFF;
                border-bottom: 1px solid rgb(164, 164, 164);
            ",
            onsubmit,

            FilterInput { field: FilterField::Rating, label: "Minimum rating", step: "0.1", form, error: error_for(FilterField::Rating) }
            FilterInput { field: FilterField::PriceMin, label: "Min price / night", step: "any", form, error: error_for(FilterField::PriceMin) }
            FilterInput { field: FilterField::PriceMax, label: "Max price / night", step: "any", form, error: error_for(FilterField::PriceMax) }

            button {
                r#type: "submit",
                style: "
                    display: flex;
                    align-items: center;
                    gap: 6px;
                    margin-top: 22px;
                    border: 1px solid rgba(101, 101, 101, 0.8);
                    border-radius: 9999px;
                    background: white;
                    cursor: pointer;
                    padding: 8px 16px;
                    font-size: 16px;
                ",
                Icon { icon: MdSearch, style: "width: 20px; height: 20px;" }
                "Apply"
            }
        }
    }
}

#[component]
fn FilterInput(field: FilterField, label: String, step: String, mut form: Signal<FilterForm>, error: Option<String>) -> Element {
    let value = form.read().get(field).to_string();
    let border_color = if error.is_some() { "red" } else { "rgba(101, 101, 101, 0.8)" };
    rsx! {
        label {
            style: "display: flex; flex-direction: column; gap: 4px; font-size: 14px; color: #111827;",
            "{label}"
            input {
                r#type: "number",
                name: field.as_str(),
                min: "0",
                step: "{step}",
                value: "{value}",
                style: "
                    width: 140px;
                    border: 1px solid {border_color};
                    border-radius: 6px;
                    padding: 6px 8px;
                    font-size: 16px;
                ",
                oninput: move |event: Event<FormData>| {
                    *form.write().get_mut(field) = event.value();
                },
            }
            if let Some(message) = error {
                span { style: "color: darkred; font-size: 13px;", "{message}" }
            }
        }
    }
}
