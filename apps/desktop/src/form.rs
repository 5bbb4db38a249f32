//! Crop lookup form with inline client-side validation.

use dioxus::prelude::*;

use harvest_core::calendar;
use harvest_core::validate::{validate_field, FieldRules, FieldStatus};

use crate::state::submit_search;

const REGION_RULES: FieldRules = FieldRules {
    required: true,
    min_length: None,
};

const CITY_RULES: FieldRules = FieldRules {
    required: true,
    min_length: None,
};

const CROP_RULES: FieldRules = FieldRules {
    required: true,
    min_length: Some(3),
};

/// Region, city, and crop lookup. Each field validates when it loses focus
/// and keeps re-validating on every edit once a message is showing; the
/// form submits only when all three pass.
#[component]
pub fn CropLookupForm() -> Element {
    let mut region = use_signal(String::new);
    let region_status = use_signal(|| None::<FieldStatus>);
    let mut city = use_signal(String::new);
    let city_status = use_signal(|| None::<FieldStatus>);
    let mut crop = use_signal(String::new);
    let crop_status = use_signal(|| None::<FieldStatus>);

    let regions = calendar::all_regions();

    rsx! {
        section {
            class: "lookup-form",
            h2 { class: "lookup-title", "Find a harvest calendar" }
            form {
                onsubmit: move |e: Event<FormData>| {
                    e.prevent_default();
                    let region_ok = check(&region.read(), &REGION_RULES, region_status);
                    let city_ok = check(&city.read(), &CITY_RULES, city_status);
                    let crop_ok = check(&crop.read(), &CROP_RULES, crop_status);
                    if !(region_ok && city_ok && crop_ok) {
                        return;
                    }
                    let crop_value = crop.read().trim().to_string();
                    let region_value = region.read().trim().to_string();
                    submit_search(&crop_value, Some(&region_value));
                },

                div {
                    class: "form-row",
                    label { class: "form-label", "Region" }
                    select {
                        class: field_class(&region_status.read()),
                        value: "{region}",
                        onchange: move |e: Event<FormData>| {
                            region.set(e.value());
                            revalidate(&region.read(), &REGION_RULES, region_status);
                        },
                        onfocusout: move |_| {
                            check(&region.read(), &REGION_RULES, region_status);
                        },
                        option { value: "", "Select a region" }
                        for name in regions {
                            option { value: "{name}", "{name}" }
                        }
                    }
                    FieldMessage { status: region_status }
                }

                div {
                    class: "form-row",
                    label { class: "form-label", "City" }
                    input {
                        class: field_class(&city_status.read()),
                        r#type: "text",
                        placeholder: "e.g. Lahore",
                        value: "{city}",
                        oninput: move |e: Event<FormData>| {
                            city.set(e.value());
                            revalidate(&city.read(), &CITY_RULES, city_status);
                        },
                        onfocusout: move |_| {
                            check(&city.read(), &CITY_RULES, city_status);
                        },
                    }
                    FieldMessage { status: city_status }
                }

                div {
                    class: "form-row",
                    label { class: "form-label", "Crop" }
                    input {
                        class: field_class(&crop_status.read()),
                        r#type: "text",
                        placeholder: "e.g. Wheat",
                        value: "{crop}",
                        oninput: move |e: Event<FormData>| {
                            crop.set(e.value());
                            revalidate(&crop.read(), &CROP_RULES, crop_status);
                        },
                        onfocusout: move |_| {
                            check(&crop.read(), &CROP_RULES, crop_status);
                        },
                    }
                    FieldMessage { status: crop_status }
                }

                button { class: "btn-submit", r#type: "submit", "Show calendar" }
            }
        }
    }
}

/// Validate now and record the outcome. Returns whether the field passed.
fn check(value: &str, rules: &FieldRules, mut status: Signal<Option<FieldStatus>>) -> bool {
    let result = validate_field(value, rules);
    let ok = result.is_valid();
    status.set(Some(result));
    ok
}

/// Re-validate only once the field has been validated before, so a message
/// clears (or updates) as the user types but never appears mid-first-entry.
fn revalidate(value: &str, rules: &FieldRules, status: Signal<Option<FieldStatus>>) {
    if status.read().is_some() {
        check(value, rules, status);
    }
}

fn field_class(status: &Option<FieldStatus>) -> &'static str {
    match status {
        None => "form-control",
        Some(s) if s.is_valid() => "form-control is-valid",
        Some(_) => "form-control is-invalid",
    }
}

/// Inline validation message below a field; absent while the field is
/// untouched or valid.
#[component]
fn FieldMessage(status: Signal<Option<FieldStatus>>) -> Element {
    let message = status
        .read()
        .as_ref()
        .and_then(|s| s.message().map(str::to_string))
        .unwrap_or_default();
    if message.is_empty() {
        return rsx! {};
    }
    rsx! {
        div { class: "invalid-feedback", "{message}" }
    }
}
