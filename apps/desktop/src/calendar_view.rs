//! Calendar table for the selected crop.

use chrono::Datelike;
use dioxus::prelude::*;

use harvest_api::RemoteCalendarRow;
use harvest_core::calendar;

use crate::state::*;

/// One renderable calendar row, with periods already formatted.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayRow {
    pub crop: String,
    pub region: String,
    pub sowing: String,
    pub harvest: String,
    pub sowing_rate: String,
    pub growing_period: String,
    pub planting_now: bool,
}

impl DisplayRow {
    fn from_entry(entry: &calendar::CalendarEntry, month: u32) -> Self {
        Self {
            crop: entry.crop.to_string(),
            region: entry.region.to_string(),
            sowing: calendar::period_display(entry.early_sowing, entry.late_sowing),
            harvest: calendar::period_display(entry.early_harvest, entry.late_harvest),
            sowing_rate: entry.sowing_rate.unwrap_or("-").to_string(),
            growing_period: entry.growing_period.unwrap_or("-").to_string(),
            planting_now: calendar::is_planting_season(entry, month),
        }
    }

    fn from_remote(row: &RemoteCalendarRow, month: u32) -> Self {
        Self {
            crop: row.crop.clone(),
            region: row.region.clone(),
            sowing: calendar::period_display(
                row.early_sowing.as_deref(),
                row.late_sowing.as_deref(),
            ),
            harvest: calendar::period_display(
                row.early_harvest.as_deref(),
                row.late_harvest.as_deref(),
            ),
            sowing_rate: row.sowing_rate.as_deref().unwrap_or("-").to_string(),
            growing_period: row.growing_period.as_deref().unwrap_or("-").to_string(),
            planting_now: calendar::sowing_window_contains(
                row.early_sowing.as_deref(),
                row.late_sowing.as_deref(),
                month,
            ),
        }
    }
}

/// Current month number, 1-12.
pub fn current_month() -> u32 {
    chrono::Local::now().month()
}

/// Display rows from the built-in dataset.
pub fn builtin_rows(crop: &str, region: Option<&str>, month: u32) -> Vec<DisplayRow> {
    calendar::entries_for(crop, region)
        .into_iter()
        .map(|entry| DisplayRow::from_entry(entry, month))
        .collect()
}

/// Display rows from a server answer.
pub fn remote_rows(rows: Vec<RemoteCalendarRow>, month: u32) -> Vec<DisplayRow> {
    rows.iter()
        .map(|row| DisplayRow::from_remote(row, month))
        .collect()
}

/// The calendar table, or a prompt while nothing is selected.
#[component]
pub fn CalendarSection() -> Element {
    let rows = CALENDAR_ROWS.read();
    let selected = SELECTED_CROP.read().clone();

    let Some(crop) = selected else {
        return rsx! {
            section {
                class: "calendar-section calendar-empty",
                p { "Search for a crop to see its sowing and harvest periods." }
            }
        };
    };

    let month_label = calendar::month_name(current_month()).unwrap_or("this month");

    rsx! {
        section {
            class: "calendar-section",
            h2 { class: "calendar-title", "Harvest calendar: {crop}" }
            if rows.is_empty() {
                p { class: "calendar-none", "No calendar rows for {crop}." }
            } else {
                table {
                    class: "calendar-table",
                    thead {
                        tr {
                            th { "Region" }
                            th { "Sowing" }
                            th { "Harvest" }
                            th { "Seed rate" }
                            th { "Growing period" }
                        }
                    }
                    tbody {
                        for row in rows.iter() {
                            tr {
                                class: if row.planting_now {
                                    "calendar-row planting-now"
                                } else {
                                    "calendar-row"
                                },
                                td { class: "cell-region", "{row.region}" }
                                td { "{row.sowing}" }
                                td { "{row.harvest}" }
                                td { "{row.sowing_rate}" }
                                td { "{row.growing_period}" }
                            }
                        }
                    }
                }
                p {
                    class: "calendar-hint",
                    "Highlighted rows are in sowing season during {month_label}."
                }
            }
        }
    }
}
