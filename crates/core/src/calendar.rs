//! The crop calendar the page browses: a built-in slice of the published
//! dataset plus the date and season helpers shared with it.
//!
//! Dates in the dataset are `DD/MM` strings; a missing figure is `None`.
//! Display formatting is forgiving: anything that does not parse is shown
//! as-is rather than dropped.

use serde::{Deserialize, Serialize};

/// One crop-by-region calendar row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarEntry {
    pub crop: &'static str,
    pub region: &'static str,
    pub early_sowing: Option<&'static str>,
    pub late_sowing: Option<&'static str>,
    pub early_harvest: Option<&'static str>,
    pub late_harvest: Option<&'static str>,
    pub sowing_rate: Option<&'static str>,
    pub growing_period: Option<&'static str>,
}

/// Headline counts over the dataset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub total_crops: usize,
    pub total_regions: usize,
    pub total_records: usize,
}

// ---------------------------------------------------------------------------
// Built-in dataset
// ---------------------------------------------------------------------------

const fn entry(
    crop: &'static str,
    region: &'static str,
    early_sowing: Option<&'static str>,
    late_sowing: Option<&'static str>,
    early_harvest: Option<&'static str>,
    late_harvest: Option<&'static str>,
    sowing_rate: Option<&'static str>,
    growing_period: Option<&'static str>,
) -> CalendarEntry {
    CalendarEntry {
        crop,
        region,
        early_sowing,
        late_sowing,
        early_harvest,
        late_harvest,
        sowing_rate,
        growing_period,
    }
}

#[rustfmt::skip]
static CALENDAR: [CalendarEntry; 14] = [
    entry("Wheat",  "Central Punjab",         Some("01/11"), Some("15/12"), Some("01/04"), Some("15/05"), Some("125 kg/ha"), Some("150-160 days")),
    entry("Wheat",  "Upper Sindh",            Some("15/10"), Some("30/11"), Some("15/03"), Some("30/04"), Some("125 kg/ha"), Some("140-150 days")),
    entry("Wheat",  "Rainfed areas of NWFP",  Some("15/10"), Some("15/11"), Some("01/05"), Some("31/05"), Some("100 kg/ha"), Some("170-180 days")),
    entry("Wheat",  "Plains of Balochistan",  Some("01/11"), Some("15/12"), None,          None,          None,              Some("150-160 days")),
    entry("Rice",   "Lower Sindh",            Some("01/05"), Some("30/06"), Some("01/10"), Some("30/11"), Some("15 kg/ha (nursery)"), Some("120-140 days")),
    entry("Rice",   "Central Punjab",         Some("20/05"), Some("07/07"), Some("01/10"), Some("15/11"), Some("12 kg/ha (nursery)"), Some("110-130 days")),
    entry("Corn",   "NWFP",                   Some("15/02"), Some("15/04"), Some("01/07"), Some("15/08"), Some("30 kg/ha"),  Some("110-120 days")),
    entry("Corn",   "Central Punjab",         Some("20/07"), Some("20/08"), Some("15/11"), Some("31/12"), Some("35 kg/ha"),  Some("95-110 days")),
    entry("Potato", "Northern Punjab",        Some("01/10"), Some("15/11"), Some("15/01"), Some("28/02"), Some("2500 kg/ha"), Some("100-110 days")),
    entry("Potato", "Upland Balochistan",     Some("01/03"), Some("15/04"), Some("01/08"), Some("15/09"), Some("2200 kg/ha"), Some("120-130 days")),
    entry("Bean",   "Upland Balochistan",     Some("01/03"), Some("15/04"), Some("15/07"), Some("31/08"), Some("80 kg/ha"),  Some("100-120 days")),
    entry("Lentil", "Pothowar region",        Some("15/10"), Some("30/11"), Some("01/04"), Some("30/04"), Some("30 kg/ha"),  Some("150-160 days")),
    entry("Barley", "Rainfed areas of NWFP",  Some("01/11"), Some("15/12"), Some("15/04"), Some("15/05"), Some("100 kg/ha"), Some("130-140 days")),
    entry("Oats",   "Central Punjab",         Some("15/10"), Some("30/11"), Some("15/03"), Some("15/04"), Some("75 kg/ha"),  Some("140-150 days")),
];

/// Every row of the built-in dataset, in publication order.
pub fn builtin_calendar() -> &'static [CalendarEntry] {
    &CALENDAR
}

/// Rows for one crop, optionally narrowed to a region. Matching is exact,
/// like the published dataset's own lookups; row order is preserved.
pub fn entries_for(crop: &str, region: Option<&str>) -> Vec<&'static CalendarEntry> {
    CALENDAR
        .iter()
        .filter(|entry| entry.crop == crop)
        .filter(|entry| region.is_none_or(|r| entry.region == r))
        .collect()
}

/// All distinct crops, sorted.
pub fn available_crops() -> Vec<&'static str> {
    let mut crops: Vec<&'static str> = CALENDAR.iter().map(|entry| entry.crop).collect();
    crops.sort_unstable();
    crops.dedup();
    crops
}

/// All distinct regions, sorted.
pub fn all_regions() -> Vec<&'static str> {
    let mut regions: Vec<&'static str> = CALENDAR.iter().map(|entry| entry.region).collect();
    regions.sort_unstable();
    regions.dedup();
    regions
}

/// Headline counts for the built-in dataset.
pub fn stats() -> DatasetStats {
    DatasetStats {
        total_crops: available_crops().len(),
        total_regions: all_regions().len(),
        total_records: CALENDAR.len(),
    }
}

// ---------------------------------------------------------------------------
// Date and season helpers
// ---------------------------------------------------------------------------

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English name for a 1-based month number.
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month.checked_sub(1)? as usize).copied()
}

/// Turn a `DD/MM` date into display form: `"15/11"` → `"15 November"`, with
/// the day's leading zero dropped. Anything that does not look like `DD/MM`
/// comes back unchanged; an unrecognized month keeps its raw text, so a
/// malformed figure is still visible rather than lost.
pub fn format_day_month(raw: &str) -> String {
    let Some((day, month)) = raw.split_once('/') else {
        return raw.to_string();
    };
    let Ok(day_num) = day.trim().parse::<u32>() else {
        return raw.to_string();
    };
    let month_display = month
        .trim()
        .parse::<u32>()
        .ok()
        .and_then(month_name)
        .unwrap_or(month.trim());
    format!("{day_num} {month_display}")
}

/// Readable span between an early and a late `DD/MM` date, either of which
/// may be missing.
pub fn period_display(early: Option<&str>, late: Option<&str>) -> String {
    match (early, late) {
        (Some(early), Some(late)) => {
            format!("{} - {}", format_day_month(early), format_day_month(late))
        }
        (Some(early), None) => format!("From {}", format_day_month(early)),
        (None, Some(late)) => format!("Until {}", format_day_month(late)),
        (None, None) => "No data available".to_string(),
    }
}

/// Month number out of a `DD/MM` date.
pub fn month_of(raw: &str) -> Option<u32> {
    let (_, month) = raw.split_once('/')?;
    month.trim().parse().ok()
}

/// Whether `month` falls inside the inclusive `start..=end` window, where a
/// start after the end means the window wraps over the year boundary.
pub fn month_in_range(month: u32, start: u32, end: u32) -> bool {
    if start <= end {
        (start..=end).contains(&month)
    } else {
        month >= start || month <= end
    }
}

/// Whether the sowing window given by two optional `DD/MM` dates covers
/// `current_month`. With only one bound known the window is open on the
/// other side; with neither known the answer is no.
pub fn sowing_window_contains(
    early: Option<&str>,
    late: Option<&str>,
    current_month: u32,
) -> bool {
    let early_month = early.and_then(month_of);
    let late_month = late.and_then(month_of);
    match (early_month, late_month) {
        (Some(start), Some(end)) => month_in_range(current_month, start, end),
        (Some(start), None) => current_month >= start,
        (None, Some(end)) => current_month <= end,
        (None, None) => false,
    }
}

/// Whether `current_month` is planting season for this row.
pub fn is_planting_season(entry: &CalendarEntry, current_month: u32) -> bool {
    sowing_window_contains(entry.early_sowing, entry.late_sowing, current_month)
}
