//! HTTP client for the Harvest Calendar web API.
//!
//! Every call soft-fails: a transport problem, a non-success status, or a
//! malformed body is logged and folded into `None`, which the page treats
//! as "no data available" rather than an error. The parsing helpers
//! tolerate junk the same way, yielding empty collections instead of
//! failing, so a misbehaving server can degrade the page but not break it.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use harvest_core::calendar::DatasetStats;
use harvest_core::suggest::{LookupError, SuggestionSource};

/// Which vocabulary a quick search matches against; becomes the `type`
/// query parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchKind {
    Crop,
    Region,
}

impl SearchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Crop => "crop",
            Self::Region => "region",
        }
    }
}

/// Thin async wrapper over the calendar server's JSON endpoints.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// `base` is the server origin, e.g. `http://127.0.0.1:5000`. A trailing
    /// slash is tolerated.
    pub fn new(base: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .expect("Failed to create HTTP client");
        Self {
            base: base.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    /// GET `path` with `params`, returning the parsed JSON body or `None`
    /// on any failure.
    pub async fn get(&self, path: &str, params: &[(&str, &str)]) -> Option<Value> {
        let url = self.url(path);
        let response = match self.http.get(&url).query(params).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("GET {url} failed: {e}");
                return None;
            }
        };
        let status = response.status();
        if !status.is_success() {
            tracing::warn!("GET {url} answered {status}");
            return None;
        }
        match response.json::<Value>().await {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::warn!("GET {url} answered a malformed body: {e}");
                None
            }
        }
    }

    /// `GET /quick-search?q=..&type=..`: lightweight name matching for the
    /// suggestion pipeline.
    pub async fn quick_search(&self, query: &str, kind: SearchKind) -> Option<Value> {
        self.get("/quick-search", &[("q", query), ("type", kind.as_str())])
            .await
    }

    /// `GET /api/crop-calendar?crop=..[&region=..]`: calendar rows for one
    /// crop, optionally narrowed to a region.
    pub async fn crop_calendar(&self, crop: &str, region: Option<&str>) -> Option<Value> {
        match region {
            Some(region) => {
                self.get("/api/crop-calendar", &[("crop", crop), ("region", region)])
                    .await
            }
            None => self.get("/api/crop-calendar", &[("crop", crop)]).await,
        }
    }

    /// `GET /api/stats`: headline counts over the server's dataset.
    pub async fn stats(&self) -> Option<Value> {
        self.get("/api/stats", &[]).await
    }
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// One row of `/api/crop-calendar` data, matching the built-in dataset's
/// shape but owned, since it came off the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RemoteCalendarRow {
    #[serde(default)]
    pub crop: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub early_sowing: Option<String>,
    #[serde(default)]
    pub late_sowing: Option<String>,
    #[serde(default)]
    pub early_harvest: Option<String>,
    #[serde(default)]
    pub late_harvest: Option<String>,
    #[serde(default)]
    pub sowing_rate: Option<String>,
    #[serde(default)]
    pub growing_period: Option<String>,
}

/// Candidate names out of a quick-search body:
/// `{"results": [{"name": .., "type": ..}, ..]}`. Entries without a string
/// `name` are skipped; a body of the wrong shape yields nothing.
pub fn suggestion_names(body: &Value) -> Vec<String> {
    body.get("results")
        .and_then(Value::as_array)
        .map(|results| {
            results
                .iter()
                .filter_map(|result| result.get("name").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Calendar rows out of a crop-calendar body: `{"data": [..], ..}`. Rows
/// that do not deserialize are skipped rather than failing the batch.
pub fn calendar_rows(body: &Value) -> Vec<RemoteCalendarRow> {
    body.get("data")
        .and_then(Value::as_array)
        .map(|rows| {
            rows.iter()
                .filter_map(|row| serde_json::from_value(row.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

/// Headline counts out of a stats body: `{"stats": {"total_crops": ..}}`.
pub fn dataset_stats(body: &Value) -> Option<DatasetStats> {
    serde_json::from_value(body.get("stats")?.clone()).ok()
}

// ---------------------------------------------------------------------------
// Suggestion source over the wire
// ---------------------------------------------------------------------------

/// Network-backed suggestion source over `/quick-search`; a drop-in
/// replacement for the static vocabulary.
#[derive(Clone, Debug)]
pub struct RemoteSuggestions {
    client: ApiClient,
    kind: SearchKind,
}

impl RemoteSuggestions {
    pub fn new(client: ApiClient, kind: SearchKind) -> Self {
        Self { client, kind }
    }
}

#[async_trait]
impl SuggestionSource for RemoteSuggestions {
    async fn lookup(&self, query: &str) -> Result<Vec<String>, LookupError> {
        match self.client.quick_search(query, self.kind).await {
            Some(body) => Ok(suggestion_names(&body)),
            None => Err(LookupError::Backend(format!(
                "quick-search gave no answer for {query:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn url_joins_base_and_path_with_one_slash() {
        let client = ApiClient::new("http://127.0.0.1:5000/");
        assert_eq!(
            client.url("/quick-search"),
            "http://127.0.0.1:5000/quick-search"
        );
        assert_eq!(client.url("api/stats"), "http://127.0.0.1:5000/api/stats");
    }

    #[test]
    fn suggestion_names_reads_the_results_array() {
        let body = json!({
            "results": [
                { "name": "Wheat", "type": "crop" },
                { "name": "Corn", "type": "crop" },
            ]
        });
        assert_eq!(suggestion_names(&body), vec!["Wheat", "Corn"]);
    }

    #[test]
    fn suggestion_names_skips_entries_without_a_name() {
        let body = json!({
            "results": [
                { "name": "Wheat" },
                { "type": "crop" },
                { "name": 7 },
            ]
        });
        assert_eq!(suggestion_names(&body), vec!["Wheat"]);
    }

    #[test]
    fn suggestion_names_tolerates_junk_bodies() {
        assert!(suggestion_names(&json!({})).is_empty());
        assert!(suggestion_names(&json!({ "results": "nope" })).is_empty());
        assert!(suggestion_names(&json!(null)).is_empty());
    }

    #[test]
    fn calendar_rows_reads_the_data_array() {
        let body = json!({
            "success": true,
            "count": 1,
            "data": [{
                "crop": "Wheat",
                "region": "Central Punjab",
                "early_sowing": "01/11",
                "late_sowing": "15/12",
                "early_harvest": null,
                "late_harvest": null,
                "sowing_rate": "125 kg/ha",
                "growing_period": "150-160 days"
            }]
        });
        let rows = calendar_rows(&body);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].crop, "Wheat");
        assert_eq!(rows[0].early_sowing.as_deref(), Some("01/11"));
        assert!(rows[0].early_harvest.is_none());
    }

    #[test]
    fn calendar_rows_tolerates_junk_bodies() {
        assert!(calendar_rows(&json!({})).is_empty());
        assert!(calendar_rows(&json!({ "data": 42 })).is_empty());
    }

    #[test]
    fn dataset_stats_reads_the_nested_object() {
        let body = json!({
            "success": true,
            "stats": { "total_crops": 25, "total_regions": 14, "total_records": 120 },
            "timestamp": "2026-08-24T10:00:00"
        });
        let stats = dataset_stats(&body).unwrap();
        assert_eq!(stats.total_crops, 25);
        assert_eq!(stats.total_regions, 14);
        assert_eq!(stats.total_records, 120);
    }

    #[test]
    fn dataset_stats_rejects_bodies_without_stats() {
        assert!(dataset_stats(&json!({})).is_none());
    }

    #[test]
    fn search_kind_maps_to_the_query_parameter() {
        assert_eq!(SearchKind::Crop.as_str(), "crop");
        assert_eq!(SearchKind::Region.as_str(), "region");
    }
}
