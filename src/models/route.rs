//! Cycling routes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Route {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    pub name: String,
    pub description: String,
    /// Kilometres.
    pub distance: f64,
    /// Expected duration in seconds.
    pub duration_secs: u64,
    pub difficulty: String,
    pub gpx_data: String,
    pub start_point: GeoPoint,
    pub end_point: GeoPoint,
    /// Metres.
    pub elevation_gain: f64,
    pub tags: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}
