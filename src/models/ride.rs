//! Recorded rides.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::route::GeoPoint;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Ride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    pub route_id: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub distance: f64,
    pub duration_secs: u64,
    pub avg_speed: f64,
    pub max_speed: f64,
    pub calories: f64,
    pub locations: Vec<GeoPoint>,
    pub weather: WeatherInfo,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct WeatherInfo {
    pub temperature: f64,
    pub humidity: i32,
    pub conditions: String,
}
