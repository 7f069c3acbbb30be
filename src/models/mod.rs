//! API data models.
//!
//! Request bodies deserialize with every field defaulted, so presence checks
//! happen in the handlers rather than in serde.

pub mod response;
pub mod ride;
pub mod route;
pub mod user;

pub use response::Response;
pub use ride::{Ride, WeatherInfo};
pub use route::{GeoPoint, Route};
pub use user::{Subscription, User};
