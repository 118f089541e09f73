use crate::domain::location::{LocationSample, Provider};
use serde::Serialize;

/// Event name the scripting layer subscribes to.
pub const UPDATE_LOCATION: &str = "updateLocation";

/// Normalized payload sent for every forwarded fix. Optional dimensions are
/// omitted from the serialized form when the sample lacks them, never
/// defaulted to zero.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LocationEvent {
    pub longitude: f64,
    pub latitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
    pub time: i64,
    pub provider: Provider,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearing: Option<f64>,
}

impl From<&LocationSample> for LocationEvent {
    fn from(sample: &LocationSample) -> Self {
        LocationEvent {
            longitude: sample.longitude,
            latitude: sample.latitude,
            altitude: sample.altitude,
            time: sample.time,
            provider: sample.provider,
            description: sample.description(),
            speed: sample.speed,
            accuracy: sample.accuracy,
            bearing: sample.bearing,
        }
    }
}
