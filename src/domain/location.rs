use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;
use std::fmt::{self, Display};

/// A platform-supplied source of location fixes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Gps,
    Network,
}

impl Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Gps => write!(f, "gps"),
            Provider::Network => write!(f, "network"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProviderStatus {
    Available,
    TemporarilyUnavailable,
    OutOfService,
}

impl Display for ProviderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderStatus::Available => write!(f, "available"),
            ProviderStatus::TemporarilyUnavailable => write!(f, "temporarily unavailable"),
            ProviderStatus::OutOfService => write!(f, "out of service"),
        }
    }
}

/// A raw fix as reported by a provider. Dimensions a provider could not
/// determine are `None` and stay absent in the emitted event.
#[derive(Clone, Debug, PartialEq)]
pub struct LocationSample {
    pub provider: Provider,
    pub latitude: f64,
    pub longitude: f64,
    /// Fix time in milliseconds since the Unix epoch.
    pub time: i64,
    pub altitude: Option<f64>, // In meters
    pub speed: Option<f32>,
    pub accuracy: Option<f32>,
    pub bearing: Option<f64>,
}

impl LocationSample {
    pub fn new(provider: Provider, latitude: f64, longitude: f64, time: i64) -> Self {
        LocationSample {
            provider,
            latitude,
            longitude,
            time,
            altitude: None,
            speed: None,
            accuracy: None,
            bearing: None,
        }
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.time).single()
    }

    pub fn description(&self) -> String {
        let time = self
            .timestamp()
            .map(|timestamp| timestamp.to_rfc3339())
            .unwrap_or_else(|| format!("@{}", self.time));

        format!("{}[{:.6},{:.6}] at {}", self.provider, self.latitude, self.longitude, time)
    }
}
