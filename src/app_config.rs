use crate::platform::UpdateRequest;
use config::Config;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    updates: Updates,
}

impl AppConfig {
    pub fn load() -> Self {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default())
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn updates(&self) -> &Updates {
        &self.updates
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    event_buffer_size: usize,
}

impl Core {
    pub fn event_buffer_size(&self) -> usize {
        self.event_buffer_size
    }
}

#[derive(Debug, Deserialize)]
pub struct Updates {
    #[serde(with = "humantime_serde")]
    min_time_between_updates: Duration,
    min_distance_for_updates_m: f64,
}

impl Updates {
    pub fn min_time_between_updates(&self) -> Duration {
        self.min_time_between_updates
    }

    pub fn min_distance_for_updates_m(&self) -> f64 {
        self.min_distance_for_updates_m
    }

    pub fn request(&self) -> UpdateRequest {
        UpdateRequest {
            min_time_between_updates: self.min_time_between_updates,
            min_distance_for_updates_m: self.min_distance_for_updates_m,
        }
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core { event_buffer_size: 8 },
                updates: Updates {
                    min_time_between_updates: Duration::ZERO,
                    min_distance_for_updates_m: 0.0,
                },
            },
        }
    }

    pub fn event_buffer_size(mut self, event_buffer_size: usize) -> Self {
        self.config.core.event_buffer_size = event_buffer_size;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
