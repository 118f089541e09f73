use crate::domain::{LocationSample, Provider, ProviderStatus};
use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Callback capability handed to a location manager when subscribing. The
/// platform invokes it on a thread it controls; each callback runs to
/// completion before the next one is delivered.
#[async_trait]
pub trait LocationListener: Debug + Send + Sync {
    async fn on_location_changed(&self, sample: LocationSample);

    async fn on_provider_enabled(&self, provider: Provider);

    async fn on_provider_disabled(&self, provider: Provider);

    async fn on_status_changed(&self, provider: Provider, status: ProviderStatus);
}

/// Subscription parameters. Zero values ask the platform for every fix.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UpdateRequest {
    pub min_time_between_updates: Duration,
    pub min_distance_for_updates_m: f64,
}

/// The platform's location-provider service.
#[async_trait]
pub trait LocationManager: Debug + Send + Sync {
    fn is_provider_enabled(&self, provider: Provider) -> bool;

    async fn request_updates(
        &self,
        provider: Provider,
        request: UpdateRequest,
        listener: Arc<dyn LocationListener>,
    ) -> Result<(), PlatformError>;

    /// A cached fix the provider can return without waiting for a new one.
    fn last_known(&self, provider: Provider) -> Option<LocationSample>;

    async fn remove_updates(&self);
}

/// Host integration point. Returns `None` when the host has no location
/// service, mirroring a nullable system-service lookup.
pub trait HostServices: Debug + Send + Sync {
    fn location_manager(&self) -> Option<Arc<dyn LocationManager>>;
}

#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("provider '{0}' is not enabled")]
    ProviderDisabled(Provider),
    #[error("the platform rejected the subscription: {0}")]
    Rejected(String),
}
