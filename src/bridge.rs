use crate::domain::events::{LocationEvent, UPDATE_LOCATION};
use crate::domain::{LocationSample, Provider, ProviderStatus};
use crate::event_bus::EventSink;
use crate::platform::{HostServices, LocationListener, LocationManager, PlatformError, UpdateRequest};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument, warn};

/// Which providers were enabled at subscription time and which one the
/// bridge receives updates from. Replaced wholesale on start and stop.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProviderState {
    pub gps_enabled: bool,
    pub network_enabled: bool,
    pub active: Option<Provider>,
}

impl ProviderState {
    pub fn can_get_location(&self) -> bool {
        self.active.is_some()
    }
}

#[derive(Debug, Default)]
struct BridgeState {
    providers: ProviderState,
    manager: Option<Arc<dyn LocationManager>>,
}

/// Forwards fixes from the platform location manager to the host event
/// channel as `updateLocation` events. The bridge itself is the listener
/// handed to the manager, so it is constructed behind an [`Arc`].
///
/// Start and stop are not guarded against racing each other; unsubscribing
/// before re-subscribing is the caller's responsibility.
#[derive(Debug)]
pub struct LocationBridge {
    services: Arc<dyn HostServices>,
    sink: Arc<dyn EventSink>,
    request: UpdateRequest,
    state: RwLock<BridgeState>,
}

impl LocationBridge {
    pub fn new(services: Arc<dyn HostServices>, sink: Arc<dyn EventSink>, request: UpdateRequest) -> Arc<Self> {
        Arc::new(LocationBridge {
            services,
            sink,
            request,
            state: RwLock::new(BridgeState::default()),
        })
    }

    /// Subscribes to the gps provider when it is enabled and to the network
    /// provider otherwise. First match wins, there is no accuracy
    /// comparison. The subscribed provider's last known fix is forwarded
    /// right away if it has one.
    #[instrument(skip_all)]
    pub async fn start(self: Arc<Self>) -> Result<(), BridgeError> {
        let Some(manager) = self.services.location_manager() else {
            error!("Location service not enabled, no location manager available");
            return Err(BridgeError::ManagerUnavailable);
        };

        let gps_enabled = manager.is_provider_enabled(Provider::Gps);
        let network_enabled = manager.is_provider_enabled(Provider::Network);
        if !gps_enabled && !network_enabled {
            error!("Location service not enabled, neither the gps nor the network provider is enabled");
            return Err(BridgeError::NoProviderEnabled);
        }

        let provider = if gps_enabled { Provider::Gps } else { Provider::Network };

        let listener = Arc::clone(&self) as Arc<dyn LocationListener>;
        if let Err(e) = manager.request_updates(provider, self.request, listener).await {
            error!("Impossible to subscribe to the {} provider: {}", provider, e);
            return Err(e.into());
        }
        info!("📡 {} provider enabled", provider);

        {
            let mut state = self.state.write().await;
            state.providers = ProviderState {
                gps_enabled,
                network_enabled,
                active: Some(provider),
            };
            state.manager = Some(Arc::clone(&manager));
        }

        match manager.last_known(provider) {
            Some(sample) => self.send_update_location_event(sample).await,
            None => warn!("No last known location for the {} provider", provider),
        }

        Ok(())
    }

    /// Removes the active subscription and resets the provider state.
    #[instrument(skip_all)]
    pub async fn stop(&self) -> Result<(), BridgeError> {
        let mut state = self.state.write().await;
        let Some(manager) = state.manager.take() else {
            warn!("No location updates to stop, the bridge was never started");
            return Err(BridgeError::NotStarted);
        };

        manager.remove_updates().await;
        state.providers = ProviderState::default();
        info!("📴 Stopped location updates");

        Ok(())
    }

    pub async fn can_get_location(&self) -> bool {
        self.state.read().await.providers.can_get_location()
    }

    async fn send_update_location_event(&self, sample: LocationSample) {
        if !self.can_get_location().await {
            debug!("Dropping a {} sample, updates are stopped", sample.provider);
            return;
        }

        #[rustfmt::skip]
        info!("📍 Got a new location from {}. Lng: {} Lat: {}", sample.provider, sample.longitude, sample.latitude);

        let event = LocationEvent::from(&sample);
        let payload = match serde_json::to_value(&event) {
            Ok(payload) => payload,
            Err(e) => {
                error!("Could not serialize the location event: {}", e);
                return;
            }
        };

        if let Err(e) = self.sink.emit(UPDATE_LOCATION, payload).await {
            error!("Could not emit the location event: {}", e);
        }
    }
}

#[async_trait]
impl LocationListener for LocationBridge {
    async fn on_location_changed(&self, sample: LocationSample) {
        self.send_update_location_event(sample).await;
    }

    async fn on_provider_enabled(&self, provider: Provider) {
        info!("Enabled provider {}", provider);
    }

    async fn on_provider_disabled(&self, provider: Provider) {
        info!("Disabled provider {}", provider);
    }

    async fn on_status_changed(&self, provider: Provider, status: ProviderStatus) {
        info!("Provider {} is now {}", provider, status);
    }
}

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("the location service is not available")]
    ManagerUnavailable,
    #[error("neither the gps nor the network provider is enabled")]
    NoProviderEnabled,
    #[error("location updates were never started")]
    NotStarted,
    #[error(transparent)]
    Subscription(#[from] PlatformError),
}
