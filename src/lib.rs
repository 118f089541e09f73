//! Bridges a platform location provider to an application's scripting layer.
//!
//! A [`LocationBridge`] subscribes to the host's location manager, preferring
//! the gps provider over the network provider, and forwards every fix to an
//! injected [`EventSink`] as an `updateLocation` event. The host supplies its
//! location service through the [`platform`] traits; tests and embedders
//! without a real platform plug in their own implementations.

pub mod app_config;
pub mod bridge;
pub mod domain;
pub mod event_bus;
pub mod platform;

pub use bridge::{BridgeError, LocationBridge, ProviderState};
pub use event_bus::{ChannelEventSink, EmitError, EmittedEvent, EventSink};
pub use platform::{HostServices, LocationListener, LocationManager, PlatformError, UpdateRequest};
