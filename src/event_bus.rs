use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;
use thiserror::Error;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::mpsc::{self, Receiver, Sender};
use tracing::{debug, info};

/// A named notification on its way to the scripting layer.
#[derive(Clone, Debug, PartialEq)]
pub struct EmittedEvent {
    pub name: String,
    pub payload: Value,
}

/// Emission channel towards the host runtime.
#[async_trait]
pub trait EventSink: Debug + Send + Sync {
    async fn emit(&self, name: &str, payload: Value) -> Result<(), EmitError>;
}

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("the event buffer is full, dropped '{0}'")]
    Overflow(String),
}

/// Sink backed by a bounded channel. A closed receiver means no subscriber
/// is attached yet; such events are dropped with a notice rather than
/// reported as errors.
#[derive(Debug)]
pub struct ChannelEventSink {
    tx: Sender<EmittedEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: Sender<EmittedEvent>) -> Self {
        ChannelEventSink { tx }
    }

    pub fn channel(buffer: usize) -> (Self, Receiver<EmittedEvent>) {
        let (tx, rx) = mpsc::channel(buffer);
        (ChannelEventSink { tx }, rx)
    }
}

#[async_trait]
impl EventSink for ChannelEventSink {
    async fn emit(&self, name: &str, payload: Value) -> Result<(), EmitError> {
        let event = EmittedEvent {
            name: name.to_string(),
            payload,
        };

        match self.tx.try_send(event) {
            Ok(()) => {
                debug!("🔸 Emitted '{}'", name);
                Ok(())
            }
            Err(TrySendError::Closed(event)) => {
                info!("Waiting for a subscriber, dropping '{}'", event.name);
                Ok(())
            }
            Err(TrySendError::Full(event)) => Err(EmitError::Overflow(event.name)),
        }
    }
}
