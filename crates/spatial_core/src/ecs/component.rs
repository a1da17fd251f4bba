//! Component trait and implementations

use serde::{de::DeserializeOwned, Serialize};

/// Marker trait for components
pub trait Component: 'static + Send + Sync {}

impl Component for super::components::TransformComponent {}
impl Component for super::components::PhysicsComponent {}
impl Component for crate::physics::Collider {}
impl Component for crate::physics::CompositeCollider {}

/// Component errors
#[derive(thiserror::Error, Debug)]
pub enum ComponentError {
    /// A required transform is absent or its handle is stale
    #[error("component requires a transform")]
    MissingTransform,

    /// State could not be encoded
    #[error("Encode error: {0}")]
    Encode(String),

    /// Bytes could not be decoded into component state
    #[error("Decode error: {0}")]
    Decode(String),

    /// Bytes are not valid UTF-8 text
    #[error("component bytes are not UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Byte round trip used by the host's registry
///
/// Implementors pick a serde state type; bytes are RON text. A failed
/// decode leaves `self` untouched.
pub trait Persistent {
    /// Serialized part of the component
    type State: Serialize + DeserializeOwned;

    /// Snapshot of the serialized fields
    fn state(&self) -> Self::State;

    /// Overwrite the serialized fields
    fn apply_state(&mut self, state: Self::State);

    /// Encode the component
    fn to_bytes(&self) -> Result<Vec<u8>, ComponentError> {
        ron::to_string(&self.state())
            .map(String::into_bytes)
            .map_err(|e| ComponentError::Encode(e.to_string()))
    }

    /// Decode into the component
    fn load_bytes(&mut self, bytes: &[u8]) -> Result<(), ComponentError> {
        let text = std::str::from_utf8(bytes)?;
        let state = ron::from_str(text).map_err(|e| ComponentError::Decode(e.to_string()))?;
        self.apply_state(state);
        Ok(())
    }
}
