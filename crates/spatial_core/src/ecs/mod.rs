//! Entity-component glue for the spatial core
//!
//! The entity registry itself lives outside this crate; entities are opaque
//! ids and components are plain data attached by the host.

pub mod component;
pub mod components;
pub mod entity;
pub mod hierarchy;

pub use component::{Component, ComponentError, Persistent};
pub use entity::Entity;
pub use hierarchy::{HierarchyError, TransformHandle, TransformHierarchy};
