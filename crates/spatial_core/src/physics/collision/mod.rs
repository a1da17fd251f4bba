//! Shape geometry for narrow-phase collision
//!
//! # Architecture
//!
//! - **Local Space Storage**: shapes are stored relative to their collider
//! - **On-Demand Placement**: world-space copies are produced per query and
//!   never written back
//!
//! # Module Organization
//!
//! - [`primitives`] - Circle, rectangle, line and axis-aligned bounds with
//!   their pairwise predicates
//! - [`shape`] - Closed [`Shape`] enum dispatching over the primitives

pub mod primitives;
pub mod shape;

pub use primitives::{Bounds, Circle, Line, Rectangle};
pub use shape::{Contact, Shape, ShapeType};
