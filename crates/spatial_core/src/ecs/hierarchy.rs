//! Parent/child transform hierarchy
//!
//! Transforms live in a slotmap arena and refer to each other by
//! [`TransformHandle`]. A child stores its parent's handle and every parent
//! keeps an ordered list of child handles, so detaching or destroying a node
//! never has to break an ownership cycle.
//!
//! World-space values are derived on demand by walking the ancestor chain;
//! nothing is cached.

use super::components::TransformComponent;
use crate::foundation::math::{Point, Pose};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a transform stored in a [`TransformHierarchy`]
    pub struct TransformHandle;
}

/// Hierarchy errors
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HierarchyError {
    /// The handle was never issued or its transform has been destroyed
    #[error("transform handle is not in the hierarchy")]
    InvalidHandle,

    /// Parenting would make a transform its own ancestor
    #[error("parenting would create a cycle")]
    Cycle,
}

#[derive(Debug)]
struct Node {
    transform: TransformComponent,
    parent: Option<TransformHandle>,
    children: Vec<TransformHandle>,
}

/// Arena of transforms with parent/child links
#[derive(Debug, Default)]
pub struct TransformHierarchy {
    nodes: SlotMap<TransformHandle, Node>,
}

impl TransformHierarchy {
    /// Create an empty hierarchy
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a root transform
    pub fn insert(&mut self, transform: TransformComponent) -> TransformHandle {
        self.nodes.insert(Node {
            transform,
            parent: None,
            children: Vec::new(),
        })
    }

    /// Whether the handle refers to a live transform
    pub fn contains(&self, handle: TransformHandle) -> bool {
        self.nodes.contains_key(handle)
    }

    /// Borrow a transform
    pub fn get(&self, handle: TransformHandle) -> Option<&TransformComponent> {
        self.nodes.get(handle).map(|node| &node.transform)
    }

    /// Mutably borrow a transform
    pub fn get_mut(&mut self, handle: TransformHandle) -> Option<&mut TransformComponent> {
        self.nodes.get_mut(handle).map(|node| &mut node.transform)
    }

    /// Number of live transforms
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when no transforms are stored
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all transforms
    pub fn iter(&self) -> impl Iterator<Item = (TransformHandle, &TransformComponent)> {
        self.nodes.iter().map(|(handle, node)| (handle, &node.transform))
    }

    fn node(&self, handle: TransformHandle) -> Result<&Node, HierarchyError> {
        self.nodes.get(handle).ok_or(HierarchyError::InvalidHandle)
    }

    /// Parent of a transform, if attached
    pub fn parent(&self, handle: TransformHandle) -> Option<TransformHandle> {
        self.nodes.get(handle).and_then(|node| node.parent)
    }

    /// Children of a transform in attach order
    pub fn children(&self, handle: TransformHandle) -> &[TransformHandle] {
        self.nodes
            .get(handle)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
    }

    /// Attach `child` to `parent`, or detach it with `None`
    ///
    /// The child is removed from its old parent's list before being appended
    /// to the new one.
    pub fn set_parent(
        &mut self,
        child: TransformHandle,
        parent: Option<TransformHandle>,
    ) -> Result<(), HierarchyError> {
        self.node(child)?;
        if let Some(parent) = parent {
            self.node(parent)?;
            if self.is_ancestor_or_self(child, parent) {
                return Err(HierarchyError::Cycle);
            }
        }

        self.detach(child);
        if let Some(parent) = parent {
            if let Some(node) = self.nodes.get_mut(parent) {
                node.children.push(child);
            }
            if let Some(node) = self.nodes.get_mut(child) {
                node.parent = Some(parent);
            }
            log::debug!("attached transform {child:?} to {parent:?}");
        } else {
            log::debug!("detached transform {child:?}");
        }
        Ok(())
    }

    fn is_ancestor_or_self(&self, candidate: TransformHandle, mut node: TransformHandle) -> bool {
        loop {
            if node == candidate {
                return true;
            }
            match self.parent(node) {
                Some(parent) => node = parent,
                None => return false,
            }
        }
    }

    fn detach(&mut self, child: TransformHandle) {
        let Some(old_parent) = self.nodes.get_mut(child).and_then(|node| node.parent.take()) else {
            return;
        };
        if let Some(node) = self.nodes.get_mut(old_parent) {
            node.children.retain(|&handle| handle != child);
        }
    }

    /// Pose in world space, composed through every ancestor
    pub fn world_pose(&self, handle: TransformHandle) -> Result<Pose, HierarchyError> {
        let node = self.node(handle)?;
        let local = node.transform.pose();
        match node.parent {
            None => Ok(local),
            Some(parent) => Ok(self.world_pose(parent)?.combine(&local)),
        }
    }

    /// World-space position
    pub fn world_position(&self, handle: TransformHandle) -> Result<Point, HierarchyError> {
        self.world_pose(handle).map(|pose| pose.position)
    }

    /// World-space rotation in `[0, 2π)`
    pub fn world_rotation(&self, handle: TransformHandle) -> Result<f64, HierarchyError> {
        self.world_pose(handle).map(|pose| pose.rotation)
    }

    /// Product of scales along the chain
    pub fn world_scale(&self, handle: TransformHandle) -> Result<f64, HierarchyError> {
        self.world_pose(handle).map(|pose| pose.scale)
    }

    /// Map a point in the transform's local space to world space
    pub fn local_to_world(&self, handle: TransformHandle, local: &Point) -> Result<Point, HierarchyError> {
        self.world_pose(handle).map(|pose| pose.transform_point(local))
    }

    /// Map a world-space point into the transform's local space
    pub fn world_to_local(&self, handle: TransformHandle, world: &Point) -> Result<Point, HierarchyError> {
        self.world_pose(handle)
            .map(|pose| pose.inverse_transform_point(world))
    }

    /// Snapshot every transform's previous pose
    ///
    /// Call once per tick before any system moves a transform.
    pub fn snapshot_all(&mut self, dt: f64) {
        for node in self.nodes.values_mut() {
            node.transform.update(dt);
        }
    }

    /// Remove a transform
    ///
    /// The transform is detached from its parent; its children become roots
    /// and are kept.
    pub fn destroy(&mut self, handle: TransformHandle) -> Result<TransformComponent, HierarchyError> {
        self.node(handle)?;
        self.detach(handle);
        let node = self
            .nodes
            .remove(handle)
            .ok_or(HierarchyError::InvalidHandle)?;
        for child in node.children {
            if let Some(child) = self.nodes.get_mut(child) {
                child.parent = None;
            }
        }
        Ok(node.transform)
    }
}
