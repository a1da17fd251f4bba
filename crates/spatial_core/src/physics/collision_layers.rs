//! Collision layer system for filtering collision detection
//!
//! Every collider carries two masks: the layers it occupies and the layers
//! it is willing to match. Layer indices are a wire contract shared with
//! other subsystems, so the well-known ones are a typed [`Layer`] enum
//! rather than loose integers.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Number of addressable layer bits
pub const LAYER_COUNT: u32 = u32::BITS;

/// Well-known layer indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum Layer {
    /// Player characters
    Player = 0,
    /// Enemy characters
    Enemy = 1,
    /// Projectiles (bullets, missiles, etc.)
    Projectile = 2,
    /// Static walls and level geometry
    Wall = 3,
    /// Trigger volumes (no physical response)
    Trigger = 4,
}

impl Layer {
    /// Bit index of this layer
    pub const fn bit(self) -> u32 {
        self as u32
    }

    /// Single-layer mask
    pub const fn mask(self) -> LayerMask {
        LayerMask::from_bits_retain(1 << self.bit())
    }
}

bitflags! {
    /// 32-bit set of layer indices
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct LayerMask: u32 {
        /// Player layer
        const PLAYER = 1 << 0;
        /// Enemy layer
        const ENEMY = 1 << 1;
        /// Projectile layer
        const PROJECTILE = 1 << 2;
        /// Wall layer
        const WALL = 1 << 3;
        /// Trigger layer
        const TRIGGER = 1 << 4;

        // Custom layers 5..31 are addressed by index
        const _ = !0;
    }
}

/// Layer registration errors
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerError {
    /// Bit index does not fit in the mask
    #[error("layer bit {0} is out of range (0..{LAYER_COUNT})")]
    OutOfRange(u32),
}

impl From<Layer> for LayerMask {
    fn from(layer: Layer) -> Self {
        layer.mask()
    }
}

impl LayerMask {
    /// Build a mask from a list of layers
    pub fn from_layers(layers: &[Layer]) -> Self {
        let mut mask = Self::empty();
        mask.set_layers(layers);
        mask
    }

    /// Set a layer bit by index
    pub fn set_bit(&mut self, index: u32) -> Result<(), LayerError> {
        let bit = Self::bit_for(index)?;
        self.insert(bit);
        Ok(())
    }

    /// Clear a layer bit by index
    pub fn clear_bit(&mut self, index: u32) -> Result<(), LayerError> {
        let bit = Self::bit_for(index)?;
        self.remove(bit);
        Ok(())
    }

    /// Whether a bit is set; out-of-range indices are never set
    pub fn is_set(&self, index: u32) -> bool {
        index < LAYER_COUNT && self.contains(Self::from_bits_retain(1 << index))
    }

    /// Set the bits of several well-known layers
    pub fn set_layers(&mut self, layers: &[Layer]) {
        for layer in layers {
            self.insert(layer.mask());
        }
    }

    /// True if the masks share at least one bit
    pub fn has_any(&self, other: LayerMask) -> bool {
        self.intersects(other)
    }

    /// True if every bit of `other` is set here
    pub fn has_all(&self, other: LayerMask) -> bool {
        self.contains(other)
    }

    /// Match test used by colliders (non-empty intersection)
    pub fn can_match(&self, other: LayerMask) -> bool {
        self.has_any(other)
    }

    fn bit_for(index: u32) -> Result<LayerMask, LayerError> {
        if index >= LAYER_COUNT {
            log::warn!("rejected layer bit {index}");
            return Err(LayerError::OutOfRange(index));
        }
        Ok(Self::from_bits_retain(1 << index))
    }
}

/// How layer/match masks of two colliders are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LayerFilter {
    /// Either collider matching the other is enough
    #[default]
    Either,
    /// Only the first collider's match mask is consulted
    Directed,
    /// Both colliders must match each other
    Mutual,
}

/// Layer eligibility rules
pub struct CollisionLayers;

impl CollisionLayers {
    /// Check if two bodies should collide based on their layers and masks
    ///
    /// # Arguments
    /// * `layer_a` - A's occupied layers
    /// * `mask_a` - A's match mask (what it collides with)
    /// * `layer_b` - B's occupied layers
    /// * `mask_b` - B's match mask
    /// * `filter` - How the two directions combine
    ///
    /// # Example
    /// ```
    /// use spatial_core::physics::collision_layers::{CollisionLayers, LayerFilter, LayerMask};
    ///
    /// let player = LayerMask::PLAYER;
    /// let player_mask = LayerMask::ENEMY | LayerMask::WALL;
    /// let enemy = LayerMask::ENEMY;
    /// let enemy_mask = LayerMask::PROJECTILE;
    ///
    /// assert!(CollisionLayers::should_collide(player, player_mask, enemy, enemy_mask, LayerFilter::Either));
    /// assert!(!CollisionLayers::should_collide(player, player_mask, enemy, enemy_mask, LayerFilter::Mutual));
    /// ```
    pub fn should_collide(
        layer_a: LayerMask,
        mask_a: LayerMask,
        layer_b: LayerMask,
        mask_b: LayerMask,
        filter: LayerFilter,
    ) -> bool {
        let a_wants_b = mask_a.can_match(layer_b);
        match filter {
            LayerFilter::Directed => a_wants_b,
            LayerFilter::Either => a_wants_b || mask_b.can_match(layer_a),
            LayerFilter::Mutual => a_wants_b && mask_b.can_match(layer_a),
        }
    }
}
