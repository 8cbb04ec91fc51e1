//! Inverse-square attraction field over the active pointers.
//!
//! This module defines [`AttractionField`], a pure evaluation of the aggregate
//! pull that all registered pointers exert at a query position. Each pointer
//! contributes a unit vector toward itself scaled by `strength / distance²`;
//! the contributions are summed and returned unnormalized.
use glam::Vec2;
use tracing::warn;

use crate::error::{Error, Result};
use crate::pointer::PointerRegistry;

/// Default field strength, chosen so a pointer 100 units away pulls with
/// magnitude 1.
pub const DEFAULT_ATTRACTION_STRENGTH: f32 = 10_000.0;

/// Policy for a pointer whose distance to the query position is zero.
///
/// Neither the force division nor the direction is defined at distance zero,
/// so the behavior there has to be an explicit choice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DegeneracyPolicy {
    /// A coincident pointer contributes nothing.
    Skip,

    /// Distances are clamped from below before the force division, bounding
    /// the force magnitude near contact. An exactly coincident pointer still
    /// contributes nothing, since no direction exists for it.
    Clamp {
        /// Lower distance bound, must be finite and > 0.
        min_distance: f32,
    },
}

/// Inverse-square attraction field parameterized by strength and degeneracy policy.
#[non_exhaustive]
#[derive(Clone, Copy, Debug)]
pub struct AttractionField {
    /// Numerator of the `strength / distance²` force term.
    pub strength: f32,
    /// Behavior for pointers at distance zero from the query.
    pub policy: DegeneracyPolicy,
}

impl Default for AttractionField {
    fn default() -> Self {
        Self {
            strength: DEFAULT_ATTRACTION_STRENGTH,
            policy: DegeneracyPolicy::Skip,
        }
    }
}

impl AttractionField {
    /// Creates a new [`AttractionField`] with the specified strength and the
    /// default [`DegeneracyPolicy::Skip`].
    pub fn new(strength: f32) -> Self {
        Self {
            strength,
            ..Default::default()
        }
    }

    /// Sets the degeneracy policy.
    pub fn with_policy(mut self, policy: DegeneracyPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Validates the field parameters, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.strength.is_finite() || self.strength <= 0.0 {
            return Err(Error::InvalidConfig(
                "field strength must be finite and > 0".into(),
            ));
        }
        if let DegeneracyPolicy::Clamp { min_distance } = self.policy {
            if !min_distance.is_finite() || min_distance <= 0.0 {
                return Err(Error::InvalidConfig(
                    "clamp min_distance must be finite and > 0".into(),
                ));
            }
        }

        Ok(())
    }

    /// Evaluates the aggregate pull at `query` over all registered pointers.
    ///
    /// Pure function of its inputs at call time; the registry is not mutated.
    /// The returned vector is the raw sum of contributions, not normalized.
    /// Coincident pointers are handled per the configured policy and surfaced
    /// with a warning.
    pub fn evaluate(&self, query: Vec2, registry: &PointerRegistry) -> Vec2 {
        let mut pull = Vec2::ZERO;
        for pointer in registry.positions() {
            match self.contribution(query, pointer) {
                Some(c) => pull += c,
                None => {
                    warn!(
                        "Pointer coincides with query position {}; skipping its contribution.",
                        query
                    );
                }
            }
        }
        pull
    }

    /// Strict variant of [`AttractionField::evaluate`]: fails when any pointer
    /// coincides exactly with the query position, regardless of policy.
    pub fn try_evaluate(&self, query: Vec2, registry: &PointerRegistry) -> Result<Vec2> {
        let mut pull = Vec2::ZERO;
        for pointer in registry.positions() {
            match self.contribution(query, pointer) {
                Some(c) => pull += c,
                None => return Err(Error::DegenerateGeometry { query }),
            }
        }
        Ok(pull)
    }

    /// Single-pointer contribution, or `None` when the pointer coincides with
    /// the query and no direction exists.
    fn contribution(&self, query: Vec2, pointer: Vec2) -> Option<Vec2> {
        let vec = pointer - query;
        let dist = vec.length();
        if dist == 0.0 {
            return None;
        }

        let effective = match self.policy {
            DegeneracyPolicy::Skip => dist,
            DegeneracyPolicy::Clamp { min_distance } => dist.max(min_distance),
        };
        let force = self.strength / (effective * effective);
        Some(vec / dist * force)
    }
}
