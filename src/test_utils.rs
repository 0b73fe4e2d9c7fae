// SPDX-License-Identifier: MPL-2.0
//! Test helpers shared by the unit tests.
//!
//! Offsets and heights are `f32` pixels, so comparisons go through the
//! `approx` macros instead of `assert_eq!`.

pub use approx::assert_abs_diff_eq;

/// Tolerance for pixel comparisons.
pub const PX_EPSILON: f32 = 1e-4;

use crate::notifications::{Message, Props, Renderer};
use std::collections::HashMap;

/// Renderer double that records every call and reports scripted heights.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    next: u32,
    /// Height reported for each mounted instance, keyed by notification id.
    pub heights: HashMap<String, f32>,
    /// Offset last pushed to each live instance.
    pub offsets: HashMap<String, f32>,
    pub visible: HashMap<String, bool>,
    /// Ids of instances whose slot carried rich content.
    pub slotted: Vec<String>,
    pub mounted: Vec<String>,
    pub unmounted: Vec<String>,
    instances: HashMap<u32, String>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the height that the next mounts with `id` will report.
    pub fn with_height(mut self, id: &str, height: f32) -> Self {
        self.heights.insert(id.to_string(), height);
        self
    }

    pub fn offset_of(&self, id: &str) -> f32 {
        self.offsets.get(id).copied().unwrap_or(f32::NAN)
    }
}

impl Renderer for RecordingRenderer {
    type Instance = u32;

    fn mount(&mut self, props: &Props, slot: Option<&Message>) -> u32 {
        self.next += 1;
        let id = props.id.to_string();
        self.instances.insert(self.next, id.clone());
        self.offsets.insert(id.clone(), props.offset);
        self.visible.insert(id.clone(), true);
        if slot.is_some() {
            self.slotted.push(id.clone());
        }
        self.mounted.push(id);
        self.next
    }

    fn unmount(&mut self, instance: u32) {
        if let Some(id) = self.instances.remove(&instance) {
            self.offsets.remove(&id);
            self.unmounted.push(id);
        }
    }

    fn set_offset(&mut self, instance: &u32, offset: f32) {
        if let Some(id) = self.instances.get(instance) {
            self.offsets.insert(id.clone(), offset);
        }
    }

    fn set_visible(&mut self, instance: &u32, visible: bool) {
        if let Some(id) = self.instances.get(instance) {
            self.visible.insert(id.clone(), visible);
        }
    }

    fn rendered_height(&self, instance: &u32) -> Option<f32> {
        self.instances
            .get(instance)
            .and_then(|id| self.heights.get(id))
            .copied()
    }
}
