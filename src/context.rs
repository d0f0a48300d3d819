//! Per-node bookkeeping for a single layout pass.

use std::collections::HashSet;
use std::hash::Hash;

use crate::foundation::core::{Point, Vec2};

/// Scratch state attached to one node while a layout pass runs.
///
/// Holds node handles (`H`, typically `taffy::NodeId`) and tags borrowed for the pass lifetime
/// `'a`; it owns neither. Drop it once the pass results have been consumed.
#[derive(Clone, Debug)]
pub struct LayoutContext<'a, H> {
    /// Position of the node relative to the layout root.
    pub absolute_position: Point,
    affected_nodes: HashSet<H>,
    auxiliary: HashSet<&'a str>,
}

impl<H> Default for LayoutContext<'_, H> {
    fn default() -> Self {
        Self {
            absolute_position: Point::ORIGIN,
            affected_nodes: HashSet::new(),
            auxiliary: HashSet::new(),
        }
    }
}

impl<'a, H: Copy + Eq + Hash> LayoutContext<'a, H> {
    pub fn new(absolute_position: Point) -> Self {
        Self {
            absolute_position,
            ..Self::default()
        }
    }

    /// Fresh context for a child whose parent-relative origin is `offset`.
    pub fn for_child(&self, offset: Vec2) -> Self {
        Self::new(self.absolute_position + offset)
    }

    /// Returns `false` if `node` was already recorded.
    pub fn mark_affected(&mut self, node: H) -> bool {
        self.affected_nodes.insert(node)
    }

    pub fn is_affected(&self, node: H) -> bool {
        self.affected_nodes.contains(&node)
    }

    pub fn affected_nodes(&self) -> impl Iterator<Item = H> + '_ {
        self.affected_nodes.iter().copied()
    }

    pub fn affected_len(&self) -> usize {
        self.affected_nodes.len()
    }

    pub fn drain_affected(&mut self) -> impl Iterator<Item = H> + '_ {
        self.affected_nodes.drain()
    }

    pub fn insert_tag(&mut self, tag: &'a str) -> bool {
        self.auxiliary.insert(tag)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.auxiliary.contains(tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.auxiliary.iter().copied()
    }
}
