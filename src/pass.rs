//! Layout pass driver over a Taffy tree.
//!
//! [`LayoutSession`] plays the framework role: it owns the node tree, remembers the previous
//! pass's snapshot per node and which nodes were dirtied directly. Each [`LayoutSession::run_pass`]
//! computes layout, snapshots every node, and reports nodes whose metrics changed as a side effect
//! of another node's layout (the "affected" nodes).

use std::collections::{HashMap, HashSet};

use taffy::prelude::{AvailableSpace, NodeId, Size as TaffySize};
use taffy::style::Style;

use crate::context::LayoutContext;
use crate::convert::{Length, to_engine_float};
use crate::engine::{EngineDirection, TaffyNodeLayout};
use crate::foundation::core::{Point, Size};
use crate::foundation::error::{MetricsError, MetricsResult};
use crate::metrics::{LayoutMetrics, MetricsDiff};

/// Per-node data stored alongside the Taffy node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeContext {
    pub name: Option<String>,
    pub direction: EngineDirection,
}

impl NodeContext {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            direction: EngineDirection::Inherit,
        }
    }

    pub fn with_direction(mut self, direction: EngineDirection) -> Self {
        self.direction = direction;
        self
    }
}

/// Outcome for a single node in one pass.
#[derive(Clone, Debug)]
pub struct NodeReport {
    pub node: NodeId,
    pub metrics: LayoutMetrics,
    pub absolute_origin: Point,
    /// `None` on the first pass that sees the node.
    pub diff: Option<MetricsDiff>,
    pub dirty: bool,
    /// Nodes drained from this node's context.
    pub affected: Vec<NodeId>,
}

impl NodeReport {
    pub fn changed(&self) -> bool {
        self.diff.is_none_or(|d| !d.is_empty())
    }
}

/// Per-node results in depth-first order, root first.
#[derive(Clone, Debug, Default)]
pub struct PassReport {
    pub nodes: Vec<NodeReport>,
}

impl PassReport {
    pub fn get(&self, node: NodeId) -> Option<&NodeReport> {
        self.nodes.iter().find(|r| r.node == node)
    }

    pub fn metrics(&self, node: NodeId) -> Option<LayoutMetrics> {
        self.get(node).map(|r| r.metrics)
    }

    pub fn changed(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().filter(|r| r.changed()).map(|r| r.node)
    }

    /// Every node recorded as affected, across all contexts.
    pub fn affected(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().flat_map(|r| r.affected.iter().copied())
    }
}

#[derive(Debug)]
struct Visit {
    node: NodeId,
    owner_direction: EngineDirection,
    parent_context: Option<usize>,
    /// Nearest directly dirtied ancestor.
    dirty_owner: Option<usize>,
}

#[derive(Debug)]
pub struct LayoutSession {
    taffy: taffy::TaffyTree<NodeContext>,
    root: Option<NodeId>,
    names: HashMap<String, NodeId>,
    snapshots: HashMap<NodeId, LayoutMetrics>,
    dirty: HashSet<NodeId>,
}

impl Default for LayoutSession {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutSession {
    pub fn new() -> Self {
        Self {
            taffy: taffy::TaffyTree::new(),
            root: None,
            names: HashMap::new(),
            snapshots: HashMap::new(),
            dirty: HashSet::new(),
        }
    }

    pub fn add_node(&mut self, style: Style, ctx: NodeContext) -> MetricsResult<NodeId> {
        let name = ctx.name.clone();
        if let Some(name) = &name
            && self.names.contains_key(name)
        {
            return Err(MetricsError::validation(format!(
                "duplicate node name '{name}'"
            )));
        }
        let node = self.taffy.new_leaf_with_context(style, ctx)?;
        if let Some(name) = name {
            self.names.insert(name, node);
        }
        Ok(node)
    }

    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> MetricsResult<()> {
        self.taffy.add_child(parent, child)?;
        Ok(())
    }

    pub fn set_root(&mut self, node: NodeId) {
        self.root = Some(node);
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn node_named(&self, name: &str) -> Option<NodeId> {
        self.names.get(name).copied()
    }

    pub fn name_of(&self, node: NodeId) -> Option<&str> {
        self.taffy
            .get_node_context(node)
            .and_then(|c| c.name.as_deref())
    }

    pub fn style(&self, node: NodeId) -> MetricsResult<&Style> {
        Ok(self.taffy.style(node)?)
    }

    /// Replaces the node's style and marks it dirty for the next pass.
    pub fn set_style(&mut self, node: NodeId, style: Style) -> MetricsResult<()> {
        self.taffy.set_style(node, style)?;
        self.dirty.insert(node);
        Ok(())
    }

    pub fn set_direction(
        &mut self,
        node: NodeId,
        direction: EngineDirection,
    ) -> MetricsResult<()> {
        let ctx = self
            .taffy
            .get_node_context_mut(node)
            .ok_or_else(|| MetricsError::validation("node has no context"))?;
        if ctx.direction != direction {
            ctx.direction = direction;
            self.dirty.insert(node);
        }
        Ok(())
    }

    pub fn mark_dirty(&mut self, node: NodeId) -> MetricsResult<()> {
        self.taffy.mark_dirty(node)?;
        self.dirty.insert(node);
        Ok(())
    }

    pub fn is_dirty(&self, node: NodeId) -> bool {
        self.dirty.contains(&node)
    }

    /// Snapshot stored by the last completed pass.
    pub fn snapshot(&self, node: NodeId) -> Option<&LayoutMetrics> {
        self.snapshots.get(&node)
    }

    /// Computes layout within `available` and diffs every node against the previous pass.
    ///
    /// An undefined (infinite) available dimension lays out at max-content.
    #[tracing::instrument(skip(self))]
    pub fn run_pass(&mut self, available: Size) -> MetricsResult<PassReport> {
        let Some(root) = self.root else {
            return Ok(PassReport::default());
        };

        let space = TaffySize {
            width: available_space(available.width),
            height: available_space(available.height),
        };
        self.taffy.compute_layout(root, space)?;

        let mut contexts: Vec<LayoutContext<'static, NodeId>> = Vec::new();
        let mut nodes: Vec<NodeReport> = Vec::new();
        let mut stack = vec![Visit {
            node: root,
            owner_direction: EngineDirection::Inherit,
            parent_context: None,
            dirty_owner: None,
        }];

        while let Some(visit) = stack.pop() {
            let layout = self.taffy.layout(visit.node)?;
            let display = self.taffy.style(visit.node)?.display.into();
            let direction = self
                .taffy
                .get_node_context(visit.node)
                .map(|c| c.direction)
                .unwrap_or_default()
                .resolve(visit.owner_direction);
            let metrics =
                LayoutMetrics::from_node(&TaffyNodeLayout::new(layout, display, direction));

            let idx = contexts.len();
            let ctx = match visit.parent_context {
                Some(parent) => contexts[parent].for_child(metrics.frame.origin().to_vec2()),
                None => LayoutContext::new(metrics.frame.origin()),
            };
            let dirty = self.dirty.contains(&visit.node);
            let absolute_origin = ctx.absolute_position;
            contexts.push(ctx);

            let diff = self.snapshots.get(&visit.node).map(|prev| prev.diff(&metrics));
            if let Some(d) = diff
                && !d.is_empty()
            {
                tracing::debug!(
                    node = ?visit.node,
                    dirty,
                    fields = ?d.changed_fields().collect::<Vec<_>>(),
                    "layout metrics changed"
                );
                // The root has no owner to be affected through.
                let owner = visit.dirty_owner.unwrap_or(0);
                if !dirty && owner != idx {
                    contexts[owner].mark_affected(visit.node);
                }
            }

            nodes.push(NodeReport {
                node: visit.node,
                metrics,
                absolute_origin,
                diff,
                dirty,
                affected: Vec::new(),
            });

            let dirty_owner = if dirty { Some(idx) } else { visit.dirty_owner };
            let children = self.taffy.children(visit.node)?;
            for child in children.into_iter().rev() {
                stack.push(Visit {
                    node: child,
                    owner_direction: direction,
                    parent_context: Some(idx),
                    dirty_owner,
                });
            }
        }

        for (report, ctx) in nodes.iter_mut().zip(contexts.iter_mut()) {
            report.affected = ctx.drain_affected().collect();
        }

        self.snapshots = nodes.iter().map(|r| (r.node, r.metrics)).collect();
        self.dirty.clear();

        tracing::debug!(
            nodes = nodes.len(),
            affected = nodes.iter().map(|r| r.affected.len()).sum::<usize>(),
            "layout pass complete"
        );
        Ok(PassReport { nodes })
    }
}

fn available_space(v: f64) -> AvailableSpace {
    match Length::from_graphics(v) {
        Length::Undefined => AvailableSpace::MaxContent,
        Length::Points(p) => AvailableSpace::Definite(to_engine_float(p)),
    }
}
