//! Layout metrics snapshots.
//!
//! A [`LayoutMetrics`] value is built once per node per layout pass from the engine's computed
//! output and compared against the previous pass's value to decide whether the view needs to be
//! laid out and re-rendered again. Comparison is exact: callers that want tolerance must round
//! before building.

use serde::{Deserialize, Serialize};

use crate::convert::{DisplayType, LayoutDirection, to_graphics_float};
use crate::engine::{ComputedLayout, Edge};
use crate::foundation::core::{
    Insets, Point, Rect, add_insets, inset_rect, same_insets, same_rect,
};

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct LayoutMetrics {
    /// Outer box in the parent's coordinate space.
    pub frame: Rect,
    /// `frame` minus border and padding.
    pub content_frame: Rect,
    pub border_width: Insets,
    pub display_type: DisplayType,
    pub layout_direction: LayoutDirection,
}

impl LayoutMetrics {
    /// Snapshots the computed layout of `node`.
    pub fn from_node(node: &impl ComputedLayout) -> Self {
        let x = to_graphics_float(node.left());
        let y = to_graphics_float(node.top());
        let w = to_graphics_float(node.width());
        let h = to_graphics_float(node.height());
        let frame = Rect::new(x, y, x + w, y + h);

        let border_width = edge_insets(|e| node.border(e));
        let padding = edge_insets(|e| node.padding(e));
        let content_frame = inset_rect(frame, add_insets(border_width, padding));

        Self {
            frame,
            content_frame,
            border_width,
            display_type: node.display().into(),
            layout_direction: node.direction().into(),
        }
    }

    /// Frame translated into the root's coordinate space.
    pub fn absolute_frame(&self, parent_origin: Point) -> Rect {
        self.frame + parent_origin.to_vec2()
    }

    pub fn diff(&self, other: &LayoutMetrics) -> MetricsDiff {
        MetricsDiff {
            frame: !same_rect(self.frame, other.frame),
            content_frame: !same_rect(self.content_frame, other.content_frame),
            border_width: !same_insets(self.border_width, other.border_width),
            display_type: self.display_type != other.display_type,
            layout_direction: self.layout_direction != other.layout_direction,
        }
    }
}

/// Exact field-by-field equality. NaN components equal NaN so every snapshot equals itself.
impl PartialEq for LayoutMetrics {
    fn eq(&self, other: &Self) -> bool {
        self.diff(other).is_empty()
    }
}

fn edge_insets(read: impl Fn(Edge) -> f32) -> Insets {
    Insets::new(
        to_graphics_float(read(Edge::Left)),
        to_graphics_float(read(Edge::Top)),
        to_graphics_float(read(Edge::Right)),
        to_graphics_float(read(Edge::Bottom)),
    )
}

/// Which fields differ between two snapshots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MetricsDiff {
    pub frame: bool,
    pub content_frame: bool,
    pub border_width: bool,
    pub display_type: bool,
    pub layout_direction: bool,
}

impl MetricsDiff {
    pub fn is_empty(self) -> bool {
        !(self.frame
            || self.content_frame
            || self.border_width
            || self.display_type
            || self.layout_direction)
    }

    pub fn changed_fields(self) -> impl Iterator<Item = &'static str> {
        [
            (self.frame, "frame"),
            (self.content_frame, "content_frame"),
            (self.border_width, "border_width"),
            (self.display_type, "display_type"),
            (self.layout_direction, "layout_direction"),
        ]
        .into_iter()
        .filter_map(|(changed, name)| changed.then_some(name))
    }
}
