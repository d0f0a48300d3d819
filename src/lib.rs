//! flexmetrics bridges a flex layout engine (Taffy) and kurbo geometry.
//!
//! - Snapshot a node's computed layout into [`LayoutMetrics`] and compare snapshots between
//!   passes to find the views that need re-rendering.
//! - Convert floats, directions and display modes between engine and graphics conventions,
//!   including each side's "undefined" sentinel.
//! - Track nodes affected by another node's layout during a pass with [`LayoutContext`].
#![forbid(unsafe_code)]

mod foundation;

pub mod context;
pub mod convert;
pub mod engine;
pub mod metrics;
pub mod pass;
pub mod tree;

pub use crate::context::LayoutContext;
pub use crate::convert::{
    DisplayType, ENGINE_UNDEFINED, GRAPHICS_UNDEFINED, LayoutDirection, Length, resolve_length,
    resolve_to_float, to_display_type, to_engine_direction, to_engine_display, to_engine_float,
    to_graphics_float, to_ui_direction,
};
pub use crate::engine::{
    ComputedBox, ComputedLayout, Edge, EdgeValues, EngineDirection, EngineDisplay, EngineValue,
    TaffyNodeLayout,
};
pub use crate::foundation::core::{Insets, Point, Rect, Size, Vec2};
pub use crate::foundation::error::{MetricsError, MetricsResult};
pub use crate::metrics::{LayoutMetrics, MetricsDiff};
pub use crate::pass::{LayoutSession, NodeContext, NodeReport, PassReport};
pub use crate::tree::{NodeSpec, TreeSpec};
pub use taffy::NodeId;
