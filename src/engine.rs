//! Engine-side view of a computed layout node.
//!
//! The flex engine is consumed as an opaque source of computed geometry. [`ComputedLayout`] is
//! the read-only surface the metrics builder needs; it is implemented for Taffy layouts
//! ([`TaffyNodeLayout`]) and for the owned record [`ComputedBox`].

use serde::{Deserialize, Serialize};
use taffy::style::{Dimension, Display, LengthPercentage};

use crate::convert::float::Length;

/// Tri-state writing direction as the engine models it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineDirection {
    #[default]
    Inherit,
    Ltr,
    Rtl,
}

impl EngineDirection {
    /// Resolves `Inherit` against the owner's already-resolved direction.
    ///
    /// A root (or an owner that is itself unresolved) falls back to `Ltr`.
    pub fn resolve(self, owner: EngineDirection) -> EngineDirection {
        match (self, owner) {
            (EngineDirection::Inherit, EngineDirection::Inherit) => EngineDirection::Ltr,
            (EngineDirection::Inherit, owner) => owner,
            (own, _) => own,
        }
    }
}

/// Display modes the engine knows about.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineDisplay {
    #[default]
    Flex,
    None,
}

impl From<Display> for EngineDisplay {
    fn from(value: Display) -> Self {
        match value {
            Display::None => EngineDisplay::None,
            _ => EngineDisplay::Flex,
        }
    }
}

impl From<EngineDisplay> for Display {
    fn from(value: EngineDisplay) -> Self {
        match value {
            EngineDisplay::Flex => Display::Flex,
            EngineDisplay::None => Display::None,
        }
    }
}

/// Compound engine length: a raw number tagged with its unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "snake_case")]
pub enum EngineValue {
    Undefined,
    #[default]
    Auto,
    Point(f32),
    /// Percentage in the 0..=100 range.
    Percent(f32),
}

impl From<EngineValue> for Dimension {
    fn from(value: EngineValue) -> Self {
        match value {
            EngineValue::Undefined | EngineValue::Auto => Dimension::auto(),
            EngineValue::Point(v) => match Length::from_engine(v) {
                Length::Undefined => Dimension::auto(),
                Length::Points(_) => Dimension::length(v),
            },
            EngineValue::Percent(p) => match Length::from_engine(p) {
                Length::Undefined => Dimension::auto(),
                Length::Points(_) => Dimension::percent(p / 100.0),
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    Left,
    Top,
    Right,
    Bottom,
}

/// Per-edge engine floats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeValues {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl EdgeValues {
    pub fn uniform(v: f32) -> Self {
        Self {
            left: v,
            top: v,
            right: v,
            bottom: v,
        }
    }

    pub fn get(self, edge: Edge) -> f32 {
        match edge {
            Edge::Left => self.left,
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
        }
    }

    pub(crate) fn to_taffy(self) -> taffy::prelude::Rect<LengthPercentage> {
        taffy::prelude::Rect {
            left: LengthPercentage::length(self.left),
            right: LengthPercentage::length(self.right),
            top: LengthPercentage::length(self.top),
            bottom: LengthPercentage::length(self.bottom),
        }
    }
}

/// Read-only access to one node's computed layout.
///
/// Only meaningful once the engine has finished a layout pass for the node; implementations
/// return whatever state is present.
pub trait ComputedLayout {
    fn left(&self) -> f32;
    fn top(&self) -> f32;
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    fn border(&self, edge: Edge) -> f32;
    fn padding(&self, edge: Edge) -> f32;
    fn display(&self) -> EngineDisplay;
    /// Already resolved by the engine, although `Inherit` is tolerated.
    fn direction(&self) -> EngineDirection;
}

/// Owned computed-layout record, handy for fixtures and for engines other than Taffy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputedBox {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub border: EdgeValues,
    pub padding: EdgeValues,
    pub display: EngineDisplay,
    pub direction: EngineDirection,
}

impl ComputedLayout for ComputedBox {
    fn left(&self) -> f32 {
        self.left
    }

    fn top(&self) -> f32 {
        self.top
    }

    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn border(&self, edge: Edge) -> f32 {
        self.border.get(edge)
    }

    fn padding(&self, edge: Edge) -> f32 {
        self.padding.get(edge)
    }

    fn display(&self) -> EngineDisplay {
        self.display
    }

    fn direction(&self) -> EngineDirection {
        self.direction
    }
}

/// A Taffy [`taffy::Layout`] paired with the node's display and resolved direction.
///
/// Taffy has no notion of writing direction, so the caller supplies it.
#[derive(Clone, Copy, Debug)]
pub struct TaffyNodeLayout<'a> {
    layout: &'a taffy::Layout,
    display: EngineDisplay,
    direction: EngineDirection,
}

impl<'a> TaffyNodeLayout<'a> {
    pub fn new(
        layout: &'a taffy::Layout,
        display: EngineDisplay,
        direction: EngineDirection,
    ) -> Self {
        Self {
            layout,
            display,
            direction,
        }
    }
}

fn rect_edge(r: &taffy::prelude::Rect<f32>, edge: Edge) -> f32 {
    match edge {
        Edge::Left => r.left,
        Edge::Top => r.top,
        Edge::Right => r.right,
        Edge::Bottom => r.bottom,
    }
}

impl ComputedLayout for TaffyNodeLayout<'_> {
    fn left(&self) -> f32 {
        self.layout.location.x
    }

    fn top(&self) -> f32 {
        self.layout.location.y
    }

    fn width(&self) -> f32 {
        self.layout.size.width
    }

    fn height(&self) -> f32 {
        self.layout.size.height
    }

    fn border(&self, edge: Edge) -> f32 {
        rect_edge(&self.layout.border, edge)
    }

    fn padding(&self, edge: Edge) -> f32 {
        rect_edge(&self.layout.padding, edge)
    }

    fn display(&self) -> EngineDisplay {
        self.display
    }

    fn direction(&self) -> EngineDirection {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inherit_resolves_from_owner_and_defaults_to_ltr() {
        assert_eq!(
            EngineDirection::Inherit.resolve(EngineDirection::Rtl),
            EngineDirection::Rtl
        );
        assert_eq!(
            EngineDirection::Inherit.resolve(EngineDirection::Inherit),
            EngineDirection::Ltr
        );
        assert_eq!(
            EngineDirection::Ltr.resolve(EngineDirection::Rtl),
            EngineDirection::Ltr
        );
    }

    #[test]
    fn taffy_display_collapses_to_flex_or_none() {
        assert_eq!(EngineDisplay::from(Display::None), EngineDisplay::None);
        assert_eq!(EngineDisplay::from(Display::Flex), EngineDisplay::Flex);
        assert_eq!(EngineDisplay::from(Display::Block), EngineDisplay::Flex);
        assert_eq!(Display::from(EngineDisplay::None), Display::None);
    }

    #[test]
    fn engine_value_maps_to_taffy_dimension() {
        assert_eq!(Dimension::from(EngineValue::Point(12.0)), Dimension::length(12.0));
        assert_eq!(Dimension::from(EngineValue::Percent(50.0)), Dimension::percent(0.5));
        assert_eq!(Dimension::from(EngineValue::Undefined), Dimension::auto());
        assert_eq!(
            Dimension::from(EngineValue::Point(crate::convert::float::ENGINE_UNDEFINED)),
            Dimension::auto()
        );
    }

    #[test]
    fn engine_value_json_shape() {
        let v: EngineValue = serde_json::from_str(r#"{"unit":"percent","value":25.0}"#).unwrap();
        assert_eq!(v, EngineValue::Percent(25.0));
        let v: EngineValue = serde_json::from_str(r#"{"unit":"auto"}"#).unwrap();
        assert_eq!(v, EngineValue::Auto);
    }

    #[test]
    fn computed_box_reads_edges() {
        let b = ComputedBox {
            border: EdgeValues {
                left: 1.0,
                top: 2.0,
                right: 3.0,
                bottom: 4.0,
            },
            ..ComputedBox::default()
        };
        assert_eq!(b.border(Edge::Left), 1.0);
        assert_eq!(b.border(Edge::Bottom), 4.0);
        assert_eq!(b.padding(Edge::Top), 0.0);
    }
}
