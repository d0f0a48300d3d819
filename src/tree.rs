//! JSON tree fixtures.
//!
//! A [`TreeSpec`] describes a small styled node tree. It is used by the CLI and the integration
//! tests to populate a [`LayoutSession`], and to restyle an existing session by node name.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use taffy::prelude::{NodeId, Size as TaffySize};
use taffy::style::{Display, FlexDirection, Style};

use crate::convert::{DisplayType, to_engine_display};
use crate::engine::{EdgeValues, EngineDirection, EngineValue};
use crate::foundation::error::{MetricsError, MetricsResult};
use crate::pass::{LayoutSession, NodeContext};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TreeSpec {
    pub root: NodeSpec,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlexFlow {
    #[default]
    Row,
    Column,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeSpec {
    pub name: String,
    #[serde(default)]
    pub display: DisplayType,
    #[serde(default)]
    pub direction: EngineDirection,
    #[serde(default)]
    pub flex_direction: FlexFlow,
    #[serde(default)]
    pub width: EngineValue,
    #[serde(default)]
    pub height: EngineValue,
    #[serde(default)]
    pub border: EdgeValues,
    #[serde(default)]
    pub padding: EdgeValues,
    #[serde(default)]
    pub flex_grow: f32,
    #[serde(default = "default_flex_shrink")]
    pub flex_shrink: f32,
    #[serde(default)]
    pub children: Vec<NodeSpec>,
}

fn default_flex_shrink() -> f32 {
    1.0
}

impl TreeSpec {
    pub fn from_json(s: &str) -> MetricsResult<Self> {
        let spec: TreeSpec =
            serde_json::from_str(s).map_err(|e| MetricsError::serde(e.to_string()))?;
        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(&self) -> MetricsResult<()> {
        let mut seen = HashSet::new();
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if node.name.is_empty() {
                return Err(MetricsError::validation("node name must be non-empty"));
            }
            if !seen.insert(node.name.as_str()) {
                return Err(MetricsError::validation(format!(
                    "duplicate node name '{}'",
                    node.name
                )));
            }
            node.validate_values()?;
            stack.extend(node.children.iter());
        }
        Ok(())
    }

    /// Adds the whole tree to `session` and makes its root the session root.
    pub fn build(&self, session: &mut LayoutSession) -> MetricsResult<NodeId> {
        let root = build_node(&self.root, session)?;
        session.set_root(root);
        Ok(root)
    }

    /// Restyles nodes of an already built tree, matching them by name.
    ///
    /// Only nodes whose style or direction actually differ are marked dirty.
    pub fn apply_styles(&self, session: &mut LayoutSession) -> MetricsResult<()> {
        let mut stack = vec![&self.root];
        while let Some(spec) = stack.pop() {
            let node = session.node_named(&spec.name).ok_or_else(|| {
                MetricsError::validation(format!(
                    "node '{}' is not present in the session tree",
                    spec.name
                ))
            })?;
            let style = spec.style();
            if session.style(node)? != &style {
                tracing::debug!(name = %spec.name, "restyling node");
                session.set_style(node, style)?;
            }
            session.set_direction(node, spec.direction)?;
            stack.extend(spec.children.iter());
        }
        Ok(())
    }
}

impl NodeSpec {
    fn validate_values(&self) -> MetricsResult<()> {
        for (what, edges) in [("border", self.border), ("padding", self.padding)] {
            for v in [edges.left, edges.top, edges.right, edges.bottom] {
                if !v.is_finite() || v < 0.0 {
                    return Err(MetricsError::validation(format!(
                        "node '{}': {what} must be finite and >= 0, got {v}",
                        self.name
                    )));
                }
            }
        }
        for (what, v) in [("flex_grow", self.flex_grow), ("flex_shrink", self.flex_shrink)] {
            if !v.is_finite() || v < 0.0 {
                return Err(MetricsError::validation(format!(
                    "node '{}': {what} must be finite and >= 0, got {v}",
                    self.name
                )));
            }
        }
        Ok(())
    }

    pub fn style(&self) -> Style {
        let display: Display = to_engine_display(self.display).into();
        let flex_direction = match self.flex_direction {
            FlexFlow::Row => FlexDirection::Row,
            FlexFlow::Column => FlexDirection::Column,
        };
        Style {
            display,
            flex_direction,
            size: TaffySize {
                width: self.width.into(),
                height: self.height.into(),
            },
            border: self.border.to_taffy(),
            padding: self.padding.to_taffy(),
            flex_grow: self.flex_grow,
            flex_shrink: self.flex_shrink,
            ..Style::default()
        }
    }
}

fn build_node(spec: &NodeSpec, session: &mut LayoutSession) -> MetricsResult<NodeId> {
    let ctx = NodeContext::named(spec.name.clone()).with_direction(spec.direction);
    let node = session.add_node(spec.style(), ctx)?;
    for child in &spec.children {
        let child = build_node(child, session)?;
        session.add_child(node, child)?;
    }
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use taffy::style::Dimension;

    const SMALL: &str = r#"{
        "root": {
            "name": "root",
            "direction": "rtl",
            "width": {"unit": "point", "value": 100.0},
            "height": {"unit": "percent", "value": 50.0},
            "children": [
                {"name": "label", "display": "inline"}
            ]
        }
    }"#;

    #[test]
    fn parses_and_builds_styles() {
        let spec = TreeSpec::from_json(SMALL).unwrap();
        let style = spec.root.style();
        assert_eq!(style.size.width, Dimension::length(100.0));
        assert_eq!(style.size.height, Dimension::percent(0.5));
        assert_eq!(style.flex_shrink, 1.0);
        assert_eq!(spec.root.direction, EngineDirection::Rtl);

        let label = spec.root.children[0].style();
        assert_eq!(label.display, Display::None);
        assert_eq!(label.size.width, Dimension::auto());
    }

    #[test]
    fn rejects_duplicate_names() {
        let s = r#"{"root": {"name": "a", "children": [{"name": "a"}]}}"#;
        let err = TreeSpec::from_json(s).unwrap_err();
        assert!(err.to_string().contains("duplicate node name 'a'"));
    }

    #[test]
    fn rejects_negative_border() {
        let s = r#"{"root": {"name": "a", "border": {"left": -1.0}}}"#;
        let err = TreeSpec::from_json(s).unwrap_err();
        assert!(err.to_string().contains("validation error:"));
    }

    #[test]
    fn unknown_fields_are_serde_errors() {
        let s = r#"{"root": {"name": "a", "colour": "red"}}"#;
        let err = TreeSpec::from_json(s).unwrap_err();
        assert!(err.to_string().contains("serialization error:"));
    }

    #[test]
    fn build_registers_names() {
        let spec = TreeSpec::from_json(SMALL).unwrap();
        let mut session = LayoutSession::new();
        let root = spec.build(&mut session).unwrap();
        assert_eq!(session.root(), Some(root));
        let label = session.node_named("label").unwrap();
        assert_eq!(session.name_of(label), Some("label"));
    }

    #[test]
    fn apply_styles_requires_known_names() {
        let spec = TreeSpec::from_json(SMALL).unwrap();
        let mut session = LayoutSession::new();
        spec.build(&mut session).unwrap();

        let other =
            TreeSpec::from_json(r#"{"root": {"name": "root", "children": [{"name": "ghost"}]}}"#)
                .unwrap();
        let err = other.apply_styles(&mut session).unwrap_err();
        assert!(err.to_string().contains("'ghost'"));
    }

    #[test]
    fn apply_styles_only_dirties_changed_nodes() {
        let spec = TreeSpec::from_json(SMALL).unwrap();
        let mut session = LayoutSession::new();
        spec.build(&mut session).unwrap();

        spec.apply_styles(&mut session).unwrap();
        let root = session.node_named("root").unwrap();
        let label = session.node_named("label").unwrap();
        assert!(!session.is_dirty(root));
        assert!(!session.is_dirty(label));

        let mut changed = spec.clone();
        changed.root.children[0].flex_grow = 2.0;
        changed.apply_styles(&mut session).unwrap();
        assert!(session.is_dirty(label));
        assert!(!session.is_dirty(root));
    }
}
