use serde::{Deserialize, Serialize};

use crate::engine::EngineDisplay;

/// Graphics-side display type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayType {
    None,
    #[default]
    Flex,
    /// Placeholder with no engine behavior; becomes `None` toward the engine.
    Inline,
}

impl From<DisplayType> for EngineDisplay {
    fn from(value: DisplayType) -> Self {
        match value {
            DisplayType::Flex => EngineDisplay::Flex,
            DisplayType::None => EngineDisplay::None,
            DisplayType::Inline => {
                tracing::trace!("inline display is unsupported by the engine, using none");
                EngineDisplay::None
            }
        }
    }
}

impl From<EngineDisplay> for DisplayType {
    fn from(value: EngineDisplay) -> Self {
        match value {
            EngineDisplay::Flex => DisplayType::Flex,
            EngineDisplay::None => DisplayType::None,
        }
    }
}

pub fn to_engine_display(display: DisplayType) -> EngineDisplay {
    display.into()
}

pub fn to_display_type(display: EngineDisplay) -> DisplayType {
    display.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_collapses_to_none() {
        assert_eq!(to_engine_display(DisplayType::Inline), EngineDisplay::None);
        assert_eq!(
            to_display_type(to_engine_display(DisplayType::Inline)),
            DisplayType::None
        );
    }

    #[test]
    fn flex_and_none_are_lossless() {
        for d in [DisplayType::Flex, DisplayType::None] {
            assert_eq!(to_display_type(to_engine_display(d)), d);
        }
        assert_eq!(to_display_type(EngineDisplay::None), DisplayType::None);
        assert_eq!(to_display_type(EngineDisplay::Flex), DisplayType::Flex);
    }
}
