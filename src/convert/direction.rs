use serde::{Deserialize, Serialize};

use crate::engine::EngineDirection;

/// Graphics-side layout direction. Always binary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl From<LayoutDirection> for EngineDirection {
    fn from(value: LayoutDirection) -> Self {
        match value {
            LayoutDirection::LeftToRight => EngineDirection::Ltr,
            LayoutDirection::RightToLeft => EngineDirection::Rtl,
        }
    }
}

/// `Inherit` becomes `LeftToRight`; propagating inheritance is the engine's job.
impl From<EngineDirection> for LayoutDirection {
    fn from(value: EngineDirection) -> Self {
        match value {
            EngineDirection::Ltr | EngineDirection::Inherit => LayoutDirection::LeftToRight,
            EngineDirection::Rtl => LayoutDirection::RightToLeft,
        }
    }
}

pub fn to_engine_direction(direction: LayoutDirection) -> EngineDirection {
    direction.into()
}

pub fn to_ui_direction(direction: EngineDirection) -> LayoutDirection {
    direction.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_directions_map_both_ways() {
        assert_eq!(
            to_engine_direction(LayoutDirection::LeftToRight),
            EngineDirection::Ltr
        );
        assert_eq!(
            to_engine_direction(LayoutDirection::RightToLeft),
            EngineDirection::Rtl
        );
        assert_eq!(
            to_ui_direction(EngineDirection::Rtl),
            LayoutDirection::RightToLeft
        );
        assert_eq!(
            to_ui_direction(EngineDirection::Ltr),
            LayoutDirection::LeftToRight
        );
    }

    #[test]
    fn inherit_is_left_to_right_even_under_rtl_owner() {
        assert_eq!(
            to_ui_direction(EngineDirection::Inherit),
            LayoutDirection::LeftToRight
        );
        // Resolving first is what carries the owner's direction.
        assert_eq!(
            to_ui_direction(EngineDirection::Inherit.resolve(EngineDirection::Rtl)),
            LayoutDirection::RightToLeft
        );
    }
}
