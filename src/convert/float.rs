//! Float conversion between the engine (`f32`) and graphics (`f64`) domains.
//!
//! Each domain spells "no concrete length" differently: the engine uses a finite magic value,
//! graphics uses positive infinity. The raw sentinels are only compared in this module; everything
//! else goes through [`Length`].

use serde::{Deserialize, Serialize};

use crate::engine::EngineValue;

/// Engine sentinel for "undefined/auto". A finite number, not NaN.
pub const ENGINE_UNDEFINED: f32 = 10e20;

/// Graphics marker for "undefined/auto" (unbounded size).
pub const GRAPHICS_UNDEFINED: f64 = f64::INFINITY;

fn is_engine_undefined(value: f32) -> bool {
    value == ENGINE_UNDEFINED
}

/// NaN counts as undefined on the graphics side so it never reaches the engine.
fn is_graphics_undefined(value: f64) -> bool {
    value == GRAPHICS_UNDEFINED || value.is_nan()
}

/// Narrows a graphics float into the engine domain.
///
/// Finite values beyond `f32::MAX` narrow to `f32::INFINITY`, which widens back to
/// [`GRAPHICS_UNDEFINED`]: such a length does not survive a round trip as a concrete value.
pub fn to_engine_float(value: f64) -> f32 {
    if is_graphics_undefined(value) {
        return ENGINE_UNDEFINED;
    }
    value as f32
}

/// Widens an engine float into the graphics domain.
pub fn to_graphics_float(value: f32) -> f64 {
    if is_engine_undefined(value) {
        return GRAPHICS_UNDEFINED;
    }
    f64::from(value)
}

/// A graphics-domain length that is either concrete or undefined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Length {
    #[default]
    Undefined,
    Points(f64),
}

impl Length {
    pub fn from_graphics(value: f64) -> Self {
        if is_graphics_undefined(value) {
            Length::Undefined
        } else {
            Length::Points(value)
        }
    }

    pub fn from_engine(value: f32) -> Self {
        Self::from_graphics(to_graphics_float(value))
    }

    pub fn to_graphics(self) -> f64 {
        match self {
            Length::Undefined => GRAPHICS_UNDEFINED,
            Length::Points(v) => v,
        }
    }

    pub fn to_engine(self) -> f32 {
        to_engine_float(self.to_graphics())
    }

    pub fn is_undefined(self) -> bool {
        matches!(self, Length::Undefined)
    }

    pub fn points(self) -> Option<f64> {
        match self {
            Length::Undefined => None,
            Length::Points(v) => Some(v),
        }
    }
}

impl From<Length> for Option<f64> {
    fn from(value: Length) -> Self {
        value.points()
    }
}

/// Resolves a compound engine length against `base`, returning a graphics float.
///
/// Percentages are taken of `base`; an undefined `base` yields the undefined marker, as do the
/// `Undefined` and `Auto` units.
pub fn resolve_to_float(value: EngineValue, base: f64) -> f64 {
    resolve_length(value, base).to_graphics()
}

pub fn resolve_length(value: EngineValue, base: f64) -> Length {
    match value {
        EngineValue::Undefined | EngineValue::Auto => Length::Undefined,
        EngineValue::Point(v) => Length::from_engine(v),
        EngineValue::Percent(p) => match (Length::from_engine(p), Length::from_graphics(base)) {
            (Length::Points(p), Length::Points(base)) => Length::Points((p / 100.0) * base),
            _ => Length::Undefined,
        },
    }
}
