//! Conversions between engine and graphics conventions.

pub mod direction;
pub mod display;
pub mod float;

pub use direction::{LayoutDirection, to_engine_direction, to_ui_direction};
pub use display::{DisplayType, to_display_type, to_engine_display};
pub use float::{
    ENGINE_UNDEFINED, GRAPHICS_UNDEFINED, Length, resolve_length, resolve_to_float,
    to_engine_float, to_graphics_float,
};
