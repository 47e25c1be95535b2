//! Icongen icon renderers
//!
//! Each renderer is a pure function of the icon size returning a
//! [`painting::Canvas`]; [`batch`] writes a renderer's output for every
//! configured size.

pub mod batch;
pub mod error;
pub mod gamepad;
pub mod icon_set;
pub mod logo;

pub use batch::{created_line, render_sizes, run};
pub use error::BatchError;
pub use gamepad::{GamepadLayout, render_gamepad};
pub use icon_set::{GAMEPAD, IconSet, X_LOGO, X_LOGO_BLOCK};
pub use logo::{BlockLayout, StrokeLayout, render_logo_a, render_logo_b};
