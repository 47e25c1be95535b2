use painting::Canvas;

use crate::gamepad::render_gamepad;
use crate::logo::{render_logo_a, render_logo_b};

/// A renderer paired with the message printed once a batch of it is written
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    pub name: &'static str,
    pub render: fn(u32) -> Canvas,
    pub summary: &'static str,
}

/// Gamepad glyph
pub const GAMEPAD: IconSet = IconSet {
    name: "gamepad",
    render: render_gamepad,
    summary: "All gamepad icons generated successfully!",
};

/// X logo, stroke variant (the one the `x-icons` binary writes)
pub const X_LOGO: IconSet = IconSet {
    name: "x-logo",
    render: render_logo_b,
    summary: "All icons generated successfully!",
};

/// X logo, block variant
pub const X_LOGO_BLOCK: IconSet = IconSet {
    name: "x-logo-block",
    render: render_logo_a,
    summary: "All icons generated successfully!",
};
