use crate::types::Color;

/// Fully transparent black, the RGBA canvas default.
pub const TRANSPARENT: Color = [0, 0, 0, 0];

pub const BLACK: Color = [0, 0, 0, 255];
pub const WHITE: Color = [255, 255, 255, 255];

/// Gamepad shell.
pub const BODY_GRAY: Color = [50, 50, 50, 255];
/// Analog sticks.
pub const STICK_GRAY: Color = [100, 100, 100, 255];
/// D-pad cross.
pub const DPAD_GRAY: Color = [80, 80, 80, 255];

pub const BUTTON_GREEN: Color = [100, 200, 100, 255];
pub const BUTTON_BLUE: Color = [100, 100, 200, 255];
pub const BUTTON_RED: Color = [200, 100, 100, 255];
pub const BUTTON_YELLOW: Color = [200, 200, 100, 255];
