//! Writes the gamepad icon set to `icons/`

use std::process::ExitCode;

fn main() -> ExitCode {
    icongen::generate(&icongen_icons::GAMEPAD)
}
