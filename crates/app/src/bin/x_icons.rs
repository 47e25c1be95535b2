//! Writes the X logo icon set (stroke variant) to `icons/`

use std::process::ExitCode;

fn main() -> ExitCode {
    icongen::generate(&icongen_icons::X_LOGO)
}
