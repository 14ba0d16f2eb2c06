// glwindow/build.rs
//
//! The `glwindow` build script.

use cfg_aliases::cfg_aliases;

fn main() {
    // Setup aliases for #[cfg] checks
    cfg_aliases! {
        // Platforms
        wgl: { target_os = "windows" },
    }
}
