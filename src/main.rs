// glwindow/src/main.rs
//
//! Opens an 800x600 window with an OpenGL 4.5 core context and runs until it is closed.

#[macro_use]
extern crate log;

use glwindow::{create_window, AppState, DefaultPlatform, Error, FrameDriver};
use std::process;

const WINDOW_WIDTH: i32 = 800;
const WINDOW_HEIGHT: i32 = 600;
const WINDOW_TITLE: &str = "Window";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let exit_code = match run() {
        Ok(exit_code) => exit_code,
        Err(err) => {
            error!("startup failed: {}", err);
            1
        }
    };
    process::exit(exit_code);
}

fn run() -> Result<i32, Error> {
    let platform = DefaultPlatform::new()?;
    let gl_window = create_window(&platform, WINDOW_WIDTH, WINDOW_HEIGHT, WINDOW_TITLE)?;

    let mut state = AppState::new();
    Ok(FrameDriver::new(gl_window.window()).run(&mut state))
}
