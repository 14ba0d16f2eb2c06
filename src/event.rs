// glwindow/src/event.rs
//
//! Window messages and the application state they act on.

/// A message delivered to a window procedure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WindowMessage {
    /// The user asked to close the window (`WM_CLOSE`).
    Close,
    /// Anything else; forwarded to the default window procedure untouched.
    Other { message: u32, wparam: usize, lparam: isize },
}

/// What the window procedure should return for a message.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MessageResult {
    /// The message was consumed; return this value without default processing.
    Handled(isize),
    /// Let the default window procedure handle the message.
    Default,
}

/// Receives the window events the application cares about.
pub trait EventSink {
    /// Called when the user asks to close the window.
    fn on_close(&mut self);
}

/// The state the frame loop runs on.
#[derive(Debug)]
pub struct AppState {
    running: bool,
}

impl Default for AppState {
    fn default() -> AppState {
        AppState { running: true }
    }
}

impl AppState {
    #[inline]
    pub fn new() -> AppState {
        AppState::default()
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl EventSink for AppState {
    fn on_close(&mut self) {
        debug!("close requested");
        self.running = false;
    }
}
