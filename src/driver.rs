// glwindow/src/driver.rs
//
//! The frame loop.

use crate::event::AppState;
use crate::platform::Platform;
use crate::window::Window;

/// Pumps a window's events once per frame until the application stops running.
pub struct FrameDriver<'w, 'a, P> where P: Platform {
    window: &'w Window<'a, P>,
}

impl<'w, 'a, P> FrameDriver<'w, 'a, P> where P: Platform {
    #[inline]
    pub fn new(window: &'w Window<'a, P>) -> FrameDriver<'w, 'a, P> {
        FrameDriver { window }
    }

    /// Runs until a close request clears the running flag. Returns the process exit status.
    pub fn run(&self, state: &mut AppState) -> i32 {
        info!("entering frame loop");
        let mut frames: u64 = 0;
        while state.is_running() {
            let messages = self.window.pump_events(state);
            if messages > 0 {
                trace!("frame {}: dispatched {} messages", frames, messages);
            }
            frames += 1;
        }
        info!("leaving frame loop after {} frames", frames);
        0
    }
}
