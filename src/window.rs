// glwindow/src/window.rs
//
//! The OS window and the routing of its messages.

use crate::attributes::WindowAttributes;
use crate::error::{report, Error};
use crate::event::{EventSink, MessageResult, WindowMessage};
use crate::platform::{DeviceContext, Platform, WindowHandle};

use euclid::default::Size2D;
use std::ffi::CString;

/// What a window is created for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WindowKind {
    /// A throwaway window that only lends its device context to capability discovery. It is
    /// created at the requested outer size and never shown.
    Bootstrap,
    /// The application window. Its outer size is grown so that the client area matches the
    /// requested size.
    Application,
}

/// An OS window, destroyed when dropped.
pub struct Window<'a, P> where P: Platform {
    platform: &'a P,
    handle: WindowHandle,
    kind: WindowKind,
}

impl<'a, P> Window<'a, P> where P: Platform {
    /// Registers the window class named after the title and creates a hidden window.
    ///
    /// A failed class registration is not rolled back.
    pub fn new(platform: &'a P, attributes: &WindowAttributes, kind: WindowKind)
               -> Result<Window<'a, P>, Error> {
        attributes.validate()?;
        let title = CString::new(attributes.title.as_str())
            .map_err(|_| Error::InvalidWindowAttributes)?;

        platform
            .register_window_class(&title)
            .map_err(report("Failed to register window class"))?;

        let size = match kind {
            WindowKind::Bootstrap => attributes.size,
            WindowKind::Application => platform
                .window_size_for_client_size(attributes.size)
                .map_err(report("Failed to compute the window border size"))?,
        };

        let handle = platform
            .create_window(&title, &title, size)
            .map_err(report("Failed to create window"))?;
        debug!("created {:?} window {:?} ({}x{})", kind, handle, size.width, size.height);

        Ok(Window { platform, handle, kind })
    }

    #[inline]
    pub fn handle(&self) -> WindowHandle {
        self.handle
    }

    #[inline]
    pub fn kind(&self) -> WindowKind {
        self.kind
    }

    #[inline]
    pub fn show(&self) {
        self.platform.show_window(self.handle)
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.platform.is_window_visible(self.handle)
    }

    #[inline]
    pub fn client_size(&self) -> Result<Size2D<i32>, Error> {
        self.platform.client_size(self.handle)
    }

    /// Dispatches every pending message to `sink` and returns how many there were.
    ///
    /// Never blocks. Call this regularly so the OS doesn't consider the application hung.
    #[inline]
    pub fn pump_events(&self, sink: &mut dyn EventSink) -> usize {
        self.platform.pump_messages(self.handle, sink)
    }

    pub(crate) fn get_dc(&self) -> Result<DCGuard<'a, P>, Error> {
        let dc = self
            .platform
            .get_dc(self.handle)
            .map_err(report("Failed to get HDC"))?;
        Ok(DCGuard::new(self.platform, self.handle, dc))
    }
}

impl<'a, P> Drop for Window<'a, P> where P: Platform {
    fn drop(&mut self) {
        debug!("destroying {:?} window {:?}", self.kind, self.handle);
        self.platform.destroy_window(self.handle);
    }
}

#[cfg(all(wgl, feature = "raw-window-handle-06"))]
impl<'a, P> rwh_06::HasWindowHandle for Window<'a, P> where P: Platform {
    fn window_handle(&self) -> Result<rwh_06::WindowHandle<'_>, rwh_06::HandleError> {
        use std::num::NonZeroIsize;

        let hwnd = NonZeroIsize::new(self.handle.0 as isize)
            .ok_or(rwh_06::HandleError::Unavailable)?;
        let raw = rwh_06::RawWindowHandle::Win32(rwh_06::Win32WindowHandle::new(hwnd));
        unsafe { Ok(rwh_06::WindowHandle::borrow_raw(raw)) }
    }
}

/// A device context obtained from a window, released when dropped.
pub(crate) struct DCGuard<'a, P> where P: Platform {
    platform: &'a P,
    window: WindowHandle,
    dc: DeviceContext,
}

impl<'a, P> DCGuard<'a, P> where P: Platform {
    #[inline]
    pub(crate) fn new(platform: &'a P, window: WindowHandle, dc: DeviceContext) -> DCGuard<'a, P> {
        DCGuard { platform, window, dc }
    }

    #[inline]
    pub(crate) fn dc(&self) -> DeviceContext {
        self.dc
    }
}

impl<'a, P> Drop for DCGuard<'a, P> where P: Platform {
    #[inline]
    fn drop(&mut self) {
        self.platform.release_dc(self.window, self.dc);
    }
}

/// Decides what happens to a message delivered to one of our windows.
///
/// A close request is handed to the sink and consumed, so the default procedure never destroys
/// the window behind the application's back. Everything else gets default processing.
pub fn route_message(message: WindowMessage, sink: &mut dyn EventSink) -> MessageResult {
    match message {
        WindowMessage::Close => {
            sink.on_close();
            MessageResult::Handled(0)
        }
        WindowMessage::Other { .. } => MessageResult::Default,
    }
}

#[cfg(test)]
mod tests {
    use super::route_message;
    use crate::event::{AppState, EventSink, MessageResult, WindowMessage};

    #[derive(Default)]
    struct CountingSink {
        closes: usize,
    }

    impl EventSink for CountingSink {
        fn on_close(&mut self) {
            self.closes += 1;
        }
    }

    #[test]
    fn test_close_is_consumed() {
        let mut sink = CountingSink::default();
        assert_eq!(route_message(WindowMessage::Close, &mut sink), MessageResult::Handled(0));
        assert_eq!(sink.closes, 1);
    }

    #[test]
    fn test_other_messages_get_default_processing() {
        let mut sink = CountingSink::default();
        // WM_PAINT, WM_SIZE, WM_DESTROY, WM_QUIT.
        for message in [0x000f, 0x0005, 0x0002, 0x0012] {
            let message = WindowMessage::Other { message, wparam: 0, lparam: 0 };
            assert_eq!(route_message(message, &mut sink), MessageResult::Default);
        }
        assert_eq!(sink.closes, 0);
    }

    #[test]
    fn test_close_clears_running_flag() {
        let mut state = AppState::new();
        assert!(state.is_running());
        route_message(WindowMessage::Other { message: 0x000f, wparam: 0, lparam: 0 }, &mut state);
        assert!(state.is_running());
        route_message(WindowMessage::Close, &mut state);
        assert!(!state.is_running());
    }
}
