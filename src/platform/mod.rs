// glwindow/src/platform/mod.rs
//
//! Platform-specific backends.
//!
//! `Platform` is the seam between the bootstrap logic and the native windowing and WGL calls.
//! Everything above it is platform-independent.

use crate::attributes::PixelFormatAttributes;
use crate::error::Error;
use crate::event::EventSink;
use crate::loader::{FunctionLoader, ProcAddressSource};

use euclid::default::Size2D;
use std::ffi::CStr;
use std::os::raw::{c_int, c_void};

#[cfg(wgl)]
pub mod windows;
#[cfg(wgl)]
pub use self::windows::wgl::WglPlatform as DefaultPlatform;

#[cfg(not(wgl))]
pub mod not_implemented;
#[cfg(not(wgl))]
pub use self::not_implemented::UnsupportedPlatform as DefaultPlatform;

/// An opaque reference to an OS window (`HWND`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowHandle(pub *mut c_void);

/// An opaque reference to the drawing surface of a window (`HDC`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceContext(pub *mut c_void);

/// An opaque reference to an OpenGL rendering context (`HGLRC`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderingContext(pub *mut c_void);

/// The 1-based index of a pixel format on a device context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelFormatIndex(pub c_int);

/// The native calls the window binding and the context bootstrapper are made of.
///
/// Every method reports failure through `Error` and never retries.
pub trait Platform {
    type ProcSource: ProcAddressSource;

    /// The function loader backed by this platform's OpenGL library.
    fn function_loader(&self) -> &FunctionLoader<Self::ProcSource>;

    /// Registers a window class, unless one with this name already exists.
    fn register_window_class(&self, class_name: &CStr) -> Result<(), Error>;
    /// Returns the outer size a window needs for its client area to be `client_size`.
    fn window_size_for_client_size(&self, client_size: Size2D<i32>) -> Result<Size2D<i32>, Error>;
    /// Creates a hidden overlapped window.
    fn create_window(&self, class_name: &CStr, title: &CStr, size: Size2D<i32>)
                     -> Result<WindowHandle, Error>;
    fn show_window(&self, window: WindowHandle);
    fn destroy_window(&self, window: WindowHandle);
    fn is_window_visible(&self, window: WindowHandle) -> bool;
    fn client_size(&self, window: WindowHandle) -> Result<Size2D<i32>, Error>;
    /// Removes, translates and dispatches every pending message of `window` without blocking.
    ///
    /// Returns the number of messages dispatched.
    fn pump_messages(&self, window: WindowHandle, sink: &mut dyn EventSink) -> usize;

    fn get_dc(&self, window: WindowHandle) -> Result<DeviceContext, Error>;
    fn release_dc(&self, window: WindowHandle, dc: DeviceContext);
    /// Selects a pixel format through the legacy, non-extended chooser.
    fn choose_pixel_format(&self, dc: DeviceContext, attributes: &PixelFormatAttributes)
                           -> Result<PixelFormatIndex, Error>;
    /// Describes a pixel format and applies it. A device context only takes one pixel format
    /// over its whole lifetime.
    fn set_pixel_format(&self, dc: DeviceContext, pixel_format: PixelFormatIndex)
                        -> Result<(), Error>;
    /// Creates a basic, unversioned rendering context.
    fn create_context(&self, dc: DeviceContext) -> Result<RenderingContext, Error>;
    fn delete_context(&self, context: RenderingContext) -> Result<(), Error>;
    fn make_current(&self, dc: DeviceContext, context: RenderingContext) -> Result<(), Error>;
    fn make_no_context_current(&self) -> Result<(), Error>;
    fn current_context(&self) -> Option<RenderingContext>;
    fn swap_buffers(&self, dc: DeviceContext) -> Result<(), Error>;
}
