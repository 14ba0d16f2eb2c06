// glwindow/src/platform/windows/wgl/mod.rs
//
//! A backend using the native Windows OpenGL WGL API.

pub mod context;
pub mod loader;
pub mod window;

use self::loader::{GLLibrary, WglProcSource};
use crate::attributes::PixelFormatAttributes;
use crate::error::Error;
use crate::event::EventSink;
use crate::loader::FunctionLoader;
use crate::platform::{DeviceContext, PixelFormatIndex, Platform, RenderingContext, WindowHandle};

use euclid::default::Size2D;
use std::ffi::CStr;

/// The Win32 window system and WGL, with `opengl32.dll` loaded for function lookups.
pub struct WglPlatform {
    loader: FunctionLoader<WglProcSource>,
}

impl WglPlatform {
    /// Loads `opengl32.dll`. The library stays loaded for as long as the platform exists.
    pub fn new() -> Result<WglPlatform, Error> {
        let library = GLLibrary::open()?;
        Ok(WglPlatform { loader: FunctionLoader::new(WglProcSource::new(library)) })
    }
}

impl Platform for WglPlatform {
    type ProcSource = WglProcSource;

    #[inline]
    fn function_loader(&self) -> &FunctionLoader<WglProcSource> {
        &self.loader
    }

    fn register_window_class(&self, class_name: &CStr) -> Result<(), Error> {
        window::register_window_class(class_name)
    }

    fn window_size_for_client_size(&self, client_size: Size2D<i32>) -> Result<Size2D<i32>, Error> {
        window::window_size_for_client_size(client_size)
    }

    fn create_window(&self, class_name: &CStr, title: &CStr, size: Size2D<i32>)
                     -> Result<WindowHandle, Error> {
        window::create_window(class_name, title, size)
    }

    fn show_window(&self, window: WindowHandle) {
        window::show_window(window)
    }

    fn destroy_window(&self, window: WindowHandle) {
        window::destroy_window(window)
    }

    fn is_window_visible(&self, window: WindowHandle) -> bool {
        window::is_window_visible(window)
    }

    fn client_size(&self, window: WindowHandle) -> Result<Size2D<i32>, Error> {
        window::client_size(window)
    }

    fn pump_messages(&self, window: WindowHandle, sink: &mut dyn EventSink) -> usize {
        window::pump_messages(window, sink)
    }

    fn get_dc(&self, window: WindowHandle) -> Result<DeviceContext, Error> {
        window::get_dc(window)
    }

    fn release_dc(&self, window: WindowHandle, dc: DeviceContext) {
        window::release_dc(window, dc)
    }

    fn choose_pixel_format(&self, dc: DeviceContext, attributes: &PixelFormatAttributes)
                           -> Result<PixelFormatIndex, Error> {
        context::choose_pixel_format(dc, attributes)
    }

    fn set_pixel_format(&self, dc: DeviceContext, pixel_format: PixelFormatIndex)
                        -> Result<(), Error> {
        context::set_pixel_format(dc, pixel_format)
    }

    fn create_context(&self, dc: DeviceContext) -> Result<RenderingContext, Error> {
        context::create_context(dc)
    }

    fn delete_context(&self, context: RenderingContext) -> Result<(), Error> {
        context::delete_context(context)
    }

    fn make_current(&self, dc: DeviceContext, context: RenderingContext) -> Result<(), Error> {
        context::make_current(dc, context)
    }

    fn make_no_context_current(&self) -> Result<(), Error> {
        context::make_no_context_current()
    }

    fn current_context(&self) -> Option<RenderingContext> {
        context::current_context()
    }

    fn swap_buffers(&self, dc: DeviceContext) -> Result<(), Error> {
        context::swap_buffers(dc)
    }
}
