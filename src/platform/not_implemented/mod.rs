// glwindow/src/platform/not_implemented/mod.rs
//
//! A stub implementation to allow this crate to compile on platforms without WGL.
//!
//! Calling any methods on these objects will return errors.

use crate::attributes::PixelFormatAttributes;
use crate::error::Error;
use crate::event::EventSink;
use crate::loader::{FunctionLoader, ProcAddressSource};
use crate::platform::{DeviceContext, PixelFormatIndex, Platform, RenderingContext, WindowHandle};

use euclid::default::Size2D;
use std::ffi::CStr;
use std::os::raw::c_void;
use std::ptr;

/// A source that never finds anything.
pub struct NoProcSource;

impl ProcAddressSource for NoProcSource {
    fn context_proc_address(&self, _: &CStr) -> *const c_void {
        ptr::null()
    }

    fn library_proc_address(&self, _: &CStr) -> *const c_void {
        ptr::null()
    }
}

pub struct UnsupportedPlatform {
    loader: FunctionLoader<NoProcSource>,
}

impl UnsupportedPlatform {
    pub fn new() -> Result<UnsupportedPlatform, Error> {
        Ok(UnsupportedPlatform { loader: FunctionLoader::new(NoProcSource) })
    }
}

impl Platform for UnsupportedPlatform {
    type ProcSource = NoProcSource;

    fn function_loader(&self) -> &FunctionLoader<NoProcSource> {
        &self.loader
    }

    fn register_window_class(&self, _: &CStr) -> Result<(), Error> {
        Err(Error::UnsupportedOnThisPlatform)
    }

    fn window_size_for_client_size(&self, _: Size2D<i32>) -> Result<Size2D<i32>, Error> {
        Err(Error::UnsupportedOnThisPlatform)
    }

    fn create_window(&self, _: &CStr, _: &CStr, _: Size2D<i32>) -> Result<WindowHandle, Error> {
        Err(Error::UnsupportedOnThisPlatform)
    }

    fn show_window(&self, _: WindowHandle) {}

    fn destroy_window(&self, _: WindowHandle) {}

    fn is_window_visible(&self, _: WindowHandle) -> bool {
        false
    }

    fn client_size(&self, _: WindowHandle) -> Result<Size2D<i32>, Error> {
        Err(Error::UnsupportedOnThisPlatform)
    }

    fn pump_messages(&self, _: WindowHandle, _: &mut dyn EventSink) -> usize {
        0
    }

    fn get_dc(&self, _: WindowHandle) -> Result<DeviceContext, Error> {
        Err(Error::UnsupportedOnThisPlatform)
    }

    fn release_dc(&self, _: WindowHandle, _: DeviceContext) {}

    fn choose_pixel_format(&self, _: DeviceContext, _: &PixelFormatAttributes)
                           -> Result<PixelFormatIndex, Error> {
        Err(Error::UnsupportedOnThisPlatform)
    }

    fn set_pixel_format(&self, _: DeviceContext, _: PixelFormatIndex) -> Result<(), Error> {
        Err(Error::UnsupportedOnThisPlatform)
    }

    fn create_context(&self, _: DeviceContext) -> Result<RenderingContext, Error> {
        Err(Error::UnsupportedOnThisPlatform)
    }

    fn delete_context(&self, _: RenderingContext) -> Result<(), Error> {
        Err(Error::UnsupportedOnThisPlatform)
    }

    fn make_current(&self, _: DeviceContext, _: RenderingContext) -> Result<(), Error> {
        Err(Error::UnsupportedOnThisPlatform)
    }

    fn make_no_context_current(&self) -> Result<(), Error> {
        Err(Error::UnsupportedOnThisPlatform)
    }

    fn current_context(&self) -> Option<RenderingContext> {
        None
    }

    fn swap_buffers(&self, _: DeviceContext) -> Result<(), Error> {
        Err(Error::UnsupportedOnThisPlatform)
    }
}
