// glwindow/src/platform/windows/wgl/context.rs
//
//! Pixel formats and basic WGL contexts.

use crate::attributes::{PixelFormatAttributes, PixelFormatFlags};
use crate::error::{Error, WindowingApiError};
use crate::platform::{DeviceContext, PixelFormatIndex, RenderingContext};

use std::mem;
use std::os::raw::c_void;
use std::ptr;
use winapi::shared::minwindef::{DWORD, FALSE, UINT, WORD};
use winapi::shared::windef::{HDC, HGLRC};
use winapi::um::errhandlingapi::GetLastError;
use winapi::um::wingdi::{self, PFD_DOUBLEBUFFER, PFD_DRAW_TO_WINDOW, PFD_MAIN_PLANE};
use winapi::um::wingdi::{PFD_SUPPORT_OPENGL, PFD_SWAP_COPY, PFD_TYPE_RGBA, PIXELFORMATDESCRIPTOR};
use winapi::um::wingdi::{wglCreateContext, wglDeleteContext, wglGetCurrentContext, wglMakeCurrent};

#[inline]
fn hdc(dc: DeviceContext) -> HDC {
    dc.0 as HDC
}

#[inline]
fn last_error() -> WindowingApiError {
    unsafe { WindowingApiError::from_win32(GetLastError()) }
}

fn pixel_format_flags(flags: PixelFormatFlags) -> DWORD {
    let mut pfd_flags = 0;
    if flags.contains(PixelFormatFlags::DRAW_TO_WINDOW) {
        pfd_flags |= PFD_DRAW_TO_WINDOW;
    }
    if flags.contains(PixelFormatFlags::SUPPORT_OPENGL) {
        pfd_flags |= PFD_SUPPORT_OPENGL;
    }
    if flags.contains(PixelFormatFlags::DOUBLE_BUFFER) {
        pfd_flags |= PFD_DOUBLEBUFFER;
    }
    if flags.contains(PixelFormatFlags::SWAP_COPY) {
        pfd_flags |= PFD_SWAP_COPY;
    }
    pfd_flags
}

pub(crate) fn choose_pixel_format(dc: DeviceContext, attributes: &PixelFormatAttributes)
                                  -> Result<PixelFormatIndex, Error> {
    unsafe {
        let mut pixel_format_descriptor: PIXELFORMATDESCRIPTOR = mem::zeroed();
        pixel_format_descriptor.nSize = mem::size_of::<PIXELFORMATDESCRIPTOR>() as WORD;
        pixel_format_descriptor.nVersion = 1;
        pixel_format_descriptor.dwFlags = pixel_format_flags(attributes.flags);
        pixel_format_descriptor.iPixelType = PFD_TYPE_RGBA;
        pixel_format_descriptor.cColorBits = attributes.color_bits;
        pixel_format_descriptor.cAlphaBits = attributes.alpha_bits;
        pixel_format_descriptor.cDepthBits = attributes.depth_bits;
        pixel_format_descriptor.iLayerType = PFD_MAIN_PLANE;

        let pixel_format = wingdi::ChoosePixelFormat(hdc(dc), &pixel_format_descriptor);
        if pixel_format == 0 {
            return Err(Error::NoPixelFormatFound);
        }
        Ok(PixelFormatIndex(pixel_format))
    }
}

pub(crate) fn set_pixel_format(dc: DeviceContext, pixel_format: PixelFormatIndex)
                               -> Result<(), Error> {
    unsafe {
        let mut pixel_format_descriptor = mem::zeroed();
        let pixel_format_count =
            wingdi::DescribePixelFormat(hdc(dc),
                                        pixel_format.0,
                                        mem::size_of::<PIXELFORMATDESCRIPTOR>() as UINT,
                                        &mut pixel_format_descriptor);
        if pixel_format_count == 0 {
            return Err(Error::PixelFormatSelectionFailed(last_error()));
        }
        if wingdi::SetPixelFormat(hdc(dc), pixel_format.0, &pixel_format_descriptor) == FALSE {
            return Err(Error::PixelFormatSelectionFailed(last_error()));
        }
        Ok(())
    }
}

pub(crate) fn create_context(dc: DeviceContext) -> Result<RenderingContext, Error> {
    unsafe {
        let glrc = wglCreateContext(hdc(dc));
        if glrc.is_null() {
            return Err(Error::ContextCreationFailed(last_error()));
        }
        Ok(RenderingContext(glrc as *mut c_void))
    }
}

pub(crate) fn delete_context(context: RenderingContext) -> Result<(), Error> {
    unsafe {
        if wglDeleteContext(context.0 as HGLRC) == FALSE {
            return Err(Error::ContextDestructionFailed(last_error()));
        }
        Ok(())
    }
}

pub(crate) fn make_current(dc: DeviceContext, context: RenderingContext) -> Result<(), Error> {
    unsafe {
        if wglMakeCurrent(hdc(dc), context.0 as HGLRC) == FALSE {
            return Err(Error::MakeCurrentFailed(last_error()));
        }
        Ok(())
    }
}

pub(crate) fn make_no_context_current() -> Result<(), Error> {
    unsafe {
        if wglMakeCurrent(ptr::null_mut(), ptr::null_mut()) == FALSE {
            return Err(Error::MakeCurrentFailed(last_error()));
        }
        Ok(())
    }
}

pub(crate) fn current_context() -> Option<RenderingContext> {
    unsafe {
        let glrc = wglGetCurrentContext();
        if glrc.is_null() {
            None
        } else {
            Some(RenderingContext(glrc as *mut c_void))
        }
    }
}

pub(crate) fn swap_buffers(dc: DeviceContext) -> Result<(), Error> {
    unsafe {
        if wingdi::SwapBuffers(hdc(dc)) == FALSE {
            return Err(Error::PresentFailed(last_error()));
        }
        Ok(())
    }
}
