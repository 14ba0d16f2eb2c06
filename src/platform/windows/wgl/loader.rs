// glwindow/src/platform/windows/wgl/loader.rs
//
//! `wglGetProcAddress` with `opengl32.dll` as the fallback.

use crate::error::Error;
use crate::loader::{self, ProcAddressSource};

use std::ffi::CStr;
use std::os::raw::{c_char, c_void};
use std::ptr;
use winapi::shared::minwindef::HMODULE;
use winapi::um::libloaderapi;
use winapi::um::wingdi::wglGetProcAddress;

static OPENGL_LIBRARY_NAME: &[u8] = b"opengl32.dll\0";

/// A handle to the system OpenGL library.
///
/// Loaded once when the platform is created and never unloaded; OpenGL 1.1 entry points only
/// live here.
pub struct GLLibrary {
    module: HMODULE,
}

impl GLLibrary {
    pub fn open() -> Result<GLLibrary, Error> {
        unsafe {
            let module = libloaderapi::LoadLibraryA(OPENGL_LIBRARY_NAME.as_ptr() as *const c_char);
            if module.is_null() {
                error!("opengl32.dll not found!");
                return Err(Error::NoGLLibraryFound);
            }
            debug!("opengl32.dll LOADED!");
            Ok(GLLibrary { module })
        }
    }

    pub fn symbol(&self, name: &CStr) -> *const c_void {
        unsafe { libloaderapi::GetProcAddress(self.module, name.as_ptr()) as *const c_void }
    }
}

pub struct WglProcSource {
    library: GLLibrary,
}

impl WglProcSource {
    #[inline]
    pub fn new(library: GLLibrary) -> WglProcSource {
        WglProcSource { library }
    }
}

impl ProcAddressSource for WglProcSource {
    fn context_proc_address(&self, name: &CStr) -> *const c_void {
        unsafe {
            let address = wglGetProcAddress(name.as_ptr()) as isize;
            if loader::is_wgl_failure_address(address) {
                ptr::null()
            } else {
                address as *const c_void
            }
        }
    }

    #[inline]
    fn library_proc_address(&self, name: &CStr) -> *const c_void {
        self.library.symbol(name)
    }
}
