// glwindow/src/loader.rs
//
//! OpenGL and WGL function lookup.

use crate::error::Error;

use std::ffi::CStr;
use std::os::raw::c_void;
use std::ptr::NonNull;

/// The two places a function address can come from.
pub trait ProcAddressSource {
    /// Looks the name up through the current context (`wglGetProcAddress`).
    fn context_proc_address(&self, name: &CStr) -> *const c_void;
    /// Looks the name up in the system OpenGL library (`GetProcAddress` on `opengl32.dll`).
    fn library_proc_address(&self, name: &CStr) -> *const c_void;
}

/// A function pointer type that can be resolved by name.
pub trait ExtensionFunction: Copy {
    const NAME: &'static CStr;

    /// # Safety
    ///
    /// `address` must point to a function with this type's signature.
    unsafe fn from_address(address: NonNull<c_void>) -> Self;
}

/// Resolves functions through the context first and the library second.
pub struct FunctionLoader<S> {
    source: S,
}

impl<S> FunctionLoader<S> where S: ProcAddressSource {
    #[inline]
    pub fn new(source: S) -> FunctionLoader<S> {
        FunctionLoader { source }
    }

    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the address of `name`, or null if neither lookup finds it.
    pub fn address(&self, name: &CStr) -> *const c_void {
        let address = self.source.context_proc_address(name);
        if !address.is_null() {
            return address;
        }
        self.source.library_proc_address(name)
    }

    /// Resolves a typed function, reporting it if it can't be found.
    pub fn resolve<F>(&self) -> Result<F, Error> where F: ExtensionFunction {
        match NonNull::new(self.address(F::NAME) as *mut c_void) {
            Some(address) => unsafe { Ok(F::from_address(address)) },
            None => {
                error!("Failed to load OpenGL function: {}", F::NAME.to_string_lossy());
                Err(Error::GLFunctionNotFound)
            }
        }
    }
}

/// `wglGetProcAddress` signals failure with a few small integers as well as null.
#[cfg_attr(not(wgl), allow(dead_code))]
#[inline]
pub(crate) fn is_wgl_failure_address(address: isize) -> bool {
    matches!(address, -1 | 0 | 1 | 2 | 3)
}
