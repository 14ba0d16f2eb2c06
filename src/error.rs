// glwindow/src/error.rs
//
//! Various errors that setup methods can produce.

use std::fmt::{self, Display, Formatter};

/// Various errors that setup methods can produce.
#[derive(Debug)]
pub enum Error {
    /// The method failed for a miscellaneous reason.
    Failed,
    /// The platform doesn't support this method.
    UnsupportedOnThisPlatform,
    /// The requested window size or title can't be used.
    InvalidWindowAttributes,
    /// The window class couldn't be registered.
    WindowClassRegistrationFailed(WindowingApiError),
    /// The system couldn't create a window.
    WindowCreationFailed(WindowingApiError),
    /// The drawable surface (device context) of a window couldn't be obtained.
    DeviceContextUnavailable,
    /// Choosing or applying an OpenGL pixel format failed.
    PixelFormatSelectionFailed(WindowingApiError),
    /// The system couldn't choose an OpenGL pixel format.
    NoPixelFormatFound,
    /// The system couldn't create an OpenGL context.
    ContextCreationFailed(WindowingApiError),
    /// The system couldn't destroy the OpenGL context.
    ContextDestructionFailed(WindowingApiError),
    /// The system couldn't make the OpenGL context current or not current.
    MakeCurrentFailed(WindowingApiError),
    /// The system OpenGL library couldn't be located.
    NoGLLibraryFound,
    /// An extension necessary for this library to function isn't supported.
    RequiredExtensionUnavailable,
    /// Looking up an OpenGL function address failed.
    GLFunctionNotFound,
    /// A context query was made while the context wasn't current.
    NoCurrentContext,
    /// Swapping the front and back buffers failed.
    PresentFailed(WindowingApiError),
}

/// Abstraction of the errors that Win32 and WGL return.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WindowingApiError {
    /// Miscellaneous error.
    Failed,
    /// The pixel format index is invalid or was already set on the drawable.
    BadPixelFormat,
    /// A window, device context or rendering context handle is invalid.
    BadHandle,
    /// The system ran out of resources.
    BadAlloc,
    /// One or more argument values are invalid.
    BadParameter,
    /// A window class with this name already exists.
    ClassAlreadyExists,
    /// WGL: The requested OpenGL version is not supported.
    BadVersion,
    /// WGL: The requested OpenGL profile is not supported.
    BadProfile,
}

// Values from `winerror.h` and `WGL_ARB_create_context`.
const ERROR_INVALID_HANDLE: u32 = 6;
const ERROR_INVALID_PARAMETER: u32 = 87;
const ERROR_INVALID_PIXEL_FORMAT: u32 = 2000;
const ERROR_CLASS_ALREADY_EXISTS: u32 = 1410;
const ERROR_NO_SYSTEM_RESOURCES: u32 = 1450;
const ERROR_INVALID_VERSION_ARB: u32 = 0x2095;
const ERROR_INVALID_PROFILE_ARB: u32 = 0x2096;

impl WindowingApiError {
    /// Maps a `GetLastError()` code onto a windowing API error.
    pub fn from_win32(code: u32) -> WindowingApiError {
        // WGL extension errors are reported as HRESULT-style codes with the high word set.
        match code & 0xffff {
            ERROR_INVALID_HANDLE => WindowingApiError::BadHandle,
            ERROR_INVALID_PARAMETER => WindowingApiError::BadParameter,
            ERROR_INVALID_PIXEL_FORMAT => WindowingApiError::BadPixelFormat,
            ERROR_CLASS_ALREADY_EXISTS => WindowingApiError::ClassAlreadyExists,
            ERROR_NO_SYSTEM_RESOURCES => WindowingApiError::BadAlloc,
            ERROR_INVALID_VERSION_ARB => WindowingApiError::BadVersion,
            ERROR_INVALID_PROFILE_ARB => WindowingApiError::BadProfile,
            _ => WindowingApiError::Failed,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Error::Failed => f.write_str("the operation failed"),
            Error::UnsupportedOnThisPlatform => f.write_str("unsupported on this platform"),
            Error::InvalidWindowAttributes => {
                f.write_str("window size must be positive and the title non-empty")
            }
            Error::WindowClassRegistrationFailed(err) => {
                write!(f, "failed to register the window class ({:?})", err)
            }
            Error::WindowCreationFailed(err) => write!(f, "failed to create window ({:?})", err),
            Error::DeviceContextUnavailable => f.write_str("failed to get the window's HDC"),
            Error::PixelFormatSelectionFailed(err) => {
                write!(f, "failed to choose or set the pixel format ({:?})", err)
            }
            Error::NoPixelFormatFound => f.write_str("no matching pixel format"),
            Error::ContextCreationFailed(err) => {
                write!(f, "failed to create the render context ({:?})", err)
            }
            Error::ContextDestructionFailed(err) => {
                write!(f, "failed to delete the render context ({:?})", err)
            }
            Error::MakeCurrentFailed(err) => {
                write!(f, "failed to make the context current ({:?})", err)
            }
            Error::NoGLLibraryFound => f.write_str("opengl32.dll could not be loaded"),
            Error::RequiredExtensionUnavailable => {
                f.write_str("a required WGL extension is unavailable")
            }
            Error::GLFunctionNotFound => f.write_str("failed to load an OpenGL function"),
            Error::NoCurrentContext => f.write_str("the context is not current"),
            Error::PresentFailed(err) => write!(f, "failed to swap buffers ({:?})", err),
        }
    }
}

impl std::error::Error for Error {}

/// Logs a setup failure where it is detected and passes it on.
pub(crate) fn report(what: &'static str) -> impl FnOnce(Error) -> Error {
    move |err| {
        error!("{}: {}", what, err);
        err
    }
}

#[cfg(test)]
mod tests {
    use super::WindowingApiError;

    #[test]
    fn test_win32_error_mapping() {
        assert_eq!(WindowingApiError::from_win32(2000), WindowingApiError::BadPixelFormat);
        assert_eq!(WindowingApiError::from_win32(1410), WindowingApiError::ClassAlreadyExists);
        assert_eq!(WindowingApiError::from_win32(0xc007_2095), WindowingApiError::BadVersion);
        assert_eq!(WindowingApiError::from_win32(0xc007_2096), WindowingApiError::BadProfile);
        assert_eq!(WindowingApiError::from_win32(0), WindowingApiError::Failed);
    }
}
