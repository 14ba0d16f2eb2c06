// glwindow/src/attributes.rs
//
//! The parameters a window, its pixel format and its context are created with.

use crate::error::Error;
use crate::info::GLVersion;

use euclid::default::Size2D;
use std::os::raw::c_int;

#[cfg(test)]
pub(crate) const GL_TRUE: c_int = 1;

pub(crate) const WGL_DRAW_TO_WINDOW_ARB: c_int = 0x2001;
pub(crate) const WGL_ACCELERATION_ARB: c_int = 0x2003;
pub(crate) const WGL_SWAP_METHOD_ARB: c_int = 0x2007;
pub(crate) const WGL_SUPPORT_OPENGL_ARB: c_int = 0x2010;
pub(crate) const WGL_DOUBLE_BUFFER_ARB: c_int = 0x2011;
pub(crate) const WGL_PIXEL_TYPE_ARB: c_int = 0x2013;
pub(crate) const WGL_COLOR_BITS_ARB: c_int = 0x2014;
pub(crate) const WGL_ALPHA_BITS_ARB: c_int = 0x201b;
pub(crate) const WGL_DEPTH_BITS_ARB: c_int = 0x2022;
pub(crate) const WGL_FULL_ACCELERATION_ARB: c_int = 0x2027;
pub(crate) const WGL_SWAP_COPY_ARB: c_int = 0x2029;
pub(crate) const WGL_TYPE_RGBA_ARB: c_int = 0x202b;

pub(crate) const WGL_CONTEXT_MAJOR_VERSION_ARB: c_int = 0x2091;
pub(crate) const WGL_CONTEXT_MINOR_VERSION_ARB: c_int = 0x2092;
pub(crate) const WGL_CONTEXT_FLAGS_ARB: c_int = 0x2094;
pub(crate) const WGL_CONTEXT_PROFILE_MASK_ARB: c_int = 0x9126;

pub(crate) const WGL_CONTEXT_DEBUG_BIT_ARB: c_int = 0x0001;
pub(crate) const WGL_CONTEXT_CORE_PROFILE_BIT_ARB: c_int = 0x0001;
pub(crate) const WGL_CONTEXT_COMPATIBILITY_PROFILE_BIT_ARB: c_int = 0x0002;

/// The size and title of a window.
///
/// The title doubles as the window class name, which is fine as long as there's one window.
#[derive(Clone, Debug, PartialEq)]
pub struct WindowAttributes {
    /// The requested client-area size.
    pub size: Size2D<i32>,
    pub title: String,
}

impl Default for WindowAttributes {
    fn default() -> WindowAttributes {
        WindowAttributes { size: Size2D::new(800, 600), title: "Window".to_owned() }
    }
}

impl WindowAttributes {
    #[inline]
    pub fn new(width: i32, height: i32, title: &str) -> WindowAttributes {
        WindowAttributes { size: Size2D::new(width, height), title: title.to_owned() }
    }

    /// Rejects non-positive sizes, empty titles and titles with interior NULs.
    pub fn validate(&self) -> Result<(), Error> {
        if self.size.width <= 0
            || self.size.height <= 0
            || self.title.is_empty()
            || self.title.contains('\0')
        {
            return Err(Error::InvalidWindowAttributes);
        }
        Ok(())
    }
}

bitflags! {
    /// Boolean properties requested of a pixel format.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct PixelFormatFlags: u8 {
        const DRAW_TO_WINDOW       = 0x01;
        const SUPPORT_OPENGL       = 0x02;
        const DOUBLE_BUFFER        = 0x04;
        /// Swapping copies the back buffer instead of exchanging it.
        const SWAP_COPY            = 0x08;
        const HARDWARE_ACCELERATED = 0x10;
    }
}

/// Describes the RGBA pixel format requested for a drawable surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelFormatAttributes {
    pub flags: PixelFormatFlags,
    pub color_bits: u8,
    pub alpha_bits: u8,
    pub depth_bits: u8,
}

impl Default for PixelFormatAttributes {
    fn default() -> PixelFormatAttributes {
        PixelFormatAttributes { flags: PixelFormatFlags::all(), ..PixelFormatAttributes::basic() }
    }
}

impl PixelFormatAttributes {
    /// The format the legacy `ChoosePixelFormat` path can express.
    pub fn basic() -> PixelFormatAttributes {
        PixelFormatAttributes {
            flags: PixelFormatFlags::DRAW_TO_WINDOW
                | PixelFormatFlags::SUPPORT_OPENGL
                | PixelFormatFlags::DOUBLE_BUFFER,
            color_bits: 32,
            alpha_bits: 8,
            depth_bits: 24,
        }
    }

    /// Builds the zero-terminated integer list for `wglChoosePixelFormatARB`.
    pub fn to_wgl_attrib_list(&self) -> Vec<c_int> {
        let flag = |flag: PixelFormatFlags| self.flags.contains(flag) as c_int;

        let mut list = vec![
            WGL_DRAW_TO_WINDOW_ARB, flag(PixelFormatFlags::DRAW_TO_WINDOW),
            WGL_SUPPORT_OPENGL_ARB, flag(PixelFormatFlags::SUPPORT_OPENGL),
            WGL_DOUBLE_BUFFER_ARB,  flag(PixelFormatFlags::DOUBLE_BUFFER),
        ];
        if self.flags.contains(PixelFormatFlags::SWAP_COPY) {
            list.extend_from_slice(&[WGL_SWAP_METHOD_ARB, WGL_SWAP_COPY_ARB]);
        }
        list.extend_from_slice(&[WGL_PIXEL_TYPE_ARB, WGL_TYPE_RGBA_ARB]);
        if self.flags.contains(PixelFormatFlags::HARDWARE_ACCELERATED) {
            list.extend_from_slice(&[WGL_ACCELERATION_ARB, WGL_FULL_ACCELERATION_ARB]);
        }
        list.extend_from_slice(&[
            WGL_COLOR_BITS_ARB, self.color_bits as c_int,
            WGL_ALPHA_BITS_ARB, self.alpha_bits as c_int,
            WGL_DEPTH_BITS_ARB, self.depth_bits as c_int,
            0,
        ]);
        list
    }
}

bitflags! {
    /// Optional properties of a versioned context.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ContextAttributeFlags: u8 {
        /// Ask the driver for a debug context.
        const DEBUG                 = 0x01;
        /// Use the compatibility profile instead of the core profile.
        const COMPATIBILITY_PROFILE = 0x02;
    }
}

/// The version and flags of the context created through `wglCreateContextAttribsARB`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContextAttributes {
    pub version: GLVersion,
    pub flags: ContextAttributeFlags,
}

impl Default for ContextAttributes {
    fn default() -> ContextAttributes {
        ContextAttributes { version: GLVersion::new(4, 5), flags: ContextAttributeFlags::DEBUG }
    }
}

impl ContextAttributes {
    pub fn to_wgl_attrib_list(&self) -> Vec<c_int> {
        let profile = if self.flags.contains(ContextAttributeFlags::COMPATIBILITY_PROFILE) {
            WGL_CONTEXT_COMPATIBILITY_PROFILE_BIT_ARB
        } else {
            WGL_CONTEXT_CORE_PROFILE_BIT_ARB
        };
        let context_flags = if self.flags.contains(ContextAttributeFlags::DEBUG) {
            WGL_CONTEXT_DEBUG_BIT_ARB
        } else {
            0
        };

        vec![
            WGL_CONTEXT_MAJOR_VERSION_ARB, self.version.major as c_int,
            WGL_CONTEXT_MINOR_VERSION_ARB, self.version.minor as c_int,
            WGL_CONTEXT_PROFILE_MASK_ARB,  profile,
            WGL_CONTEXT_FLAGS_ARB,         context_flags,
            0,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pixel_format_attrib_list() {
        let list = PixelFormatAttributes::default().to_wgl_attrib_list();
        assert_eq!(
            list,
            vec![
                WGL_DRAW_TO_WINDOW_ARB, GL_TRUE,
                WGL_SUPPORT_OPENGL_ARB, GL_TRUE,
                WGL_DOUBLE_BUFFER_ARB, GL_TRUE,
                WGL_SWAP_METHOD_ARB, WGL_SWAP_COPY_ARB,
                WGL_PIXEL_TYPE_ARB, WGL_TYPE_RGBA_ARB,
                WGL_ACCELERATION_ARB, WGL_FULL_ACCELERATION_ARB,
                WGL_COLOR_BITS_ARB, 32,
                WGL_ALPHA_BITS_ARB, 8,
                WGL_DEPTH_BITS_ARB, 24,
                0,
            ]
        );
    }

    #[test]
    fn test_basic_pixel_format_has_no_extended_keys() {
        let list = PixelFormatAttributes::basic().to_wgl_attrib_list();
        assert!(!list.contains(&WGL_SWAP_METHOD_ARB));
        assert!(!list.contains(&WGL_ACCELERATION_ARB));
        assert_eq!(list.last(), Some(&0));
    }

    #[test]
    fn test_default_context_attrib_list() {
        assert_eq!(
            ContextAttributes::default().to_wgl_attrib_list(),
            vec![
                WGL_CONTEXT_MAJOR_VERSION_ARB, 4,
                WGL_CONTEXT_MINOR_VERSION_ARB, 5,
                WGL_CONTEXT_PROFILE_MASK_ARB, WGL_CONTEXT_CORE_PROFILE_BIT_ARB,
                WGL_CONTEXT_FLAGS_ARB, WGL_CONTEXT_DEBUG_BIT_ARB,
                0,
            ]
        );
    }

    #[test]
    fn test_compatibility_context_attrib_list() {
        let attributes = ContextAttributes {
            version: GLVersion::new(3, 3),
            flags: ContextAttributeFlags::COMPATIBILITY_PROFILE,
        };
        let list = attributes.to_wgl_attrib_list();
        assert_eq!(&list[4..8], &[
            WGL_CONTEXT_PROFILE_MASK_ARB, WGL_CONTEXT_COMPATIBILITY_PROFILE_BIT_ARB,
            WGL_CONTEXT_FLAGS_ARB, 0,
        ]);
    }

    #[test]
    fn test_window_attributes_validation() {
        assert!(WindowAttributes::default().validate().is_ok());
        assert!(WindowAttributes::new(0, 600, "Window").validate().is_err());
        assert!(WindowAttributes::new(800, -1, "Window").validate().is_err());
        assert!(WindowAttributes::new(800, 600, "").validate().is_err());
        assert!(WindowAttributes::new(800, 600, "Win\0dow").validate().is_err());
    }
}
