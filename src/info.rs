// glwindow/src/info.rs
//
//! OpenGL information.

/// Describes the OpenGL version that is requested when a context is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct GLVersion {
    /// The major OpenGL version (e.g. 4 in 4.5).
    pub major: u8,
    /// The minor OpenGL version (e.g. 5 in 4.5).
    pub minor: u8,
}

impl GLVersion {
    #[inline]
    pub fn new(major: u8, minor: u8) -> GLVersion {
        GLVersion { major, minor }
    }
}

/// The OpenGL profile of a context.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GLProfile {
    /// The core profile, without the deprecated fixed-function API.
    Core,
    /// The compatibility profile.
    Compatibility,
}

/// What a live context reports about itself.
#[derive(Clone, Debug, PartialEq)]
pub struct ContextInfo {
    pub version: GLVersion,
    pub profile: GLProfile,
    pub debug: bool,
    /// The driver's `GL_VERSION` vendor suffix, if any.
    pub vendor_info: String,
}
