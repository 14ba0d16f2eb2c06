// glwindow/src/lib.rs
//
//! Opens a window and binds a core-profile OpenGL context to it.
//!
//! The context is created with the two-phase WGL protocol: a throwaway window and context make
//! the `WGL_ARB_pixel_format` and `WGL_ARB_create_context` entry points available, then the
//! application window gets a pixel format and a versioned context through them. After that the
//! application pumps the window's messages once per frame until it is asked to close.
//!
//! ```ignore
//! use glwindow::{create_window, AppState, DefaultPlatform, FrameDriver};
//!
//! let platform = DefaultPlatform::new()?;
//! let gl_window = create_window(&platform, 800, 600, "Window")?;
//! let mut state = AppState::new();
//! FrameDriver::new(gl_window.window()).run(&mut state);
//! ```

#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate log;

pub mod platform;
pub use crate::platform::{DefaultPlatform, Platform};
pub use crate::platform::{DeviceContext, PixelFormatIndex, RenderingContext, WindowHandle};

pub mod error;
pub use crate::error::{Error, WindowingApiError};

mod attributes;
pub use crate::attributes::{ContextAttributeFlags, ContextAttributes, PixelFormatAttributes};
pub use crate::attributes::{PixelFormatFlags, WindowAttributes};

mod bootstrap;
pub use crate::bootstrap::{create_window, Context, GLWindow, WGLExtensionFunctions};
pub use crate::bootstrap::{ChoosePixelFormatARB, CreateContextAttribsARB};

mod driver;
pub use crate::driver::FrameDriver;

mod event;
pub use crate::event::{AppState, EventSink, MessageResult, WindowMessage};

mod info;
pub use crate::info::{ContextInfo, GLProfile, GLVersion};

pub mod loader;
pub use crate::loader::{ExtensionFunction, FunctionLoader, ProcAddressSource};

mod window;
pub use crate::window::{route_message, Window, WindowKind};
