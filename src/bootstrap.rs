// glwindow/src/bootstrap.rs
//
//! Two-phase WGL context creation.
//!
//! `wglChoosePixelFormatARB` and `wglCreateContextAttribsARB` can only be looked up while some
//! context is current, and a device context accepts a pixel format only once. So a throwaway
//! window gets a basic pixel format and a basic context just long enough to resolve the two
//! functions, then everything about it is destroyed before the application window is created
//! and given the real pixel format and a versioned context.

use crate::attributes::{ContextAttributes, PixelFormatAttributes, WindowAttributes};
use crate::error::{report, Error, WindowingApiError};
use crate::info::{ContextInfo, GLProfile, GLVersion};
use crate::loader::{ExtensionFunction, FunctionLoader, ProcAddressSource};
use crate::platform::{DeviceContext, PixelFormatIndex, Platform, RenderingContext};
use crate::window::{DCGuard, Window, WindowKind};

use glow::HasContext;
use std::ffi::CStr;
use std::mem;
use std::os::raw::{c_float, c_int, c_uint, c_void};
use std::ptr::{self, NonNull};

#[allow(non_snake_case)]
pub type ChoosePixelFormatARBFn = unsafe extern "system" fn(hdc: *mut c_void,
                                                            piAttribIList: *const c_int,
                                                            pfAttribFList: *const c_float,
                                                            nMaxFormats: c_uint,
                                                            piFormats: *mut c_int,
                                                            nNumFormats: *mut c_uint)
                                                            -> c_int;

#[allow(non_snake_case)]
pub type CreateContextAttribsARBFn = unsafe extern "system" fn(hDC: *mut c_void,
                                                               hShareContext: *mut c_void,
                                                               attribList: *const c_int)
                                                               -> *mut c_void;

/// `wglChoosePixelFormatARB` from `WGL_ARB_pixel_format`.
#[derive(Clone, Copy)]
pub struct ChoosePixelFormatARB(ChoosePixelFormatARBFn);

/// `wglCreateContextAttribsARB` from `WGL_ARB_create_context`.
#[derive(Clone, Copy)]
pub struct CreateContextAttribsARB(CreateContextAttribsARBFn);

impl ExtensionFunction for ChoosePixelFormatARB {
    const NAME: &'static CStr = c"wglChoosePixelFormatARB";

    unsafe fn from_address(address: NonNull<c_void>) -> ChoosePixelFormatARB {
        ChoosePixelFormatARB(mem::transmute::<*mut c_void, ChoosePixelFormatARBFn>(address.as_ptr()))
    }
}

impl ExtensionFunction for CreateContextAttribsARB {
    const NAME: &'static CStr = c"wglCreateContextAttribsARB";

    unsafe fn from_address(address: NonNull<c_void>) -> CreateContextAttribsARB {
        CreateContextAttribsARB(mem::transmute::<*mut c_void, CreateContextAttribsARBFn>(
            address.as_ptr(),
        ))
    }
}

/// The extension entry points the application context is created with.
#[derive(Clone, Copy)]
pub struct WGLExtensionFunctions {
    choose_pixel_format: ChoosePixelFormatARB,
    create_context_attribs: CreateContextAttribsARB,
}

impl WGLExtensionFunctions {
    /// Phase one: resolves the extension functions through a throwaway window and context.
    ///
    /// The bootstrap context is released, then deleted, then its DC is released and then the
    /// window is destroyed, both on success and on every error path.
    pub fn discover<P>(platform: &P, attributes: &WindowAttributes)
                       -> Result<WGLExtensionFunctions, Error>
                       where P: Platform {
        let window = Window::new(platform, attributes, WindowKind::Bootstrap)?;
        let dc = window.get_dc()?;

        let pixel_format = platform
            .choose_pixel_format(dc.dc(), &PixelFormatAttributes::basic())
            .map_err(report("Failed to choose pixel format"))?;
        platform
            .set_pixel_format(dc.dc(), pixel_format)
            .map_err(report("Failed to set pixel format"))?;

        let glrc = platform
            .create_context(dc.dc())
            .map_err(report("Failed to create Render context"))?;
        let context = Context::new(platform, dc, glrc);
        context.make_current().map_err(report("Failed to make context current"))?;
        debug!("bootstrap context {:?} is current", context.handle());

        let functions = WGLExtensionFunctions::load(platform.function_loader());

        drop(context);
        drop(window);
        functions
    }

    /// Resolves both functions from whatever context is current.
    pub fn load<S>(loader: &FunctionLoader<S>) -> Result<WGLExtensionFunctions, Error>
                   where S: ProcAddressSource {
        let choose_pixel_format = loader.resolve::<ChoosePixelFormatARB>();
        let create_context_attribs = loader.resolve::<CreateContextAttribsARB>();
        match (choose_pixel_format, create_context_attribs) {
            (Ok(choose_pixel_format), Ok(create_context_attribs)) => {
                Ok(WGLExtensionFunctions { choose_pixel_format, create_context_attribs })
            }
            _ => {
                error!("Failed to load OpenGL functions");
                Err(Error::RequiredExtensionUnavailable)
            }
        }
    }

    /// Asks the driver for the single best pixel format matching `attributes`.
    pub fn choose_pixel_format(&self, dc: DeviceContext, attributes: &PixelFormatAttributes)
                               -> Result<PixelFormatIndex, Error> {
        let attrib_i_list = attributes.to_wgl_attrib_list();
        let (mut pixel_format, mut pixel_format_count) = (0, 0);
        let ok = unsafe {
            (self.choose_pixel_format.0)(dc.0,
                                         attrib_i_list.as_ptr(),
                                         ptr::null(),
                                         1,
                                         &mut pixel_format,
                                         &mut pixel_format_count)
        };
        if ok == 0 {
            error!("Failed to wglChoosePixelFormatARB");
            return Err(Error::PixelFormatSelectionFailed(WindowingApiError::Failed));
        }
        if pixel_format_count == 0 {
            error!("wglChoosePixelFormatARB found no matching pixel format");
            return Err(Error::NoPixelFormatFound);
        }
        Ok(PixelFormatIndex(pixel_format))
    }

    /// Creates an unshared context with the version and profile in `attributes`.
    pub fn create_context(&self, dc: DeviceContext, attributes: &ContextAttributes)
                          -> Result<RenderingContext, Error> {
        let attrib_list = attributes.to_wgl_attrib_list();
        let glrc = unsafe {
            (self.create_context_attribs.0)(dc.0, ptr::null_mut(), attrib_list.as_ptr())
        };
        if glrc.is_null() {
            error!("Failed to create render context for OpenGL {}.{}",
                   attributes.version.major,
                   attributes.version.minor);
            return Err(Error::ContextCreationFailed(WindowingApiError::Failed));
        }
        Ok(RenderingContext(glrc))
    }
}

/// A rendering context together with the device context it renders to.
///
/// Dropping it makes no context current (if this one was), deletes the context and then
/// releases the device context.
pub struct Context<'a, P> where P: Platform {
    platform: &'a P,
    glrc: RenderingContext,
    dc: DCGuard<'a, P>,
}

impl<'a, P> Context<'a, P> where P: Platform {
    pub(crate) fn new(platform: &'a P, dc: DCGuard<'a, P>, glrc: RenderingContext)
                      -> Context<'a, P> {
        Context { platform, glrc, dc }
    }

    #[inline]
    pub fn handle(&self) -> RenderingContext {
        self.glrc
    }

    #[inline]
    pub fn device_context(&self) -> DeviceContext {
        self.dc.dc()
    }

    #[inline]
    pub fn is_current(&self) -> bool {
        self.platform.current_context() == Some(self.glrc)
    }

    pub fn make_current(&self) -> Result<(), Error> {
        self.platform.make_current(self.dc.dc(), self.glrc)
    }

    /// Makes no context current, if this one is.
    pub fn make_not_current(&self) -> Result<(), Error> {
        if !self.is_current() {
            return Ok(());
        }
        self.platform.make_no_context_current()
    }

    #[inline]
    pub fn swap_buffers(&self) -> Result<(), Error> {
        self.platform.swap_buffers(self.dc.dc())
    }

    /// Asks the live context for its version, profile and flags.
    pub fn info(&self) -> Result<ContextInfo, Error> {
        if !self.is_current() {
            return Err(Error::NoCurrentContext);
        }

        let loader = self.platform.function_loader();
        unsafe {
            let gl = glow::Context::from_loader_function_cstr(|name| loader.address(name));
            let version = gl.version();
            let profile_mask = gl.get_parameter_i32(glow::CONTEXT_PROFILE_MASK) as u32;
            let context_flags = gl.get_parameter_i32(glow::CONTEXT_FLAGS) as u32;

            let profile = if profile_mask & glow::CONTEXT_CORE_PROFILE_BIT != 0 {
                GLProfile::Core
            } else {
                GLProfile::Compatibility
            };
            Ok(ContextInfo {
                version: GLVersion::new(version.major as u8, version.minor as u8),
                profile,
                debug: context_flags & glow::CONTEXT_FLAG_DEBUG_BIT != 0,
                vendor_info: version.vendor_info.clone(),
            })
        }
    }
}

impl<'a, P> Drop for Context<'a, P> where P: Platform {
    fn drop(&mut self) {
        if let Err(err) = self.make_not_current() {
            warn!("Failed to release context {:?}: {}", self.glrc, err);
        }
        if let Err(err) = self.platform.delete_context(self.glrc) {
            warn!("Failed to delete context {:?}: {}", self.glrc, err);
        }
    }
}

/// The application window with its current OpenGL context.
pub struct GLWindow<'a, P> where P: Platform {
    // Declared first so the context goes away before its window.
    context: Context<'a, P>,
    window: Window<'a, P>,
    pixel_format: PixelFormatIndex,
}

impl<'a, P> GLWindow<'a, P> where P: Platform {
    /// Runs both bootstrap phases and returns the shown window with its context current.
    ///
    /// Nothing created by this call survives a failure.
    pub fn new(platform: &'a P,
               window_attributes: &WindowAttributes,
               pixel_format_attributes: &PixelFormatAttributes,
               context_attributes: &ContextAttributes)
               -> Result<GLWindow<'a, P>, Error> {
        window_attributes.validate().map_err(report("Invalid window attributes"))?;

        let functions = WGLExtensionFunctions::discover(platform, window_attributes)?;

        let window = Window::new(platform, window_attributes, WindowKind::Application)?;
        let dc = window.get_dc()?;

        let pixel_format = functions.choose_pixel_format(dc.dc(), pixel_format_attributes)?;
        debug!("chose pixel format {}", pixel_format.0);
        platform
            .set_pixel_format(dc.dc(), pixel_format)
            .map_err(report("Failed to SetPixelFormat"))?;

        let glrc = functions.create_context(dc.dc(), context_attributes)?;
        let context = Context::new(platform, dc, glrc);
        context.make_current().map_err(report("Failed to wglMakeCurrent"))?;

        window.show();
        info!("created {}x{} window {:?} with an OpenGL {}.{} context",
              window_attributes.size.width,
              window_attributes.size.height,
              window_attributes.title,
              context_attributes.version.major,
              context_attributes.version.minor);

        Ok(GLWindow { context, window, pixel_format })
    }

    #[inline]
    pub fn window(&self) -> &Window<'a, P> {
        &self.window
    }

    #[inline]
    pub fn context(&self) -> &Context<'a, P> {
        &self.context
    }

    #[inline]
    pub fn pixel_format(&self) -> PixelFormatIndex {
        self.pixel_format
    }
}

/// Creates a `width`x`height` window titled `title` with a 4.5 core-profile debug context.
pub fn create_window<'a, P>(platform: &'a P, width: i32, height: i32, title: &str)
                            -> Result<GLWindow<'a, P>, Error>
                            where P: Platform {
    GLWindow::new(platform,
                  &WindowAttributes::new(width, height, title),
                  &PixelFormatAttributes::default(),
                  &ContextAttributes::default())
}
