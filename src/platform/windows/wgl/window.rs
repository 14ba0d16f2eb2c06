// glwindow/src/platform/windows/wgl/window.rs
//
//! Win32 window classes, windows and the message pump.

use crate::error::{Error, WindowingApiError};
use crate::event::{EventSink, MessageResult, WindowMessage};
use crate::platform::{DeviceContext, WindowHandle};
use crate::window;

use euclid::default::Size2D;
use std::ffi::CStr;
use std::mem;
use std::os::raw::c_void;
use std::ptr;
use winapi::shared::minwindef::{FALSE, LPARAM, LRESULT, UINT, WPARAM};
use winapi::shared::windef::{HBRUSH, HDC, HWND, RECT};
use winapi::um::errhandlingapi::GetLastError;
use winapi::um::libloaderapi;
use winapi::um::winuser::{self, COLOR_BACKGROUND, CS_OWNDC, GWLP_USERDATA, IDC_ARROW};
use winapi::um::winuser::{IDI_APPLICATION, MSG, PM_REMOVE, SW_SHOW, WM_CLOSE, WNDCLASSA};
use winapi::um::winuser::WS_OVERLAPPEDWINDOW;

const WINDOW_POSITION: (i32, i32) = (100, 100);

#[inline]
fn hwnd(window: WindowHandle) -> HWND {
    window.0 as HWND
}

#[inline]
fn last_error() -> WindowingApiError {
    unsafe { WindowingApiError::from_win32(GetLastError()) }
}

pub(crate) fn register_window_class(class_name: &CStr) -> Result<(), Error> {
    unsafe {
        let instance = libloaderapi::GetModuleHandleA(ptr::null());
        let mut window_class = mem::zeroed();
        if winuser::GetClassInfoA(instance, class_name.as_ptr(), &mut window_class) != FALSE {
            return Ok(());
        }

        let window_class = WNDCLASSA {
            style: CS_OWNDC,
            lpfnWndProc: Some(window_proc),
            cbClsExtra: 0,
            cbWndExtra: 0,
            hInstance: instance,
            hIcon: winuser::LoadIconW(ptr::null_mut(), IDI_APPLICATION),
            hCursor: winuser::LoadCursorW(ptr::null_mut(), IDC_ARROW),
            hbrBackground: (COLOR_BACKGROUND + 1) as HBRUSH,
            lpszMenuName: ptr::null(),
            lpszClassName: class_name.as_ptr(),
        };
        if winuser::RegisterClassA(&window_class) == 0 {
            return Err(Error::WindowClassRegistrationFailed(last_error()));
        }
        Ok(())
    }
}

pub(crate) fn window_size_for_client_size(client_size: Size2D<i32>)
                                          -> Result<Size2D<i32>, Error> {
    let mut rect = RECT { left: 0, top: 0, right: client_size.width, bottom: client_size.height };
    unsafe {
        if winuser::AdjustWindowRectEx(&mut rect, WS_OVERLAPPEDWINDOW, FALSE, 0) == FALSE {
            return Err(Error::WindowCreationFailed(last_error()));
        }
    }
    Ok(Size2D::new(rect.right - rect.left, rect.bottom - rect.top))
}

pub(crate) fn create_window(class_name: &CStr, title: &CStr, size: Size2D<i32>)
                            -> Result<WindowHandle, Error> {
    unsafe {
        let instance = libloaderapi::GetModuleHandleA(ptr::null());
        let window = winuser::CreateWindowExA(0,
                                              class_name.as_ptr(),
                                              title.as_ptr(),
                                              WS_OVERLAPPEDWINDOW,
                                              WINDOW_POSITION.0,
                                              WINDOW_POSITION.1,
                                              size.width,
                                              size.height,
                                              ptr::null_mut(),
                                              ptr::null_mut(),
                                              instance,
                                              ptr::null_mut());
        if window.is_null() {
            return Err(Error::WindowCreationFailed(last_error()));
        }
        Ok(WindowHandle(window as *mut c_void))
    }
}

pub(crate) fn show_window(window: WindowHandle) {
    unsafe {
        winuser::ShowWindow(hwnd(window), SW_SHOW);
    }
}

pub(crate) fn destroy_window(window: WindowHandle) {
    unsafe {
        if winuser::DestroyWindow(hwnd(window)) == FALSE {
            warn!("DestroyWindow({:?}) failed: {:?}", window, last_error());
        }
    }
}

pub(crate) fn is_window_visible(window: WindowHandle) -> bool {
    unsafe { winuser::IsWindowVisible(hwnd(window)) != FALSE }
}

pub(crate) fn client_size(window: WindowHandle) -> Result<Size2D<i32>, Error> {
    unsafe {
        let mut rect: RECT = mem::zeroed();
        if winuser::GetClientRect(hwnd(window), &mut rect) == FALSE {
            return Err(Error::Failed);
        }
        Ok(Size2D::new(rect.right - rect.left, rect.bottom - rect.top))
    }
}

pub(crate) fn get_dc(window: WindowHandle) -> Result<DeviceContext, Error> {
    unsafe {
        let dc = winuser::GetDC(hwnd(window));
        if dc.is_null() {
            return Err(Error::DeviceContextUnavailable);
        }
        Ok(DeviceContext(dc as *mut c_void))
    }
}

pub(crate) fn release_dc(window: WindowHandle, dc: DeviceContext) {
    unsafe {
        winuser::ReleaseDC(hwnd(window), dc.0 as HDC);
    }
}

/// Drains the message queue of `window`, routing what the window procedure sees to `sink`.
///
/// The sink is reachable from the window procedure only for the duration of this call.
pub(crate) fn pump_messages(window: WindowHandle, sink: &mut dyn EventSink) -> usize {
    let mut sink: &mut dyn EventSink = sink;
    let sink_ptr = &mut sink as *mut &mut dyn EventSink;
    let mut count = 0;
    unsafe {
        winuser::SetWindowLongPtrA(hwnd(window), GWLP_USERDATA, sink_ptr as _);

        let mut msg: MSG = mem::zeroed();
        while winuser::PeekMessageA(&mut msg, hwnd(window), 0, 0, PM_REMOVE) != FALSE {
            winuser::TranslateMessage(&msg);
            winuser::DispatchMessageA(&msg);
            count += 1;
        }

        winuser::SetWindowLongPtrA(hwnd(window), GWLP_USERDATA, 0);
    }
    count
}

#[allow(non_snake_case)]
unsafe extern "system" fn window_proc(hwnd: HWND,
                                      uMsg: UINT,
                                      wParam: WPARAM,
                                      lParam: LPARAM)
                                      -> LRESULT {
    let message = match uMsg {
        WM_CLOSE => WindowMessage::Close,
        message => WindowMessage::Other { message, wparam: wParam, lparam: lParam },
    };

    let sink = winuser::GetWindowLongPtrA(hwnd, GWLP_USERDATA) as *mut &mut dyn EventSink;
    let result = match sink.as_mut() {
        Some(sink) => window::route_message(message, &mut **sink),
        // A close outside of a pump has nobody to tell, but must still not reach
        // `DefWindowProc`, which would destroy the window.
        None if message == WindowMessage::Close => MessageResult::Handled(0),
        None => MessageResult::Default,
    };

    match result {
        MessageResult::Handled(value) => value,
        MessageResult::Default => winuser::DefWindowProcA(hwnd, uMsg, wParam, lParam),
    }
}
