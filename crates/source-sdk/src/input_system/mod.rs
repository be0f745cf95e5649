mod button_code;

pub use button_code::{ButtonCode, ButtonState};

use std::ffi::{c_char, c_int, c_void, CStr};

use vcall::call_vfunc;

/// Vtable slots of the `IInputSystem` methods this facade calls.
///
/// These are facts about one inputsystem build. When the game updates and the
/// interface shifts, this table is the only thing to change.
pub mod slots {
    pub const ENABLE_INPUT: usize = 11;
    pub const IS_BUTTON_DOWN: usize = 15;
    pub const RESET_INPUT_STATE: usize = 39;
    pub const BUTTON_CODE_TO_STRING: usize = 40;
    pub const VIRTUAL_KEY_TO_BUTTON_CODE: usize = 45;
    pub const GET_CURSOR_POSITION: usize = 56;
}

// Opaque type for the `this` pointer.
#[repr(C)] pub(crate) struct RawIInputSystem { _private: [u8; 0] }

/// Cursor position in client-area pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CursorPosition {
    pub x: i32,
    pub y: i32,
}

/// Represents an instance of the engine's IInputSystem interface.
///
/// Holds only the 'this' pointer; every method looks its function up in the
/// object's own vtable at call time.
pub struct IInputSystem {
    pub(crate) this: *mut RawIInputSystem,
}

/// SAFETY: `from_raw` is the only way to build an `IInputSystem`, and its caller
/// vouches that the pointer is a live IInputSystem for as long as this value is
/// used. Each method below forwards exactly the signature the engine declares
/// for its slot.
impl IInputSystem {
    /// Wraps a pointer obtained from the engine. Returns `None` for null.
    ///
    /// # Safety
    ///
    /// `ptr` must point to the engine's IInputSystem and stay valid while the
    /// returned value is in use. Calls on anything else are undefined behaviour.
    pub unsafe fn from_raw(ptr: *mut c_void) -> Option<Self> {
        if ptr.is_null() {
            return None;
        }
        Some(Self { this: ptr.cast() })
    }

    /// The raw interface pointer.
    pub fn as_ptr(&self) -> *mut c_void {
        self.this.cast()
    }

    /// Turns engine input processing on or off as a whole.
    pub fn enable_input(&self, enable: bool) {
        unsafe { call_vfunc::<(), _, _>(self.this, slots::ENABLE_INPUT, (enable,)) }
    }

    /// Returns `true` while `code` is held down.
    pub fn is_button_down(&self, code: ButtonCode) -> bool {
        unsafe { call_vfunc(self.this, slots::IS_BUTTON_DOWN, (code,)) }
    }

    /// Clears all latched button and analog state.
    pub fn reset_input_state(&self) {
        unsafe { call_vfunc::<(), _, _>(self.this, slots::RESET_INPUT_STATE, ()) }
    }

    /// Returns the engine's name for `code` (e.g. "MOUSE_LEFT").
    /// Returns an empty string if the engine gives back null.
    pub fn button_code_to_string(&self, code: ButtonCode) -> String {
        unsafe {
            let c_str_ptr: *const c_char = call_vfunc(self.this, slots::BUTTON_CODE_TO_STRING, (code,));
            if c_str_ptr.is_null() {
                return String::new();
            }
            CStr::from_ptr(c_str_ptr).to_string_lossy().into_owned()
        }
    }

    /// Maps a Windows virtual-key code to the engine's button code.
    pub fn virtual_key_to_button_code(&self, virtual_key: i32) -> ButtonCode {
        unsafe { call_vfunc(self.this, slots::VIRTUAL_KEY_TO_BUTTON_CODE, (virtual_key,)) }
    }

    /// Gets the current cursor position.
    pub fn get_cursor_position(&self) -> CursorPosition {
        let mut x: c_int = 0;
        let mut y: c_int = 0;

        // SAFETY: `&mut x` and `&mut y` are valid for writes for the whole call.
        unsafe {
            call_vfunc::<(), _, _>(
                self.this,
                slots::GET_CURSOR_POSITION,
                (&raw mut x, &raw mut y),
            )
        };

        CursorPosition { x, y }
    }
}
