//! Engine button codes (`ButtonCode_t`) and mouse button states.
//!
//! Codes are laid out so a range check classifies them: every keyboard key
//! lies in `KEY_FIRST..=KEY_LAST`, every mouse button in
//! `MOUSE_FIRST..=MOUSE_LAST`.

use std::fmt;

/// One physical input as the engine's input system numbers it.
///
/// A transparent `int` rather than a Rust enum: the host may hand back codes
/// this table does not know about, and those must stay representable.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ButtonCode(pub i32);

impl ButtonCode {
    pub const BUTTON_CODE_INVALID: Self = Self(-1);
    pub const BUTTON_CODE_NONE: Self = Self(0);

    pub const KEY_FIRST: Self = Self(0);
    pub const KEY_NONE: Self = Self::KEY_FIRST;

    pub const KEY_0: Self = Self(1);
    pub const KEY_1: Self = Self(2);
    pub const KEY_2: Self = Self(3);
    pub const KEY_3: Self = Self(4);
    pub const KEY_4: Self = Self(5);
    pub const KEY_5: Self = Self(6);
    pub const KEY_6: Self = Self(7);
    pub const KEY_7: Self = Self(8);
    pub const KEY_8: Self = Self(9);
    pub const KEY_9: Self = Self(10);
    pub const KEY_A: Self = Self(11);
    pub const KEY_B: Self = Self(12);
    pub const KEY_C: Self = Self(13);
    pub const KEY_D: Self = Self(14);
    pub const KEY_E: Self = Self(15);
    pub const KEY_F: Self = Self(16);
    pub const KEY_G: Self = Self(17);
    pub const KEY_H: Self = Self(18);
    pub const KEY_I: Self = Self(19);
    pub const KEY_J: Self = Self(20);
    pub const KEY_K: Self = Self(21);
    pub const KEY_L: Self = Self(22);
    pub const KEY_M: Self = Self(23);
    pub const KEY_N: Self = Self(24);
    pub const KEY_O: Self = Self(25);
    pub const KEY_P: Self = Self(26);
    pub const KEY_Q: Self = Self(27);
    pub const KEY_R: Self = Self(28);
    pub const KEY_S: Self = Self(29);
    pub const KEY_T: Self = Self(30);
    pub const KEY_U: Self = Self(31);
    pub const KEY_V: Self = Self(32);
    pub const KEY_W: Self = Self(33);
    pub const KEY_X: Self = Self(34);
    pub const KEY_Y: Self = Self(35);
    pub const KEY_Z: Self = Self(36);
    pub const KEY_PAD_0: Self = Self(37);
    pub const KEY_PAD_1: Self = Self(38);
    pub const KEY_PAD_2: Self = Self(39);
    pub const KEY_PAD_3: Self = Self(40);
    pub const KEY_PAD_4: Self = Self(41);
    pub const KEY_PAD_5: Self = Self(42);
    pub const KEY_PAD_6: Self = Self(43);
    pub const KEY_PAD_7: Self = Self(44);
    pub const KEY_PAD_8: Self = Self(45);
    pub const KEY_PAD_9: Self = Self(46);
    pub const KEY_PAD_DIVIDE: Self = Self(47);
    pub const KEY_PAD_MULTIPLY: Self = Self(48);
    pub const KEY_PAD_MINUS: Self = Self(49);
    pub const KEY_PAD_PLUS: Self = Self(50);
    pub const KEY_PAD_ENTER: Self = Self(51);
    pub const KEY_PAD_DECIMAL: Self = Self(52);
    pub const KEY_LBRACKET: Self = Self(53);
    pub const KEY_RBRACKET: Self = Self(54);
    pub const KEY_SEMICOLON: Self = Self(55);
    pub const KEY_APOSTROPHE: Self = Self(56);
    pub const KEY_BACKQUOTE: Self = Self(57);
    pub const KEY_COMMA: Self = Self(58);
    pub const KEY_PERIOD: Self = Self(59);
    pub const KEY_SLASH: Self = Self(60);
    pub const KEY_BACKSLASH: Self = Self(61);
    pub const KEY_MINUS: Self = Self(62);
    pub const KEY_EQUAL: Self = Self(63);
    pub const KEY_ENTER: Self = Self(64);
    pub const KEY_SPACE: Self = Self(65);
    pub const KEY_BACKSPACE: Self = Self(66);
    pub const KEY_TAB: Self = Self(67);
    pub const KEY_CAPSLOCK: Self = Self(68);
    pub const KEY_NUMLOCK: Self = Self(69);
    pub const KEY_ESCAPE: Self = Self(70);
    pub const KEY_SCROLLLOCK: Self = Self(71);
    pub const KEY_INSERT: Self = Self(72);
    pub const KEY_DELETE: Self = Self(73);
    pub const KEY_HOME: Self = Self(74);
    pub const KEY_END: Self = Self(75);
    pub const KEY_PAGEUP: Self = Self(76);
    pub const KEY_PAGEDOWN: Self = Self(77);
    pub const KEY_BREAK: Self = Self(78);
    pub const KEY_LSHIFT: Self = Self(79);
    pub const KEY_RSHIFT: Self = Self(80);
    pub const KEY_LALT: Self = Self(81);
    pub const KEY_RALT: Self = Self(82);
    pub const KEY_LCONTROL: Self = Self(83);
    pub const KEY_RCONTROL: Self = Self(84);
    pub const KEY_LWIN: Self = Self(85);
    pub const KEY_RWIN: Self = Self(86);
    pub const KEY_APP: Self = Self(87);
    pub const KEY_UP: Self = Self(88);
    pub const KEY_LEFT: Self = Self(89);
    pub const KEY_DOWN: Self = Self(90);
    pub const KEY_RIGHT: Self = Self(91);
    pub const KEY_F1: Self = Self(92);
    pub const KEY_F2: Self = Self(93);
    pub const KEY_F3: Self = Self(94);
    pub const KEY_F4: Self = Self(95);
    pub const KEY_F5: Self = Self(96);
    pub const KEY_F6: Self = Self(97);
    pub const KEY_F7: Self = Self(98);
    pub const KEY_F8: Self = Self(99);
    pub const KEY_F9: Self = Self(100);
    pub const KEY_F10: Self = Self(101);
    pub const KEY_F11: Self = Self(102);
    pub const KEY_F12: Self = Self(103);
    pub const KEY_CAPSLOCKTOGGLE: Self = Self(104);
    pub const KEY_NUMLOCKTOGGLE: Self = Self(105);
    pub const KEY_SCROLLLOCKTOGGLE: Self = Self(106);

    pub const KEY_LAST: Self = Self::KEY_SCROLLLOCKTOGGLE;
    pub const KEY_COUNT: i32 = Self::KEY_LAST.0 - Self::KEY_FIRST.0 + 1;

    pub const MOUSE_FIRST: Self = Self(Self::KEY_LAST.0 + 1);

    pub const MOUSE_LEFT: Self = Self(107);
    pub const MOUSE_RIGHT: Self = Self(108);
    pub const MOUSE_MIDDLE: Self = Self(109);
    pub const MOUSE_4: Self = Self(110);
    pub const MOUSE_5: Self = Self(111);
    pub const MOUSE_WHEEL_UP: Self = Self(112);
    pub const MOUSE_WHEEL_DOWN: Self = Self(113);

    pub const MOUSE_LAST: Self = Self::MOUSE_WHEEL_DOWN;
    pub const MOUSE_COUNT: i32 = Self::MOUSE_LAST.0 - Self::MOUSE_FIRST.0 + 1;

    /// Returns `true` for keyboard keys, including `KEY_NONE`.
    pub const fn is_key(self) -> bool {
        self.0 >= Self::KEY_FIRST.0 && self.0 <= Self::KEY_LAST.0
    }

    /// Returns `true` for mouse buttons and the two wheel pseudo-buttons.
    pub const fn is_mouse(self) -> bool {
        self.0 >= Self::MOUSE_FIRST.0 && self.0 <= Self::MOUSE_LAST.0
    }

    /// The wheel "buttons" are pressed and released in the same frame the
    /// wheel moves.
    pub const fn is_mouse_wheel(self) -> bool {
        self.0 == Self::MOUSE_WHEEL_UP.0 || self.0 == Self::MOUSE_WHEEL_DOWN.0
    }

    /// Name of the constant for this code, or `None` for codes outside the table.
    pub const fn name(self) -> Option<&'static str> {
        let name = match self {
            Self::BUTTON_CODE_INVALID => "BUTTON_CODE_INVALID",
            Self::KEY_NONE => "KEY_NONE",
            Self::KEY_0 => "KEY_0",
            Self::KEY_1 => "KEY_1",
            Self::KEY_2 => "KEY_2",
            Self::KEY_3 => "KEY_3",
            Self::KEY_4 => "KEY_4",
            Self::KEY_5 => "KEY_5",
            Self::KEY_6 => "KEY_6",
            Self::KEY_7 => "KEY_7",
            Self::KEY_8 => "KEY_8",
            Self::KEY_9 => "KEY_9",
            Self::KEY_A => "KEY_A",
            Self::KEY_B => "KEY_B",
            Self::KEY_C => "KEY_C",
            Self::KEY_D => "KEY_D",
            Self::KEY_E => "KEY_E",
            Self::KEY_F => "KEY_F",
            Self::KEY_G => "KEY_G",
            Self::KEY_H => "KEY_H",
            Self::KEY_I => "KEY_I",
            Self::KEY_J => "KEY_J",
            Self::KEY_K => "KEY_K",
            Self::KEY_L => "KEY_L",
            Self::KEY_M => "KEY_M",
            Self::KEY_N => "KEY_N",
            Self::KEY_O => "KEY_O",
            Self::KEY_P => "KEY_P",
            Self::KEY_Q => "KEY_Q",
            Self::KEY_R => "KEY_R",
            Self::KEY_S => "KEY_S",
            Self::KEY_T => "KEY_T",
            Self::KEY_U => "KEY_U",
            Self::KEY_V => "KEY_V",
            Self::KEY_W => "KEY_W",
            Self::KEY_X => "KEY_X",
            Self::KEY_Y => "KEY_Y",
            Self::KEY_Z => "KEY_Z",
            Self::KEY_PAD_0 => "KEY_PAD_0",
            Self::KEY_PAD_1 => "KEY_PAD_1",
            Self::KEY_PAD_2 => "KEY_PAD_2",
            Self::KEY_PAD_3 => "KEY_PAD_3",
            Self::KEY_PAD_4 => "KEY_PAD_4",
            Self::KEY_PAD_5 => "KEY_PAD_5",
            Self::KEY_PAD_6 => "KEY_PAD_6",
            Self::KEY_PAD_7 => "KEY_PAD_7",
            Self::KEY_PAD_8 => "KEY_PAD_8",
            Self::KEY_PAD_9 => "KEY_PAD_9",
            Self::KEY_PAD_DIVIDE => "KEY_PAD_DIVIDE",
            Self::KEY_PAD_MULTIPLY => "KEY_PAD_MULTIPLY",
            Self::KEY_PAD_MINUS => "KEY_PAD_MINUS",
            Self::KEY_PAD_PLUS => "KEY_PAD_PLUS",
            Self::KEY_PAD_ENTER => "KEY_PAD_ENTER",
            Self::KEY_PAD_DECIMAL => "KEY_PAD_DECIMAL",
            Self::KEY_LBRACKET => "KEY_LBRACKET",
            Self::KEY_RBRACKET => "KEY_RBRACKET",
            Self::KEY_SEMICOLON => "KEY_SEMICOLON",
            Self::KEY_APOSTROPHE => "KEY_APOSTROPHE",
            Self::KEY_BACKQUOTE => "KEY_BACKQUOTE",
            Self::KEY_COMMA => "KEY_COMMA",
            Self::KEY_PERIOD => "KEY_PERIOD",
            Self::KEY_SLASH => "KEY_SLASH",
            Self::KEY_BACKSLASH => "KEY_BACKSLASH",
            Self::KEY_MINUS => "KEY_MINUS",
            Self::KEY_EQUAL => "KEY_EQUAL",
            Self::KEY_ENTER => "KEY_ENTER",
            Self::KEY_SPACE => "KEY_SPACE",
            Self::KEY_BACKSPACE => "KEY_BACKSPACE",
            Self::KEY_TAB => "KEY_TAB",
            Self::KEY_CAPSLOCK => "KEY_CAPSLOCK",
            Self::KEY_NUMLOCK => "KEY_NUMLOCK",
            Self::KEY_ESCAPE => "KEY_ESCAPE",
            Self::KEY_SCROLLLOCK => "KEY_SCROLLLOCK",
            Self::KEY_INSERT => "KEY_INSERT",
            Self::KEY_DELETE => "KEY_DELETE",
            Self::KEY_HOME => "KEY_HOME",
            Self::KEY_END => "KEY_END",
            Self::KEY_PAGEUP => "KEY_PAGEUP",
            Self::KEY_PAGEDOWN => "KEY_PAGEDOWN",
            Self::KEY_BREAK => "KEY_BREAK",
            Self::KEY_LSHIFT => "KEY_LSHIFT",
            Self::KEY_RSHIFT => "KEY_RSHIFT",
            Self::KEY_LALT => "KEY_LALT",
            Self::KEY_RALT => "KEY_RALT",
            Self::KEY_LCONTROL => "KEY_LCONTROL",
            Self::KEY_RCONTROL => "KEY_RCONTROL",
            Self::KEY_LWIN => "KEY_LWIN",
            Self::KEY_RWIN => "KEY_RWIN",
            Self::KEY_APP => "KEY_APP",
            Self::KEY_UP => "KEY_UP",
            Self::KEY_LEFT => "KEY_LEFT",
            Self::KEY_DOWN => "KEY_DOWN",
            Self::KEY_RIGHT => "KEY_RIGHT",
            Self::KEY_F1 => "KEY_F1",
            Self::KEY_F2 => "KEY_F2",
            Self::KEY_F3 => "KEY_F3",
            Self::KEY_F4 => "KEY_F4",
            Self::KEY_F5 => "KEY_F5",
            Self::KEY_F6 => "KEY_F6",
            Self::KEY_F7 => "KEY_F7",
            Self::KEY_F8 => "KEY_F8",
            Self::KEY_F9 => "KEY_F9",
            Self::KEY_F10 => "KEY_F10",
            Self::KEY_F11 => "KEY_F11",
            Self::KEY_F12 => "KEY_F12",
            Self::KEY_CAPSLOCKTOGGLE => "KEY_CAPSLOCKTOGGLE",
            Self::KEY_NUMLOCKTOGGLE => "KEY_NUMLOCKTOGGLE",
            Self::KEY_SCROLLLOCKTOGGLE => "KEY_SCROLLLOCKTOGGLE",
            Self::MOUSE_LEFT => "MOUSE_LEFT",
            Self::MOUSE_RIGHT => "MOUSE_RIGHT",
            Self::MOUSE_MIDDLE => "MOUSE_MIDDLE",
            Self::MOUSE_4 => "MOUSE_4",
            Self::MOUSE_5 => "MOUSE_5",
            Self::MOUSE_WHEEL_UP => "MOUSE_WHEEL_UP",
            Self::MOUSE_WHEEL_DOWN => "MOUSE_WHEEL_DOWN",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Debug for ButtonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "ButtonCode({name})"),
            None => write!(f, "ButtonCode({})", self.0),
        }
    }
}

impl From<i32> for ButtonCode {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

/// State of a mouse button as reported by the input system.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonState {
    Released = 0,
    Pressed = 1,
    DoubleClicked = 2,
}

impl TryFrom<i32> for ButtonState {
    /// The unrecognised raw value.
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Released),
            1 => Ok(Self::Pressed),
            2 => Ok(Self::DoubleClicked),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_and_mouse_ranges_are_contiguous() {
        assert_eq!(ButtonCode::KEY_LAST.0, 106);
        assert_eq!(ButtonCode::KEY_COUNT, 107);
        assert_eq!(ButtonCode::MOUSE_FIRST, ButtonCode::MOUSE_LEFT);
        assert_eq!(ButtonCode::MOUSE_LEFT.0, 107);
        assert_eq!(ButtonCode::MOUSE_COUNT, 7);
    }

    #[test]
    fn classifies_by_range() {
        assert!(ButtonCode::KEY_A.is_key());
        assert!(!ButtonCode::KEY_A.is_mouse());

        assert!(ButtonCode::MOUSE_LEFT.is_mouse());
        assert!(!ButtonCode::MOUSE_LEFT.is_key());

        assert!(!ButtonCode::BUTTON_CODE_INVALID.is_key());
        assert!(!ButtonCode::BUTTON_CODE_INVALID.is_mouse());

        assert!(ButtonCode::MOUSE_WHEEL_DOWN.is_mouse_wheel());
        assert!(!ButtonCode::MOUSE_5.is_mouse_wheel());
        assert!(!ButtonCode(ButtonCode::MOUSE_LAST.0 + 1).is_mouse());
    }

    #[test]
    fn sentinels_alias_key_first() {
        assert_eq!(ButtonCode::BUTTON_CODE_NONE, ButtonCode::KEY_NONE);
        assert_eq!(ButtonCode::default(), ButtonCode::BUTTON_CODE_NONE);
    }

    #[test]
    fn debug_prints_constant_name() {
        assert_eq!(format!("{:?}", ButtonCode::KEY_F12), "ButtonCode(KEY_F12)");
        assert_eq!(format!("{:?}", ButtonCode(500)), "ButtonCode(500)");
        assert_eq!(ButtonCode::KEY_PAD_ENTER.name(), Some("KEY_PAD_ENTER"));
    }

    #[test]
    fn button_state_from_raw() {
        assert_eq!(ButtonState::try_from(2), Ok(ButtonState::DoubleClicked));
        assert_eq!(ButtonState::try_from(3), Err(3));
    }
}
