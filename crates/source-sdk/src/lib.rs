//! source-sdk: typed facades over the Source engine's C++ interfaces.
//!
//! The engine's classes are not available to us, only the pointers to live
//! instances and the vtable slot of each method we need. Each facade binds its
//! methods to fixed slots and forwards them through [`vcall`]. Finding the
//! instances is someone else's job: this crate starts from raw pointers.
use std::ffi::c_void;
use std::sync::OnceLock;

use anyhow::Context;

pub mod input_system;
pub mod logger;
pub mod types;

pub use input_system::{ButtonCode, ButtonState, CursorPosition, IInputSystem};
pub use types::{Color, ColorRGBExp32};

/// A struct that holds all the engine interfaces feature code talks to.
pub struct Interfaces {
    input_system: IInputSystem,
}

/// # Safety
/// This implementation is safe under the assumption that the struct is written
/// ONCE during initialization from a single thread, and then only read from.
/// The `this` pointers inside are then constant; whether the engine functions
/// behind them tolerate calls from other threads is up to the caller.
unsafe impl Send for Interfaces {}
unsafe impl Sync for Interfaces {}

static INTERFACES: OnceLock<Interfaces> = OnceLock::new();

impl Interfaces {
    /// Binds the facades to interface pointers resolved elsewhere.
    ///
    /// # Safety
    ///
    /// Every non-null pointer must be the live engine object its argument
    /// names, valid for as long as the returned value is used.
    pub unsafe fn from_raw(input_system: *mut c_void) -> anyhow::Result<Self> {
        let input_system = unsafe { IInputSystem::from_raw(input_system) }
            .context("IInputSystem interface pointer is null")?;
        log::debug!("IInputSystem bound at {:p}", input_system.as_ptr());

        Ok(Self { input_system })
    }

    /// Returns an immutable reference to the IInputSystem interface.
    pub fn input_system(&self) -> &IInputSystem {
        &self.input_system
    }
}

/// Makes `interfaces` available process-wide through [`get`].
/// Fails if interfaces were already installed.
pub fn install(interfaces: Interfaces) -> anyhow::Result<&'static Interfaces> {
    let mut installed = false;
    let current = INTERFACES.get_or_init(|| {
        installed = true;
        interfaces
    });
    if !installed {
        anyhow::bail!("Re-initialization is prohibited!");
    }

    log::info!("Engine interfaces installed.");
    Ok(current)
}

/// The installed interfaces, if [`install`] has run.
pub fn get() -> Option<&'static Interfaces> {
    INTERFACES.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr::{self, NonNull};

    #[test]
    fn rejects_null_interface() {
        let err = unsafe { Interfaces::from_raw(ptr::null_mut()) }.err().unwrap();
        assert!(err.to_string().contains("IInputSystem"));
    }

    // The only test touching the global, so no ordering between tests matters.
    #[test]
    fn installs_once() {
        let fake = NonNull::<c_void>::dangling().as_ptr();
        let first = unsafe { Interfaces::from_raw(fake) }.unwrap();
        let second = unsafe { Interfaces::from_raw(fake) }.unwrap();

        assert!(get().is_none());
        let installed = install(first).unwrap();
        assert_eq!(installed.input_system().as_ptr(), fake);
        assert!(get().is_some());

        assert!(install(second).is_err());
        assert_eq!(get().unwrap().input_system().as_ptr(), fake);
    }
}
