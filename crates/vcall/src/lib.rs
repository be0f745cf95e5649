//! vcall: invoking C++ virtual member functions by vtable slot.
//!
//! The objects this crate talks to live inside a host process whose class
//! definitions we do not have. All we know about a method is the zero-based
//! index of its entry in the object's virtual table and the signature it was
//! compiled with. This crate turns that knowledge into a call:
//!
//! ```ignore
//! // bool IInputSystem::IsButtonDown(ButtonCode) lives in slot 15.
//! let down: bool = unsafe { vcall::call_vfunc(input_system, 15, (code,)) };
//! ```
//!
//! # Calling convention
//!
//! On 32-bit x86 Windows member functions use `thiscall` (receiver in `ecx`).
//! Everywhere else the receiver is simply the first argument of a C call:
//! the Itanium ABI does this on every target, and MSVC on x64 has a single
//! convention. [`vfunc_type!`] and [`thiscall!`] pick the right one so the same
//! source compiles for the game client and for a test host.
//!
//! Return values are passed through the declared Rust type. Scalars, pointers
//! and `bool` behave exactly like their C++ counterparts. Aggregates returned by
//! value are not supported: MSVC places the hidden return pointer differently
//! for member functions than for free functions.
//!
//! # Safety
//!
//! Nothing here is checked at runtime. A wrong pointer, a wrong slot or a wrong
//! signature is undefined behaviour inside the host and usually ends in an
//! access violation. There is no error value to inspect afterwards.

use std::ffi::c_void;

/// Expands to the function-pointer type of a member function taking the given
/// arguments (after the receiver) and returning `$ret`.
///
/// ```ignore
/// type FnIsButtonDown = vcall::vfunc_type!(ButtonCode => bool);
/// type FnResetInputState = vcall::vfunc_type!(=> ());
/// ```
#[cfg(all(target_arch = "x86", target_os = "windows"))]
#[macro_export]
macro_rules! vfunc_type {
    ($($arg:ty),* => $ret:ty) => {
        unsafe extern "thiscall" fn(*mut ::core::ffi::c_void $(, $arg)*) -> $ret
    };
}

#[cfg(not(all(target_arch = "x86", target_os = "windows")))]
#[macro_export]
macro_rules! vfunc_type {
    ($($arg:ty),* => $ret:ty) => {
        unsafe extern "C" fn(*mut ::core::ffi::c_void $(, $arg)*) -> $ret
    };
}

/// Defines functions that can sit in a C++ vtable on the current target.
///
/// The first parameter is the receiver. Used for test doubles and hook
/// targets that the host will call back into.
///
/// ```ignore
/// vcall::thiscall! {
///     fn is_button_down(this: *mut c_void, code: ButtonCode) -> bool { false }
/// }
/// ```
#[cfg(all(target_arch = "x86", target_os = "windows"))]
#[macro_export]
macro_rules! thiscall {
    ($(
        $(#[$meta:meta])*
        $vis:vis fn $name:ident($($arg:ident : $ty:ty),* $(,)?) $(-> $ret:ty)? $body:block
    )*) => {$(
        $(#[$meta])*
        $vis unsafe extern "thiscall" fn $name($($arg: $ty),*) $(-> $ret)? $body
    )*};
}

#[cfg(not(all(target_arch = "x86", target_os = "windows")))]
#[macro_export]
macro_rules! thiscall {
    ($(
        $(#[$meta:meta])*
        $vis:vis fn $name:ident($($arg:ident : $ty:ty),* $(,)?) $(-> $ret:ty)? $body:block
    )*) => {$(
        $(#[$meta])*
        $vis unsafe extern "C" fn $name($($arg: $ty),*) $(-> $ret)? $body
    )*};
}

/// Returns the virtual table pointer stored in the first word of `this`.
///
/// # Safety
///
/// `this` must point to readable memory at least one pointer wide.
pub unsafe fn vtable_of<T>(this: *const T) -> *const *const c_void {
    unsafe { *this.cast::<*const *const c_void>() }
}

/// Reads the entry at `index` of the virtual table of `this` as `F`.
///
/// `F` is expected to be a function pointer type, usually spelled with
/// [`vfunc_type!`].
///
/// # Safety
///
/// `this` must point to a live object whose first word is a vtable pointer,
/// and that vtable must have more than `index` entries. `F` must match the
/// real signature of the method in that slot.
pub unsafe fn get_vfunc<F, T>(this: *const T, index: usize) -> F {
    debug_assert_eq!(size_of::<F>(), size_of::<*const c_void>());
    unsafe {
        let vtable = *this.cast::<*const F>();
        vtable.add(index).read()
    }
}

mod private {
    pub trait Sealed {}
}

/// Argument lists that can be forwarded to a virtual function.
///
/// Implemented for tuples of up to eight elements; `()` is a call with no
/// arguments besides the receiver. Elements are passed in tuple order.
pub trait VirtualArgs: private::Sealed {
    /// Calls slot `index` of `this` with these arguments.
    ///
    /// # Safety
    ///
    /// See [`call_vfunc`].
    unsafe fn call<R>(self, this: *mut c_void, index: usize) -> R;
}

macro_rules! impl_virtual_args {
    ($($arg:ident),*) => {
        impl<$($arg),*> private::Sealed for ($($arg,)*) {}

        impl<$($arg),*> VirtualArgs for ($($arg,)*) {
            #[allow(non_snake_case)]
            #[inline(always)]
            unsafe fn call<R>(self, this: *mut c_void, index: usize) -> R {
                let ($($arg,)*) = self;
                unsafe {
                    let func: vfunc_type!($($arg),* => R) = get_vfunc(this as *const c_void, index);
                    func(this $(, $arg)*)
                }
            }
        }
    };
}

impl_virtual_args!();
impl_virtual_args!(A);
impl_virtual_args!(A, B);
impl_virtual_args!(A, B, C);
impl_virtual_args!(A, B, C, D);
impl_virtual_args!(A, B, C, D, E);
impl_virtual_args!(A, B, C, D, E, F);
impl_virtual_args!(A, B, C, D, E, F, G);
impl_virtual_args!(A, B, C, D, E, F, G, H);

/// Calls the virtual function in slot `index` of `this`, passing `this` as the
/// receiver followed by the elements of `args`, and returns its result as `R`.
///
/// # Safety
///
/// - `this` is non-null and points to a live instance whose vtable has at least
///   `index + 1` entries.
/// - `R` and the element types of `args` match the real method's signature
///   exactly, in order.
/// - Any pointers inside `args` are valid for whatever the method does with
///   them for the duration of the call.
///
/// Violating any of these is undefined behaviour in the host process.
#[inline(always)]
pub unsafe fn call_vfunc<R, T, A: VirtualArgs>(this: *mut T, index: usize, args: A) -> R {
    unsafe { args.call(this.cast::<c_void>(), index) }
}
