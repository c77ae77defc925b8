//! Seam between this crate and the vendor multiprotocol stack library
//!
//! The vendor stack is an already-implemented opaque dependency. Every call
//! this crate makes into it goes through the [`RadioStack`](traits::RadioStack)
//! trait, so the whole glue layer can be exercised on a host machine against a
//! mock of the stack.

pub mod traits;

#[cfg(any(all(feature = "mocked_platform", not(test)), feature = "nrf52840"))]
pub mod ffi;
/// Type of the vendor stack binding used in this build.
///
/// This type must implement the [`RadioStack`](traits::RadioStack) trait.
#[cfg(any(all(feature = "mocked_platform", not(test)), feature = "nrf52840"))]
pub type RadioStack = ffi::VendorStack;
#[cfg(all(test, feature = "mocked_platform"))]
pub type RadioStack = traits::MockRadioStack;
