#![cfg_attr(not(any(test, doctest)), no_std)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

//! Multiprotocol radio stack integration glue for Nordic nRF SoCs.
//!
//! The vendor multiprotocol stack owns the radio hardware with hard real-time
//! requirements, but it leaves three concerns to the host environment:
//!
//! * servicing its three zero-latency interrupt sources (timer, RTC, radio)
//!   and deferring the heavy low-priority processing to a task context,
//! * exclusive assignment of pins and routing channels to an optional
//!   front-end module before the stack starts,
//! * static memory for timeslot sessions shared by competing protocols.
//!
//! This crate provides that glue. The [`init`](crate::init) module runs the
//! ordered bring-up sequence, the [`dispatch`](crate::dispatch) module hosts
//! the interrupt top halves, and the [`worker`](crate::worker) module owns the
//! single deferred processing loop.

#[cfg(not(any(feature = "mocked_platform", feature = "nrf52840")))]
compile_error!("One platform must be enabled as a build feature");

#[cfg(all(feature = "mocked_platform", feature = "nrf52840"))]
compile_error!("Cannot enable multiple platforms simultaneously (mocked and nrf52840)");

#[cfg(all(test, not(feature = "mocked_platform")))]
compile_error!("For tests \"mocked_platform\" feature shall be selected");

// This mod goes first so the other modules see its macros.
#[macro_use]
mod fmt;

pub mod board;
pub mod clock;
pub mod crit_sect; // Temporary pub, to support sharing statics with peer subsystems
pub mod dispatch;
pub mod hw;
pub mod mutex; // temporary pub, to support sharing statics with peer subsystems
pub mod signal;
pub mod stack;
pub mod timeslot;

/// Defines errors reported by this crate
pub mod error;

/// Front-end module resource configuration
pub mod fem;

/// Ordered bring-up of the multiprotocol stack
///
/// Call [`init`](init::init) before interrupts are live, then
/// [`start_worker`](init::start_worker) once kernel services are available.
pub mod init;

/// Mutual exclusion lock shared by every task-context caller of the stack
pub mod lock;

/// The deferred low-priority processing task
pub mod worker;
