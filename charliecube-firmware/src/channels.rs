//! Inter-task communication channels
//!
//! Defines the static signals used between Embassy tasks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Raised by the frame tick task when the frame clock elapses
///
/// Only a wake-up; the frame clock's own flag is the source of truth.
pub static FRAME_ELAPSED: Signal<CriticalSectionRawMutex, ()> = Signal::new();
