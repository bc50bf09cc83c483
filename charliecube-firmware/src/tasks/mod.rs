//! Embassy async tasks
//!
//! Each task runs on its own executor and communicates via signals.

pub mod foreground;
pub mod frame_tick;
pub mod render;

pub use foreground::foreground_task;
pub use frame_tick::{frame_tick_task, wait_frame};
pub use render::{render_task, CubeDriver};
