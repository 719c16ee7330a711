//! Embassy async tasks
//!
//! The motion watcher runs on the interrupt executor, the render loop on
//! the thread executor. They communicate via channels/signals only.

pub mod motion;
pub mod render;

pub use motion::motion_task;
pub use render::render_task;
