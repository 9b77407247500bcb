//! Background tasks module
//! 
//! This module contains the tasks that run the studio: the frame driver that
//! owns all tool state, the console input reader and the renderer.

pub mod frame_driver;
pub mod input_reader;
pub mod renderer;

// Re-export main functions
pub use frame_driver::{frame_driver_task, Outputs};
pub use input_reader::input_reader_task;
pub use renderer::{renderer_task, RenderOptions};
