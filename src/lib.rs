//! An OpenGL cube demo: one window, one mesh, one SPIR-V material and a
//! camera fixed at startup, drawn every frame until the window is closed.

pub mod camera;
pub mod error;
pub mod frame_loop;
pub mod logging;
pub mod mesh;
pub mod options;
pub mod renderer;

pub use error::Error;
