//! Core state model and per-frame update pipeline for the photo ring
//! viewer.
//!
//! These modules intentionally avoid platform-specific APIs: the host
//! render loop stages input events, calls [`Viewer::tick`] once per
//! frame, and draws the returned [`FrameOutput`] however it likes.

pub mod camera;
pub mod constants;
pub mod focus;
pub mod frame;
pub mod input;
pub mod layout;
pub mod motion;
pub mod panel;
pub mod photos;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::*;
pub use constants::*;
pub use focus::*;
pub use frame::*;
pub use input::*;
pub use layout::*;
pub use motion::*;
pub use panel::*;
pub use photos::*;
