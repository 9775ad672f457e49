pub mod camera;
pub mod constants;
pub mod curve;
pub mod driver;
pub mod epicycles;
pub mod fourier;
pub mod geometry;
pub mod render;
pub mod session;
pub mod stroke;
pub mod trail;

pub use camera::*;
pub use constants::*;
pub use curve::*;
pub use driver::*;
pub use epicycles::*;
pub use fourier::*;
pub use geometry::*;
pub use render::{draw_scene, DrawOp, DrawingContext, RecordingContext, Rgba, Viewport};
pub use session::*;
pub use stroke::*;
pub use trail::*;
