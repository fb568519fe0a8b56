//! ORB Renderer - CPU sphere-silhouette ray casting
//!
//! A backwards (image-order) ray caster: one orthographic ray per
//! pixel, an analytic hit/miss test against a single sphere, a binary
//! color per outcome, and an uncompressed 24-bit BMP on disk.

mod bmp;
mod camera;
mod renderer;
mod sphere;

pub use bmp::{encode, quantize, write_bmp, BmpError, ChannelPolicy};
pub use camera::{OrthoCamera, RAY_DIRECTION};
pub use renderer::{render, shade, Color, ImageBuffer, RenderConfig, BACKGROUND, HIT_COLOR};
pub use sphere::{Intersection, Sphere};

/// Re-export Vec3 and the ray type from orb_math
pub use orb_math::{Ray, Vec3};
