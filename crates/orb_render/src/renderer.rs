//! Raster driver: maps pixels to rays, classifies, and fills the buffer.

use std::path::PathBuf;

use orb_math::Vec3;

use crate::{ChannelPolicy, Intersection, OrthoCamera, Sphere};

/// RGB color with channels conceptually in [0, 1].
pub type Color = Vec3;

/// Color written for pixels whose ray hits the sphere.
pub const HIT_COLOR: Color = Vec3::new(1.0, 0.0, 0.0);

/// Background color written for misses.
pub const BACKGROUND: Color = Vec3::new(0.0, 0.0, 0.0);

/// Render configuration.
///
/// Defaults to a 600x600 image of a radius-120 sphere at the origin,
/// written to `sphere.bmp`.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Center of the single scene sphere
    pub sphere_center: Vec3,
    /// Radius of the single scene sphere
    pub sphere_radius: f32,
    /// Output BMP path
    pub output_path: PathBuf,
    /// Channel quantization policy for encoding
    pub channel_policy: ChannelPolicy,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            sphere_center: Vec3::ZERO,
            sphere_radius: 120.0,
            output_path: PathBuf::from("sphere.bmp"),
            channel_policy: ChannelPolicy::Truncate,
        }
    }
}

/// Map a classification outcome to its display color.
pub fn shade(outcome: Intersection) -> Color {
    match outcome {
        Intersection::Hit => HIT_COLOR,
        Intersection::Miss => BACKGROUND,
    }
}

/// Image buffer storing one [`Color`] per pixel.
///
/// The linear layout is `x + y * height`. For square images this is
/// indistinguishable from the usual `x + y * width` row-major layout;
/// callers are expected to keep `width == height` (see `linear_index`).
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with the background color.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![BACKGROUND; (width * height) as usize],
        }
    }

    /// Linear index of pixel (x, y).
    ///
    /// Multiplies by `height`, not `width`. The layout only differs from
    /// row-major when the image is non-square, and overruns the buffer
    /// when `height > width`; the indexing panics in that case rather
    /// than scrambling pixels silently.
    #[inline]
    pub fn linear_index(&self, x: u32, y: u32) -> usize {
        (x + y * self.height) as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.linear_index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let i = self.linear_index(x, y);
        self.pixels[i] = color;
    }
}

/// Render the configured scene to an image buffer.
///
/// Walks pixels top row first, left to right; each pixel gets a fresh
/// orthographic ray, a hit/miss classification against the single
/// sphere, and a binary color. The loop has no failure path.
pub fn render(config: &RenderConfig) -> ImageBuffer {
    let camera = OrthoCamera::new(config.width, config.height);
    let sphere = Sphere::new(config.sphere_center, config.sphere_radius);

    let mut image = ImageBuffer::new(config.width, config.height);

    for y in 0..config.height {
        for x in 0..config.width {
            let ray = camera.get_ray(x, y);
            let color = shade(sphere.classify(&ray));
            image.set(x, y, color);
        }
    }

    log::debug!(
        "rendered {}x{} pixels, sphere radius {}",
        config.width,
        config.height,
        config.sphere_radius
    );

    image
}
