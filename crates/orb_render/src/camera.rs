//! Orthographic camera for ray generation.

use orb_math::{Ray, Vec3};

/// All rays share this direction; the camera looks down -Z.
pub const RAY_DIRECTION: Vec3 = Vec3::new(0.0, 0.0, -1.0);

/// Orthographic camera on a plane at a fixed +Z offset.
///
/// Every pixel gets a parallel ray: the origin slides across the camera
/// plane so that pixel centers are symmetric about the image center, and
/// the direction is always [`RAY_DIRECTION`]. There is no field of view
/// and no perspective divide.
#[derive(Debug, Clone, Copy)]
pub struct OrthoCamera {
    pub image_width: u32,
    pub image_height: u32,
    /// Z coordinate of the camera plane.
    pub plane_offset: f32,
}

impl OrthoCamera {
    /// Default Z offset of the camera plane.
    pub const DEFAULT_PLANE_OFFSET: f32 = 100.0;

    /// Create a camera for the given image resolution.
    pub fn new(image_width: u32, image_height: u32) -> Self {
        Self {
            image_width,
            image_height,
            plane_offset: Self::DEFAULT_PLANE_OFFSET,
        }
    }

    /// Set the Z offset of the camera plane.
    pub fn with_plane_offset(mut self, plane_offset: f32) -> Self {
        self.plane_offset = plane_offset;
        self
    }

    /// Generate the ray for pixel (x, y).
    ///
    /// The origin is offset so that x = 0.5 * (width - 1) maps to the
    /// image center; for even dimensions the center falls between the
    /// two middle pixels.
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        let origin_x = x as f32 - 0.5 * (self.image_width as f32 - 1.0);
        let origin_y = y as f32 - 0.5 * (self.image_height as f32 - 1.0);

        Ray::new(
            Vec3::new(origin_x, origin_y, self.plane_offset),
            RAY_DIRECTION,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_pixel_origin() {
        let camera = OrthoCamera::new(600, 600);
        let ray = camera.get_ray(0, 0);

        assert_eq!(ray.origin, Vec3::new(-299.5, -299.5, 100.0));
        assert_eq!(ray.direction, RAY_DIRECTION);
    }

    #[test]
    fn test_center_pixel_origin() {
        let camera = OrthoCamera::new(600, 600);
        let ray = camera.get_ray(299, 299);

        assert_eq!(ray.origin, Vec3::new(-0.5, -0.5, 100.0));
    }

    #[test]
    fn test_last_pixel_origin() {
        let camera = OrthoCamera::new(600, 600);
        let ray = camera.get_ray(599, 599);

        assert_eq!(ray.origin, Vec3::new(299.5, 299.5, 100.0));
    }

    #[test]
    fn test_odd_resolution_has_exact_center() {
        let camera = OrthoCamera::new(5, 5);
        let ray = camera.get_ray(2, 2);

        assert_eq!(ray.origin, Vec3::new(0.0, 0.0, 100.0));
    }

    #[test]
    fn test_direction_is_constant() {
        let camera = OrthoCamera::new(16, 16).with_plane_offset(50.0);

        for (x, y) in [(0, 0), (7, 3), (15, 15)] {
            let ray = camera.get_ray(x, y);
            assert_eq!(ray.direction, Vec3::new(0.0, 0.0, -1.0));
            assert_eq!(ray.origin.z, 50.0);
        }
    }
}
