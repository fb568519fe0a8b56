//! Sphere primitive and the analytic hit/miss classifier.

use orb_math::{Ray, Vec3};

/// A sphere defined by center and radius.
///
/// The constructor does not validate the radius; `radius > 0` is the
/// expected invariant. Non-positive radii are handled by [`Sphere::classify`],
/// which treats them as never hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

/// Outcome of a ray-sphere classification.
///
/// This is a binary silhouette test, not a depth query: there is no
/// intersection point, no parameter t, and no front/back distinction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intersection {
    Hit,
    Miss,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Classify a ray as hitting or missing this sphere.
    ///
    /// Solves the sign of the quadratic discriminant for
    /// |origin + t*direction - center|^2 = radius^2 and nothing more:
    /// no root is extracted and t is never checked to be positive, so a
    /// sphere behind the ray origin still classifies as a hit. The
    /// tangent case (discriminant exactly zero) counts as a hit.
    ///
    /// Degenerate inputs take explicit branches: a non-positive radius
    /// and a zero-length direction (where the quadratic collapses) both
    /// classify as a miss.
    pub fn classify(&self, ray: &Ray) -> Intersection {
        if self.radius <= 0.0 {
            return Intersection::Miss;
        }
        if ray.direction == Vec3::ZERO {
            return Intersection::Miss;
        }

        let oc = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * oc.dot(ray.direction);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            Intersection::Miss
        } else {
            Intersection::Hit
        }
    }
}
