//! Geometry types shared by placement, sampling and output.

/// A node position in metres
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    /// A point on the ground plane
    pub fn planar(x: f64, y: f64) -> Self {
        Point3 { x, y, z: 0.0 }
    }

    /// Euclidean distance to `other`
    pub fn distance(&self, other: &Point3) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}
