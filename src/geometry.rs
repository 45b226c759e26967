//! Point and direction helpers shared by the atom and lattice layout engines.
//! All distances are in scene units (one unit = one nucleon diameter).

use std::f32::consts::PI;

pub type Point3 = [f32; 3];

pub const ORIGIN: Point3 = [0.0, 0.0, 0.0];

pub fn add(a: Point3, b: Point3) -> Point3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

pub fn sub(a: Point3, b: Point3) -> Point3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn scale(a: Point3, s: f32) -> Point3 {
    [a[0] * s, a[1] * s, a[2] * s]
}

pub fn length_sq(a: Point3) -> f32 {
    a[0] * a[0] + a[1] * a[1] + a[2] * a[2]
}

pub fn length(a: Point3) -> f32 {
    length_sq(a).sqrt()
}

pub fn distance_sq(a: Point3, b: Point3) -> f32 {
    length_sq(sub(a, b))
}

pub fn distance(a: Point3, b: Point3) -> f32 {
    distance_sq(a, b).sqrt()
}

/// Arithmetic mean of a point set. Empty input yields the origin.
pub fn centroid(points: &[Point3]) -> Point3 {
    if points.is_empty() {
        return ORIGIN;
    }
    let sum = points.iter().fold(ORIGIN, |acc, &p| add(acc, p));
    scale(sum, 1.0 / points.len() as f32)
}

/// Unit direction `k` of a `count`-point Fibonacci sphere.
///
/// Inclination is `acos(1 - 2(k + 0.5)/count)`, azimuth steps by the golden
/// angle `π(1 + √5)`.
pub fn fibonacci_direction(k: usize, count: usize) -> Point3 {
    let t = k as f32 + 0.5;
    let phi = (1.0 - 2.0 * t / count as f32).acos();
    let theta = PI * (1.0 + 5.0_f32.sqrt()) * t;
    [
        theta.cos() * phi.sin(),
        theta.sin() * phi.sin(),
        phi.cos(),
    ]
}

/// Rotate `p` by Euler angles applied in XYZ order (R = Rx · Ry · Rz).
pub fn rotate_euler_xyz(p: Point3, angles: [f32; 3]) -> Point3 {
    let [x, y, z] = p;

    // Rotate around Z axis
    let (sin_z, cos_z) = angles[2].sin_cos();
    let x1 = x * cos_z - y * sin_z;
    let y1 = x * sin_z + y * cos_z;
    let z1 = z;

    // Rotate around Y axis
    let (sin_y, cos_y) = angles[1].sin_cos();
    let x2 = x1 * cos_y + z1 * sin_y;
    let y2 = y1;
    let z2 = -x1 * sin_y + z1 * cos_y;

    // Rotate around X axis
    let (sin_x, cos_x) = angles[0].sin_cos();
    let x3 = x2;
    let y3 = y2 * cos_x - z2 * sin_x;
    let z3 = y2 * sin_x + z2 * cos_x;

    [x3, y3, z3]
}

/// `pivot + (original - pivot) * factor`
pub fn scale_about(pivot: Point3, original: Point3, factor: f32) -> Point3 {
    add(pivot, scale(sub(original, pivot), factor))
}
