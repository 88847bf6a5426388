//! 3D rotation and perspective projection

use libm::{cosf, sinf};

/// Distance of the eye from the cube centre, in cube units
const PERSPECTIVE_DISTANCE: f32 = 4.0;

/// Pixels per cube unit at zero depth
const SCALE: f32 = 18.0;

/// Rotation about each axis, in radians
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RotationAngles {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// An integer panel coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

/// Rotate a vertex about X, then Y, then Z and project it onto a panel
///
/// The result is centred on the panel; fractional coordinates truncate
/// toward zero.
pub fn project(vertex: [f32; 3], angles: RotationAngles, size: (u32, u32)) -> ScreenPoint {
    let [x, y, z] = vertex;

    // About X
    let (sin_x, cos_x) = (sinf(angles.x), cosf(angles.x));
    let yr = y * cos_x - z * sin_x;
    let zr = y * sin_x + z * cos_x;
    let xr = x;

    // About Y
    let (sin_y, cos_y) = (sinf(angles.y), cosf(angles.y));
    let xrr = xr * cos_y + zr * sin_y;
    let zrr = -xr * sin_y + zr * cos_y;
    let yrr = yr;

    // About Z
    let (sin_z, cos_z) = (sinf(angles.z), cosf(angles.z));
    let xrrr = xrr * cos_z - yrr * sin_z;
    let yrrr = xrr * sin_z + yrr * cos_z;
    let zrrr = zrr;

    let scale = PERSPECTIVE_DISTANCE / (PERSPECTIVE_DISTANCE + zrrr) * SCALE;
    let centre_x = (size.0 / 2) as f32;
    let centre_y = (size.1 / 2) as f32;

    ScreenPoint {
        x: (xrrr * scale + centre_x) as i32,
        y: (yrrr * scale + centre_y) as i32,
    }
}
