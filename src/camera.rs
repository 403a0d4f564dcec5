use std::f32::consts::PI;

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec3};

const FOV_Y_DEGREES: f32 = 45.0;
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 100.0;

pub struct Camera {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Camera {
    /// The view matrix. The forward (+Z) and up (+Y) axes are rotated by the
    /// inverse of `rotation`.
    pub fn view(&self) -> Mat4 {
        let inverse = self.rotation.inverse();
        Mat4::look_at_rh(
            self.position,
            self.position + inverse * Vec3::Z,
            inverse * Vec3::Y,
        )
    }
}

impl Default for Camera {
    /// Three units out on +Z, turned around to face the origin.
    fn default() -> Camera {
        Camera {
            position: Vec3::new(0.0, 0.0, 3.0),
            rotation: Quat::IDENTITY * Quat::from_axis_angle(Vec3::Y, PI),
            scale: Vec3::ONE,
        }
    }
}

/// Perspective projection with OpenGL clip depth for a `width`x`height`
/// framebuffer.
pub fn projection(width: u32, height: u32) -> Mat4 {
    let aspect_ratio = width as f32 / height.max(1) as f32;
    Mat4::perspective_rh_gl(FOV_Y_DEGREES.to_radians(), aspect_ratio, Z_NEAR, Z_FAR)
}

/// Matches the std140 `Uniforms` block at binding 0 of the cube shaders.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CubeUniforms {
    pub mvp: Mat4,
    pub model: Mat4,
}

impl CubeUniforms {
    pub fn new(camera: &Camera, model: Mat4, width: u32, height: u32) -> CubeUniforms {
        CubeUniforms {
            mvp: projection(width, height) * camera.view() * model,
            model,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::mem;

    use glam::Vec4;

    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn default_camera_looks_at_the_origin() {
        let view = Camera::default().view();
        let origin = view.transform_point3(Vec3::ZERO);
        assert!(origin.abs_diff_eq(Vec3::new(0.0, 0.0, -3.0), EPSILON), "{origin}");
        let up = view.transform_vector3(Vec3::Y);
        assert!(up.abs_diff_eq(Vec3::Y, EPSILON), "{up}");
    }

    #[test]
    fn origin_lands_in_the_middle_of_the_screen() {
        let uniforms = CubeUniforms::new(&Camera::default(), Mat4::IDENTITY, 1024, 512);
        let clip = uniforms.mvp * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!((clip.w - 3.0).abs() < EPSILON, "{clip}");
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < EPSILON && ndc.y.abs() < EPSILON, "{ndc}");
        assert!(ndc.z > -1.0 && ndc.z < 1.0, "{ndc}");
    }

    #[test]
    fn whole_cube_is_in_front_of_the_camera() {
        let uniforms = CubeUniforms::new(&Camera::default(), Mat4::IDENTITY, 1024, 512);
        for corner in crate::mesh::Mesh::cube().vertices {
            let clip = uniforms.mvp * corner.extend(1.0);
            let ndc = clip.truncate() / clip.w;
            assert!(clip.w > 0.0);
            assert!(ndc.abs().cmple(Vec3::ONE).all(), "corner {corner} clipped: {ndc}");
        }
    }

    #[test]
    fn projection_follows_the_aspect_ratio() {
        let wide = projection(1024, 512);
        let square = projection(512, 512);
        assert!((wide.x_axis.x * 2.0 - square.x_axis.x).abs() < EPSILON);
        assert!((wide.y_axis.y - square.y_axis.y).abs() < EPSILON);
    }

    #[test]
    fn zero_height_does_not_produce_nan() {
        let projection = projection(800, 0);
        assert!(!projection.is_nan());
    }

    #[test]
    fn uniforms_are_two_packed_matrices() {
        assert_eq!(128, mem::size_of::<CubeUniforms>());
        let uniforms = CubeUniforms::new(&Camera::default(), Mat4::IDENTITY, 1024, 512);
        let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&uniforms));
        assert_eq!(&uniforms.mvp.to_cols_array()[..], &floats[..16]);
        assert_eq!(&Mat4::IDENTITY.to_cols_array()[..], &floats[16..]);
    }
}
