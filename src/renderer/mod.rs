use std::ffi::c_void;

use bytemuck::Zeroable;
use glam::Mat4;
use sdl2::VideoSubsystem;

use crate::camera::{Camera, CubeUniforms};
use crate::error::Error;
use crate::mesh::Mesh;
use crate::options::DisplayOptions;

pub mod gl;
pub mod handles;
pub mod material;
pub mod mesh;
pub mod uniform_buffer;

use material::{Material, ShaderBinaries};
use mesh::GpuMesh;
use uniform_buffer::UniformBuffer;

/// The binding point of the `Uniforms` block in the cube shaders.
pub const UNIFORMS_BINDING: gl::types::GLuint = 0;

const CLEAR_COLOR: [f32; 4] = [0.15, 0.15, 0.15, 1.0];

/// Loads the OpenGL functions of the current context. Fails if even the
/// basics are missing, which means no usable context is current.
pub fn load_gl(video: &VideoSubsystem) -> Result<(), Error> {
    gl::load_with(|s| video.gl_get_proc_address(s) as *const c_void);
    if !gl::Viewport::is_loaded() {
        return Err(Error::GlLoad("glViewport"));
    }
    let (major, minor) = gl::version();
    log::info!("OpenGL {major}.{minor}");
    Ok(())
}

/// Draws the cube. Everything is set up in [`Renderer::new`]; a frame only
/// re-uploads the (unchanging) matrices and issues one draw call.
pub struct Renderer {
    uniform_buffer: UniformBuffer<CubeUniforms>,
    uniforms: CubeUniforms,
    cube: GpuMesh,
    material: Material,
}

impl Renderer {
    /// Expects [`load_gl`] to have been called for the current context.
    pub fn new(options: &DisplayOptions, shaders: &ShaderBinaries) -> Renderer {
        let DisplayOptions { width, height } = *options;
        gl::call!(gl::Viewport(0, 0, width as i32, height as i32));

        let uniform_buffer = UniformBuffer::new(UNIFORMS_BINDING, &CubeUniforms::zeroed());
        let cube = GpuMesh::upload(&Mesh::cube());
        let material = Material::compile(shaders);
        let uniforms = CubeUniforms::new(&Camera::default(), Mat4::IDENTITY, width, height);
        log::debug!(
            "renderer ready: {} indices, uniforms at binding {}",
            cube.index_count(),
            uniform_buffer.binding(),
        );

        Renderer {
            uniform_buffer,
            uniforms,
            cube,
            material,
        }
    }

    pub fn render(&mut self) {
        let [r, g, b, a] = CLEAR_COLOR;
        gl::call!(gl::ClearColor(r, g, b, a));
        gl::call!(gl::Clear(gl::COLOR_BUFFER_BIT));

        self.uniform_buffer.write(&self.uniforms);
        self.material.bind();
        self.cube.draw();
    }

    pub fn uniforms(&self) -> &CubeUniforms {
        &self.uniforms
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
}
