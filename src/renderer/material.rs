use std::fs;
use std::path::Path;
use std::ptr;

use crate::error::Error;
use crate::renderer::gl;
use crate::renderer::handles::{Program, Shader};

pub const CUBE_VERTEX_SHADER_PATH: &str = "resources/shaders/cube-vertex.spv";
pub const CUBE_FRAGMENT_SHADER_PATH: &str = "resources/shaders/cube-fragment.spv";

const ENTRY_POINT: &[u8] = b"main\0";

/// The SPIR-V modules of a material, as read from disk.
#[derive(Debug, Clone, Default)]
pub struct ShaderBinaries {
    pub vertex: Vec<u8>,
    pub fragment: Vec<u8>,
}

impl ShaderBinaries {
    pub fn read(
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<ShaderBinaries, Error> {
        Ok(ShaderBinaries {
            vertex: read_shader_binary(vertex_path.as_ref())?,
            fragment: read_shader_binary(fragment_path.as_ref())?,
        })
    }
}

pub fn read_shader_binary(path: &Path) -> Result<Vec<u8>, Error> {
    fs::read(path).map_err(|source| Error::ShaderSource {
        path: path.to_path_buf(),
        source,
    })
}

/// A linked vertex + fragment program.
///
/// Compilation never fails outright: a shader that does not specialize or a
/// program that does not link is reported through the log, and the material
/// is kept around unlinked.
pub struct Material {
    vertex_shader: Shader,
    fragment_shader: Shader,
    program: Program,
    linked: bool,
}

impl Material {
    pub fn compile(binaries: &ShaderBinaries) -> Material {
        let vertex_shader = create_spirv_shader(gl::VERTEX_SHADER, &binaries.vertex);
        let fragment_shader = create_spirv_shader(gl::FRAGMENT_SHADER, &binaries.fragment);

        let program = Program::new();
        gl::call!(gl::AttachShader(program.id(), vertex_shader.id()));
        gl::call!(gl::AttachShader(program.id(), fragment_shader.id()));
        gl::call!(gl::LinkProgram(program.id()));
        let mut link_status = 0;
        gl::call!(gl::GetProgramiv(program.id(), gl::LINK_STATUS, &mut link_status));
        let linked = link_status != gl::FALSE as i32;
        if !linked {
            log::error!("Program Link Error: {}", gl::program_info_log(program.id()));
        }

        Material {
            vertex_shader,
            fragment_shader,
            program,
            linked,
        }
    }

    /// Makes this the active program. An unlinked material binds no program
    /// at all, so its draws produce nothing instead of a GL error.
    pub fn bind(&self) {
        let program = if self.linked { self.program.id() } else { 0 };
        gl::call!(gl::UseProgram(program));
    }

    pub fn is_linked(&self) -> bool {
        self.linked
    }

    pub fn program(&self) -> gl::types::GLuint {
        self.program.id()
    }

    pub fn shaders(&self) -> [gl::types::GLuint; 2] {
        [self.vertex_shader.id(), self.fragment_shader.id()]
    }
}

/// Loads a SPIR-V module into a new shader object and specializes it at
/// `main`. Errors raised by the driver on the way are logged, not propagated.
fn create_spirv_shader(kind: gl::types::GLenum, binary: &[u8]) -> Shader {
    let shader = Shader::new(kind);
    let id = shader.id();
    let stage = shader.stage_name();

    unsafe {
        gl::ShaderBinary(
            1,
            &id,
            gl::SHADER_BINARY_FORMAT_SPIR_V,
            binary.as_ptr().cast(),
            binary.len() as i32,
        )
    };
    if gl::SpecializeShader::is_loaded() {
        unsafe {
            gl::SpecializeShader(
                id,
                ENTRY_POINT.as_ptr().cast(),
                0,
                ptr::null(),
                ptr::null(),
            )
        };
    } else {
        log::error!("Shader Create Error: glSpecializeShader is not available on this context");
    }
    for error in gl::take_errors() {
        log::error!(
            "Shader Create Error: OpenGL error {} while loading the {stage} binary",
            gl::error_name(error),
        );
    }

    let mut compile_status = 0;
    gl::call!(gl::GetShaderiv(id, gl::COMPILE_STATUS, &mut compile_status));
    if compile_status == gl::FALSE as i32 {
        log::error!(
            "Shader Create Error: {stage} shader: {}",
            gl::shader_info_log(id)
        );
    }
    shader
}
