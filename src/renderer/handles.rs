//! Owned OpenGL object names. Each wrapper deletes its object on drop, so a
//! renderer torn down on any path releases everything it created.

use crate::renderer::gl;

pub struct Buffer {
    id: gl::types::GLuint,
}

impl Buffer {
    pub fn new() -> Buffer {
        let mut id = 0;
        gl::call!(gl::GenBuffers(1, &mut id));
        Buffer { id }
    }

    pub fn id(&self) -> gl::types::GLuint {
        self.id
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        gl::call!(gl::DeleteBuffers(1, &self.id));
    }
}

pub struct VertexArray {
    id: gl::types::GLuint,
}

impl VertexArray {
    pub fn new() -> VertexArray {
        let mut id = 0;
        gl::call!(gl::GenVertexArrays(1, &mut id));
        VertexArray { id }
    }

    pub fn id(&self) -> gl::types::GLuint {
        self.id
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        gl::call!(gl::DeleteVertexArrays(1, &self.id));
    }
}

pub struct Shader {
    id: gl::types::GLuint,
    kind: gl::types::GLenum,
}

impl Shader {
    pub fn new(kind: gl::types::GLenum) -> Shader {
        let id = gl::call!(gl::CreateShader(kind));
        Shader { id, kind }
    }

    pub fn id(&self) -> gl::types::GLuint {
        self.id
    }

    pub fn stage_name(&self) -> &'static str {
        match self.kind {
            gl::VERTEX_SHADER => "vertex",
            gl::FRAGMENT_SHADER => "fragment",
            _ => "unknown",
        }
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        gl::call!(gl::DeleteShader(self.id));
    }
}

pub struct Program {
    id: gl::types::GLuint,
}

impl Program {
    pub fn new() -> Program {
        let id = gl::call!(gl::CreateProgram());
        Program { id }
    }

    pub fn id(&self) -> gl::types::GLuint {
        self.id
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        gl::call!(gl::DeleteProgram(self.id));
    }
}
