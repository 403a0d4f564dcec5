use std::ffi::c_void;
use std::mem;
use std::ptr;

use glam::Vec3;

use crate::mesh::Mesh;
use crate::renderer::gl;
use crate::renderer::handles::{Buffer, VertexArray};

/// The vertex attribute location of the position attribute.
pub const ATTR_LOC_POSITION: gl::types::GLuint = 0;

/// A [`Mesh`] living in GPU buffers, drawable with a single indexed call.
pub struct GpuMesh {
    vao: VertexArray,
    vertex_buffer: Buffer,
    index_buffer: Buffer,
    index_count: gl::types::GLsizei,
}

impl GpuMesh {
    /// Creates fresh buffers and a vertex array for the mesh. Every call
    /// allocates new objects, so uploading the same mesh twice yields two
    /// independent [`GpuMesh`]es.
    pub fn upload(mesh: &Mesh) -> GpuMesh {
        let vertex_buffer = Buffer::new();
        let index_buffer = Buffer::new();
        let vao = VertexArray::new();
        gl::call!(gl::BindVertexArray(vao.id()));

        gl::call!(gl::BindBuffer(gl::ARRAY_BUFFER, vertex_buffer.id()));
        gl::buffer_data(gl::ARRAY_BUFFER, &mesh.vertices, gl::STATIC_DRAW);
        gl::call!(gl::VertexAttribPointer(
            ATTR_LOC_POSITION,
            3,
            gl::FLOAT,
            gl::FALSE,
            mem::size_of::<Vec3>() as i32,
            ptr::null::<c_void>(),
        ));
        gl::call!(gl::EnableVertexAttribArray(ATTR_LOC_POSITION));

        // The element array binding is vertex array state, so it has to be
        // bound while the VAO is.
        gl::call!(gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, index_buffer.id()));
        gl::buffer_data(gl::ELEMENT_ARRAY_BUFFER, &mesh.indices, gl::STATIC_DRAW);

        gl::call!(gl::BindVertexArray(0));
        gl::call!(gl::BindBuffer(gl::ARRAY_BUFFER, 0));

        log::debug!(
            "uploaded mesh: {} vertices, {} triangles (vao {}, buffers {}/{})",
            mesh.vertices.len(),
            mesh.indices.len(),
            vao.id(),
            vertex_buffer.id(),
            index_buffer.id(),
        );

        GpuMesh {
            vao,
            vertex_buffer,
            index_buffer,
            index_count: mesh.index_count() as gl::types::GLsizei,
        }
    }

    pub fn draw(&self) {
        gl::call!(gl::BindVertexArray(self.vao.id()));
        gl::call!(gl::DrawElements(
            gl::TRIANGLES,
            self.index_count,
            gl::UNSIGNED_INT,
            ptr::null::<c_void>(),
        ));
        gl::call!(gl::BindVertexArray(0));
    }

    pub fn vao(&self) -> gl::types::GLuint {
        self.vao.id()
    }

    pub fn vertex_buffer(&self) -> gl::types::GLuint {
        self.vertex_buffer.id()
    }

    pub fn index_buffer(&self) -> gl::types::GLuint {
        self.index_buffer.id()
    }

    pub fn index_count(&self) -> gl::types::GLsizei {
        self.index_count
    }

    /// Whether the context still recognizes every object this mesh owns.
    pub fn is_valid(&self) -> bool {
        let vao = gl::call!(gl::IsVertexArray(self.vao.id()));
        let vertex_buffer = gl::call!(gl::IsBuffer(self.vertex_buffer.id()));
        let index_buffer = gl::call!(gl::IsBuffer(self.index_buffer.id()));
        [vao, vertex_buffer, index_buffer]
            .into_iter()
            .all(|is| is == gl::TRUE)
    }
}
