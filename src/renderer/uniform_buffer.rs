use std::marker::PhantomData;
use std::slice;

use bytemuck::Pod;

use crate::renderer::gl;
use crate::renderer::handles::Buffer;

/// A uniform buffer holding a single `T`, attached to a fixed binding point.
pub struct UniformBuffer<T: Pod> {
    buffer: Buffer,
    binding: gl::types::GLuint,
    _contents: PhantomData<T>,
}

impl<T: Pod> UniformBuffer<T> {
    pub fn new(binding: gl::types::GLuint, initial: &T) -> UniformBuffer<T> {
        let buffer = Buffer::new();
        gl::call!(gl::BindBuffer(gl::UNIFORM_BUFFER, buffer.id()));
        gl::buffer_data(gl::UNIFORM_BUFFER, slice::from_ref(initial), gl::DYNAMIC_DRAW);
        gl::call!(gl::BindBufferBase(gl::UNIFORM_BUFFER, binding, buffer.id()));
        gl::call!(gl::BindBuffer(gl::UNIFORM_BUFFER, 0));
        UniformBuffer {
            buffer,
            binding,
            _contents: PhantomData,
        }
    }

    /// Replaces the whole contents of the buffer.
    pub fn write(&mut self, value: &T) {
        gl::call!(gl::BindBuffer(gl::UNIFORM_BUFFER, self.buffer.id()));
        gl::buffer_data(gl::UNIFORM_BUFFER, slice::from_ref(value), gl::DYNAMIC_DRAW);
        gl::call!(gl::BindBuffer(gl::UNIFORM_BUFFER, 0));
    }

    pub fn binding(&self) -> gl::types::GLuint {
        self.binding
    }
}
