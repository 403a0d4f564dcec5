use std::borrow::Cow;
use std::ffi::c_void;

use bytemuck::Pod;

#[allow(clippy::all, non_camel_case_types, non_snake_case, non_upper_case_globals, unused)]
mod bindings {
    include!(concat!(env!("OUT_DIR"), "/bindings.rs"));
}

pub use bindings::*;

/// Runs a raw OpenGL call, and in debug builds panics if it raised an error.
macro_rules! call {
    ($expr:expr) => {{
        let result = unsafe { $expr };
        if cfg!(debug_assertions) {
            let error = unsafe { $crate::renderer::gl::GetError() };
            if error != $crate::renderer::gl::NO_ERROR {
                panic!(
                    "OpenGL error {} at {}:{}:{}",
                    $crate::renderer::gl::error_name(error),
                    file!(),
                    line!(),
                    column!(),
                );
            }
        }
        result
    }};
}

pub(crate) use call;

pub fn error_name(error: types::GLenum) -> Cow<'static, str> {
    match error {
        INVALID_ENUM => Cow::Borrowed("INVALID_ENUM"),
        INVALID_VALUE => Cow::Borrowed("INVALID_VALUE"),
        INVALID_OPERATION => Cow::Borrowed("INVALID_OPERATION"),
        OUT_OF_MEMORY => Cow::Borrowed("OUT_OF_MEMORY"),
        INVALID_FRAMEBUFFER_OPERATION => Cow::Borrowed("INVALID_FRAMEBUFFER_OPERATION"),
        _ => Cow::Owned(format!("{error}")),
    }
}

/// Drains the OpenGL error queue. Used around calls whose failure should be
/// reported instead of tripping [`call!`].
pub fn take_errors() -> Vec<types::GLenum> {
    let mut errors = Vec::new();
    loop {
        let error = unsafe { GetError() };
        if error == NO_ERROR {
            break;
        }
        errors.push(error);
    }
    errors
}

pub fn buffer_data<T: Pod>(target: types::GLenum, data: &[T], usage: types::GLenum) {
    let bytes: &[u8] = bytemuck::cast_slice(data);
    call!(BufferData(
        target,
        bytes.len() as isize,
        bytes.as_ptr() as *const c_void,
        usage,
    ));
}

/// The (major, minor) version of the current context.
pub fn version() -> (i32, i32) {
    let mut major = 0;
    let mut minor = 0;
    call!(GetIntegerv(MAJOR_VERSION, &mut major));
    call!(GetIntegerv(MINOR_VERSION, &mut minor));
    (major, minor)
}

pub fn shader_info_log(shader: types::GLuint) -> String {
    let mut length = 0;
    call!(GetShaderiv(shader, INFO_LOG_LENGTH, &mut length));
    let mut info_log = vec![0u8; length.max(1) as usize];
    let mut written = 0;
    call!(GetShaderInfoLog(
        shader,
        info_log.len() as i32,
        &mut written,
        info_log.as_mut_ptr().cast(),
    ));
    String::from_utf8_lossy(&info_log[..written.max(0) as usize]).into_owned()
}

pub fn program_info_log(program: types::GLuint) -> String {
    let mut length = 0;
    call!(GetProgramiv(program, INFO_LOG_LENGTH, &mut length));
    let mut info_log = vec![0u8; length.max(1) as usize];
    let mut written = 0;
    call!(GetProgramInfoLog(
        program,
        info_log.len() as i32,
        &mut written,
        info_log.as_mut_ptr().cast(),
    ));
    String::from_utf8_lossy(&info_log[..written.max(0) as usize]).into_owned()
}
