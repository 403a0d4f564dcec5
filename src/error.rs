use std::io;
use std::path::PathBuf;

/// Errors that stop the demo from starting. Shader compile and link failures
/// are not in here: those are logged and rendering carries on.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("sdl error: {0}")]
    Sdl(String),
    #[error("could not read shader binary {}", .path.display())]
    ShaderSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not load OpenGL function {0}")]
    GlLoad(&'static str),
}
