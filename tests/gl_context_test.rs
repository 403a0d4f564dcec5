//! Needs a display and an OpenGL 4.3 driver, so these only run with
//! `--features integration-tests`.
#![cfg(feature = "integration-tests")]

use arete_gl::mesh::Mesh;
use arete_gl::options::DisplayOptions;
use arete_gl::renderer::material::{
    Material, ShaderBinaries, CUBE_FRAGMENT_SHADER_PATH, CUBE_VERTEX_SHADER_PATH,
};
use arete_gl::renderer::mesh::GpuMesh;
use arete_gl::renderer::{self, gl, Renderer};
use sdl2::video::GLProfile;

fn garbage_shaders() -> ShaderBinaries {
    ShaderBinaries {
        vertex: b"definitely not spir-v".to_vec(),
        fragment: Vec::new(),
    }
}

fn uploading_a_mesh_twice_gives_independent_objects() {
    let cube = Mesh::cube();
    let first = GpuMesh::upload(&cube);
    let second = GpuMesh::upload(&cube);
    assert!(first.is_valid());
    assert!(second.is_valid());
    assert_eq!(36, first.index_count());
    assert_eq!(first.index_count(), second.index_count());
    assert_ne!(first.vao(), second.vao());
    assert_ne!(first.vertex_buffer(), second.vertex_buffer());
    assert_ne!(first.index_buffer(), second.index_buffer());

    let first_vertex_buffer = first.vertex_buffer();
    let first_index_buffer = first.index_buffer();
    drop(first);
    assert_eq!(gl::FALSE, unsafe { gl::IsBuffer(first_vertex_buffer) });
    assert_eq!(gl::FALSE, unsafe { gl::IsBuffer(first_index_buffer) });
    assert!(second.is_valid());
}

fn broken_shaders_are_not_fatal() {
    let material = Material::compile(&garbage_shaders());
    assert!(!material.is_linked());
    material.bind();
    assert!(gl::take_errors().is_empty());

    let options = DisplayOptions {
        width: 64,
        height: 64,
    };
    let mut renderer = Renderer::new(&options, &garbage_shaders());
    let uniforms = *renderer.uniforms();
    renderer.render();
    renderer.render();
    assert_eq!(&uniforms, renderer.uniforms());
    assert!(!renderer.material().is_linked());
}

fn cube_shaders_link() {
    let shaders =
        ShaderBinaries::read(CUBE_VERTEX_SHADER_PATH, CUBE_FRAGMENT_SHADER_PATH).unwrap();
    let material = Material::compile(&shaders);
    assert!(material.is_linked());
    assert_eq!(gl::TRUE, unsafe { gl::IsProgram(material.program()) });
    for shader in material.shaders() {
        assert_eq!(gl::TRUE, unsafe { gl::IsShader(shader) });
        let mut compile_status = 0;
        unsafe { gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut compile_status) };
        assert_eq!(gl::TRUE as i32, compile_status);
    }

    let mut active_uniform_blocks = 0;
    unsafe {
        gl::GetProgramiv(
            material.program(),
            gl::ACTIVE_UNIFORM_BLOCKS,
            &mut active_uniform_blocks,
        )
    };
    assert_eq!(1, active_uniform_blocks);

    let options = DisplayOptions {
        width: 64,
        height: 64,
    };
    let mut renderer = Renderer::new(&options, &shaders);
    renderer.render();
    assert!(renderer.material().is_linked());
    assert!(gl::take_errors().is_empty());
}

// SDL may only be initialized from one thread, so everything that needs a
// context runs inside this single test.
#[test]
fn gl_context() {
    let sdl_context = sdl2::init().unwrap();
    let video_subsystem = sdl_context.video().unwrap();
    let gl_attr = video_subsystem.gl_attr();
    gl_attr.set_context_profile(GLProfile::Core);
    gl_attr.set_context_version(4, 3);
    let window = video_subsystem
        .window("arete-gl test", 64, 64)
        .opengl()
        .hidden()
        .build()
        .unwrap();
    let _gl_context = window.gl_create_context().unwrap();
    renderer::load_gl(&video_subsystem).unwrap();

    uploading_a_mesh_twice_gives_independent_objects();
    broken_shaders_are_not_fatal();
    cube_shaders_link();
}
