use std::env;
use std::fs::{self, File};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use gl_generator::{Api, Fallbacks, GlobalGenerator, Profile, Registry};
use naga::back::spv;
use naga::front::glsl;
use naga::valid::{Capabilities, ValidationFlags, Validator};
use naga::ShaderStage;

/// GLSL sources and the SPIR-V modules the demo loads from them at startup.
const SHADERS: [(&str, ShaderStage, &str); 2] = [
    (
        "resources/shaders/cube.vert",
        ShaderStage::Vertex,
        "resources/shaders/cube-vertex.spv",
    ),
    (
        "resources/shaders/cube.frag",
        ShaderStage::Fragment,
        "resources/shaders/cube-fragment.spv",
    ),
];

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=build.rs");
    write_gl_bindings()?;
    let manifest_dir = env::var("CARGO_MANIFEST_DIR")?;
    for (source, stage, output) in SHADERS {
        println!("cargo:rerun-if-changed={source}");
        compile_shader(
            &Path::new(&manifest_dir).join(source),
            stage,
            &Path::new(&manifest_dir).join(output),
        )?;
    }
    Ok(())
}

fn write_gl_bindings() -> Result<()> {
    let out_dir = env::var("OUT_DIR")?;
    let mut file = File::create(Path::new(&out_dir).join("bindings.rs"))?;
    // 4.6 is the first core version with glSpecializeShader. The context is
    // 4.3, so the ARB_gl_spirv names are picked up through the fallbacks.
    Registry::new(
        Api::Gl,
        (4, 6),
        Profile::Core,
        Fallbacks::All,
        ["GL_ARB_gl_spirv"],
    )
    .write_bindings(GlobalGenerator, &mut file)?;
    Ok(())
}

fn compile_shader(source_path: &Path, stage: ShaderStage, output_path: &Path) -> Result<()> {
    let source = fs::read_to_string(source_path)
        .with_context(|| format!("reading {}", source_path.display()))?;
    let module = glsl::Frontend::default()
        .parse(&glsl::Options::from(stage), &source)
        .map_err(|err| anyhow!("parsing {}: {err:?}", source_path.display()))?;
    let info = Validator::new(ValidationFlags::all(), Capabilities::all())
        .validate(&module)
        .map_err(|err| anyhow!("validating {}: {err:?}", source_path.display()))?;
    // OpenGL clip space: no Y flip.
    let options = spv::Options {
        flags: spv::WriterFlags::LABEL_VARYINGS,
        ..spv::Options::default()
    };
    let words = spv::write_vec(&module, &info, &options, None)
        .map_err(|err| anyhow!("writing SPIR-V for {}: {err:?}", source_path.display()))?;
    fs::write(output_path, bytemuck::cast_slice::<u32, u8>(&words))
        .with_context(|| format!("writing {}", output_path.display()))?;
    Ok(())
}
