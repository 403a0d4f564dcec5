use sdl2::event::{Event, WindowEvent};
use sdl2::video::{GLProfile, Window};
use sdl2::EventPump;

use arete_gl::frame_loop::{Frame, FrameLoop};
use arete_gl::logging::init_logging;
use arete_gl::options::DisplayOptions;
use arete_gl::renderer::material::{
    ShaderBinaries, CUBE_FRAGMENT_SHADER_PATH, CUBE_VERTEX_SHADER_PATH,
};
use arete_gl::renderer::{self, Renderer};
use arete_gl::Error;

fn main() -> anyhow::Result<()> {
    init_logging();

    let options = DisplayOptions::from_args(std::env::args().skip(1));
    log::info!("Display extent: {}x{}", options.width, options.height);

    let sdl_context = sdl2::init().map_err(Error::Sdl)?;
    let video_subsystem = sdl_context.video().map_err(Error::Sdl)?;
    let gl_attr = video_subsystem.gl_attr();
    gl_attr.set_context_profile(GLProfile::Core);
    gl_attr.set_context_version(4, 3);
    let window = video_subsystem
        .window("A Game", options.width, options.height)
        .opengl()
        .build()?;
    let _gl_context = window.gl_create_context().map_err(Error::Sdl)?;
    if let Err(err) = video_subsystem.gl_set_swap_interval(1) {
        log::warn!("could not enable vsync: {err}");
    }
    let event_pump = sdl_context.event_pump().map_err(Error::Sdl)?;
    renderer::load_gl(&video_subsystem)?;

    let shaders = ShaderBinaries::read(CUBE_VERTEX_SHADER_PATH, CUBE_FRAGMENT_SHADER_PATH)?;
    let mut demo = Demo {
        renderer: Renderer::new(&options, &shaders),
        event_pump,
        window,
        close_requested: false,
    };

    let frames = FrameLoop::new().run(&mut demo);
    log::debug!("exiting after {frames} frames");
    Ok(())
}

// Field order is drop order: the renderer's GL objects go before the window.
struct Demo {
    renderer: Renderer,
    event_pump: EventPump,
    window: Window,
    close_requested: bool,
}

impl Frame for Demo {
    fn render(&mut self) {
        self.renderer.render();
    }

    fn present(&mut self) {
        self.window.gl_swap_window();
    }

    fn poll_events(&mut self) -> bool {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::Window {
                    win_event: WindowEvent::Close,
                    ..
                } => self.close_requested = true,
                _ => {}
            }
        }
        self.close_requested
    }
}
