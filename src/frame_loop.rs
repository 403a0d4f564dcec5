//! The per-frame loop: render, present, poll, repeat until the window is
//! asked to close.

/// Where the loop is: drawing frames, or done because the window closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// One frame's worth of work, in the order [`FrameLoop::tick`] runs it.
pub trait Frame {
    /// Clears the framebuffer and records this frame's draw calls.
    fn render(&mut self);
    /// Swaps the finished frame onto the screen.
    fn present(&mut self);
    /// Handles pending window events without blocking. Returns whether the
    /// window has been asked to close.
    fn poll_events(&mut self) -> bool;
}

#[derive(Debug)]
pub struct FrameLoop {
    state: LoopState,
    ticks: u64,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLoop {
    pub fn new() -> FrameLoop {
        FrameLoop {
            state: LoopState::Running,
            ticks: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// The number of frames run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Runs a single frame. The close signal is only looked at after the
    /// frame has been presented, so the frame during which it shows up is
    /// still drawn in full. A terminated loop does nothing.
    pub fn tick(&mut self, frame: &mut impl Frame) -> LoopState {
        if self.state == LoopState::Terminated {
            return self.state;
        }
        frame.render();
        frame.present();
        let close_requested = frame.poll_events();
        self.ticks += 1;
        if close_requested {
            log::debug!("close requested during frame {}", self.ticks);
            self.state = LoopState::Terminated;
        }
        self.state
    }

    /// Ticks until terminated and returns the number of frames that ran.
    pub fn run(mut self, frame: &mut impl Frame) -> u64 {
        while self.tick(&mut *frame) == LoopState::Running {}
        self.ticks
    }
}
