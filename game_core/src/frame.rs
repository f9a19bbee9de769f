//! Frame scheduling

/// Something that calls back once per displayed frame
pub trait FrameSource {
    /// Drive `frame` for as long as this source produces frames.
    ///
    /// Display-backed sources never stop; the call returns after the first
    /// frame has been scheduled.
    fn run<F: FnMut() + 'static>(self, frame: F);
}

/// Runs a fixed number of frames back to back, then returns
#[derive(Debug, Clone, Copy)]
pub struct FixedFrames(pub u32);

impl FrameSource for FixedFrames {
    fn run<F: FnMut() + 'static>(self, mut frame: F) {
        for _ in 0..self.0 {
            frame();
        }
    }
}
