//! Seam between the register solver and the timer hardware.

use crate::registers::RegisterImage;

/// Destination for register images.
///
/// Implemented by the board driver to write TCCR1B and OCR1A. Loading must
/// not block: the driver interleaves it with its other cooperative work.
pub trait TimerPort {
    /// Programs the timer with `image`.
    fn load(&mut self, image: RegisterImage);
}

/// In-memory register file standing in for the timer.
#[derive(Debug, Default, Clone)]
pub struct MemoryPort {
    image: RegisterImage,
    loads: usize,
}

impl MemoryPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last register image loaded, all zero before the first load.
    pub fn image(&self) -> RegisterImage {
        self.image
    }

    /// Number of images loaded so far.
    pub fn loads(&self) -> usize {
        self.loads
    }
}

impl TimerPort for MemoryPort {
    fn load(&mut self, image: RegisterImage) {
        self.image = image;
        self.loads += 1;
    }
}

impl<P: TimerPort + ?Sized> TimerPort for &mut P {
    fn load(&mut self, image: RegisterImage) {
        (**self).load(image);
    }
}
