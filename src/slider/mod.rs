//! Image slider widget.
//!
//! Pure index arithmetic over a fixed set of slides, with wrap-around
//! navigation and a restartable auto-advance schedule.

mod autoplay;

pub use autoplay::{Autoplay, DEFAULT_INTERVAL};

/// Render snapshot of the slider: which slide is showing and which dot
/// is active.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SliderView {
    pub index: usize,
    pub dots: Vec<bool>,
}

/// Slider position over `len` slides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slider {
    index: usize,
    len: usize,
}

impl Slider {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advance to the next slide, wrapping at the end.
    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Go back one slide, wrapping at the start.
    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to a dot. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    pub fn view(&self) -> SliderView {
        SliderView {
            index: self.index,
            dots: (0..self.len).map(|i| i == self.index).collect(),
        }
    }
}
