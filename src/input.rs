//! Polled input
//!
//! Controllers never read devices directly. The host samples its devices
//! once per frame into an `InputFrame` through an `InputSource`.

use std::collections::VecDeque;

/// Input state for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputFrame {
    /// Smoothed horizontal axis (-1..1)
    pub horizontal: f32,
    /// Smoothed vertical axis (-1..1)
    pub vertical: f32,
    /// Unsmoothed horizontal axis
    pub horizontal_raw: f32,
    /// Unsmoothed vertical axis
    pub vertical_raw: f32,
    /// Jump pressed this frame
    pub jump: bool,
    /// Dash pressed this frame
    pub dash: bool,
    /// Sprint held
    pub sprint: bool,
    /// Shield button held
    pub shield: bool,
    /// Bomb button pressed this frame
    pub bomb: bool,
}

impl InputFrame {
    /// Frame with both smoothed and raw axes set to the same values
    pub fn with_axes(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal,
            vertical,
            horizontal_raw: horizontal,
            vertical_raw: vertical,
            ..Default::default()
        }
    }
}

/// Something that can be sampled for the current frame's input
pub trait InputSource {
    fn sample(&mut self) -> InputFrame;
}

/// Plays back a fixed list of frames, then idles
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<InputFrame>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = InputFrame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Queue `frame` for `count` consecutive frames
    pub fn push_repeated(&mut self, frame: InputFrame, count: usize) {
        self.frames.extend(std::iter::repeat_n(frame, count));
    }

    pub fn push(&mut self, frame: InputFrame) {
        self.frames.push_back(frame);
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.frames.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn sample(&mut self) -> InputFrame {
        self.frames.pop_front().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_idles_when_exhausted() {
        let held = InputFrame {
            shield: true,
            ..Default::default()
        };
        let mut input = ScriptedInput::default();
        input.push_repeated(held, 2);
        assert_eq!(input.remaining(), 2);
        assert!(input.sample().shield);
        assert!(input.sample().shield);
        assert!(input.is_exhausted());
        assert_eq!(input.sample(), InputFrame::default());
    }

    #[test]
    fn test_with_axes_sets_raw() {
        let f = InputFrame::with_axes(1.0, -0.5);
        assert_eq!(f.horizontal_raw, 1.0);
        assert_eq!(f.vertical_raw, -0.5);
        assert!(!f.bomb);
    }
}
