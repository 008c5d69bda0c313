use fltk::{
    enums::{Align, FrameType},
    frame::Frame,
    prelude::*,
};

use super::theme::Palette;

pub const STATUS_BAR_HEIGHT: i32 = 22;

/// Single-label status bar at the bottom of the window.
#[derive(Clone)]
pub struct StatusBar {
    pub frame: Frame,
}

impl StatusBar {
    pub fn new() -> Self {
        let mut frame = Frame::default();
        frame.set_frame(FrameType::FlatBox);
        frame.set_align(Align::Left | Align::Inside);
        frame.set_label_size(12);
        let mut bar = Self { frame };
        bar.apply_palette(&Palette::light());
        bar
    }

    pub fn set_text(&mut self, text: &str) {
        // Leading space keeps the text off the window edge.
        self.frame.set_label(&format!(" {}", text));
        self.frame.redraw();
    }

    pub fn apply_palette(&mut self, palette: &Palette) {
        self.frame.set_color(palette.chrome_bg);
        self.frame.set_label_color(palette.chrome_fg);
        self.frame.redraw();
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}
