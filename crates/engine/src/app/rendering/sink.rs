use super::rasterizer::DrawInstruction;
use super::transform::PixelRect;

pub trait DrawSink {
    fn draw_tile(&mut self, instruction: &DrawInstruction);

    fn stroke_rect(&mut self, _rect: PixelRect) {}
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSink {
    pub tiles: Vec<DrawInstruction>,
    pub outlines: Vec<PixelRect>,
}

impl RecordingSink {
    pub fn clear(&mut self) {
        self.tiles.clear();
        self.outlines.clear();
    }
}

impl DrawSink for RecordingSink {
    fn draw_tile(&mut self, instruction: &DrawInstruction) {
        self.tiles.push(*instruction);
    }

    fn stroke_rect(&mut self, rect: PixelRect) {
        self.outlines.push(rect);
    }
}
