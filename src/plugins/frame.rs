use bevy::prelude::*;

/// Most recent rendered frame, RGBA8 premultiplied, row-major.
#[derive(Resource, Default, Debug, Clone)]
pub struct LatestFrame {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl LatestFrame {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: Vec::new(),
            width,
            height,
        }
    }

    pub fn update(&mut self, data: Vec<u8>) {
        self.data = data;
    }

    pub fn is_ready(&self) -> bool {
        !self.data.is_empty() && self.data.len() == (self.width * self.height * 4) as usize
    }
}
