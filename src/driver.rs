use crate::color::{pack, unpack, Rgb};
use crate::device::{FbDevice, FrameBuffer};
use crate::discovery;
use crate::frame::{Frame, PixelSource};
use crate::mapping::{byte_offset, Rotation, FRAME_BYTES, GRID_SIZE};
use crate::Result;
use std::path::PathBuf;

/// Driver for one matrix.
///
/// The only persistent state is the mounting rotation; every pixel access
/// goes back to the device, so two drivers on the same node see each
/// other's writes (and may interleave — nothing here locks the device).
pub struct LedMatrix<F = FbDevice> {
    fb: F,
    rotation: Rotation,
}

impl LedMatrix<FbDevice> {
    /// Locate the Sense HAT framebuffer and attach to it.
    pub fn open() -> Result<Self> {
        let path = discovery::find_device()?;
        Ok(Self::new(FbDevice::new(path)))
    }

    /// Attach to a known device node, bypassing discovery.
    pub fn open_path(path: impl Into<PathBuf>) -> Self {
        Self::new(FbDevice::new(path))
    }
}

impl<F: FrameBuffer> LedMatrix<F> {
    pub fn new(fb: F) -> Self {
        Self {
            fb,
            rotation: Rotation::Deg0,
        }
    }

    pub fn port(&self) -> &F {
        &self.fb
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Color currently shown at logical (x, y).
    pub fn pixel(&mut self, x: u8, y: u8) -> Result<Rgb> {
        let offset = byte_offset(x, y, self.rotation)?;
        let raw = self.fb.read_all()?;
        Ok(unpack(u16::from_le_bytes([raw[offset], raw[offset + 1]])))
    }

    /// Set one pixel with a direct record write; no full-frame read.
    pub fn set_pixel(&mut self, x: u8, y: u8, rgb: Rgb) -> Result<()> {
        let offset = byte_offset(x, y, self.rotation)?;
        self.fb.write_record(offset, pack(rgb))
    }

    /// Read the whole matrix in one 128-byte read.
    pub fn pixels(&mut self) -> Result<Frame> {
        let raw = self.fb.read_all()?;
        let rotation = self.rotation;
        Frame::try_from_fn(|x, y| {
            let offset = byte_offset(x, y, rotation)?;
            Ok(unpack(u16::from_le_bytes([raw[offset], raw[offset + 1]])))
        })
    }

    /// Write all 64 cells, then push the assembled image to the device in
    /// one write. A failing device write surfaces immediately; whatever the
    /// device already absorbed stays — there is no rollback.
    pub fn set_pixels(&mut self, source: PixelSource<'_>) -> Result<()> {
        let mut raw = [0u8; FRAME_BYTES];
        for y in 0..GRID_SIZE as u8 {
            for x in 0..GRID_SIZE as u8 {
                let rgb = match &source {
                    PixelSource::Grid(frame) => frame.rows()[y as usize][x as usize],
                    PixelSource::Generator(cell) => cell(x, y),
                };
                let offset = byte_offset(x, y, self.rotation)?;
                raw[offset..offset + 2].copy_from_slice(&pack(rgb).to_le_bytes());
            }
        }
        self.fb.write_all(&raw)
    }

    /// Every cell the same color.
    pub fn fill(&mut self, rgb: Rgb) -> Result<()> {
        self.set_pixels(PixelSource::Generator(&|_, _| rgb))
    }

    /// Switch every pixel off.
    pub fn clear(&mut self) -> Result<()> {
        self.fill(Rgb::BLACK)
    }

    /// Change the mounting rotation, re-projecting the current image so the
    /// viewer sees the same content afterwards.
    ///
    /// The read-then-rewrite is not atomic with respect to other writers of
    /// the same device node.
    pub fn set_rotation(&mut self, rotation: Rotation) -> Result<()> {
        let frame = self.pixels()?;
        self.rotation = rotation;
        self.set_pixels(PixelSource::Grid(frame))
    }

    /// Mirror the image left-to-right. Independent of rotation.
    pub fn flip_horizontal(&mut self) -> Result<()> {
        let frame = self.pixels()?;
        self.set_pixels(PixelSource::Grid(frame.flipped_horizontal()))
    }

    /// Mirror the image top-to-bottom. Independent of rotation.
    pub fn flip_vertical(&mut self) -> Result<()> {
        let frame = self.pixels()?;
        self.set_pixels(PixelSource::Grid(frame.flipped_vertical()))
    }
}
