use crate::mapping::{BYTES_PER_PIXEL, FRAME_BYTES};
use crate::Result;
use log::trace;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Random-access port onto the 128-byte pixel buffer.
///
/// Implementations own the open/act/close cycle per call; no descriptor is
/// cached across operations, so concurrent callers interleave at the whim
/// of the OS.
pub trait FrameBuffer {
    /// Read the entire 128-byte frame.
    fn read_all(&mut self) -> Result<[u8; FRAME_BYTES]>;
    /// Replace the entire frame in a single write, starting at offset 0.
    fn write_all(&mut self, frame: &[u8; FRAME_BYTES]) -> Result<()>;
    /// Write one 2-byte little-endian record at the given byte offset.
    fn write_record(&mut self, offset: usize, word: u16) -> Result<()>;
}

/// Framebuffer backed by a device node such as `/dev/fb1`.
pub struct FbDevice {
    path: PathBuf,
}

impl FbDevice {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FrameBuffer for FbDevice {
    fn read_all(&mut self) -> Result<[u8; FRAME_BYTES]> {
        let mut file = File::open(&self.path)?;
        let mut frame = [0u8; FRAME_BYTES];
        file.read_exact(&mut frame)?;
        trace!("read full frame from {}", self.path.display());
        Ok(frame)
    }

    fn write_all(&mut self, frame: &[u8; FRAME_BYTES]) -> Result<()> {
        let mut file = OpenOptions::new().write(true).open(&self.path)?;
        file.write_all(frame)?;
        file.flush()?;
        trace!("wrote full frame to {}", self.path.display());
        Ok(())
    }

    fn write_record(&mut self, offset: usize, word: u16) -> Result<()> {
        let mut file = OpenOptions::new().write(true).open(&self.path)?;
        file.seek(SeekFrom::Start(offset as u64))?;
        file.write_all(&word.to_le_bytes())?;
        file.flush()?;
        trace!(
            "wrote record 0x{word:04X} at offset {offset} to {}",
            self.path.display()
        );
        Ok(())
    }
}

/// In-process stand-in for the device node. Tests and host-side simulation
/// drive the same code paths without touching `/dev`.
#[derive(Clone, Debug)]
pub struct MemoryFrameBuffer {
    bytes: [u8; FRAME_BYTES],
    read_count: u32,
    write_count: u32,
}

impl Default for MemoryFrameBuffer {
    fn default() -> Self {
        Self {
            bytes: [0; FRAME_BYTES],
            read_count: 0,
            write_count: 0,
        }
    }
}

impl MemoryFrameBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bytes(&self) -> &[u8; FRAME_BYTES] {
        &self.bytes
    }

    /// Number of full-frame reads served.
    pub fn read_count(&self) -> u32 {
        self.read_count
    }

    /// Number of write operations served, whole-frame or single-record.
    pub fn write_count(&self) -> u32 {
        self.write_count
    }
}

impl FrameBuffer for MemoryFrameBuffer {
    fn read_all(&mut self) -> Result<[u8; FRAME_BYTES]> {
        self.read_count = self.read_count.wrapping_add(1);
        Ok(self.bytes)
    }

    fn write_all(&mut self, frame: &[u8; FRAME_BYTES]) -> Result<()> {
        self.write_count = self.write_count.wrapping_add(1);
        self.bytes.copy_from_slice(frame);
        Ok(())
    }

    fn write_record(&mut self, offset: usize, word: u16) -> Result<()> {
        if offset + BYTES_PER_PIXEL > FRAME_BYTES {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("record offset {offset} outside the {FRAME_BYTES}-byte frame"),
            )
            .into());
        }
        self.write_count = self.write_count.wrapping_add(1);
        self.bytes[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&word.to_le_bytes());
        Ok(())
    }
}
