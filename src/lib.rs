//! Raspberry Pi Sense HAT LED matrix driver.
//!
//! The HAT registers its 8x8 RGB matrix as a plain Linux framebuffer: a
//! 128-byte device file of 64 little-endian RGB565 records, one 2-byte
//! record per pixel. This crate locates that device under
//! `/sys/class/graphics`, packs colors to the wire format, and maps logical
//! coordinates through the configured mounting rotation.
//!
//! ```no_run
//! use sense_matrix::{LedMatrix, Rgb};
//!
//! let mut matrix = LedMatrix::open()?;
//! matrix.clear()?;
//! matrix.set_pixel(3, 4, Rgb::new(255, 0, 0))?;
//! # Ok::<(), sense_matrix::MatrixError>(())
//! ```

use thiserror::Error;

pub mod color;
pub mod device;
pub mod discovery;
pub mod driver;
pub mod frame;
pub mod mapping;

pub use color::{pack, unpack, Rgb};
pub use device::{FbDevice, FrameBuffer, MemoryFrameBuffer};
pub use discovery::{find_device, find_device_in, SENSE_HAT_FB_NAME};
pub use driver::LedMatrix;
pub use frame::{Frame, PixelSource};
pub use mapping::{byte_offset, Rotation, BYTES_PER_PIXEL, FRAME_BYTES, GRID_SIZE, PIXEL_COUNT};

pub type Result<T> = std::result::Result<T, MatrixError>;

#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("invalid color: {0}")]
    InvalidColor(String),
    #[error("coordinate ({x}, {y}) violates 0 <= x, y <= 7")]
    InvalidCoordinate { x: u8, y: u8 },
    #[error("rotation must be 0, 90, 180 or 270 degrees, got {0}")]
    InvalidRotation(u16),
    #[error("invalid frame shape: {0}")]
    InvalidFrameShape(String),
    #[error("framebuffer device unavailable: {0}")]
    DeviceUnavailable(#[from] std::io::Error),
}
