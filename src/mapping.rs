use crate::{MatrixError, Result};

pub const GRID_SIZE: usize = 8;
pub const PIXEL_COUNT: usize = GRID_SIZE * GRID_SIZE;
pub const BYTES_PER_PIXEL: usize = 2;
pub const FRAME_BYTES: usize = PIXEL_COUNT * BYTES_PER_PIXEL;

/// Mounting orientation of the matrix, in clockwise degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    pub fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }
}

impl TryFrom<u16> for Rotation {
    type Error = MatrixError;

    fn try_from(degrees: u16) -> Result<Self> {
        match degrees {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            270 => Ok(Rotation::Deg270),
            other => Err(MatrixError::InvalidRotation(other)),
        }
    }
}

/// Byte offset of the 2-byte record backing logical (x, y) under `rotation`.
///
/// The device buffer is row-major in physical space; the rotation decides
/// which physical cell a logical coordinate lands on.
pub fn byte_offset(x: u8, y: u8, rotation: Rotation) -> Result<usize> {
    if x as usize >= GRID_SIZE || y as usize >= GRID_SIZE {
        return Err(MatrixError::InvalidCoordinate { x, y });
    }
    let (x, y) = (x as usize, y as usize);
    let index = match rotation {
        Rotation::Deg0 => y * GRID_SIZE + x,
        Rotation::Deg90 => x * GRID_SIZE + (GRID_SIZE - 1 - y),
        Rotation::Deg180 => (GRID_SIZE - 1 - y) * GRID_SIZE + (GRID_SIZE - 1 - x),
        Rotation::Deg270 => (GRID_SIZE - 1 - x) * GRID_SIZE + y,
    };
    Ok(index * BYTES_PER_PIXEL)
}
