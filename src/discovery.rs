use crate::{MatrixError, Result};
use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Contents of the `name` descriptor the Sense HAT kernel driver registers
/// for its framebuffer.
pub const SENSE_HAT_FB_NAME: &str = "RPi-Sense FB";

const GRAPHICS_CLASS: &str = "/sys/class/graphics";

/// Locate the Sense HAT matrix framebuffer and return its `/dev` node.
pub fn find_device() -> Result<PathBuf> {
    find_device_in(Path::new(GRAPHICS_CLASS))
}

/// Scan `root` for `fb*` entries whose `name` descriptor matches the Sense
/// HAT identifier. The first match (in path order) wins; entries without a
/// readable descriptor are skipped.
pub fn find_device_in(root: &Path) -> Result<PathBuf> {
    let mut candidates: Vec<PathBuf> = fs::read_dir(root)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with("fb"))
        })
        .collect();
    // read_dir order is arbitrary; sort so "first match" is deterministic.
    candidates.sort();

    for class_path in candidates {
        match fs::read_to_string(class_path.join("name")) {
            Ok(name) if name.trim() == SENSE_HAT_FB_NAME => {
                if let Some(node) = device_node(&class_path) {
                    info!("Sense HAT matrix framebuffer at {}", node.display());
                    return Ok(node);
                }
            }
            Ok(_) => {}
            Err(err) => debug!("skipping {}: {err}", class_path.display()),
        }
    }

    Err(MatrixError::DeviceUnavailable(io::Error::new(
        io::ErrorKind::NotFound,
        "no Sense HAT matrix framebuffer registered; is this a Pi with the HAT attached?",
    )))
}

/// `/sys/class/graphics/fbN` -> `/dev/fbN`.
fn device_node(class_path: &Path) -> Option<PathBuf> {
    class_path
        .file_name()
        .map(|name| Path::new("/dev").join(name))
}
