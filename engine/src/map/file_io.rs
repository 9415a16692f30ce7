use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::debug;

use super::types::MapError;

/// Reads at most `max_size` bytes of a map file. Longer files are truncated,
/// matching the fixed-buffer contract the front-ends rely on; the content is
/// not interpreted here. Only regular files are accepted.
pub fn read_map_file(path: &Path, max_size: usize) -> Result<String, MapError> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        debug!("Could not stat {}: {}", path.display(), e);
        MapError::Io(e)
    })?;

    if !metadata.is_file() {
        return Err(MapError::NotARegularFile(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let mut bytes = Vec::new();
    file.take(max_size as u64).read_to_end(&mut bytes)?;

    // Map glyphs are ASCII; anything else is left for the parser to reject
    // with a positioned error.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
