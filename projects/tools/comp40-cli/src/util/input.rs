use crate::error::{CliError, ResourceError};
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Runs `process` over the full contents of the input.
///
/// Files are memory mapped for the duration of the call. When `path` is [`None`],
/// standard input is read to the end first.
pub fn with_input<R>(
    path: Option<&Path>,
    process: impl FnOnce(&[u8]) -> Result<R, CliError>,
) -> Result<R, CliError> {
    match path {
        Some(path) => with_file(path, process),
        None => {
            let mut data = Vec::new();
            io::stdin().lock().read_to_end(&mut data)?;
            debug!("Read {} bytes from standard input", data.len());
            process(&data)
        }
    }
}

fn with_file<R>(
    path: &Path,
    process: impl FnOnce(&[u8]) -> Result<R, CliError>,
) -> Result<R, CliError> {
    let resource_error = |source: ResourceError| CliError::Resource {
        path: path.to_path_buf(),
        source,
    };

    let handle = ReadOnlyFileHandle::open(path).map_err(|e| resource_error(e.into()))?;
    let size = handle.size().map_err(|e| resource_error(e.into()))? as usize;
    debug!("Mapping {} ({} bytes)", path.display(), size);

    // Empty files cannot be mapped.
    if size == 0 {
        return process(&[]);
    }

    let mapping = ReadOnlyMmap::new(&handle, 0, size).map_err(|e| resource_error(e.into()))?;
    process(mapping.as_slice())
}
