use comp40_codec::CodecError;
use comp40_ppm::PpmError;
use lightweight_mmap::handles::HandleOpenError;
use lightweight_mmap::mmap::MmapError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Cannot read {}: {source}", path.display())]
    Resource {
        path: PathBuf,
        #[source]
        source: ResourceError,
    },
    #[error("Only one of --compress and --decompress may be given")]
    ConflictingModes,
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Ppm(#[from] PpmError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Failure to open or map an input file.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error(transparent)]
    FileHandle(#[from] HandleOpenError),
    #[error(transparent)]
    MemoryMapping(#[from] MmapError),
}
