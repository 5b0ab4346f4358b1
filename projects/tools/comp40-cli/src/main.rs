#![allow(unexpected_cfgs)]
#![cfg(not(tarpaulin_include))]

mod commands;
mod error;
mod util;
use argh::FromArgs;
use core::error::Error;
use error::CliError;
use std::io;
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Lossy image compressor storing every 2x2 block of pixels in 32 bits.
///
/// Compresses a PPM image, or decompresses a COMP40 stream back to PPM.
/// Output is written to standard output.
struct TopLevel {
    /// compress a PPM image (the default)
    #[argh(switch, short = 'c')]
    compress: bool,

    /// decompress a COMP40 stream into a PPM image
    #[argh(switch, short = 'd')]
    decompress: bool,

    /// log progress to standard error
    #[argh(switch, short = 'v')]
    verbose: bool,

    /// input file; standard input is read when omitted
    #[argh(positional)]
    input: Option<PathBuf>,
}

/// Direction selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Compress,
    Decompress,
}

impl TopLevel {
    fn mode(&self) -> Result<Mode, CliError> {
        match (self.compress, self.decompress) {
            (true, true) => Err(CliError::ConflictingModes),
            (_, false) => Ok(Mode::Compress),
            (false, true) => Ok(Mode::Decompress),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli: TopLevel = argh::from_env();
    util::init_logging(cli.verbose);

    let mode = cli.mode()?;
    let mut out = io::stdout().lock();
    util::with_input(cli.input.as_deref(), |input| match mode {
        Mode::Compress => commands::compress::handle_compress_command(input, &mut out),
        Mode::Decompress => commands::decompress::handle_decompress_command(input, &mut out),
    })?;

    Ok(())
}
