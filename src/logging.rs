use std::fs::File;
use std::io;
use std::path::Path;

use simplelog::{Config, LevelFilter, WriteLogger};

/// Routes `log` records to `path`. The terminal UI owns stdout, so logs
/// never go to the screen.
pub fn init_file_logger(path: &Path, level: LevelFilter) -> io::Result<()> {
    let file = File::create(path)?;
    WriteLogger::init(level, Config::default(), file)
        .map_err(|error| io::Error::new(io::ErrorKind::AlreadyExists, error))
}
