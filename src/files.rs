use std::{
    ffi::OsString,
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use tracing::info;

use crate::{compress_stream, expand_stream, Config, HuffError};

/// `a.txt` -> `a.txt.hh`
pub fn compressed_path(path: &Path, config: &Config) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(&config.extension);
    PathBuf::from(name)
}

/// `a.txt.hh` -> `a.txt`, anything else gets `.out` appended.
pub fn expanded_path(path: &Path, config: &Config) -> PathBuf {
    match path.extension() {
        Some(ext) if ext == config.extension.as_str() => path.with_extension(""),
        _ => {
            let mut name = OsString::from(path.as_os_str());
            name.push(".out");
            PathBuf::from(name)
        }
    }
}

fn check_input(path: &Path) -> Result<u64, HuffError> {
    if !path.exists() {
        return Err(HuffError::MissingFile(path.to_path_buf()));
    }
    Ok(fs::metadata(path)?.len())
}

/// Runs `produce` into a temporary file next to `output`, which replaces
/// `output` only once everything has been written.
fn write_output(
    output: &Path,
    produce: impl FnOnce(&mut BufWriter<NamedTempFile>) -> Result<(), HuffError>,
) -> Result<(), HuffError> {
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut sink = BufWriter::new(NamedTempFile::new_in(dir)?);
    produce(&mut sink)?;
    let temp = sink.into_inner().map_err(|e| e.into_error())?;
    temp.persist(output).map_err(|e| e.error)?;
    Ok(())
}

pub fn compress_file(path: &Path, config: &Config) -> Result<PathBuf, HuffError> {
    let size = check_input(path)?;
    if size == 0 {
        return Err(HuffError::EmptyFile(path.to_path_buf()));
    }

    let output = compressed_path(path, config);
    let mut source = File::open(path)?;
    write_output(&output, |sink| compress_stream(&mut source, sink))?;

    info!(
        input = %path.display(),
        output = %output.display(),
        original = size,
        compressed = fs::metadata(&output)?.len(),
        "compressed file"
    );
    Ok(output)
}

pub fn decompress_file(path: &Path, config: &Config) -> Result<PathBuf, HuffError> {
    let size = check_input(path)?;

    let output = expanded_path(path, config);
    let mut source = File::open(path)?;
    write_output(&output, |sink| expand_stream(&mut source, sink))?;

    info!(
        input = %path.display(),
        output = %output.display(),
        compressed = size,
        expanded = fs::metadata(&output)?.len(),
        "expanded file"
    );
    Ok(output)
}
