use std::fs;
use std::io;
use std::path::Path;

use crate::config::FetchTarget;
use crate::error::FetchError;

/// Downloads `source_url` and writes its body, as UTF-8 text, to `destination`.
///
/// The directory holding `destination` is created if missing (that directory
/// only, never its ancestors). Any existing file is overwritten. Nothing
/// touches the filesystem unless the server answered with a 2xx status.
pub fn fetch(source_url: &str, destination: &Path) -> Result<(), FetchError> {
    log::info!("Downloading from {} to {:?}", source_url, destination);

    let response = reqwest::blocking::get(source_url)?;

    let status = response.status();
    if !status.is_success() {
        log::warn!("Server answered {} for {}", status, source_url);
        return Err(FetchError::HttpStatus(status));
    }

    let bytes = response.bytes()?;
    let text = String::from_utf8_lossy(&bytes);

    if let Some(dir) = destination.parent() {
        ensure_dir(dir)?;
    }

    fs::write(destination, text.as_bytes()).map_err(|source| FetchError::Write {
        path: destination.to_path_buf(),
        source,
    })?;

    log::info!("Download completed: {} bytes", text.len());
    Ok(())
}

pub fn fetch_target(target: &FetchTarget) -> Result<(), FetchError> {
    fetch(&target.source_url, &target.destination)
}

fn ensure_dir(dir: &Path) -> Result<(), FetchError> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }

    match fs::create_dir(dir) {
        Ok(()) => {
            log::debug!("Created directory {:?}", dir);
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && dir.is_dir() => Ok(()),
        Err(source) => Err(FetchError::CreateDir {
            path: dir.to_path_buf(),
            source,
        }),
    }
}
