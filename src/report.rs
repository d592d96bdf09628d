use std::io::Write;
use std::path::PathBuf;

use crate::config::FetchTarget;
use crate::download::fetch_target;
use crate::error::FetchError;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Fetches `target`, printing progress to `out` and any failure to `err`.
/// Returns the process exit code.
pub fn run<O: Write, E: Write>(target: &FetchTarget, out: &mut O, err: &mut E) -> i32 {
    let _ = writeln!(out, "Fetching file from {}", target.source_url);
    let result = fetch_target(target).map(|()| target.destination.clone());
    report(result, out, err)
}

/// Prints the outcome of a fetch and maps it to an exit code.
pub fn report<O: Write, E: Write>(result: Result<PathBuf, FetchError>, out: &mut O, err: &mut E) -> i32 {
    match result {
        Ok(destination) => {
            log::info!("Fetch completed successfully");
            let _ = writeln!(out, "Successfully saved file to {}", destination.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            log::error!("Fetch failed: {}", e);
            let _ = writeln!(err, "Error fetching file: {}", error_chain(&e));
            EXIT_FAILURE
        }
    }
}

fn error_chain(e: &FetchError) -> String {
    let mut msg = e.to_string();
    let mut source = std::error::Error::source(e);
    while let Some(cause) = source {
        let text = cause.to_string();
        if !msg.contains(&text) {
            msg.push_str(": ");
            msg.push_str(&text);
        }
        source = cause.source();
    }
    msg
}
