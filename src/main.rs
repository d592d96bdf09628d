use std::io;

use anyhow::Result;
use log::info;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

use llms_fetch::report::{self, run};
use llms_fetch::FetchTarget;

fn setup_logging() -> Result<()> {
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .set_location_level(LevelFilter::Debug)
        .build();

    TermLogger::init(LevelFilter::Info, config, TerminalMode::Stderr, ColorChoice::Auto)?;

    Ok(())
}

fn main() {
    if let Err(e) = setup_logging() {
        eprintln!("logging disabled: {}", e);
    }

    info!("llms-fetch starting");

    let (mut out, mut err) = (io::stdout(), io::stderr());
    let code = match FetchTarget::from_current_exe() {
        Ok(target) => run(&target, &mut out, &mut err),
        Err(e) => report::report(Err(e), &mut out, &mut err),
    };

    std::process::exit(code);
}
