use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use jot::core::config;

#[derive(Parser)]
#[command(name = "jot", about = "A character-budgeted scratchpad for your terminal")]
struct Args {
    /// Placeholder text shown while the note is empty
    #[arg(short, long)]
    placeholder: Option<String>,

    /// Color fade duration in milliseconds
    #[arg(long)]
    transition_ms: Option<u64>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to jot.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("jot.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    // A malformed config file is the one fatal error in the app; a missing
    // one just means defaults.
    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::error!("{e}");
            eprintln!("jot: {e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(&file_config, args.placeholder.as_deref(), args.transition_ms);

    log::info!(
        "Jot starting up (transition {}ms, placeholder {:?})",
        resolved.transition_ms,
        resolved.placeholder
    );

    jot::tui::run(resolved)
}
