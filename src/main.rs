//! Flipswitch - an undoable light switch at the terminal.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use flipswitch::app::App;
use flipswitch::cli::Args;
use flipswitch::config::Config;
use flipswitch::error::Result;
use flipswitch::events::EventHandler;
use flipswitch::logging;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logging::init(args.log_level.as_deref()) {
        eprintln!("Logging disabled: {e}");
    }

    let result = run(&args);
    logging::shutdown();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Flipswitch failed");
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = Config::for_args(args)?;

    let mut app = App::new(config.settings);
    let mut events = EventHandler::new(io::stdin().lock());
    app.run(&mut events, &mut io::stdout().lock())
}
