// Entrypoint for the users console.
// - Keeps `main` small: build the fetcher from the environment and hand it
//   to the console loop, reading commands from stdin.
// - Logs go to stderr; set `RUST_LOG=info` to see load activity.

use std::io::{self, IsTerminal};
use users_console::{
    api::{Config, HttpFetcher},
    console::Console,
    output::Output,
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config {
        spinner: true,
        clear_line: io::stdout().is_terminal(),
        ..Config::from_env()
    };
    let fetcher = HttpFetcher::from_config(&config)?;

    // Blocks until `quit` or end of input; reporters are joined before return.
    let mut console = Console::new(fetcher, config, Output::stdout());
    console.run(io::stdin().lock())?;
    Ok(())
}
