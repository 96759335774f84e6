use clap::Parser;

use cli::args::Cli;
use cli::{commands, logging};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let code = commands::dispatch(cli.selector.as_deref(), &cli.args);
    std::process::exit(code);
}
