mod args;
mod cli;
mod tui;

use std::process::exit;

fn main() {
    let args = args::parse();
    let result = if args.no_tui {
        env_logger::init();
        cli::run(&args)
    } else {
        tui::run(&args)
    };
    if let Err(e) = result {
        eprintln!("{e}");
        exit(1);
    }
}
