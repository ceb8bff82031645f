use std::io;

use pokersum_cli::logging::init_logging;

fn main() {
    init_logging();
    let mut out = io::stdout();
    let mut err = io::stderr();
    let code = pokersum_cli::run(std::env::args(), &mut out, &mut err);
    std::process::exit(code);
}
