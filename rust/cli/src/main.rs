use std::io;

fn main() {
    referee_cli::logging::init_logging();
    let code = referee_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
