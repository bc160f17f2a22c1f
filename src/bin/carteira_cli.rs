use carteira_core::{cli, init};

fn main() {
    init();

    if let Err(err) = cli::run_cli() {
        eprintln!("fatal: {err}");
        std::process::exit(1);
    }
}
