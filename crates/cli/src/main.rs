use std::process::ExitCode;

fn main() -> ExitCode {
    happycore_cli::run()
}
