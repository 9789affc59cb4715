//! Entry point for the `kitespot` binary.
#![forbid(unsafe_code)]

use kitespot_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn main() {
    match kitespot_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("kitespot: {err}");
            std::process::exit(1);
        }
    }
}
