//! `nw-check`: run installer validation checks from the command line
//!
//! Prints a `{"result": ...}` or `{"error": ...}` envelope. Exit status is 0
//! when the check passes, 1 when it fails and 2 on usage or input errors.

mod cli;

use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let matches = cli::command().get_matches();

    let code = match cli::run(&matches) {
        Ok(response) => match serde_json::to_string(&response) {
            Ok(body) => {
                println!("{body}");
                if response.is_ok() {
                    0
                } else {
                    1
                }
            }
            Err(e) => {
                eprintln!("error: failed to encode response: {e}");
                2
            }
        },
        Err(e) => {
            tracing::error!("check failed: {e:#}");
            eprintln!("error: {e:#}");
            2
        }
    };

    std::process::exit(code);
}
