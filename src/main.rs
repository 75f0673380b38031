//! rExitTime main entrypoint.

use rexittime::run;
use rexittime::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
