//! rCalSpan main entrypoint.

use rcalspan::run;
use rcalspan::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
