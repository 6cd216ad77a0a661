//! rDriverlog main entrypoint.

use rdriverlog::run;
use rdriverlog::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
