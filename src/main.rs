//! sqlconnect main entrypoint.

use sqlconnect::run;
use sqlconnect::ui::messages;

fn main() {
    if let Err(e) = run() {
        messages::error(e);
        std::process::exit(1);
    }
}
