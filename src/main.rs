//! zeitaufzeichnung main entrypoint.

use zeitaufzeichnung::run;
use zeitaufzeichnung::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
