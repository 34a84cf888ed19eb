use calculator::ui::Context;
use std::process;

fn main() {
    if let Err(e) = calculator::cli::run() {
        Context::new().print_error(&format!("{:#}", e));
        process::exit(1);
    }
}
