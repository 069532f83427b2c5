use codecat::{CodeCat, CodeCatError, Config};
use std::process;

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let app = CodeCat::new(Config::default(), false);

    match app.run() {
        Ok(summary) => {
            if summary.files_failed == 0 {
                0
            } else {
                2 // Output written, but some files were skipped
            }
        }
        Err(error) => {
            app.handle_error(&error);

            match error {
                CodeCatError::SourceNotFound { .. } => 3,
                _ => 1,
            }
        }
    }
}
