use std::process::ExitCode;

fn main() -> ExitCode {
    match chat_history_summarizer::cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
