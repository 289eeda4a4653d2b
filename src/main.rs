//! AGC Edit Gate - hook entry point.

use agc_edit_gate::decision::Decision;
use agc_edit_gate::input::{HookInput, InputError};
use agc_edit_gate::output::format_response;
use agc_edit_gate::policy::evaluate;

use std::io::{self, Read};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Read JSON from stdin
    let mut input_str = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input_str) {
        eprintln!("Unexpected error: {}", e);
        return ExitCode::from(1);
    }

    // Parse input and extract the proposed path
    let path = match HookInput::parse(&input_str).and_then(|input| {
        input.file_path().map(str::to_owned)
    }) {
        Ok(p) => p,
        Err(InputError::Json(e)) => {
            eprintln!("Error parsing JSON input: {}", e);
            return ExitCode::from(1);
        }
        Err(e) => {
            eprintln!("Unexpected error: {}", e);
            return ExitCode::from(1);
        }
    };

    // Evaluate policy and report the verdict via exit status
    let decision = evaluate(&path);
    match &decision {
        Decision::Allow => ExitCode::SUCCESS,
        Decision::Block(_) => {
            if let Some(msg) = format_response(&decision) {
                eprintln!("{}", msg);
            }
            ExitCode::from(2)
        }
    }
}
