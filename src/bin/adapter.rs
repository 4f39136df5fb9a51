use std::process::ExitCode;

use design_patterns::catalogue::{run_standalone, Pattern};

fn main() -> ExitCode {
    run_standalone(Pattern::Adapter)
}
