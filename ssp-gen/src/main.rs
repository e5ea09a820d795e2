use std::process::ExitCode;

fn main() -> ExitCode {
    match ssp_gen::entrypoint() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("[error] {err:#}");
            ExitCode::FAILURE
        }
    }
}
