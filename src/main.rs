use haloheat::cli::Args;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::cli_setup("haloheat");
    let Some(config) = args.run_config() else {
        eprintln!("Error: nx, ny and niters are required");
        return ExitCode::FAILURE;
    };
    match haloheat::run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
