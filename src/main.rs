use clap::error::ErrorKind;
use clap::Parser;

#[derive(Debug, Clone, Copy)]
enum ResponseMode {
    Json,
    Text,
}

mod commands;
mod output;
mod tty;

use commands::rebrand::{self, RebrandArgs};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "wp-rebrand")]
#[command(version = VERSION)]
#[command(about = "Rebrand a WordPress plugin template from its template.json")]
struct Cli {
    #[command(flatten)]
    args: RebrandArgs,
}

/// Parse flags with clap; if it rejects the argument list, fall back to
/// presence detection so unknown flags are ignored.
fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => Cli {
            args: RebrandArgs::from_flags(std::env::args().skip(1)),
        },
    }
}

fn response_mode(args: &RebrandArgs) -> ResponseMode {
    if args.json {
        ResponseMode::Json
    } else {
        ResponseMode::Text
    }
}

fn main() -> std::process::ExitCode {
    let cli = parse_cli();

    let exit_code = match response_mode(&cli.args) {
        ResponseMode::Json => {
            let (json_result, exit_code) =
                output::map_cmd_result_to_json(rebrand::run(cli.args));
            if let Err(err) = output::print_json_result(json_result) {
                output::print_error_text(&err);
                return std::process::ExitCode::from(exit_code_to_u8(1));
            }
            exit_code
        }
        ResponseMode::Text => match rebrand::run_markdown(cli.args) {
            Ok((content, exit_code)) => {
                print!("{}", content);
                exit_code
            }
            Err(err) => {
                output::print_error_text(&err);
                output::exit_code_for_error(err.code)
            }
        },
    };

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
