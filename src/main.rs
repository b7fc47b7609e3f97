mod cli;
mod color;
mod command;
mod config;
mod error;
mod output;
mod schema;
mod template;

use std::process::ExitCode;

use crate::color::ColorScheme;

fn main() -> ExitCode {
    let args = cli::parse();
    let color_choice = if args.no_color {
        clap::ColorChoice::Never
    } else {
        args.color
    };
    color::init(color_choice);
    let output = output::Output::new(args.quiet);

    let result = match args.command {
        cli::Command::Generate(generate_args) => command::generate(generate_args, &output),
        cli::Command::Check(check_args) => command::check(check_args, &output),
        cli::Command::Config(config_args) => command::config(config_args.command, &output),
        cli::Command::Completions { shell, out_dir } => {
            command::completions(shell, out_dir.as_deref(), &output)
        }
        cli::Command::Man { out_dir } => command::man(out_dir.as_deref(), &output),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", ColorScheme::error("Error:"));
            ExitCode::FAILURE
        }
    }
}
