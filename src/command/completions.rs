use crate::cli;
use crate::error::Result;
use crate::output::Output;

use std::fs;
use std::io;
use std::path::Path;

use clap_complete::Shell;

/// Execute the `completions` subcommand.
pub(crate) fn run(shell: Shell, out_dir: Option<&Path>, output: &Output) -> Result<()> {
    let mut cmd = cli::build();
    match out_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            let path = clap_complete::generate_to(shell, &mut cmd, "confgen", dir)?;
            output.success(&format!("Created: {}", path.display()));
        }
        None => clap_complete::generate(shell, &mut cmd, "confgen", &mut io::stdout()),
    }
    Ok(())
}
