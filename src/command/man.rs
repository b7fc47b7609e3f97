use crate::cli;
use crate::error::Result;
use crate::output::Output;

use std::fs;
use std::io;
use std::path::Path;

use clap_mangen::Man;

/// Execute the `man` subcommand.
pub(crate) fn run(out_dir: Option<&Path>, output: &Output) -> Result<()> {
    let cmd = cli::build();
    match out_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            clap_mangen::generate_to(cmd, dir)?;
            output.success(&format!("Created man pages in {}", dir.display()));
        }
        None => Man::new(cmd).render(&mut io::stdout())?,
    }
    Ok(())
}
