use crate::cli::CheckArgs;
use crate::error::{Error, Result};
use crate::output::Output;
use crate::schema;
use crate::template;

use std::io;

/// Execute the `check` subcommand.
///
/// Runs generation into a sink and reports every diagnostic. Fails if any
/// schema has problems, regardless of `strict`.
pub(crate) fn run(args: CheckArgs, output: &Output) -> Result<()> {
    let config = super::effective_config(&args.settings)?;
    let paths = schema::collect_inputs(&args.inputs, &config.include)?;

    let mut problems = 0;
    for path in &paths {
        let schema = schema::load(path)?;
        let report = template::generate(&schema.document, &mut io::sink(), &config.generate)?;
        for diagnostic in &report.diagnostics {
            output.diagnostic(&schema.path, diagnostic);
        }
        output.checked(&schema.path, report.diagnostics.len());
        problems += report.diagnostics.len();
    }

    if problems > 0 {
        return Err(Error::ProblemsFound { count: problems });
    }
    Ok(())
}
