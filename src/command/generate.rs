use crate::cli::GenerateArgs;
use crate::error::{Error, Result};
use crate::output::Output;
use crate::schema::{self, SchemaFile};
use crate::template::{self, GenerateOptions, Report};

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Where generated templates go.
enum Target {
    Stdout,
    File(PathBuf),
    Dir(PathBuf),
}

/// Execute the `generate` subcommand.
pub(crate) fn run(args: GenerateArgs, output: &Output) -> Result<()> {
    let config = super::effective_config(&args.settings)?;
    let paths = schema::collect_inputs(&args.inputs, &config.include)?;

    let target = match (args.out_dir, args.output) {
        (Some(dir), _) => Target::Dir(dir),
        (None, Some(file)) if paths.len() == 1 => Target::File(file),
        (None, None) if paths.len() == 1 => Target::Stdout,
        (None, _) => return Err(Error::OutputDirRequired),
    };

    if let Target::Dir(dir) = &target {
        fs::create_dir_all(dir)?;
    }

    let mut problems = 0;
    for path in &paths {
        let schema = schema::load(path)?;
        let report = generate_one(&schema, &target, &config.generate, config.strict, output)?;
        for diagnostic in &report.diagnostics {
            output.diagnostic(&schema.path, diagnostic);
        }
        problems += report.diagnostics.len();
    }

    if config.strict && problems > 0 {
        return Err(Error::ProblemsFound { count: problems });
    }
    Ok(())
}

/// Render one schema and write it, unless `strict` and the schema has problems.
fn generate_one(
    schema: &SchemaFile,
    target: &Target,
    options: &GenerateOptions,
    strict: bool,
    output: &Output,
) -> Result<Report> {
    let (text, report) = template::render_to_string(&schema.document, options)?;
    if strict && !report.is_clean() {
        return Ok(report);
    }

    match target {
        Target::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
        Target::File(file) => write_template(file, &text, &schema.path, output)?,
        Target::Dir(dir) => {
            write_template(&dir.join(schema.output_name()), &text, &schema.path, output)?
        }
    }
    Ok(report)
}

fn write_template(target: &Path, text: &str, source: &Path, output: &Output) -> Result<()> {
    if let Some(parent) = target.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(target, text)?;
    output.wrote(source, target);
    Ok(())
}
