use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "confgen")]
#[command(about = "Generate commented example configuration files from JSON Schema")]
#[command(version = VERSION_STRING)]
#[command(after_help = "\
OUTPUT FORMAT:
    confgen writes a YAML template that mirrors the schema:

    # Description of the field, wrapped at 70 columns
    # options for \"genome\" are:
    # - \"hg19\"
    # - \"mm10\"
    genome: hg19          # default value, or \"\" for strings without one
    tracks:
      -                   # one entry for arrays whose items are described
        name: \"\"

    Arrays whose items use \"$ref\" expand the referenced definition in place.

CONFIGURATION:
    confgen reads .confgen.yaml from the current directory, or the global
    config file (see 'confgen config show'). Command-line flags override it.

COLOR OUTPUT:
    --color=always    Always use colors
    --color=never     Never use colors (or use --no-color)
    --color=auto      Auto-detect terminal (default)

    Environment:
    NO_COLOR          When set to non-empty value, disables colors (https://no-color.org/)

EXAMPLES:
    confgen generate schema.yaml
        Print the example config for schema.yaml

    confgen generate schema.yaml -o config.example.yaml
        Write the example config to a file

    confgen generate schemas/ --out-dir examples/
        Write <name>.example.yaml for every schema under schemas/

    confgen check schemas/
        Report unresolved references and malformed arrays")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress messages
    #[arg(short, long, global = true, help_heading = "Shared Options")]
    pub quiet: bool,

    /// When to use colored output (always, auto, never)
    #[arg(
        long,
        value_name = "WHEN",
        default_value = "auto",
        conflicts_with = "no_color",
        global = true,
        help_heading = "Shared Options"
    )]
    pub color: clap::ColorChoice,

    /// Disable colored output (equivalent to --color=never)
    #[arg(long, global = true, help_heading = "Shared Options")]
    pub no_color: bool,
}

const VERSION_STRING: &str = env!("CONFGEN_VERSION_LABEL");

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Generate example configuration from schema files
    #[command(visible_alias = "gen")]
    Generate(GenerateArgs),

    /// Report schema problems that generation would skip over
    Check(CheckArgs),

    /// Manage .confgen.yaml configuration
    Config(ConfigArgs),

    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for
        shell: Shell,

        /// Write the script into this directory instead of stdout
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },

    /// Generate man page
    Man {
        /// Write confgen.1 and one page per subcommand into this directory
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },
}

/// Arguments for the `generate` subcommand.
#[derive(Parser, Debug)]
#[command(after_help = "\
INPUTS:
    Each input is a schema file (JSON or YAML), a directory, or '-' for stdin.
    Directories are searched recursively for files matching --include.

    With a single schema the template goes to stdout, or to --output.
    With several schemas, --out-dir is required and each template is
    written as <schema name>.example.yaml.

PROBLEMS:
    Unresolved \"$ref\" pointers, arrays without \"items\" and references
    nested deeper than --max-ref-depth are reported as warnings and the
    affected entry is left as a bare '-'. Use --strict to fail instead.")]
pub(crate) struct GenerateArgs {
    /// Schema files or directories
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Write the template to this file instead of stdout
    #[arg(short, long, conflicts_with = "out_dir")]
    pub output: Option<PathBuf>,

    /// Write one template per schema into this directory
    #[arg(short = 'd', long)]
    pub out_dir: Option<PathBuf>,

    #[command(flatten)]
    pub settings: GenerateSettings,
}

/// Arguments for the `check` subcommand.
#[derive(Parser, Debug)]
pub(crate) struct CheckArgs {
    /// Schema files or directories
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    #[command(flatten)]
    pub settings: GenerateSettings,
}

/// Flags overriding the configuration file.
#[derive(clap::Args, Debug, Default)]
pub(crate) struct GenerateSettings {
    /// Glob for files to pick up from directory inputs
    #[arg(long, value_name = "GLOB")]
    pub include: Option<String>,

    /// Width of description comments
    #[arg(short, long, value_name = "COLUMNS")]
    pub width: Option<usize>,

    /// Maximum depth of nested "$ref" follows
    #[arg(long, value_name = "N")]
    pub max_ref_depth: Option<usize>,

    /// Do not separate documented fields with empty lines
    #[arg(long)]
    pub compact: bool,

    /// Fail when the schema has unresolved references or malformed arrays
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `config` subcommand.
#[derive(Parser, Debug)]
#[command(after_help = "\
CONFIG FORMAT:
    wrap_width: 70                 # Optional, comment width
    max_ref_depth: 16              # Optional, nested $ref limit
    compact: false                 # Optional, no empty lines between fields
    include: '*.{json,yaml,yml}'   # Optional, filter for directory inputs
    strict: false                  # Optional, fail on schema problems

LOCATIONS:
    ./.confgen.yaml                       (checked first)
    $XDG_CONFIG_HOME/confgen/config.yaml  (Linux)
    ~/Library/Application Support/confgen/config.yaml (macOS)
    %APPDATA%\\confgen\\config.yaml         (Windows)")]
pub(crate) struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommand>,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub(crate) enum ConfigCommand {
    /// Validate the configuration file in use
    Validate,
    /// Generate JSON Schema for configuration
    Schema,
    /// Print the effective configuration
    Show,
    /// Create a new configuration file documenting every option
    New {
        /// Custom path for the config file
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Create the global config file instead of ./.confgen.yaml
        #[arg(short, long, conflicts_with = "path")]
        global: bool,

        /// Overwrite existing config file
        #[arg(short = 'O', long = "override")]
        override_existing: bool,
    },
}

pub(crate) fn parse() -> Cli {
    Cli::parse()
}

pub(crate) fn build() -> clap::Command {
    Cli::command()
}
