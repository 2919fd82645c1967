use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use ini2sh::{
    convert, find_settings_file, generate_init_file, init_logging, load_settings,
    merge_convert_options, write_assignments, CliConvertOptions, Colors,
    ConvertOptions, SettingsToml,
};
use tracing::debug;

#[derive(Parser)]
#[command(name = "ini2sh")]
#[command(
    version,
    about = "Parse config file and convert to POSIX shell configuration"
)]
struct Cli {
    /// INI file to convert
    config_file: Option<PathBuf>,

    /// Keep %(name)s references literal instead of expanding them
    #[arg(long)]
    no_interpolate: bool,

    /// Never decode JSON literals; every value becomes a scalar
    #[arg(long)]
    no_json: bool,

    /// Section whose keys every other section inherits
    #[arg(long, value_name = "NAME")]
    default_section: Option<String>,

    /// Specify settings file path (overrides auto-discovery of ini2sh.toml)
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Force colored diagnostics
    #[arg(long)]
    color: bool,

    /// Disable colored diagnostics
    #[arg(long)]
    no_color: bool,

    /// Generate a template ini2sh.toml settings file
    #[arg(long)]
    init: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let colors = Colors::detect(cli.color, cli.no_color);

    // Handle --init command
    if cli.init {
        return handle_init(colors);
    }

    let Some(config_file) = cli.config_file.as_deref() else {
        eprintln!("{}", Cli::command().render_usage());
        eprintln!("Parse config file and convert to POSIX shell configuration");
        return ExitCode::from(1);
    };

    // Load settings
    let settings = load_settings_file(&cli.settings, colors);

    // Merge settings: CLI > TOML > defaults
    let options = merge_convert_options(
        &build_cli_options(&cli),
        settings.as_ref().map(|s| &s.convert),
    );
    debug!(?options, "resolved options");

    match run(config_file, &options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}Error:{} {e}", colors.error(), colors.reset());
            ExitCode::from(1)
        }
    }
}

fn run(path: &Path, options: &ConvertOptions) -> Result<(), Box<dyn std::error::Error>> {
    let assignments = convert(path, options)?;
    write_assignments(&mut io::stdout().lock(), &assignments)?;
    Ok(())
}

fn handle_init(colors: Colors) -> ExitCode {
    match generate_init_file() {
        Ok(path) => {
            eprintln!("Created {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}Error:{} {e}", colors.error(), colors.reset());
            ExitCode::from(1)
        }
    }
}

fn load_settings_file(explicit_path: &Option<PathBuf>, colors: Colors) -> Option<SettingsToml> {
    let settings_path = explicit_path.clone().or_else(|| {
        std::env::current_dir()
            .ok()
            .and_then(|d| find_settings_file(&d))
    });

    settings_path.and_then(|p| match load_settings(&p) {
        Ok(settings) => {
            debug!(path = %p.display(), "using settings file");
            Some(settings)
        }
        Err(e) => {
            eprintln!(
                "{}Warning:{} Failed to load {}: {}",
                colors.warning(),
                colors.reset(),
                p.display(),
                e
            );
            None
        }
    })
}

fn build_cli_options(cli: &Cli) -> CliConvertOptions {
    // Boolean flags in clap are always present (default false), so we
    // treat false as "not set" for proper merging with the settings file.
    CliConvertOptions {
        no_interpolate: cli.no_interpolate.then_some(true),
        no_json: cli.no_json.then_some(true),
        default_section: cli.default_section.clone(),
    }
}
