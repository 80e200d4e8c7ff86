//! CLI entry point for treex

use std::env;
use std::fs;
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, ValueEnum};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use treex::{Error, Filter, OutputConfig, OutputFormat, Settings, TreeWalker, WalkerConfig};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to color diagnostics based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stderr().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "treex")]
#[command(about = "Render a directory as a tree, indented list, markdown list or mermaid graph")]
#[command(version)]
struct Args {
    /// Directory to scan [default: .]
    #[arg(short = 'd', long = "dir")]
    dir: Option<PathBuf>,

    /// Output format: tree, indent, md, mermaid [default: tree]
    #[arg(short = 'f', long = "format")]
    format: Option<String>,

    /// Maximum directory depth (0 or negative for unlimited)
    #[arg(short = 'm', long = "max-depth", allow_negative_numbers = true)]
    max_depth: Option<i64>,

    /// Write output to FILE instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Exclude rules, comma-separated (e.g. 'dir/, .txt, temp*')
    #[arg(short = 'e', long = "exclude")]
    exclude: Option<String>,

    /// Hide hidden files and directories
    #[arg(short = 'H', long = "hide-hidden")]
    hide_hidden: bool,

    /// Show directories only
    #[arg(short = 'D', long = "dirs-only")]
    dirs_only: bool,

    /// Exclude entries matching ./.gitignore
    #[arg(short = 'I', long = "use-gitignore")]
    use_gitignore: bool,

    /// Display file type icons
    #[arg(short = 'C', long = "icons")]
    icons: bool,

    /// Read settings from a TOML file (command-line values take precedence)
    #[arg(long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Control color of diagnostics: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log skipped entries and directory reads to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

/// Effective settings after merging the settings file with the command line.
struct Options {
    dir: PathBuf,
    format: OutputFormat,
    walker: WalkerConfig,
    exclude: String,
    use_gitignore: bool,
    output: OutputConfig,
    output_path: Option<PathBuf>,
}

impl Options {
    fn resolve(args: &Args) -> Result<Self> {
        let settings = match &args.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        let format = match args.format.as_deref().or(settings.format.as_deref()) {
            Some(name) => name.parse()?,
            None => OutputFormat::default(),
        };

        let walker = WalkerConfig {
            hide_hidden: args.hide_hidden || settings.hide_hidden.unwrap_or(false),
            dirs_only: args.dirs_only || settings.dirs_only.unwrap_or(false),
            ..Default::default()
        }
        .with_max_depth(args.max_depth.or(settings.max_depth).unwrap_or(0));

        let exclude = args.exclude.clone().or(settings.exclude);

        Ok(Self {
            dir: args
                .dir
                .clone()
                .or(settings.dir)
                .unwrap_or_else(|| PathBuf::from(".")),
            format,
            walker,
            exclude: exclude.unwrap_or_default(),
            use_gitignore: args.use_gitignore || settings.use_gitignore.unwrap_or(false),
            output: OutputConfig::default()
                .with_icons(args.icons || settings.icons.unwrap_or(false)),
            output_path: args.output.clone().or(settings.output),
        })
    }
}

fn run(args: &Args) -> Result<()> {
    let options = Options::resolve(args)?;
    let cwd = env::current_dir().context("failed to get current directory")?;

    let gitignore_dir = options.use_gitignore.then_some(cwd.as_path());
    let filter = Filter::new(&options.exclude, gitignore_dir);
    log::debug!("filter: {:?}", filter);

    let tree = TreeWalker::new(options.walker)
        .with_filter(filter)
        .walk(&options.dir, &cwd)?;

    let rendered = options.format.render(&tree, &options.output);

    match options.output_path {
        Some(path) => write_output(&path, &rendered),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .context("failed to write to stdout")
        }
    }
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("failed to write output file '{}'", path.display()))?;
    println!("Output written to: {}", path.display());
    Ok(())
}

fn report_error(err: &anyhow::Error, use_color: bool) -> std::io::Result<()> {
    let choice = if use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);

    write!(stderr, "treex: ")?;
    stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(stderr, "error:")?;
    stderr.reset()?;
    writeln!(stderr, " {:#}", err)?;

    // Mistyped arguments get the usage line as a hint
    if matches!(
        err.downcast_ref::<Error>(),
        Some(Error::UnknownFormat(_) | Error::ReadDir { .. })
    ) {
        writeln!(stderr, "\n{}", Args::command().render_usage())?;
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(&args) {
        let _ = report_error(&e, should_use_color(args.color));
        process::exit(1);
    }
}
