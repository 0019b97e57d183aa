//! Command-line definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use okcss::effects::palette::Harmony;
use okcss::{EffectKind, ExportFormat};

/// Build CSS effects, import pasted snippets and manage presets.
#[derive(Debug, Parser)]
#[command(name = "okcss", version, about, propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Output mode for command results.
    #[arg(long, short = 'o', global = true, value_enum, default_value_t = OutputMode::Auto)]
    pub output: OutputMode,

    /// Configuration file (defaults to ./okcss.yaml when present).
    #[arg(long, global = true, env = "OKCSS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding preset files.
    #[arg(long, global = true, env = "OKCSS_PRESET_DIR")]
    pub preset_dir: Option<PathBuf>,

    /// More logging on stderr (-v debug, -vv trace).
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// Styled on a terminal, plain when piped.
    #[default]
    Auto,
    /// Always styled.
    Term,
    /// Never styled.
    Text,
    /// The result data as JSON.
    Json,
    /// The result data as YAML.
    Yaml,
}

impl OutputMode {
    /// Resolves `Auto` against whether stdout is a terminal.
    pub fn resolve(self, stdout_is_term: bool) -> OutputMode {
        match self {
            OutputMode::Auto if stdout_is_term => OutputMode::Term,
            OutputMode::Auto => OutputMode::Text,
            other => other,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the generators.
    Tools,

    /// Guess which generator a CSS snippet belongs to.
    Detect(SnippetArgs),

    /// Import a CSS snippet into a generator and print the result.
    Import(ImportArgs),

    /// Render a generator state.
    Build(BuildArgs),

    /// Generate a harmonic color palette.
    Palette(PaletteArgs),

    /// WCAG contrast ratio of two colors.
    Contrast(ContrastArgs),

    /// Manage saved presets.
    #[command(subcommand)]
    Preset(PresetCommand),
}

/// Where a CSS snippet is read from.
#[derive(Debug, Clone, Args)]
pub struct SnippetArgs {
    /// File holding the snippet; `-` or nothing reads piped stdin.
    pub file: Option<PathBuf>,

    /// Read the snippet from the system clipboard.
    #[arg(long, conflicts_with = "file")]
    pub clipboard: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ImportArgs {
    /// Target generator; detected from the snippet when omitted.
    #[arg(long, short = 't')]
    pub tool: Option<EffectKind>,

    #[command(flatten)]
    pub snippet: SnippetArgs,

    /// State (JSON or YAML) the snippet is merged onto.
    #[arg(long)]
    pub state: Option<PathBuf>,

    /// Export format for the result.
    #[arg(long, short = 'f')]
    pub format: Option<ExportFormat>,

    /// Print browser support notes after the result.
    #[arg(long)]
    pub notes: bool,
}

#[derive(Debug, Clone, Args)]
pub struct BuildArgs {
    pub tool: EffectKind,

    /// State file (JSON or YAML); missing fields keep their defaults.
    #[arg(long)]
    pub state: Option<PathBuf>,

    /// Override a state field, e.g. `--set blur=20`.
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    pub sets: Vec<String>,

    /// Export format.
    #[arg(long, short = 'f', conflicts_with = "all")]
    pub format: Option<ExportFormat>,

    /// Print every format the generator supports.
    #[arg(long)]
    pub all: bool,

    /// Print browser support notes after the result.
    #[arg(long)]
    pub notes: bool,
}

#[derive(Debug, Clone, Args)]
pub struct PaletteArgs {
    /// Base hue in degrees.
    #[arg(long, default_value_t = 220.0, allow_negative_numbers = true)]
    pub hue: f64,

    /// Saturation in percent.
    #[arg(long, default_value_t = 75.0)]
    pub saturation: f64,

    /// Lightness in percent.
    #[arg(long, default_value_t = 55.0)]
    pub lightness: f64,

    /// Color harmony.
    #[arg(long, default_value_t = Harmony::Triadic)]
    pub harmony: Harmony,

    /// Shades on each side of every base color.
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(0..=5))]
    pub shades: u32,

    /// Print the palette as an export format instead of swatches.
    #[arg(long, short = 'f')]
    pub format: Option<ExportFormat>,
}

#[derive(Debug, Clone, Args)]
pub struct ContrastArgs {
    /// Foreground color (`#rgb` or `#rrggbb`).
    pub foreground: String,

    /// Background color.
    pub background: String,
}

#[derive(Debug, Subcommand)]
pub enum PresetCommand {
    /// List a generator's presets, newest first.
    List {
        tool: EffectKind,
    },

    /// Save a state as a preset.
    Save(PresetSaveArgs),

    /// Render a saved preset.
    Show {
        tool: EffectKind,

        /// Preset id or name.
        key: String,

        #[arg(long, short = 'f')]
        format: Option<ExportFormat>,
    },

    /// Delete a preset by id or name.
    Delete {
        tool: EffectKind,

        /// Preset id or name.
        key: String,
    },
}

#[derive(Debug, Clone, Args)]
pub struct PresetSaveArgs {
    pub tool: EffectKind,

    /// Preset name; numbered automatically when omitted.
    #[arg(default_value = "")]
    pub name: String,

    /// State file (JSON or YAML) to save.
    #[arg(long, conflicts_with = "css")]
    pub state: Option<PathBuf>,

    /// CSS file to import and save.
    #[arg(long)]
    pub css: Option<PathBuf>,
}
