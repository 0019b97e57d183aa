//! Command handlers.
//!
//! Every handler produces its result once and hands it to [`Context::emit`],
//! which either serializes the data (JSON, YAML) or writes the text form.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, bail, Context as _, Result};
use console::{Color, Style};
use okcss::colorspace::{contrast_ratio, Rgb, WcagLevel};
use okcss::compat::{compat_notes, CompatLevel, CompatNote};
use okcss::css::parse_color;
use okcss::effects::palette::{compute_palette, PaletteState, Swatch};
use okcss::{
    detect_tool, format_preset_age, parse_css_props, AnyState, EffectKind, EffectOutput,
    ExportFormat, Preset, PresetStore,
};
use serde::Serialize;
use serde_json::Value;

use crate::cli::{
    BuildArgs, Cli, Command, ContrastArgs, ImportArgs, OutputMode, PaletteArgs, PresetCommand,
    PresetSaveArgs, SnippetArgs,
};
use crate::config::Config;
use crate::input::{read_file, Inputs};
use crate::style::Styler;

/// Message for a snippet the chosen generator cannot read anything from.
pub const NO_MATCH: &str = "no matching CSS properties found for this generator";

/// Everything a handler needs besides its own arguments.
pub struct Context<'a> {
    pub config: Config,
    pub mode: OutputMode,
    pub store: PresetStore,
    pub inputs: &'a Inputs,
    out: &'a mut dyn Write,
}

impl<'a> Context<'a> {
    pub fn new(
        config: Config,
        mode: OutputMode,
        preset_dir: PathBuf,
        inputs: &'a Inputs,
        out: &'a mut dyn Write,
    ) -> Self {
        Self {
            config,
            mode,
            store: PresetStore::new(preset_dir),
            inputs,
            out,
        }
    }

    fn styler(&self) -> Styler {
        Styler::new(self.mode == OutputMode::Term)
    }

    /// Writes `data` in a structured mode, or the text built by `text`.
    fn emit<T: Serialize>(&mut self, data: &T, text: impl FnOnce(&Styler) -> String) -> Result<()> {
        let rendered = match self.mode {
            OutputMode::Json => serde_json::to_string_pretty(data)?,
            OutputMode::Yaml => serde_yaml::to_string(data)?.trim_end().to_string(),
            _ => text(&self.styler()),
        };
        writeln!(self.out, "{}", rendered)?;
        Ok(())
    }
}

/// Loads the global configuration and runs `cli`.
pub fn run(cli: Cli, inputs: &Inputs, out: &mut dyn Write, stdout_is_term: bool) -> Result<()> {
    let config = Config::load(cli.global.config.as_deref())?;
    let preset_dir = config.preset_dir(cli.global.preset_dir.as_deref());
    let mode = cli.global.output.resolve(stdout_is_term);
    tracing::debug!(?mode, preset_dir = %preset_dir.display(), "starting");

    let mut ctx = Context::new(config, mode, preset_dir, inputs, out);
    dispatch(&mut ctx, cli.command)
}

pub fn dispatch(ctx: &mut Context<'_>, command: Command) -> Result<()> {
    match command {
        Command::Tools => tools(ctx),
        Command::Detect(args) => detect(ctx, &args),
        Command::Import(args) => import(ctx, &args),
        Command::Build(args) => build(ctx, &args),
        Command::Palette(args) => palette(ctx, &args),
        Command::Contrast(args) => contrast(ctx, &args),
        Command::Preset(command) => preset(ctx, command),
    }
}

// =============================================================================
// Rendering a state
// =============================================================================

/// Structured form of a rendered state.
#[derive(Debug, Serialize)]
struct Rendered {
    tool: EffectKind,
    state: Value,
    output: EffectOutput,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    notes: Vec<&'static CompatNote>,
}

/// How a state is printed in text modes.
#[derive(Debug, Clone, Copy)]
enum Formats {
    One(ExportFormat),
    All,
}

fn render_state(ctx: &mut Context<'_>, state: &AnyState, formats: Formats, notes: bool) -> Result<()> {
    let output = state.output();
    let notes = if notes {
        compat_notes(output.lines.iter().map(|l| l.property.as_str()))
    } else {
        Vec::new()
    };

    let text = match formats {
        Formats::One(format) => format
            .render(&output)
            .ok_or_else(|| anyhow!("{} has no {} output", state.kind(), format))?,
        Formats::All => {
            let styler = ctx.styler();
            output
                .formats()
                .into_iter()
                .filter_map(|format| {
                    let body = format.render(&output)?;
                    Some(format!("{}\n{}", styler.heading(&format!("── {} ──", format)), body))
                })
                .collect::<Vec<_>>()
                .join("\n\n")
        }
    };

    let data = Rendered {
        tool: state.kind(),
        state: state.state_value()?,
        output,
        notes,
    };
    ctx.emit(&data, |styler| {
        let mut text = text;
        for note in &data.notes {
            text.push('\n');
            text.push_str(&note_line(styler, note));
        }
        text
    })
}

fn note_line(styler: &Styler, note: &CompatNote) -> String {
    let badge = match note.level {
        CompatLevel::Warn => styler.warn("warn"),
        CompatLevel::Info => styler.dim("info"),
        CompatLevel::Good => styler.ok("good"),
    };
    format!("/* {} {}: {} {} */", badge, note.label, note.detail, styler.dim(note.url))
}

fn load_state(kind: EffectKind, path: Option<&Path>) -> Result<AnyState> {
    let Some(path) = path else {
        return Ok(AnyState::default_for(kind));
    };
    let text = read_file(path)?;
    AnyState::parse(kind, &text).with_context(|| format!("invalid {} state in {}", kind, path.display()))
}

fn read_snippet(ctx: &Context<'_>, args: &SnippetArgs) -> Result<String> {
    Ok(ctx.inputs.snippet(args.file.as_deref(), args.clipboard)?)
}

// =============================================================================
// tools / detect
// =============================================================================

#[derive(Debug, Serialize)]
struct ToolInfo {
    tool: EffectKind,
    label: &'static str,
    description: &'static str,
    importable: bool,
}

fn tools(ctx: &mut Context<'_>) -> Result<()> {
    let infos: Vec<ToolInfo> = EffectKind::ALL
        .into_iter()
        .map(|kind| ToolInfo {
            tool: kind,
            label: kind.label(),
            description: kind.description(),
            importable: kind.importable(),
        })
        .collect();

    ctx.emit(&infos, |styler| {
        infos
            .iter()
            .map(|info| {
                let slug = styler.heading(&format!("{:<15}", info.tool.slug()));
                let marker = if info.importable { " " } else { "*" };
                format!("{}{} {}", slug, marker, info.description)
            })
            .chain(std::iter::once(styler.dim("* builds only, no CSS import")))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

#[derive(Debug, Serialize)]
struct Detection {
    tool: EffectKind,
    label: &'static str,
}

fn detect(ctx: &mut Context<'_>, args: &SnippetArgs) -> Result<()> {
    let snippet = read_snippet(ctx, args)?;
    let kind = detect_tool(&parse_css_props(&snippet))
        .ok_or_else(|| anyhow!("could not tell which generator this snippet is for"))?;

    let detection = Detection {
        tool: kind,
        label: kind.label(),
    };
    ctx.emit(&detection, |_| kind.slug().to_string())
}

// =============================================================================
// import / build
// =============================================================================

fn import(ctx: &mut Context<'_>, args: &ImportArgs) -> Result<()> {
    let snippet = read_snippet(ctx, &args.snippet)?;
    let kind = match args.tool {
        Some(kind) => kind,
        None => detect_tool(&parse_css_props(&snippet))
            .ok_or_else(|| anyhow!("could not detect a generator; pass --tool"))?,
    };

    let base = load_state(kind, args.state.as_deref())?;
    let imported = base.import(&snippet)?.ok_or_else(|| anyhow!(NO_MATCH))?;
    tracing::info!(tool = kind.slug(), "imported snippet");

    let format = ctx.config.format(args.format);
    render_state(ctx, &imported, Formats::One(format), args.notes)
}

fn build(ctx: &mut Context<'_>, args: &BuildArgs) -> Result<()> {
    let state = load_state(args.tool, args.state.as_deref())?;
    let state = apply_sets(state, &args.sets)?;

    let formats = if args.all {
        Formats::All
    } else {
        Formats::One(ctx.config.format(args.format))
    };
    render_state(ctx, &state, formats, args.notes)
}

/// Applies `field=value` overrides. Values are read as JSON when they parse
/// (`20`, `true`, `[...]`) and as plain strings otherwise (`#fff`, `dashed`).
/// Field names may be written in snake_case or camelCase.
fn apply_sets(state: AnyState, sets: &[String]) -> Result<AnyState> {
    if sets.is_empty() {
        return Ok(state);
    }
    let kind = state.kind();
    let mut value = state.state_value()?;
    let Some(fields) = value.as_object_mut() else {
        bail!("{} state is not an object", kind);
    };

    for set in sets {
        let (field, raw) = set
            .split_once('=')
            .ok_or_else(|| anyhow!("expected FIELD=VALUE, got '{}'", set))?;
        let field = camel_case(field.trim());
        if !fields.contains_key(&field) {
            let known: Vec<&str> = fields.keys().map(String::as_str).collect();
            bail!("{} has no field '{}' (fields: {})", kind, field, known.join(", "));
        }
        let raw = raw.trim();
        let parsed = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        fields.insert(field, parsed);
    }

    Ok(AnyState::from_value(kind, value)?)
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' || c == '-' {
            upper = true;
        } else if upper {
            out.push(c.to_ascii_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

// =============================================================================
// palette / contrast
// =============================================================================

#[derive(Debug, Serialize)]
struct PaletteReport {
    state: PaletteState,
    swatches: Vec<Swatch>,
}

fn palette(ctx: &mut Context<'_>, args: &PaletteArgs) -> Result<()> {
    let state = PaletteState {
        base_hue: args.hue,
        saturation: args.saturation,
        lightness: args.lightness,
        harmony: args.harmony,
        shades: args.shades,
    };

    if let Some(format) = args.format {
        return render_state(ctx, &AnyState::Palette(state), Formats::One(format), false);
    }

    let report = PaletteReport {
        swatches: compute_palette(&state),
        state,
    };
    ctx.emit(&report, |styler| {
        let mut lines = vec![styler.heading(&format!(
            "{} palette from hsl({}, {}%, {}%)",
            report.state.harmony.label(),
            report.state.base_hue,
            report.state.saturation,
            report.state.lightness
        ))];
        lines.extend(report.swatches.iter().map(|s| {
            format!(
                "{} {:<16} {}",
                styler.swatch(&s.hex, &format!(" {} ", s.hex)),
                s.name,
                styler.dim(&format!(
                    "hsl({}, {}%, {}%)",
                    s.hsl.h.round(),
                    s.hsl.s.round(),
                    s.hsl.l.round()
                ))
            )
        }));
        lines.join("\n")
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ContrastReport {
    foreground: String,
    background: String,
    ratio: f64,
    level: WcagLevel,
    normal_text: bool,
    large_text: bool,
    enhanced: bool,
}

fn parse_rgb(color: &str) -> Result<Rgb> {
    parse_color(color)
        .and_then(|c| Rgb::from_hex(&c.hex))
        .ok_or_else(|| anyhow!("'{}' is not a color (use #rgb, #rrggbb or rgb())", color))
}

fn contrast(ctx: &mut Context<'_>, args: &ContrastArgs) -> Result<()> {
    let fg = parse_rgb(&args.foreground)?;
    let bg = parse_rgb(&args.background)?;
    let ratio = contrast_ratio(fg, bg);

    let report = ContrastReport {
        foreground: fg.to_hex(),
        background: bg.to_hex(),
        ratio: (ratio * 100.0).round() / 100.0,
        level: WcagLevel::from_ratio(ratio),
        normal_text: ratio >= 4.5,
        large_text: ratio >= 3.0,
        enhanced: ratio >= 7.0,
    };

    ctx.emit(&report, |styler| {
        let verdict = |pass: bool| if pass { styler.ok("pass") } else { styler.error("fail") };
        let sample = styler.apply(
            &Style::new()
                .fg(Color::Color256(crate::style::rgb_to_ansi256(fg)))
                .bg(Color::Color256(crate::style::rgb_to_ansi256(bg))),
            "  Sample text  ",
        );
        [
            format!(
                "{}  {}",
                styler.heading(&format!("{:.2}:1", report.ratio)),
                report.level
            ),
            format!("  normal text (AA 4.5:1)   {}", verdict(report.normal_text)),
            format!("  large text (AA 3:1)      {}", verdict(report.large_text)),
            format!("  enhanced (AAA 7:1)       {}", verdict(report.enhanced)),
            sample,
        ]
        .join("\n")
    })
}

// =============================================================================
// presets
// =============================================================================

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn find_preset(ctx: &Context<'_>, kind: EffectKind, key: &str) -> Result<Preset> {
    ctx.store
        .find(kind, key)?
        .ok_or_else(|| anyhow!("no {} preset with id or name '{}'", kind, key))
}

fn preset(ctx: &mut Context<'_>, command: PresetCommand) -> Result<()> {
    match command {
        PresetCommand::List { tool } => {
            let presets = ctx.store.list(tool)?;
            let now = now_millis();
            ctx.emit(&presets, |styler| {
                if presets.is_empty() {
                    return styler.dim(&format!("no {} presets", tool));
                }
                presets
                    .iter()
                    .map(|p| {
                        format!(
                            "{} {:<24} {}",
                            styler.heading(&format!("{:<16}", p.id)),
                            p.name,
                            styler.dim(&format_preset_age(p.created_at, now))
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }
        PresetCommand::Save(args) => preset_save(ctx, &args),
        PresetCommand::Show { tool, key, format } => {
            let preset = find_preset(ctx, tool, &key)?;
            let state = preset.load(tool)?;
            let format = ctx.config.format(format);
            render_state(ctx, &state, Formats::One(format), false)
        }
        PresetCommand::Delete { tool, key } => {
            let preset = find_preset(ctx, tool, &key)?;
            ctx.store.delete(tool, &preset.id)?;
            tracing::info!(tool = tool.slug(), id = %preset.id, "deleted preset");
            ctx.emit(&preset, |_| format!("deleted {} ({})", preset.name, preset.id))
        }
    }
}

fn preset_save(ctx: &mut Context<'_>, args: &PresetSaveArgs) -> Result<()> {
    let state = match &args.css {
        Some(path) => {
            let snippet = read_file(path)?;
            AnyState::default_for(args.tool)
                .import(&snippet)?
                .ok_or_else(|| anyhow!(NO_MATCH))?
        }
        None => load_state(args.tool, args.state.as_deref())?,
    };

    let preset = ctx.store.save(&args.name, &state)?;
    ctx.emit(&preset, |styler| {
        format!("saved {} ({})", styler.heading(&preset.name), preset.id)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_become_camel_case() {
        assert_eq!(camel_case("bg_opacity"), "bgOpacity");
        assert_eq!(camel_case("border-radius"), "borderRadius");
        assert_eq!(camel_case("blur"), "blur");
        assert_eq!(camel_case("bgOpacity"), "bgOpacity");
    }

    #[test]
    fn sets_parse_json_or_strings() {
        let state = apply_sets(
            AnyState::default_for(EffectKind::Outline),
            &["width=4".into(), "style=dashed".into(), "color=#ff0000".into()],
        )
        .unwrap();
        assert_eq!(state.value(), "4px dashed #ff0000");
    }

    #[test]
    fn unknown_field_is_an_error() {
        let err = apply_sets(AnyState::default_for(EffectKind::Glass), &["blurr=4".into()])
            .unwrap_err();
        assert!(err.to_string().contains("no field 'blurr'"));
    }

    #[test]
    fn malformed_set_is_an_error() {
        assert!(apply_sets(AnyState::default_for(EffectKind::Glass), &["blur".into()]).is_err());
        assert!(
            apply_sets(AnyState::default_for(EffectKind::Glass), &["blur=lots".into()]).is_err()
        );
    }

    #[test]
    fn colors_parse_from_hex_and_rgb() {
        assert_eq!(parse_rgb("#fff").unwrap(), Rgb(255, 255, 255));
        assert_eq!(parse_rgb("rgb(1, 2, 3)").unwrap(), Rgb(1, 2, 3));
        assert!(parse_rgb("tomato").is_err());
    }
}
