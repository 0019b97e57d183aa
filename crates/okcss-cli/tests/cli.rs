//! End-to-end runs of the command handlers with mock inputs.

use std::fs;
use std::path::Path;

use clap::Parser;
use okcss_cli::commands::NO_MATCH;
use okcss_cli::input::{Inputs, MockClipboard, MockStdin};
use okcss_cli::{run, Cli};
use serde_json::Value;
use tempfile::TempDir;

struct Harness {
    dir: TempDir,
}

impl Harness {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self, name: &str) -> std::path::PathBuf {
        self.dir.path().join(name)
    }

    fn write(&self, name: &str, content: &str) -> String {
        let path = self.path(name);
        fs::write(&path, content).unwrap();
        path.display().to_string()
    }

    fn run_with(&self, args: &[&str], stdin: MockStdin) -> anyhow::Result<String> {
        let presets = self.path("presets");
        let mut argv = vec!["okcss", "--preset-dir", presets.to_str().unwrap()];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv)?;

        let inputs = Inputs::mock(stdin, MockClipboard::default());
        let mut out = Vec::new();
        run(cli, &inputs, &mut out, false)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn run(&self, args: &[&str]) -> anyhow::Result<String> {
        self.run_with(args, MockStdin::terminal())
    }

    fn json(&self, args: &[&str]) -> Value {
        let mut args = args.to_vec();
        args.extend(["--output", "json"]);
        serde_json::from_str(&self.run(&args).unwrap()).unwrap()
    }
}

// =============================================================================
// import / detect
// =============================================================================

#[test]
fn import_detects_the_tool_from_stdin() {
    let h = Harness::new();
    let out = h
        .run_with(
            &["import"],
            MockStdin::piped("box-shadow: inset 2px 4px 6px 0px rgba(0,0,0,0.5);"),
        )
        .unwrap();
    assert_eq!(out, "box-shadow: inset 2px 4px 6px 0px rgba(0, 0, 0, 0.5);\n");
}

#[test]
fn import_without_a_match_fails() {
    let h = Harness::new();
    let err = h
        .run_with(&["import", "--tool", "shadow"], MockStdin::piped("color: red;"))
        .unwrap_err();
    assert_eq!(err.to_string(), NO_MATCH);
}

#[test]
fn palette_cannot_import() {
    let h = Harness::new();
    let err = h
        .run_with(&["import", "-t", "color-palette"], MockStdin::piped("--primary: #fff;"))
        .unwrap_err();
    assert!(err.to_string().contains("does not support importing"));
}

#[test]
fn keyframes_cannot_import() {
    let h = Harness::new();
    let err = h
        .run_with(&["import", "-t", "keyframes"], MockStdin::piped("animation: spin 1s;"))
        .unwrap_err();
    assert!(err.to_string().contains("keyframes does not support importing"), "{}", err);
}

#[test]
fn import_onto_a_state_file() {
    let h = Harness::new();
    let state = h.write("glass.yaml", "borderRadius: 4\n");
    let css = h.write("glass.css", ".panel {\n  backdrop-filter: blur(20px);\n}\n");
    let out = h
        .run(&["import", "-t", "glass", &css, "--state", &state, "-f", "tailwind"])
        .unwrap();
    assert_eq!(
        out.trim_end(),
        "bg-white/15 backdrop-blur-[20px] border border-white/30 rounded-[4px]"
    );
}

#[test]
fn import_with_notes() {
    let h = Harness::new();
    let out = h
        .run_with(&["import", "--notes"], MockStdin::piped("backdrop-filter: blur(4px);"))
        .unwrap();
    assert!(out.contains("Safari prefix"));
    assert!(out.starts_with("background: rgba(255, 255, 255, 0.15);"));
}

#[test]
fn missing_snippet() {
    let h = Harness::new();
    let err = h.run(&["detect"]).unwrap_err();
    assert!(err.to_string().starts_with("no CSS given"));
}

#[test]
fn detect_reads_a_file() {
    let h = Harness::new();
    let css = h.write("card.css", ".card {\n  -webkit-backdrop-filter: blur(8px);\n}\n");
    assert_eq!(h.run(&["detect", &css]).unwrap(), "glassmorphism\n");

    let value = h.json(&["detect", &css]);
    assert_eq!(value["label"], "Glassmorphism");
}

#[test]
fn undetectable_snippet() {
    let h = Harness::new();
    let err = h
        .run_with(&["detect"], MockStdin::piped("color: red;"))
        .unwrap_err();
    assert!(err.to_string().contains("could not tell"));
}

// =============================================================================
// build
// =============================================================================

#[test]
fn build_with_overrides() {
    let h = Harness::new();
    let out = h
        .run(&["build", "outline", "--set", "width=4", "--set", "style=dashed"])
        .unwrap();
    assert_eq!(out, "outline: 4px dashed #6366f1;\noutline-offset: 2px;\n");
}

#[test]
fn build_react() {
    let h = Harness::new();
    let out = h.run(&["build", "glass", "-f", "react"]).unwrap();
    assert!(out.starts_with("style={{\n"));
    assert!(out.contains("  backdropFilter: 'blur(12px)',\n"));
}

#[test]
fn build_every_format() {
    let h = Harness::new();
    let out = h.run(&["build", "border-radius", "--all"]).unwrap();
    for format in ["css", "tailwind", "scss", "react", "variables"] {
        assert!(out.contains(&format!("── {} ──", format)), "{}", out);
    }
}

#[test]
fn build_json_carries_state_and_output() {
    let h = Harness::new();
    let value = h.json(&["build", "border-radius"]);
    assert_eq!(value["tool"], "border-radius");
    assert_eq!(value["state"]["uniform"], 16.0);
    assert_eq!(value["output"]["tailwind"], "rounded-2xl");
    assert!(value.get("notes").is_none());
}

#[test]
fn build_from_yaml_state() {
    let h = Harness::new();
    let state = h.write("filter.yaml", "blur: 3\ngrayscale: 100\n");
    let out = h.run(&["build", "filter", "--state", &state]).unwrap();
    assert_eq!(out, "filter: blur(3px) grayscale(100%);\n");
}

#[test]
fn tailwind_for_a_tool_without_classes() {
    let h = Harness::new();
    let err = h.run(&["build", "clip-path", "-f", "tailwind"]).unwrap_err();
    assert_eq!(err.to_string(), "clip-path has no tailwind output");
}

#[test]
fn build_type_scale_in_px() {
    let h = Harness::new();
    let out = h
        .run(&["build", "type-scale", "--set", "unit=px", "--set", "ratio=1.25"])
        .unwrap();
    assert!(
        out.starts_with(":root {\n  --text-xs: 10px;\n  --text-sm: 13px;\n  --text-base: 16px;\n  --text-lg: 20px;\n"),
        "{}",
        out
    );
}

#[test]
fn build_keyframes_exports() {
    let h = Harness::new();
    let out = h.run(&["build", "keyframes"]).unwrap();
    assert!(out.starts_with("@keyframes fadeIn {\n  0% { opacity: 0;"), "{}", out);

    let out = h.run(&["build", "keyframes", "-f", "react"]).unwrap();
    assert_eq!(
        out.trim_end(),
        "style={{\n  animation: 'fadeIn 600ms ease-out 0ms 1 normal forwards',\n}}"
    );
    let out = h.run(&["build", "keyframes", "-f", "variables"]).unwrap();
    assert_eq!(
        out.trim_end(),
        ":root {\n  --animation: fadeIn 600ms ease-out 0ms 1 normal forwards;\n}"
    );
}

#[test]
fn build_neumorphism_tailwind() {
    let h = Harness::new();
    let out = h
        .run(&["build", "neumorphism", "--set", "shape=pressed", "-f", "tailwind"])
        .unwrap();
    assert!(
        out.starts_with("bg-[#e0e5ec] rounded-[16px] shadow-[inset_8px_8px_16px_#"),
        "{}",
        out
    );
}

#[test]
fn huge_palette_shades_from_set() {
    let h = Harness::new();
    let value = h.json(&["build", "color-palette", "--set", "shades=3000000000"]);
    assert_eq!(value["state"]["shades"], 3_000_000_000u64);
    // Capped ramps of 21 swatches for each of the three triadic hues.
    assert_eq!(value["output"]["lines"].as_array().unwrap().len(), 3 * 21);
}

#[test]
fn config_sets_the_default_format() {
    let h = Harness::new();
    let config = h.write("okcss.yaml", "format: tailwind\n");
    let out = h.run(&["build", "gradient", "--config", &config]).unwrap();
    assert_eq!(out, "bg-gradient-to-br from-[#6366f1] to-[#ec4899]\n");

    let out = h
        .run(&["build", "gradient", "--config", &config, "-f", "css"])
        .unwrap();
    assert!(out.starts_with("background: linear-gradient(135deg"));
}

// =============================================================================
// palette / contrast / tools
// =============================================================================

#[test]
fn complementary_palette() {
    let h = Harness::new();
    let value = h.json(&[
        "palette",
        "--hue",
        "0",
        "--harmony",
        "complementary",
        "--shades",
        "0",
    ]);
    let names: Vec<&str> = value["swatches"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["primary", "secondary"]);
    assert_eq!(value["swatches"][1]["hsl"]["h"], 180.0);
}

#[test]
fn palette_as_variables() {
    let h = Harness::new();
    let out = h.run(&["palette", "--shades", "1", "-f", "variables"]).unwrap();
    assert!(out.starts_with(":root {\n  --primary-100: #"));
    // Three hues with three swatches each, plus the braces.
    assert_eq!(out.trim_end().lines().count(), 11);
}

#[test]
fn contrast_report() {
    let h = Harness::new();
    let value = h.json(&["contrast", "#000", "#fff"]);
    assert_eq!(value["ratio"], 21.0);
    assert_eq!(value["level"], "AAA");
    assert_eq!(value["normalText"], true);

    let out = h.run(&["contrast", "#777777", "#888888"]).unwrap();
    assert!(out.starts_with("1.26:1  Fail"), "{}", out);
    assert!(out.contains("fail"));
}

#[test]
fn contrast_rejects_named_colors() {
    let h = Harness::new();
    assert!(h.run(&["contrast", "black", "#fff"]).is_err());
}

#[test]
fn tools_lists_every_generator() {
    let h = Harness::new();
    let value = h.json(&["tools"]);
    assert_eq!(value.as_array().unwrap().len(), 17);
    assert_eq!(value[13]["tool"], "color-palette");
    assert_eq!(value[13]["importable"], false);
    assert_eq!(value[3]["tool"], "neumorphism");

    let out = h.run(&["tools"]).unwrap();
    assert!(out.contains("cubic-bezier"));
}

// =============================================================================
// presets
// =============================================================================

#[test]
fn preset_lifecycle() {
    let h = Harness::new();
    let css = h.write("soft.css", "box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);");

    let saved = h.json(&["preset", "save", "shadow", "Soft", "--css", &css]);
    assert_eq!(saved["name"], "Soft");

    let list = h.json(&["preset", "list", "shadow"]);
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert!(Path::new(&h.path("presets")).join("shadow.json").exists());

    let out = h.run(&["preset", "show", "shadow", "soft"]).unwrap();
    assert_eq!(out, "box-shadow: 0px 2px 4px 0px rgba(0, 0, 0, 0.1);\n");

    let out = h.run(&["preset", "delete", "shadow", "Soft"]).unwrap();
    assert!(out.starts_with("deleted Soft"));

    let out = h.run(&["preset", "list", "shadow"]).unwrap();
    assert_eq!(out, "no shadow presets\n");
}

#[test]
fn unnamed_presets_are_numbered() {
    let h = Harness::new();
    let out = h.run(&["preset", "save", "outline"]).unwrap();
    assert!(out.starts_with("saved Preset 1 (p"), "{}", out);
}

#[test]
fn missing_preset() {
    let h = Harness::new();
    let err = h.run(&["preset", "show", "glass", "nope"]).unwrap_err();
    assert_eq!(err.to_string(), "no glassmorphism preset with id or name 'nope'");
}
