//! Pasting real-world CSS snippets into the tokenizer, the detector and the
//! reducers.

use okcss::colorspace::{contrast_ratio_hex, WcagLevel};
use okcss::compat::{compat_notes, CompatLevel};
use okcss::css::parse_color;
use okcss::effects::glass::GlassState;
use okcss::effects::gradient::{GradientState, GradientType};
use okcss::effects::outline::OutlineState;
use okcss::effects::palette::{harmony_hues, Harmony};
use okcss::effects::shadow::ShadowState;
use okcss::effects::text_gradient::TextGradientState;
use okcss::effects::transition::TransitionState;
use okcss::{detect_tool, parse_css_props, AnyState, Effect, EffectKind, ImportCss};

// =============================================================================
// Tokenizer
// =============================================================================

#[test]
fn empty_input_has_no_properties() {
    assert!(parse_css_props("").is_empty());
    assert!(parse_css_props("   \n\n  ").is_empty());
}

#[test]
fn one_line_rule() {
    let props = parse_css_props(".x { color: red; }");
    assert_eq!(props.len(), 1);
    assert_eq!(props.get("color"), Some("red"));
}

#[test]
fn custom_properties_share_the_key_space() {
    let props = parse_css_props(":root { --foo-bar: 10px; }");
    assert_eq!(props.get("foo-bar"), Some("10px"));
}

#[test]
fn devtools_paste_with_noise() {
    let css = "/* copied from devtools */\n\
               @media (min-width: 640px) {\n\
               .card:hover {\n\
               \x20 Box-Shadow: 0 1px 2px #000;\n\
               \x20 transition: all 150ms ease;\n\
               }\n\
               }\n\
               some stray text";
    let props = parse_css_props(css);
    assert_eq!(props.len(), 2);
    assert_eq!(props.get("box-shadow"), Some("0 1px 2px #000"));
    assert_eq!(props.get("transition"), Some("all 150ms ease"));
}

#[test]
fn later_declarations_win() {
    let props = parse_css_props("color: red;\ncolor: blue;");
    assert_eq!(props.get("color"), Some("blue"));
}

// =============================================================================
// Reducers
// =============================================================================

#[test]
fn inset_shadow_with_rgba() {
    let state = ShadowState::default()
        .import("box-shadow: inset 2px 4px 6px 0px rgba(0,0,0,0.5);")
        .unwrap();
    let [layer] = state.layers.as_slice() else {
        panic!("expected one layer, got {:?}", state.layers);
    };
    assert!(layer.inset);
    assert_eq!((layer.x, layer.y, layer.blur, layer.spread), (2.0, 4.0, 6.0, 0.0));
    assert_eq!(layer.color, "#000000");
    assert_eq!(layer.opacity, 0.5);
    assert!(layer.enabled);
}

#[test]
fn multi_line_shadow_list() {
    let css = ".card {\n  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.1),\n    0 8px 24px -4px #11182733;\n}";
    let state = ShadowState::default().import(css);
    // The 8-digit hex in the second layer cannot be read; the first survives.
    let state = state.unwrap();
    assert_eq!(state.layers.len(), 1);
    assert_eq!(state.layers[0].opacity, 0.1);
}

#[test]
fn shadow_none_or_absent_imports_nothing() {
    let base = ShadowState::default();
    assert_eq!(base.import("box-shadow: none;"), None);
    assert_eq!(base.import("color: red;"), None);
    assert_eq!(base.import(""), None);
}

#[test]
fn linear_gradient_from_background() {
    let state = GradientState::default()
        .import("background: linear-gradient(90deg, #ff0000 0%, #0000ff 100%);")
        .unwrap();
    assert_eq!(state.kind, GradientType::Linear);
    assert_eq!(state.angle, 90.0);
    let stops: Vec<(&str, f64)> = state
        .stops
        .iter()
        .map(|s| (s.color.as_str(), s.position))
        .collect();
    assert_eq!(stops, vec![("#ff0000", 0.0), ("#0000ff", 100.0)]);
}

#[test]
fn short_hex_expands() {
    let color = parse_color("#abc").unwrap();
    assert_eq!(color.hex, "#aabbcc");
    assert_eq!(color.opacity, 1.0);
}

#[test]
fn glass_keeps_fields_it_cannot_find() {
    let base = GlassState {
        border_radius: 4.0,
        ..Default::default()
    };
    let state = base
        .import("background: rgba(15, 23, 42, 0.4);\nbackdrop-filter: blur(20px);")
        .unwrap();
    assert_eq!(state.bg_color, "#0f172a");
    assert_eq!(state.bg_opacity, 0.4);
    assert_eq!(state.blur, 20.0);
    assert_eq!(state.border_radius, 4.0);
}

#[test]
fn transition_layers_with_seconds() {
    let state = TransitionState::default()
        .import("transition: opacity 0.2s ease-out, transform 250ms cubic-bezier(0.4, 0, 0.2, 1) 50ms;")
        .unwrap();
    assert_eq!(
        state.value(),
        "opacity 200ms ease-out 0ms, transform 250ms cubic-bezier(0.4, 0, 0.2, 1) 50ms"
    );
    assert_eq!(state.layers[1].id.as_str(), "transition-2");
}

// =============================================================================
// Detection and the registry
// =============================================================================

#[test]
fn detected_tool_imports_the_snippet() {
    let css = ".btn:focus-visible {\n  outline: 3px dashed rgba(239, 68, 68, 0.8);\n  outline-offset: 4px;\n}";
    let kind = detect_tool(&parse_css_props(css)).unwrap();
    assert_eq!(kind, EffectKind::Outline);

    let imported = AnyState::default_for(kind).import(css).unwrap().unwrap();
    assert_eq!(
        imported.copy_text(),
        "outline: 3px dashed rgba(239, 68, 68, 0.8);\noutline-offset: 4px;"
    );
}

#[test]
fn every_importable_tool_reads_its_own_default_output() {
    for kind in EffectKind::ALL.into_iter().filter(|k| k.importable()) {
        let state = AnyState::default_for(kind);
        let imported = state
            .import(&state.copy_text())
            .unwrap()
            .unwrap_or_else(|| panic!("{} imported nothing", kind));
        assert_eq!(imported.copy_text(), state.copy_text(), "{}", kind);
    }
}

#[test]
fn neumorphism_output_imports_as_a_shadow() {
    let text = AnyState::default_for(EffectKind::Neumorphism).copy_text();
    let props = parse_css_props(&text);
    assert_eq!(detect_tool(&props), Some(EffectKind::Shadow));

    let shadow = AnyState::default_for(EffectKind::Shadow).import(&text).unwrap().unwrap();
    assert!(
        shadow.value().ends_with("-8px -8px 16px 0px rgba(255, 255, 255, 1)"),
        "{}",
        shadow.value()
    );
}

#[test]
fn every_tool_detects_from_its_own_output() {
    // Build-only tools have nothing to detect, and a bare timing function
    // shares its property with transitions.
    let detectable = EffectKind::ALL
        .into_iter()
        .filter(|k| k.importable() && *k != EffectKind::CubicBezier);
    for kind in detectable {
        let text = AnyState::default_for(kind).copy_text();
        assert_eq!(detect_tool(&parse_css_props(&text)), Some(kind), "{}", text);
    }
}

// =============================================================================
// Color theory and compatibility
// =============================================================================

#[test]
fn contrast_extremes() {
    let ratio = contrast_ratio_hex("#000000", "#ffffff").unwrap();
    assert!((ratio - 21.0).abs() < 1e-9);
    assert_eq!(WcagLevel::from_ratio(ratio), WcagLevel::Aaa);

    let ratio = contrast_ratio_hex("#777777", "#888888").unwrap();
    assert!(ratio < 3.0);
    assert_eq!(WcagLevel::from_ratio(ratio), WcagLevel::Fail);
}

#[test]
fn triadic_hues() {
    assert_eq!(harmony_hues(0.0, Harmony::Triadic), vec![0.0, 120.0, 240.0]);
    assert_eq!(harmony_hues(300.0, Harmony::Complementary), vec![300.0, 120.0]);
}

#[test]
fn compat_notes_follow_generated_properties() {
    let output = TextGradientState::default().output();
    let notes = compat_notes(output.lines.iter().map(|l| l.property.as_str()));
    let labels: Vec<_> = notes.iter().map(|n| n.label).collect();
    assert_eq!(labels, ["Chrome/Safari prefix", "Needs -webkit- prefix for text clipping"]);
    assert!(notes.iter().all(|n| n.level == CompatLevel::Info));

    let output = OutlineState::default().output();
    let notes = compat_notes(output.lines.iter().map(|l| l.property.as_str()));
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].level, CompatLevel::Good);
}
