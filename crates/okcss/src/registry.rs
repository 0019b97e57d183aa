//! Type-erased effect states, for callers that pick a tool at runtime.
//!
//! [`AnyState`] wraps one state per [`EffectKind`] and forwards the builder
//! and reducer operations to it. It serializes as `{"tool": slug, "state": …}`.
//!
//! ```rust
//! use okcss::effects::EffectKind;
//! use okcss::registry::AnyState;
//!
//! let state = AnyState::default_for(EffectKind::Outline);
//! let imported = state.import("outline: 3px dashed #ff0000;").unwrap().unwrap();
//! assert_eq!(imported.value(), "3px dashed #ff0000");
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::effects::bezier::BezierState;
use crate::effects::border_radius::BorderRadiusState;
use crate::effects::clip_path::ClipPathState;
use crate::effects::filter::FilterState;
use crate::effects::glass::GlassState;
use crate::effects::gradient::GradientState;
use crate::effects::keyframes::KeyframesState;
use crate::effects::neumorphism::NeumorphismState;
use crate::effects::outline::OutlineState;
use crate::effects::palette::PaletteState;
use crate::effects::scrollbar::ScrollbarState;
use crate::effects::shadow::ShadowState;
use crate::effects::text_gradient::TextGradientState;
use crate::effects::text_shadow::TextShadowState;
use crate::effects::transform::TransformState;
use crate::effects::transition::TransitionState;
use crate::effects::type_scale::TypeScaleState;
use crate::effects::{Effect, EffectKind, ImportCss};
use crate::error::StateError;
use crate::export::EffectOutput;

/// A state of any tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tool", content = "state", rename_all = "kebab-case")]
pub enum AnyState {
    Shadow(ShadowState),
    #[serde(rename = "glassmorphism")]
    Glass(GlassState),
    Gradient(GradientState),
    Neumorphism(NeumorphismState),
    TextShadow(TextShadowState),
    BorderRadius(BorderRadiusState),
    Filter(FilterState),
    Transform(TransformState),
    TextGradient(TextGradientState),
    Scrollbar(ScrollbarState),
    ClipPath(ClipPathState),
    CubicBezier(BezierState),
    TypeScale(TypeScaleState),
    #[serde(rename = "color-palette")]
    Palette(PaletteState),
    Transition(TransitionState),
    Keyframes(KeyframesState),
    Outline(OutlineState),
}

/// Evaluates `$body` with `$s` bound to the wrapped state.
macro_rules! with_state {
    ($any:expr, $s:ident => $body:expr) => {
        match $any {
            AnyState::Shadow($s) => $body,
            AnyState::Glass($s) => $body,
            AnyState::Gradient($s) => $body,
            AnyState::Neumorphism($s) => $body,
            AnyState::TextShadow($s) => $body,
            AnyState::BorderRadius($s) => $body,
            AnyState::Filter($s) => $body,
            AnyState::Transform($s) => $body,
            AnyState::TextGradient($s) => $body,
            AnyState::Scrollbar($s) => $body,
            AnyState::ClipPath($s) => $body,
            AnyState::CubicBezier($s) => $body,
            AnyState::TypeScale($s) => $body,
            AnyState::Palette($s) => $body,
            AnyState::Transition($s) => $body,
            AnyState::Keyframes($s) => $body,
            AnyState::Outline($s) => $body,
        }
    };
}

fn import_into<T: ImportCss>(state: &T, css: &str) -> Option<T> {
    state.import(css)
}

impl AnyState {
    /// The default state of `kind`.
    pub fn default_for(kind: EffectKind) -> Self {
        match kind {
            EffectKind::Shadow => AnyState::Shadow(Default::default()),
            EffectKind::Glass => AnyState::Glass(Default::default()),
            EffectKind::Gradient => AnyState::Gradient(Default::default()),
            EffectKind::Neumorphism => AnyState::Neumorphism(Default::default()),
            EffectKind::TextShadow => AnyState::TextShadow(Default::default()),
            EffectKind::BorderRadius => AnyState::BorderRadius(Default::default()),
            EffectKind::Filter => AnyState::Filter(Default::default()),
            EffectKind::Transform => AnyState::Transform(Default::default()),
            EffectKind::TextGradient => AnyState::TextGradient(Default::default()),
            EffectKind::Scrollbar => AnyState::Scrollbar(Default::default()),
            EffectKind::ClipPath => AnyState::ClipPath(Default::default()),
            EffectKind::CubicBezier => AnyState::CubicBezier(Default::default()),
            EffectKind::TypeScale => AnyState::TypeScale(Default::default()),
            EffectKind::Palette => AnyState::Palette(Default::default()),
            EffectKind::Transition => AnyState::Transition(Default::default()),
            EffectKind::Keyframes => AnyState::Keyframes(Default::default()),
            EffectKind::Outline => AnyState::Outline(Default::default()),
        }
    }

    /// Decodes a bare state of `kind`. Missing fields take their defaults.
    pub fn from_value(kind: EffectKind, state: Value) -> Result<Self, StateError> {
        Ok(serde_json::from_value(json!({ "tool": kind.slug(), "state": state }))?)
    }

    pub fn from_json(kind: EffectKind, text: &str) -> Result<Self, StateError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(kind, value)
    }

    pub fn from_yaml(kind: EffectKind, text: &str) -> Result<Self, StateError> {
        let value: Value = serde_yaml::from_str(text)?;
        Self::from_value(kind, value)
    }

    /// JSON when the text starts with `{`, YAML otherwise.
    pub fn parse(kind: EffectKind, text: &str) -> Result<Self, StateError> {
        if text.trim_start().starts_with('{') {
            Self::from_json(kind, text)
        } else {
            Self::from_yaml(kind, text)
        }
    }

    pub fn kind(&self) -> EffectKind {
        match self {
            AnyState::Shadow(_) => EffectKind::Shadow,
            AnyState::Glass(_) => EffectKind::Glass,
            AnyState::Gradient(_) => EffectKind::Gradient,
            AnyState::Neumorphism(_) => EffectKind::Neumorphism,
            AnyState::TextShadow(_) => EffectKind::TextShadow,
            AnyState::BorderRadius(_) => EffectKind::BorderRadius,
            AnyState::Filter(_) => EffectKind::Filter,
            AnyState::Transform(_) => EffectKind::Transform,
            AnyState::TextGradient(_) => EffectKind::TextGradient,
            AnyState::Scrollbar(_) => EffectKind::Scrollbar,
            AnyState::ClipPath(_) => EffectKind::ClipPath,
            AnyState::CubicBezier(_) => EffectKind::CubicBezier,
            AnyState::TypeScale(_) => EffectKind::TypeScale,
            AnyState::Palette(_) => EffectKind::Palette,
            AnyState::Transition(_) => EffectKind::Transition,
            AnyState::Keyframes(_) => EffectKind::Keyframes,
            AnyState::Outline(_) => EffectKind::Outline,
        }
    }

    /// The bare state, without the `tool` wrapper.
    pub fn state_value(&self) -> Result<Value, StateError> {
        Ok(with_state!(self, s => serde_json::to_value(s))?)
    }

    pub fn value(&self) -> String {
        with_state!(self, s => s.value())
    }

    pub fn copy_text(&self) -> String {
        with_state!(self, s => s.copy_text())
    }

    pub fn output(&self) -> EffectOutput {
        with_state!(self, s => s.output())
    }

    /// Imports `css` onto this state. `Ok(None)` when the snippet holds
    /// nothing the tool recognizes.
    pub fn import(&self, css: &str) -> Result<Option<AnyState>, StateError> {
        let imported = match self {
            AnyState::Shadow(s) => import_into(s, css).map(AnyState::Shadow),
            AnyState::Glass(s) => import_into(s, css).map(AnyState::Glass),
            AnyState::Gradient(s) => import_into(s, css).map(AnyState::Gradient),
            AnyState::TextShadow(s) => import_into(s, css).map(AnyState::TextShadow),
            AnyState::BorderRadius(s) => import_into(s, css).map(AnyState::BorderRadius),
            AnyState::Filter(s) => import_into(s, css).map(AnyState::Filter),
            AnyState::Transform(s) => import_into(s, css).map(AnyState::Transform),
            AnyState::TextGradient(s) => import_into(s, css).map(AnyState::TextGradient),
            AnyState::Scrollbar(s) => import_into(s, css).map(AnyState::Scrollbar),
            AnyState::ClipPath(s) => import_into(s, css).map(AnyState::ClipPath),
            AnyState::CubicBezier(s) => import_into(s, css).map(AnyState::CubicBezier),
            AnyState::Transition(s) => import_into(s, css).map(AnyState::Transition),
            AnyState::Outline(s) => import_into(s, css).map(AnyState::Outline),
            AnyState::Neumorphism(_)
            | AnyState::TypeScale(_)
            | AnyState::Palette(_)
            | AnyState::Keyframes(_) => return Err(StateError::NotImportable(self.kind())),
        };
        if imported.is_none() {
            tracing::debug!(tool = self.kind().slug(), "snippet matched nothing");
        }
        Ok(imported)
    }
}
