//! # okcss - CSS Effect Builders and Snippet Importer
//!
//! okcss renders typed effect states into CSS and reads pasted CSS back into
//! those states. It provides:
//!
//! - Builders for seventeen effects (shadows, gradients, glass, filters,
//!   transforms, clip paths, easing curves, palettes, type scales, keyframe
//!   animations and more)
//! - A forgiving tokenizer for whatever CSS a user has on the clipboard
//! - Per-effect reducers that recover the fields they recognize
//! - Color theory helpers: harmonic palettes and WCAG contrast
//! - Export to CSS, Tailwind, SCSS, React inline styles and CSS variables
//! - A file-backed preset store
//!
//! ## Core Concepts
//!
//! - [`Effect`]: a builder, from state to CSS
//! - [`ImportCss`]: a reducer, from a [`PropertyMap`] to a partial state
//! - [`Merge`]: shallow merge of a reducer's patch onto a state
//! - [`AnyState`]: any effect state, picked by [`EffectKind`] at runtime
//!
//! ## Round Trip
//!
//! Copy text produced by an importable builder always imports back to a
//! state that renders the same output:
//!
//! ```rust
//! use okcss::effects::gradient::GradientState;
//! use okcss::{Effect, ImportCss};
//!
//! let mut state = GradientState::default();
//! state.angle = 90.0;
//! state.add_stop("#FACC15", 50.0);
//!
//! let imported = GradientState::default().import(&state.copy_text()).unwrap();
//! assert_eq!(imported.copy_text(), state.copy_text());
//! assert_eq!(
//!     imported.value(),
//!     "linear-gradient(90deg, #6366f1 0%, #facc15 50%, #ec4899 100%)"
//! );
//! ```
//!
//! ## Detecting the Tool
//!
//! ```rust
//! use okcss::{detect_tool, parse_css_props, EffectKind};
//!
//! let props = parse_css_props(".card {\n  backdrop-filter: blur(8px);\n}");
//! assert_eq!(detect_tool(&props), Some(EffectKind::Glass));
//! ```

pub mod colorspace;
pub mod compat;
pub mod css;
pub mod effects;
pub mod error;
pub mod export;
pub mod ids;
pub mod presets;
pub mod registry;
pub mod state;

pub use css::{parse_css_props, CssLine, PropertyMap};
pub use effects::{detect_tool, Effect, EffectKind, ImportCss, UnknownTool};
pub use error::StateError;
pub use export::{EffectOutput, ExportFormat};
pub use presets::{format_preset_age, Preset, PresetError, PresetStore};
pub use registry::AnyState;
pub use state::Merge;
