//! Effect state records, their partial patches and the shallow merge.
//!
//! Every effect declares its state once through [`effect_state!`], which
//! generates the state struct, its `Default`, a patch struct with every field
//! wrapped in `Option`, and the [`Merge`] impl tying the two together.
//! Reducers return patches; callers merge them onto whatever state they hold.
//!
//! Merge is shallow: a `Some` field in the patch replaces the state's field
//! wholesale. List fields (shadow layers, gradient stops) are never merged
//! element by element.

/// Shallow overwrite of a state by a patch.
pub trait Merge: Clone {
    type Patch: Default;

    /// Overwrites every field that is `Some` in `patch`.
    fn merge(&mut self, patch: Self::Patch);

    /// Returns a merged copy, leaving `self` untouched.
    fn merged(&self, patch: Self::Patch) -> Self {
        let mut next = self.clone();
        next.merge(patch);
        next
    }
}

/// Declares an effect state, its patch and their [`Merge`] impl.
///
/// ```ignore
/// effect_state! {
///     /// Docs for the state.
///     GlassState / GlassPatch {
///         blur: f64 = 12.0,
///     }
/// }
/// ```
macro_rules! effect_state {
    (
        $(#[$meta:meta])*
        $state:ident / $patch:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty = $default:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct $state {
            $( $(#[$fmeta])* pub $field: $ty, )*
        }

        impl Default for $state {
            fn default() -> Self {
                Self {
                    $( $field: $default, )*
                }
            }
        }

        #[doc = concat!("Partial [`", stringify!($state), "`]: only the fields a reducer could derive.")]
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct $patch {
            $(
                $(#[$fmeta])*
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl $patch {
            /// True when no field is set.
            pub fn is_empty(&self) -> bool {
                true $( && self.$field.is_none() )*
            }
        }

        impl From<$state> for $patch {
            /// A patch that sets every field.
            fn from(state: $state) -> Self {
                Self {
                    $( $field: Some(state.$field), )*
                }
            }
        }

        impl $crate::state::Merge for $state {
            type Patch = $patch;

            fn merge(&mut self, patch: $patch) {
                $(
                    if let Some(value) = patch.$field {
                        self.$field = value;
                    }
                )*
            }
        }
    };
}

pub(crate) use effect_state;
