/// Declares an enumeration that crosses the boundary as a plain `u32`.
///
/// Every variant must spell out its discriminant. Reordering variants is a
/// breaking change for the native side, so the values are never implied.
macro_rules! boundary_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(u32)]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant = $value
            ),+
        }

        impl $name {
            /// Every variant, in discriminant order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The raw discriminant sent across the boundary.
            #[must_use]
            pub const fn as_raw(self) -> u32 {
                self as u32
            }

            /// Decode a raw discriminant. Unknown values yield `None`.
            #[must_use]
            pub const fn from_raw(value: u32) -> Option<Self> {
                match value {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl TryFrom<u32> for $name {
            type Error = $crate::error::InteropError;

            fn try_from(value: u32) -> Result<Self, $crate::error::InteropError> {
                Self::from_raw(value).ok_or($crate::error::InteropError::UnknownDiscriminant {
                    kind: stringify!($name),
                    value,
                })
            }
        }

        impl From<$name> for u32 {
            fn from(value: $name) -> Self {
                value.as_raw()
            }
        }
    };
}
