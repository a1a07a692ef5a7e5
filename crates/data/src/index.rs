//! Index types. See [`::index_vec`].

pub use index_vec::{Idx, IndexSlice, IndexVec, index_vec};

/// Creates a new dense `u32` index usable with [`::index_vec`].
///
/// The index is stored off-by-one in a [`std::num::NonZero`] so `Option<Index>` stays 4 bytes.
/// Indices serialize as their plain numeric value, which lets them key JSON maps directly.
#[macro_export]
macro_rules! newtype_index {
    () => {};
    ($(#[$attr:meta])* $vis:vis struct $name:ident; $($rest:tt)*) => {
        $(#[$attr])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        $vis struct $name(std::num::NonZero<u32>);

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({:?})", stringify!($name), self.get())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.get())
            }
        }

        impl $crate::index::Idx for $name {
            #[inline(always)]
            fn from_usize(value: usize) -> Self {
                let value = u32::try_from(value).expect("index overflowed");
                Self::new(value)
            }

            #[inline(always)]
            fn index(self) -> usize {
                self.get() as usize
            }
        }

        impl $name {
            /// Largest representable value.
            $vis const MAX: u32 = u32::MAX - 1;

            /// Creates a new `$name` from the given `value`.
            #[inline(always)]
            $vis const fn new(value: u32) -> Self {
                let inner_repr = value.checked_add(1).expect("index overflowed");
                Self(std::num::NonZero::new(inner_repr).expect("inner_repr should never be zero"))
            }

            /// Creates a new `$name` if `value` fits.
            #[inline(always)]
            $vis fn try_new(value: u64) -> Option<Self> {
                u32::try_from(value).ok().filter(|&v| v <= Self::MAX).map(Self::new)
            }

            /// Gets the underlying index value.
            #[inline(always)]
            $vis const fn get(self) -> u32 {
                self.0.get() - 1
            }
        }

        impl $crate::__serde::Serialize for $name {
            fn serialize<S: $crate::__serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_u32(self.get())
            }
        }

        impl<'de> $crate::__serde::Deserialize<'de> for $name {
            fn deserialize<D: $crate::__serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <u32 as $crate::__serde::Deserialize>::deserialize(deserializer)?;
                Self::try_new(value.into()).ok_or_else(|| {
                    <D::Error as $crate::__serde::de::Error>::custom(format_args!(
                        "{} {} out of range",
                        stringify!($name),
                        value
                    ))
                })
            }
        }

        $crate::newtype_index!($($rest)*);
    };
}

newtype_index! {
    /// Offset of an emitted instruction ("program counter").
    pub struct Pc;
    /// Identifier of a parsed syntax node, unique within one compilation.
    pub struct NodeId;
    /// Identifier of a loaded source file.
    pub struct SourceId;
    /// Position of a node inside an [`crate::Ast`] arena.
    pub struct AstNodeIdx;
}
