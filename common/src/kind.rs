//! Macros for defining kind enums.

/// Macro for defining a closed kind enum.
///
/// Variants are displayed and parsed in `camelCase`. Additional attributes
/// (like `serde` derives) are forwarded to the generated enum.
///
/// # Example
///
/// ```rust
/// use common::define_kind;
///
/// define_kind! {
///     #[doc = "Shape kind."]
///     enum Kind {
///         #[doc = "A cube"]
///         Cube,
///
///         #[doc = "A sphere"]
///         Sphere,
///     }
/// }
///
/// assert_eq!(Kind::Cube.to_string(), "cube");
/// assert_eq!(Kind::ALL.len(), 2);
/// ```
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_kind {
    (
        #[doc = $doc:literal]
        $(#[$meta:meta])*
        enum $name:ident {
            $(
                #[doc = $variant_doc:literal]
                $variant:ident
            ),* $(,)?
        }
    ) => {
        #[derive(
            Clone,
            Copy,
            Debug,
            $crate::private::strum::Display,
            $crate::private::strum::EnumString,
            Eq,
            Hash,
            Ord,
            PartialEq,
            PartialOrd,
        )]
        #[doc = $doc]
        $(#[$meta])*
        #[strum(serialize_all = "camelCase")]
        pub enum $name {
            $(
                 #[doc = $variant_doc]
                 $variant,
            )*
        }

        impl $name {
            #[doc = ::core::concat!(
                "All the [`", ::core::stringify!($name), "`] variants."
            )]
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];
        }
    };
}
