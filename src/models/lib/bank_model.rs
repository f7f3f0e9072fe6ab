/// Defines a model along with its integer ID type. Every model gets getters
/// for all its fields, crate-only setters (so invariants stay inside the
/// core), an owned-pattern builder when a builder name is given, and serde
/// support for save files.
#[macro_export]
macro_rules! bank_model {
    (@id $id:ident) => {
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $id(u64);

        impl $id {
            pub fn new(id: u64) -> Self {
                Self(id)
            }

            /// Return the raw integer for this ID
            pub fn as_u64(&self) -> u64 {
                self.0
            }
        }

        impl std::convert::From<u64> for $id {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $id {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $id {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }
    };

    (
        $(#[$struct_meta:meta])*
        pub struct $name:ident {
            id: $id:ident,
            $($fields:tt)*
        }
        $builder:ident

    ) => {
        $crate::bank_model! { @id $id }

        $(#[$struct_meta])*
        #[derive(Clone, Debug, PartialEq, getset::Getters, getset::Setters, derive_builder::Builder, serde::Serialize, serde::Deserialize)]
        #[builder(pattern = "owned", setter(into))]
        #[getset(get = "pub", set = "pub(crate)")]
        pub struct $name {
            id: $id,
            $($fields)*
        }

        impl $name {
            pub fn builder() -> $builder {
                $builder::default()
            }
        }
    };

    // No builder: the core is the only thing that makes these.
    (
        $(#[$struct_meta:meta])*
        pub struct $name:ident {
            id: $id:ident,
            $($fields:tt)*
        }
    ) => {
        $crate::bank_model! { @id $id }

        $(#[$struct_meta])*
        #[derive(Clone, Debug, PartialEq, getset::Getters, getset::Setters, serde::Serialize, serde::Deserialize)]
        #[getset(get = "pub", set = "pub(crate)")]
        pub struct $name {
            id: $id,
            $($fields)*
        }
    };
}
