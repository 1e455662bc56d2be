//! Helper macro for declaring port error enums.
//!
//! Every variant carries a single adapter-supplied `message` and renders as
//! `"<prefix>: <message>"`. The macro also emits a snake_case constructor per
//! variant plus `message()` and `kind()` accessors for structured logging.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $prefix:literal
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error("{prefix}: {message}", prefix = $prefix)]
                $variant {
                    /// Detail supplied by the adapter.
                    message: String,
                },
            )*
        }

        impl $name {
            $(
                ::paste::paste! {
                    #[doc = concat!(
                        "Build a `", stringify!($variant), "` error carrying `message`."
                    )]
                    pub fn [<$variant:snake>](message: impl Into<String>) -> Self {
                        Self::$variant { message: message.into() }
                    }
                }
            )*

            /// Detail supplied by the adapter that raised the error.
            pub fn message(&self) -> &str {
                match self {
                    $( Self::$variant { message } => message, )*
                }
            }

            /// Snake_case label for the failure class, used as a log field.
            pub fn kind(&self) -> &'static str {
                match self {
                    $( Self::$variant { .. } => ::paste::paste!(stringify!([<$variant:snake>])), )*
                }
            }
        }
    };
}

pub(crate) use define_port_error;
