//! Macro for implementing Display and FromStr for string-backed enums
//!
//! Configuration values such as the storage backend arrive as plain strings
//! from environment variables. This macro gives those enums a single, case
//! insensitive parse and a stable lowercase rendering.
//!
//! # Example
//!
//! ```rust
//! use daybreak_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum RunState {
//!     Running,
//!     Paused,
//! }
//!
//! impl_domain_status_conversions!(RunState {
//!     Running => "running",
//!     Paused => "paused",
//! });
//!
//! assert_eq!(RunState::Paused.to_string(), "paused");
//! assert_eq!("RUNNING".parse::<RunState>(), Ok(RunState::Running));
//! ```

/// Implements Display and FromStr traits for string-backed enums
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their lowercase string
///   representations
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
