//! Macro for implementing Display and FromStr for domain enums
//!
//! The engines expose several small string-keyed enums (unit categories,
//! calculator operations, item filters) that need consistent round-tripping
//! between enum variants and their stable string ids. This macro generates
//! both trait impls from a single mapping.
//!
//! # Example
//!
//! ```rust
//! use daybook_domain::impl_domain_string_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum ItemFilter {
//!     All,
//!     Events,
//!     Tasks,
//! }
//!
//! impl_domain_string_conversions!(ItemFilter {
//!     All => "all",
//!     Events => "events",
//!     Tasks => "tasks",
//! });
//! ```

/// Implements Display and FromStr traits for string-keyed domain enums
///
/// Generated behavior:
/// - Display: converts enum variants to their stable lowercase ids
/// - FromStr: parses case-insensitive strings back to variants
///
/// Parsing failures produce a descriptive error naming the enum.
#[macro_export]
macro_rules! impl_domain_string_conversions {
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

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestFilter {
        All,
        Events,
        Tasks,
    }

    impl_domain_string_conversions!(TestFilter {
        All => "all",
        Events => "events",
        Tasks => "tasks",
    });

    #[test]
    fn test_display_lowercase() {
        assert_eq!(TestFilter::All.to_string(), "all");
        assert_eq!(TestFilter::Tasks.to_string(), "tasks");
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!(TestFilter::from_str("EVENTS"), Ok(TestFilter::Events));
        assert_eq!(TestFilter::from_str("Tasks"), Ok(TestFilter::Tasks));
    }

    #[test]
    fn test_from_str_invalid() {
        let err = TestFilter::from_str("notes").unwrap_err();
        assert!(err.contains("TestFilter"));
    }
}
