// Parse - 文字列から各型への変換ルール

pub mod boolean;
pub mod duration;
pub mod float;
pub mod integer;

pub use duration::parse_duration;

/// A type that can be read from the raw string value of an environment variable.
///
/// `from_env_str` returns a short human-readable reason on failure; the caller
/// wraps it into [`EnvError::Parse`](crate::EnvError::Parse) together with the
/// variable name, the offending value and [`TARGET`](FromEnvStr::TARGET).
///
/// # Examples
///
/// ```
/// use envcast::FromEnvStr;
///
/// assert_eq!(i8::from_env_str("-128"), Ok(-128));
/// assert_eq!(i8::from_env_str("128"), Err("value out of range".to_string()));
/// assert_eq!(<bool as FromEnvStr>::TARGET, "bool");
/// ```
pub trait FromEnvStr: Sized {
    /// Type name used in error messages.
    const TARGET: &'static str;

    fn from_env_str(raw: &str) -> Result<Self, String>;
}

impl FromEnvStr for String {
    const TARGET: &'static str = "string";

    fn from_env_str(raw: &str) -> Result<Self, String> {
        Ok(raw.to_string())
    }
}
