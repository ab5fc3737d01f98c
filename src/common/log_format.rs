use crate::ports::provided::EnvError;

/// # Examples
/// ```
/// use envcast::common::log_format::LogFormat;
///
/// let fn_message = LogFormat::call("Env", "to_u16", &["'PORT'".to_string()]);
/// assert_eq!(fn_message, "Env::to_u16('PORT')");
/// ```
pub struct LogFormat;

impl LogFormat {

    pub fn call(class: &str, fn_name: &str, args: &[String]) -> String {
        let args_str = args.join(", ");
        format!("{}::{}({})", class, fn_name, args_str)
    }

    /// # Examples
    /// ```
    /// use envcast::common::log_format::LogFormat;
    ///
    /// let msg = LogFormat::error("Env", "to_u16_or", "NotFound: PORT");
    /// assert_eq!(msg, "Env::to_u16_or: NotFound: PORT");
    /// ```
    pub fn error(class: &str, fn_name: &str, message: &str) -> String {
        format!("{}::{}: {}", class, fn_name, message)
    }

    /// Log line body for an [`EnvError`]: kind, variable name, target and
    /// reason. The raw value is left out.
    ///
    /// # Examples
    /// ```
    /// use envcast::EnvError;
    /// use envcast::common::log_format::LogFormat;
    ///
    /// let err = EnvError::Parse {
    ///     name: "DB_PORT".to_string(),
    ///     value: "s3cret".to_string(),
    ///     target: "u16",
    ///     reason: "invalid syntax".to_string(),
    /// };
    /// assert_eq!(LogFormat::error_summary(&err), "ParseError: DB_PORT: u16: invalid syntax");
    /// ```
    pub fn error_summary(err: &EnvError) -> String {
        match err {
            EnvError::NotFound(name) => format!("NotFound: {}", name),
            EnvError::Empty(name) => format!("Empty: {}", name),
            EnvError::Parse { name, target, reason, .. } => {
                format!("ParseError: {}: {}: {}", name, target, reason)
            }
        }
    }

    /// Format string argument for log output
    ///
    /// # Examples
    /// ```
    /// use envcast::common::log_format::LogFormat;
    ///
    /// assert_eq!(LogFormat::format_str_arg("PORT"), "'PORT'");
    /// ```
    pub fn format_str_arg(s: &str) -> String {
        if s.chars().count() > 50 {
            let head: String = s.chars().take(47).collect();
            format!("'{}'...", head)
        } else {
            format!("'{}'", s)
        }
    }
}

/// Log macro: fn call
///
/// # Examples
/// ```ignore
/// use crate::fn_log;
///
/// fn_log!("Env", "to_u16", "PORT");
/// // Logs: Env::to_u16('PORT')
/// ```
#[macro_export]
macro_rules! fn_log {
    ($class:expr, $fun:expr $(, $arg:expr)*) => {{
        #[cfg(feature = "logging")]
        {
            let args: Vec<String> = vec![
                $(
                    $crate::common::log_format::LogFormat::format_str_arg($arg),
                )*
            ];
            log::debug!("{}", $crate::common::log_format::LogFormat::call($class, $fun, &args));
        }
        #[cfg(not(feature = "logging"))]
        {
            let _ = ($class, $fun $(, $arg)*);
        }
    }};
}

/// Log macro: a failure swallowed by a default-bearing call
///
/// # Examples
/// ```ignore
/// use crate::fallback_log;
///
/// fallback_log!("Env", "to_u16_or", err);
/// // Logs: Env::to_u16_or: NotFound: PORT
/// ```
#[macro_export]
macro_rules! fallback_log {
    ($class:expr, $fun:expr, $err:expr) => {{
        #[cfg(feature = "logging")]
        {
            log::debug!(
                "{}",
                $crate::common::log_format::LogFormat::error(
                    $class,
                    $fun,
                    &$crate::common::log_format::LogFormat::error_summary(&$err),
                )
            );
        }
        #[cfg(not(feature = "logging"))]
        {
            let _ = ($class, $fun, &$err);
        }
    }};
}
