use crate::adapters::SystemEnv;
use crate::common::split_segments;
use crate::parse::FromEnvStr;
use crate::ports::provided::{EnvError, Lookup};
use crate::ports::required::EnvClient;
use crate::{fallback_log, fn_log};
use std::time::Duration;

/// Typed access to an environment, read through an [`EnvClient`].
///
/// Every conversion comes in four forms: strict (`to_u16`), with default
/// (`to_u16_or`), sequence (`to_u16_list`) and sequence with default
/// (`to_u16_list_or`). Strict forms look the variable up allowing empty
/// values, so an empty string is handed to the parser rather than rejected.
///
/// # Examples
///
/// ```
/// use envcast::{Env, EnvError, InMemoryEnv};
/// use std::time::Duration;
///
/// let vars: InMemoryEnv = [
///     ("PORT", "8080"),
///     ("TIMEOUT", "1m30s"),
///     ("RATIOS", "0.5, 0.25"),
/// ].into_iter().collect();
/// let env = Env::new(vars);
///
/// assert_eq!(env.to_u16("PORT"), Ok(8080));
/// assert_eq!(env.to_duration("TIMEOUT"), Ok(Duration::from_secs(90)));
/// assert_eq!(env.to_f64_list("RATIOS", ","), Ok(vec![0.5, 0.25]));
/// assert_eq!(env.to_bool("DEBUG"), Err(EnvError::NotFound("DEBUG".to_string())));
/// assert!(!env.to_bool_or("DEBUG", false));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Env<C> {
    client: C,
}

impl Env<SystemEnv> {
    /// Env bound to the process environment.
    pub fn system() -> Self {
        Self::new(SystemEnv)
    }
}

impl<C: EnvClient> Env<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn into_client(self) -> C {
        self.client
    }

    /// Reads `name` and parses it as `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use envcast::{Env, ErrorKind};
    /// use std::collections::HashMap;
    ///
    /// let mut vars = HashMap::new();
    /// vars.insert("LEVEL".to_string(), "3".to_string());
    /// vars.insert("NAME".to_string(), "three".to_string());
    /// let env = Env::new(vars);
    ///
    /// assert_eq!(env.get::<u8>("LEVEL"), Ok(3));
    /// assert_eq!(env.get::<u8>("NAME").unwrap_err().kind(), ErrorKind::Parse);
    /// ```
    pub fn get<T: FromEnvStr>(&self, name: &str) -> Result<T, EnvError> {
        self.scalar("get", name)
    }

    pub fn get_or<T: FromEnvStr>(&self, name: &str, default: T) -> T {
        self.scalar_or("get_or", name, default)
    }

    /// Reads `name`, splits it on `separator` and parses every segment as `T`.
    ///
    /// The first segment that fails aborts the whole call.
    pub fn get_list<T: FromEnvStr>(&self, name: &str, separator: &str) -> Result<Vec<T>, EnvError> {
        self.list("get_list", name, separator)
    }

    pub fn get_list_or<T: FromEnvStr>(&self, name: &str, separator: &str, default: Vec<T>) -> Vec<T> {
        self.list_or("get_list_or", name, separator, default)
    }

    /// Raw bytes of the value, unparsed.
    pub fn to_bytes(&self, name: &str) -> Result<Vec<u8>, EnvError> {
        fn_log!("Env", "to_bytes", name);
        self.lookup(name, true).map(String::into_bytes)
    }

    pub fn to_bytes_or(&self, name: &str, default: Vec<u8>) -> Vec<u8> {
        fn_log!("Env", "to_bytes_or", name);
        self.lookup(name, true)
            .map(String::into_bytes)
            .unwrap_or_else(|err| {
                fallback_log!("Env", "to_bytes_or", err);
                default
            })
    }

    fn scalar<T: FromEnvStr>(&self, fn_name: &str, name: &str) -> Result<T, EnvError> {
        fn_log!("Env", fn_name, name);
        let raw = self.lookup(name, true)?;
        parse_value(name, &raw)
    }

    fn scalar_or<T: FromEnvStr>(&self, fn_name: &str, name: &str, default: T) -> T {
        self.scalar(fn_name, name).unwrap_or_else(|err| {
            fallback_log!("Env", fn_name, err);
            default
        })
    }

    fn list<T: FromEnvStr>(&self, fn_name: &str, name: &str, separator: &str) -> Result<Vec<T>, EnvError> {
        fn_log!("Env", fn_name, name, separator);
        let raw = self.lookup(name, true)?;
        split_segments(&raw, separator)
            .into_iter()
            .map(|segment| parse_value(name, segment))
            .collect()
    }

    fn list_or<T: FromEnvStr>(&self, fn_name: &str, name: &str, separator: &str, default: Vec<T>) -> Vec<T> {
        self.list(fn_name, name, separator).unwrap_or_else(|err| {
            fallback_log!("Env", fn_name, err);
            default
        })
    }
}

impl<C: EnvClient> Lookup for Env<C> {
    /// # Examples
    ///
    /// ```
    /// use envcast::{Env, EnvError, InMemoryEnv, Lookup};
    ///
    /// let vars: InMemoryEnv = [("HOST", " db "), ("EMPTY", "")].into_iter().collect();
    /// let env = Env::new(vars);
    ///
    /// assert_eq!(env.lookup("HOST", false), Ok(" db ".to_string()));
    /// assert_eq!(env.lookup("EMPTY", true), Ok(String::new()));
    /// assert_eq!(env.lookup("EMPTY", false), Err(EnvError::Empty("EMPTY".to_string())));
    /// assert_eq!(env.lookup("PORT", true), Err(EnvError::NotFound("PORT".to_string())));
    /// assert_eq!(env.lookup_or("PORT", "5432"), "5432");
    /// ```
    fn lookup(&self, name: &str, allow_empty: bool) -> Result<String, EnvError> {
        let value = self
            .client
            .var(name)
            .ok_or_else(|| EnvError::NotFound(name.to_string()))?;
        if !allow_empty && value.is_empty() {
            return Err(EnvError::Empty(name.to_string()));
        }
        Ok(value)
    }
}

fn parse_value<T: FromEnvStr>(name: &str, raw: &str) -> Result<T, EnvError> {
    T::from_env_str(raw).map_err(|reason| EnvError::Parse {
        name: name.to_string(),
        value: raw.to_string(),
        target: T::TARGET,
        reason,
    })
}

/// Invokes `$callback!` with the table of named conversions:
/// `type => strict, with_default, list, list_with_default;`
macro_rules! for_each_conversion {
    ($callback:ident) => {
        $callback! {
            bool     => to_bool,     to_bool_or,     to_bool_list,     to_bool_list_or;
            i64      => to_int,      to_int_or,      to_int_list,      to_int_list_or;
            i8       => to_i8,       to_i8_or,       to_i8_list,       to_i8_list_or;
            i16      => to_i16,      to_i16_or,      to_i16_list,      to_i16_list_or;
            i32      => to_i32,      to_i32_or,      to_i32_list,      to_i32_list_or;
            i64      => to_i64,      to_i64_or,      to_i64_list,      to_i64_list_or;
            u64      => to_uint,     to_uint_or,     to_uint_list,     to_uint_list_or;
            u8       => to_u8,       to_u8_or,       to_u8_list,       to_u8_list_or;
            u16      => to_u16,      to_u16_or,      to_u16_list,      to_u16_list_or;
            u32      => to_u32,      to_u32_or,      to_u32_list,      to_u32_list_or;
            u64      => to_u64,      to_u64_or,      to_u64_list,      to_u64_list_or;
            f32      => to_f32,      to_f32_or,      to_f32_list,      to_f32_list_or;
            f64      => to_f64,      to_f64_or,      to_f64_list,      to_f64_list_or;
            u8       => to_byte,     to_byte_or,     to_byte_list,     to_byte_list_or;
            Duration => to_duration, to_duration_or, to_duration_list, to_duration_list_or;
            String   => to_string,   to_string_or,   to_string_list,   to_string_list_or;
        }
    };
}

pub(crate) use for_each_conversion;

macro_rules! env_methods {
    ($($ty:ty => $to:ident, $to_or:ident, $to_list:ident, $to_list_or:ident;)*) => {
        impl<C: EnvClient> Env<C> {
            $(
                #[doc = concat!("Reads `name` as `", stringify!($ty), "`.")]
                pub fn $to(&self, name: &str) -> Result<$ty, EnvError> {
                    self.scalar(stringify!($to), name)
                }

                #[doc = concat!("Reads `name` as `", stringify!($ty), "`, or returns `default` on any failure.")]
                pub fn $to_or(&self, name: &str, default: $ty) -> $ty {
                    self.scalar_or(stringify!($to_or), name, default)
                }

                #[doc = concat!("Reads `name` as a `", stringify!($ty), "` sequence split on `separator`.")]
                pub fn $to_list(&self, name: &str, separator: &str) -> Result<Vec<$ty>, EnvError> {
                    self.list(stringify!($to_list), name, separator)
                }

                #[doc = concat!("Reads `name` as a `", stringify!($ty), "` sequence, or returns `default` on any failure.")]
                pub fn $to_list_or(&self, name: &str, separator: &str, default: Vec<$ty>) -> Vec<$ty> {
                    self.list_or(stringify!($to_list_or), name, separator, default)
                }
            )*
        }
    };
}

for_each_conversion!(env_methods);
