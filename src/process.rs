// Process environment shortcuts: every Env conversion bound to SystemEnv

use crate::env::{Env, for_each_conversion};
use crate::ports::provided::{EnvError, Lookup};
use std::time::Duration;

/// Raw value of `name` from the process environment.
///
/// # Examples
///
/// ```
/// use envcast::ErrorKind;
///
/// assert_eq!(
///     envcast::lookup("ENVCAST_DOC_LOOKUP_UNSET", true).unwrap_err().kind(),
///     ErrorKind::NotFound
/// );
/// assert_eq!(envcast::lookup_or("ENVCAST_DOC_LOOKUP_UNSET", "fallback"), "fallback");
/// ```
pub fn lookup(name: &str, allow_empty: bool) -> Result<String, EnvError> {
    Env::system().lookup(name, allow_empty)
}

pub fn lookup_or(name: &str, fallback: &str) -> String {
    Env::system().lookup_or(name, fallback)
}

pub fn to_bytes(name: &str) -> Result<Vec<u8>, EnvError> {
    Env::system().to_bytes(name)
}

pub fn to_bytes_or(name: &str, default: Vec<u8>) -> Vec<u8> {
    Env::system().to_bytes_or(name, default)
}

macro_rules! process_fns {
    ($($ty:ty => $to:ident, $to_or:ident, $to_list:ident, $to_list_or:ident;)*) => {
        $(
            #[doc = concat!("Reads process variable `name` as `", stringify!($ty), "`.")]
            pub fn $to(name: &str) -> Result<$ty, EnvError> {
                Env::system().$to(name)
            }

            #[doc = concat!("Reads process variable `name` as `", stringify!($ty), "`, or returns `default` on any failure.")]
            pub fn $to_or(name: &str, default: $ty) -> $ty {
                Env::system().$to_or(name, default)
            }

            #[doc = concat!("Reads process variable `name` as a `", stringify!($ty), "` sequence split on `separator`.")]
            pub fn $to_list(name: &str, separator: &str) -> Result<Vec<$ty>, EnvError> {
                Env::system().$to_list(name, separator)
            }

            #[doc = concat!("Reads process variable `name` as a `", stringify!($ty), "` sequence, or returns `default` on any failure.")]
            pub fn $to_list_or(name: &str, separator: &str, default: Vec<$ty>) -> Vec<$ty> {
                Env::system().$to_list_or(name, separator, default)
            }
        )*
    };
}

for_each_conversion!(process_fns);
