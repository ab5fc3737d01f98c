//! Read an environment variable and convert it to a typed value in one step.
//!
//! ```
//! use envcast::{Env, InMemoryEnv};
//!
//! let vars: InMemoryEnv = [("WORKERS", "8"), ("HOSTS", "a, b")].into_iter().collect();
//! let env = Env::new(vars);
//!
//! assert_eq!(env.to_u32("WORKERS"), Ok(8));
//! assert_eq!(env.to_string_list("HOSTS", ","), Ok(vec!["a".to_string(), "b".to_string()]));
//! assert_eq!(env.to_u32_or("RETRIES", 3), 3);
//!
//! // the same conversions against the process environment
//! assert_eq!(envcast::to_u32_or("ENVCAST_DOC_RETRIES_UNSET", 3), 3);
//! ```

pub mod adapters;
pub mod common;
pub mod env;
pub mod parse;
pub mod ports;
mod process;

pub use adapters::{InMemoryEnv, SystemEnv};
pub use common::LogFormat;
pub use env::Env;
pub use parse::FromEnvStr;
pub use process::*;

pub use ports::provided::{EnvError, ErrorKind, Lookup};
pub use ports::required::EnvClient;
