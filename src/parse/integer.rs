use crate::parse::FromEnvStr;
use std::num::{IntErrorKind, ParseIntError};

fn reason(err: &ParseIntError) -> String {
    match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => "value out of range",
        IntErrorKind::Empty => "empty value",
        _ => "invalid syntax",
    }
    .to_string()
}

macro_rules! impl_signed {
    ($($t:ty),*) => {
        $(
            impl FromEnvStr for $t {
                const TARGET: &'static str = stringify!($t);

                fn from_env_str(raw: &str) -> Result<Self, String> {
                    raw.parse::<$t>().map_err(|e| reason(&e))
                }
            }
        )*
    };
}

// unsigned input takes no sign at all, not even `+` or `-0`
macro_rules! impl_unsigned {
    ($($t:ty),*) => {
        $(
            impl FromEnvStr for $t {
                const TARGET: &'static str = stringify!($t);

                fn from_env_str(raw: &str) -> Result<Self, String> {
                    if raw.starts_with(['+', '-']) {
                        return Err("invalid syntax".to_string());
                    }
                    raw.parse::<$t>().map_err(|e| reason(&e))
                }
            }
        )*
    };
}

impl_signed!(i8, i16, i32, i64);
impl_unsigned!(u8, u16, u32, u64);
