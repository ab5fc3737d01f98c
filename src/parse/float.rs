use crate::parse::FromEnvStr;

/// True when the literal itself spells infinity (`inf`, `-Infinity`, ...).
fn spells_infinity(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

// std parsing rounds an overflowing literal to infinity; treat that as out of range
macro_rules! impl_float {
    ($($t:ty),*) => {
        $(
            impl FromEnvStr for $t {
                const TARGET: &'static str = stringify!($t);

                fn from_env_str(raw: &str) -> Result<Self, String> {
                    let value = raw
                        .parse::<$t>()
                        .map_err(|_| "invalid syntax".to_string())?;
                    if value.is_infinite() && !spells_infinity(raw) {
                        return Err("value out of range".to_string());
                    }
                    Ok(value)
                }
            }
        )*
    };
}

impl_float!(f32, f64);
