use crate::parse::FromEnvStr;

impl FromEnvStr for bool {
    const TARGET: &'static str = "bool";

    /// Case-insensitive: `1`, `t`, `true` and `0`, `f`, `false`.
    fn from_env_str(raw: &str) -> Result<Self, String> {
        match raw.to_lowercase().as_str() {
            "1" | "t" | "true" => Ok(true),
            "0" | "f" | "false" => Ok(false),
            _ => Err("invalid syntax".to_string()),
        }
    }
}
