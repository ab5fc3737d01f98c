use crate::parse::FromEnvStr;
use std::time::Duration;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SECOND: u128 = 1_000_000_000;
const NANOS_PER_MINUTE: u128 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u128 = 60 * NANOS_PER_MINUTE;

// digits beyond this are below nanosecond precision for every unit
const MAX_FRACTION_DIGITS: usize = 18;

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "\u{b5}s" | "\u{3bc}s" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SECOND),
        "m" => Some(NANOS_PER_MINUTE),
        "h" => Some(NANOS_PER_HOUR),
        _ => None,
    }
}

fn split_digits(s: &str) -> (&str, &str) {
    let len = s.bytes().take_while(u8::is_ascii_digit).count();
    s.split_at(len)
}

fn out_of_range() -> String {
    "value out of range".to_string()
}

/// Parses a compound span such as `1h30m`, `1.5s` or `300ms`.
///
/// A span is one or more `<decimal><unit>` segments with no separators, with
/// an optional leading sign. Units: `ns`, `us` (or `µs`), `ms`, `s`, `m`, `h`.
/// The literal `0` is the only value allowed without a unit. Fractions finer
/// than a nanosecond are truncated.
///
/// `Duration` is unsigned, so a negative span such as `-5s` is rejected with
/// "negative duration". `-0` reads as zero.
///
/// # Examples
///
/// ```
/// use envcast::parse::parse_duration;
/// use std::time::Duration;
///
/// assert_eq!(parse_duration("1h30m"), Ok(Duration::from_secs(5400)));
/// assert_eq!(parse_duration("1.5s"), Ok(Duration::from_millis(1500)));
/// assert_eq!(parse_duration("0"), Ok(Duration::ZERO));
/// assert!(parse_duration("105").is_err());
/// assert_eq!(parse_duration("-5s"), Err("negative duration".to_string()));
/// ```
pub fn parse_duration(raw: &str) -> Result<Duration, String> {
    let (negative, body) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    if body == "0" {
        return Ok(Duration::ZERO);
    }
    if body.is_empty() {
        return Err("invalid duration".to_string());
    }

    let mut total: u128 = 0;
    let mut rest = body;

    while !rest.is_empty() {
        let (whole_digits, after) = split_digits(rest);
        let (fraction_digits, after) = match after.strip_prefix('.') {
            Some(stripped) => split_digits(stripped),
            None => ("", after),
        };
        if whole_digits.is_empty() && fraction_digits.is_empty() {
            return Err("invalid duration".to_string());
        }

        let unit_len = after
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after.len());
        let (unit, after) = after.split_at(unit_len);
        if unit.is_empty() {
            return Err("missing unit in duration".to_string());
        }
        let scale = unit_nanos(unit)
            .ok_or_else(|| "unknown unit in duration".to_string())?;

        let whole: u128 = if whole_digits.is_empty() {
            0
        } else {
            whole_digits.parse().map_err(|_| out_of_range())?
        };
        let mut nanos = whole.checked_mul(scale).ok_or_else(out_of_range)?;

        let fraction_digits = &fraction_digits[..fraction_digits.len().min(MAX_FRACTION_DIGITS)];
        if !fraction_digits.is_empty() {
            let fraction: u128 = fraction_digits.parse().map_err(|_| out_of_range())?;
            let denominator = 10u128.pow(fraction_digits.len() as u32);
            nanos = nanos
                .checked_add(fraction * scale / denominator)
                .ok_or_else(out_of_range)?;
        }

        total = total.checked_add(nanos).ok_or_else(out_of_range)?;
        if total > u64::MAX as u128 {
            return Err(out_of_range());
        }
        rest = after;
    }

    if negative && total != 0 {
        return Err("negative duration".to_string());
    }

    let nanos = u64::try_from(total).map_err(|_| out_of_range())?;
    Ok(Duration::from_nanos(nanos))
}

impl FromEnvStr for Duration {
    const TARGET: &'static str = "duration";

    fn from_env_str(raw: &str) -> Result<Self, String> {
        parse_duration(raw)
    }
}
