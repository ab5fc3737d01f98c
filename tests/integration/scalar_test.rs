// Scalar conversion tests
use envcast::{Env, EnvError, ErrorKind};
use crate::mocks::{CountingEnvClient, MockEnvClient};
use std::time::Duration;

fn env_with(key: &str, value: &str) -> Env<MockEnvClient> {
    Env::new(MockEnvClient::new().with(key, value))
}

fn assert_parse_error<T: std::fmt::Debug>(result: Result<T, EnvError>) {
    match result {
        Err(err) => assert_eq!(err.kind(), ErrorKind::Parse, "{}", err),
        Ok(v) => panic!("expected parse error, got {:?}", v),
    }
}

// ============================================================================
// bool
// ============================================================================

#[test]
fn test_to_bool() {
    for raw in ["1", "t", "T", "TRUE", "true", "True", "tRuE"] {
        assert_eq!(env_with("V", raw).to_bool("V"), Ok(true), "{}", raw);
    }
    for raw in ["0", "f", "F", "FALSE", "false", "False"] {
        assert_eq!(env_with("V", raw).to_bool("V"), Ok(false), "{}", raw);
    }
    assert_parse_error(env_with("V", "notabool").to_bool("V"));
    assert_parse_error(env_with("V", "").to_bool("V"));
}

// ============================================================================
// signed integers
// ============================================================================

#[test]
fn test_to_int_uses_64_bit_range() {
    assert_eq!(env_with("V", "105").to_int("V"), Ok(105));
    assert_eq!(env_with("V", "-9223372036854775808").to_int("V"), Ok(i64::MIN));
    assert_eq!(env_with("V", "9223372036854775807").to_int("V"), Ok(i64::MAX));
    assert_parse_error(env_with("V", "9223372036854775808").to_int("V"));
    assert_parse_error(env_with("V", "notanumber").to_int("V"));
}

#[test]
fn test_to_i8_boundaries() {
    assert_eq!(env_with("V", "-128").to_i8("V"), Ok(-128));
    assert_eq!(env_with("V", "127").to_i8("V"), Ok(127));
    assert_eq!(env_with("V", "0").to_i8("V"), Ok(0));
    assert_parse_error(env_with("V", "128").to_i8("V"));
    assert_parse_error(env_with("V", "-129").to_i8("V"));
}

#[test]
fn test_to_i16_i32_i64_boundaries() {
    assert_eq!(env_with("V", "-32768").to_i16("V"), Ok(i16::MIN));
    assert_parse_error(env_with("V", "32768").to_i16("V"));

    assert_eq!(env_with("V", "-2147483648").to_i32("V"), Ok(i32::MIN));
    assert_parse_error(env_with("V", "2147483648").to_i32("V"));

    assert_eq!(env_with("V", "9223372036854775807").to_i64("V"), Ok(i64::MAX));
    assert_parse_error(env_with("V", "-9223372036854775809").to_i64("V"));
}

// ============================================================================
// unsigned integers and byte
// ============================================================================

#[test]
fn test_to_uint_uses_64_bit_range() {
    assert_eq!(env_with("V", "18446744073709551615").to_uint("V"), Ok(u64::MAX));
    assert_parse_error(env_with("V", "18446744073709551616").to_uint("V"));
}

#[test]
fn test_unsigned_negative_is_parse_error() {
    assert_parse_error(env_with("V", "-1").to_u8("V"));
    assert_parse_error(env_with("V", "-1").to_u16("V"));
    assert_parse_error(env_with("V", "-1").to_u32("V"));
    assert_parse_error(env_with("V", "-1").to_u64("V"));
    assert_parse_error(env_with("V", "-1").to_uint("V"));
}

#[test]
fn test_unsigned_boundaries() {
    assert_eq!(env_with("V", "255").to_u8("V"), Ok(u8::MAX));
    assert_parse_error(env_with("V", "256").to_u8("V"));
    assert_eq!(env_with("V", "65535").to_u16("V"), Ok(u16::MAX));
    assert_parse_error(env_with("V", "65536").to_u16("V"));
    assert_eq!(env_with("V", "4294967295").to_u32("V"), Ok(u32::MAX));
    assert_parse_error(env_with("V", "4294967296").to_u32("V"));
}

#[test]
fn test_to_byte_accepts_0_to_255_only() {
    assert_eq!(env_with("V", "0").to_byte("V"), Ok(0));
    assert_eq!(env_with("V", "1").to_byte("V"), Ok(1));
    assert_eq!(env_with("V", "255").to_byte("V"), Ok(255));
    assert_parse_error(env_with("V", "256").to_byte("V"));
    // no wraparound of negative input into the upper half
    assert_parse_error(env_with("V", "-1").to_byte("V"));
    assert_parse_error(env_with("V", "-128").to_byte("V"));
}

// ============================================================================
// floats
// ============================================================================

#[test]
fn test_to_f32() {
    assert_eq!(env_with("V", "0").to_f32("V"), Ok(0.0));
    assert_eq!(
        env_with("V", "3.40282346638528859811704183484516925440000000000000e+38").to_f32("V"),
        Ok(f32::MAX)
    );
    assert_parse_error(
        env_with("V", "3.50282346638528859811704183484516925440000000000000e+38").to_f32("V"),
    );
    assert_eq!(
        env_with("V", "1.40129846432481707092372958328991613128026194187652e-45").to_f32("V"),
        Ok(f32::from_bits(1))
    );
    assert_parse_error(env_with("V", "notanumber").to_f32("V"));
}

#[test]
fn test_to_f64() {
    assert_eq!(
        env_with("V", "1.79769313486231570814527423731704356798070567525845e+308").to_f64("V"),
        Ok(f64::MAX)
    );
    assert_parse_error(
        env_with("V", "1.79769313486231570814527423731704356798070567525845e+309").to_f64("V"),
    );
    assert_eq!(
        env_with("V", "4.94065645841246544176568792868221372365059802614325e-324").to_f64("V"),
        Ok(f64::from_bits(1))
    );
    assert_eq!(env_with("V", "1e3").to_f64("V"), Ok(1000.0));
}

// ============================================================================
// duration, string, bytes
// ============================================================================

#[test]
fn test_to_duration() {
    assert_eq!(env_with("V", "1s").to_duration("V"), Ok(Duration::from_secs(1)));
    assert_eq!(env_with("V", "1m").to_duration("V"), Ok(Duration::from_secs(60)));
    assert_eq!(env_with("V", "1h").to_duration("V"), Ok(Duration::from_secs(3600)));
    assert_eq!(env_with("V", "1h30m").to_duration("V"), Ok(Duration::from_secs(5400)));
    assert_eq!(env_with("V", "250ms").to_duration("V"), Ok(Duration::from_millis(250)));
    assert_parse_error(env_with("V", "105").to_duration("V"));
    assert_parse_error(env_with("V", "notaduration").to_duration("V"));
}

#[test]
fn test_to_string_is_unchanged() {
    assert_eq!(env_with("V", "Hello World").to_string("V"), Ok("Hello World".to_string()));
    assert_eq!(env_with("V", " spaced ").to_string("V"), Ok(" spaced ".to_string()));
    assert_eq!(env_with("V", "").to_string("V"), Ok(String::new()));
}

#[test]
fn test_to_bytes() {
    assert_eq!(
        env_with("V", "Hello World").to_bytes("V"),
        Ok(vec![72, 101, 108, 108, 111, 32, 87, 111, 114, 108, 100])
    );
    assert_eq!(env_with("V", "").to_bytes("V"), Ok(vec![]));
    assert_eq!(env_with("V", "é").to_bytes("V"), Ok(vec![0xc3, 0xa9]));
}

// ============================================================================
// shared behaviour
// ============================================================================

#[test]
fn test_every_strict_form_reports_not_found() {
    let env = Env::new(MockEnvClient::new());
    let missing = EnvError::NotFound("MISSING".to_string());

    assert_eq!(env.to_bool("MISSING"), Err(missing.clone()));
    assert_eq!(env.to_int("MISSING"), Err(missing.clone()));
    assert_eq!(env.to_i8("MISSING"), Err(missing.clone()));
    assert_eq!(env.to_i16("MISSING"), Err(missing.clone()));
    assert_eq!(env.to_i32("MISSING"), Err(missing.clone()));
    assert_eq!(env.to_i64("MISSING"), Err(missing.clone()));
    assert_eq!(env.to_uint("MISSING"), Err(missing.clone()));
    assert_eq!(env.to_u8("MISSING"), Err(missing.clone()));
    assert_eq!(env.to_u16("MISSING"), Err(missing.clone()));
    assert_eq!(env.to_u32("MISSING"), Err(missing.clone()));
    assert_eq!(env.to_u64("MISSING"), Err(missing.clone()));
    assert_eq!(env.to_f32("MISSING"), Err(missing.clone()));
    assert_eq!(env.to_f64("MISSING"), Err(missing.clone()));
    assert_eq!(env.to_byte("MISSING"), Err(missing.clone()));
    assert_eq!(env.to_duration("MISSING"), Err(missing.clone()));
    assert_eq!(env.to_string("MISSING"), Err(missing.clone()));
    assert_eq!(env.to_bytes("MISSING"), Err(missing));
}

#[test]
fn test_strict_form_is_idempotent() {
    let env = env_with("V", "42");
    assert_eq!(env.to_i32("V"), env.to_i32("V"));

    let env = env_with("V", "nope");
    assert_eq!(env.to_i32("V"), env.to_i32("V"));
}

#[test]
fn test_conversion_reads_environment_once() {
    let client = CountingEnvClient::new(MockEnvClient::new().with("V", "1,2,3"));
    let env = Env::new(&client);

    env.to_u8_list("V", ",").unwrap();
    assert_eq!(client.reads.get(), 1);

    env.to_u8_or("V", 0);
    assert_eq!(client.reads.get(), 2);
}
