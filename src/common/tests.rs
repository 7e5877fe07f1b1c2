#[cfg(test)]
mod common_tests {
    use crate::common::common::{current_time_millis, expiration_millis, is_blank, is_expired, parse_cli_value, parse_log_level};
    use crate::common::structs::custom_error::CustomError;
    use proptest::prelude::*;
    use serde_json::{json, Value};

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("off"), Some(log::LevelFilter::Off));
        assert_eq!(parse_log_level("debug"), Some(log::LevelFilter::Debug));
        assert_eq!(parse_log_level("loud"), None);
    }

    #[test]
    fn test_expiration_zero_means_never() {
        assert_eq!(expiration_millis(None), None);
        assert_eq!(expiration_millis(Some(0)), None);
        assert!(!is_expired(None));
    }

    #[test]
    fn test_expiration_in_future() {
        let now = current_time_millis();
        let at = expiration_millis(Some(10)).unwrap();
        assert!(at >= now + 10_000);
        assert!(!is_expired(Some(at)));
        assert!(is_expired(Some(now - 1)));
    }

    #[test]
    fn test_expiration_saturates() {
        assert_eq!(expiration_millis(Some(u64::MAX)), Some(i64::MAX));
    }

    #[test]
    fn test_is_blank() {
        for value in [json!(null), json!(false), json!(0), json!(0.0), json!(""), json!("0"), json!([]), json!({})] {
            assert!(is_blank(&value), "{} should be blank", value);
        }
        for value in [json!(true), json!(1), json!("a"), json!("00"), json!([0]), json!({"a": null})] {
            assert!(!is_blank(&value), "{} should not be blank", value);
        }
    }

    #[test]
    fn test_parse_cli_value() {
        assert_eq!(parse_cli_value("42"), json!(42));
        assert_eq!(parse_cli_value("{\"a\":true}"), json!({"a": true}));
        assert_eq!(parse_cli_value("hello world"), Value::String(String::from("hello world")));
    }

    #[test]
    fn test_custom_error_display() {
        let error = CustomError::new("boom");
        assert_eq!(error.to_string(), "boom");
        assert_eq!(error.message(), "boom");
    }

    proptest! {
        #[test]
        fn prop_non_empty_strings_other_than_zero_are_present(text in "[a-zA-Z1-9 ]{1,16}") {
            prop_assert!(!is_blank(&Value::String(text)));
        }

        #[test]
        fn prop_positive_ttl_expires_later(ttl in 1u64..10_000_000) {
            let now = current_time_millis();
            let at = expiration_millis(Some(ttl)).unwrap();
            prop_assert!(at >= now + (ttl as i64) * 1000);
        }
    }
}
