/// Whether `value` parses as a JSON document (any value, not only objects).
pub fn is_valid_json(value: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_documents() {
        assert!(is_valid_json("{}"));
        assert!(is_valid_json(r#"{ "port": 5432, "tags": ["a"] }"#));
        assert!(is_valid_json("null"));
        assert!(is_valid_json(" 42 "));
    }

    #[test]
    fn test_invalid_documents() {
        assert!(!is_valid_json(""));
        assert!(!is_valid_json("   "));
        assert!(!is_valid_json("{ port: 5432 }"));
        assert!(!is_valid_json(r#"{ "a": 1, }"#));
        assert!(!is_valid_json(r#"{ "a": 1 } trailing"#));
    }
}
