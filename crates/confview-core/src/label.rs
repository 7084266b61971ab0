//! Upper-snake-case labels for configuration keys

use heck::ToShoutySnakeCase;

/// Render a configuration key as a display label (`apiUrl` -> `API_URL`).
///
/// Runs of non-alphanumeric characters, lower-to-upper humps and the end of an
/// acronym (`HTTPServer`) each become a single `_`. Digits stay attached to the
/// preceding word. Letters are upper-cased with Unicode case mapping, so `ß`
/// expands to `SS`. A key with no alphanumeric characters yields `""`.
pub fn constant_label(key: &str) -> String {
    key.to_shouty_snake_case()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_boundaries() {
        assert_eq!(constant_label("apiUrl"), "API_URL");
        assert_eq!(constant_label("max_retries"), "MAX_RETRIES");
        assert_eq!(constant_label("timeout-ms"), "TIMEOUT_MS");
        assert_eq!(constant_label("log level"), "LOG_LEVEL");
        assert_eq!(constant_label("midKey"), "MID_KEY");
    }

    #[test]
    fn test_separators_collapse() {
        assert_eq!(constant_label("a__b"), "A_B");
        assert_eq!(constant_label("a - b"), "A_B");
        assert_eq!(constant_label("_leading"), "LEADING");
        assert_eq!(constant_label("trailing-"), "TRAILING");
    }

    #[test]
    fn test_acronyms_and_digits() {
        assert_eq!(constant_label("HTTPServer"), "HTTP_SERVER");
        assert_eq!(constant_label("apiURL"), "API_URL");
        assert_eq!(constant_label("v2Api"), "V2_API");
        assert_eq!(constant_label("2faEnabled"), "2FA_ENABLED");
        assert_eq!(constant_label("ethGasPriceDefault"), "ETH_GAS_PRICE_DEFAULT");
    }

    #[test]
    fn test_already_upper() {
        assert_eq!(constant_label("API_URL"), "API_URL");
        assert_eq!(constant_label("ZETA"), "ZETA");
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(constant_label("café"), "CAFÉ");
        assert_eq!(constant_label("straße"), "STRASSE");
    }

    #[test]
    fn test_only_separators() {
        assert_eq!(constant_label("--"), "");
        assert_eq!(constant_label(""), "");
    }
}
