#[cfg(test)]
mod tests {
    use crate::script::{config_from_attributes, origin_of, resolve_api_base};

    // ─── Script src origin Tests ─────────────────────────────

    #[test]
    fn test_origin_drops_userinfo() {
        assert_eq!(
            origin_of("https://user:pw@chat.example.org/widget.js", "https:").as_deref(),
            Some("https://chat.example.org")
        );
    }

    #[test]
    fn test_origin_uppercase_scheme_and_host() {
        assert_eq!(
            origin_of("HTTPS://Chat.Example.org/widget.js", "https:").as_deref(),
            Some("https://chat.example.org")
        );
    }

    #[test]
    fn test_origin_protocol_relative_uses_page_protocol() {
        assert_eq!(
            origin_of("//cdn.example.org/widget.js", "http:").as_deref(),
            Some("http://cdn.example.org")
        );
        assert_eq!(origin_of("//cdn.example.org/widget.js", "file:"), None);
    }

    #[test]
    fn test_origin_backslash_ends_authority() {
        assert_eq!(
            origin_of("https://chat.example.org\\evil.com/w.js", "https:").as_deref(),
            Some("https://chat.example.org")
        );
    }

    #[test]
    fn test_origin_keeps_explicit_port_only() {
        assert_eq!(
            origin_of("https://chat.example.org:443/widget.js", "https:").as_deref(),
            Some("https://chat.example.org")
        );
        assert_eq!(
            origin_of("http://localhost:5012/widget.js", "http:").as_deref(),
            Some("http://localhost:5012")
        );
    }

    #[test]
    fn test_origin_rejects_non_http() {
        assert_eq!(origin_of("data:text/javascript,1", "https:"), None);
        assert_eq!(origin_of("javascript:alert(1)", "https:"), None);
        assert_eq!(origin_of("./widget.js", "https:"), None);
    }

    #[test]
    fn test_protocol_relative_src_sets_api_base() {
        let base = resolve_api_base(
            None,
            Some("//chat.example.org/widget.js"),
            "https:",
            "www.example.org",
        );
        assert_eq!(base, "https://chat.example.org");
    }

    #[test]
    fn test_config_src_with_credentials() {
        let config = config_from_attributes(
            |name| (name == "src").then(|| "https://a:b@chat.example.org/widget.js".to_string()),
            "https:",
            "www.example.org",
        );
        assert_eq!(config.api_base, "https://chat.example.org");
        assert_eq!(config.chat_url(), "https://chat.example.org/chat");
    }
}
