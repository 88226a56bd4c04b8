#[cfg(test)]
mod tests {
    use crate::message::*;
    use crate::event::*;
    use crate::config::*;
    use crate::session::*;
    use crate::error::*;

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_user() {
        let msg = Message::user("Hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Hello");
    }

    #[test]
    fn test_message_assistant() {
        let msg = Message::assistant("I can help");
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.content, "I can help");
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            r#""assistant""#
        );
        assert_eq!(Role::Assistant.as_str(), "assistant");
    }

    #[test]
    fn test_chat_request_without_session_serializes_null() {
        let req = ChatRequest {
            message: "hi".to_string(),
            session_id: None,
        };
        let json: serde_json::Value = serde_json::to_value(&req).unwrap();
        assert_eq!(json["message"], "hi");
        assert!(json["session_id"].is_null());
        assert!(json.as_object().unwrap().contains_key("session_id"));
    }

    #[test]
    fn test_chat_request_with_session() {
        let req = ChatRequest {
            message: "hi".to_string(),
            session_id: Some("abc".to_string()),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"message":"hi","session_id":"abc"}"#);
    }

    #[test]
    fn test_chat_reply_deserialize() {
        let json = r#"{"answer": "Hello!", "session_id": "s-1"}"#;
        let reply: ChatReply = serde_json::from_str(json).unwrap();
        assert_eq!(reply.answer, "Hello!");
        assert_eq!(reply.session_id, "s-1");
    }

    #[test]
    fn test_chat_reply_missing_field_is_error() {
        let result = serde_json::from_str::<ChatReply>(r#"{"answer": "x"}"#);
        assert!(result.is_err());
    }

    // ─── Session Tests ───────────────────────────────────────

    #[test]
    fn test_stored_session_format() {
        let s = StoredSession::new("abc", 1_700_000_000_000);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"id":"abc","ts":1700000000000}"#);
    }

    #[test]
    fn test_stored_session_freshness_boundary() {
        let ttl = 1000;
        let s = StoredSession::new("abc", 5000);
        assert!(s.is_fresh(5000, ttl));
        assert!(s.is_fresh(5999, ttl));
        assert!(!s.is_fresh(6000, ttl));
        assert!(!s.is_fresh(100_000, ttl));
    }

    #[test]
    fn test_stored_session_future_timestamp_is_fresh() {
        let s = StoredSession::new("abc", 10_000);
        assert!(s.is_fresh(0, 1000));
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_default_config() {
        let config = WidgetConfig::default();
        assert_eq!(config.api_base, "http://localhost:5012");
        assert_eq!(config.session.ttl_hours, 24);
        assert_eq!(config.session.ttl_ms(), 86_400_000);
        assert_eq!(config.storage, StorageBackendType::Auto);
        assert_eq!(config.max_input_height_px, 120.0);
        assert!(!config.greeting_fallback.is_empty());
        assert!(!config.error_fallback.is_empty());
    }

    #[test]
    fn test_config_urls() {
        let config = WidgetConfig::default().with_api_base("https://chat.example.org/");
        assert_eq!(config.api_base, "https://chat.example.org");
        assert_eq!(config.greet_url(), "https://chat.example.org/greet");
        assert_eq!(config.chat_url(), "https://chat.example.org/chat");
        assert_eq!(
            config.stylesheet_url(),
            "https://chat.example.org/widget.css"
        );
    }

    #[test]
    fn test_config_stylesheet_override() {
        let mut config = WidgetConfig::default();
        config.stylesheet_href = Some("/assets/chat.css".to_string());
        assert_eq!(config.stylesheet_url(), "/assets/chat.css");
    }

    #[test]
    fn test_storage_backend_parse() {
        assert_eq!(
            StorageBackendType::parse("auto"),
            Some(StorageBackendType::Auto)
        );
        assert_eq!(
            StorageBackendType::parse(" LocalStorage "),
            Some(StorageBackendType::LocalStorage)
        );
        assert_eq!(
            StorageBackendType::parse("memory"),
            Some(StorageBackendType::Memory)
        );
        assert_eq!(StorageBackendType::parse("redis"), None);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = WidgetConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: WidgetConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    // ─── Event Tests ─────────────────────────────────────────

    #[test]
    fn test_event_equality() {
        assert_eq!(WidgetEvent::FocusRequested, WidgetEvent::FocusRequested);
        assert_ne!(
            WidgetEvent::PanelToggled { open: true },
            WidgetEvent::PanelToggled { open: false }
        );
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        let e = WidgetError::Network("connection refused".to_string());
        assert_eq!(e.to_string(), "Network error: connection refused");

        let e = WidgetError::Http {
            status: 429,
            body: "Too Many Requests".to_string(),
        };
        assert_eq!(e.to_string(), "HTTP 429: Too Many Requests");

        let e = WidgetError::Storage("quota exceeded".to_string());
        assert_eq!(e.to_string(), "Storage error: quota exceeded");

        let e = WidgetError::JsInterop("no <head>".to_string());
        assert_eq!(e.to_string(), "JS interop error: no <head>");
    }

    #[test]
    fn test_error_kinds_cover_every_variant() {
        // No wildcard arm.
        fn kind(e: &WidgetError) -> &'static str {
            match e {
                WidgetError::Storage(_) => "storage",
                WidgetError::Network(_) | WidgetError::Http { .. } => "network",
                WidgetError::Serialization(_) => "serialization",
                WidgetError::JsInterop(_) => "dom",
            }
        }

        let http = WidgetError::Http {
            status: 500,
            body: String::new(),
        };
        assert_eq!(kind(&http), "network");
        assert_eq!(
            kind(&WidgetError::Serialization("eof".to_string())),
            "serialization"
        );
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{{bad").unwrap_err();
        let e: WidgetError = json_err.into();
        assert!(matches!(e, WidgetError::Serialization(_)));
    }
}
