//! Builder configuration tests
//!
//! These never touch the network: they inspect the request value produced
//! by `build()`.

use std::time::Duration;

use courier::{ClientExt, Content, HttpClient, Method, RequestBuilder};

fn client() -> HttpClient {
    HttpClient::new().expect("client should build")
}

#[cfg(test)]
mod construction_tests {
    use super::*;

    #[tokio::test]
    async fn accepts_http_and_https() {
        let client = client();
        for url in [
            "http://localhost/",
            "https://example.com/path?q=1",
            "HTTPS://EXAMPLE.COM",
            "http://127.0.0.1:8080/a/b",
        ] {
            assert!(RequestBuilder::create(&client, url).is_ok(), "{url} should be accepted");
        }
    }

    #[tokio::test]
    async fn rejects_other_schemes() {
        let client = client();
        for url in ["ftp://example.com/file", "file:///etc/passwd", "ws://example.com", "mailto:a@b.c"] {
            let err = RequestBuilder::create(&client, url).unwrap_err();
            assert!(err.is_builder(), "{url} should be rejected");
        }
    }

    #[tokio::test]
    async fn rejects_unparseable_urls() {
        let client = client();
        assert!(client.request("").unwrap_err().is_builder());
        assert!(client.request("/relative/path").unwrap_err().is_builder());
    }

    #[tokio::test]
    async fn rejects_urls_the_transport_cannot_carry() {
        let client = client();
        let url = format!("http://127.0.0.1:9/{}", "a".repeat(70_000));

        let err = client.get(&url).unwrap_err();
        assert!(err.is_builder());
        assert!(matches!(err.config_error(), Some(courier::ConfigError::InvalidUri(_))));
    }

    #[tokio::test]
    async fn defaults() {
        let request = client().request("https://example.com").unwrap().build().unwrap();

        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.timeout(), Duration::from_millis(20_000));
        assert!(request.headers().is_empty());
        assert!(request.content().is_none());
    }

    #[tokio::test]
    async fn shortcut_factories_preset_method() {
        let client = client();
        let url = "https://example.com";
        assert_eq!(client.get(url).unwrap().build().unwrap().method(), Method::GET);
        assert_eq!(client.post(url).unwrap().build().unwrap().method(), Method::POST);
        assert_eq!(client.put(url).unwrap().build().unwrap().method(), Method::PUT);
        assert_eq!(client.patch(url).unwrap().build().unwrap().method(), Method::PATCH);
        assert_eq!(client.delete(url).unwrap().build().unwrap().method(), Method::DELETE);
    }

    #[tokio::test]
    async fn client_default_timeout_seeds_builders() {
        let client = HttpClient::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();
        let request = courier::request(&client, "http://localhost").unwrap().build().unwrap();
        assert_eq!(request.timeout(), Duration::from_secs(2));
    }
}

#[cfg(test)]
mod header_tests {
    use super::*;

    #[tokio::test]
    async fn same_name_replaces_case_insensitively() {
        let request = client()
            .get("https://example.com")
            .unwrap()
            .header("Content-Type", "text/csv")
            .unwrap()
            .header("content-type", "application/json")
            .unwrap()
            .build()
            .unwrap();

        let values: Vec<_> = request.headers().get_all("CONTENT-TYPE").iter().collect();
        assert_eq!(values, vec!["application/json"]);
    }

    #[tokio::test]
    async fn rejects_blank_and_invalid_names() {
        let builder = client().get("https://example.com").unwrap();
        assert!(builder.clone().header("", "v").unwrap_err().is_builder());
        assert!(builder.clone().header("   ", "v").unwrap_err().is_builder());
        assert!(builder.clone().header("bad name", "v").unwrap_err().is_builder());
        assert!(builder.header("x-ok", "line\nbreak").unwrap_err().is_builder());
    }

    #[tokio::test]
    async fn bulk_headers() {
        let request = client()
            .get("https://example.com")
            .unwrap()
            .headers([("x-one", "1"), ("x-two", "2")])
            .unwrap()
            .user_agent("tests/1.0")
            .unwrap()
            .accept("application/json")
            .unwrap()
            .build()
            .unwrap();

        let headers = request.headers();
        assert_eq!(headers["x-one"], "1");
        assert_eq!(headers["x-two"], "2");
        assert_eq!(headers["user-agent"], "tests/1.0");
        assert_eq!(headers["accept"], "application/json");
    }
}

#[cfg(test)]
mod auth_tests {
    use super::*;

    #[tokio::test]
    async fn basic_auth_header() {
        let request = client()
            .get("https://example.com")
            .unwrap()
            .basic_auth("user", "pass")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(request.headers()["authorization"], "Basic dXNlcjpwYXNz");
    }

    #[tokio::test]
    async fn bearer_auth_header() {
        let request = client()
            .get("https://example.com")
            .unwrap()
            .bearer_auth("abc123")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(request.headers()["authorization"], "Bearer abc123");
    }

    #[tokio::test]
    async fn last_scheme_wins() {
        let request = client()
            .get("https://example.com")
            .unwrap()
            .header("Authorization", "Token old")
            .unwrap()
            .basic_auth("user", "pass")
            .unwrap()
            .bearer_auth("abc123")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(request.headers().get_all("authorization").iter().count(), 1);
        assert_eq!(request.headers()["authorization"], "Bearer abc123");
    }

    #[tokio::test]
    async fn blank_bearer_token_is_rejected() {
        let builder = client().get("https://example.com").unwrap();
        assert!(builder.clone().bearer_auth("").unwrap_err().is_builder());
        assert!(builder.bearer_auth(" \t").unwrap_err().is_builder());
    }
}

#[cfg(test)]
mod content_tests {
    use super::*;

    #[tokio::test]
    async fn get_never_carries_a_payload() {
        let request = client()
            .get("https://example.com")
            .unwrap()
            .body("ignored")
            .media_type("application/json")
            .unwrap()
            .form_field("name", "value")
            .unwrap()
            .encoded_form([("a", "b")])
            .build()
            .unwrap();

        assert!(request.content().is_none());
    }

    #[tokio::test]
    async fn multipart_takes_priority_over_encoded_form() {
        let request = client()
            .post("https://example.com")
            .unwrap()
            .body("ignored")
            .form_field("name", "value")
            .unwrap()
            .encoded_form([("a", "b")])
            .build()
            .unwrap();

        match request.content() {
            Some(Content::Multipart(form)) => {
                assert_eq!(form.fields(), &[("name".to_owned(), "value".to_owned())]);
            }
            other => panic!("expected multipart content, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn multipart_fields_keep_insertion_order() {
        let request = client()
            .post("https://example.com")
            .unwrap()
            .form_field("b", "2")
            .unwrap()
            .form_field("a", "1")
            .unwrap()
            .form_field("b", "3")
            .unwrap()
            .build()
            .unwrap();

        let Some(Content::Multipart(form)) = request.content() else {
            panic!("expected multipart content");
        };
        let names: Vec<_> = form.fields().iter().map(|(n, v)| format!("{n}={v}")).collect();
        assert_eq!(names, ["b=2", "a=1", "b=3"]);
    }

    #[tokio::test]
    async fn encoded_form_beats_raw_body_and_is_replaced_wholesale() {
        let request = client()
            .post("https://example.com")
            .unwrap()
            .body("ignored")
            .encoded_form([("first", "1")])
            .encoded_form(vec![("q".to_owned(), "a b".to_owned())])
            .build()
            .unwrap();

        let content = request.content().expect("payload");
        assert_eq!(content, &Content::UrlEncoded("q=a+b".to_owned()));
        assert_eq!(content.content_type(), "application/x-www-form-urlencoded");
    }

    #[tokio::test]
    async fn raw_body_uses_media_type_and_encoding() {
        let request = client()
            .put("https://example.com")
            .unwrap()
            .body("café")
            .media_type("text/csv")
            .unwrap()
            .encoding_label("latin1")
            .unwrap()
            .build()
            .unwrap();

        let content = request.content().expect("payload");
        assert_eq!(content.content_type(), "text/csv; charset=windows-1252");
        assert_eq!(content.to_bytes().as_ref(), b"caf\xe9");
    }

    #[tokio::test]
    async fn raw_body_defaults_to_plain_text() {
        let request = client()
            .post("https://example.com")
            .unwrap()
            .build()
            .unwrap();

        let content = request.content().expect("payload");
        assert_eq!(content.content_type(), "text/plain; charset=UTF-8");
        assert!(content.to_bytes().is_empty());
    }

    #[tokio::test]
    async fn media_type_charset_follows_encoding() {
        let request = client()
            .post("https://example.com")
            .unwrap()
            .body("é")
            .media_type("text/plain; charset=utf-8")
            .unwrap()
            .encoding(courier::Encoding::for_label(b"windows-1252").expect("known label"))
            .build()
            .unwrap();

        let content = request.content().expect("payload");
        assert_eq!(content.content_type(), "text/plain; charset=windows-1252");
        assert_eq!(content.to_bytes().as_ref(), b"\xe9");
    }

    #[tokio::test]
    async fn json_body() {
        let request = client()
            .post("https://example.com")
            .unwrap()
            .json(&serde_json::json!({"name": "Ada"}))
            .unwrap()
            .build()
            .unwrap();

        let content = request.content().expect("payload");
        assert_eq!(content.content_type(), "application/json; charset=UTF-8");
        assert_eq!(content.to_bytes().as_ref(), br#"{"name":"Ada"}"#);
    }

    #[tokio::test]
    async fn invalid_body_settings_fail_fast() {
        let builder = client().post("https://example.com").unwrap();
        assert!(builder.clone().media_type("").unwrap_err().is_builder());
        assert!(builder.clone().media_type("  ").unwrap_err().is_builder());
        assert!(builder.clone().encoding_label("no-such-charset").unwrap_err().is_builder());
        assert!(builder.form_field(" ", "value").unwrap_err().is_builder());
    }
}

#[cfg(test)]
mod timeout_tests {
    use super::*;

    #[tokio::test]
    async fn non_positive_timeouts_are_range_errors() {
        let builder = client().get("https://example.com").unwrap();
        for millis in [0, -1, i64::MIN] {
            let err = builder.clone().timeout_millis(millis).unwrap_err();
            assert!(err.is_builder());
            assert!(err.is_range(), "{millis} should be a range error");
        }
        assert!(builder.timeout(Duration::ZERO).unwrap_err().is_range());
    }

    #[tokio::test]
    async fn positive_timeout_is_applied() {
        let request = client()
            .get("https://example.com")
            .unwrap()
            .timeout_millis(1_500)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(request.timeout(), Duration::from_millis(1_500));
    }
}
