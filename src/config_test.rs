use super::*;

#[test]
fn resolve_defaults_to_local_backend() {
    let config = ClientConfig::resolve(None, None);
    assert_eq!(config.api_base_url, "http://localhost:8080");
    assert_eq!(config.ws_url, "ws://localhost:8080/ws");
}

#[test]
fn resolve_treats_blank_values_as_unset() {
    let config = ClientConfig::resolve(Some("  "), Some(""));
    assert_eq!(config, ClientConfig::resolve(None, None));
}

#[test]
fn resolve_derives_secure_socket_from_https_api() {
    let config = ClientConfig::resolve(Some("https://ttt.example.com/"), None);
    assert_eq!(config.api_base_url, "https://ttt.example.com");
    assert_eq!(config.ws_url, "wss://ttt.example.com/ws");
}

#[test]
fn explicit_socket_url_wins() {
    let config = ClientConfig::resolve(Some("http://api:9000"), Some("ws://rt:9001/socket/"));
    assert_eq!(config.ws_url, "ws://rt:9001/socket");
}

#[test]
fn endpoint_and_socket_url_formatting() {
    let config = ClientConfig::resolve(Some("http://localhost:8080"), None);
    assert_eq!(config.endpoint("/login"), "http://localhost:8080/login");
    assert_eq!(config.socket_url("abc.def"), "ws://localhost:8080/ws?token=abc.def");
}

#[cfg(not(feature = "csr"))]
#[test]
fn socket_url_keeps_token_as_single_query_value() {
    let config = ClientConfig::resolve(None, Some("wss://rt.example.com/ws"));
    let url = config.socket_url("eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOjF9.c2ln");
    assert_eq!(url, "wss://rt.example.com/ws?token=eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOjF9.c2ln");
    assert_eq!(url.matches('?').count(), 1);
}
