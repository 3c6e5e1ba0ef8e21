use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, ServerConfig { bind_addr: "0.0.0.0".to_owned(), port: 3000 });
    assert_eq!(config.socket_addr(), "0.0.0.0:3000");
}

#[test]
fn reads_port_and_bind_addr() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", " 8080 "), ("BIND_ADDR", "127.0.0.1")])).unwrap();
    assert_eq!(config.socket_addr(), "127.0.0.1:8080");
}

#[test]
fn rejects_bad_port() {
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])),
        Err(ConfigError::InvalidPort("eighty".to_owned()))
    );
    assert!(ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}

#[test]
fn rejects_blank_bind_addr() {
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "  ")])),
        Err(ConfigError::EmptyBindAddr)
    );
}
