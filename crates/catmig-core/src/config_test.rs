use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_succeeds_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert!(cfg.merchant_id.is_none());
    assert!(cfg.session_cookie.is_none());
    assert_eq!(cfg.page_limit, 200);
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "catmig/0.1 (catalog-migration)");
    assert_eq!(cfg.output_dir, PathBuf::from("."));
    assert_eq!(cfg.log_level, "info");
}

#[test]
fn build_app_config_reads_session_vars() {
    let mut map = HashMap::new();
    map.insert("CATMIG_MERCHANT_ID", "5f1a2b3c");
    map.insert("CATMIG_SESSION_COOKIE", "_shopline_session=abc");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.merchant_id.as_deref(), Some("5f1a2b3c"));
    assert_eq!(cfg.session_cookie.as_deref(), Some("_shopline_session=abc"));
}

#[test]
fn build_app_config_blank_merchant_id_is_none() {
    let mut map = HashMap::new();
    map.insert("CATMIG_MERCHANT_ID", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.merchant_id.is_none());
}

#[test]
fn build_app_config_page_limit_override() {
    let mut map = HashMap::new();
    map.insert("CATMIG_PAGE_LIMIT", "50");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.page_limit, 50);
}

#[test]
fn build_app_config_rejects_zero_page_limit() {
    let mut map = HashMap::new();
    map.insert("CATMIG_PAGE_LIMIT", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CATMIG_PAGE_LIMIT"),
        "expected InvalidEnvVar(CATMIG_PAGE_LIMIT), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_non_numeric_timeout() {
    let mut map = HashMap::new();
    map.insert("CATMIG_REQUEST_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CATMIG_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(CATMIG_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_timeout() {
    let mut map = HashMap::new();
    map.insert("CATMIG_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
}

#[test]
fn build_app_config_output_dir_override() {
    let mut map = HashMap::new();
    map.insert("CATMIG_OUTPUT_DIR", "/tmp/exports");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.output_dir, PathBuf::from("/tmp/exports"));
}

#[test]
fn debug_output_redacts_session_cookie() {
    let mut map = HashMap::new();
    map.insert("CATMIG_SESSION_COOKIE", "_shopline_session=secret");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("secret"), "cookie leaked: {rendered}");
    assert!(rendered.contains("[redacted]"));
}
