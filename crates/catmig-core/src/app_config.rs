use std::path::PathBuf;

/// Default admin API root of the source platform.
pub const DEFAULT_API_BASE_URL: &str = "https://admin.shoplineapp.com/api/admin/v1";

#[derive(Clone)]
pub struct AppConfig {
    /// Admin API root; the listing endpoint is `{api_base_url}/{merchant_id}/products`.
    pub api_base_url: String,
    pub merchant_id: Option<String>,
    /// Raw `Cookie` header of an authenticated admin session.
    pub session_cookie: Option<String>,
    pub page_limit: u32,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub output_dir: PathBuf,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_base_url", &self.api_base_url)
            .field("merchant_id", &self.merchant_id)
            .field(
                "session_cookie",
                &self.session_cookie.as_ref().map(|_| "[redacted]"),
            )
            .field("page_limit", &self.page_limit)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("output_dir", &self.output_dir)
            .field("log_level", &self.log_level)
            .finish()
    }
}
