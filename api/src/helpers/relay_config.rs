use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const BOT_TOKEN_PLACEHOLDER: &str = "BOTTOKEN_REQUIRED";
pub const CHAT_ID_PLACEHOLDER: &str = "CHATID_REQUIRED";
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_PORT: u16 = 8000;
/// Telegram accepts documents up to 2 GiB from a local bot API server.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 2 * 1024 * 1024 * 1024;

/// Process-wide settings, read once at startup and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub bot_token: String,
    pub chat_id: String,
    pub api_url: String,
    pub listen_addr: SocketAddr,
    pub max_upload_bytes: usize,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host: IpAddr = match get("HOST") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| format!("HOST must be an IP address, got {:?}: {}", raw, e))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port: u16 = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| format!("PORT must be a port number, got {:?}: {}", raw, e))?,
            None => DEFAULT_PORT,
        };

        let max_upload_bytes: usize = match get("MAX_UPLOAD_BYTES") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| format!("MAX_UPLOAD_BYTES must be a byte count, got {:?}: {}", raw, e))?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        let api_url = get("TELEGRAM_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Self {
            bot_token: get("BOTTOKEN").unwrap_or_else(|| BOT_TOKEN_PLACEHOLDER.to_string()),
            chat_id: get("CHATID").unwrap_or_else(|| CHAT_ID_PLACEHOLDER.to_string()),
            api_url,
            listen_addr: SocketAddr::new(host, port),
            max_upload_bytes,
        })
    }

    pub fn bot_token_configured(&self) -> bool {
        self.bot_token != BOT_TOKEN_PLACEHOLDER
    }

    pub fn chat_id_configured(&self) -> bool {
        self.chat_id != CHAT_ID_PLACEHOLDER
    }

    pub fn send_document_url(&self) -> String {
        format!("{}/bot{}/sendDocument", self.api_url, self.bot_token)
    }

    /// Same as [`Self::send_document_url`] with the token masked, for logs.
    pub fn redacted_send_document_url(&self) -> String {
        format!("{}/bot<redacted>/sendDocument", self.api_url)
    }
}
