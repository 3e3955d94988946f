/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the inventory server (default: `http://localhost:3000`).
    pub api_url: String,
}

impl ClientConfig {
    /// | Env Var              | Default                 |
    /// |----------------------|-------------------------|
    /// | `INVENTARIO_API_URL` | `http://localhost:3000` |
    pub fn from_env() -> Self {
        let api_url = std::env::var("INVENTARIO_API_URL")
            .ok()
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| "http://localhost:3000".into());

        Self { api_url }
    }
}
