use dotenvy::dotenv;
use std::env;

#[derive(Clone, Debug)]
pub struct MockConfig {
    /// 疑似ネットワーク遅延を有効にするか
    pub latency_enabled: bool,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    /// クライアントラッパーが使う API のベースURL
    pub api_base_url: String,
    pub mock: MockConfig,
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok(); // .env ファイルを読み込む (存在しなくてもエラーにしない)

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .map_err(|_| "Invalid PORT value")?;

        let latency_enabled = match env::var("MOCK_LATENCY_ENABLED") {
            Ok(value) => parse_bool(&value).ok_or("Invalid MOCK_LATENCY_ENABLED value")?,
            Err(_) => true,
        };

        Ok(Self {
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| format!("http://{}:{}", host, port)),
            environment,
            host,
            port,
            cors_allowed_origins: parse_origins(
                &env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            ),
            mock: MockConfig { latency_enabled },
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// テスト用の設定を作成（遅延なし・ポートは OS に任せる）
    pub fn for_testing() -> Self {
        Self {
            environment: "test".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_allowed_origins: vec!["http://localhost:5173".to_string()],
            api_base_url: "http://127.0.0.1:0".to_string(),
            mock: MockConfig {
                latency_enabled: false,
            },
        }
    }
}
