use serde::{Deserialize, Deserializer, Serialize};

// Re-export pagination constants
pub use crate::shared::types::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// デフォルトページ番号
fn default_page() -> u32 {
    1
}

/// デフォルトページサイズ
fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// 文字列または数値からu32をデシリアライズ
fn deserialize_u32_from_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(u32),
    }

    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s.parse::<u32>().map_err(serde::de::Error::custom),
        StringOrNumber::Number(n) => Ok(n),
    }
}

/// 統一ページネーションクエリパラメータ `page` / `pageSize`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationQuery {
    #[serde(
        default = "default_page",
        deserialize_with = "deserialize_u32_from_string"
    )]
    pub page: u32,
    #[serde(
        default = "default_page_size",
        deserialize_with = "deserialize_u32_from_string"
    )]
    pub page_size: u32,
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl PaginationQuery {
    /// デフォルト値を適用してページとpage_sizeを取得
    pub fn get_pagination(&self) -> (u32, u32) {
        let page = self.page.max(1);
        let page_size = self.page_size.clamp(1, MAX_PAGE_SIZE);
        (page, page_size)
    }
}
