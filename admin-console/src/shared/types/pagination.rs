// admin-console/src/shared/types/pagination.rs

use serde::{Deserialize, Serialize};

/// デフォルトのページサイズ
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// ページサイズの上限
pub const MAX_PAGE_SIZE: u32 = 100;

/// 一覧取得の結果 `{ list, total }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub list: Vec<T>,
    pub total: u64,
}

impl<T> PageResult<T> {
    pub fn new(list: Vec<T>, total: u64) -> Self {
        Self { list, total }
    }

    /// 全件からページを切り出す
    pub fn paginate(items: Vec<T>, page: u32, page_size: u32) -> Self {
        let total = items.len() as u64;
        let offset = (page.saturating_sub(1) as usize).saturating_mul(page_size as usize);
        let list = items
            .into_iter()
            .skip(offset)
            .take(page_size as usize)
            .collect();
        Self { list, total }
    }

    pub fn total_pages(&self, page_size: u32) -> u64 {
        if page_size == 0 {
            return 0;
        }
        self.total.div_ceil(page_size as u64)
    }
}
