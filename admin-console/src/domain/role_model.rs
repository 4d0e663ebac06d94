// admin-console/src/domain/role_model.rs

use serde::{Deserialize, Serialize};

use crate::domain::status::Status;

/// ロール
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: String,
    /// ロール名称
    pub name: String,
    /// ロールコード（一意、例: ADMIN）
    pub code: String,
    pub status: Status,
    pub sort: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    pub create_time: String,
}

impl Role {
    /// 名称の部分一致（大文字小文字を区別しない）
    pub fn name_contains(&self, keyword: &str) -> bool {
        self.name.to_lowercase().contains(&keyword.to_lowercase())
    }
}

/// 起動時のロールデータと付与済みメニュー
pub fn seed_roles() -> Vec<(Role, Vec<String>)> {
    vec![
        (
            Role {
                id: "1".to_string(),
                name: "システム管理者".to_string(),
                code: "ADMIN".to_string(),
                status: Status::Enable,
                sort: 1,
                remark: Some("全メニューにアクセス可能".to_string()),
                create_time: "2023-01-01 00:00:00".to_string(),
            },
            crate::domain::menu_model::all_menu_ids(),
        ),
        (
            Role {
                id: "2".to_string(),
                name: "一般ユーザー".to_string(),
                code: "USER".to_string(),
                status: Status::Enable,
                sort: 2,
                remark: None,
                create_time: "2023-01-02 00:00:00".to_string(),
            },
            vec!["home".to_string(), "table".to_string()],
        ),
    ]
}
