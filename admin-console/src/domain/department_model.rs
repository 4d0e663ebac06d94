// admin-console/src/domain/department_model.rs

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

use crate::domain::status::Status;
use crate::utils::tree::TreeNode;

/// `createTime` の書式
pub const CREATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_create_time<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format(CREATE_TIME_FORMAT).to_string()
}

pub fn now_create_time() -> String {
    format_create_time(&Local::now())
}

/// 部門
///
/// `parent_id` は作成時に設定されるだけで、木の中の位置とは同期しない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: String,
    pub parent_id: Option<String>,
    pub name: String,
    pub code: String,
    pub leader: String,
    pub status: Status,
    pub sort: i32,
    pub create_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Department>>,
}

impl TreeNode for Department {
    fn node_id(&self) -> &str {
        &self.id
    }

    fn children(&self) -> Option<&[Self]> {
        self.children.as_deref()
    }

    fn children_slot(&mut self) -> &mut Option<Vec<Self>> {
        &mut self.children
    }
}

impl Department {
    /// 子部門を末尾に追加（`children` がなければ作る）
    pub fn push_child(&mut self, child: Department) {
        self.children.get_or_insert_with(Vec::new).push(child);
    }
}

#[allow(clippy::too_many_arguments)]
fn seed(
    id: &str,
    parent_id: Option<&str>,
    name: &str,
    code: &str,
    leader: &str,
    sort: i32,
    create_time: &str,
    children: Option<Vec<Department>>,
) -> Department {
    Department {
        id: id.to_string(),
        parent_id: parent_id.map(str::to_string),
        name: name.to_string(),
        code: code.to_string(),
        leader: leader.to_string(),
        status: Status::Enable,
        sort,
        create_time: create_time.to_string(),
        description: None,
        children,
    }
}

/// 起動時の部門データ
pub fn seed_departments() -> Vec<Department> {
    vec![seed(
        "1",
        None,
        "本社",
        "HEADQUARTER",
        "Admin",
        1,
        "2023-01-01 00:00:00",
        Some(vec![
            seed(
                "2",
                Some("1"),
                "研究開発センター",
                "RND",
                "CTO",
                1,
                "2023-01-02 00:00:00",
                Some(vec![
                    seed(
                        "3",
                        Some("2"),
                        "バックエンド開発グループ",
                        "BACKEND",
                        "Backend Lead",
                        1,
                        "2023-01-03 00:00:00",
                        None,
                    ),
                    seed(
                        "4",
                        Some("2"),
                        "フロントエンド開発グループ",
                        "FRONTEND",
                        "Frontend Lead",
                        2,
                        "2023-01-03 00:00:00",
                        None,
                    ),
                ]),
            ),
            seed(
                "5",
                Some("1"),
                "マーケティング部",
                "MARKETING",
                "CMO",
                2,
                "2023-01-02 00:00:00",
                None,
            ),
        ]),
    )]
}
