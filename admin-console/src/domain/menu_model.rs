// admin-console/src/domain/menu_model.rs

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::utils::tree::{collect_ids, TreeNode};

/// メニューツリーのノード（ロールの権限設定用）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuTreeNode {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<MenuTreeNode>>,
}

impl TreeNode for MenuTreeNode {
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

fn menu(id: &str, label: &str) -> MenuTreeNode {
    MenuTreeNode {
        id: id.to_string(),
        label: label.to_string(),
        children: None,
    }
}

static MENU_TREE: Lazy<Vec<MenuTreeNode>> = Lazy::new(|| {
    vec![
        menu("home", "ホーム"),
        menu("table", "テーブル管理"),
        menu("account", "アカウント管理"),
        menu("role", "ロール管理"),
        menu("element", "Element コンポーネント"),
        MenuTreeNode {
            children: Some(vec![
                menu("demo-search", "検索コンポーネント"),
                menu("demo-table", "テーブルコンポーネント"),
                menu("demo-dialog", "ダイアログコンポーネント"),
                menu("demo-form", "フォームコンポーネント"),
            ]),
            ..menu("demo", "コンポーネントデモ")
        },
        menu("about", "私たちについて"),
    ]
});

/// 権限設定に使うメニューツリー全体
pub fn menu_tree() -> &'static [MenuTreeNode] {
    &MENU_TREE
}

/// メニューIDを前順ですべて取得
pub fn all_menu_ids() -> Vec<String> {
    collect_ids(menu_tree())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::tree::{find_node, has_no_empty_children};

    #[test]
    fn test_menu_tree_contains_nested_demo_pages() {
        let tree = menu_tree();
        assert_eq!(find_node(tree, "demo-form").unwrap().label, "フォームコンポーネント");
        assert!(has_no_empty_children(tree));
    }

    #[test]
    fn test_all_menu_ids_preorder() {
        let ids = all_menu_ids();
        assert_eq!(ids.len(), 11);
        assert_eq!(ids.first().map(String::as_str), Some("home"));
        let demo = ids.iter().position(|id| id == "demo").unwrap();
        assert_eq!(ids[demo + 1], "demo-search");
    }
}
