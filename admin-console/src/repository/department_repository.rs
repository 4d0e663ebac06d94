// admin-console/src/repository/department_repository.rs

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::department_model::{seed_departments, Department};
use crate::utils::tree::{count_nodes, find_node, find_node_mut, take_node};

/// 新規部門がどこに追加されたか
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// 親部門の子として追加
    UnderParent,
    /// 最上位に追加（親なし、または親が見つからない）
    Root,
}

/// プロセス内の部門フォレスト
///
/// 各操作は書き込みロックを保持したまま完結する。
#[derive(Clone)]
pub struct DepartmentRepository {
    forest: Arc<RwLock<Vec<Department>>>,
}

impl Default for DepartmentRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl DepartmentRepository {
    /// 初期データ入りで作成
    pub fn new() -> Self {
        Self::with_forest(seed_departments())
    }

    pub fn with_forest(forest: Vec<Department>) -> Self {
        Self {
            forest: Arc::new(RwLock::new(forest)),
        }
    }

    /// フォレスト全体のコピー
    pub async fn find_all(&self) -> Vec<Department> {
        self.forest.read().await.clone()
    }

    pub async fn find_by_id(&self, id: &str) -> Option<Department> {
        let forest = self.forest.read().await;
        find_node(&forest, id).cloned()
    }

    pub async fn count(&self) -> usize {
        count_nodes(&self.forest.read().await)
    }

    /// 親部門の子として追加し、見つからなければ最上位に追加する
    pub async fn insert(&self, parent_id: Option<&str>, department: Department) -> Placement {
        let mut forest = self.forest.write().await;

        if let Some(parent_id) = parent_id {
            if let Some(parent) = find_node_mut(&mut forest, parent_id) {
                parent.push_child(department);
                return Placement::UnderParent;
            }
        }

        forest.push(department);
        Placement::Root
    }

    /// 対象部門をその場で更新し、更新後の値を返す
    pub async fn update_with<F>(&self, id: &str, apply: F) -> Option<Department>
    where
        F: FnOnce(&mut Department),
    {
        let mut forest = self.forest.write().await;
        let node = find_node_mut(&mut forest, id)?;
        apply(node);
        Some(node.clone())
    }

    /// 対象部門を子孫ごと取り除く
    pub async fn remove(&self, id: &str) -> Option<Department> {
        let mut forest = self.forest.write().await;
        take_node(&mut forest, id)
    }
}
