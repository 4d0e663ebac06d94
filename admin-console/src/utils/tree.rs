// admin-console/src/utils/tree.rs

//! 階層構造（フォレスト）を扱う汎用ユーティリティ
//!
//! `id` と省略可能な `children` を持つノードの並びに対して、
//! 検索は深さ優先・前順（自ノード → 子 → 次の兄弟）で行う。
//! 削除は同じ階層の並びを先に調べてから子へ降りる。
//!
//! 子の並びは `Option<Vec<Self>>` で保持し、`None` は「属性なし」を表す。
//! 削除によって子が空になったノードは `None` に戻すため、
//! 空配列の `children` が残ることはない。

/// 木構造のノードとして扱える型
pub trait TreeNode: Sized {
    /// ノードの識別子
    fn node_id(&self) -> &str;

    /// 子ノード（属性がなければ `None`）
    fn children(&self) -> Option<&[Self]>;

    /// 子ノードの格納場所
    fn children_slot(&mut self) -> &mut Option<Vec<Self>>;

    fn is_leaf(&self) -> bool {
        self.children().is_none()
    }
}

/// 前順で最初に一致したノードを返す
///
/// 識別子が重複している場合は最初に見つかったものが返り、それ以降は無視される。
pub fn find_node<'a, T: TreeNode>(nodes: &'a [T], id: &str) -> Option<&'a T> {
    for node in nodes {
        if node.node_id() == id {
            return Some(node);
        }
        if let Some(children) = node.children() {
            if let Some(found) = find_node(children, id) {
                return Some(found);
            }
        }
    }
    None
}

/// `find_node` の可変版（探索順は同じ）
pub fn find_node_mut<'a, T: TreeNode>(nodes: &'a mut [T], id: &str) -> Option<&'a mut T> {
    for node in nodes.iter_mut() {
        if node.node_id() == id {
            return Some(node);
        }
        if let Some(children) = node.children_slot().as_mut() {
            if let Some(found) = find_node_mut(children, id) {
                return Some(found);
            }
        }
    }
    None
}

/// ノードを取り出して返す（子孫ごと）
///
/// まず同じ階層の並びを直接走査し、なければ各ノードの子へ順に再帰する。
/// 取り出しで子が空になった場合は `children` 自体を `None` にする。
pub fn take_node<T: TreeNode>(nodes: &mut Vec<T>, id: &str) -> Option<T> {
    if let Some(index) = nodes.iter().position(|node| node.node_id() == id) {
        return Some(nodes.remove(index));
    }

    for node in nodes.iter_mut() {
        let slot = node.children_slot();
        if let Some(children) = slot.as_mut() {
            if let Some(removed) = take_node(children, id) {
                if children.is_empty() {
                    *slot = None;
                }
                return Some(removed);
            }
        }
    }
    None
}

/// ノードを削除し、削除したかどうかを返す
pub fn remove_node<T: TreeNode>(nodes: &mut Vec<T>, id: &str) -> bool {
    take_node(nodes, id).is_some()
}

/// フォレスト内の全ノード数
pub fn count_nodes<T: TreeNode>(nodes: &[T]) -> usize {
    nodes
        .iter()
        .map(|node| 1 + node.children().map_or(0, count_nodes))
        .sum()
}

/// 前順で全ノードの識別子を集める
pub fn collect_ids<T: TreeNode>(nodes: &[T]) -> Vec<String> {
    let mut ids = Vec::new();
    collect_ids_into(nodes, &mut ids);
    ids
}

fn collect_ids_into<T: TreeNode>(nodes: &[T], ids: &mut Vec<String>) {
    for node in nodes {
        ids.push(node.node_id().to_string());
        if let Some(children) = node.children() {
            collect_ids_into(children, ids);
        }
    }
}

/// 空の `children` を持つノードが存在しないか
pub fn has_no_empty_children<T: TreeNode>(nodes: &[T]) -> bool {
    nodes.iter().all(|node| match node.children() {
        None => true,
        Some(children) => !children.is_empty() && has_no_empty_children(children),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Node {
        id: String,
        children: Option<Vec<Node>>,
    }

    impl TreeNode for Node {
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

    fn leaf(id: &str) -> Node {
        Node {
            id: id.to_string(),
            children: None,
        }
    }

    fn branch(id: &str, children: Vec<Node>) -> Node {
        Node {
            id: id.to_string(),
            children: Some(children),
        }
    }

    // 1 ─┬─ 2 ─┬─ 3
    //    │     └─ 4
    //    └─ 5
    // 6 ── 7
    fn sample_forest() -> Vec<Node> {
        vec![
            branch(
                "1",
                vec![branch("2", vec![leaf("3"), leaf("4")]), leaf("5")],
            ),
            branch("6", vec![leaf("7")]),
        ]
    }

    #[test]
    fn test_find_node_returns_nested_match() {
        let forest = vec![branch("1", vec![leaf("2"), leaf("3")])];

        let found = find_node(&forest, "3").unwrap();
        assert_eq!(found, &leaf("3"));
    }

    #[test]
    fn test_find_node_every_id_in_forest() {
        let forest = sample_forest();
        for id in collect_ids(&forest) {
            assert_eq!(find_node(&forest, &id).unwrap().id, id);
        }
    }

    #[test]
    fn test_find_node_absent_and_empty() {
        let forest = sample_forest();
        assert!(find_node(&forest, "42").is_none());
        assert!(find_node::<Node>(&[], "1").is_none());
    }

    #[test]
    fn test_find_node_duplicate_id_prefers_preorder_first() {
        // 深い位置の "x" が、後ろの兄弟にある "x" より先に見つかる
        let forest = vec![
            branch("a", vec![branch("x", vec![leaf("deep")])]),
            leaf("x"),
        ];

        let found = find_node(&forest, "x").unwrap();
        assert!(found.children.is_some());
    }

    #[test]
    fn test_take_node_prefers_same_level_before_descending() {
        // 同じ階層の "x" が、前の兄弟の子にある "x" より先に取り出される
        let mut forest = vec![branch("a", vec![leaf("x")]), leaf("x")];

        let removed = take_node(&mut forest, "x").unwrap();
        assert!(removed.children.is_none());
        assert_eq!(forest.len(), 1);
        assert!(find_node(&forest, "x").is_some());
    }

    #[test]
    fn test_find_node_mut_allows_in_place_update() {
        let mut forest = sample_forest();
        find_node_mut(&mut forest, "4").unwrap().id = "44".to_string();

        assert!(find_node(&forest, "4").is_none());
        assert!(find_node(&forest, "44").is_some());
    }

    #[test]
    fn test_remove_scenario_drops_empty_children() {
        let mut forest = vec![branch("1", vec![leaf("2"), leaf("3")])];

        assert!(remove_node(&mut forest, "2"));
        assert_eq!(forest[0].children, Some(vec![leaf("3")]));

        assert!(remove_node(&mut forest, "3"));
        assert_eq!(forest[0].children, None);
        assert!(forest[0].is_leaf());
    }

    #[test]
    fn test_remove_is_not_repeatable() {
        let mut forest = sample_forest();
        assert!(remove_node(&mut forest, "4"));
        assert!(!remove_node(&mut forest, "4"));
    }

    #[test]
    fn test_remove_absent_leaves_forest_untouched() {
        let mut forest = sample_forest();
        assert!(!remove_node(&mut forest, "missing"));
        assert_eq!(forest, sample_forest());
    }

    #[test]
    fn test_remove_each_node_drops_its_subtree() {
        let original = sample_forest();
        let before = count_nodes(&original);

        for id in collect_ids(&original) {
            let mut forest = original.clone();
            let subtree = find_node(&forest, &id).map(|n| count_nodes(std::slice::from_ref(n)));

            let removed = take_node(&mut forest, &id).unwrap();

            assert_eq!(removed.id, id);
            assert_eq!(count_nodes(&forest), before - subtree.unwrap());
            assert!(find_node(&forest, &id).is_none());
            assert!(has_no_empty_children(&forest), "empty children after removing {id}");
        }
    }

    #[test]
    fn test_remove_top_level_node() {
        let mut forest = sample_forest();
        assert!(remove_node(&mut forest, "6"));
        assert_eq!(forest.len(), 1);
        assert_eq!(count_nodes(&forest), 5);
    }

    #[test]
    fn test_remove_last_child_of_deep_branch() {
        let mut forest = sample_forest();
        assert!(remove_node(&mut forest, "7"));
        assert_eq!(forest[1], leaf("6"));
    }

    #[test]
    fn test_collect_ids_is_preorder() {
        assert_eq!(
            collect_ids(&sample_forest()),
            vec!["1", "2", "3", "4", "5", "6", "7"]
        );
    }
}
