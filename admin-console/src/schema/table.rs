// admin-console/src/schema/table.rs

//! 汎用テーブルのスキーマ

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::error::AppResult;
use crate::schema::common::{check_props, push_error, Dimension};
use crate::shared::types::PageResult;
use crate::types::PaginationQuery;
use crate::utils::error_helper::{collect_validation_errors, validation_error};
use crate::utils::tree::{find_node, TreeNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// 列の固定（`true` / `"left"` / `"right"`）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Fixed {
    Flag(bool),
    Side(Side),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    Custom,
}

/// ソート可否（`true` / `"custom"`）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Sortable {
    Flag(bool),
    Mode(SortMode),
}

/// 特殊列の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Selection,
    Index,
    Expand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagType {
    Success,
    Warning,
    Danger,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagStyle {
    pub text: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub tag_type: Option<TagType>,
}

/// セルの描画方法（`kind` で判別）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CellRender {
    Tag {
        #[serde(rename = "tagMap")]
        tag_map: BTreeMap<String, TagStyle>,
    },
    Image {
        #[serde(rename = "imageWidth", default, skip_serializing_if = "Option::is_none")]
        image_width: Option<u32>,
        #[serde(rename = "imageHeight", default, skip_serializing_if = "Option::is_none")]
        image_height: Option<u32>,
    },
    Link {
        #[serde(rename = "linkText", default, skip_serializing_if = "Option::is_none")]
        link_text: Option<String>,
    },
    Switch {
        #[serde(rename = "activeValue", default, skip_serializing_if = "Option::is_none")]
        active_value: Option<Value>,
        #[serde(rename = "inactiveValue", default, skip_serializing_if = "Option::is_none")]
        inactive_value: Option<Value>,
    },
    Progress,
    Slot {
        #[serde(rename = "slotName")]
        slot_name: String,
    },
}

impl CellRender {
    /// 値に対応するタグ表示（tag 以外は `None`）
    pub fn tag_for(&self, value: &Value) -> Option<&TagStyle> {
        let Self::Tag { tag_map } = self else {
            return None;
        };
        let key = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        tag_map.get(&key)
    }
}

/// テーブル列（`children` で多段ヘッダー）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableColumn {
    pub prop: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed: Option<Fixed>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sortable: Option<Sortable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_overflow_tooltip: Option<bool>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub column_type: Option<ColumnType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render: Option<CellRender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TableColumn>>,
}

impl TreeNode for TableColumn {
    fn node_id(&self) -> &str {
        &self.prop
    }

    fn children(&self) -> Option<&[Self]> {
        self.children.as_deref()
    }

    fn children_slot(&mut self) -> &mut Option<Vec<Self>> {
        &mut self.children
    }
}

impl TableColumn {
    pub fn new(prop: &str, label: &str) -> Self {
        Self {
            prop: prop.to_string(),
            label: label.to_string(),
            width: None,
            min_width: None,
            fixed: None,
            align: None,
            sortable: None,
            show_overflow_tooltip: None,
            column_type: None,
            render: None,
            hidden: None,
            children: None,
        }
    }

    /// 選択・連番・展開などの特殊列
    pub fn special(prop: &str, column_type: ColumnType) -> Self {
        Self {
            column_type: Some(column_type),
            ..Self::new(prop, "")
        }
    }

    pub fn width(mut self, width: impl Into<Dimension>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = Some(Sortable::Flag(true));
        self
    }

    pub fn render(mut self, render: CellRender) -> Self {
        self.render = Some(render);
        self
    }

    pub fn children(mut self, children: Vec<TableColumn>) -> Self {
        self.children = Some(children);
        self
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden.unwrap_or(false)
    }

    fn check(&self, path: &str, errors: &mut Vec<String>) {
        if self.column_type.is_none() && self.label.trim().is_empty() {
            push_error(errors, path, "label must not be empty");
        }
        if let Some(CellRender::Slot { slot_name }) = &self.render {
            if slot_name.trim().is_empty() {
                push_error(errors, path, "slotName must not be empty");
            }
        }
        if let Some(children) = &self.children {
            if children.is_empty() {
                push_error(errors, path, "children must not be empty when present");
            }
            check_columns(children, path, errors);
        }
    }
}

fn check_columns(columns: &[TableColumn], scope: &str, errors: &mut Vec<String>) {
    check_props(columns.iter().map(|c| c.prop.as_str()), scope, errors);
    for column in columns {
        column.check(&format!("{}.{}", scope, column.prop), errors);
    }
}

fn collect_leaves<'a>(columns: &'a [TableColumn], leaves: &mut Vec<&'a TableColumn>) {
    for column in columns.iter().filter(|c| !c.is_hidden()) {
        match column.children.as_deref() {
            Some(children) => collect_leaves(children, leaves),
            None => leaves.push(column),
        }
    }
}

// =============================================================================
// 操作列
// =============================================================================

/// 行データに対して評価する表示・活性条件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowCondition {
    Always(bool),
    FieldEquals {
        field: String,
        equals: Value,
        #[serde(default, skip_serializing_if = "std::ops::Not::not")]
        negate: bool,
    },
}

impl RowCondition {
    pub fn field_equals(field: &str, equals: Value) -> Self {
        Self::FieldEquals {
            field: field.to_string(),
            equals,
            negate: false,
        }
    }

    pub fn evaluate(&self, row: &Value) -> bool {
        match self {
            Self::Always(flag) => *flag,
            Self::FieldEquals {
                field,
                equals,
                negate,
            } => {
                let matched = row.get(field) == Some(equals);
                matched != *negate
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonType {
    Primary,
    Success,
    Warning,
    Danger,
    Info,
    Default,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionButton {
    pub text: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub button_type: Option<ButtonType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<RowCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<RowCondition>,
    /// 設定されていればクリック時に確認ダイアログを出す
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm: Option<String>,
    /// クリック時に発火するイベント名
    pub event: String,
}

impl ActionButton {
    pub fn new(text: &str, event: &str) -> Self {
        Self {
            text: text.to_string(),
            button_type: None,
            icon: None,
            link: Some(true),
            disabled: None,
            hidden: None,
            confirm: None,
            event: event.to_string(),
        }
    }

    pub fn button_type(mut self, button_type: ButtonType) -> Self {
        self.button_type = Some(button_type);
        self
    }

    pub fn confirm(mut self, message: &str) -> Self {
        self.confirm = Some(message.to_string());
        self
    }

    pub fn hidden_when(mut self, condition: RowCondition) -> Self {
        self.hidden = Some(condition);
        self
    }

    pub fn disabled_when(mut self, condition: RowCondition) -> Self {
        self.disabled = Some(condition);
        self
    }

    pub fn is_hidden(&self, row: &Value) -> bool {
        self.hidden.as_ref().is_some_and(|c| c.evaluate(row))
    }

    pub fn is_disabled(&self, row: &Value) -> bool {
        self.disabled.as_ref().is_some_and(|c| c.evaluate(row))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionColumn {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed: Option<Fixed>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub buttons: Vec<ActionButton>,
}

impl ActionColumn {
    /// 行ごとに表示するボタン
    pub fn visible_buttons<'a>(&'a self, row: &Value) -> Vec<&'a ActionButton> {
        self.buttons.iter().filter(|b| !b.is_hidden(row)).collect()
    }
}

// =============================================================================
// ページネーション・テーブル属性
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaginationConfig {
    pub show: bool,
    pub current_page: u32,
    pub page_size: u32,
    pub total: u64,
    pub page_sizes: Vec<u32>,
    pub layout: String,
    pub background: bool,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            show: true,
            current_page: 1,
            page_size: 10,
            total: 0,
            page_sizes: vec![10, 20, 50, 100],
            layout: "total, sizes, prev, pager, next, jumper".to_string(),
            background: true,
        }
    }
}

impl PaginationConfig {
    fn check(&self, errors: &mut Vec<String>) {
        if self.current_page == 0 {
            push_error(errors, "pagination.currentPage", "must be at least 1");
        }
        if self.page_size == 0 {
            push_error(errors, "pagination.pageSize", "must be positive");
        }
        if self.page_sizes.contains(&0) {
            push_error(errors, "pagination.pageSizes", "must be positive");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableSize {
    Large,
    Default,
    Small,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stripe: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<TableSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_height: Option<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_current_row: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_text: Option<String>,
    /// 上記以外の属性はそのまま描画側へ渡す
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// =============================================================================
// テーブルスキーマ
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSchema {
    pub columns: Vec<TableColumn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_column: Option<ActionColumn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_props: Option<TableProps>,
}

impl TableSchema {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            action_column: None,
            pagination: None,
            table_props: None,
        }
    }

    pub fn with_action_column(mut self, action_column: ActionColumn) -> Self {
        self.action_column = Some(action_column);
        self
    }

    pub fn with_pagination(mut self, pagination: PaginationConfig) -> Self {
        self.pagination = Some(pagination);
        self
    }

    pub fn with_table_props(mut self, table_props: TableProps) -> Self {
        self.table_props = Some(table_props);
        self
    }

    /// 構造を検証し、問題がなければそのまま返す
    pub fn validated(self) -> AppResult<Self> {
        self.validate()?;
        Ok(self)
    }

    /// JSON から構築して検証
    pub fn from_json(value: Value) -> AppResult<Self> {
        let schema: Self =
            serde_json::from_value(value).map_err(|e| validation_error("table", &e.to_string()))?;
        schema.validated()
    }

    pub fn validate(&self) -> AppResult<()> {
        let mut errors = Vec::new();
        if self.columns.is_empty() {
            push_error(&mut errors, "columns", "at least one column is required");
        }
        check_columns(&self.columns, "columns", &mut errors);

        if let Some(action_column) = &self.action_column {
            if action_column.buttons.is_empty() {
                push_error(&mut errors, "actionColumn.buttons", "at least one button is required");
            }
            for (index, button) in action_column.buttons.iter().enumerate() {
                let path = format!("actionColumn.buttons[{}]", index);
                if button.text.trim().is_empty() {
                    push_error(&mut errors, &path, "text must not be empty");
                }
                if button.event.trim().is_empty() {
                    push_error(&mut errors, &path, "event must not be empty");
                }
            }
        }
        if let Some(pagination) = &self.pagination {
            pagination.check(&mut errors);
        }

        collect_validation_errors(errors, "table_schema::validate")
    }

    /// 表示される末端列をヘッダー順に返す
    pub fn leaf_columns(&self) -> Vec<&TableColumn> {
        let mut leaves = Vec::new();
        collect_leaves(&self.columns, &mut leaves);
        leaves
    }

    /// `prop` で列を探す（多段ヘッダーの内側も対象）
    pub fn find_column(&self, prop: &str) -> Option<&TableColumn> {
        find_node(&self.columns, prop)
    }
}

// =============================================================================
// データ取得の契約
// =============================================================================

/// テーブルがデータを取得する際のパラメータ
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FetchDataParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    /// その他の検索条件
    #[serde(flatten)]
    pub filters: Map<String, Value>,
}

impl FetchDataParams {
    /// 空文字は未指定として扱う
    pub fn filter_str(&self, key: &str) -> Option<&str> {
        self.filters
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

/// テーブルが受け取るデータ `{ list, total }`
pub type FetchDataResult<T> = PageResult<T>;
