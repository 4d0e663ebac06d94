// admin-console/src/schema/catalog.rs

//! 部門・ロール画面で使うスキーマ一覧

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;

use crate::domain::department_model::Department;
use crate::schema::common::{ChoiceConfig, DateConfig, NumberConfig, SelectOption};
use crate::schema::form::{FormItem, FormItemKind, FormRule, FormSchema, TextareaConfig};
use crate::schema::search::{SearchItem, SearchItemKind, SearchSchema};
use crate::schema::table::{
    ActionButton, ActionColumn, Align, ButtonType, CellRender, ColumnType, Fixed, PaginationConfig,
    RowCondition, Side, TableColumn, TableProps, TableSchema, TagStyle, TagType,
};

pub const DEPARTMENT_TABLE: &str = "dept-table";
pub const DEPARTMENT_FORM: &str = "dept-form";
pub const ROLE_TABLE: &str = "role-table";
pub const ROLE_SEARCH: &str = "role-search";
pub const ROLE_FORM: &str = "role-form";

/// カタログに登録されている名前
pub const SCHEMA_NAMES: [&str; 5] = [
    DEPARTMENT_TABLE,
    DEPARTMENT_FORM,
    ROLE_TABLE,
    ROLE_SEARCH,
    ROLE_FORM,
];

/// 種類付きのスキーマ `{ kind, schema }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "schema", rename_all = "lowercase")]
pub enum SchemaDocument {
    Table(TableSchema),
    Search(SearchSchema),
    Form(FormSchema),
}

impl SchemaDocument {
    pub fn validate(&self) -> crate::error::AppResult<()> {
        match self {
            Self::Table(schema) => schema.validate(),
            Self::Search(schema) => schema.validate(),
            Self::Form(schema) => schema.validate(),
        }
    }

    pub fn as_form(&self) -> Option<&FormSchema> {
        match self {
            Self::Form(schema) => Some(schema),
            _ => None,
        }
    }
}

/// 名前からスキーマを取得（部門フォームの親部門候補は `departments` から作る）
pub fn get_schema(name: &str, departments: &[Department]) -> Option<SchemaDocument> {
    let document = match name {
        DEPARTMENT_TABLE => SchemaDocument::Table(department_table()),
        DEPARTMENT_FORM => SchemaDocument::Form(department_form(departments)),
        ROLE_TABLE => SchemaDocument::Table(role_table()),
        ROLE_SEARCH => SchemaDocument::Search(role_search()),
        ROLE_FORM => SchemaDocument::Form(role_form()),
        _ => return None,
    };
    Some(document)
}

fn status_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("有効", "enable"),
        SelectOption::new("無効", "disable"),
    ]
}

fn status_tag() -> CellRender {
    let tag_map = BTreeMap::from([
        (
            "enable".to_string(),
            TagStyle {
                text: "有効".to_string(),
                tag_type: Some(TagType::Success),
            },
        ),
        (
            "disable".to_string(),
            TagStyle {
                text: "無効".to_string(),
                tag_type: Some(TagType::Danger),
            },
        ),
    ]);
    CellRender::Tag { tag_map }
}

fn operations(buttons: Vec<ActionButton>, width: u32) -> ActionColumn {
    ActionColumn {
        width: Some(width.into()),
        fixed: Some(Fixed::Side(Side::Right)),
        label: Some("操作".to_string()),
        buttons,
    }
}

// =============================================================================
// 部門
// =============================================================================

pub fn department_table() -> TableSchema {
    TableSchema::new(vec![
        TableColumn::new("name", "部門名").width(220),
        TableColumn::new("code", "部門コード").width(140),
        TableColumn::new("leader", "責任者").width(120),
        TableColumn::new("status", "状態")
            .width(100)
            .align(Align::Center)
            .render(status_tag()),
        TableColumn::new("sort", "並び順").width(90).align(Align::Center),
        TableColumn::new("createTime", "作成日時").width(180).sortable(),
        TableColumn {
            show_overflow_tooltip: Some(true),
            ..TableColumn::new("description", "説明")
        },
    ])
    .with_action_column(operations(
        vec![
            ActionButton::new("追加", "add-child").button_type(ButtonType::Primary),
            ActionButton::new("編集", "edit").button_type(ButtonType::Primary),
            ActionButton::new("削除", "delete")
                .button_type(ButtonType::Danger)
                .confirm("この部門と配下の部門を削除しますか？"),
        ],
        200,
    ))
    .with_table_props(TableProps {
        row_key: Some("id".to_string()),
        border: Some(true),
        extra: json!({
            "defaultExpandAll": true,
            "treeProps": { "children": "children" }
        })
        .as_object()
        .cloned()
        .unwrap_or_default(),
        ..Default::default()
    })
}

/// 部門ツリーをカスケード選択の選択肢に変換
pub fn department_options(departments: &[Department]) -> Vec<SelectOption> {
    departments
        .iter()
        .map(|department| {
            let option = SelectOption::new(&department.name, department.id.as_str());
            match department.children.as_deref() {
                Some(children) if !children.is_empty() => {
                    option.with_children(department_options(children))
                }
                _ => option,
            }
        })
        .collect()
}

pub fn department_form(departments: &[Department]) -> FormSchema {
    // 先頭は「最上位」（値は空文字）
    let mut parents = vec![SelectOption::new("なし（最上位）", "")];
    parents.extend(department_options(departments));

    FormSchema {
        label_width: Some(100.into()),
        submit_text: Some("保存".to_string()),
        ..FormSchema::new(vec![
            FormItem::new(
                "parentId",
                "上位部門",
                FormItemKind::Cascader(ChoiceConfig {
                    clearable: Some(true),
                    ..ChoiceConfig::new(parents)
                }),
            )
            .placeholder("上位部門を選択してください"),
            FormItem::new("name", "部門名", FormItemKind::Input)
                .span(12)
                .rules(vec![
                    FormRule::required("部門名を入力してください"),
                    FormRule::length(1, 50, "50文字以内で入力してください"),
                ]),
            FormItem::new("code", "部門コード", FormItemKind::Input)
                .span(12)
                .rules(vec![
                    FormRule::required("部門コードを入力してください"),
                    FormRule::pattern("^[A-Za-z0-9_-]+$", "英数字で入力してください"),
                ]),
            FormItem::new("leader", "責任者", FormItemKind::Input).span(12),
            FormItem::new(
                "sort",
                "並び順",
                FormItemKind::Number(NumberConfig {
                    min: Some(0.0),
                    max: Some(9999.0),
                    step: Some(1.0),
                }),
            )
            .span(12)
            .default_value(json!(0)),
            FormItem::new(
                "status",
                "状態",
                FormItemKind::Radio(ChoiceConfig::new(status_options())),
            )
            .default_value(json!("enable")),
            FormItem::new(
                "description",
                "説明",
                FormItemKind::Textarea(TextareaConfig { rows: Some(3) }),
            )
            .rules(vec![FormRule {
                max: Some(200.0),
                message: Some("200文字以内で入力してください".to_string()),
                ..Default::default()
            }]),
        ])
    }
}

// =============================================================================
// ロール
// =============================================================================

pub fn role_table() -> TableSchema {
    let is_admin = || RowCondition::field_equals("code", json!("ADMIN"));

    TableSchema::new(vec![
        TableColumn::special("selection", ColumnType::Selection).width(55),
        TableColumn::special("index", ColumnType::Index).width(60),
        TableColumn::new("name", "ロール名").width(160),
        TableColumn::new("code", "ロールコード").width(160),
        TableColumn::new("status", "状態")
            .width(100)
            .align(Align::Center)
            .render(status_tag()),
        TableColumn::new("sort", "並び順").width(90).sortable(),
        TableColumn::new("createTime", "作成日時").width(180),
        TableColumn {
            show_overflow_tooltip: Some(true),
            ..TableColumn::new("remark", "備考")
        },
    ])
    .with_action_column(operations(
        vec![
            ActionButton::new("編集", "edit").button_type(ButtonType::Primary),
            ActionButton::new("権限", "permission").button_type(ButtonType::Warning),
            ActionButton::new("削除", "delete")
                .button_type(ButtonType::Danger)
                .confirm("このロールを削除しますか？")
                .disabled_when(is_admin()),
        ],
        220,
    ))
    .with_pagination(PaginationConfig::default())
    .with_table_props(TableProps {
        row_key: Some("id".to_string()),
        border: Some(true),
        stripe: Some(true),
        ..Default::default()
    })
}

pub fn role_search() -> SearchSchema {
    SearchSchema {
        label_width: Some(80.into()),
        columns: Some(3),
        search_text: Some("検索".to_string()),
        reset_text: Some("リセット".to_string()),
        ..SearchSchema::new(vec![
            SearchItem::new("name", "ロール名", SearchItemKind::Input)
                .placeholder("ロール名を入力してください"),
            SearchItem::new(
                "status",
                "状態",
                SearchItemKind::Select(ChoiceConfig {
                    clearable: Some(true),
                    ..ChoiceConfig::new(status_options())
                }),
            )
            .placeholder("状態を選択してください"),
            SearchItem::new(
                "createTime",
                "作成日時",
                SearchItemKind::DateRange(DateConfig {
                    format: Some("YYYY-MM-DD".to_string()),
                    value_format: Some("YYYY-MM-DD".to_string()),
                }),
            ),
        ])
    }
}

pub fn role_form() -> FormSchema {
    FormSchema {
        label_width: Some(100.into()),
        submit_text: Some("保存".to_string()),
        ..FormSchema::new(vec![
            FormItem::new("name", "ロール名", FormItemKind::Input).rules(vec![
                FormRule::required("ロール名を入力してください"),
                FormRule::length(2, 20, "2〜20文字で入力してください"),
            ]),
            FormItem::new("code", "ロールコード", FormItemKind::Input).rules(vec![
                FormRule::required("ロールコードを入力してください"),
                FormRule::pattern("^[A-Z][A-Z0-9_]*$", "英大文字で入力してください"),
            ]),
            FormItem::new(
                "status",
                "状態",
                FormItemKind::Radio(ChoiceConfig::new(status_options())),
            )
            .default_value(json!("enable")),
            FormItem::new(
                "sort",
                "並び順",
                FormItemKind::Number(NumberConfig {
                    min: Some(0.0),
                    max: Some(999.0),
                    step: Some(1.0),
                }),
            )
            .default_value(json!(0)),
            FormItem::new(
                "remark",
                "備考",
                FormItemKind::Textarea(TextareaConfig { rows: Some(3) }),
            ),
        ])
    }
}
