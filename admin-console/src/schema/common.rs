// admin-console/src/schema/common.rs

//! テーブル・検索・フォームのスキーマで共通に使う型

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// 数値（px）または CSS 文字列のサイズ指定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Pixels(u32),
    Css(String),
}

impl From<u32> for Dimension {
    fn from(px: u32) -> Self {
        Self::Pixels(px)
    }
}

impl From<&str> for Dimension {
    fn from(css: &str) -> Self {
        Self::Css(css.to_string())
    }
}

/// 選択肢の値
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl OptionValue {
    /// JSON の値と一致するか
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Bool(a), Value::Bool(b)) => a == b,
            (Self::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
            (Self::Text(a), Value::String(b)) => a == b,
            _ => false,
        }
    }

    fn key(&self) -> String {
        match self {
            Self::Bool(b) => format!("b:{}", b),
            Self::Number(n) => format!("n:{}", n),
            Self::Text(s) => format!("s:{}", s),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<i64> for OptionValue {
    fn from(number: i64) -> Self {
        Self::Number(number.into())
    }
}

impl From<bool> for OptionValue {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

/// 選択肢（カスケード選択では入れ子になる）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: OptionValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<SelectOption>>,
}

impl SelectOption {
    pub fn new(label: &str, value: impl Into<OptionValue>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
            disabled: None,
            children: None,
        }
    }

    pub fn with_children(mut self, children: Vec<SelectOption>) -> Self {
        self.children = Some(children);
        self
    }
}

/// 選択系コンポーネントの設定
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceConfig {
    #[serde(default)]
    pub options: Vec<SelectOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clearable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filterable: Option<bool>,
}

impl ChoiceConfig {
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn is_multiple(&self) -> bool {
        self.multiple.unwrap_or(false)
    }

    /// 最上位の選択肢に値が含まれるか
    pub fn contains(&self, value: &Value) -> bool {
        self.options.iter().any(|option| option.value.matches(value))
    }
}

/// 日付系コンポーネントの表示・値フォーマット
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_format: Option<String>,
}

/// 数値入力の範囲
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NumberConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
}

impl NumberConfig {
    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }

    /// 範囲外の値に対するメッセージ
    pub fn range_message(&self) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!("value must be between {} and {}", min, max),
            (Some(min), None) => format!("value must be at least {}", min),
            (None, Some(max)) => format!("value must be at most {}", max),
            (None, None) => "value is out of range".to_string(),
        }
    }
}

/// カスタムスロット
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotConfig {
    pub slot_name: String,
}

// =============================================================================
// 構築時バリデーション
// =============================================================================

/// "path: message" 形式でエラーを集める
pub(crate) fn push_error(errors: &mut Vec<String>, path: &str, message: &str) {
    errors.push(format!("{}: {}", path, message));
}

/// `prop` が空でなく、兄弟間で一意であることを確認
pub(crate) fn check_props<'a>(
    props: impl IntoIterator<Item = &'a str>,
    scope: &str,
    errors: &mut Vec<String>,
) {
    let mut seen = HashSet::new();
    for (index, prop) in props.into_iter().enumerate() {
        if prop.trim().is_empty() {
            push_error(errors, &format!("{}[{}].prop", scope, index), "must not be empty");
        } else if !seen.insert(prop) {
            push_error(errors, &format!("{}.{}", scope, prop), "duplicate prop");
        }
    }
}

/// 選択肢が1件以上あり、ラベルが空でなく、値が兄弟間で一意であることを確認
pub(crate) fn check_choice(choice: &ChoiceConfig, path: &str, errors: &mut Vec<String>) {
    if choice.options.is_empty() {
        push_error(errors, path, "at least one option is required");
        return;
    }
    check_options(&choice.options, &format!("{}.options", path), errors);
}

fn check_options(options: &[SelectOption], path: &str, errors: &mut Vec<String>) {
    let mut seen = HashSet::new();
    for (index, option) in options.iter().enumerate() {
        let option_path = format!("{}[{}]", path, index);
        if option.label.trim().is_empty() {
            push_error(errors, &option_path, "label must not be empty");
        }
        if !seen.insert(option.value.key()) {
            push_error(errors, &option_path, "duplicate option value");
        }
        if let Some(children) = &option.children {
            if children.is_empty() {
                push_error(errors, &option_path, "children must not be empty when present");
            } else {
                check_options(children, &format!("{}.children", option_path), errors);
            }
        }
    }
}

pub(crate) fn check_number(number: &NumberConfig, path: &str, errors: &mut Vec<String>) {
    if let (Some(min), Some(max)) = (number.min, number.max) {
        if min > max {
            push_error(errors, path, "min must not exceed max");
        }
    }
    if let Some(step) = number.step {
        if step <= 0.0 {
            push_error(errors, path, "step must be positive");
        }
    }
}

pub(crate) fn check_slot(slot: &SlotConfig, path: &str, errors: &mut Vec<String>) {
    if slot.slot_name.trim().is_empty() {
        push_error(errors, path, "slotName must not be empty");
    }
}
