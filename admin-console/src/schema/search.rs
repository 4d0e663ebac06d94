// admin-console/src/schema/search.rs

//! 検索バーのスキーマ

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

use crate::error::AppResult;
use crate::schema::common::{
    check_choice, check_number, check_props, check_slot, push_error, ChoiceConfig, DateConfig,
    Dimension, NumberConfig, SlotConfig,
};
use crate::utils::error_helper::collect_validation_errors;

/// 依存先が変わったときの動作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DependAction {
    Clear,
    ReloadOptions,
}

/// 他の項目への依存
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Depend {
    pub prop: String,
    pub action: DependAction,
}

/// 検索項目の種類（`type` で判別）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchItemKind {
    Input,
    Select(ChoiceConfig),
    Cascader(ChoiceConfig),
    Date(DateConfig),
    DateRange(DateConfig),
    DateTime(DateConfig),
    DateTimeRange(DateConfig),
    Number(NumberConfig),
    Switch,
    Slot(SlotConfig),
}

impl SearchItemKind {
    /// 既定値が未設定のときの初期値
    pub fn empty_value(&self) -> Value {
        match self {
            Self::Select(choice) if choice.is_multiple() => Value::Array(Vec::new()),
            Self::Cascader(_) | Self::DateRange(_) | Self::DateTimeRange(_) => {
                Value::Array(Vec::new())
            }
            Self::Switch => Value::Bool(false),
            Self::Number(_) => Value::Null,
            _ => Value::String(String::new()),
        }
    }

    pub(crate) fn check(&self, path: &str, errors: &mut Vec<String>) {
        match self {
            Self::Select(choice) | Self::Cascader(choice) => check_choice(choice, path, errors),
            Self::Number(number) => check_number(number, path, errors),
            Self::Slot(slot) => check_slot(slot, path, errors),
            _ => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItem {
    pub prop: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depend: Option<Depend>,
    #[serde(flatten)]
    pub kind: SearchItemKind,
}

impl SearchItem {
    pub fn new(prop: &str, label: &str, kind: SearchItemKind) -> Self {
        Self {
            prop: prop.to_string(),
            label: label.to_string(),
            placeholder: None,
            default_value: None,
            width: None,
            hidden: None,
            depend: None,
            kind,
        }
    }

    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    pub fn default_value(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn depends_on(mut self, prop: &str, action: DependAction) -> Self {
        self.depend = Some(Depend {
            prop: prop.to_string(),
            action,
        });
        self
    }

    pub fn initial_value(&self) -> Value {
        self.default_value
            .clone()
            .unwrap_or_else(|| self.kind.empty_value())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSchema {
    pub items: Vec<SearchItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_width: Option<Dimension>,
    /// 1行あたりの項目数
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_expand: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_text: Option<String>,
}

impl SearchSchema {
    pub fn new(items: Vec<SearchItem>) -> Self {
        Self {
            items,
            label_width: None,
            columns: None,
            default_expand: None,
            search_text: None,
            reset_text: None,
        }
    }

    pub fn validated(self) -> AppResult<Self> {
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> AppResult<()> {
        let mut errors = Vec::new();
        if self.items.is_empty() {
            push_error(&mut errors, "items", "at least one item is required");
        }
        if self.columns == Some(0) {
            push_error(&mut errors, "columns", "must be positive");
        }
        check_props(self.items.iter().map(|i| i.prop.as_str()), "items", &mut errors);

        let props: HashSet<&str> = self.items.iter().map(|i| i.prop.as_str()).collect();
        for item in &self.items {
            let path = format!("items.{}", item.prop);
            item.kind.check(&path, &mut errors);
            if let Some(depend) = &item.depend {
                if depend.prop == item.prop || !props.contains(depend.prop.as_str()) {
                    push_error(&mut errors, &path, "depend.prop must name another item");
                }
            }
        }

        collect_validation_errors(errors, "search_schema::validate")
    }

    /// 検索条件の初期値（リセット時にも使う）
    pub fn default_values(&self) -> Map<String, Value> {
        self.items
            .iter()
            .map(|item| (item.prop.clone(), item.initial_value()))
            .collect()
    }

    /// `changed` に依存する項目
    pub fn dependents_of<'a>(&'a self, changed: &'a str) -> impl Iterator<Item = &'a SearchItem> {
        self.items
            .iter()
            .filter(move |item| item.depend.as_ref().is_some_and(|d| d.prop == changed))
    }
}
