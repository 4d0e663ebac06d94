// admin-console/src/schema/form.rs

//! 汎用フォームのスキーマと入力値チェック

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AppResult;
use crate::schema::common::{
    check_choice, check_number, check_props, check_slot, push_error, ChoiceConfig, DateConfig,
    Dimension, NumberConfig, SlotConfig,
};
use crate::utils::error_helper::collect_validation_errors;

/// グリッドの列数
pub const GRID_COLUMNS: u8 = 24;

const NOT_AN_OPTION: &str = "value is not one of the allowed options";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    Blur,
    Change,
}

/// 入力チェックのルール
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<Trigger>,
    /// 文字列・配列では長さ、数値では値の下限
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl FormRule {
    pub fn required(message: &str) -> Self {
        Self {
            required: Some(true),
            message: Some(message.to_string()),
            trigger: Some(Trigger::Blur),
            ..Default::default()
        }
    }

    pub fn length(min: usize, max: usize, message: &str) -> Self {
        Self {
            min: Some(min as f64),
            max: Some(max as f64),
            message: Some(message.to_string()),
            trigger: Some(Trigger::Blur),
            ..Default::default()
        }
    }

    pub fn pattern(pattern: &str, message: &str) -> Self {
        Self {
            pattern: Some(pattern.to_string()),
            message: Some(message.to_string()),
            trigger: Some(Trigger::Blur),
            ..Default::default()
        }
    }

    fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }

    fn check(&self, path: &str, errors: &mut Vec<String>) {
        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                push_error(errors, path, "min must not exceed max");
            }
        }
        if let Some(pattern) = &self.pattern {
            if let Err(e) = Regex::new(pattern) {
                push_error(errors, path, &format!("invalid pattern: {}", e));
            }
        }
    }

    /// 値を検査し、違反していればメッセージを返す
    fn apply(&self, label: &str, value: Option<&Value>) -> Option<String> {
        let value = value.filter(|v| !is_blank(v));
        let Some(value) = value else {
            return self
                .is_required()
                .then(|| self.message_or(&format!("{} is required", label)));
        };

        let measured = match value {
            Value::String(s) => Some(s.chars().count() as f64),
            Value::Array(items) => Some(items.len() as f64),
            Value::Number(n) => n.as_f64(),
            _ => None,
        };
        if let Some(measured) = measured {
            if self.min.is_some_and(|min| measured < min)
                || self.max.is_some_and(|max| measured > max)
            {
                return Some(self.message_or(&format!("{} is out of range", label)));
            }
        }

        if let (Some(pattern), Value::String(text)) = (&self.pattern, value) {
            // 不正なパターンは不一致扱い
            let matched = Regex::new(pattern).is_ok_and(|re| re.is_match(text));
            if !matched {
                return Some(self.message_or(&format!("{} has an invalid format", label)));
            }
        }

        None
    }

    fn message_or(&self, fallback: &str) -> String {
        self.message.clone().unwrap_or_else(|| fallback.to_string())
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// ルールは単体でも配列でも書ける
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormRules {
    One(FormRule),
    Many(Vec<FormRule>),
}

impl FormRules {
    pub fn as_slice(&self) -> &[FormRule] {
        match self {
            Self::One(rule) => std::slice::from_ref(rule),
            Self::Many(rules) => rules,
        }
    }
}

impl From<Vec<FormRule>> for FormRules {
    fn from(rules: Vec<FormRule>) -> Self {
        Self::Many(rules)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextareaConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
}

/// フォーム項目の種類（検索項目の種類に加えて入力専用のものを持つ）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FormItemKind {
    Input,
    Password,
    Textarea(TextareaConfig),
    Select(ChoiceConfig),
    Cascader(ChoiceConfig),
    Checkbox(ChoiceConfig),
    Radio(ChoiceConfig),
    Date(DateConfig),
    DateRange(DateConfig),
    DateTime(DateConfig),
    DateTimeRange(DateConfig),
    Time(DateConfig),
    Number(NumberConfig),
    Switch,
    Slot(SlotConfig),
}

impl FormItemKind {
    pub fn empty_value(&self) -> Value {
        match self {
            Self::Select(choice) if choice.is_multiple() => Value::Array(Vec::new()),
            Self::Cascader(_)
            | Self::Checkbox(_)
            | Self::DateRange(_)
            | Self::DateTimeRange(_) => Value::Array(Vec::new()),
            Self::Switch => Value::Bool(false),
            Self::Number(_) => Value::Null,
            _ => Value::String(String::new()),
        }
    }

    fn check(&self, path: &str, errors: &mut Vec<String>) {
        match self {
            Self::Select(choice)
            | Self::Cascader(choice)
            | Self::Checkbox(choice)
            | Self::Radio(choice) => check_choice(choice, path, errors),
            Self::Number(number) => check_number(number, path, errors),
            Self::Slot(slot) => check_slot(slot, path, errors),
            Self::Textarea(TextareaConfig { rows: Some(0) }) => {
                push_error(errors, path, "rows must be positive")
            }
            _ => {}
        }
    }

    /// 選択肢・数値範囲から外れた値に対するメッセージ
    fn value_error(&self, value: &Value) -> Option<String> {
        let accepted = match (self, value) {
            (Self::Number(number), Value::Number(n)) => {
                return n
                    .as_f64()
                    .filter(|n| !number.contains(*n))
                    .map(|_| number.range_message());
            }
            (Self::Select(choice) | Self::Radio(choice), Value::Array(items))
                if choice.is_multiple() =>
            {
                items.iter().all(|item| choice.contains(item))
            }
            (Self::Select(choice) | Self::Radio(choice), _) => choice.contains(value),
            (Self::Checkbox(choice), Value::Array(items)) => {
                items.iter().all(|item| choice.contains(item))
            }
            _ => true,
        };
        (!accepted).then(|| NOT_AN_OPTION.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormItem {
    pub prop: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<FormRules>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readonly: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(flatten)]
    pub kind: FormItemKind,
}

impl FormItem {
    pub fn new(prop: &str, label: &str, kind: FormItemKind) -> Self {
        Self {
            prop: prop.to_string(),
            label: label.to_string(),
            span: None,
            rules: None,
            placeholder: None,
            default_value: None,
            disabled: None,
            readonly: None,
            hidden: None,
            kind,
        }
    }

    pub fn span(mut self, span: u8) -> Self {
        self.span = Some(span);
        self
    }

    pub fn rules(mut self, rules: Vec<FormRule>) -> Self {
        self.rules = Some(rules.into());
        self
    }

    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    pub fn default_value(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden.unwrap_or(false)
    }

    pub fn initial_value(&self) -> Value {
        self.default_value
            .clone()
            .unwrap_or_else(|| self.kind.empty_value())
    }

    fn rule_list(&self) -> &[FormRule] {
        self.rules.as_ref().map_or(&[][..], FormRules::as_slice)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPosition {
    Left,
    Right,
    Top,
}

fn default_span() -> u8 {
    GRID_COLUMNS
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSchema {
    pub items: Vec<FormItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_width: Option<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_position: Option<LabelPosition>,
    #[serde(default = "default_span")]
    pub default_span: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_actions: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submit_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_text: Option<String>,
}

impl FormSchema {
    pub fn new(items: Vec<FormItem>) -> Self {
        Self {
            items,
            label_width: None,
            label_position: None,
            default_span: default_span(),
            show_actions: None,
            submit_text: None,
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
        if !(1..=GRID_COLUMNS).contains(&self.default_span) {
            push_error(&mut errors, "defaultSpan", "must be between 1 and 24");
        }
        check_props(self.items.iter().map(|i| i.prop.as_str()), "items", &mut errors);

        for item in &self.items {
            let path = format!("items.{}", item.prop);
            item.kind.check(&path, &mut errors);
            if let Some(span) = item.span {
                if !(1..=GRID_COLUMNS).contains(&span) {
                    push_error(&mut errors, &path, "span must be between 1 and 24");
                }
            }
            for (index, rule) in item.rule_list().iter().enumerate() {
                rule.check(&format!("{}.rules[{}]", path, index), &mut errors);
            }
        }

        collect_validation_errors(errors, "form_schema::validate")
    }

    /// 各項目の初期値
    pub fn default_values(&self) -> Map<String, Value> {
        self.items
            .iter()
            .map(|item| (item.prop.clone(), item.initial_value()))
            .collect()
    }

    /// ルールに従って入力値を検査し、"prop: message" の一覧を返す
    ///
    /// 非表示の項目は検査しない。1項目につき最初の違反だけを報告する。
    pub fn validate_values(&self, values: &Map<String, Value>) -> Vec<String> {
        let mut errors = Vec::new();
        for item in self.items.iter().filter(|item| !item.is_hidden()) {
            let value = values.get(&item.prop);
            let violation = item
                .rule_list()
                .iter()
                .find_map(|rule| rule.apply(&item.label, value));
            if let Some(message) = violation {
                push_error(&mut errors, &item.prop, &message);
                continue;
            }
            if let Some(value) = value.filter(|v| !is_blank(v)) {
                if let Some(message) = item.kind.value_error(value) {
                    push_error(&mut errors, &item.prop, &message);
                }
            }
        }
        errors
    }

    /// `validate_values` の結果を `AppError::ValidationErrors` として返す
    pub fn check_values(&self, values: &Map<String, Value>) -> AppResult<()> {
        collect_validation_errors(self.validate_values(values), "form_schema::check_values")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::schema::common::SelectOption;
    use serde_json::json;

    fn values(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("object expected"),
        }
    }

    fn role_like_form() -> FormSchema {
        FormSchema::new(vec![
            FormItem::new("name", "名称", FormItemKind::Input).rules(vec![
                FormRule::required("名称を入力してください"),
                FormRule::length(2, 10, "2〜10文字で入力してください"),
            ]),
            FormItem::new("code", "コード", FormItemKind::Input).rules(vec![
                FormRule::required("コードを入力してください"),
                FormRule::pattern("^[A-Z_]+$", "英大文字で入力してください"),
            ]),
            FormItem::new(
                "status",
                "状態",
                FormItemKind::Radio(ChoiceConfig::new(vec![
                    SelectOption::new("有効", "enable"),
                    SelectOption::new("無効", "disable"),
                ])),
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
            ),
            FormItem {
                hidden: Some(true),
                ..FormItem::new("secret", "秘密", FormItemKind::Password)
                    .rules(vec![FormRule::required("必須")])
            },
        ])
    }

    #[test]
    fn test_schema_is_valid() {
        assert!(role_like_form().validate().is_ok());
    }

    #[test]
    fn test_validate_values_accepts_good_input() {
        let errors = role_like_form().validate_values(&values(json!({
            "name": "監査担当", "code": "AUDITOR", "status": "disable", "sort": 3
        })));
        assert!(errors.is_empty(), "{:?}", errors);
    }

    #[test]
    fn test_validate_values_reports_first_violation_per_field() {
        let errors = role_like_form().validate_values(&values(json!({
            "name": "あ", "code": "bad code", "status": "unknown", "sort": 1000
        })));
        assert_eq!(
            errors,
            vec![
                "name: 2〜10文字で入力してください",
                "code: 英大文字で入力してください",
                "status: value is not one of the allowed options",
                "sort: value must be between 0 and 999",
            ]
        );
    }

    #[test]
    fn test_number_out_of_range_has_its_own_message() {
        let form = FormSchema::new(vec![
            FormItem::new(
                "quota",
                "上限",
                FormItemKind::Number(NumberConfig {
                    min: Some(1.0),
                    max: None,
                    step: None,
                }),
            ),
            FormItem::new("sort", "並び順", FormItemKind::Number(NumberConfig::default())),
        ]);

        let errors = form.validate_values(&values(json!({ "quota": 0.5, "sort": -40 })));
        assert_eq!(errors, vec!["quota: value must be at least 1"]);

        let errors = role_like_form().validate_values(&values(json!({
            "name": "監査担当", "code": "AUDITOR", "sort": -1
        })));
        assert_eq!(errors, vec!["sort: value must be between 0 and 999"]);
    }

    #[test]
    fn test_missing_required_uses_message() {
        let result = role_like_form().check_values(&values(json!({ "name": "  " })));
        match result {
            Err(AppError::ValidationErrors(errors)) => {
                assert_eq!(
                    errors,
                    vec![
                        "name: 名称を入力してください",
                        "code: コードを入力してください"
                    ]
                );
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_required_without_message_falls_back_to_label() {
        let form = FormSchema::new(vec![FormItem::new("leader", "責任者", FormItemKind::Input)
            .rules(vec![FormRule {
                required: Some(true),
                ..Default::default()
            }])]);
        assert_eq!(
            form.validate_values(&Map::new()),
            vec!["leader: 責任者 is required"]
        );
    }

    #[test]
    fn test_validate_rejects_bad_spans_and_patterns() {
        let mut form = FormSchema::new(vec![
            FormItem::new("a", "A", FormItemKind::Input)
                .span(25)
                .rules(vec![FormRule::pattern("([", "x")]),
            FormItem::new(
                "b",
                "B",
                FormItemKind::Textarea(TextareaConfig { rows: Some(0) }),
            ),
            FormItem::new("c", "C", FormItemKind::Checkbox(ChoiceConfig::default())),
        ]);
        form.default_span = 0;

        match form.validate() {
            Err(AppError::ValidationErrors(errors)) => {
                assert_eq!(errors.len(), 5);
                assert_eq!(errors[0], "defaultSpan: must be between 1 and 24");
                assert_eq!(errors[1], "items.a: span must be between 1 and 24");
                assert!(errors[2].starts_with("items.a.rules[0]: invalid pattern"));
                assert_eq!(errors[3], "items.b: rows must be positive");
                assert_eq!(errors[4], "items.c: at least one option is required");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_rules_accept_single_object() {
        let item: FormItem = serde_json::from_value(json!({
            "prop": "remark", "label": "備考", "type": "textarea", "rows": 3,
            "rules": { "max": 200, "message": "200文字以内", "trigger": "change" }
        }))
        .unwrap();
        assert_eq!(item.rule_list().len(), 1);
        assert_eq!(item.rule_list()[0].trigger, Some(Trigger::Change));
        assert_eq!(item.kind, FormItemKind::Textarea(TextareaConfig { rows: Some(3) }));
    }

    #[test]
    fn test_default_span_and_values() {
        let form: FormSchema = serde_json::from_value(json!({
            "items": [
                { "prop": "tags", "label": "タグ", "type": "checkbox",
                  "options": [{ "label": "A", "value": "a" }] },
                { "prop": "enabled", "label": "有効", "type": "switch", "defaultValue": true }
            ]
        }))
        .unwrap();
        assert_eq!(form.default_span, 24);
        let defaults = form.default_values();
        assert_eq!(defaults["tags"], json!([]));
        assert_eq!(defaults["enabled"], json!(true));
    }
}
