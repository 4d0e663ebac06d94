// admin-console/src/schema/mod.rs

//! 画面を JSON 設定から描画するためのスキーマ定義
//!
//! テーブル・検索バー・フォームの各スキーマは描画側がそのまま受け取る形で
//! シリアライズされる。未設定の属性は出力しない。

pub mod catalog;
pub mod common;
pub mod form;
pub mod search;
pub mod table;

pub use catalog::{get_schema, SchemaDocument};
pub use form::FormSchema;
pub use search::SearchSchema;
pub use table::{FetchDataParams, FetchDataResult, TableSchema};
