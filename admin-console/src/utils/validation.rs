// admin-console/src/utils/validation.rs

//! DTO で共通に使うバリデーション定数とカスタム関数

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::domain::status::Status;

/// 部門の制約
pub mod department {
    pub const NAME_MAX_LENGTH: u64 = 50;
    pub const CODE_MAX_LENGTH: u64 = 50;
    pub const LEADER_MAX_LENGTH: u64 = 50;
    pub const DESCRIPTION_MAX_LENGTH: u64 = 200;
}

/// ロールの制約
pub mod role {
    pub const NAME_MAX_LENGTH: u64 = 20;
    pub const CODE_MAX_LENGTH: u64 = 30;
    pub const REMARK_MAX_LENGTH: u64 = 200;
}

/// 部門コード（英数字・ハイフン・アンダースコア）
pub static DEPARTMENT_CODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid department code regex"));

/// ロールコード（英大文字始まり）
pub static ROLE_CODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Z0-9_]*$").expect("Invalid role code regex"));

pub fn validate_not_empty_or_whitespace(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("empty_or_whitespace");
        error.message = Some("Field cannot be empty or contain only whitespace".into());
        return Err(error);
    }
    Ok(())
}

pub fn validate_department_code(code: &str) -> Result<(), ValidationError> {
    if !DEPARTMENT_CODE_REGEX.is_match(code) {
        let mut error = ValidationError::new("invalid_department_code");
        error.message =
            Some("Department code may contain only letters, digits, '-' and '_'".into());
        return Err(error);
    }
    Ok(())
}

pub fn validate_role_code(code: &str) -> Result<(), ValidationError> {
    if !ROLE_CODE_REGEX.is_match(code) {
        let mut error = ValidationError::new("invalid_role_code");
        error.message = Some(
            "Role code must start with an uppercase letter and contain only A-Z, 0-9 and '_'"
                .into(),
        );
        return Err(error);
    }
    Ok(())
}

/// `enable` / `disable` のみ許可
pub fn validate_status(value: &str) -> Result<(), ValidationError> {
    if Status::from_str(value).is_none() {
        let mut error = ValidationError::new("invalid_status");
        error.message = Some("Status must be 'enable' or 'disable'".into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_empty_or_whitespace() {
        assert!(validate_not_empty_or_whitespace("総務部").is_ok());
        assert!(validate_not_empty_or_whitespace("  ").is_err());
    }

    #[test]
    fn test_codes() {
        assert!(validate_department_code("RD-01").is_ok());
        assert!(validate_department_code("研究").is_err());
        assert!(validate_role_code("AUDITOR_2").is_ok());
        assert!(validate_role_code("auditor").is_err());
        assert!(validate_role_code("1ADMIN").is_err());
    }

    #[test]
    fn test_status() {
        assert!(validate_status("enable").is_ok());
        assert!(validate_status("disable").is_ok());
        assert!(validate_status("on").is_err());
    }
}
