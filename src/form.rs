//! 表单状态与校验模块
//!
//! 负责：
//! - 表单数据的持有与重置
//! - 字段级校验，产出 [`FormErrors`]
//! - 表单到请求对象的转换

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

use crate::protocol::{LoginRequest, RegisterRequest};

pub const MIN_PASSWORD_LEN: usize = 6;

/// 与浏览器端 `\S+@\S+\.\S+` 一致的宽松邮箱格式
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("compile email regex"));

/// 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Username,
    Email,
    Password,
    ConfirmPassword,
    /// 表单级错误（接口返回的消息）
    Api,
}

impl Field {
    /// 对应的 input name / id
    pub fn name(&self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::Api => "api",
        }
    }
}

// =========================================================
// 错误集合 (Form Error Set)
// =========================================================

/// 字段到错误消息的映射
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    entries: BTreeMap<Field, String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// 只包含一条表单级错误
    pub fn api(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(Field::Api, message);
        errors
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    /// 用户编辑某字段时清除该字段的错误
    pub fn clear_field(&mut self, field: Field) {
        self.entries.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.entries.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

/// 密码长度按字符计算
fn check_password(password: &str, errors: &mut FormErrors) {
    if password.is_empty() {
        errors.insert(Field::Password, "Password is required");
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert(
            Field::Password,
            format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
        );
    }
}

// =========================================================
// 登录表单
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// 更新字段值；未知字段忽略
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            _ => {}
        }
    }

    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        if self.email.is_empty() {
            errors.insert(Field::Email, "Email is required");
        }
        check_password(&self.password, &mut errors);
        errors
    }

    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

// =========================================================
// 注册表单
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Username => self.username = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
            Field::Api => {}
        }
    }

    /// 重置表单到初始状态
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();

        if self.username.is_empty() {
            errors.insert(Field::Username, "Username is required");
        }

        if self.email.is_empty() {
            errors.insert(Field::Email, "Email is required");
        } else if !EMAIL_SHAPE.is_match(&self.email) {
            errors.insert(Field::Email, "Invalid email");
        }

        check_password(&self.password, &mut errors);

        if self.confirm_password.is_empty() {
            errors.insert(Field::ConfirmPassword, "Confirm your password");
        } else if self.password != self.confirm_password {
            errors.insert(Field::ConfirmPassword, "Passwords do not match");
        }

        errors
    }

    /// 确认密码只用于本地校验，不发送
    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}
