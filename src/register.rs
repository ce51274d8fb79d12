//! 注册流程状态机
//!
//! 与登录流程结构一致，区别在于：成功后清空表单并显示成功提示，不跳转；
//! 失败时把接口消息放入表单级错误，保留已填写的内容。

use crate::api::{AuthApi, RegisterOutcome};
use crate::form::{Field, FormErrors, RegisterForm};
use crate::protocol::RegisterRequest;
use crate::request::HttpClient;

#[cfg(test)]
mod tests;

pub const FALLBACK_FAILURE: &str = "Registration failed";
pub const NETWORK_FAILURE: &str = "Network error";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegisterPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterFlow {
    form: RegisterForm,
    errors: FormErrors,
    phase: RegisterPhase,
    succeeded: bool,
}

impl RegisterFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &RegisterForm {
        &self.form
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn phase(&self) -> RegisterPhase {
        self.phase
    }

    /// 是否显示注册成功提示
    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == RegisterPhase::Submitting
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        if self.is_submitting() {
            return;
        }
        self.form.set(field, value);
        self.errors.clear_field(field);
        if matches!(self.phase, RegisterPhase::Success | RegisterPhase::Failed) {
            self.phase = RegisterPhase::Idle;
        }
    }

    /// 校验表单，通过时进入 `Submitting` 并返回请求
    pub fn begin_submit(&mut self) -> Option<RegisterRequest> {
        if self.is_submitting() {
            return None;
        }

        self.succeeded = false;
        self.phase = RegisterPhase::Validating;
        self.errors = self.form.validate();

        if !self.errors.is_empty() {
            self.phase = RegisterPhase::Idle;
            return None;
        }

        self.phase = RegisterPhase::Submitting;
        Some(self.form.to_request())
    }

    pub fn finish(&mut self, outcome: RegisterOutcome) {
        match outcome {
            RegisterOutcome::Success => {
                self.form.reset();
                self.errors = FormErrors::new();
                self.succeeded = true;
                self.phase = RegisterPhase::Success;
            }
            RegisterOutcome::Failure { reason } => {
                let message = if reason.is_transport() {
                    NETWORK_FAILURE
                } else {
                    reason.server_message().unwrap_or(FALLBACK_FAILURE)
                };
                self.errors = FormErrors::api(message);
                self.phase = RegisterPhase::Failed;
            }
        }
    }

    /// 完整的提交流程，返回是否注册成功
    pub async fn submit<C: HttpClient>(&mut self, api: &AuthApi<C>) -> bool {
        let Some(request) = self.begin_submit() else {
            return false;
        };
        let outcome = api.register(&request).await;
        self.finish(outcome);
        self.succeeded
    }
}
