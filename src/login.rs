//! 登录流程状态机
//!
//! `Idle -> Validating -> Submitting -> { Success | Failed } -> Idle`
//!
//! 状态机本身是同步的：`begin_submit` 产出请求，调用方发出请求后用
//! `finish` 回填结果。这样前端可以在两次信号更新之间挂起，测试也可以直接驱动。

use crate::api::{AuthApi, LoginOutcome};
use crate::form::{Field, FormErrors, LoginForm};
use crate::protocol::LoginRequest;
use crate::request::HttpClient;
use crate::route::AppRoute;
use crate::session::SessionStore;


pub const NOTICE_CHECK_CREDENTIALS: &str = "Login failed. Please check your email and password.";
pub const NOTICE_TRY_AGAIN: &str = "Login failed. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFlow {
    form: LoginForm,
    errors: FormErrors,
    phase: LoginPhase,
    notice: Option<String>,
}

impl LoginFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn phase(&self) -> LoginPhase {
        self.phase
    }

    /// 失败提示
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// 提交中禁用输入
    pub fn is_submitting(&self) -> bool {
        self.phase == LoginPhase::Submitting
    }

    /// 用户编辑字段：更新值并清除该字段的错误
    pub fn set_field(&mut self, field: Field, value: String) {
        if self.is_submitting() {
            return;
        }
        self.form.set(field, value);
        self.errors.clear_field(field);
        if self.phase == LoginPhase::Failed {
            self.phase = LoginPhase::Idle;
        }
    }

    /// 关闭失败提示，回到 Idle
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
        if self.phase == LoginPhase::Failed {
            self.phase = LoginPhase::Idle;
        }
    }

    /// 校验表单
    ///
    /// 校验失败时回到 `Idle` 并返回 `None`，此时不应发出任何请求。
    /// 提交中重复调用同样返回 `None`。
    pub fn begin_submit(&mut self) -> Option<LoginRequest> {
        if self.is_submitting() {
            return None;
        }

        self.phase = LoginPhase::Validating;
        self.notice = None;
        self.errors = self.form.validate();

        if !self.errors.is_empty() {
            self.phase = LoginPhase::Idle;
            return None;
        }

        self.phase = LoginPhase::Submitting;
        Some(self.form.to_request())
    }

    /// 回填登录结果
    ///
    /// 成功时写入 token 并返回应跳转的路由；失败时返回 `None`。
    pub fn finish<S: SessionStore + ?Sized>(
        &mut self,
        outcome: LoginOutcome,
        session: &S,
    ) -> Option<AppRoute> {
        match outcome {
            LoginOutcome::Success { token } => {
                session.set(&token);
                self.phase = LoginPhase::Success;
                Some(AppRoute::auth_success_redirect())
            }
            LoginOutcome::Failure { reason } => {
                let notice = if reason.is_transport() {
                    NOTICE_TRY_AGAIN
                } else {
                    NOTICE_CHECK_CREDENTIALS
                };
                self.notice = Some(notice.to_string());
                self.phase = LoginPhase::Failed;
                None
            }
        }
    }

    /// 完整的提交流程：校验、请求、回填
    pub async fn submit<C, S>(&mut self, api: &AuthApi<C>, session: &S) -> Option<AppRoute>
    where
        C: HttpClient,
        S: SessionStore + ?Sized,
    {
        let request = self.begin_submit()?;
        let outcome = api.login(&request).await;
        self.finish(outcome, session)
    }
}
