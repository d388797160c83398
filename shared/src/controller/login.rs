use crate::GENERIC_FAILURE_MESSAGE;
use crate::client::{BookHubApi, HttpClient};
use crate::error::{ApiError, ApiResult};
use crate::protocol::{LoginRequest, LoginResponse};
use crate::route::AppRoute;
use crate::session::SessionStore;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoginState {
    #[default]
    Idle,
    Submitting,
    Success,
    /// 服务端返回的错误信息，内联展示
    Failure(String),
}

/// 提交完成后页面应该做什么
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// 替换历史记录并跳转（无法后退回登录页）
    Redirect(AppRoute),
    /// 留在登录页
    Stay,
}

#[derive(Debug, Clone)]
pub struct LoginController {
    username: String,
    password: String,
    state: LoginState,
    expiry_days: u32,
}

impl LoginController {
    pub fn new(expiry_days: u32) -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            state: LoginState::Idle,
            expiry_days,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.username = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    pub fn state(&self) -> &LoginState {
        &self.state
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            LoginState::Failure(msg) => Some(msg),
            _ => None,
        }
    }

    /// 进入提交状态；已经在提交中时返回 `None`
    pub fn begin_submit(&mut self) -> Option<LoginRequest> {
        if self.state == LoginState::Submitting {
            return None;
        }
        self.state = LoginState::Submitting;
        Some(LoginRequest {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }

    /// 处理登录结果：成功时写入 token 并跳转首页
    pub fn finish_submit<S: SessionStore>(
        &mut self,
        session: &S,
        result: ApiResult<LoginResponse>,
    ) -> LoginOutcome {
        match result {
            Ok(resp) => {
                session.set(&resp.jwt_token, self.expiry_days);
                self.state = LoginState::Success;
                tracing::info!(username = %self.username, "login succeeded");
                LoginOutcome::Redirect(AppRoute::auth_success_redirect())
            }
            Err(e) => {
                let message = match &e {
                    ApiError::Status { message, .. } => message.clone(),
                    _ => GENERIC_FAILURE_MESSAGE.to_string(),
                };
                tracing::info!(username = %self.username, error = %e, "login failed");
                self.state = LoginState::Failure(message);
                LoginOutcome::Stay
            }
        }
    }

    pub async fn submit<C: HttpClient, S: SessionStore>(
        &mut self,
        api: &BookHubApi<C, S>,
    ) -> LoginOutcome {
        let Some(req) = self.begin_submit() else {
            return LoginOutcome::Stay;
        };
        let result = api.request(&req).await;
        self.finish_submit(api.session(), result)
    }
}

impl Default for LoginController {
    fn default() -> Self {
        Self::new(crate::DEFAULT_SESSION_EXPIRY_DAYS)
    }
}
