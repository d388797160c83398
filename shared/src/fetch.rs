//! 请求生命周期状态
//!
//! 每个视图持有一个 `RequestTracker`。发起新请求时状态重置为 `Loading`
//! 并作废所有旧票据；只有最新票据的完成结果会被应用，且只应用一次。

use crate::GENERIC_FAILURE_MESSAGE;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    Loading,
    Success(T),
    /// 请求成功但没有任何条目，不是错误
    Empty,
    Failure(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            FetchState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            FetchState::Failure(msg) => Some(msg),
            _ => None,
        }
    }

    /// 请求失败统一展示通用文案
    pub fn generic_failure() -> Self {
        FetchState::Failure(GENERIC_FAILURE_MESSAGE.to_string())
    }
}

/// 请求票据，标识一次请求
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct RequestTracker<T> {
    state: FetchState<T>,
    latest: u64,
    settled: bool,
}

impl<T> Default for RequestTracker<T> {
    fn default() -> Self {
        Self {
            state: FetchState::Loading,
            latest: 0,
            settled: false,
        }
    }
}

impl<T> RequestTracker<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// 开始新请求：状态回到 Loading，旧票据全部作废
    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        self.settled = false;
        self.state = FetchState::Loading;
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest && !self.settled
    }

    /// 应用请求结果
    ///
    /// 票据过期或已经完成过时忽略并返回 `false`。
    pub fn complete(&mut self, ticket: RequestTicket, state: FetchState<T>) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(ticket = ticket.0, latest = self.latest, "ignoring stale response");
            return false;
        }
        self.settled = true;
        self.state = state;
        true
    }
}
