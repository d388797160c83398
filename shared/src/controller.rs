//! 视图控制器
//!
//! 每个页面的本地状态机，与渲染解耦：
//! - `begin_*` 切换到 Loading/Submitting 并返回要发出的请求
//! - `finish_*` 按票据应用结果，过期结果被丢弃
//! - 异步的 `load`/`submit` 把两步串起来，供非响应式调用方使用

mod book_details;
mod bookshelves;
mod home;
mod login;
mod shell;

#[cfg(test)]
mod tests;

pub use book_details::BookDetailsController;
pub use bookshelves::BookshelvesController;
pub use home::HomeController;
pub use login::{LoginController, LoginOutcome, LoginState};
pub use shell::{NAV_ITEMS, NavItem, logout};

use crate::BookSummary;
use crate::error::ApiResult;
use crate::fetch::FetchState;
use crate::protocol::BooksResponse;

/// 列表接口结果到视图状态的映射
///
/// 空列表是合法结果，与失败区分开。
fn books_state(result: ApiResult<BooksResponse>) -> FetchState<Vec<BookSummary>> {
    match result {
        Ok(resp) if resp.books.is_empty() => FetchState::Empty,
        Ok(resp) => FetchState::Success(resp.books),
        Err(e) => {
            tracing::warn!(error = %e, "failed to load books");
            FetchState::generic_failure()
        }
    }
}
