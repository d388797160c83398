use super::books_state;
use crate::BookSummary;
use crate::client::{BookHubApi, HttpClient};
use crate::error::ApiResult;
use crate::fetch::{FetchState, RequestTicket, RequestTracker};
use crate::protocol::{BooksResponse, TopRatedBooksRequest};
use crate::session::SessionStore;

/// 首页：加载热门书籍轮播
#[derive(Debug, Clone, Default)]
pub struct HomeController {
    tracker: RequestTracker<Vec<BookSummary>>,
}

impl HomeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FetchState<Vec<BookSummary>> {
        self.tracker.state()
    }

    /// 挂载或重试时调用，请求始终相同
    pub fn begin_load(&mut self) -> (RequestTicket, TopRatedBooksRequest) {
        (self.tracker.begin(), TopRatedBooksRequest)
    }

    pub fn finish_load(&mut self, ticket: RequestTicket, result: ApiResult<BooksResponse>) -> bool {
        self.tracker.complete(ticket, books_state(result))
    }

    pub async fn load<C: HttpClient, S: SessionStore>(&mut self, api: &BookHubApi<C, S>) {
        let (ticket, req) = self.begin_load();
        let result = api.request(&req).await;
        self.finish_load(ticket, result);
    }
}
