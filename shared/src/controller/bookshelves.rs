use super::books_state;
use crate::client::{BookHubApi, HttpClient};
use crate::error::ApiResult;
use crate::fetch::{FetchState, RequestTicket, RequestTracker};
use crate::protocol::{BooksRequest, BooksResponse};
use crate::session::SessionStore;
use crate::{BookSummary, BooksQuery, Shelf};

/// 书架页：书架筛选 + 搜索
///
/// `search_input` 是输入框中的文字，只有提交搜索时才进入查询条件。
#[derive(Debug, Clone)]
pub struct BookshelvesController {
    query: BooksQuery,
    search_input: String,
    last_request: BooksRequest,
    tracker: RequestTracker<Vec<BookSummary>>,
}

impl Default for BookshelvesController {
    fn default() -> Self {
        let query = BooksQuery::default();
        Self {
            last_request: BooksRequest::from(&query),
            query,
            search_input: String::new(),
            tracker: RequestTracker::new(),
        }
    }
}

impl BookshelvesController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FetchState<Vec<BookSummary>> {
        self.tracker.state()
    }

    pub fn query(&self) -> &BooksQuery {
        &self.query
    }

    pub fn active_shelf(&self) -> Shelf {
        self.query.shelf
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn set_search_input(&mut self, value: impl Into<String>) {
        self.search_input = value.into();
    }

    /// 标题，如 "All Books"
    pub fn heading(&self) -> String {
        self.query.shelf.heading()
    }

    /// 最近一次请求对应的空结果提示
    pub fn empty_message(&self) -> Option<String> {
        match self.state() {
            FetchState::Empty => Some(
                BooksQuery::new(self.last_request.shelf, self.last_request.search.clone())
                    .no_match_message(),
            ),
            _ => None,
        }
    }

    /// 按当前查询条件发起请求（挂载时）
    pub fn begin_load(&mut self) -> (RequestTicket, BooksRequest) {
        self.last_request = BooksRequest::from(&self.query);
        (self.tracker.begin(), self.last_request.clone())
    }

    /// 切换书架并重新请求
    pub fn select_shelf(&mut self, shelf: Shelf) -> (RequestTicket, BooksRequest) {
        self.query.shelf = shelf;
        self.begin_load()
    }

    /// 提交输入框中的搜索词并重新请求
    pub fn submit_search(&mut self) -> (RequestTicket, BooksRequest) {
        self.query.search = self.search_input.clone();
        self.begin_load()
    }

    /// 重试：原样重发上一次请求
    pub fn begin_retry(&mut self) -> (RequestTicket, BooksRequest) {
        (self.tracker.begin(), self.last_request.clone())
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
