use crate::BookDetail;
use crate::client::{BookHubApi, HttpClient};
use crate::error::ApiResult;
use crate::fetch::{FetchState, RequestTicket, RequestTracker};
use crate::protocol::{BookDetailsRequest, BookDetailsResponse};
use crate::session::SessionStore;

#[derive(Debug, Clone)]
pub struct BookDetailsController {
    id: String,
    tracker: RequestTracker<BookDetail>,
}

impl BookDetailsController {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tracker: RequestTracker::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> &FetchState<BookDetail> {
        self.tracker.state()
    }

    /// 挂载或重试时调用
    pub fn begin_load(&mut self) -> (RequestTicket, BookDetailsRequest) {
        let req = BookDetailsRequest {
            id: self.id.clone(),
        };
        (self.tracker.begin(), req)
    }

    pub fn finish_load(
        &mut self,
        ticket: RequestTicket,
        result: ApiResult<BookDetailsResponse>,
    ) -> bool {
        let state = match result {
            Ok(resp) => FetchState::Success(resp.book_details),
            Err(e) => {
                tracing::warn!(id = %self.id, error = %e, "failed to load book details");
                FetchState::generic_failure()
            }
        };
        self.tracker.complete(ticket, state)
    }

    pub async fn load<C: HttpClient, S: SessionStore>(&mut self, api: &BookHubApi<C, S>) {
        let (ticket, req) = self.begin_load();
        let result = api.request(&req).await;
        self.finish_load(ticket, result);
    }
}
