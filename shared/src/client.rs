use crate::error::{ApiError, ApiResult};
use crate::protocol::{
    ApiRequest, BookDetailsRequest, BookDetailsResponse, BooksRequest, BooksResponse,
    HttpMethod, LoginRequest, LoginResponse, TopRatedBooksRequest,
};
use crate::session::SessionStore;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

#[cfg(test)]
use std::{cell::RefCell, rc::Rc};

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";

// =========================================================
// 核心抽象层 (HTTP Interface Abstraction)
// =========================================================

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(url: &str, method: HttpMethod) -> Self {
        Self {
            url: url.to_string(),
            method,
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body.to_string());
        self
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// 2xx 视为成功
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> ApiResult<T> {
        serde_json::from_str(&self.body).map_err(ApiError::from)
    }
}

/// HTTP 客户端特性 (Trait)
/// (?Send) 是因为浏览器环境下的 Future 不是 Send 的
#[async_trait::async_trait(?Send)]
pub trait HttpClient {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse>;
}

// =========================================================
// 业务封装: BookHubApi
// =========================================================

/// Book Hub API 客户端
///
/// 负责拼接地址、附加 Bearer token、解析 JSON 以及按状态码分类结果。
/// 不做任何自动重试，重试由视图控制器的用户操作触发。
#[derive(Clone)]
pub struct BookHubApi<C, S> {
    base_url: String,
    client: C,
    session: S,
}

impl<C: HttpClient, S: SessionStore> BookHubApi<C, S> {
    pub fn new(base_url: impl Into<String>, client: C, session: S) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client,
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    /// 根据请求定义构造底层 HTTP 请求
    pub fn build_request<R: ApiRequest>(&self, req: &R) -> ApiResult<HttpRequest> {
        let mut url = url::Url::parse(&format!("{}{}", self.base_url, req.path()))
            .map_err(|e| ApiError::Transport(format!("invalid url: {}", e)))?;

        let query = req.query();
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &query {
                pairs.append_pair(key, value);
            }
        }

        let mut http_req = HttpRequest::new(url.as_str(), R::METHOD);

        if R::REQUIRES_AUTH
            && let Some(token) = self.session.get()
        {
            http_req = http_req.with_header(HEADER_AUTHORIZATION, &format!("Bearer {}", token));
        }

        if let Some(body) = req.body() {
            http_req = http_req
                .with_header(HEADER_CONTENT_TYPE, "application/json")
                .with_body(body);
        }

        Ok(http_req)
    }

    /// 发送请求并解析响应
    pub async fn request<R: ApiRequest>(&self, req: &R) -> ApiResult<R::Response> {
        let http_req = self.build_request(req)?;
        tracing::debug!(method = http_req.method.as_str(), url = %http_req.url, "sending request");

        let resp = self.client.send(http_req).await?;

        if !resp.ok() {
            let err = ApiError::from_status(resp.status, &resp.body);
            tracing::warn!(status = resp.status, error = %err, "request failed");
            return Err(err);
        }

        resp.json::<R::Response>()
    }

    pub async fn login(&self, username: &str, password: &str) -> ApiResult<LoginResponse> {
        self.request(&LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })
        .await
    }

    pub async fn top_rated_books(&self) -> ApiResult<BooksResponse> {
        self.request(&TopRatedBooksRequest).await
    }

    pub async fn books(&self, req: &BooksRequest) -> ApiResult<BooksResponse> {
        self.request(req).await
    }

    pub async fn book_details(&self, id: &str) -> ApiResult<BookDetailsResponse> {
        self.request(&BookDetailsRequest { id: id.to_string() }).await
    }
}

// =========================================================
// 测试工具: MockHttpClient
// =========================================================

#[cfg(test)]
#[derive(Clone, Default)]
pub struct MockHttpClient {
    // URL -> (Status, Response Body)，None 表示网络失败
    responses: Rc<RefCell<HashMap<String, Option<(u16, String)>>>>,
    // 记录发出的请求
    requests: Rc<RefCell<Vec<HttpRequest>>>,
}

#[cfg(test)]
impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mock_response(&self, url: &str, status: u16, body: serde_json::Value) {
        self.responses
            .borrow_mut()
            .insert(url.to_string(), Some((status, body.to_string())));
    }

    /// 让某个地址的请求在网络层失败
    pub fn mock_transport_error(&self, url: &str) {
        self.responses.borrow_mut().insert(url.to_string(), None);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.borrow().last().cloned()
    }
}

#[cfg(test)]
#[async_trait::async_trait(?Send)]
impl HttpClient for MockHttpClient {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        let url = req.url.clone();
        self.requests.borrow_mut().push(req);

        match self.responses.borrow().get(&url) {
            Some(Some((status, body))) => Ok(HttpResponse {
                status: *status,
                body: body.clone(),
            }),
            Some(None) => Err(ApiError::Transport("connection refused".to_string())),
            None => Ok(HttpResponse {
                status: 404,
                body: "Not Found".to_string(),
            }),
        }
    }
}
