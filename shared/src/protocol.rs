use crate::{BookDetail, BookSummary, Shelf};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the bearer token must be attached.
    const REQUIRES_AUTH: bool;

    /// The URL path, relative to the API origin.
    fn path(&self) -> String;

    /// Query string pairs, in order.
    fn query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// JSON body, if any.
    fn body(&self) -> Option<serde_json::Value> {
        None
    }
}

// =========================================================
// Request Definitions
// =========================================================

/// Exchange credentials for a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub jwt_token: String,
}

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    const REQUIRES_AUTH: bool = false;

    fn path(&self) -> String {
        "/login".to_string()
    }

    fn body(&self) -> Option<serde_json::Value> {
        serde_json::to_value(self).ok()
    }
}

/// Shared response of the two list endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BooksResponse {
    pub books: Vec<BookSummary>,
    #[serde(default)]
    pub total: Option<usize>,
}

impl BooksResponse {
    pub fn total(&self) -> usize {
        self.total.unwrap_or(self.books.len())
    }
}

/// Top rated books shown on the home carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TopRatedBooksRequest;

impl ApiRequest for TopRatedBooksRequest {
    type Response = BooksResponse;
    const METHOD: HttpMethod = HttpMethod::Get;
    const REQUIRES_AUTH: bool = true;

    fn path(&self) -> String {
        "/book-hub/top-rated-books".to_string()
    }
}

/// Books filtered by shelf and search text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooksRequest {
    pub shelf: Shelf,
    pub search: String,
}

impl From<&crate::BooksQuery> for BooksRequest {
    fn from(query: &crate::BooksQuery) -> Self {
        Self {
            shelf: query.shelf,
            search: query.search.clone(),
        }
    }
}

impl ApiRequest for BooksRequest {
    type Response = BooksResponse;
    const METHOD: HttpMethod = HttpMethod::Get;
    const REQUIRES_AUTH: bool = true;

    fn path(&self) -> String {
        "/book-hub/books".to_string()
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("shelf", self.shelf.as_query().to_string()),
            ("search", self.search.clone()),
        ]
    }
}

/// Single book by id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetailsRequest {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDetailsResponse {
    pub book_details: BookDetail,
}

impl ApiRequest for BookDetailsRequest {
    type Response = BookDetailsResponse;
    const METHOD: HttpMethod = HttpMethod::Get;
    const REQUIRES_AUTH: bool = true;

    fn path(&self) -> String {
        format!("/book-hub/books/{}", self.id)
    }
}
