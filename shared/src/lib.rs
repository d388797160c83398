use serde::{Deserialize, Serialize};

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod fetch;
pub mod protocol;
pub mod route;
pub mod session;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const DEFAULT_API_BASE_URL: &str = "https://apis.ccbp.in";
pub const SESSION_COOKIE_KEY: &str = "jwt_token";
pub const DEFAULT_SESSION_EXPIRY_DAYS: u32 = 30;
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 书籍阅读状态
///
/// 服务端返回展示文案（如 "Currently Reading"），同时兼容枚举写法。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadStatus {
    #[serde(rename = "Read", alias = "READ")]
    Read,
    #[serde(rename = "Currently Reading", alias = "CURRENTLY_READING")]
    CurrentlyReading,
    #[serde(rename = "Want to Read", alias = "WANT_TO_READ")]
    WantToRead,
}

impl ReadStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReadStatus::Read => "Read",
            ReadStatus::CurrentlyReading => "Currently Reading",
            ReadStatus::WantToRead => "Want to Read",
        }
    }
}

/// 书架筛选条件，同一时刻只有一个处于激活状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Shelf {
    #[default]
    All,
    Read,
    CurrentlyReading,
    WantToRead,
}

impl Shelf {
    pub const ALL: [Shelf; 4] = [
        Shelf::All,
        Shelf::Read,
        Shelf::CurrentlyReading,
        Shelf::WantToRead,
    ];

    /// 查询参数取值
    pub fn as_query(&self) -> &'static str {
        match self {
            Shelf::All => "ALL",
            Shelf::Read => "READ",
            Shelf::CurrentlyReading => "CURRENTLY_READING",
            Shelf::WantToRead => "WANT_TO_READ",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Shelf::All => "All",
            Shelf::Read => "Read",
            Shelf::CurrentlyReading => "Currently Reading",
            Shelf::WantToRead => "Want to Read",
        }
    }

    /// 书架列表页的标题，如 "Read Books"
    pub fn heading(&self) -> String {
        format!("{} Books", self.label())
    }
}

/// 书籍摘要
///
/// 热门书籍接口只返回 id/title/author_name/cover_pic，
/// 因此评分与阅读状态是可选的。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: String,
    pub title: String,
    pub author_name: String,
    pub cover_pic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_status: Option<ReadStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDetail {
    #[serde(flatten)]
    pub summary: BookSummary,
    pub about_author: String,
    pub about_book: String,
}

/// 书架列表的查询条件
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BooksQuery {
    pub shelf: Shelf,
    pub search: String,
}

impl BooksQuery {
    pub fn new(shelf: Shelf, search: impl Into<String>) -> Self {
        Self {
            shelf,
            search: search.into(),
        }
    }

    /// 空结果时的提示文案
    pub fn no_match_message(&self) -> String {
        format!("Your search for {} did not find any matches.", self.search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_read_status_accepts_labels_and_enum_names() {
        let label: ReadStatus = serde_json::from_value(json!("Currently Reading")).unwrap();
        let name: ReadStatus = serde_json::from_value(json!("WANT_TO_READ")).unwrap();
        assert_eq!(label, ReadStatus::CurrentlyReading);
        assert_eq!(name, ReadStatus::WantToRead);
    }

    #[test]
    fn test_top_rated_item_without_rating_parses() {
        let book: BookSummary = serde_json::from_value(json!({
            "id": "8301d74f-fa98-4fc7-a0d7-96b0b8d67bc9",
            "title": "The Help",
            "author_name": "Kathryn Stockett",
            "cover_pic": "https://assets.ccbp.in/frontend/react-js/the-novel-book.png"
        }))
        .unwrap();
        assert_eq!(book.rating, None);
        assert_eq!(book.read_status, None);
    }

    #[test]
    fn test_book_detail_flattens_summary() {
        let detail: BookDetail = serde_json::from_value(json!({
            "id": "5f7fe73a-c4f2-4d58-b4ad-ec88426e26be",
            "title": "Rich Dad Poor Dad",
            "author_name": "Robert Kiyosaki",
            "cover_pic": "https://assets.ccbp.in/frontend/react-js/rich-dad-poor-dad-book.png",
            "rating": 4.7,
            "read_status": "Read",
            "about_author": "Robert Kiyosaki is an author.",
            "about_book": "A book about money."
        }))
        .unwrap();
        assert_eq!(detail.summary.title, "Rich Dad Poor Dad");
        assert_eq!(detail.summary.rating, Some(4.7));
        assert_eq!(detail.summary.read_status, Some(ReadStatus::Read));
        assert_eq!(detail.about_book, "A book about money.");
    }

    #[test]
    fn test_shelf_heading_and_query() {
        assert_eq!(Shelf::default(), Shelf::All);
        assert_eq!(Shelf::Read.heading(), "Read Books");
        assert_eq!(Shelf::CurrentlyReading.as_query(), "CURRENTLY_READING");
        assert_eq!(Shelf::WantToRead.label(), "Want to Read");
    }

    #[test]
    fn test_no_match_message() {
        let query = BooksQuery::new(Shelf::All, "venom");
        assert_eq!(
            query.no_match_message(),
            "Your search for venom did not find any matches."
        );
    }
}
