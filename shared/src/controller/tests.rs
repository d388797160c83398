use super::*;
use crate::client::{BookHubApi, HEADER_AUTHORIZATION, MockHttpClient};
use crate::error::ApiError;
use crate::fetch::FetchState;
use crate::protocol::BooksResponse;
use crate::route::{AppRoute, RouteDecision, guard};
use crate::session::{MemorySessionStore, SessionStore};
use crate::{ReadStatus, Shelf};
use serde_json::json;

// =========================================================
// 辅助函数
// =========================================================

const LOGIN_URL: &str = "https://apis.ccbp.in/login";
const TOP_RATED_URL: &str = "https://apis.ccbp.in/book-hub/top-rated-books";
const BOOKS_ALL_URL: &str = "https://apis.ccbp.in/book-hub/books?shelf=ALL&search=";
const BOOKS_READ_URL: &str = "https://apis.ccbp.in/book-hub/books?shelf=READ&search=";
const BOOKS_VENOM_URL: &str = "https://apis.ccbp.in/book-hub/books?shelf=ALL&search=venom";
const DETAILS_URL: &str =
    "https://apis.ccbp.in/book-hub/books/5f7fe73a-c4f2-4d58-b4ad-ec88426e26be";

type TestApi = BookHubApi<MockHttpClient, MemorySessionStore>;

fn create_api(session: MemorySessionStore) -> (TestApi, MockHttpClient) {
    let client = MockHttpClient::new();
    let api = BookHubApi::new(crate::DEFAULT_API_BASE_URL, client.clone(), session);
    (api, client)
}

fn authenticated_api() -> (TestApi, MockHttpClient) {
    create_api(MemorySessionStore::with_token("jwt-token"))
}

fn top_rated_response() -> serde_json::Value {
    json!({
        "books": [
            {
                "id": "8301d74f-fa98-4fc7-a0d7-96b0b8d67bc9",
                "title": "The Help",
                "author_name": "Kathryn Stockett",
                "cover_pic": "https://assets.ccbp.in/frontend/react-js/the-novel-book.png"
            },
            {
                "id": "5f7fe73a-c4f2-4d58-b4ad-ec88426e26be",
                "title": "Rich Dad Poor Dad",
                "author_name": "Robert Kiyosaki",
                "cover_pic": "https://assets.ccbp.in/frontend/react-js/rich-dad-poor-dad-book.png"
            }
        ],
        "total": 2
    })
}

fn bookshelves_response() -> serde_json::Value {
    json!({
        "books": [
            {
                "id": "54402549-a4bd-4c99-a176-bd795d47173a",
                "title": "One life one chance",
                "author_name": "Luke Richmond",
                "cover_pic": "https://assets.ccbp.in/frontend/react-js/good-reads/good-reads-mini-project-book-1.png",
                "rating": 4.2,
                "read_status": "Read"
            },
            {
                "id": "2ece92fb-c131-43b1-9c07-6f32bc465d01",
                "title": "Borrowed Magic",
                "author_name": "Stephanie Foxe",
                "cover_pic": "https://assets.ccbp.in/frontend/react-js/good-reads/good-reads-mini-project-book-2.png",
                "rating": 3.1,
                "read_status": "Currently Reading"
            }
        ],
        "total": 2
    })
}

fn book_details_response() -> serde_json::Value {
    json!({
        "book_details": {
            "id": "5f7fe73a-c4f2-4d58-b4ad-ec88426e26be",
            "title": "Rich Dad Poor Dad",
            "author_name": "Robert Kiyosaki",
            "cover_pic": "https://assets.ccbp.in/frontend/react-js/rich-dad-poor-dad-book.png",
            "rating": 4.7,
            "read_status": "Read",
            "about_author": "Robert Toru Kiyosaki is an American businessman and author.",
            "about_book": "Rich Dad Poor Dad is about Robert Kiyosaki and his two dads."
        }
    })
}

// =========================================================
// 登录
// =========================================================

#[tokio::test]
async fn test_login_success_stores_token_and_redirects_home() {
    let (api, client) = create_api(MemorySessionStore::new());
    client.mock_response(LOGIN_URL, 200, json!({"jwt_token": "new-token"}));

    let mut login = LoginController::new(30);
    login.set_username("rahul");
    login.set_password("rahul@2021");

    let outcome = login.submit(&api).await;

    assert_eq!(outcome, LoginOutcome::Redirect(AppRoute::Home));
    assert_eq!(login.state(), &LoginState::Success);
    assert_eq!(api.session().get().as_deref(), Some("new-token"));
    assert_eq!(api.session().expiry_days(), Some(30));

    // 登录后首页可以进入
    assert_eq!(
        guard(AppRoute::Home, api.session().is_authenticated()),
        RouteDecision::Render(AppRoute::Home)
    );
}

#[tokio::test]
async fn test_login_failure_shows_server_message_and_stays() {
    let (api, client) = create_api(MemorySessionStore::new());
    client.mock_response(
        LOGIN_URL,
        400,
        json!({"status_code": 400, "error_msg": "Username is not found"}),
    );

    let mut login = LoginController::default();
    login.set_username("unknown");
    login.set_password("whatever");

    let outcome = login.submit(&api).await;

    assert_eq!(outcome, LoginOutcome::Stay);
    assert_eq!(login.error_message(), Some("Username is not found"));
    assert!(!api.session().is_authenticated());
}

#[tokio::test]
async fn test_login_transport_failure_shows_generic_message() {
    let (api, client) = create_api(MemorySessionStore::new());
    client.mock_transport_error(LOGIN_URL);

    let mut login = LoginController::default();
    let outcome = login.submit(&api).await;

    assert_eq!(outcome, LoginOutcome::Stay);
    assert_eq!(
        login.error_message(),
        Some("Something went wrong. Please try again")
    );
}

#[test]
fn test_login_double_submit_is_ignored() {
    let mut login = LoginController::default();
    login.set_username("rahul");
    assert!(login.begin_submit().is_some());
    assert!(login.begin_submit().is_none());
    assert_eq!(login.state(), &LoginState::Submitting);
}

// =========================================================
// 首页
// =========================================================

#[tokio::test]
async fn test_home_loads_top_rated_books() {
    let (api, client) = authenticated_api();
    client.mock_response(TOP_RATED_URL, 200, top_rated_response());

    let mut home = HomeController::new();
    assert!(home.state().is_loading());

    home.load(&api).await;

    let books = home.state().success().unwrap();
    assert_eq!(books.len(), 2);
    assert_eq!(books[0].title, "The Help");
    assert_eq!(
        client.last_request().unwrap().header(HEADER_AUTHORIZATION),
        Some("Bearer jwt-token")
    );
}

#[tokio::test]
async fn test_home_failure_then_retry_reissues_same_request() {
    let (api, client) = authenticated_api();
    client.mock_response(TOP_RATED_URL, 500, json!({"message": "boom"}));

    let mut home = HomeController::new();
    home.load(&api).await;
    assert_eq!(
        home.state().failure_message(),
        Some("Something went wrong. Please try again")
    );

    client.mock_response(TOP_RATED_URL, 200, top_rated_response());
    home.load(&api).await;

    let requests = client.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0], requests[1]);
    assert!(home.state().success().is_some());
}

#[test]
fn test_home_loading_until_response_then_settles_once() {
    let mut home = HomeController::new();
    let (ticket, _) = home.begin_load();
    assert!(home.state().is_loading());

    let resp: BooksResponse = serde_json::from_value(top_rated_response()).unwrap();
    assert!(home.finish_load(ticket, Ok(resp)));
    assert!(!home.finish_load(ticket, Err(ApiError::Transport("late".into()))));
    assert_eq!(home.state().success().map(Vec::len), Some(2));
}

// =========================================================
// 书架
// =========================================================

#[tokio::test]
async fn test_bookshelves_initial_query_is_all_and_empty_search() {
    let (api, client) = authenticated_api();
    client.mock_response(BOOKS_ALL_URL, 200, bookshelves_response());

    let mut shelves = BookshelvesController::new();
    shelves.load(&api).await;

    assert_eq!(client.last_request().unwrap().url, BOOKS_ALL_URL);
    assert_eq!(shelves.heading(), "All Books");
    let books = shelves.state().success().unwrap();
    assert_eq!(books[1].read_status, Some(ReadStatus::CurrentlyReading));
    assert_eq!(books[0].rating, Some(4.2));
}

#[tokio::test]
async fn test_selecting_read_shelf_reissues_request_and_updates_heading() {
    let (api, client) = authenticated_api();
    client.mock_response(BOOKS_ALL_URL, 200, bookshelves_response());
    client.mock_response(BOOKS_READ_URL, 200, bookshelves_response());

    let mut shelves = BookshelvesController::new();
    shelves.load(&api).await;

    let (ticket, req) = shelves.select_shelf(Shelf::Read);
    assert!(shelves.state().is_loading());
    let result = api.request(&req).await;
    assert!(shelves.finish_load(ticket, result));

    assert_eq!(client.last_request().unwrap().url, BOOKS_READ_URL);
    assert_eq!(shelves.heading(), "Read Books");
    assert_eq!(shelves.active_shelf(), Shelf::Read);
}

#[tokio::test]
async fn test_search_with_no_results_renders_empty_state() {
    let (api, client) = authenticated_api();
    client.mock_response(BOOKS_VENOM_URL, 200, json!({"books": [], "total": 0}));

    let mut shelves = BookshelvesController::new();
    shelves.set_search_input("venom");
    // 输入框文字在提交前不影响查询
    assert_eq!(shelves.query().search, "");

    let (ticket, req) = shelves.submit_search();
    let result = api.request(&req).await;
    shelves.finish_load(ticket, result);

    assert_eq!(client.last_request().unwrap().url, BOOKS_VENOM_URL);
    assert_eq!(shelves.state(), &FetchState::Empty);
    assert_eq!(
        shelves.empty_message().as_deref(),
        Some("Your search for venom did not find any matches.")
    );
    assert_eq!(shelves.state().failure_message(), None);
}

#[tokio::test]
async fn test_typing_leaves_rendered_state_untouched() {
    let (api, client) = authenticated_api();
    client.mock_response(BOOKS_ALL_URL, 200, bookshelves_response());

    let mut shelves = BookshelvesController::new();
    shelves.load(&api).await;
    let state = shelves.state().clone();
    let heading = shelves.heading();
    let empty_message = shelves.empty_message();

    // 列表视图只依赖这些派生值，按键不能让它们变化
    for input in ["v", "ve", "ven", ""] {
        shelves.set_search_input(input);
        assert_eq!(shelves.state(), &state);
        assert_eq!(shelves.heading(), heading);
        assert_eq!(shelves.empty_message(), empty_message);
        assert_eq!(shelves.active_shelf(), Shelf::All);
    }
    assert_eq!(client.request_count(), 1);
}

#[tokio::test]
async fn test_bookshelves_retry_reissues_last_query() {
    let (api, client) = authenticated_api();
    client.mock_transport_error(BOOKS_VENOM_URL);

    let mut shelves = BookshelvesController::new();
    shelves.set_search_input("venom");
    let (ticket, req) = shelves.submit_search();
    let result = api.request(&req).await;
    shelves.finish_load(ticket, result);
    assert!(shelves.state().failure_message().is_some());

    // 输入框改变但未提交，重试仍使用上一次的查询
    shelves.set_search_input("something else");
    let (ticket, req) = shelves.begin_retry();
    let result = api.request(&req).await;
    shelves.finish_load(ticket, result);

    let requests = client.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].url, BOOKS_VENOM_URL);
}

#[test]
fn test_stale_shelf_response_is_ignored() {
    let mut shelves = BookshelvesController::new();
    let (all_ticket, _) = shelves.begin_load();
    let (read_ticket, _) = shelves.select_shelf(Shelf::Read);

    let all: BooksResponse = serde_json::from_value(bookshelves_response()).unwrap();
    assert!(!shelves.finish_load(all_ticket, Ok(all)));
    assert!(shelves.state().is_loading());

    assert!(shelves.finish_load(read_ticket, Ok(BooksResponse { books: vec![], total: Some(0) })));
    assert_eq!(shelves.state(), &FetchState::Empty);
}

// =========================================================
// 详情
// =========================================================

#[tokio::test]
async fn test_book_details_success() {
    let (api, client) = authenticated_api();
    client.mock_response(DETAILS_URL, 200, book_details_response());

    let mut details = BookDetailsController::new("5f7fe73a-c4f2-4d58-b4ad-ec88426e26be");
    details.load(&api).await;

    let book = details.state().success().unwrap();
    assert_eq!(book.summary.title, "Rich Dad Poor Dad");
    assert_eq!(book.summary.rating, Some(4.7));
    assert!(book.about_book.starts_with("Rich Dad Poor Dad is about"));
}

#[tokio::test]
async fn test_book_details_failure_and_retry_hits_same_url() {
    let (api, client) = authenticated_api();
    client.mock_response(DETAILS_URL, 400, json!({"message": "bad"}));

    let mut details = BookDetailsController::new("5f7fe73a-c4f2-4d58-b4ad-ec88426e26be");
    details.load(&api).await;
    assert!(details.state().failure_message().is_some());

    details.load(&api).await;
    let requests = client.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.url == DETAILS_URL));
}

// =========================================================
// 注销
// =========================================================

#[tokio::test]
async fn test_logout_clears_session_and_home_redirects_to_login() {
    let (api, _client) = authenticated_api();
    assert_eq!(
        guard(AppRoute::Home, api.session().is_authenticated()),
        RouteDecision::Render(AppRoute::Home)
    );

    let target = logout(api.session());

    assert_eq!(target, AppRoute::Login);
    assert!(!api.session().is_authenticated());
    assert_eq!(
        guard(AppRoute::Home, api.session().is_authenticated()),
        RouteDecision::Redirect(AppRoute::Login)
    );
}

#[test]
fn test_nav_items_active_state() {
    let [home, shelves] = NAV_ITEMS;
    assert!(home.is_active(&AppRoute::Home));
    assert!(!home.is_active(&AppRoute::Bookshelves));
    assert!(shelves.is_active(&AppRoute::Bookshelves));
    assert_eq!(shelves.label, "Bookshelves");
}
