wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);
use std::{cell::RefCell, rc::Rc};

use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::wasm_bindgen_test;

use akrck02_site::{
    config::{Language, SiteConfig},
    fetch::{self, FetchError, FetchRequest},
    github::Repository,
    routes::{self, Route, Site},
    views,
};
use weft::router::{Dispatch, Failure, Router};

fn get_root() -> web_sys::Element {
    let doc = weft::web::document();
    if let Some(elem) = doc.get_element_by_id("testapp") {
        elem.remove();
    }

    let elem = doc.create_element("div").unwrap();
    elem.set_id("testapp");
    doc.body().unwrap().append_child(&elem).unwrap();
    elem
}

fn site(language: Language) -> Site {
    Site::new(Rc::new(SiteConfig {
        language,
        ..SiteConfig::default()
    }))
}

fn params(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

async fn tick() {
    let promise = js_sys::Promise::resolve(&wasm_bindgen::JsValue::NULL);
    JsFuture::from(promise).await.unwrap();
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        weft::web::window()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn select_html(root: &web_sys::Element, selector: &str) -> Option<String> {
    root.query_selector(selector)
        .unwrap()
        .map(|elem| elem.inner_html())
}

fn site_router(root: &web_sys::Element) -> (Router<Site, Route>, Rc<RefCell<Vec<String>>>) {
    let config = SiteConfig::default();
    let table = routes::route_table(&config);
    let redirects = Rc::new(RefCell::new(Vec::new()));
    let redirects2 = redirects.clone();
    let router = Router::new(table, Site::new(Rc::new(config)), root.clone().into())
        .with_redirect(move |location| redirects2.borrow_mut().push(location.to_string()));
    (router, redirects)
}

// Views.

#[wasm_bindgen_test]
fn test_error_view_known_code() {
    let view = views::error::render(&site(Language::English), &params(&["404"])).unwrap();
    let elem = view.elem().clone();

    assert_eq!(select_html(&elem, ".error-code").unwrap(), "404");
    assert_eq!(
        select_html(&elem, ".error-description").unwrap(),
        "Page not found"
    );
}

#[wasm_bindgen_test]
fn test_error_view_unknown_code() {
    let view = views::error::render(&site(Language::Spanish), &params(&["999"])).unwrap();
    let elem = view.elem().clone();
    assert_eq!(
        select_html(&elem, ".error-description").unwrap(),
        "Error desconocido"
    );

    let view = views::error::render(&site(Language::English), &[]).unwrap();
    let elem = view.elem().clone();
    assert_eq!(select_html(&elem, ".error-code").unwrap(), "?");
    assert_eq!(
        select_html(&elem, ".error-description").unwrap(),
        "Unknown error"
    );
}

#[wasm_bindgen_test]
fn test_docs_topics() {
    let site = site(Language::English);

    let index = views::info::docs(&site, &[]).unwrap();
    let elem = index.elem().clone();
    let links = elem.query_selector_all(".doc-topics a").unwrap();
    assert_eq!(links.length(), 2);

    let topic = views::info::docs(&site, &params(&["weft"])).unwrap();
    let elem = topic.elem().clone();
    assert_eq!(select_html(&elem, ".doc-title").unwrap(), "weft");

    let missing = views::info::docs(&site, &params(&["cobol"])).unwrap();
    let elem = missing.elem().clone();
    assert!(select_html(&elem, ".doc-missing").is_some());
    assert!(select_html(&elem, ".doc-title").is_none());
}

#[wasm_bindgen_test]
fn test_code_view_states() {
    let texts = site(Language::English).texts;
    let root = get_root();

    let loading = views::code::render_state(texts, &views::code::RepoState::Loading);
    weft::launch(&root, || loading);
    assert_eq!(
        root.inner_html(),
        r#"<p class="loading">Loading repositories...</p>"#
    );

    let root = get_root();
    let empty = views::code::render_state(texts, &views::code::RepoState::Loaded(Vec::new()));
    weft::launch(&root, || empty);
    assert_eq!(
        select_html(&root, ".empty").unwrap(),
        "No public repositories yet."
    );

    let root = get_root();
    let repos = vec![Repository {
        name: "lss".to_string(),
        html_url: "https://github.com/akrck02/lss".to_string(),
        description: None,
        language: Some("CSS".to_string()),
        stargazers_count: 7,
        fork: false,
        archived: false,
    }];
    let loaded = views::code::render_state(texts, &views::code::RepoState::Loaded(repos));
    weft::launch(&root, || loaded);
    assert_eq!(select_html(&root, ".repository h3 a").unwrap(), "lss");
    assert_eq!(select_html(&root, ".description").unwrap(), "No description");
    assert_eq!(select_html(&root, ".language").unwrap(), "CSS");
    assert_eq!(select_html(&root, ".stars").unwrap(), "7 stars");
}

// Routing.

#[wasm_bindgen_test]
fn test_page_chrome_marks_active_route() {
    let root = get_root();
    let (mut router, _) = site_router(&root);

    assert_eq!(router.dispatch(&params(&["about"])), Dispatch::Mounted);

    let links = root.query_selector_all(".nav-link").unwrap();
    assert_eq!(links.length() as usize, Route::NAVIGATION.len());

    let active = root.query_selector(".nav-link.active").unwrap().unwrap();
    assert_eq!(active.get_attribute("data-route").unwrap(), "about");
    assert_eq!(active.get_attribute("aria-current").unwrap(), "page");
    assert!(root.query_selector("footer .social-link").unwrap().is_some());
    assert_eq!(weft::web::document().title(), "About | akrck02");
}

#[wasm_bindgen_test]
fn test_unknown_route_redirects_to_error_page() {
    let root = get_root();
    let (mut router, redirects) = site_router(&root);

    assert_eq!(
        router.dispatch(&params(&["lss"])),
        Dispatch::Redirected(Failure::NotFound)
    );
    assert_eq!(*redirects.borrow(), vec!["#/error/404".to_string()]);

    assert_eq!(router.dispatch(&params(&["error", "404"])), Dispatch::Mounted);
    assert_eq!(
        select_html(&root, ".error-description").unwrap(),
        "Page not found"
    );
}

#[wasm_bindgen_test]
fn test_empty_hash_shows_home() {
    let root = get_root();
    let (mut router, redirects) = site_router(&root);

    router.dispatch(&[]);
    assert!(root.query_selector(".home").unwrap().is_some());
    assert!(redirects.borrow().is_empty());
}

#[wasm_bindgen_test]
fn test_under_construction_routes() {
    let root = get_root();
    let (mut router, _) = site_router(&root);

    router.dispatch(&params(&["games"]));
    assert!(root.query_selector(".under-construction").unwrap().is_some());
    router.dispatch(&params(&["media"]));
    assert!(root.query_selector(".under-construction").unwrap().is_some());
}

// Fetch.

#[wasm_bindgen_test]
fn test_full_url_encodes_parameters() {
    let request = FetchRequest::get("https://example.com/api")
        .param("q", "a b&c")
        .param("page", "2");
    assert_eq!(
        request.full_url(),
        "https://example.com/api?q=a%20b%26c&page=2"
    );

    let request = FetchRequest::get("https://example.com/api?x=1").param("y", "2");
    assert_eq!(request.full_url(), "https://example.com/api?x=1&y=2");

    assert_eq!(
        FetchRequest::get("https://example.com").full_url(),
        "https://example.com"
    );
}

#[wasm_bindgen_test]
async fn test_send_reports_network_failure() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let ok = calls.clone();
    let err = calls.clone();

    fetch::send(
        FetchRequest::get("http://127.0.0.1:9/unreachable"),
        move |_: Vec<Repository>| ok.borrow_mut().push("success"),
        move |e: FetchError| {
            assert!(matches!(e, FetchError::Network(_)));
            err.borrow_mut().push("error");
        },
    )
    .await;

    assert_eq!(*calls.borrow(), vec!["error"]);
}

#[wasm_bindgen_test]
async fn test_code_view_failed_fetch_keeps_title() {
    let root = get_root();
    let site = Site::new(Rc::new(SiteConfig {
        github_api: "http://127.0.0.1:9".to_string(),
        ..SiteConfig::default()
    }));

    let view = views::code::render(&site, &[]).unwrap();
    weft::launch(&root, || view);
    tick().await;
    assert!(select_html(&root, ".loading").is_some());

    for _ in 0..100 {
        if select_html(&root, ".loading").is_none() {
            break;
        }
        sleep(20).await;
    }

    assert!(select_html(&root, ".loading").is_none());
    assert!(select_html(&root, ".repositories").is_none());
    assert_eq!(select_html(&root, "h1").unwrap(), "Projects");
}
