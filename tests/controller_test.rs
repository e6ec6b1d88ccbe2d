//! Article controller integration tests
//!
//! Drives the controller end to end against a wiremock backend and checks the
//! collection, the edit target, the feedback line and the session.

mod common;

use pretty_assertions::assert_eq;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, ResponseTemplate};

use articles_desk::egui_app::{AppView, AuthStatus, NavigationGuard};
use articles_desk::shared::{Article, ArticleForm, ClientError, Topic};
use common::*;

fn mount_articles(backend: &TestBackend, articles: &[Article]) {
    backend.mount(
        Mock::given(method("GET"))
            .and(path("/api/articles"))
            .respond_with(ResponseTemplate::new(200).set_body_json(articles_body(articles))),
    );
}

fn valid_form(title: &str) -> ArticleForm {
    ArticleForm {
        title: title.to_string(),
        text: "A body that is long enough".to_string(),
        topic: "React".to_string(),
    }
}

#[test]
fn test_login_scenario() {
    let backend = TestBackend::start();
    backend.mount(
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "message": "Welcome", "token": "abc" })),
            ),
    );

    let session = logged_out_session();
    let mut controller = backend.controller(&session);
    assert_ok!(controller.login("bob", "pw"));
    controller.block_until_idle();

    assert_idle!(controller);
    assert_eq!(session.current_token().as_deref(), Some("abc"));
    assert_eq!(session.current_username().as_deref(), Some("bob"));
    assert_eq!(controller.take_redirect(), Some(AppView::Articles));
    assert_eq!(NavigationGuard::new(session).status(), AuthStatus::Authenticated);
}

#[test]
fn test_login_failure_without_message_uses_fallback() {
    let backend = TestBackend::start();
    backend.mount(
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(500)),
    );

    let session = bob_session();
    let mut controller = backend.controller(&session);
    assert_ok!(controller.login("eve", "pw"));
    controller.block_until_idle();

    assert_eq!(controller.message(), "An error occurred. Please try again");
    assert_eq!(session.current_username().as_deref(), Some("bob"));
}

#[test]
fn test_refresh_empty_collection() {
    let backend = TestBackend::start();
    mount_articles(&backend, &[]);

    let mut controller = backend.controller(&bob_session());
    controller.refresh();
    assert!(controller.is_busy());
    controller.block_until_idle();

    assert_idle!(controller);
    assert!(controller.articles().is_empty());
    assert_eq!(controller.message(), "No articles found");
}

#[test]
fn test_refresh_lists_articles() {
    let backend = TestBackend::start();
    let articles = vec![article(1, "Closures"), article(2, "Hooks"), article(3, "Streams")];
    mount_articles(&backend, &articles);

    let mut controller = backend.controller(&bob_session());
    controller.refresh();
    controller.block_until_idle();

    assert_eq!(controller.articles(), articles.as_slice());
    assert_eq!(controller.message(), "Here are your 3 articles, bob!");
}

#[test]
fn test_refresh_unauthorized_ends_session() {
    let backend = TestBackend::start();
    backend.mount(
        Mock::given(method("GET"))
            .and(path("/api/articles"))
            .respond_with(ResponseTemplate::new(401).set_body_json(message_body("Token expired"))),
    );

    let session = bob_session();
    let guard = NavigationGuard::new(session.clone());
    let mut controller = backend.controller(&session);
    controller.refresh();
    controller.block_until_idle();

    assert_idle!(controller);
    assert!(session.current_token().is_none());
    assert_eq!(guard.status(), AuthStatus::Unauthenticated);
    assert_eq!(guard.resolve(AppView::Articles), AppView::Login);
    assert_eq!(controller.take_redirect(), Some(AppView::Login));
    assert_eq!(controller.message(), "");
}

#[test]
fn test_refresh_failure_shows_server_message() {
    let backend = TestBackend::start();
    backend.mount(
        Mock::given(method("GET"))
            .and(path("/api/articles"))
            .respond_with(ResponseTemplate::new(500).set_body_json(message_body("Database is down"))),
    );

    let session = bob_session();
    let mut controller = backend.controller(&session);
    controller.refresh();
    controller.block_until_idle();

    assert_idle!(controller);
    assert_eq!(controller.message(), "Database is down");
    assert!(session.is_authenticated());
}

#[test]
fn test_create_appends_once_at_end() {
    let backend = TestBackend::start();
    mount_articles(&backend, &[article(1, "Closures"), article(2, "Hooks")]);
    let created = Article {
        article_id: 17,
        title: "Fresh".to_string(),
        text: "A body that is long enough".to_string(),
        topic: Topic::React,
    };
    backend.mount(
        Mock::given(method("POST"))
            .and(path("/api/articles"))
            .respond_with(ResponseTemplate::new(201).set_body_json(article_body(&created)))
            .expect(1),
    );

    let mut controller = backend.controller(&bob_session());
    controller.refresh();
    controller.block_until_idle();

    controller.form = valid_form("Fresh");
    assert_ok!(controller.submit());
    controller.block_until_idle();

    assert_eq!(controller.articles().len(), 3);
    assert_eq!(controller.articles().last(), Some(&created));
    assert_eq!(
        controller.articles().iter().filter(|a| a.article_id == 17).count(),
        1
    );
    assert_eq!(controller.edit_target(), None);
    assert_eq!(controller.message(), "Well done, bob. Great article!");
}

#[test]
fn test_create_failure_leaves_collection() {
    let backend = TestBackend::start();
    mount_articles(&backend, &[article(1, "Closures")]);
    backend.mount(
        Mock::given(method("POST"))
            .and(path("/api/articles"))
            .respond_with(ResponseTemplate::new(422).set_body_json(message_body("Title already used"))),
    );

    let mut controller = backend.controller(&bob_session());
    controller.refresh();
    controller.block_until_idle();

    controller.form = valid_form("Closures");
    assert_ok!(controller.submit());
    controller.block_until_idle();

    assert_eq!(controller.articles(), &[article(1, "Closures")]);
    assert_eq!(controller.message(), "Title already used");
    assert_eq!(controller.form, valid_form("Closures"));
}

#[test]
fn test_update_replaces_entry_in_place() {
    let backend = TestBackend::start();
    mount_articles(
        &backend,
        &[article(1, "Closures"), article(2, "Hooks"), article(3, "Streams")],
    );
    let updated = Article {
        article_id: 2,
        title: "Custom hooks".to_string(),
        text: "A body that is long enough".to_string(),
        topic: Topic::React,
    };
    backend.mount(
        Mock::given(method("PUT"))
            .and(path("/api/articles/2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(article_body(&updated)))
            .expect(1),
    );

    let mut controller = backend.controller(&bob_session());
    controller.refresh();
    controller.block_until_idle();

    assert!(controller.begin_edit(2));
    controller.form = valid_form("Custom hooks");
    assert_ok!(controller.submit());
    controller.block_until_idle();

    assert_eq!(controller.articles().len(), 3);
    let matching: Vec<_> = controller
        .articles()
        .iter()
        .filter(|a| a.article_id == 2)
        .collect();
    assert_eq!(matching, vec![&updated]);
    assert_eq!(controller.articles()[1], updated);
    assert_eq!(controller.edit_target(), None);
    assert_eq!(controller.message(), "Nice update, bob!");
}

#[test]
fn test_remove_keeps_order_of_others() {
    let backend = TestBackend::start();
    mount_articles(
        &backend,
        &[article(1, "Closures"), article(2, "Hooks"), article(3, "Streams")],
    );
    backend.mount(
        Mock::given(method("DELETE"))
            .and(path("/api/articles/2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(message_body("Deleted")))
            .expect(1),
    );

    let mut controller = backend.controller(&bob_session());
    controller.refresh();
    controller.block_until_idle();

    controller.remove(2);
    controller.block_until_idle();

    assert_eq!(
        controller.articles(),
        &[article(1, "Closures"), article(3, "Streams")]
    );
    assert_eq!(controller.message(), "Article 2 was deleted, bob!");
}

#[test]
fn test_remove_unknown_article_surfaces_server_error() {
    let backend = TestBackend::start();
    mount_articles(&backend, &[article(1, "Closures")]);
    backend.mount(
        Mock::given(method("DELETE"))
            .and(path("/api/articles/42"))
            .respond_with(ResponseTemplate::new(404).set_body_json(message_body("Article 42 not found"))),
    );

    let mut controller = backend.controller(&bob_session());
    controller.refresh();
    controller.block_until_idle();

    controller.remove(42);
    controller.block_until_idle();

    assert_idle!(controller);
    assert_eq!(controller.articles(), &[article(1, "Closures")]);
    assert_eq!(controller.message(), "Article 42 not found");
}

#[test]
fn test_invalid_submit_makes_no_call() {
    let backend = TestBackend::start();
    backend.mount(Mock::given(any()).respond_with(ResponseTemplate::new(200)).expect(0));

    let mut controller = backend.controller(&bob_session());
    controller.form = ArticleForm {
        title: "Hi".to_string(),
        text: "short".to_string(),
        topic: "Node".to_string(),
    };
    assert!(!controller.form.is_submittable());

    let result = controller.submit();
    assert!(matches!(result, Err(ClientError::Validation { .. })));
    assert_idle!(controller);
    assert!(backend.received().is_empty());
}

#[test]
fn test_missing_token_blocks_create() {
    let backend = TestBackend::start();
    backend.mount(Mock::given(any()).respond_with(ResponseTemplate::new(200)).expect(0));

    let mut controller = backend.controller(&logged_out_session());
    controller.form = valid_form("Orphan");
    assert_ok!(controller.submit());
    controller.block_until_idle();

    assert_idle!(controller);
    assert_eq!(controller.message(), "No token found. Please log in again.");
    assert!(controller.articles().is_empty());
    assert!(backend.received().is_empty());
}

#[test]
fn test_unauthorized_delete_ends_session() {
    let backend = TestBackend::start();
    mount_articles(&backend, &[article(1, "Closures")]);
    backend.mount(
        Mock::given(method("DELETE"))
            .and(path("/api/articles/1"))
            .respond_with(ResponseTemplate::new(401).set_body_json(message_body("Token expired"))),
    );

    let session = bob_session();
    let mut controller = backend.controller(&session);
    controller.refresh();
    controller.block_until_idle();

    controller.remove(1);
    controller.block_until_idle();

    assert!(!session.is_authenticated());
    assert!(controller.articles().is_empty());
    assert_eq!(controller.take_redirect(), Some(AppView::Login));
}

#[test]
fn test_poll_applies_results_without_blocking() {
    let backend = TestBackend::start();
    mount_articles(&backend, &[article(1, "Closures")]);

    let mut controller = backend.controller(&bob_session());
    controller.refresh();

    let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
    while controller.is_busy() && std::time::Instant::now() < deadline {
        controller.poll();
        std::thread::sleep(std::time::Duration::from_millis(10));
    }

    assert_idle!(controller);
    assert_eq!(controller.articles().len(), 1);
    assert_contains!(controller.message(), "bob");
}
