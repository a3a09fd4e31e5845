use super::get;
use crate::router::handle;
use crate::state::AppState;
use crate::tests::utils::{body_string, seeded_state};
use astra::{Body, Response};
use http::{Method, Request};

fn toggle(state: &AppState, id: &str, headers: &[(&str, &str)]) -> Response {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(format!("/favorites/{id}/toggle"));
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    handle(builder.body(Body::empty()).unwrap(), state).expect("Handler failed")
}

#[test]
fn plain_toggle_redirects_home() {
    let (_dir, state) = seeded_state();

    let resp = toggle(&state, "3", &[]);
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers().get("Location").unwrap(), "/");
    assert!(state.favorites.contains(3));
}

#[test]
fn toggle_redirects_back_to_referer_path() {
    let (_dir, state) = seeded_state();

    let resp = toggle(
        &state,
        "5",
        &[("Referer", "http://localhost:3000/?premium=on&sort=views")],
    );
    assert_eq!(resp.status(), 303);
    assert_eq!(
        resp.headers().get("Location").unwrap(),
        "/?premium=on&sort=views"
    );
}

#[test]
fn htmx_toggle_returns_button_fragment() {
    let (_dir, state) = seeded_state();

    let resp = toggle(&state, "7", &[("HX-Request", "true")]);
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("❤️"));
    assert!(body.contains(r#"hx-post="/favorites/7/toggle""#));

    let body = body_string(toggle(&state, "7", &[("HX-Request", "true")]));
    assert!(body.contains("🤍"));
    assert!(!state.favorites.contains(7));
}

#[test]
fn favorites_filter_uses_toggled_set() {
    let (_dir, state) = seeded_state();
    toggle(&state, "2", &[]);
    toggle(&state, "9", &[]);

    let body = body_string(get(&state, "/listings?favorites=on").unwrap());
    assert!(body.contains("총 2개의 매물"));
    assert!(body.contains(r#"href="/listings/2""#));
    assert!(body.contains(r#"href="/listings/9""#));
}

#[test]
fn favoriting_unknown_listing_is_allowed() {
    let (_dir, state) = seeded_state();

    let resp = toggle(&state, "4242", &[]);
    assert_eq!(resp.status(), 303);
    assert!(state.favorites.contains(4242));

    let body = body_string(get(&state, "/listings?favorites=on").unwrap());
    assert!(body.contains("총 0개의 매물"));
}

#[test]
fn non_numeric_id_is_bad_request() {
    let (_dir, state) = seeded_state();

    let req = Request::builder()
        .method(Method::POST)
        .uri("/favorites/abc/toggle")
        .body(Body::empty())
        .unwrap();
    assert!(matches!(
        handle(req, &state),
        Err(crate::errors::ServerError::BadRequest(_))
    ));
}
