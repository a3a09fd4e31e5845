use super::{enc, get};
use crate::config::AppConfig;
use crate::notifications::NotificationKind;
use crate::seed::seed_listings;
use crate::tests::utils::{body_string, seeded_state, state_with};
use serde_json::Value;

#[test]
fn api_listings_returns_derived_view() {
    let (_dir, state) = seeded_state();

    let resp = get(&state, &format!("/api/listings?sale_type={}&sort=price-high", enc("매매"))).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );

    let json: Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["count"], 3);
    let ids: Vec<u64> = json["listings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![3, 7, 10]);
}

#[test]
fn markers_follow_filter() {
    let (_dir, state) = seeded_state();

    let body = body_string(get(&state, &format!("/api/map/markers?sale_type={}", enc("월세"))).unwrap());
    let markers: Vec<Value> = serde_json::from_str(&body).unwrap();

    assert_eq!(markers.len(), 4);
    for m in &markers {
        assert!(m["label"].as_str().unwrap().ends_with("만"));
        assert!(m["lat"].is_f64());
    }
}

#[test]
fn map_page_uses_configured_backend() {
    let (_dir, state) = seeded_state();

    let body = body_string(get(&state, "/map").unwrap());
    assert!(body.contains(r#"data-backend="leaflet""#));
    assert!(body.contains("/static/map.js"));
    assert!(body.contains("총 10개의 매물"));
}

#[test]
fn map_page_without_backend_shows_panel() {
    let mut config = AppConfig::default();
    config.map.leaflet = false;
    let (_dir, state) = state_with(&config, seed_listings());

    let body = body_string(get(&state, "/map").unwrap());
    assert!(body.contains("지도를 표시할 수 없습니다"));
    assert!(!body.contains("/static/map.js"));
}

#[test]
fn map_page_embeds_kakao_key() {
    let mut config = AppConfig::default();
    config.map.kakao_app_key = Some("demo-key".into());
    let (_dir, state) = state_with(&config, seed_listings());

    let body = body_string(get(&state, "/map").unwrap());
    assert!(body.contains(r#"data-backend="kakao""#));
    assert!(body.contains("appkey=demo-key"));
}

#[test]
fn price_ranges_follow_transaction_type() {
    let (_dir, state) = seeded_state();

    let sale = body_string(get(&state, &format!("/price-ranges?sale_type={}", enc("매매"))).unwrap());
    assert!(sale.contains("10억 이하"));
    assert!(!sale.contains("만원 이하"));

    let any = body_string(get(&state, "/price-ranges").unwrap());
    assert!(any.contains("50만원 이하"));
}

#[test]
fn notifications_render_active_toasts() {
    let (_dir, state) = seeded_state();

    let empty = body_string(get(&state, "/notifications").unwrap());
    assert!(empty.trim().is_empty());

    state.notifications.lock().push(
        NotificationKind::Sold,
        vec!["✅ 강남구 원룸 3분 전 거래 완료!".into()],
    );
    let body = body_string(get(&state, "/notifications").unwrap());
    assert!(body.contains("notification-sold"));
    assert!(body.contains("✅ 강남구 원룸 3분 전 거래 완료!"));
}

#[test]
fn static_assets_are_served() {
    let (_dir, state) = seeded_state();

    let css = get(&state, "/static/main.css").unwrap();
    assert_eq!(css.status(), 200);
    assert_eq!(
        css.headers().get("Content-Type").unwrap(),
        "text/css; charset=utf-8"
    );
    let css = body_string(css);
    assert!(css.contains(".property-card"));
    // Chip highlight follows the checkbox even after htmx swaps.
    assert!(css.contains(".chip:has(input:checked)"));

    let js = get(&state, "/static/map.js").unwrap();
    assert_eq!(js.status(), 200);
}
