use super::{enc, get};
use crate::config::AppConfig;
use crate::domain::Listing;
use crate::errors::ServerError;
use crate::tests::utils::{body_string, listing, seeded_state, state_with};

#[test]
fn index_renders_every_seed_listing() {
    let (_dir, state) = seeded_state();

    let resp = get(&state, "/").expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("총 10개의 매물"));
    assert!(body.contains("판교역 도보 5분 풀옵션 원룸"));
    assert!(body.contains(r#"id="notification-container""#));
}

#[test]
fn district_filter_narrows_results() {
    let (_dir, state) = seeded_state();

    let body = body_string(get(&state, &format!("/?district={}", enc("강남구"))).unwrap());
    assert!(body.contains("총 3개의 매물"));
    assert!(body.contains("역삼동 신축 오피스텔"));
    assert!(!body.contains("반포 한강뷰 아파트"));
}

#[test]
fn results_partial_has_no_layout() {
    let (_dir, state) = seeded_state();

    let body = body_string(get(&state, &format!("/listings?sale_type={}", enc("매매"))).unwrap());
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(body.contains("총 3개의 매물"));
}

#[test]
fn results_follow_requested_sort() {
    let (_dir, state) = seeded_state();

    let uri = format!("/listings?sale_type={}&sort=price-low", enc("전세"));
    let body = body_string(get(&state, &uri).unwrap());

    let pos = |id: u32| {
        body.find(&format!(r#"href="/listings/{id}""#))
            .unwrap_or_else(|| panic!("listing {id} missing"))
    };
    assert!(pos(2) < pos(4));
    assert!(pos(4) < pos(9));
}

#[test]
fn no_match_shows_empty_state() {
    let (_dir, state) = seeded_state();

    let body = body_string(get(&state, &format!("/listings?q={}", enc("없는 동네"))).unwrap());
    assert!(body.contains("총 0개의 매물"));
    assert!(body.contains("검색 결과가 없습니다"));
}

#[test]
fn unknown_transaction_type_is_bad_request() {
    let (_dir, state) = seeded_state();

    let err = get(&state, &format!("/listings?sale_type={}", enc("경매"))).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn detail_page_shows_listing() {
    let (_dir, state) = seeded_state();

    let resp = get(&state, "/listings/3").expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("반포 한강뷰 아파트"));
    assert!(body.contains("담당 중개사"));
    assert!(body.contains("285,000만원"));
}

#[test]
fn detail_of_missing_listing_is_not_found() {
    let (_dir, state) = seeded_state();

    assert!(matches!(get(&state, "/listings/999"), Err(ServerError::NotFound)));
    assert!(matches!(get(&state, "/listings/abc"), Err(ServerError::NotFound)));
}

#[test]
fn filter_dropdowns_list_store_values() {
    let listings = vec![
        Listing { district: "마포구".into(), ..listing(1) },
        Listing { district: "용산구".into(), property_type: "아파트".into(), ..listing(2) },
    ];
    let (_dir, state) = state_with(&AppConfig::default(), listings);

    let body = body_string(get(&state, "/").unwrap());
    assert!(body.contains(r#"<option value="마포구">"#));
    assert!(body.contains(r#"<option value="아파트">"#));
    assert!(!body.contains(r#"<option value="강남구">"#));
}

#[test]
fn unknown_routes_are_not_found() {
    let (_dir, state) = seeded_state();

    assert!(matches!(get(&state, "/nope"), Err(ServerError::NotFound)));
    assert!(matches!(get(&state, "/favorites/1/toggle"), Err(ServerError::NotFound)));
}

#[test]
fn filter_change_carries_query_into_header_links() {
    let (_dir, state) = seeded_state();
    let query = format!("sale_type={}", enc("매매"));

    let resp = get(&state, &format!("/listings?{query}")).unwrap();
    assert_eq!(
        resp.headers().get("HX-Push-Url").unwrap(),
        format!("/?{query}").as_str()
    );

    let body = body_string(resp);
    assert!(body.contains(r#"<nav id="site-nav" hx-swap-oob="true">"#));
    assert!(body.contains(&format!(r#"href="/map?{query}" id="mapViewBtn""#)));
    assert!(body.contains(&format!(r#"href="/?{query}" id="listViewBtn""#)));

    // Following the refreshed link maps the same three listings.
    let map = body_string(get(&state, &format!("/map?{query}")).unwrap());
    assert!(map.contains("총 3개의 매물"));
}

#[test]
fn unfiltered_partial_pushes_bare_root() {
    let (_dir, state) = seeded_state();

    let resp = get(&state, "/listings").unwrap();
    assert_eq!(resp.headers().get("HX-Push-Url").unwrap(), "/");
    assert!(!body_string(resp).contains("필터 초기화"));
}

#[test]
fn full_page_nav_is_not_out_of_band() {
    let (_dir, state) = seeded_state();

    let body = body_string(get(&state, &format!("/?district={}", enc("서초구"))).unwrap());
    assert!(body.contains(r#"<nav id="site-nav">"#));
    assert!(!body.contains("hx-swap-oob"));
    assert!(body.contains("필터 초기화"));
}

#[test]
fn favorites_only_with_no_favorites_explains_why() {
    let (_dir, state) = seeded_state();

    let body = body_string(get(&state, "/listings?favorites=on").unwrap());
    assert!(body.contains("총 0개의 매물"));
    assert!(body.contains("찜한 매물이 없습니다"));
    assert!(!body.contains("검색 결과가 없습니다"));
}
