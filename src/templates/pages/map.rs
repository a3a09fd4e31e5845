// templates/pages/map.rs

use crate::map::{MapBackend, DEFAULT_CENTER};
use crate::templates::layouts::desktop::{desktop_layout, Nav};
use maud::{html, Markup};

pub struct MapVm<'a> {
    pub backend: &'a MapBackend,
    pub count: usize,
    pub query: String,
}

pub fn map_page(vm: &MapVm) -> Markup {
    desktop_layout(
        "지도",
        Nav::Map,
        &vm.query,
        html! {
            div class="results-header" {
                span id="resultCount" { "총 " (vm.count) "개의 매물" }
                a href=(format!("/?{}", vm.query)) { "📋 목록으로 보기" }
                @if !matches!(vm.backend, MapBackend::Unavailable) {
                    button type="button" id="locateBtn" { "📍 현재 위치" }
                }
            }

            @match vm.backend {
                MapBackend::Unavailable => (map_unavailable_panel()),
                backend => {
                    div id="map-container" class="active" {
                        div id="map"
                            data-backend=(backend.name())
                            data-markers-url=(format!("/api/map/markers?{}", vm.query))
                            data-center-lat=(DEFAULT_CENTER.0)
                            data-center-lng=(DEFAULT_CENTER.1)
                        {}
                    }
                    (backend_scripts(backend))
                    script src="/static/map.js" defer {}
                }
            }
        },
    )
}

fn backend_scripts(backend: &MapBackend) -> Markup {
    match backend {
        MapBackend::Kakao { app_key } => html! {
            script src=(format!("https://dapi.kakao.com/v2/maps/sdk.js?appkey={app_key}&autoload=false")) {}
        },
        MapBackend::Leaflet => html! {
            link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
            script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js" {}
        },
        MapBackend::Unavailable => html! {},
    }
}

/// Shown instead of a map when no map library is configured.
pub fn map_unavailable_panel() -> Markup {
    html! {
        div id="map-container" class="map-unavailable" {
            h3 { "지도를 표시할 수 없습니다" }
            p {
                "Kakao Maps API 키가 설정되지 않았습니다." br;
                "KAKAO_MAP_KEY 환경 변수 또는 설정 파일의 map.kakao_app_key 값을 지정해주세요."
            }
            a href="https://developers.kakao.com/" target="_blank" rel="noopener" class="kakao-link" {
                "Kakao Developers에서 API 키 발급받기"
            }
            div class="map-note" {
                p { strong { "참고:" } " 현재는 목록 보기로 모든 매물을 확인하실 수 있습니다." }
            }
        }
    }
}
