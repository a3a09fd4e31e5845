// templates/pages/listings.rs

use crate::domain::{FilterConfig, SortKey};
use crate::engine::ListingView;
use crate::favorites::FavoritesSet;
use crate::templates::components::{empty_state, filter_bar, listing_card};
use crate::templates::layouts::desktop::{desktop_layout, nav_links, Nav};
use maud::{html, Markup};

pub struct ListingsVm {
    pub filter: FilterConfig,
    pub sort: SortKey,
    pub view: ListingView,
    pub favorites: FavoritesSet,
    pub districts: Vec<String>,
    pub property_types: Vec<String>,
    pub query: String,
}

pub fn listings_page(vm: &ListingsVm) -> Markup {
    desktop_layout(
        "매물 목록",
        Nav::List,
        &vm.query,
        html! {
            (filter_bar(&vm.filter, vm.sort, &vm.districts, &vm.property_types))

            section id="results" {
                (results_partial(vm))
            }
        },
    )
}

/// Response to an htmx filter change: the results plus the header links,
/// swapped out of band so switching views keeps the current filter.
pub fn results_fragment(vm: &ListingsVm) -> Markup {
    html! {
        (results_partial(vm))
        (nav_links(Nav::List, &vm.query, true))
    }
}

/// Count + grid.
pub fn results_partial(vm: &ListingsVm) -> Markup {
    html! {
        div class="results-header" {
            span id="resultCount" { "총 " (vm.view.count) "개의 매물" }
            @if !vm.filter.is_unconstrained() {
                a href="/" class="reset-link" { "필터 초기화" }
            }
            a href=(format!("/map?{}", vm.query)) class="map-link" { "🗺️ 지도로 보기" }
        }

        @if vm.filter.only_favorites && vm.favorites.is_empty() {
            div class="empty-state" {
                h3 { "찜한 매물이 없습니다" }
                p { "마음에 드는 매물의 🤍 버튼을 눌러보세요" }
            }
        } @else if vm.view.listings.is_empty() {
            (empty_state())
        } @else {
            div id="propertyGrid" class="property-grid" {
                @for listing in &vm.view.listings {
                    (listing_card(listing, vm.favorites.contains(listing.id)))
                }
            }
        }
    }
}
