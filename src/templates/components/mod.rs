use maud::{html, Markup};

use crate::domain::{Listing, ListingId};
use crate::notifications::Notification;

pub mod error;
pub mod filters;

pub use error::html_error_response;
pub use filters::{filter_bar, price_range_options};

/// Heart toggle. Posts with htmx and swaps itself; plain form post otherwise.
pub fn favorite_button(id: ListingId, is_favorite: bool) -> Markup {
    html! {
        form.favorite-form
            method="post"
            action=(format!("/favorites/{id}/toggle"))
            hx-post=(format!("/favorites/{id}/toggle"))
            hx-target="this"
            hx-swap="outerHTML"
        {
            button.favorite-btn.favorited[is_favorite] type="submit" data-id=(id)
                aria-label=(if is_favorite { "찜 해제" } else { "찜하기" })
            {
                @if is_favorite { "❤️" } @else { "🤍" }
            }
        }
    }
}

pub fn premium_badge(text: &str) -> Markup {
    html! {
        div class="premium-badge" { "⭐ " (text) }
    }
}

pub fn listing_card(listing: &Listing, is_favorite: bool) -> Markup {
    html! {
        div.property-card.premium[listing.premium] data-id=(listing.id) {
            a href=(format!("/listings/{}", listing.id)) class="card-link" {
                img src=(listing.image) alt=(listing.title) class="property-image" loading="lazy";
            }

            @if listing.premium {
                (premium_badge("프리미엄"))
            }

            (favorite_button(listing.id, is_favorite))

            a href=(format!("/listings/{}", listing.id)) class="property-info" {
                span class="property-type" { (listing.property_type) " · " (listing.sale_type.label()) }
                h3 class="property-title" { (listing.title) }
                p class="property-location" { "📍 " (listing.address) }
                div class="property-price" { (listing.price_display()) }
                div class="property-features" {
                    span class="feature" { "📐 " (listing.area) "㎡" }
                    span class="feature" { "🛏️ " (listing.rooms) "개" }
                    span class="feature" { "🏢 " (listing.floor) "층" }
                }
                span class="property-views" { "조회 " (crate::domain::format_thousands(listing.views as i64)) }
            }
        }
    }
}

pub fn empty_state() -> Markup {
    html! {
        div class="empty-state" {
            h3 { "검색 결과가 없습니다" }
            p { "다른 조건으로 검색해보세요" }
        }
    }
}

pub fn notification_toasts(items: &[Notification]) -> Markup {
    html! {
        @for n in items {
            div class={"notification " (n.kind.css_class())} data-id=(n.id) {
                @for (i, line) in n.lines.iter().enumerate() {
                    @if i > 0 { br; }
                    (line)
                }
            }
        }
    }
}
