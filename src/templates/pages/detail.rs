use crate::domain::Listing;
use crate::templates::components::{favorite_button, premium_badge};
use crate::templates::layouts::desktop::{desktop_layout, Nav};
use maud::{html, Markup};

pub fn detail_page(listing: &Listing, is_favorite: bool) -> Markup {
    let agent_initial: String = listing.agent.name.chars().take(1).collect();

    desktop_layout(
        &listing.title,
        Nav::Detail,
        "",
        html! {
            article class="property-detail" data-id=(listing.id) {
                img src=(listing.image) alt=(listing.title) class="modal-image";

                div class="modal-header" {
                    @if listing.premium {
                        (premium_badge("프리미엄 매물"))
                    }
                    h2 { (listing.title) }
                    p class="modal-location" { "📍 " (listing.address) }
                    div class="modal-price" { (listing.price_display()) }
                }

                div class="modal-details" {
                    (detail_item("전용면적", html! { (listing.area) "㎡" }))
                    (detail_item("방/욕실", html! { (listing.rooms) "개 / " (listing.bathrooms) "개" }))
                    (detail_item("층수", html! { (listing.floor) "층 / " (listing.total_floors) "층" }))
                    (detail_item("건축년도", html! { (listing.build_year) "년" }))
                    (detail_item("거래유형", html! { (listing.sale_type.label()) }))
                    (detail_item("매물유형", html! { (listing.property_type) }))
                }

                div class="modal-section" {
                    h3 { "매물 설명" }
                    p { (listing.description) }
                }

                div class="modal-section" {
                    h3 { "옵션" }
                    div class="options-list" {
                        @for option in &listing.options {
                            div class="option-item" {
                                span { "✓" }
                                span { (option) }
                            }
                        }
                    }
                }

                div class="modal-section" {
                    h3 { "담당 중개사" }
                    div class="agent-info" {
                        div class="agent-avatar" { (agent_initial) }
                        div class="agent-details" {
                            h4 { (listing.agent.name) }
                            p { (listing.agent.company) }
                            p { "📞 " (listing.agent.phone) }
                        }
                    }
                }

                div class="modal-actions" {
                    a class="btn-contact" href=(format!("tel:{}", listing.agent.phone)) { "📞 전화하기" }
                    (favorite_button(listing.id, is_favorite))
                    a class="btn-tour" href="/" { "← 목록으로" }
                }
            }
        },
    )
}

fn detail_item(heading: &str, value: Markup) -> Markup {
    html! {
        div class="detail-item" {
            h4 { (heading) }
            p { (value) }
        }
    }
}
