use maud::{html, Markup};

use crate::domain::price::buckets_for;
use crate::domain::{FilterConfig, PriceBucket, RoomsSelector, Selector, SortKey, TransactionType, ALL_LABEL};

const ROOM_CHOICES: [u32; 4] = [1, 2, 3, 4];

/// `<option>`s for the price select, from the vocabulary of the selected transaction type.
pub fn price_range_options(
    sale_type: &Selector<TransactionType>,
    selected: &Selector<&'static PriceBucket>,
) -> Markup {
    let chosen = selected.as_option().map(|b| b.label);
    html! {
        option value=(ALL_LABEL) selected[chosen.is_none()] { (ALL_LABEL) }
        @for bucket in buckets_for(sale_type) {
            option value=(bucket.label) selected[chosen == Some(bucket.label)] { (bucket.label) }
        }
    }
}

fn string_select(name: &str, id: &str, choices: &[String], current: &Selector<String>) -> Markup {
    let current = current.as_option();
    html! {
        select name=(name) id=(id) {
            option value=(ALL_LABEL) selected[current.is_none()] { (ALL_LABEL) }
            @for choice in choices {
                option value=(choice) selected[current == Some(choice)] { (choice) }
            }
        }
    }
}

pub fn filter_bar(
    filter: &FilterConfig,
    sort: SortKey,
    districts: &[String],
    property_types: &[String],
) -> Markup {
    let sale_type = filter.sale_type.as_option().copied();
    html! {
        form id="filters"
            class="filter-bar"
            action="/"
            method="get"
            hx-get="/listings"
            hx-target="#results"
            hx-swap="innerHTML"
            hx-trigger="input changed delay:300ms from:#searchInput, change"
        {
            div class="search-row" {
                input type="search"
                    id="searchInput"
                    name="q"
                    value=(filter.search)
                    placeholder="지역, 단지명, 주소로 검색"
                    autocomplete="off";
                button type="submit" id="searchBtn" { "검색" }
            }

            div class="filter-row" {
                (string_select("district", "districtFilter", districts, &filter.district))

                select name="sale_type"
                    id="saleTypeFilter"
                    hx-get="/price-ranges"
                    hx-target="#priceRangeFilter"
                    hx-swap="innerHTML"
                    hx-trigger="change"
                {
                    option value=(ALL_LABEL) selected[sale_type.is_none()] { (ALL_LABEL) }
                    @for t in TransactionType::ALL {
                        option value=(t.label()) selected[sale_type == Some(t)] { (t.label()) }
                    }
                }

                (string_select("type", "propertyTypeFilter", property_types, &filter.property_type))

                select name="price" id="priceRangeFilter" {
                    (price_range_options(&filter.sale_type, &filter.price_range))
                }

                select name="rooms" id="roomsFilter" {
                    option value=(ALL_LABEL) selected[filter.rooms == RoomsSelector::All] { (ALL_LABEL) }
                    @for n in ROOM_CHOICES {
                        option value=(n) selected[filter.rooms == RoomsSelector::Exactly(n)] { (n) "개" }
                    }
                }
            }

            div class="chip-row" {
                label.chip.active[filter.only_premium] {
                    input type="checkbox" name="premium" value="on" checked[filter.only_premium];
                    "⭐ 프리미엄"
                }
                label.chip.active[filter.only_favorites] {
                    input type="checkbox" name="favorites" value="on" checked[filter.only_favorites];
                    "❤️ 찜한 매물"
                }

                select name="sort" id="sortSelect" {
                    @for key in SortKey::ALL {
                        option value=(key.as_str()) selected[key == sort] { (key.label()) }
                    }
                }
            }
        }
    }
}
