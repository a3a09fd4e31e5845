use std::collections::{BTreeSet, HashMap};

use astra::Request;
use chrono::Utc;

use crate::domain::{FilterConfig, Listing, ListingId, SortKey};
use crate::engine::{self, ListingView};
use crate::errors::ServerError;
use crate::map;
use crate::responses::{
    asset_response, html_response, json_response, pushed_html_response, redirect_response,
    ResultResp,
};
use crate::state::AppState;
use crate::templates;
use crate::templates::pages::{ListingsVm, MapVm};

const MAIN_CSS: &str = include_str!("../static/main.css");
const MAP_JS: &str = include_str!("../static/map.js");

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    tracing::debug!(method, path, "request");

    match (method, segments.as_slice()) {
        ("GET", []) => {
            let vm = listings_vm(&req, state)?;
            html_response(templates::pages::listings_page(&vm))
        }
        ("GET", ["listings"]) => {
            let vm = listings_vm(&req, state)?;
            let page_url = if vm.query.is_empty() {
                "/".to_string()
            } else {
                format!("/?{}", vm.query)
            };
            pushed_html_response(templates::pages::results_fragment(&vm), &page_url)
        }
        ("GET", ["listings", id]) => {
            let id = parse_id(id).ok_or(ServerError::NotFound)?;
            let listing = state
                .store
                .with_store(|store| engine::lookup(store, id))
                .ok_or(ServerError::NotFound)?;
            let is_favorite = state.favorites.contains(id);
            html_response(templates::pages::detail_page(&listing, is_favorite))
        }
        ("POST", ["favorites", id, "toggle"]) => {
            let id = parse_id(id)
                .ok_or_else(|| ServerError::BadRequest(format!("invalid listing id: {id}")))?;
            toggle_favorite(&req, id, state)
        }
        ("GET", ["price-ranges"]) => {
            let filter = FilterConfig::from_query(&parse_query(&req))?;
            html_response(templates::price_range_options(
                &filter.sale_type,
                &filter.price_range,
            ))
        }
        ("GET", ["map"]) => {
            let (filter, sort, view) = derive(&req, state)?;
            html_response(templates::pages::map_page(&MapVm {
                backend: &state.map,
                count: view.count,
                query: filter.to_query(sort),
            }))
        }
        ("GET", ["api", "listings"]) => {
            let (_, _, view) = derive(&req, state)?;
            json_response(&view)
        }
        ("GET", ["api", "map", "markers"]) => {
            let (_, _, view) = derive(&req, state)?;
            json_response(&map::markers(&view.listings))
        }
        ("GET", ["notifications"]) => {
            let active = state
                .notifications
                .lock()
                .active(Utc::now(), state.toast_ttl);
            html_response(templates::notification_toasts(&active))
        }
        ("GET", ["static", "main.css"]) => asset_response(MAIN_CSS, mime::TEXT_CSS_UTF_8),
        ("GET", ["static", "map.js"]) => {
            asset_response(MAP_JS, mime::APPLICATION_JAVASCRIPT_UTF_8)
        }
        _ => Err(ServerError::NotFound),
    }
}

fn parse_id(raw: &str) -> Option<ListingId> {
    raw.parse().ok()
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

/// Filter + sort from the query, and the view they produce right now.
fn derive(req: &Request, state: &AppState) -> Result<(FilterConfig, SortKey, ListingView), ServerError> {
    let params = parse_query(req);
    let filter = FilterConfig::from_query(&params)?;
    let sort = params.get("sort").map(|s| SortKey::parse(s)).unwrap_or_default();

    let favorites = state.favorites.snapshot();
    let view = state
        .store
        .with_store(|store| engine::build_view(store, &filter, sort, &favorites));

    Ok((filter, sort, view))
}

fn listings_vm(req: &Request, state: &AppState) -> Result<ListingsVm, ServerError> {
    let (filter, sort, view) = derive(req, state)?;
    let (districts, property_types) = state.store.with_store(|store| {
        (
            distinct(store.listings(), |l| &l.district),
            distinct(store.listings(), |l| &l.property_type),
        )
    });

    Ok(ListingsVm {
        query: filter.to_query(sort),
        filter,
        sort,
        view,
        favorites: state.favorites.snapshot(),
        districts,
        property_types,
    })
}

fn distinct<F>(listings: &[Listing], field: F) -> Vec<String>
where
    F: Fn(&Listing) -> &String,
{
    listings
        .iter()
        .map(|l| field(l).clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn toggle_favorite(req: &Request, id: ListingId, state: &AppState) -> ResultResp {
    let is_favorite = state.favorites.toggle(id)?;

    if req.headers().contains_key("HX-Request") {
        return html_response(templates::favorite_button(id, is_favorite));
    }

    let back = req
        .headers()
        .get("Referer")
        .and_then(|v| v.to_str().ok())
        .and_then(local_path)
        .unwrap_or_else(|| "/".to_string());
    redirect_response(&back)
}

/// Path and query of a referer URL, so redirects never leave this site.
fn local_path(referer: &str) -> Option<String> {
    let url = url::Url::parse(referer).ok()?;
    Some(match url.query() {
        Some(q) => format!("{}?{}", url.path(), q),
        None => url.path().to_string(),
    })
}
