use maud::{html, Markup, DOCTYPE};

/// Which header tab is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    List,
    Map,
    Detail,
}

/// Header view switcher. `oob` marks it for an htmx out-of-band swap, so a
/// filter change also carries the new query into the 목록/지도 links.
pub fn nav_links(nav: Nav, query: &str, oob: bool) -> Markup {
    let suffix = if query.is_empty() {
        String::new()
    } else {
        format!("?{query}")
    };

    html! {
        nav id="site-nav" hx-swap-oob=[oob.then_some("true")] {
            a href=(format!("/{suffix}")) id="listViewBtn" class=[(nav == Nav::List).then_some("active")] { "목록" }
            a href=(format!("/map{suffix}")) id="mapViewBtn" class=[(nav == Nav::Map).then_some("active")] { "지도" }
        }
    }
}

pub fn desktop_layout(title: &str, nav: Nav, query: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ko" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | 집다" }
                link rel="stylesheet" href="/static/main.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
            }
            body {
                header class="site-header" {
                    a href="/" class="logo" { "🏠 집다" }
                    (nav_links(nav, query, false))
                }

                main class="container" {
                    (content)
                }

                div id="notification-container"
                    hx-get="/notifications"
                    hx-trigger="load, every 4s"
                    hx-swap="innerHTML"
                {}
            }
        }
    }
}
