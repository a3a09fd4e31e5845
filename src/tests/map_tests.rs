use crate::config::MapConfig;
use crate::domain::{Listing, TransactionType};
use crate::map::{marker_label, markers, MapBackend};
use crate::seed::seed_listings;
use crate::tests::utils::listing;

#[test]
fn kakao_key_wins_over_leaflet() {
    let cfg = MapConfig {
        kakao_app_key: Some(" abc123 ".into()),
        leaflet: true,
    };
    assert_eq!(
        MapBackend::select(&cfg),
        MapBackend::Kakao {
            app_key: "abc123".into()
        }
    );
}

#[test]
fn blank_key_falls_back() {
    let leaflet = MapConfig {
        kakao_app_key: Some("   ".into()),
        leaflet: true,
    };
    assert_eq!(MapBackend::select(&leaflet), MapBackend::Leaflet);

    let nothing = MapConfig {
        kakao_app_key: None,
        leaflet: false,
    };
    assert_eq!(MapBackend::select(&nothing), MapBackend::Unavailable);
    assert_eq!(MapBackend::select(&nothing).name(), "unavailable");
}

#[test]
fn marker_labels_by_transaction_type() {
    let rent = Listing {
        sale_type: TransactionType::MonthlyRent,
        price: 1_000,
        monthly_rent: 65,
        ..listing(1)
    };
    assert_eq!(marker_label(&rent), "65만");

    let big = Listing {
        sale_type: TransactionType::Sale,
        price: 285_000,
        ..listing(2)
    };
    assert_eq!(marker_label(&big), "29억");

    let mid = Listing {
        sale_type: TransactionType::Sale,
        price: 135_000,
        ..listing(3)
    };
    assert_eq!(marker_label(&mid), "14억");

    assert_eq!(marker_label(&listing(4)), "3억");
}

#[test]
fn one_marker_per_listing() {
    let listings = seed_listings();
    let markers = markers(&listings);

    assert_eq!(markers.len(), listings.len());
    for (m, l) in markers.iter().zip(&listings) {
        assert_eq!(m.id, l.id);
        assert_eq!(m.lat, l.lat);
        assert_eq!(m.lng, l.lng);
        assert_eq!(m.price_display, l.price_display());
    }
}
