use crate::notifications::{NotificationFeed, NotificationKind};
use chrono::{Duration, TimeZone, Utc};

#[test]
fn oldest_notification_is_evicted_at_capacity() {
    let mut feed = NotificationFeed::new(2);
    feed.push(NotificationKind::Sold, vec!["one".into()]);
    feed.push(NotificationKind::Sold, vec!["two".into()]);
    let third = feed.push(NotificationKind::Info, vec!["three".into()]).id;
    assert_eq!(third, 3);

    let lines: Vec<String> = feed
        .active(Utc::now(), Duration::seconds(60))
        .into_iter()
        .map(|n| n.lines[0].clone())
        .collect();
    assert_eq!(lines, vec!["two", "three"]);
}

#[test]
fn expired_notifications_are_hidden() {
    let t0 = Utc.with_ymd_and_hms(2024, 12, 1, 9, 0, 0).unwrap();
    let mut feed = NotificationFeed::new(10);
    feed.push_at(NotificationKind::Success, vec!["old".into()], t0);
    feed.push_at(
        NotificationKind::Warning,
        vec!["new".into()],
        t0 + Duration::seconds(6),
    );

    let ttl = Duration::seconds(8);
    assert_eq!(feed.active(t0 + Duration::seconds(7), ttl).len(), 2);

    let active = feed.active(t0 + Duration::seconds(9), ttl);
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].kind, NotificationKind::Warning);

    assert!(feed.active(t0 + Duration::seconds(20), ttl).is_empty());
    // Expiry only hides; the feed still holds both.
    assert_eq!(feed.active(t0, Duration::seconds(60)).len(), 2);
}

#[test]
fn zero_capacity_still_keeps_latest() {
    let mut feed = NotificationFeed::new(0);
    feed.push(NotificationKind::Info, vec!["a".into()]);
    feed.push(NotificationKind::Info, vec!["b".into()]);

    let active = feed.active(Utc::now(), Duration::seconds(60));
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].lines, vec!["b".to_string()]);
}

#[test]
fn kinds_map_to_css_classes() {
    assert_eq!(NotificationKind::Success.css_class(), "notification-success");
    assert_eq!(NotificationKind::Sold.css_class(), "notification-sold");
    assert_eq!(NotificationKind::Warning.css_class(), "notification-warning");
    assert_eq!(NotificationKind::Info.css_class(), "notification-info");
}
