use std::time::Duration;

use autotech_core::maintenance::MaintenanceStatus;
use autotech_core::notification::{NotificationCenter, DEFAULT_NOTIFICATION_TIMEOUT};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("autotech_core=debug")
        .with_test_writer()
        .try_init();
}

fn message(center: &NotificationCenter) -> Option<String> {
    center.current().map(|n| n.message)
}

#[tokio::test(start_paused = true)]
async fn test_notification_expires_after_window() {
    init_tracing();
    let mut center = NotificationCenter::default();
    assert_eq!(center.timeout(), DEFAULT_NOTIFICATION_TIMEOUT);

    center.show("OVERDUE maintenance: Engine oil change");
    tokio::time::sleep(Duration::from_millis(4_900)).await;
    assert_eq!(
        message(&center).as_deref(),
        Some("OVERDUE maintenance: Engine oil change")
    );

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(message(&center), None);
}

#[tokio::test(start_paused = true)]
async fn test_replacement_restarts_window() {
    init_tracing();
    let mut center = NotificationCenter::default();
    center.show("first");
    tokio::time::sleep(Duration::from_secs(3)).await;

    center.show("second");
    tokio::time::sleep(Duration::from_secs(3)).await;
    // The first timer would have fired at 5s
    assert_eq!(message(&center).as_deref(), Some("second"));

    tokio::time::sleep(Duration::from_millis(2_100)).await;
    assert_eq!(message(&center), None);
}

#[tokio::test(start_paused = true)]
async fn test_dismiss_cancels_expiry() {
    let mut center = NotificationCenter::new(Duration::from_secs(5));
    let mut rx = center.subscribe();

    center.show("VIN decode failed.");
    rx.changed().await.unwrap();
    assert_eq!(
        rx.borrow_and_update().as_ref().map(|n| n.message.clone()),
        Some("VIN decode failed.".to_string())
    );

    center.dismiss();
    rx.changed().await.unwrap();
    assert!(rx.borrow_and_update().is_none());

    // No late expiry notification after the window
    tokio::time::sleep(Duration::from_secs(6)).await;
    assert!(!rx.has_changed().unwrap());
}

#[tokio::test(start_paused = true)]
async fn test_custom_timeout() {
    let mut center = NotificationCenter::new(Duration::from_secs(1));
    center.show("short");
    tokio::time::sleep(Duration::from_millis(1_100)).await;
    assert_eq!(message(&center), None);
}

#[tokio::test(start_paused = true)]
async fn test_publish_status() {
    let mut center = NotificationCenter::default();

    let id = center.publish_status(&MaintenanceStatus::DueSoon {
        remaining: 200,
        tasks: vec!["Tire rotation".to_string()],
    });
    assert!(id.is_some());
    assert_eq!(
        message(&center).as_deref(),
        Some("Maintenance due in 200 miles: Tire rotation")
    );

    assert_eq!(center.publish_status(&MaintenanceStatus::None), None);
    assert_eq!(message(&center), None);
}

#[tokio::test(start_paused = true)]
async fn test_drop_cancels_pending_expiry() {
    let center = {
        let mut center = NotificationCenter::default();
        center.show("teardown");
        center
    };
    let mut rx = center.subscribe();
    drop(center);

    // Sender is gone; the aborted timer must not keep it alive
    tokio::time::sleep(Duration::from_secs(6)).await;
    assert!(rx.changed().await.is_err());
}
