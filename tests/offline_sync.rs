mod common;

use common::{sample_need, setup_app, wait_until};
use reliefsync::domain::value_objects::{NeedId, NeedStatus, NeedType};
use reliefsync::{AppConfig, AppError, LocalStore, VerifyOutcome};
use std::time::Duration;

fn need_id(id: &str) -> NeedId {
    NeedId::new(id.into()).unwrap()
}

// A volunteer verifies a need while offline: the list reflects the
// action immediately and the intent lands in the outbox.
#[tokio::test]
async fn offline_verification_is_visible_and_durable() {
    let mut ctx = setup_app().await;
    ctx.events.take();
    ctx.store
        .replace_cached_needs(&[sample_need("n1", NeedType::Rescue)])
        .await
        .unwrap();

    let outcome = ctx
        .app
        .verify(&need_id("n1"), Some("confirmed via radio".into()))
        .await
        .unwrap();

    assert!(outcome.is_queued());
    let snapshot = ctx.app.snapshot().await;
    assert!(!snapshot.is_online);
    assert_eq!(snapshot.pending_count, 1);
    assert_eq!(snapshot.needs[0].status, NeedStatus::Verified);

    let unsynced = ctx.store.list_unsynced_verifications().await.unwrap();
    assert_eq!(unsynced.len(), 1);
    assert_eq!(unsynced[0].need_id, need_id("n1"));
    assert_eq!(unsynced[0].notes.as_deref(), Some("confirmed via radio"));
    assert_eq!(&unsynced[0].volunteer_id, ctx.app.volunteer_id());
}

// Connectivity returns: the monitor fires, the outbox drains in one
// batch, and the visible list converges on server truth.
#[tokio::test]
async fn coming_back_online_drains_the_outbox() {
    let mut ctx = setup_app().await;
    ctx.store
        .replace_cached_needs(&[
            sample_need("n1", NeedType::Water),
            sample_need("n2", NeedType::Food),
        ])
        .await
        .unwrap();
    ctx.app
        .verify(&need_id("n1"), Some("confirmed via radio".into()))
        .await
        .unwrap();
    assert_eq!(ctx.app.snapshot().await.pending_count, 1);

    // Server truth once the batch lands: n1 is verified and off the
    // unverified list.
    ctx.remote.serve(vec![sample_need("n2", NeedType::Food)]);
    let events = ctx.events.take().unwrap();
    let loop_handle = ctx.app.spawn_event_loop(events);

    ctx.monitor.set_online(true);

    let app = ctx.app.clone();
    wait_until(Duration::from_secs(5), || {
        let app = app.clone();
        async move { app.snapshot().await.pending_count == 0 }
    })
    .await;

    let calls = ctx.remote.batch_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].len(), 1);
    assert_eq!(calls[0][0].need_id, need_id("n1"));
    assert!(ctx
        .store
        .list_unsynced_verifications()
        .await
        .unwrap()
        .is_empty());

    let snapshot = ctx.app.snapshot().await;
    assert!(snapshot.is_online);
    assert_eq!(snapshot.needs.len(), 1);
    assert_eq!(snapshot.needs[0].id, need_id("n2"));

    loop_handle.abort();
}

// An online verification that the remote accepts leaves no trace in the
// outbox.
#[tokio::test]
async fn online_verification_skips_the_outbox() {
    let mut ctx = setup_app().await;
    ctx.events.take();
    ctx.remote.serve(vec![sample_need("n2", NeedType::Medical)]);
    ctx.store
        .replace_cached_needs(&[sample_need("n2", NeedType::Medical)])
        .await
        .unwrap();
    ctx.monitor.set_online(true);

    let outcome = ctx.app.verify(&need_id("n2"), None).await.unwrap();

    assert!(matches!(outcome, VerifyOutcome::Confirmed(_)));
    assert_eq!(ctx.app.snapshot().await.pending_count, 0);
    assert!(ctx.remote.batch_calls().is_empty());
}

// Verifying an id the remote store has never seen fails loudly instead
// of queueing a pointless intent.
#[tokio::test]
async fn verifying_an_unknown_need_is_an_error_not_a_queue_entry() {
    let mut ctx = setup_app().await;
    ctx.events.take();
    ctx.monitor.set_online(true);

    let result = ctx.app.verify(&need_id("ghost"), None).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(ctx.app.snapshot().await.pending_count, 0);
}

// The volunteer identity is minted per session and rides along on every
// queued intent.
#[tokio::test]
async fn volunteer_identity_is_session_scoped() {
    let first = setup_app().await;
    let second = setup_app().await;

    assert_ne!(first.app.volunteer_id(), second.app.volunteer_id());
    assert!(first.app.volunteer_id().as_str().starts_with("volunteer-"));
}

// Repeated drain failures never lose the queued intent.
#[tokio::test]
async fn outbox_survives_flaky_drains() {
    let mut ctx = setup_app().await;
    ctx.events.take();
    ctx.store
        .replace_cached_needs(&[sample_need("n1", NeedType::Water)])
        .await
        .unwrap();
    ctx.app.verify(&need_id("n1"), None).await.unwrap();

    ctx.monitor.set_online(true);
    ctx.remote.take_network_down(true);
    assert!(ctx.app.sync().await.is_err());
    assert!(ctx.app.sync().await.is_err());
    assert_eq!(ctx.app.snapshot().await.pending_count, 1);

    ctx.remote.take_network_down(false);
    ctx.remote.serve(vec![sample_need("n1", NeedType::Water)]);
    let report = ctx.app.sync().await.unwrap();
    assert_eq!(report.accepted, 1);
    assert_eq!(ctx.app.snapshot().await.pending_count, 0);
}

// Full wiring smoke test: a session bootstrapped against an unreachable
// remote still starts, reads degrade to the (empty) cache, and a verify
// queues instead of failing.
#[tokio::test]
async fn bootstrap_degrades_gracefully_without_a_remote() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let mut config = AppConfig::default();
    config.database.url = format!(
        "sqlite://{}?mode=rwc",
        temp_dir.path().join("app.db").display()
    );
    config.remote.base_url = "http://127.0.0.1:1/api".into();
    config.remote.timeout_secs = 1;
    config.sync.auto_sync = false;

    let handles = reliefsync::bootstrap(config).await.unwrap();

    let needs = handles.app.refresh().await;
    assert!(needs.is_empty());

    let outcome = handles.app.verify(&need_id("n1"), None).await.unwrap();
    assert!(outcome.is_queued());
    assert_eq!(handles.app.snapshot().await.pending_count, 1);
}
