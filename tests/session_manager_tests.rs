use chef_chat_backend::services::session_manager::{Sender, SessionManager};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

#[tokio::test]
async fn appends_come_back_in_order() {
    let mgr = SessionManager::new();
    for i in 0..10 {
        let sender = if i % 2 == 0 { Sender::User } else { Sender::Assistant };
        mgr.append("cena", format!("mensaje {i}"), sender).await;
    }

    let history = mgr.list("cena").await;
    assert_eq!(history.len(), 10);
    for (i, msg) in history.iter().enumerate() {
        assert_eq!(msg.content, format!("mensaje {i}"));
        assert_eq!(msg.session_id, "cena");
    }
    assert!(history.windows(2).all(|w| w[0].id < w[1].id));
    assert!(history.windows(2).all(|w| w[0].created_at <= w[1].created_at));
}

#[tokio::test]
async fn sessions_are_isolated() {
    let mgr = SessionManager::new();
    mgr.append("a", "paella", Sender::User).await;
    mgr.append("a", "¡Claro!", Sender::Assistant).await;
    let before = mgr.list("b").await;

    mgr.append("b", "gazpacho", Sender::User).await;

    assert!(before.is_empty());
    assert_eq!(mgr.list("a").await.len(), 2);
    let b = mgr.list("b").await;
    assert_eq!(b.len(), 1);
    assert_eq!(b[0].content, "gazpacho");
    assert_eq!(mgr.session_count().await, 2);
}

#[tokio::test]
async fn concurrent_appends_get_unique_increasing_ids() {
    let mgr = SessionManager::new();
    let mut handles = Vec::new();
    for task in 0..8 {
        let mgr = mgr.clone();
        handles.push(tokio::spawn(async move {
            let session = format!("s{}", task % 2);
            for i in 0..25 {
                mgr.append(&session, format!("{task}-{i}"), Sender::User).await;
            }
        }));
    }
    for h in handles {
        h.await.unwrap();
    }

    let mut all = mgr.list("s0").await;
    all.extend(mgr.list("s1").await);
    assert_eq!(all.len(), 200);

    for session in ["s0", "s1"] {
        let history = mgr.list(session).await;
        assert!(history.windows(2).all(|w| w[0].id < w[1].id));
    }

    let mut ids: Vec<u64> = all.iter().map(|m| m.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 200);
}

#[tokio::test]
async fn session_lock_serializes_same_session_only() {
    let mgr = SessionManager::new();
    let guard = mgr.lock("busy").await;

    // Another session is not blocked
    tokio::time::timeout(Duration::from_millis(100), mgr.lock("free"))
        .await
        .expect("other session should lock immediately");

    let order = Arc::new(tokio::sync::Mutex::new(Vec::new()));
    let waiter = {
        let mgr = mgr.clone();
        let order = order.clone();
        tokio::spawn(async move {
            let _g = mgr.lock("busy").await;
            order.lock().await.push("second");
        })
    };

    sleep(Duration::from_millis(20)).await;
    order.lock().await.push("first");
    drop(guard);
    waiter.await.unwrap();

    assert_eq!(*order.lock().await, vec!["first", "second"]);
}
