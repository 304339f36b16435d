//! File-backed local storage survives reopening

use dataqueue::egui_app::local_db::persisted;
use dataqueue::egui_app::LocalDatabase;

use crate::common::submission;

#[tokio::test]
async fn test_persisted_state_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("local.db");

    {
        let db = LocalDatabase::open(&path).await.unwrap();
        persisted::save_sender(&db, "alice").await.unwrap();
        persisted::save_last_send(&db, &submission("kept")).await.unwrap();
        drop(db);
    }

    let db = LocalDatabase::open(&path).await.unwrap();
    assert_eq!(persisted::load_sender(&db).await.unwrap().as_deref(), Some("alice"));
    assert_eq!(persisted::load_last_send(&db).await.unwrap(), Some(submission("kept")));
}
