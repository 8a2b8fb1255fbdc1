use storage::Storage;

#[tokio::test]
async fn persisted_term_survives_reopening_the_database() {
    let temp_root = tempfile::tempdir().expect("tempdir");
    let db_path = temp_root.path().join("hn_search.db");
    let database_url = format!("sqlite://{}", db_path.to_string_lossy().replace('\\', "/"));

    {
        let storage = Storage::new(&database_url).await.expect("open");
        storage.set_setting("search", "Redux").await.expect("write");
        storage.pool().close().await;
    }

    let reopened = Storage::new(&database_url).await.expect("reopen");
    assert_eq!(
        reopened.get_setting("search").await.expect("read"),
        Some("Redux".to_string())
    );
}
