use shared::{domain::UserId, protocol::UserPayload};
use storage::Storage;

#[tokio::test]
async fn crud_round_trip_against_file_database() {
    let temp_root = tempfile::tempdir().expect("tempdir");
    let db_path = temp_root.path().join("data").join("users.db");
    let database_url = format!("sqlite://{}", db_path.to_string_lossy().replace('\\', "/"));

    let storage = Storage::new(&database_url).await.expect("db");
    let ada = storage
        .create_user(&UserPayload::new("Ada", "ada@example.com"))
        .await
        .expect("ada");
    let grace = storage
        .create_user(&UserPayload::new("Grace", "grace@example.com"))
        .await
        .expect("grace");

    storage
        .update_user(ada.id, &UserPayload::new("Ada L.", "ada@example.com"))
        .await
        .expect("update");
    storage.delete_user(grace.id).await.expect("delete");
    drop(storage);

    let reopened = Storage::new(&database_url).await.expect("reopen");
    let users = reopened.list_users().await.expect("list");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, ada.id);
    assert_eq!(users[0].name, "Ada L.");
    assert!(reopened
        .get_user(UserId(grace.id.0))
        .await
        .expect("get")
        .is_none());
}
