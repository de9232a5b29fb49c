use inkpost_core::{JsonPostRepository, Post, PostRepository, RepoError, StoreError};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn open_loads_entries_in_file_order() {
    let (_dir, path) = seed_file(
        r#"[
            {"id": 1, "date": "2024-01-01", "authorId": 7, "title": "First", "slug": "first"},
            {"id": 2, "date": "2024-01-02", "authorId": 7, "title": "Second", "slug": "second"}
        ]"#,
    );

    let repo = JsonPostRepository::open(&path).unwrap();
    let posts: Vec<_> = repo.all().iter().collect();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, 1);
    assert_eq!(posts[0].title, "First");
    assert_eq!(posts[1].id, 2);
    assert_eq!(posts[1].slug, "second");
}

#[test]
fn roundtrip_preserves_all_fields() {
    let original = serde_json::json!([
        {"id": 3, "date": "2023-12-31", "authorId": 11, "title": "Year end", "slug": "year-end"},
        {"id": 4, "date": "2024-02-29", "authorId": 12, "title": "Leap", "slug": "leap"},
        {"id": 5, "date": "2024-03-01", "authorId": 11, "title": "March", "slug": "march"}
    ]);
    let (_dir, path) = seed_file(&original.to_string());

    let repo = JsonPostRepository::open(&path).unwrap();

    assert_eq!(repo.all().serialize(), original);
}

#[test]
fn add_persists_across_reopen() {
    let (_dir, path) = seed_file(
        r#"[{"id": 1, "date": "2024-01-01", "authorId": 7, "title": "First", "slug": "first"}]"#,
    );

    let mut repo = JsonPostRepository::open(&path).unwrap();
    repo.add(Post::new(2, "2024-01-01", 7, "T", "t")).unwrap();

    let reopened = JsonPostRepository::open(&path).unwrap();
    let ids: Vec<_> = reopened.all().iter().map(|post| post.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn add_is_visible_through_the_live_collection() {
    let (_dir, path) = seed_file("[]");

    let mut repo = JsonPostRepository::open(&path).unwrap();
    assert!(repo.all().is_empty());

    repo.add(Post::new(10, "2024-05-05", 3, "Hello", "hello"))
        .unwrap();

    // Same repository, fresh borrow: the shared collection reflects the
    // append without a reload.
    assert_eq!(repo.all().len(), 1);
    assert_eq!(repo.all().iter().next().unwrap().id, 10);
}

#[test]
fn add_overwrites_file_with_full_collection() {
    let (_dir, path) = seed_file(
        r#"[{"id": 1, "date": "2024-01-01", "authorId": 7, "title": "First", "slug": "first"}]"#,
    );

    let mut repo = JsonPostRepository::open(&path).unwrap();
    repo.add(Post::new(2, "2024-01-02", 8, "Second", "second"))
        .unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let entries = written.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["id"], 1);
    assert_eq!(entries[1]["id"], 2);
    assert_eq!(entries[1]["authorId"], 8);
    assert_eq!(entries[1]["slug"], "second");
}

#[test]
fn add_surfaces_write_failure_and_keeps_memory_appended() {
    let (_dir, path) = seed_file(
        r#"[{"id": 1, "date": "2024-01-01", "authorId": 7, "title": "First", "slug": "first"}]"#,
    );
    let mut repo = JsonPostRepository::open(&path).unwrap();

    // Make the backing path unwritable even for privileged test runs:
    // swap the file for a directory so the overwrite fails at open.
    fs::remove_file(&path).unwrap();
    fs::create_dir(&path).unwrap();

    let err = repo
        .add(Post::new(2, "2024-01-02", 7, "T", "t"))
        .unwrap_err();
    assert!(matches!(err, RepoError::Store(StoreError::Io(_))));

    // Memory stays the source of truth; the failed flush is not rolled back.
    assert_eq!(repo.all().len(), 2);
    assert_eq!(repo.all().iter().last().unwrap().id, 2);
}

#[test]
fn find_by_id_returns_hit_and_miss() {
    let (_dir, path) = seed_file(
        r#"[
            {"id": 1, "date": "2024-01-01", "authorId": 7, "title": "A", "slug": "a"},
            {"id": 2, "date": "2024-01-02", "authorId": 7, "title": "B", "slug": "b"},
            {"id": 3, "date": "2024-01-03", "authorId": 8, "title": "C", "slug": "c"}
        ]"#,
    );

    let repo = JsonPostRepository::open(&path).unwrap();

    let hit = repo.find_by_id(2).unwrap();
    assert_eq!(hit.title, "B");
    assert!(repo.find_by_id(99).is_none());
}

#[test]
fn find_by_id_on_duplicates_returns_first_occurrence() {
    let (_dir, path) = seed_file(
        r#"[
            {"id": 5, "date": "2024-01-01", "authorId": 1, "title": "Earlier", "slug": "earlier"},
            {"id": 5, "date": "2024-01-02", "authorId": 2, "title": "Later", "slug": "later"}
        ]"#,
    );

    let repo = JsonPostRepository::open(&path).unwrap();

    let found = repo.find_by_id(5).unwrap();
    assert_eq!(found.title, "Earlier");
}

#[test]
fn reads_are_idempotent_without_intervening_add() {
    let (_dir, path) = seed_file(
        r#"[{"id": 1, "date": "2024-01-01", "authorId": 7, "title": "First", "slug": "first"}]"#,
    );

    let repo = JsonPostRepository::open(&path).unwrap();

    assert_eq!(repo.all().serialize(), repo.all().serialize());
}

#[test]
fn open_rejects_empty_path_before_any_file_access() {
    let err = JsonPostRepository::open("").unwrap_err();
    assert!(matches!(err, RepoError::Configuration(_)));
}

#[test]
fn open_rejects_missing_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("no-such-posts.json");

    let err = JsonPostRepository::open(&missing).unwrap_err();
    assert!(matches!(err, RepoError::FileNotFound(path) if path == missing));
}

#[test]
fn open_rejects_malformed_json() {
    let (_dir, path) = seed_file("not json at all");

    let err = JsonPostRepository::open(&path).unwrap_err();
    assert!(matches!(err, RepoError::Store(StoreError::Decode(_))));
}

#[test]
fn open_rejects_non_array_document() {
    let (_dir, path) = seed_file(r#"{"id": 1}"#);

    let err = JsonPostRepository::open(&path).unwrap_err();
    match err {
        RepoError::Store(StoreError::Decode(source)) => {
            assert!(source.to_string().contains("expected a JSON array"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn open_rejects_entry_missing_required_field() {
    // Second entry has no slug.
    let (_dir, path) = seed_file(
        r#"[
            {"id": 1, "date": "2024-01-01", "authorId": 7, "title": "A", "slug": "a"},
            {"id": 2, "date": "2024-01-02", "authorId": 7, "title": "B"}
        ]"#,
    );

    let err = JsonPostRepository::open(&path).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Store(StoreError::Hydration { index: 1, .. })
    ));
}

#[test]
fn open_accepts_empty_array() {
    let (_dir, path) = seed_file("[]");

    let repo = JsonPostRepository::open(&path).unwrap();
    assert!(repo.all().is_empty());
    assert!(repo.find_by_id(1).is_none());
}

#[test]
fn service_wraps_repository_calls() {
    let (_dir, path) = seed_file("[]");
    let repo = JsonPostRepository::open(&path).unwrap();
    let mut service = inkpost_core::PostService::new(repo);

    service
        .add_post(Post::new(1, "2024-01-01", 7, "Via service", "via-service"))
        .unwrap();

    let fetched = service.find_by_id(1).unwrap();
    assert_eq!(fetched.title, "Via service");
    assert_eq!(service.posts().len(), 1);
}

#[test]
fn path_accessor_returns_backing_file() {
    let (_dir, path) = seed_file("[]");

    let repo = JsonPostRepository::open(&path).unwrap();
    assert_eq!(repo.path(), path.as_path());
}

fn seed_file(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("posts.json");
    fs::write(&path, contents).unwrap();
    (dir, path)
}
