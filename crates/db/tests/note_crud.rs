//! Repository-level CRUD tests for notes.

use kb_db::models::note::CreateNote;
use kb_db::repositories::NoteRepo;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_note(title: &str, content: &str) -> CreateNote {
    CreateNote {
        title: title.to_string(),
        content: content.to_string(),
        summary: None,
        category: "general".to_string(),
        tags: None,
        is_favorite: false,
        is_public: false,
    }
}

fn new_note_in(category: &str, title: &str) -> CreateNote {
    CreateNote {
        category: category.to_string(),
        ..new_note(title, "content")
    }
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_and_find(pool: SqlitePool) {
    let created = NoteRepo::create(&pool, &new_note("First", "Some content"))
        .await
        .unwrap();
    assert_eq!(created.title, "First");
    assert_eq!(created.category, "general");
    assert!(!created.is_favorite);
    assert_eq!(created.created_at, created.updated_at);

    let found = NoteRepo::find_by_id(&pool, created.id).await.unwrap();
    assert_eq!(found.unwrap().id, created.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_missing_returns_none(pool: SqlitePool) {
    let found = NoteRepo::find_by_id(&pool, 9999).await.unwrap();
    assert!(found.is_none());
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_list_orders_by_updated_at_desc(pool: SqlitePool) {
    let first = NoteRepo::create(&pool, &new_note("older", "a")).await.unwrap();
    let second = NoteRepo::create(&pool, &new_note("newer", "b")).await.unwrap();

    let notes = NoteRepo::list(&pool, None, None, None).await.unwrap();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].id, second.id);

    // Touching the older note moves it to the front.
    NoteRepo::update(&pool, first.id, &new_note("older touched", "a"))
        .await
        .unwrap();
    let notes = NoteRepo::list(&pool, None, None, None).await.unwrap();
    assert_eq!(notes[0].id, first.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_filters_by_category(pool: SqlitePool) {
    NoteRepo::create(&pool, &new_note_in("work", "w1")).await.unwrap();
    NoteRepo::create(&pool, &new_note_in("work", "w2")).await.unwrap();
    NoteRepo::create(&pool, &new_note_in("home", "h1")).await.unwrap();

    let work = NoteRepo::list(&pool, Some("work"), None, None).await.unwrap();
    assert_eq!(work.len(), 2);
    assert!(work.iter().all(|n| n.category == "work"));

    let all = NoteRepo::list(&pool, None, None, None).await.unwrap();
    assert_eq!(all.len(), 3);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_pagination_clamps(pool: SqlitePool) {
    for i in 0..5 {
        NoteRepo::create(&pool, &new_note(&format!("n{i}"), "c"))
            .await
            .unwrap();
    }

    let page = NoteRepo::list(&pool, None, Some(2), Some(1)).await.unwrap();
    assert_eq!(page.len(), 2);

    // Negative values are normalized instead of erroring.
    let clamped = NoteRepo::list(&pool, None, Some(-3), Some(-10)).await.unwrap();
    assert_eq!(clamped.len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_favorites_only(pool: SqlitePool) {
    let plain = NoteRepo::create(&pool, &new_note("plain", "c")).await.unwrap();
    let starred = NoteRepo::create(&pool, &new_note("starred", "c")).await.unwrap();
    NoteRepo::toggle_favorite(&pool, starred.id).await.unwrap();

    let favorites = NoteRepo::list_favorites(&pool, None, None).await.unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].id, starred.id);
    assert!(favorites.iter().all(|n| n.id != plain.id));
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_update_replaces_fields(pool: SqlitePool) {
    let created = NoteRepo::create(&pool, &new_note("before", "old content"))
        .await
        .unwrap();

    let replacement = CreateNote {
        title: "after".to_string(),
        content: "new content".to_string(),
        summary: Some("new summary".to_string()),
        category: "work".to_string(),
        tags: Some("rust, sqlite".to_string()),
        is_favorite: true,
        is_public: true,
    };
    let updated = NoteRepo::update(&pool, created.id, &replacement)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "after");
    assert_eq!(updated.summary.as_deref(), Some("new summary"));
    assert!(updated.is_favorite);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_returns_none(pool: SqlitePool) {
    let result = NoteRepo::update(&pool, 424242, &new_note("x", "y"))
        .await
        .unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Favorite toggle
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_toggle_favorite_roundtrip(pool: SqlitePool) {
    let note = NoteRepo::create(&pool, &new_note("toggle", "c")).await.unwrap();
    assert!(!note.is_favorite);

    let once = NoteRepo::toggle_favorite(&pool, note.id)
        .await
        .unwrap()
        .unwrap();
    assert!(once.is_favorite);

    let twice = NoteRepo::toggle_favorite(&pool, note.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(twice.is_favorite, note.is_favorite);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_toggle_favorite_missing_returns_none(pool: SqlitePool) {
    let result = NoteRepo::toggle_favorite(&pool, 7).await.unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_removes_row(pool: SqlitePool) {
    let note = NoteRepo::create(&pool, &new_note("doomed", "c")).await.unwrap();

    assert!(NoteRepo::delete(&pool, note.id).await.unwrap());
    assert!(NoteRepo::find_by_id(&pool, note.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_missing_leaves_store_unchanged(pool: SqlitePool) {
    NoteRepo::create(&pool, &new_note("survivor", "c")).await.unwrap();

    assert!(!NoteRepo::delete(&pool, 31337).await.unwrap());

    let notes = NoteRepo::list(&pool, None, None, None).await.unwrap();
    assert_eq!(notes.len(), 1);
}
