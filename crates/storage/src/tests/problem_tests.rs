use super::{TEST_DATE, create_test_storage, leak_input};
use problem_tracker_core::ProblemInput;

#[test]
fn test_create_without_image() {
    let (storage, _dir) = create_test_storage();
    let id = storage.create_problem(&leak_input(), None, TEST_DATE).unwrap();

    let record = storage.get_problem(id).unwrap().unwrap();
    assert_eq!(record.id, id);
    assert_eq!(record.category, "Leak");
    assert_eq!(record.description, "Pipe leak");
    assert_eq!(record.image, None);
    assert_eq!(record.date, TEST_DATE);
    assert_eq!(record.comment.as_deref(), Some(""));
    assert_eq!(record.progress, "Not Started");
    assert_eq!(record.priority, "High");
}

#[test]
fn test_create_with_image_keeps_filename() {
    let (storage, _dir) = create_test_storage();
    let id = storage.create_problem(&leak_input(), Some("pipe photo.JPG"), TEST_DATE).unwrap();
    let listed = storage.list_problems().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, id);
    assert_eq!(listed[0].image.as_deref(), Some("pipe photo.JPG"));
}

#[test]
fn test_get_missing_returns_none() {
    let (storage, _dir) = create_test_storage();
    assert!(storage.get_problem(42).unwrap().is_none());
}

#[test]
fn test_list_newest_first() {
    let (storage, _dir) = create_test_storage();
    let first = storage.create_problem(&leak_input(), None, TEST_DATE).unwrap();
    let second = storage.create_problem(&leak_input(), None, TEST_DATE).unwrap();
    let third = storage.create_problem(&leak_input(), None, TEST_DATE).unwrap();

    let ids: Vec<i64> = storage.list_problems().unwrap().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![third, second, first]);
}

#[test]
fn test_update_without_image_preserves_reference() {
    let (storage, _dir) = create_test_storage();
    let id = storage.create_problem(&leak_input(), Some("old.png"), TEST_DATE).unwrap();

    let edited = ProblemInput::new("Electrical", "Flickering light", "ladder needed", "In Progress", "Low");
    assert!(storage.update_problem(id, &edited, None).unwrap());

    let record = storage.get_problem(id).unwrap().unwrap();
    assert_eq!(record.category, "Electrical");
    assert_eq!(record.description, "Flickering light");
    assert_eq!(record.comment.as_deref(), Some("ladder needed"));
    assert_eq!(record.progress, "In Progress");
    assert_eq!(record.priority, "Low");
    assert_eq!(record.image.as_deref(), Some("old.png"));
    assert_eq!(record.date, TEST_DATE);
}

#[test]
fn test_update_with_image_replaces_reference() {
    let (storage, _dir) = create_test_storage();
    let id = storage.create_problem(&leak_input(), Some("old.png"), TEST_DATE).unwrap();
    assert!(storage.update_problem(id, &leak_input(), Some("new.png")).unwrap());
    let record = storage.get_problem(id).unwrap().unwrap();
    assert_eq!(record.image.as_deref(), Some("new.png"));
}

#[test]
fn test_update_missing_row_reports_false() {
    let (storage, _dir) = create_test_storage();
    assert!(!storage.update_problem(7, &leak_input(), None).unwrap());
    assert!(!storage.update_problem_progress(7, "Done").unwrap());
}

#[test]
fn test_update_progress_touches_only_progress() {
    let (storage, _dir) = create_test_storage();
    let id = storage.create_problem(&leak_input(), Some("a.png"), TEST_DATE).unwrap();
    let before = storage.get_problem(id).unwrap().unwrap();

    assert!(storage.update_problem_progress(id, "Done").unwrap());

    let after = storage.get_problem(id).unwrap().unwrap();
    assert_eq!(after.progress, "Done");
    assert_eq!(after.category, before.category);
    assert_eq!(after.description, before.description);
    assert_eq!(after.image, before.image);
    assert_eq!(after.date, before.date);
    assert_eq!(after.comment, before.comment);
    assert_eq!(after.priority, before.priority);
}

#[test]
fn test_delete_missing_is_noop() {
    let (storage, _dir) = create_test_storage();
    let id = storage.create_problem(&leak_input(), None, TEST_DATE).unwrap();
    let before = storage.list_problems().unwrap();

    assert!(!storage.delete_problem(id + 100).unwrap());

    assert_eq!(storage.list_problems().unwrap(), before);
}

#[test]
fn test_ids_not_reused_after_delete() {
    let (storage, _dir) = create_test_storage();
    let first = storage.create_problem(&leak_input(), None, TEST_DATE).unwrap();
    let second = storage.create_problem(&leak_input(), None, TEST_DATE).unwrap();
    assert!(storage.delete_problem(second).unwrap());

    let third = storage.create_problem(&leak_input(), None, TEST_DATE).unwrap();
    assert!(third > second);
    assert!(third > first);
    assert_eq!(storage.count_problems().unwrap(), 2);
}

#[test]
fn test_list_fails_on_unreadable_row() {
    let (storage, _dir) = create_test_storage();
    storage.create_problem(&leak_input(), None, TEST_DATE).unwrap();
    storage
        .pool
        .get()
        .unwrap()
        .execute(
            "INSERT INTO problems (category, description, date, progress) \
             VALUES (x'FF00', 'Pipe leak', '2024-01-07 10:00:00', 'Not Started')",
            [],
        )
        .unwrap();

    assert_eq!(storage.count_problems().unwrap(), 2);
    assert!(storage.list_problems().is_err());
}
