use breakfast_core::{
    Breakfast, BreakfastError, BreakfastRepository, BreakfastService, Created, Deleted,
    ErrorKind, InMemoryBreakfastRepository, UpsertResult,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

const T1: i64 = 1_700_000_000_000;
const T2: i64 = 1_700_003_600_000;

fn new_service() -> BreakfastService<InMemoryBreakfastRepository> {
    BreakfastService::new(InMemoryBreakfastRepository::new())
}

fn pancakes() -> Breakfast {
    Breakfast::new(
        "Pancakes",
        "Maple syrup stack",
        T1,
        T2,
        vec!["bacon".to_string()],
        vec!["syrup".to_string()],
    )
    .unwrap()
}

fn breakfast_at(id: Uuid, name: &str, savory: &[&str]) -> Breakfast {
    Breakfast::with_id(
        id,
        name,
        "upsert scenario payload",
        T1,
        T2,
        savory.iter().map(|item| item.to_string()).collect(),
        vec![],
    )
    .unwrap()
}

#[test]
fn create_then_get_returns_identical_breakfast() {
    let service = new_service();
    let breakfast = pancakes();

    assert_eq!(service.create(breakfast.clone()).unwrap(), Created);
    assert_eq!(service.get(breakfast.id).unwrap(), breakfast);
}

#[test]
fn create_rejects_existing_id_and_keeps_original() {
    let service = new_service();
    let original = pancakes();
    service.create(original.clone()).unwrap();

    let duplicate = breakfast_at(original.id, "Other pancakes", &[]);
    let errors = service.create(duplicate).unwrap_err();

    assert_eq!(errors.first(), &BreakfastError::AlreadyExists(original.id));
    assert_eq!(errors.kind(), ErrorKind::Conflict);
    assert_eq!(service.get(original.id).unwrap(), original);
}

#[test]
fn create_revalidates_mutated_values() {
    let service = new_service();
    let mut breakfast = pancakes();
    breakfast.name = "x".to_string();
    breakfast.description.clear();

    let errors = service.create(breakfast.clone()).unwrap_err();
    assert_eq!(
        errors.codes(),
        vec!["Breakfast.InvalidName", "Breakfast.InvalidDescription"]
    );
    assert!(!service.repository().contains(breakfast.id));
}

#[test]
fn get_missing_id_is_not_found() {
    let service = new_service();
    let id = Uuid::new_v4();

    let errors = service.get(id).unwrap_err();
    assert_eq!(errors.first(), &BreakfastError::NotFound(id));
    assert_eq!(errors.kind(), ErrorKind::NotFound);
    assert_eq!(errors.first().code(), "Breakfast.NotFound");
}

#[test]
fn upsert_creates_then_fully_replaces() {
    let service = new_service();
    let id = Uuid::new_v4();
    let payload_p = breakfast_at(id, "Shakshuka", &["eggs", "peppers"]);
    let payload_q = breakfast_at(id, "Huevos rancheros", &["beans"]);

    let first = service.upsert(payload_p.clone()).unwrap();
    assert_eq!(first, UpsertResult { was_created: true });
    assert_eq!(service.get(id).unwrap(), payload_p);

    let second = service.upsert(payload_q.clone()).unwrap();
    assert_eq!(second, UpsertResult { was_created: false });

    let stored = service.get(id).unwrap();
    assert_eq!(stored.name, payload_q.name);
    assert_eq!(stored, payload_q);
    assert_eq!(stored.savory_items, vec!["beans".to_string()]);
}

#[test]
fn upsert_of_stale_value_keeps_last_modified_time_from_going_backwards() {
    let service = new_service();
    let id = Uuid::new_v4();
    let newer = breakfast_at(id, "Eggs benedict", &["ham"]);
    let mut older = breakfast_at(id, "Eggs florentine", &["spinach"]);
    older.last_modified_time = newer.last_modified_time - 5_000;

    service.upsert(newer.clone()).unwrap();
    let after_first = service.get(id).unwrap().last_modified_time;

    assert!(!service.upsert(older.clone()).unwrap().was_created);
    let stored = service.get(id).unwrap();

    assert!(
        stored.last_modified_time >= after_first,
        "last_modified_time went from {after_first} to {}",
        stored.last_modified_time
    );
    assert_eq!(stored.last_modified_time, newer.last_modified_time);
    assert_eq!(stored.name, older.name);
    assert_eq!(stored.savory_items, older.savory_items);
}

#[test]
fn upsert_after_create_reports_existing() {
    let service = new_service();
    let breakfast = pancakes();
    service.create(breakfast.clone()).unwrap();

    let replacement = breakfast_at(breakfast.id, "Blueberry pancakes", &[]);
    assert!(!service.upsert(replacement).unwrap().was_created);
}

#[test]
fn upsert_rejects_invalid_value_without_writing() {
    let service = new_service();
    let mut breakfast = breakfast_at(Uuid::new_v4(), "Congee", &[]);
    breakfast.description = "d".repeat(151);

    let errors = service.upsert(breakfast.clone()).unwrap_err();
    assert_eq!(errors.kind(), ErrorKind::Validation);
    assert!(service.repository().is_empty());
}

#[test]
fn delete_existing_then_get_is_not_found() {
    let service = new_service();
    let breakfast = pancakes();
    service.create(breakfast.clone()).unwrap();

    assert_eq!(service.delete(breakfast.id).unwrap(), Deleted);
    let errors = service.get(breakfast.id).unwrap_err();
    assert_eq!(errors.kind(), ErrorKind::NotFound);
}

#[test]
fn delete_absent_id_succeeds_without_state_change() {
    let service = new_service();
    let kept = pancakes();
    service.create(kept.clone()).unwrap();

    assert_eq!(service.delete(Uuid::new_v4()).unwrap(), Deleted);
    assert_eq!(service.repository().len(), 1);
    assert_eq!(service.get(kept.id).unwrap(), kept);
}

#[test]
fn delete_is_idempotent_and_create_works_again() {
    let service = new_service();
    let breakfast = pancakes();
    service.create(breakfast.clone()).unwrap();

    service.delete(breakfast.id).unwrap();
    service.delete(breakfast.id).unwrap();
    assert_eq!(service.create(breakfast.clone()).unwrap(), Created);
}

#[test]
fn concurrent_creates_of_same_id_yield_one_success() {
    let service = new_service();
    let breakfast = pancakes();
    let created = AtomicUsize::new(0);
    let conflicts = AtomicUsize::new(0);

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| match service.create(breakfast.clone()) {
                Ok(Created) => {
                    created.fetch_add(1, Ordering::SeqCst);
                }
                Err(errors) => {
                    assert_eq!(errors.kind(), ErrorKind::Conflict);
                    conflicts.fetch_add(1, Ordering::SeqCst);
                }
            });
        }
    });

    assert_eq!(created.load(Ordering::SeqCst), 1);
    assert_eq!(conflicts.load(Ordering::SeqCst), 7);
}

#[test]
fn concurrent_upserts_of_fresh_id_report_one_creation() {
    let service = new_service();
    let id = Uuid::new_v4();
    let created = AtomicUsize::new(0);

    std::thread::scope(|scope| {
        for index in 0..8 {
            let service = &service;
            let created = &created;
            scope.spawn(move || {
                let payload = breakfast_at(id, &format!("Racer {index}"), &[]);
                if service.upsert(payload).unwrap().was_created {
                    created.fetch_add(1, Ordering::SeqCst);
                }
            });
        }
    });

    assert_eq!(created.load(Ordering::SeqCst), 1);
    assert_eq!(service.repository().len(), 1);
}
