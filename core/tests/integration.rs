//! Full CRUD lifecycle and concurrency properties of `TodoService`.
//!
//! # Design
//! Every test builds its own service; there is no shared state between
//! tests. The concurrent tests use plain OS threads to mimic a pool of
//! request workers hitting one shared service.

use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

use todo_core::{Error, TodoId, TodoPayload, TodoService};

#[test]
fn crud_lifecycle() {
    let service = TodoService::new();

    // Step 1: create.
    let created = service
        .create(Some(TodoPayload::new("TaskOne", "My first task")))
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.name, "TaskOne");
    assert_eq!(created.task, "My first task");
    let id = created.id;

    // Step 2: repeated reads return exactly the created record.
    assert_eq!(service.read(id).unwrap(), created);
    assert_eq!(service.read(id).unwrap(), created);

    // Step 3: update, with a body id that must be ignored.
    let mut payload = TodoPayload::new("TaskTwo", "My New task");
    payload.id = Some(id);
    let updated = service.update(id, Some(payload)).unwrap();
    assert_eq!(updated.id, id);
    let fetched = service.read(id).unwrap();
    assert_eq!(fetched.name, "TaskTwo");
    assert_eq!(fetched.task, "My New task");

    // Step 4: list holds the one item.
    assert_eq!(service.list(), vec![fetched]);

    // Step 5: delete, then read and delete again.
    service.delete(id).unwrap();
    assert_eq!(service.read(id), Err(Error::ItemNotFound { id }));
    assert_eq!(service.delete(id), Err(Error::ItemNotFound { id }));
    assert!(service.list().is_empty());

    // Step 6: the deleted id is never handed out again.
    let next = service
        .create(Some(TodoPayload::new("TaskThree", "after delete")))
        .unwrap();
    assert!(next.id > id);
}

#[test]
fn unknown_id_is_not_found_everywhere() {
    let service = TodoService::new();
    let payload = TodoPayload::new("x", "y");

    assert_eq!(service.read(1), Err(Error::ItemNotFound { id: 1 }));
    assert_eq!(
        service.update(1, Some(payload)),
        Err(Error::ItemNotFound { id: 1 })
    );
    assert_eq!(service.delete(1), Err(Error::ItemNotFound { id: 1 }));
    assert!(service.is_empty());
}

#[test]
fn concurrent_creates_are_distinct_and_retrievable() {
    const WORKERS: usize = 16;
    const PER_WORKER: usize = 500;

    let service = Arc::new(TodoService::new());
    let start = Arc::new(Barrier::new(WORKERS));

    let handles: Vec<_> = (0..WORKERS)
        .map(|worker| {
            let service = Arc::clone(&service);
            let start = Arc::clone(&start);
            thread::spawn(move || {
                start.wait();
                (0..PER_WORKER)
                    .map(|n| {
                        let payload = TodoPayload::new(format!("w{worker}"), format!("task {n}"));
                        let item = service.create(Some(payload)).unwrap();
                        (item.id, worker, n)
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    let mut created = Vec::new();
    for handle in handles {
        let batch = handle.join().unwrap();
        // Ids issued to one worker increase in issuance order.
        assert!(batch.windows(2).all(|w| w[0].0 < w[1].0));
        created.extend(batch);
    }

    for (id, worker, n) in &created {
        assert!(ids.insert(*id), "id {id} issued twice");
        let item = service.read(*id).unwrap();
        assert_eq!(item.name, format!("w{worker}"));
        assert_eq!(item.task, format!("task {n}"));
    }
    assert_eq!(service.len(), WORKERS * PER_WORKER);
    assert_eq!(ids.len(), WORKERS * PER_WORKER);
}

#[test]
fn concurrent_mixed_operations_keep_store_consistent() {
    const WORKERS: usize = 8;
    const ROUNDS: usize = 200;

    let service = Arc::new(TodoService::new());
    let handles: Vec<_> = (0..WORKERS)
        .map(|_| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                let mut kept: Vec<TodoId> = Vec::new();
                for round in 0..ROUNDS {
                    let item = service
                        .create(Some(TodoPayload::new("n", "t")))
                        .unwrap();
                    service
                        .update(item.id, Some(TodoPayload::new("n2", format!("t{round}"))))
                        .unwrap();
                    if round % 2 == 0 {
                        service.delete(item.id).unwrap();
                        assert!(service.read(item.id).is_err());
                    } else {
                        kept.push(item.id);
                    }
                }
                kept
            })
        })
        .collect();

    let kept: Vec<TodoId> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();

    assert_eq!(service.len(), kept.len());
    for id in kept {
        assert_eq!(service.read(id).unwrap().name, "n2");
    }
}
