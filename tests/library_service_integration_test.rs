use mini_library::application::library::{
    self, LibraryContext, LibraryError, LibraryPolicy, TextField,
};
use mini_library::domain::{Availability, DomainEvent};
use proptest::prelude::*;

mod common;
use common::*;

// ============================================================================
// add_book
// ============================================================================

#[test]
fn test_add_book_assigns_ids_from_one() {
    let mut ctx = new_library();

    assert_eq!(add(&mut ctx, "Dune", "Herbert", 1965).unwrap(), id(1));
    assert_eq!(add(&mut ctx, "Emma", "Austen", 1815).unwrap(), id(2));
    assert_eq!(add(&mut ctx, "Dune", "Herbert", 1965).unwrap(), id(3));

    let books = library::list_books(&ctx);
    assert_eq!(books.len(), 3);
    assert!(books.iter().all(|b| b.availability == Availability::Available));
}

#[test]
fn test_add_book_beyond_capacity_fails_without_mutation() {
    let mut ctx = library_with_capacity(2);
    add(&mut ctx, "A", "a", 1).unwrap();
    add(&mut ctx, "B", "b", 2).unwrap();

    let result = add(&mut ctx, "C", "c", 3);

    assert_eq!(result, Err(LibraryError::CapacityExceeded { capacity: 2 }));
    assert_eq!(library::list_books(&ctx).len(), 2);
    assert_eq!(library::history(&ctx).len(), 2);
}

#[test]
fn test_add_book_zero_capacity_is_always_full() {
    let mut ctx = library_with_capacity(0);

    assert!(ctx.is_full());
    assert!(add(&mut ctx, "A", "a", 1).is_err());
}

#[test]
fn test_add_book_failed_add_does_not_consume_id() {
    let policy = LibraryPolicy {
        max_author_len: Some(5),
        ..LibraryPolicy::default()
    };
    let mut ctx = LibraryContext::in_memory(policy);

    let result = add(&mut ctx, "Ulysses", "James Joyce", 1922);
    assert_eq!(
        result,
        Err(LibraryError::FieldTooLong {
            field: TextField::Author,
            max: 5
        })
    );

    assert_eq!(add(&mut ctx, "Ulysses", "Joyce", 1922).unwrap(), id(1));
}

#[test]
fn test_collection_grows_only_through_add_book() {
    let mut ctx = library_with_capacity(1);
    let dune = add(&mut ctx, "Dune", "Herbert", 1965).unwrap();

    // 読み取り・状態遷移・失敗した登録では冊数は増えない
    let _ = library::find_first_by_title(&ctx, "");
    borrow(&mut ctx, dune).unwrap();
    give_back(&mut ctx, dune).unwrap();
    assert!(add(&mut ctx, "B", "b", 2).is_err());

    let ids: Vec<_> = library::list_books(&ctx).iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![dune]);
    assert_eq!(ctx.policy().capacity, 1);
    assert!(ctx.is_full());
}

// ============================================================================
// find
// ============================================================================

#[test]
fn test_find_by_id() {
    let mut ctx = new_library();
    add(&mut ctx, "A", "a", 1).unwrap();
    add(&mut ctx, "B", "b", 2).unwrap();

    assert_eq!(library::find_by_id(&ctx, id(2)), Some(1));
    assert_eq!(library::find_by_id(&ctx, id(3)), None);
}

#[test]
fn test_find_first_by_title_is_case_insensitive() {
    let mut ctx = new_library();
    add(&mut ctx, "Huckleberry Finn", "Mark Twain", 1884).unwrap();
    add(&mut ctx, "Tom Sawyer", "Mark Twain", 1876).unwrap();

    let index = library::find_first_by_title(&ctx, "tom").unwrap();
    assert_eq!(library::book_at(&ctx, index).unwrap().title, "Tom Sawyer");
    assert_eq!(library::find_first_by_title(&ctx, "SAWYER"), Some(1));
}

#[test]
fn test_find_first_by_author_returns_first_in_insertion_order() {
    let mut ctx = new_library();
    add(&mut ctx, "Huckleberry Finn", "Mark Twain", 1884).unwrap();
    add(&mut ctx, "Tom Sawyer", "Mark Twain", 1876).unwrap();

    assert_eq!(library::find_first_by_author(&ctx, "twain"), Some(0));
    assert_eq!(library::find_first_by_author(&ctx, "austen"), None);
}

#[test]
fn test_empty_query_matches_first_record() {
    let mut ctx = new_library();
    assert_eq!(library::find_first_by_title(&ctx, ""), None);
    assert_eq!(library::find_first_by_author(&ctx, ""), None);

    add(&mut ctx, "A", "a", 1).unwrap();
    add(&mut ctx, "B", "b", 2).unwrap();

    assert_eq!(library::find_first_by_title(&ctx, ""), Some(0));
    assert_eq!(library::find_first_by_author(&ctx, ""), Some(0));
}

#[test]
fn test_empty_library() {
    let ctx = new_library();

    assert!(library::list_books(&ctx).is_empty());
    assert_eq!(library::find_first_by_title(&ctx, "x"), None);
    assert!(library::book_at(&ctx, 0).is_none());
}

// ============================================================================
// borrow / return
// ============================================================================

#[test]
fn test_dune_lifecycle() {
    let mut ctx = new_library();

    let dune = add(&mut ctx, "Dune", "Herbert", 1965).unwrap();
    assert_eq!(dune, id(1));
    assert_eq!(library::list_books(&ctx).len(), 1);
    assert!(library::list_books(&ctx)[0].is_available());

    borrow(&mut ctx, dune).unwrap();
    assert_eq!(
        library::list_books(&ctx)[0].availability,
        Availability::Borrowed
    );

    assert_eq!(
        borrow(&mut ctx, dune),
        Err(LibraryError::InvalidStateTransition {
            book_id: dune,
            availability: Availability::Borrowed
        })
    );

    give_back(&mut ctx, dune).unwrap();
    assert!(library::list_books(&ctx)[0].is_available());

    assert_eq!(
        give_back(&mut ctx, dune),
        Err(LibraryError::InvalidStateTransition {
            book_id: dune,
            availability: Availability::Available
        })
    );
}

#[test]
fn test_borrow_and_return_unknown_id() {
    let mut ctx = new_library();
    add(&mut ctx, "A", "a", 1).unwrap();

    assert_eq!(borrow(&mut ctx, id(9)), Err(LibraryError::NotFound(id(9))));
    assert_eq!(give_back(&mut ctx, id(9)), Err(LibraryError::NotFound(id(9))));
}

#[test]
fn test_borrow_only_touches_target_book() {
    let mut ctx = new_library();
    add(&mut ctx, "A", "a", 1).unwrap();
    let b = add(&mut ctx, "B", "b", 2).unwrap();
    add(&mut ctx, "C", "c", 3).unwrap();

    borrow(&mut ctx, b).unwrap();

    let states: Vec<_> = library::list_books(&ctx)
        .iter()
        .map(|book| book.availability)
        .collect();
    assert_eq!(
        states,
        vec![
            Availability::Available,
            Availability::Borrowed,
            Availability::Available
        ]
    );
}

// ============================================================================
// history
// ============================================================================

#[test]
fn test_history_records_one_event_per_successful_operation() {
    let mut ctx = new_library();
    let dune = add(&mut ctx, "Dune", "Herbert", 1965).unwrap();
    borrow(&mut ctx, dune).unwrap();
    let _ = borrow(&mut ctx, dune);
    give_back(&mut ctx, dune).unwrap();
    let _ = give_back(&mut ctx, dune);

    let events = library::history(&ctx);
    assert_eq!(events.len(), 3);
    assert!(matches!(&events[0], DomainEvent::BookRegistered(e) if e.title == "Dune"));
    assert!(matches!(&events[1], DomainEvent::BookBorrowed(_)));
    assert!(matches!(&events[2], DomainEvent::BookReturned(_)));
    assert!(events.iter().all(|e| e.book_id() == dune));
}

#[test]
fn test_events_serialize_as_tagged_json() {
    let mut ctx = new_library();
    let dune = add(&mut ctx, "Dune", "Herbert", 1965).unwrap();
    borrow(&mut ctx, dune).unwrap();

    let json = serde_json::to_value(&library::history(&ctx)[1]).unwrap();
    assert_eq!(json["type"], "BookBorrowed");
    assert_eq!(json["book_id"], 1);
}

// ============================================================================
// properties
// ============================================================================

proptest! {
    #[test]
    fn prop_ids_are_unique_and_strictly_increasing(
        titles in proptest::collection::vec(".{0,12}", 1..40)
    ) {
        let mut ctx = new_library();
        let mut last = None;
        for title in &titles {
            let book_id = add(&mut ctx, title, "someone", 2000).unwrap();
            if let Some(prev) = last {
                prop_assert!(book_id > prev);
            }
            last = Some(book_id);
        }
        prop_assert_eq!(library::list_books(&ctx).len(), titles.len());
    }

    #[test]
    fn prop_capacity_is_never_exceeded(capacity in 0usize..10, attempts in 0usize..25) {
        let mut ctx = library_with_capacity(capacity);
        let mut added = 0;
        for i in 0..attempts {
            if add(&mut ctx, &format!("Book {i}"), "x", 1).is_ok() {
                added += 1;
            }
        }
        prop_assert_eq!(added, attempts.min(capacity));
        prop_assert!(library::list_books(&ctx).len() <= capacity);
    }

    #[test]
    fn prop_return_succeeds_only_after_unreturned_borrow(ops in proptest::collection::vec(any::<bool>(), 0..30)) {
        let mut ctx = new_library();
        let book = add(&mut ctx, "Dune", "Herbert", 1965).unwrap();
        let mut borrowed = false;

        // true = borrow, false = return
        for op in ops {
            if op {
                prop_assert_eq!(borrow(&mut ctx, book).is_ok(), !borrowed);
                borrowed = true;
            } else {
                prop_assert_eq!(give_back(&mut ctx, book).is_ok(), borrowed);
                borrowed = false;
            }
        }
    }

    #[test]
    fn prop_search_ignores_case(title in "[a-zA-Z ]{1,20}") {
        let mut ctx = new_library();
        add(&mut ctx, &title, "x", 1).unwrap();

        prop_assert_eq!(library::find_first_by_title(&ctx, &title.to_uppercase()), Some(0));
        prop_assert_eq!(library::find_first_by_title(&ctx, &title.to_lowercase()), Some(0));
    }
}
