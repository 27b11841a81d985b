//! Integration tests for isolation between declared instances.

use delete_by_query::{define_delete_by_query, QueryKind, SingularTermDeletionQuery};
use std::sync::Arc;

#[test]
fn test_instances_build_separately() {
    define_delete_by_query!(indexing);
    define_delete_by_query!(reindexing);

    indexing::get_mapper(QueryKind::SingularTerm).unwrap();

    assert!(indexing::support().mappers().is_built());
    assert!(!reindexing::support().mappers().is_built());
    assert!(!indexing::support().supported_types().is_built());
}

#[test]
fn test_same_kind_different_instances() {
    define_delete_by_query!(node_a);
    define_delete_by_query!(node_b);

    let a = node_a::mapper_for_key(0).unwrap();
    let b = node_b::mapper_for_key(0).unwrap();

    assert_eq!(a.kind(), b.kind());
    assert!(!Arc::ptr_eq(&a, &b));
}

#[test]
fn test_instance_scoping() {
    mod module_a {
        use delete_by_query::define_delete_by_query;
        define_delete_by_query!(scoped);

        pub fn warm() -> usize {
            scoped::get_mapper(delete_by_query::QueryKind::SingularTerm).unwrap();
            scoped::support().mappers().build_count()
        }
    }

    mod module_b {
        use delete_by_query::define_delete_by_query;
        define_delete_by_query!(scoped);

        pub fn builds() -> usize {
            scoped::support().mappers().build_count()
        }
    }

    assert_eq!(module_a::warm(), 1);
    assert_eq!(module_b::builds(), 0);
}

#[test]
fn test_tracing_isolation() {
    define_delete_by_query!(traced_a);
    define_delete_by_query!(traced_b);

    let events = Arc::new(std::sync::Mutex::new(Vec::new()));
    let events_clone = events.clone();

    traced_a::set_trace_callback(move |event| {
        events_clone.lock().unwrap().push(format!("{}", event));
    });

    traced_a::is_supported::<SingularTermDeletionQuery>();
    traced_b::is_supported::<SingularTermDeletionQuery>();

    // Only traced_a should have events
    let captured = events.lock().unwrap();
    assert_eq!(captured.len(), 2);
    assert!(captured[0].contains("build"));
    assert!(captured[1].contains("supported"));
}
