//! Macros for declaring named delete-by-query instances.
//!
//! This module provides a simple macro-based approach to declare process-wide,
//! isolated [`DeleteByQuerySupport`](crate::DeleteByQuerySupport) instances.

/// Declares a process-wide, isolated delete-by-query instance with a single macro invocation.
///
/// The macro generates a module containing:
/// - A lazily created `DeleteByQuerySupport` static (hidden)
/// - Free functions delegating to it
///
/// Each declared instance has its own tables, build locks and trace callback.
///
/// # Examples
///
/// ```rust
/// use delete_by_query::{define_delete_by_query, QueryKind, SingularTermDeletionQuery};
///
/// define_delete_by_query!(backend);
///
/// let mapper = backend::get_mapper(QueryKind::SingularTerm).unwrap();
/// assert_eq!(mapper.kind(), QueryKind::SingularTerm);
///
/// assert!(backend::is_supported::<SingularTermDeletionQuery>());
/// assert!(!backend::is_supported::<u64>());
/// ```
///
/// # Multiple Instances
///
/// ```rust
/// use delete_by_query::{define_delete_by_query, QueryKind};
///
/// define_delete_by_query!(primary);
/// define_delete_by_query!(replica);
///
/// primary::get_mapper(QueryKind::SingularTerm).unwrap();
///
/// // Building one instance does not build the other
/// assert!(primary::support().mappers().is_built());
/// assert!(!replica::support().mappers().is_built());
/// ```
#[macro_export]
macro_rules! define_delete_by_query {
    ($name:ident) => {
        pub mod $name {
            use std::sync::{Arc, LazyLock};

            // Storage for the instance (module-private)
            static SUPPORT: LazyLock<$crate::DeleteByQuerySupport> =
                LazyLock::new($crate::DeleteByQuerySupport::new);

            /// The instance behind this module's free functions.
            pub fn support() -> &'static $crate::DeleteByQuerySupport {
                &SUPPORT
            }

            /// Returns the mapper for `kind`.
            pub fn get_mapper(
                kind: $crate::QueryKind,
            ) -> $crate::Result<Arc<dyn $crate::DeletionQueryMapper>> {
                SUPPORT.mapper(kind)
            }

            /// Returns the mapper registered under `key`.
            pub fn mapper_for_key(
                key: usize,
            ) -> $crate::Result<Arc<dyn $crate::DeletionQueryMapper>> {
                SUPPORT.mapper_for_key(key)
            }

            /// Whether `T` is a registered deletion query variant.
            pub fn is_supported<T: ?Sized + 'static>() -> bool {
                SUPPORT.is_supported::<T>()
            }

            /// Set a tracing callback for this instance.
            pub fn set_trace_callback(
                callback: impl Fn(&$crate::RegistryEvent) + Send + Sync + 'static,
            ) {
                SUPPORT.set_trace_callback(callback)
            }

            /// Clear the tracing callback.
            pub fn clear_trace_callback() {
                SUPPORT.clear_trace_callback()
            }
        }
    };
}
