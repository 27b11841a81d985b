//! # Delete By Query
//!
//! Translation of deletion queries into engine-native queries, and into a flat string
//! form for persistence or transport.
//!
//! Each deletion query variant has a [`QueryKind`] with a small dense key, and one
//! [`DeletionQueryMapper`] that understands it. The registries mapping kinds to
//! mappers, and variant types to "supported", are built lazily on first use, exactly
//! once even under concurrent first access, and are read-only afterwards.
//!
//! ## Quick Start
//!
//! ```rust
//! use delete_by_query::{get_mapper, is_supported, QueryKind, SingularTermDeletionQuery};
//!
//! let query = SingularTermDeletionQuery::new("email", "peter@mailinator.com").into();
//!
//! let mapper = get_mapper(QueryKind::SingularTerm).unwrap();
//! let engine_query = mapper.to_engine_query(&query).unwrap();
//! assert_eq!(engine_query.to_string(), "email:peter@mailinator.com");
//!
//! let parts = mapper.to_string_array(&query).unwrap();
//! assert_eq!(mapper.from_string_array(&parts).unwrap(), query);
//!
//! assert!(is_supported::<SingularTermDeletionQuery>());
//! ```
//!
//! ## Features
//!
//! - **Lazy**: tables are built on first use, never before
//! - **Thread-safe**: concurrent first access builds once; later reads take no lock
//! - **Retrying**: a failed build publishes nothing and is retried on next access
//! - **Isolated**: [`DeleteByQuerySupport`] instances and [`define_delete_by_query!`]
//!   modules never share state
//! - **Tracing support**: optional callback for registry events, plus `tracing` logs
//!
//! ## Main Functions
//!
//! - [`get_mapper`] - Mapper for a query kind, from the process-wide instance
//! - [`mapper_for_key`] - Mapper for a raw query kind key
//! - [`is_supported`] - Whether a type is a known deletion query variant
//! - [`set_trace_callback`] - Set up tracing for registry operations

mod engine;
mod lazy_table;
mod macros;
mod mapper;
mod query;
mod registry;
mod registry_error;
mod registry_event;

// Re-export the main public API
pub use engine::{EngineQuery, NumericValue};
pub use lazy_table::LazyTable;
pub use mapper::{DeletionQueryMapper, SingularTermDeletionQueryMapper};
pub use query::{
    DeletionQuery, QueryKind, QueryVariant, SingularTermDeletionQuery, TermValue, ValueType,
};
pub use registry::{
    builtin_mappers, builtin_supported_types, clear_trace_callback, default_support, get_mapper,
    is_supported, mapper_for_key, set_trace_callback, DeleteByQuerySupport, MapperRegistrations,
    MapperRegistry, MapperTable, SupportedType, SupportedTypeRegistrations,
    SupportedTypesRegistry, TraceCallback,
};
pub use registry_error::{DeleteByQueryError, Result};
pub use registry_event::RegistryEvent;
