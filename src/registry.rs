//! Lazily built mapper and supported-type registries.
//!
//! Both registries follow the same lifecycle: empty until first use, populated exactly
//! once under a lock private to that registry, then read-only for the rest of the
//! process. Lookups after the first build take no lock.
//!
//! # Examples
//!
//! ```
//! use delete_by_query::{DeleteByQuerySupport, QueryKind, SingularTermDeletionQuery};
//!
//! let support = DeleteByQuerySupport::new();
//!
//! let mapper = support.mapper(QueryKind::SingularTerm).unwrap();
//! assert_eq!(mapper.kind(), QueryKind::SingularTerm);
//!
//! assert!(support.is_supported::<SingularTermDeletionQuery>());
//! assert!(!support.is_supported::<String>());
//! ```

use std::{
    any::TypeId,
    collections::{HashMap, HashSet},
    fmt,
    sync::{Arc, LazyLock},
};

use arc_swap::ArcSwapOption;

use crate::{
    engine::EngineQuery,
    lazy_table::LazyTable,
    mapper::{DeletionQueryMapper, SingularTermDeletionQueryMapper},
    query::{DeletionQuery, QueryKind, QueryVariant, SingularTermDeletionQuery},
    registry_error::{DeleteByQueryError, Result},
    RegistryEvent,
};

// -------------------------------------------------------------------------------------------------
// Tracing callback support
// -------------------------------------------------------------------------------------------------

/// Type alias for the user-supplied tracing callback.
///
/// The callback receives a reference to a `RegistryEvent` every time the registry is
/// interacted with. It must be thread-safe because registries are shared across threads.
pub type TraceCallback = dyn Fn(&RegistryEvent) + Send + Sync + 'static;

/// Holds an optional user-defined tracing callback, shared by the registries of one
/// [`DeleteByQuerySupport`].
///
/// Reads are lock-free, so emitting an event never blocks a warm lookup, even while
/// another thread swaps the callback.
#[derive(Default)]
struct TraceSlot(ArcSwapOption<Box<TraceCallback>>);

impl TraceSlot {
    fn set(&self, callback: Box<TraceCallback>) {
        self.0.store(Some(Arc::new(callback)));
    }

    fn clear(&self) {
        self.0.store(None);
    }

    /// Invokes the callback, if any. The callback runs on its own reference, so it
    /// may be replaced or cleared concurrently.
    fn emit(&self, event: &RegistryEvent) {
        if let Some(callback) = self.0.load_full() {
            callback(event);
        }
    }

    fn is_set(&self) -> bool {
        self.0.load().is_some()
    }
}

impl fmt::Debug for TraceSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraceSlot")
            .field("callback_set", &self.is_set())
            .finish()
    }
}

/// Runs a fallible table build and reports its outcome.
///
/// Events are emitted after the build lock is released, so a callback may call back
/// into the registry.
fn build_traced<T>(
    table: &LazyTable<T>,
    trace: &TraceSlot,
    build: impl FnOnce() -> Result<(T, usize)>,
) -> Result<Arc<T>> {
    let mut built = None;
    let result: Result<Arc<T>> = table.get_or_try_build(|| {
        let (value, entries) = build()?;
        built = Some(entries);
        Ok(value)
    });

    match (&result, built) {
        (Ok(_), Some(entries)) => {
            tracing::debug!(table = table.name(), entries, "registry table built");
            trace.emit(&RegistryEvent::Build {
                table: table.name(),
                entries,
            });
        }
        (Err(err), _) => {
            tracing::warn!(table = table.name(), error = %err, "registry table build failed");
            trace.emit(&RegistryEvent::BuildFailed {
                table: table.name(),
                reason: err.to_string(),
            });
        }
        _ => {}
    }

    result
}

// -------------------------------------------------------------------------------------------------
// Mapper registry
// -------------------------------------------------------------------------------------------------

/// Produces the mappers a [`MapperRegistry`] is built from.
pub type MapperRegistrations = fn() -> Result<Vec<Arc<dyn DeletionQueryMapper>>>;

/// One mapper per known deletion query variant.
///
/// Adding a variant takes one line here and one in [`builtin_supported_types`].
pub fn builtin_mappers() -> Result<Vec<Arc<dyn DeletionQueryMapper>>> {
    let mappers: Vec<Arc<dyn DeletionQueryMapper>> = vec![Arc::new(SingularTermDeletionQueryMapper)];
    Ok(mappers)
}

/// Dense lookup table indexed by [`QueryKind::key`].
pub struct MapperTable {
    slots: Vec<Option<Arc<dyn DeletionQueryMapper>>>,
}

impl MapperTable {
    fn build(mappers: Vec<Arc<dyn DeletionQueryMapper>>) -> Result<Self> {
        let mut by_key: HashMap<usize, Arc<dyn DeletionQueryMapper>> = HashMap::new();
        for mapper in mappers {
            let key = mapper.kind().key();
            if by_key.insert(key, mapper).is_some() {
                return Err(DeleteByQueryError::BuildFailed {
                    table: "mappers",
                    reason: format!("duplicate mapper for key {key}"),
                });
            }
        }

        let len = by_key.keys().max().map_or(0, |max| max + 1);
        let mut slots: Vec<Option<Arc<dyn DeletionQueryMapper>>> = vec![None; len];
        for (key, mapper) in by_key {
            slots[key] = Some(mapper);
        }

        Ok(Self { slots })
    }

    pub fn get(&self, key: usize) -> Option<&Arc<dyn DeletionQueryMapper>> {
        self.slots.get(key).and_then(Option::as_ref)
    }

    /// Number of registered mappers.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Maps query kind keys to their singleton [`DeletionQueryMapper`].
pub struct MapperRegistry {
    table: LazyTable<MapperTable>,
    registrations: MapperRegistrations,
    trace: Arc<TraceSlot>,
}

impl MapperRegistry {
    /// A registry holding the built-in mappers.
    pub fn new() -> Self {
        Self::with_registrations(builtin_mappers)
    }

    /// A registry built from `registrations` on first use.
    pub fn with_registrations(registrations: MapperRegistrations) -> Self {
        Self::with_trace(registrations, Arc::default())
    }

    fn with_trace(registrations: MapperRegistrations, trace: Arc<TraceSlot>) -> Self {
        Self {
            table: LazyTable::new("mappers"),
            registrations,
            trace,
        }
    }

    fn table(&self) -> Result<Arc<MapperTable>> {
        build_traced(&self.table, &self.trace, || {
            let table = MapperTable::build((self.registrations)()?)?;
            let entries = table.len();
            Ok((table, entries))
        })
    }

    /// Returns the mapper registered under `key`.
    ///
    /// # Errors
    ///
    /// - `UnsupportedQueryKind` if no mapper is registered under `key`
    /// - `BuildFailed` if the table could not be built; the next call retries
    pub fn mapper_for_key(&self, key: usize) -> Result<Arc<dyn DeletionQueryMapper>> {
        let table = self.table()?;
        let mapper = table.get(key).cloned();

        self.trace.emit(&RegistryEvent::Lookup {
            key,
            found: mapper.is_some(),
        });

        mapper.ok_or(DeleteByQueryError::UnsupportedQueryKind { key })
    }

    /// Returns the mapper for `kind`.
    pub fn mapper(&self, kind: QueryKind) -> Result<Arc<dyn DeletionQueryMapper>> {
        self.mapper_for_key(kind.key())
    }

    pub fn is_built(&self) -> bool {
        self.table.is_built()
    }

    /// Number of build attempts so far.
    pub fn build_count(&self) -> usize {
        self.table.build_count()
    }
}

impl Default for MapperRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MapperRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapperRegistry")
            .field("table", &self.table)
            .finish()
    }
}

// -------------------------------------------------------------------------------------------------
// Supported-types registry
// -------------------------------------------------------------------------------------------------

/// Type tag of a deletion query variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SupportedType {
    pub kind: QueryKind,
    pub type_id: TypeId,
    pub type_name: &'static str,
}

impl SupportedType {
    pub fn of<V: QueryVariant>() -> Self {
        Self {
            kind: V::KIND,
            type_id: TypeId::of::<V>(),
            type_name: std::any::type_name::<V>(),
        }
    }
}

/// Produces the type tags a [`SupportedTypesRegistry`] is built from.
pub type SupportedTypeRegistrations = fn() -> Result<Vec<SupportedType>>;

/// One type tag per known deletion query variant.
pub fn builtin_supported_types() -> Result<Vec<SupportedType>> {
    Ok(vec![SupportedType::of::<SingularTermDeletionQuery>()])
}

/// Answers whether a concrete type is a known deletion query variant.
pub struct SupportedTypesRegistry {
    table: LazyTable<HashSet<TypeId>>,
    registrations: SupportedTypeRegistrations,
    trace: Arc<TraceSlot>,
}

impl SupportedTypesRegistry {
    pub fn new() -> Self {
        Self::with_registrations(builtin_supported_types)
    }

    pub fn with_registrations(registrations: SupportedTypeRegistrations) -> Self {
        Self::with_trace(registrations, Arc::default())
    }

    fn with_trace(registrations: SupportedTypeRegistrations, trace: Arc<TraceSlot>) -> Self {
        Self {
            table: LazyTable::new("supported_types"),
            registrations,
            trace,
        }
    }

    /// Snapshot of the supported type ids.
    ///
    /// # Errors
    ///
    /// - `BuildFailed` if the set could not be built; the next call retries
    pub fn supported_types(&self) -> Result<Arc<HashSet<TypeId>>> {
        build_traced(&self.table, &self.trace, || {
            let mut by_key: HashMap<usize, TypeId> = HashMap::new();
            for ty in (self.registrations)()? {
                let key = ty.kind.key();
                if by_key.insert(key, ty.type_id).is_some() {
                    return Err(DeleteByQueryError::BuildFailed {
                        table: "supported_types",
                        reason: format!("duplicate supported type for key {key}"),
                    });
                }
            }
            let types: HashSet<TypeId> = by_key.into_values().collect();
            let entries = types.len();
            Ok((types, entries))
        })
    }

    /// Whether `T` is a registered deletion query variant.
    ///
    /// Never fails: if the set cannot be built, the answer is `false`.
    pub fn is_supported<T: ?Sized + 'static>(&self) -> bool {
        let found = self
            .supported_types()
            .map(|types| types.contains(&TypeId::of::<T>()))
            .unwrap_or(false);

        self.trace.emit(&RegistryEvent::Supported {
            type_name: std::any::type_name::<T>(),
            found,
        });

        found
    }

    pub fn is_built(&self) -> bool {
        self.table.is_built()
    }

    pub fn build_count(&self) -> usize {
        self.table.build_count()
    }
}

impl Default for SupportedTypesRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SupportedTypesRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupportedTypesRegistry")
            .field("table", &self.table)
            .finish()
    }
}

// -------------------------------------------------------------------------------------------------
// Combined context
// -------------------------------------------------------------------------------------------------

/// Delete-by-query support for one index backend.
///
/// Owns a [`MapperRegistry`] and a [`SupportedTypesRegistry`], each with its own build
/// lock, and an optional trace callback shared by both.
#[derive(Debug)]
pub struct DeleteByQuerySupport {
    mappers: MapperRegistry,
    supported: SupportedTypesRegistry,
    trace: Arc<TraceSlot>,
}

impl DeleteByQuerySupport {
    pub fn new() -> Self {
        Self::with_registrations(builtin_mappers, builtin_supported_types)
    }

    pub fn with_registrations(
        mappers: MapperRegistrations,
        supported: SupportedTypeRegistrations,
    ) -> Self {
        let trace: Arc<TraceSlot> = Arc::default();
        Self {
            mappers: MapperRegistry::with_trace(mappers, trace.clone()),
            supported: SupportedTypesRegistry::with_trace(supported, trace.clone()),
            trace,
        }
    }

    pub fn mappers(&self) -> &MapperRegistry {
        &self.mappers
    }

    pub fn supported_types(&self) -> &SupportedTypesRegistry {
        &self.supported
    }

    /// See [`MapperRegistry::mapper`].
    pub fn mapper(&self, kind: QueryKind) -> Result<Arc<dyn DeletionQueryMapper>> {
        self.mappers.mapper(kind)
    }

    /// See [`MapperRegistry::mapper_for_key`].
    pub fn mapper_for_key(&self, key: usize) -> Result<Arc<dyn DeletionQueryMapper>> {
        self.mappers.mapper_for_key(key)
    }

    /// See [`SupportedTypesRegistry::is_supported`].
    pub fn is_supported<T: ?Sized + 'static>(&self) -> bool {
        self.supported.is_supported::<T>()
    }

    /// Translates `query` with the mapper registered for its kind.
    pub fn to_engine_query(&self, query: &DeletionQuery) -> Result<EngineQuery> {
        self.mapper(query.kind())?.to_engine_query(query)
    }

    /// Encodes `query` with the mapper registered for its kind.
    ///
    /// Pair the result with [`DeletionQuery::query_key`] to decode it again.
    pub fn to_string_array(&self, query: &DeletionQuery) -> Result<Vec<String>> {
        self.mapper(query.kind())?.to_string_array(query)
    }

    /// Decodes a query previously encoded under `key`.
    pub fn from_string_array(&self, key: usize, parts: &[String]) -> Result<DeletionQuery> {
        self.mapper_for_key(key)?.from_string_array(parts)
    }

    /// Set a tracing callback for registry operations.
    ///
    /// The callback is invoked for every build, lookup and supported-type check.
    /// It runs without any registry lock held.
    pub fn set_trace_callback(&self, callback: impl Fn(&RegistryEvent) + Send + Sync + 'static) {
        self.trace.set(Box::new(callback));
    }

    /// Clear the tracing callback.
    pub fn clear_trace_callback(&self) {
        self.trace.clear();
    }
}

impl Default for DeleteByQuerySupport {
    fn default() -> Self {
        Self::new()
    }
}

// -------------------------------------------------------------------------------------------------
// Process-wide default
// -------------------------------------------------------------------------------------------------

static DEFAULT_SUPPORT: LazyLock<DeleteByQuerySupport> = LazyLock::new(DeleteByQuerySupport::new);

/// The process-wide [`DeleteByQuerySupport`] with the built-in variants.
pub fn default_support() -> &'static DeleteByQuerySupport {
    &DEFAULT_SUPPORT
}

/// Returns the process-wide mapper for `kind`.
///
/// # Examples
///
/// ```
/// use delete_by_query::{get_mapper, QueryKind, SingularTermDeletionQuery};
///
/// let mapper = get_mapper(QueryKind::SingularTerm).unwrap();
/// let query = SingularTermDeletionQuery::new("name", "Peter").into();
/// assert_eq!(mapper.to_engine_query(&query).unwrap().to_string(), "name:Peter");
/// ```
pub fn get_mapper(kind: QueryKind) -> Result<Arc<dyn DeletionQueryMapper>> {
    DEFAULT_SUPPORT.mapper(kind)
}

/// Returns the process-wide mapper registered under `key`.
///
/// # Examples
///
/// ```
/// use delete_by_query::{mapper_for_key, DeleteByQueryError};
///
/// assert!(mapper_for_key(0).is_ok());
/// assert_eq!(
///     mapper_for_key(1).err(),
///     Some(DeleteByQueryError::UnsupportedQueryKind { key: 1 })
/// );
/// ```
pub fn mapper_for_key(key: usize) -> Result<Arc<dyn DeletionQueryMapper>> {
    DEFAULT_SUPPORT.mapper_for_key(key)
}

/// Whether `T` is a deletion query variant known to the process-wide registry.
pub fn is_supported<T: ?Sized + 'static>() -> bool {
    DEFAULT_SUPPORT.is_supported::<T>()
}

/// Sets a tracing callback on the process-wide registries.
///
/// # Example
/// ```rust
/// use delete_by_query::{clear_trace_callback, set_trace_callback};
///
/// set_trace_callback(|event| println!("[delete-by-query] {}", event));
/// clear_trace_callback();
/// ```
pub fn set_trace_callback(callback: impl Fn(&RegistryEvent) + Send + Sync + 'static) {
    DEFAULT_SUPPORT.set_trace_callback(callback);
}

/// Clears the tracing callback of the process-wide registries.
pub fn clear_trace_callback() {
    DEFAULT_SUPPORT.clear_trace_callback();
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::thread;

    fn no_mappers() -> Result<Vec<Arc<dyn DeletionQueryMapper>>> {
        Ok(Vec::new())
    }

    fn duplicate_mappers() -> Result<Vec<Arc<dyn DeletionQueryMapper>>> {
        let mappers: Vec<Arc<dyn DeletionQueryMapper>> = vec![
            Arc::new(SingularTermDeletionQueryMapper),
            Arc::new(SingularTermDeletionQueryMapper),
        ];
        Ok(mappers)
    }

    static FLAKY_CALLS: AtomicUsize = AtomicUsize::new(0);

    fn flaky_mappers() -> Result<Vec<Arc<dyn DeletionQueryMapper>>> {
        if FLAKY_CALLS.fetch_add(1, Ordering::SeqCst) == 0 {
            return Err(DeleteByQueryError::BuildFailed {
                table: "mappers",
                reason: "mapper construction failed".to_string(),
            });
        }
        builtin_mappers()
    }

    fn failing_types() -> Result<Vec<SupportedType>> {
        Err(DeleteByQueryError::BuildFailed {
            table: "supported_types",
            reason: "unavailable".to_string(),
        })
    }

    fn duplicate_types() -> Result<Vec<SupportedType>> {
        Ok(vec![
            SupportedType::of::<SingularTermDeletionQuery>(),
            SupportedType {
                kind: QueryKind::SingularTerm,
                type_id: TypeId::of::<u8>(),
                type_name: "u8",
            },
        ])
    }

    #[test]
    fn test_mapper_table_is_dense() {
        let table = MapperTable::build(builtin_mappers().unwrap()).unwrap();
        assert_eq!(table.len(), QueryKind::ALL.len());
        for kind in QueryKind::ALL {
            assert_eq!(table.get(kind.key()).unwrap().kind(), *kind);
        }
        assert!(table.get(QueryKind::ALL.len()).is_none());
    }

    #[test]
    fn test_empty_registrations() {
        let registry = MapperRegistry::with_registrations(no_mappers);
        assert_eq!(
            registry.mapper(QueryKind::SingularTerm).err(),
            Some(DeleteByQueryError::UnsupportedQueryKind { key: 0 })
        );
        assert!(registry.is_built());
    }

    #[test]
    fn test_duplicate_registration_fails_build() {
        let registry = MapperRegistry::with_registrations(duplicate_mappers);
        let err = registry.mapper_for_key(0).err().unwrap();
        assert_eq!(
            err,
            DeleteByQueryError::BuildFailed {
                table: "mappers",
                reason: "duplicate mapper for key 0".to_string(),
            }
        );
        assert!(!registry.is_built());
    }

    #[test]
    fn test_failed_build_retried_on_next_access() {
        let registry = MapperRegistry::with_registrations(flaky_mappers);

        assert!(matches!(
            registry.mapper(QueryKind::SingularTerm),
            Err(DeleteByQueryError::BuildFailed { .. })
        ));
        assert!(!registry.is_built());

        assert!(registry.mapper(QueryKind::SingularTerm).is_ok());
        assert!(registry.is_built());
        assert_eq!(registry.build_count(), 2);
    }

    #[test]
    fn test_is_supported_false_when_build_fails() {
        let registry = SupportedTypesRegistry::with_registrations(failing_types);
        assert!(!registry.is_supported::<SingularTermDeletionQuery>());
        assert!(!registry.is_supported::<SingularTermDeletionQuery>());
        assert!(!registry.is_built());
        assert_eq!(registry.build_count(), 2);
    }

    #[test]
    fn test_supported_types_snapshot() {
        let registry = SupportedTypesRegistry::new();
        let types = registry.supported_types().unwrap();
        assert_eq!(types.len(), 1);
        assert!(types.contains(&TypeId::of::<SingularTermDeletionQuery>()));
    }

    #[test]
    fn test_registries_build_independently() {
        let support = DeleteByQuerySupport::new();

        assert!(support.is_supported::<SingularTermDeletionQuery>());
        assert!(support.supported_types().is_built());
        assert!(!support.mappers().is_built());

        support.mapper(QueryKind::SingularTerm).unwrap();
        assert!(support.mappers().is_built());
    }

    #[test]
    fn test_trace_events() {
        let support = DeleteByQuerySupport::new();
        let events = Arc::new(Mutex::new(Vec::new()));
        let events_clone = events.clone();

        support.set_trace_callback(move |e| {
            events_clone.lock().unwrap().push(e.to_string());
        });

        let _ = support.mapper_for_key(0);
        let _ = support.mapper_for_key(4);
        let _ = support.is_supported::<u8>();

        let captured = events.lock().unwrap();
        assert_eq!(
            *captured,
            vec![
                "build { table: mappers, entries: 1 }".to_string(),
                "lookup { key: 0, found: true }".to_string(),
                "lookup { key: 4, found: false }".to_string(),
                "build { table: supported_types, entries: 1 }".to_string(),
                "supported { type_name: u8, found: false }".to_string(),
            ]
        );

        drop(captured);
        support.clear_trace_callback();
    }

    #[test]
    fn test_callback_may_reenter_registry() {
        let support = Arc::new(DeleteByQuerySupport::new());
        let inner = Arc::downgrade(&support);
        let lookups = Arc::new(AtomicUsize::new(0));
        let lookups_clone = lookups.clone();

        support.set_trace_callback(move |e| {
            if let RegistryEvent::Build { table: "mappers", .. } = e {
                if let Some(support) = inner.upgrade() {
                    assert!(support.mappers().is_built());
                    lookups_clone.fetch_add(1, Ordering::SeqCst);
                }
            }
        });

        support.mapper(QueryKind::SingularTerm).unwrap();
        assert_eq!(lookups.load(Ordering::SeqCst), 1);
        support.clear_trace_callback();
    }

    #[test]
    fn test_duplicate_supported_type_fails_build() {
        let registry = SupportedTypesRegistry::with_registrations(duplicate_types);

        assert_eq!(
            registry.supported_types().err(),
            Some(DeleteByQueryError::BuildFailed {
                table: "supported_types",
                reason: "duplicate supported type for key 0".to_string(),
            })
        );
        assert!(!registry.is_supported::<SingularTermDeletionQuery>());
        assert!(!registry.is_supported::<u8>());
        assert!(!registry.is_built());
    }

    #[test]
    fn test_warm_lookups_while_callback_changes() {
        const READERS: usize = 8;
        const ROUNDS: usize = 2_000;

        let support = Arc::new(DeleteByQuerySupport::new());
        support.mapper(QueryKind::SingularTerm).unwrap();
        assert!(support.is_supported::<SingularTermDeletionQuery>());

        let done = Arc::new(AtomicBool::new(false));
        let seen = Arc::new(AtomicUsize::new(0));

        let writer = {
            let support = support.clone();
            let done = done.clone();
            let seen = seen.clone();
            thread::spawn(move || {
                while !done.load(Ordering::Acquire) {
                    let seen = seen.clone();
                    support.set_trace_callback(move |_| {
                        seen.fetch_add(1, Ordering::Relaxed);
                    });
                    support.clear_trace_callback();
                }
            })
        };

        let readers: Vec<_> = (0..READERS)
            .map(|_| {
                let support = support.clone();
                thread::spawn(move || {
                    for _ in 0..ROUNDS {
                        assert!(support.mapper(QueryKind::SingularTerm).is_ok());
                        assert!(support.is_supported::<SingularTermDeletionQuery>());
                    }
                })
            })
            .collect();

        for reader in readers {
            reader.join().unwrap();
        }
        done.store(true, Ordering::Release);
        writer.join().unwrap();

        assert_eq!(support.mappers().build_count(), 1);
        assert_eq!(support.supported_types().build_count(), 1);
    }

    #[test]
    fn test_debug_reports_callback() {
        let support = DeleteByQuerySupport::new();
        assert!(format!("{:?}", support).contains("callback_set: false"));

        support.set_trace_callback(|_| {});
        assert!(format!("{:?}", support).contains("callback_set: true"));

        support.clear_trace_callback();
        assert!(format!("{:?}", support).contains("callback_set: false"));
    }
}
