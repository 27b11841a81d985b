/// Events emitted by the delete-by-query registries.
///
/// These events are passed to the tracing callback set via `set_trace_callback`.
/// The `Clone` derive allows callbacks to store or forward events if needed.
///
/// # Examples
///
/// ```rust
/// use delete_by_query::RegistryEvent;
///
/// let event = RegistryEvent::Build { table: "mappers", entries: 1 };
/// assert_eq!(event.to_string(), "build { table: mappers, entries: 1 }");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryEvent {
    /// A lazily built table was populated and published.
    Build {
        /// The table name (`"mappers"` or `"supported_types"`)
        table: &'static str,
        /// Number of entries the table was built with
        entries: usize,
    },

    /// Building a table failed; it stays unbuilt and will be retried.
    BuildFailed {
        table: &'static str,
        reason: String,
    },

    /// A mapper was requested by query kind key.
    Lookup {
        /// The requested key
        key: usize,
        /// Whether a mapper is registered under the key
        found: bool,
    },

    /// A supported-type check was performed.
    Supported {
        /// The type name that was checked
        type_name: &'static str,
        /// Whether the type is a registered deletion query variant
        found: bool,
    },
}

impl std::fmt::Display for RegistryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryEvent::Build { table, entries } => {
                write!(f, "build {{ table: {}, entries: {} }}", table, entries)
            }
            RegistryEvent::BuildFailed { table, reason } => {
                write!(f, "build failed {{ table: {}, reason: {} }}", table, reason)
            }
            RegistryEvent::Lookup { key, found } => {
                write!(f, "lookup {{ key: {}, found: {} }}", key, found)
            }
            RegistryEvent::Supported { type_name, found } => {
                write!(
                    f,
                    "supported {{ type_name: {}, found: {} }}",
                    type_name, found
                )
            }
        }
    }
}
