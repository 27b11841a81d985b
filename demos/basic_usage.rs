//! Basic usage example for delete-by-query.
//!
//! Demonstrates:
//! - Looking up the mapper for a query kind
//! - Translating a deletion query into an engine query
//! - Encoding a query into its string-array form and back
//! - Checking whether a type is a supported deletion query variant
//!
//! Run with: `cargo run --example basic_usage`

use delete_by_query::{
    get_mapper, is_supported, set_trace_callback, DeletionQuery, QueryKind,
    SingularTermDeletionQuery,
};

fn main() -> delete_by_query::Result<()> {
    println!("=== delete-by-query: Basic Usage ===\n");

    set_trace_callback(|event| println!("   [trace] {event}"));

    // -------------------------------------------------------------------------
    // 1. Look up a mapper (first call builds the table)
    // -------------------------------------------------------------------------
    println!("1. Looking up the SingularTerm mapper...");

    let mapper = get_mapper(QueryKind::SingularTerm)?;

    println!("   Found mapper for {}", mapper.kind());

    // -------------------------------------------------------------------------
    // 2. Translate deletion queries
    // -------------------------------------------------------------------------
    println!("\n2. Translating deletion queries...");

    let by_email: DeletionQuery =
        SingularTermDeletionQuery::new("email", "peter@mailinator.com").into();
    let by_age: DeletionQuery = SingularTermDeletionQuery::new("age", 41).into();

    for query in [&by_email, &by_age] {
        println!("   {query}  =>  {}", mapper.to_engine_query(query)?);
    }

    // -------------------------------------------------------------------------
    // 3. Encode and decode
    // -------------------------------------------------------------------------
    println!("\n3. Encoding into the string-array form...");

    let parts = mapper.to_string_array(&by_age)?;
    println!("   key {} => {:?}", by_age.query_key(), parts);

    let decoded = get_mapper(QueryKind::SingularTerm)?.from_string_array(&parts)?;
    println!("   decoded: {decoded}");
    assert_eq!(decoded, by_age);

    // -------------------------------------------------------------------------
    // 4. Supported types
    // -------------------------------------------------------------------------
    println!("\n4. Checking supported types...");

    println!(
        "   SingularTermDeletionQuery supported: {}",
        is_supported::<SingularTermDeletionQuery>()
    );
    println!("   String supported: {}", is_supported::<String>());

    println!("\n=== Done ===");
    Ok(())
}
