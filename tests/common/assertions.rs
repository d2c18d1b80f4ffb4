//! Domain-specific assertion macros for eos harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages naming the records
//! involved rather than dumping whole structs.

/// Assert that a filter result holds exactly the given ids, in order.
///
/// ```rust
/// assert_ids!(filter_records(&records, &criteria), ["91150001", "91150005"]);
/// ```
#[macro_export]
macro_rules! assert_ids {
    ($result:expr, [$($id:expr),* $(,)?]) => {{
        let actual: Vec<String> = $result.iter().map(|e| e.id.to_string()).collect();
        let expected: Vec<String> = vec![$($id.to_string()),*];
        pretty_assertions::assert_eq!(actual, expected, "filter result ids differ");
    }};
    ($result:expr, $ids:expr) => {{
        let actual: Vec<String> = $result.iter().map(|e| e.id.to_string()).collect();
        let expected: Vec<String> = $ids.iter().map(|id| id.to_string()).collect();
        pretty_assertions::assert_eq!(actual, expected, "filter result ids differ");
    }};
}

/// Assert that `sub` is an order-preserving subsequence of `full` (both by id).
#[macro_export]
macro_rules! assert_subsequence {
    ($sub:expr, $full:expr) => {{
        let sub: Vec<String> = $sub.iter().map(|e| e.id.to_string()).collect();
        let full: Vec<String> = $full.iter().map(|e| e.id.to_string()).collect();
        let mut it = full.iter();
        for id in &sub {
            assert!(
                it.any(|f| f == id),
                "assert_subsequence! failed: {:?} missing or out of order.\n  sub:  {:?}\n  full: {:?}",
                id,
                sub,
                full
            );
        }
    }};
}
