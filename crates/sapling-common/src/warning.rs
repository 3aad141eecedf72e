//! Parser warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times
//! when a large document repeats the same oddity (for example the same
//! duplicate attribute on every row of a table).

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about a recoverable oddity in the input (prints once per unique message)
///
/// Returns true if the warning was printed, false if it was a repeat.
/// Callers should pass a fixed message per kind of oddity, not document
/// content, so the set of remembered warnings stays small.
///
/// # Example
/// ```ignore
/// let _ = warn_once("HTML Parser", "duplicate attribute ignored");
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        let line = format!("[Sapling {component}] ⚠ {message}");
        eprintln!("{}", line.yellow());
    }
    should_print
}

/// Clear all recorded warnings (call before parsing an unrelated document)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
