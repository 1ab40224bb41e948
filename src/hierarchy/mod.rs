//! Hierarchy flattener.
//!
//! The API returns departments as a flat list in which each record may
//! reference a parent by id. For display, every non-root row shows the name
//! of its ultimate root ancestor; these helpers compute that ancestor from
//! the flat list alone (embedded `children` sequences are ignored).

use std::collections::HashSet;

use crate::models::Department;

/// Resolve the ultimate root ancestor of `record` within `all`.
///
/// Walks `parent_id` references until a record with no parent is reached.
/// Returns `None` when the chain leaves the loaded collection (dangling
/// reference) or revisits an id (cyclic parent chain). Roots have no
/// ancestor to resolve; display code special-cases them instead of calling
/// this.
pub fn find_root_ancestor<'a>(record: &Department, all: &'a [Department]) -> Option<&'a Department> {
    let mut next_id = record.parent_id?;
    let mut visited: HashSet<i64> = HashSet::new();

    loop {
        if !visited.insert(next_id) {
            tracing::warn!(
                department_id = record.id,
                "parent chain contains a cycle, treating as unresolved"
            );
            return None;
        }
        let parent = all.iter().find(|d| d.id == next_id)?;
        match parent.parent_id {
            None => return Some(parent),
            Some(grandparent) => next_id = grandparent,
        }
    }
}

/// Division column text for a table row.
///
/// Roots are their own division and show nothing; children show their root
/// ancestor's name, or a placeholder when no root can be found.
pub fn division_label(record: &Department, all: &[Department]) -> String {
    if record.is_root() {
        return String::new();
    }
    match find_root_ancestor(record, all) {
        Some(root) => root.name.clone(),
        None => "(unknown)".to_string(),
    }
}
