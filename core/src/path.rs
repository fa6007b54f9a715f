//! Path lookups into props

use crate::value::Value;
use smallvec::SmallVec;

/// Find the value that `path` addresses within `context`.
///
/// A path is a series of keys separated by `.` or wrapped in `[]`, e.g.
/// `a.b.c` or `a[0].b`. Empty segments are skipped. A path with no
/// separators is a single key lookup.
///
/// This never fails: any segment that cannot be followed makes the whole
/// lookup `Undefined`.
pub fn navigate(context: &Value, path: &str) -> Value {
    if !path.contains(|c: char| c == '.' || c == '[') {
        return context.get(path);
    }

    let segments: SmallVec<[&str; 8]> = path
        .split(|c: char| matches!(c, '.' | '[' | ']'))
        .filter(|segment| !segment.is_empty())
        .collect();

    let mut result = context.clone();
    for segment in segments {
        if result.is_undefined() {
            log::trace!("Path {:?} is undefined before {:?}", path, segment);
            break;
        }

        result = result.get(segment);
    }

    result
}
