//! Parameter names, raw values and the map that pairs them

use indexmap::IndexMap;

/// Opaque parameter identifier, compared by exact string equality
pub type ParameterName = String;

/// Raw reading as it appeared in the source text (`23.5`, `-4`, `12/34`)
pub type RawValue = String;

/// Parameter name to raw value.
///
/// Keys keep the position of their first insertion; re-inserting a key
/// replaces only its value.
pub type ParameterMap = IndexMap<ParameterName, RawValue>;
