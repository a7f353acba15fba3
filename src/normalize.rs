//! Part-number normalization
//!
//! A prefix-rewrite heuristic reconciling two historical part-numbering
//! schemes. Labels printed under the newer scheme carry a leading `P` (or a
//! doubled `PP` from re-labelled stock) that the lookup table does not store.

/// Normalize a raw scanned/typed part number into its canonical lookup key.
///
/// Rules, evaluated in order, first match wins:
/// 1. `PP...` → drop the first character (`PP123` → `P123`)
/// 2. `P4...` → drop the leading `P` (`P4123` → `4123`)
/// 3. `P0...` → unchanged
/// 4. anything else → unchanged
///
/// Total function; never fails. Rules 3 and 4 are deliberately kept as
/// separate arms: the `'0'` case is expected to diverge once the harmonized
/// numbering rollout reaches that range.
pub fn normalize(raw: &str) -> String {
    match raw.as_bytes() {
        [b'P', b'P', ..] => raw[1..].to_string(),
        [b'P', second, ..] => match *second {
            b'4' => raw[1..].to_string(),
            b'0' => raw.to_string(),
            _ => raw.to_string(),
        },
        _ => raw.to_string(),
    }
}
