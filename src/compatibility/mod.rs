/// Compatibility domain: categories, selections, list items and check results
///
/// Pure logic with no I/O. Policies hold the classification and resolution
/// rules; services interpret raw server payloads.
pub mod domain;
pub mod policies;
pub mod services;
