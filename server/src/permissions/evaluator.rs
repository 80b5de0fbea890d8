//! Access evaluation.
//!
//! Pure functions deciding whether a set of granted permission tokens
//! satisfies one or more required tokens. Unknown or malformed tokens never
//! grant access; nothing here can fail.
//!
//! Supported forms:
//! - Exact match: `brand:billing:view` grants `brand:billing:view`
//! - Trailing wildcard: `agency:brands:*` grants any token starting with
//!   `agency:brands:`
//!
//! A bare `*` is not a wildcard.

/// Whether a single granted token satisfies `required`.
#[must_use]
pub fn matches_permission(granted: &str, required: &str) -> bool {
    if granted == required {
        return true;
    }

    // Strip only the `*`, keeping the `:` so `owner:*` cannot match `ownership:x`
    granted
        .strip_suffix('*')
        .filter(|prefix| prefix.ends_with(':'))
        .is_some_and(|prefix| required.starts_with(prefix))
}

/// Whether any token in `granted` satisfies `required`.
///
/// An empty `granted` set never satisfies anything.
#[must_use]
pub fn has_permission<G: AsRef<str>>(granted: &[G], required: &str) -> bool {
    granted
        .iter()
        .any(|g| matches_permission(g.as_ref(), required))
}

/// Whether at least one of `required` is satisfied.
///
/// An empty `required` set yields `false`. Callers that treat "no
/// requirement" as "allowed" must check for that themselves.
#[must_use]
pub fn has_any_permission<G, R>(granted: &[G], required: &[R]) -> bool
where
    G: AsRef<str>,
    R: AsRef<str>,
{
    required
        .iter()
        .any(|r| has_permission(granted, r.as_ref()))
}

/// Whether every token in `required` is satisfied.
///
/// An empty `required` set is vacuously satisfied.
#[must_use]
pub fn has_all_permissions<G, R>(granted: &[G], required: &[R]) -> bool
where
    G: AsRef<str>,
    R: AsRef<str>,
{
    required
        .iter()
        .all(|r| has_permission(granted, r.as_ref()))
}
