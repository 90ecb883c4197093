//! Search targets for the two `useEffect` dependency lists in the Navbar.
//!
//! The patterns are slash-delimited fragments with unbalanced brackets. They
//! are not valid matchers for any substitution engine and are only carried
//! as data. Nothing here rewrites content.

use tracing::trace;

/// One intended search target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Substitution {
    pub label: &'static str,
    pub pattern: &'static str,
}

impl Substitution {
    /// Always false: substitutions are defined but never run against content
    pub fn is_applied(&self) -> bool {
        false
    }

    /// Number of slash-separated fragments in the pattern
    pub fn fragment_count(&self) -> usize {
        self.pattern.split('/').count()
    }
}

const AUTH_EFFECT: &str = r#"}, \[\])/useEffect(() => {/},[isAuthenticated])/useEffect(() => {/},[isAuthenticated])/useEffect(() => {/},[isDropdownOpen))/useEffect(() => {/},[isDropdownOpen))/useEffect(() => {/},[isDropdownOpen])/useEffect(() => {/},[isDropdownOpen])/useEffect(() => {/},[isDropdownOpen])/useEffect(() => {/},[isAuthenticated])/useEffect(() => {/},[isDropdownOpen])/use(() => {/},[isDropdown])/use(() => {)/, [isAuthenticated])"#;

const DROPDOWN_EFFECT: &str = r#"}, \[\])/useEffect(() => {/},[isDropdownOpen))/useEffect(() => {/},[isDropdownOpen])/useEffect(() => {/},[isDropdown])/use(() => {),[isDropdown])/useEffect(() => {/},[isDropdown])/use(() => {),[isDropdown])/use(() => {),[isDropdown])/useEffect => {/},[isDropdown])/use(() => {),[isDropdown])/use(() => {),[isAuthenticated])"#;

/// The two fixed search targets for the Navbar component
pub fn navbar_substitutions() -> [Substitution; 2] {
    let subs = [
        Substitution {
            label: "auth effect dependency list",
            pattern: AUTH_EFFECT,
        },
        Substitution {
            label: "dropdown effect dependency list",
            pattern: DROPDOWN_EFFECT,
        },
    ];

    for sub in &subs {
        trace!(
            "Defined substitution '{}' ({} fragments)",
            sub.label,
            sub.fragment_count()
        );
    }

    subs
}
