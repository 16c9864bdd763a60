pub const ROLE_PREFIX: &str = "ROLE_";
pub const DEFAULT_ROLE: &str = "ROLE_EMPLOYEE";

/// Registration-time normalization: blank or absent roles become the default
/// employee role, anything else is forced into `ROLE_<UPPERCASE>` form.
/// Already-prefixed roles pass through unchanged.
pub fn normalize(role: Option<&str>) -> String {
    match role.map(str::trim) {
        None | Some("") => DEFAULT_ROLE.to_string(),
        Some(r) if r.starts_with(ROLE_PREFIX) => r.to_string(),
        Some(r) => format!("{}{}", ROLE_PREFIX, r.to_uppercase()),
    }
}

/// `hasRole` semantics: a stored role satisfies a required one when it equals
/// the required name with the `ROLE_` prefix attached.
pub fn satisfies(role: &str, required: &str) -> bool {
    role.strip_prefix(ROLE_PREFIX)
        .is_some_and(|name| name == required)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_absent_roles_default_to_employee() {
        assert_eq!(normalize(None), "ROLE_EMPLOYEE");
        assert_eq!(normalize(Some("")), "ROLE_EMPLOYEE");
        assert_eq!(normalize(Some("   ")), "ROLE_EMPLOYEE");
    }

    #[test]
    fn unprefixed_roles_are_prefixed_and_uppercased() {
        assert_eq!(normalize(Some("manager")), "ROLE_MANAGER");
        assert_eq!(normalize(Some("admin")), "ROLE_ADMIN");
    }

    #[test]
    fn prefixed_roles_pass_through_unchanged() {
        assert_eq!(normalize(Some("ROLE_ADMIN")), "ROLE_ADMIN");
        // already prefixed means no upper-casing either
        assert_eq!(normalize(Some("ROLE_hr")), "ROLE_hr");
    }

    #[test]
    fn satisfies_requires_exact_prefixed_match() {
        assert!(satisfies("ROLE_ADMIN", "ADMIN"));
        assert!(!satisfies("ROLE_ADMIN", "EMPLOYEE"));
        assert!(!satisfies("ADMIN", "ADMIN"));
        assert!(!satisfies("ROLE_ADMINX", "ADMIN"));
    }
}
