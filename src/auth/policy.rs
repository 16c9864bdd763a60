use crate::model::role;

/// What a path requires before a handler may run.
#[derive(Debug, Clone, PartialEq)]
pub enum Access {
    Public,
    Authenticated,
    Role(&'static str),
}

#[derive(Debug, Clone)]
enum Pattern {
    Exact(&'static str),
    /// Segment-aware prefix: "/api/employee" matches "/api/employee" and
    /// "/api/employee/profile" but NOT "/api/employees".
    Prefix(&'static str),
}

impl Pattern {
    fn matches(&self, path: &str) -> bool {
        match self {
            Pattern::Exact(p) => path == *p,
            Pattern::Prefix(prefix) => match path.strip_prefix(prefix) {
                Some(rest) => rest.is_empty() || rest.starts_with('/'),
                None => false,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Pattern,
    access: Access,
}

/// Ordered access table, first match wins. Built once at startup and handed
/// to the enforcement middleware through app data.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    rules: Vec<Rule>,
    fallback: Access,
}

#[derive(Debug, PartialEq)]
pub enum Decision {
    Allow,
    Unauthenticated,
    Forbidden { required: &'static str },
}

impl AccessPolicy {
    /// The production table. Role-gated area prefixes come first, then the
    /// public auth surface, then every resource root spelled out explicitly
    /// so nothing is reachable through an accidental fall-through.
    pub fn standard() -> Self {
        let rules = vec![
            Rule::prefix("/api/admin", Access::Role("ADMIN")),
            Rule::prefix("/api/employee", Access::Role("EMPLOYEE")),
            Rule::prefix("/api/auth", Access::Public),
            Rule::prefix("/auth", Access::Public),
            Rule::exact("/", Access::Public),
            Rule::prefix("/swagger-ui", Access::Public),
            Rule::prefix("/api-doc", Access::Public),
            Rule::prefix("/api/admins", Access::Authenticated),
            Rule::prefix("/api/employees", Access::Authenticated),
            Rule::prefix("/api/departments", Access::Authenticated),
            Rule::prefix("/api/events", Access::Authenticated),
            Rule::prefix("/api/leaves", Access::Authenticated),
            Rule::prefix("/api/salaries", Access::Authenticated),
            Rule::prefix("/api/chatbot", Access::Authenticated),
        ];

        Self {
            rules,
            fallback: Access::Authenticated,
        }
    }

    pub fn required_access(&self, path: &str) -> &Access {
        self.rules
            .iter()
            .find(|rule| rule.pattern.matches(path))
            .map(|rule| &rule.access)
            .unwrap_or(&self.fallback)
    }

    /// Pure allow/deny decision for a path and an (optional) caller role.
    pub fn decide(&self, path: &str, caller_role: Option<&str>) -> Decision {
        match self.required_access(path) {
            Access::Public => Decision::Allow,
            Access::Authenticated => match caller_role {
                Some(_) => Decision::Allow,
                None => Decision::Unauthenticated,
            },
            Access::Role(required) => match caller_role {
                None => Decision::Unauthenticated,
                Some(r) if role::satisfies(r, required) => Decision::Allow,
                Some(_) => Decision::Forbidden { required },
            },
        }
    }
}

impl Rule {
    fn exact(path: &'static str, access: Access) -> Self {
        Self {
            pattern: Pattern::Exact(path),
            access,
        }
    }

    fn prefix(path: &'static str, access: Access) -> Self {
        Self {
            pattern: Pattern::Prefix(path),
            access,
        }
    }
}
