use std::fmt;
use std::sync::Arc;

/// The name of a resource managed by a generated action/reducer pair.
///
/// The name is used verbatim as the key of the resource's payload in the
/// plain state structure, and uppercased as the namespace prefix of every
/// action type. Names are not validated.
///
/// # Examples
///
/// ```
/// use crudfold::Resource;
///
/// let users = Resource::new("users");
/// assert_eq!(users.name(), "users");
/// assert_eq!(users.namespace(), "USERS");
/// assert!(users.matches(&Resource::new("Users")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Resource {
    name: Arc<str>,
    namespace: Arc<str>,
}

impl Resource {
    /// Create a resource from its name.
    pub fn new(name: impl AsRef<str>) -> Self {
        let name = name.as_ref();
        Resource {
            name: Arc::from(name),
            namespace: Arc::from(name.to_uppercase()),
        }
    }

    /// The name as given, e.g. `"users"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The uppercased name, e.g. `"USERS"`.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Whether two resources produce identical action types.
    pub fn matches(&self, other: &Resource) -> bool {
        self.namespace == other.namespace
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for Resource {
    fn from(name: &str) -> Self {
        Resource::new(name)
    }
}

impl From<String> for Resource {
    fn from(name: String) -> Self {
        Resource::new(name)
    }
}

impl From<&Resource> for Resource {
    fn from(resource: &Resource) -> Self {
        resource.clone()
    }
}
