//! Service registration records and the registry.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::BoxFuture;

use crate::container::ResolverContext;
use crate::error::ContainerResult;
use crate::lifetime::Lifetime;
use crate::resolved::AnyArc;

/// Canonical internal factory shape.
///
/// All registration variants (async, sync, constructor, instance) are
/// normalized into this shape at registration time. The context argument is
/// the capability-scoped view of the owning container that threads cycle
/// detection through recursive resolution.
pub(crate) type AsyncFactoryFn =
    Arc<dyn Fn(ResolverContext) -> BoxFuture<'static, ContainerResult<AnyArc>> + Send + Sync>;

/// A stored registration: normalized factory plus caching policy.
#[derive(Clone)]
pub(crate) struct Registration {
    pub(crate) factory: AsyncFactoryFn,
    pub(crate) lifetime: Lifetime,
}

/// Options merged over defaults at registration time.
///
/// Defaults to a singleton with no interface tags.
///
/// # Examples
///
/// ```
/// use namewire::{Lifetime, RegisterOptions};
///
/// let options = RegisterOptions::default()
///     .lifetime(Lifetime::Transient)
///     .implements("codec");
/// assert_eq!(options.lifetime, Lifetime::Transient);
/// assert_eq!(options.interfaces, ["codec"]);
/// ```
#[derive(Debug, Clone)]
pub struct RegisterOptions {
    /// Caching policy; defaults to [`Lifetime::Singleton`].
    pub lifetime: Lifetime,
    /// Interface tags this service implements. The service name is appended
    /// to each tag's implementation sequence in registration order.
    pub interfaces: Vec<String>,
}

impl Default for RegisterOptions {
    fn default() -> Self {
        Self {
            lifetime: Lifetime::Singleton,
            interfaces: Vec::new(),
        }
    }
}

impl RegisterOptions {
    /// Options for a transient registration.
    pub fn transient() -> Self {
        Self::default().lifetime(Lifetime::Transient)
    }

    /// Sets the caching policy.
    pub fn lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// Adds an interface tag.
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }
}

/// Name-keyed registry plus the interface index.
///
/// Entries live for the container's lifetime and are never individually
/// removed. Re-registering a name replaces its record (last write wins); the
/// interface index appends without de-duplication, so re-registering with the
/// same tag lists the name again.
#[derive(Default)]
pub(crate) struct Registry {
    services: HashMap<String, Registration>,
    interfaces: HashMap<String, Vec<String>>,
}

impl Registry {
    /// Stores a registration and indexes its interface tags. Returns whether
    /// a prior record was replaced.
    pub(crate) fn insert(
        &mut self,
        name: String,
        registration: Registration,
        interfaces: &[String],
    ) -> bool {
        for tag in interfaces {
            self.interfaces
                .entry(tag.clone())
                .or_default()
                .push(name.clone());
        }
        self.services.insert(name, registration).is_some()
    }

    pub(crate) fn service(&self, name: &str) -> Option<Registration> {
        self.services.get(name).cloned()
    }

    /// The implementer names for an interface tag, cloned so callers can
    /// release the registry lock before resolving.
    pub(crate) fn implementers(&self, name: &str) -> Option<Vec<String>> {
        self.interfaces.get(name).cloned()
    }
}
