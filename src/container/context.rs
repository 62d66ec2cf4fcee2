//! Resolution context threaded through factory invocations.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::{try_join_all, BoxFuture};
use tracing::trace;

use crate::container::ContainerInner;
use crate::error::{ContainerError, ContainerResult};
use crate::internal::ResolutionPath;
use crate::lifetime::Lifetime;
use crate::registration::Registration;
use crate::resolved::{AnyArc, Resolved};
use crate::traits::ResolverCore;

/// Capability-scoped view of the owning container handed to factories.
///
/// Factories resolve further services through this context rather than
/// through an ambient global: the context carries the chain of service names
/// currently under construction, so recursive resolution from inside a
/// factory participates in cycle detection. Contexts are cheap to clone and
/// share the owning container's registry and cache.
#[derive(Clone)]
pub struct ResolverContext {
    inner: Arc<ContainerInner>,
    path: ResolutionPath,
}

impl ResolverContext {
    pub(crate) fn root(inner: Arc<ContainerInner>) -> Self {
        Self {
            inner,
            path: ResolutionPath::root(),
        }
    }

    fn descend(&self, path: ResolutionPath) -> Self {
        Self {
            inner: self.inner.clone(),
            path,
        }
    }

    /// Owned, boxed resolution future; the indirection the recursive walk
    /// bottoms out through.
    pub(crate) fn resolve_boxed(&self, name: String) -> BoxFuture<'static, ContainerResult<Resolved>> {
        let ctx = self.clone();
        Box::pin(async move { ctx.resolve_name(&name).await })
    }

    async fn resolve_name(&self, name: &str) -> ContainerResult<Resolved> {
        // Service lookup takes precedence over interface lookup.
        let registration = self.inner.registry.read().unwrap().service(name);
        if let Some(registration) = registration {
            return self
                .resolve_service(name, registration)
                .await
                .map(Resolved::One);
        }

        let members = self.inner.registry.read().unwrap().implementers(name);
        if let Some(members) = members {
            if !members.is_empty() {
                trace!(interface = name, implementers = members.len(), "resolving interface group");
                let values = self.resolve_list(&members).await?;
                return Ok(Resolved::Many(values));
            }
        }

        Err(ContainerError::UnknownService(name.to_string()))
    }

    async fn resolve_service(
        &self,
        name: &str,
        registration: Registration,
    ) -> ContainerResult<AnyArc> {
        if registration.lifetime == Lifetime::Singleton {
            let cached = self.inner.cache.read().unwrap().get(name).cloned();
            if let Some(cached) = cached {
                trace!(service = name, "singleton cache hit");
                return Ok(cached);
            }
        }

        let child = self.descend(self.path.push(name)?);
        trace!(service = name, lifetime = ?registration.lifetime, "invoking factory");
        let value = (registration.factory)(child).await?;

        if registration.lifetime == Lifetime::Singleton {
            // Benign first-resolution race: concurrent first resolutions may
            // each invoke the factory, and the cache keeps whichever result
            // writes last. No in-flight de-duplication.
            self.inner
                .cache
                .write()
                .unwrap()
                .insert(name.to_string(), value.clone());
        }

        Ok(value)
    }
}

#[async_trait]
impl ResolverCore for ResolverContext {
    async fn resolve_any(&self, name: &str) -> ContainerResult<Resolved> {
        self.resolve_boxed(name.to_string()).await
    }

    async fn resolve_list(&self, names: &[String]) -> ContainerResult<Vec<Resolved>> {
        try_join_all(names.iter().map(|name| self.resolve_boxed(name.clone()))).await
    }
}
