//! Resolver traits for service resolution.

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ContainerResult;
use crate::resolved::Resolved;

/// Object-safe core resolution interface.
///
/// Implemented by both [`Container`](crate::Container) and
/// [`ResolverContext`](crate::ResolverContext), so code resolving services is
/// independent of whether it runs outside the container or inside a factory.
/// Most callers want the methods of [`Resolver`] instead.
#[async_trait]
pub trait ResolverCore: Send + Sync {
    /// Resolves a single name.
    ///
    /// A registered service yields [`Resolved::One`]; an interface tag with a
    /// non-empty implementation sequence yields [`Resolved::Many`] over its
    /// implementers in registration order. An interface always yields a
    /// group, even with exactly one implementation registered. Service lookup
    /// takes precedence over interface
    /// lookup. A name absent from both indices fails with
    /// [`UnknownService`](crate::ContainerError::UnknownService); the failure
    /// is only observable when the returned future is polled.
    async fn resolve_any(&self, name: &str) -> ContainerResult<Resolved>;

    /// Resolves an ordered batch.
    ///
    /// Every element is resolved independently and concurrently; the result
    /// sequence is positionally aligned to `names` regardless of completion
    /// order. The first failure fails the whole call; remaining results are
    /// discarded, and no partial success is returned.
    async fn resolve_list(&self, names: &[String]) -> ContainerResult<Vec<Resolved>>;
}

/// User-facing resolution interface, blanket-implemented for every
/// [`ResolverCore`], so `use namewire::Resolver` is all a call site needs.
///
/// # Examples
///
/// ```
/// use namewire::{Container, RegisterOptions, Resolver};
///
/// # futures::executor::block_on(async {
/// let container = Container::new();
/// container.register_instance("answer", 42u32, RegisterOptions::default()).unwrap();
///
/// let answer = container.get::<u32>("answer").await.unwrap();
/// assert_eq!(*answer, 42);
/// # });
/// ```
#[async_trait]
pub trait Resolver: ResolverCore {
    /// Resolves a single name polymorphically; see
    /// [`ResolverCore::resolve_any`] for the lookup rules.
    async fn resolve(&self, name: &str) -> ContainerResult<Resolved> {
        self.resolve_any(name).await
    }

    /// Resolves `name` as a single service and downcasts it to `T`.
    async fn get<T>(&self, name: &str) -> ContainerResult<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        self.resolve_any(name).await?.downcast::<T>()
    }

    /// Resolves `name` as an interface group and downcasts each member to `T`.
    async fn get_all<T>(&self, name: &str) -> ContainerResult<Vec<Arc<T>>>
    where
        T: Any + Send + Sync,
    {
        self.resolve_any(name).await?.downcast_group::<T>()
    }

    /// Batch resolution over any collection of names.
    ///
    /// The result order matches the input order; see
    /// [`ResolverCore::resolve_list`] for failure semantics.
    async fn resolve_many<S>(&self, names: &[S]) -> ContainerResult<Vec<Resolved>>
    where
        S: AsRef<str> + Sync,
    {
        let names: Vec<String> = names.iter().map(|name| name.as_ref().to_string()).collect();
        self.resolve_list(&names).await
    }
}

impl<R: ResolverCore + ?Sized> Resolver for R {}
