//! Service lifetime definitions.

/// Instance caching policy for a registered service.
///
/// # Examples
///
/// ```
/// use namewire::{Container, Lifetime, RegisterOptions, Resolver};
///
/// # futures::executor::block_on(async {
/// let container = Container::new();
/// container.register_sync("greeting", namewire::Dependencies::none(),
///     |_| Ok("hello".to_string()),
///     RegisterOptions::default().lifetime(Lifetime::Transient)).unwrap();
///
/// let a = container.get::<String>("greeting").await.unwrap();
/// let b = container.get::<String>("greeting").await.unwrap();
/// // Transient services are produced anew on every resolution.
/// assert!(!std::sync::Arc::ptr_eq(&a, &b));
/// # });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifetime {
    /// One instance per container, produced on first resolution and cached
    /// for the container's lifetime. The cache is never evicted or refreshed.
    Singleton,
    /// A fresh instance on every resolution, never cached.
    Transient,
}
