//! The container: registration entry points and resolution front doors.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use futures::FutureExt;
use tracing::debug;

use crate::dependencies::{Construct, Dependencies};
use crate::error::{BoxError, ContainerError, ContainerResult};
use crate::registration::{AsyncFactoryFn, RegisterOptions, Registration, Registry};
use crate::resolved::{AnyArc, Resolved, ResolvedList};
use crate::traits::ResolverCore;

pub mod context;

pub use context::ResolverContext;

/// Name-keyed asynchronous IoC container.
///
/// Registration populates the registry (and the interface index); resolution
/// reads the registry, consults the singleton cache, and invokes factories,
/// which may themselves resolve recursively through the
/// [`ResolverContext`] they receive. The container is cheap to clone; clones
/// share one registry and cache.
///
/// See the [crate docs](crate) for a walkthrough. Resolution methods come
/// from the [`Resolver`](crate::Resolver) and
/// [`ResolverCore`](crate::traits::ResolverCore) traits.
pub struct Container {
    inner: Arc<ContainerInner>,
}

pub(crate) struct ContainerInner {
    pub(crate) registry: RwLock<Registry>,
    pub(crate) cache: RwLock<HashMap<String, AnyArc>>,
}

impl Container {
    /// Creates an empty container.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(ContainerInner {
                registry: RwLock::new(Registry::default()),
                cache: RwLock::new(HashMap::new()),
            }),
        }
    }

    /// Creates a container and immediately invokes `setup` with it, so an
    /// external module can pre-populate the registry.
    ///
    /// This is the container's only external-wiring hook; scanning
    /// environments, directories, or module catalogs to decide what to
    /// register is the caller's concern.
    ///
    /// # Examples
    ///
    /// ```
    /// use namewire::{Container, RegisterOptions};
    ///
    /// let container = Container::setup(|c| {
    ///     c.register_instance("motd", "welcome".to_string(), RegisterOptions::default())
    /// }).unwrap();
    /// ```
    pub fn setup<F>(setup: F) -> ContainerResult<Self>
    where
        F: FnOnce(&Container) -> ContainerResult<()>,
    {
        let container = Self::new();
        setup(&container)?;
        Ok(container)
    }

    fn context(&self) -> ResolverContext {
        ResolverContext::root(self.inner.clone())
    }

    /// Registers an asynchronous factory.
    ///
    /// Invocation first auto-resolves the declared `deps` in order, then
    /// invokes the factory with a [`ResolverContext`] and the resolved
    /// values. An empty declaration skips the resolution step. A dependency
    /// failure propagates without invoking the factory; the factory's own
    /// failure is reported as [`ContainerError::Factory`] naming the service.
    ///
    /// Fails synchronously with [`ContainerError::InvalidName`] /
    /// [`ContainerError::InvalidDependency`] on malformed names.
    ///
    /// # Examples
    ///
    /// ```
    /// use namewire::{Container, RegisterOptions, Resolver, ResolvedList};
    ///
    /// struct Config { url: String }
    /// struct Database { url: String }
    ///
    /// # futures::executor::block_on(async {
    /// let container = Container::new();
    /// container.register_instance("config", Config { url: "postgres://localhost".into() },
    ///     RegisterOptions::default()).unwrap();
    ///
    /// container.register("database", ["config"], |_ctx, mut args: ResolvedList| async move {
    ///     let config = args.take::<Config>()?;
    ///     Ok(Database { url: config.url.clone() })
    /// }, RegisterOptions::default()).unwrap();
    ///
    /// let db = container.get::<Database>("database").await.unwrap();
    /// assert_eq!(db.url, "postgres://localhost");
    /// # });
    /// ```
    pub fn register<T, F, Fut>(
        &self,
        name: impl Into<String>,
        deps: impl Into<Dependencies>,
        factory: F,
        options: RegisterOptions,
    ) -> ContainerResult<()>
    where
        T: Send + Sync + 'static,
        F: Fn(ResolverContext, ResolvedList) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, BoxError>> + Send + 'static,
    {
        let name = name.into();
        let deps = deps.into();
        validate(&name, &deps)?;

        let factory = Arc::new(factory);
        let service = name.clone();
        let normalized: AsyncFactoryFn = Arc::new(move |ctx: ResolverContext| {
            let factory = factory.clone();
            let deps = deps.clone();
            let service = service.clone();
            async move {
                let args = resolve_arguments(&ctx, &deps).await?;
                let value = factory(ctx, args).await.map_err(|source| {
                    ContainerError::Factory { service, source }
                })?;
                Ok(Arc::new(value) as AnyArc)
            }
            .boxed()
        });

        self.store(name, normalized, options);
        Ok(())
    }

    /// Registers a synchronous factory.
    ///
    /// The factory returns its value directly; it is wrapped to auto-resolve
    /// the declared `deps` first and to report the returned value or error
    /// through the usual asynchronous channel.
    ///
    /// # Examples
    ///
    /// ```
    /// use namewire::{Container, Dependencies, RegisterOptions, Resolver};
    ///
    /// # futures::executor::block_on(async {
    /// let container = Container::new();
    /// container.register_sync("answer", Dependencies::none(),
    ///     |_| Ok(42u32), RegisterOptions::default()).unwrap();
    ///
    /// assert_eq!(*container.get::<u32>("answer").await.unwrap(), 42);
    /// # });
    /// ```
    pub fn register_sync<T, F>(
        &self,
        name: impl Into<String>,
        deps: impl Into<Dependencies>,
        factory: F,
        options: RegisterOptions,
    ) -> ContainerResult<()>
    where
        T: Send + Sync + 'static,
        F: Fn(ResolvedList) -> Result<T, BoxError> + Send + Sync + 'static,
    {
        let name = name.into();
        let deps = deps.into();
        validate(&name, &deps)?;

        let factory = Arc::new(factory);
        let service = name.clone();
        let normalized: AsyncFactoryFn = Arc::new(move |ctx: ResolverContext| {
            let factory = factory.clone();
            let deps = deps.clone();
            let service = service.clone();
            async move {
                let args = resolve_arguments(&ctx, &deps).await?;
                let value = factory(args).map_err(|source| {
                    ContainerError::Factory { service, source }
                })?;
                Ok(Arc::new(value) as AnyArc)
            }
            .boxed()
        });

        self.store(name, normalized, options);
        Ok(())
    }

    /// Registers a type that constructs itself from resolved dependencies.
    ///
    /// Dependencies come from [`Construct::dependencies`]; instantiation goes
    /// through [`Construct::construct`], so produced instances are built by
    /// the type's own constructor and carry the injected values as instance
    /// state. See [`Construct`] for an example.
    pub fn register_ctor<T: Construct>(
        &self,
        name: impl Into<String>,
        options: RegisterOptions,
    ) -> ContainerResult<()> {
        let name = name.into();
        let deps = T::dependencies();
        validate(&name, &deps)?;

        let service = name.clone();
        let normalized: AsyncFactoryFn = Arc::new(move |ctx: ResolverContext| {
            let deps = deps.clone();
            let service = service.clone();
            async move {
                let args = resolve_arguments(&ctx, &deps).await?;
                let value = T::construct(args).map_err(|source| {
                    ContainerError::Factory { service, source }
                })?;
                Ok(Arc::new(value) as AnyArc)
            }
            .boxed()
        });

        self.store(name, normalized, options);
        Ok(())
    }

    /// Registers a precomputed value.
    ///
    /// Resolution always succeeds with that exact value (the same `Arc` on
    /// every call, regardless of the lifetime option) and never performs
    /// dependency resolution.
    ///
    /// # Examples
    ///
    /// ```
    /// use namewire::{Container, RegisterOptions, Resolver};
    /// use std::sync::Arc;
    ///
    /// # futures::executor::block_on(async {
    /// let container = Container::new();
    /// container.register_instance("origin", "cli".to_string(), RegisterOptions::default()).unwrap();
    ///
    /// let a = container.get::<String>("origin").await.unwrap();
    /// let b = container.get::<String>("origin").await.unwrap();
    /// assert!(Arc::ptr_eq(&a, &b));
    /// # });
    /// ```
    pub fn register_instance<T: Send + Sync + 'static>(
        &self,
        name: impl Into<String>,
        instance: T,
        options: RegisterOptions,
    ) -> ContainerResult<()> {
        let name = name.into();
        validate(&name, &Dependencies::none())?;

        let value: AnyArc = Arc::new(instance);
        let normalized: AsyncFactoryFn = Arc::new(move |_ctx: ResolverContext| {
            let value = value.clone();
            async move { Ok(value) }.boxed()
        });

        self.store(name, normalized, options);
        Ok(())
    }

    /// Ad-hoc injection without registration.
    ///
    /// Auto-resolves `deps` and invokes `f` once with the values. A
    /// dependency failure short-circuits and is returned without invoking
    /// `f`. The same machinery backs the registration wrappers.
    ///
    /// # Examples
    ///
    /// ```
    /// use namewire::{Container, RegisterOptions, ResolvedList};
    ///
    /// # futures::executor::block_on(async {
    /// let container = Container::new();
    /// container.register_instance("base", 10u32, RegisterOptions::default()).unwrap();
    ///
    /// let sum = container.call(["base"], |mut args: ResolvedList| async move {
    ///     let base = args.take::<u32>()?;
    ///     Ok(*base + 5)
    /// }).await.unwrap();
    /// assert_eq!(sum, 15);
    /// # });
    /// ```
    pub async fn call<T, F, Fut>(&self, deps: impl Into<Dependencies>, f: F) -> ContainerResult<T>
    where
        F: FnOnce(ResolvedList) -> Fut,
        Fut: Future<Output = Result<T, BoxError>>,
    {
        let deps = deps.into();
        let ctx = self.context();
        let args = resolve_arguments(&ctx, &deps).await?;
        f(args).await.map_err(|source| ContainerError::Factory {
            service: std::any::type_name::<F>().to_string(),
            source,
        })
    }

    fn store(&self, name: String, factory: AsyncFactoryFn, options: RegisterOptions) {
        let registration = Registration {
            factory,
            lifetime: options.lifetime,
        };
        let replaced = self.inner.registry.write().unwrap().insert(
            name.clone(),
            registration,
            &options.interfaces,
        );
        debug!(
            service = %name,
            lifetime = ?options.lifetime,
            interfaces = options.interfaces.len(),
            replaced,
            "service registered"
        );
    }
}

impl Clone for Container {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResolverCore for Container {
    async fn resolve_any(&self, name: &str) -> ContainerResult<Resolved> {
        self.context().resolve_boxed(name.to_string()).await
    }

    async fn resolve_list(&self, names: &[String]) -> ContainerResult<Vec<Resolved>> {
        self.context().resolve_list(names).await
    }
}

/// Resolves a declared dependency list into the positional argument view.
async fn resolve_arguments(
    ctx: &ResolverContext,
    deps: &Dependencies,
) -> ContainerResult<ResolvedList> {
    if deps.is_empty() {
        return Ok(ResolvedList::empty());
    }
    Ok(ResolvedList::new(ctx.resolve_list(deps.names()).await?))
}

/// Synchronous validation tier, applied before any record is stored.
fn validate(name: &str, deps: &Dependencies) -> ContainerResult<()> {
    if name.is_empty() {
        return Err(ContainerError::InvalidName);
    }
    if deps.names().iter().any(|dep| dep.is_empty()) {
        return Err(ContainerError::InvalidDependency {
            service: name.to_string(),
        });
    }
    Ok(())
}
