//! # namewire
//!
//! Name-keyed asynchronous dependency injection: an IoC container mapping
//! service names to factories, with a resolution engine that instantiates
//! services on demand, auto-wires their declared dependencies, and caches
//! singleton instances.
//!
//! ## Features
//!
//! - **Name-keyed registry**: services are registered and resolved by string
//!   name; values are type-erased and downcast at the resolve site
//! - **Async factories**: every registration variant (async, sync,
//!   constructor, instance) is normalized into one asynchronous factory shape
//! - **Declared dependencies**: factories carry an explicit ordered
//!   [`Dependencies`] list and receive the resolved values positionally
//! - **Singleton and transient lifetimes**: singletons are produced lazily
//!   and cached for the container's lifetime
//! - **Interface groups**: a tag groups alternative implementations, resolved
//!   together as an ordered collection
//! - **Cycle detection**: re-entrant resolution fails fast with the full
//!   dependency path instead of recursing unboundedly
//!
//! ## Quick start
//!
//! ```
//! use namewire::{Container, RegisterOptions, Resolver, ResolvedList};
//! use std::sync::Arc;
//!
//! struct Config { url: String }
//! struct Database { url: String }
//!
//! # futures::executor::block_on(async {
//! let container = Container::new();
//!
//! container.register_instance(
//!     "config",
//!     Config { url: "postgres://localhost".to_string() },
//!     RegisterOptions::default(),
//! ).unwrap();
//!
//! container.register("database", ["config"], |_ctx, mut args: ResolvedList| async move {
//!     let config = args.take::<Config>()?;
//!     Ok(Database { url: config.url.clone() })
//! }, RegisterOptions::default()).unwrap();
//!
//! let db = container.get::<Database>("database").await.unwrap();
//! assert_eq!(db.url, "postgres://localhost");
//!
//! // Singletons resolve to the same instance every time.
//! let again = container.get::<Database>("database").await.unwrap();
//! assert!(Arc::ptr_eq(&db, &again));
//! # });
//! ```
//!
//! ## Interface groups
//!
//! Registrations may declare interface tags; resolving a tag yields every
//! implementation in registration order. The result is always a group, even
//! when only one implementation is registered.
//!
//! ```
//! use namewire::{Container, Dependencies, RegisterOptions, Resolver};
//!
//! struct Codec(&'static str);
//!
//! # futures::executor::block_on(async {
//! let container = Container::new();
//! container.register_sync("json", Dependencies::none(),
//!     |_| Ok(Codec("json")),
//!     RegisterOptions::default().implements("codec")).unwrap();
//! container.register_sync("yaml", Dependencies::none(),
//!     |_| Ok(Codec("yaml")),
//!     RegisterOptions::default().implements("codec")).unwrap();
//!
//! let codecs = container.get_all::<Codec>("codec").await.unwrap();
//! assert_eq!(codecs.len(), 2);
//! assert_eq!(codecs[0].0, "json");
//! assert_eq!(codecs[1].0, "yaml");
//! # });
//! ```
//!
//! ## Error model
//!
//! Registration calls validate synchronously and return
//! [`ContainerError::InvalidName`] / [`ContainerError::InvalidDependency`]
//! directly. Everything that happens during resolution (unknown names,
//! factory failures, circular dependencies) is delivered through the
//! returned future, never panicked across the async boundary.

pub mod container;
pub mod dependencies;
pub mod error;
pub mod lifetime;
pub mod registration;
pub mod resolved;
pub mod traits;

mod internal;

pub use container::{Container, ResolverContext};
pub use dependencies::{Construct, Dependencies};
pub use error::{BoxError, ContainerError, ContainerResult};
pub use lifetime::Lifetime;
pub use registration::RegisterOptions;
pub use resolved::{AnyArc, Resolved, ResolvedList};
pub use traits::{Resolver, ResolverCore};
