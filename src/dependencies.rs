//! Declared dependency lists.
//!
//! Every factory carries an explicit, ordered declaration of the service
//! names it requires. The declaration is the single source of truth for
//! auto-wiring: resolution supplies values positionally, in declaration
//! order.

use crate::error::BoxError;
use crate::resolved::ResolvedList;

/// Ordered list of service names a factory requires.
///
/// # Examples
///
/// ```
/// use namewire::Dependencies;
///
/// let deps = Dependencies::of(["config", "logger"]);
/// assert_eq!(deps.names(), ["config", "logger"]);
/// assert_eq!(Dependencies::none().len(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dependencies(Vec<String>);

impl Dependencies {
    /// An empty declaration.
    pub fn none() -> Self {
        Self::default()
    }

    /// Builds a declaration from an ordered collection of names.
    pub fn of<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// The declared names, in declaration order.
    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Number of declared names.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing is declared.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for Dependencies {
    fn from(names: [S; N]) -> Self {
        Self::of(names)
    }
}

impl From<Vec<String>> for Dependencies {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

impl From<&[&str]> for Dependencies {
    fn from(names: &[&str]) -> Self {
        Self::of(names.iter().copied())
    }
}

/// Capability for types that construct themselves from resolved dependencies.
///
/// The type declares its own wiring: [`Construct::dependencies`] names the
/// services to resolve, and [`Construct::construct`] receives their values in
/// declaration order. Registered through
/// [`Container::register_ctor`](crate::Container::register_ctor), produced
/// instances are built by this constructor, so type identity is preserved and
/// the injected dependencies live on as instance state.
///
/// # Examples
///
/// ```
/// use namewire::{BoxError, Construct, Container, Dependencies, RegisterOptions, Resolver, ResolvedList};
/// use std::sync::Arc;
///
/// struct Config { url: String }
///
/// struct Client { config: Arc<Config> }
///
/// impl Construct for Client {
///     fn dependencies() -> Dependencies {
///         Dependencies::of(["config"])
///     }
///
///     fn construct(mut args: ResolvedList) -> Result<Self, BoxError> {
///         Ok(Client { config: args.take::<Config>()? })
///     }
/// }
///
/// # futures::executor::block_on(async {
/// let container = Container::new();
/// container.register_instance("config", Config { url: "ldap://localhost".into() },
///     RegisterOptions::default()).unwrap();
/// container.register_ctor::<Client>("client", RegisterOptions::default()).unwrap();
///
/// let client = container.get::<Client>("client").await.unwrap();
/// assert_eq!(client.config.url, "ldap://localhost");
/// # });
/// ```
pub trait Construct: Sized + Send + Sync + 'static {
    /// Ordered service names injected into [`Construct::construct`].
    fn dependencies() -> Dependencies;

    /// Builds the instance from the resolved values, in declaration order.
    fn construct(args: ResolvedList) -> Result<Self, BoxError>;
}
