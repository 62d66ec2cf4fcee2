//! Error types for the container.

use thiserror::Error;

/// Boxed error type returned by user factories.
///
/// Factories report their own failures as any `std::error::Error`; the
/// container wraps them in [`ContainerError::Factory`] naming the failing
/// service, so `?` works with whatever error type a factory already uses.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Container errors.
///
/// Two tiers share this enum: synchronous validation errors returned directly
/// from a registration call (`InvalidName`, `InvalidDependency`), and
/// asynchronous resolution errors delivered through the returned future
/// (everything else). Resolution errors are never panicked across the async
/// boundary.
///
/// # Examples
///
/// ```
/// use namewire::{Container, ContainerError, Resolver};
///
/// # futures::executor::block_on(async {
/// let container = Container::new();
/// match container.resolve("missing").await {
///     Err(ContainerError::UnknownService(name)) => assert_eq!(name, "missing"),
///     _ => unreachable!(),
/// }
/// # });
/// ```
#[derive(Debug, Error)]
pub enum ContainerError {
    /// Service name was empty at registration.
    #[error("service name must be a non-empty string")]
    InvalidName,
    /// A declared dependency name was empty at registration.
    #[error("dependency of `{service}` must be a non-empty name")]
    InvalidDependency {
        /// The service whose declaration is malformed.
        service: String,
    },
    /// Name absent from both the service registry and the interface index.
    #[error("unknown service or interface `{0}`")]
    UnknownService(String),
    /// A name re-entered its own resolution chain (includes the full path).
    #[error("circular dependency: {}", .path.join(" -> "))]
    CircularDependency {
        /// The chain of in-progress names, ending with the repeated one.
        path: Vec<String>,
    },
    /// Resolution recursed past the depth cap without repeating a name.
    #[error("resolution depth exceeded {0} levels")]
    DepthExceeded(usize),
    /// A factory reported its own failure.
    #[error("factory for `{service}` failed: {source}")]
    Factory {
        /// The service whose factory failed.
        service: String,
        /// The factory's reported error.
        #[source]
        source: BoxError,
    },
    /// A resolved value did not downcast to the requested type.
    #[error("type mismatch: expected `{0}`")]
    TypeMismatch(&'static str),
    /// A single value was requested but the name resolved to a group.
    #[error("expected a single service value, found an interface group")]
    UnexpectedGroup,
    /// A group was requested but the name resolved to a single value.
    #[error("expected an interface group, found a single service value")]
    UnexpectedSingle,
    /// A factory consumed more arguments than its declaration resolved.
    #[error("resolved argument list exhausted")]
    ArgumentsExhausted,
}

/// Result type for container operations.
pub type ContainerResult<T> = Result<T, ContainerError>;
