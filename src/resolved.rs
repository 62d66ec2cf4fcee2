//! Type-erased resolution results.

use std::any::Any;
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use crate::error::{ContainerError, ContainerResult};

/// Type-erased, shareable service value.
pub type AnyArc = Arc<dyn Any + Send + Sync>;

/// Result of a single-name resolution.
///
/// A service name resolves to [`Resolved::One`]; an interface tag always
/// resolves to [`Resolved::Many`] over its implementers, even when exactly
/// one implementation is registered. Groups nest, because each member of a
/// batch is itself resolved polymorphically.
#[derive(Clone)]
pub enum Resolved {
    /// A single service value.
    One(AnyArc),
    /// An interface group, in registration order.
    Many(Vec<Resolved>),
}

impl Resolved {
    /// Downcasts a single value to `T`.
    ///
    /// Fails with [`ContainerError::TypeMismatch`] on the wrong type and
    /// [`ContainerError::UnexpectedGroup`] when the name resolved to an
    /// interface group.
    pub fn downcast<T: Any + Send + Sync>(self) -> ContainerResult<Arc<T>> {
        match self {
            Resolved::One(value) => value
                .downcast::<T>()
                .map_err(|_| ContainerError::TypeMismatch(std::any::type_name::<T>())),
            Resolved::Many(_) => Err(ContainerError::UnexpectedGroup),
        }
    }

    /// Downcasts an interface group element-wise to `T`.
    pub fn downcast_group<T: Any + Send + Sync>(self) -> ContainerResult<Vec<Arc<T>>> {
        match self {
            Resolved::Many(values) => values.into_iter().map(Resolved::downcast).collect(),
            Resolved::One(_) => Err(ContainerError::UnexpectedSingle),
        }
    }

    /// Returns the raw erased value; groups are rejected.
    pub fn into_value(self) -> ContainerResult<AnyArc> {
        match self {
            Resolved::One(value) => Ok(value),
            Resolved::Many(_) => Err(ContainerError::UnexpectedGroup),
        }
    }

    /// Whether this resolution produced an interface group.
    pub fn is_group(&self) -> bool {
        matches!(self, Resolved::Many(_))
    }
}

impl fmt::Debug for Resolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolved::One(_) => f.write_str("Resolved::One(..)"),
            Resolved::Many(values) => write!(f, "Resolved::Many(len={})", values.len()),
        }
    }
}

/// Ordered view of resolved dependency values, consumed positionally.
///
/// Factories receive one of these with the values for their declared
/// dependencies, in declaration order.
///
/// # Examples
///
/// ```
/// use namewire::{Container, RegisterOptions, Resolver, ResolvedList};
///
/// struct Port(u16);
/// struct Server { port: u16 }
///
/// # futures::executor::block_on(async {
/// let container = Container::new();
/// container.register_instance("port", Port(8080), RegisterOptions::default()).unwrap();
/// container.register("server", ["port"], |_ctx, mut args: ResolvedList| async move {
///     let port = args.take::<Port>()?;
///     Ok(Server { port: port.0 })
/// }, RegisterOptions::default()).unwrap();
///
/// let server = container.get::<Server>("server").await.unwrap();
/// assert_eq!(server.port, 8080);
/// # });
/// ```
#[derive(Clone, Debug, Default)]
pub struct ResolvedList {
    values: VecDeque<Resolved>,
}

impl ResolvedList {
    pub(crate) fn new(values: Vec<Resolved>) -> Self {
        Self { values: values.into() }
    }

    /// An empty argument list, for factories with no declared dependencies.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of values not yet consumed.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether every value has been consumed.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Takes the next value, downcast to `T`.
    pub fn take<T: Any + Send + Sync>(&mut self) -> ContainerResult<Arc<T>> {
        self.take_raw()?.downcast()
    }

    /// Takes the next value as an interface group, each member downcast to `T`.
    pub fn take_group<T: Any + Send + Sync>(&mut self) -> ContainerResult<Vec<Arc<T>>> {
        self.take_raw()?.downcast_group()
    }

    /// Takes the next value without downcasting.
    pub fn take_raw(&mut self) -> ContainerResult<Resolved> {
        self.values
            .pop_front()
            .ok_or(ContainerError::ArgumentsExhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_consumes_in_order() {
        let mut args = ResolvedList::new(vec![
            Resolved::One(Arc::new(1u32)),
            Resolved::One(Arc::new("two".to_string())),
        ]);
        assert_eq!(args.len(), 2);
        assert_eq!(*args.take::<u32>().unwrap(), 1);
        assert_eq!(*args.take::<String>().unwrap(), "two");
        assert!(args.is_empty());
        assert!(matches!(
            args.take::<u32>(),
            Err(ContainerError::ArgumentsExhausted)
        ));
    }

    #[test]
    fn downcast_rejects_wrong_type() {
        let value = Resolved::One(Arc::new(1u32));
        assert!(matches!(
            value.downcast::<String>(),
            Err(ContainerError::TypeMismatch(_))
        ));
    }

    #[test]
    fn into_value_unwraps_single_values() {
        let value = Resolved::One(Arc::new(5u8)).into_value().unwrap();
        assert_eq!(*value.downcast::<u8>().ok().unwrap(), 5);
    }

    #[test]
    fn group_and_single_do_not_interchange() {
        let group = Resolved::Many(vec![Resolved::One(Arc::new(1u32))]);
        assert!(group.is_group());
        assert!(matches!(
            group.clone().downcast::<u32>(),
            Err(ContainerError::UnexpectedGroup)
        ));

        let single = Resolved::One(Arc::new(1u32));
        assert!(matches!(
            single.downcast_group::<u32>(),
            Err(ContainerError::UnexpectedSingle)
        ));
    }
}
