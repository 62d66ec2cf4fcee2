//! Resolution-in-progress tracking for cycle detection.

use crate::error::{ContainerError, ContainerResult};

const MAX_DEPTH: usize = 256;

/// Stack of service names currently being constructed on one logical
/// resolution chain.
///
/// Carried by value in the resolver context and cloned per branch, so
/// sibling resolutions of a batch never see each other's frames. Cached
/// singleton hits bypass the stack entirely.
#[derive(Clone, Debug, Default)]
pub(crate) struct ResolutionPath {
    stack: Vec<String>,
}

impl ResolutionPath {
    pub(crate) fn root() -> Self {
        Self::default()
    }

    /// Returns the path extended with `name`, failing fast when `name` is
    /// already in progress or the depth cap is hit.
    pub(crate) fn push(&self, name: &str) -> ContainerResult<Self> {
        if self.stack.iter().any(|entry| entry == name) {
            let mut path = self.stack.clone();
            path.push(name.to_string());
            return Err(ContainerError::CircularDependency { path });
        }
        if self.stack.len() >= MAX_DEPTH {
            return Err(ContainerError::DepthExceeded(self.stack.len()));
        }
        let mut next = self.clone();
        next.stack.push(name.to_string());
        Ok(next)
    }
}
