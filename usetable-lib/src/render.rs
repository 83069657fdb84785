//! Renderable cell content.
//!
//! Header and body cells either carry a literal value or a thunk that
//! produces one. Thunks let header and cell functions run only when the
//! presentation layer actually draws the cell.

use std::fmt;
use std::sync::Arc;

use crate::model::Value;

/// A zero-argument producer of cell content.
pub type Thunk = Arc<dyn Fn() -> Value + Send + Sync>;

/// Content of a derived header or body cell.
#[derive(Clone)]
pub enum Renderable {
    /// A value that is already computed.
    Literal(Value),
    /// A value computed on each [`render`](Renderable::render).
    Lazy(Thunk),
}

impl Renderable {
    /// Wraps a closure as lazily rendered content.
    pub fn lazy<F>(f: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        Self::Lazy(Arc::new(f))
    }

    /// Produces the cell content, running the thunk if there is one.
    pub fn render(&self) -> Value {
        match self {
            Self::Literal(value) => value.clone(),
            Self::Lazy(thunk) => thunk(),
        }
    }

    /// Returns `true` if the content is produced by a thunk.
    pub fn is_lazy(&self) -> bool {
        matches!(self, Self::Lazy(_))
    }
}

impl fmt::Debug for Renderable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

impl From<Value> for Renderable {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}
