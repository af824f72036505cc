use thiserror::Error;

/// Errors that can occur when providing a view from a pool.
///
/// These are the recoverable outcomes of [`provide()`][crate::ViewPool::provide];
/// callers are expected to check them. Configuration mistakes (a builder with
/// a missing mandatory setting) panic instead, because they indicate a
/// programming error rather than a runtime data condition.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PoolError<E>
where
    E: std::error::Error + 'static,
{
    /// A view is already bound to a model with the same id.
    ///
    /// Binding is exclusive: at most one in-use view per model identity.
    /// Free the existing view first, or use a different id.
    #[error("a view is already in use for model id '{id}'")]
    IdentityInUse {
        /// The identity that is already bound.
        id: String,
    },

    /// The factory failed to create a new view instance from the prototype.
    ///
    /// Raised only when the pool had to grow because no idle view existed.
    /// The pool's existing views are unaffected.
    #[error("failed to create a new view instance from the prototype")]
    Create {
        /// The factory's creation error.
        #[source]
        source: E,
    },
}
