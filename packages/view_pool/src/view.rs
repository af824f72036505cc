use crate::Model;

/// A reusable visual proxy that can be bound to one model at a time.
///
/// Views are exclusively owned by the pool for their entire lifetime. A caller
/// only ever holds a borrowed reference obtained from
/// [`provide()`][crate::ViewPool::provide] or
/// [`find()`][crate::ViewPool::find], valid until the next call that mutates
/// the pool.
///
/// # Binding contract
///
/// * [`refresh()`][Self::refresh] binds a model and performs the type-specific
///   visual update. If your implementation acquires resources per binding
///   (event subscriptions, handles), be careful about `refresh` being called
///   twice without an intervening [`clean()`][Self::clean]: either make the
///   acquisition idempotent or guarantee a `clean()` between two live
///   bindings. The pool itself always cleans a view before rebinding it.
/// * [`clean()`][Self::clean] forgets the bound model and releases everything
///   acquired by the most recent `refresh`. It must be safe to call on an
///   already-clean view (no-op).
/// * [`model()`][Self::model] exposes the currently bound model; the pool uses
///   it for the identity comparisons behind `find` and `free`.
pub trait View {
    /// The type of record this view represents.
    type Model: Model;

    /// Binds the given model and updates the visuals to represent it.
    fn refresh(&mut self, model: Self::Model);

    /// Forgets the bound model and releases anything acquired by the most
    /// recent [`refresh()`][Self::refresh].
    ///
    /// Must be a no-op on an already-clean view.
    fn clean(&mut self);

    /// The currently bound model, if any.
    ///
    /// Returns `Some` strictly between a [`refresh()`][Self::refresh] and the
    /// following [`clean()`][Self::clean].
    fn model(&self) -> Option<&Self::Model>;
}
