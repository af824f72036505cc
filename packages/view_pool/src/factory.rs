use crate::View;

/// The model type of the views produced by a [`ViewFactory`].
pub type ModelOf<F> = <<F as ViewFactory>::View as View>::Model;

/// The instantiation and placement capability behind a pool.
///
/// The pool itself never creates or destroys view instances. It delegates to
/// a factory, which clones fresh instances from a prototype, destroys them on
/// teardown, and handles the placement side effects of the acquire/release
/// cycle. The [`Container`][Self::Container] is an opaque placement handle the
/// pool stores and passes through; the pool never inspects it.
///
/// # Contract
///
/// * [`create()`][Self::create] must return a distinct, inactive instance per
///   call, already parented under the container. Creation failure propagates
///   out of whichever pool operation triggered the growth.
/// * [`destroy()`][Self::destroy] disposes of an instance for good. The pool
///   always cleans a view before destroying it.
/// * [`activate()`][Self::activate] and [`park()`][Self::park] bracket a
///   view's in-use period. Both default to doing nothing, for view types with
///   no activation or parenting concept.
pub trait ViewFactory {
    /// The type of view instance this factory produces.
    type View: View;

    /// Opaque placement handle for idle and freed instances.
    ///
    /// Use `()` when the views have no placement concept.
    type Container;

    /// Error returned when an instance cannot be created.
    type Error: std::error::Error + 'static;

    /// Creates a fresh inactive instance from the prototype, parented under
    /// the container.
    fn create(
        &mut self,
        prototype: &Self::View,
        container: &Self::Container,
    ) -> Result<Self::View, Self::Error>;

    /// Destroys an instance. Called for every instance on pool teardown.
    fn destroy(&mut self, view: Self::View);

    /// Activates an instance that is about to be bound to a model.
    ///
    /// Undoes whatever inactivation [`park()`][Self::park] or
    /// [`create()`][Self::create] applied. The default does nothing.
    fn activate(&mut self, _view: &mut Self::View) {}

    /// Deactivates a freed instance and parks it back under the container.
    ///
    /// The default does nothing.
    fn park(&mut self, _view: &mut Self::View, _container: &Self::Container) {}
}
