use std::any::type_name;

use crate::{ViewFactory, ViewPool};

/// Builder for creating an instance of [`ViewPool`].
///
/// The factory, prototype, and container are mandatory; `build()` panics if
/// any of them is missing. The initial capacity is optional and defaults to
/// zero, in which case the pool grows on first use.
///
/// Building the pool is also what seeds it: there is no separate initialize
/// step, so a pool that exists is always ready for
/// [`provide()`][ViewPool::provide].
///
/// # Examples
///
/// ```rust
/// # use std::convert::Infallible;
/// # use view_pool::{Model, View, ViewFactory, ViewPool};
/// # struct Cat { id: String }
/// # impl Model for Cat { fn id(&self) -> &str { &self.id } }
/// # struct CatView { model: Option<Cat> }
/// # impl View for CatView {
/// #     type Model = Cat;
/// #     fn refresh(&mut self, model: Cat) { self.model = Some(model); }
/// #     fn clean(&mut self) { self.model = None; }
/// #     fn model(&self) -> Option<&Cat> { self.model.as_ref() }
/// # }
/// # struct CatFactory;
/// # impl ViewFactory for CatFactory {
/// #     type View = CatView;
/// #     type Container = ();
/// #     type Error = Infallible;
/// #     fn create(&mut self, _prototype: &CatView, _container: &()) -> Result<CatView, Infallible> {
/// #         Ok(CatView { model: None })
/// #     }
/// #     fn destroy(&mut self, _view: CatView) {}
/// # }
/// let pool = ViewPool::builder()
///     .factory(CatFactory)
///     .prototype(CatView { model: None })
///     .container(())
///     .initial_capacity(4)
///     .build()
///     .expect("factory cannot fail");
///
/// assert_eq!(pool.capacity(), 4);
/// assert_eq!(pool.len(), 0);
/// ```
#[must_use]
pub struct ViewPoolBuilder<F>
where
    F: ViewFactory,
{
    factory: Option<F>,
    prototype: Option<F::View>,
    container: Option<F::Container>,
    initial_capacity: usize,
}

impl<F> std::fmt::Debug for ViewPoolBuilder<F>
where
    F: ViewFactory,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewPoolBuilder")
            .field(
                "view_type",
                &std::format_args!("{}", type_name::<F::View>()),
            )
            .field("has_factory", &self.factory.is_some())
            .field("has_prototype", &self.prototype.is_some())
            .field("has_container", &self.container.is_some())
            .field("initial_capacity", &self.initial_capacity)
            .finish()
    }
}

impl<F> ViewPoolBuilder<F>
where
    F: ViewFactory,
{
    pub(crate) fn new() -> Self {
        Self {
            factory: None,
            prototype: None,
            container: None,
            initial_capacity: 0,
        }
    }

    /// Sets the factory used to create and destroy view instances.
    ///
    /// Mandatory.
    pub fn factory(mut self, factory: F) -> Self {
        self.factory = Some(factory);
        self
    }

    /// Sets the prototype the factory clones new instances from.
    ///
    /// Mandatory. The prototype itself is never handed out or bound; it only
    /// serves [`ViewFactory::create()`].
    pub fn prototype(mut self, prototype: F::View) -> Self {
        self.prototype = Some(prototype);
        self
    }

    /// Sets the opaque placement handle for idle and freed instances.
    ///
    /// Mandatory. The pool passes it through to the factory and never
    /// inspects it.
    pub fn container(mut self, container: F::Container) -> Self {
        self.container = Some(container);
        self
    }

    /// Sets how many idle views to create eagerly when the pool is built.
    ///
    /// Defaults to zero.
    pub fn initial_capacity(mut self, count: usize) -> Self {
        self.initial_capacity = count;
        self
    }

    /// Builds the pool and eagerly creates the initial idle views.
    ///
    /// # Errors
    ///
    /// Propagates the factory's error if creating one of the initial
    /// instances fails.
    ///
    /// # Panics
    ///
    /// Panics if the factory, prototype, or container has not been set.
    pub fn build(self) -> Result<ViewPool<F>, F::Error> {
        let factory = self
            .factory
            .expect("a factory must be set with .factory() before calling .build()");
        let prototype = self
            .prototype
            .expect("a prototype must be set with .prototype() before calling .build()");
        let container = self
            .container
            .expect("a container must be set with .container() before calling .build()");

        let mut pool = ViewPool::new_inner(factory, prototype, container);
        pool.reserve(self.initial_capacity)?;
        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use crate::fakes::{CritterFactory, CritterView, Shelf};

    use super::*;

    assert_impl_all!(ViewPoolBuilder<CritterFactory>: Debug);

    fn builder() -> ViewPoolBuilder<CritterFactory> {
        ViewPoolBuilder::new()
            .factory(CritterFactory::new())
            .prototype(CritterView::with_skin("tabby"))
            .container(Shelf("basement"))
    }

    #[test]
    fn build_defaults_to_zero_capacity() {
        let pool = builder().build().expect("no failure injected");

        assert_eq!(pool.capacity(), 0);
        assert_eq!(pool.len(), 0);
    }

    #[test]
    fn build_seeds_initial_idle_views() {
        let factory = CritterFactory::new();
        let stats = factory.stats();

        let pool = ViewPoolBuilder::new()
            .factory(factory)
            .prototype(CritterView::with_skin("tabby"))
            .container(Shelf("basement"))
            .initial_capacity(3)
            .build()
            .expect("no failure injected");

        assert_eq!(pool.capacity(), 3);
        assert_eq!(pool.len(), 0);
        assert_eq!(stats.created.get(), 3);
    }

    #[test]
    fn settings_chain_in_any_order() {
        let pool = ViewPoolBuilder::new()
            .initial_capacity(1)
            .container(Shelf("attic"))
            .prototype(CritterView::with_skin("calico"))
            .factory(CritterFactory::new())
            .build()
            .expect("no failure injected");

        assert_eq!(pool.capacity(), 1);
    }

    #[test]
    fn seeded_views_take_the_prototype_skin() {
        let mut pool = builder().build().expect("no failure injected");

        let view = pool
            .provide(crate::fakes::Critter::new("cat-01"))
            .expect("an idle or new view is available");

        assert_eq!(view.skin, "tabby");
    }

    #[test]
    #[should_panic]
    fn build_without_factory_panics() {
        let builder: ViewPoolBuilder<CritterFactory> = ViewPoolBuilder::new()
            .prototype(CritterView::with_skin("tabby"))
            .container(Shelf("basement"));

        _ = builder.build();
    }

    #[test]
    #[should_panic]
    fn build_without_prototype_panics() {
        let builder = ViewPoolBuilder::new()
            .factory(CritterFactory::new())
            .container(Shelf("basement"));

        _ = builder.build();
    }

    #[test]
    #[should_panic]
    fn build_without_container_panics() {
        let builder = ViewPoolBuilder::new()
            .factory(CritterFactory::new())
            .prototype(CritterView::with_skin("tabby"));

        _ = builder.build();
    }

    #[test]
    fn build_propagates_creation_failure() {
        let factory = CritterFactory::failing_after(1);

        let result = ViewPoolBuilder::new()
            .factory(factory)
            .prototype(CritterView::with_skin("tabby"))
            .container(Shelf("basement"))
            .initial_capacity(2)
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn debug_output_names_the_view_type() {
        let debug_output = format!("{:?}", builder());

        assert!(debug_output.contains("ViewPoolBuilder"));
        assert!(debug_output.contains("CritterView"));
    }
}
