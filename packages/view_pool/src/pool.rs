use std::any::type_name;
use std::fmt;

use crate::{Model, ModelOf, PoolError, View, ViewFactory, ViewPoolBuilder};

/// A recycling pool of views for identified data records.
///
/// The pool owns a grow-only collection of view instances and rebinds them to
/// short-lived models instead of creating and destroying an instance per
/// record. It is built once via [`builder()`][Self::builder] (which also seeds
/// the initial idle views), then driven through repeated
/// [`provide()`][Self::provide] / [`free()`][Self::free] cycles by a
/// single-threaded host loop.
///
/// # Reuse policy
///
/// [`provide()`][Self::provide] scans the views in creation order and takes
/// the first idle one (first-fit, not least-recently-used). Only when every
/// view is in use does the pool grow, by exactly one instance. Freeing never
/// shrinks the pool; instances are only destroyed by
/// [`clean()`][Self::clean] or by dropping the pool.
///
/// # Identity
///
/// Lookup is by model id and only ever sees in-use views; idle views are
/// invisible to [`find()`][Self::find] and [`free()`][Self::free] by design.
/// Binding is exclusive: providing a model whose id is already bound is
/// rejected with [`PoolError::IdentityInUse`]. All lookups are linear scans,
/// a deliberate simplicity trade-off for the pool sizes this targets.
///
/// # Example
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
/// let mut pool = ViewPool::builder()
///     .factory(CatFactory)
///     .prototype(CatView { model: None })
///     .container(())
///     .initial_capacity(2)
///     .build()
///     .expect("factory cannot fail");
///
/// let view = pool.provide(Cat { id: "cat-01".to_string() }).expect("pool has idle views");
/// assert_eq!(view.model().map(Model::id), Some("cat-01"));
///
/// // The freed view is forgotten by lookup and becomes reusable.
/// assert!(pool.free("cat-01"));
/// assert!(!pool.free("cat-01"));
/// assert!(pool.find("cat-01").is_none());
/// assert_eq!(pool.capacity(), 2);
/// ```
pub struct ViewPool<F>
where
    F: ViewFactory,
{
    /// Creation-order node storage. Scan order for every lookup and for
    /// first-fit reuse. Grows one node at a time, shrinks only on `clean()`.
    nodes: Vec<Node<F::View>>,

    factory: F,
    prototype: F::View,
    container: F::Container,
}

/// Internal pairing of one view instance with its in-use flag.
///
/// Invariant: `view.model()` is `Some` exactly when `in_use` is true.
struct Node<V> {
    view: V,
    in_use: bool,
}

impl<F> ViewPool<F>
where
    F: ViewFactory,
{
    pub(crate) fn new_inner(factory: F, prototype: F::View, container: F::Container) -> Self {
        Self {
            nodes: Vec::new(),
            factory,
            prototype,
            container,
        }
    }

    /// Starts building a new [`ViewPool`].
    ///
    /// The factory, prototype, and container settings are mandatory; see
    /// [`ViewPoolBuilder`].
    pub fn builder() -> ViewPoolBuilder<F> {
        ViewPoolBuilder::new()
    }

    /// Provides a view bound to the given model.
    ///
    /// Reuses the first idle view in creation order; only grows the pool (by
    /// exactly one instance) when every view is in use. The chosen view is
    /// refreshed with the model, activated, and marked in use.
    ///
    /// The returned borrow is valid until the next call that mutates the
    /// pool; re-acquire the view with [`find()`][Self::find] after that.
    ///
    /// # Errors
    ///
    /// * [`PoolError::IdentityInUse`] if a view is already bound to a model
    ///   with the same id.
    /// * [`PoolError::Create`] if the pool had to grow and the factory failed
    ///   to create an instance. The pool is unchanged in that case.
    pub fn provide(&mut self, model: ModelOf<F>) -> Result<&mut F::View, PoolError<F::Error>> {
        if self.in_use_index(model.id()).is_some() {
            return Err(PoolError::IdentityInUse {
                id: model.id().to_string(),
            });
        }

        let index = match self.first_idle_index() {
            Some(index) => index,
            None => self
                .expand()
                .map_err(|source| PoolError::Create { source })?,
        };

        let node = self
            .nodes
            .get_mut(index)
            .expect("index came from an idle scan or expand, so a node exists there");

        node.view.refresh(model);
        self.factory.activate(&mut node.view);
        node.in_use = true;

        debug_assert!(node.view.model().is_some());

        Ok(&mut node.view)
    }

    /// Frees the in-use view bound to a model with the given id.
    ///
    /// On a hit the view is cleaned (it forgets its model and releases
    /// whatever the binding acquired), parked back under the container, and
    /// becomes reusable. Returns `false` when no in-use view is bound to that
    /// id; a double free and an unknown id are normal outcomes, not errors.
    #[must_use = "a false return means nothing was freed"]
    pub fn free(&mut self, id: &str) -> bool {
        let Some(index) = self.in_use_index(id) else {
            return false;
        };

        let node = self
            .nodes
            .get_mut(index)
            .expect("index came from an in-use scan, so a node exists there");

        node.view.clean();
        self.factory.park(&mut node.view, &self.container);
        node.in_use = false;

        true
    }

    /// Frees the in-use view bound to the given model.
    ///
    /// Identity is id equality; this is [`free()`][Self::free] on the
    /// model's id.
    #[must_use = "a false return means nothing was freed"]
    pub fn free_model(&mut self, model: &ModelOf<F>) -> bool {
        self.free(model.id())
    }

    /// Finds the in-use view bound to a model with the given id.
    ///
    /// Idle views are never returned, even if one still carries a stale
    /// visual state for that id. Read-only, no side effects.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&F::View> {
        self.in_use_index(id)
            .and_then(|index| self.nodes.get(index))
            .map(|node| &node.view)
    }

    /// Finds the in-use view bound to a model with the given id, exclusively.
    #[must_use]
    pub fn find_mut(&mut self, id: &str) -> Option<&mut F::View> {
        self.in_use_index(id)
            .and_then(|index| self.nodes.get_mut(index))
            .map(|node| &mut node.view)
    }

    /// Finds the in-use view bound to the given model.
    ///
    /// Identity is id equality; this is [`find()`][Self::find] on the
    /// model's id.
    #[must_use]
    pub fn find_model(&self, model: &ModelOf<F>) -> Option<&F::View> {
        self.find(model.id())
    }

    /// Destroys every view and empties the pool.
    ///
    /// Every view, in use or idle, is cleaned and then handed to the
    /// factory's destroy capability. The pool returns to its empty state and
    /// remains usable: [`provide()`][Self::provide] grows it on demand, or
    /// [`reserve()`][Self::reserve] re-seeds idle views eagerly. No-op on an
    /// already-empty pool.
    pub fn clean(&mut self) {
        for node in self.nodes.drain(..) {
            let mut view = node.view;
            view.clean();
            self.factory.destroy(view);
        }
    }

    /// Ensures at least `additional` idle views exist, creating the missing
    /// ones from the prototype.
    ///
    /// Does nothing if enough idle views are already available. This is also
    /// how a pool is re-seeded after [`clean()`][Self::clean].
    ///
    /// # Errors
    ///
    /// Propagates the factory's error if creating an instance fails; views
    /// created before the failure are kept.
    #[cfg_attr(test, mutants::skip)] // Can be mutated to infinitely growing memory use.
    pub fn reserve(&mut self, additional: usize) -> Result<(), F::Error> {
        let idle = self
            .capacity()
            .checked_sub(self.len())
            .expect("the in-use count can never exceed the node count");

        for _ in 0..additional.saturating_sub(idle) {
            _ = self.expand()?;
        }

        Ok(())
    }

    /// The number of views currently in use.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|node| node.in_use).count()
    }

    /// Whether no view is currently in use.
    ///
    /// An empty pool may still hold idle views; see
    /// [`capacity()`][Self::capacity].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.iter().all(|node| !node.in_use)
    }

    /// The total number of views the pool owns, in use and idle.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.nodes.len()
    }

    /// Iterates over the in-use views, in view creation order.
    ///
    /// Idle views are not visited.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, F::View> {
        Iter {
            nodes: self.nodes.iter(),
        }
    }

    /// The prototype new instances are created from.
    #[must_use]
    pub fn prototype(&self) -> &F::View {
        &self.prototype
    }

    /// The opaque placement handle idle and freed instances are parked under.
    #[must_use]
    pub fn container(&self) -> &F::Container {
        &self.container
    }

    /// Appends one freshly created idle node and returns its index.
    fn expand(&mut self) -> Result<usize, F::Error> {
        let view = self.factory.create(&self.prototype, &self.container)?;

        self.nodes.push(Node {
            view,
            in_use: false,
        });

        Ok(self
            .nodes
            .len()
            .checked_sub(1)
            .expect("a node was just pushed, so the collection is not empty"))
    }

    /// Index of the in-use node bound to the given id, if any.
    ///
    /// Idle nodes are skipped without looking at their (stale) view state.
    fn in_use_index(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|node| {
            node.in_use && node.view.model().is_some_and(|model| model.id() == id)
        })
    }

    /// Index of the first idle node in creation order, if any.
    fn first_idle_index(&self) -> Option<usize> {
        self.nodes.iter().position(|node| !node.in_use)
    }
}

impl<F> fmt::Debug for ViewPool<F>
where
    F: ViewFactory,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewPool")
            .field(
                "view_type",
                &std::format_args!("{}", type_name::<F::View>()),
            )
            .field("capacity", &self.capacity())
            .field("in_use", &self.len())
            .finish()
    }
}

impl<F> Drop for ViewPool<F>
where
    F: ViewFactory,
{
    /// Tears the pool down as if by [`clean()`][ViewPool::clean], so every
    /// instance is cleaned and destroyed through the factory.
    fn drop(&mut self) {
        self.clean();
    }
}

/// Iterator over the in-use views of a [`ViewPool`], in view creation order.
///
/// Created by [`ViewPool::iter()`].
pub struct Iter<'p, V> {
    nodes: std::slice::Iter<'p, Node<V>>,
}

impl<'p, V> Iterator for Iter<'p, V> {
    type Item = &'p V;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.find(|node| node.in_use).map(|node| &node.view)
    }
}

impl<V> fmt::Debug for Iter<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").finish_non_exhaustive()
    }
}

impl<'p, F> IntoIterator for &'p ViewPool<F>
where
    F: ViewFactory,
{
    type Item = &'p F::View;
    type IntoIter = Iter<'p, F::View>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
