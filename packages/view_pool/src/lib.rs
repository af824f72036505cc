//! A recycling pool for visual proxy objects ("views") bound to identified
//! data records ("models").
//!
//! This crate targets real-time host loops that create and discard many
//! short-lived, visually represented records, such as per-frame spawn and
//! despawn of entities. Instead of paying instantiation and destruction cost
//! on every change, a [`ViewPool`] keeps the expensive view instances alive
//! and rebinds them: [`provide()`][ViewPool::provide] hands out a view bound
//! to a model, [`free()`][ViewPool::free] returns it to the idle set, and the
//! pool grows only when every view is in use.
//!
//! # Key properties
//!
//! - **Reuse before growth**: provide takes the first idle view in creation
//!   order; the pool grows by exactly one instance only on exhaustion.
//! - **Exclusive binding**: at most one in-use view per model identity;
//!   lookup by id only ever sees in-use views.
//! - **Idempotent release**: freeing never destroys anything, a second free
//!   of the same identity is a normal `false` outcome.
//! - **Explicit teardown**: [`clean()`][ViewPool::clean] (and `Drop`) cleans
//!   and destroys every instance through the caller-supplied factory.
//! - **No downcasts**: the pool is generic over a [`ViewFactory`] whose
//!   model/view pair is resolved at compile time.
//!
//! The rendering logic behind a view, the instantiation primitives, and the
//! placement of idle instances are all capabilities the caller supplies
//! through the [`View`] and [`ViewFactory`] traits; the pool only runs the
//! lifecycle.
//!
//! # Example
//!
//! ```rust
//! use std::convert::Infallible;
//!
//! use view_pool::{Model, View, ViewFactory, ViewPool};
//!
//! struct Cat {
//!     id: String,
//!     name: String,
//! }
//!
//! impl Model for Cat {
//!     fn id(&self) -> &str {
//!         &self.id
//!     }
//! }
//!
//! #[derive(Default)]
//! struct CatView {
//!     model: Option<Cat>,
//! }
//!
//! impl View for CatView {
//!     type Model = Cat;
//!
//!     fn refresh(&mut self, model: Cat) {
//!         // A real view would update sprites, labels, and so on here.
//!         self.model = Some(model);
//!     }
//!
//!     fn clean(&mut self) {
//!         self.model = None;
//!     }
//!
//!     fn model(&self) -> Option<&Cat> {
//!         self.model.as_ref()
//!     }
//! }
//!
//! struct CatViewFactory;
//!
//! impl ViewFactory for CatViewFactory {
//!     type View = CatView;
//!     type Container = ();
//!     type Error = Infallible;
//!
//!     fn create(&mut self, _prototype: &CatView, _container: &()) -> Result<CatView, Infallible> {
//!         Ok(CatView::default())
//!     }
//!
//!     fn destroy(&mut self, _view: CatView) {}
//! }
//!
//! let mut pool = ViewPool::builder()
//!     .factory(CatViewFactory)
//!     .prototype(CatView::default())
//!     .container(())
//!     .initial_capacity(2)
//!     .build()
//!     .expect("factory cannot fail");
//!
//! let view = pool
//!     .provide(Cat {
//!         id: "cat-01".to_string(),
//!         name: "Whiskers".to_string(),
//!     })
//!     .expect("an idle view exists");
//! assert_eq!(view.model().map(|cat| cat.name.as_str()), Some("Whiskers"));
//!
//! // Freeing unbinds the view and makes it reusable; the pool never grew.
//! assert!(pool.free("cat-01"));
//! assert_eq!(pool.capacity(), 2);
//! ```
//!
//! # Concurrency
//!
//! The pool is single-threaded and synchronous: every operation runs to
//! completion on the caller's thread, and the design assumes one logical
//! owner drives the pool, typical of a per-frame update loop. Wrap the pool
//! in a `Mutex` if you must share it.

mod builder;
mod error;
mod factory;
mod model;
mod pool;
mod view;

pub use builder::*;
pub use error::*;
pub use factory::*;
pub use model::*;
pub use pool::*;
pub use view::*;

#[cfg(test)]
mod fakes;
