//! Test doubles shared by the unit tests: a counting model/view pair and a
//! factory with injectable creation failure.

use std::cell::Cell;
use std::rc::Rc;

use thiserror::Error;

use crate::{Model, View, ViewFactory};

/// A record with nothing but an identity.
pub(crate) struct Critter {
    id: String,
}

impl Critter {
    pub(crate) fn new(id: &str) -> Self {
        Self { id: id.to_string() }
    }
}

impl Model for Critter {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A view that records every lifecycle call made against it.
pub(crate) struct CritterView {
    model: Option<Critter>,

    /// Copied from the prototype on creation.
    pub(crate) skin: &'static str,

    pub(crate) active: bool,
    pub(crate) refreshes: usize,
    pub(crate) cleans: usize,
}

impl CritterView {
    pub(crate) fn with_skin(skin: &'static str) -> Self {
        Self {
            model: None,
            skin,
            active: false,
            refreshes: 0,
            cleans: 0,
        }
    }

    /// A view with no particular skin, for tests that exercise the binding
    /// contract without a pool.
    pub(crate) fn bare() -> Self {
        Self::with_skin("")
    }
}

impl View for CritterView {
    type Model = Critter;

    fn refresh(&mut self, model: Critter) {
        self.model = Some(model);
        self.refreshes = self.refreshes.wrapping_add(1);
    }

    fn clean(&mut self) {
        self.model = None;
        self.cleans = self.cleans.wrapping_add(1);
    }

    fn model(&self) -> Option<&Critter> {
        self.model.as_ref()
    }
}

/// An opaque placement handle; tests only ever compare the label.
pub(crate) struct Shelf(pub(crate) &'static str);

/// Counters observed by tests after the factory has moved into a pool.
#[derive(Default)]
pub(crate) struct FactoryStats {
    pub(crate) created: Cell<usize>,
    pub(crate) destroyed: Cell<usize>,
    pub(crate) activated: Cell<usize>,
    pub(crate) parked: Cell<usize>,
}

/// Returned when the factory's creation budget is exhausted.
#[derive(Debug, Error)]
#[error("the critter factory refused to create another instance")]
pub(crate) struct CreateDenied;

pub(crate) struct CritterFactory {
    stats: Rc<FactoryStats>,

    /// Creations allowed before `create` starts failing, if limited.
    budget: Option<usize>,
}

impl CritterFactory {
    pub(crate) fn new() -> Self {
        Self {
            stats: Rc::new(FactoryStats::default()),
            budget: None,
        }
    }

    pub(crate) fn failing_after(allowed_creations: usize) -> Self {
        Self {
            stats: Rc::new(FactoryStats::default()),
            budget: Some(allowed_creations),
        }
    }

    /// A handle onto the counters that stays valid after the factory has
    /// been moved into a pool.
    pub(crate) fn stats(&self) -> Rc<FactoryStats> {
        Rc::clone(&self.stats)
    }
}

impl ViewFactory for CritterFactory {
    type View = CritterView;
    type Container = Shelf;
    type Error = CreateDenied;

    fn create(&mut self, prototype: &CritterView, _container: &Shelf) -> Result<CritterView, CreateDenied> {
        if self
            .budget
            .is_some_and(|allowed| self.stats.created.get() >= allowed)
        {
            return Err(CreateDenied);
        }

        self.stats.created.set(self.stats.created.get().wrapping_add(1));

        Ok(CritterView::with_skin(prototype.skin))
    }

    fn destroy(&mut self, _view: CritterView) {
        self.stats
            .destroyed
            .set(self.stats.destroyed.get().wrapping_add(1));
    }

    fn activate(&mut self, view: &mut CritterView) {
        view.active = true;
        self.stats
            .activated
            .set(self.stats.activated.get().wrapping_add(1));
    }

    fn park(&mut self, view: &mut CritterView, _container: &Shelf) {
        view.active = false;
        self.stats
            .parked
            .set(self.stats.parked.get().wrapping_add(1));
    }
}
