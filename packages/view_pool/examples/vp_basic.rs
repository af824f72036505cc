//! Basic usage of the `view_pool` crate:
//!
//! * Building a pool from a factory, a prototype, and a container.
//! * Providing views bound to models.
//! * Looking views up by identity.
//! * Freeing views back into the idle set.

use std::convert::Infallible;

use view_pool::{Model, View, ViewFactory, ViewPool};

struct Cat {
    id: String,
    name: String,
}

impl Model for Cat {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Default)]
struct CatView {
    model: Option<Cat>,
}

impl View for CatView {
    type Model = Cat;

    fn refresh(&mut self, model: Cat) {
        println!("  [view] now showing {}", model.name);
        self.model = Some(model);
    }

    fn clean(&mut self) {
        if let Some(cat) = self.model.take() {
            println!("  [view] no longer showing {}", cat.name);
        }
    }

    fn model(&self) -> Option<&Cat> {
        self.model.as_ref()
    }
}

struct CatViewFactory;

impl ViewFactory for CatViewFactory {
    type View = CatView;
    type Container = ();
    type Error = Infallible;

    fn create(&mut self, _prototype: &CatView, _container: &()) -> Result<CatView, Infallible> {
        println!("  [factory] created a fresh view instance");
        Ok(CatView::default())
    }

    fn destroy(&mut self, _view: CatView) {
        println!("  [factory] destroyed a view instance");
    }
}

fn main() {
    let mut pool = ViewPool::builder()
        .factory(CatViewFactory)
        .prototype(CatView::default())
        .container(())
        .initial_capacity(2)
        .build()
        .expect("the factory cannot fail");

    println!("pool seeded with {} idle views", pool.capacity());

    // Providing binds an idle view to the model; no new instance is created.
    _ = pool
        .provide(Cat {
            id: "cat-01".to_string(),
            name: "Whiskers".to_string(),
        })
        .expect("an idle view exists");

    // A second provide uses the other seeded view.
    _ = pool
        .provide(Cat {
            id: "cat-02".to_string(),
            name: "Mittens".to_string(),
        })
        .expect("an idle view exists");

    // The third one exceeds the seeded capacity, so the pool grows by one.
    _ = pool
        .provide(Cat {
            id: "cat-03".to_string(),
            name: "Shadow".to_string(),
        })
        .expect("the pool can grow");

    println!(
        "{} views in use, pool capacity is {}",
        pool.len(),
        pool.capacity()
    );

    // Views are looked up by model identity, in-use views only.
    let view = pool.find("cat-02").expect("cat-02 is in use");
    println!(
        "found the view for {}",
        view.model().map_or("nobody", |cat| cat.name.as_str())
    );

    // Freeing unbinds the view and makes it reusable. A second free of the
    // same identity is a normal `false`, not an error.
    assert!(pool.free("cat-02"));
    assert!(!pool.free("cat-02"));

    // The freed view is reused before the pool grows again.
    _ = pool
        .provide(Cat {
            id: "cat-04".to_string(),
            name: "Patches".to_string(),
        })
        .expect("the freed view is reusable");
    println!("pool capacity is still {}", pool.capacity());

    // Teardown destroys every instance, in use or idle.
    pool.clean();
    println!("pool cleaned, capacity is {}", pool.capacity());
}
