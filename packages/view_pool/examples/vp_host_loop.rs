//! A simulated real-time host loop driving a view pool.
//!
//! Each tick spawns or despawns a few entities. Views are recycled across
//! ticks: once the population peaks, the pool stops creating instances and
//! only rebinds the ones it already owns.

use std::convert::Infallible;

use view_pool::{Model, View, ViewFactory, ViewPool};

struct Enemy {
    id: String,
    health: u32,
}

impl Model for Enemy {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Stand-in for a scene-graph layer idle instances are parked under.
struct Layer(&'static str);

#[derive(Default)]
struct EnemyView {
    model: Option<Enemy>,
    visible: bool,
}

impl View for EnemyView {
    type Model = Enemy;

    fn refresh(&mut self, model: Enemy) {
        self.model = Some(model);
    }

    fn clean(&mut self) {
        self.model = None;
    }

    fn model(&self) -> Option<&Enemy> {
        self.model.as_ref()
    }
}

#[derive(Default)]
struct EnemyViewFactory {
    instances_created: usize,
}

impl ViewFactory for EnemyViewFactory {
    type View = EnemyView;
    type Container = Layer;
    type Error = Infallible;

    fn create(&mut self, _prototype: &EnemyView, container: &Layer) -> Result<EnemyView, Infallible> {
        self.instances_created = self.instances_created.saturating_add(1);
        println!("  [factory] instance #{} created under '{}'", self.instances_created, container.0);
        Ok(EnemyView::default())
    }

    fn destroy(&mut self, _view: EnemyView) {}

    fn activate(&mut self, view: &mut EnemyView) {
        view.visible = true;
    }

    fn park(&mut self, view: &mut EnemyView, _container: &Layer) {
        view.visible = false;
    }
}

fn main() {
    let mut pool = ViewPool::builder()
        .factory(EnemyViewFactory::default())
        .prototype(EnemyView::default())
        .container(Layer("offscreen"))
        .initial_capacity(4)
        .build()
        .expect("the factory cannot fail");

    let mut next_spawn = 0_u32;

    for tick in 0_u32..8 {
        // Spawn two entities per tick.
        for _ in 0..2 {
            let id = format!("enemy-{next_spawn:03}");
            next_spawn = next_spawn.wrapping_add(1);

            _ = pool
                .provide(Enemy {
                    id,
                    health: 100,
                })
                .expect("the pool can always grow");
        }

        // Despawn everything that dropped below half health.
        let doomed: Vec<String> = pool
            .iter()
            .filter_map(View::model)
            .filter(|enemy| enemy.health < 50)
            .map(|enemy| enemy.id.clone())
            .collect();

        for id in &doomed {
            assert!(pool.free(id));
        }

        // Every survivor takes 30 damage per tick. Enumeration borrows the
        // pool, so collect the ids first and re-acquire each view mutably.
        let survivors: Vec<String> = pool
            .iter()
            .filter_map(View::model)
            .map(|enemy| enemy.id.clone())
            .collect();

        for id in &survivors {
            let view = pool.find_mut(id).expect("survivor is in use");
            if let Some(enemy) = view.model.as_mut() {
                enemy.health = enemy.health.saturating_sub(30);
            }
        }

        let visible = pool.iter().filter(|view| view.visible).count();
        println!(
            "tick {tick}: {} alive ({visible} visible), {} despawned, pool capacity {}",
            pool.len(),
            doomed.len(),
            pool.capacity()
        );
    }

    println!(
        "done: {} entities spawned in total, only {} view instances ever created",
        next_spawn,
        pool.capacity()
    );
}
