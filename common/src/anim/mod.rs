use std::{
    future::Future,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use tracing::debug;

pub mod carousel;
pub mod particles;
pub mod petals;
pub mod shapes;

pub use carousel::{Carousel, Direction};
pub use particles::{Connection, Particle, ParticleField};
pub use petals::{Petal, PetalColor, PetalField};
pub use shapes::{Density, Shape, ShapeKind, scatter_shapes};

pub const PARTICLE_FRAME: Duration = Duration::from_millis(16);
pub const PETAL_SPAWN_PERIOD: Duration = Duration::from_millis(800);
pub const CAROUSEL_PERIOD: Duration = Duration::from_secs(5);

// cancellation flag shared between a mounted view and the loops it started
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

// owner of the token for one mounted view
//
// the view keeps the scheduler alive for as long as it is mounted; dropping it
// (or calling cancel()) stops every loop started from token()
#[derive(Debug, Default)]
pub struct Scheduler {
    token: CancelToken,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        if !self.token.is_cancelled() {
            debug!("scheduler dropped, cancelling loops");
        }
        self.token.cancel();
    }
}

// drive tick() until the token is cancelled
//
// the token is checked both before each tick and after each sleep, so a view
// that unmounts mid-sleep never sees another tick.  returns how many ticks ran
pub async fn run_loop<T, S, F>(token: CancelToken, mut tick: T, mut sleep: S) -> u64
where
    T: FnMut(),
    S: FnMut() -> F,
    F: Future<Output = ()>,
{
    let mut ticks = 0;

    loop {
        if token.is_cancelled() {
            break;
        }

        tick();
        ticks += 1;

        if token.is_cancelled() {
            break;
        }

        sleep().await;
    }

    ticks
}

// perspective rotation (degrees about x, degrees about y) for a pointer at
// (x, y) inside a width x height card; the centre is flat
pub fn tilt(x: f64, y: f64, width: f64, height: f64, intensity: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }

    let x_pct = (x / width).clamp(0.0, 1.0) - 0.5;
    let y_pct = (y / height).clamp(0.0, 1.0) - 0.5;

    (-y_pct * 50.0 * intensity, x_pct * 50.0 * intensity)
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use futures::executor::block_on;

    use super::*;

    #[test]
    fn test_cancelled_token_never_ticks() {
        let scheduler = Scheduler::new();
        scheduler.cancel();

        let ticks = block_on(run_loop(scheduler.token(), || panic!("ticked"), || async {}));
        assert_eq!(ticks, 0);
    }

    #[test]
    fn test_loop_stops_when_cancelled_during_sleep() {
        let scheduler = Scheduler::new();
        let token = scheduler.token();
        let sleeps = Rc::new(Cell::new(0));

        let sleeps_in_loop = sleeps.clone();
        let ticks = block_on(run_loop(
            token,
            || {},
            move || {
                sleeps_in_loop.set(sleeps_in_loop.get() + 1);
                if sleeps_in_loop.get() == 3 {
                    scheduler.cancel();
                }
                async {}
            },
        ));

        assert_eq!(ticks, 3);
        assert_eq!(sleeps.get(), 3);
    }

    #[test]
    fn test_loop_stops_when_cancelled_by_tick() {
        let scheduler = Scheduler::new();
        let token = scheduler.token();

        let mut count = 0;
        let ticks = block_on(run_loop(
            scheduler.token(),
            || {
                count += 1;
                if count == 5 {
                    token.cancel();
                }
            },
            || async {},
        ));

        assert_eq!(ticks, 5);
    }

    #[test]
    fn test_tilt() {
        assert_eq!(tilt(50.0, 50.0, 100.0, 100.0, 0.1), (0.0, 0.0));

        let (rx, ry) = tilt(100.0, 0.0, 100.0, 100.0, 0.1);
        assert!((rx - 2.5).abs() < 1e-12);
        assert!((ry - 2.5).abs() < 1e-12);

        assert_eq!(tilt(10.0, 10.0, 0.0, 0.0, 0.1), (0.0, 0.0));
    }

    #[test]
    fn test_dropping_scheduler_cancels_token() {
        let token = {
            let scheduler = Scheduler::new();
            scheduler.token()
        };

        assert!(token.is_cancelled());
    }
}
