use std::{rc::Rc, time::Duration};

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use common::anim::{Scheduler, run_loop};

// run tick() every period for as long as the calling component is mounted
//
// the scheduler lives in the component's hook list, so unmounting drops it and
// the loop sees the cancelled token before its next tick
pub fn use_interval<F>(period: Duration, tick: F) -> Rc<Scheduler>
where
    F: FnMut() + 'static,
{
    let scheduler = use_hook(|| Rc::new(Scheduler::new()));

    let token = scheduler.token();
    use_hook(move || {
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);

        spawn(async move {
            let ticks = run_loop(token, tick, || TimeoutFuture::new(millis)).await;
            tracing::trace!(ticks, "interval stopped");
        });
    });

    let on_drop = scheduler.clone();
    use_drop(move || on_drop.cancel());

    scheduler
}
