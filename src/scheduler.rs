/// Deferred callbacks on the page's event loop.
///
/// Dropping a `Timer` cancels its task; `detach` lets it run to completion.
pub trait Scheduler: Clone + 'static {
    type Timer;

    fn after<F>(&self, delay_ms: u32, task: F) -> Self::Timer
    where
        F: FnOnce() + 'static;

    fn detach(&self, timer: Self::Timer);

    fn after_detached<F>(&self, delay_ms: u32, task: F)
    where
        F: FnOnce() + 'static,
    {
        let timer = self.after(delay_ms, task);
        self.detach(timer);
    }
}

#[cfg(test)]
pub use manual::ManualScheduler;
