//! One-shot deferred tasks.
//!
//! Tasks are plain values queued with a due time. Nothing runs on its own:
//! the owner either drains due tasks with [`Scheduler::take_due`] or pulls a
//! specific one out with [`Scheduler::take`] when an external timer fires.

use web_time::{Duration, Instant};

/// Handle returned by [`Scheduler::schedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

#[derive(Debug)]
struct Pending<T> {
    id: TaskId,
    due: Instant,
    task: T,
}

/// Queue of tasks waiting for their due time.
#[derive(Debug)]
pub struct Scheduler<T> {
    next_id: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            pending: Vec::new(),
        }
    }
}

impl<T> Scheduler<T> {
    /// Empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `task` to become due `delay` after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration, task: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            due: now + delay,
            task,
        });
        log::trace!("Scheduled task {:?} in {:?}", id, delay);
        id
    }

    /// Drop a pending task. Returns false if it already ran or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        self.take(id).is_some()
    }

    /// Remove a pending task regardless of its due time.
    pub fn take(&mut self, id: TaskId) -> Option<T> {
        let index = self.pending.iter().position(|p| p.id == id)?;
        Some(self.pending.remove(index).task)
    }

    /// Remove and return every task due at `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<T> {
        let (mut due, waiting): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.pending)
                .into_iter()
                .partition(|p| p.due <= now);
        self.pending = waiting;
        due.sort_by_key(|p| (p.due, p.id));
        due.into_iter().map(|p| p.task).collect()
    }

    /// Number of pending tasks.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// True when nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tasks_run_only_when_due() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(start, Duration::from_millis(300), "reset");

        assert!(scheduler.take_due(start + Duration::from_millis(299)).is_empty());
        assert_eq!(scheduler.take_due(start + Duration::from_millis(300)), vec!["reset"]);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_due_tasks_come_out_in_due_order() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(start, Duration::from_millis(50), 2);
        scheduler.schedule(start, Duration::from_millis(10), 1);
        scheduler.schedule(start, Duration::from_millis(500), 3);

        assert_eq!(scheduler.take_due(start + Duration::from_millis(100)), vec![1, 2]);
        assert_eq!(scheduler.len(), 1);
        assert_eq!(scheduler.take_due(start + Duration::from_millis(500)), vec![3]);
    }

    #[test]
    fn test_cancel() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        let id = scheduler.schedule(start, Duration::from_millis(300), ());

        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));
        assert!(scheduler.take_due(start + Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn test_take_ignores_due_time() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        let id = scheduler.schedule(start, Duration::from_secs(60), 'x');
        assert_eq!(scheduler.take(id), Some('x'));
        assert_eq!(scheduler.take(id), None);
    }
}
