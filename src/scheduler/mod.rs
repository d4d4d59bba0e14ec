//! Cooperative task scheduling for the countdown and resolution delay.
//!
//! The game has two external timing sources: a repeating 1-second
//! countdown tick and a one-shot 1-second resolution delay. Both are
//! modeled as explicit scheduled tasks with cancelable handles, owned by
//! the controller. There is no real clock here: the host reports elapsed
//! time through [`Scheduler::advance`] and runs whatever came due.
//!
//! Every task carries the [`RoundId`] it was scheduled for, so a task
//! that outlives its round (restart mid-round, end-of-round races) is
//! recognizable as stale and dropped by the controller's guards.

use rustc_hash::FxHashMap;
use std::time::Duration;

use crate::game::RoundId;

/// A scheduled unit of game work.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Task {
    /// Repeating 1-second countdown decrement.
    CountdownTick {
        /// Round the tick belongs to.
        round: RoundId,
    },
    /// One-shot match/mismatch resolution after the reveal delay.
    ResolveSelection {
        /// Round the pending selection belongs to.
        round: RoundId,
    },
}

/// Handle to a scheduled task, used for cancellation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

/// Single-threaded cooperative scheduler.
///
/// Implementations map `schedule_after`/`schedule_every` onto whatever
/// timing source the host has; [`ManualScheduler`] is the deterministic
/// in-crate implementation driven by a virtual clock.
pub trait Scheduler {
    /// Schedule a one-shot task after `delay`.
    fn schedule_after(&mut self, delay: Duration, task: Task) -> TaskHandle;

    /// Schedule a repeating task firing every `interval`.
    fn schedule_every(&mut self, interval: Duration, task: Task) -> TaskHandle;

    /// Cancel a scheduled task. Returns false if the handle was already
    /// fired (one-shot) or canceled.
    fn cancel(&mut self, handle: TaskHandle) -> bool;

    /// Advance the clock by `elapsed` and return the tasks that came
    /// due, in firing order. A repeating task may appear several times
    /// if more than one interval elapsed.
    fn advance(&mut self, elapsed: Duration) -> Vec<Task>;
}

struct Entry {
    due_ms: u64,
    every_ms: Option<u64>,
    seq: u64,
    task: Task,
}

/// Deterministic scheduler driven by a virtual millisecond clock.
///
/// Tasks due at the same instant fire in registration order.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use memory_match::game::RoundId;
/// use memory_match::scheduler::{ManualScheduler, Scheduler, Task};
///
/// let mut scheduler = ManualScheduler::new();
/// let tick = Task::CountdownTick { round: RoundId::new(1) };
/// scheduler.schedule_every(Duration::from_secs(1), tick);
///
/// assert_eq!(scheduler.advance(Duration::from_millis(999)).len(), 0);
/// assert_eq!(scheduler.advance(Duration::from_millis(1)), vec![tick]);
/// assert_eq!(scheduler.advance(Duration::from_secs(3)).len(), 3);
/// ```
#[derive(Default)]
pub struct ManualScheduler {
    now_ms: u64,
    next_handle: u64,
    entries: FxHashMap<TaskHandle, Entry>,
}

impl ManualScheduler {
    /// Create a scheduler with an empty task table at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of live (scheduled, not yet fired or canceled) tasks.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    fn insert(&mut self, delay: Duration, every_ms: Option<u64>, task: Task) -> TaskHandle {
        let handle = TaskHandle(self.next_handle);
        self.next_handle += 1;

        self.entries.insert(
            handle,
            Entry {
                due_ms: self.now_ms + delay.as_millis() as u64,
                every_ms,
                seq: handle.0,
                task,
            },
        );
        handle
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_after(&mut self, delay: Duration, task: Task) -> TaskHandle {
        self.insert(delay, None, task)
    }

    fn schedule_every(&mut self, interval: Duration, task: Task) -> TaskHandle {
        let interval_ms = interval.as_millis() as u64;
        assert!(interval_ms > 0, "Repeat interval must be non-zero");
        self.insert(interval, Some(interval_ms), task)
    }

    fn cancel(&mut self, handle: TaskHandle) -> bool {
        self.entries.remove(&handle).is_some()
    }

    fn advance(&mut self, elapsed: Duration) -> Vec<Task> {
        self.now_ms += elapsed.as_millis() as u64;
        let now = self.now_ms;

        // (due, seq) sort key makes firing order deterministic even
        // though the table itself is unordered.
        let mut fired: Vec<(u64, u64, Task)> = Vec::new();
        let mut spent: Vec<TaskHandle> = Vec::new();

        for (&handle, entry) in self.entries.iter_mut() {
            while entry.due_ms <= now {
                fired.push((entry.due_ms, entry.seq, entry.task));
                match entry.every_ms {
                    Some(every) => entry.due_ms += every,
                    None => {
                        spent.push(handle);
                        break;
                    }
                }
            }
        }

        for handle in spent {
            self.entries.remove(&handle);
        }

        fired.sort_by_key(|&(due, seq, _)| (due, seq));
        fired.into_iter().map(|(_, _, task)| task).collect()
    }
}
