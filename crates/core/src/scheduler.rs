//! Deferred tasks driven by the game tick.
//!
//! Every task carries the session generation it was scheduled under. The owner
//! bumps its generation on reset, and a task from an older generation must be
//! dropped when it comes due instead of touching the new board.

/// Continuations the lifecycle controller can schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Compare the two face-up cards
    ResolvePair,
    /// Flip a mismatched pair back and apply the mismatch rule
    HideMismatch,
    /// Completion flourish done; offer the next level
    ShowNextLevel,
    /// Level interstitial done; deal the next board
    FinishAdvance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    pub task: Task,
    pub generation: u32,
    remaining_ms: u32,
}

impl Scheduled {
    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms
    }
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    pending: Vec<Scheduled>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, delay_ms: u32, generation: u32, task: Task) {
        self.pending.push(Scheduled {
            task,
            generation,
            remaining_ms: delay_ms,
        });
    }

    /// Advance every countdown by `elapsed_ms` and remove the tasks that came due.
    ///
    /// Due tasks are returned earliest deadline first; ties keep scheduling order.
    pub fn take_due(&mut self, elapsed_ms: u32) -> Vec<Scheduled> {
        let mut due = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            let entry = &mut self.pending[i];
            if entry.remaining_ms <= elapsed_ms {
                due.push(self.pending.remove(i));
            } else {
                entry.remaining_ms -= elapsed_ms;
                i += 1;
            }
        }
        // Stable sort keeps insertion order among equal deadlines.
        due.sort_by_key(|s| s.remaining_ms);
        due
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scheduled> {
        self.pending.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_fires_after_delay() {
        let mut s = Scheduler::new();
        s.schedule(500, 1, Task::ResolvePair);

        assert!(s.take_due(499).is_empty());
        assert_eq!(s.len(), 1);
        assert_eq!(s.iter().next().unwrap().remaining_ms(), 1);

        let due = s.take_due(1);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].task, Task::ResolvePair);
        assert_eq!(due[0].generation, 1);
        assert!(s.is_empty());
    }

    #[test]
    fn test_due_order_is_by_deadline() {
        let mut s = Scheduler::new();
        s.schedule(300, 1, Task::ShowNextLevel);
        s.schedule(100, 1, Task::ResolvePair);
        s.schedule(300, 1, Task::FinishAdvance);

        let due: Vec<Task> = s.take_due(1000).into_iter().map(|d| d.task).collect();
        assert_eq!(
            due,
            vec![Task::ResolvePair, Task::ShowNextLevel, Task::FinishAdvance]
        );
    }

    #[test]
    fn test_zero_delay_fires_on_next_tick() {
        let mut s = Scheduler::new();
        s.schedule(0, 3, Task::HideMismatch);
        assert_eq!(s.take_due(0).len(), 1);
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut s = Scheduler::new();
        s.schedule(10, 1, Task::ResolvePair);
        s.schedule(20, 1, Task::HideMismatch);
        s.clear();
        assert!(s.take_due(1000).is_empty());
    }
}
