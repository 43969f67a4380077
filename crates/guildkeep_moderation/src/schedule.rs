//! Timed un-mutes and reminders.
//!
//! Each pending task is keyed; scheduling a key again replaces the pending
//! task and [`TaskQueue::cancel`] drops it. Expired tasks are delivered on a
//! channel to whoever performs the platform call.

use guildkeep_core::{GuildId, MemberId};
use guildkeep_error::{ScheduleError, ScheduleErrorKind};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// Longest delay a task may be scheduled for (28 days).
pub const MAX_DEFERRAL: Duration = Duration::from_secs(28 * 24 * 60 * 60);

/// Work handed back to the gateway layer when its delay has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredTask {
    /// Remove the muted role
    Unmute {
        /// Guild the member was muted in
        guild: GuildId,
        /// Muted member
        member: MemberId,
    },
    /// Remind a member of something
    Reminder {
        /// Guild the reminder was set in
        guild: GuildId,
        /// Member to remind
        member: MemberId,
        /// Reminder text
        note: String,
    },
}

/// Identity of a pending task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKey {
    /// The single pending un-mute for a member
    Unmute(GuildId, MemberId),
    /// One of a member's reminders
    Reminder(GuildId, MemberId, u64),
}

#[derive(Debug)]
struct PendingTask {
    id: u64,
    handle: JoinHandle<()>,
}

/// Queue of deferred tasks with explicit cancellation.
///
/// Tasks run on the ambient tokio runtime; scheduling requires one.
#[derive(Debug)]
pub struct TaskQueue {
    pending: Arc<Mutex<HashMap<TaskKey, PendingTask>>>,
    due: mpsc::UnboundedSender<DeferredTask>,
    next_id: AtomicU64,
}

impl TaskQueue {
    /// Create a queue and the receiver expired tasks are delivered to.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<DeferredTask>) {
        let (due, receiver) = mpsc::unbounded_channel();
        let queue = Self {
            pending: Arc::new(Mutex::new(HashMap::new())),
            due,
            next_id: AtomicU64::new(1),
        };
        (queue, receiver)
    }

    /// Schedule removal of `member`'s mute after `delay`.
    ///
    /// Replaces any un-mute already pending for the member.
    pub fn schedule_unmute(
        &self,
        guild: GuildId,
        member: MemberId,
        delay: Duration,
    ) -> Result<TaskKey, ScheduleError> {
        self.schedule(
            TaskKey::Unmute(guild, member),
            DeferredTask::Unmute { guild, member },
            delay,
        )
    }

    /// Schedule a reminder for `member` after `delay`.
    pub fn schedule_reminder(
        &self,
        guild: GuildId,
        member: MemberId,
        note: impl Into<String>,
        delay: Duration,
    ) -> Result<TaskKey, ScheduleError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.schedule(
            TaskKey::Reminder(guild, member, id),
            DeferredTask::Reminder {
                guild,
                member,
                note: note.into(),
            },
            delay,
        )
    }

    #[instrument(skip(self, task))]
    fn schedule(
        &self,
        key: TaskKey,
        task: DeferredTask,
        delay: Duration,
    ) -> Result<TaskKey, ScheduleError> {
        if delay > MAX_DEFERRAL {
            return Err(ScheduleError::new(ScheduleErrorKind::DurationTooLong {
                requested: delay,
                max: MAX_DEFERRAL,
            }));
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        // Hold the lock across spawn so the task cannot fire before it is registered
        let mut pending = self.pending.lock();

        let registry = Arc::clone(&self.pending);
        let due = self.due.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let current = {
                let mut pending = registry.lock();
                match pending.get(&key) {
                    Some(entry) if entry.id == id => {
                        pending.remove(&key);
                        true
                    }
                    _ => false,
                }
            };
            if current && due.send(task).is_err() {
                warn!(?key, "Deferred task expired but no receiver is listening");
            }
        });

        if let Some(replaced) = pending.insert(key, PendingTask { id, handle }) {
            debug!("Replacing pending task");
            replaced.handle.abort();
        }

        info!("Task scheduled");
        Ok(key)
    }

    /// Cancel a pending task. Returns whether one was pending.
    #[instrument(skip(self))]
    pub fn cancel(&self, key: TaskKey) -> bool {
        match self.pending.lock().remove(&key) {
            Some(entry) => {
                entry.handle.abort();
                info!("Task canceled");
                true
            }
            None => false,
        }
    }

    /// Cancel `member`'s pending un-mute, if any.
    pub fn cancel_unmute(&self, guild: GuildId, member: MemberId) -> bool {
        self.cancel(TaskKey::Unmute(guild, member))
    }

    /// Whether `key` is still waiting to fire.
    pub fn is_pending(&self, key: TaskKey) -> bool {
        self.pending.lock().contains_key(&key)
    }

    /// Number of tasks waiting to fire.
    pub fn pending_count(&self) -> usize {
        self.pending.lock().len()
    }
}

impl Drop for TaskQueue {
    fn drop(&mut self) {
        for (_, entry) in self.pending.lock().drain() {
            entry.handle.abort();
        }
    }
}
