//! Per-name edit-lock state machine.
//!
//! Every name starts `Locked` at registration. The owner may unlock once the
//! cooldown has elapsed; a successful address update re-arms the lock from
//! the edit time, so the pair of states cycles for the life of the name.

use borsh::{BorshDeserialize, BorshSerialize};

/// Cooldown between registration (or the previous edit) and the next
/// permitted unlock: 30 days, in seconds.
pub const LOCK_PERIOD: i64 = 2_592_000;

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockState {
    Locked,
    Unlocked,
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditLock {
    state: LockState,
    since: i64,
}

impl EditLock {
    /// Fresh lock, armed at `now`.
    pub fn new(now: i64) -> Self {
        Self {
            state: LockState::Locked,
            since: now,
        }
    }

    pub fn state(&self) -> LockState {
        self.state
    }

    pub fn is_unlocked(&self) -> bool {
        self.state == LockState::Unlocked
    }

    /// Earliest timestamp at which the current lock may be released.
    pub fn unlocks_at(&self) -> i64 {
        self.since + LOCK_PERIOD
    }

    /// Attempt the `Locked -> Unlocked` transition. Returns `false` when the
    /// cooldown has not elapsed; the boundary instant itself is allowed.
    /// A no-op returning `true` if already unlocked.
    pub fn try_unlock(&mut self, now: i64) -> bool {
        if self.state == LockState::Unlocked {
            return true;
        }
        if now < self.unlocks_at() {
            return false;
        }
        self.state = LockState::Unlocked;
        true
    }

    /// Re-arm after a successful edit: `Unlocked -> Locked`, cooldown
    /// restarting at `now`. The only way a name re-locks.
    pub fn rearm(&mut self, now: i64) {
        self.state = LockState::Locked;
        self.since = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_locked() {
        let lock = EditLock::new(100);
        assert_eq!(lock.state(), LockState::Locked);
        assert_eq!(lock.unlocks_at(), 100 + LOCK_PERIOD);
    }

    #[test]
    fn unlock_rejected_before_cooldown() {
        let mut lock = EditLock::new(100);
        assert!(!lock.try_unlock(100));
        assert!(!lock.try_unlock(100 + LOCK_PERIOD - 1));
        assert_eq!(lock.state(), LockState::Locked);
    }

    #[test]
    fn unlock_allowed_at_exact_boundary() {
        let mut lock = EditLock::new(100);
        assert!(lock.try_unlock(100 + LOCK_PERIOD));
        assert_eq!(lock.state(), LockState::Unlocked);
    }

    #[test]
    fn unlock_is_idempotent() {
        let mut lock = EditLock::new(0);
        assert!(lock.try_unlock(LOCK_PERIOD));
        assert!(lock.try_unlock(LOCK_PERIOD));
        assert_eq!(lock.state(), LockState::Unlocked);
    }

    #[test]
    fn rearm_restarts_cooldown_from_edit_time() {
        let mut lock = EditLock::new(0);
        assert!(lock.try_unlock(LOCK_PERIOD));
        lock.rearm(LOCK_PERIOD + 500);
        assert_eq!(lock.state(), LockState::Locked);
        assert_eq!(lock.unlocks_at(), LOCK_PERIOD + 500 + LOCK_PERIOD);
        assert!(!lock.try_unlock(LOCK_PERIOD + 501));
    }
}
