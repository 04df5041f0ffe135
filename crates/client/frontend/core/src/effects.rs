//! Transient visual feedback: short-lived flags raised by threshold
//! crossings between consecutive snapshots.
//!
//! Flags carry an explicit deadline and are re-evaluated against a caller
//! supplied clock instead of being cleared by fire-and-forget timers; nothing
//! here can mutate state after the owning view is gone, and tests can march
//! time forward by hand.
use std::time::{Duration, Instant};

use protocol::GameState;

/// What the feedback is about.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum FeedbackKind {
    /// Health dropped between snapshots.
    Damage,
    /// Health rose between snapshots.
    Healing,
    /// Character level increased.
    LevelUp,
    /// Dungeon level increased.
    Descended,
}

/// The slice of the previous snapshot retained across frames — nothing else
/// survives a state push.
#[derive(Clone, Copy, Debug)]
pub struct PlayerBaseline {
    pub level: u32,
    pub xp: u32,
    pub health: i32,
    pub dungeon_level: u32,
}

#[derive(Clone, Copy, Debug)]
struct FeedbackFlag {
    kind: FeedbackKind,
    expires_at: Instant,
}

/// Deadline-carrying feedback flags plus the baseline that raises them.
#[derive(Clone, Debug)]
pub struct TransientFeedback {
    duration: Duration,
    flags: Vec<FeedbackFlag>,
    baseline: Option<PlayerBaseline>,
}

impl TransientFeedback {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            flags: Vec::new(),
            baseline: None,
        }
    }

    /// Compares the new snapshot against the retained baseline, raising
    /// flags for every threshold crossed, then advances the baseline.
    pub fn observe(&mut self, state: &GameState, now: Instant) {
        self.prune(now);

        let Some(player) = state.player.as_ref() else {
            // Session ended; a future session starts from a fresh baseline.
            self.baseline = None;
            return;
        };
        let dungeon_level = state.dungeon.as_ref().map_or(0, |d| d.level);

        if let Some(prev) = self.baseline {
            if player.health < prev.health {
                self.raise(FeedbackKind::Damage, now);
            }
            if player.health > prev.health {
                self.raise(FeedbackKind::Healing, now);
            }
            if player.level > prev.level {
                self.raise(FeedbackKind::LevelUp, now);
            }
            if dungeon_level > prev.dungeon_level {
                self.raise(FeedbackKind::Descended, now);
            }
        }

        self.baseline = Some(PlayerBaseline {
            level: player.level,
            xp: player.xp,
            health: player.health,
            dungeon_level,
        });
    }

    /// Whether a flag is live at `now`. Expiry needs no external
    /// intervention — the deadline decides.
    pub fn is_active(&self, kind: FeedbackKind, now: Instant) -> bool {
        self.flags
            .iter()
            .any(|flag| flag.kind == kind && now < flag.expires_at)
    }

    /// All flags live at `now`.
    pub fn active_kinds(&self, now: Instant) -> impl Iterator<Item = FeedbackKind> + '_ {
        self.flags
            .iter()
            .filter(move |flag| now < flag.expires_at)
            .map(|flag| flag.kind)
    }

    /// Drops expired flags. Callers run this from their frame tick; reads
    /// stay correct either way.
    pub fn prune(&mut self, now: Instant) {
        self.flags.retain(|flag| now < flag.expires_at);
    }

    pub fn baseline(&self) -> Option<PlayerBaseline> {
        self.baseline
    }

    fn raise(&mut self, kind: FeedbackKind, now: Instant) {
        let expires_at = now + self.duration;
        match self.flags.iter_mut().find(|flag| flag.kind == kind) {
            Some(flag) => flag.expires_at = expires_at,
            None => self.flags.push(FeedbackFlag { kind, expires_at }),
        }
    }
}

#[cfg(test)]
mod tests {
    use protocol::{DungeonState, PlayerState};

    use super::*;

    const FLASH: Duration = Duration::from_millis(400);

    fn snapshot(health: i32, level: u32, dungeon_level: u32) -> GameState {
        GameState {
            player: Some(PlayerState {
                x: 0,
                y: 0,
                health,
                max_health: 100,
                attack: 1,
                defense: 1,
                level,
                xp: 0,
                xp_to_level: 10,
                kills: 0,
                facing: protocol::Facing::NORTH,
            }),
            dungeon: Some(DungeonState {
                level: dungeon_level,
                width: 1,
                height: 1,
                tiles: vec![".".to_owned()],
                visible: Vec::new(),
                explored: Vec::new(),
            }),
            ..GameState::default()
        }
    }

    #[test]
    fn first_snapshot_raises_nothing() {
        let mut feedback = TransientFeedback::new(FLASH);
        let now = Instant::now();
        feedback.observe(&snapshot(100, 1, 1), now);
        assert!(!feedback.is_active(FeedbackKind::Damage, now));
        assert!(feedback.baseline().is_some());
    }

    #[test]
    fn health_drop_raises_damage_and_expires_on_its_own() {
        let mut feedback = TransientFeedback::new(FLASH);
        let now = Instant::now();
        feedback.observe(&snapshot(100, 1, 1), now);
        feedback.observe(&snapshot(20, 1, 1), now);

        assert!(feedback.is_active(FeedbackKind::Damage, now));
        assert!(feedback.is_active(FeedbackKind::Damage, now + FLASH / 2));
        // Past the deadline the flag reads inactive with no prune call.
        assert!(!feedback.is_active(FeedbackKind::Damage, now + FLASH));
    }

    #[test]
    fn level_up_and_descent_raise_their_own_flags() {
        let mut feedback = TransientFeedback::new(FLASH);
        let now = Instant::now();
        feedback.observe(&snapshot(50, 1, 1), now);
        feedback.observe(&snapshot(50, 2, 2), now);

        assert!(feedback.is_active(FeedbackKind::LevelUp, now));
        assert!(feedback.is_active(FeedbackKind::Descended, now));
        assert!(!feedback.is_active(FeedbackKind::Damage, now));
    }

    #[test]
    fn healing_is_distinct_from_damage() {
        let mut feedback = TransientFeedback::new(FLASH);
        let now = Instant::now();
        feedback.observe(&snapshot(40, 1, 1), now);
        feedback.observe(&snapshot(70, 1, 1), now);
        assert!(feedback.is_active(FeedbackKind::Healing, now));
        assert!(!feedback.is_active(FeedbackKind::Damage, now));
    }

    #[test]
    fn repeated_damage_refreshes_the_deadline() {
        let mut feedback = TransientFeedback::new(FLASH);
        let now = Instant::now();
        feedback.observe(&snapshot(100, 1, 1), now);
        feedback.observe(&snapshot(80, 1, 1), now);
        let later = now + FLASH / 2;
        feedback.observe(&snapshot(60, 1, 1), later);
        // Still active past the first deadline because the second hit
        // re-armed it.
        assert!(feedback.is_active(FeedbackKind::Damage, now + FLASH));
    }

    #[test]
    fn session_end_clears_the_baseline() {
        let mut feedback = TransientFeedback::new(FLASH);
        let now = Instant::now();
        feedback.observe(&snapshot(100, 5, 3), now);
        feedback.observe(&GameState::default(), now);
        assert!(feedback.baseline().is_none());

        // A fresh session must not diff against the dead one.
        feedback.observe(&snapshot(10, 1, 1), now);
        assert!(!feedback.is_active(FeedbackKind::Damage, now));
    }

    #[test]
    fn prune_drops_expired_flags() {
        let mut feedback = TransientFeedback::new(FLASH);
        let now = Instant::now();
        feedback.observe(&snapshot(100, 1, 1), now);
        feedback.observe(&snapshot(50, 1, 1), now);
        feedback.prune(now + FLASH * 2);
        assert_eq!(feedback.active_kinds(now + FLASH * 2).count(), 0);
    }
}
