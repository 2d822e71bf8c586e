//! Animation timeline for the TUI
//!
//! Turns game [`Effect`]s into timed animations and reports the moments the
//! game is waiting for (a tile's flip finishing, the last tile settling) back
//! as [`Signal`]s. All times are offsets from the start of the session so the
//! timeline can be driven by a fake clock.

use crate::core::WORD_LENGTH;
use crate::game::{AlertDuration, Effect};
use std::time::Duration;

/// How long a rejected row shakes
pub const SHAKE_DURATION: Duration = Duration::from_millis(250);

/// Something the game must be told about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    FlipComplete(usize),
    RevealSettled,
}

#[derive(Debug, Clone)]
struct Flip {
    row: usize,
    position: usize,
    start: Duration,
    half_signalled: bool,
}

#[derive(Debug, Clone)]
struct Dance {
    row: usize,
    position: usize,
    start: Duration,
}

#[derive(Debug, Clone)]
struct Alert {
    text: String,
    expires: Option<Duration>,
}

/// Scheduled animations and alerts
#[derive(Debug, Clone)]
pub struct Timeline {
    flip_duration: Duration,
    dance_duration: Duration,
    flips: Vec<Flip>,
    dances: Vec<Dance>,
    shakes: Vec<(usize, Duration)>,
    alerts: Vec<Alert>,
}

impl Timeline {
    #[must_use]
    pub const fn new(flip_duration: Duration, dance_duration: Duration) -> Self {
        Self {
            flip_duration,
            dance_duration,
            flips: Vec::new(),
            dances: Vec::new(),
            shakes: Vec::new(),
            alerts: Vec::new(),
        }
    }

    /// Schedule the visible part of `effects`, starting at `now`
    pub fn schedule(&mut self, effects: Vec<Effect>, now: Duration) {
        for effect in effects {
            match effect {
                Effect::Flip {
                    row,
                    position,
                    delay,
                } => self.flips.push(Flip {
                    row,
                    position,
                    start: now + delay,
                    half_signalled: false,
                }),
                Effect::Dance {
                    row,
                    position,
                    delay,
                } => self.dances.push(Dance {
                    row,
                    position,
                    start: now + delay,
                }),
                Effect::Shake { row } => self.shakes.push((row, now + SHAKE_DURATION)),
                Effect::Alert { text, duration } => {
                    let expires = match duration {
                        AlertDuration::Transient(d) => Some(now + d),
                        AlertDuration::Persistent => None,
                    };
                    // Newest alert on top
                    self.alerts.insert(0, Alert { text, expires });
                }
                // Tile and key colours are read straight from the game state
                Effect::TileClassified { .. }
                | Effect::KeyMarked { .. }
                | Effect::InputSuspended
                | Effect::InputResumed
                | Effect::RevealAnswer(_)
                | Effect::RoundEnded(_) => {}
            }
        }
    }

    /// Advance to `now`, dropping finished animations
    ///
    /// A flip is two halves of `flip_duration` each: the tile turns edge-on
    /// (then `FlipComplete`) and turns back. The last tile turning back
    /// produces `RevealSettled`.
    pub fn tick(&mut self, now: Duration) -> Vec<Signal> {
        let mut signals = Vec::new();

        self.flips.sort_by_key(|f| (f.start, f.position));
        for flip in &mut self.flips {
            if !flip.half_signalled && now >= flip.start + self.flip_duration {
                flip.half_signalled = true;
                signals.push(Signal::FlipComplete(flip.position));
            }
        }

        let full = self.flip_duration * 2;
        let mut settled = false;
        self.flips.retain(|flip| {
            let done = flip.half_signalled && now >= flip.start + full;
            if done && flip.position == WORD_LENGTH - 1 {
                settled = true;
            }
            !done
        });
        if settled {
            signals.push(Signal::RevealSettled);
        }

        let dance = self.dance_duration;
        self.dances.retain(|d| now < d.start + dance);
        self.shakes.retain(|&(_, until)| now < until);
        self.alerts
            .retain(|a| a.expires.is_none_or(|expires| now < expires));

        signals
    }

    /// How far the tile is through its flip, 0.0 to 2.0
    #[must_use]
    pub fn flip_progress(&self, row: usize, position: usize, now: Duration) -> Option<f32> {
        let flip = self
            .flips
            .iter()
            .find(|f| f.row == row && f.position == position)?;
        let elapsed = now.checked_sub(flip.start)?;
        Some((elapsed.as_secs_f32() / self.flip_duration.as_secs_f32()).min(2.0))
    }

    /// Vertical scale of a tile: 1.0 flat, 0.0 edge-on
    #[must_use]
    pub fn tile_scale(&self, row: usize, position: usize, now: Duration) -> f32 {
        self.flip_progress(row, position, now)
            .map_or(1.0, |progress| (1.0 - progress).abs())
    }

    /// Horizontal offset of a shaking row
    #[must_use]
    pub fn shake_offset(&self, row: usize, now: Duration) -> i16 {
        let Some(&(_, until)) = self.shakes.iter().find(|(r, _)| *r == row) else {
            return 0;
        };
        let remaining = until.saturating_sub(now).as_millis() / 50;
        match remaining % 4 {
            0 => 0,
            1 => 1,
            2 => 0,
            _ => -1,
        }
    }

    /// Whether a tile is in the raised half of its dance
    #[must_use]
    pub fn is_lifted(&self, row: usize, position: usize, now: Duration) -> bool {
        self.dances.iter().any(|d| {
            d.row == row
                && d.position == position
                && now >= d.start
                && now < d.start + self.dance_duration / 2
        })
    }

    /// Alerts still on screen, newest first
    pub fn alerts(&self) -> impl Iterator<Item = &str> {
        self.alerts.iter().map(|a| a.text.as_str())
    }

    /// Nothing left to animate
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.flips.is_empty() && self.dances.is_empty() && self.shakes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLIP: Duration = Duration::from_millis(500);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn flips(delays: &[u64]) -> Vec<Effect> {
        delays
            .iter()
            .enumerate()
            .map(|(position, &d)| Effect::Flip {
                row: 0,
                position,
                delay: ms(d),
            })
            .collect()
    }

    #[test]
    fn flips_complete_in_stagger_order() {
        let mut timeline = Timeline::new(FLIP, FLIP);
        timeline.schedule(flips(&[0, 250, 500, 750, 1000]), ms(0));

        assert!(timeline.tick(ms(499)).is_empty());
        assert_eq!(timeline.tick(ms(500)), vec![Signal::FlipComplete(0)]);
        assert_eq!(timeline.tick(ms(760)), vec![Signal::FlipComplete(1)]);
        assert_eq!(
            timeline.tick(ms(1300)),
            vec![Signal::FlipComplete(2), Signal::FlipComplete(3)]
        );
        assert_eq!(timeline.tick(ms(1500)), vec![Signal::FlipComplete(4)]);
        assert!(timeline.tick(ms(1999)).is_empty());
        assert_eq!(timeline.tick(ms(2000)), vec![Signal::RevealSettled]);
        assert!(timeline.is_idle());
    }

    #[test]
    fn late_tick_reports_everything_at_once() {
        let mut timeline = Timeline::new(FLIP, FLIP);
        timeline.schedule(flips(&[0, 250, 500, 750, 1000]), ms(100));

        let signals = timeline.tick(ms(10_000));
        assert_eq!(signals.len(), WORD_LENGTH + 1);
        assert_eq!(signals[0], Signal::FlipComplete(0));
        assert_eq!(signals[4], Signal::FlipComplete(4));
        assert_eq!(signals[5], Signal::RevealSettled);
    }

    #[test]
    fn tile_scale_goes_edge_on_and_back() {
        let mut timeline = Timeline::new(FLIP, FLIP);
        timeline.schedule(flips(&[0]), ms(0));

        assert!((timeline.tile_scale(0, 0, ms(0)) - 1.0).abs() < 1e-6);
        assert!(timeline.tile_scale(0, 0, ms(500)) < 1e-6);
        assert!((timeline.tile_scale(0, 0, ms(750)) - 0.5).abs() < 1e-3);
        assert!((timeline.tile_scale(0, 1, ms(500)) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn transient_alerts_expire_and_persistent_stay() {
        let mut timeline = Timeline::new(FLIP, FLIP);
        timeline.schedule(
            vec![
                Effect::Alert {
                    text: "CRANE".to_string(),
                    duration: AlertDuration::Persistent,
                },
                Effect::Alert {
                    text: "Not in word list".to_string(),
                    duration: AlertDuration::Transient(ms(1000)),
                },
            ],
            ms(0),
        );

        let alerts: Vec<_> = timeline.alerts().collect();
        assert_eq!(alerts, vec!["Not in word list", "CRANE"]);

        timeline.tick(ms(1000));
        let alerts: Vec<_> = timeline.alerts().collect();
        assert_eq!(alerts, vec!["CRANE"]);

        timeline.tick(ms(1_000_000));
        assert_eq!(timeline.alerts().count(), 1);
    }

    #[test]
    fn shake_ends() {
        let mut timeline = Timeline::new(FLIP, FLIP);
        timeline.schedule(vec![Effect::Shake { row: 2 }], ms(0));
        assert!(!timeline.is_idle());
        assert_eq!(timeline.shake_offset(1, ms(10)), 0);

        timeline.tick(SHAKE_DURATION);
        assert!(timeline.is_idle());
        assert_eq!(timeline.shake_offset(2, SHAKE_DURATION), 0);
    }

    #[test]
    fn dance_lifts_tiles_in_turn() {
        let mut timeline = Timeline::new(FLIP, FLIP);
        timeline.schedule(
            vec![
                Effect::Dance {
                    row: 0,
                    position: 0,
                    delay: ms(0),
                },
                Effect::Dance {
                    row: 0,
                    position: 1,
                    delay: ms(100),
                },
            ],
            ms(0),
        );

        assert!(timeline.is_lifted(0, 0, ms(50)));
        assert!(!timeline.is_lifted(0, 1, ms(50)));
        assert!(timeline.is_lifted(0, 1, ms(150)));
        assert!(!timeline.is_lifted(0, 0, ms(300)));

        timeline.tick(ms(600));
        assert!(timeline.is_idle());
    }
}
