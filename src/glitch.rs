//! Glitch variants and the timer-driven scheduler module.
//!
//! This module contains the enumeration of reality glitches and the two-state machine that
//! decides, against a caller-supplied monotonic instant, which glitch is currently in effect.

use std::time::{Duration, Instant};

use rand::{rngs::StdRng, seq::SliceRandom as _};

/// Idle time between the end of one glitch and the start of the next.
pub(crate) const GLITCH_INTERVAL: Duration = Duration::from_secs(4);

/// Time a glitch stays in effect once activated.
pub(crate) const GLITCH_DURATION: Duration = Duration::from_secs(3);

/// Reality-bending modifiers that temporarily rewrite a game rule.
///
/// This enumeration holds the glitches the scheduler can activate. At most one glitch is in
/// effect at any time; each one changes a single rule of movement or rendering while active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Glitch {
    /// Inverts every cell color on screen.
    InvertColors,
    /// Lets the player walk through wall cells.
    NoWalls,
    /// Negates the direction of every movement request.
    ReverseControls,
    /// Cosmetic speed-up; scheduled and displayed but does not alter movement.
    FastPlayer,
    /// Cosmetic slow-down; scheduled and displayed but does not alter movement.
    SlowPlayer,
    /// Mirrors the rendered world vertically.
    FlipWorld,
}

impl Glitch {
    /// Every glitch the scheduler may pick from, in declaration order.
    pub(crate) const ALL: [Self; 6] = [
        Self::InvertColors,
        Self::NoWalls,
        Self::ReverseControls,
        Self::FastPlayer,
        Self::SlowPlayer,
        Self::FlipWorld,
    ];

    /// Returns the name of the glitch as shown in the HUD.
    pub(crate) const fn label(self) -> &'static str {
        match self {
            Self::InvertColors => "invert_colors",
            Self::NoWalls => "no_walls",
            Self::ReverseControls => "reverse_controls",
            Self::FastPlayer => "fast_player",
            Self::SlowPlayer => "slow_player",
            Self::FlipWorld => "flip_world",
        }
    }
}

/// Timer state machine deciding which glitch is in effect.
///
/// This enumeration alternates between its two states on a fixed schedule: after
/// [`GLITCH_INTERVAL`] of idleness a uniformly random glitch activates, and after
/// [`GLITCH_DURATION`] of activity the machine falls back to idle. Transitions are checked once
/// per loop tick against an instant supplied by the caller, so tests never wait on the wall
/// clock.
#[derive(Clone, Copy, Debug)]
pub(crate) enum GlitchScheduler {
    /// No glitch in effect.
    Idle {
        /// Instant the previous glitch ended, or the machine was created.
        since: Instant,
    },
    /// A glitch is in effect.
    Active {
        /// The glitch currently rewriting a rule.
        glitch: Glitch,
        /// Instant the glitch activated.
        since: Instant,
    },
}

impl GlitchScheduler {
    /// Creates an idle scheduler anchored at the given instant.
    pub(crate) const fn new(now: Instant) -> Self {
        Self::Idle { since: now }
    }

    /// Returns the glitch currently in effect, if any.
    pub(crate) const fn active(&self) -> Option<Glitch> {
        match self {
            Self::Idle { .. } => None,
            Self::Active { glitch, .. } => Some(*glitch),
        }
    }

    /// Advances the state machine against the supplied monotonic instant.
    ///
    /// This function performs at most one transition per call: idle to active once the interval
    /// has elapsed, picking a variant uniformly from [`Glitch::ALL`] with the given random
    /// source, or active to idle once the duration has elapsed.
    pub(crate) fn update(&mut self, now: Instant, rng: &mut StdRng) {
        match self {
            Self::Idle { since } if now.duration_since(*since) > GLITCH_INTERVAL => {
                if let Some(glitch) = Glitch::ALL.choose(rng).copied() {
                    *self = Self::Active { glitch, since: now };
                }
            }
            Self::Active { since, .. } if now.duration_since(*since) > GLITCH_DURATION => {
                *self = Self::Idle { since: now };
            }
            _ => {}
        }
    }
}
