//! The jitter-filter state machine.
//!
//! A pure, synchronous function of `(event, resolved params, state)`.
//! States are implicit in [`FilterState`]: Idle (`last_direction` empty)
//! and Established (`last_direction` set). The transition rules, evaluated
//! in order:
//!
//! 1. Bypass: forward, state untouched.
//! 2. First event ever, or the interval has fully elapsed (boundary
//!    inclusive): establish a direction, zero the opposite counter,
//!    forward. A stale direction never blocks a fresh burst.
//! 3. Same direction within the interval: the burst stays alive and the
//!    window re-arms from this event, counter zeroed, forward.
//! 4. Opposite direction within the interval: count it. At the threshold
//!    the reversal is deliberate — switch direction, zero the counter,
//!    forward. Below it, suppress; `last_direction` and `last_event_time`
//!    are left unchanged, so a suppressed event does not extend the window.
//!
//! No error conditions exist in here; all inputs are well-formed by
//! construction.

use crate::event::{Direction, TimestampNs, WheelEvent};
use crate::resolver::ResolvedParams;

/// The verdict for one wheel event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Pass the event to the next hook in the chain.
    Forward,
    /// Consume the event; it never reaches the application.
    Suppress,
}

/// Running debounce state.
///
/// Exactly one instance exists for the whole process — the debounce
/// concept is a single continuous stream, not per application. Created
/// empty at startup, reset to empty when settings are reloaded, and
/// mutated only on the event-delivery path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Direction of the current burst, if one is established.
    pub last_direction: Option<Direction>,

    /// Timestamp of the event the interval window counts from.
    pub last_event_time_ns: Option<TimestampNs>,

    /// Consecutive opposite-direction events seen within the window.
    pub consecutive_opposite: u32,
}

impl FilterState {
    /// An empty (Idle) state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a burst direction is currently established.
    pub fn is_established(&self) -> bool {
        self.last_direction.is_some()
    }

    fn establish(&mut self, event: &WheelEvent) {
        self.last_direction = Some(event.direction);
        self.last_event_time_ns = Some(event.timestamp_ns);
        self.consecutive_opposite = 0;
    }
}

/// Classify one wheel event against the running state.
///
/// This is the hot path: no allocation, no I/O, no suspension points.
pub fn classify(state: &mut FilterState, event: &WheelEvent, params: &ResolvedParams) -> Decision {
    if params.bypass {
        return Decision::Forward;
    }

    let elapsed = match state.last_event_time_ns {
        Some(last) => event.timestamp_ns.saturating_sub(last),
        None => 0,
    };

    // First-ever event, or the window has fully elapsed (inclusive).
    if state.last_direction.is_none() || elapsed >= params.interval_ns {
        state.establish(event);
        return Decision::Forward;
    }

    // Same-direction continuation re-arms the window from this event.
    if state.last_direction == Some(event.direction) {
        state.last_event_time_ns = Some(event.timestamp_ns);
        state.consecutive_opposite = 0;
        return Decision::Forward;
    }

    // Opposite direction within the interval.
    state.consecutive_opposite += 1;
    if state.consecutive_opposite >= params.threshold {
        state.establish(event);
        return Decision::Forward;
    }

    Decision::Suppress
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEC: u64 = 1_000_000_000;

    fn params(interval_secs: f64, threshold: u32) -> ResolvedParams {
        ResolvedParams {
            interval_ns: (interval_secs * SEC as f64) as u64,
            threshold,
            bypass: false,
        }
    }

    fn bypass_params() -> ResolvedParams {
        ResolvedParams {
            interval_ns: 300_000_000,
            threshold: 2,
            bypass: true,
        }
    }

    fn up(secs: f64) -> WheelEvent {
        WheelEvent::new((secs * SEC as f64) as u64, Direction::Up)
    }

    fn down(secs: f64) -> WheelEvent {
        WheelEvent::new((secs * SEC as f64) as u64, Direction::Down)
    }

    #[test]
    fn test_first_event_establishes_and_forwards() {
        let mut state = FilterState::new();
        let decision = classify(&mut state, &up(0.0), &params(0.3, 2));
        assert_eq!(decision, Decision::Forward);
        assert_eq!(state.last_direction, Some(Direction::Up));
        assert_eq!(state.last_event_time_ns, Some(0));
        assert_eq!(state.consecutive_opposite, 0);
    }

    #[test]
    fn test_threshold_two_accepts_second_opposite() {
        // Interval 0.3s, threshold 2:
        // Up@0, Down@0.1, Down@0.15 => [Forward, Suppress, Forward].
        let p = params(0.3, 2);
        let mut state = FilterState::new();

        assert_eq!(classify(&mut state, &up(0.0), &p), Decision::Forward);
        assert_eq!(classify(&mut state, &down(0.1), &p), Decision::Suppress);
        assert_eq!(classify(&mut state, &down(0.15), &p), Decision::Forward);

        assert_eq!(state.last_direction, Some(Direction::Down));
        assert_eq!(state.consecutive_opposite, 0);
        assert_eq!(state.last_event_time_ns, Some(150_000_000));
    }

    #[test]
    fn test_threshold_three_keeps_suppressing_without_extending_window() {
        // Interval 0.3s, threshold 3:
        // Up@0, Down@0.1, Down@0.2 => [Forward, Suppress, Suppress],
        // and the window still counts from t=0.
        let p = params(0.3, 3);
        let mut state = FilterState::new();

        assert_eq!(classify(&mut state, &up(0.0), &p), Decision::Forward);
        assert_eq!(classify(&mut state, &down(0.1), &p), Decision::Suppress);
        assert_eq!(classify(&mut state, &down(0.2), &p), Decision::Suppress);

        assert_eq!(state.last_event_time_ns, Some(0));
        assert_eq!(state.last_direction, Some(Direction::Up));
        assert_eq!(state.consecutive_opposite, 2);
    }

    #[test]
    fn test_interval_boundary_is_inclusive() {
        // An opposite event at exactly last + interval re-establishes.
        let p = params(0.3, 5);
        let mut state = FilterState::new();

        assert_eq!(classify(&mut state, &up(0.0), &p), Decision::Forward);
        assert_eq!(classify(&mut state, &down(0.3), &p), Decision::Forward);
        assert_eq!(state.last_direction, Some(Direction::Down));
        assert_eq!(state.consecutive_opposite, 0);
    }

    #[test]
    fn test_just_inside_boundary_is_still_jitter() {
        let p = params(0.3, 5);
        let mut state = FilterState::new();

        assert_eq!(classify(&mut state, &up(0.0), &p), Decision::Forward);
        let event = WheelEvent::new(300_000_000 - 1, Direction::Down);
        assert_eq!(classify(&mut state, &event, &p), Decision::Suppress);
    }

    #[test]
    fn test_same_direction_rearms_window_from_latest_event() {
        let p = params(0.3, 2);
        let mut state = FilterState::new();

        assert_eq!(classify(&mut state, &up(0.0), &p), Decision::Forward);
        assert_eq!(classify(&mut state, &up(0.2), &p), Decision::Forward);
        assert_eq!(state.last_event_time_ns, Some(200_000_000));

        // 0.4 is past 0.0 + interval but within 0.2 + interval: still the
        // same burst, so an opposite event here is jitter.
        assert_eq!(classify(&mut state, &down(0.4), &p), Decision::Suppress);
    }

    #[test]
    fn test_stale_direction_never_blocks_fresh_burst() {
        let p = params(0.3, 2);
        let mut state = FilterState::new();

        assert_eq!(classify(&mut state, &up(0.0), &p), Decision::Forward);
        // Long pause, then the opposite direction: a new burst, not jitter.
        assert_eq!(classify(&mut state, &down(2.0), &p), Decision::Forward);
        assert_eq!(state.last_direction, Some(Direction::Down));
    }

    #[test]
    fn test_bypass_leaves_state_untouched() {
        let mut state = FilterState {
            last_direction: Some(Direction::Up),
            last_event_time_ns: Some(123),
            consecutive_opposite: 1,
        };
        let before = state;

        assert_eq!(
            classify(&mut state, &down(0.5), &bypass_params()),
            Decision::Forward
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_counter_zero_after_any_forward() {
        let p = params(0.3, 2);
        let mut state = FilterState::new();

        let events = [up(0.0), down(0.05), up(0.1), down(0.15), down(0.2), up(1.0)];
        for event in &events {
            if classify(&mut state, event, &p) == Decision::Forward {
                assert_eq!(state.consecutive_opposite, 0);
            }
        }
    }

    #[test]
    fn test_threshold_one_accepts_every_reversal() {
        let p = params(0.3, 1);
        let mut state = FilterState::new();

        assert_eq!(classify(&mut state, &up(0.0), &p), Decision::Forward);
        assert_eq!(classify(&mut state, &down(0.1), &p), Decision::Forward);
        assert_eq!(state.last_direction, Some(Direction::Down));
    }

    #[test]
    fn test_threshold_change_mid_burst_applies_without_reset() {
        // Simulates a foreground-process switch between two jitter-eligible
        // events: the new threshold applies to the very next event while
        // the opposite counter carries over.
        let loose = params(0.3, 3);
        let tight = params(0.3, 2);
        let mut state = FilterState::new();

        assert_eq!(classify(&mut state, &up(0.0), &loose), Decision::Forward);
        assert_eq!(classify(&mut state, &down(0.05), &loose), Decision::Suppress);
        assert_eq!(state.consecutive_opposite, 1);

        // Under threshold 3 this would suppress again; under the switched-to
        // threshold 2 the counter reaches the limit and the reversal lands.
        assert_eq!(classify(&mut state, &down(0.1), &tight), Decision::Forward);
        assert_eq!(state.last_direction, Some(Direction::Down));
        assert_eq!(state.consecutive_opposite, 0);
    }

    #[test]
    fn test_replay_is_deterministic() {
        let p = params(0.3, 2);
        let events = [up(0.0), down(0.1), down(0.15), up(0.2), up(0.6), down(0.65)];

        let run = || {
            let mut state = FilterState::new();
            events
                .iter()
                .map(|e| classify(&mut state, e, &p))
                .collect::<Vec<_>>()
        };

        assert_eq!(run(), run());
    }
}
