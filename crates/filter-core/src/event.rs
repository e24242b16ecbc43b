//! Wheel event types and the JSONL trace format.
//!
//! Live events are produced by the hook adapter, classified once, and
//! dropped — they are never persisted on the hook path. The serde
//! derives exist for the replay tooling and test fixtures, which store
//! event sequences in append-only JSONL.

use serde::{Deserialize, Serialize};

/// Monotonic timestamp in nanoseconds since the hook clock epoch.
pub type TimestampNs = u64;

/// Scroll direction derived from the signed wheel delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Derive a direction from a signed wheel delta.
    ///
    /// Positive deltas scroll up, negative down. A zero delta should not
    /// occur in practice, but when it does there is no direction to derive
    /// and the event must be passed through without classification.
    pub fn from_delta(delta: i32) -> Option<Self> {
        match delta {
            d if d > 0 => Some(Self::Up),
            d if d < 0 => Some(Self::Down),
            _ => None,
        }
    }

    /// The opposite direction.
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

/// A single wheel notification, as seen by the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelEvent {
    /// Monotonic nanoseconds since the hook clock epoch.
    #[serde(rename = "t")]
    pub timestamp_ns: TimestampNs,

    /// Scroll direction.
    pub direction: Direction,

    /// Foreground executable name at delivery time, when resolvable
    /// (for example "notepad.exe"). Absent when there is no foreground
    /// window or the process cannot be queried.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process: Option<String>,
}

impl WheelEvent {
    /// Create an event with no foreground process attached.
    pub fn new(timestamp_ns: TimestampNs, direction: Direction) -> Self {
        Self {
            timestamp_ns,
            direction,
            process: None,
        }
    }

    /// Create an event attributed to a foreground executable.
    pub fn for_process(
        timestamp_ns: TimestampNs,
        direction: Direction,
        process: impl Into<String>,
    ) -> Self {
        Self {
            timestamp_ns,
            direction,
            process: Some(process.into()),
        }
    }

    /// Timestamp as fractional seconds since the hook clock epoch.
    pub fn timestamp_secs(&self) -> f64 {
        self.timestamp_ns as f64 / 1_000_000_000.0
    }
}

/// Parse a wheel trace from JSONL content (one JSON object per line).
/// Lines starting with `#` are header comments and are skipped.
pub fn parse_trace(jsonl: &str) -> Result<Vec<WheelEvent>, serde_json::Error> {
    jsonl
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(serde_json::from_str)
        .collect()
}

/// Serialize a wheel trace to JSONL format.
pub fn serialize_trace(events: &[WheelEvent]) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    for event in events {
        output.push_str(&serde_json::to_string(event)?);
        output.push('\n');
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_delta() {
        assert_eq!(Direction::from_delta(120), Some(Direction::Up));
        assert_eq!(Direction::from_delta(-120), Some(Direction::Down));
        assert_eq!(Direction::from_delta(1), Some(Direction::Up));
        assert_eq!(Direction::from_delta(-1), Some(Direction::Down));
        assert_eq!(Direction::from_delta(0), None);
    }

    #[test]
    fn test_direction_opposite() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
    }

    #[test]
    fn test_event_roundtrip() {
        let event = WheelEvent::for_process(1_000_000_000, Direction::Up, "notepad.exe");
        let json = serde_json::to_string(&event).unwrap();
        let parsed: WheelEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, parsed);
    }

    #[test]
    fn test_event_without_process_omits_field() {
        let event = WheelEvent::new(0, Direction::Down);
        let json = serde_json::to_string(&event).unwrap();
        assert!(!json.contains("process"));
        let parsed: WheelEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.process, None);
    }

    #[test]
    fn test_trace_roundtrip() {
        let events = vec![
            WheelEvent::new(0, Direction::Up),
            WheelEvent::new(100_000_000, Direction::Down),
            WheelEvent::for_process(150_000_000, Direction::Down, "code.exe"),
        ];
        let jsonl = serialize_trace(&events).unwrap();
        let parsed = parse_trace(&jsonl).unwrap();
        assert_eq!(events, parsed);
    }

    #[test]
    fn test_parse_trace_skips_header_comment() {
        let jsonl = "# scrollguard trace v1\n{\"t\":0,\"direction\":\"up\"}\n";
        let parsed = parse_trace(jsonl).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].direction, Direction::Up);
    }

    #[test]
    fn test_timestamp_secs() {
        let event = WheelEvent::new(1_500_000_000, Direction::Up);
        assert!((event.timestamp_secs() - 1.5).abs() < 1e-9);
    }
}
