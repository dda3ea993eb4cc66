//! Match driver: builds the strategy and turn loop from config and plays
//! one match over a reader/writer pair.

use std::io::{BufRead, Write};

use tracing::info;

use tankbot_agent::strategy::StandardStrategy;
use tankbot_agent::transport::LineTransport;
use tankbot_agent::turn_loop::{MatchSummary, TurnLoop};
use tankbot_core::AgentError;

use crate::config::AgentConfig;

/// Play a full match: handshake, turns, until the end-of-game sentinel.
pub fn run_match<R: BufRead, W: Write>(
    config: &AgentConfig,
    reader: R,
    writer: W,
) -> Result<MatchSummary, AgentError> {
    info!(
        aim_mode = ?config.aim_mode,
        bullet_speed = config.bullet_speed,
        "standard strategy loaded"
    );
    let strategy = StandardStrategy::new(config.aim_mode, config.bullet_speed);
    let transport = LineTransport::new(reader, writer);

    let mut turn_loop = TurnLoop::handshake(transport, strategy, config.signals())?;
    turn_loop.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::io::Cursor;

    fn script(lines: &[Value]) -> Cursor<String> {
        let text: String = lines.iter().map(|line| format!("{line}\n")).collect();
        Cursor::new(text)
    }

    #[test]
    fn test_full_match_over_lines() {
        let input = script(&[
            json!({"message": {"your-tank-id": "A"}}),
            json!({"message": {"updated_objects": {
                "A": {"type": 1, "position": [0.0, 0.0], "velocity": [0.0, 0.0]},
                "B": {"type": 1, "position": [100.0, 0.0], "velocity": [0.0, 0.0]},
                "cb": {"type": 6, "position": [[0.0, 0.0], [10.0, 0.0], [10.0, 8.0], [0.0, 8.0]]}
            }}}),
            json!("END_INIT"),
            json!({"message": {"updated_objects": {}, "deleted_objects": []}}),
            json!("END"),
        ]);
        let mut output = Vec::new();

        let summary = run_match(&AgentConfig::default(), input, &mut output).unwrap();
        assert_eq!(summary.turns, 1);
        assert_eq!(summary.actions_sent, 1);

        let written = String::from_utf8(output).unwrap();
        let lines: Vec<Value> = written
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines, vec![json!({"path": [5.0, 4.0], "shoot": 0.0})]);
    }

    #[test]
    fn test_bare_sentinel_tokens() {
        let input = Cursor::new(
            "{\"message\": {\"your-tank-id\": \"A\"}}\nEND_INIT\nEND\n".to_string(),
        );
        let summary = run_match(&AgentConfig::default(), input, Vec::new()).unwrap();
        assert_eq!(summary.turns, 0);
    }

    #[test]
    fn test_garbage_line_is_fatal() {
        let input = Cursor::new(
            "{\"message\": {\"your-tank-id\": \"A\"}}\nEND_INIT\nnot json at all\n".to_string(),
        );
        let result = run_match(&AgentConfig::default(), input, Vec::new());
        assert!(matches!(result, Err(AgentError::Protocol(_))));
    }

    #[test]
    fn test_eof_before_end_is_fatal() {
        let input = Cursor::new("{\"message\": {\"your-tank-id\": \"A\"}}\n".to_string());
        let result = run_match(&AgentConfig::default(), input, Vec::new());
        assert!(matches!(result, Err(AgentError::TransportClosed)));
    }
}
