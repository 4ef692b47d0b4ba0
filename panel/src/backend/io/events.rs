//! Input events forwarded by a rendering layer, and their handling.
//!
//! Events arrive as JSON objects tagged by `event`:
//!
//! ```json
//! {"event": "gate_attempt", "secret": "..."}
//! {"event": "field_update", "entity": "payment", "field": "amount", "value": "220"}
//! {"event": "form_submit", "entity": "payment"}
//! {"event": "section_select", "section": "payments"}
//! ```

use anyhow::Context;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use shared::{EntityType, EventResponse, SectionKey};
use std::io::{BufRead, Write};

use crate::backend::domain::errors::PanelError;
use crate::backend::session::PanelSession;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PanelEvent {
    GateAttempt {
        secret: String,
    },
    FieldUpdate {
        entity: EntityType,
        field: String,
        value: String,
    },
    FormSubmit {
        entity: EntityType,
    },
    SectionSelect {
        section: SectionKey,
    },
}

impl PanelEvent {
    /// Parse one JSON-encoded event
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Apply one event to the session and describe the result for the operator
pub fn handle_event(session: &mut PanelSession, event: PanelEvent) -> EventResponse {
    let result = match event {
        PanelEvent::GateAttempt { secret } => {
            let outcome = session.attempt_access(&secret);
            outcome
                .into_result()
                .map(|_| (outcome.message().to_string(), None))
        }
        PanelEvent::FieldUpdate { entity, field, value } => session
            .update_field(entity, &field, &value)
            .map(|_| (format!("Updated {} {}", entity, field), None)),
        PanelEvent::FormSubmit { entity } => session.submit_form(entity).map(|record| {
            (
                format!("Added {} #{}", record.entity_type(), record.id()),
                Some(record.id()),
            )
        }),
        PanelEvent::SectionSelect { section } => session
            .select_section(section)
            .map(|_| (format!("Showing {}", section.label()), None)),
    };

    let gate_state = session.gate_state();
    match result {
        Ok((message, record_id)) => {
            info!("{}", message);
            EventResponse {
                success: true,
                message,
                record_id,
                gate_state,
            }
        }
        Err(error) => {
            log_rejection(&error);
            EventResponse {
                success: false,
                message: error.to_string(),
                record_id: None,
                gate_state,
            }
        }
    }
}

/// Handle one line of driver input.
///
/// Blank lines are skipped. A line that is not a valid event produces a
/// failed response and leaves the session untouched.
pub fn handle_line(session: &mut PanelSession, line: &str) -> Option<EventResponse> {
    if line.trim().is_empty() {
        return None;
    }

    let response = match PanelEvent::from_json(line) {
        Ok(event) => handle_event(session, event),
        Err(e) => {
            error!("Could not parse event: {}", e);
            EventResponse {
                success: false,
                message: format!("Invalid event: {}", e),
                record_id: None,
                gate_state: session.gate_state(),
            }
        }
    };
    Some(response)
}

/// Feed every input line through the session, writing one JSON response per
/// event and the final snapshot at the end
pub fn run_event_stream<R: BufRead, W: Write>(
    session: &mut PanelSession,
    input: R,
    mut output: W,
) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line.context("Failed to read event from input")?;
        if let Some(response) = handle_line(session, &line) {
            writeln!(output, "{}", serde_json::to_string(&response)?)?;
        }
    }

    writeln!(output, "{}", serde_json::to_string_pretty(&session.snapshot())?)?;
    output.flush()?;
    Ok(())
}

fn log_rejection(error: &PanelError) {
    match error {
        PanelError::AuthenticationRejected => info!("Gate attempt rejected"),
        other => warn!("Event rejected: {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::config::PanelConfig;
    use crate::backend::domain::clock::FixedClock;
    use chrono::{TimeZone, Utc};
    use shared::GateState;
    use std::sync::Arc;

    fn setup_session() -> PanelSession {
        let config = PanelConfig {
            seed_sample_data: false,
            ..PanelConfig::default()
        };
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 8, 15, 10, 0, 0).unwrap());
        PanelSession::new(&config, Arc::new(clock))
    }

    fn unlock(session: &mut PanelSession) {
        let response = handle_event(
            session,
            PanelEvent::GateAttempt {
                secret: "adalberto@2024".to_string(),
            },
        );
        assert!(response.success);
    }

    #[test]
    fn test_parse_events_from_json() {
        let event = PanelEvent::from_json(
            r#"{"event": "field_update", "entity": "payment", "field": "amount", "value": "220"}"#,
        )
        .unwrap();
        assert_eq!(
            event,
            PanelEvent::FieldUpdate {
                entity: EntityType::Payment,
                field: "amount".to_string(),
                value: "220".to_string(),
            }
        );

        let event = PanelEvent::from_json(r#"{"event": "section_select", "section": "clients"}"#).unwrap();
        assert_eq!(event, PanelEvent::SectionSelect { section: SectionKey::Clients });

        assert!(PanelEvent::from_json(r#"{"event": "delete", "id": 1}"#).is_err());
        assert!(PanelEvent::from_json("not json").is_err());
    }

    #[test]
    fn test_wrong_secret_response() {
        let mut session = setup_session();

        let response = handle_event(
            &mut session,
            PanelEvent::GateAttempt {
                secret: "errada".to_string(),
            },
        );

        assert!(!response.success);
        assert_eq!(response.message, "Senha incorreta. Tente novamente.");
        assert_eq!(response.gate_state, GateState::Locked);
    }

    #[test]
    fn test_submit_reports_record_id() {
        let mut session = setup_session();
        unlock(&mut session);

        for (field, value) in [
            ("title", "Passeio no parque"),
            ("url", "https://example.com/passeio.mp4"),
            ("type", "video"),
        ] {
            let response = handle_event(
                &mut session,
                PanelEvent::FieldUpdate {
                    entity: EntityType::Media,
                    field: field.to_string(),
                    value: value.to_string(),
                },
            );
            assert!(response.success, "{}", response.message);
        }

        let response = handle_event(&mut session, PanelEvent::FormSubmit { entity: EntityType::Media });

        assert!(response.success);
        assert_eq!(response.record_id, Some(1));
        assert_eq!(response.gate_state, GateState::Unlocked);
        assert_eq!(session.store().media()[0].title, "Passeio no parque");
    }

    #[test]
    fn test_errors_become_messages() {
        let mut session = setup_session();

        let response = handle_event(&mut session, PanelEvent::FormSubmit { entity: EntityType::Client });
        assert!(!response.success);
        assert_eq!(response.message, "The panel is locked");

        unlock(&mut session);
        let response = handle_event(
            &mut session,
            PanelEvent::FieldUpdate {
                entity: EntityType::Client,
                field: "shoe_size".to_string(),
                value: "42".to_string(),
            },
        );
        assert!(!response.success);
        assert!(response.message.contains("shoe_size"));
    }

    #[test]
    fn test_handle_line_skips_blank_and_reports_garbage() {
        let mut session = setup_session();

        assert!(handle_line(&mut session, "").is_none());
        assert!(handle_line(&mut session, "   ").is_none());

        let response = handle_line(&mut session, "{not json").unwrap();
        assert!(!response.success);
        assert!(response.message.starts_with("Invalid event"));
        assert_eq!(response.gate_state, GateState::Locked);

        let response = handle_line(&mut session, r#"{"event": "section_select", "section": "kennel"}"#).unwrap();
        assert!(!response.success);
    }

    #[test]
    fn test_run_event_stream() {
        let mut session = setup_session();
        let input = concat!(
            r#"{"event": "gate_attempt", "secret": "adalberto@2024"}"#,
            "\n",
            "\n",
            "garbage\n",
            r#"{"event": "section_select", "section": "payments"}"#,
            "\n",
        );
        let mut output = Vec::new();

        run_event_stream(&mut session, input.as_bytes(), &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let mut lines = text.lines();
        let responses: Vec<EventResponse> = lines
            .by_ref()
            .take(3)
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert!(responses[0].success);
        assert!(!responses[1].success);
        assert!(responses[1].message.starts_with("Invalid event"));
        assert!(responses[2].success);

        let snapshot: shared::PanelSnapshot =
            serde_json::from_str(&lines.collect::<Vec<_>>().join("\n")).unwrap();
        assert_eq!(snapshot.gate_state, GateState::Unlocked);
        assert_eq!(snapshot.dashboard.unwrap().active_section, SectionKey::Payments);
    }
}
