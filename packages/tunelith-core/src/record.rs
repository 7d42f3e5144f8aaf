//! The contact message record.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Wall-clock format used for record timestamps.
///
/// Zero-padded and fixed-width, so lexicographic order is chronological order.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const TRANSCRIPT_HEADER: &str = "=== NOUVEAU MESSAGE ===";
const TRANSCRIPT_RULE_WIDTH: usize = 50;

/// One contact-form submission as persisted by the message store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageRecord {
    /// Local time of submission, `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,
    /// Sender name
    pub name: String,
    /// Sender email address
    pub email: String,
    /// Message body
    pub message: String,
}

impl MessageRecord {
    /// Create a record stamped with the current local time.
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        Self::with_timestamp(&timestamp, name, email, message)
    }

    /// Create a record with an explicit timestamp.
    pub fn with_timestamp(timestamp: &str, name: &str, email: &str, message: &str) -> Self {
        Self {
            timestamp: timestamp.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    /// Render the human-readable block appended to the transcript.
    pub fn transcript_block(&self) -> String {
        format!(
            "{TRANSCRIPT_HEADER}\nDate: {}\nNom: {}\nEmail: {}\nMessage: {}\n{}\n\n",
            self.timestamp,
            self.name,
            self.email,
            self.message,
            "=".repeat(TRANSCRIPT_RULE_WIDTH),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_new_uses_fixed_timestamp_format() {
        let record = MessageRecord::new("Ada", "ada@example.com", "Bonjour");

        assert_eq!(record.timestamp.len(), 19);
        assert!(NaiveDateTime::parse_from_str(&record.timestamp, TIMESTAMP_FORMAT).is_ok());
        assert_eq!(record.name, "Ada");
    }

    #[test]
    fn test_transcript_block() {
        let record = MessageRecord::with_timestamp(
            "2024-01-01 10:00:00",
            "Ada",
            "ada@example.com",
            "Bonjour",
        );

        let expected = format!(
            "=== NOUVEAU MESSAGE ===\n\
             Date: 2024-01-01 10:00:00\n\
             Nom: Ada\n\
             Email: ada@example.com\n\
             Message: Bonjour\n\
             {}\n\n",
            "=".repeat(50)
        );
        assert_eq!(record.transcript_block(), expected);
    }

    #[test]
    fn test_json_field_names() {
        let record = MessageRecord::with_timestamp("2024-01-01 10:00:00", "Zoé", "z@e.fr", "Salut");
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["timestamp"], "2024-01-01 10:00:00");
        assert_eq!(value["name"], "Zoé");
        assert_eq!(value["email"], "z@e.fr");
        assert_eq!(value["message"], "Salut");
    }
}
