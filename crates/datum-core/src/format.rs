//! Redacting line formatter
//!
//! Lines look like `[TAG] <name> <LEVEL> <timestamp>: <message>`. Only the
//! message part goes through the redactor.

use datum_security::{FieldRedactor, REDACTION, SEPARATOR};
use time::OffsetDateTime;
use time::macros::format_description;

use crate::{LogRecord, Result};

pub const DEFAULT_TAG: &str = "HOLBERTON";

#[derive(Debug, Clone)]
pub struct RedactingFormatter {
    redactor: FieldRedactor,
    tag: String,
}

impl RedactingFormatter {
    /// Formatter masking `fields` with `***`, values ending at `;`
    pub fn new<I, S>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let redactor = FieldRedactor::new(fields, REDACTION, SEPARATOR)?;
        Ok(Self::with_redactor(redactor, DEFAULT_TAG))
    }

    pub fn with_redactor(redactor: FieldRedactor, tag: impl Into<String>) -> Self {
        Self {
            redactor,
            tag: tag.into(),
        }
    }

    pub fn redactor(&self) -> &FieldRedactor {
        &self.redactor
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn format(&self, record: &LogRecord) -> String {
        format!(
            "[{}] {} {} {:<15}: {}",
            self.tag,
            record.name,
            record.level,
            format_timestamp(record.created),
            self.redactor.redact(&record.message)
        )
    }
}

/// `2019-11-19 18:24:25,105`
pub fn format_timestamp(ts: OffsetDateTime) -> String {
    let format = format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second],[subsecond digits:3]"
    );
    ts.format(format).unwrap_or_else(|_| ts.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Level;
    use datum_security::PII_FIELDS;
    use time::macros::datetime;

    fn record(message: &str) -> LogRecord {
        LogRecord::new("my_logger", Level::Info, message)
            .with_created(datetime!(2019-11-19 18:24:25.105 UTC))
    }

    #[test]
    fn test_format_redacts_message() {
        let formatter = RedactingFormatter::new(PII_FIELDS).unwrap();

        let line = formatter.format(&record("name=Bob;email=bob@x.com;"));

        assert_eq!(
            line,
            "[HOLBERTON] my_logger INFO 2019-11-19 18:24:25,105: name=***;email=***;"
        );
    }

    #[test]
    fn test_prefix_is_not_redacted() {
        let formatter = RedactingFormatter::new(["name"]).unwrap();
        let record = LogRecord::new("name=svc;", Level::Warning, "name=Bob;ip=1.2.3.4;")
            .with_created(datetime!(2019-11-19 18:24:25.105 UTC));

        let line = formatter.format(&record);

        assert_eq!(
            line,
            "[HOLBERTON] name=svc; WARNING 2019-11-19 18:24:25,105: name=***;ip=1.2.3.4;"
        );
    }

    #[test]
    fn test_custom_tag_and_token() {
        let redactor = FieldRedactor::new(["ssn"], "xxx", "|").unwrap();
        let formatter = RedactingFormatter::with_redactor(redactor, "AUDIT");

        let line = formatter.format(&record("ssn=123|ip=x|"));

        assert!(line.starts_with("[AUDIT] my_logger INFO "));
        assert!(line.ends_with("ssn=xxx|ip=x|"));
    }

    #[test]
    fn test_timestamp_format() {
        let ts = datetime!(2024-01-02 03:04:05.006 UTC);
        assert_eq!(format_timestamp(ts), "2024-01-02 03:04:05,006");
    }
}
