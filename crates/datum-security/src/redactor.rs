use std::borrow::Cow;

use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Fields treated as personally identifiable by default
pub const PII_FIELDS: [&str; 5] = ["name", "email", "phone", "ssn", "password"];

/// Default replacement token
pub const REDACTION: &str = "***";

/// Default value terminator
pub const SEPARATOR: &str = ";";

#[derive(Error, Debug)]
pub enum RedactError {
    #[error("Invalid pattern for field {field:?}: {source}")]
    Pattern {
        field: String,
        #[source]
        source: regex::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionInfo {
    pub field: String,
    pub count: usize,
}

/// Compiled matcher for a single field
#[derive(Debug, Clone)]
struct FieldPattern {
    field: String,
    regex: Regex,
    replacement: String,
}

impl FieldPattern {
    fn compile(field: &str, token: &str, separator: &str) -> Result<Self, RedactError> {
        // Value is lazy so it stops at the first separator after `field=`
        let pattern = format!("{}=.*?{}", regex::escape(field), regex::escape(separator));
        let regex = Regex::new(&pattern).map_err(|source| RedactError::Pattern {
            field: field.to_string(),
            source,
        })?;

        Ok(Self {
            field: field.to_string(),
            regex,
            replacement: format!("{field}={token}{separator}"),
        })
    }

    /// Mask the first match only. Returns whether anything was replaced.
    fn mask_first(&self, message: &mut String) -> bool {
        let masked = match self.regex.replacen(message.as_str(), 1, NoExpand(&self.replacement)) {
            Cow::Owned(masked) => masked,
            Cow::Borrowed(_) => return false,
        };
        *message = masked;
        true
    }
}

/// Redactor with a fixed field list, token and separator
#[derive(Debug, Clone)]
pub struct FieldRedactor {
    patterns: Vec<FieldPattern>,
    token: String,
    separator: String,
}

impl FieldRedactor {
    /// Compile one pattern per field. Field names and the separator are
    /// matched literally.
    pub fn new<I, S>(fields: I, token: &str, separator: &str) -> Result<Self, RedactError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = fields
            .into_iter()
            .map(|field| FieldPattern::compile(field.as_ref(), token, separator))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            patterns,
            token: token.to_string(),
            separator: separator.to_string(),
        })
    }

    /// Redactor for [`PII_FIELDS`] with `***` and `;`
    pub fn pii() -> Result<Self, RedactError> {
        Self::new(PII_FIELDS, REDACTION, SEPARATOR)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|p| p.field.as_str())
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Redact the first occurrence of every configured field
    pub fn redact(&self, message: &str) -> String {
        let mut result = message.to_string();
        for pattern in &self.patterns {
            pattern.mask_first(&mut result);
        }
        result
    }

    /// Redact and report which fields were masked, in field order
    pub fn redact_with_info(&self, message: &str) -> (String, Vec<RedactionInfo>) {
        let mut result = message.to_string();
        let mut redactions = Vec::new();

        for pattern in &self.patterns {
            if pattern.mask_first(&mut result) {
                redactions.push(RedactionInfo {
                    field: pattern.field.clone(),
                    count: 1,
                });
            }
        }

        (result, redactions)
    }
}

/// One-shot redaction without keeping a compiled [`FieldRedactor`].
///
/// Never fails: a field whose pattern cannot be compiled is left alone.
pub fn filter_datum<S: AsRef<str>>(
    fields: &[S],
    redaction: &str,
    message: &str,
    separator: &str,
) -> String {
    let mut result = message.to_string();

    for field in fields {
        match FieldPattern::compile(field.as_ref(), redaction, separator) {
            Ok(pattern) => {
                pattern.mask_first(&mut result);
            }
            Err(e) => warn!(error = %e, "skipping field"),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fields_is_noop() {
        let fields: [&str; 0] = [];
        let message = "name=Bob;email=bob@x.com;";

        assert_eq!(filter_datum(&fields, "***", message, ";"), message);
    }

    #[test]
    fn test_masks_listed_fields() {
        let redacted = filter_datum(
            &["email", "phone"],
            "***",
            "email=a@b.com;phone=555;extra=x;",
            ";",
        );

        assert_eq!(redacted, "email=***;phone=***;extra=x;");
    }

    #[test]
    fn test_only_first_occurrence_masked() {
        let redacted = filter_datum(&["name"], "***", "name=John;name=Doe;", ";");

        assert_eq!(redacted, "name=***;name=Doe;");
    }

    #[test]
    fn test_absent_field_leaves_message() {
        let message = "ip=10.0.0.1;user_agent=curl;";
        let redacted = filter_datum(&["ssn"], "***", message, ";");

        assert_eq!(redacted, message);
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(filter_datum(&PII_FIELDS, "***", "", ";"), "");
    }

    #[test]
    fn test_value_stops_at_first_separator() {
        let redacted = filter_datum(&["password"], "xxx", "password=a;b;c=d;", ";");

        assert_eq!(redacted, "password=xxx;b;c=d;");
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let message = "a.b=secret;axb=visible;";

        let redacted = filter_datum(&["a.b"], "***", message, ";");
        assert_eq!(redacted, "a.b=***;axb=visible;");

        let redacted = filter_datum(&["(x|y)*"], "***", "xy=1;(x|y)*=2;", ";");
        assert_eq!(redacted, "xy=1;(x|y)*=***;");
    }

    #[test]
    fn test_separator_is_literal() {
        let redacted = filter_datum(&["name"], "***", "name=Bob|age=3|", "|");

        assert_eq!(redacted, "name=***|age=3|");
    }

    #[test]
    fn test_token_is_not_expanded() {
        let redacted = filter_datum(&["name"], "$0${1}", "name=Bob;", ";");

        assert_eq!(redacted, "name=$0${1};");
    }

    #[test]
    fn test_empty_token() {
        let redacted = filter_datum(&["ssn"], "", "ssn=123-45-6789;ip=1;", ";");

        assert_eq!(redacted, "ssn=;ip=1;");
    }

    #[test]
    fn test_unterminated_value_is_kept() {
        let redacted = filter_datum(&["email"], "***", "name=x;email=a@b.com", ";");

        assert_eq!(redacted, "name=x;email=a@b.com");
    }

    #[test]
    fn test_pii_redactor() {
        let redactor = FieldRedactor::pii().unwrap();
        let message = "name=Bob;email=bob@x.com;phone=555-0100;ssn=000-12-3456;\
                       password=hunter2;ip=127.0.0.1;";

        assert_eq!(
            redactor.redact(message),
            "name=***;email=***;phone=***;ssn=***;password=***;ip=127.0.0.1;"
        );
        assert_eq!(redactor.fields().collect::<Vec<_>>(), PII_FIELDS);
    }

    #[test]
    fn test_redact_with_info() {
        let redactor = FieldRedactor::new(["name", "ssn", "email"], "***", ";").unwrap();

        let (redacted, info) = redactor.redact_with_info("email=e;name=n;name=m;");

        assert_eq!(redacted, "email=***;name=***;name=m;");
        assert_eq!(info.len(), 2);
        assert_eq!(info[0].field, "name");
        assert_eq!(info[1].field, "email");
        assert!(info.iter().all(|i| i.count == 1));
    }

    #[test]
    fn test_redactor_matches_filter_datum() {
        let fields = ["phone", "password"];
        let redactor = FieldRedactor::new(fields, "[x]", ";").unwrap();
        let message = "phone=1;password=p;phone=2;";

        assert_eq!(
            redactor.redact(message),
            filter_datum(&fields, "[x]", message, ";")
        );
    }
}
