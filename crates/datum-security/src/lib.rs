//! Field redaction for `key=value` log messages
//!
//! Masks the value of each configured field with a fixed token. Only the
//! first occurrence of a field is masked per call.

pub mod redactor;

pub use redactor::{
    FieldRedactor, PII_FIELDS, REDACTION, RedactError, RedactionInfo, SEPARATOR, filter_datum,
};
