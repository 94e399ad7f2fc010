//! Rendering table rows as `key=value;` messages

use serde::{Deserialize, Serialize};

/// Column order of the `users` table
pub const USER_COLUMNS: [&str; 8] = [
    "name",
    "email",
    "phone",
    "ssn",
    "password",
    "ip",
    "last_login",
    "user_agent",
];

/// Text written for SQL NULL
pub const NULL_TEXT: &str = "NULL";

/// One row as reported by a row source, values read as text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub columns: Vec<String>,
    pub values: Vec<Option<String>>,
}

impl Row {
    pub fn new(columns: Vec<String>, values: Vec<Option<String>>) -> Self {
        Self { columns, values }
    }

    /// Render using the column names the source reported
    pub fn render(&self, separator: &str) -> String {
        render_row(&self.columns, &self.values, separator)
    }
}

/// Concatenate `name=value<separator>` for each pair.
///
/// Pairs are zipped, so extra names or extra values are ignored.
pub fn render_row<C: AsRef<str>>(
    columns: &[C],
    values: &[Option<String>],
    separator: &str,
) -> String {
    let mut message = String::new();

    for (name, value) in columns.iter().zip(values) {
        message.push_str(name.as_ref());
        message.push('=');
        message.push_str(value.as_deref().unwrap_or(NULL_TEXT));
        message.push_str(separator);
    }

    message
}
