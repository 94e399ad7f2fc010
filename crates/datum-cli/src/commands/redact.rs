use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use anyhow::Result;
use datum_config::Config;
use datum_security::{FieldRedactor, RedactionInfo};

pub fn handle(
    config: &Config,
    fields: Vec<String>,
    token: Option<String>,
    separator: Option<String>,
    report: bool,
) -> Result<()> {
    let fields = if fields.is_empty() {
        config.redaction.fields.clone()
    } else {
        fields
    };
    let token = token.unwrap_or_else(|| config.redaction.token.clone());
    let separator = separator.unwrap_or_else(|| config.redaction.separator.clone());

    let redactor = FieldRedactor::new(&fields, &token, &separator)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = redact_lines(&redactor, stdin.lock(), stdout.lock())?;

    if report {
        eprintln!("{}", serde_json::to_string(&summary)?);
    }

    Ok(())
}

/// Redact every line of `input` into `output`. Returns how often each field
/// was masked, sorted by field name.
fn redact_lines<R: BufRead, W: Write>(
    redactor: &FieldRedactor,
    input: R,
    mut output: W,
) -> Result<Vec<RedactionInfo>> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();

    for line in input.lines() {
        let (redacted, infos) = redactor.redact_with_info(&line?);
        for info in infos {
            *counts.entry(info.field).or_default() += info.count;
        }
        writeln!(output, "{}", redacted)?;
    }
    output.flush()?;

    Ok(counts
        .into_iter()
        .map(|(field, count)| RedactionInfo { field, count })
        .collect())
}
