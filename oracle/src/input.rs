use std::io::BufRead;

use anyhow::{bail, Context as _};
use forwarder_ranking::{Forwarder, ForwarderRecord};

pub const HEADER: &str = "name,cost,time,reliability,risk";

/// Read forwarders as `name,cost,time,reliability,risk` lines. The header line and blank lines
/// are skipped. Empty or absent fields are reported as missing values.
pub fn read_forwarders(input: impl BufRead) -> anyhow::Result<Vec<Forwarder>> {
    let mut forwarders = Vec::new();
    for (index, line) in input.lines().enumerate() {
        let line_number = index + 1;
        let line = line.with_context(|| format!("reading line {line_number}"))?;
        if line.trim().is_empty() || is_header(&line) {
            continue;
        }
        let record = parse_record(&line).with_context(|| format!("line {line_number}"))?;
        let forwarder =
            Forwarder::try_from(record).with_context(|| format!("line {line_number}"))?;
        forwarders.push(forwarder);
    }
    Ok(forwarders)
}

/// Whether `line` names the columns of [`HEADER`], ignoring case and whitespace around fields.
fn is_header(line: &str) -> bool {
    let mut fields = line.split(',').map(str::trim);
    HEADER
        .split(',')
        .all(|column| fields.next().is_some_and(|f| f.eq_ignore_ascii_case(column)))
        && fields.next().is_none()
}

fn parse_record(line: &str) -> anyhow::Result<ForwarderRecord> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() > 5 {
        bail!("expected at most 5 fields, found {}", fields.len());
    }
    let name = fields[0];
    if name.is_empty() {
        bail!("forwarder name is empty");
    }
    let field = |index: usize, criterion: &str| -> anyhow::Result<Option<f64>> {
        match fields.get(index).copied() {
            None | Some("") => Ok(None),
            Some(value) => value
                .parse::<f64>()
                .map(Some)
                .with_context(|| format!("`{criterion}` of `{name}` is not a number: {value:?}")),
        }
    };
    Ok(ForwarderRecord {
        name: name.to_owned(),
        cost: field(1, "cost")?,
        time: field(2, "time")?,
        reliability: field(3, "reliability")?,
        risk: field(4, "risk")?,
    })
}
