//! Writing a [`Table`] as a delimited file.
//!
//! Columns follow [`COLUMNS`](crate::COLUMNS). The list-valued
//! `supporting_people` column is flattened into one cell holding a bracketed,
//! comma-joined list of quoted names, e.g. `['Marlon Brando', 'Al Pacino']`.

use std::{fs::File, io::Write, path::Path};

use serde::Serialize;

use crate::{error::Result, record::Record, record::Table};

#[derive(Serialize)]
struct CsvRow<'a> {
    title: &'a str,
    year: u32,
    score: f64,
    primary_person: &'a str,
    supporting_people: String,
}

impl<'a> From<&'a Record> for CsvRow<'a> {
    fn from(record: &'a Record) -> Self {
        Self {
            title: &record.title,
            year: record.year,
            score: record.score,
            primary_person: &record.primary_person,
            supporting_people: format_list_cell(&record.supporting_people),
        }
    }
}

/// Encodes names as `['a', 'b']`. Names containing a single quote are
/// double-quoted instead; `[]` for an empty list.
pub fn format_list_cell(names: &[String]) -> String {
    let quoted: Vec<String> = names
        .iter()
        .map(|name| {
            if name.contains('\'') && !name.contains('"') {
                format!("\"{}\"", name)
            } else {
                format!("'{}'", name.replace('\'', "\\'"))
            }
        })
        .collect();
    format!("[{}]", quoted.join(", "))
}

/// Writes the header and one row per record, in table order.
///
/// An empty table produces the header only.
pub fn write_csv<W: Write>(table: &Table, writer: W) -> Result<()> {
    let mut csv = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    csv.write_record(crate::record::COLUMNS)?;
    for record in table {
        csv.serialize(CsvRow::from(record))?;
    }
    csv.flush()?;
    Ok(())
}

/// Creates (or truncates) `path` and writes the table to it.
pub fn export_csv(table: &Table, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_csv(table, file)?;
    tracing::info!(path = %path.display(), rows = table.len(), "wrote csv");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, supporting: &[&str]) -> Record {
        Record {
            title: title.to_string(),
            year: 1999,
            score: 8.5,
            primary_person: "Lana Wachowski".to_string(),
            supporting_people: supporting.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn render(table: &Table) -> String {
        let mut buf = Vec::new();
        write_csv(table, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_table_writes_header_only() {
        assert_eq!(
            render(&Table::default()),
            "title,year,score,primary_person,supporting_people\n"
        );
    }

    #[test]
    fn rows_follow_table_order_and_quote_when_needed() {
        let table = Table::new(vec![
            record("The Matrix", &["Keanu Reeves", "Laurence Fishburne"]),
            record("Solo, Alone", &[]),
        ]);
        let lines: Vec<String> = render(&table).lines().map(String::from).collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "The Matrix,1999,8.5,Lana Wachowski,\"['Keanu Reeves', 'Laurence Fishburne']\""
        );
        assert_eq!(lines[2], "\"Solo, Alone\",1999,8.5,Lana Wachowski,[]");
    }

    #[test]
    fn list_cell_handles_apostrophes() {
        let names = vec!["Peter O'Toole".to_string(), "Alec Guinness".to_string()];
        assert_eq!(
            format_list_cell(&names),
            "[\"Peter O'Toole\", 'Alec Guinness']"
        );
    }
}
