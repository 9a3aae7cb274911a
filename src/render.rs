//! Presentation of a [`TruthTable`]: HTML markup for web front ends, a
//! coloured terminal table, and JSON.

use prettytable::{format::Alignment, Cell, Row, Table};
use serde::Serialize;

use crate::{language::Variable, table::TruthTable, verdict::Verdict};

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Renders `table` as an HTML `<table>` with one column per variable and one
/// for `expression`, followed by the verdict line.
pub fn render_result(table: &TruthTable, expression: &str) -> String {
    let mut html = String::from("<table><thead><tr>");
    for v in &table.variables {
        html.push_str(&format!("<th>{v}</th>"));
    }
    html.push_str(&format!("<th>{}</th>", escape_html(expression)));
    html.push_str("</tr></thead><tbody>");
    for row in &table.rows {
        html.push_str("<tr>");
        for cell in row.bits() {
            html.push_str(&format!("<td>{cell}</td>"));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html.push_str(&format!(
        "<p><strong>Resultado: {}</strong></p>",
        table.verdict()
    ));
    html
}

/// Builds a terminal table: a header with the variables and the expression,
/// then a green `T` or red `F` per cell.
pub fn render_terminal(table: &TruthTable, expression: &str) -> Table {
    let mut out = Table::new();
    let mut header_row = Row::new(
        table
            .variables
            .iter()
            .map(|x| Cell::new(&x.to_string()))
            .collect(),
    );
    header_row.add_cell(Cell::new(""));
    header_row.add_cell(Cell::new(expression));
    out.add_row(header_row);
    out.add_empty_row();

    let mut t_cell = Cell::new("T").style_spec("Fg");
    let mut f_cell = Cell::new("F").style_spec("Fr");

    f_cell.align(Alignment::CENTER);
    t_cell.align(Alignment::CENTER);

    let pick = |value: bool| {
        if value {
            t_cell.clone()
        } else {
            f_cell.clone()
        }
    };

    for row in &table.rows {
        let mut line = Row::new(row.values.iter().map(|&v| pick(v)).collect());
        line.add_cell(Cell::new(""));
        line.add_cell(pick(row.result));
        out.add_row(line);
    }

    out
}

#[derive(Serialize)]
struct JsonTable<'a> {
    variables: &'a [Variable],
    rows: Vec<Vec<u8>>,
    verdict: Verdict,
}

/// Serialises `table` as `{"variables": [...], "rows": [[0, 1, ...], ...],
/// "verdict": "..."}`.
pub fn render_json(table: &TruthTable) -> serde_json::Result<String> {
    serde_json::to_string(&JsonTable {
        variables: &table.variables,
        rows: table.rows.iter().map(|row| row.bits()).collect(),
        verdict: table.verdict(),
    })
}
