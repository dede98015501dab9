use std::io::{self, Write};

use thermoplot::ElementRecord;
use thermoplot::extract::{AssembledSeries, SkippedRecord};

use crate::config::SolverInput;
use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

const MAX_SKIPPED_ROWS: usize = 10;

pub fn print_element_table(record: &ElementRecord) {
    let mut out = io::stderr().lock();

    let rows = vec![
        ("Declared", record.declared_elements.to_string()),
        ("Valid", record.element_count().to_string()),
        ("Dropped", record.dropped_count().to_string()),
        ("Phases", record.phase_count.to_string()),
    ];
    print_kv_table(&mut out, "Data File Summary", &rows);

    let cells: Vec<[String; 3]> = record
        .elements
        .iter()
        .enumerate()
        .map(|(i, el)| {
            [
                (i + 1).to_string(),
                el.symbol().to_string(),
                el.atomic_number().to_string(),
            ]
        })
        .collect();
    print_grid(&mut out, "Elements", ["#", "Symbol", "Z"], &cells);
}

pub fn print_series_summary(series: &AssembledSeries, records: usize, x_key: &str) {
    let mut out = io::stderr().lock();

    let rows = vec![
        ("Records", records.to_string()),
        ("Rows kept", series.row_count().to_string()),
        ("Rows skipped", series.skipped.len().to_string()),
        ("x key", x_key.to_string()),
        ("Primary series", series.y.len().to_string()),
        ("Secondary series", series.y2.len().to_string()),
    ];
    print_kv_table(&mut out, "Series Summary", &rows);

    if !series.skipped.is_empty() {
        print_skipped(&mut out, &series.skipped);
    }
}

pub fn print_input_summary(input: &SolverInput) {
    let mut out = io::stderr().lock();

    let symbols = |els: &[thermoplot::Element]| {
        els.iter()
            .map(|e| e.symbol())
            .collect::<Vec<_>>()
            .join(" ")
    };

    let rows = match input {
        SolverInput::Script(script) => vec![
            ("Mode", "input script".to_string()),
            ("Data file", script.data_file.clone()),
            ("Elements", symbols(&script.elements)),
            (
                "Temperature",
                format!(
                    "{} → {} ({} steps)",
                    script.temperature.start, script.temperature.end, script.temperature.steps
                ),
            ),
            (
                "Pressure",
                format!(
                    "{} → {} ({} steps)",
                    script.pressure.start, script.pressure.end, script.pressure.steps
                ),
            ),
        ],
        SolverInput::List(list) => vec![
            ("Mode", "calculation list".to_string()),
            ("Data file", list.data_file.clone()),
            ("Elements", symbols(&list.elements)),
            ("Calculations", list.calculations.len().to_string()),
        ],
    };
    print_kv_table(&mut out, "Solver Input", &rows);
}

fn print_skipped(out: &mut impl Write, skipped: &[SkippedRecord]) {
    let cells: Vec<[String; 2]> = skipped
        .iter()
        .take(MAX_SKIPPED_ROWS)
        .map(|s| [s.index.clone(), s.reason.to_string()])
        .collect();
    print_grid(out, "Skipped Calculations", ["Index", "Reason"], &cells);

    if skipped.len() > MAX_SKIPPED_ROWS {
        let _ = writeln!(
            out,
            "{}  ({} more skipped)",
            INDENT,
            skipped.len() - MAX_SKIPPED_ROWS
        );
    }
}

/// Draws a boxed table whose last column takes the remaining width.
fn print_grid<const N: usize>(
    out: &mut impl Write,
    title: &str,
    headers: [&str; N],
    rows: &[[String; N]],
) {
    let mut widths = [0usize; N];
    for (i, header) in headers.iter().enumerate() {
        widths[i] = header.chars().count();
        for row in rows {
            widths[i] = widths[i].max(row[i].chars().count());
        }
    }
    let fixed: usize = widths[..N - 1].iter().map(|w| w + 3).sum();
    widths[N - 1] = widths[N - 1].min(SAFE_TABLE_WIDTH.saturating_sub(fixed + 4));

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}{}", INDENT, left, segments.join(mid), right)
    };
    let line = |cells: [&str; N]| {
        let parts: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!(" {:<w$} ", truncate(cell, w), w = w))
            .collect();
        format!("{}│{}│", INDENT, parts.join("│"))
    };

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(out, "{}", rule("┌", "┬", "┐"));
    let _ = writeln!(out, "{}", line(headers));
    let _ = writeln!(out, "{}", rule("├", "┼", "┤"));
    for row in rows {
        let _ = writeln!(out, "{}", line(std::array::from_fn(|i| row[i].as_str())));
    }
    let _ = writeln!(out, "{}", rule("└", "┴", "┘"));
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + 6);
    let k_line = "─".repeat(key_w + 2);
    let v_line = "─".repeat(val_w + 2);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(out, "{}┌{}┬{}┐", INDENT, k_line, v_line);
    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
            key_w = key_w,
            val_w = val_w
        );
    }
    let _ = writeln!(out, "{}└{}┴{}┘", INDENT, k_line, v_line);
}
