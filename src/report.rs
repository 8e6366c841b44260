//! Report printing: colored table or JSON

use std::io::{self, Write};
use std::time::Duration;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::measure::{Measurement, Report, RootReport};

/// Print the report to stdout with optional color.
pub fn print_report(report: &Report, use_color: bool) -> io::Result<()> {
    let color_choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color_choice);
    write_report(&mut stdout, report)
}

/// Render the report to any color-aware writer.
pub fn write_report<W: WriteColor>(out: &mut W, report: &Report) -> io::Result<()> {
    let mut bold = ColorSpec::new();
    bold.set_bold(true);

    out.set_color(&bold)?;
    writeln!(out, "Recursive Directory Iteration")?;
    out.reset()?;
    writeln!(out, "─────────────────────────────")?;
    writeln!(out, "Extensions:  {}", report.extensions.join(" "))?;

    for root in &report.roots {
        writeln!(out)?;
        write_root(out, root, &bold)?;
    }

    Ok(())
}

fn write_root<W: WriteColor>(out: &mut W, root: &RootReport, bold: &ColorSpec) -> io::Result<()> {
    out.set_color(bold)?;
    writeln!(out, "{}", root.root.display())?;
    out.reset()?;

    let fastest = root.fastest();
    let mut name_color = ColorSpec::new();
    name_color.set_fg(Some(Color::Cyan));
    let mut best_color = ColorSpec::new();
    best_color.set_fg(Some(Color::Green)).set_bold(true);

    for m in &root.measurements {
        write!(out, "  ")?;
        if Some(m.strategy) == fastest && root.measurements.len() > 1 {
            out.set_color(&best_color)?;
        } else {
            out.set_color(&name_color)?;
        }
        write!(out, "{:<18}", m.strategy.name())?;
        out.reset()?;
        writeln!(out, "{}", format_measurement(m))?;
    }

    if !root.consistent {
        let mut warn_color = ColorSpec::new();
        warn_color.set_fg(Some(Color::Red)).set_bold(true);
        out.set_color(&warn_color)?;
        writeln!(out, "  strategies disagree on the match count")?;
        out.reset()?;
    }

    Ok(())
}

fn format_measurement(m: &Measurement) -> String {
    let mut line = format!(
        "{:>10} matches  mean {:>12}  median {:>12}  min {:>12}  max {:>12}  ({} runs)",
        format_number(m.matches),
        format_duration(m.mean),
        format_duration(m.median),
        format_duration(m.min),
        format_duration(m.max),
        m.iterations,
    );
    if !m.stable {
        line.push_str("  [unstable]");
    }
    line
}

/// Human-readable duration rounded to microseconds.
fn format_duration(d: Duration) -> String {
    let rounded = Duration::from_micros(d.as_micros() as u64);
    if rounded.is_zero() {
        return "0us".to_string();
    }
    humantime::format_duration(rounded).to_string()
}

/// Format a number with thousand separators.
fn format_number(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    if n < 0 {
        result.insert(0, '-');
    }
    result
}

/// Print the report as JSON.
pub fn print_report_json(report: &Report) -> io::Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
