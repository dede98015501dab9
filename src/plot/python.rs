//! Renders a [`PlotDocument`] as a standalone matplotlib script.
//!
//! The script carries every value literally and needs nothing beyond
//! `matplotlib.pyplot`. Output is a pure function of the document, so the
//! same document always yields byte-identical text.

use super::document::{AxisGroup, PlotDocument};
use std::fmt::Write;

const HEADER: &str = "# thermoplot-generated plot script";
const AXES_RECT_SINGLE: &str = "[0.2, 0.1, 0.75, 0.85]";
const AXES_RECT_TWIN: &str = "[0.2, 0.1, 0.65, 0.85]";

pub fn render(doc: &PlotDocument) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_script(&mut out, doc);
    out
}

fn write_script(out: &mut String, doc: &PlotDocument) -> std::fmt::Result {
    writeln!(out, "{}", HEADER)?;
    writeln!(out, "import matplotlib.pyplot as plt")?;
    writeln!(out)?;

    writeln!(out, "x = {}", float_list(&doc.x))?;
    write_group_data(out, &doc.primary, "")?;
    writeln!(out, "xlab = {}", py_str(&doc.x_label))?;
    writeln!(out, "ylab = {}", py_str(&doc.primary.label))?;
    if let Some(secondary) = &doc.secondary {
        write_group_data(out, secondary, "2")?;
        writeln!(out, "ylab2 = {}", py_str(&secondary.label))?;
    }
    writeln!(out)?;

    writeln!(out, "lns = []")?;
    writeln!(out, "# Start figure")?;
    writeln!(out, "fig = plt.figure()")?;
    let rect = if doc.has_secondary() {
        AXES_RECT_TWIN
    } else {
        AXES_RECT_SINGLE
    };
    writeln!(out, "ax = fig.add_axes({})", rect)?;
    write_plot_loop(out, "ax", &doc.primary, "")?;

    if let Some(secondary) = &doc.secondary {
        writeln!(out, "ax2 = ax.twinx()")?;
        write_plot_loop(out, "ax2", secondary, "2")?;
        writeln!(out, "ax2.set_ylabel(ylab2)")?;
        if secondary.log {
            writeln!(out, "ax2.set_yscale('log')")?;
        }
    }

    writeln!(out, "labs = [l.get_label() for l in lns]")?;
    writeln!(out, "ax.legend(lns, labs, loc=0)")?;
    writeln!(out, "ax.set_xlabel(xlab)")?;
    writeln!(out, "ax.set_ylabel(ylab)")?;
    if doc.x_log {
        writeln!(out, "ax.set_xscale('log')")?;
    }
    if doc.primary.log {
        writeln!(out, "ax.set_yscale('log')")?;
    }
    writeln!(out, "plt.show()")
}

fn write_group_data(out: &mut String, group: &AxisGroup, suffix: &str) -> std::fmt::Result {
    if group.series.is_empty() {
        writeln!(out, "y{} = []", suffix)?;
    } else {
        writeln!(out, "y{} = [", suffix)?;
        for s in &group.series {
            writeln!(out, "    {},", float_list(&s.values))?;
        }
        writeln!(out, "]")?;
    }

    let legends: Vec<String> = group.series.iter().map(|s| py_str(&s.legend)).collect();
    writeln!(out, "leg{} = [{}]", suffix, legends.join(", "))?;

    let colors: Vec<String> = group
        .series
        .iter()
        .map(|s| py_str(&s.color.to_string()))
        .collect();
    writeln!(out, "colors{} = [{}]", suffix, colors.join(", "))
}

fn write_plot_loop(
    out: &mut String,
    axes: &str,
    group: &AxisGroup,
    suffix: &str,
) -> std::fmt::Result {
    writeln!(out, "for yi in range(len(y{})):", suffix)?;
    writeln!(
        out,
        "    lns = lns + {axes}.plot(x, y{s}[yi], {marker}, c=colors{s}[yi], label=leg{s}[yi])",
        axes = axes,
        s = suffix,
        marker = py_str(&group.marker),
    )
}

/// A Python float literal that parses back to exactly `v`.
pub fn py_float(v: f64) -> String {
    if v.is_nan() {
        "float('nan')".to_string()
    } else if v.is_infinite() {
        if v > 0.0 {
            "float('inf')".to_string()
        } else {
            "float('-inf')".to_string()
        }
    } else {
        format!("{:?}", v)
    }
}

fn float_list(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|&v| py_float(v)).collect();
    format!("[{}]", items.join(", "))
}

/// A single-quoted Python string literal.
pub fn py_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::config::{ColorMode, RenderConfig};
    use crate::plot::document::AxisData;

    fn doc(secondary: bool, config: &RenderConfig) -> PlotDocument {
        let primary = AxisData::new(
            vec![vec![0.25, 0.5, 0.125], vec![1e-12, 3.0, 2.5e20]],
            "mole fraction",
            vec!["MSCL#3: Cr[2+]-Cr[2+]-Cl-Cl".into(), "PNNM: CrCl2".into()],
        );
        let secondary = secondary.then(|| {
            AxisData::new(
                vec![vec![10.0, 20.0, 30.0]],
                "Pressure [atm]",
                vec!["total".into()],
            )
        });
        PlotDocument::new(
            vec![500.0, 700.0, 900.0],
            "Temperature [K]",
            primary,
            secondary,
            config,
        )
        .unwrap()
    }

    fn parse_list(text: &str) -> Vec<f64> {
        let inner = text.trim().trim_start_matches('[').trim_end_matches(&[']', ','][..]);
        if inner.trim().is_empty() {
            return Vec::new();
        }
        inner.split(',').map(|t| t.trim().parse::<f64>().unwrap()).collect()
    }

    fn assignment<'a>(script: &'a str, name: &str) -> &'a str {
        let prefix = format!("{} = ", name);
        script
            .lines()
            .find_map(|l| l.strip_prefix(prefix.as_str()))
            .unwrap_or_else(|| panic!("no assignment to {}", name))
    }

    fn nested_block(script: &str, name: &str) -> Vec<Vec<f64>> {
        let opener = format!("{} = [", name);
        let mut lines = script.lines().skip_while(|l| *l != opener);
        lines.next().expect("block opener");
        lines
            .take_while(|l| *l != "]")
            .map(parse_list)
            .collect()
    }

    #[test]
    fn embeds_values_literally() {
        let d = doc(true, &RenderConfig::default());
        let script = render(&d);

        assert_eq!(parse_list(assignment(&script, "x")), d.x);
        let y = nested_block(&script, "y");
        let expected: Vec<_> = d.primary.series.iter().map(|s| s.values.clone()).collect();
        assert_eq!(y, expected);
        let y2 = nested_block(&script, "y2");
        assert_eq!(y2, vec![vec![10.0, 20.0, 30.0]]);

        assert_eq!(assignment(&script, "xlab"), "'Temperature [K]'");
        assert_eq!(assignment(&script, "ylab"), "'mole fraction'");
        assert_eq!(assignment(&script, "ylab2"), "'Pressure [atm]'");
        assert_eq!(
            assignment(&script, "leg"),
            "['MSCL#3: Cr[2+]-Cr[2+]-Cl-Cl', 'PNNM: CrCl2']"
        );
        assert_eq!(assignment(&script, "leg2"), "['total']");
    }

    #[test]
    fn rendering_is_idempotent() {
        let config = RenderConfig::default();
        assert_eq!(render(&doc(true, &config)), render(&doc(true, &config)));
    }

    #[test]
    fn single_axis_layout() {
        let script = render(&doc(false, &RenderConfig::default()));
        assert!(script.contains("ax = fig.add_axes([0.2, 0.1, 0.75, 0.85])"));
        assert!(!script.contains("twinx"));
        assert!(!script.contains("y2"));
        assert!(script.contains(
            "    lns = lns + ax.plot(x, y[yi], '-.', c=colors[yi], label=leg[yi])"
        ));
        assert!(script.ends_with("plt.show()\n"));
    }

    #[test]
    fn twin_axis_layout_and_scales() {
        let mut config = RenderConfig::default();
        config.x_log = true;
        config.primary.log = true;
        config.secondary.log = true;
        config.secondary.color = ColorMode::Uniform;
        let script = render(&doc(true, &config));

        assert!(script.contains("ax = fig.add_axes([0.2, 0.1, 0.65, 0.85])"));
        assert!(script.contains("ax2 = ax.twinx()"));
        assert!(script.contains(
            "    lns = lns + ax2.plot(x, y2[yi], '--*', c=colors2[yi], label=leg2[yi])"
        ));
        assert_eq!(assignment(&script, "colors2"), "['#000000']");
        assert_eq!(assignment(&script, "colors"), "['#8000ff', '#ff0000']");
        assert!(script.contains("ax.set_xscale('log')"));
        assert!(script.contains("ax.set_yscale('log')"));
        assert!(script.contains("ax2.set_yscale('log')"));
    }

    #[test]
    fn float_literals_round_trip() {
        for v in [0.0, -0.0, 1.0, 0.1, 1e-300, 6.02214076e23, -273.15, f64::MAX] {
            assert_eq!(py_float(v).parse::<f64>().unwrap(), v);
        }
        assert_eq!(py_float(f64::NAN), "float('nan')");
        assert_eq!(py_float(f64::NEG_INFINITY), "float('-inf')");
    }

    #[test]
    fn strings_are_escaped() {
        assert_eq!(py_str("it's"), "'it\\'s'");
        assert_eq!(py_str("a\\b"), "'a\\\\b'");
        assert_eq!(py_str("two\nlines"), "'two\\nlines'");
        assert_eq!(py_str("Cr[3+]"), "'Cr[3+]'");
    }

    #[test]
    fn empty_primary_group_renders() {
        let d = PlotDocument::new(
            vec![1.0],
            "Iteration",
            AxisData::default(),
            None,
            &RenderConfig::default(),
        )
        .unwrap();
        let script = render(&d);
        assert!(script.contains("y = []\n"));
        assert!(script.contains("leg = []\n"));
    }
}
