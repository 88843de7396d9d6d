//! Prometheus text exposition format (version 0.0.4) helpers.

use std::fmt::Write;

/// Content type served alongside rendered metrics.
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Escape a label value (`\`, `"`, newline).
pub fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// Escape HELP text (`\` and newline only).
pub fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}

/// Format a sample value the way Prometheus parsers expect.
pub fn format_value(v: f64) -> String {
    if v.is_nan() {
        "NaN".into()
    } else if v == f64::INFINITY {
        "+Inf".into()
    } else if v == f64::NEG_INFINITY {
        "-Inf".into()
    } else {
        v.to_string()
    }
}

/// `name="value",...` in the given order, without braces.
pub fn format_labels(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
        .collect::<Vec<_>>()
        .join(",")
}

/// Write the `# HELP` / `# TYPE` header of a metric family.
pub fn write_header(out: &mut String, name: &str, help: &str, kind: &str) {
    let _ = writeln!(out, "# HELP {} {}", name, escape_help(help));
    let _ = writeln!(out, "# TYPE {} {}", name, kind);
}

/// Write one sample line. Empty `labels` renders without braces.
pub fn write_sample(out: &mut String, name: &str, labels: &str, value: &str) {
    if labels.is_empty() {
        let _ = writeln!(out, "{} {}", name, value);
    } else {
        let _ = writeln!(out, "{}{{{}}} {}", name, labels, value);
    }
}

/// Header plus a single unlabeled gauge sample.
pub fn write_gauge(out: &mut String, name: &str, help: &str, value: f64) {
    write_header(out, name, help, "gauge");
    write_sample(out, name, "", &format_value(value));
}

/// Header plus a single unlabeled counter sample.
pub fn write_counter(out: &mut String, name: &str, help: &str, value: f64) {
    write_header(out, name, help, "counter");
    write_sample(out, name, "", &format_value(value));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_label_values() {
        assert_eq!(escape_label(r#"a"b\c"#), r#"a\"b\\c"#);
        assert_eq!(escape_label("x\ny"), "x\\ny");
    }

    #[test]
    fn formats_special_values() {
        assert_eq!(format_value(f64::INFINITY), "+Inf");
        assert_eq!(format_value(0.005), "0.005");
        assert_eq!(format_value(2.0), "2");
    }

    #[test]
    fn unlabeled_sample_has_no_braces() {
        let mut out = String::new();
        write_gauge(&mut out, "up", "is up", 1.0);
        assert_eq!(out, "# HELP up is up\n# TYPE up gauge\nup 1\n");
    }

    #[test]
    fn labels_keep_given_order() {
        assert_eq!(format_labels(&[("b", "1"), ("a", "2")]), r#"b="1",a="2""#);
    }
}
