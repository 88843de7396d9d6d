#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::Duration;

use sample_app_core::metrics::{CounterVec, Histogram};

/// Every non-comment line must be `name[{labels}] value` with a numeric value.
fn assert_well_formed(exposition: &str) {
    for line in exposition.lines() {
        if line.starts_with("# HELP ") || line.starts_with("# TYPE ") {
            continue;
        }
        let (series, value) = line.rsplit_once(' ').expect("sample line");
        assert!(!series.is_empty(), "empty series in {line:?}");
        assert!(
            value == "+Inf" || value.parse::<f64>().is_ok(),
            "bad value in {line:?}"
        );
        if let Some(open) = series.find('{') {
            assert!(series.ends_with('}'), "unterminated labels in {line:?}");
            assert!(open > 0);
        }
    }
}

#[test]
fn counter_and_histogram_render_valid_exposition() {
    let requests = CounterVec::new("demo_total", "Demo requests", ["endpoint", "method"]);
    let latency = Histogram::new("demo_seconds", "Demo latency", &[0.01, 0.1, 1.0]).unwrap();

    requests.inc(["/", "GET"]);
    requests.inc(["/quote\"d", "POST"]);
    latency.observe(Duration::from_millis(5));
    latency.observe(Duration::from_millis(500));

    let mut out = String::new();
    requests.render(&mut out);
    latency.render(&mut out);

    assert_well_formed(&out);
    assert!(out.contains(r#"demo_total{endpoint="/quote\"d",method="POST"} 1"#));
    assert!(out.contains("demo_seconds_bucket{le=\"0.01\"} 1\n"));
    assert!(out.contains("demo_seconds_bucket{le=\"0.1\"} 1\n"));
    assert!(out.contains("demo_seconds_bucket{le=\"1\"} 2\n"));
    assert!(out.contains("demo_seconds_count 2\n"));
}

#[test]
fn histogram_count_equals_sum_of_counter_increments() {
    let requests = CounterVec::new("n_total", "n", ["code"]);
    let latency = Histogram::new("n_seconds", "n", &[0.001, 1.0]).unwrap();

    std::thread::scope(|s| {
        for t in 0..4u64 {
            let requests = &requests;
            let latency = &latency;
            s.spawn(move || {
                for i in 0..250u64 {
                    let code = if (t + i) % 2 == 0 { "200" } else { "500" };
                    requests.inc([code]);
                    latency.observe(Duration::from_micros(i));
                }
            });
        }
    });

    let snap = latency.snapshot();
    assert_eq!(requests.total(), 1000);
    assert_eq!(snap.count, 1000);
    assert_eq!(snap.buckets[1], (1.0, 1000));
}
