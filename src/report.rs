//! Per-document recovery and the textual report.

use std::io::{self, Write};

use crate::error::Result;
use crate::lagrange::{interpolate, interpolate_at};
use crate::loader::ShareSet;
use crate::point::Point;
use crate::source::ShareSource;
use num_bigint::BigInt;

const RULE_WIDTH: usize = 50;

/// Outcome of processing one share document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recovery {
    pub n: u64,
    pub k: usize,
    /// Every decoded share, in index order.
    pub points: Vec<Point>,
    pub secret: BigInt,
}

/// Counts over a whole run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub processed: usize,
    pub failed: usize,
}

impl Summary {
    pub fn succeeded(&self) -> usize {
        self.processed - self.failed
    }
}

/// Recover the secret of one document without printing anything.
pub fn recover(source: &dyn ShareSource) -> Result<Recovery> {
    run_source(source, &mut io::sink())
}

/// Recover the secret of one document, writing the report to `out` as
/// each step completes. Lines already written stay written on failure.
pub fn run_source<W: Write>(source: &dyn ShareSource, out: &mut W) -> Result<Recovery> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "Processing: {}", source.label())?;
    writeln!(out, "{rule}")?;

    let set = ShareSet::from_json(&source.read()?)?;
    writeln!(out, "n: {}, k: {}", set.n, set.k)?;
    writeln!(out, "Degree of polynomial: {}", set.degree())?;
    writeln!(out)?;

    let mut points = Vec::with_capacity(set.shares.len());
    for share in &set.shares {
        let radix = share.radix()?;
        let point = share.decode()?;
        writeln!(
            out,
            "Point {}: x={}, y={} (decoded from base {})",
            share.index, point.x, point.y, radix
        )?;
        points.push(point);
    }
    writeln!(out)?;

    let secret = interpolate(&points, set.k)?;
    writeln!(out, "Secret C: {secret}")?;

    writeln!(out)?;
    writeln!(out, "Verification:")?;
    for p in points.iter().take(set.k) {
        let value = interpolate_at(&points, set.k, &p.x)?;
        if value != p.y {
            log::warn!("P({}) = {} but share holds {}", p.x, value, p.y);
        }
        writeln!(out, "P({}) = {}", p.x, value)?;
    }

    Ok(Recovery {
        n: set.n,
        k: set.k,
        points,
        secret,
    })
}

/// Process every source in order. A failing source is reported on `err`,
/// with its cause chain and debug detail, and the run moves on.
pub fn run_all<W: Write, E: Write>(
    sources: &[Box<dyn ShareSource>],
    out: &mut W,
    err: &mut E,
) -> io::Result<Summary> {
    let mut summary = Summary::default();
    for source in sources {
        summary.processed += 1;
        match run_source(source.as_ref(), out) {
            Ok(recovery) => {
                log::info!("{}: secret recovered from k={} shares", source.label(), recovery.k);
            }
            Err(e) => {
                summary.failed += 1;
                writeln!(err, "Error processing {}: {}", source.label(), e)?;
                write_causes(err, &e)?;
                writeln!(err, "  detail: {e:?}")?;
            }
        }
        writeln!(out)?;
    }
    Ok(summary)
}

fn write_causes<E: Write>(err: &mut E, e: &dyn std::error::Error) -> io::Result<()> {
    let mut cause = e.source();
    while let Some(c) = cause {
        writeln!(err, "  caused by: {c}")?;
        cause = c.source();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::source::InlineSource;

    const SAMPLE: &str = r#"{
        "keys": { "n": 4, "k": 3 },
        "1": { "base": "10", "value": "4" },
        "2": { "base": "2", "value": "111" },
        "3": { "base": "10", "value": "12" },
        "6": { "base": "4", "value": "213" }
    }"#;

    #[test]
    fn report_layout() {
        let src = InlineSource::new("sample.json", SAMPLE);
        let mut out = Vec::new();
        let recovery = run_source(&src, &mut out).unwrap();
        assert_eq!(recovery.secret, BigInt::from(3));

        let text = String::from_utf8(out).unwrap();
        let expected = format!(
            "{rule}\nProcessing: sample.json\n{rule}\n\
             n: 4, k: 3\nDegree of polynomial: 2\n\n\
             Point 1: x=1, y=4 (decoded from base 10)\n\
             Point 2: x=2, y=7 (decoded from base 2)\n\
             Point 3: x=3, y=12 (decoded from base 10)\n\n\
             Secret C: 3\n\n\
             Verification:\nP(1) = 4\nP(2) = 7\nP(3) = 12\n",
            rule = "=".repeat(50)
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn verification_covers_at_most_k_points() {
        let src = InlineSource::new(
            "five",
            r#"{"keys": {"n": 5, "k": 2},
                "1": {"base": "10", "value": "3"},
                "2": {"base": "10", "value": "5"},
                "3": {"base": "10", "value": "7"},
                "4": {"base": "10", "value": "9"}}"#,
        );
        let mut out = Vec::new();
        let recovery = run_source(&src, &mut out).unwrap();
        assert_eq!(recovery.points.len(), 4);
        assert_eq!(recovery.secret, BigInt::from(1));
        let text = String::from_utf8(out).unwrap();
        let verification = text.split("Verification:\n").nth(1).unwrap();
        assert_eq!(verification, "P(1) = 3\nP(2) = 5\n");
    }

    #[test]
    fn decode_failure_keeps_earlier_lines() {
        let src = InlineSource::new(
            "broken",
            r#"{"keys": {"n": 2, "k": 2},
                "1": {"base": "10", "value": "3"},
                "2": {"base": "2", "value": "9"}}"#,
        );
        let mut out = Vec::new();
        let err = run_source(&src, &mut out).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Point 1: x=1, y=3 (decoded from base 10)"));
        assert!(!text.contains("Secret C"));
    }

    #[test]
    fn bad_base_keeps_header_and_earlier_points() {
        let src = InlineSource::new(
            "bad-base",
            r#"{"keys": {"n": 2, "k": 2},
                "1": {"base": " 7 ", "value": "10"},
                "2": {"base": "ten", "value": "42"}}"#,
        );
        let mut out = Vec::new();
        match run_source(&src, &mut out) {
            Err(Error::Decode { base, .. }) => assert_eq!(base, "ten"),
            other => panic!("expected Decode, got {other:?}"),
        }
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("n: 2, k: 2\nDegree of polynomial: 1\n"));
        assert!(text.contains("Point 1: x=1, y=7 (decoded from base 7)"));
        assert!(!text.contains("Point 2"));
    }

    #[test]
    fn recover_is_silent() {
        let src = InlineSource::new("sample", SAMPLE);
        let recovery = recover(&src).unwrap();
        assert_eq!(recovery.n, 4);
        assert_eq!(recovery.secret, BigInt::from(3));
    }

    #[test]
    fn failures_are_isolated() {
        let sources: Vec<Box<dyn ShareSource>> = vec![
            Box::new(InlineSource::new(
                "bad.json",
                r#"{"keys": {"n": 1, "k": 1}, "1": {"base": "8", "value": "9"}}"#,
            )),
            Box::new(InlineSource::new("not-json", "keys: n=3")),
            Box::new(InlineSource::new("good.json", SAMPLE)),
        ];
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let summary = run_all(&sources, &mut out, &mut err).unwrap();
        assert_eq!(summary, Summary { processed: 3, failed: 2 });
        assert_eq!(summary.succeeded(), 1);

        let out = String::from_utf8(out).unwrap();
        let err = String::from_utf8(err).unwrap();
        assert!(err.contains("Error processing bad.json"));
        assert!(err.contains("invalid digit '9'"));
        assert!(err.contains("  detail: Decode {"));
        assert!(err.contains("Error processing not-json"));
        // serde_json errors carry no further source
        assert!(err.contains("  detail: MalformedDocument("));
        assert!(!err.contains("good.json"));
        assert!(out.contains("Processing: good.json"));
        assert!(out.contains("Secret C: 3"));
    }
}
