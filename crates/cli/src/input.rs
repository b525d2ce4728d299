//! Polyline readers: Ipe drawings and plain `x y` text.
//!
//! Ipe: every `<path>` on the first `<page>` is read. Each path line holds
//! coordinates followed by an operator; the first two numbers of a line are
//! taken as a vertex, `m` starts a new polyline and `h` closes the current one.
//! Coordinates are truncated toward zero.

use std::path::Path;

use anyhow::{bail, Context, Result};
use newton_subdiv::lattice::{Point, Polyline};
use quick_xml::events::Event;
use quick_xml::Reader;

/// Read polylines from `path`, choosing the format by extension.
pub fn read_polylines(path: &Path) -> Result<Vec<Polyline>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("ipe") | Some("xml") => {
            parse_ipe(&text).with_context(|| format!("parsing Ipe drawing {}", path.display()))
        }
        _ => parse_plain(&text).with_context(|| format!("parsing polylines {}", path.display())),
    }
}

/// Collect the path bodies of the first page of an Ipe document.
pub fn parse_ipe(xml: &str) -> Result<Vec<Polyline>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut in_page = false;
    let mut seen_page = false;
    let mut in_path = false;
    let mut out = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"page" if !seen_page => {
                    in_page = true;
                    seen_page = true;
                }
                b"path" if in_page => in_path = true,
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"page" if in_page => in_page = false,
                b"path" => in_path = false,
                _ => {}
            },
            Event::Text(t) if in_path => {
                let body = t.unescape()?;
                out.extend(parse_path_body(&body));
            }
            Event::Eof => break,
            _ => {}
        }
    }
    if !seen_page {
        bail!("no <page> element found");
    }
    Ok(out)
}

fn parse_path_body(body: &str) -> Vec<Polyline> {
    let mut out = Vec::new();
    let mut cur: Vec<Point> = Vec::new();
    for line in body.lines() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(op) = tokens.last() else {
            continue;
        };
        if *op == "m" && !cur.is_empty() {
            out.push(Polyline::new(std::mem::take(&mut cur)));
        }
        if let Some(p) = leading_point(&tokens) {
            cur.push(p);
        }
        if *op == "h" {
            if let Some(&first) = cur.first() {
                cur.push(first);
            }
        }
    }
    if !cur.is_empty() {
        out.push(Polyline::new(cur));
    }
    out
}

fn leading_point(tokens: &[&str]) -> Option<Point> {
    let coord = |t: &str| t.parse::<f64>().ok().filter(|v| v.is_finite());
    let x = coord(tokens.first()?)?;
    let y = coord(tokens.get(1)?)?;
    // `as` saturates; out-of-range values surface as `CoordinateOverflow`.
    Some(Point::new(x.trunc() as i64, y.trunc() as i64))
}

/// Plain format: one `x y` pair per line, blank lines separate polylines,
/// `#` starts a comment.
pub fn parse_plain(text: &str) -> Result<Vec<Polyline>> {
    let mut out = Vec::new();
    let mut cur: Vec<Point> = Vec::new();
    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            if !cur.is_empty() {
                out.push(Polyline::new(std::mem::take(&mut cur)));
            }
            continue;
        }
        let mut it = line.split_whitespace();
        let (Some(xs), Some(ys), None) = (it.next(), it.next(), it.next()) else {
            bail!("line {}: expected `x y`, got {line:?}", lineno + 1);
        };
        let x: i64 = xs
            .parse()
            .with_context(|| format!("line {}: bad x coordinate {xs:?}", lineno + 1))?;
        let y: i64 = ys
            .parse()
            .with_context(|| format!("line {}: bad y coordinate {ys:?}", lineno + 1))?;
        cur.push(Point::new(x, y));
    }
    if !cur.is_empty() {
        out.push(Polyline::new(cur));
    }
    Ok(out)
}
