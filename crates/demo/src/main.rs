// File: crates/demo/src/main.rs
// Summary: Demo loads payment records (JSON or CSV) and writes dashboard SVGs in both themes.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use metrics_core::types::{HEIGHT, RING_SIZE, RING_STROKE};
use metrics_core::{
    build_daily_series_now, has_activity, record, render_area_line, render_bars, render_ring,
    totals_for, Accent, BarSpec, BucketField, ChartLineSpec,
};
use serde_json::{json, Value};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

const THEMES: [(bool, &str); 2] = [(true, "dark"), (false, "light")];

fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let records = match std::env::args().nth(1) {
        Some(raw) => {
            let path = PathBuf::from(&raw);
            let loaded = load_records(&path)
                .with_context(|| format!("failed to load '{}'", path.display()))?;
            info!("loaded {} records from {}", loaded.len(), path.display());
            loaded
        }
        None => {
            let sample = sample_records();
            info!("no input file given, using {} built-in sample records", sample.len());
            sample
        }
    };

    let ts = |r: &Value| record::timestamp_field(r, "createdAt");
    let amount = |r: &Value| record::value_field(r, "amount");

    // 1) Revenue/payments area chart per window, both themes
    let lines = vec![
        ChartLineSpec::new(BucketField::Value, Accent::Indigo, "Revenue"),
        ChartLineSpec::new(BucketField::Count, Accent::Emerald, "Payments"),
    ];
    for days in [7usize, 14, 30] {
        let series = build_daily_series_now(&records, ts, amount, days);
        let totals = totals_for(&series, &[BucketField::Value, BucketField::Count]);
        if !has_activity(&totals) {
            warn!("no activity in the trailing {days} days; charts will be flat");
        }
        for (dark, theme) in THEMES {
            let geom = render_area_line(&series, &lines, HEIGHT, dark);
            write_chart(&geom, &format!("revenue_{days}d_{theme}.svg"))?;
        }
    }

    // 2) Premium-share ring
    let premium = records
        .iter()
        .filter(|r| r.get("plan").and_then(Value::as_str) == Some("premium"))
        .count();
    for (dark, theme) in THEMES {
        let geom = render_ring(records.len() as f64, premium as f64, RING_SIZE, RING_STROKE, Accent::Violet, dark);
        write_chart(&geom, &format!("premium_ring_{theme}.svg"))?;
    }

    // 3) Plan breakdown bars
    let bars = plan_breakdown(&records);
    for (dark, theme) in THEMES {
        let geom = render_bars(&bars, dark);
        write_chart(&geom, &format!("plans_bars_{theme}.svg"))?;
    }

    Ok(())
}

fn write_chart(geom: &metrics_core::PlotGeometry, name: &str) -> Result<()> {
    let out = out_path(name);
    metrics_render_svg::write_svg(geom, &out)
        .with_context(|| format!("writing {}", out.display()))?;
    info!("wrote {}", out.display());
    Ok(())
}

/// Count records per plan tag, keeping first-seen order.
fn plan_breakdown(records: &[Value]) -> Vec<BarSpec> {
    let accents = [
        Accent::Indigo,
        Accent::Emerald,
        Accent::Amber,
        Accent::Rose,
        Accent::Sky,
        Accent::Violet,
    ];
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, f64> = HashMap::new();
    for r in records {
        let plan = r.get("plan").and_then(Value::as_str).unwrap_or("unknown").to_string();
        if !counts.contains_key(&plan) {
            order.push(plan.clone());
        }
        *counts.entry(plan).or_insert(0.0) += 1.0;
    }
    order
        .iter()
        .enumerate()
        .map(|(i, plan)| {
            let n = counts.get(plan).copied().unwrap_or(0.0);
            BarSpec::new(plan.clone(), n, accents[i % accents.len()])
        })
        .collect()
}

fn out_path(name: &str) -> PathBuf {
    let out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.join(name)
}

/// Load records from a JSON array or a headed CSV file.
fn load_records(path: &Path) -> Result<Vec<Value>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    match ext.as_str() {
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => anyhow::bail!("unsupported input extension '{other}' (expected .json or .csv)"),
    }
}

fn load_json(path: &Path) -> Result<Vec<Value>> {
    let text = std::fs::read_to_string(path)?;
    let parsed: Value = serde_json::from_str(&text)?;
    match parsed {
        Value::Array(items) => Ok(items),
        _ => anyhow::bail!("expected a top-level JSON array of records"),
    }
}

/// CSV rows become JSON objects keyed by header, so both loaders feed the
/// same field-extraction pipeline.
fn load_csv(path: &Path) -> Result<Vec<Value>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let mut obj = serde_json::Map::new();
        for (i, header) in headers.iter().enumerate() {
            let field = match rec.get(i) {
                Some(f) => f.trim(),
                None => continue,
            };
            // integers first so epoch-millis columns stay i64-exact
            let value = if let Ok(n) = field.parse::<i64>() {
                Value::from(n)
            } else if let Ok(f) = field.parse::<f64>() {
                Value::from(f)
            } else {
                Value::String(field.to_string())
            };
            obj.insert(header.clone(), value);
        }
        out.push(Value::Object(obj));
    }
    Ok(out)
}

/// Built-in sample: a few weeks of payments with plan tags. Offsets are
/// fixed so repeated runs chart the same shape relative to "today".
fn sample_records() -> Vec<Value> {
    let now = Utc::now();
    let plans = ["basic", "plus", "premium"];
    let mut out = Vec::new();
    for i in 0..120usize {
        // spread over ~32 days so part of the data falls outside every window
        let back = (i * 13) % 32;
        let minute = (i * 37) % 1440;
        let ts = now - Duration::days(back as i64) - Duration::minutes(minute as i64);
        let amount = 4.99 + (i % 5) as f64 * 5.0;
        out.push(json!({
            "id": format!("pay_{i:04}"),
            "createdAt": ts.to_rfc3339(),
            "amount": amount,
            "plan": plans[i % plans.len()],
        }));
    }
    out
}
