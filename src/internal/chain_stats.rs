#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::indexing_slicing)]

//! Measures how evenly the polynomial hash spreads keys over buckets.
//!
//! Fills fixed-capacity maps up to a range of load factors and plots chain statistics.

use chainmap::ChainedHashMap;
use env_logger::Builder;
use log::{LevelFilter, info};
use plotters::prelude::*;
use rand::{Rng, distr::Alphanumeric};

const TABLE_SIZE: usize = 100_003;
// Load factors from 0.1 to 0.95 in 10 steps
const NUM_LOAD_FACTORS: usize = 10;
// Above any load factor we test, so the bucket count stays fixed while filling
const MAX_LOAD: f64 = 2.0;
const KEY_LEN: usize = 8;

// Key sets to compare
const KEY_SETS: [&str; 2] = ["Random alphanumeric", "Sequential numbered"];

#[derive(Debug, Clone, Copy, Default)]
struct ChainStats {
    average_chain: f64,
    longest_chain: usize,
    empty_share: f64,
}

impl ChainStats {
    fn measure(lengths: &[usize]) -> Self {
        let used: Vec<usize> = lengths.iter().copied().filter(|&n| n > 0).collect();
        let average_chain = if used.is_empty() {
            0.0
        } else {
            used.iter().sum::<usize>() as f64 / used.len() as f64
        };
        Self {
            average_chain,
            longest_chain: used.iter().copied().max().unwrap_or(0),
            empty_share: (lengths.len() - used.len()) as f64 / lengths.len().max(1) as f64,
        }
    }
}

fn random_keys(count: usize) -> Vec<String> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| (&mut rng).sample_iter(Alphanumeric).take(KEY_LEN).map(char::from).collect())
        .collect()
}

fn sequential_keys(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("key-{i}")).collect()
}

fn fill(keys: &[String]) -> Result<ChainStats, chainmap::MapError> {
    let mut map = ChainedHashMap::create(TABLE_SIZE, MAX_LOAD)?;
    for key in keys {
        map.set(key.as_str(), ());
    }
    Ok(ChainStats::measure(&map.chain_lengths()))
}

fn init_logger() {
    let mut builder = Builder::new();
    builder.filter_level(LevelFilter::Info).format_timestamp_millis().parse_default_env();
    // Fine if a logger is already installed
    let _ = builder.try_init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();

    let load_factors: Vec<f64> = (0..NUM_LOAD_FACTORS)
        .map(|i| 0.1 + (0.95 - 0.1) * (i as f64) / ((NUM_LOAD_FACTORS - 1) as f64))
        .collect();
    let num_keys: Vec<usize> =
        load_factors.iter().map(|&load| (TABLE_SIZE as f64 * load) as usize).collect();
    let max_keys_needed = num_keys.iter().copied().max().unwrap_or(0);

    info!("load factors: {load_factors:?}");

    let key_sets = [random_keys(max_keys_needed), sequential_keys(max_keys_needed)];
    let mut results: Vec<Vec<ChainStats>> = vec![Vec::new(); KEY_SETS.len()];

    for &n_keys in &num_keys {
        for (set_idx, keys) in key_sets.iter().enumerate() {
            let stats = fill(&keys[..n_keys])?;
            info!(
                "{} keys, {}: avg chain = {:.3}, longest = {}, empty buckets = {:.1}%",
                n_keys,
                KEY_SETS[set_idx],
                stats.average_chain,
                stats.longest_chain,
                stats.empty_share * 100.0
            );
            results[set_idx].push(stats);
        }
    }

    let font_family = "sans-serif";
    let colors = [RGBColor(220, 50, 50), RGBColor(50, 90, 220)];
    let line_width = 2;
    let marker_size = 4;
    let text_size = 16;
    let title_size = 35;
    let x_labels: Vec<String> = load_factors.iter().map(|lf| format!("{lf:.2}")).collect();
    let last = num_keys.len() - 1;

    // Plot 1: chain lengths
    let root = BitMapBackend::new("chain_lengths.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_chain = results
        .iter()
        .flat_map(|v| v.iter())
        .fold(0, |max, s| max.max(s.longest_chain)) as f64 *
        1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption("Chain Lengths by Load Factor", (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .right_y_label_area_size(10)
        .build_cartesian_2d(0..last, 0.0..max_chain)?;

    chart
        .configure_mesh()
        .x_labels(last)
        .x_label_formatter(&|x| x_labels.get(*x).cloned().unwrap_or_default())
        .x_desc("Load Factor")
        .y_desc("Chain Length (pairs)")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    for (set_idx, &name) in KEY_SETS.iter().enumerate() {
        let color = &colors[set_idx % colors.len()];
        let solid = ShapeStyle::from(color).stroke_width(line_width);
        let faded = ShapeStyle::from(&color.mix(0.5)).stroke_width(1);

        chart
            .draw_series(LineSeries::new(
                (0..=last).map(|i| (i, results[set_idx][i].average_chain)),
                solid,
            ))?
            .label(format!("{name}: average"))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], solid));

        chart
            .draw_series(LineSeries::new(
                (0..=last).map(|i| (i, results[set_idx][i].longest_chain as f64)),
                faded,
            ))?
            .label(format!("{name}: longest"))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], faded));

        chart.draw_series((0..=last).map(|i| {
            Circle::new((i, results[set_idx][i].average_chain), marker_size, color.filled())
        }))?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    // Plot 2: bucket utilisation
    let root = BitMapBackend::new("empty_buckets.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Share of Empty Buckets", (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .right_y_label_area_size(10)
        .build_cartesian_2d(0..last, 0.0..100.0)?;

    chart
        .configure_mesh()
        .x_labels(last)
        .x_label_formatter(&|x| x_labels.get(*x).cloned().unwrap_or_default())
        .x_desc("Load Factor")
        .y_desc("Empty Buckets (%)")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    // Expected share for a uniform hash: e^-load
    let ideal_style = ShapeStyle::from(&BLACK.mix(0.3)).stroke_width(1);
    chart
        .draw_series(LineSeries::new(
            (0..=last).map(|i| (i, (-load_factors[i]).exp() * 100.0)),
            ideal_style,
        ))?
        .label("Uniform hash")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], ideal_style));

    for (set_idx, &name) in KEY_SETS.iter().enumerate() {
        let color = &colors[set_idx % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(line_width);

        chart
            .draw_series(LineSeries::new(
                (0..=last).map(|i| (i, results[set_idx][i].empty_share * 100.0)),
                line_style,
            ))?
            .label(name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series((0..=last).map(|i| {
            Circle::new((i, results[set_idx][i].empty_share * 100.0), marker_size, color.filled())
        }))?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    info!("generated plot images: chain_lengths.png, empty_buckets.png");

    Ok(())
}
