//! Measurement result documents and scatterplot rendering.
//!
//! A result document looks like:
//!
//! ```json
//! {"data": {"O(n)": {"x": [1, 2, 3], "y": [0.9, 1.0, 1.1]}}}
//! ```
//!
//! Each series holds parallel coordinate arrays. Rendering produces a
//! standalone SVG scatterplot.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Complexity classes in plotting order, with their point colors.
pub const COMPLEXITY_COLORS: [(&str, &str); 10] = [
    ("O(1)", "cornflowerblue"),
    ("O(log n)", "deepskyblue"),
    ("O(sqrt(n))", "darkturquoise"),
    ("O(n)", "aqua"),
    ("O(n log n)", "mediumspringgreen"),
    ("O(n^2)", "limegreen"),
    ("O(n^3)", "yellow"),
    ("O(1.5^n)", "orange"),
    ("O(2^n)", "orangered"),
    ("O(n^n)", "red"),
];

const FALLBACK_COLOR: &str = "black";

// Fixed plot window, matching the normalized ratios the harness reports.
const Y_MIN: f64 = -0.25;
const Y_MAX: f64 = 3.0;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 480.0;
const MARGIN: f64 = 48.0;

#[derive(Debug, Error)]
pub enum ResultsError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse result JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Series '{name}' has {x} x values but {y} y values")]
    MismatchedSeries { name: String, x: usize, y: usize },

    #[error("Result document contains no series")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn max_x(&self) -> Option<f64> {
        self.x.iter().copied().fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.max(v))))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultDocument {
    pub data: BTreeMap<String, Series>,
}

impl ResultDocument {
    /// Parse and validate a result document.
    pub fn parse(body: &str) -> Result<Self, ResultsError> {
        let doc: ResultDocument = serde_json::from_str(body)?;
        doc.validate()?;
        Ok(doc)
    }

    pub fn load(path: &Path) -> Result<Self, ResultsError> {
        let body = fs::read_to_string(path)
            .map_err(|source| ResultsError::Read { path: path.to_path_buf(), source })?;
        Self::parse(&body)
    }

    /// Every series must have parallel arrays; at least one series must exist.
    pub fn validate(&self) -> Result<(), ResultsError> {
        if self.data.is_empty() {
            return Err(ResultsError::Empty);
        }
        for (name, series) in &self.data {
            if series.x.len() != series.y.len() {
                return Err(ResultsError::MismatchedSeries {
                    name: name.clone(),
                    x: series.x.len(),
                    y: series.y.len(),
                });
            }
        }
        Ok(())
    }

    /// Series in complexity order; unknown names follow, sorted by name.
    pub fn ordered_series(&self) -> Vec<(&str, &Series)> {
        let mut out: Vec<(&str, &Series)> =
            self.data.iter().map(|(name, series)| (name.as_str(), series)).collect();
        out.sort_by_key(|(name, _)| (class_rank(name), *name));
        out
    }
}

fn class_rank(name: &str) -> usize {
    COMPLEXITY_COLORS
        .iter()
        .position(|(class, _)| *class == name)
        .unwrap_or(COMPLEXITY_COLORS.len())
}

/// Point color for a series name.
pub fn color_for(name: &str) -> &'static str {
    COMPLEXITY_COLORS
        .iter()
        .find(|(class, _)| *class == name)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_COLOR)
}

/// Plot title derived from a result path: the file name up to its first dot.
pub fn plot_title(path: &Path) -> String {
    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("results");
    file_name.split('.').next().unwrap_or(file_name).to_string()
}

/// Saved result entries in `data_dir`, sorted, hidden entries skipped.
pub fn list_results(data_dir: &Path) -> Result<Vec<String>, ResultsError> {
    let read_err = |source| ResultsError::Read { path: data_dir.to_path_buf(), source };
    let mut names = Vec::new();
    for entry in fs::read_dir(data_dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') {
            continue;
        }
        names.push(name);
    }
    names.sort();
    Ok(names)
}

/// Render `doc` as an SVG scatterplot.
///
/// The x window is `[-1, max_x + 2]`, the y window `[-0.25, 3]`. Point area is
/// `max(1000 / n, 2)` where `n` is the length of the first plotted series.
pub fn render_svg(title: &str, doc: &ResultDocument) -> String {
    let series = doc.ordered_series();
    let x_min = -1.0;
    let x_max = series.iter().filter_map(|(_, s)| s.max_x()).fold(-1.0_f64, f64::max) + 2.0;
    let first_len = series.first().map_or(0, |(_, s)| s.len());
    let area = if first_len == 0 { 2.0 } else { (100.0 * 10.0 / first_len as f64).max(2.0) };
    let radius = (area / std::f64::consts::PI).sqrt();

    let plot_w = WIDTH - 2.0 * MARGIN;
    let plot_h = HEIGHT - 2.0 * MARGIN;
    let sx = |x: f64| MARGIN + (x - x_min) / (x_max - x_min) * plot_w;
    let sy = |y: f64| MARGIN + (Y_MAX - y) / (Y_MAX - Y_MIN) * plot_h;

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{WIDTH}\" height=\"{HEIGHT}\" \
         viewBox=\"0 0 {WIDTH} {HEIGHT}\">\n"
    ));
    svg.push_str(&format!("<rect width=\"{WIDTH}\" height=\"{HEIGHT}\" fill=\"white\"/>\n"));
    svg.push_str(&format!(
        "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"16\">{}</text>\n",
        WIDTH / 2.0,
        MARGIN / 2.0,
        xml_escape(&format!("Data Scatterplot for {title}"))
    ));
    svg.push_str(&format!(
        "<rect x=\"{MARGIN}\" y=\"{MARGIN}\" width=\"{plot_w}\" height=\"{plot_h}\" \
         fill=\"none\" stroke=\"black\"/>\n"
    ));

    for (name, s) in &series {
        let color = color_for(name);
        svg.push_str(&format!("<g class=\"series\" data-name=\"{}\">\n", xml_escape(name)));
        for (x, y) in s.x.iter().zip(&s.y) {
            svg.push_str(&format!(
                "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{radius:.2}\" fill=\"{color}\"/>\n",
                sx(*x),
                sy(*y)
            ));
        }
        svg.push_str("</g>\n");
    }

    // Legend, upper right.
    let legend_x = WIDTH - MARGIN - 150.0;
    let mut legend_y = MARGIN + 18.0;
    svg.push_str(&format!(
        "<text x=\"{legend_x}\" y=\"{legend_y}\" font-size=\"12\">Time Complexities</text>\n"
    ));
    for (name, _) in &series {
        legend_y += 16.0;
        svg.push_str(&format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"5\" fill=\"{}\"/>\n",
            legend_x + 5.0,
            legend_y - 4.0,
            color_for(name)
        ));
        svg.push_str(&format!(
            "<text x=\"{}\" y=\"{legend_y}\" font-size=\"12\">{}</text>\n",
            legend_x + 16.0,
            xml_escape(name)
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

fn xml_escape(value: &str) -> String {
    value.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;").replace('"', "&quot;")
}
