use crate::dashboard::view::{BarPanel, DashboardView, LinePanel, NO_DATA};
use crate::error::Result;
use crate::utils::constants::{
    BLUES_R, DAILY_CHART_FILE, DATE_FORMAT, DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, PRIMARY_COLOR,
    SEASONAL_CHART_FILE, TIME_OF_DAY_CHART_FILE, TOP_HOURS_CHART_FILE,
};
use crate::utils::format::format_number;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

const TITLE_FONT: (&str, u32) = ("sans-serif", 28);
const LABEL_FONT: (&str, u32) = ("sans-serif", 18);

/// Parse a `#rrggbb` colour; anything else falls back to black.
pub fn parse_color(color: &str) -> RGBColor {
    if let Some(hex) = color.strip_prefix('#') {
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return RGBColor(r, g, b);
            }
        }
    }
    RGBColor(0, 0, 0)
}

/// Renders the chart panels of a dashboard view as SVG.
pub struct ChartWriter {
    width: u32,
    height: u32,
}

impl ChartWriter {
    pub fn new() -> Self {
        Self {
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
        }
    }

    pub fn with_size(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Write the four chart files into `dir`, creating it if needed.
    pub fn write_all(&self, view: &DashboardView, dir: &Path) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(dir)?;

        let blues: Vec<RGBColor> = BLUES_R.iter().map(|c| parse_color(c)).collect();
        let primary = vec![parse_color(PRIMARY_COLOR)];

        let charts = [
            (SEASONAL_CHART_FILE, self.render_bar_chart(&view.seasonal, &blues)?),
            (DAILY_CHART_FILE, self.render_line_chart(&view.daily)?),
            (TIME_OF_DAY_CHART_FILE, self.render_bar_chart(&view.time_of_day, &primary)?),
            (TOP_HOURS_CHART_FILE, self.render_bar_chart(&view.top_hours, &blues)?),
        ];

        let mut written = Vec::with_capacity(charts.len());
        for (file_name, svg) in charts {
            let path = dir.join(file_name);
            std::fs::write(&path, svg)?;
            tracing::info!("Wrote chart {}", path.display());
            written.push(path);
        }

        Ok(written)
    }

    pub fn render_bar_chart(&self, panel: &BarPanel, colors: &[RGBColor]) -> Result<String> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (self.width, self.height)).into_drawing_area();
            root.fill(&WHITE)?;

            if panel.is_empty() {
                self.draw_placeholder(&root, &panel.title)?;
            } else {
                self.draw_bars(&root, panel, colors)?;
            }
            root.present()?;
        }
        Ok(svg)
    }

    pub fn render_line_chart(&self, panel: &LinePanel) -> Result<String> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (self.width, self.height)).into_drawing_area();
            root.fill(&WHITE)?;

            if panel.is_empty() {
                self.draw_placeholder(&root, &panel.title)?;
            } else {
                self.draw_line(&root, panel)?;
            }
            root.present()?;
        }
        Ok(svg)
    }

    fn draw_bars<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        panel: &BarPanel,
        colors: &[RGBColor],
    ) -> Result<()> {
        let n = panel.bars.len() as i32;
        let y_max = (panel.max_value() as f64 * 1.1).max(1.0);
        let labels = panel.labels();

        let mut chart = ChartBuilder::on(root)
            .caption(&panel.title, TITLE_FONT)
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(90)
            .build_cartesian_2d((0..n).into_segmented(), 0f64..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc(panel.x_label.as_str())
            .y_desc(panel.y_label.as_str())
            .axis_desc_style(LABEL_FONT)
            .x_labels(panel.bars.len())
            .x_label_formatter(&|v| match v {
                SegmentValue::CenterOf(i) => labels
                    .get(*i as usize)
                    .map(|s| s.to_string())
                    .unwrap_or_default(),
                _ => String::new(),
            })
            .y_label_formatter(&|v| format_number(v.max(0.0) as u64))
            .draw()?;

        let fallback = [parse_color(PRIMARY_COLOR)];
        let colors = if colors.is_empty() { &fallback[..] } else { colors };

        chart.draw_series(panel.bars.iter().enumerate().map(|(i, bar)| {
            let color = colors[i % colors.len()];
            let i = i as i32;
            let mut rect = Rectangle::new(
                [
                    (SegmentValue::Exact(i), 0f64),
                    (SegmentValue::Exact(i + 1), bar.value as f64),
                ],
                color.filled(),
            );
            rect.set_margin(0, 0, 12, 12);
            rect
        }))?;

        Ok(())
    }

    fn draw_line<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        panel: &LinePanel,
    ) -> Result<()> {
        let x_max = (panel.points.len().max(2) - 1) as f64;
        let y_max = (panel.max_value() as f64 * 1.1).max(1.0);
        let color = parse_color(PRIMARY_COLOR);

        let mut chart = ChartBuilder::on(root)
            .caption(&panel.title, TITLE_FONT)
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(90)
            .build_cartesian_2d(0f64..x_max, 0f64..y_max)?;

        chart
            .configure_mesh()
            .x_desc(panel.x_label.as_str())
            .y_desc(panel.y_label.as_str())
            .axis_desc_style(LABEL_FONT)
            .x_labels(6)
            .x_label_formatter(&|x| {
                let idx = x.round().max(0.0) as usize;
                panel
                    .points
                    .get(idx)
                    .map(|p| p.date.format(DATE_FORMAT).to_string())
                    .unwrap_or_default()
            })
            .y_label_formatter(&|v| format_number(v.max(0.0) as u64))
            .draw()?;

        chart.draw_series(LineSeries::new(
            panel
                .points
                .iter()
                .enumerate()
                .map(|(i, p)| (i as f64, p.value as f64)),
            color.stroke_width(2),
        ))?;

        Ok(())
    }

    fn draw_placeholder<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        title: &str,
    ) -> Result<()> {
        let area = root.titled(title, TITLE_FONT)?;
        let (w, h) = area.dim_in_pixel();
        area.draw(&Text::new(
            NO_DATA,
            (w as i32 / 2 - 40, h as i32 / 2),
            ("sans-serif", 24).into_font().color(&BLACK),
        ))?;
        Ok(())
    }
}

impl Default for ChartWriter {
    fn default() -> Self {
        Self::new()
    }
}
