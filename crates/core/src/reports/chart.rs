//! Two-panel report chart: expense pie on the left, income bars on the right.
//!
//! Both panels are drawn with plotters into an in-memory RGB buffer which is
//! then encoded as PNG. Chart text uses a bundled DejaVu Sans face registered
//! under [`CHART_FONT_FAMILY`]; [`register_chart_font`] swaps in another face.

use std::io::Cursor;
use std::path::Path;
use std::sync::OnceLock;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::{ImageFormat, RgbImage};
use log::debug;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use rust_decimal::prelude::ToPrimitive;

use super::reports_model::CategoryTotals;
use super::reports_traits::ChartRendererTrait;
use crate::constants::{
    CHART_FONT_FAMILY, CHART_TITLE, DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, EMPTY_PANEL_LABEL,
    EXPENSES_PANEL_TITLE, INCOME_PANEL_TITLE, INCOME_X_LABEL, INCOME_Y_LABEL,
};
use crate::errors::{Error, Result};

/// Smallest canvas the layout can be laid out on.
const MIN_CHART_WIDTH: u32 = 200;
const MIN_CHART_HEIGHT: u32 = 100;
/// Largest canvas a renderer accepts; the RGB buffer is allocated up front.
const MAX_CHART_WIDTH: u32 = 4096;
const MAX_CHART_HEIGHT: u32 = 4096;

const Y_TICKS: usize = 5;

/// matplotlib's tab10 cycle
const SERIES_COLORS: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];
const PLACEHOLDER_COLOR: RGBColor = RGBColor(150, 150, 150);

static BUNDLED_FONT: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");
static BUNDLED_FONT_LOADED: OnceLock<bool> = OnceLock::new();

type Area<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
        }
    }
}

/// Registers the bundled face once per process.
fn ensure_bundled_font() -> Result<()> {
    let loaded = *BUNDLED_FONT_LOADED.get_or_init(|| {
        plotters::style::register_font(CHART_FONT_FAMILY, FontStyle::Normal, BUNDLED_FONT).is_ok()
    });
    if loaded {
        Ok(())
    } else {
        Err(Error::Chart("Bundled chart font could not be loaded".to_string()))
    }
}

/// Replaces the chart face with a TrueType file from disk.
///
/// Registered fonts live for the rest of the process.
pub fn register_chart_font(path: &Path) -> Result<()> {
    ensure_bundled_font()?;
    let bytes = std::fs::read(path)?;
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    plotters::style::register_font(CHART_FONT_FAMILY, FontStyle::Normal, bytes)
        .map_err(|_| Error::Chart(format!("Invalid font file: {}", path.display())))?;
    debug!("Registered chart font from {}", path.display());
    Ok(())
}

/// Labels and sizes of the pie, keeping categories with a positive amount.
pub(crate) fn pie_series(totals: &CategoryTotals) -> (Vec<String>, Vec<f64>) {
    totals
        .iter()
        .filter_map(|(category, amount)| {
            let value = amount.to_f64().unwrap_or(0.0);
            if value > 0.0 {
                Some((category.clone(), value))
            } else {
                debug!("Leaving '{}' out of the pie: amount {}", category, amount);
                None
            }
        })
        .unzip()
}

/// Value range of the bar axis. Always spans zero and is never empty.
pub(crate) fn bar_value_range(totals: &CategoryTotals) -> (f64, f64) {
    let (mut low, mut high) = (0.0_f64, 0.0_f64);
    for amount in totals.values() {
        let value = amount.to_f64().unwrap_or(0.0);
        low = low.min(value);
        high = high.max(value);
    }
    if high - low <= f64::EPSILON {
        high = low + 1.0;
    }
    (low, high)
}

/// Y axis tick text: whole units once the axis spans ten or more.
pub(crate) fn tick_label(value: f64, range: (f64, f64)) -> String {
    if range.1 - range.0 >= 10.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// X axis tick text: the category under the centre of each bar slot.
pub(crate) fn category_label(categories: &[&String], value: &SegmentValue<usize>) -> String {
    match value {
        SegmentValue::CenterOf(idx) => categories
            .get(*idx)
            .map(|category| category.to_string())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

fn font_size(height: u32, divisor: u32) -> f64 {
    f64::from((height / divisor).max(8))
}

fn placeholder_style(size: f64) -> TextStyle<'static> {
    (CHART_FONT_FAMILY, size)
        .into_font()
        .color(&PLACEHOLDER_COLOR)
        .pos(Pos::new(HPos::Center, VPos::Center))
}

/// Chart renderer backed by the plotters bitmap backend.
pub struct PlottersChartRenderer {
    config: ChartConfig,
}

impl PlottersChartRenderer {
    pub fn new(config: ChartConfig) -> Result<Self> {
        if config.width < MIN_CHART_WIDTH || config.height < MIN_CHART_HEIGHT {
            return Err(Error::Chart(format!(
                "Chart size {}x{} is below the minimum {}x{}",
                config.width, config.height, MIN_CHART_WIDTH, MIN_CHART_HEIGHT
            )));
        }
        if config.width > MAX_CHART_WIDTH || config.height > MAX_CHART_HEIGHT {
            return Err(Error::Chart(format!(
                "Chart size {}x{} is above the maximum {}x{}",
                config.width, config.height, MAX_CHART_WIDTH, MAX_CHART_HEIGHT
            )));
        }
        ensure_bundled_font()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> ChartConfig {
        self.config
    }

    /// Draws the chart and returns the PNG bytes.
    pub fn render_png(
        &self,
        expenses: &CategoryTotals,
        income: &CategoryTotals,
    ) -> Result<Vec<u8>> {
        let ChartConfig { width, height } = self.config;
        let mut pixels = vec![0u8; width as usize * height as usize * 3];

        {
            let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
            root.fill(&WHITE).map_err(chart_error)?;

            let body = root
                .titled(CHART_TITLE, (CHART_FONT_FAMILY, font_size(height, 25)))
                .map_err(chart_error)?;
            let (left, right) = body.split_horizontally(width / 2);

            draw_expenses_panel(&left, height, expenses)?;
            draw_income_panel(&right, height, income)?;

            root.present().map_err(chart_error)?;
        }

        encode_png(pixels, width, height)
    }
}

impl ChartRendererTrait for PlottersChartRenderer {
    fn render(&self, expenses: &CategoryTotals, income: &CategoryTotals) -> Result<String> {
        let png = self.render_png(expenses, income)?;
        Ok(BASE64.encode(png))
    }
}

fn chart_error<E: std::fmt::Display>(err: E) -> Error {
    Error::Chart(err.to_string())
}

fn encode_png(pixels: Vec<u8>, width: u32, height: u32) -> Result<Vec<u8>> {
    let image = RgbImage::from_raw(width, height, pixels)
        .ok_or_else(|| Error::Chart("Pixel buffer does not match the chart size".to_string()))?;
    let mut png = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(chart_error)?;
    Ok(png)
}

fn draw_expenses_panel(panel: &Area, height: u32, expenses: &CategoryTotals) -> Result<()> {
    let panel = panel
        .titled(
            EXPENSES_PANEL_TITLE,
            (CHART_FONT_FAMILY, font_size(height, 40)),
        )
        .map_err(chart_error)?;
    let (width, panel_height) = panel.dim_in_pixel();
    let radius = f64::from(width.min(panel_height)) * 0.32;
    let label_size = font_size(height, 60);
    let (labels, sizes) = pie_series(expenses);

    if sizes.is_empty() {
        let center = (width as i32 / 2, panel_height as i32 / 2);
        panel
            .draw(&Circle::new(
                center,
                radius as i32,
                PLACEHOLDER_COLOR.stroke_width(2),
            ))
            .map_err(chart_error)?;
        panel
            .draw_text(EMPTY_PANEL_LABEL, &placeholder_style(label_size), center)
            .map_err(chart_error)?;
        return Ok(());
    }

    // Pie ignores the area offset and draws in backend pixels
    let (x0, y0) = panel.get_base_pixel();
    let center = (x0 + width as i32 / 2, y0 + panel_height as i32 / 2);
    let colors: Vec<RGBColor> = (0..sizes.len())
        .map(|idx| SERIES_COLORS[idx % SERIES_COLORS.len()])
        .collect();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.label_style((CHART_FONT_FAMILY, label_size).into_font().color(&BLACK));
    pie.label_offset(radius * 0.1);
    pie.percentages((CHART_FONT_FAMILY, label_size).into_font().color(&BLACK));
    panel.draw(&pie).map_err(chart_error)?;
    Ok(())
}

fn draw_income_panel(panel: &Area, height: u32, income: &CategoryTotals) -> Result<()> {
    let categories: Vec<&String> = income.keys().collect();
    let range = bar_value_range(income);
    let label_size = font_size(height, 60);
    let (width, panel_height) = panel.dim_in_pixel();

    let x_formatter = |value: &SegmentValue<usize>| category_label(&categories, value);
    let y_formatter = |value: &f64| tick_label(*value, range);

    // plotters collapses a one-value range, so a lone category gets a spare slot
    let last_slot = categories.len().saturating_sub(1).max(1);

    let mut chart = ChartBuilder::on(panel)
        .caption(
            INCOME_PANEL_TITLE,
            (CHART_FONT_FAMILY, font_size(height, 40)),
        )
        .margin(width / 40)
        .x_label_area_size(panel_height / 4)
        .y_label_area_size(width / 7)
        .build_cartesian_2d((0..last_slot).into_segmented(), range.0..range.1)
        .map_err(chart_error)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(categories.len() + 1)
        .y_labels(Y_TICKS)
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter)
        .label_style((CHART_FONT_FAMILY, label_size))
        .x_label_style(
            (CHART_FONT_FAMILY, label_size)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .axis_desc_style((CHART_FONT_FAMILY, label_size))
        .x_desc(INCOME_X_LABEL)
        .y_desc(INCOME_Y_LABEL)
        .draw()
        .map_err(chart_error)?;

    if categories.is_empty() {
        let plot = chart.plotting_area().strip_coord_spec();
        let (plot_width, plot_height) = plot.dim_in_pixel();
        plot.draw_text(
            EMPTY_PANEL_LABEL,
            &placeholder_style(label_size),
            (plot_width as i32 / 2, plot_height as i32 / 2),
        )
        .map_err(chart_error)?;
        return Ok(());
    }

    let bar_margin = (width / (8 * (categories.len() as u32 + 1))).max(1);
    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(SERIES_COLORS[0].filled())
                .margin(bar_margin)
                .data(
                    income
                        .values()
                        .enumerate()
                        .map(|(idx, amount)| (idx, amount.to_f64().unwrap_or(0.0))),
                ),
        )
        .map_err(chart_error)?;
    Ok(())
}
