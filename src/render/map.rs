//! Plot drawing on any plotters backend

use super::layout::{region_groups, MapFrame};
use super::sample::annotation_sample;
use super::{RenderError, RenderResult};
use crate::boundary::Boundary;
use crate::transform::{PointLayer, RecordSchema};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use std::path::Path;
use tracing::{debug, info};

const BACKDROP: RGBColor = RGBColor(128, 128, 128);
const POINT_RADIUS: i32 = 4;

/// Everything one rendering needs
#[derive(Debug, Clone, Copy)]
pub struct MapView<'a> {
    pub boundary: &'a Boundary,
    pub layer: &'a PointLayer,
    pub schema: &'a RecordSchema,
    /// Substring the points were filtered by, shown in the title
    pub substring: &'a str,
    /// Seed for choosing which points get a name label
    pub seed: u64,
}

pub fn title(substring: &str) -> String {
    format!("Places with '{}' in name", substring)
}

fn draw_err<E>(err: DrawingAreaErrorKind<E>) -> RenderError
where
    E: std::error::Error + Send + Sync,
{
    RenderError::Draw(err.to_string())
}

/// Draw boundaries, then points colored by region, then sampled name labels.
pub fn draw_map<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, view: &MapView) -> RenderResult<()> {
    root.fill(&WHITE).map_err(draw_err)?;

    let frame = MapFrame::fit(view.boundary, view.layer);
    let mut chart = ChartBuilder::on(root)
        .margin(20)
        .caption(title(view.substring), ("sans-serif", 32).into_font())
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(frame.x.clone(), frame.y.clone())
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("longitude")
        .y_desc("latitude")
        .draw()
        .map_err(draw_err)?;

    // backdrop
    let fill = BACKDROP.mix(0.4).filled();
    chart
        .draw_series(
            view.boundary
                .polygons
                .iter()
                .map(|polygon| Polygon::new(polygon.exterior.clone(), fill)),
        )
        .map_err(draw_err)?;
    let outline = BACKDROP.mix(0.6).stroke_width(1);
    chart
        .draw_series(
            view.boundary
                .polygons
                .iter()
                .flat_map(|polygon| std::iter::once(&polygon.exterior).chain(polygon.holes.iter()))
                .map(|ring| PathElement::new(ring.clone(), outline)),
        )
        .map_err(draw_err)?;

    let groups = region_groups(view.layer, &view.schema.region_field);
    for (i, (region, points)) in groups.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        chart
            .draw_series(
                points
                    .iter()
                    .map(|p| Circle::new((p.longitude, p.latitude), POINT_RADIUS, color.filled())),
            )
            .map_err(draw_err)?
            .label(region.as_str())
            .legend(move |(x, y)| Circle::new((x, y), POINT_RADIUS, color.filled()));
    }

    let sample = annotation_sample(view.layer.len(), view.seed);
    let font = ("sans-serif", 14).into_font();
    chart
        .draw_series(sample.iter().filter_map(|&i| {
            let point = view.layer.points.get(i)?;
            let name = point.label(&view.schema.name_field)?;
            Some(Text::new(
                name.to_string(),
                (point.longitude, point.latitude),
                font.clone(),
            ))
        }))
        .map_err(draw_err)?;

    if !groups.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(draw_err)?;
    }

    debug!(
        points = view.layer.len(),
        regions = groups.len(),
        annotated = sample.len(),
        "map drawn"
    );
    root.present().map_err(draw_err)?;
    Ok(())
}

fn check_size((width, height): (u32, u32)) -> RenderResult<()> {
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidSize { width, height });
    }
    Ok(())
}

/// Render to a file: `.svg` gets the SVG backend, anything else a bitmap
/// whose format follows the extension.
pub fn render_to_file(path: &Path, size: (u32, u32), view: &MapView) -> RenderResult<()> {
    check_size(size)?;
    let is_svg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    if is_svg {
        let root = SVGBackend::new(path, size).into_drawing_area();
        draw_map(&root, view)?;
    } else {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        draw_map(&root, view)?;
    }
    info!(path = %path.display(), points = view.layer.len(), "map written");
    Ok(())
}

/// Render into a packed RGB buffer of `width * height * 3` bytes
pub fn render_to_rgb(size: (u32, u32), view: &MapView) -> RenderResult<Vec<u8>> {
    check_size(size)?;
    let (width, height) = size;
    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, size).into_drawing_area();
        draw_map(&root, view)?;
    }
    Ok(buffer)
}
