//! Rasterisation of the rep graph layers
//!
//! Geometry is computed in chart-local `f32` pixels; these helpers translate
//! it to the widget's origin and draw it with embedded-graphics primitives.

use core::fmt::Write;

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Circle, Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle, Triangle,
};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

extern crate alloc;
use alloc::vec::Vec;

use crate::reps::DayLabels;
use crate::ui::styling::{GraphPalette, blend};

use super::callout::CalloutVisuals;
use super::constants::{
    AREA_FILL_BANDS, AREA_FILL_BOTTOM_OPACITY, AREA_FILL_TOP_OPACITY, CURVE_LINE_WIDTH_PX,
    CURVE_SUBDIVISIONS, DAY_MARKER_RADIUS_PX, MARKER_STROKE_PX,
};
use super::path::{AreaPath, CurvePath, PlotPoint};

/// Round a chart-local coordinate to the nearest pixel
pub(super) fn px(value: f32) -> i32 {
    if value >= 0.0 {
        (value + 0.5) as i32
    } else {
        (value - 0.5) as i32
    }
}

/// Translate a chart-local point to screen coordinates
pub(super) fn to_screen(origin: Point, point: PlotPoint) -> Point {
    Point::new(origin.x + px(point.x), origin.y + px(point.y))
}

/// Fill the area under the curve with a vertical gradient that fades from
/// the area color into the background towards the baseline
pub(super) fn draw_area_fill<D: DrawTarget<Color = Rgb565>>(
    area: &AreaPath,
    origin: Point,
    palette: &GraphPalette,
    display: &mut D,
) -> Result<(), D::Error> {
    let Some((x_start, x_end)) = area.curve().x_extent() else {
        return Ok(());
    };

    let top = area.top();
    let bottom = area.baseline();
    if bottom <= top {
        return Ok(());
    }

    let colors = build_gradient_colors(palette);
    let band_height = (bottom - top) / colors.len() as f32;

    for column in px(x_start)..=px(x_end) {
        let Some((y_line, y_bottom)) = area.column_span(column as f32) else {
            continue;
        };

        for (band, color) in colors.iter().enumerate() {
            let band_top = (top + band_height * band as f32).max(y_line);
            let band_bottom = (top + band_height * (band + 1) as f32).min(y_bottom);
            if band_bottom <= band_top {
                continue;
            }

            let x = origin.x + column;
            Line::new(
                Point::new(x, origin.y + px(band_top)),
                Point::new(x, origin.y + px(band_bottom)),
            )
            .into_styled(PrimitiveStyle::with_stroke(*color, 1))
            .draw(display)?;
        }
    }

    Ok(())
}

fn build_gradient_colors(palette: &GraphPalette) -> Vec<Rgb565> {
    let bands = AREA_FILL_BANDS.max(1) as usize;
    let mut colors = Vec::with_capacity(bands);
    for i in 0..bands {
        let t = if bands > 1 {
            i as f32 / (bands - 1) as f32
        } else {
            0.0
        };
        let opacity = AREA_FILL_TOP_OPACITY + (AREA_FILL_BOTTOM_OPACITY - AREA_FILL_TOP_OPACITY) * t;
        colors.push(blend(palette.background, palette.area, opacity));
    }
    colors
}

/// Stroke the smoothed rep curve
pub(super) fn draw_curve<D: DrawTarget<Color = Rgb565>>(
    curve: &CurvePath,
    origin: Point,
    color: Rgb565,
    display: &mut D,
) -> Result<(), D::Error> {
    let line_style = PrimitiveStyle::with_stroke(color, CURVE_LINE_WIDTH_PX);
    let points = curve.sample(CURVE_SUBDIVISIONS);

    let mut prev_screen: Option<Point> = None;
    for point in points {
        let screen_point = to_screen(origin, point);
        if let Some(prev) = prev_screen
            && prev != screen_point
        {
            Line::new(prev, screen_point)
                .into_styled(line_style)
                .draw(display)?;
        }
        prev_screen = Some(screen_point);
    }

    Ok(())
}

/// Fonts and colors for the day label row
pub(super) struct DayLabelStyle<'a> {
    pub regular: &'a MonoFont<'a>,
    pub emphasized: &'a MonoFont<'a>,
    pub active: Rgb565,
    pub inactive: Rgb565,
}

/// Draw the weekday names under each day, highlighting the active one
pub(super) fn draw_day_labels<D: DrawTarget<Color = Rgb565>>(
    labels: &DayLabels,
    positions: &[f32],
    active_point: usize,
    label_y: f32,
    origin: Point,
    style: &DayLabelStyle<'_>,
    display: &mut D,
) -> Result<(), D::Error> {
    let text_style = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Bottom)
        .build();

    for (index, (label, x)) in labels.iter().zip(positions.iter()).enumerate() {
        let character_style = if index == active_point {
            MonoTextStyle::new(style.emphasized, style.active)
        } else {
            MonoTextStyle::new(style.regular, style.inactive)
        };

        let position = to_screen(origin, PlotPoint::new(*x, label_y));
        Text::with_text_style(label, position, character_style, text_style).draw(display)?;
    }

    Ok(())
}

/// Draw a small dot on every data point
pub(super) fn draw_day_markers<D: DrawTarget<Color = Rgb565>>(
    points: &[PlotPoint],
    origin: Point,
    color: Rgb565,
    display: &mut D,
) -> Result<(), D::Error> {
    let style = PrimitiveStyle::with_fill(color);
    for point in points {
        Circle::with_center(to_screen(origin, *point), DAY_MARKER_RADIUS_PX * 2)
            .into_styled(style)
            .draw(display)?;
    }
    Ok(())
}

/// Draw the floating callout: label box, arrow, value, marker and connector
pub(super) fn draw_callout<D: DrawTarget<Color = Rgb565>>(
    visuals: &CalloutVisuals,
    value: u32,
    value_font: &MonoFont<'_>,
    origin: Point,
    palette: &GraphPalette,
    display: &mut D,
) -> Result<(), D::Error> {
    let accent = PrimitiveStyle::with_fill(palette.accent);

    let label = &visuals.label;
    let label_rect = Rectangle::new(
        to_screen(origin, label.top_left),
        Size::new(px(label.width).max(0) as u32, px(label.height).max(0) as u32),
    );
    RoundedRectangle::with_equal_corners(
        label_rect,
        Size::new(label.corner_radius, label.corner_radius),
    )
    .into_styled(accent)
    .draw(display)?;

    let [left, tip, right] = visuals.arrow;
    Triangle::new(
        to_screen(origin, left),
        to_screen(origin, tip),
        to_screen(origin, right),
    )
    .into_styled(accent)
    .draw(display)?;

    let mut text: heapless::String<12> = heapless::String::new();
    let _ = write!(text, "{}", value);
    let text_style = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build();
    Text::with_text_style(
        &text,
        to_screen(origin, visuals.text_anchor),
        MonoTextStyle::new(value_font, palette.on_accent),
        text_style,
    )
    .draw(display)?;

    let marker_style = PrimitiveStyleBuilder::new()
        .fill_color(palette.line)
        .stroke_color(palette.accent)
        .stroke_width(MARKER_STROKE_PX)
        .build();
    Circle::with_center(
        to_screen(origin, visuals.marker.center),
        px(visuals.marker.radius * 2.0).max(0) as u32,
    )
    .into_styled(marker_style)
    .draw(display)?;

    let connector = &visuals.connector;
    if connector.height > 0.0 {
        let top_left = to_screen(origin, PlotPoint::new(connector.x, connector.top));
        Rectangle::new(
            top_left,
            Size::new(
                px(connector.width).max(1) as u32,
                px(connector.height).max(0) as u32,
            ),
        )
        .into_styled(accent)
        .draw(display)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_rounds_to_nearest() {
        assert_eq!(px(1.4), 1);
        assert_eq!(px(1.5), 2);
        assert_eq!(px(-1.5), -2);
        assert_eq!(px(-0.4), 0);
    }

    #[test]
    fn test_gradient_fades_into_background() {
        let palette = GraphPalette::default();
        let colors = build_gradient_colors(&palette);

        assert_eq!(colors.len(), AREA_FILL_BANDS as usize);
        assert_eq!(colors.last(), Some(&palette.background));
        assert_ne!(colors.first(), Some(&palette.background));
    }
}
