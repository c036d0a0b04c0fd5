//! The rep graph widget
//!
//! Owns the selection state and the selection animation, caches the chart
//! geometry derived from the rep history and configuration, and renders
//! everything through the helpers in `render`.

use embassy_time::Instant;
use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::{debug, warn};

use crate::config::RepGraphConfig;
use crate::reps::{DAYS_PER_WEEK, DailyReps, DayLabels, TODAY_INDEX, Weekday};
use crate::ui::components::boundary::{RenderError, Renderable};
use crate::ui::core::{Action, TouchEvent, TouchPoint, TouchResult, Touchable};
use crate::ui::styling::{FontProvider, GraphPalette};

use super::animator::ProgressAnimator;
use super::callout::{CalloutGeometry, CalloutVisuals, derive_visuals};
use super::layout::GraphLayout;
use super::path::{AreaPath, CurvePath, PlotPoint};
use super::render::{
    DayLabelStyle, draw_area_fill, draw_callout, draw_curve, draw_day_labels, draw_day_markers,
};
use super::scale::ScaleMapping;
use super::touch::TouchBuckets;
use super::{GraphError, GraphResult};

/// Everything derived from the rep history, configuration and bounds
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub layout: GraphLayout,
    pub scales: ScaleMapping,
    pub points: [PlotPoint; DAYS_PER_WEEK],
    pub curve: CurvePath,
    pub area: AreaPath,
    pub buckets: TouchBuckets,
    pub callout: CalloutGeometry,
}

impl ChartGeometry {
    /// Derive the geometry for one render
    pub fn new(reps: &DailyReps, config: &RepGraphConfig, bounds_width: u32) -> GraphResult<Self> {
        let layout = GraphLayout::new(config, bounds_width)?;
        let scales = ScaleMapping::new(&layout, DAYS_PER_WEEK, reps.max());

        let points: [PlotPoint; DAYS_PER_WEEK] = core::array::from_fn(|i| {
            PlotPoint::new(
                scales.x_for_index(i),
                scales.y_for_value(reps.counts()[i] as f32),
            )
        });
        let positions: [f32; DAYS_PER_WEEK] = core::array::from_fn(|i| points[i].x);

        let curve = CurvePath::bump_x(&points);
        let area = AreaPath::new(curve.clone(), scales.baseline());
        let spacing = scales.x_for_index(1) - scales.x_for_index(0);
        let buckets = TouchBuckets::from_positions(&positions, spacing);

        Ok(Self {
            layout,
            scales,
            points,
            curve,
            area,
            buckets,
            callout: CalloutGeometry::new(layout.label_width),
        })
    }

    /// Screen x of every day, oldest first
    pub fn positions(&self) -> [f32; DAYS_PER_WEEK] {
        core::array::from_fn(|i| self.points[i].x)
    }
}

/// Interactive seven-day rep graph
///
/// Tapping a day column selects it: the selection (and the value shown in
/// the callout) changes immediately, while the callout glides to the new
/// day over the animation duration. Call [`RepGraph::update`] once per
/// frame to advance the animation.
///
/// # Examples
/// ```ignore
/// let mut graph = RepGraph::new(
///     Rectangle::new(Point::new(0, 60), Size::new(320, 300)),
///     DailyReps::SAMPLE,
///     RepGraphConfig::default(),
///     &Weekday::Friday,
///     &MonoFonts,
/// );
///
/// graph.handle_touch(TouchEvent::Press(TouchPoint::new(60, 200)));
/// graph.update(Instant::now());
/// ```
pub struct RepGraph {
    bounds: Rectangle,
    config: RepGraphConfig,
    reps: DailyReps,
    labels: DayLabels,
    palette: GraphPalette,
    regular_font: &'static MonoFont<'static>,
    emphasized_font: &'static MonoFont<'static>,
    geometry: GraphResult<ChartGeometry>,
    active_point: usize,
    animator: ProgressAnimator,
    /// Marker position at the last tick
    progress: f32,
    /// Time of the last tick; touches between frames retarget from here
    last_tick: Option<Instant>,
    /// Selection made before the first tick, started on that tick
    pending_target: Option<f32>,
    dirty: bool,
}

impl RepGraph {
    /// Create a graph showing `reps`, with today selected
    pub fn new<W, F>(
        bounds: Rectangle,
        reps: DailyReps,
        config: RepGraphConfig,
        weekday: &W,
        fonts: &F,
    ) -> Self
    where
        W: crate::reps::WeekdayProvider + ?Sized,
        F: FontProvider + ?Sized,
    {
        let geometry = ChartGeometry::new(&reps, &config, bounds.size.width);
        if let Err(err) = &geometry {
            warn!("Rep graph layout unavailable: {}", err);
        }

        let progress = resting_position(&geometry, TODAY_INDEX);

        Self {
            bounds,
            config,
            reps,
            labels: DayLabels::from_provider(weekday),
            palette: GraphPalette::default(),
            regular_font: fonts.regular(),
            emphasized_font: fonts.emphasized(),
            geometry,
            active_point: TODAY_INDEX,
            animator: ProgressAnimator::new(progress),
            progress,
            last_tick: None,
            pending_target: None,
            dirty: true,
        }
    }

    pub fn with_palette(mut self, palette: GraphPalette) -> Self {
        self.palette = palette;
        self.dirty = true;
        self
    }

    /// Replace the animator (e.g. for a different duration or easing)
    pub fn with_animator(mut self, mut animator: ProgressAnimator) -> Self {
        animator.snap_to(self.progress);
        self.animator = animator;
        self.pending_target = None;
        self
    }

    /// Currently selected day index (0 = oldest, 6 = today)
    pub fn active_point(&self) -> usize {
        self.active_point
    }

    /// Reps recorded on the selected day
    pub fn active_value(&self) -> u32 {
        self.reps.counts()[self.active_point]
    }

    pub fn reps(&self) -> &DailyReps {
        &self.reps
    }

    pub fn config(&self) -> &RepGraphConfig {
        &self.config
    }

    pub fn labels(&self) -> &DayLabels {
        &self.labels
    }

    /// Cached geometry, or the reason it could not be computed
    pub fn geometry(&self) -> Result<&ChartGeometry, &GraphError> {
        self.geometry.as_ref()
    }

    /// Marker x position as of the last tick
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating() || self.pending_target.is_some()
    }

    /// Replace the rep history
    ///
    /// Day positions only depend on the layout, so the selection and any
    /// in-flight animation carry over; the callout follows the new curve.
    pub fn set_reps(&mut self, reps: DailyReps) {
        if self.reps == reps {
            return;
        }
        self.reps = reps;
        self.recompute_geometry();
    }

    /// Apply a new configuration, snapping the marker to the selected day
    pub fn set_config(&mut self, config: RepGraphConfig) {
        if self.config == config {
            return;
        }
        self.config = config;
        self.recompute_geometry();
        self.snap_to_selection();
    }

    /// Move and/or resize the widget
    pub fn set_bounds(&mut self, bounds: Rectangle) {
        if self.bounds == bounds {
            return;
        }
        let width_changed = self.bounds.size.width != bounds.size.width;
        self.bounds = bounds;
        if width_changed {
            self.recompute_geometry();
            self.snap_to_selection();
        }
        self.dirty = true;
    }

    /// Re-rotate the day labels for a new current weekday
    pub fn set_today(&mut self, today: Weekday) {
        let labels = DayLabels::ending_on(today);
        if self.labels != labels {
            self.labels = labels;
            self.dirty = true;
        }
    }

    /// Select a day by index
    ///
    /// Returns `Ok(true)` if the selection changed. Re-selecting the active
    /// day is a no-op.
    pub fn select(&mut self, index: usize) -> GraphResult<bool> {
        if index >= DAYS_PER_WEEK {
            return Err(GraphError::InvalidDayIndex { index });
        }
        if index == self.active_point {
            return Ok(false);
        }

        let target = match &self.geometry {
            Ok(geometry) => geometry.scales.x_for_index(index),
            Err(err) => return Err(*err),
        };

        debug!(
            "Rep graph selection {} -> {} (x {} -> {})",
            self.active_point, index, self.progress, target
        );

        self.active_point = index;
        match self.last_tick {
            Some(now) => {
                self.animator.animate_to(target, now);
            }
            None => self.pending_target = Some(target),
        }
        self.dirty = true;
        Ok(true)
    }

    /// Select the day whose touch bucket contains chart-local `x`
    ///
    /// Returns the selected index, or `None` if `x` is outside every bucket.
    pub fn select_at(&mut self, x: f32) -> Option<usize> {
        let index = self.geometry.as_ref().ok()?.buckets.hit(x)?;
        // Index comes from a bucket and the geometry is valid
        let _ = self.select(index);
        Some(index)
    }

    /// Advance the selection animation to `now`
    ///
    /// Returns `true` if the graph needs to be redrawn.
    pub fn update(&mut self, now: Instant) -> bool {
        self.last_tick = Some(now);
        if let Some(target) = self.pending_target.take() {
            self.animator.animate_to(target, now);
        }
        let was_animating = self.animator.is_animating();
        let progress = self.animator.tick(now);

        if progress != self.progress || was_animating {
            self.progress = progress;
            self.dirty = true;
        }
        self.dirty
    }

    /// Callout layout for the current progress value
    pub fn visuals(&self) -> Option<CalloutVisuals> {
        let geometry = self.geometry.as_ref().ok()?;
        Some(derive_visuals(
            self.progress,
            &geometry.curve,
            geometry.scales.baseline(),
            &geometry.callout,
        ))
    }

    fn recompute_geometry(&mut self) {
        self.geometry = ChartGeometry::new(&self.reps, &self.config, self.bounds.size.width);
        match &self.geometry {
            Ok(geometry) => debug!(
                "Rep graph geometry: {}x{} plot, y max {}",
                geometry.layout.graph_width,
                geometry.layout.graph_height,
                geometry.scales.y_max()
            ),
            Err(err) => warn!("Rep graph layout unavailable: {}", err),
        }
        self.dirty = true;
    }

    fn snap_to_selection(&mut self) {
        let position = resting_position(&self.geometry, self.active_point);
        self.animator.snap_to(position);
        self.pending_target = None;
        self.progress = position;
    }

    fn draw_layers<D: DrawTarget<Color = Rgb565>>(
        &self,
        geometry: &ChartGeometry,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let origin = self.bounds.top_left;
        let positions = geometry.positions();

        draw_area_fill(&geometry.area, origin, &self.palette, display)?;
        draw_curve(&geometry.curve, origin, self.palette.line, display)?;

        let label_style = DayLabelStyle {
            regular: self.regular_font,
            emphasized: self.emphasized_font,
            active: self.palette.label_active,
            inactive: self.palette.label_inactive,
        };
        draw_day_labels(
            &self.labels,
            &positions,
            self.active_point,
            geometry.layout.height - 1.0,
            origin,
            &label_style,
            display,
        )?;
        draw_day_markers(&geometry.points, origin, self.palette.line, display)?;

        if let Some(visuals) = self.visuals() {
            draw_callout(
                &visuals,
                self.active_value(),
                self.emphasized_font,
                origin,
                &self.palette,
                display,
            )?;
        }

        Ok(())
    }
}

/// Resting x for a day, or 0 when there is no usable layout
fn resting_position(geometry: &GraphResult<ChartGeometry>, index: usize) -> f32 {
    geometry
        .as_ref()
        .map(|geometry| geometry.scales.x_for_index(index))
        .unwrap_or(0.0)
}

impl Renderable for RepGraph {
    fn render<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), RenderError> {
        let geometry = self.geometry.as_ref().map_err(|err| *err)?;
        self.draw_layers(geometry, display)
            .map_err(|_| RenderError::Target)
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl Touchable for RepGraph {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.bounds.contains(point.to_point())
    }

    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        match event {
            TouchEvent::Press(point) if self.contains_point(point) => {
                let local_x = (point.x as i32 - self.bounds.top_left.x) as f32;
                match self.select_at(local_x) {
                    Some(index) => TouchResult::Action(Action::DaySelected {
                        index,
                        reps: self.reps.counts()[index],
                    }),
                    None => TouchResult::NotHandled,
                }
            }
            _ => TouchResult::NotHandled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::styling::MonoFonts;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::convert::Infallible;
    use embassy_time::Duration;

    const ORIGIN: Point = Point::new(0, 60);

    struct FrameBuffer {
        size: Size,
        pixels: Vec<Rgb565>,
    }

    impl FrameBuffer {
        fn new(width: u32, height: u32) -> Self {
            Self {
                size: Size::new(width, height),
                pixels: vec![Rgb565::BLACK; (width * height) as usize],
            }
        }

        fn pixel(&self, x: i32, y: i32) -> Rgb565 {
            self.pixels[(y as u32 * self.size.width + x as u32) as usize]
        }
    }

    impl OriginDimensions for FrameBuffer {
        fn size(&self) -> Size {
            self.size
        }
    }

    impl DrawTarget for FrameBuffer {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                if point.x >= 0
                    && point.y >= 0
                    && (point.x as u32) < self.size.width
                    && (point.y as u32) < self.size.height
                {
                    let index = (point.y as u32 * self.size.width + point.x as u32) as usize;
                    self.pixels[index] = color;
                }
            }
            Ok(())
        }
    }

    fn graph_with_width(width: u32) -> RepGraph {
        RepGraph::new(
            Rectangle::new(ORIGIN, Size::new(width, 300)),
            DailyReps::SAMPLE,
            RepGraphConfig::default(),
            &Weekday::Friday,
            &MonoFonts,
        )
    }

    fn graph() -> RepGraph {
        graph_with_width(320)
    }

    fn press(x: u16, y: u16) -> TouchEvent {
        TouchEvent::Press(TouchPoint::new(x, y))
    }

    #[test]
    fn test_starts_on_today() {
        let graph = graph();
        assert_eq!(graph.active_point(), TODAY_INDEX);
        assert_eq!(graph.active_value(), 3);
        assert_eq!(graph.progress(), 274.0);
        assert!(!graph.is_animating());
        assert!(graph.is_dirty());
    }

    #[test]
    fn test_geometry_positions() {
        let graph = graph();
        let geometry = graph.geometry().ok().unwrap();

        assert_eq!(
            geometry.positions(),
            [46.0, 84.0, 122.0, 160.0, 198.0, 236.0, 274.0]
        );
        assert_eq!(geometry.scales.baseline(), 276.0);
        assert_eq!(geometry.buckets.hit(26.9), None);
        assert_eq!(geometry.buckets.hit(27.0), Some(0));
        assert_eq!(geometry.buckets.hit(293.0), Some(6));
        assert_eq!(geometry.buckets.hit(293.1), None);
    }

    #[test]
    fn test_tap_in_margin_selects_nothing() {
        let mut graph = graph();

        assert_eq!(graph.handle_touch(press(10, 200)), TouchResult::NotHandled);
        assert_eq!(graph.handle_touch(press(310, 200)), TouchResult::NotHandled);
        assert_eq!(graph.select_at(0.0), None);
        assert_eq!(graph.select_at(319.0), None);
        assert_eq!(graph.active_point(), TODAY_INDEX);
        assert!(!graph.is_animating());
    }

    #[test]
    fn test_tap_selects_day_and_reports_reps() {
        let mut graph = graph();
        let result = graph.handle_touch(press(50, 200));

        assert_eq!(
            result,
            TouchResult::Action(Action::DaySelected { index: 0, reps: 8 })
        );
        assert_eq!(graph.active_point(), 0);
        assert_eq!(graph.active_value(), 8);
        assert!(graph.is_animating());
    }

    #[test]
    fn test_tap_outside_bounds_is_ignored() {
        let mut graph = graph();
        assert_eq!(graph.handle_touch(press(50, 10)), TouchResult::NotHandled);
        assert_eq!(graph.handle_touch(press(330, 200)), TouchResult::NotHandled);
        assert_eq!(
            graph.handle_touch(TouchEvent::Drag(TouchPoint::new(50, 200))),
            TouchResult::NotHandled
        );
        assert_eq!(graph.active_point(), TODAY_INDEX);
    }

    #[test]
    fn test_reselecting_active_day_is_noop() {
        let mut graph = graph();
        graph.mark_clean();

        assert_eq!(graph.select(TODAY_INDEX), Ok(false));
        assert!(!graph.is_animating());
        assert!(!graph.is_dirty());
    }

    #[test]
    fn test_invalid_index_is_rejected() {
        let mut graph = graph();
        assert_eq!(
            graph.select(DAYS_PER_WEEK),
            Err(GraphError::InvalidDayIndex { index: 7 })
        );
        assert_eq!(graph.active_point(), TODAY_INDEX);
    }

    #[test]
    fn test_update_animates_to_selection() {
        let mut graph = graph();
        let start = Instant::from_millis(1_000);
        graph.update(start);

        assert_eq!(graph.select(0), Ok(true));
        graph.mark_clean();

        assert!(graph.update(start + Duration::from_millis(250)));
        let halfway = graph.progress();
        assert!(halfway > 46.0 && halfway < 274.0);

        graph.mark_clean();
        assert!(graph.update(start + Duration::from_millis(500)));
        assert_eq!(graph.progress(), 46.0);
        assert!(!graph.is_animating());

        graph.mark_clean();
        assert!(!graph.update(start + Duration::from_millis(600)));
    }

    #[test]
    fn test_selection_before_first_update_still_animates() {
        let mut graph = graph();
        assert_eq!(graph.select(0), Ok(true));
        assert!(graph.is_animating());

        // A late first frame starts the glide instead of jumping to the end
        let start = Instant::from_secs(3_600);
        assert!(graph.update(start));
        assert_eq!(graph.progress(), 274.0);
        assert!(graph.is_animating());

        graph.update(start + Duration::from_millis(250));
        let halfway = graph.progress();
        assert!(halfway > 46.0 && halfway < 274.0);

        graph.update(start + Duration::from_millis(500));
        assert_eq!(graph.progress(), 46.0);
        assert!(!graph.is_animating());
    }

    #[test]
    fn test_callout_tracks_progress() {
        let mut graph = graph();
        let start = Instant::from_millis(0);
        graph.update(start);
        graph.select(2).ok();

        graph.update(start + Duration::from_millis(100));
        let visuals = graph.visuals().unwrap();
        assert_eq!(visuals.anchor.x, graph.progress());

        graph.update(start + Duration::from_millis(500));
        let visuals = graph.visuals().unwrap();
        assert_eq!(visuals.anchor.x, 122.0);
        assert_eq!(visuals.label.width, 60.0);
    }

    #[test]
    fn test_set_reps_keeps_selection() {
        let mut graph = graph();
        graph.select(1).ok();
        graph.mark_clean();

        graph.set_reps(DailyReps::new([1, 2, 3, 4, 5, 6, 7]));
        assert_eq!(graph.active_point(), 1);
        assert_eq!(graph.active_value(), 2);
        assert!(graph.is_dirty());
    }

    #[test]
    fn test_set_config_snaps_marker() {
        let mut graph = graph();
        graph.update(Instant::from_millis(0));
        graph.select(0).ok();
        assert!(graph.is_animating());

        graph.set_config(RepGraphConfig::default().with_horizontal_padding(0));
        assert!(!graph.is_animating());
        assert_eq!(graph.progress(), 30.0);
    }

    #[test]
    fn test_set_today_rotates_labels() {
        let mut graph = graph();
        assert_eq!(graph.labels().get(6), Some("Fri"));

        graph.mark_clean();
        graph.set_today(Weekday::Saturday);
        assert_eq!(graph.labels().get(6), Some("Sat"));
        assert!(graph.is_dirty());
    }

    #[test]
    fn test_degenerate_layout_reports_error() {
        let mut graph = graph_with_width(50);
        let mut display = FrameBuffer::new(320, 400);

        assert!(graph.geometry().is_err());
        assert_eq!(
            graph.render(&mut display),
            Err(RenderError::Graph(GraphError::DegenerateLayout {
                width: 50,
                height: 300
            }))
        );
        assert!(graph.select(0).is_err());
        assert_eq!(graph.handle_touch(press(10, 200)), TouchResult::NotHandled);
        assert!(graph.visuals().is_none());
    }

    #[test]
    fn test_render_draws_callout() {
        let graph = graph();
        let mut display = FrameBuffer::new(320, 400);
        let palette = GraphPalette::default();

        assert_eq!(graph.render(&mut display), Ok(()));

        // Marker fill over today's point (3 reps of an 18 rep domain)
        assert_eq!(display.pixel(274, 60 + 230), palette.line);
        // Connector below the marker
        assert_eq!(display.pixel(274, 60 + 260), palette.accent);
        // Nothing above the label box
        assert_eq!(display.pixel(274, 60 + 150), Rgb565::BLACK);
    }
}
