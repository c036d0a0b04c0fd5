use embassy_time::Instant;
use embedded_graphics::prelude::*;
use embedded_graphics::{
    Drawable as EgDrawable,
    pixelcolor::Rgb565,
    primitives::{PrimitiveStyle, Rectangle},
};
use embedded_layout::prelude::*;
use log::info;

use crate::config::RepGraphConfig;
use crate::pages::constants::{GREETING_HEIGHT_PX, MAX_NAME_LEN, PAGE_PADDING_PX};
use crate::pages::page::Page;
use crate::reps::{DailyReps, WeekdayProvider};
use crate::ui::components::{ErrorBoundary, ErrorFallback, RepGraph, TextComponent};
use crate::ui::styling::{COLOR_BACKGROUND, FontProvider, WHITE};
use crate::ui::{Action, Drawable, PageEvent, TouchEvent, TouchResult, Touchable};

/// "Hi, " + name + "!"
const GREETING_CAPACITY: usize = MAX_NAME_LEN + 5;

/// Home screen: a greeting above the weekly rep graph.
///
/// Layout structure:
/// - Greeting row, inset by the page padding
/// - Rep graph directly underneath, horizontally centered, fenced by an
///   [`ErrorBoundary`] so a failing chart only blanks its own area
pub struct HomePage {
    bounds: Rectangle,
    greeting: TextComponent,
    chart: ErrorBoundary<RepGraph>,
    dirty: bool,
}

impl HomePage {
    pub fn new<W, F>(
        bounds: Rectangle,
        name: &str,
        reps: DailyReps,
        config: RepGraphConfig,
        weekday: &W,
        fonts: &F,
    ) -> Self
    where
        W: WeekdayProvider + ?Sized,
        F: FontProvider + ?Sized,
    {
        let greeting_bounds = Rectangle::new(
            bounds.top_left + Point::new(PAGE_PADDING_PX as i32, PAGE_PADDING_PX as i32),
            Size::new(
                bounds.size.width.saturating_sub(2 * PAGE_PADDING_PX),
                GREETING_HEIGHT_PX,
            ),
        );
        let greeting = TextComponent::new(greeting_bounds, &greeting_text(name), fonts.emphasized())
            .with_color(WHITE);

        let chart_bounds = Rectangle::new(
            Point::zero(),
            Size::new(config.resolved_width(bounds.size.width), config.height),
        )
        .align_to(&greeting_bounds, horizontal::Center, vertical::TopToBottom);

        let graph = RepGraph::new(chart_bounds, reps, config, weekday, fonts);

        Self {
            bounds,
            greeting,
            chart: ErrorBoundary::new(graph, ErrorFallback::new(fonts)),
            dirty: true,
        }
    }

    pub fn set_name(&mut self, name: &str) {
        self.greeting.set_text(&greeting_text(name));
    }

    pub fn greeting(&self) -> &str {
        self.greeting.text()
    }

    pub fn graph(&self) -> &RepGraph {
        self.chart.child()
    }

    pub fn graph_mut(&mut self) -> &mut RepGraph {
        self.chart.child_mut()
    }

    pub fn chart(&self) -> &ErrorBoundary<RepGraph> {
        &self.chart
    }

    fn clear<D: DrawTarget<Color = Rgb565>>(
        area: Rectangle,
        display: &mut D,
    ) -> Result<(), D::Error> {
        area.into_styled(PrimitiveStyle::with_fill(COLOR_BACKGROUND))
            .draw(display)
    }
}

fn greeting_text(name: &str) -> heapless::String<GREETING_CAPACITY> {
    let mut text = heapless::String::new();
    let _ = text.push_str("Hi, ");
    for ch in name.chars() {
        if text.len() + ch.len_utf8() > GREETING_CAPACITY - 1 {
            break;
        }
        let _ = text.push(ch);
    }
    let _ = text.push('!');
    text
}

impl Page for HomePage {
    fn title(&self) -> &str {
        "Home"
    }

    fn on_activate(&mut self) {
        self.dirty = true;
    }

    fn handle_touch(&mut self, event: TouchEvent) -> Option<Action> {
        match self.chart.handle_touch(event) {
            TouchResult::Action(action) => {
                info!("Home page action: {:?}", action);
                Some(action)
            }
            TouchResult::Handled | TouchResult::NotHandled => None,
        }
    }

    fn update(&mut self, now: Instant) {
        self.chart.child_mut().update(now);
    }

    fn on_event(&mut self, event: &PageEvent) -> bool {
        match event {
            PageEvent::RepsUpdated(reps) => {
                info!("Rep history updated, today at {}", reps.today());
                self.chart.child_mut().set_reps(*reps);
            }
            PageEvent::DayChanged(today) => {
                info!("Day changed to {}", today.short_name());
                self.chart.child_mut().set_today(*today);
            }
        }
        self.chart.reset();
        self.chart.is_dirty()
    }

    fn draw_page<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        if self.dirty || self.greeting.is_dirty() {
            return Drawable::draw(self, display);
        }

        if self.chart.is_dirty() {
            Self::clear(self.chart.bounds(), display)?;
            self.chart.draw(display)?;
        }

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        Drawable::bounds(self)
    }

    fn is_dirty(&self) -> bool {
        Drawable::is_dirty(self)
    }

    fn mark_clean(&mut self) {
        Drawable::mark_clean(self)
    }

    fn mark_dirty(&mut self) {
        Drawable::mark_dirty(self)
    }
}

impl Drawable for HomePage {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        Self::clear(self.bounds, display)?;
        self.greeting.draw(display)?;
        self.chart.draw(display)?;
        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty || self.greeting.is_dirty() || self.chart.is_dirty()
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
        self.greeting.mark_clean();
        self.chart.mark_clean();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
        self.greeting.mark_dirty();
        self.chart.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reps::{TODAY_INDEX, Weekday};
    use crate::ui::styling::MonoFonts;
    use crate::ui::{Renderable, TouchPoint};
    use core::convert::Infallible;

    struct NullTarget;

    impl OriginDimensions for NullTarget {
        fn size(&self) -> Size {
            Size::new(60, 480)
        }
    }

    impl DrawTarget for NullTarget {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, _pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            Ok(())
        }
    }

    fn page(width: u32) -> HomePage {
        HomePage::new(
            Rectangle::new(Point::zero(), Size::new(width, 480)),
            "Sam",
            DailyReps::SAMPLE,
            RepGraphConfig::default(),
            &Weekday::Friday,
            &MonoFonts,
        )
    }

    #[test]
    fn test_greeting_uses_name() {
        let mut page = page(320);
        assert_eq!(page.greeting(), "Hi, Sam!");

        page.set_name("Alex");
        assert_eq!(page.greeting(), "Hi, Alex!");
    }

    #[test]
    fn test_long_name_is_truncated() {
        let long = "n".repeat(MAX_NAME_LEN + 8);
        let text = greeting_text(&long);
        assert!(text.starts_with("Hi, "));
        assert!(text.ends_with('!'));
        assert_eq!(text.len(), MAX_NAME_LEN + 5);
    }

    #[test]
    fn test_chart_sits_below_greeting() {
        let page = page(320);
        let chart = page.graph().bounds();

        assert_eq!(
            chart.top_left.y,
            (PAGE_PADDING_PX + GREETING_HEIGHT_PX) as i32
        );
        assert_eq!(chart.top_left.x, 0);
        assert_eq!(chart.size, Size::new(320, 300));
    }

    #[test]
    fn test_tap_on_chart_yields_day_selected() {
        let mut page = page(320);
        let y = (PAGE_PADDING_PX + GREETING_HEIGHT_PX + 150) as u16;

        let action = page.handle_touch(TouchEvent::Press(TouchPoint::new(50, y)));
        assert_eq!(action, Some(Action::DaySelected { index: 0, reps: 8 }));
        assert_eq!(page.graph().active_point(), 0);
    }

    #[test]
    fn test_tap_on_greeting_is_ignored() {
        let mut page = page(320);
        let action = page.handle_touch(TouchEvent::Press(TouchPoint::new(50, 20)));
        assert_eq!(action, None);
        assert_eq!(page.graph().active_point(), TODAY_INDEX);
    }

    #[test]
    fn test_reps_updated_event_replaces_data() {
        let mut page = page(320);
        Page::mark_clean(&mut page);

        let reps = DailyReps::new([1, 1, 1, 1, 1, 1, 9]);
        assert!(page.on_event(&PageEvent::RepsUpdated(reps)));
        assert_eq!(page.graph().reps(), &reps);
        assert!(Page::is_dirty(&page));
    }

    #[test]
    fn test_day_changed_event_rotates_labels() {
        let mut page = page(320);
        Page::mark_clean(&mut page);

        assert!(page.on_event(&PageEvent::DayChanged(Weekday::Sunday)));
        assert_eq!(page.graph().labels().get(TODAY_INDEX), Some("Sun"));
    }

    #[test]
    fn test_narrow_screen_trips_boundary() {
        let mut page = page(60);
        assert!(page.graph().geometry().is_err());
        assert!(!page.chart().is_tripped());

        assert_eq!(page.draw_page(&mut NullTarget), Ok(()));
        assert!(page.chart().is_tripped());

        // Taps are swallowed while the fallback is showing
        let y = (PAGE_PADDING_PX + GREETING_HEIGHT_PX + 150) as u16;
        assert_eq!(page.handle_touch(TouchEvent::Press(TouchPoint::new(10, y))), None);
    }
}
