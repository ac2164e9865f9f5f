use thiserror::Error;

use crate::sections::{Section, SectionRegistry};

/// Tunables for active-section detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    /// Distance from the viewport top, in pixels, that a section must straddle to be active.
    pub activation_line: f64,
    /// Vertical offset past which the page counts as scrolled.
    pub scrolled_threshold: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            activation_line: 100.0,
            scrolled_threshold: 20.0,
        }
    }
}

/// Bounding box of a section in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

impl SectionRect {
    fn straddles(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    pub is_scrolled: bool,
    pub active_section_id: &'static str,
}

impl ScrollState {
    pub fn initial(registry: &SectionRegistry) -> Self {
        Self {
            is_scrolled: false,
            active_section_id: registry.first().id,
        }
    }
}

/// Decides the next state from the current geometry.
///
/// `rects` must be in registry order; a `None` rect means the section is not rendered.
/// When no section straddles the activation line the previous active id is kept.
pub fn compute_state<I>(
    config: &ScrollConfig,
    previous: &ScrollState,
    scroll_offset: f64,
    rects: I,
) -> ScrollState
where
    I: IntoIterator<Item = (&'static Section, Option<SectionRect>)>,
{
    let active_section_id = rects
        .into_iter()
        .find(|(_, rect)| rect.is_some_and(|r| r.straddles(config.activation_line)))
        .map(|(section, _)| section.id)
        .unwrap_or(previous.active_section_id);

    ScrollState {
        is_scrolled: scroll_offset > config.scrolled_threshold,
        active_section_id,
    }
}

/// Fraction of the page scrolled, clamped to `[0, 1]`.
pub fn scroll_progress(scroll_offset: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_offset / scrollable).clamp(0.0, 1.0)
}

/// What the coordinator needs from the page it is mounted on.
pub trait RenderSurface {
    fn scroll_offset(&self) -> f64;
    /// `None` when no element with this anchor id is rendered.
    fn section_rect(&self, id: &str) -> Option<SectionRect>;
    /// Starts an animated scroll to the element. Returns false if it is not rendered.
    fn smooth_scroll_to(&self, id: &str) -> bool;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Unknown section: {0}")]
    UnknownSection(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Smooth scroll started; the active section follows on later scroll events.
    Scrolling,
    /// Section is registered but not rendered yet.
    NotMounted,
}

/// Whether a navigation outcome should collapse the mobile menu.
/// Only a started scroll does; the menu stays open otherwise.
pub fn closes_menu(result: &Result<Navigation, NavigationError>) -> bool {
    matches!(result, Ok(Navigation::Scrolling))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

type Listener = Box<dyn Fn(&ScrollState) + Send + Sync>;

pub struct ScrollCoordinator<S> {
    registry: SectionRegistry,
    surface: S,
    config: ScrollConfig,
    state: ScrollState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: usize,
}

impl<S: RenderSurface> ScrollCoordinator<S> {
    pub fn new(registry: SectionRegistry, surface: S, config: ScrollConfig) -> Self {
        let state = ScrollState::initial(&registry);
        Self {
            registry,
            surface,
            config,
            state,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&ScrollState) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    /// Drops every subscriber. Called when the page unmounts.
    pub fn teardown(&mut self) {
        self.listeners.clear();
    }

    pub fn on_scroll_or_resize(&mut self) -> ScrollState {
        let surface = &self.surface;
        let rects = self
            .registry
            .list()
            .iter()
            .map(|section| (section, surface.section_rect(section.id)));
        let next = compute_state(
            &self.config,
            &self.state,
            surface.scroll_offset(),
            rects,
        );

        if next.active_section_id != self.state.active_section_id {
            log::debug!(
                "active section {} -> {}",
                self.state.active_section_id,
                next.active_section_id
            );
        }
        self.state = next;
        for (_, listener) in &self.listeners {
            listener(&next);
        }
        next
    }

    pub fn navigate_to(&self, section_id: &str) -> Result<Navigation, NavigationError> {
        let section = self.registry.find(section_id).ok_or_else(|| {
            log::warn!("navigation to unregistered section {section_id:?}");
            NavigationError::UnknownSection(section_id.to_string())
        })?;

        if self.surface.smooth_scroll_to(section.id) {
            Ok(Navigation::Scrolling)
        } else {
            log::debug!("section {} not mounted yet", section.id);
            Ok(Navigation::NotMounted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    };

    /// Sections stacked top to bottom, `heights[i]` tall each.
    struct StackedPage {
        offset: Mutex<f64>,
        layout: Vec<(&'static str, f64, f64)>,
        scrolled_to: Mutex<Vec<String>>,
    }

    impl StackedPage {
        fn new(registry: &SectionRegistry, heights: &[f64]) -> Self {
            let mut top = 0.0;
            let layout = registry
                .list()
                .iter()
                .zip(heights)
                .map(|(section, height)| {
                    let entry = (section.id, top, top + height);
                    top += height;
                    entry
                })
                .collect();
            Self {
                offset: Mutex::new(0.0),
                layout,
                scrolled_to: Mutex::new(Vec::new()),
            }
        }

        fn uniform(height: f64) -> Self {
            Self::new(&SectionRegistry::portfolio(), &[height; 6])
        }

        fn scroll(&self, offset: f64) {
            *self.offset.lock().unwrap() = offset;
        }
    }

    impl RenderSurface for &StackedPage {
        fn scroll_offset(&self) -> f64 {
            *self.offset.lock().unwrap()
        }

        fn section_rect(&self, id: &str) -> Option<SectionRect> {
            let offset = self.scroll_offset();
            self.layout
                .iter()
                .find(|(sid, _, _)| *sid == id)
                .map(|(_, top, bottom)| SectionRect {
                    top: top - offset,
                    bottom: bottom - offset,
                })
        }

        fn smooth_scroll_to(&self, id: &str) -> bool {
            let found = self.layout.iter().any(|(sid, _, _)| *sid == id);
            if found {
                self.scrolled_to.lock().unwrap().push(id.to_string());
            }
            found
        }
    }

    fn coordinator(page: &StackedPage) -> ScrollCoordinator<&StackedPage> {
        ScrollCoordinator::new(SectionRegistry::portfolio(), page, ScrollConfig::default())
    }

    #[test]
    fn test_page_top_selects_first_section() {
        let page = StackedPage::uniform(1000.0);
        let mut coord = coordinator(&page);
        assert_eq!(coord.state().active_section_id, "home");
        let state = coord.on_scroll_or_resize();
        assert_eq!(state.active_section_id, "home");
        assert!(!state.is_scrolled);
    }

    #[test]
    fn test_offset_950_selects_about() {
        let page = StackedPage::uniform(1000.0);
        let mut coord = coordinator(&page);
        page.scroll(950.0);
        assert_eq!(coord.on_scroll_or_resize().active_section_id, "about");
    }

    #[test]
    fn test_straddling_section_wins_independent_of_neighbours() {
        let registry = SectionRegistry::portfolio();
        let page = StackedPage::new(&registry, &[300.0, 1200.0, 150.0, 2000.0, 400.0, 900.0]);
        let mut coord = coordinator(&page);
        for (k, section) in registry.list().iter().enumerate() {
            let (_, top, bottom) = page.layout[k];
            // put the activation line in the middle of section k
            page.scroll((top + bottom) / 2.0 - 100.0);
            assert_eq!(coord.on_scroll_or_resize().active_section_id, section.id);
        }
    }

    #[test]
    fn test_boundary_prefers_earlier_section() {
        let page = StackedPage::uniform(1000.0);
        let mut coord = coordinator(&page);
        // home bottom and about top both sit exactly on the line
        page.scroll(900.0);
        assert_eq!(coord.on_scroll_or_resize().active_section_id, "home");
    }

    #[test]
    fn test_monotonic_scroll_visits_in_order() {
        let registry = SectionRegistry::portfolio();
        let page = StackedPage::uniform(1000.0);
        let mut coord = coordinator(&page);
        let mut visited: Vec<&str> = vec![coord.state().active_section_id];
        let mut offset = 0.0;
        // step is smaller than every section so none is skipped
        while offset <= 6000.0 {
            page.scroll(offset);
            let id = coord.on_scroll_or_resize().active_section_id;
            if visited.last() != Some(&id) {
                visited.push(id);
            }
            offset += 800.0;
        }
        let expected = registry.list().iter().map(|s| s.id).collect::<Vec<_>>();
        assert_eq!(visited, expected);
    }

    #[test]
    fn test_active_id_always_registered() {
        let registry = SectionRegistry::portfolio();
        let page = StackedPage::uniform(700.0);
        let mut coord = coordinator(&page);
        let mut offset = -500.0;
        while offset < 6000.0 {
            page.scroll(offset);
            let id = coord.on_scroll_or_resize().active_section_id;
            assert!(registry.find(id).is_some(), "{id} at offset {offset}");
            offset += 37.0;
        }
    }

    #[test]
    fn test_no_match_keeps_previous_section() {
        let page = StackedPage::uniform(1000.0);
        let mut coord = coordinator(&page);
        page.scroll(2500.0);
        assert_eq!(coord.on_scroll_or_resize().active_section_id, "education");

        // past the end of the page nothing straddles the line
        page.scroll(10_000.0);
        let state = coord.on_scroll_or_resize();
        assert_eq!(state.active_section_id, "education");
        assert!(state.is_scrolled);
    }

    #[test]
    fn test_unrendered_sections_are_skipped() {
        let config = ScrollConfig::default();
        let registry = SectionRegistry::portfolio();
        let previous = ScrollState::initial(&registry);
        let rects = registry.list().iter().map(|s| {
            let rect = (s.id == "skills").then_some(SectionRect {
                top: -40.0,
                bottom: 600.0,
            });
            (s, rect)
        });
        let next = compute_state(&config, &previous, 4040.0, rects);
        assert_eq!(next.active_section_id, "skills");
    }

    #[test]
    fn test_is_scrolled_threshold() {
        let page = StackedPage::uniform(1000.0);
        let mut coord = coordinator(&page);
        page.scroll(20.0);
        assert!(!coord.on_scroll_or_resize().is_scrolled);
        page.scroll(21.0);
        assert!(coord.on_scroll_or_resize().is_scrolled);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let page = StackedPage::uniform(1000.0);
        let mut coord = coordinator(&page);
        page.scroll(3333.0);
        let first = coord.on_scroll_or_resize();
        let second = coord.on_scroll_or_resize();
        assert_eq!(first, second);
        assert_eq!(first.active_section_id, "projects");
    }

    #[test]
    fn test_subscribers_receive_updates_until_removed() {
        let page = StackedPage::uniform(1000.0);
        let mut coord = coordinator(&page);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let calls = Arc::new(AtomicUsize::new(0));

        let sub = {
            let seen = seen.clone();
            coord.subscribe(move |state| seen.lock().unwrap().push(state.active_section_id))
        };
        {
            let calls = calls.clone();
            coord.subscribe(move |_| {
                calls.fetch_add(1, Ordering::SeqCst);
            });
        }

        page.scroll(1500.0);
        coord.on_scroll_or_resize();
        assert!(coord.unsubscribe(sub));
        assert!(!coord.unsubscribe(sub));
        page.scroll(5500.0);
        coord.on_scroll_or_resize();

        assert_eq!(*seen.lock().unwrap(), vec!["about"]);
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        coord.teardown();
        coord.on_scroll_or_resize();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_navigate_unknown_section_fails() {
        let page = StackedPage::uniform(1000.0);
        let mut coord = coordinator(&page);
        page.scroll(1500.0);
        coord.on_scroll_or_resize();
        let before = coord.state();

        let err = coord.navigate_to("blog").unwrap_err();
        assert_eq!(err, NavigationError::UnknownSection("blog".to_string()));
        assert_eq!(coord.state(), before);
        assert!(page.scrolled_to.lock().unwrap().is_empty());
    }

    #[test]
    fn test_navigate_does_not_update_active_section() {
        let page = StackedPage::uniform(1000.0);
        let coord = coordinator(&page);
        assert_eq!(coord.navigate_to("contact"), Ok(Navigation::Scrolling));
        assert_eq!(coord.state().active_section_id, "home");
        assert_eq!(*page.scrolled_to.lock().unwrap(), vec!["contact"]);
    }

    #[test]
    fn test_navigate_to_unmounted_section_is_noop() {
        let registry = SectionRegistry::portfolio();
        // only the first two sections have been rendered
        let page = StackedPage::new(&registry, &[1000.0, 1000.0]);
        let coord = coordinator(&page);
        assert_eq!(coord.navigate_to("skills"), Ok(Navigation::NotMounted));
        assert!(page.scrolled_to.lock().unwrap().is_empty());
    }

    #[test]
    fn test_only_started_scroll_closes_menu() {
        let registry = SectionRegistry::portfolio();
        let page = StackedPage::new(&registry, &[1000.0, 1000.0]);
        let coord = coordinator(&page);
        assert!(closes_menu(&coord.navigate_to("about")));
        assert!(!closes_menu(&coord.navigate_to("skills")));
        assert!(!closes_menu(&coord.navigate_to("blog")));

        assert!(closes_menu(&Ok(Navigation::Scrolling)));
        assert!(!closes_menu(&Ok(Navigation::NotMounted)));
        assert!(!closes_menu(&Err(NavigationError::UnknownSection(
            "blog".to_string()
        ))));
    }

    #[test]
    fn test_scroll_progress() {
        assert_eq!(scroll_progress(0.0, 6000.0, 800.0), 0.0);
        assert_eq!(scroll_progress(2600.0, 6000.0, 800.0), 0.5);
        assert_eq!(scroll_progress(9000.0, 6000.0, 800.0), 1.0);
        assert_eq!(scroll_progress(-10.0, 6000.0, 800.0), 0.0);
        // page shorter than the viewport
        assert_eq!(scroll_progress(0.0, 500.0, 800.0), 0.0);
    }
}
