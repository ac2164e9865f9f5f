use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::scroll::{RenderSurface, SectionRect};

/// The browser window as seen by the scroll coordinator.
///
/// Only valid on the client; the coordinator never queries it during SSR.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomSurface;

impl RenderSurface for DomSurface {
    fn scroll_offset(&self) -> f64 {
        window().scroll_y().unwrap_or_default()
    }

    fn section_rect(&self, id: &str) -> Option<SectionRect> {
        let rect = document().get_element_by_id(id)?.get_bounding_client_rect();
        Some(SectionRect {
            top: rect.top(),
            bottom: rect.bottom(),
        })
    }

    fn smooth_scroll_to(&self, id: &str) -> bool {
        let Some(el) = document().get_element_by_id(id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// Fraction of the document scrolled past, read from the live page.
pub fn page_progress() -> f64 {
    let offset = window().scroll_y().unwrap_or_default();
    let viewport = window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default();
    let height = document()
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or_default();
    crate::scroll::scroll_progress(offset, height, viewport)
}
