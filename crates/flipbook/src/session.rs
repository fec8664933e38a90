//! State of one open flip-book viewer.
//!
//! The session is a plain state machine: the host feeds it renderer results,
//! widget events, viewport sizes and timer expiries, and reads back what to
//! show. It owns no timers itself; it hands out deadlines and the host
//! schedules them.

use log::{debug, warn};
use serde::Serialize;

use crate::error::ViewerError;
use crate::idle::{IdleTracker, PendingTimer};
use crate::layout::{DisplayDimensions, LayoutConfig, ResponsiveLayout, Viewport};
use crate::renderer::PageGeometry;
use crate::types::Catalogue;

/// Upper bound on how long the spinner waits for the page-1 probe once the
/// page count is known.
pub const LOADING_GRACE_MS: u64 = 1500;

pub const LOAD_ERROR_MESSAGE: &str = "Failed to load PDF. Please check if the file exists.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "lowercase")]
pub enum LoadState {
    Loading,
    Ready,
    Error(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    Pending,
    Measured,
    Failed,
}

/// What changed during a [`ViewerSession::poll`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Changes {
    pub became_ready: bool,
    pub became_idle: bool,
}

#[derive(Debug, Clone)]
pub struct ViewerSession {
    catalogue: &'static Catalogue,
    load: LoadState,
    page_count: u32,
    current_page: u32,
    probe: Probe,
    loading_deadline_ms: Option<u64>,
    layout: ResponsiveLayout,
    idle: IdleTracker,
}

impl ViewerSession {
    /// Start a session for `catalogue`. Counts as the first activity, so the
    /// idle timer is armed straight away.
    pub fn open(catalogue: &'static Catalogue, now_ms: u64) -> Self {
        Self::with_config(catalogue, LayoutConfig::default(), IdleTracker::default(), now_ms)
    }

    pub fn with_config(
        catalogue: &'static Catalogue,
        layout: LayoutConfig,
        idle: IdleTracker,
        now_ms: u64,
    ) -> Self {
        let mut session = Self {
            catalogue,
            load: LoadState::Loading,
            page_count: 0,
            current_page: 0,
            probe: Probe::Pending,
            loading_deadline_ms: None,
            layout: ResponsiveLayout::new(layout),
            idle,
        };
        session.idle.activity(now_ms);
        debug!("viewer opened for {}", catalogue.slug);
        session
    }

    pub fn catalogue(&self) -> &'static Catalogue {
        self.catalogue
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// "3 / 12" style counter shown in the navigation bar.
    pub fn page_label(&self) -> String {
        format!("{} / {}", self.current_page + 1, self.page_count)
    }

    pub fn dimensions(&self) -> DisplayDimensions {
        self.layout.dimensions()
    }

    pub fn layout_config(&self) -> &LayoutConfig {
        self.layout.config()
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.layout.aspect_ratio()
    }

    pub fn is_idle(&self) -> bool {
        self.idle.is_idle()
    }

    pub fn idle_timer(&self) -> Option<PendingTimer> {
        self.idle.pending()
    }

    /// Deadline after which the spinner is dismissed regardless of the probe.
    pub fn loading_deadline(&self) -> Option<u64> {
        self.loading_deadline_ms
    }

    // ─── Document load ──────────────────────────────────────────────

    /// The renderer opened the document. Returns the loading deadline the
    /// host must schedule a wake-up for.
    pub fn document_opened(&mut self, page_count: u32, now_ms: u64) -> Option<u64> {
        if !self.load.is_loading() || self.page_count > 0 {
            return None;
        }
        if page_count == 0 {
            self.document_failed(&ViewerError::Open("document has no pages".into()));
            return None;
        }
        self.page_count = page_count;
        let deadline = now_ms + LOADING_GRACE_MS;
        self.loading_deadline_ms = Some(deadline);
        debug!("{}: {} pages, spinner deadline {}", self.catalogue.slug, page_count, deadline);
        Some(deadline)
    }

    pub fn document_failed(&mut self, err: &ViewerError) {
        if !self.load.is_loading() {
            return;
        }
        warn!("{}: load failed: {err}", self.catalogue.slug);
        self.loading_deadline_ms = None;
        self.load = LoadState::Error(LOAD_ERROR_MESSAGE.to_string());
    }

    /// Result of measuring page 1. Accepted at any time while the session is
    /// not in error, so a late answer still fixes the aspect ratio.
    ///
    /// Returns the new page size when the answer arrives after the session
    /// went ready and changes it. The host must push that size into a book
    /// that is already mounted.
    pub fn geometry_resolved(
        &mut self,
        result: Result<PageGeometry, ViewerError>,
    ) -> Option<DisplayDimensions> {
        if matches!(self.load, LoadState::Error(_)) {
            return None;
        }
        let was_ready = self.load.is_ready();
        let mut resized = None;
        match result {
            Ok(geometry) => {
                self.probe = Probe::Measured;
                let before = self.layout.dimensions();
                let after = self.layout.set_aspect_ratio(geometry.aspect_ratio());
                if was_ready && after != before {
                    debug!(
                        "{}: late page size, book now {:.0}x{:.0}",
                        self.catalogue.slug,
                        after.width(),
                        after.height()
                    );
                    resized = Some(after);
                }
            }
            Err(e) => {
                debug!("{}: page 1 probe failed, keeping default ratio: {e}", self.catalogue.slug);
                if self.probe == Probe::Pending {
                    self.probe = Probe::Failed;
                }
            }
        }
        self.finish_loading();
        resized
    }

    /// The loading deadline went off.
    pub fn loading_grace_elapsed(&mut self) -> bool {
        self.finish_loading()
    }

    fn finish_loading(&mut self) -> bool {
        if self.load.is_loading() && self.page_count > 0 {
            self.load = LoadState::Ready;
            self.loading_deadline_ms = None;
            debug!("{}: ready", self.catalogue.slug);
            true
        } else {
            false
        }
    }

    // ─── Layout ─────────────────────────────────────────────────────

    pub fn resize(&mut self, viewport: Viewport) -> DisplayDimensions {
        self.layout.resize(viewport)
    }

    // ─── Navigation ─────────────────────────────────────────────────

    /// The widget finished turning to `index`.
    pub fn page_changed(&mut self, index: u32) {
        if !self.load.is_ready() || self.page_count == 0 {
            return;
        }
        self.current_page = index.min(self.page_count - 1);
    }

    // ─── Idle ───────────────────────────────────────────────────────

    pub fn activity(&mut self, now_ms: u64) -> PendingTimer {
        self.idle.activity(now_ms)
    }

    pub fn idle_fired(&mut self, generation: u64) -> bool {
        self.idle.fire(generation)
    }

    // ─── Time ───────────────────────────────────────────────────────

    /// Apply every deadline that has passed by `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> Changes {
        let mut changes = Changes::default();
        if let Some(deadline) = self.loading_deadline_ms {
            if now_ms >= deadline {
                changes.became_ready = self.loading_grace_elapsed();
            }
        }
        changes.became_idle = self.idle.poll(now_ms);
        changes
    }

    /// Release pending deadlines when the viewer closes.
    pub fn close(&mut self) {
        self.idle.cancel();
        self.loading_deadline_ms = None;
        debug!("viewer closed for {}", self.catalogue.slug);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{AudioResource, FlipSound};
    use crate::content::CATALOGUES;
    use crate::layout::DEFAULT_ASPECT_RATIO;
    use crate::navigation::{dispatch, Intent, Outcome};
    use crate::renderer::BookWidget;
    use approx::assert_relative_eq;

    fn session() -> ViewerSession {
        ViewerSession::open(&CATALOGUES[0], 0)
    }

    fn a4() -> PageGeometry {
        PageGeometry::new(595.0, 842.0).unwrap()
    }

    /// Book that enforces its own bounds and reports page changes back.
    struct FakeBook {
        page: u32,
        count: u32,
        events: Vec<u32>,
    }

    impl BookWidget for FakeBook {
        fn flip_next(&mut self) {
            if self.page + 1 < self.count {
                self.page += 1;
                self.events.push(self.page);
            }
        }

        fn flip_prev(&mut self) {
            if self.page > 0 {
                self.page -= 1;
                self.events.push(self.page);
            }
        }
    }

    struct Mute;

    impl AudioResource for Mute {
        type Instance = ();

        fn clone_instance(&self) -> Result<(), ViewerError> {
            Ok(())
        }

        fn start(&self, _: &(), _: f64) -> Result<(), ViewerError> {
            Ok(())
        }
    }

    #[test]
    fn test_starts_loading_with_idle_timer_armed() {
        let s = session();
        assert_eq!(*s.load_state(), LoadState::Loading);
        assert!(s.idle_timer().is_some());
        assert!(!s.is_idle());
    }

    #[test]
    fn test_probe_success_sets_ratio_and_ready() {
        let mut s = session();
        s.resize(Viewport::new(1600.0, 900.0));
        assert_eq!(s.document_opened(24, 100), Some(100 + LOADING_GRACE_MS));
        assert!(s.load_state().is_loading());
        s.geometry_resolved(Ok(a4()));
        assert!(s.load_state().is_ready());
        assert_relative_eq!(s.dimensions().aspect_ratio(), 595.0 / 842.0, epsilon = 1e-12);
        assert_relative_eq!(s.dimensions().height(), 800.0, epsilon = 1e-9);
        assert!(s.loading_deadline().is_none());
    }

    #[test]
    fn test_stalled_probe_is_ready_by_deadline() {
        let mut s = session();
        let t = 5_000;
        s.document_opened(12, t);
        assert!(!s.poll(t + LOADING_GRACE_MS - 1).became_ready);
        assert!(s.load_state().is_loading());
        assert!(s.poll(t + LOADING_GRACE_MS).became_ready);
        assert_eq!(*s.load_state(), LoadState::Ready);
        assert_relative_eq!(s.aspect_ratio(), DEFAULT_ASPECT_RATIO);
    }

    #[test]
    fn test_late_probe_still_updates_ratio() {
        let mut s = session();
        s.resize(Viewport::new(1600.0, 900.0));
        s.document_opened(12, 0);
        s.poll(LOADING_GRACE_MS);
        assert!(s.load_state().is_ready());
        s.geometry_resolved(Ok(a4()));
        assert!(s.load_state().is_ready());
        assert_relative_eq!(s.aspect_ratio(), 595.0 / 842.0, epsilon = 1e-12);
    }

    #[test]
    fn test_grace_expiry_leaves_book_buildable_at_default_size() {
        let mut s = session();
        s.resize(Viewport::new(1600.0, 900.0));
        s.document_opened(12, 0);
        assert!(s.poll(LOADING_GRACE_MS).became_ready);
        // Everything a book needs is known without the page-1 answer
        assert_eq!(s.page_count(), 12);
        assert_eq!(s.page_label(), "1 / 12");
        assert_relative_eq!(s.dimensions().height(), 800.0, epsilon = 1e-9);
        assert_relative_eq!(s.dimensions().width(), 600.0, epsilon = 1e-9);
    }

    #[test]
    fn test_late_geometry_returns_size_for_mounted_book() {
        let mut s = session();
        s.resize(Viewport::new(1600.0, 900.0));
        s.document_opened(12, 0);
        s.poll(LOADING_GRACE_MS);

        let dims = s.geometry_resolved(Ok(a4())).expect("late answer resizes the book");
        assert_relative_eq!(dims.height(), 800.0, epsilon = 1e-9);
        assert_relative_eq!(dims.width(), 800.0 * 595.0 / 842.0, epsilon = 1e-9);
        assert_eq!(dims, s.dimensions());

        // Same ratio again: nothing to push
        assert_eq!(s.geometry_resolved(Ok(a4())), None);
    }

    #[test]
    fn test_timely_or_failed_geometry_needs_no_resize() {
        let mut s = session();
        s.resize(Viewport::new(1600.0, 900.0));
        s.document_opened(12, 0);
        // Before ready the book is not mounted yet
        assert_eq!(s.geometry_resolved(Ok(a4())), None);
        assert!(s.load_state().is_ready());

        let mut s = session();
        s.document_opened(12, 0);
        s.poll(LOADING_GRACE_MS);
        let failed = s.geometry_resolved(Err(ViewerError::Render("page 1 unavailable".into())));
        assert_eq!(failed, None);
        assert_relative_eq!(s.aspect_ratio(), DEFAULT_ASPECT_RATIO);
    }

    #[test]
    fn test_probe_failure_falls_back_silently() {
        let mut s = session();
        s.document_opened(8, 0);
        s.geometry_resolved(Err(ViewerError::Render("page 1 unavailable".into())));
        assert!(s.load_state().is_ready());
        assert_relative_eq!(s.aspect_ratio(), DEFAULT_ASPECT_RATIO);
    }

    #[test]
    fn test_open_failure_is_terminal() {
        let mut s = session();
        s.document_failed(&ViewerError::Open("404".into()));
        assert_eq!(
            *s.load_state(),
            LoadState::Error(LOAD_ERROR_MESSAGE.to_string())
        );
        // Nothing afterwards moves it out of the error state
        s.document_opened(10, 0);
        s.geometry_resolved(Ok(a4()));
        s.poll(1_000_000);
        assert!(matches!(s.load_state(), LoadState::Error(_)));
        assert_eq!(s.page_count(), 0);
        s.page_changed(3);
        assert_eq!(s.current_page(), 0);
    }

    #[test]
    fn test_ready_never_reverts() {
        let mut s = session();
        s.document_opened(4, 0);
        s.geometry_resolved(Ok(a4()));
        s.document_failed(&ViewerError::Open("late failure".into()));
        assert!(s.load_state().is_ready());
    }

    #[test]
    fn test_empty_document_is_an_error() {
        let mut s = session();
        assert_eq!(s.document_opened(0, 0), None);
        assert!(matches!(s.load_state(), LoadState::Error(_)));
    }

    #[test]
    fn test_next_at_last_page_is_noop() {
        let mut s = session();
        s.document_opened(3, 0);
        s.geometry_resolved(Ok(a4()));
        let mut book = FakeBook {
            page: 0,
            count: 3,
            events: Vec::new(),
        };
        let sound = FlipSound::new(Mute);

        for _ in 0..5 {
            assert_eq!(dispatch(Intent::Next, &mut book, &sound), Outcome::Flipped);
            for idx in book.events.drain(..) {
                s.page_changed(idx);
            }
        }
        assert_eq!(s.current_page(), 2);
        assert_eq!(s.page_label(), "3 / 3");

        dispatch(Intent::Next, &mut book, &sound);
        assert!(book.events.is_empty());
        assert_eq!(s.current_page(), 2);
    }

    #[test]
    fn test_index_only_moves_on_widget_event() {
        let mut s = session();
        s.document_opened(10, 0);
        s.geometry_resolved(Ok(a4()));
        let mut book = FakeBook {
            page: 0,
            count: 10,
            events: Vec::new(),
        };
        dispatch(Intent::Next, &mut book, &FlipSound::<Mute>::silent());
        assert_eq!(s.current_page(), 0);
        s.page_changed(book.events[0]);
        assert_eq!(s.current_page(), 1);
    }

    #[test]
    fn test_close_intent_does_not_flip() {
        let mut book = FakeBook {
            page: 0,
            count: 2,
            events: Vec::new(),
        };
        let outcome = dispatch(Intent::Close, &mut book, &FlipSound::<Mute>::silent());
        assert_eq!(outcome, Outcome::CloseRequested);
        assert!(book.events.is_empty());
    }

    #[test]
    fn test_page_changed_clamped() {
        let mut s = session();
        s.document_opened(4, 0);
        s.loading_grace_elapsed();
        s.page_changed(99);
        assert_eq!(s.current_page(), 3);
    }

    #[test]
    fn test_idle_through_session() {
        let mut s = session();
        for t in [500, 1000, 1500, 2000] {
            s.activity(t);
            assert!(!s.poll(t).became_idle);
        }
        assert!(!s.poll(4999).became_idle);
        assert!(s.poll(5000).became_idle);
        assert!(s.is_idle());
        assert!(!s.poll(9000).became_idle);
    }

    #[test]
    fn test_close_releases_deadlines() {
        let mut s = session();
        s.document_opened(4, 0);
        s.close();
        assert!(s.idle_timer().is_none());
        assert!(s.loading_deadline().is_none());
        assert_eq!(s.poll(100_000), Changes::default());
    }
}
