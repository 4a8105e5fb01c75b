//! Central application state.
//!
//! One [`AppState`] is one mounted landing page.  It owns the scroll sampler
//! and every derived view-state that subscribes to it, so dropping (or
//! [`unmount`](AppState::unmount)ing) the state releases all subscriptions.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::core::{
    booking::StaySummary,
    content::{Page, Timings},
    glide::ScrollGlide,
    menu::MenuController,
    parallax::{Parallax, ParallaxBinding},
    progress::{ProgressMapper, ProgressSpring},
    reveal::{InViewLatch, Reveal, Span},
    scroll::ScrollSampler,
    threshold::ThresholdState,
};
use crate::ui::document::{Document, Stagger};
use crate::ui::layout::{AppLayout, NAVBAR_HEIGHT};
use crate::ui::theme::Theme;

/// Sections count as in view once they are this far inside the viewport.
const REVEAL_MARGIN_PX: u32 = 100;

/// Which view / overlay is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Page,
    Booking,
}

// ───────────────────────────────────────── section reveals ───

/// One in-view latch per document block plus the moment each one fired.
#[derive(Debug, Default)]
pub struct SectionReveals {
    latches: Vec<Option<InViewLatch>>,
    revealed_at: Vec<Option<Instant>>,
}

impl SectionReveals {
    /// Latch every block of `document` that has not been revealed yet.
    /// Already revealed blocks keep their timestamps across remounts.
    pub fn mount(&mut self, sampler: &ScrollSampler, document: &Document, px_per_row: u32) {
        if self.revealed_at.len() != document.blocks.len() {
            self.revealed_at = vec![None; document.blocks.len()];
        }
        self.latches = document
            .blocks
            .iter()
            .zip(&self.revealed_at)
            .map(|(block, at)| {
                if at.is_some() {
                    return None;
                }
                let span = Span {
                    top: block.rows.start as u32 * px_per_row,
                    height: block.rows.len() as u32 * px_per_row,
                };
                Some(InViewLatch::mount(sampler, span, REVEAL_MARGIN_PX))
            })
            .collect();
    }

    /// Timestamp latches that fired since the last poll and drop them.
    pub fn poll(&mut self, now: Instant) {
        for (latch, at) in self.latches.iter_mut().zip(self.revealed_at.iter_mut()) {
            if latch.as_ref().is_some_and(InViewLatch::is_revealed) {
                *latch = None;
                *at = Some(now);
            }
        }
    }

    pub fn is_revealed(&self, block: usize) -> bool {
        self.revealed_at.get(block).is_some_and(Option::is_some)
    }

    /// Latches still waiting for their block.
    pub fn pending(&self) -> usize {
        self.latches.iter().flatten().count()
    }

    /// Fade-in alpha per block at `now`.
    pub fn alphas(&self, document: &Document, timings: &Timings, now: Instant) -> Vec<f64> {
        document
            .blocks
            .iter()
            .zip(&self.revealed_at)
            .map(|(block, at)| {
                let Some(at) = at else {
                    return 0.0;
                };
                let reveal = match block.stagger {
                    Stagger::None => timings.section,
                    Stagger::Card(i) => Reveal::staggered(timings.section, timings.card_stagger, i),
                    Stagger::Feature(i) => {
                        Reveal::staggered(timings.section, timings.feature_stagger, i)
                    }
                };
                reveal.progress(now.saturating_duration_since(*at))
            })
            .collect()
    }
}

// ───────────────────────────────────────── app state ─────────

/// Top-level application state.
pub struct AppState {
    pub page: Page,
    pub theme: Theme,
    pub config: AppConfig,
    pub timings: Timings,
    /// Source of every scroll-derived value below.
    pub sampler: ScrollSampler,
    /// In-flight anchor navigation.
    pub glide: ScrollGlide,
    /// Navbar background switch.
    pub navbar: ThresholdState,
    /// Raw reading progress; only on pages with a progress bar.
    pub progress: Option<ProgressMapper>,
    /// Smoothed progress actually drawn.
    pub spring: ProgressSpring,
    /// Hero parallax; only on pages with a parallax hero.
    pub parallax: Option<ParallaxBinding>,
    pub menu: MenuController,
    pub document: Document,
    pub reveals: SectionReveals,
    pub stay: StaySummary,
    pub active_view: ActiveView,
    /// Full terminal area from the last resize.
    pub terminal_area: Rect,
    /// Entrance animations are timed from here.
    pub mounted_at: Instant,
    last_tick: Instant,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(page: Page, config: AppConfig, stay: StaySummary, now: Instant) -> Self {
        let tuning = config.tuning;
        let sampler = ScrollSampler::new();
        let traits = page.traits();
        let navbar = ThresholdState::mount(&sampler, tuning.threshold_px);
        let progress = traits.progress_bar.then(|| ProgressMapper::mount(&sampler));
        let parallax = traits
            .parallax_hero
            .then(|| tuning.parallax().mount(&sampler));
        tracing::debug!(
            page = page.label(),
            subscribers = sampler.subscriber_count(),
            "page mounted"
        );

        Self {
            page,
            theme: Theme::for_page(page),
            timings: page.timings().scaled(tuning.entrance_speed),
            config,
            sampler,
            glide: ScrollGlide::new(tuning.glide_speed),
            navbar,
            progress,
            spring: ProgressSpring::new(tuning.spring()),
            parallax,
            menu: MenuController::new(),
            document: Document::default(),
            reveals: SectionReveals::default(),
            stay,
            active_view: ActiveView::default(),
            terminal_area: Rect::default(),
            mounted_at: now,
            last_tick: now,
            should_quit: false,
            status_message: None,
        }
    }

    pub fn px_per_row(&self) -> u32 {
        self.config.tuning.px_per_row.max(1)
    }

    pub fn layout(&self) -> AppLayout {
        AppLayout::from_area(self.terminal_area)
    }

    /// Rebuild the document for a new terminal size and re-measure the
    /// scrollable height.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.terminal_area = Rect::new(0, 0, width, height);
        self.glide.cancel();
        let page_area = self.layout().page_area;
        let ppr = self.px_per_row();
        self.document = Document::build(self.page, &self.theme, page_area.width, page_area.height);
        self.sampler.resize(
            self.document.height() as u32 * ppr,
            u32::from(page_area.height) * ppr,
        );
        self.reveals.mount(&self.sampler, &self.document, ppr);
        if let Some(progress) = &self.progress {
            self.spring.set_target(progress.ratio());
            self.spring.snap();
        }
        tracing::debug!(
            width,
            height,
            rows = self.document.height(),
            max_scrollable = self.sampler.max_scrollable(),
            "resized"
        );
    }

    /// First document row at the top of the viewport.
    pub fn scroll_row(&self) -> usize {
        (self.sampler.offset_y() / self.px_per_row()) as usize
    }

    pub fn scroll_rows(&mut self, rows: i64) {
        self.glide.cancel();
        self.sampler.scroll_by(rows * i64::from(self.px_per_row()));
    }

    /// Rows moved by page up / page down.
    pub fn page_rows(&self) -> i64 {
        i64::from(self.layout().page_area.height.saturating_sub(NAVBAR_HEIGHT).max(1))
    }

    pub fn scroll_to_top(&mut self) {
        self.glide.cancel();
        self.sampler.sample(0);
    }

    /// The brand is a link to the top of the page.
    pub fn follow_brand(&mut self) {
        let top = self.menu.activate_link(0);
        self.glide.cancel();
        self.sampler.sample(top);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.glide.cancel();
        self.sampler.sample(self.sampler.max_scrollable());
    }

    /// Scroll to an in-page anchor, gliding when enabled.  Anchors with no
    /// matching section leave the scroll position alone.
    pub fn navigate(&mut self, anchor: &str) {
        let Some(row) = self.document.anchor_row(anchor) else {
            tracing::debug!(anchor, "no section for anchor");
            return;
        };
        let row = (row as u32).saturating_sub(u32::from(NAVBAR_HEIGHT));
        let target = (row * self.px_per_row()).min(self.sampler.max_scrollable());
        tracing::debug!(anchor, target, "navigating");
        if self.glide.is_enabled() {
            self.glide.start(target);
        } else {
            self.sampler.sample(target);
        }
    }

    /// Activate the `index`-th menu entry: a nav link, or the booking
    /// call-to-action after the last link.
    pub fn activate_menu_entry(&mut self, index: usize) {
        match self.page.nav_links().get(index) {
            Some(&link) => {
                let link = self.menu.activate_link(link);
                self.navigate(link.anchor);
            }
            None => self.open_booking(),
        }
    }

    /// Booking call-to-action: closes the menu, then opens the summary.
    pub fn open_booking(&mut self) {
        let view = &mut self.active_view;
        self.menu.activate_booking(|| *view = ActiveView::Booking);
        tracing::info!(page = self.page.label(), "booking opened");
    }

    pub fn confirm_booking(&mut self) {
        self.active_view = ActiveView::Page;
        self.status_message = Some(format!(
            "Request sent: {} → {}, {}",
            StaySummary::fmt_date(self.stay.check_in),
            StaySummary::fmt_date(self.stay.check_out),
            self.stay.guests_label(),
        ));
        tracing::info!(check_in = %self.stay.check_in, check_out = %self.stay.check_out, "booking requested");
    }

    /// Navbar is solid past the threshold, and on some pages while the menu
    /// is open.
    pub fn navbar_solid(&self) -> bool {
        self.navbar.is_past() || (self.page.traits().solid_nav_when_menu_open && self.menu.is_open())
    }

    pub fn hero_parallax(&self) -> Parallax {
        self.parallax.as_ref().map_or(Parallax::REST, ParallaxBinding::get)
    }

    pub fn entrance_elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.mounted_at)
    }

    /// Advance time-driven state: the anchor glide, the progress spring
    /// and reveal latches.
    pub fn tick(&mut self, now: Instant) {
        let dt = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        if let Some(next) = self.glide.step(self.sampler.offset_y(), dt.as_secs_f64()) {
            self.sampler.sample(next);
        }
        if let Some(progress) = &self.progress {
            self.spring.set_target(progress.ratio());
            self.spring.step(dt.as_secs_f64());
        }
        self.reveals.poll(now);
    }

    /// Release every scroll subscription.  Returns the number still
    /// registered afterwards, which is always zero.
    pub fn unmount(self) -> usize {
        let AppState {
            sampler,
            navbar,
            progress,
            parallax,
            reveals,
            ..
        } = self;
        drop((navbar, progress, parallax, reveals));
        let remaining = sampler.subscriber_count();
        tracing::debug!(remaining, "page unmounted");
        remaining
    }
}
