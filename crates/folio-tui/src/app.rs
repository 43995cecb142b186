use std::collections::HashMap;
use std::sync::Arc;

use folio_core::content::{Portfolio, Section};
use folio_core::{AppConfig, CarouselController};
use tracing::warn;
use url::Url;

use crate::form::ContactForm;
use crate::theme::Theme;
use crate::transition::OffsetAnimator;

/// Paging state plus slide animation for one paged section
#[derive(Debug, Clone)]
pub struct SectionCarousel {
    pub controller: CarouselController,
    pub animator: OffsetAnimator,
}

impl SectionCarousel {
    fn new(controller: CarouselController, animator: OffsetAnimator) -> Self {
        Self { controller, animator }
    }

    /// Re-target the animator after the controller moved
    fn follow(&mut self) {
        self.animator.slide_to(self.controller.visible_offset_percent());
    }

    /// Re-place the track without animating (layout changed under it)
    fn snap(&mut self) {
        self.animator.jump_to(self.controller.visible_offset_percent());
    }
}

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal browsing mode
    Normal,
    /// Help overlay
    Help,
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Active color theme
    pub theme: Theme,
    /// Content being presented
    pub portfolio: Portfolio,
    /// Section on screen
    pub section: Section,
    /// Current application mode
    pub mode: Mode,
    /// Contact form state
    pub contact: ContactForm,
    /// Terminal width in columns
    pub terminal_width: u16,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
    carousels: HashMap<Section, SectionCarousel>,
}

impl App {
    pub fn new(config: Arc<AppConfig>, theme: Theme, portfolio: Portfolio, terminal_width: u16) -> Self {
        let viewport = config.viewport_width_px(terminal_width);
        let carousels = Section::PAGED
            .iter()
            .map(|&section| {
                let total = portfolio.item_count(section).unwrap_or(0);
                let controller =
                    CarouselController::with_breakpoints(total, viewport, config.carousel);
                let animator = OffsetAnimator::new(config.ui.transition.clone());
                (section, SectionCarousel::new(controller, animator))
            })
            .collect();

        Self {
            config,
            theme,
            portfolio,
            section: Section::About,
            mode: Mode::Normal,
            contact: ContactForm::default(),
            terminal_width,
            should_quit: false,
            status_message: None,
            pending_key: None,
            carousels,
        }
    }

    /// Viewport width in pixels fed to the carousel breakpoints
    pub fn viewport_width_px(&self) -> u32 {
        self.config.viewport_width_px(self.terminal_width)
    }

    /// Terminal resized: every carousel recomputes items per view
    pub fn resize(&mut self, columns: u16) {
        self.terminal_width = columns;
        let viewport = self.viewport_width_px();
        for carousel in self.carousels.values_mut() {
            carousel.controller.set_viewport_width(viewport);
            carousel.snap();
        }
    }

    /// Replace the presented content, re-clamping every carousel
    pub fn set_portfolio(&mut self, portfolio: Portfolio) {
        for (&section, carousel) in self.carousels.iter_mut() {
            let total = portfolio.item_count(section).unwrap_or(0);
            carousel.controller.set_total_items(total);
            carousel.snap();
        }
        self.portfolio = portfolio;
    }

    pub fn carousel(&self, section: Section) -> Option<&SectionCarousel> {
        self.carousels.get(&section)
    }

    pub fn current_carousel(&self) -> Option<&SectionCarousel> {
        self.carousel(self.section)
    }

    fn with_current_carousel(&mut self, f: impl FnOnce(&mut CarouselController)) {
        if let Some(carousel) = self.carousels.get_mut(&self.section) {
            f(&mut carousel.controller);
            carousel.follow();
        }
    }

    pub fn carousel_next(&mut self) {
        self.with_current_carousel(|c| c.go_next());
    }

    pub fn carousel_prev(&mut self) {
        self.with_current_carousel(|c| c.go_previous());
    }

    pub fn carousel_go_to(&mut self, index: usize) {
        self.with_current_carousel(|c| c.go_to(index));
    }

    pub fn carousel_first(&mut self) {
        self.with_current_carousel(|c| c.go_to(0));
    }

    pub fn carousel_last(&mut self) {
        self.with_current_carousel(|c| c.go_to(c.max_index()));
    }

    pub fn select_section(&mut self, section: Section) {
        self.section = section;
        self.pending_key = None;
    }

    pub fn next_section(&mut self) {
        self.select_section(self.section.next());
    }

    pub fn prev_section(&mut self) {
        self.select_section(self.section.previous());
    }

    /// Typing goes to the contact form
    pub fn is_input_mode(&self) -> bool {
        self.section == Section::Contact && self.mode == Mode::Normal
    }

    /// Link of the leftmost visible item in the current section
    pub fn current_link(&self) -> Option<&Url> {
        let carousel = self.current_carousel()?;
        self.portfolio
            .link_at(self.section, carousel.controller.current_index())
    }

    /// Open the current item's link in the system browser
    pub fn open_current_link(&mut self) {
        let Some(url) = self.current_link().cloned() else {
            self.set_status("No link for this item");
            return;
        };
        match open::that(url.as_str()) {
            Ok(()) => self.set_status(format!("Opening: {}", url)),
            Err(e) => {
                warn!("Failed to open {}: {}", url, e);
                self.set_status(format!("Failed to open browser: {}", e));
            }
        }
    }

    /// Esc: close the help overlay, or leave the contact form
    pub fn exit_mode(&mut self) {
        match self.mode {
            Mode::Help => self.mode = Mode::Normal,
            Mode::Normal if self.section == Section::Contact => self.select_section(Section::About),
            Mode::Normal => self.clear_status(),
        }
    }

    /// Advance slide animations; returns the current section's drawn offset
    pub fn update_animations(&mut self) -> Option<f64> {
        for carousel in self.carousels.values_mut() {
            carousel.animator.update();
        }
        self.current_carousel().map(|c| c.animator.current())
    }

    /// Whether any slide is still running
    pub fn needs_animation_frame(&self) -> bool {
        self.carousels.values().any(|c| c.animator.is_animating())
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
