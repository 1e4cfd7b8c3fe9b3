//! Page controller.
//!
//! Owns every component state of one page and routes `PageEvent`s to the
//! right reducer. After each dispatch the states before and after are
//! compared and the difference is handed back as `Effect`s. Reducers never
//! see timers, the catalog, or the host.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::error::{Component, ErrorRegistry};
use crate::gallery::{Catalog, CatalogError, GalleryItem, ItemId};
use crate::ui::carousel::{AutoAdvance, CarouselIntent, CarouselReducer, CarouselState};
use crate::ui::effect::Effect;
use crate::ui::events::{Key, PageEvent};
use crate::ui::faq::{FaqIntent, FaqReducer, FaqState};
use crate::ui::filter::{FilterCategory, FilterIntent, FilterReducer, FilterState};
use crate::ui::form::{FieldId, FormIntent, FormReducer, FormState, NoticeKind};
use crate::ui::lightbox::{Inconsistency, LightboxIntent, LightboxReducer, LightboxState};
use crate::ui::mvi::Reducer;
use crate::ui::nav::{
    MenuIntent, MenuReducer, MenuState, SectionKey, SectionTracker, DEFAULT_SECTIONS,
};
use crate::ui::scroll::smooth::{
    hash_target, scroll_progress, scroll_to_top_visible, section_target,
};
use crate::ui::scroll::{
    ElementId, HeaderPolicy, HeaderState, ObservedKind, RevealAction, RevealObserver,
    ScrollCoalescer, SmoothScroll,
};
use crate::ui::Direction;

/// Run `$intent` through `$reducer` on an optional component slot.
///
/// Evaluates to the state before the dispatch, or `None` when the region is
/// absent and nothing happened.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        match $self.$field.take() {
            Some(before) => {
                $self.$field = Some(<$reducer>::reduce(before.clone(), $intent));
                Some(before)
            }
            None => None,
        }
    };
}

/// Which regions the page has. Decided once, when the page is built.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageLayout {
    /// Number of testimonial slides, when the carousel region exists.
    pub testimonial_slides: Option<usize>,
    /// Number of FAQ questions, when the accordion exists.
    pub faq_items: Option<usize>,
    pub has_portfolio: bool,
    pub has_contact_form: bool,
    pub has_header: bool,
    /// Section ids in document order.
    pub sections: Vec<String>,
}

impl PageLayout {
    /// The full studio home page.
    pub fn studio(catalog: &Catalog, faq_items: usize) -> Self {
        Self {
            testimonial_slides: Some(catalog.reviews().len()),
            faq_items: Some(faq_items),
            has_portfolio: true,
            has_contact_form: true,
            has_header: true,
            sections: DEFAULT_SECTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

pub struct Page {
    config: SiteConfig,
    layout: PageLayout,
    catalog: Option<Arc<Catalog>>,
    carousel: Option<CarouselState>,
    filter: Option<FilterState>,
    /// Created on first open, reused after that.
    lightbox: Option<LightboxState>,
    form: Option<FormState>,
    faq: Option<FaqState>,
    menu: MenuState,
    sections: SectionTracker,
    header_policy: HeaderPolicy,
    header: HeaderState,
    observer: RevealObserver,
    coalescer: ScrollCoalescer,
    viewport: (f64, f64),
    scroll_y: f64,
    scroll_to_top: bool,
    document_height: f64,
    progress: f64,
    errors: ErrorRegistry,
}

impl Page {
    /// Build the page. A catalog that failed to load disables the portfolio
    /// and the lightbox; every other component still starts.
    pub fn new(
        config: SiteConfig,
        layout: PageLayout,
        catalog: Result<Catalog, CatalogError>,
    ) -> Self {
        let mut errors = ErrorRegistry::default();

        let catalog = if layout.has_portfolio {
            match catalog {
                Ok(catalog) => Some(Arc::new(catalog)),
                Err(err) => {
                    errors.record(
                        Component::Portfolio,
                        format!("Portfolio disabled: {}", err),
                    );
                    None
                }
            }
        } else {
            None
        };

        let carousel = layout.testimonial_slides.map(|len| {
            if len == 0 {
                tracing::debug!("Carousel has no slides, disabled");
            }
            CarouselReducer::reduce(CarouselState::default(), CarouselIntent::Load { len })
        });
        let filter = catalog.as_ref().map(|catalog| {
            FilterReducer::reduce(
                FilterState::default(),
                FilterIntent::Load {
                    categories: catalog.categories(),
                },
            )
        });
        let faq = layout
            .faq_items
            .map(|len| FaqReducer::reduce(FaqState::default(), FaqIntent::Load { len }));
        let form = layout.has_contact_form.then(FormState::default);

        Self {
            header_policy: HeaderPolicy::from(&config.scroll),
            observer: RevealObserver::from_config(&config.scroll),
            sections: SectionTracker::new(layout.sections.clone()),
            config,
            layout,
            catalog,
            carousel,
            filter,
            lightbox: None,
            form,
            faq,
            menu: MenuState::default(),
            header: HeaderState::default(),
            coalescer: ScrollCoalescer::new(),
            viewport: (1280.0, 800.0),
            scroll_y: 0.0,
            scroll_to_top: false,
            document_height: 0.0,
            progress: 0.0,
            errors,
        }
    }

    /// Initial effects: first slide, auto-advance, the unfiltered portfolio.
    ///
    /// Safe to call more than once; the timer is only started once.
    pub fn start(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();

        if let Some(carousel) = self.carousel.as_ref().filter(|c| c.is_enabled()) {
            effects.push(Effect::ShowSlide {
                index: carousel.current,
            });
        }
        self.dispatch_carousel(CarouselIntent::StartAutoAdvance, &mut effects);

        if let Some(filter) = &self.filter {
            effects.push(Effect::ShowFilter {
                active: filter.active,
                visible: filter.visible.clone(),
            });
        }

        tracing::debug!(effects = effects.len(), "Page started");
        effects
    }

    /// Handle one event and return what has to happen because of it.
    pub fn handle(&mut self, event: PageEvent) -> Vec<Effect> {
        tracing::trace!(?event, "Page event");
        let mut effects = Vec::new();

        match event {
            PageEvent::Key { key, input_focused } => self.on_key(key, input_focused, &mut effects),
            PageEvent::VisibilityChanged { hidden } => {
                self.dispatch_carousel(CarouselIntent::VisibilityChanged { hidden }, &mut effects)
            }
            PageEvent::Resize { width, height } => {
                self.viewport = (width, height);
            }
            PageEvent::DocumentHeight(height) => {
                self.document_height = height;
            }
            PageEvent::TaskFailed { task, message } => {
                self.errors
                    .record(Component::Runtime, format!("{} failed: {}", task, message));
            }

            PageEvent::CarouselPointer { inside } => {
                let intent = if inside {
                    CarouselIntent::PointerEnter
                } else {
                    CarouselIntent::PointerLeave
                };
                self.dispatch_carousel(intent, &mut effects);
            }
            PageEvent::CarouselFocus { inside } => {
                let intent = if inside {
                    CarouselIntent::FocusIn
                } else {
                    CarouselIntent::FocusOut
                };
                self.dispatch_carousel(intent, &mut effects);
            }
            PageEvent::CarouselIndicator { index } => {
                let len = self.carousel.as_ref().map_or(0, |c| c.len);
                if self.carousel.is_some() && index >= len {
                    tracing::debug!(index, len, "Carousel index out of range, ignored");
                }
                self.dispatch_carousel(CarouselIntent::Select { index }, &mut effects);
            }
            PageEvent::CarouselInViewport { visible } => {
                self.dispatch_carousel(CarouselIntent::ViewportChanged { visible }, &mut effects)
            }
            PageEvent::CarouselTick { generation } => {
                if self.carousel.as_ref().and_then(|c| c.running_generation()) != Some(generation)
                {
                    tracing::trace!(generation, "Stale carousel tick dropped");
                }
                self.dispatch_carousel(CarouselIntent::Tick { generation }, &mut effects);
            }

            PageEvent::FilterSelected(category) => self.apply_filter(category, &mut effects),
            PageEvent::OpenGallery(item) => self.open_gallery(item, &mut effects),
            PageEvent::LightboxClose => {
                self.dispatch_lightbox(LightboxIntent::Close, &mut effects)
            }
            PageEvent::LightboxNavigate(direction) => {
                self.navigate_lightbox(direction, &mut effects)
            }
            PageEvent::ImageResolved {
                generation,
                item,
                outcome,
            } => self.dispatch_lightbox(
                LightboxIntent::ImageResolved {
                    generation,
                    item,
                    outcome,
                },
                &mut effects,
            ),

            PageEvent::FieldInput { field, value } => {
                self.dispatch_form(FormIntent::Edit { field, value }, &mut effects)
            }
            PageEvent::FieldBlur(field) => {
                self.dispatch_form(FormIntent::Blur { field }, &mut effects)
            }
            PageEvent::FormSubmitted => self.submit_form(&mut effects),
            PageEvent::SubmitFinished {
                generation,
                outcome,
            } => {
                if let Err(message) = &outcome {
                    if self.form.as_ref().and_then(|f| f.submitting_generation())
                        == Some(generation)
                    {
                        self.errors.record(
                            Component::ContactForm,
                            format!("Submission failed: {}", message),
                        );
                    }
                }
                self.dispatch_form(
                    FormIntent::SubmitFinished {
                        generation,
                        outcome,
                    },
                    &mut effects,
                );
            }
            PageEvent::NoticeExpired { generation } => {
                self.dispatch_form(FormIntent::DismissNotice { generation }, &mut effects)
            }

            PageEvent::FaqQuestionActivated { index } => {
                match dispatch_mvi!(self, faq, FaqReducer, FaqIntent::Toggle { index }) {
                    Some(before) => {
                        if let Some(after) = &self.faq {
                            if before.open != after.open {
                                effects.push(Effect::FaqExpanded { open: after.open });
                            }
                        }
                    }
                    None => tracing::trace!("No FAQ on this page, event dropped"),
                }
            }

            PageEvent::MenuToggled => self.dispatch_menu(MenuIntent::Toggle, &mut effects),
            PageEvent::NavItemClicked | PageEvent::ClickOutsideMenu => {
                self.dispatch_menu(MenuIntent::Close, &mut effects)
            }
            PageEvent::LinkClicked { href } => match hash_target(&href) {
                Some(section) => {
                    self.dispatch_menu(MenuIntent::Close, &mut effects);
                    effects.push(Effect::ScrollToSection(section.to_string()));
                }
                None => tracing::trace!(%href, "Not an in-page link"),
            },
            PageEvent::ScrollToTopClicked => {
                effects.push(Effect::ScrollTo(SmoothScroll::new(
                    self.scroll_y,
                    0.0,
                    self.config.scroll.top_scroll(),
                )));
            }

            PageEvent::Scroll { y } => {
                if self.coalescer.on_scroll(y) {
                    effects.push(Effect::RequestFrame);
                }
            }
            PageEvent::Frame => self.on_frame(&mut effects),
            PageEvent::ElementIntersected { element, rect } => {
                match self.observer.on_intersection(element, rect, self.viewport.1) {
                    Some(RevealAction::Reveal(element)) => {
                        effects.push(Effect::Revealed(element))
                    }
                    Some(RevealAction::LoadImage { element, source }) => {
                        effects.push(Effect::LoadImage { element, source })
                    }
                    None => {}
                }
            }
            PageEvent::SectionVisible(section) => {
                if self.sections.on_section_visible(&section) {
                    effects.push(Effect::NavHighlight(section));
                }
            }
        }

        effects
    }

    /// Watch an element for its entrance animation or lazy image.
    pub fn observe(&mut self, element: ElementId, kind: ObservedKind) {
        self.observer.observe(element, kind);
    }

    /// Animation from the current offset to a section's top, below the header.
    pub fn section_scroll(&self, section_top: f64) -> SmoothScroll {
        SmoothScroll::new(
            self.scroll_y,
            section_target(section_top, self.config.scroll.header_offset_px),
            self.config.scroll.section_scroll(),
        )
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_deref()
    }

    pub fn carousel(&self) -> Option<&CarouselState> {
        self.carousel.as_ref()
    }

    pub fn filter(&self) -> Option<&FilterState> {
        self.filter.as_ref()
    }

    pub fn lightbox(&self) -> Option<&LightboxState> {
        self.lightbox.as_ref()
    }

    pub fn form(&self) -> Option<&FormState> {
        self.form.as_ref()
    }

    pub fn faq(&self) -> Option<&FaqState> {
        self.faq.as_ref()
    }

    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    pub fn sections(&self) -> &SectionTracker {
        &self.sections
    }

    pub fn header(&self) -> &HeaderState {
        &self.header
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn errors(&self) -> &ErrorRegistry {
        &self.errors
    }

    /// Portfolio items in the current filtered view.
    pub fn visible_items(&self) -> Vec<&GalleryItem> {
        let Some(catalog) = self.catalog.as_deref() else {
            return Vec::new();
        };
        match &self.filter {
            Some(filter) => filter
                .visible
                .iter()
                .filter_map(|&index| catalog.get(index))
                .collect(),
            None => catalog.items().iter().collect(),
        }
    }

    // ========================================================================
    // Keyboard
    // ========================================================================

    fn on_key(&mut self, key: Key, input_focused: bool, effects: &mut Vec<Effect>) {
        let lightbox_open = self.lightbox.as_ref().is_some_and(|l| l.is_open());

        if lightbox_open {
            match key {
                Key::Escape => self.dispatch_lightbox(LightboxIntent::Close, effects),
                Key::ArrowLeft => self.navigate_lightbox(Direction::Previous, effects),
                Key::ArrowRight => self.navigate_lightbox(Direction::Next, effects),
                _ => tracing::trace!(?key, "Key ignored while lightbox is open"),
            }
            return;
        }

        match key {
            Key::Escape => {
                if self.menu.is_open() {
                    self.dispatch_menu(MenuIntent::Close, effects);
                }
            }
            Key::ArrowLeft => {
                self.dispatch_carousel(CarouselIntent::Arrow(Direction::Previous), effects)
            }
            Key::ArrowRight => {
                self.dispatch_carousel(CarouselIntent::Arrow(Direction::Next), effects)
            }
            Key::ArrowDown | Key::PageDown => self.jump_section(SectionKey::Down, input_focused, effects),
            Key::ArrowUp | Key::PageUp => self.jump_section(SectionKey::Up, input_focused, effects),
            Key::Home => self.jump_section(SectionKey::Home, input_focused, effects),
            Key::End => self.jump_section(SectionKey::End, input_focused, effects),
        }
    }

    fn jump_section(&mut self, key: SectionKey, input_focused: bool, effects: &mut Vec<Effect>) {
        if let Some(section) = self.sections.on_key(key, input_focused) {
            effects.push(Effect::ScrollToSection(section.to_string()));
        }
    }

    // ========================================================================
    // Carousel
    // ========================================================================

    fn dispatch_carousel(&mut self, intent: CarouselIntent, effects: &mut Vec<Effect>) {
        let Some(before) = dispatch_mvi!(self, carousel, CarouselReducer, intent) else {
            tracing::trace!("No carousel on this page, event dropped");
            return;
        };
        let Some(after) = &self.carousel else {
            return;
        };

        if before.current != after.current {
            effects.push(Effect::ShowSlide {
                index: after.current,
            });
        }
        if before.is_paused_by_user() != after.is_paused_by_user() {
            effects.push(Effect::CarouselPaused(after.is_paused_by_user()));
        }
        match (before.auto_advance, after.auto_advance) {
            (b, a) if b == a => {}
            (_, AutoAdvance::Running { generation }) => {
                tracing::debug!(generation, "Carousel auto-advance started");
                effects.push(Effect::StartAutoAdvance {
                    generation,
                    interval: self.config.carousel.interval(),
                });
            }
            (AutoAdvance::Running { .. }, AutoAdvance::Stopped) => {
                tracing::debug!("Carousel auto-advance stopped");
                effects.push(Effect::CancelAutoAdvance);
            }
            (AutoAdvance::Stopped, AutoAdvance::Stopped) => {}
        }
    }

    // ========================================================================
    // Portfolio and lightbox
    // ========================================================================

    fn apply_filter(&mut self, category: FilterCategory, effects: &mut Vec<Effect>) {
        let Some(before) = dispatch_mvi!(self, filter, FilterReducer, FilterIntent::Apply { category })
        else {
            tracing::trace!(%category, "No portfolio on this page, filter dropped");
            return;
        };
        let Some(after) = &self.filter else {
            return;
        };

        if before.active != after.active || before.visible != after.visible {
            tracing::debug!(%category, visible = after.visible.len(), "Portfolio filtered");
            effects.push(Effect::ShowFilter {
                active: after.active,
                visible: after.visible.clone(),
            });
        }
        for (index, delay) in after.entrance_schedule(self.config.gallery.stagger_step()) {
            effects.push(Effect::AnimateEntrance { index, delay });
        }
    }

    fn open_gallery(&mut self, item: ItemId, effects: &mut Vec<Effect>) {
        let Some(catalog) = &self.catalog else {
            tracing::trace!(%item, "No portfolio on this page, lightbox not opened");
            return;
        };
        if catalog.find(&item).is_none() {
            self.errors.record(
                Component::Lightbox,
                format!("Unknown portfolio item: {}", item),
            );
            return;
        }
        self.lightbox.get_or_insert_with(LightboxState::default);
        self.dispatch_lightbox(LightboxIntent::Open { item }, effects);
    }

    fn navigate_lightbox(&mut self, direction: Direction, effects: &mut Vec<Effect>) {
        let visible = self
            .visible_items()
            .into_iter()
            .map(|item| item.id.clone())
            .collect();
        self.dispatch_lightbox(LightboxIntent::Navigate { direction, visible }, effects);
    }

    fn dispatch_lightbox(&mut self, intent: LightboxIntent, effects: &mut Vec<Effect>) {
        let stale_resolution = match &intent {
            LightboxIntent::ImageResolved {
                generation, item, ..
            } => Some((*generation, item.clone())),
            _ => None,
        };
        let Some(before) = dispatch_mvi!(self, lightbox, LightboxReducer, intent) else {
            tracing::trace!("Lightbox never opened, event dropped");
            return;
        };
        let Some(after) = self.lightbox.clone() else {
            return;
        };

        if let Some((generation, item)) = stale_resolution {
            if before == after {
                tracing::trace!(generation, %item, "Stale image resolution dropped");
            }
        }

        if after.inconsistency != before.inconsistency {
            match &after.inconsistency {
                Some(Inconsistency::MissingFromView { item }) => self.errors.record(
                    Component::Lightbox,
                    format!(
                        "Item {} is no longer in the filtered view, showing the first visible item",
                        item
                    ),
                ),
                Some(Inconsistency::EmptyView) => self.errors.record(
                    Component::Lightbox,
                    "Filtered view is empty, lightbox closed",
                ),
                None => {}
            }
        }

        if before.is_open() && !after.is_open() {
            effects.push(Effect::LightboxClosed);
            return;
        }
        let Some(current) = after.current().cloned() else {
            return;
        };

        if let Some((generation, item)) = after.pending_resolution() {
            if before.pending_resolution() != Some((generation, item)) {
                effects.push(Effect::LightboxShow {
                    item: item.clone(),
                    loading: true,
                });
                let locator = self
                    .catalog
                    .as_deref()
                    .and_then(|catalog| catalog.find(item))
                    .map(|item| item.image.clone())
                    .unwrap_or_default();
                effects.push(Effect::ResolveImage {
                    generation,
                    item: item.clone(),
                    locator,
                });
            }
        } else if before.is_loading() {
            if let Some(error) = &after.load_error {
                self.errors.record(
                    Component::Lightbox,
                    format!("Image for {} failed to load: {}", current, error),
                );
            }
            effects.push(Effect::LightboxLoaded {
                item: current,
                error: after.load_error.clone(),
            });
        }
    }

    // ========================================================================
    // Contact form
    // ========================================================================

    fn submit_form(&mut self, effects: &mut Vec<Effect>) {
        self.dispatch_form(FormIntent::Submit, effects);
        if let Some(form) = &self.form {
            if let (Some(field), false) = (form.focus, form.is_submitting()) {
                tracing::debug!(field = field.name(), "Form invalid");
                effects.push(Effect::FocusField(field));
            }
        }
    }

    fn dispatch_form(&mut self, intent: FormIntent, effects: &mut Vec<Effect>) {
        let Some(before) = dispatch_mvi!(self, form, FormReducer, intent) else {
            tracing::trace!("No contact form on this page, event dropped");
            return;
        };
        let Some(after) = &self.form else {
            return;
        };

        for field in FieldId::ALL {
            if before.error(field) != after.error(field) {
                effects.push(Effect::FieldError {
                    field,
                    message: after.error(field),
                });
            }
        }
        if before.fields.message != after.fields.message {
            effects.push(Effect::CharCount(after.char_count()));
        }

        if before.is_submitting() != after.is_submitting() {
            effects.push(Effect::SubmitButton {
                busy: after.is_submitting(),
            });
        }
        if let (None, Some(generation)) =
            (before.submitting_generation(), after.submitting_generation())
        {
            tracing::debug!(generation, "Submitting contact form");
            effects.push(Effect::Submit {
                generation,
                fields: after.fields.clone(),
            });
        }

        match (&before.notice, &after.notice) {
            (b, a) if b == a => {}
            (_, Some(notice)) => {
                if notice.kind == NoticeKind::Success {
                    tracing::info!("Contact form sent");
                }
                effects.push(Effect::ShowNotice(notice.clone()));
                effects.push(Effect::DismissNoticeAfter {
                    generation: notice.generation,
                    after: self.config.form.notice_dismiss(),
                });
            }
            (Some(_), None) => effects.push(Effect::HideNotice),
            (None, None) => {}
        }
    }

    // ========================================================================
    // Navigation and scrolling
    // ========================================================================

    fn dispatch_menu(&mut self, intent: MenuIntent, effects: &mut Vec<Effect>) {
        let before = self.menu;
        self.menu = MenuReducer::reduce(before, intent);
        if before != self.menu {
            effects.push(Effect::MenuOpen(self.menu.is_open()));
        }
    }

    fn on_frame(&mut self, effects: &mut Vec<Effect>) {
        let Some(y) = self.coalescer.on_frame() else {
            return;
        };
        self.scroll_y = y;

        if self.layout.has_header
            && self
                .header
                .update(&self.header_policy, y, self.viewport.0)
        {
            effects.push(Effect::Header {
                scrolled: self.header.scrolled,
                hidden: self.header.hidden,
            });
        }

        let visible = scroll_to_top_visible(y, self.config.scroll.scroll_to_top_px);
        if visible != self.scroll_to_top {
            self.scroll_to_top = visible;
            effects.push(Effect::ScrollToTopVisible(visible));
        }

        let progress = scroll_progress(y, self.document_height, self.viewport.1);
        if progress != self.progress {
            self.progress = progress;
            effects.push(Effect::ScrollProgress(progress));
        }
    }
}
