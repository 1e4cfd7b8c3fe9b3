//! Async side of the page: timers, image resolution and submission.
//!
//! Every wait is a spawned tokio task that posts a `PageEvent` back on the
//! runtime channel. The page itself stays single-owner and synchronous.

use std::any::Any;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::ui::effect::{Effect, Presenter};
use crate::ui::events::PageEvent;
use crate::ui::form::SubmitSink;
use crate::ui::lightbox::{ImageResolver, ResolveOutcome};
use crate::ui::page::Page;

fn post(events: &UnboundedSender<PageEvent>, event: PageEvent) {
    if events.send(event).is_err() {
        tracing::trace!("Scheduler: event dropped (page runtime gone)");
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    match payload.downcast::<String>() {
        Ok(message) => *message,
        Err(payload) => match payload.downcast::<&'static str>() {
            Ok(message) => message.to_string(),
            Err(_) => "unknown panic".to_string(),
        },
    }
}

/// Carries out scheduled effects.
///
/// Owns at most one auto-advance timer. Starting a new one aborts the old
/// one first, and dropping the scheduler aborts whatever is running.
pub struct Scheduler {
    events: UnboundedSender<PageEvent>,
    auto_advance: Option<JoinHandle<()>>,
    sink: Arc<dyn SubmitSink>,
    resolver: Arc<dyn ImageResolver>,
    frame: Duration,
}

impl Scheduler {
    pub fn new(
        events: UnboundedSender<PageEvent>,
        sink: Arc<dyn SubmitSink>,
        resolver: Arc<dyn ImageResolver>,
        frame: Duration,
    ) -> Self {
        Self {
            events,
            auto_advance: None,
            sink,
            resolver,
            frame,
        }
    }

    /// Returns false when `effect` is not a scheduled one.
    pub fn apply(&mut self, effect: &Effect) -> bool {
        match effect {
            Effect::StartAutoAdvance {
                generation,
                interval,
            } => self.start_auto_advance(*generation, *interval),
            Effect::CancelAutoAdvance => self.cancel_auto_advance(),
            Effect::ResolveImage {
                generation,
                item,
                locator,
            } => {
                let events = self.events.clone();
                let resolver = Arc::clone(&self.resolver);
                let (generation, item, locator) = (*generation, item.clone(), locator.clone());
                let failed = item.clone();
                self.spawn_guarded(
                    "image resolution",
                    async move {
                        let outcome = ResolveOutcome::from_result(resolver.resolve(&locator).await);
                        tracing::debug!(
                            resolver = resolver.name(),
                            generation,
                            %item,
                            ?outcome,
                            "Image resolved"
                        );
                        post(
                            &events,
                            PageEvent::ImageResolved {
                                generation,
                                item,
                                outcome,
                            },
                        );
                    },
                    move |message| PageEvent::ImageResolved {
                        generation,
                        item: failed,
                        outcome: ResolveOutcome::Failed(message),
                    },
                );
            }
            Effect::Submit { generation, fields } => {
                let events = self.events.clone();
                let sink = Arc::clone(&self.sink);
                let (generation, fields) = (*generation, fields.clone());
                self.spawn_guarded(
                    "submission",
                    async move {
                        let outcome = sink.submit(&fields).await.map_err(|err| err.to_string());
                        tracing::debug!(sink = sink.name(), generation, ok = outcome.is_ok(), "Submission finished");
                        post(
                            &events,
                            PageEvent::SubmitFinished {
                                generation,
                                outcome,
                            },
                        );
                    },
                    move |message| PageEvent::SubmitFinished {
                        generation,
                        outcome: Err(message),
                    },
                );
            }
            Effect::DismissNoticeAfter { generation, after } => {
                let events = self.events.clone();
                let (generation, after) = (*generation, *after);
                tokio::spawn(async move {
                    tokio::time::sleep(after).await;
                    post(&events, PageEvent::NoticeExpired { generation });
                });
            }
            Effect::RequestFrame => {
                let events = self.events.clone();
                let frame = self.frame;
                tokio::spawn(async move {
                    tokio::time::sleep(frame).await;
                    post(&events, PageEvent::Frame);
                });
            }
            _ => return false,
        }
        true
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.auto_advance
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Spawn `task` and watch it. A panic never leaves its component waiting:
    /// the watcher reports it, then posts `on_panic` in place of the
    /// completion the task would have sent.
    fn spawn_guarded<F, P>(&self, name: &'static str, task: F, on_panic: P)
    where
        F: Future<Output = ()> + Send + 'static,
        P: FnOnce(String) -> PageEvent + Send + 'static,
    {
        let events = self.events.clone();
        let handle = tokio::spawn(task);
        tokio::spawn(async move {
            match handle.await {
                Ok(()) => {}
                Err(err) if err.is_panic() => {
                    let message = panic_message(err.into_panic());
                    tracing::error!(task = name, "Task panicked: {}", message);
                    post(
                        &events,
                        PageEvent::TaskFailed {
                            task: name,
                            message: message.clone(),
                        },
                    );
                    post(&events, on_panic(format!("{} panicked: {}", name, message)));
                }
                Err(_) => tracing::trace!(task = name, "Task cancelled"),
            }
        });
    }

    fn start_auto_advance(&mut self, generation: u64, interval: Duration) {
        self.cancel_auto_advance();
        let events = self.events.clone();
        self.auto_advance = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if events.send(PageEvent::CarouselTick { generation }).is_err() {
                    break;
                }
            }
        }));
    }

    pub fn cancel_auto_advance(&mut self) {
        if let Some(handle) = self.auto_advance.take() {
            handle.abort();
        }
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.cancel_auto_advance();
    }
}

/// A page, its scheduler and the channel between them.
pub struct PageRuntime {
    page: Page,
    scheduler: Scheduler,
    sender: UnboundedSender<PageEvent>,
    events: UnboundedReceiver<PageEvent>,
}

impl PageRuntime {
    pub fn new(page: Page, sink: Arc<dyn SubmitSink>, resolver: Arc<dyn ImageResolver>) -> Self {
        let (sender, events) = mpsc::unbounded_channel();
        let frame = page.config().scroll.frame();
        Self {
            scheduler: Scheduler::new(sender.clone(), sink, resolver, frame),
            page,
            sender,
            events,
        }
    }

    /// Channel for host events (clicks, keys, scrolls).
    pub fn sender(&self) -> UnboundedSender<PageEvent> {
        self.sender.clone()
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn start(&mut self, presenter: &mut dyn Presenter) {
        let effects = self.page.start();
        self.dispatch(effects, presenter);
    }

    /// Handle one event right away.
    pub fn step(&mut self, event: PageEvent, presenter: &mut dyn Presenter) {
        let effects = self.page.handle(event);
        self.dispatch(effects, presenter);
    }

    pub async fn next_event(&mut self) -> Option<PageEvent> {
        self.events.recv().await
    }

    /// Process events until `shutdown` completes.
    pub async fn run_until<F>(&mut self, presenter: &mut dyn Presenter, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("Page runtime shutting down");
                    break;
                }
                event = self.events.recv() => match event {
                    Some(event) => self.step(event, presenter),
                    None => break,
                },
            }
        }
        self.scheduler.cancel_auto_advance();
    }

    fn dispatch(&mut self, effects: Vec<Effect>, presenter: &mut dyn Presenter) {
        for effect in &effects {
            if !self.scheduler.apply(effect) {
                presenter.present(effect);
            }
        }
    }
}
