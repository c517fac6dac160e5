//! Async driver connecting the controller to a presenter and a router.
//!
//! The driver plays each animation the controller asks for, waits for it to
//! finish and only then feeds the completion back, so state mutations always
//! run as continuations of the animation that precedes them.

use std::collections::VecDeque;

use futures::stream::{self, FusedStream};
use futures::{pin_mut, select, FutureExt, Stream, StreamExt};
use tracing::{debug, warn};

use crate::animation::Animation;
use crate::controller::{Effect, MenuController, MenuEvent, MenuSnapshot};

/// Navigation collaborator
pub trait Router {
    fn navigate_to(&mut self, pathname: &str);
}

/// Records every navigation, in order
impl Router for Vec<String> {
    fn navigate_to(&mut self, pathname: &str) {
        self.push(pathname.to_string());
    }
}

/// Rendering collaborator
#[allow(async_fn_in_trait)]
pub trait Presenter {
    /// Paint the current state
    fn render(&mut self, snapshot: &MenuSnapshot);

    /// Play `animation`, resolving once it has finished
    async fn animate(&mut self, animation: &Animation);
}

/// Owns a [`MenuController`] and runs its effects
pub struct MenuDriver<P, R> {
    controller: MenuController,
    presenter: P,
    router: R,
}

impl<P: Presenter, R: Router> MenuDriver<P, R> {
    pub fn new(controller: MenuController, mut presenter: P, router: R) -> Self {
        presenter.render(&controller.snapshot());
        Self {
            controller,
            presenter,
            router,
        }
    }

    pub fn controller(&self) -> &MenuController {
        &self.controller
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    pub fn into_parts(self) -> (MenuController, P, R) {
        (self.controller, self.presenter, self.router)
    }

    /// Handle one event and everything it sets in motion.
    ///
    /// Resolves once the controller has settled. Rejected input is logged and
    /// otherwise ignored.
    pub async fn dispatch(&mut self, event: MenuEvent) {
        let Some(effects) = Self::accept(&mut self.controller, event) else {
            return;
        };
        self.presenter.render(&self.controller.snapshot());
        self.settle(effects, &mut stream::empty()).await;
    }

    /// Process `events` until the stream ends and the last transition settles.
    ///
    /// The stream keeps being polled while an animation plays, so events that
    /// arrive mid-transition reach the controller's queue (and its repeat
    /// filter) instead of waiting in the channel.
    pub async fn run<S>(&mut self, events: S)
    where
        S: Stream<Item = MenuEvent> + Unpin,
    {
        let mut events = events.fuse();
        while let Some(event) = events.next().await {
            let Some(effects) = Self::accept(&mut self.controller, event) else {
                continue;
            };
            self.presenter.render(&self.controller.snapshot());
            self.settle(effects, &mut events).await;
        }
    }

    fn accept(controller: &mut MenuController, event: MenuEvent) -> Option<VecDeque<Effect>> {
        match controller.update(event) {
            Ok(effects) => Some(effects.into()),
            Err(err) => {
                warn!(%err, "menu event rejected");
                None
            }
        }
    }

    /// Run `effects` to completion, feeding events from `events` to the
    /// controller while each animation plays
    async fn settle<S>(&mut self, mut effects: VecDeque<Effect>, events: &mut S)
    where
        S: FusedStream<Item = MenuEvent> + Unpin,
    {
        while let Some(effect) = effects.pop_front() {
            match effect {
                Effect::Navigate(pathname) => {
                    debug!(%pathname, "navigating");
                    self.router.navigate_to(&pathname);
                }
                Effect::Animate(animation) => {
                    {
                        let playing = self.presenter.animate(&animation).fuse();
                        pin_mut!(playing);
                        let finished = loop {
                            select! {
                                () = playing => break true,
                                event = events.next() => match event {
                                    Some(event) => {
                                        if let Some(next) = Self::accept(&mut self.controller, event) {
                                            effects.extend(next);
                                        }
                                    }
                                    None => break false,
                                },
                            }
                        };
                        if !finished {
                            playing.await;
                        }
                    }
                    let done = MenuEvent::AnimationFinished(animation.id);
                    if let Some(next) = Self::accept(&mut self.controller, done) {
                        effects.extend(next);
                    }
                    self.presenter.render(&self.controller.snapshot());
                }
            }
        }
    }
}

#[cfg(feature = "native")]
pub use timed::TimedPresenter;

#[cfg(feature = "native")]
mod timed {
    use std::time::Duration;

    use tracing::{debug, info};

    use super::Presenter;
    use crate::animation::Animation;
    use crate::controller::MenuSnapshot;

    /// Presenter that lets wall-clock time pass for each animation and logs
    /// what a real view would paint.
    #[derive(Debug, Default)]
    pub struct TimedPresenter {
        renders: usize,
        last: Option<MenuSnapshot>,
    }

    impl TimedPresenter {
        pub fn new() -> Self {
            Self::default()
        }

        /// How many snapshots have been rendered
        pub fn renders(&self) -> usize {
            self.renders
        }

        pub fn last_snapshot(&self) -> Option<&MenuSnapshot> {
            self.last.as_ref()
        }
    }

    impl Presenter for TimedPresenter {
        fn render(&mut self, snapshot: &MenuSnapshot) {
            self.renders += 1;
            debug!(
                phase = ?snapshot.phase,
                open = snapshot.is_menu_open,
                expanded = ?snapshot.expanded,
                visible = snapshot.visible_items.len(),
                "render"
            );
            self.last = Some(snapshot.clone());
        }

        async fn animate(&mut self, animation: &Animation) {
            let Some(plan) = animation.stagger_plan() else {
                info!(direction = ?animation.slide_direction(), ms = animation.total_duration().as_millis() as u64, "panel slide");
                tokio::time::sleep(animation.total_duration()).await;
                return;
            };

            let mut elapsed = Duration::ZERO;
            for item in &plan.items {
                tokio::time::sleep(item.delay.saturating_sub(elapsed)).await;
                elapsed = item.delay;
                info!(
                    item = %item.name,
                    offset_ms = item.delay.as_millis() as u64,
                    reveal = animation.is_reveal(),
                    "sub-item animation started"
                );
            }
            tokio::time::sleep(plan.total_duration().saturating_sub(elapsed)).await;
        }
    }
}
