//! Runs a mounted screen: one task per screen, one event at a time.
//!
//! # Design
//! `mount` spawns a task that owns the controller. Focus events (from the
//! navigator) and user actions (from the view) are queued on one channel
//! and handled strictly in order, so a controller never has two requests
//! in flight. Views are published by the controller on a `watch` channel.
//!
//! The task races every handler against the screen's lifetime token. When
//! the handle is dropped or unmounted the token is cancelled, the in-flight
//! handler future is dropped (taking the HTTP request with it), and nothing
//! is applied to a screen nobody is looking at anymore.

use std::sync::Arc;

use async_trait::async_trait;
use catalog_core::ItemRepository;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::alert::Alerts;
use crate::nav::{Navigator, Subscription};
use crate::route::Route;

/// Collaborators every controller needs. Cheap to clone.
#[derive(Clone)]
pub struct ScreenContext {
    pub repo: ItemRepository,
    pub navigator: Arc<dyn Navigator>,
    pub alerts: Arc<dyn Alerts>,
}

#[async_trait]
pub trait Screen: Send + 'static {
    type Action: Send + 'static;
    type View: Clone + Send + Sync + 'static;

    /// Runs once, before any focus event is handled.
    async fn on_mount(&mut self) {}

    async fn on_focus(&mut self) {}

    async fn dispatch(&mut self, action: Self::Action);

    fn view(&self) -> Self::View;

    fn subscribe(&self) -> watch::Receiver<Self::View>;
}

enum Event<A> {
    Focus,
    Action(A),
}

/// Handle to a running screen. Dropping it unmounts the screen.
pub struct Mounted<S: Screen> {
    route: Route,
    events: mpsc::UnboundedSender<Event<S::Action>>,
    views: watch::Receiver<S::View>,
    lifetime: CancellationToken,
    focus: Option<Subscription>,
    task: Option<JoinHandle<()>>,
}

/// Mounts `screen` for `route`. Mount before navigating to the route so the
/// first focus event is not missed.
pub fn mount<S: Screen>(mut screen: S, route: Route, navigator: &dyn Navigator) -> Mounted<S> {
    let views = screen.subscribe();
    let (events, mut rx) = mpsc::unbounded_channel::<Event<S::Action>>();
    let lifetime = CancellationToken::new();

    let focus_tx = events.clone();
    let focus = navigator.add_focus_listener(
        route.clone(),
        Box::new(move || {
            if focus_tx.send(Event::Focus).is_err() {
                tracing::trace!("focus for a finished screen ignored");
            }
        }),
    );

    let token = lifetime.clone();
    let name = route.to_string();
    let task = tokio::spawn(async move {
        tokio::select! {
            biased;
            () = token.cancelled() => return,
            () = screen.on_mount() => {}
        }

        loop {
            let event = tokio::select! {
                biased;
                () = token.cancelled() => break,
                event = rx.recv() => match event {
                    Some(event) => event,
                    None => break,
                },
            };

            let target = &mut screen;
            let work = async move {
                match event {
                    Event::Focus => target.on_focus().await,
                    Event::Action(action) => target.dispatch(action).await,
                }
            };

            tokio::select! {
                biased;
                () = token.cancelled() => break,
                () = work => {}
            }
        }
        tracing::debug!(route = %name, "screen task finished");
    });

    Mounted {
        route,
        events,
        views,
        lifetime,
        focus: Some(focus),
        task: Some(task),
    }
}

impl<S: Screen> Mounted<S> {
    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn dispatch(&self, action: S::Action) {
        if self.events.send(Event::Action(action)).is_err() {
            tracing::trace!(route = %self.route, "action for a finished screen ignored");
        }
    }

    /// Queues a focus event directly, bypassing the navigator.
    pub fn focus(&self) {
        if self.events.send(Event::Focus).is_err() {
            tracing::trace!(route = %self.route, "focus for a finished screen ignored");
        }
    }

    pub fn view(&self) -> S::View {
        self.views.borrow().clone()
    }

    pub fn views(&self) -> watch::Receiver<S::View> {
        self.views.clone()
    }

    /// Waits until the published view satisfies `predicate`. Returns `None`
    /// if the screen finished first.
    pub async fn wait_for(&self, predicate: impl FnMut(&S::View) -> bool) -> Option<S::View> {
        let mut views = self.views.clone();
        let view = views.wait_for(predicate).await.ok()?;
        Some((*view).clone())
    }

    pub fn is_mounted(&self) -> bool {
        !self.lifetime.is_cancelled()
    }

    /// Cancels any in-flight work and waits for the screen task to finish.
    pub async fn unmount(mut self) {
        self.teardown();
        if let Some(task) = self.task.take() {
            if let Err(err) = task.await {
                tracing::warn!(route = %self.route, error = %err, "screen task panicked");
            }
        }
    }

    fn teardown(&mut self) {
        self.lifetime.cancel();
        if let Some(focus) = self.focus.take() {
            focus.unsubscribe();
        }
    }
}

impl<S: Screen> Drop for Mounted<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}
