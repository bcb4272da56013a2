//! Item detail screen with the confirm-then-delete flow.

use async_trait::async_trait;
use catalog_core::{Item, ItemId};
use tokio::sync::watch;

use crate::alert::Alert;
use crate::format::format_price;
use crate::host::{Screen, ScreenContext};
use crate::route::Route;

pub const DELETE_PROMPT: &str = "Delete this item?";
pub const DELETED_MESSAGE: &str = "The item was deleted.";

/// Props for the confirmation modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmModal {
    pub visible: bool,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    /// Nothing has loaded yet; nothing else is rendered.
    Loading,
    Loaded {
        item: Item,
        price: String,
        confirm: ConfirmModal,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    Edit,
    RequestDelete,
    CancelDelete,
    ConfirmDelete,
}

pub struct DetailScreen {
    ctx: ScreenContext,
    id: ItemId,
    item: Option<Item>,
    confirming_delete: bool,
    views: watch::Sender<DetailView>,
}

impl DetailScreen {
    pub fn new(ctx: ScreenContext, id: ItemId) -> Self {
        let (views, _) = watch::channel(DetailView::Loading);
        Self {
            ctx,
            id,
            item: None,
            confirming_delete: false,
            views,
        }
    }

    pub fn item(&self) -> Option<&Item> {
        self.item.as_ref()
    }

    pub fn is_confirming_delete(&self) -> bool {
        self.confirming_delete
    }

    pub async fn load(&mut self) {
        match self.ctx.repo.get(&self.id).await {
            Ok(item) => {
                self.item = Some(item);
                self.render();
            }
            Err(err) => {
                tracing::debug!(id = %self.id, error = %err, "detail load failed");
                self.ctx.alerts.show(Alert::load_failed(err.to_string()));
            }
        }
    }

    pub fn edit(&self) {
        if self.item.is_some() {
            self.ctx.navigator.navigate(Route::Edit { id: self.id.clone() });
        }
    }

    pub fn request_delete(&mut self) {
        if self.item.is_some() {
            self.confirming_delete = true;
            self.render();
        }
    }

    pub fn cancel_delete(&mut self) {
        self.confirming_delete = false;
        self.render();
    }

    /// Deletes the item and goes back once the user acknowledges. On failure
    /// the modal closes and the item stays on screen.
    pub async fn confirm_delete(&mut self) {
        if !self.confirming_delete {
            return;
        }
        let result = self.ctx.repo.delete(&self.id).await;
        self.confirming_delete = false;
        self.render();

        match result {
            Ok(_) => {
                tracing::debug!(id = %self.id, "item deleted");
                self.ctx.alerts.acknowledge(Alert::done(DELETED_MESSAGE)).await;
                self.ctx.navigator.go_back();
            }
            Err(err) => {
                self.ctx.alerts.show(Alert::action_failed(err.to_string()));
            }
        }
    }

    fn render(&self) {
        self.views.send_replace(self.view());
    }
}

#[async_trait]
impl Screen for DetailScreen {
    type Action = DetailAction;
    type View = DetailView;

    async fn on_focus(&mut self) {
        self.load().await;
    }

    async fn dispatch(&mut self, action: DetailAction) {
        match action {
            DetailAction::Edit => self.edit(),
            DetailAction::RequestDelete => self.request_delete(),
            DetailAction::CancelDelete => self.cancel_delete(),
            DetailAction::ConfirmDelete => self.confirm_delete().await,
        }
    }

    fn view(&self) -> DetailView {
        match &self.item {
            None => DetailView::Loading,
            Some(item) => DetailView::Loaded {
                item: item.clone(),
                price: format_price(item.price),
                confirm: ConfirmModal {
                    visible: self.confirming_delete,
                    message: DELETE_PROMPT,
                },
            },
        }
    }

    fn subscribe(&self) -> watch::Receiver<DetailView> {
        self.views.subscribe()
    }
}
