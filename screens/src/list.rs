//! Items list screen: fetched collection, search query, pull-to-refresh.
//!
//! Reloads on every focus event. A failed reload alerts and keeps whatever
//! was on screen before. Search filters the in-memory collection only.

use async_trait::async_trait;
use catalog_core::{Item, ItemId};
use tokio::sync::watch;

use crate::alert::Alert;
use crate::format::format_price;
use crate::host::{Screen, ScreenContext};
use crate::route::Route;

pub const EMPTY_MESSAGE: &str = "No items registered.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// One row of the list, as handed to the item card.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemCard {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub price: String,
}

impl From<&Item> for ItemCard {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            description: item.description.clone(),
            price: format_price(item.price),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    pub phase: LoadPhase,
    pub query: String,
    pub refreshing: bool,
    pub cards: Vec<ItemCard>,
    pub empty_message: Option<&'static str>,
}

#[derive(Debug, Clone)]
pub enum ListAction {
    SetQuery(String),
    Refresh,
    Select(ItemId),
    Add,
}

/// Case-insensitive substring match against `name` and `description`.
pub fn matches_query(item: &Item, query: &str) -> bool {
    let haystack = format!("{} {}", item.name, item.description).to_lowercase();
    haystack.contains(&query.to_lowercase())
}

pub struct ListScreen {
    ctx: ScreenContext,
    items: Vec<Item>,
    query: String,
    phase: LoadPhase,
    refreshing: bool,
    views: watch::Sender<ListView>,
}

impl ListScreen {
    pub fn new(ctx: ScreenContext) -> Self {
        let (views, _) = watch::channel(ListView {
            phase: LoadPhase::Idle,
            query: String::new(),
            refreshing: false,
            cards: Vec::new(),
            empty_message: None,
        });
        Self {
            ctx,
            items: Vec::new(),
            query: String::new(),
            phase: LoadPhase::Idle,
            refreshing: false,
            views,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Items matching the current query, in server order.
    pub fn visible_items(&self) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| matches_query(item, &self.query))
            .collect()
    }

    pub async fn reload(&mut self) {
        self.phase = LoadPhase::Loading;
        self.render();

        match self.ctx.repo.list().await {
            Ok(items) => {
                tracing::debug!(count = items.len(), "items loaded");
                self.items = items;
                self.phase = LoadPhase::Loaded;
            }
            Err(err) => {
                self.phase = LoadPhase::Failed;
                self.ctx.alerts.show(Alert::load_failed(err.to_string()));
            }
        }
        self.render();
    }

    pub async fn refresh(&mut self) {
        self.refreshing = true;
        self.render();
        self.reload().await;
        self.refreshing = false;
        self.render();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.render();
    }

    pub fn select(&self, id: ItemId) {
        self.ctx.navigator.navigate(Route::ItemDetail { id });
    }

    pub fn add(&self) {
        self.ctx.navigator.navigate(Route::Create);
    }

    fn render(&self) {
        self.views.send_replace(self.view());
    }
}

#[async_trait]
impl Screen for ListScreen {
    type Action = ListAction;
    type View = ListView;

    async fn on_focus(&mut self) {
        self.reload().await;
    }

    async fn dispatch(&mut self, action: ListAction) {
        match action {
            ListAction::SetQuery(query) => self.set_query(query),
            ListAction::Refresh => self.refresh().await,
            ListAction::Select(id) => self.select(id),
            ListAction::Add => self.add(),
        }
    }

    fn view(&self) -> ListView {
        let cards: Vec<ItemCard> = self.visible_items().into_iter().map(ItemCard::from).collect();
        ListView {
            phase: self.phase,
            query: self.query.clone(),
            refreshing: self.refreshing,
            empty_message: (self.phase == LoadPhase::Loaded && cards.is_empty())
                .then_some(EMPTY_MESSAGE),
            cards,
        }
    }

    fn subscribe(&self) -> watch::Receiver<ListView> {
        self.views.subscribe()
    }
}
