//! Create and edit screens, sharing one validation and submission policy.
//!
//! Validation runs before any request; a rejected draft never reaches the
//! repository. A failed write leaves the user's values on the form so the
//! same submission can be retried.

use async_trait::async_trait;
use catalog_core::{Item, ItemId, ItemInput};
use thiserror::Error;
use tokio::sync::watch;

use crate::alert::Alert;
use crate::host::{Screen, ScreenContext};

pub const CREATED_MESSAGE: &str = "The item was created.";
pub const UPDATED_MESSAGE: &str = "The item was updated.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a name.")]
    EmptyName,

    #[error("Price must be a number, got `{0}`.")]
    InvalidPrice(String),

    #[error("Price cannot be negative.")]
    NegativePrice,
}

/// Raw form fields, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub description: String,
    pub price: String,
}

impl From<&Item> for FormValues {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price.to_string(),
        }
    }
}

impl FormValues {
    /// Trims the text fields and coerces the price.
    pub fn validate(&self) -> Result<ItemInput, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(ItemInput {
            name: name.to_string(),
            description: self.description.trim().to_string(),
            price: coerce_price(&self.price)?,
        })
    }
}

/// Blank text is zero; anything else must parse as a finite, non-negative
/// number.
pub fn coerce_price(raw: &str) -> Result<f64, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0.0);
    }
    let price: f64 = raw
        .parse()
        .map_err(|_| ValidationError::InvalidPrice(raw.to_string()))?;
    if !price.is_finite() {
        return Err(ValidationError::InvalidPrice(raw.to_string()));
    }
    if price < 0.0 {
        return Err(ValidationError::NegativePrice);
    }
    Ok(price)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(ItemId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormView {
    /// Edit mode before the item arrives; the form is not rendered.
    Loading,
    Editing {
        title: &'static str,
        initial: FormValues,
        submitting: bool,
    },
}

#[derive(Debug, Clone)]
pub enum FormAction {
    Submit(FormValues),
    Cancel,
}

pub struct FormScreen {
    ctx: ScreenContext,
    mode: FormMode,
    draft: Option<FormValues>,
    submitting: bool,
    views: watch::Sender<FormView>,
}

impl FormScreen {
    pub fn create(ctx: ScreenContext) -> Self {
        Self::new(ctx, FormMode::Create)
    }

    pub fn edit(ctx: ScreenContext, id: ItemId) -> Self {
        Self::new(ctx, FormMode::Edit(id))
    }

    fn new(ctx: ScreenContext, mode: FormMode) -> Self {
        let (views, _) = watch::channel(FormView::Loading);
        Self {
            ctx,
            mode,
            draft: None,
            submitting: false,
            views,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn draft(&self) -> Option<&FormValues> {
        self.draft.as_ref()
    }

    /// Create starts blank. Edit fetches the item and bails out to the
    /// previous screen if that fails.
    pub async fn load(&mut self) {
        match &self.mode {
            FormMode::Create => {
                self.draft = Some(FormValues::default());
            }
            FormMode::Edit(id) => match self.ctx.repo.get(id).await {
                Ok(item) => {
                    self.draft = Some(FormValues::from(&item));
                }
                Err(err) => {
                    tracing::debug!(%id, error = %err, "edit load failed");
                    self.ctx.alerts.show(Alert::load_failed(err.to_string()));
                    self.ctx.navigator.go_back();
                    return;
                }
            },
        }
        self.render();
    }

    pub async fn submit(&mut self, values: FormValues) {
        if self.draft.is_none() {
            return;
        }
        let input = match values.validate() {
            Ok(input) => input,
            Err(err) => {
                self.ctx.alerts.show(Alert::notice(err.to_string()));
                self.draft = Some(values);
                self.render();
                return;
            }
        };

        self.draft = Some(values);
        self.submitting = true;
        self.render();

        let (result, done_message) = match &self.mode {
            FormMode::Create => (self.ctx.repo.create(&input).await, CREATED_MESSAGE),
            FormMode::Edit(id) => (self.ctx.repo.update(id, &input).await, UPDATED_MESSAGE),
        };

        self.submitting = false;
        self.render();

        match result {
            Ok(item) => {
                tracing::debug!(id = %item.id, "item saved");
                self.ctx.alerts.acknowledge(Alert::done(done_message)).await;
                self.ctx.navigator.go_back();
            }
            Err(err) => {
                self.ctx.alerts.show(Alert::action_failed(err.to_string()));
            }
        }
    }

    pub fn cancel(&self) {
        self.ctx.navigator.go_back();
    }

    fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "New Item",
            FormMode::Edit(_) => "Edit Item",
        }
    }

    fn render(&self) {
        self.views.send_replace(self.view());
    }
}

#[async_trait]
impl Screen for FormScreen {
    type Action = FormAction;
    type View = FormView;

    async fn on_mount(&mut self) {
        self.load().await;
    }

    async fn dispatch(&mut self, action: FormAction) {
        match action {
            FormAction::Submit(values) => self.submit(values).await,
            FormAction::Cancel => self.cancel(),
        }
    }

    fn view(&self) -> FormView {
        match &self.draft {
            None => FormView::Loading,
            Some(draft) => FormView::Editing {
                title: self.title(),
                initial: draft.clone(),
                submitting: self.submitting,
            },
        }
    }

    fn subscribe(&self) -> watch::Receiver<FormView> {
        self.views.subscribe()
    }
}
