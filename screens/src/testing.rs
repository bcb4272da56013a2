//! Test harness wiring controllers to a scripted transport.

use std::sync::Arc;

use catalog_core::testing::ScriptedTransport;
use catalog_core::{ApiClient, ItemRepository};

use crate::alert::HeadlessAlerts;
use crate::host::ScreenContext;
use crate::nav::StackNavigator;
use crate::route::Route;

/// Scripted transport, in-memory navigator, and recorded alerts.
pub(crate) struct Harness {
    pub transport: Arc<ScriptedTransport>,
    pub navigator: StackNavigator,
    pub alerts: Arc<HeadlessAlerts>,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            transport: ScriptedTransport::new(),
            navigator: StackNavigator::new(Route::ItemsList),
            alerts: Arc::new(HeadlessAlerts::new()),
        }
    }

    pub fn ctx(&self) -> ScreenContext {
        let api = ApiClient::new("http://test", self.transport.clone());
        ScreenContext {
            repo: ItemRepository::new(api),
            navigator: Arc::new(self.navigator.clone()),
            alerts: self.alerts.clone(),
        }
    }
}
