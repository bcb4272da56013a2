//! Screen controllers for the catalog client.
//!
//! # Overview
//! Each screen (list, detail, create, edit) owns its own snapshot of server
//! data and re-fetches it whenever it gains focus. There is no shared store:
//! mutating screens write through the repository and navigate back, and the
//! destination screen reloads on its own focus event.
//!
//! # Design
//! - Controllers are plain structs with async methods; they talk to the
//!   outside world only through `ScreenContext` (repository, navigator,
//!   alerts).
//! - Views are value types published on a `watch` channel. Rendering is the
//!   embedding UI's job.
//! - `host::mount` runs a controller on its own task, serializes its events,
//!   and cancels in-flight work when the screen goes away.

pub mod alert;
pub mod detail;
pub mod form;
pub mod format;
pub mod host;
pub mod list;
pub mod nav;
pub mod route;

#[cfg(test)]
mod testing;

pub use alert::{Alert, AlertKind, Alerts, HeadlessAlerts};
pub use detail::{ConfirmModal, DetailAction, DetailScreen, DetailView};
pub use form::{FormAction, FormMode, FormScreen, FormValues, FormView, ValidationError};
pub use host::{mount, Mounted, Screen, ScreenContext};
pub use list::{ItemCard, ListAction, ListScreen, ListView, LoadPhase};
pub use nav::{FocusCallback, Navigator, StackNavigator, Subscription};
pub use route::Route;
