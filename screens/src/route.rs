//! Route table for the item screens.
//!
//! Routes carry ids only, never item snapshots, so the destination screen
//! always starts from a fresh server read.

use std::fmt;

use catalog_core::ItemId;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    ItemsList,
    ItemDetail { id: ItemId },
    Create,
    Edit { id: ItemId },
}

/// Static description of one route: its name and screen title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteSpec {
    pub name: &'static str,
    pub title: &'static str,
    pub takes_id: bool,
}

pub const ROUTES: [RouteSpec; 4] = [
    RouteSpec {
        name: "ItemsList",
        title: "Items",
        takes_id: false,
    },
    RouteSpec {
        name: "ItemDetail",
        title: "Item Details",
        takes_id: true,
    },
    RouteSpec {
        name: "Create",
        title: "New Item",
        takes_id: false,
    },
    RouteSpec {
        name: "Edit",
        title: "Edit Item",
        takes_id: true,
    },
];

impl Route {
    pub fn spec(&self) -> &'static RouteSpec {
        let index = match self {
            Route::ItemsList => 0,
            Route::ItemDetail { .. } => 1,
            Route::Create => 2,
            Route::Edit { .. } => 3,
        };
        &ROUTES[index]
    }

    pub fn name(&self) -> &'static str {
        self.spec().name
    }

    pub fn title(&self) -> &'static str {
        self.spec().title
    }

    pub fn id(&self) -> Option<&ItemId> {
        match self {
            Route::ItemDetail { id } | Route::Edit { id } => Some(id),
            Route::ItemsList | Route::Create => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id() {
            Some(id) => write!(f, "{}({id})", self.name()),
            None => f.write_str(self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_routes_are_marked_in_the_table() {
        for route in [
            Route::ItemsList,
            Route::ItemDetail { id: ItemId::from(1) },
            Route::Create,
            Route::Edit { id: ItemId::from(1) },
        ] {
            assert_eq!(route.spec().takes_id, route.id().is_some(), "{route}");
        }
    }

    #[test]
    fn display_includes_the_id() {
        assert_eq!(Route::ItemDetail { id: ItemId::from(5) }.to_string(), "ItemDetail(5)");
        assert_eq!(Route::Create.to_string(), "Create");
        assert_eq!(Route::Edit { id: ItemId::from(2) }.title(), "Edit Item");
    }
}
