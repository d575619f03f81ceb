//! Screen identifiers and the screen registry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ShellError;

/// The five full-window screens, in declared order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenId {
    Home,
    Inventory,
    SampleManager,
    Orders,
    Settings,
}

impl ScreenId {
    /// Registration order.
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Inventory,
        Self::SampleManager,
        Self::Orders,
        Self::Settings,
    ];

    /// Screen shown after bootstrap.
    pub const INITIAL: Self = Self::Home;

    /// Unique registry name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Inventory => "inventory",
            Self::SampleManager => "sample_manager",
            Self::Orders => "orders",
            Self::Settings => "settings",
        }
    }

    /// Human-readable title for navigation.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Inventory => "Inventory",
            Self::SampleManager => "Sample Manager",
            Self::Orders => "Orders",
            Self::Settings => "Settings",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScreenId {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.name() == s)
            .ok_or_else(|| ShellError::UnknownScreen(s.to_string()))
    }
}

/// One constructed screen per [`ScreenId`], plus the current selection.
///
/// Every identifier always has a screen and exactly one screen is current.
#[derive(Debug)]
pub struct ScreenRegistry<S> {
    home: S,
    inventory: S,
    sample_manager: S,
    orders: S,
    settings: S,
    current: ScreenId,
}

impl<S> ScreenRegistry<S> {
    /// Construct every screen in [`ScreenId::ALL`] order and make
    /// [`ScreenId::INITIAL`] current.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `construct`; later screens are not
    /// built.
    pub fn build<E>(mut construct: impl FnMut(ScreenId) -> Result<S, E>) -> Result<Self, E> {
        let home = construct(ScreenId::Home)?;
        let inventory = construct(ScreenId::Inventory)?;
        let sample_manager = construct(ScreenId::SampleManager)?;
        let orders = construct(ScreenId::Orders)?;
        let settings = construct(ScreenId::Settings)?;

        Ok(Self {
            home,
            inventory,
            sample_manager,
            orders,
            settings,
            current: ScreenId::INITIAL,
        })
    }

    #[must_use]
    pub const fn get(&self, id: ScreenId) -> &S {
        match id {
            ScreenId::Home => &self.home,
            ScreenId::Inventory => &self.inventory,
            ScreenId::SampleManager => &self.sample_manager,
            ScreenId::Orders => &self.orders,
            ScreenId::Settings => &self.settings,
        }
    }

    #[must_use]
    pub const fn current(&self) -> ScreenId {
        self.current
    }

    #[must_use]
    pub const fn current_screen(&self) -> &S {
        self.get(self.current)
    }

    /// Switch screens, returning the previously current one.
    pub const fn set_current(&mut self, id: ScreenId) -> ScreenId {
        let previous = self.current;
        self.current = id;
        previous
    }

    /// Screens in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (ScreenId, &S)> {
        ScreenId::ALL.into_iter().map(move |id| (id, self.get(id)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;
    use std::convert::Infallible;

    use super::*;

    fn registry() -> ScreenRegistry<String> {
        ScreenRegistry::build(|id| Ok::<_, Infallible>(id.title().to_string())).unwrap()
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = ScreenId::ALL.iter().map(|id| id.name()).collect();
        assert_eq!(names.len(), ScreenId::ALL.len());
    }

    #[test]
    fn test_build_constructs_in_declared_order() {
        let mut seen = Vec::new();
        let _ = ScreenRegistry::build(|id| {
            seen.push(id);
            Ok::<_, Infallible>(())
        })
        .unwrap();
        assert_eq!(seen, ScreenId::ALL);
    }

    #[test]
    fn test_home_is_current_after_build() {
        let registry = registry();
        assert_eq!(registry.current(), ScreenId::Home);
        assert_eq!(registry.current_screen(), "Home");
    }

    #[test]
    fn test_set_current_returns_previous() {
        let mut registry = registry();
        let previous = registry.set_current(ScreenId::Orders);
        assert_eq!(previous, ScreenId::Home);
        assert_eq!(registry.current(), ScreenId::Orders);
        assert_eq!(registry.current_screen(), "Orders");
    }

    #[test]
    fn test_build_stops_at_first_error() {
        let mut built = 0;
        let result: Result<ScreenRegistry<()>, &str> = ScreenRegistry::build(|id| {
            if id == ScreenId::SampleManager {
                return Err("broken layout");
            }
            built += 1;
            Ok(())
        });
        assert_eq!(result.unwrap_err(), "broken layout");
        assert_eq!(built, 2);
    }

    #[test]
    fn test_iter_matches_all() {
        let ids: Vec<_> = registry().iter().map(|(id, _)| id).collect();
        assert_eq!(ids, ScreenId::ALL);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "sample_manager".parse::<ScreenId>().unwrap(),
            ScreenId::SampleManager
        );
        assert!(matches!(
            "reports".parse::<ScreenId>(),
            Err(ShellError::UnknownScreen(name)) if name == "reports"
        ));
    }

    #[test]
    fn test_serde_uses_registry_names() {
        assert_eq!(
            serde_json::to_string(&ScreenId::SampleManager).unwrap(),
            "\"sample_manager\""
        );
    }
}
