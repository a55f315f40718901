use pokehelper_core::Tab;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/items")]
    Items,
    #[at("/breeding")]
    Breeding,
    #[at("/pokedex")]
    Pokedex,
    #[at("/tools")]
    Tools,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn from_tab(tab: Tab) -> Self {
        match tab {
            Tab::Dashboard => Self::Dashboard,
            Tab::Items => Self::Items,
            Tab::Breeding => Self::Breeding,
            Tab::Pokedex => Self::Pokedex,
            Tab::Tools => Self::Tools,
        }
    }

    #[must_use]
    pub const fn to_tab(&self) -> Option<Tab> {
        match self {
            Self::Dashboard => Some(Tab::Dashboard),
            Self::Items => Some(Tab::Items),
            Self::Breeding => Some(Tab::Breeding),
            Self::Pokedex => Some(Tab::Pokedex),
            Self::Tools => Some(Tab::Tools),
            // Keep the current tab on unknown paths.
            Self::NotFound => None,
        }
    }
}

/// Base path the app is served under, from `PUBLIC_URL` at build time.
#[must_use]
pub fn router_base() -> Option<String> {
    normalize_base(option_env!("PUBLIC_URL").unwrap_or_default())
}

fn normalize_base(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() || trimmed == "." {
        return None;
    }
    if trimmed.starts_with('/') {
        Some(trimmed.to_string())
    } else {
        Some(format!("/{trimmed}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tab_round_trips_through_its_route() {
        for tab in Tab::ALL {
            assert_eq!(Route::from_tab(tab).to_tab(), Some(tab));
        }
        assert_eq!(Route::NotFound.to_tab(), None);
    }

    #[test]
    fn routes_render_expected_paths() {
        assert_eq!(Route::Dashboard.to_path(), "/");
        assert_eq!(Route::Pokedex.to_path(), "/pokedex");
        assert_eq!(Route::recognize("/breeding"), Some(Route::Breeding));
        assert_eq!(Route::recognize("/nowhere"), Some(Route::NotFound));
    }

    #[test]
    fn base_paths_are_normalized() {
        assert_eq!(normalize_base(""), None);
        assert_eq!(normalize_base("/"), None);
        assert_eq!(normalize_base("."), None);
        assert_eq!(normalize_base("pokehelper/"), Some("/pokehelper".into()));
        assert_eq!(normalize_base("/pokehelper"), Some("/pokehelper".into()));
    }
}
