use shared::User;
use yewdux::Store;

/// Render-side mirror of the session store.
///
/// Updated only alongside session store mutations so components
/// re-render on login and logout.
#[derive(Default, Clone, PartialEq, Store)]
pub struct AppState {
    /// False until the one-time storage hydration has run.
    pub ready: bool,
    /// The signed-in account, if any.
    pub user: Option<User>,
}
