pub(crate) mod loading;
pub(crate) mod navbar;
pub(crate) mod sidebar;
pub(crate) mod stat_card;

// Re-export components for convenience
pub use loading::Loading;
pub use stat_card::StatCard;
