//! Tests for route definitions
//!
//! Pins the URL of every route and which routes require authentication.

#[cfg(test)]
mod tests {
    use crate::routes::MainRoute;
    use strum::IntoEnumIterator;
    use yew_router::Routable;

    #[test]
    fn test_route_paths() {
        assert_eq!(MainRoute::Landing.to_path(), "/");
        assert_eq!(MainRoute::Login.to_path(), "/login");
        assert_eq!(MainRoute::Register.to_path(), "/register");
        assert_eq!(MainRoute::Dashboard.to_path(), "/dashboard");
        assert_eq!(MainRoute::Scanner.to_path(), "/scanner");
        assert_eq!(MainRoute::Assistant.to_path(), "/ai-assistant");
        assert_eq!(MainRoute::Transactions.to_path(), "/transactions");
        assert_eq!(MainRoute::Settings.to_path(), "/settings");
        assert_eq!(MainRoute::NotFound.to_path(), "/404");
    }

    #[test]
    fn test_protected_route_classification() {
        let protected: Vec<MainRoute> = MainRoute::iter()
            .filter(MainRoute::is_protected)
            .collect();
        assert_eq!(
            protected,
            vec![
                MainRoute::Dashboard,
                MainRoute::Scanner,
                MainRoute::Assistant,
                MainRoute::Transactions,
                MainRoute::Settings,
            ]
        );
        assert!(!MainRoute::Landing.is_protected());
        assert!(!MainRoute::Login.is_protected());
        assert!(!MainRoute::Register.is_protected());
    }

    #[test]
    fn test_recognize_round_trip() {
        for route in MainRoute::iter() {
            assert_eq!(MainRoute::recognize(&route.to_path()), Some(route));
        }
    }
}
