mod cases_carousel;
mod content;
mod dashboard;
mod feature_cards;
mod hero;
mod network_demo;

pub use cases_carousel::CasesCarousel;
pub use dashboard::DashboardSection;
pub use feature_cards::FeatureCardsSection;
pub use hero::HeroSection;
pub use network_demo::NetworkDemoSection;
