//! UI Components for the AION Labs site.

mod bulletin_carousel;
mod documentation_modal;
mod donation_qr;
mod feature_card;
mod footer;
mod icons;
mod nav_bar;
mod neural_background;
mod research_modal;
mod section;
mod stat_counter;
mod status_modal;
mod terminal_panel;

pub use bulletin_carousel::BulletinCarousel;
pub use documentation_modal::DocumentationModal;
pub use donation_qr::DonationQr;
pub use feature_card::FeatureCard;
pub use footer::Footer;
pub use icons::Icon;
pub use nav_bar::NavBar;
pub use neural_background::NeuralBackground;
pub use research_modal::ResearchModal;
pub use section::Section;
pub use stat_counter::StatCounter;
pub use status_modal::StatusModal;
pub use terminal_panel::TerminalPanel;
