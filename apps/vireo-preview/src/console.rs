//! Console collaborators: a view and a navigator that report through tracing

use std::sync::Mutex;

use tracing::{info, warn};
use url::Url;
use vireo_domain::{
    ports::{AlertKind, Navigator, ReviewView},
    presenter::{ReviewViewModel, Section},
    review::NavigationError,
    ReviewIntent,
};

/// Rendering surface that logs the latest snapshot on every reload
#[derive(Default)]
pub struct ConsoleView {
    model: Mutex<Option<ReviewViewModel>>,
}

impl ReviewView for ConsoleView {
    fn set_model(&self, model: ReviewViewModel) {
        match self.model.lock() {
            Ok(mut slot) => *slot = Some(model),
            Err(_) => warn!("View model slot poisoned; snapshot dropped"),
        }
    }

    fn reload(&self) {
        let Ok(slot) = self.model.lock() else {
            return;
        };
        let Some(model) = slot.as_ref() else {
            return;
        };

        info!(
            single_product = model.is_single_product_mode,
            inset_bottom = model.content_inset_bottom,
            "Redraw"
        );
        for section in &model.sections {
            match section {
                Section::VideoPreview { media_url, .. } => {
                    info!(media_url = %media_url, "[video]");
                }
                Section::Description {
                    title,
                    info_line,
                    brand_name,
                    ..
                } => {
                    info!(title = %title, brand = %brand_name, info = %info_line, "[description]");
                }
                Section::ProductsCarousel { title, items } => {
                    info!(title = %title, count = items.len(), "[carousel]");
                    for (index, item) in items.iter().enumerate() {
                        info!(
                            index,
                            brand = %item.title,
                            name = %item.subtitle,
                            price = %item.caption,
                            blurred = item.needs_content_blur,
                            "  product"
                        );
                    }
                }
            }
        }
    }
}

/// Navigator that logs transitions instead of performing them
#[derive(Default)]
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn pop(&self) -> Result<(), NavigationError> {
        info!("<- pop review screen");
        Ok(())
    }

    fn push_product_card(&self, title: &str, location: &str) -> Result<(), NavigationError> {
        info!(title, location, "-> push product card");
        Ok(())
    }

    fn present_video_player(&self, url: &Url) -> Result<(), NavigationError> {
        info!(url = %url, "^ present video player");
        Ok(())
    }

    fn start_playback(&self) -> Result<(), NavigationError> {
        info!("> playback started");
        Ok(())
    }

    fn show_alert(&self, text: &str, kind: AlertKind) -> Result<(), NavigationError> {
        info!(text, ?kind, "! alert");
        Ok(())
    }
}

/// Parse a console command into an intent
///
/// Accepted: `back`, `play`, `open <index>`, `activate`.
pub fn parse_intent(line: &str) -> Option<ReviewIntent> {
    let mut words = line.split_whitespace();
    let intent = match words.next()? {
        "back" => ReviewIntent::Back,
        "play" => ReviewIntent::PlayVideo,
        "activate" => ReviewIntent::Activate,
        "open" => ReviewIntent::ProductSelected(words.next()?.parse().ok()?),
        _ => return None,
    };
    Some(intent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_intent() {
        assert_eq!(parse_intent("back"), Some(ReviewIntent::Back));
        assert_eq!(parse_intent(" play "), Some(ReviewIntent::PlayVideo));
        assert_eq!(parse_intent("open 2"), Some(ReviewIntent::ProductSelected(2)));
        assert_eq!(parse_intent("open -1"), Some(ReviewIntent::ProductSelected(-1)));
        assert_eq!(parse_intent("open"), None);
        assert_eq!(parse_intent("jump"), None);
        assert_eq!(parse_intent(""), None);
    }
}
