//! Navigation router for the review screen
//!
//! Turns interactor commands into [`Navigator`] calls. Every command is fire
//! and forget: collaborator failures are logged at debug level and dropped.

use tracing::debug;
use url::Url;

use crate::ports::{AlertKind, Localizer, Navigator};
use crate::review::{NavigationError, ProductId, ProductLinks};

/// Localization key of the generic error alert
pub const GENERIC_ERROR_KEY: &str = "something_wrong_two";

/// Navigation commands issued by the interactor
#[cfg_attr(test, mockall::automock)]
pub trait Router: Send {
    /// Leave the review screen
    fn dismiss(&self);

    /// Open the product card for `id`, titled with `brand_context`
    fn open_product(&self, id: ProductId, brand_context: &str);

    /// Present the video player for `media_url`, then start playback
    fn present_video_overlay(&self, media_url: &str);

    /// Show the generic, non-blocking error alert
    fn show_error_notification(&self);
}

/// [`Router`] backed by a [`Navigator`] and a [`Localizer`]
pub struct ReviewRouter<N, L> {
    navigator: N,
    localizer: L,
    links: ProductLinks,
}

impl<N, L> ReviewRouter<N, L>
where
    N: Navigator,
    L: Localizer,
{
    pub fn new(navigator: N, localizer: L, links: ProductLinks) -> Self {
        Self {
            navigator,
            localizer,
            links,
        }
    }

    fn absorb(command: &'static str, result: Result<(), NavigationError>) {
        if let Err(err) = result {
            debug!(command, error = %err, "Navigation command dropped");
        }
    }
}

impl<N, L> Router for ReviewRouter<N, L>
where
    N: Navigator,
    L: Localizer,
{
    fn dismiss(&self) {
        Self::absorb("dismiss", self.navigator.pop());
    }

    fn open_product(&self, id: ProductId, brand_context: &str) {
        let location = self.links.product_card_url(id);
        debug!(product_id = %id, location = %location, "Opening product card");
        Self::absorb(
            "open_product",
            self.navigator.push_product_card(brand_context, &location),
        );
    }

    fn present_video_overlay(&self, media_url: &str) {
        let url = match Url::parse(media_url) {
            Ok(url) => url,
            Err(err) => {
                debug!(media_url, error = %err, "Ignoring unresolvable video url");
                return;
            }
        };

        // Playback starts only once the player is on screen.
        match self.navigator.present_video_player(&url) {
            Ok(()) => Self::absorb("start_playback", self.navigator.start_playback()),
            Err(err) => Self::absorb("present_video_overlay", Err(err)),
        }
    }

    fn show_error_notification(&self) {
        let text = self.localizer.localized(GENERIC_ERROR_KEY);
        Self::absorb(
            "show_error_notification",
            self.navigator.show_alert(&text, AlertKind::Error),
        );
    }
}
