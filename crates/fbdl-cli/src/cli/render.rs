//! Text rendering of the result panel.

use fbdl_core::session::ResultView;

/// Title, thumbnail and the visible quality buttons, one per line.
pub fn render_view(view: &ResultView) -> String {
    let mut buttons = Vec::new();
    if view.show_hd {
        buttons.push("[HD]");
    }
    if view.show_sd {
        buttons.push("[SD]");
    }
    format!(
        "Title:     {}\nThumbnail: {}\nQualities: {}\n",
        view.title,
        view.thumbnail_url,
        buttons.join(" ")
    )
}
