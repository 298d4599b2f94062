use std::sync::OnceLock;

use rust_embed::RustEmbed;

/// Embed the `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();

/// Returns the contents of `assets/main.css` as a static string.
pub fn main_css() -> &'static str {
    MAIN_CSS
        .get_or_init(|| {
            let file = EmbeddedAssets::get("main.css")
                .unwrap_or_else(|| panic!("embedded asset main.css missing"));
            String::from_utf8(file.data.into_owned())
                .unwrap_or_else(|_| panic!("embedded asset main.css is not valid UTF-8"))
        })
        .as_str()
}
