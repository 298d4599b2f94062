//! Class names shared across pages; the rules live in `assets/main.css`.

pub const BTN_PRIMARY: &str = "btn btn-primary";
pub const BTN_GHOST: &str = "btn btn-ghost";

pub const PANEL: &str = "panel";
pub const PANEL_MUTED: &str = "panel panel-muted";

pub const TABLE_CONTAINER: &str = "table-container";
pub const TABLE: &str = "data-table";

pub const TEXT_MUTED: &str = "text-muted";
pub const SECTION_TITLE: &str = "section-title";
