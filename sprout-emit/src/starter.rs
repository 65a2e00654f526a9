//! The bundled React starter: entry point, root component with routes, and
//! two stylesheets. Contents are embedded at compile time and written verbatim.

use crate::file::OutputFile;

/// Base directory used when no other is configured.
pub const DEFAULT_BASE_DIR: &str = "/Applications/XAMPP/xamppfiles/htdocs/Planted/v1";

pub const MAIN_TSX: &str = include_str!("../templates/main.tsx");
pub const APP_TSX: &str = include_str!("../templates/App.tsx");
pub const APP_CSS: &str = include_str!("../templates/App.css");
pub const INDEX_CSS: &str = include_str!("../templates/index.css");

/// Printed after the per-file confirmations.
pub const SUMMARY_LINES: [&str; 2] = [
    "Core React files created successfully!",
    "Now creating component and page files...",
];

/// Starter files in write order.
pub fn starter_files() -> Vec<OutputFile> {
    vec![
        OutputFile::new("src/main.tsx", MAIN_TSX),
        OutputFile::new("src/App.tsx", APP_TSX),
        OutputFile::new("src/App.css", APP_CSS),
        OutputFile::new("src/index.css", INDEX_CSS),
    ]
}
