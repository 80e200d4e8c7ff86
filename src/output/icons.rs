//! File-type symbols shown in icon mode
//!
//! Symbols are chosen by extension only. Directories always get the folder
//! symbol and unknown extensions get the generic file symbol.

use phf::phf_map;

pub const FOLDER_ICON: &str = "📁";
pub const DEFAULT_ICON: &str = "📄";

/// Extension (with leading dot, lowercase) to symbol.
static EXT_ICON_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    ".go" => "🔹",
    ".py" => "🐍",
    ".js" => "📜",
    ".jsx" => "📜",
    ".ts" => "📜",
    ".tsx" => "📜",
    ".html" => "🌐",
    ".htm" => "🌐",
    ".css" => "🎨",
    ".md" => "📝",
    ".json" => "📋",
    ".xml" => "📋",
    ".yml" => "⚙️",
    ".yaml" => "⚙️",
    ".txt" => "📄",
    ".png" => "🖼️",
    ".jpg" => "🖼️",
    ".jpeg" => "🖼️",
    ".gif" => "🖼️",
    ".bmp" => "🖼️",
    ".svg" => "🖼️",
    ".mp3" => "🎵",
    ".wav" => "🎵",
    ".ogg" => "🎵",
    ".mp4" => "🎬",
    ".avi" => "🎬",
    ".mkv" => "🎬",
    ".mov" => "🎬",
    ".pdf" => "📕",
    ".zip" => "📦",
    ".tar" => "📦",
    ".gz" => "📦",
    ".7z" => "📦",
    ".rar" => "📦",
    ".exe" => "⚡",
    ".dll" => "⚡",
    ".sh" => "⚙️",
    ".bash" => "⚙️",
    ".zsh" => "⚙️",
    ".ps1" => "⚙️",
    ".c" => "🔧",
    ".cpp" => "🔧",
    ".h" => "🔧",
    ".hpp" => "🔧",
    ".java" => "☕",
    ".rb" => "💎",
    ".php" => "🐘",
    ".rs" => "🦀",
    ".sql" => "🗄️",
    ".gitignore" => "🔒",
    ".dockerignore" => "🔒",
};

/// Extension of `name`: everything from the last `.` on, or empty.
/// A leading dot counts, so `.gitignore` has extension `.gitignore`.
fn extension(name: &str) -> &str {
    name.rfind('.').map_or("", |idx| &name[idx..])
}

/// Symbol for an entry.
pub fn icon_for(name: &str, is_dir: bool) -> &'static str {
    if is_dir {
        return FOLDER_ICON;
    }

    let ext = extension(name).to_lowercase();
    match EXT_ICON_MAP.get(ext.as_str()) {
        Some(&icon) => icon,
        None => DEFAULT_ICON,
    }
}
