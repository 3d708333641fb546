//! Upload filename rules
//!
//! Pure functions only; writing to disk lives in [`crate::uploads`].

use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

/// Image extensions accepted for item uploads (compared lowercase)
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Route prefix uploaded files are served under
pub const UPLOADS_ROUTE: &str = "/uploads";

/// Anything outside this set is dropped from stored filenames
static UNSAFE_CHARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_.-]").expect("invalid filename regex"));

/// Names that refer to devices on Windows regardless of extension
const WINDOWS_DEVICE_NAMES: [&str; 22] = [
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Whether `filename` has an allowed image extension.
///
/// The extension is whatever follows the last `.`, compared
/// case-insensitively.
///
/// # Example
/// ```
/// use papan_server::models::upload::is_allowed;
///
/// assert!(is_allowed("a.PNG"));
/// assert!(is_allowed("a.b.jpg"));
/// assert!(!is_allowed("a.gif"));
/// assert!(!is_allowed("noext"));
/// ```
pub fn is_allowed(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| {
            let ext = ext.to_ascii_lowercase();
            ALLOWED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Reduce a client-supplied filename to something safe to store.
///
/// Non-ASCII characters are dropped, path separators split the name into
/// words joined by `_`, remaining characters outside `[A-Za-z0-9_.-]` are
/// removed and leading/trailing `.`/`_` are stripped. The result may be
/// empty.
///
/// There is no Unicode decomposition step: accented letters are removed
/// rather than folded to their base letter, so `café.png` becomes
/// `caf.png`, not `cafe.png`. Stored names differ from a folding
/// sanitizer's only in those dropped letters.
pub fn secure_filename(filename: &str) -> String {
    let ascii: String = filename
        .chars()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = ascii.split_whitespace().collect::<Vec<_>>().join("_");
    let cleaned = UNSAFE_CHARS_RE.replace_all(&joined, "");
    let stripped = cleaned.trim_matches(|c: char| c == '.' || c == '_');

    let stem = stripped.split('.').next().unwrap_or_default();
    if !stem.is_empty() && WINDOWS_DEVICE_NAMES.contains(&stem.to_ascii_uppercase().as_str()) {
        return format!("_{}", stripped);
    }

    stripped.to_owned()
}

/// Storage key for an upload on `board_id`.
///
/// A random segment keeps two uploads with the same sanitized name from
/// overwriting each other.
pub fn stored_name(board_id: i64, sanitized: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}-{}", board_id, &suffix[..12], sanitized)
}

/// URL under which a stored upload is served.
pub fn upload_url(stored: &str) -> String {
    format!("{}/{}", UPLOADS_ROUTE, stored)
}
