use std::path::{Path, PathBuf};

/// Expands a leading `~` to the current user's home directory
///
/// Only a bare `~` or a `~/` prefix is expanded; `~user` forms and paths where
/// the home directory is unknown are returned unchanged.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use chat_history_summarizer::expand_tilde;
///
/// let path = Path::new("/var/log/chat.jsonl");
/// assert_eq!(expand_tilde(path), PathBuf::from("/var/log/chat.jsonl"));
/// ```
pub fn expand_tilde(path: &Path) -> PathBuf {
    expand_tilde_internal(path, dirs::home_dir().as_deref())
}

/// Internal helper for tilde expansion with an explicit home (for testing)
pub(crate) fn expand_tilde_internal(path: &Path, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return path.to_path_buf();
    };

    match path.strip_prefix("~") {
        Ok(rest) if rest.as_os_str().is_empty() => home.to_path_buf(),
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}
