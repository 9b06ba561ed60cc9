pub(super) fn default_lib_dir() -> String {
    "lib".to_string()
}

pub(super) fn default_catalog() -> String {
    "languages.toml".to_string()
}

pub(super) fn default_language() -> String {
    "english".to_string()
}

pub(super) fn default_log_level() -> String {
    "warn".to_string()
}
