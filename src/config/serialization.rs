//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Generate a complete, commented TOML document for this config
    pub fn to_toml(&self) -> String {
        format!(
            r#"# moodscope configuration

# Base URL of the emotion classifier (MOODSCOPE_ENDPOINT overrides)
endpoint = "{endpoint}"

# Prediction route appended to the endpoint
predict_path = "{predict_path}"

# Client-side timeout for classifier calls in seconds (0 = wait forever)
request_timeout_secs = {timeout}

# Theme: neon, plain
theme = "{theme}"

# Presenter behavior
[presenter]
# Character count above which the counter is highlighted
emphasis_threshold = {emphasis}
# Characters of analyzed text echoed above the results
excerpt_len = {excerpt}
# Toast lifetime before it starts fading out
toast_duration_ms = {toast}
# Ignore new submissions while one is in flight
single_flight = {single_flight}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to TUI buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            endpoint = self.endpoint,
            predict_path = self.predict_path,
            timeout = self.request_timeout_secs,
            theme = self.theme,
            emphasis = self.presenter.emphasis_threshold,
            excerpt = self.presenter.excerpt_len,
            toast = self.presenter.toast_duration_ms,
            single_flight = self.presenter.single_flight,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display().to_string().replace('\\', "/"),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
