//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Quill Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[service]
# The QUILL_API_URL environment variable takes precedence over this value.
base_url = "http://127.0.0.1:8000"
# connect_timeout_secs = 10   # 1-120

[session]
# language = "ar"             # ar, en
# copy_indicator_ms = 2000    # 100-60000
# detailed_errors = false

[export]
# Empty means the download directory.
# directory = ""

[logging]
# level = "info"              # trace, debug, info, warn, error
"##
    .to_string()
}
