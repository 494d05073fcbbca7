//! Default TOML config template with inline documentation comments.

pub(crate) fn default_config_toml() -> &'static str {
    r##"# winwin configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[split]
# Left window share used until a split has been resized and remembered.
# default_left = 0.4       # 0.1-0.9

[merge]
# Width of the merged window, right-aligned on the primary display.
# target_width = 0.6       # 0.1-1.0

[badge]
# background_color = "#616161"
# refresh_interval_secs = 5  # 1-3600

[logging]
# level = "info"           # trace, debug, info, warn, error
"##
}
