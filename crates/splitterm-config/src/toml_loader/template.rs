//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# splitterm configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[terminal]
# cols = 80                # 1-1000, used until the first pixel resize
# rows = 24                # 1-1000
# scrollback_lines = 10000 # 0-100000
# cell_width_px = 9.0
# cell_height_px = 17.0
# padding_px = 16.0
# footer_rows = 0          # rows reserved below the grid

[session]
# resize_quiet_ms = 250    # 0-5000
# highlight_prefix = "\u001b[30;43m"
# highlight_suffix = "\u001b[0m"

[shell]
# program = ""             # empty = $SHELL
# args = []
# login_shell = false

[shell.env]
# EDITOR = "nvim"

[state]
# layout_file = "/path/to/layouts.json"

[logging]
# level = "info"           # trace, debug, info, warn, error
"##
    .to_string()
}
