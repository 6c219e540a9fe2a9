use std::path::Path;

use anyhow::{Context, Result};

use super::CONFIG_FILE;

/// Hand-crafted config template with commented-out keys, written by
/// `pixcmp init` so users can see the available knobs.
const CONFIG_TEMPLATE: &str = r#"# ─────────────────────────────────────────────────────────
# Comparison — all fields optional.
# ─────────────────────────────────────────────────────────
[compare]
# threshold = 100.0                 # min similarity % to pass (100 = identical)
# strategy = "pixel"                # "pixel" | "channel-sum" (legacy, weaker)

# ─────────────────────────────────────────────────────────
# Report — all fields optional.
# ─────────────────────────────────────────────────────────
[report]
# format = "text"                   # "text" | "json"
"#;

pub fn config_file_exists() -> bool {
    Path::new(CONFIG_FILE).exists()
}

pub fn write_template(dir: &Path) -> Result<()> {
    let path = dir.join(CONFIG_FILE);
    std::fs::write(&path, CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
