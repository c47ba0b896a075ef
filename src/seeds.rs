use std::path::Path;

use anyhow::Context;

use crate::adapters::BuildsDocument;
use crate::entities::BuildRecord;

/// Loads the static seed set bundled with the deployment. The file carries
/// the same `{"builds": [...]}` document shape as the flat-file store. Read
/// once at startup; a broken seed file aborts instead of serving half a
/// gallery.
pub fn load(path: &Path) -> anyhow::Result<Vec<BuildRecord>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read seed set {}", path.display()))?;
    let document: BuildsDocument =
        serde_json::from_str(&raw).with_context(|| format!("parse seed set {}", path.display()))?;
    Ok(document.builds)
}
