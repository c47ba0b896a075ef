use std::collections::HashSet;

use crate::entities::{BuildRecord, Tag};

/// Gallery filters. Empty tag list and empty query mean "show everything";
/// when both are set they must both match (tags OR-ed among themselves, the
/// text query OR-ed across name, description and builder).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GalleryFilter {
    pub selected_tags: Vec<Tag>,
    pub search_query: String,
}

impl GalleryFilter {
    fn matches(&self, build: &BuildRecord) -> bool {
        if !self.selected_tags.is_empty()
            && !build.tags.iter().any(|tag| self.selected_tags.contains(tag))
        {
            return false;
        }

        if !self.search_query.is_empty() {
            let query = self.search_query.to_lowercase();
            let hit = build.project_name.to_lowercase().contains(&query)
                || build.description.to_lowercase().contains(&query)
                || build.builder_name.to_lowercase().contains(&query);
            if !hit {
                return false;
            }
        }

        true
    }
}

/// The gallery view: dynamic records merged with the seed set (dynamic wins
/// on id collision), sorted by submission date descending (stable, so ties
/// keep merge order), then filtered.
pub fn build_gallery_view(
    dynamic: Vec<BuildRecord>,
    seeds: &[BuildRecord],
    filter: &GalleryFilter,
) -> Vec<BuildRecord> {
    let dynamic_ids: HashSet<_> = dynamic.iter().map(|build| build.id).collect();

    let mut merged = dynamic;
    merged.extend(
        seeds
            .iter()
            .filter(|seed| !dynamic_ids.contains(&seed.id))
            .cloned(),
    );

    merged.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
    merged.retain(|build| filter.matches(build));
    merged
}
