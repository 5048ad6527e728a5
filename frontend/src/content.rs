//! Static site content. Everything here is compiled into the binary and
//! never mutated; pages only look records up and filter them.

pub mod agency;
pub mod legal;
pub mod posts;
pub mod projects;
pub mod releases;

/// Category filter value that matches every record.
pub const ALL: &str = "All";

/// Number of "more like this" cards shown under a detail page.
pub const RELATED_COUNT: usize = 3;

/// Records whose category equals `selected` exactly; [`ALL`] keeps everything.
pub fn filter_by_category<T>(
    items: &'static [T],
    selected: &str,
    category_of: impl Fn(&T) -> &str,
) -> Vec<&'static T> {
    items
        .iter()
        .filter(|item| selected == ALL || category_of(item) == selected)
        .collect()
}

/// The first `RELATED_COUNT` records other than the one `is_current` picks out.
pub fn related<T>(items: &'static [T], is_current: impl Fn(&T) -> bool) -> Vec<&'static T> {
    items
        .iter()
        .filter(|item| !is_current(item))
        .take(RELATED_COUNT)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::posts::{post_by_id, BLOG_CATEGORIES, POSTS};
    use super::projects::{featured_projects, project_by_id, PROJECTS, WORK_CATEGORIES};
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn lookup_finds_known_ids() {
        assert_eq!(project_by_id("willo").map(|p| p.title), Some("Willo"));
        assert_eq!(post_by_id("seo-king").map(|p| p.read_time), Some("8 min read"));
    }

    #[test]
    fn lookup_misses_unknown_ids() {
        assert!(project_by_id("does-not-exist").is_none());
        assert!(post_by_id("").is_none());
        assert!(project_by_id("Willo").is_none());
    }

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
        let ids: HashSet<_> = POSTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), POSTS.len());
    }

    #[test]
    fn every_record_has_detail_content() {
        assert_eq!(PROJECTS.len(), 9);
        assert_eq!(POSTS.len(), 6);
        assert!(PROJECTS.iter().all(|p| !p.results.is_empty() && !p.gallery.is_empty()));
        assert!(POSTS.iter().all(|p| !p.content.is_empty()));
    }

    #[test]
    fn all_category_keeps_everything() {
        let all = filter_by_category(PROJECTS, ALL, |p| p.category);
        assert_eq!(all.len(), PROJECTS.len());
        let all = filter_by_category(POSTS, ALL, |p| p.tag);
        assert_eq!(all.len(), POSTS.len());
    }

    #[test]
    fn category_filter_is_exact() {
        let design = filter_by_category(POSTS, "Design", |p| p.tag);
        let ids: Vec<_> = design.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["seo-king", "web-design-trends"]);

        assert!(filter_by_category(POSTS, "design", |p| p.tag).is_empty());
        assert!(filter_by_category(PROJECTS, "Unknown", |p| p.category).is_empty());
    }

    #[test]
    fn every_record_belongs_to_a_listed_category() {
        assert!(PROJECTS.iter().all(|p| WORK_CATEGORIES.contains(&p.category)));
        assert!(POSTS.iter().all(|p| BLOG_CATEGORIES.contains(&p.tag)));
        assert_eq!(WORK_CATEGORIES[0], ALL);
        assert_eq!(BLOG_CATEGORIES[0], ALL);
    }

    #[test]
    fn related_skips_current_and_takes_three() {
        let related_posts = related(POSTS, |p| p.id == "brand-identity");
        let ids: Vec<_> = related_posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["seo-king", "ai-creativity", "web-design-trends"]);

        let related_projects = related(PROJECTS, |p| p.id == "illustration-series");
        let ids: Vec<_> = related_projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["keelra", "gen-ai", "willo"]);
    }

    #[test]
    fn featured_projects_lead_the_table() {
        let ids: Vec<_> = featured_projects().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["keelra", "gen-ai", "willo", "justine"]);
    }
}
