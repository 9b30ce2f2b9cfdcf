use std::collections::VecDeque;

const PROJECT_ROUTE_PREFIX: &str = "/project/";
const HOME_PATH: &str = "/";
const MAX_HISTORY: usize = 50;

/// Route of the project page for `project_id`.
pub(crate) fn build_url_for_project_id(project_id: &str) -> String {
    format!("{PROJECT_ROUTE_PREFIX}{project_id}")
}

/// Project id addressed by `url`, if it is a project route.
pub(crate) fn extract_project_id_from_url(url: &str) -> Option<&str> {
    let rest = url.strip_prefix(PROJECT_ROUTE_PREFIX)?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let id = &rest[..end];

    if id.is_empty() { None } else { Some(id) }
}

/// In-app navigation location with a bounded back-history.
#[derive(Debug, Clone)]
pub(crate) struct Location {
    path: String,
    history: VecDeque<String>,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            path: String::from(HOME_PATH),
            history: VecDeque::new(),
        }
    }
}

impl Location {
    /// Current path.
    pub(crate) fn path(&self) -> &str {
        &self.path
    }

    /// Project id of the current path, if any.
    pub(crate) fn project_id(&self) -> Option<&str> {
        extract_project_id_from_url(&self.path)
    }

    /// Navigate to `url`; returns `false` when already there.
    pub(crate) fn push(&mut self, url: String) -> bool {
        if self.path == url {
            return false;
        }

        let previous = std::mem::replace(&mut self.path, url);
        self.history.push_back(previous);
        if self.history.len() > MAX_HISTORY {
            self.history.pop_front();
        }
        true
    }

    /// Return to the previous path, if there is one.
    pub(crate) fn back(&mut self) -> Option<&str> {
        let previous = self.history.pop_back()?;
        self.path = previous;
        Some(&self.path)
    }

    pub(crate) fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        Location, MAX_HISTORY, build_url_for_project_id,
        extract_project_id_from_url,
    };

    #[test]
    fn given_project_id_when_building_url_then_extraction_returns_same_id() {
        let url = build_url_for_project_id("hello-world");

        assert_eq!(url, "/project/hello-world");
        assert_eq!(extract_project_id_from_url(&url), Some("hello-world"));
    }

    #[test]
    fn given_nested_or_query_urls_when_extracting_then_first_segment_is_used() {
        assert_eq!(
            extract_project_id_from_url("/project/notes/tasks"),
            Some("notes")
        );
        assert_eq!(
            extract_project_id_from_url("/project/notes?tab=deps"),
            Some("notes")
        );
        assert_eq!(
            extract_project_id_from_url("/project/notes#top"),
            Some("notes")
        );
    }

    #[test]
    fn given_non_project_urls_when_extracting_then_none_is_returned() {
        assert_eq!(extract_project_id_from_url("/"), None);
        assert_eq!(extract_project_id_from_url("/project/"), None);
        assert_eq!(extract_project_id_from_url("/settings"), None);
        assert_eq!(extract_project_id_from_url("project/notes"), None);
    }

    #[test]
    fn given_new_url_when_pushed_then_previous_path_goes_to_history() {
        let mut location = Location::default();

        assert!(location.push(build_url_for_project_id("alpha")));
        assert!(location.push(build_url_for_project_id("beta")));

        assert_eq!(location.project_id(), Some("beta"));
        assert_eq!(location.back(), Some("/project/alpha"));
        assert_eq!(location.back(), Some("/"));
        assert!(!location.can_go_back());
        assert_eq!(location.back(), None);
    }

    #[test]
    fn given_current_url_when_pushed_again_then_history_is_untouched() {
        let mut location = Location::default();
        location.push(build_url_for_project_id("alpha"));

        assert!(!location.push(build_url_for_project_id("alpha")));
        assert_eq!(location.back(), Some("/"));
    }

    #[test]
    fn given_many_navigations_when_pushed_then_history_is_bounded() {
        let mut location = Location::default();

        for index in 0..(MAX_HISTORY + 10) {
            location.push(build_url_for_project_id(&format!("p{index}")));
        }

        let mut steps = 0;
        while location.back().is_some() {
            steps += 1;
        }
        assert_eq!(steps, MAX_HISTORY);
    }

    #[test]
    fn given_full_history_when_pushed_then_oldest_entries_are_dropped() {
        let mut location = Location::default();

        for index in 0..(MAX_HISTORY + 1) {
            location.push(build_url_for_project_id(&format!("p{index}")));
        }

        let mut oldest = None;
        while let Some(path) = location.back() {
            oldest = Some(path.to_string());
        }
        assert_eq!(oldest.as_deref(), Some("/project/p0"));
    }
}
