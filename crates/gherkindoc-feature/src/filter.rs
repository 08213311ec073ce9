//! Tag-based scenario selection.
//!
//! Mirrors marker-expression selection of a test runner: an exclude tag
//! anywhere on the path from feature to examples table removes that element,
//! and an include requirement is satisfied by a tag at any ancestor level.

use std::collections::BTreeSet;

use crate::model::{Examples, Feature, Scenario};

/// Include/exclude tag selection.
///
/// An empty set behaves exactly like no set at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilter {
    include: Option<BTreeSet<String>>,
    exclude: Option<BTreeSet<String>>,
}

impl TagFilter {
    pub fn new<I, E>(include: I, exclude: E) -> Self
    where
        I: IntoIterator<Item = String>,
        E: IntoIterator<Item = String>,
    {
        Self {
            include: non_empty(include),
            exclude: non_empty(exclude),
        }
    }

    /// Whether any include or exclude tag was given.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.include.is_some() || self.exclude.is_some()
    }

    /// Return the scenarios of `feature` that survive the selection.
    ///
    /// Retained scenarios are copies whose `examples` hold only the
    /// surviving tables; the feature itself is left untouched.
    #[must_use]
    pub fn filter_scenarios(&self, feature: &Feature) -> Vec<Scenario> {
        if !self.is_active() {
            return feature.scenarios.clone();
        }
        if self.excluded(&feature.tags) {
            return Vec::new();
        }
        let feature_included = self.included(&feature.tags);
        feature
            .scenarios
            .iter()
            .filter_map(|scenario| self.filter_scenario(scenario, feature_included))
            .collect()
    }

    fn filter_scenario(&self, scenario: &Scenario, feature_included: bool) -> Option<Scenario> {
        if self.excluded(&scenario.tags) {
            return None;
        }
        if !scenario.examples.is_empty()
            && scenario.examples.iter().all(|ex| self.excluded(&ex.tags))
        {
            return None;
        }

        let scenario_included = feature_included || self.included(&scenario.tags);
        let examples: Vec<Examples> = scenario
            .examples
            .iter()
            .filter(|ex| !self.excluded(&ex.tags) && (scenario_included || self.included(&ex.tags)))
            .cloned()
            .collect();
        if !scenario_included && examples.is_empty() {
            return None;
        }

        Some(Scenario {
            examples,
            ..scenario.clone()
        })
    }

    /// True when no include set is given or `tags` hits it.
    fn included(&self, tags: &[String]) -> bool {
        self.include
            .as_ref()
            .is_none_or(|include| tags.iter().any(|tag| include.contains(tag)))
    }

    fn excluded(&self, tags: &[String]) -> bool {
        self.exclude
            .as_ref()
            .is_some_and(|exclude| tags.iter().any(|tag| exclude.contains(tag)))
    }
}

fn non_empty(tags: impl IntoIterator<Item = String>) -> Option<BTreeSet<String>> {
    let set: BTreeSet<String> = tags.into_iter().collect();
    (!set.is_empty()).then_some(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| (*t).to_owned()).collect()
    }

    fn examples(name: &str, tag_list: &[&str]) -> Examples {
        Examples {
            keyword: "Examples".to_owned(),
            name: name.to_owned(),
            tags: tags(tag_list),
            table: None,
        }
    }

    fn scenario(name: &str, tag_list: &[&str], examples: Vec<Examples>) -> Scenario {
        Scenario {
            keyword: "Scenario".to_owned(),
            name: name.to_owned(),
            description: None,
            tags: tags(tag_list),
            steps: Vec::new(),
            examples,
        }
    }

    fn feature(tag_list: &[&str], scenarios: Vec<Scenario>) -> Feature {
        Feature {
            keyword: "Feature".to_owned(),
            name: "Filtering".to_owned(),
            description: None,
            tags: tags(tag_list),
            background: None,
            scenarios,
            examples: Vec::new(),
            filename: PathBuf::from("filtering.feature"),
        }
    }

    fn filter(include: &[&str], exclude: &[&str]) -> TagFilter {
        TagFilter::new(tags(include), tags(exclude))
    }

    fn names(scenarios: &[Scenario]) -> Vec<&str> {
        scenarios.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_inactive_filter_returns_everything() {
        let feature = feature(&["x"], vec![scenario("a", &["y"], Vec::new())]);
        let filter = filter(&[], &[]);
        assert!(!filter.is_active());
        assert_eq!(filter.filter_scenarios(&feature), feature.scenarios);
    }

    #[test]
    fn test_excluded_feature_yields_nothing() {
        let feature = feature(
            &["exclude_me"],
            vec![
                scenario("a", &["keep"], Vec::new()),
                scenario("b", &[], Vec::new()),
            ],
        );
        assert!(filter(&[], &["exclude_me"]).filter_scenarios(&feature).is_empty());
        assert!(
            filter(&["keep"], &["exclude_me"])
                .filter_scenarios(&feature)
                .is_empty()
        );
    }

    #[test]
    fn test_exclude_beats_include_on_scenario() {
        let feature = feature(
            &[],
            vec![
                scenario("both", &["wip", "smoke"], Vec::new()),
                scenario("smoke only", &["smoke"], Vec::new()),
            ],
        );
        let kept = filter(&["smoke"], &["wip"]).filter_scenarios(&feature);
        assert_eq!(names(&kept), ["smoke only"]);
    }

    #[test]
    fn test_feature_include_tag_covers_scenarios() {
        let feature = feature(
            &["smoke"],
            vec![
                scenario("a", &[], Vec::new()),
                scenario("b", &["other"], Vec::new()),
            ],
        );
        let kept = filter(&["smoke"], &[]).filter_scenarios(&feature);
        assert_eq!(names(&kept), ["a", "b"]);
    }

    #[test]
    fn test_include_requires_tag_somewhere() {
        let feature = feature(
            &[],
            vec![
                scenario("tagged", &["smoke"], Vec::new()),
                scenario("untagged", &[], Vec::new()),
            ],
        );
        let kept = filter(&["smoke"], &[]).filter_scenarios(&feature);
        assert_eq!(names(&kept), ["tagged"]);
    }

    #[test]
    fn test_exclude_only_keeps_untagged() {
        let feature = feature(
            &[],
            vec![
                scenario("slow", &["slow"], Vec::new()),
                scenario("plain", &[], Vec::new()),
            ],
        );
        let kept = filter(&[], &["slow"]).filter_scenarios(&feature);
        assert_eq!(names(&kept), ["plain"]);
    }

    #[test]
    fn test_examples_include_tag_rescues_scenario() {
        let feature = feature(
            &[],
            vec![scenario(
                "outline",
                &[],
                vec![examples("included", &["smoke"]), examples("other", &[])],
            )],
        );
        let kept = filter(&["smoke"], &[]).filter_scenarios(&feature);
        assert_eq!(names(&kept), ["outline"]);
        assert_eq!(kept[0].examples, [examples("included", &["smoke"])]);
    }

    #[test]
    fn test_scenario_include_keeps_all_examples() {
        let feature = feature(
            &[],
            vec![scenario(
                "outline",
                &["smoke"],
                vec![examples("one", &[]), examples("two", &["x"])],
            )],
        );
        let kept = filter(&["smoke"], &[]).filter_scenarios(&feature);
        assert_eq!(kept[0].examples.len(), 2);
    }

    #[test]
    fn test_excluded_examples_are_dropped() {
        let feature = feature(
            &[],
            vec![scenario(
                "outline",
                &[],
                vec![examples("bad", &["broken"]), examples("good", &[])],
            )],
        );
        let kept = filter(&[], &["broken"]).filter_scenarios(&feature);
        assert_eq!(kept[0].examples, [examples("good", &[])]);
    }

    #[test]
    fn test_all_examples_excluded_drops_scenario() {
        let feature = feature(
            &["smoke"],
            vec![scenario(
                "outline",
                &["smoke"],
                vec![examples("a", &["broken"]), examples("b", &["broken"])],
            )],
        );
        assert!(
            filter(&["smoke"], &["broken"])
                .filter_scenarios(&feature)
                .is_empty()
        );
    }

    #[test]
    fn test_untagged_examples_without_include_drop_scenario() {
        let feature = feature(
            &[],
            vec![scenario("outline", &[], vec![examples("a", &["other"])])],
        );
        assert!(filter(&["smoke"], &[]).filter_scenarios(&feature).is_empty());
    }

    #[test]
    fn test_filter_leaves_feature_untouched() {
        let feature = feature(
            &[],
            vec![scenario(
                "outline",
                &[],
                vec![examples("bad", &["broken"]), examples("good", &[])],
            )],
        );
        let before = feature.clone();
        let _ = filter(&[], &["broken"]).filter_scenarios(&feature);
        assert_eq!(feature, before);
    }

    #[test]
    fn test_excluded_scenario_never_survives_any_selection() {
        let feature = feature(
            &["smoke"],
            vec![scenario(
                "flaky",
                &["flaky", "smoke"],
                vec![examples("a", &["smoke"])],
            )],
        );
        for include in [&[][..], &["smoke"][..], &["flaky"][..]] {
            assert!(
                filter(include, &["flaky"])
                    .filter_scenarios(&feature)
                    .is_empty()
            );
        }
    }
}
