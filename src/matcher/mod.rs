//! Skill Matcher - keyword detection over free-text role descriptions
//!
//! A description is lowercased once, then scanned by five independent rules
//! whose hits accumulate into one set:
//!
//! ```text
//! description ──► lowercase
//!       │
//!       ├── 1. Vocabulary  (word-bounded label)       ──► label
//!       ├── 2. Synonym     (word-bounded alias)       ──► canonical label
//!       ├── 3. Topic       (word-bounded keyword)     ──► every topic skill
//!       ├── 4. Cloud infra (substring "cloud" + infra) ──► AWS, Azure, Google Cloud
//!       └── 5. Role        (substring)                ──► ENGINEER / PM
//! ```
//!
//! Rules 4 and 5 use plain substring containment, so `"pm"` also fires on
//! words such as `"upmarket"`.
//!
//! Patterns are compiled once in [`SkillMatcher::new`]; matching itself is
//! read-only and can run concurrently from any number of requests.

pub mod tables;

use std::collections::BTreeSet;

use regex::Regex;
use serde::Serialize;
use tracing::{debug, info, instrument};

use self::tables::{
    CLOUD_MARKER, CLOUD_PROVIDERS, ENGINEER_MARKER, ENGINEER_SENTINEL, INFRA_MARKERS, PM_MARKERS,
    PM_SENTINEL, SKILL_SYNONYMS, SKILL_VOCABULARY, TOPIC_SKILLS,
};

/// Errors raised while compiling the matcher
#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    #[error("failed to compile pattern for '{term}': {source}")]
    Pattern {
        term: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// Which rule produced a detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    Vocabulary,
    Synonym,
    Topic,
    CloudInfrastructure,
    Role,
}

/// A single rule firing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection {
    /// Skill label or role sentinel added to the result
    pub label: &'static str,
    pub rule: MatchRule,
    /// The vocabulary label, alias, keyword or literal that fired
    pub trigger: &'static str,
}

impl Detection {
    fn new(label: &'static str, rule: MatchRule, trigger: &'static str) -> Self {
        Self {
            label,
            rule,
            trigger,
        }
    }
}

/// Collapse detections into the deduplicated label set
pub fn labels(detections: &[Detection]) -> BTreeSet<&'static str> {
    detections.iter().map(|d| d.label).collect()
}

struct VocabularyEntry {
    label: &'static str,
    pattern: Regex,
}

struct SynonymEntry {
    alias: &'static str,
    canonical: &'static str,
    pattern: Regex,
}

struct TopicEntry {
    keyword: &'static str,
    skills: &'static [&'static str],
    pattern: Regex,
}

/// Compiled keyword matcher over the static skill tables
pub struct SkillMatcher {
    vocabulary: Vec<VocabularyEntry>,
    synonyms: Vec<SynonymEntry>,
    topics: Vec<TopicEntry>,
}

impl SkillMatcher {
    /// Compile a word-bounded pattern for every table entry
    pub fn new() -> Result<Self, MatcherError> {
        let vocabulary = SKILL_VOCABULARY
            .iter()
            .map(|&label| {
                Ok(VocabularyEntry {
                    label,
                    pattern: word_pattern(label)?,
                })
            })
            .collect::<Result<Vec<_>, MatcherError>>()?;

        let synonyms = SKILL_SYNONYMS
            .iter()
            .map(|&(alias, canonical)| {
                Ok(SynonymEntry {
                    alias,
                    canonical,
                    pattern: word_pattern(alias)?,
                })
            })
            .collect::<Result<Vec<_>, MatcherError>>()?;

        let topics = TOPIC_SKILLS
            .iter()
            .map(|&(keyword, skills)| {
                Ok(TopicEntry {
                    keyword,
                    skills,
                    pattern: word_pattern(keyword)?,
                })
            })
            .collect::<Result<Vec<_>, MatcherError>>()?;

        debug!(
            vocabulary = vocabulary.len(),
            synonyms = synonyms.len(),
            topics = topics.len(),
            "Compiled skill patterns"
        );

        Ok(Self {
            vocabulary,
            synonyms,
            topics,
        })
    }

    /// Canonical skill labels in declaration order
    pub fn vocabulary(&self) -> &'static [&'static str] {
        SKILL_VOCABULARY
    }

    /// Detected labels for a description, deduplicated
    #[instrument(skip_all, fields(len = description.len()))]
    pub fn predict(&self, description: &str) -> BTreeSet<&'static str> {
        let skills = labels(&self.detect(description));
        info!(?skills, "Final skills detected");
        skills
    }

    /// Every rule firing for a description, in rule order
    ///
    /// A label can appear more than once when several rules fire for it.
    pub fn detect(&self, description: &str) -> Vec<Detection> {
        let text = description.to_lowercase();
        let mut detections = Vec::new();

        for entry in &self.vocabulary {
            if entry.pattern.is_match(&text) {
                detections.push(Detection::new(
                    entry.label,
                    MatchRule::Vocabulary,
                    entry.label,
                ));
            }
        }

        for entry in &self.synonyms {
            if entry.pattern.is_match(&text) {
                detections.push(Detection::new(
                    entry.canonical,
                    MatchRule::Synonym,
                    entry.alias,
                ));
            }
        }

        for entry in &self.topics {
            if entry.pattern.is_match(&text) {
                detections.extend(
                    entry
                        .skills
                        .iter()
                        .map(|&skill| Detection::new(skill, MatchRule::Topic, entry.keyword)),
                );
            }
        }

        if text.contains(CLOUD_MARKER) {
            if let Some(&marker) = INFRA_MARKERS.iter().find(|m| text.contains(**m)) {
                detections.extend(
                    CLOUD_PROVIDERS
                        .iter()
                        .map(|&p| Detection::new(p, MatchRule::CloudInfrastructure, marker)),
                );
            }
        }

        if text.contains(ENGINEER_MARKER) {
            detections.push(Detection::new(
                ENGINEER_SENTINEL,
                MatchRule::Role,
                ENGINEER_MARKER,
            ));
        }
        if let Some(&marker) = PM_MARKERS.iter().find(|m| text.contains(**m)) {
            detections.push(Detection::new(PM_SENTINEL, MatchRule::Role, marker));
        }

        for d in &detections {
            debug!(label = d.label, rule = ?d.rule, trigger = d.trigger, "Rule fired");
        }

        detections
    }
}

/// `\b<term>\b` over the lowercased term, with regex metacharacters escaped
fn word_pattern(term: &'static str) -> Result<Regex, MatcherError> {
    let pattern = format!(r"\b{}\b", regex::escape(&term.to_lowercase()));
    Regex::new(&pattern).map_err(|source| MatcherError::Pattern { term, source })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> SkillMatcher {
        SkillMatcher::new().expect("static tables compile")
    }

    fn set(items: &[&'static str]) -> BTreeSet<&'static str> {
        items.iter().copied().collect()
    }

    #[test]
    fn test_empty_description() {
        assert!(matcher().predict("").is_empty());
        assert!(matcher().detect("").is_empty());
    }

    #[test]
    fn test_synonyms_resolve_to_canonical() {
        let skills = matcher().predict("I use js and k8s daily");
        assert_eq!(skills, set(&["JavaScript", "Kubernetes"]));
    }

    #[test]
    fn test_topic_expansion() {
        let skills = matcher().predict("looking for a frontend developer");
        assert_eq!(
            skills,
            set(&["React", "JavaScript", "HTML/CSS", "Angular", "Vue.js"])
        );
    }

    #[test]
    fn test_cloud_infrastructure() {
        let m = matcher();
        let detections = m.detect("we need cloud infrastructure support");
        let aws_hits = detections.iter().filter(|d| d.label == "AWS").count();
        assert!(aws_hits > 1, "AWS should fire from several rules");
        assert!(detections
            .iter()
            .any(|d| d.rule == MatchRule::CloudInfrastructure));

        let skills = m.predict("we need cloud infrastructure support");
        assert_eq!(skills, set(&["AWS", "Azure", "Google Cloud"]));
    }

    #[test]
    fn test_cloud_infrastructure_uses_substrings() {
        let m = matcher();
        // "cloudformation" is not a word-bounded "cloud", so only the special case adds Azure
        let detections = m.detect("cloudformation and infrastructure-as-code");
        let azure: Vec<_> = detections.iter().filter(|d| d.label == "Azure").collect();
        assert_eq!(azure.len(), 1);
        assert_eq!(azure[0].rule, MatchRule::CloudInfrastructure);
        assert_eq!(azure[0].trigger, "infra");

        assert_eq!(
            m.predict("cloudformation and infrastructure-as-code"),
            set(&["AWS", "Azure", "Google Cloud"])
        );
    }

    #[test]
    fn test_cloud_without_infra() {
        assert!(matcher().predict("cloudy skies").is_empty());
    }

    #[test]
    fn test_engineer_sentinel() {
        assert_eq!(
            matcher().predict("Senior Software Engineer"),
            set(&["ENGINEER"])
        );
        assert!(matcher().predict("engineering lead").contains("ENGINEER"));
    }

    #[test]
    fn test_project_manager_sentinel() {
        let m = matcher();
        assert_eq!(m.predict("Project Manager needed"), set(&["PM"]));

        let detections = m.detect("Project Manager needed");
        assert_eq!(
            detections,
            vec![Detection::new("PM", MatchRule::Role, "project manager")]
        );
    }

    #[test]
    fn test_pm_substring_overmatches() {
        // Unbounded "pm" fires inside unrelated words
        assert_eq!(matcher().predict("upmarket sales"), set(&["PM"]));
    }

    #[test]
    fn test_case_insensitive() {
        let m = matcher();
        for input in ["JAVASCRIPT", "JavaScript", "javascript"] {
            assert_eq!(m.predict(input), set(&["JavaScript"]), "input: {}", input);
        }
    }

    #[test]
    fn test_word_boundaries() {
        let m = matcher();
        assert!(m.predict("javascripting").is_empty());
        assert!(m.predict("reactive systems").is_empty());
    }

    #[test]
    fn test_special_characters_are_literal() {
        let m = matcher();
        // '.' in "node.js" must not match any character
        assert!(m.predict("nodexjs").is_empty());
        assert!(m.predict("strong html/css skills").contains("HTML/CSS"));
    }

    #[test]
    fn test_multi_word_labels() {
        assert_eq!(
            matcher().predict("build apps with react native"),
            set(&["React Native", "React"])
        );
    }

    #[test]
    fn test_rules_accumulate() {
        let m = matcher();
        let detections = m.detect("UI/UX Design");
        let rules: BTreeSet<_> = detections.iter().map(|d| d.rule as u8).collect();
        assert_eq!(rules.len(), 3, "vocabulary, synonym and topic all fire");
        assert_eq!(m.predict("UI/UX Design"), set(&["UI/UX Design", "HTML/CSS"]));
    }

    #[test]
    fn test_predict_matches_detect() {
        let m = matcher();
        let input = "Backend engineer, node and postgres, some devops";
        assert_eq!(m.predict(input), labels(&m.detect(input)));
    }

    #[test]
    fn test_every_vocabulary_label_matches_itself() {
        let m = matcher();
        for label in m.vocabulary() {
            let text = format!("experience with {} required", label);
            assert!(m.predict(&text).contains(label), "label: {}", label);
        }
    }
}
