use std::cmp::{min, Reverse};

use crate::types::JobListing;

const BASE_SCORE: i32 = 3;
const MAX_SCORE: i32 = 5;

// The penalty set is picked by a single equality check on "python". Other
// primary skills intentionally get the default set, matching the original
// heuristic.
const PYTHON_COMPETITORS: [&str; 2] = ["java", "c#"];
const DEFAULT_COMPETITORS: [&str; 3] = ["python", "c++", "javascript"];

/// Filters and scores listings against the candidate's skills.
///
/// The first whitespace token of `query`, lowercased, is the primary skill:
/// listings whose title + summary never mention it are dropped outright.
/// Survivors start at 3, gain a point per matched skill, lose a point per
/// competing technology mentioned, and are clamped to 5. Scores of zero or
/// below are dropped. The result is sorted best first; ties keep fetch order.
pub fn rank(listings: Vec<JobListing>, skills: &[String], query: &str) -> Vec<JobListing> {
    let primary_skill = query
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_lowercase();
    let competing: &[&str] = if primary_skill == "python" {
        &PYTHON_COMPETITORS
    } else {
        &DEFAULT_COMPETITORS
    };

    let mut ranked = Vec::with_capacity(listings.len());
    for mut listing in listings {
        let haystack = format!("{} {}", listing.title, listing.summary).to_lowercase();
        if !haystack.contains(&primary_skill) {
            continue;
        }
        let matched = skills
            .iter()
            .filter(|skill| haystack.contains(skill.to_lowercase().as_str()))
            .count() as i32;
        let penalized = competing
            .iter()
            .copied()
            .filter(|tech| haystack.contains(tech))
            .count() as i32;
        let score = BASE_SCORE + matched - penalized;
        if score > 0 {
            listing.match_score = Some(min(score, MAX_SCORE) as u8);
            ranked.push(listing);
        }
    }
    // sort_by_key is stable, ties keep fetch order
    ranked.sort_by_key(|listing| Reverse(listing.match_score));
    ranked
}

#[cfg(test)]
mod test {
    use super::*;

    fn listing(title: &str, summary: &str) -> JobListing {
        JobListing::new(
            title.to_owned(),
            "Acme".to_owned(),
            summary.to_owned(),
            "https://www.linkedin.com/jobs/view/1234567".to_owned(),
        )
    }

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_base_score_plus_matched_skill() {
        let listings = vec![listing("Java Developer at Acme", "Location: Remote")];
        let ranked = rank(listings, &skills(&["Java", "SQL"]), "Java Developer");
        assert_eq!(ranked.len(), 1);
        // 3 base + 1 for java, SQL not in the text
        assert_eq!(ranked[0].match_score, Some(4));
    }

    #[test]
    fn test_missing_primary_skill_is_a_hard_filter() {
        // Plenty of skill overlap, but no mention of the primary skill.
        let listings = vec![listing("Backend Engineer", "Location: Remote, SQL, Docker")];
        let ranked = rank(listings, &skills(&["SQL", "Docker"]), "Java Developer");
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_python_primary_uses_java_penalty_set() {
        let listings = vec![listing("Python Engineer (Java migration)", "Location: Remote")];
        let ranked = rank(listings, &[], "Python Engineer");
        assert_eq!(ranked.len(), 1);
        // 3 base - 1 for the java mention
        assert_eq!(ranked[0].match_score, Some(2));
    }

    #[test]
    fn test_default_penalty_set_for_non_python_primary() {
        let listings = vec![listing("Java Developer, some Python", "Location: Remote")];
        let ranked = rank(listings, &[], "Java Developer");
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].match_score, Some(2));
    }

    #[test]
    fn test_score_is_clamped_to_five() {
        let listings = vec![listing(
            "Java Developer",
            "Location: Remote. Java, SQL, Spring, Maven, Kafka",
        )];
        let ranked = rank(
            listings,
            &skills(&["Java", "SQL", "Spring", "Maven", "Kafka"]),
            "Java Developer",
        );
        assert_eq!(ranked[0].match_score, Some(5));
    }

    #[test]
    fn test_zero_score_is_dropped() {
        // go primary gets the default penalty set: 3 - 3 = 0
        let listings = vec![listing(
            "Go Developer",
            "Location: Remote. Python, C++, JavaScript welcome",
        )];
        let ranked = rank(listings, &[], "Go Developer");
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let listings = vec![
            listing("Java Developer A", "Location: Remote"),
            listing("Java Developer B", "Location: Remote. SQL"),
            listing("Java Developer C", "Location: Remote"),
        ];
        let ranked = rank(listings, &skills(&["SQL"]), "Java Developer");
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].title, "Java Developer B");
        assert_eq!(ranked[0].match_score, Some(4));
        // A and C tie at 3 and keep their fetch order
        assert_eq!(ranked[1].title, "Java Developer A");
        assert_eq!(ranked[2].title, "Java Developer C");
    }

    #[test]
    fn test_empty_skills_list_works() {
        let listings = vec![listing("Java Developer", "Location: Remote")];
        let ranked = rank(listings, &[], "Java");
        assert_eq!(ranked[0].match_score, Some(3));
    }

    #[test]
    fn test_skill_match_is_case_insensitive() {
        let listings = vec![listing("JAVA DEVELOPER", "Location: Remote, SQL")];
        let ranked = rank(listings, &skills(&["java", "sql"]), "Java Developer");
        assert_eq!(ranked[0].match_score, Some(5));
    }
}
