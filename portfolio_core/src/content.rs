//! Embedded portfolio data.
//!
//! The data set ships inside the binary; there is no runtime file or network
//! lookup. It is parsed once when a view mounts and never mutated.

use crate::data::PortfolioData;
use crate::error::PortfolioError;

/// Raw JSON of the built-in portfolio.
pub const EMBEDDED_JSON: &str = include_str!("../data/portfolio.json");

impl PortfolioData {
    /// Parse a portfolio document.
    pub fn from_json(json: &str) -> Result<Self, PortfolioError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The built-in portfolio data.
    pub fn embedded() -> Result<Self, PortfolioError> {
        Self::from_json(EMBEDDED_JSON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Grade, ProjectCategory};
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_data_parses() {
        let data = PortfolioData::embedded().expect("embedded json is valid");
        assert_eq!(data.personal.name, "Prajwal H S");
        assert_eq!(data.education.len(), 3);
        assert_eq!(data.experience.len(), 2);
        assert_eq!(data.projects.len(), 3);
        assert!(data.personal.resume_url.is_none());
    }

    #[test]
    fn embedded_lists_keep_declaration_order() {
        let data = PortfolioData::embedded().unwrap();
        let ids: Vec<u32> = data.projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(data.projects[0].category, ProjectCategory::FullStack);
        assert_eq!(data.education[0].grade(), Some(Grade::Cgpa("8.5 CGPA")));
        assert!(matches!(data.education[1].grade(), Some(Grade::Percentage(_))));
    }

    #[test]
    fn achievements_are_embedded_and_optional() {
        let data = PortfolioData::embedded().unwrap();
        let titles: Vec<&str> = data.achievements.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Academic Excellence",
                "Virtual Internship Completion",
                "Full-Stack Development"
            ]
        );
        assert_eq!(data.achievements[0].year, "2021-2025");

        let mut value: serde_json::Value = serde_json::from_str(EMBEDDED_JSON).unwrap();
        value.as_object_mut().unwrap().remove("achievements");
        let without = PortfolioData::from_json(&value.to_string()).unwrap();
        assert!(without.achievements.is_empty());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = PortfolioData::from_json("{ \"personal\": 3 }").unwrap_err();
        assert!(matches!(err, PortfolioError::Parse(_)));
    }
}
