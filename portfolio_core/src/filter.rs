//! Project category filtering.

use std::fmt;
use std::str::FromStr;

use crate::data::{ProjectCategory, ProjectEntry};
use crate::error::PortfolioError;

/// Selected category in the projects view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// Every project
    #[default]
    All,
    /// Projects of one category
    Only(ProjectCategory),
}

/// Filter buttons shown above the project grid.
pub const FILTER_CHOICES: [CategoryFilter; 3] = [
    CategoryFilter::All,
    CategoryFilter::Only(ProjectCategory::FullStack),
    CategoryFilter::Only(ProjectCategory::ComputerVision),
];

impl CategoryFilter {
    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    /// Whether `project` passes the filter.
    pub fn matches(&self, project: &ProjectEntry) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => project.category == *category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryFilter {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

/// Order-preserving view of the projects passing `filter`.
///
/// The source slice is untouched; `All` yields every project.
pub fn filter_projects(projects: &[ProjectEntry], filter: CategoryFilter) -> Vec<&ProjectEntry> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

/// Tech-stack badges that fit on a card, plus how many were cut.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TechBadges<'a> {
    /// Badges to render
    pub shown: &'a [String],
    /// Count for the "+N more" badge; zero hides it
    pub hidden: usize,
}

/// First `max` entries of `stack` and the overflow count.
pub fn visible_tech(stack: &[String], max: usize) -> TechBadges<'_> {
    let cut = stack.len().min(max);
    TechBadges {
        shown: &stack[..cut],
        hidden: stack.len() - cut,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn project(id: u32, category: ProjectCategory) -> ProjectEntry {
        ProjectEntry {
            id,
            title: format!("project {id}"),
            category,
            ..Default::default()
        }
    }

    fn ids(projects: Vec<&ProjectEntry>) -> Vec<u32> {
        projects.into_iter().map(|p| p.id).collect()
    }

    #[test]
    fn full_stack_filter_keeps_relative_order() {
        let projects = vec![
            project(1, ProjectCategory::FullStack),
            project(2, ProjectCategory::ComputerVision),
            project(3, ProjectCategory::FullStack),
        ];
        let filter: CategoryFilter = "Full-Stack".parse().unwrap();
        assert_eq!(ids(filter_projects(&projects, filter)), vec![1, 3]);
        assert_eq!(projects.len(), 3);
    }

    #[test]
    fn all_returns_everything_unchanged() {
        let projects = vec![
            project(4, ProjectCategory::GameDevelopment),
            project(2, ProjectCategory::ComputerVision),
            project(9, ProjectCategory::FullStack),
        ];
        let all = filter_projects(&projects, CategoryFilter::All);
        assert_eq!(ids(all), vec![4, 2, 9]);
    }

    #[test]
    fn category_without_projects_is_empty() {
        let projects = vec![project(1, ProjectCategory::FullStack)];
        let filtered = filter_projects(
            &projects,
            CategoryFilter::Only(ProjectCategory::MachineLearning),
        );
        assert!(filtered.is_empty());
    }

    #[test]
    fn filter_labels_round_trip() {
        for choice in FILTER_CHOICES {
            assert_eq!(choice.label().parse::<CategoryFilter>().unwrap(), choice);
        }
        assert!("Everything".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn tech_badges_overflow() {
        let stack: Vec<String> = ["Node.js", "MySQL", "JavaScript", "HTML5", "CSS3"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let badges = visible_tech(&stack, 4);
        assert_eq!(badges.shown.len(), 4);
        assert_eq!(badges.hidden, 1);

        let short = visible_tech(&stack[..2], 4);
        assert_eq!(short.shown, &stack[..2]);
        assert_eq!(short.hidden, 0);
    }
}
