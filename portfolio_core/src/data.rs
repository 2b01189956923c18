//! Portfolio data model.
//!
//! These types mirror the embedded `portfolio.json` document. They are:
//!
//! - **Serializable** - camelCase JSON via serde, same shape as the data file
//! - **Read-only** - built once at startup and shared by every view
//! - **Ordered** - every list keeps its declaration order, which is display order
//!
//! # Example
//!
//! ```rust
//! use portfolio_core::data::{ProjectCategory, ProjectEntry, ProjectStatus};
//!
//! let project = ProjectEntry {
//!     id: 7,
//!     title: "Edge Detector".into(),
//!     category: ProjectCategory::ComputerVision,
//!     status: ProjectStatus::Completed,
//!     ..Default::default()
//! };
//! assert_eq!(project.category.label(), "Computer Vision");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PortfolioError;

/// The whole portfolio: personal details plus every ordered list the views render.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    /// Name, headline and contact channels
    pub personal: PersonalInfo,
    /// Education history, most recent first
    pub education: Vec<EducationEntry>,
    /// Skill groups
    pub skills: Skills,
    /// Work and internship experience
    pub experience: Vec<ExperienceEntry>,
    /// Showcased projects
    pub projects: Vec<ProjectEntry>,
    /// Certifications and courses
    #[serde(default)]
    pub certifications: Vec<Certification>,
    /// Free-form personal interests
    #[serde(default)]
    pub interests: Vec<String>,
    /// Highlights shown under the experience timeline
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

/// Personal details and contact channels.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    /// Full name
    pub name: String,
    /// Short professional title
    pub title: String,
    /// Secondary headline under the title
    pub subtitle: String,
    /// One-line tagline for the hero section
    pub tagline: String,
    /// About-section paragraph
    pub bio: String,
    /// City / region
    pub location: String,
    /// Contact email
    pub email: String,
    /// Contact phone, human formatted
    pub phone: String,
    /// LinkedIn profile URL
    pub linkedin: String,
    /// GitHub profile URL
    pub github: String,
    /// LeetCode profile URL
    #[serde(default)]
    pub leetcode: Option<String>,
    /// GeeksforGeeks profile URL
    #[serde(default)]
    pub geeksforgeeks: Option<String>,
    /// Resume download URL; `None` hides the resume button
    #[serde(default)]
    pub resume_url: Option<String>,
}

/// One education record.
///
/// The data carries either a CGPA or a percentage; [`EducationEntry::grade`]
/// picks whichever is present.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    /// Degree or certificate name
    pub degree: String,
    /// School or university
    pub institution: String,
    /// Campus location
    pub location: String,
    /// Free-form period, e.g. "2022 - Present"
    pub duration: String,
    /// Cumulative GPA, e.g. "8.5 CGPA"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cgpa: Option<String>,
    /// Percentage score, e.g. "91% (544/600)"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<String>,
    /// Notable coursework
    #[serde(default)]
    pub coursework: Vec<String>,
}

/// Grade metric of an education entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grade<'a> {
    /// Cumulative grade point average
    Cgpa(&'a str),
    /// Percentage score
    Percentage(&'a str),
}

impl Grade<'_> {
    /// The raw metric text.
    pub fn value(&self) -> &str {
        match self {
            Grade::Cgpa(v) | Grade::Percentage(v) => v,
        }
    }
}

impl EducationEntry {
    /// The grade metric, preferring CGPA when both are present.
    pub fn grade(&self) -> Option<Grade<'_>> {
        self.cgpa
            .as_deref()
            .map(Grade::Cgpa)
            .or_else(|| self.percentage.as_deref().map(Grade::Percentage))
    }
}

/// Skill names grouped by kind.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    /// Languages and core technical skills
    pub technical: Vec<String>,
    /// Frameworks and libraries
    pub frameworks: Vec<String>,
    /// Databases
    pub databases: Vec<String>,
    /// Cloud platforms
    pub cloud: Vec<String>,
    /// Tools
    pub tools: Vec<String>,
    /// Soft skills
    pub soft: Vec<String>,
}

impl Skills {
    /// Display title and entries for each non-empty group, in display order.
    pub fn groups(&self) -> Vec<(&'static str, &[String])> {
        [
            ("Technical Skills", self.technical.as_slice()),
            ("Frameworks", self.frameworks.as_slice()),
            ("Databases", self.databases.as_slice()),
            ("Cloud Platforms", self.cloud.as_slice()),
            ("Tools & Libraries", self.tools.as_slice()),
            ("Soft Skills", self.soft.as_slice()),
        ]
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
        .collect()
    }
}

/// One work or internship record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    /// Stable identifier, used as the list key
    pub id: u32,
    /// Role title
    pub role: String,
    /// Organization
    pub company: String,
    /// Engagement type, e.g. "Virtual Job Experience (via Forage)"
    #[serde(rename = "type")]
    pub engagement: String,
    /// Free-form period
    pub duration: String,
    /// Summary paragraph
    pub description: String,
    /// Skills exercised
    #[serde(default)]
    pub skills: Vec<String>,
    /// Optional certificate or post link
    #[serde(default)]
    pub link: Option<String>,
}

/// One showcased project.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    /// Stable identifier, used as the list key
    pub id: u32,
    /// Project name
    pub title: String,
    /// One-line kind description
    pub subtitle: String,
    /// Summary paragraph
    pub description: String,
    /// Feature bullet points
    #[serde(default)]
    pub features: Vec<String>,
    /// Technologies, most important first
    #[serde(default)]
    pub tech_stack: Vec<String>,
    /// Source repository URL
    pub github: String,
    /// Live demo URL
    #[serde(default)]
    pub live_demo: Option<String>,
    /// Preview image URL
    #[serde(default)]
    pub image: Option<String>,
    /// Filter category
    pub category: ProjectCategory,
    /// Completion status
    #[serde(default)]
    pub status: ProjectStatus,
}

/// Fixed set of project categories.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectCategory {
    /// Web applications spanning frontend and backend
    #[default]
    #[serde(rename = "Full-Stack")]
    FullStack,
    /// Image and video processing
    #[serde(rename = "Computer Vision")]
    ComputerVision,
    /// Model training and inference
    #[serde(rename = "Machine Learning")]
    MachineLearning,
    /// Games
    #[serde(rename = "Game Development")]
    GameDevelopment,
}

impl ProjectCategory {
    /// Every category, in display order.
    pub const ALL: [ProjectCategory; 4] = [
        ProjectCategory::FullStack,
        ProjectCategory::ComputerVision,
        ProjectCategory::MachineLearning,
        ProjectCategory::GameDevelopment,
    ];

    /// Human-readable label, identical to the JSON value.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::FullStack => "Full-Stack",
            ProjectCategory::ComputerVision => "Computer Vision",
            ProjectCategory::MachineLearning => "Machine Learning",
            ProjectCategory::GameDevelopment => "Game Development",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProjectCategory {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| PortfolioError::UnknownCategory(s.to_string()))
    }
}

/// Project completion status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    /// Finished
    #[default]
    Completed,
    /// Still being worked on
    #[serde(rename = "In Progress")]
    InProgress,
}

impl ProjectStatus {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "In Progress",
        }
    }
}

/// One certification.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    /// Certificate name
    pub name: String,
    /// Issuing organization
    pub issuer: String,
    /// What it covered
    pub description: String,
    /// Year earned
    pub year: String,
}

/// One "Key Achievements" card.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    /// Headline
    pub title: String,
    /// One-sentence summary
    pub description: String,
    /// Free-form year or range, e.g. "2021-2025"
    pub year: String,
}
