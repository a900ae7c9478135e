//! Personal profile shown in the sidebar, home page and resume page.

use serde::{Deserialize, Serialize};

/// An education or experience line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub icon: String,
    pub title: String,
    #[serde(default)]
    pub detail: String,
}

/// A column of the technical skills panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub heading: String,
    pub items: Vec<String>,
}

/// A card in the resume highlights column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub icon: String,
    pub title: String,
}

/// A contact link in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub icon: String,
    pub label: String,
    pub href: String,
}

impl ContactLink {
    /// External links open in a new tab; mailto links do not.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http://") || self.href.starts_with("https://")
    }
}

/// Profile content. Missing fields in a content file keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub subtitle: String,
    pub intro: String,
    /// Browser tab title.
    pub page_title: String,
    pub page_icon: String,
    pub experience: Vec<ExperienceItem>,
    pub skills: Vec<SkillGroup>,
    pub highlights: Vec<Highlight>,
    pub contacts: Vec<ContactLink>,
    /// Asset name of the profile image.
    pub profile_image: String,
    /// Asset name of the resume document.
    pub resume: String,
    /// File name offered when downloading the resume.
    pub resume_download_name: String,
}

impl Profile {
    /// Initials used as the placeholder when no profile image is available.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

impl Default for Profile {
    fn default() -> Self {
        let exp = |icon: &str, title: &str, detail: &str| ExperienceItem {
            icon: icon.to_string(),
            title: title.to_string(),
            detail: detail.to_string(),
        };
        let skills = |heading: &str, items: &[&str]| SkillGroup {
            heading: heading.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
        };
        let contact = |icon: &str, label: &str, href: &str| ContactLink {
            icon: icon.to_string(),
            label: label.to_string(),
            href: href.to_string(),
        };

        Self {
            name: "Ahmer ALI".to_string(),
            tagline: "Python Developer | Data Enthusiast".to_string(),
            subtitle: "Building solutions with code and creativity".to_string(),
            intro: "I'm a passionate Python developer with expertise in building data-driven \
                    applications and creative solutions. I love turning ideas into functional, \
                    user-friendly applications."
                .to_string(),
            page_title: "Ahmer ALI | Portfolio".to_string(),
            page_icon: "🚀".to_string(),
            experience: vec![
                exp("🎓", "BSc in Computer Science", ""),
                exp("💼", "Python Developer Intern", "at Gexton Education"),
            ],
            skills: vec![
                skills("Programming", &["Python", "Dart"]),
                skills("Frameworks", &["Streamlit", "Flutter", "Pandas"]),
                skills("Tools", &["Firebase", "Git", "VS Code"]),
            ],
            highlights: vec![Highlight {
                icon: "🎓".to_string(),
                title: "BSc in Computer Science".to_string(),
            }],
            contacts: vec![
                contact(
                    "📧",
                    "ahmeralishoukat.work@gmail.com",
                    "mailto:ahmeralishoukat.work@gmail.com",
                ),
                contact(
                    "🔗",
                    "LinkedIn",
                    "https://www.linkedin.com/in/ahmer-ali-3933a4309/",
                ),
                contact("💻", "GitHub", "https://github.com/Ahmer109"),
            ],
            profile_image: "profile_img_.jpg".to_string(),
            resume: "cv.pdf".to_string(),
            resume_download_name: "Ahmer_ALI_Resume.pdf".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        let profile = Profile::default();
        assert_eq!(profile.initials(), "AA");

        let single = Profile {
            name: "ada".to_string(),
            ..Profile::default()
        };
        assert_eq!(single.initials(), "A");
    }

    #[test]
    fn test_contact_links() {
        let profile = Profile::default();
        assert!(!profile.contacts[0].is_external());
        assert!(profile.contacts[1].is_external());
    }
}
