//! Project cards shown on the projects page.

use serde::{Deserialize, Serialize};

/// A single project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(alias = "desc")]
    pub description: String,
    /// Technologies, shown comma-separated.
    #[serde(default)]
    pub tech: Vec<String>,
    /// Repository URL.
    #[serde(alias = "github")]
    pub repository: String,
    #[serde(default)]
    pub icon: String,
}

impl Project {
    fn new(title: &str, description: &str, tech: &[&str], repository: &str, icon: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            tech: tech.iter().map(|t| t.to_string()).collect(),
            repository: repository.to_string(),
            icon: icon.to_string(),
        }
    }

    pub fn tech_line(&self) -> String {
        self.tech.join(", ")
    }
}

/// The built-in project list.
pub fn default_projects() -> Vec<Project> {
    const REPO_BASE: &str = "https://github.com/Ahmer109/internship_Task_";

    let entries: [(&str, &str, &[&str], &str); 12] = [
        (
            "Contact Management System",
            "A Python console-based contact management system using Firebase Realtime Database to save, view, edit, and delete contacts.",
            &["Python", "Firebase"],
            "📱",
        ),
        (
            "File Handling Based Dictionary",
            "A stylish Streamlit-based word meaning dictionary app that allows users to search, add, and store words with their meanings.",
            &["Python", "Streamlit"],
            "📖",
        ),
        (
            "Dictionary with Audio Pronunciation",
            "An interactive Streamlit-based English-Urdu dictionary app with word search, add functionality, and text-to-speech audio playback using gTTS.",
            &["Python", "gTTS", "Streamlit"],
            "🔊",
        ),
        (
            "Emotion Detection from Live Webcam",
            "A Streamlit-based real-time emotion detection app that uses DeepFace to analyze webcam input and play matching mood-based music.",
            &["Python", "DeepFace", "Streamlit"],
            "😊",
        ),
        (
            "Currency Converter",
            "A simple and interactive Streamlit app to convert currencies and track conversion history using real-time exchange rates.",
            &["Python", "API Integration"],
            "💱",
        ),
        (
            "File Organization Script",
            "A Streamlit-based tool to automatically organize files in a directory by type into categorized folders.",
            &["Python", "File Handling"],
            "🗂️",
        ),
        (
            "2D Maze Game Development",
            "An interactive 2D maze game built with Streamlit and Pygame where you navigate to the goal while collecting a bonus tile.",
            &["Python", "Pygame"],
            "🎮",
        ),
        (
            "Sudoku Solver with Numpy",
            "A Streamlit-based Sudoku solver and checker that validates and completes user-input puzzles with color-coded feedback.",
            &["Python", "Numpy"],
            "🧩",
        ),
        (
            "Attendance Management System",
            "A secure Streamlit-based attendance system with PIN, barcode, and fingerprint simulation, supporting both student and teacher dashboards.",
            &["Python", "Streamlit"],
            "📝",
        ),
        (
            "Guess the Number Game",
            "A fun Streamlit-based number guessing game with difficulty levels, hints, scoring, and a leaderboard.",
            &["Python", "Game Development"],
            "🔢",
        ),
        (
            "Temperature Converter",
            "A simple Streamlit app to convert temperatures between Celsius, Fahrenheit, and Kelvin.",
            &["Python", "Streamlit"],
            "🌡️",
        ),
        (
            "AI-Based Resume Screening System",
            "An AI-powered Streamlit tool that compares resumes to a job description using TF-IDF to rank candidate matches.",
            &["Python", "NLP", "TF-IDF"],
            "🤖",
        ),
    ];

    entries
        .iter()
        .enumerate()
        .map(|(i, (title, description, tech, icon))| {
            Project::new(title, description, tech, &format!("{}{}", REPO_BASE, i + 1), icon)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_projects() {
        let projects = default_projects();
        assert_eq!(projects.len(), 12);
        assert_eq!(projects[0].repository, "https://github.com/Ahmer109/internship_Task_1");
        assert_eq!(projects[11].repository, "https://github.com/Ahmer109/internship_Task_12");
        assert_eq!(projects[2].tech_line(), "Python, gTTS, Streamlit");
    }

    #[test]
    fn test_accepts_short_field_names() {
        let project: Project = serde_json::from_str(
            r#"{"title": "T", "desc": "D", "tech": ["Rust"], "github": "https://example.com"}"#,
        )
        .unwrap();
        assert_eq!(project.description, "D");
        assert_eq!(project.repository, "https://example.com");
        assert!(project.icon.is_empty());
    }
}
