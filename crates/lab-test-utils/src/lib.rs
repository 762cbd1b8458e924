//! Testing utilities for the lab-pages workspace
//!
//! Fixture documents shaped like the site's `data/*.json`, plus in-memory
//! fakes for the document source and the script loader.

#![allow(missing_docs)]

use async_trait::async_trait;
use lab_content::model::{
    Article, Category, NewsDocument, PeopleDocument, Person, Project, ProjectDetails,
    ProjectDisplay, ResearchDocument, Visitor,
};
use lab_pages::error::{LoadError, ScriptError};
use lab_pages::{DataPaths, DocumentSource, ScriptLoader};
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};

pub fn project(title: &str) -> Project {
    Project {
        id: None,
        visible: None,
        display: ProjectDisplay {
            title: title.to_string(),
            date: "March 3, 2021".to_string(),
            authors: "Authors: Jane Doe, John Roe".to_string(),
            image: "img/pgdot-300x224.png".to_string(),
            link: None,
        },
        metadata: None,
        details: Some(ProjectDetails {
            abstract_text: Some(format!("Abstract of {title}.")),
            ..ProjectDetails::default()
        }),
    }
}

pub fn hidden(mut project: Project) -> Project {
    project.visible = Some(false);
    project
}

pub fn without_details(mut project: Project) -> Project {
    project.details = None;
    project
}

pub fn category(id: &str, name: &str, projects: Vec<Project>) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        projects,
    }
}

/// Two populated categories, one empty, one with an unknown id
pub fn sample_research() -> ResearchDocument {
    ResearchDocument {
        title: Some("Research".to_string()),
        categories: vec![
            category(
                "machine_learning",
                "Machine Learning",
                vec![
                    project("Alpha Project"),
                    project("Beta Study"),
                    hidden(project("Hidden Work")),
                    without_details(project("Gamma Notes")),
                    project("Delta Model"),
                    project("Epsilon Method"),
                ],
            ),
            category("finance", "Finance", vec![project("Risk Premia")]),
            category("health", "Health", vec![]),
            category("astronomy", "Astronomy", vec![project("Star Maps")]),
        ],
    }
}

pub fn article(title: &str, content: &str) -> Article {
    Article {
        id: None,
        title: title.to_string(),
        date: "May 1, 2020".to_string(),
        author: Some("Jane Doe".to_string()),
        content: Some(content.to_string()),
        visible: None,
    }
}

pub fn sample_news() -> NewsDocument {
    NewsDocument {
        articles: vec![
            article("Lab Wins Award", "First paragraph.\n\nSecond paragraph."),
            Article {
                visible: Some(false),
                ..article("Draft Post", "Not yet.")
            },
            Article {
                content: None,
                ..article("Empty Post", "")
            },
        ],
    }
}

pub fn person(name: &str, image: &str) -> Person {
    Person {
        name: name.to_string(),
        image: image.to_string(),
        link: Some(format!("https://lab.example/{}", name.to_lowercase().replace(' ', "-"))),
        visible: None,
    }
}

pub fn people(count: usize, prefix: &str) -> Vec<Person> {
    (1..=count)
        .map(|i| person(&format!("{prefix} {i}"), &format!("img/{prefix}-{i}.jpg")))
        .collect()
}

pub fn sample_people() -> PeopleDocument {
    PeopleDocument {
        leading_faculty: people(2, "Faculty"),
        current_phd_students: people(6, "Student"),
        current_postdocs: people(1, "Postdoc"),
        past_phd_students: people(3, "Alumnus"),
        past_postdocs: vec![],
        past_visitors: vec![
            Visitor {
                name: "Ada Visitor".to_string(),
                link: Some("https://ada.example".to_string()),
                link_target: None,
            },
            Visitor {
                name: "Bo Guest".to_string(),
                link: None,
                link_target: Some("_blank".to_string()),
            },
        ],
    }
}

/// In-memory documents keyed by site-relative path
#[derive(Debug, Default)]
pub struct FixtureSource {
    documents: HashMap<String, Vec<u8>>,
    requests: Mutex<Vec<String>>,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// All three sample documents at their default paths
    pub fn sample() -> Self {
        let paths = DataPaths::default();
        Self::new()
            .with_json(&paths.research, &sample_research())
            .with_json(&paths.news, &sample_news())
            .with_json(&paths.people, &sample_people())
    }

    pub fn with_json<T: serde::Serialize>(self, path: &str, document: &T) -> Self {
        let bytes = serde_json::to_vec(document).expect("fixture serializes");
        self.with_raw(path, bytes)
    }

    pub fn with_raw(mut self, path: &str, bytes: impl Into<Vec<u8>>) -> Self {
        self.documents.insert(path.to_string(), bytes.into());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl DocumentSource for FixtureSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, LoadError> {
        self.requests.lock().push(path.to_string());
        self.documents.get(path).cloned().ok_or(LoadError::Status {
            url: path.to_string(),
            status: 404,
        })
    }
}

/// Records load order; scripts in `failing` report an error
#[derive(Debug, Default)]
pub struct RecordingScriptLoader {
    failing: HashSet<String>,
    loaded: Mutex<Vec<String>>,
}

impl RecordingScriptLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(mut self, src: &str) -> Self {
        self.failing.insert(src.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.loaded.lock().clone()
    }
}

#[async_trait]
impl ScriptLoader for RecordingScriptLoader {
    async fn load(&self, src: &str) -> Result<(), ScriptError> {
        self.loaded.lock().push(src.to_string());
        if self.failing.contains(src) {
            Err(ScriptError::failed(src, "simulated failure"))
        } else {
            Ok(())
        }
    }
}
