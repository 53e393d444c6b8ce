use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Contact details and the free-text professional summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub website: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

impl Default for Experience {
    fn default() -> Self {
        Self::new()
    }
}

impl Experience {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            company: String::new(),
            position: String::new(),
            location: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            current: false,
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: Option<String>,
}

impl Default for Education {
    fn default() -> Self {
        Self::new()
    }
}

impl Education {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            institution: String::new(),
            degree: String::new(),
            field: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            gpa: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    #[default]
    Technical,
    Soft,
    Language,
    Tool,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub category: SkillCategory,
}

#[allow(dead_code)]
impl Skill {
    pub fn new(name: impl Into<String>, category: SkillCategory) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
        }
    }
}

/// The full editable resume. Each sequence keeps its entries in display order
/// and ids are unique within their own sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
}

#[allow(dead_code)]
impl ResumeData {
    /// True when nothing beyond blank defaults has been entered.
    pub fn is_empty(&self) -> bool {
        self.personal_info == PersonalInfo::default()
            && self.experience.is_empty()
            && self.education.is_empty()
            && self.skills.is_empty()
    }

    /// Appends an experience entry, regenerating its id on collision.
    pub fn add_experience(&mut self, mut entry: Experience) -> Uuid {
        while self.experience.iter().any(|e| e.id == entry.id) {
            entry.id = Uuid::new_v4();
        }
        let id = entry.id;
        self.experience.push(entry);
        id
    }

    pub fn remove_experience(&mut self, id: Uuid) -> bool {
        let before = self.experience.len();
        self.experience.retain(|e| e.id != id);
        self.experience.len() != before
    }

    pub fn add_education(&mut self, mut entry: Education) -> Uuid {
        while self.education.iter().any(|e| e.id == entry.id) {
            entry.id = Uuid::new_v4();
        }
        let id = entry.id;
        self.education.push(entry);
        id
    }

    pub fn remove_education(&mut self, id: Uuid) -> bool {
        let before = self.education.len();
        self.education.retain(|e| e.id != id);
        self.education.len() != before
    }

    /// Adds a skill unless one with the same name (case-insensitive) exists.
    pub fn add_skill(&mut self, mut skill: Skill) -> Option<Uuid> {
        let name = skill.name.trim();
        if name.is_empty()
            || self
                .skills
                .iter()
                .any(|s| s.name.trim().eq_ignore_ascii_case(name))
        {
            return None;
        }
        while self.skills.iter().any(|s| s.id == skill.id) {
            skill.id = Uuid::new_v4();
        }
        let id = skill.id;
        self.skills.push(skill);
        Some(id)
    }

    pub fn remove_skill(&mut self, id: Uuid) -> bool {
        let before = self.skills.len();
        self.skills.retain(|s| s.id != id);
        self.skills.len() != before
    }
}
