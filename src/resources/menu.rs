use serde::{Deserialize, Serialize};

use crate::components::LessonArchetype;
use crate::resources::ConfigError;

/// One entry of the syllabus menu. Categories carry their lessons in
/// `sub_modules`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingModule {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "subModules", default, skip_serializing_if = "Vec::is_empty")]
    pub sub_modules: Vec<TrainingModule>,
}

impl TrainingModule {
    fn find(&self, id: &str) -> Option<&TrainingModule> {
        if self.id == id {
            return Some(self);
        }
        self.sub_modules.iter().find_map(|module| module.find(id))
    }
}

/// Syllabus menu handed in by the host, used for mission id lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LessonMenu {
    pub modules: Vec<TrainingModule>,
}

impl LessonMenu {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn find(&self, id: &str) -> Option<&TrainingModule> {
        self.modules.iter().find_map(|module| module.find(id))
    }

    /// Leaf lessons in menu order.
    pub fn lessons(&self) -> Vec<&TrainingModule> {
        fn collect<'a>(module: &'a TrainingModule, out: &mut Vec<&'a TrainingModule>) {
            if module.sub_modules.is_empty() {
                out.push(module);
            }
            for child in &module.sub_modules {
                collect(child, out);
            }
        }

        let mut out = Vec::new();
        for module in &self.modules {
            collect(module, &mut out);
        }
        out
    }

    /// Archetype a menu entry would fly as, if the entry exists.
    pub fn archetype_for(&self, id: &str) -> Option<LessonArchetype> {
        self.find(id)
            .map(|module| LessonArchetype::from_mission_id(&module.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MENU: &str = r#"[
        {"id": "fundamentals", "name": "Fundamentals", "type": "category", "subModules": [
            {"id": "f-homing", "name": "VOR Homing", "type": "VOR"},
            {"id": "f-outbound", "name": "Outbound Tracking", "type": "HSI"}
        ]},
        {"id": "landing", "name": "Landing", "type": "category", "subModules": [
            {"id": "l-crosswind", "name": "Crosswind Landing", "type": "VISUAL"}
        ]}
    ]"#;

    #[test]
    fn test_parse_and_find() {
        let menu = LessonMenu::from_json(MENU).unwrap();
        let module = menu.find("f-outbound").unwrap();
        assert_eq!(module.name, "Outbound Tracking");
        assert_eq!(module.kind, "HSI");
        assert!(menu.find("missing").is_none());
    }

    #[test]
    fn test_leaf_lessons_in_order() {
        let menu = LessonMenu::from_json(MENU).unwrap();
        let ids: Vec<&str> = menu.lessons().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["f-homing", "f-outbound", "l-crosswind"]);
    }

    #[test]
    fn test_archetype_lookup() {
        let menu = LessonMenu::from_json(MENU).unwrap();
        assert_eq!(
            menu.archetype_for("l-crosswind"),
            Some(LessonArchetype::CrosswindLanding)
        );
        assert_eq!(menu.archetype_for("nope"), None);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            LessonMenu::from_json("[{\"id\": 1}]"),
            Err(ConfigError::JsonError(_))
        ));
    }
}
