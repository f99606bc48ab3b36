use pretty_assertions::assert_eq;
use std::io::Write;
use vorsim::{
    components::LessonArchetype,
    resources::{ConfigError, LessonMenu, SimConfig, TimeOfDay},
    SimulationSession,
};

use crate::common::MENU_JSON;

fn write_config(yaml: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("create temp config");
    file.write_all(yaml.as_bytes()).expect("write temp config");
    file
}

#[test]
fn test_config_file_drives_session() {
    let file = write_config(
        r#"
seed: 7
trail_spacing: 10.0
environment:
  wind_speed: 20.0
  wind_direction: 300.0
  visibility: 4.0
  time_of_day: NIGHT
render:
  width: 640
  viewport_height: 400
  panel_height: 200
"#,
    );

    let config = SimConfig::from_file(file.path()).unwrap();
    assert_eq!(config.seed, 7);
    assert_eq!(config.environment.time_of_day, TimeOfDay::Night);
    assert_eq!(config.render.total_height(), 600);
    assert_eq!(config.max_substeps, SimConfig::default().max_substeps);

    let session = SimulationSession::new(config, "f-vor");
    assert_eq!(session.environment().wind_speed, 20.0);
    assert_eq!(session.rng().master_seed(), 7);
}

#[test]
fn test_missing_config_file_is_an_error() {
    let result = SimConfig::from_file("/nonexistent/vorsim.yaml");
    assert!(matches!(result, Err(ConfigError::FileError(_))));
}

#[test]
fn test_out_of_range_environment_rejected() {
    let file = write_config("environment:\n  visibility: 50.0\n");
    let result = SimConfig::from_file(file.path());
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

#[test]
fn test_malformed_yaml_rejected() {
    let file = write_config("seed: [not, a, number]\n");
    let result = SimConfig::from_file(file.path());
    assert!(matches!(result, Err(ConfigError::YamlError(_))));
}

#[test]
fn test_menu_lookup_maps_lessons() {
    let menu = LessonMenu::from_json(MENU_JSON).unwrap();

    let ids: Vec<&str> = menu.lessons().iter().map(|m| m.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["f-homing", "f-vor", "f-outbound", "f-inbound", "l-crosswind", "p-hold", "c-dme-arc"]
    );
    assert_eq!(menu.archetype_for("f-inbound"), Some(LessonArchetype::InboundIntercept));
    assert_eq!(menu.archetype_for("c-dme-arc"), Some(LessonArchetype::ProcedurePractice));
    assert_eq!(menu.archetype_for("missing"), None);
}
