use vorsim::resources::{EnvironmentPatch, RenderConfig, SimConfig, TimeOfDay};

/// Every mission id the lesson menu ships with.
pub const MISSION_IDS: [&str; 6] = [
    "f-homing",
    "f-inbound",
    "f-outbound",
    "f-vor",
    "l-crosswind",
    "",
];

pub const MENU_JSON: &str = r#"[
    {
        "id": "fundamentals",
        "name": "Fundamentals",
        "type": "VOR",
        "subModules": [
            { "id": "f-homing", "name": "VOR Homing", "type": "VOR" },
            { "id": "f-vor", "name": "VOR Tracking", "type": "VOR" },
            { "id": "f-outbound", "name": "Outbound Tracking", "type": "HSI" },
            { "id": "f-inbound", "name": "Inbound Intercept", "type": "HSI" }
        ]
    },
    {
        "id": "landing",
        "name": "Landing",
        "type": "HSI",
        "subModules": [
            { "id": "l-crosswind", "name": "Crosswind Landing", "type": "HSI" }
        ]
    },
    {
        "id": "procedures",
        "name": "Procedures",
        "type": "HSI",
        "subModules": [
            { "id": "p-hold", "name": "Holding", "type": "HSI" },
            { "id": "c-dme-arc", "name": "DME Arc", "type": "HSI" }
        ]
    }
]"#;

/// Small frame so rendering tests stay quick
pub fn create_test_render_config() -> RenderConfig {
    RenderConfig {
        width: 480,
        viewport_height: 300,
        panel_height: 180,
        ..Default::default()
    }
}

pub fn create_test_config() -> SimConfig {
    SimConfig {
        render: create_test_render_config(),
        ..Default::default()
    }
}

pub fn calm_air() -> EnvironmentPatch {
    EnvironmentPatch {
        wind_speed: Some(0.0),
        ..Default::default()
    }
}

pub fn night_haze() -> EnvironmentPatch {
    EnvironmentPatch {
        visibility: Some(2.0),
        time_of_day: Some(TimeOfDay::Night),
        ..Default::default()
    }
}
