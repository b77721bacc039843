use orbit_scene::config::SceneConfig;

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_scene() {
        let config = SceneConfig::default();

        assert_eq!(config.plane.width, 50.0);
        assert_eq!(config.plane.checkers, 8);
        assert_eq!(config.plane.metalness, 0.6);

        assert_eq!(config.boxes.len(), 3, "stock scene has three boxes");
        assert_eq!(config.boxes[0].color, [0.0, 1.0, 0.0]);
        assert_eq!(config.boxes[1].size, [1.0, 3.0, 1.0]);
        assert_eq!(config.boxes[1].position, [5.0, 1.0, 5.0]);
        assert_eq!(config.boxes[2].size, [3.0, 1.0, 3.0]);
        assert_eq!(config.boxes[2].position, [-5.0, 1.0, -5.0]);

        assert_eq!(config.camera.position, [10.0, 10.0, 10.0]);
        assert_eq!(config.camera.target, [0.0, 0.0, 0.0]);
        assert_eq!(config.camera.fovy, 75.0);

        assert!(config.auto_rotate.enabled);
        assert_eq!(config.auto_rotate.speed, 0.5);
        assert!(config.environment.is_none());
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let config: SceneConfig = serde_json::from_str(
            r#"{
                "auto_rotate": { "speed": 2.0 },
                "boxes": [
                    { "color": [1.0, 1.0, 0.0], "position": [2.0, 1.0, 2.0] }
                ]
            }"#,
        )
        .expect("valid config must parse");

        assert_eq!(config.auto_rotate.speed, 2.0);
        assert!(config.auto_rotate.enabled, "unnamed fields keep their defaults");
        assert_eq!(config.boxes.len(), 1);
        assert_eq!(config.boxes[0].color, [1.0, 1.0, 0.0]);
        assert_eq!(config.boxes[0].size, [2.0, 2.0, 2.0]);
        assert_eq!(config.plane.width, 50.0);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<SceneConfig, _> = serde_json::from_str(r#"{ "plnae": {} }"#);
        assert!(result.is_err(), "typos in config keys must not pass silently");
    }

    #[test]
    fn environment_path_round_trips() {
        let config: SceneConfig =
            serde_json::from_str(r#"{ "environment": "assets/forest.hdr" }"#).unwrap();
        assert_eq!(config.environment.as_deref(), Some("assets/forest.hdr"));
    }
}
