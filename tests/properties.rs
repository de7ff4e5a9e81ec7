mod common;

use common::CONFIG_YAML;
use proptest::prelude::*;
use shotpath::{PathBuilder, Platform, ProjectConfig, TaskDescriptor};

fn builder() -> PathBuilder {
    let config = ProjectConfig::from_yaml(CONFIG_YAML).unwrap();
    PathBuilder::new(config).unwrap()
}

proptest! {
    #[test]
    fn generation_is_deterministic(
        episode in "[A-Za-z0-9]{1,8}",
        sequence in "[A-Za-z0-9_]{1,16}",
        shot in "[A-Za-z0-9_]{1,16}",
        task in "[a-z]{1,10}",
        version in 0u64..=999,
    ) {
        let builder = builder();
        let descriptor = TaskDescriptor::new("SWA", &episode, &sequence, &shot, &task);
        let version = version.to_string();
        let first = builder
            .generate_all_paths(&descriptor, &version, "maya_scene", Platform::Windows)
            .unwrap();
        let second = builder
            .generate_all_paths(&descriptor, &version, "maya_scene", Platform::Windows)
            .unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn rendered_output_never_contains_placeholders(
        episode in "[A-Za-z0-9]{1,8}",
        sequence in "[A-Za-z0-9_]{1,16}",
        shot in "[A-Za-z0-9_]{1,16}",
        task in "[a-z]{1,10}",
        version in 0u64..=999,
    ) {
        let builder = builder();
        let descriptor = TaskDescriptor::new("SWA", &episode, &sequence, &shot, &task);
        let result = builder
            .generate_all_paths(&descriptor, &version.to_string(), "maya_scene", Platform::Linux)
            .unwrap();
        for path in [
            &result.working_file_path,
            &result.render_output_path,
            &result.media_file_path,
            &result.cache_file_path,
            &result.filename,
        ] {
            prop_assert!(!path.contains('{') && !path.contains('}'), "token left in {}", path);
        }
    }

    #[test]
    fn cleaning_is_idempotent(raw in "[A-Za-z0-9_]{1,24}") {
        // The fixture's cleaned forms contain no underscores, so a second
        // pass can never match the prefix pattern again.
        let builder = builder();
        let once = builder
            .generate_all_paths(
                &TaskDescriptor::new("SWA", "Ep00", &raw, &raw, "comp"),
                "1",
                "maya_scene",
                Platform::Linux,
            )
            .unwrap();
        let twice = builder
            .generate_all_paths(
                &TaskDescriptor::new("SWA", "Ep00", &once.sequence_clean, &once.shot_clean, "comp"),
                "1",
                "maya_scene",
                Platform::Linux,
            )
            .unwrap();
        prop_assert_eq!(&once.sequence_clean, &twice.sequence_clean);
        prop_assert_eq!(&once.shot_clean, &twice.shot_clean);
    }

    #[test]
    fn version_padding_is_uniform(version in 0u64..=999) {
        let builder = builder();
        let result = builder
            .generate_all_paths(
                &TaskDescriptor::new("SWA", "Ep00", "sq0010", "SH0020", "comp"),
                &version.to_string(),
                "maya_scene",
                Platform::Linux,
            )
            .unwrap();
        prop_assert_eq!(result.version_formatted.len(), 3);
        let version_token = format!("v{}", result.version_formatted);
        prop_assert!(result.render_output_path.contains(&version_token));
    }
}
