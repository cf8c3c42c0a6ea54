use figment::Jail;
use lens_config::LensConfig;
use pretty_assertions::assert_eq;

#[test]
fn env_overrides_nested_fields() {
    Jail::expect_with(|jail| {
        let home = jail.directory().to_path_buf();
        jail.set_env("XDG_CONFIG_HOME", home.display());
        jail.set_env("LENS_PARSER__STRICT", "false");
        jail.set_env("LENS_SCAN__THREADS", "6");

        let config = LensConfig::load().expect("config loads");

        assert!(!config.parser.strict);
        assert_eq!(config.scan.threads, 6);
        Ok(())
    });
}

#[test]
fn env_beats_project_config() {
    Jail::expect_with(|jail| {
        let home = jail.directory().to_path_buf();
        jail.set_env("XDG_CONFIG_HOME", home.display());
        std::fs::create_dir_all(jail.directory().join(".lens")).expect("create config dir");
        jail.create_file(".lens/config.toml", "[scan]\nrespect_gitignore = true\n")?;
        jail.set_env("LENS_SCAN__RESPECT_GITIGNORE", "false");

        let config = LensConfig::load().expect("config loads");

        assert!(!config.scan.respect_gitignore);
        Ok(())
    });
}

#[test]
fn env_arrays_replace_default_patterns() {
    Jail::expect_with(|jail| {
        let home = jail.directory().to_path_buf();
        jail.set_env("XDG_CONFIG_HOME", home.display());
        jail.set_env("LENS_SCAN__INCLUDE", r#"["*Spec.php"]"#);

        let config = LensConfig::load().expect("config loads");

        assert_eq!(config.scan.include, vec!["*Spec.php"]);
        Ok(())
    });
}

#[test]
fn log_filter_variable_does_not_disturb_config() {
    Jail::expect_with(|jail| {
        let home = jail.directory().to_path_buf();
        jail.set_env("XDG_CONFIG_HOME", home.display());
        jail.set_env("LENS_LOG", "debug");

        let config = LensConfig::load().expect("config loads");

        assert_eq!(config, LensConfig::default());
        Ok(())
    });
}
