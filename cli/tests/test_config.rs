//! Integration tests for CLI configuration.

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use hd_cli::{
        cli::{Cli, Commands, HistoryArgs, OutputFormat},
        config::{load_history_file, load_query, resolve_query, HistoryFile},
    };
    use tempfile::NamedTempFile;

    fn history_args(argv: &[&str]) -> HistoryArgs {
        let mut full = vec!["hd-cli", "history"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).expect("parse args").command {
            Commands::History(args) => args,
        }
    }

    #[test]
    fn defaults_to_first_page_of_ten_unfiltered() {
        let args = history_args(&[]);
        assert_eq!(args.format, OutputFormat::Table);
        assert!(!args.all);

        let query = resolve_query(&args, HistoryFile::default());
        assert_eq!(query.page.index, 1);
        assert_eq!(query.page.size, 10);
        assert!(query.criteria.is_unfiltered());
    }

    #[test]
    fn flags_fill_criteria() {
        let args = history_args(&[
            "--query-id",
            "9",
            "--time-max",
            "2024-05-02_00-00-00",
            "--num-humans-min",
            "-1",
            "--page",
            "3",
            "--format",
            "json",
        ]);
        let query = resolve_query(&args, HistoryFile::default());
        assert_eq!(query.criteria.query_id, "9");
        assert_eq!(query.criteria.time_max, "2024-05-02_00-00-00");
        assert_eq!(query.criteria.num_humans_min, Some(-1));
        assert_eq!(query.page.index, 3);
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn format_is_case_insensitive() {
        let args = history_args(&["--format", "Vertical"]);
        assert_eq!(args.format, OutputFormat::Vertical);
        let args = history_args(&["--format", "JSON"]);
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn page_zero_is_rejected() {
        let result = Cli::try_parse_from(["hd-cli", "history", "--page", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn all_conflicts_with_page() {
        let result = Cli::try_parse_from(["hd-cli", "history", "--all", "--page", "2"]);
        assert!(result.is_err());
    }

    #[test]
    fn config_file_is_merged_under_flags() {
        let mut file = NamedTempFile::new().expect("create temp file");
        write!(
            file,
            r#"{{
                "search_query_id": "5",
                "time_min": "2024-05-01_00-00-00",
                "num_humans_max": 4,
                "page_index": 2,
                "page_size": 20
            }}"#
        )
        .expect("write config");
        file.flush().expect("flush config");

        let loaded = load_history_file(file.path()).expect("load config");
        assert_eq!(loaded.query_id.as_deref(), Some("5"));

        let path = file.path().to_string_lossy().to_string();
        let args = history_args(&["--config", path.as_str(), "--page-size", "5", "--num-humans-max", "1"]);
        let query = load_query(&args).expect("resolve");
        assert_eq!(query.criteria.query_id, "5");
        assert_eq!(query.criteria.time_min, "2024-05-01_00-00-00");
        assert_eq!(query.criteria.num_humans_max, Some(1));
        assert_eq!(query.page.index, 2);
        assert_eq!(query.page.size, 5);
    }

    #[test]
    fn broken_config_reports_path() {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(b"{not json").expect("write config");
        file.flush().expect("flush config");

        let err = load_history_file(file.path()).expect_err("invalid json");
        assert!(format!("{err:#}").contains("failed to parse config"));
    }
}
