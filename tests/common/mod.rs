#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

use marquee::catalog::{MovieSummary, SearchResultPage};

/// Path of the built `marquee` binary
pub fn marquee_binary() -> &'static str {
    env!("CARGO_BIN_EXE_marquee")
}

/// Runs marquee commands against a config file inside a temp directory
pub struct MarqueeTest {
    pub temp_dir: TempDir,
    token: Option<String>,
}

impl MarqueeTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        MarqueeTest {
            temp_dir,
            token: None,
        }
    }

    /// Pass `TMDB_TOKEN` to every command run by this harness
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.yaml")
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).expect("Failed to write config file");
    }

    pub fn read_config(&self) -> String {
        fs::read_to_string(self.config_path()).expect("Failed to read config file")
    }

    pub fn run(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(marquee_binary());
        cmd.args(args)
            .current_dir(self.temp_dir.path())
            .env("MARQUEE_CONFIG", self.config_path())
            .env_remove("TMDB_TOKEN")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        if let Some(token) = &self.token {
            cmd.env("TMDB_TOKEN", token);
        }
        cmd.output().expect("Failed to execute marquee command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }
}

/// A result record with predictable fields
pub fn movie(id: u64, title: &str) -> MovieSummary {
    MovieSummary {
        id,
        title: title.to_string(),
        overview: format!("Overview of {title}"),
        release_date: Some("1989-06-23".to_string()),
        vote_average: 7.2,
        poster_path: Some(format!("/poster{id}.jpg")),
        backdrop_path: Some(format!("/backdrop{id}.jpg")),
    }
}

/// A page of `count` movies named after `query`
pub fn result_page(query: &str, page: u32, count: usize, total_pages: u32) -> SearchResultPage {
    SearchResultPage {
        page,
        results: (0..count)
            .map(|i| movie(u64::from(page) * 100 + i as u64, &format!("{query} {page}.{i}")))
            .collect(),
        total_pages,
        total_results: Some(total_pages * 20),
    }
}

/// The JSON body the TMDB search endpoint would send for `page`
pub fn tmdb_body(page: &SearchResultPage) -> serde_json::Value {
    serde_json::json!({
        "page": page.page,
        "results": page.results.iter().map(|m| serde_json::json!({
            "adult": false,
            "id": m.id,
            "title": m.title,
            "original_title": m.title,
            "overview": m.overview,
            "release_date": m.release_date,
            "vote_average": m.vote_average,
            "vote_count": 1200,
            "poster_path": m.poster_path,
            "backdrop_path": m.backdrop_path,
            "genre_ids": [28, 80],
        })).collect::<Vec<_>>(),
        "total_pages": page.total_pages,
        "total_results": page.total_results,
    })
}
