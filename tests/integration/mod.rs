// Integration tests for Rate Tracker
// These tests drive the real fetcher, extractor and notifier against local
// HTTP mocks and temporary files.

pub mod pipeline_tests;

use std::collections::HashMap;
use std::io::Write;

use config::Environment;
use rate_tracker::{
    config::ENV_PREFIX, AppConfig, CssExtractor, EmailNotifier, PipelineRunner, SourceFetcher,
};
use tempfile::NamedTempFile;

pub type TestRunner = PipelineRunner<SourceFetcher, CssExtractor, EmailNotifier>;

pub fn price_page(price: &str) -> String {
    format!(
        r#"<html>
            <body>
                <h1>Product</h1>
                <div class="price">
                    {}
                </div>
            </body>
        </html>"#,
        price
    )
}

pub fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("create config file");
    file.write_all(contents.as_bytes()).expect("write config file");
    file
}

/// An environment source that ignores the real process environment.
pub fn environment(vars: &[(&str, &str)]) -> Environment {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Environment::with_prefix(ENV_PREFIX).source(Some(map))
}

pub fn load_config(contents: &str, vars: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
    let file = write_config(contents);
    Ok(AppConfig::load_with_environment(file.path(), environment(vars))?)
}

pub fn create_test_runner(config: &AppConfig) -> anyhow::Result<TestRunner> {
    let fetcher = SourceFetcher::new(&config.fetch)?;
    let notifier = EmailNotifier::new(&config.smtp);
    Ok(PipelineRunner::new(fetcher, CssExtractor::new(), notifier)
        .concurrency(config.fetch.concurrency)
        .subject(config.report.subject.clone()))
}

pub fn today_header() -> String {
    format!(
        "Price report for {}",
        chrono::Local::now().date_naive().format("%Y-%m-%d")
    )
}
