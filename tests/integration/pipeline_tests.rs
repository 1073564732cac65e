use std::time::Duration;

use rate_tracker::models::ExtractedValue;
use rate_tracker::utils::error::FetchError;
use rate_tracker::RunMode;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

async fn mount_page(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_missing_page_is_reported_not_fatal() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_page(&server, "/a", price_page("$19.99")).await;
    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let config = load_config(
        &format!(
            r#"
products:
  - name: Widget
    url: {uri}/a
    selector: .price
  - name: Gadget
    url: {uri}/b
    selector: .price
"#,
            uri = server.uri()
        ),
        &[],
    )?;

    let runner = create_test_runner(&config)?;
    let mut sink = Vec::new();
    let summary = runner.run(&config.products, RunMode::ReportOnly, &mut sink).await?;

    let outcomes = summary.report.outcomes();
    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0].value(), &ExtractedValue::Found("$19.99".to_string()));
    assert_eq!(outcomes[1].error(), Some(&FetchError::HttpStatus { code: 404 }));

    let printed = String::from_utf8(sink)?;
    assert_eq!(
        printed,
        format!(
            "{}\n- Widget: $19.99\n- Gadget: Error (HTTP status 404)\n",
            today_header()
        )
    );
    Ok(())
}

#[tokio::test]
async fn test_layout_change_reports_not_found() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_page(&server, "/redesigned", "<div class=\"cost\">$5</div>".to_string()).await;

    let config = load_config(
        &format!(
            "products:\n  - name: Widget\n    url: {}/redesigned\n    selector: .price\n",
            server.uri()
        ),
        &[],
    )?;

    let runner = create_test_runner(&config)?;
    let mut sink = Vec::new();
    let summary = runner.run(&config.products, RunMode::ReportOnly, &mut sink).await?;

    assert_eq!(summary.report.failures(), 0);
    assert!(String::from_utf8(sink)?.ends_with("- Widget: Not found\n"));
    Ok(())
}

#[tokio::test]
async fn test_local_sources() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let plain = dir.path().join("widget.html");
    let via_url = dir.path().join("gadget.html");
    std::fs::write(&plain, price_page("$1.50"))?;
    std::fs::write(&via_url, price_page("$2.75"))?;
    let file_url = url::Url::from_file_path(&via_url).expect("absolute path");

    let config = load_config(
        &format!(
            r#"
products:
  - name: Widget
    source: "{}"
    selector: .price
  - name: Gadget
    source: "{}"
    selector: .price
  - name: Ghost
    source: "{}"
    selector: .price
"#,
            plain.display(),
            file_url,
            dir.path().join("ghost.html").display()
        ),
        &[],
    )?;

    let runner = create_test_runner(&config)?;
    let outcomes = runner.process_all(&config.products).await;

    assert_eq!(outcomes[0].summary(), "$1.50");
    assert_eq!(outcomes[1].summary(), "$2.75");
    assert!(matches!(outcomes[2].error(), Some(FetchError::Io(_))));
    Ok(())
}

#[tokio::test]
async fn test_concurrent_fetches_keep_config_order() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    for (route, price, delay_ms) in [("/one", "$1", 300), ("/two", "$2", 100), ("/three", "$3", 0)] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(price_page(price))
                    .set_delay(Duration::from_millis(delay_ms)),
            )
            .mount(&server)
            .await;
    }

    let config = load_config(
        &format!(
            r#"
fetch:
  concurrency: 3
products:
  - {{ name: One, url: "{uri}/one", selector: .price }}
  - {{ name: Two, url: "{uri}/two", selector: .price }}
  - {{ name: Three, url: "{uri}/three", selector: .price }}
"#,
            uri = server.uri()
        ),
        &[],
    )?;
    assert_eq!(config.fetch.concurrency, 3);

    let runner = create_test_runner(&config)?;
    let outcomes = runner.process_all(&config.products).await;
    let lines: Vec<String> = outcomes
        .iter()
        .map(|o| format!("{}={}", o.name(), o.summary()))
        .collect();
    assert_eq!(lines, vec!["One=$1", "Two=$2", "Three=$3"]);
    Ok(())
}

#[tokio::test]
async fn test_empty_dry_run_contacts_nothing() -> anyhow::Result<()> {
    // Stands in for a fully configured SMTP server; a dry run must never connect.
    let smtp = std::net::TcpListener::bind("127.0.0.1:0")?;
    smtp.set_nonblocking(true)?;
    let port = smtp.local_addr()?.port().to_string();

    let config = load_config(
        "products: []\n",
        &[
            ("RATE_TRACKER_SMTP_SERVER", "127.0.0.1"),
            ("RATE_TRACKER_SMTP_PORT", &port),
            ("RATE_TRACKER_SMTP_USERNAME", "tracker@example.com"),
            ("RATE_TRACKER_SMTP_PASSWORD", "secret"),
            ("RATE_TRACKER_EMAIL_TO", "me@example.com"),
        ],
    )?;
    assert_eq!(config.smtp.port.map(|p| p.to_string()), Some(port));

    let runner = create_test_runner(&config)?;
    let mut sink = Vec::new();
    let summary = runner.run(&config.products, RunMode::ReportOnly, &mut sink).await?;

    assert!(summary.report.outcomes().is_empty());
    assert!(summary.delivery.is_none());
    assert_eq!(String::from_utf8(sink)?, format!("{}\n", today_header()));
    match smtp.accept() {
        Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {}
        Ok((_, peer)) => panic!("dry run connected to the SMTP server from {}", peer),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
