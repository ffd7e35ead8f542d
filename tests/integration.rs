// SPDX-License-Identifier: MPL-2.0
use toast_usher::application::activator::Activator;
use toast_usher::application::port::widget::{NoToolkit, ToolkitLookup, ToolkitProbe};
use toast_usher::application::report::ActivationOutcome;
use toast_usher::config::{self, Config};
use toast_usher::diagnostics::{
    export_to_path, ActivationEventKind, ActivationExport, DiagnosticsCollector,
};
use toast_usher::domain::activation::FailurePolicy;
use toast_usher::infrastructure::channel::ChannelToolkit;
use toast_usher::infrastructure::markup::MarkupProvider;

use tempfile::tempdir;

/// A rendered page with two flash messages, as a server-side template
/// engine would emit them.
const MESSAGES_PAGE: &str = r#"
<html>
  <head>
    <meta charset="utf-8"/>
    <title>Tasks</title>
  </head>
  <body>
    <div class="toast-container position-fixed bottom-0 end-0 p-3">
      <div class="toast text-bg-success" id="message-1" role="alert" aria-live="assertive">
        <div class="toast-body">Task created.</div>
      </div>
      <div class="toast text-bg-info" id="message-2" role="alert" aria-live="assertive">
        <div class="toast-body">Task marked as done.</div>
      </div>
    </div>
    <main class="card">
      <p>Nothing else on this page is a toast.</p>
    </main>
  </body>
</html>
"#;

/// Same page shape with a third message, for batch-abort scenarios.
const BUSY_PAGE: &str = r#"
<body>
  <div class="toast text-bg-success" id="message-1" role="alert"></div>
  <div class="toast text-bg-warning" id="message-2" role="alert"></div>
  <div class="toast text-bg-danger" id="message-3" role="alert"></div>
</body>
"#;

struct MalformedLookup;

impl ToolkitLookup for MalformedLookup {
    fn probe(&self) -> ToolkitProbe<'_> {
        ToolkitProbe::Malformed {
            found: "template comment".to_string(),
        }
    }
}

#[test]
fn activates_every_toast_on_the_messages_page() {
    let provider = MarkupProvider::with_default_marker(MESSAGES_PAGE);
    let (toolkit, requests) = ChannelToolkit::new(8);
    let mut activator = Activator::default();

    let report = activator
        .document_ready(&provider, &toolkit)
        .expect("activation should succeed");

    assert_eq!(report.outcome, ActivationOutcome::Completed);
    assert_eq!(report.discovered, 2);
    assert!(report.is_clean());

    // The renderer receives one request per toast, in document order,
    // each with the standard delay.
    let delivered: Vec<_> = requests.try_iter().collect();
    assert_eq!(delivered.len(), 2);
    assert_eq!(delivered[0].element().id(), Some("message-1"));
    assert_eq!(delivered[1].element().id(), Some("message-2"));
    assert!(delivered.iter().all(|r| r.delay().millis() == 4000));
}

#[test]
fn page_without_toasts_activates_nothing() {
    let provider =
        MarkupProvider::with_default_marker("<html><body><p>Quiet page</p></body></html>");
    let (toolkit, requests) = ChannelToolkit::new(8);
    let mut activator = Activator::default();

    let report = activator
        .document_ready(&provider, &toolkit)
        .expect("activation should succeed");

    assert_eq!(report.outcome, ActivationOutcome::Completed);
    assert_eq!(report.discovered, 0);
    assert!(requests.try_iter().next().is_none());
}

#[test]
fn missing_toolkit_leaves_the_page_untouched() {
    let provider = MarkupProvider::with_default_marker(MESSAGES_PAGE);
    let mut activator = Activator::default();

    let report = activator
        .document_ready(&provider, &NoToolkit)
        .expect("a missing toolkit is not an error");

    assert_eq!(report.outcome, ActivationOutcome::ToolkitMissing);
    assert_eq!(report.discovered, 2);
    assert!(report.records.is_empty());
}

#[test]
fn malformed_toolkit_slot_is_ignored() {
    let provider = MarkupProvider::with_default_marker(MESSAGES_PAGE);
    let mut activator = Activator::default();

    let report = activator
        .document_ready(&provider, &MalformedLookup)
        .expect("a malformed toolkit is not an error");

    assert_eq!(report.outcome, ActivationOutcome::ToolkitMalformed);
    assert!(report.records.is_empty());
}

#[test]
fn second_ready_signal_is_ignored() {
    let provider = MarkupProvider::with_default_marker(MESSAGES_PAGE);
    let (toolkit, requests) = ChannelToolkit::new(8);
    let mut activator = Activator::default();

    // 1. First signal runs the pass.
    activator
        .document_ready(&provider, &toolkit)
        .expect("first activation should succeed");
    assert_eq!(requests.try_iter().count(), 2);

    // 2. Second signal returns the stored report without showing anything.
    let report = activator
        .document_ready(&provider, &toolkit)
        .expect("repeat signal should return the stored report");
    assert_eq!(report.discovered, 2);
    assert!(requests.try_iter().next().is_none());
}

#[test]
fn full_show_queue_fails_one_element_and_continues() {
    let provider = MarkupProvider::with_default_marker(MESSAGES_PAGE);
    // Capacity 1 and nobody draining: the second show finds the queue full.
    let (toolkit, _requests) = ChannelToolkit::new(1);
    let mut activator = Activator::default();

    let report = activator
        .document_ready(&provider, &toolkit)
        .expect("isolated failures do not fail the pass");

    assert_eq!(report.outcome, ActivationOutcome::Completed);
    assert_eq!(report.shown_count(), 1);
    assert_eq!(report.failed_count(), 1);
    assert!(report.records[0].is_shown());
    assert!(report.records[1].is_failed());
}

#[test]
fn closed_renderer_surfaces_per_element_failures() {
    let provider = MarkupProvider::with_default_marker(MESSAGES_PAGE);
    let (toolkit, requests) = ChannelToolkit::new(8);
    drop(requests);
    let mut activator = Activator::default();

    let report = activator
        .document_ready(&provider, &toolkit)
        .expect("isolated failures do not fail the pass");

    assert_eq!(report.outcome, ActivationOutcome::Completed);
    assert_eq!(report.shown_count(), 0);
    assert_eq!(report.failed_count(), 2);
    assert!(report.records.iter().all(|record| record.is_failed()));
}

#[test]
fn abort_policy_from_config_stops_the_batch() {
    let config = Config {
        auto_hide_delay_ms: Some(4000),
        marker_class: None,
        failure_policy: Some("abort".to_string()),
        log_capacity: None,
    };
    assert_eq!(config.failure_policy(), FailurePolicy::AbortOnFirst);

    let provider = MarkupProvider::with_default_marker(BUSY_PAGE);
    // Capacity 1 and nobody draining: the second show fails, aborting the rest.
    let (toolkit, _requests) = ChannelToolkit::new(1);
    let mut activator = Activator::new(config.activation_settings());

    let report = activator
        .document_ready(&provider, &toolkit)
        .expect("an aborted batch still yields a report");

    assert_eq!(report.outcome, ActivationOutcome::Aborted);
    assert_eq!(report.discovered, 3);
    assert_eq!(report.shown_count(), 1);
    assert_eq!(report.failed_count(), 1);
    assert_eq!(report.records.len(), 3);
    assert!(report.records[1].is_failed());
    assert!(!report.records[2].is_failed());
    assert!(!report.records[2].is_shown());
}

#[test]
fn configured_delay_and_marker_drive_the_pass() {
    // 1. Persist a customized configuration.
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");
    let saved = Config {
        auto_hide_delay_ms: Some(2500),
        marker_class: Some("notice".to_string()),
        failure_policy: None,
        log_capacity: None,
    };
    config::save_to_path(&saved, &config_path).expect("Failed to write config file");

    // 2. Load it back and activate with it.
    let loaded = config::load_from_path(&config_path).expect("Failed to load config from path");
    let document = r#"<body><div class="notice" id="n1"></div><div class="toast" id="t1"></div></body>"#;
    let provider = MarkupProvider::new(document, loaded.marker());
    let (toolkit, requests) = ChannelToolkit::new(4);
    let mut activator = Activator::new(loaded.activation_settings());

    let report = activator
        .document_ready(&provider, &toolkit)
        .expect("activation should succeed");

    // Only the custom-marked element is picked up, with the custom delay.
    assert_eq!(report.discovered, 1);
    let delivered: Vec<_> = requests.try_iter().collect();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].element().id(), Some("n1"));
    assert_eq!(delivered[0].delay().millis(), 2500);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn diagnostics_trail_matches_the_report_and_exports() {
    let provider = MarkupProvider::with_default_marker(MESSAGES_PAGE);
    let (toolkit, _requests) = ChannelToolkit::new(8);
    let mut collector = DiagnosticsCollector::default();
    let mut activator = Activator::default();
    activator.set_diagnostics(collector.handle());

    let report = activator
        .document_ready(&provider, &toolkit)
        .expect("activation should succeed")
        .clone();
    collector.process_pending();

    // 1. The trail brackets the pass: started first, finished last.
    let kinds: Vec<_> = collector.iter().map(|event| event.kind.clone()).collect();
    assert_eq!(
        kinds.first(),
        Some(&ActivationEventKind::ActivationStarted { discovered: 2 })
    );
    assert_eq!(
        kinds.last(),
        Some(&ActivationEventKind::ActivationFinished { shown: 2, failed: 0 })
    );

    // 2. The export bundles report and trail into parseable JSON.
    let dir = tempdir().expect("Failed to create temporary directory");
    let export_path = dir.path().join("activation.json");
    let export = ActivationExport::new(report, collector.snapshot_events());
    export_to_path(&export_path, &export).expect("Failed to export diagnostics");

    let content = std::fs::read_to_string(&export_path).expect("Failed to read export");
    let parsed: ActivationExport =
        serde_json::from_str(&content).expect("Export should be valid JSON");
    assert_eq!(parsed.report.discovered, 2);
    assert_eq!(parsed.events.len(), kinds.len());

    dir.close().expect("Failed to close temporary directory");
}
