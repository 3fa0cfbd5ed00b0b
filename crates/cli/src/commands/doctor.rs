use happycore_core::config::{AppConfig, LoadOptions};
use happycore_core::{
    Catalog, ChatEngine, ChatReply, GREETING_REPLY, LISTING_HEADER, MAX_RESULTS, NO_MATCHES_REPLY,
};
use serde::Serialize;
use std::sync::Arc;

use crate::commands::{CommandResult, CATALOG_FAILURE_EXIT_CODE, CONFIG_FAILURE_EXIT_CODE};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(json_output: bool) -> CommandResult {
    let (report, exit_code) = build_report();

    let output = if json_output {
        serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        })
    } else {
        render_human(&report)
    };

    CommandResult { exit_code, output }
}

fn build_report() -> (DoctorReport, u8) {
    let mut checks = Vec::new();
    let mut exit_code = 0;

    match AppConfig::load(LoadOptions::default()) {
        Ok(config) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Pass,
                details: "configuration loaded and validated".to_string(),
            });
            match Catalog::load(&config.catalog.path) {
                Ok(catalog) => {
                    checks.push(DoctorCheck {
                        name: "catalog_load",
                        status: CheckStatus::Pass,
                        details: format!(
                            "loaded {} records from `{}`",
                            catalog.len(),
                            config.catalog.path.display()
                        ),
                    });
                    checks.push(check_chat_round_trip(catalog));
                }
                Err(error) => {
                    exit_code = CATALOG_FAILURE_EXIT_CODE;
                    checks.push(DoctorCheck {
                        name: "catalog_load",
                        status: CheckStatus::Fail,
                        details: error.to_string(),
                    });
                    checks.push(skipped("chat_round_trip", "catalog did not load"));
                }
            }
        }
        Err(error) => {
            exit_code = CONFIG_FAILURE_EXIT_CODE;
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Fail,
                details: error.to_string(),
            });
            checks.push(skipped("catalog_load", "configuration did not load"));
            checks.push(skipped("chat_round_trip", "configuration did not load"));
        }
    }

    let all_pass = checks.iter().all(|check| check.status == CheckStatus::Pass);
    let overall_status = if all_pass { CheckStatus::Pass } else { CheckStatus::Fail };
    let summary = if all_pass {
        "doctor: all readiness checks passed".to_string()
    } else {
        "doctor: one or more readiness checks failed".to_string()
    };

    (DoctorReport { overall_status, summary, checks }, exit_code)
}

fn check_chat_round_trip(catalog: Catalog) -> DoctorCheck {
    let engine = ChatEngine::new(Arc::new(catalog));
    let greeted = engine.respond("hi").text == GREETING_REPLY;
    let searched = search_reply_is_consistent(&engine.respond("laptop"));

    if greeted && searched {
        DoctorCheck {
            name: "chat_round_trip",
            status: CheckStatus::Pass,
            details: "greeting and search messages answered".to_string(),
        }
    } else {
        DoctorCheck {
            name: "chat_round_trip",
            status: CheckStatus::Fail,
            details: "chat engine returned an unexpected reply".to_string(),
        }
    }
}

/// A search reply carries a match count and renders exactly that many entries.
fn search_reply_is_consistent(reply: &ChatReply) -> bool {
    match reply.match_count {
        Some(0) => reply.text == NO_MATCHES_REPLY,
        Some(count) if count <= MAX_RESULTS => {
            reply.text.starts_with(LISTING_HEADER) && reply.text.lines().count() == 1 + 2 * count
        }
        _ => false,
    }
}

fn skipped(name: &'static str, reason: &str) -> DoctorCheck {
    DoctorCheck {
        name,
        status: CheckStatus::Skipped,
        details: format!("skipped because {reason}"),
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "fail",
            CheckStatus::Skipped => "skip",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
