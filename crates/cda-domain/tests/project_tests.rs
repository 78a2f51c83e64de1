//! Unit tests for the project entity lifecycle

use cda_domain::entities::{DocumentationArtifactSet, Project};
use cda_domain::value_objects::{ChangeReport, Language, SubmissionStatus};

#[test]
fn test_new_project_derives_name_from_stem() {
    let project = Project::new("sample.py", Language::Python, 120);
    assert_eq!(project.name, "sample");
    assert_eq!(project.file_name, "sample.py");
    assert_eq!(project.status, SubmissionStatus::Pending);
    assert_eq!(project.revision, 0);
    assert!(project.artifacts.is_none());
}

#[test]
fn test_begin_revision_bumps_counter_and_marks_running() {
    let mut project = Project::new("sample.py", Language::Python, 120);
    assert_eq!(project.begin_revision(140), 1);
    assert_eq!(project.status, SubmissionStatus::Running);
    assert_eq!(project.begin_revision(160), 2);
    assert_eq!(project.file_size, 160);
}

#[test]
fn test_complete_revision_commits_outcome() {
    let mut project = Project::new("sample.py", Language::Python, 120);
    project.begin_revision(120);

    let mut artifacts = DocumentationArtifactSet::default();
    artifacts.analysis = Some("## Structure".to_string());
    project.complete_revision(
        SubmissionStatus::PartiallyCompleted,
        artifacts,
        ChangeReport::baseline(),
    );

    assert_eq!(project.status, SubmissionStatus::PartiallyCompleted);
    assert!(project.artifacts.is_some());
    assert!(project.last_change.as_ref().is_some_and(|c| c.baseline));
}

#[test]
fn test_fail_revision_keeps_prior_artifacts() {
    let mut project = Project::new("sample.py", Language::Python, 120);
    project.begin_revision(120);
    let mut artifacts = DocumentationArtifactSet::default();
    artifacts.analysis = Some("## Structure".to_string());
    project.complete_revision(
        SubmissionStatus::Completed,
        artifacts,
        ChangeReport::baseline(),
    );

    project.begin_revision(130);
    project.fail_revision(ChangeReport::from_changes(Vec::new(), Vec::new(), Vec::new()));

    assert_eq!(project.status, SubmissionStatus::Failed);
    assert_eq!(project.revision, 2);
    // Artifacts from the last successful run remain available
    assert!(project.artifacts.as_ref().is_some_and(|a| a.analysis.is_some()));
}

#[test]
fn test_summary_reflects_current_state() {
    let mut project = Project::new("widget.ts", Language::TypeScript, 300);
    project.begin_revision(300);
    let summary = project.summary();
    assert_eq!(summary.id, project.id);
    assert_eq!(summary.revision, 1);
    assert_eq!(summary.language, Language::TypeScript);
}
