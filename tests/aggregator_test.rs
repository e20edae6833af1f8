use course_runtime::error::RuntimeError;
use course_runtime::runtime::aggregator::{aggregate, estimate, summarize};
use course_runtime::runtime::models::Completion;

const LABELS: [&str; 4] = ["Intro (6:28)", "Setup [12:00]", "Quiz", "Wrap-up 1h 2m"];

#[test]
fn test_course_page_end_to_end() {
    let report = aggregate(LABELS, Completion::new(25)).unwrap();
    let summary = &report.summary;

    assert_eq!(summary.video_count, 4);
    assert_eq!(summary.videos_with_time, 3);
    assert_eq!(summary.total_seconds, 388 + 720 + 3720);
    assert_eq!(summary.formatted_time, "1h 20m 28s");
    assert_eq!(summary.compact_time, "1h 20m");
    assert_eq!(report.progress.remaining_seconds, 3621);
    assert_eq!(report.progress.remaining_percent, 75);
    assert_eq!(report.progress.remaining_time, "1h 0m");
    assert_eq!(report.coverage_percent, 75);

    let titles: Vec<&str> = summary.entries.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Intro", "Setup", "Quiz", "Wrap-up"]);
    assert_eq!(summary.entries[2].duration, None);
}

#[test]
fn test_no_durations_is_no_data() {
    let result = aggregate(["Quiz only"], Completion::new(10));
    assert_eq!(result, Err(RuntimeError::NoDurations { video_count: 1 }));
}

#[test]
fn test_no_items_is_no_data() {
    let result = aggregate(Vec::<String>::new(), Completion::new(10));
    assert_eq!(result, Err(RuntimeError::NoItems));
}

#[test]
fn test_idempotent() {
    let first = aggregate(LABELS, Completion::new(40)).unwrap();
    let second = aggregate(LABELS, Completion::new(40)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_total_is_sum_of_entries() {
    let labels = [
        "Welcome",
        "Networking 101 (10:05)",
        "  Deep   dive\n [1:02:03] ",
        "Lab 2m 30s",
        "Reading list",
        "Recap 45 min",
        "Exam [0:00]",
    ];
    let summary = summarize(labels);
    let sum: u64 = summary.entries.iter().map(|e| e.seconds).sum();

    assert_eq!(summary.total_seconds, sum);
    assert_eq!(summary.total_seconds, 605 + 3723 + 150 + 2700);
    assert_eq!(summary.video_count, 7);
    assert_eq!(summary.videos_with_time, 4);
    assert_eq!(summary.items_without_time(), 3);
}

#[test]
fn test_remaining_half_way() {
    let summary = summarize(["Long lecture (1:00:00)"]);
    assert_eq!(summary.total_seconds, 3600);
    assert_eq!(estimate(&summary, Completion::new(50)).remaining_seconds, 1800);
}

#[test]
fn test_remaining_with_unknown_or_invalid_progress() {
    let summary = summarize(["Long lecture (1:00:00)"]);
    assert_eq!(estimate(&summary, Completion::parse("??")).remaining_seconds, 3600);
    assert_eq!(estimate(&summary, Completion::new(-20)).remaining_seconds, 3600);
    assert_eq!(estimate(&summary, Completion::new(150)).remaining_seconds, 0);
}

#[test]
fn test_coverage_seventy_percent() {
    let mut labels: Vec<String> = (1..=7).map(|i| format!("Lesson {} ({}:00)", i, i)).collect();
    labels.extend((1..=3).map(|i| format!("Quiz {}", i)));

    let report = aggregate(&labels, Completion::default()).unwrap();
    assert_eq!(report.summary.video_count, 10);
    assert_eq!(report.summary.videos_with_time, 7);
    assert_eq!(report.coverage_percent, 70);
}
