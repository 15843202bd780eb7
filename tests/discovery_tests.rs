mod common;

use pretty_assertions::assert_eq;
use serde_json::json;

use awstopo::discover_tasks;
use common::MockQueries;

#[tokio::test]
async fn test_flattens_tasks_across_clusters() {
    let queries = MockQueries::new().with_clusters(vec![
        ("cluster-a", vec!["task-1", "task-2"]),
        ("cluster-b", vec!["task-3"]),
    ]);

    let tasks = discover_tasks(&queries).await.unwrap();

    assert_eq!(
        tasks,
        vec![
            json!({"TaskArn": "task-1", "ClusterArn": "cluster-a"}),
            json!({"TaskArn": "task-2", "ClusterArn": "cluster-a"}),
            json!({"TaskArn": "task-3", "ClusterArn": "cluster-b"}),
        ]
    );
}

#[tokio::test]
async fn test_cluster_without_tasks_skips_the_describe_call() {
    let queries = MockQueries::new().with_clusters(vec![
        ("cluster-idle", vec![]),
        ("cluster-busy", vec!["task-1", "task-2"]),
    ]);

    let tasks = discover_tasks(&queries).await.unwrap();

    assert_eq!(tasks.len(), 2);
    assert!(tasks
        .iter()
        .all(|task| task["ClusterArn"] == "cluster-busy"));

    let calls = queries.describe_calls.lock().unwrap();
    assert_eq!(calls.len(), 1, "only the busy cluster may be described");
    assert_eq!(calls[0].0, "cluster-busy");
    assert!(
        calls.iter().all(|(_, arns)| !arns.is_empty()),
        "a describe call was issued with an empty task list"
    );
}

#[tokio::test]
async fn test_no_clusters_yields_no_tasks_and_no_describe_calls() {
    let queries = MockQueries::new().with_clusters(vec![]);

    let tasks = discover_tasks(&queries).await.unwrap();

    assert!(tasks.is_empty());
    assert!(queries.describe_calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_task_ids_never_cross_between_clusters() {
    let queries = MockQueries::new().with_clusters(vec![
        ("cluster-a", vec!["task-1", "task-2"]),
        ("cluster-b", vec!["task-3"]),
    ]);

    discover_tasks(&queries).await.unwrap();

    let mut calls = queries.describe_calls.lock().unwrap().clone();
    calls.sort();

    assert_eq!(
        calls,
        vec![
            (
                "cluster-a".to_string(),
                vec!["task-1".to_string(), "task-2".to_string()]
            ),
            ("cluster-b".to_string(), vec!["task-3".to_string()]),
        ]
    );
}

#[tokio::test]
async fn test_cluster_listing_failure_fails_discovery() {
    let queries = MockQueries::new().failing("clusters", "listing refused");

    let err = discover_tasks(&queries).await.unwrap_err();

    assert!(format!("{:#}", err).contains("listing refused"));
}

#[tokio::test]
async fn test_per_cluster_task_listing_failure_fails_discovery() {
    let queries = MockQueries::new()
        .with_clusters(vec![("cluster-a", vec!["task-1"]), ("cluster-b", vec![])])
        .failing("tasks", "throttled");

    let err = discover_tasks(&queries).await.unwrap_err();

    assert!(format!("{:#}", err).contains("throttled"));
}

#[tokio::test]
async fn test_describe_failure_fails_discovery() {
    let queries = MockQueries::new()
        .with_clusters(vec![("cluster-a", vec!["task-1"])])
        .failing("describe_tasks", "access denied");

    let err = discover_tasks(&queries).await.unwrap_err();

    assert!(format!("{:#}", err).contains("access denied"));
}
