//! Basic example demonstrating the LiquidPlanner API client.
//!
//! Run with:
//! ```
//! LIQUIDPLANNER_WORKSPACE_ID=12345 \
//! LIQUIDPLANNER_EMAIL=you@example.com \
//! LIQUIDPLANNER_PASSWORD=yourLPpassword \
//!     cargo run --example basic -- <parent_id> [activity_id]
//! ```

use chrono::{Duration, Local};
use liquidplanner::{
    Create, LiquidPlannerClient, List, Member, Query, RemoteError, Task, TaskParams,
    TrackTimeParams,
};

#[tokio::main]
async fn main() -> liquidplanner::Result<()> {
    // Initialize tracing so throttle diagnostics are visible
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let parent_id: Option<u64> = args.next().and_then(|a| a.parse().ok());
    let activity_id: Option<u64> = args.next().and_then(|a| a.parse().ok());

    println!("Creating LiquidPlanner client...");
    let client = LiquidPlannerClient::from_env()?;
    client.set_debug(true);
    println!("Workspace: {}", client.workspace_url());

    let account = client.account().await?;
    println!("Signed in as: {}", account["user_name"]);

    // Tasks from the last two weeks that are still open
    println!("\n--- Open tasks (last two weeks) ---");
    let today = Local::now().date_naive();
    let query = Query::new()
        .from_date(today - Duration::weeks(2))
        .to_date(today)
        .limit(10)
        .filter("is_done is false");
    let tasks = Task::list(&client, &query).await?;
    for task in &tasks {
        println!("  - {} ({})", task.name.as_deref().unwrap_or("<unnamed>"), task.id);
    }

    println!("\n--- Members ---");
    for member in Member::list_all(&client).await? {
        println!("  - {}", member.display_name().unwrap_or_else(|| member.id.to_string()));
    }

    let Some(parent_id) = parent_id else {
        println!("\nPass a project or folder ID to create a task.");
        return Ok(());
    };

    println!("\n--- Creating a task ---");
    let params = TaskParams {
        name: Some("My LP ticket".to_string()),
        parent_id: Some(parent_id),
        description: Some("Description of my LP ticket".to_string()),
        ..Default::default()
    };
    let task = Task::create(&client, &params).await?;
    println!("ID of the new task: {}", task.id);

    if let Some(activity_id) = activity_id {
        let tracked = task
            .track_time(
                &client,
                &TrackTimeParams {
                    work: Some(2.0),
                    activity_id: Some(activity_id),
                    ..Default::default()
                },
            )
            .await?;
        println!("Logged work, total now {:?}h", tracked.work);
    }

    let raw = task.delete(&client).await?;
    let body = serde_json::from_str::<serde_json::Value>(&raw).ok();
    match body.as_ref().and_then(RemoteError::from_value) {
        Some(remote) => println!("Delete failed: {}", remote.error),
        None => println!("Deleted."),
    }

    println!("\nDone!");
    Ok(())
}
