//! Face Attendance Client CLI
//!
//! Command-line demonstration of the capture-and-submission
//! orchestrator, driven by a mock camera against the configured
//! recognition service.

use face_attendance::{
    capture::MockCamera, config::FileConfig, notify::LogNotifier, orchestrator::Orchestrator,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Face Attendance Client v{}", face_attendance::VERSION);
    info!("This is a demonstration using mock camera input");

    let config = match std::env::var("FACE_ATTENDANCE_CONFIG") {
        Ok(path) => match FileConfig::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config from {}: {}", path, e);
                std::process::exit(1);
            }
        },
        Err(_) => FileConfig::default(),
    };

    info!(base_url = %config.service.base_url, "Using recognition service");

    let mut orchestrator = Orchestrator::new(
        &config,
        Box::new(MockCamera::new()),
        Arc::new(LogNotifier),
    );

    orchestrator.startup();

    if let Err(e) = orchestrator.start_camera() {
        eprintln!("Failed to start camera: {}", e);
        std::process::exit(1);
    }

    let name = std::env::args().nth(1).unwrap_or_else(|| "demo".to_string());
    orchestrator.set_name(&name);

    info!(name = %name, "Running enrollment flow");
    let outcome = orchestrator.register_face().await;
    if outcome.is_success() {
        info!(message = outcome.message(), "Enrollment succeeded");
    } else {
        warn!(message = outcome.message(), "Enrollment failed");
    }

    info!("Running recognition flow");
    let outcome = orchestrator.take_attendance().await;
    if outcome.is_success() {
        info!(names = outcome.message(), "Recognition succeeded");
    } else {
        warn!(message = outcome.message(), "Recognition failed");
    }

    // Give the triggered refresh a moment to land before reading.
    tokio::time::sleep(Duration::from_millis(300)).await;

    let roster = orchestrator.attendance().await;
    println!("Attendance for today ({} entries):", roster.len());
    for record in &roster {
        println!("  {}  {}", record.time, record.name);
    }

    orchestrator.shutdown();
    info!("Done");
}
