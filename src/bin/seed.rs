use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use course_catalog::utils::logger;
use course_catalog::core::CourseStore;
use course_catalog::{Course, MongoStore};
use std::path::PathBuf;
use std::time::Duration;

/// Out-of-band course import. The HTTP contract never creates courses;
/// this tool loads a JSON array of course documents into the store.
#[derive(Debug, Parser)]
#[command(name = "seed")]
#[command(about = "Import course documents into the catalog store")]
struct SeedArgs {
    #[arg(long)]
    file: PathBuf,

    #[arg(long, default_value = "mongodb://localhost:27017")]
    mongo_uri: String,

    #[arg(long, default_value = "courses")]
    database: String,

    #[arg(long, default_value = "courses")]
    collection: String,

    #[arg(long, help = "Drop the collection before importing")]
    drop: bool,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = SeedArgs::parse();
    logger::init_cli_logger(args.verbose);

    match run(&args).await {
        Ok(count) => {
            tracing::info!("✅ Seeded {} courses", count);
            println!(
                "✅ Seeded {} courses into {}.{}",
                count, args.database, args.collection
            );
        }
        Err(e) => {
            tracing::error!("❌ Seed failed: {:#}", e);
            eprintln!("❌ Seed failed: {:#}", e);
            std::process::exit(1);
        }
    }
}

async fn run(args: &SeedArgs) -> anyhow::Result<usize> {
    let raw = std::fs::read_to_string(&args.file)
        .with_context(|| format!("reading seed file {}", args.file.display()))?;
    let mut documents: Vec<serde_json::Value> =
        serde_json::from_str(&raw).context("seed file must contain a JSON array of course objects")?;

    // 缺少建立日期的課程蓋上現在的時間戳
    let now = Utc::now().timestamp();
    for document in &mut documents {
        let object = document
            .as_object_mut()
            .context("every seed entry must be a JSON object")?;
        object
            .entry("date")
            .or_insert_with(|| serde_json::json!(now));
    }

    let courses: Vec<Course> = documents
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<_, _>>()
        .context("seed entry does not match the course schema")?;

    for (index, course) in courses.iter().enumerate() {
        validate_course(index, course)?;
    }

    let store = MongoStore::connect(
        &args.mongo_uri,
        &args.database,
        &args.collection,
        Duration::from_secs(5),
    )
    .await?;

    if args.drop {
        tracing::warn!("Dropping collection '{}' before import", args.collection);
        store.drop_collection().await?;
    }

    let ids = store.insert_courses(courses).await?;
    Ok(ids.len())
}

fn validate_course(index: usize, course: &Course) -> anyhow::Result<()> {
    anyhow::ensure!(
        !course.name.trim().is_empty(),
        "course #{} has an empty name",
        index
    );
    anyhow::ensure!(
        !course.domain.is_empty(),
        "course #{} ({}) has no domain tags; the first tag is the primary domain",
        index,
        course.name
    );
    anyhow::ensure!(
        course.rating.count >= 0,
        "course #{} ({}) has a negative rating count",
        index,
        course.name
    );
    for (ordinal, chapter) in course.chapters.iter().enumerate() {
        anyhow::ensure!(
            chapter.rating.count >= 0,
            "course #{} ({}) chapter {} has a negative rating count",
            index,
            course.name,
            ordinal + 1
        );
    }
    Ok(())
}
