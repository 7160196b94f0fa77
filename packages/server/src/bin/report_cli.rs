//! CLI for running reports against the appeals database
//!
//! Every command prints its report as pretty JSON on stdout.

use anyhow::{Context, Result};
use appeals_core::common::{DateRange, DirectionId, MemberId};
use appeals_core::config::Config;
use appeals_core::domains::analytics::{
    appeal_summary, appeals_by_school, content_analytics, detailed_appeal_stats,
    user_performance_stats,
};
use appeals_core::domains::schools::{normalize_school_name, SCHOOLS};
use appeals_core::kernel::ServerDeps;
use chrono::{NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use sqlx::PgPool;

#[derive(Parser)]
#[command(name = "report_cli")]
#[command(about = "Appeal and content reports for the admin backend")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Period {
    /// First day, inclusive (YYYY-MM-DD)
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Last day, inclusive (YYYY-MM-DD)
    #[arg(long)]
    end_date: Option<NaiveDate>,
}

impl Period {
    fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Headline counters with today's activity
    Summary,

    /// Detailed appeal statistics
    Detailed {
        #[command(flatten)]
        period: Period,
        #[arg(long)]
        direction_id: Option<DirectionId>,
    },

    /// Workload of one staff member
    User {
        user_id: MemberId,
        #[command(flatten)]
        period: Period,
    },

    /// Content counts by type and status
    Content {
        #[command(flatten)]
        period: Period,
    },

    /// Appeals grouped by school
    Schools {
        #[command(flatten)]
        period: Period,
        #[arg(long)]
        school_code: Option<String>,
        /// Print the known schools instead of a report
        #[arg(long)]
        list: bool,
    },

    /// Map a free-text institute to a school code
    Normalize { name: String },
}

#[derive(Serialize)]
struct NormalizeOutput<'a> {
    input: &'a str,
    code: Option<String>,
}

fn output<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn get_deps() -> Result<ServerDeps> {
    let config = Config::from_env()?;
    let pool = PgPool::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    Ok(ServerDeps::from_pool(pool))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let today = Utc::now().date_naive();

    match cli.command {
        Commands::Summary => {
            let deps = get_deps().await?;
            output(&appeal_summary(today, &deps).await?)
        }
        Commands::Detailed {
            period,
            direction_id,
        } => {
            let deps = get_deps().await?;
            output(&detailed_appeal_stats(period.range(), direction_id, today, &deps).await?)
        }
        Commands::User { user_id, period } => {
            let deps = get_deps().await?;
            output(&user_performance_stats(user_id, period.range(), &deps).await?)
        }
        Commands::Content { period } => {
            let deps = get_deps().await?;
            output(&content_analytics(period.range(), &deps).await?)
        }
        Commands::Schools { list: true, .. } => output(&SCHOOLS),
        Commands::Schools {
            period,
            school_code,
            ..
        } => {
            let deps = get_deps().await?;
            output(&appeals_by_school(period.range(), school_code.as_deref(), &deps).await?)
        }
        Commands::Normalize { name } => output(&NormalizeOutput {
            code: normalize_school_name(&name),
            input: &name,
        }),
    }
}
