use std::{net::SocketAddr, sync::Arc};

use api::{
    dto::{EmployeeDto, Gender},
    http::{build_router, AppState},
    service::EmployeeService,
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use tokio::net::TcpListener;
use tracing::{info, Level};

mod config;
mod registry;

use config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "employee-service", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Run HTTP server
    Serve {
        #[arg(long, env = "BIND", default_value = "127.0.0.1:8080")]
        bind: String,
    },
    /// Run migrations (up|down|reset)
    Migrate {
        #[arg(long, default_value = "up")]
        action: String,
    },
    /// Insert sample employees
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Cmd::Serve { bind } => {
            let addr: SocketAddr = bind.parse()?;
            let config = AppConfig::load(addr.port())?;
            let db = Arc::new(Database::connect(&config.database_url).await?);
            Migrator::up(db.as_ref(), None).await?;

            let state = AppState {
                employees: EmployeeService::new(db.clone()),
            };
            let app = build_router(state);

            if let Some(registry) = config.registry.clone() {
                registry::spawn(config.service_name.clone(), registry);
            }

            let listener = TcpListener::bind(addr).await?;
            info!("listening on http://{}", addr);
            axum::serve(listener, app.into_make_service())
                .with_graceful_shutdown(shutdown_signal())
                .await?;
            Ok(())
        }
        Cmd::Migrate { action } => {
            let config = AppConfig::load(8080)?;
            let db = Database::connect(&config.database_url).await?;
            match action.as_str() {
                "up" => Migrator::up(&db, None).await?,
                "down" => Migrator::down(&db, None).await?,
                "reset" => Migrator::reset(&db).await?,
                _ => eprintln!("Unknown action: {} (use up|down|reset)", action),
            }
            Ok(())
        }
        Cmd::Seed => {
            let config = AppConfig::load(8080)?;
            let db = Arc::new(Database::connect(&config.database_url).await?);
            Migrator::up(db.as_ref(), None).await?;
            seed(EmployeeService::new(db)).await?;
            Ok(())
        }
    }
}

async fn seed(employees: EmployeeService) -> anyhow::Result<()> {
    let samples = [
        EmployeeDto {
            id: None,
            name: "Ayesha Rahman".into(),
            father_name: "Kamrul Rahman".into(),
            mother_name: "Nasrin Rahman".into(),
            dob: NaiveDate::from_ymd_opt(1991, 3, 14),
            doj: NaiveDate::from_ymd_opt(2019, 7, 1),
            gender: Gender::Female,
        },
        EmployeeDto {
            id: None,
            name: "Tanvir Hossain".into(),
            father_name: "Jahangir Hossain".into(),
            mother_name: "Salma Hossain".into(),
            dob: NaiveDate::from_ymd_opt(1988, 11, 2),
            doj: NaiveDate::from_ymd_opt(2016, 1, 20),
            gender: Gender::Male,
        },
        EmployeeDto {
            id: None,
            name: "Rafi Chowdhury".into(),
            father_name: "Iqbal Chowdhury".into(),
            mother_name: "Farzana Chowdhury".into(),
            dob: None,
            doj: NaiveDate::from_ymd_opt(2024, 9, 9),
            gender: Gender::Other,
        },
    ];

    for dto in samples {
        let created = employees.create(dto).await?;
        info!(id = created.id, name = %created.name, "seeded employee");
    }
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler")
    };
    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();
    tokio::select! { _ = ctrl_c => {}, _ = terminate => {}, }
}
