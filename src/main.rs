use std::{path::Path, process};

use meninas_grid::{
    application::{chrome::ChromeService, error::AppError, shell::ShellService},
    config,
    domain::site::PageTitle,
    infra::{error::InfraError, telemetry},
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt()
        .with_max_level(Level::ERROR)
        .with_writer(std::io::stderr)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli().map_err(|err| {
        AppError::from(InfraError::configuration(format!(
            "failed to load configuration: {err}"
        )))
    })?;

    let command = cli_args.command.unwrap_or_default();

    telemetry::init(&settings.logging).map_err(AppError::from)?;

    let shell = ShellService::new(ChromeService::new());

    match command {
        config::Command::Shell(args) => run_shell(&shell, args).await,
        config::Command::Document(args) => run_document(&shell, args).await,
    }
}

async fn run_shell(shell: &ShellService, args: config::ShellArgs) -> Result<(), AppError> {
    let title = PageTitle::from(args.title);
    let html = shell.render_shell(&title)?;
    write_output(args.output.as_deref(), &html).await
}

async fn run_document(shell: &ShellService, args: config::DocumentArgs) -> Result<(), AppError> {
    let title = PageTitle::from(args.title);
    let body = read_body(args.body_file.as_deref()).await?;
    let html = shell.render_document(&title, &body)?;
    write_output(args.output.as_deref(), &html).await
}

async fn read_body(path: Option<&Path>) -> Result<String, AppError> {
    let body = match path {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(InfraError::from)?,
        None => {
            let mut buffer = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buffer)
                .await
                .map_err(InfraError::from)?;
            buffer
        }
    };
    Ok(body)
}

async fn write_output(path: Option<&Path>, html: &str) -> Result<(), AppError> {
    match path {
        Some(path) => {
            tokio::fs::write(path, html.as_bytes())
                .await
                .map_err(InfraError::from)?;
            info!(
                target = "meninas_grid::output",
                path = %path.display(),
                bytes = html.len(),
                "wrote rendered markup"
            );
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout
                .write_all(html.as_bytes())
                .await
                .map_err(InfraError::from)?;
            stdout.flush().await.map_err(InfraError::from)?;
        }
    }
    Ok(())
}
