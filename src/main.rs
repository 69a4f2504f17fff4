use std::sync::Arc;
use log::{debug, error, info};

use spinner::{ScriptGenerator, SpinnerConfig};

#[tokio::main]
async fn main()
{   // .env may set RUST_LOG, so load it before the logger
    let dotenv = dotenvy::dotenv();
    env_logger::Builder::from_env(
      env_logger::Env::default().default_filter_or("info")
    ).init();
    if let Err(e) = dotenv
    {   debug!("No .env loaded: {}", e);
    }

    if let Err(e) = run().await
    {   error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), spinner::Error>
{   let config = SpinnerConfig::from_env()?;
    let generator = Arc::new(ScriptGenerator::new(&config));
    let app = spinner::server::router(
      generator,
      &config.allowed_origins
    );

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
      .await
      .map_err(|e| {
        spinner::Error::InvalidConfiguration(
          format!("cannot bind {}: {}", config.bind_addr, e)
        )
      })?;
    info!("Script spinner listening on http://{}", config.bind_addr);

    axum::serve(listener, app)
      .with_graceful_shutdown(async {
        if tokio::signal::ctrl_c().await.is_ok()
        {   info!("Shutting down");
        }
      })
      .await
      .map_err(|e| spinner::Error::Other(e.to_string()))
}
