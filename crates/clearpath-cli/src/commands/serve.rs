//! Server command implementation

use anyhow::Result;

use super::Session;

pub async fn cmd_serve(session: &Session, host: Option<&str>, port: Option<u16>) -> Result<()> {
    let settings = &session.config.server;
    let host = host.unwrap_or(&settings.host);
    let port = port.unwrap_or(settings.port);

    println!("🚀 Starting Clearpath web server...");
    println!("   Listening: http://{}:{}", host, port);
    println!(
        "   Plan defaults: {} with {:.2} extra",
        session.config.plan.strategy, session.config.plan.extra_payment
    );
    if settings.allowed_origins.is_empty() {
        println!("   CORS: same-origin only");
    } else {
        println!("   CORS: {}", settings.allowed_origins.join(", "));
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let config = clearpath_server::ServerConfig {
        allowed_origins: settings.allowed_origins.clone(),
        plan: session.config.plan.clone(),
    };

    clearpath_server::serve_with_config(host, port, config).await?;

    Ok(())
}
