use std::net::TcpListener;
use std::sync::Arc;

use actix_web::{dev::Server, web, web::Data, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::{
    configuration::{ContactSettings, Settings},
    email_client::{EmailClient, EmailSender},
    routes::*,
};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let email_client = EmailClient::new(
            configuration.email_client.base_url.clone(),
            configuration.email_client.sender_email.clone(),
            configuration.email_client.authorization_token.clone(),
            configuration.email_client.timeout(),
        )?;

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, Arc::new(email_client), configuration.contact)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    email_sender: Arc<dyn EmailSender>,
    contact_settings: ContactSettings,
) -> Result<Server, std::io::Error> {
    let email_sender: Data<dyn EmailSender> = Data::from(email_sender);
    let contact_settings = Data::new(contact_settings);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .service(health_check)
            .route("/api/contact", web::post().to(contact))
            .app_data(email_sender.clone())
            .app_data(contact_settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
