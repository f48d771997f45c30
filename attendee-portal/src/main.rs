use actix_files::Files;
use actix_session::{config::PersistentSession, storage::CookieSessionStore, SessionMiddleware};
use actix_web::{
    cookie::{self, time::Duration, Key},
    middleware, web, App, HttpServer,
};
use attendee_portal::{
    api, backend::UnauthorizedApi, config::PortalConfig, pages::Pages, PortalState,
};
use common::{error::AmResult, logging::init_logging};

#[actix_web::main]
async fn main() -> AmResult<()> {
    let config = PortalConfig::from_env()?;
    init_logging(&config.log_config)?;

    let client = reqwest::Client::new();
    let state = web::Data::new(PortalState::new(UnauthorizedApi::new(
        client,
        config.api_url.as_str(),
    )));
    let secret_key = Key::from(config.secret_key.as_bytes());
    let session_ttl = Duration::days(config.session_days);
    let assets_dir = config.assets_dir.clone();

    log::info!(
        "Starting attendee portal on {} against {}",
        config.address,
        state.api.url()
    );
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_http_only(true)
                    .cookie_same_site(cookie::SameSite::Strict)
                    .session_lifecycle(PersistentSession::default().session_ttl(session_ttl))
                    .build(),
            )
            .add_pages()
            .service(api::service())
            .service(Files::new("/assets", &assets_dir))
    })
    .bind(&config.address)?
    .run()
    .await?;
    Ok(())
}
