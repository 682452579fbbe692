use router::{configs::settings::Settings, logger};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let conf = Settings::new()
        .map_err(|error| std::io::Error::new(std::io::ErrorKind::InvalidInput, error))?;
    logger::setup();

    router::start_server(conf).await
}
