#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tablemap::run().await
}
