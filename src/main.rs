// Module declarations
mod builder;
mod cli;
mod config;
mod docs;
mod layout;
mod markdown;
mod server;
mod utils;

#[tokio::main]
async fn main() {
    let code = cli::run().await;
    if code != 0 {
        std::process::exit(code);
    }
}
