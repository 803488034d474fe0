use api_gateway::frameworks::server;

#[tokio::main]
async fn main() {
    server::start().await;
}
