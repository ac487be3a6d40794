mod animation;
mod components;
mod currency;
mod data;
mod hooks;
mod models;
mod state;
mod toast;
mod utils;
mod views;
mod wallet;

use dioxus::prelude::*;
use toast::{ToastHost, ToastManager};
use views::{
    About, AutoTech, Clients, Contact, Credits, Home, Navbar, PageNotFound, PrintRequests, Shop,
    WhyFynaro,
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/contact")]
        Contact {},
        #[route("/clients")]
        Clients {},
        #[route("/why-fynaro")]
        WhyFynaro {},
        #[nest("/shop")]
            #[route("/")]
            Shop {},
            #[route("/credits")]
            Credits {},
            #[route("/autotech")]
            AutoTech {},
        #[end_nest]
        #[route("/print-requests")]
        PrintRequests {},
    #[end_layout]
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

#[component]
fn App() -> Element {
    use_context_provider(ToastManager::new);

    rsx! {
        document::Title { "Fynaro | Brand, packaging & print studio" }
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
        ToastHost {}
    }
}

#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Overrides the address handed over by the dioxus CLI
    #[arg(long)]
    ip: Option<String>,
    #[arg(long)]
    port: Option<u16>,
}

#[cfg(feature = "server")]
impl Args {
    fn address(&self) -> Result<std::net::SocketAddr, std::net::AddrParseError> {
        let mut address = dioxus_cli_config::fullstack_address_or_localhost();
        if let Some(ip) = &self.ip {
            address.set_ip(ip.parse()?);
        }
        if let Some(port) = self.port {
            address.set_port(port);
        }
        Ok(address)
    }
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(App);
}

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use clap::Parser;
    use tokio::net::TcpListener;

    env_logger::init();

    let args = Args::parse();
    let address = args.address()?;

    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfigBuilder::default(), App)
        .into_make_service();

    let listener = TcpListener::bind(address).await?;
    log::info!("Fynaro site available at http://{}", address);

    axum::serve(listener, router).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    #[test]
    fn test_args_parsing() {
        use super::Args;
        let args = Args::parse_from(vec!["fynaro-web", "--ip", "0.0.0.0", "--port", "8080"]);
        assert_eq!(args.ip.as_deref(), Some("0.0.0.0"));
        assert_eq!(args.port, Some(8080));
    }

    #[test]
    fn test_args_parsing_defaults() {
        use super::Args;
        let args = Args::parse_from(vec!["fynaro-web"]);
        assert!(args.ip.is_none());
        assert!(args.port.is_none());
    }

    #[cfg(feature = "server")]
    #[test]
    fn test_args_address_overrides() {
        use super::Args;
        let args = Args::parse_from(vec!["fynaro-web", "--ip", "10.0.0.2", "--port", "9000"]);
        let address = args.address().unwrap();
        assert_eq!(address.to_string(), "10.0.0.2:9000");

        let bad = Args::parse_from(vec!["fynaro-web", "--ip", "not-an-ip"]);
        assert!(bad.address().is_err());
    }

    #[test]
    fn test_routes_render_to_paths() {
        use super::Route;
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::WhyFynaro {}.to_string(), "/why-fynaro");
        assert_eq!(Route::Credits {}.to_string(), "/shop/credits");
        assert_eq!(Route::AutoTech {}.to_string(), "/shop/autotech");
        assert_eq!(Route::PrintRequests {}.to_string(), "/print-requests");
    }
}
