use std::net::SocketAddr;

use clap::Parser;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "relay-server", version, about = "Backend relay for the weather app")]
pub struct Cli {
    /// Address and port to listen on.
    #[arg(long, default_value = "0.0.0.0:8000")]
    pub listen: SocketAddr,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_listen_address() {
        let cli = Cli::parse_from(["relay-server"]);
        assert_eq!(cli.listen.port(), 8000);
    }

    #[test]
    fn listen_address_can_be_overridden() {
        let cli = Cli::parse_from(["relay-server", "--listen", "127.0.0.1:9999"]);
        assert_eq!(cli.listen, "127.0.0.1:9999".parse().unwrap());
    }
}
