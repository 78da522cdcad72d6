//! Shared networking constants and helpers used by client and server.

/// HTTP port the quote service listens on by default.
pub const SERVICE_PORT: u16 = 8080;
/// Path serving the current quote.
pub const QUOTE_PATH: &str = "/cotacao";
/// Upstream USD-BRL price feed.
pub const UPSTREAM_URL: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";
/// Default SQLite database file used by the server.
pub const DATABASE_PATH: &str = "./exchange_rate.db";
/// Default append-only file written by the client.
pub const OUTPUT_FILE: &str = "cotacao.txt";

/// Helper to format an IPv4 address with a port like "ip:port".
pub fn addr(ip: &str, port: u16) -> String {
    format!("{}:{}", ip, port)
}

/// Default URL of the quote endpoint on a local service.
pub fn default_quote_url() -> String {
    format!("http://{}{}", addr("localhost", SERVICE_PORT), QUOTE_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_quote_url_points_at_local_service() {
        assert_eq!(default_quote_url(), "http://localhost:8080/cotacao");
    }
}
