/// Ganache instance the NodeList contract is deployed to for staging.
pub const STAGING_RPC_URL: &str = "https://ganache.staging.dev.tor.us";
pub const LOCAL_RPC_URL: &str = "http://localhost:8545";

pub const DEFAULT_NETWORK: &str = "staging";

pub const KNOWN_NETWORKS: [(&str, &str); 2] = [("staging", STAGING_RPC_URL), ("local", LOCAL_RPC_URL)];

pub fn network_rpc_url(name: &str) -> Option<&'static str> {
    KNOWN_NETWORKS
        .iter()
        .find(|(network, _)| network.eq_ignore_ascii_case(name))
        .map(|(_, url)| *url)
}
