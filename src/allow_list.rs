use std::net::IpAddr;

use ipnetwork::IpNetwork;
use log::{debug, warn};

use crate::utils::parse_cidr;


/// The networks whose members are exempt from the maintenance page.
#[derive(Clone, Debug, Default)]
pub struct AllowList {
    networks: Vec<IpNetwork>,
}

fn contains(network: &IpNetwork, ip: IpAddr) -> bool {
    if network.contains(ip) {
        return true;
    }
    match ip {
        IpAddr::V6(ipv6) => ipv6
            .to_ipv4_mapped()
            .is_some_and(|ipv4| network.contains(IpAddr::V4(ipv4))),
        IpAddr::V4(_) => false,
    }
}

impl AllowList {
    /// Parse the configured CIDR ranges. Malformed entries are logged and skipped.
    pub fn parse(entries: &[String]) -> AllowList {
        let networks = entries
            .iter()
            .filter_map(|entry| match parse_cidr(entry) {
                Some(network) => Some(network),
                None => {
                    warn!("Could not parse allowed IP range '{}'. Skipping it.", entry);
                    None
                }
            })
            .collect();
        AllowList { networks }
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    /// Check if a client should be shown the maintenance page.
    /// # Arguments
    /// * `address` - The resolved client address.
    /// # Returns
    /// * `false` if the address is inside one of the ranges, `true` otherwise.
    ///   An empty list or an unparsable address always yields `true`.
    pub fn is_ignored(&self, address: &str) -> bool {
        if self.networks.is_empty() {
            return true;
        }

        let Ok(ip) = address.parse::<IpAddr>() else {
            debug!("Client address '{}' is not an IP. Not allowed.", address);
            return true;
        };

        match self.networks.iter().find(|network| contains(network, ip)) {
            Some(network) => {
                debug!("Client {} is allowed by {}.", ip, network);
                false
            }
            None => {
                debug!("Client {} is not allowed.", ip);
                true
            }
        }
    }
}
