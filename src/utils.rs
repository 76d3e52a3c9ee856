use std::net::IpAddr;

use ipnetwork::IpNetwork;


/// Parse a CIDR range like `10.0.0.0/8` or `2001:db8::/32`.
/// # Arguments
/// * `cidr` - The range. The `/prefix` part is mandatory.
/// # Returns
/// * The network or `None` if the address or prefix is invalid.
pub fn parse_cidr(cidr: &str) -> Option<IpNetwork> {
    let (ip, prefix) = cidr.split_once('/')?;
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let ip = ip.parse::<IpAddr>().ok()?;
    let prefix = prefix.parse::<u8>().ok()?;
    IpNetwork::new(ip, prefix).ok()
}
