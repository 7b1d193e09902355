//! Local network identity.

use std::io;
use std::net::{IpAddr, Ipv4Addr, UdpSocket};

/// Discover this host's non-loopback IPv4 address.
///
/// Binds a UDP socket and asks the OS which source address it would pick
/// for an outbound datagram; nothing is actually sent. Returns `Ok(None)`
/// when the host has no routable IPv4 address, `Err` only when socket
/// creation itself fails.
///
/// Caveat: the lookup keys on the default route. A host that carries a
/// non-loopback IPv4 but has no route to the probe address also reports
/// `None`, where a full interface enumeration would have returned the
/// address. Callers render `None` as an empty string either way.
pub fn local_ipv4() -> io::Result<Option<Ipv4Addr>> {
    let socket = UdpSocket::bind("0.0.0.0:0")?;
    if socket.connect("8.8.8.8:80").is_err() {
        // No route; the host simply has no usable address.
        return Ok(None);
    }
    let addr = socket.local_addr()?;
    match addr.ip() {
        IpAddr::V4(ip) if !ip.is_loopback() && !ip.is_unspecified() => Ok(Some(ip)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_ipv4_is_usable() {
        // Environment-dependent: a host without a routable address yields
        // None, which renders as an empty string upstream.
        let result = local_ipv4().unwrap();
        if let Some(ip) = result {
            assert!(!ip.is_loopback());
            assert!(!ip.is_unspecified());
        }
    }
}
