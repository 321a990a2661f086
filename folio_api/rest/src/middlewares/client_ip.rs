use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::Arc,
};

use axum::{
    extract::{ConnectInfo, Request},
    middleware::{from_fn, Next},
    Router,
};
use tracing::{debug, error, warn};

use crate::RestServerRealIpConfig;

pub fn add<S: Clone + Send + Sync + 'static>(
    real_ip_config: Option<Arc<RestServerRealIpConfig>>,
) -> impl FnOnce(Router<S>) -> Router<S> {
    |router| {
        router.layer(from_fn(move |mut request: Request, next: Next| {
            let client_ip = ClientIp::from_request(&request, real_ip_config.as_deref());
            request.extensions_mut().insert(client_ip);
            next.run(request)
        }))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClientIp(pub IpAddr);

impl ClientIp {
    fn from_request(request: &Request, real_ip_config: Option<&RestServerRealIpConfig>) -> Self {
        // Missing when the router is not served with connect info, as in tests.
        let client_ip = request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED), |ConnectInfo(addr)| {
                addr.ip()
            });

        let Some(RestServerRealIpConfig { header, set_from }) = real_ip_config else {
            return Self(client_ip);
        };

        let header_value = request.headers().get(header);

        if *set_from != client_ip {
            if let Some(header_value) = header_value {
                debug!(%client_ip, ?header_value, "ignoring real ip header value from untrusted source");
            }
            return Self(client_ip);
        }

        let Some(header_value) = header_value else {
            warn!(%client_ip, "real ip header not found");
            return Self(client_ip);
        };

        let Some(real_ip) = header_value
            .to_str()
            .ok()
            .and_then(|real_ip| real_ip.trim().parse().ok())
        else {
            error!(%client_ip, ?header_value, "failed to parse real ip header value");
            return Self(client_ip);
        };

        Self(real_ip)
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;

    use super::*;

    const PROXY: IpAddr = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1));
    const CLIENT: IpAddr = IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7));

    fn real_ip_config() -> RestServerRealIpConfig {
        RestServerRealIpConfig {
            header: "X-Real-Ip".into(),
            set_from: PROXY,
        }
    }

    fn request(peer: IpAddr, real_ip: Option<&str>) -> Request {
        let mut builder = Request::builder().uri("/");
        if let Some(real_ip) = real_ip {
            builder = builder.header("X-Real-Ip", real_ip);
        }
        let mut request = builder.body(Body::empty()).unwrap();
        request
            .extensions_mut()
            .insert(ConnectInfo(SocketAddr::new(peer, 4711)));
        request
    }

    #[test]
    fn peer_address_without_config() {
        let request = request(CLIENT, Some("198.51.100.1"));
        assert_eq!(ClientIp::from_request(&request, None), ClientIp(CLIENT));
    }

    #[test]
    fn header_from_trusted_proxy() {
        let request = request(PROXY, Some("203.0.113.7"));
        assert_eq!(
            ClientIp::from_request(&request, Some(&real_ip_config())),
            ClientIp(CLIENT)
        );
    }

    #[test]
    fn header_from_untrusted_peer_is_ignored() {
        let request = request(CLIENT, Some("198.51.100.1"));
        assert_eq!(
            ClientIp::from_request(&request, Some(&real_ip_config())),
            ClientIp(CLIENT)
        );
    }

    #[test]
    fn invalid_header_falls_back_to_peer() {
        for real_ip in [None, Some("not an ip")] {
            let request = request(PROXY, real_ip);
            assert_eq!(
                ClientIp::from_request(&request, Some(&real_ip_config())),
                ClientIp(PROXY)
            );
        }
    }

    #[test]
    fn missing_connect_info() {
        let request = Request::new(Body::empty());
        assert_eq!(
            ClientIp::from_request(&request, None),
            ClientIp(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
        );
    }
}
