use geocoding::{Forward, Openstreetmap};
use itertools::Itertools;

use ebw_core::{entities::Address, gateways::geocode::GeoCodingGateway};

/// Address resolution backed by the OSM Nominatim service.
///
/// No API key required. Nominatim asks for at most one request per
/// second, which the case mutation rate stays far below.
#[derive(Default)]
pub struct Osm;

fn address_to_forward_query_string(addr: &Address) -> String {
    let addr_parts = [&addr.street, &addr.zip, &addr.city, &addr.state];
    addr_parts.into_iter().filter_map(|x| x.as_ref()).join(",")
}

impl GeoCodingGateway for Osm {
    fn resolve_address_lat_lng(&self, addr: &Address) -> Option<(f64, f64)> {
        if addr.is_empty() {
            return None;
        }
        let addr_str = address_to_forward_query_string(addr);
        match Openstreetmap::new().forward(&addr_str) {
            Ok(points) => {
                let point = points.first()?;
                debug!("Resolved address location '{}': {:?}", addr_str, point);
                Some((point.y(), point.x()))
            }
            Err(err) => {
                warn!("Failed to resolve address location '{}': {}", addr_str, err);
                None
            }
        }
    }
}
