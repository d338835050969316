use super::aggregate::{BusRoute, TransportZone};
use crate::shared::catalog::Catalog;

pub static BUS_ROUTES: &[BusRoute] = &[
    BusRoute {
        id: "route-1",
        name: "Route 1 - Old Town",
        zone: TransportZone::Central,
        stops: &["Market Square", "Cathedral Street", "Riverside Park"],
        morning_departure: "07:20",
        afternoon_departure: "15:35",
        monthly_fee: 60,
    },
    BusRoute {
        id: "route-2",
        name: "Route 2 - Northgate",
        zone: TransportZone::North,
        stops: &["Northgate Station", "Hillcrest", "Elm Avenue", "Kingsway"],
        morning_departure: "07:05",
        afternoon_departure: "15:35",
        monthly_fee: 85,
    },
    BusRoute {
        id: "route-3",
        name: "Route 3 - Harbour Loop",
        zone: TransportZone::Coastal,
        stops: &["Harbour Beach", "Lighthouse Road", "Marina"],
        morning_departure: "07:15",
        afternoon_departure: "15:40",
        monthly_fee: 70,
    },
    BusRoute {
        id: "route-4",
        name: "Route 4 - Westfield",
        zone: TransportZone::Suburban,
        stops: &["Westfield Mall", "Oak Lane", "Cedar Heights", "Pine Grove", "Maple Court"],
        morning_departure: "06:50",
        afternoon_departure: "15:35",
        monthly_fee: 95,
    },
    BusRoute {
        id: "route-5",
        name: "Route 5 - Eastbrook",
        zone: TransportZone::Suburban,
        stops: &["Eastbrook Library", "Willow Park", "Station Road"],
        morning_departure: "07:00",
        afternoon_departure: "15:45",
        monthly_fee: 90,
    },
    BusRoute {
        id: "route-6",
        name: "Route 6 - Bay View",
        zone: TransportZone::Coastal,
        stops: &["Bay View Terrace", "Sailing Club", "Marina"],
        morning_departure: "07:10",
        afternoon_departure: "15:40",
        monthly_fee: 75,
    },
];

pub fn bus_route_catalog() -> Catalog<'static, BusRoute> {
    Catalog::new(BUS_ROUTES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a006_bus_route::aggregate::BusRouteSort;
    use crate::shared::catalog::{duplicate_ids, QueryFor};

    #[test]
    fn test_ids_unique() {
        assert!(duplicate_ids(BUS_ROUTES).is_empty(), "{:?}", duplicate_ids(BUS_ROUTES));
    }

    #[test]
    fn test_search_by_stop_matches_every_route_serving_it() {
        let query = QueryFor::<BusRoute>::default().with_search("marina");
        let ids: Vec<_> = bus_route_catalog().view(&query).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["route-3", "route-6"]);
    }

    #[test]
    fn test_fee_sort_is_ascending() {
        let query = QueryFor::<BusRoute>::default().with_sort(Some(BusRouteSort::Fee));
        let fees: Vec<_> = bus_route_catalog().view(&query).iter().map(|r| r.monthly_fee).collect();
        assert_eq!(fees, vec![60, 70, 75, 85, 90, 95]);
    }
}
