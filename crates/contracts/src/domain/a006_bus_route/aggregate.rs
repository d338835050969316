use crate::shared::catalog::{compare_text, Categorized, Choice, Record, Searchable, Sortable};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportZone {
    Central,
    North,
    Coastal,
    Suburban,
}

impl Choice for TransportZone {
    fn code(self) -> &'static str {
        match self {
            TransportZone::Central => "central",
            TransportZone::North => "north",
            TransportZone::Coastal => "coastal",
            TransportZone::Suburban => "suburban",
        }
    }

    fn label(self) -> &'static str {
        match self {
            TransportZone::Central => "Central",
            TransportZone::North => "North",
            TransportZone::Coastal => "Coastal",
            TransportZone::Suburban => "Suburban",
        }
    }

    fn all() -> &'static [Self] {
        &[
            TransportZone::Central,
            TransportZone::North,
            TransportZone::Coastal,
            TransportZone::Suburban,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusRouteSort {
    Name,
    /// Cheapest first.
    Fee,
}

impl Choice for BusRouteSort {
    fn code(self) -> &'static str {
        match self {
            BusRouteSort::Name => "name",
            BusRouteSort::Fee => "fee",
        }
    }

    fn label(self) -> &'static str {
        match self {
            BusRouteSort::Name => "Route name",
            BusRouteSort::Fee => "Monthly fee",
        }
    }

    fn all() -> &'static [Self] {
        &[BusRouteSort::Name, BusRouteSort::Fee]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusRoute {
    pub id: &'static str,
    pub name: &'static str,
    pub zone: TransportZone,
    pub stops: &'static [&'static str],
    pub morning_departure: &'static str,
    pub afternoon_departure: &'static str,
    pub monthly_fee: u64,
}

impl Record for BusRoute {
    fn id(&self) -> &str {
        self.id
    }
}

impl Searchable for BusRoute {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name];
        fields.extend(self.stops.iter().copied());
        fields
    }
}

impl Categorized for BusRoute {
    type Category = TransportZone;

    fn category(&self) -> TransportZone {
        self.zone
    }
}

impl Sortable for BusRoute {
    type SortKey = BusRouteSort;

    fn compare_by(&self, other: &Self, key: BusRouteSort) -> Ordering {
        match key {
            BusRouteSort::Name => compare_text(self.name, other.name),
            BusRouteSort::Fee => self.monthly_fee.cmp(&other.monthly_fee),
        }
    }
}
