use crate::catalog::FulfillmentCenter;

/// The set of fulfillment centers a delivery round must visit, packed into a
/// bitmask over the three centers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CenterSet(u8);

impl CenterSet {
    pub const EMPTY: CenterSet = CenterSet(0);

    pub fn insert(&mut self, center: FulfillmentCenter) {
        self.0 |= 1 << center as u8;
    }

    pub fn contains(&self, center: FulfillmentCenter) -> bool {
        self.0 & (1 << center as u8) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = FulfillmentCenter> + '_ {
        FulfillmentCenter::ALL
            .into_iter()
            .filter(|center| self.contains(*center))
    }
}

impl FromIterator<FulfillmentCenter> for CenterSet {
    fn from_iter<I: IntoIterator<Item = FulfillmentCenter>>(iter: I) -> Self {
        let mut set = CenterSet::EMPTY;
        for center in iter {
            set.insert(center);
        }
        set
    }
}

/// Fixed distances between the depot (L1) and the three fulfillment centers.
/// The graph is complete on the four nodes, so every nonempty center subset
/// has a precomputed cheapest round trip and no path search is needed.
pub struct DistanceTable {
    depot_legs: [f64; 3],
    center_links: [f64; 3],
}

impl DistanceTable {
    pub fn new(depot_legs: [f64; 3], center_links: [f64; 3]) -> Self {
        DistanceTable {
            depot_legs,
            center_links,
        }
    }

    /// The distances the business runs on: depot legs for C1/C2/C3, then the
    /// C1-C2, C2-C3, and C1-C3 inter-center links.
    pub fn standard() -> Self {
        DistanceTable::new([3.0, 2.5, 2.0], [4.0, 3.0, 5.0])
    }

    pub fn depot_leg(&self, center: FulfillmentCenter) -> f64 {
        self.depot_legs[center as usize]
    }

    pub fn center_link(&self, a: FulfillmentCenter, b: FulfillmentCenter) -> f64 {
        use FulfillmentCenter::*;

        let index = match (a, b) {
            (C1, C2) | (C2, C1) => 0,
            (C2, C3) | (C3, C2) => 1,
            (C1, C3) | (C3, C1) => 2,
            _ => return 0.0,
        };

        self.center_links[index]
    }

    /// Cheapest fixed round trip from the depot touching every center in the
    /// set. An empty set is a degenerate order and travels nowhere.
    pub fn round_trip(&self, centers: CenterSet) -> f64 {
        use FulfillmentCenter::*;

        let mut visited = centers.iter();

        match centers.len() {
            0 => 0.0,
            1 => {
                let only = visited.next().unwrap();
                2.0 * self.depot_leg(only)
            }
            2 => {
                let first = visited.next().unwrap();
                let second = visited.next().unwrap();
                self.depot_leg(first) + self.center_link(first, second) + self.depot_leg(second)
            }
            _ => {
                // Chain C1 -> C2 -> C3 and close the loop through the depot.
                self.depot_leg(C1)
                    + self.center_link(C1, C2)
                    + self.center_link(C2, C3)
                    + self.depot_leg(C3)
            }
        }
    }
}
