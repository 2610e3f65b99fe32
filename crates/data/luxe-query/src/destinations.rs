use luxe_core::Destination;

use crate::Catalog;

/// Region tab that applies no filter
pub const ALL_REGIONS: &str = "All";

fn matches_query(destination: &Destination, term: &str) -> bool {
    destination.name.to_lowercase().contains(term)
        || destination.country.to_lowercase().contains(term)
        || destination.region.to_lowercase().contains(term)
        || destination
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(term))
}

impl Catalog {
    pub fn destinations(&self) -> &[Destination] {
        self.store().destinations()
    }

    pub fn destination(&self, id: &str) -> Option<&Destination> {
        self.store().destinations().iter().find(|d| d.id == id)
    }

    pub fn destination_by_slug(&self, slug: &str) -> Option<&Destination> {
        self.store().destinations().iter().find(|d| d.slug == slug)
    }

    /// Case-insensitive substring over name, country, region and tags.
    pub fn search_destinations(&self, query: &str) -> Vec<&Destination> {
        self.find_destinations(query, None)
    }

    /// Exact region match; "All" is a tab label, not a region.
    pub fn destinations_by_region(&self, region: &str) -> Vec<&Destination> {
        self.store()
            .destinations()
            .iter()
            .filter(|d| d.region == region)
            .collect()
    }

    /// Text search composed with an exact region filter. An empty query and
    /// a `None` or "All" region both impose no constraint.
    pub fn find_destinations(&self, query: &str, region: Option<&str>) -> Vec<&Destination> {
        let term = query.trim().to_lowercase();
        let region = region.filter(|r| !r.is_empty() && *r != ALL_REGIONS);

        self.store()
            .destinations()
            .iter()
            .filter(|d| region.map_or(true, |r| d.region == r))
            .filter(|d| term.is_empty() || matches_query(d, &term))
            .collect()
    }

    /// Distinct regions in fixture order
    pub fn regions(&self) -> Vec<&str> {
        let mut regions: Vec<&str> = Vec::new();
        for destination in self.store().destinations() {
            if !regions.contains(&destination.region.as_str()) {
                regions.push(&destination.region);
            }
        }
        regions
    }

    /// Top `limit` destinations by number of listed hotels
    pub fn popular_destinations(&self, limit: usize) -> Vec<&Destination> {
        let mut destinations: Vec<&Destination> = self.store().destinations().iter().collect();
        destinations.sort_by(|a, b| b.hotel_count().cmp(&a.hotel_count()));
        destinations.truncate(limit);
        destinations
    }
}
