//! Built-in catalog of curated archaeological sites
//!
//! The front end ships a small compiled-in catalog backing the
//! `/api/sites` endpoints. There is no persistence; filtering and stats
//! are computed over the static table per request.

use serde::Serialize;
use std::collections::BTreeMap;

/// One curated site entry
#[derive(Debug, Clone, Serialize)]
pub struct Site {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub category: &'static str,
    pub status: &'static str,
    pub image_url: &'static str,
}

/// Summary statistics over the catalog
#[derive(Debug, Serialize)]
pub struct CatalogStats {
    pub total_sites: usize,
    pub categories: BTreeMap<&'static str, usize>,
    pub active_sites: usize,
}

const STOCK_IMAGE: &str = "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400";

pub const SITES: &[Site] = &[
    Site {
        id: 1,
        name: "Barhut",
        description: "Buddhist stupa with sculptures",
        latitude: 24.0994,
        longitude: 80.7564,
        category: "Classical",
        status: "active",
        image_url: STOCK_IMAGE,
    },
    Site {
        id: 2,
        name: "Uxmal",
        description: "Ancient Maya city",
        latitude: 20.3597,
        longitude: -89.7714,
        category: "Classical",
        status: "active",
        image_url: "https://images.unsplash.com/photo-1544966503-7cc75cbd3b89?w=400",
    },
    Site {
        id: 3,
        name: "Easter Island Moai",
        description: "Monolithic statues",
        latitude: -27.1127,
        longitude: -109.3497,
        category: "Medieval",
        status: "active",
        image_url: STOCK_IMAGE,
    },
    Site {
        id: 4,
        name: "Chaco Canyon",
        description: "Ancestral Puebloan center",
        latitude: 36.06,
        longitude: -107.96,
        category: "Medieval",
        status: "active",
        image_url: STOCK_IMAGE,
    },
    Site {
        id: 5,
        name: "Sannati",
        description: "Buddhist site with stupas",
        latitude: 17.06,
        longitude: 77.08,
        category: "Classical",
        status: "active",
        image_url: STOCK_IMAGE,
    },
    Site {
        id: 6,
        name: "Olduvai Gorge",
        description: "Cradle of mankind",
        latitude: -2.99,
        longitude: 35.35,
        category: "Paleolithic",
        status: "active",
        image_url: STOCK_IMAGE,
    },
    Site {
        id: 7,
        name: "Nagarjunakonda",
        description: "Buddhist archaeological site",
        latitude: 16.53,
        longitude: 79.24,
        category: "Classical",
        status: "active",
        image_url: STOCK_IMAGE,
    },
    Site {
        id: 8,
        name: "Dholavira",
        description: "Harappan archaeological site",
        latitude: 23.8886,
        longitude: 70.2167,
        category: "Classical",
        status: "active",
        image_url: STOCK_IMAGE,
    },
    Site {
        id: 9,
        name: "Petra",
        description: "Nabatean rock-cut city",
        latitude: 30.3285,
        longitude: 35.4444,
        category: "Classical",
        status: "active",
        image_url: STOCK_IMAGE,
    },
    Site {
        id: 10,
        name: "Machu Picchu",
        description: "Inca citadel",
        latitude: -13.1631,
        longitude: -72.545,
        category: "Medieval",
        status: "active",
        image_url: STOCK_IMAGE,
    },
];

/// Every catalog entry, unfiltered
pub fn all() -> &'static [Site] {
    SITES
}

/// Lookup by id
pub fn by_id(id: u32) -> Option<&'static Site> {
    SITES.iter().find(|s| s.id == id)
}

/// Filtered view of the catalog
///
/// `category` and `status` match case-insensitively; `search` matches a
/// case-insensitive substring of name or description.
pub fn filtered(
    category: Option<&str>,
    status: Option<&str>,
    search: Option<&str>,
) -> Vec<&'static Site> {
    SITES
        .iter()
        .filter(|s| {
            category
                .map(|c| s.category.eq_ignore_ascii_case(c))
                .unwrap_or(true)
        })
        .filter(|s| {
            status
                .map(|st| s.status.eq_ignore_ascii_case(st))
                .unwrap_or(true)
        })
        .filter(|s| {
            search
                .map(|q| {
                    let q = q.to_lowercase();
                    s.name.to_lowercase().contains(&q)
                        || s.description.to_lowercase().contains(&q)
                })
                .unwrap_or(true)
        })
        .collect()
}

/// Summary statistics over the whole catalog
pub fn stats() -> CatalogStats {
    let mut categories: BTreeMap<&'static str, usize> = BTreeMap::new();
    for site in SITES {
        *categories.entry(site.category).or_insert(0) += 1;
    }

    CatalogStats {
        total_sites: SITES.len(),
        categories,
        active_sites: SITES.iter().filter(|s| s.status == "active").count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_id() {
        assert_eq!(by_id(9).unwrap().name, "Petra");
        assert!(by_id(999).is_none());
    }

    #[test]
    fn category_filter_is_case_insensitive() {
        let classical = filtered(Some("classical"), None, None);
        assert!(!classical.is_empty());
        assert!(classical.iter().all(|s| s.category == "Classical"));
    }

    #[test]
    fn search_matches_name_and_description() {
        let by_name = filtered(None, None, Some("petra"));
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Petra");

        let by_description = filtered(None, None, Some("maya"));
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].name, "Uxmal");
    }

    #[test]
    fn filters_compose() {
        let sites = filtered(Some("Medieval"), Some("active"), Some("inca"));
        assert_eq!(sites.len(), 1);
        assert_eq!(sites[0].name, "Machu Picchu");
    }

    #[test]
    fn stats_count_per_category() {
        let stats = stats();
        assert_eq!(stats.total_sites, SITES.len());
        assert_eq!(stats.categories["Classical"], 6);
        assert_eq!(stats.categories["Medieval"], 3);
        assert_eq!(stats.categories["Paleolithic"], 1);
        assert_eq!(stats.active_sites, SITES.len());
    }
}
