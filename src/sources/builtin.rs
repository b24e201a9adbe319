use crate::models::Listing;
use crate::sources::traits::CatalogSource;
use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

/// The demo catalog compiled into the binary
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinSource;

impl BuiltinSource {
    pub fn new() -> Self {
        Self
    }

    /// Build the listings synchronously; handy for tests and for callers
    /// without a runtime
    pub fn listings() -> Vec<Listing> {
        vec![
            listing(
                "1",
                "Modern Oceanfront Villa",
                "Stunning contemporary villa with panoramic ocean views, featuring floor-to-ceiling windows that blend indoor and outdoor living. Private infinity pool, gourmet kitchen, and five luxurious bedroom suites.",
                4_850_000,
                "Malibu, CA",
                (5.0, 6.0, 6200),
                &[
                    "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?q=80&w=2075&auto=format&fit=crop",
                    "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?q=80&w=2070&auto=format&fit=crop",
                    "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?q=80&w=2053&auto=format&fit=crop",
                ],
                &["Oceanfront", "Pool", "Smart Home"],
                true,
                false,
            ),
            listing(
                "2",
                "Elegant Downtown Penthouse",
                "Sophisticated penthouse in the heart of the city with a private rooftop terrace offering 360-degree views. Features include designer finishes, chef's kitchen, and a dedicated home office space.",
                3_200_000,
                "San Francisco, CA",
                (3.0, 3.5, 3100),
                &[
                    "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?q=80&w=2070&auto=format&fit=crop",
                    "https://images.unsplash.com/photo-1484154218962-a197022b5858?q=80&w=2074&auto=format&fit=crop",
                    "https://images.unsplash.com/photo-1560448204-603b3fc33ddc?q=80&w=2070&auto=format&fit=crop",
                ],
                &["Penthouse", "City View", "Doorman"],
                true,
                true,
            ),
            listing(
                "3",
                "Mid-Century Architectural",
                "Iconic mid-century modern home designed by renowned architect. Restored with respect for original details while incorporating contemporary amenities. Wraparound glass walls showcase the lush garden landscape.",
                2_750_000,
                "Palm Springs, CA",
                (4.0, 3.0, 3800),
                &[
                    "https://images.unsplash.com/photo-1518780664697-55e3ad937233?q=80&w=1965&auto=format&fit=crop",
                    "https://images.unsplash.com/photo-1527359443443-84a48aec73d2?q=80&w=2070&auto=format&fit=crop",
                    "https://images.unsplash.com/photo-1523217582562-09d0def993a6?q=80&w=1780&auto=format&fit=crop",
                ],
                &["Mid-Century", "Pool", "Mountain View"],
                false,
                false,
            ),
            listing(
                "4",
                "Country Estate with Vineyard",
                "Spectacular estate on 15 acres with a boutique vineyard. The main residence features timeless design, chef's kitchen, wine cellar, and expansive entertaining spaces that open to terraces overlooking the vineyard.",
                8_900_000,
                "Napa Valley, CA",
                (6.0, 7.0, 8500),
                &[
                    "https://images.unsplash.com/photo-1570129477492-45c003edd2be?q=80&w=2070&auto=format&fit=crop",
                    "https://images.unsplash.com/photo-1604014237800-1c9102c219da?q=80&w=2070&auto=format&fit=crop",
                    "https://images.unsplash.com/photo-1582268611958-ebfd161ef9cf?q=80&w=2070&auto=format&fit=crop",
                ],
                &["Vineyard", "Estate", "Guest House"],
                true,
                false,
            ),
            listing(
                "5",
                "Minimalist Urban Loft",
                "Sophisticated loft in a converted historic warehouse featuring soaring ceilings, original brick walls, and industrial elements. Open concept design with high-end finishes and custom built-ins throughout.",
                1_750_000,
                "New York, NY",
                (2.0, 2.0, 2200),
                &[
                    "https://images.unsplash.com/photo-1560448075-bb485b067938?q=80&w=2070&auto=format&fit=crop",
                    "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?q=80&w=2070&auto=format&fit=crop",
                    "https://images.unsplash.com/photo-1560185007-5f0bb1866cab?q=80&w=2070&auto=format&fit=crop",
                ],
                &["Loft", "Doorman", "Smart Home"],
                false,
                true,
            ),
            listing(
                "6",
                "Waterfront Estate",
                "Private waterfront compound offering the ultimate luxury lifestyle. Custom-built main residence with extraordinary craftsmanship, boathouse, guest cottage, and pristine landscaping with infinity-edge pool overlooking the water.",
                12_500_000,
                "Miami Beach, FL",
                (8.0, 10.0, 11000),
                &[
                    "https://images.unsplash.com/photo-1613977257365-aaae5a9817ff?q=80&w=2070&auto=format&fit=crop",
                    "https://images.unsplash.com/photo-1580587771525-78b9dba3b914?q=80&w=1974&auto=format&fit=crop",
                    "https://images.unsplash.com/photo-1564013799919-ab600027ffc6?q=80&w=2070&auto=format&fit=crop",
                ],
                &["Waterfront", "Estate", "Pool"],
                true,
                false,
            ),
        ]
    }
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    title: &str,
    description: &str,
    price: u64,
    location: &str,
    (beds, baths, sqft): (f64, f64, u32),
    images: &[&str],
    tags: &[&str],
    is_featured: bool,
    is_new_listing: bool,
) -> Listing {
    Listing {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        location: location.to_string(),
        price,
        beds,
        baths,
        sqft,
        images: images.iter().map(|s| s.to_string()).collect(),
        tags: tags.iter().map(|s| s.to_string()).collect(),
        is_featured,
        is_new_listing,
    }
}

#[async_trait]
impl CatalogSource for BuiltinSource {
    async fn load(&self) -> Result<Vec<Listing>> {
        let listings = Self::listings();
        debug!("Built-in catalog has {} listings", listings.len());
        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "builtin"
    }
}
