//! Builtin Jakarta landmark dataset.

use super::{Catalog, Place};
use crate::core::geo::LatLng;
use once_cell::sync::Lazy;

static JAKARTA: Lazy<Catalog> = Lazy::new(|| {
    // The dataset is validated at construction; the literals below satisfy
    // every catalog rule, so this cannot fail at runtime.
    Catalog::new(popular_places()).unwrap_or_else(|_| Catalog { places: Vec::new() })
});

/// The builtin Jakarta catalog.
pub fn jakarta() -> &'static Catalog {
    &JAKARTA
}

fn popular_places() -> Vec<Place> {
    vec![
        Place {
            name: "Monas (National Monument)".to_string(),
            position: LatLng::new(-6.175392, 106.827172),
            description: "The iconic 132m-tall obelisk independence monument featuring an \
                          observation deck and a historical museum."
                .to_string(),
            address: "Gambir, Central Jakarta".to_string(),
            area: "Central Jakarta".to_string(),
            category: "Landmark".to_string(),
            rating: 4.7,
            visitor_count: 1280,
            images: vec![
                "https://upload.wikimedia.org/wikipedia/commons/a/af/Jakarta_Indonesia_Bus-stop-Monumen-Nasional-01.jpg".to_string(),
                "https://upload.wikimedia.org/wikipedia/commons/f/f3/Jakarta_Panorama.jpg".to_string(),
            ],
            video_query: Some("Monas Jakarta walking tour".to_string()),
        },
        Place {
            name: "Kota Tua (Old Town)".to_string(),
            position: LatLng::new(-6.1352, 106.813202),
            description: "Jakarta's historic district showcasing Dutch colonial architecture, \
                          fascinating museums, and the bustling Fatahillah Square."
                .to_string(),
            address: "Pinangsia, West Jakarta".to_string(),
            area: "West Jakarta".to_string(),
            category: "Historic District".to_string(),
            rating: 4.5,
            visitor_count: 980,
            images: vec![
                "https://upload.wikimedia.org/wikipedia/commons/a/a9/Jakarta_Indonesia_Business-in-Kota-Jakarta-01.jpg".to_string(),
                "https://upload.wikimedia.org/wikipedia/commons/8/87/Jakarta_Indonesia_Hawkers-in-Kota-Jakarta-02.jpg".to_string(),
            ],
            video_query: Some("Kota Tua Jakarta vlog".to_string()),
        },
        Place {
            name: "Istiqlal Mosque".to_string(),
            position: LatLng::new(-6.170166, 106.831315),
            description: "The largest mosque in Southeast Asia, renowned for its grand scale \
                          and modern Islamic architectural design."
                .to_string(),
            address: "Gambir, Central Jakarta".to_string(),
            area: "Central Jakarta".to_string(),
            category: "Religious Site".to_string(),
            rating: 4.8,
            visitor_count: 1420,
            images: vec![
                "https://upload.wikimedia.org/wikipedia/commons/2/27/Woman_in_Istiqlal_mosque%2C_Jakarta%2C_Indonesia.jpg".to_string(),
                "https://upload.wikimedia.org/wikipedia/commons/f/f3/Jakarta_Panorama.jpg".to_string(),
            ],
            video_query: Some("Istiqlal Mosque Jakarta tour".to_string()),
        },
        Place {
            name: "Jakarta Cathedral".to_string(),
            position: LatLng::new(-6.16951, 106.8338),
            description: "A stunning Neo-gothic Roman Catholic cathedral situated directly \
                          opposite the Istiqlal Mosque, symbolizing religious harmony."
                .to_string(),
            address: "Pasar Baru, Central Jakarta".to_string(),
            area: "Central Jakarta".to_string(),
            category: "Religious Site".to_string(),
            rating: 4.7,
            visitor_count: 640,
            images: vec![
                "https://upload.wikimedia.org/wikipedia/commons/9/97/Jakarta_Indonesia_Jakarta-Cathedral-07.jpg".to_string(),
                "https://upload.wikimedia.org/wikipedia/commons/f/f3/Jakarta_Panorama.jpg".to_string(),
            ],
            video_query: Some("Jakarta Cathedral walkthrough".to_string()),
        },
        Place {
            name: "Grand Indonesia Mall".to_string(),
            position: LatLng::new(-6.19507, 106.82299),
            description: "A premier, expansive shopping mall complex in Central Jakarta, \
                          offering a wide array of retail, dining, and entertainment options."
                .to_string(),
            address: "MH Thamrin, Central Jakarta".to_string(),
            area: "Central Jakarta".to_string(),
            category: "Shopping".to_string(),
            rating: 4.6,
            visitor_count: 2100,
            images: vec![
                "https://upload.wikimedia.org/wikipedia/commons/4/4d/Kempideli_at_Grand_Indonesia.jpg".to_string(),
                "https://upload.wikimedia.org/wikipedia/commons/4/4b/Yoshinoya_at_Grand_Indonesia.jpg".to_string(),
            ],
            video_query: Some("Grand Indonesia Mall tour".to_string()),
        },
        Place {
            name: "Taman Mini Indonesia Indah (TMII)".to_string(),
            position: LatLng::new(-6.302446, 106.895157),
            description: "A unique culture-based recreational park showcasing the diversity of \
                          Indonesian provinces in detailed miniature pavilions."
                .to_string(),
            address: "East Jakarta".to_string(),
            area: "East Jakarta".to_string(),
            category: "Theme Park".to_string(),
            rating: 4.5,
            visitor_count: 1520,
            images: vec![
                "https://upload.wikimedia.org/wikipedia/commons/a/a7/Caping_Gunung_Restaurant%2C_Taman_Mini_Indonesia_Indah.jpg".to_string(),
                "https://upload.wikimedia.org/wikipedia/commons/e/e2/Saudjana_Viewing_Tower%2C_Taman_Mini_Indonesia_Indah%2C_lower_perspective.jpg".to_string(),
            ],
            video_query: Some("Taman Mini Indonesia Indah highlights".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = jakarta();
        assert_eq!(catalog.len(), 6);
        assert!(catalog.get("Monas (National Monument)").is_some());
        assert!(catalog.places().iter().all(|p| p.visitor_count > 0));
    }
}
