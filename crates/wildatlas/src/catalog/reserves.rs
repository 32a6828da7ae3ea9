//! The ten reserve records

use super::types::Reserve;

const RESERVES: [Reserve; 10] = [
    Reserve {
        id: "fiordland_newzealand",
        name: "Fiordland National Park",
        country: "New Zealand",
        latitude: -45.4,
        longitude: 167.2,
        image_ref: "FiordlandNationalPark",
    },
    Reserve {
        id: "greatbarrierreef_australia",
        name: "Great Barrier Reef Marine Park",
        country: "Australia",
        latitude: -18.3,
        longitude: 147.7,
        image_ref: "GreatBarrierReefMarinePark",
    },
    Reserve {
        id: "kruger_southafrica",
        name: "Kruger National Park",
        country: "South Africa",
        latitude: -24.0,
        longitude: 31.5,
        image_ref: "KrugerNationalPark",
    },
    Reserve {
        id: "yellowstone_usa",
        name: "Yellowstone National Park",
        country: "United States",
        latitude: 44.6,
        longitude: -110.5,
        image_ref: "YellowstoneNationalPark",
    },
    Reserve {
        id: "serengeti_tanzania",
        name: "Serengeti National Park",
        country: "Tanzania",
        latitude: -2.3,
        longitude: 34.8,
        image_ref: "SerengetiNationalPark",
    },
    Reserve {
        id: "amazon_brazil",
        name: "Amazon Rainforest",
        country: "Brazil",
        latitude: -3.4,
        longitude: -60.0,
        image_ref: "AmazonRainforest",
    },
    Reserve {
        id: "galapagos_ecuador",
        name: "Galápagos National Park",
        country: "Ecuador",
        latitude: -0.9,
        longitude: -89.6,
        image_ref: "GalapagosNationalPark",
    },
    Reserve {
        id: "plitvice_croatia",
        name: "Plitvice Lakes National Park",
        country: "Croatia",
        latitude: 44.9,
        longitude: 15.6,
        image_ref: "PlitviceLakesNationalPark",
    },
    Reserve {
        id: "banff_canada",
        name: "Banff National Park",
        country: "Canada",
        latitude: 51.5,
        longitude: -116.0,
        image_ref: "BanffNationalPark",
    },
    Reserve {
        id: "tsingy_madagascar",
        name: "Tsingy de Bemaraha National Park",
        country: "Madagascar",
        latitude: -18.9,
        longitude: 44.6,
        image_ref: "tsingyDeBemarahaNationalPark",
    },
];

/// All reserves, in catalog order
pub fn reserves() -> &'static [Reserve] {
    &RESERVES
}

/// Look up a reserve by its stable identifier
pub fn reserve(id: &str) -> Option<&'static Reserve> {
    RESERVES.iter().find(|r| r.id == id)
}
