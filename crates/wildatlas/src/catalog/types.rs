//! Catalog data types
//!
//! All fields are `&'static str` because every record is compiled into the
//! binary; there is no loading or mutation path.

use serde::Serialize;

/// A nature reserve shown on the map and in the list
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reserve {
    /// Stable identifier, referenced by the favorites store
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Country (or countries) the reserve lies in
    pub country: &'static str,
    /// Map pin latitude
    pub latitude: f64,
    /// Map pin longitude
    pub longitude: f64,
    /// Asset name of the reserve photo
    pub image_ref: &'static str,
}

/// One expandable card on a reserve's detail page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FactCard {
    pub emoji: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Full detail page content for a single reserve
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReserveDetail {
    /// Matches the id of the corresponding [`Reserve`]
    pub reserve_id: &'static str,
    pub name: &'static str,
    pub country: &'static str,
    pub image_ref: &'static str,
    /// Introductory paragraph shown above the fact cards
    pub intro: &'static str,
    /// Always three cards: biodiversity, landscape, conservation
    pub fact_cards: &'static [FactCard],
}

/// A standalone interesting fact, independent of any one detail page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fact {
    pub title: &'static str,
    pub description: &'static str,
}
