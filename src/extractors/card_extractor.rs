//! One driver card to one [`DriverRecord`]

use scraper::ElementRef;

use super::field_extractor::{
    extract_car_manufacturer, extract_car_number, extract_driver_image, extract_driver_name,
    extract_driver_team, extract_grid_position,
};
use super::{DriverRecord, GridSelectors};
use crate::error::CardError;

/// Extract a full record from a card element.
///
/// A card is either complete (optional fields may be `None`) or rejected
/// with the first missing required element.
pub fn extract_card(card: &ElementRef, selectors: &GridSelectors) -> Result<DriverRecord, CardError> {
    Ok(DriverRecord {
        driver_name: extract_driver_name(card, &selectors.name)?,
        driver_team: extract_driver_team(card, &selectors.team)?,
        car_number: extract_car_number(card, &selectors.car_number),
        grid_position: extract_grid_position(card, &selectors.grid_position),
        car_manufacturer: extract_car_manufacturer(card, &selectors.manufacturer),
        driver_image: extract_driver_image(card, &selectors.driver_image)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::UNKNOWN;
    use scraper::{Html, Selector};

    fn extract(html: &str) -> Result<DriverRecord, CardError> {
        let fragment = Html::parse_fragment(html);
        let selector = Selector::parse(".grid-card").unwrap();
        let card = fragment.select(&selector).next().unwrap();
        extract_card(&card, &GridSelectors::default())
    }

    #[test]
    fn test_complete_card() {
        let record = extract(
            r#"
            <div class="grid-card">
                <img class="position" src="/img/liveGridPositions2013/1.png">
                <div class="driver-bust"><img src="/drivers/palou.png"></div>
                <h5>ALEX<br>PALOU</h5>
                <h6> Chip Ganassi Racing </h6>
                <img class="car-endplate" src="/Endplates/10-Palou.png">
                <img class="car-manufacturer" src="/logos/img_honda_logo.png">
            </div>
            "#,
        )
        .unwrap();

        assert_eq!(record.driver_name, "Alex Palou");
        assert_eq!(record.driver_team, "Chip Ganassi Racing");
        assert_eq!(record.car_number(), "10");
        assert_eq!(record.grid_position(), "1");
        assert_eq!(record.car_manufacturer(), "Honda");
        assert_eq!(record.driver_image, "/drivers/palou.png");
    }

    #[test]
    fn test_sentinels_fill_optional_fields() {
        let record = extract(
            r#"
            <div class="grid-card">
                <div class="driver-bust"><img src="/drivers/tba.png"></div>
                <h5>TBA</h5>
                <h6>TBA</h6>
                <img class="car-endplate" src="/Endplates/placeholder.png">
            </div>
            "#,
        )
        .unwrap();

        assert_eq!(record.car_number, None);
        assert_eq!(record.car_number(), UNKNOWN);
        assert_eq!(record.grid_position(), UNKNOWN);
        assert_eq!(record.car_manufacturer(), UNKNOWN);
    }

    #[test]
    fn test_missing_team_rejects_card() {
        let err = extract(
            r#"
            <div class="grid-card">
                <div class="driver-bust"><img src="/drivers/x.png"></div>
                <h5>NO<br>TEAM</h5>
            </div>
            "#,
        )
        .unwrap_err();

        assert_eq!(err, CardError::MissingElement { field: "team" });
    }
}
