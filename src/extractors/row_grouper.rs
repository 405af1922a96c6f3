//! Grouping of the flat header/card sibling stream into rows
//!
//! The grid container holds headers and cards as siblings. The first card of
//! each row is the odd one out: it sits inside a wrapper element directly
//! after the header, while the remaining cards of that row follow as bare
//! siblings.

use scraper::ElementRef;
use tracing::{debug, warn};

use super::card_extractor::extract_card;
use super::{Group, GridSelectors, Report, SkippedCard};

/// Fold the container's child elements into a [`Report`].
///
/// The current row is always the last group opened, so cards seen before the
/// first header have nowhere to go and are dropped.
pub fn group_rows(container: &ElementRef, selectors: &GridSelectors) -> Report {
    container
        .children()
        .filter_map(ElementRef::wrap)
        .fold(Report::default(), |mut report, element| {
            if is_header(&element, selectors) {
                let label = element.text().collect::<String>().trim().to_string();
                debug!(row = %label, "opening row");
                report.groups.push(Group::new(label));

                if let Some(card) = first_card_after(&element, selectors) {
                    push_card(&mut report, &card, selectors);
                }
            } else if is_card(&element, selectors) && !report.groups.is_empty() {
                push_card(&mut report, &element, selectors);
            }
            report
        })
}

fn is_header(element: &ElementRef, selectors: &GridSelectors) -> bool {
    element.value().name() == selectors.header_tag
}

fn is_card(element: &ElementRef, selectors: &GridSelectors) -> bool {
    element
        .value()
        .classes()
        .any(|class| class == selectors.card_class)
}

/// The card nested in the element immediately following a header
fn first_card_after<'a>(header: &ElementRef<'a>, selectors: &GridSelectors) -> Option<ElementRef<'a>> {
    let wrapper = header.next_siblings().find_map(ElementRef::wrap)?;
    wrapper.select(&selectors.card).next()
}

fn push_card(report: &mut Report, card: &ElementRef, selectors: &GridSelectors) {
    let Some(group) = report.groups.last_mut() else {
        return;
    };

    match extract_card(card, selectors) {
        Ok(record) => group.records.push(record),
        Err(e) => {
            warn!(row = %group.label, "skipping card: {}", e);
            report.skipped.push(SkippedCard {
                row: group.label.clone(),
                reason: e,
            });
        }
    }
}
