//! Shopping Cart Business Logic Helpers
//!
//! This module contains the PLU to item id rewrite of a cart.

use super::models::*;
use super::plu::PluIndex;
use serde_json::{Map, Value};

/// Builds an enriched copy of `cart`, replacing every `plunum` on items and
/// modifiers with the `itemId` resolved through `index`.
///
/// The input is only borrowed; a new record graph is returned. Codes missing
/// from the index resolve to `itemId: null`. Absent `order`, `items` or
/// `modifiers` stay absent and `null` ones stay `null`.
pub fn enrich_cart(cart: &Cart, index: &PluIndex) -> EnrichedCart {
    EnrichedCart {
        order: cart.order.map_ref(|order| enrich_order(order, index)),
        extra: cart.extra.clone(),
    }
}

fn enrich_order(order: &Order, index: &PluIndex) -> EnrichedOrder {
    EnrichedOrder {
        items: order.items.map_ref(|items| {
            items
                .iter()
                .map(|item| enrich_line_item(item, index))
                .collect()
        }),
        extra: order.extra.clone(),
    }
}

fn enrich_line_item(item: &LineItem, index: &PluIndex) -> EnrichedLineItem {
    EnrichedLineItem {
        item_id: resolve_item_id(item.plunum.as_ref(), index),
        modifiers: item.modifiers.map_ref(|modifiers| {
            modifiers
                .iter()
                .map(|modifier| EnrichedModifier {
                    item_id: resolve_item_id(modifier.plunum.as_ref(), index),
                    extra: without_item_id(&modifier.extra),
                })
                .collect()
        }),
        extra: without_item_id(&item.extra),
    }
}

fn resolve_item_id(plunum: Option<&PluCode>, index: &PluIndex) -> Option<i64> {
    let plunum = plunum?;
    let item_id = index.resolve(&plunum.to_string());
    if item_id.is_none() {
        tracing::debug!("No item id for PLU {}", plunum);
    }
    item_id
}

// A stale `itemId` in the source would collide with the resolved one.
fn without_item_id(extra: &Map<String, Value>) -> Map<String, Value> {
    let mut extra = extra.clone();
    extra.remove("itemId");
    extra
}

/// Produces a one-line summary of an enriched cart for logging.
///
/// Example output: `"3 item(s), 1 unresolved"`.
pub fn format_enrichment_summary(cart: &EnrichedCart) -> String {
    let items = cart
        .order
        .filled()
        .and_then(|order| order.items.filled())
        .map(Vec::as_slice)
        .unwrap_or_default();

    let unresolved = items
        .iter()
        .map(|item| {
            let modifiers = item
                .modifiers
                .filled()
                .map(Vec::as_slice)
                .unwrap_or_default();
            usize::from(item.item_id.is_none())
                + modifiers.iter().filter(|m| m.item_id.is_none()).count()
        })
        .sum::<usize>();

    format!("{} item(s), {} unresolved", items.len(), unresolved)
}
