//! Outbound WhatsApp and mail links.

use crate::content::{SALES_EMAIL, WHATSAPP_NUMBER};
use crate::types::Product;

pub const DEFAULT_CHAT_TEXT: &str = "Hi, I'm interested in Smith Instruments products";

/// `https://wa.me/<number>`, with a prefilled message when `text` is given.
pub fn whatsapp_link(text: Option<&str>) -> String {
    match text {
        Some(text) => format!(
            "https://wa.me/{WHATSAPP_NUMBER}?text={}",
            urlencoding::encode(text)
        ),
        None => format!("https://wa.me/{WHATSAPP_NUMBER}"),
    }
}

/// Short enquiry sent from a product card.
pub fn card_enquiry_text(product: &Product) -> String {
    format!("Hi, I am interested in {} (SKU: {})", product.name, product.sku)
}

/// Quote request sent from the product detail page.
pub fn quote_request_text(product: &Product) -> String {
    format!(
        "Hi, I would like to request a quote for: {} (SKU: {})",
        product.name, product.sku
    )
}

pub fn quote_mailto(product: &Product) -> String {
    let subject = format!("Quote Request: {}", product.sku);
    let body = format!(
        "I am interested in {} ({}). Please provide pricing.",
        product.name, product.sku
    );
    format!(
        "mailto:{SALES_EMAIL}?subject={}&body={}",
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::product_by_id;

    #[test]
    fn test_plain_link() {
        assert_eq!(whatsapp_link(None), "https://wa.me/923302449855");
    }

    #[test]
    fn test_default_text_is_encoded() {
        assert_eq!(
            whatsapp_link(Some(DEFAULT_CHAT_TEXT)),
            "https://wa.me/923302449855?text=Hi%2C%20I%27m%20interested%20in%20Smith%20Instruments%20products"
        );
    }

    #[test]
    fn test_quote_texts() {
        let product = product_by_id("gs-001").unwrap();
        let text = quote_request_text(product);
        assert!(text.starts_with("Hi, I would like to request a quote for: "));
        assert!(text.ends_with(&format!("(SKU: {})", product.sku)));
        assert!(card_enquiry_text(product).contains(product.name));
    }

    #[test]
    fn test_mailto_has_no_raw_spaces() {
        let product = product_by_id("gs-001").unwrap();
        let link = quote_mailto(product);
        assert!(link.starts_with("mailto:sales@smithinstruments.com?subject=Quote%20Request%3A%20"));
        assert!(!link.contains(' '));
        assert!(link.contains("Please%20provide%20pricing."));
    }
}
