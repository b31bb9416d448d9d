use crate::catalogue::{self, BRANDS, CATEGORIES, COLORS, DEFAULT_PRICE, PRICE_RANGE};
use crate::view::{Status, View, ViewState};
use std::fmt::Write;

/// Plain-text rendition of the current screen.
pub fn render(state: &ViewState) -> String {
    let mut page = String::new();

    if let Some(message) = &state.message {
        let marker = match state.status {
            Status::Error => "[x]",
            _ => "[ok]",
        };
        let _ = writeln!(page, "{} {}", marker, message);
    }

    match state.view {
        View::Login => {
            page.push_str("== Log In ==\nUse your registered account.\n");
            page.push_str("No account yet? Type `switch` to register.\n");
        }
        View::Register => {
            page.push_str("== Register ==\nCreate a new account to get started.\n");
            page.push_str("Already registered? Type `switch` to log in.\n");
        }
        View::ProductListing => render_listing(&mut page),
    }
    page
}

fn render_listing(page: &mut String) {
    page.push_str("== Products ==\n");
    for product in catalogue::products() {
        let _ = writeln!(
            page,
            "{:>2}. {:<20} {:>8}  ({})",
            product.id, product.name, product.price, product.image_label
        );
    }
    let _ = writeln!(page, "Category: {}", CATEGORIES.join(", "));
    let _ = writeln!(
        page,
        "Filter: {}$ (range {}-{})",
        DEFAULT_PRICE, PRICE_RANGE.0, PRICE_RANGE.1
    );
    let _ = writeln!(page, "Color: {}", COLORS.join(", "));
    let _ = writeln!(page, "Brand: {}", BRANDS.join(", "));
    page.push_str("Type `logout` to sign out.\n");
}
