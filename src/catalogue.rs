//! The hard-coded listing shown once the user is logged in.
//!
//! The filter sidebar is presentational: its options are listed but
//! nothing narrows the product grid.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub price: &'static str,
    pub image_label: &'static str,
}

pub const PRODUCTS: [Product; 8] = [
    Product {
        id: 1,
        name: "Bradley Burgess 2",
        price: "$20.00",
        image_label: "elephant",
    },
    Product {
        id: 2,
        name: "Allie Sharp",
        price: "$30.00",
        image_label: "bird-black",
    },
    Product {
        id: 3,
        name: "Nathaniel Baldwin",
        price: "$40.00",
        image_label: "horse",
    },
    Product {
        id: 4,
        name: "Ellie Rios",
        price: "$40.00",
        image_label: "owls",
    },
    Product {
        id: 5,
        name: "Small Bird",
        price: "$25.00",
        image_label: "bird-wood",
    },
    Product {
        id: 6,
        name: "Vase Wood",
        price: "$50.00",
        image_label: "vase",
    },
    Product {
        id: 7,
        name: "Black Pot",
        price: "$35.00",
        image_label: "pot",
    },
    Product {
        id: 8,
        name: "Green Bowl",
        price: "$45.00",
        image_label: "bowl",
    },
];

pub const CATEGORIES: [&str; 3] = ["Kids", "Mens", "Womens"];
pub const COLORS: [&str; 5] = ["Black", "Blue", "Gray", "Green", "Red"];
pub const BRANDS: [&str; 5] = ["Adidas", "Balenciaga", "Balmain", "Burberry", "Chloe"];

/// Price slider bounds and starting position, in dollars.
pub const PRICE_RANGE: (u32, u32) = (0, 200);
pub const DEFAULT_PRICE: u32 = 100;

pub fn products() -> &'static [Product] {
    &PRODUCTS
}
