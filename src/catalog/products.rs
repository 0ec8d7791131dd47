// Static product data.
// The full storefront inventory and the mock shopper identity.

use rust_decimal::Decimal;

use super::types::{Product, User};

const IMAGE_BASE: &str = "https://images.unsplash.com";

#[derive(Clone, Copy)]
struct Entry {
    id: &'static str,
    name: &'static str,
    price: i64,
    category: &'static str,
    brand: &'static str,
    description: &'static str,
    photo: &'static str,
    is_new: bool,
    is_on_sale: bool,
}

const fn entry(
    id: &'static str,
    name: &'static str,
    price: i64,
    category: &'static str,
    brand: &'static str,
    description: &'static str,
    photo: &'static str,
) -> Entry {
    Entry {
        id,
        name,
        price,
        category,
        brand,
        description,
        photo,
        is_new: false,
        is_on_sale: false,
    }
}

const fn new_drop(e: Entry) -> Entry {
    Entry { is_new: true, ..e }
}

const fn on_sale(e: Entry) -> Entry {
    Entry {
        is_on_sale: true,
        ..e
    }
}

const INVENTORY: &[Entry] = &[
    // Hoodies
    new_drop(entry(
        "1",
        "Cyber Glitch Hoodie",
        85,
        "Hoodies",
        "AICE",
        "Heavyweight fleece with distinctive glitch aesthetics.",
        "photo-1556905055-8f358a7a47b2",
    )),
    entry(
        "2",
        "Void Black Hoodie",
        95,
        "Hoodies",
        "AICE",
        "Pitch black, oversized, tactical drawstrings.",
        "photo-1578768079052-aa76e52ff62e",
    ),
    on_sale(entry(
        "3",
        "Neon Spike Hoodie",
        110,
        "Hoodies",
        "AICE",
        "Features reflective neon strips for night visibility.",
        "photo-1520423465871-08636dd8e58a",
    )),
    entry(
        "h4",
        "Stüssy 8-Ball Fleece",
        140,
        "Hoodies",
        "Stüssy",
        "Iconic 8-ball graphic on back. Relaxed fit.",
        "photo-1556906781-9a412961d28c",
    ),
    // T-Shirts
    entry(
        "4",
        "Acid Wash Tee",
        45,
        "T-Shirts",
        "AICE",
        "Vintage treated cotton with oversized fit.",
        "photo-1583743814966-8936f5b7be1a",
    ),
    new_drop(entry(
        "5",
        "System Failure Tee",
        50,
        "T-Shirts",
        "AICE",
        "Graphic tee featuring digital decay artwork.",
        "photo-1576566588028-4147f3842f27",
    )),
    entry(
        "6",
        "Oversized Blank",
        35,
        "T-Shirts",
        "Carhartt",
        "High density cotton, boxy fit, essential basic.",
        "photo-1521572163474-6864f9cf17ab",
    ),
    entry(
        "t4",
        "Box Logo Tee",
        180,
        "T-Shirts",
        "Supreme",
        "The classic box logo. You know what it is.",
        "photo-1503341455253-b2e72333dbdb",
    ),
    entry(
        "t5",
        "Vintage Nike Air",
        65,
        "T-Shirts",
        "Nike",
        "90s deadstock vintage tee.",
        "photo-1618354691373-d851c5c3a990",
    ),
    // Sneakers
    new_drop(entry(
        "7",
        "Strider X1",
        220,
        "Sneakers",
        "AICE",
        "High-top technical sneakers with ankle support.",
        "photo-1552346154-21d32810aba3",
    )),
    entry(
        "8",
        "Urban Runner Low",
        180,
        "Sneakers",
        "Adidas",
        "Lightweight, breathable, built for the concrete jungle.",
        "photo-1542291026-7eec264c27ff",
    ),
    on_sale(entry(
        "9",
        "Retro Chunky 90s",
        150,
        "Sneakers",
        "New Balance",
        "Dad shoes but make them fashion. Ultra comfortable.",
        "photo-1603808033192-082d6919d3e1",
    )),
    entry(
        "s4",
        "Jordan 1 High",
        350,
        "Sneakers",
        "Nike",
        "The sneaker that started it all. Mocha colorway.",
        "photo-1515955656352-a1fa3ffcd111",
    ),
    entry(
        "s5",
        "Yeezy Boost",
        400,
        "Sneakers",
        "Adidas",
        "Cloud-like comfort. Futuristic silhouette.",
        "photo-1584735175315-9d5df23860e6",
    ),
    entry(
        "s6",
        "Dunk Low Panda",
        210,
        "Sneakers",
        "Nike",
        "Black and white essential. Goes with everything.",
        "photo-1595950653106-6c9ebd614d3a",
    ),
    // Accessories
    entry(
        "10",
        "Platform Boots",
        160,
        "Accessories",
        "AICE",
        "Chunky sole leather boots for urban exploration.",
        "photo-1608256246200-53e635b5b65f",
    ),
    entry(
        "11",
        "Visor 3000",
        35,
        "Accessories",
        "AICE",
        "Futuristic shield sunglasses.",
        "photo-1511499767150-a48a237f0083",
    ),
    entry(
        "12",
        "Tactical Bag",
        85,
        "Accessories",
        "Carhartt",
        "Crossbody bag with modular attachment points.",
        "photo-1553062407-98eeb64c6a62",
    ),
    entry(
        "13",
        "Bucket Hat",
        40,
        "Accessories",
        "Stüssy",
        "Wide brim hat for incognito mode.",
        "photo-1565354972821-22877b10298a",
    ),
    entry(
        "a5",
        "Logo Beanie",
        45,
        "Accessories",
        "Supreme",
        "Knitted beanie with embroidered box logo.",
        "photo-1576871337632-b9aef4c17ab9",
    ),
    // Collectibles
    new_drop(entry(
        "14",
        "Vinyl Art Toy",
        150,
        "Collectibles",
        "AICE",
        "Limited edition vinyl figure. Numbered 1/500.",
        "photo-1616084666687-0b19280d859b",
    )),
    entry(
        "15",
        "Deck - Series 1",
        75,
        "Collectibles",
        "Supreme",
        "Maple wood skateboard deck with exclusive art print.",
        "photo-1520045864981-8c47da0a9c01",
    ),
];

/// Extra gallery shots shown after the main product image.
pub const GALLERY_PHOTOS: [&str; 3] = [
    "photo-1515886657613-9f3515b0c78f",
    "photo-1552346154-21d32810aba3",
    "photo-1605406930614-7c392cd5c7a4",
];

/// Build a full image URL for an Unsplash photo id.
pub fn image_url(photo: &str) -> String {
    format!(
        "{}/{}?auto=format&fit=crop&w=800&q=80",
        IMAGE_BASE, photo
    )
}

/// Materialize the static inventory.
pub fn inventory() -> Vec<Product> {
    INVENTORY
        .iter()
        .map(|e| Product {
            id: e.id.to_string(),
            name: e.name.to_string(),
            price: Decimal::from(e.price),
            image: image_url(e.photo),
            category: e.category.to_string(),
            brand: e.brand.to_string(),
            description: e.description.to_string(),
            is_new: e.is_new,
            is_on_sale: e.is_on_sale,
        })
        .collect()
}

/// The identity every login resolves to.
pub fn mock_user() -> User {
    User {
        name: "Alex Doe".to_string(),
        email: "alex@example.com".to_string(),
        id: "99482".to_string(),
        balance: Decimal::new(124050, 2),
    }
}
